pub mod biodata_controller;
pub mod stats_controller;
pub mod user_controller;

// Store failures are logged here and collapsed to a generic 500 so no driver
// detail reaches the client.
pub(crate) fn store_error(context: &'static str, err: mongodb::error::Error) -> actix_web::Error {
    log::error!("{}: {}", context, err);
    actix_web::error::ErrorInternalServerError("Internal server error")
}
