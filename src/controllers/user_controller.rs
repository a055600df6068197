use actix_web::{
    get, patch,
    web::{self, Data, Json, Path, Query},
    Error,
};
use mongodb::bson::oid::ObjectId;
use mongodb::results::UpdateResult;

use crate::{
    dtos::user::manage_users::{FilterUserDto, ManageUsersQuery, UserUpdateResponse},
    services::db::Database,
};

use super::store_error;

// Initialize routes
pub fn init(cfg: &mut web::ServiceConfig) {
    cfg.service(manage_users)
        .service(make_admin)
        .service(make_premium);
}

#[get("/manage-users")]
pub async fn manage_users(
    db: Data<Database>,
    query: Query<ManageUsersQuery>,
) -> Result<Json<Vec<FilterUserDto>>, Error> {
    let query = query.into_inner();
    // An absent or empty search term matches every pending request.
    let search = query.search.unwrap_or_default();

    let users = db
        .search_premium_requests(&search)
        .await
        .map_err(|e| store_error("Failed to search users", e))?;

    let filtered_users: Vec<FilterUserDto> =
        users.iter().map(FilterUserDto::filter_user).collect();

    Ok(Json(filtered_users))
}

#[patch("/make-admin/{id}")]
pub async fn make_admin(
    path: Path<String>,
    db: Data<Database>,
) -> Result<Json<UserUpdateResponse>, Error> {
    let id = parse_user_id(&path.into_inner())?;

    let result = db
        .make_admin(id)
        .await
        .map_err(|e| store_error("Failed to promote user", e))?;

    user_update_response(result, "User promoted to admin")
}

#[patch("/make-premium/{id}")]
pub async fn make_premium(
    path: Path<String>,
    db: Data<Database>,
) -> Result<Json<UserUpdateResponse>, Error> {
    let id = parse_user_id(&path.into_inner())?;

    let result = db
        .make_premium(id)
        .await
        .map_err(|e| store_error("Failed to grant premium", e))?;

    user_update_response(result, "User granted premium")
}

fn parse_user_id(id: &str) -> Result<ObjectId, Error> {
    ObjectId::parse_str(id).map_err(|e| {
        actix_web::error::ErrorBadRequest(format!("Failed to convert to objectid: {}", e))
    })
}

fn user_update_response(
    result: UpdateResult,
    message: &str,
) -> Result<Json<UserUpdateResponse>, Error> {
    if result.matched_count == 0 {
        return Err(actix_web::error::ErrorNotFound(
            "No user found with the given id",
        ));
    }

    Ok(Json(UserUpdateResponse {
        message: message.to_string(),
        modified_count: result.modified_count,
    }))
}
