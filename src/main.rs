use actix_cors::Cors;
use actix_web::{
    middleware::Logger,
    web::{self, Data},
    App, HttpServer,
};
use config::Config;
use controllers::{biodata_controller, stats_controller, user_controller};
use dotenv::dotenv;
use services::db::Database;

mod config;
mod controllers;
mod dtos;
mod models;
mod services;

// Origins the frontend is served from
const ALLOWED_ORIGINS: &[&str] = &["http://localhost:5173"];

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok(); // Load the .env file
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = Config::init();
    let db = Database::init(&config.database_url).await;
    let db_data = Data::new(db);
    let port = config.port;

    log::info!("E-Matrimony server is running on port: {}", port);

    HttpServer::new(move || {
        let logger = Logger::default();
        // Configure CORS for the fixed set of frontend origins
        let cors = ALLOWED_ORIGINS
            .iter()
            .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
            .allow_any_method()
            .allow_any_header()
            .supports_credentials();
        App::new()
            .wrap(logger)
            .wrap(cors)
            .app_data(db_data.clone())
            .route("/", web::get().to(index))
            .configure(biodata_controller::init)
            .service(
                web::scope("/dashboard")
                    .configure(user_controller::init)
                    .configure(stats_controller::init),
            )
    })
    .bind(("0.0.0.0", port))?
    .run()
    .await
}

async fn index() -> &'static str {
    "E-Matrimony server is running"
}
