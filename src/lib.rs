use actix_web::{http, web, App, HttpServer};
use actix_web::dev::Server;
use tracing_actix_web::TracingLogger;
use sqlx::PgPool;
use std::net::TcpListener;
use actix_cors::Cors;

pub mod config;
mod routes;
mod handlers;
pub mod models;
pub mod utils;
pub mod middleware;
pub mod db;
pub mod error;
pub mod league;
pub mod scoring;
pub mod services;
pub mod sync;
pub mod telemetry;
use crate::routes::init_routes;
use crate::config::football_api::FootballApiSettings;
use crate::config::jwt::JwtSettings;
use crate::sync::FootballApiClient;

pub fn run(
    listener: TcpListener,
    db_pool: PgPool,
    jwt_settings: JwtSettings,
    football_api: FootballApiSettings,
) -> Result<Server, std::io::Error> {
    // Wrap using web::Data, which boils down to an Arc smart pointer
    let db_pool_data = web::Data::new(db_pool);
    let jwt_settings = web::Data::new(jwt_settings);
    let football_api_client = FootballApiClient::new(football_api)
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))?;
    let football_api_client = web::Data::new(football_api_client);

    let server = HttpServer::new(move || {
        let cors = Cors::default()
            .allowed_origin("http://localhost:3000")
            .allowed_origin("http://localhost:5173")
            .allowed_methods(vec!["GET", "POST"])
            .allowed_headers(vec![
                http::header::AUTHORIZATION,
                http::header::ACCEPT,
                http::header::CONTENT_TYPE,
            ])
            .supports_credentials()
            .max_age(3600);

        App::new()
            .wrap(TracingLogger::default())
            .wrap(cors)
            // Get a pointer copy and attach it to the application state
            .app_data(db_pool_data.clone())
            .app_data(jwt_settings.clone())
            .app_data(football_api_client.clone())
            .configure(init_routes)
    })
    .listen(listener)?
    .run();

    Ok(server)
}
