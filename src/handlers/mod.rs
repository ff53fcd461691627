pub mod admin;
pub mod auth_handler;
pub mod backend_health_handler;
pub mod registration_handler;
pub mod season_handler;
pub mod tip_handler;
