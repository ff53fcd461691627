pub mod result_handler;
pub mod season_handler;
pub mod settings_handler;
pub mod sync_handler;
pub mod user_handler;
