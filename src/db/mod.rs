pub mod fixtures;
pub mod helpers;
pub mod results;
pub mod seasons;
pub mod settings;
pub mod teams;
pub mod tips;
pub mod users;
