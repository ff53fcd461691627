pub mod auth;
pub mod common;
pub mod fixture;
pub mod result;
pub mod season;
pub mod settings;
pub mod sync;
pub mod team;
pub mod tip;
pub mod user;
