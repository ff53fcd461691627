//! Ingestion of fixtures and standings from the football data API.

pub mod client;
pub mod mapping;
pub mod payload;

pub use client::FootballApiClient;
