use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, FromRow, Serialize, Deserialize, Clone, PartialEq)]
pub struct Season {
    pub id: i32,
    /// Starting year, e.g. "2025"
    pub season: String,
    /// e.g. "2025-26"
    pub display_name: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CreateSeasonRequest {
    pub season: String,
}
