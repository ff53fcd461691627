use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;
use uuid::Uuid;

use crate::scoring::rounds::RoundScore;

/// Persisted scoreboard snapshot for one user in one season.
#[derive(Debug, FromRow, Serialize, Deserialize, Clone)]
pub struct SeasonResult {
    pub id: i32,
    pub season_id: i32,
    pub user_id: Uuid,
    pub total: i32,
    pub finished: i32,
    pub correct: i32,
    pub incorrect: i32,
    pub tip_1: i32,
    pub tip_x: i32,
    pub tip_2: i32,
    pub round_stats: Json<Vec<RoundScore>>,
    pub last_update: DateTime<Utc>,
}

#[derive(Debug, FromRow, Serialize, Deserialize, Clone)]
pub struct ResultWithUser {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub result: SeasonResult,
    pub username: String,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct RecalculationReport {
    pub season: String,
    pub users_processed: usize,
    pub elapsed_ms: u128,
}
