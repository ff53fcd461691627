use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, FromRow, Serialize, Deserialize, Clone)]
pub struct PoolSettings {
    pub last_update: Option<DateTime<Utc>>,
    pub remaining_requests: Option<i32>,
    pub allow_late_modification: bool,
}
