use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::postgres::PgRow;
use sqlx::{FromRow, Row};
use uuid::Uuid;

use crate::models::fixture::FixtureWithTeams;
use crate::scoring::outcome::{Outcome, TipVerdict};

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Tip {
    pub id: i32,
    pub fixture_id: i32,
    pub symbol: Outcome,
    pub correct: TipVerdict,
    pub user_id: Uuid,
    pub updated_at: DateTime<Utc>,
}

impl<'r> FromRow<'r, PgRow> for Tip {
    fn from_row(row: &'r PgRow) -> Result<Self, sqlx::Error> {
        let symbol: String = row.try_get("symbol")?;
        let correct: i32 = row.try_get("correct")?;
        Ok(Self {
            id: row.try_get("id")?,
            fixture_id: row.try_get("fixture_id")?,
            symbol: symbol.parse().map_err(|e| sqlx::Error::Decode(Box::new(e)))?,
            correct: TipVerdict::from(correct),
            user_id: row.try_get("user_id")?,
            updated_at: row.try_get("updated_at")?,
        })
    }
}

/// One entry of a tip submission batch, as sent by the client.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct TipSubmissionItem {
    pub fixture_id: i32,
    pub value: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct TipItemOutcome {
    pub fixture_id: i32,
    pub accepted: bool,
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct TipSubmissionReport {
    pub accepted: usize,
    pub rejected: usize,
    pub items: Vec<TipItemOutcome>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct UserTipsQuery {
    pub username: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct TipWithFixture {
    pub tip: Tip,
    pub fixture: FixtureWithTeams,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct UserTipsResponse {
    pub username: String,
    pub tips: Vec<TipWithFixture>,
}
