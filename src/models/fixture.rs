use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::postgres::PgRow;
use sqlx::{FromRow, Row};

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum FixtureStatus {
    NotStarted,
    Finished,
    Postponed,
}

impl FixtureStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            FixtureStatus::NotStarted => "not_started",
            FixtureStatus::Finished => "finished",
            FixtureStatus::Postponed => "postponed",
        }
    }

    pub fn is_finished(&self) -> bool {
        matches!(self, FixtureStatus::Finished)
    }

    /// Status after a sync reports `reported`. Finished is terminal.
    pub fn advance(self, reported: FixtureStatus) -> FixtureStatus {
        if self.is_finished() {
            self
        } else {
            reported
        }
    }
}

impl From<&str> for FixtureStatus {
    fn from(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "finished" => FixtureStatus::Finished,
            "postponed" => FixtureStatus::Postponed,
            _ => FixtureStatus::NotStarted,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Fixture {
    pub fixture_id: i32,
    pub season_id: i32,
    pub round: i32,
    pub kickoff: DateTime<Utc>,
    pub status: FixtureStatus,
    pub home_team_id: i32,
    pub away_team_id: i32,
    pub home_score: Option<i32>,
    pub away_score: Option<i32>,
}

impl<'r> FromRow<'r, PgRow> for Fixture {
    fn from_row(row: &'r PgRow) -> Result<Self, sqlx::Error> {
        let status: String = row.try_get("status")?;
        Ok(Self {
            fixture_id: row.try_get("fixture_id")?,
            season_id: row.try_get("season_id")?,
            round: row.try_get("round")?,
            kickoff: row.try_get("kickoff")?,
            status: FixtureStatus::from(status.as_str()),
            home_team_id: row.try_get("home_team_id")?,
            away_team_id: row.try_get("away_team_id")?,
            home_score: row.try_get("home_score")?,
            away_score: row.try_get("away_score")?,
        })
    }
}

/// Fixture joined with both team names, as shown in listings.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct FixtureWithTeams {
    #[serde(flatten)]
    pub fixture: Fixture,
    pub home_team_name: String,
    pub away_team_name: String,
}

impl<'r> FromRow<'r, PgRow> for FixtureWithTeams {
    fn from_row(row: &'r PgRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            fixture: Fixture::from_row(row)?,
            home_team_name: row.try_get("home_team_name")?,
            away_team_name: row.try_get("away_team_name")?,
        })
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SeasonFixturesResponse {
    pub fixtures: Vec<FixtureWithTeams>,
    pub next_fixture: Option<FixtureWithTeams>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finished_never_moves_back() {
        assert_eq!(FixtureStatus::Finished.advance(FixtureStatus::NotStarted), FixtureStatus::Finished);
        assert_eq!(FixtureStatus::Finished.advance(FixtureStatus::Postponed), FixtureStatus::Finished);
        assert_eq!(FixtureStatus::NotStarted.advance(FixtureStatus::Finished), FixtureStatus::Finished);
        assert_eq!(FixtureStatus::Postponed.advance(FixtureStatus::NotStarted), FixtureStatus::NotStarted);
    }

    #[test]
    fn status_from_stored_value() {
        assert_eq!(FixtureStatus::from("finished"), FixtureStatus::Finished);
        assert_eq!(FixtureStatus::from("POSTPONED"), FixtureStatus::Postponed);
        assert_eq!(FixtureStatus::from("not_started"), FixtureStatus::NotStarted);
        assert_eq!(FixtureStatus::from(FixtureStatus::Finished.as_str()), FixtureStatus::Finished);
    }
}
