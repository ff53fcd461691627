//! Wire shapes of the football data API. Only the fields the pool reads.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// Every API response wraps its items in `response`.
#[derive(Debug, Deserialize, Serialize)]
pub struct ApiEnvelope<T> {
    pub response: Vec<T>,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct FixturePayload {
    pub fixture: FixtureInfo,
    pub teams: FixtureTeams,
    pub goals: FixtureGoals,
    pub league: FixtureLeague,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct FixtureInfo {
    pub id: i64,
    pub date: DateTime<FixedOffset>,
    pub status: FixtureStatusInfo,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct FixtureStatusInfo {
    pub short: String,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct FixtureTeams {
    pub home: TeamRef,
    pub away: TeamRef,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct TeamRef {
    pub id: i64,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub logo: Option<String>,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct FixtureGoals {
    pub home: Option<i32>,
    pub away: Option<i32>,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct FixtureLeague {
    /// "<label> - <N>", e.g. "Regular Season - 12"
    pub round: String,
}

/// One item of the standings response: `response[i].league.standings[group][row]`.
#[derive(Debug, Deserialize, Serialize)]
pub struct StandingsResponseItem {
    pub league: StandingsLeague,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct StandingsLeague {
    /// Rows stay untyped here so one bad row can be skipped on its own.
    pub standings: Vec<Vec<serde_json::Value>>,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct StandingPayload {
    pub rank: i32,
    pub team: StandingTeam,
    pub points: i32,
    #[serde(default)]
    pub form: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    pub all: StandingRecord,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct StandingTeam {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub logo: Option<String>,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct StandingRecord {
    pub played: i32,
    pub win: i32,
    pub draw: i32,
    pub lose: i32,
    pub goals: StandingGoals,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct StandingGoals {
    #[serde(rename = "for")]
    pub scored: i32,
    #[serde(rename = "against")]
    pub conceded: i32,
}
