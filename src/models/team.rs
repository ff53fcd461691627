use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, FromRow, Serialize, Deserialize, Clone, PartialEq)]
pub struct Team {
    pub team_id: i32,
    pub name: String,
    pub logo: Option<String>,
}

#[derive(Debug, FromRow, Serialize, Deserialize, Clone)]
pub struct TeamStanding {
    pub id: i32,
    pub season_id: i32,
    pub team_id: i32,
    pub rank: i32,
    pub points: i32,
    pub games_played: i32,
    pub wins: i32,
    pub draws: i32,
    pub losses: i32,
    pub goals_scored: i32,
    pub goals_conceded: i32,
    // Recent form, newest last, at most five characters ("WWDLW")
    pub form: String,
    pub status: String,
    pub promotion: Option<String>,
    pub last_update: DateTime<Utc>,
}

#[derive(Debug, FromRow, Serialize, Deserialize, Clone)]
pub struct StandingWithTeam {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub standing: TeamStanding,
    pub name: String,
    pub logo: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SeasonStandingsResponse {
    pub season: String,
    pub standings: Vec<StandingWithTeam>,
}
