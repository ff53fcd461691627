use chrono::{DateTime, Utc};
use serde_json::Value;

use crate::error::PoolError;
use crate::models::common::SkippedItem;
use crate::models::fixture::{Fixture, FixtureStatus};
use crate::models::team::Team;
use crate::sync::payload::{FixturePayload, StandingPayload, StandingsResponseItem, TeamRef};

const MAX_FORM_LENGTH: usize = 5;
const MAX_TEAM_NAME_LENGTH: usize = 100;
const MAX_LOGO_LENGTH: usize = 200;
const MAX_STANDING_STATUS_LENGTH: usize = 20;
const MAX_PROMOTION_LENGTH: usize = 100;

/// A fixture as reported by the API, normalised but not yet stored.
#[derive(Debug, Clone, PartialEq)]
pub struct IncomingFixture {
    pub fixture_id: i32,
    pub round: i32,
    pub kickoff: DateTime<Utc>,
    pub status: FixtureStatus,
    pub home_team: Team,
    pub away_team: Team,
    pub home_score: Option<i32>,
    pub away_score: Option<i32>,
}

impl IncomingFixture {
    /// Fixture row to write for `season_id`, given what is already stored.
    /// A finished fixture keeps its status and final score.
    pub fn merge(&self, season_id: i32, existing: Option<&Fixture>) -> Fixture {
        let mut merged = Fixture {
            fixture_id: self.fixture_id,
            season_id: existing.map(|f| f.season_id).unwrap_or(season_id),
            round: self.round,
            kickoff: self.kickoff,
            status: self.status,
            home_team_id: self.home_team.team_id,
            away_team_id: self.away_team.team_id,
            home_score: self.home_score,
            away_score: self.away_score,
        };

        if let Some(existing) = existing {
            merged.status = existing.status.advance(self.status);
            if existing.status.is_finished() {
                merged.home_score = existing.home_score;
                merged.away_score = existing.away_score;
            }
        }

        merged
    }
}

/// A league-table row as reported by the API.
#[derive(Debug, Clone, PartialEq)]
pub struct IncomingStanding {
    pub team: Team,
    pub rank: i32,
    pub points: i32,
    pub games_played: i32,
    pub wins: i32,
    pub draws: i32,
    pub losses: i32,
    pub goals_scored: i32,
    pub goals_conceded: i32,
    pub form: String,
    pub status: String,
    pub promotion: Option<String>,
}

/// Round number from a "<label> - <N>" descriptor.
pub fn parse_round(label: &str) -> Result<i32, PoolError> {
    let (_, number) = label
        .rsplit_once(" - ")
        .ok_or_else(|| PoolError::Parse(format!("Round label '{}' has no ' - ' separator", label)))?;

    let round: i32 = number
        .trim()
        .parse()
        .map_err(|_| PoolError::Parse(format!("Round label '{}' does not end in a number", label)))?;

    if round < 1 {
        return Err(PoolError::Parse(format!("Round label '{}' is not a positive round", label)));
    }
    Ok(round)
}

/// Map the API's short status code onto the three states the pool tracks.
pub fn map_status(short: &str) -> FixtureStatus {
    match short.trim().to_uppercase().as_str() {
        "FT" | "AET" | "PEN" => FixtureStatus::Finished,
        "PST" | "CANC" | "ABD" | "SUSP" => FixtureStatus::Postponed,
        _ => FixtureStatus::NotStarted,
    }
}

fn external_id(id: i64, what: &str) -> Result<i32, PoolError> {
    i32::try_from(id).map_err(|_| PoolError::Parse(format!("{} id {} is out of range", what, id)))
}

/// Text columns have fixed widths; longer values would fail the upsert.
fn bounded(value: String, max: usize, what: &str) -> Result<String, PoolError> {
    let length = value.chars().count();
    if length > max {
        return Err(PoolError::Parse(format!(
            "{} is {} characters long, at most {} are allowed",
            what, length, max
        )));
    }
    Ok(value)
}

fn bounded_team(team_id: i32, name: String, logo: Option<String>) -> Result<Team, PoolError> {
    Ok(Team {
        team_id,
        name: bounded(name, MAX_TEAM_NAME_LENGTH, "Team name")?,
        logo: logo
            .map(|logo| bounded(logo, MAX_LOGO_LENGTH, "Team logo"))
            .transpose()?,
    })
}

fn team_from_ref(team: &TeamRef) -> Result<Team, PoolError> {
    let team_id = external_id(team.id, "Team")?;
    bounded_team(
        team_id,
        team.name.clone().unwrap_or_else(|| format!("Team {}", team_id)),
        team.logo.clone(),
    )
}

fn goals(value: Option<i32>, fixture_id: i64) -> Result<Option<i32>, PoolError> {
    match value {
        Some(goals) if goals < 0 => Err(PoolError::Parse(format!(
            "Fixture {} has a negative score {}",
            fixture_id, goals
        ))),
        other => Ok(other),
    }
}

pub fn map_fixture(payload: &FixturePayload) -> Result<IncomingFixture, PoolError> {
    let status = map_status(&payload.fixture.status.short);
    if status.is_finished() && (payload.goals.home.is_none() || payload.goals.away.is_none()) {
        return Err(PoolError::Parse(format!(
            "Fixture {} is finished but has no final score",
            payload.fixture.id
        )));
    }

    Ok(IncomingFixture {
        fixture_id: external_id(payload.fixture.id, "Fixture")?,
        round: parse_round(&payload.league.round)?,
        kickoff: payload.fixture.date.with_timezone(&Utc),
        status,
        home_team: team_from_ref(&payload.teams.home)?,
        away_team: team_from_ref(&payload.teams.away)?,
        home_score: goals(payload.goals.home, payload.fixture.id)?,
        away_score: goals(payload.goals.away, payload.fixture.id)?,
    })
}

pub fn map_standing(payload: &StandingPayload) -> Result<IncomingStanding, PoolError> {
    let team_id = external_id(payload.team.id, "Team")?;
    let form: String = payload
        .form
        .as_deref()
        .unwrap_or_default()
        .chars()
        .rev()
        .take(MAX_FORM_LENGTH)
        .collect::<Vec<_>>()
        .into_iter()
        .rev()
        .collect();

    Ok(IncomingStanding {
        team: bounded_team(team_id, payload.team.name.clone(), payload.team.logo.clone())?,
        rank: payload.rank,
        points: payload.points,
        games_played: payload.all.played,
        wins: payload.all.win,
        draws: payload.all.draw,
        losses: payload.all.lose,
        goals_scored: payload.all.goals.scored,
        goals_conceded: payload.all.goals.conceded,
        form,
        status: bounded(
            payload.status.clone().unwrap_or_default(),
            MAX_STANDING_STATUS_LENGTH,
            "Standing status",
        )?,
        promotion: payload
            .description
            .clone()
            .map(|promotion| bounded(promotion, MAX_PROMOTION_LENGTH, "Promotion"))
            .transpose()?,
    })
}

/// Best-effort id of a raw item, for skip reports.
fn raw_id(item: &Value, path: &[&str]) -> Option<i64> {
    path.iter()
        .try_fold(item, |value, key| value.get(*key))
        .and_then(Value::as_i64)
}

/// Normalise a raw fixtures response. Items that fail to map are skipped and
/// reported; the rest come back ordered by kickoff.
pub fn prepare_fixtures(raw: Vec<Value>) -> (Vec<IncomingFixture>, Vec<SkippedItem>) {
    let mut fixtures = Vec::with_capacity(raw.len());
    let mut skipped = Vec::new();

    for item in raw {
        let id = raw_id(&item, &["fixture", "id"]);
        let mapped = serde_json::from_value::<FixturePayload>(item)
            .map_err(PoolError::from)
            .and_then(|payload| map_fixture(&payload));

        match mapped {
            Ok(fixture) => fixtures.push(fixture),
            Err(e) => {
                tracing::warn!("Skipping fixture {:?}: {}", id, e);
                skipped.push(SkippedItem { external_id: id, reason: e.to_string() });
            }
        }
    }

    fixtures.sort_by(|a, b| a.kickoff.cmp(&b.kickoff).then(a.fixture_id.cmp(&b.fixture_id)));
    (fixtures, skipped)
}

/// Normalise a raw standings response. Every group of every league item is
/// read; rows that fail to map are skipped and reported.
pub fn prepare_standings(raw: Vec<Value>) -> (Vec<IncomingStanding>, Vec<SkippedItem>) {
    let mut standings = Vec::new();
    let mut skipped = Vec::new();

    for item in raw {
        let league = match serde_json::from_value::<StandingsResponseItem>(item) {
            Ok(league) => league,
            Err(e) => {
                tracing::warn!("Skipping standings block: {}", e);
                skipped.push(SkippedItem { external_id: None, reason: PoolError::from(e).to_string() });
                continue;
            }
        };

        for row in league.league.standings.into_iter().flatten() {
            let id = raw_id(&row, &["team", "id"]);
            let mapped = serde_json::from_value::<StandingPayload>(row)
                .map_err(PoolError::from)
                .and_then(|payload| map_standing(&payload));

            match mapped {
                Ok(standing) => standings.push(standing),
                Err(e) => {
                    tracing::warn!("Skipping standing for team {:?}: {}", id, e);
                    skipped.push(SkippedItem { external_id: id, reason: e.to_string() });
                }
            }
        }
    }

    standings.sort_by_key(|s| s.rank);
    (standings, skipped)
}
