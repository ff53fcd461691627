use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::db::fixtures::get_fixtures_with_teams;
use crate::db::helpers::require_season;
use crate::error::PoolError;
use crate::league::timing::{nearest_fixture, week_bounds};
use crate::models::fixture::{FixtureWithTeams, SeasonFixturesResponse};

/// Read side of the fixture list
#[derive(Debug, Clone)]
pub struct FixtureService {
    pool: PgPool,
}

impl FixtureService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// All fixtures of a season plus the one nearest to `now`.
    pub async fn season_fixtures(&self, season: &str, now: DateTime<Utc>) -> Result<SeasonFixturesResponse, PoolError> {
        let season = require_season(&self.pool, season).await?;
        let fixtures = get_fixtures_with_teams(&self.pool, season.id, None).await?;
        let next_fixture = nearest_fixture(&fixtures, now).cloned();

        Ok(SeasonFixturesResponse { fixtures, next_fixture })
    }

    /// Fixtures kicking off in the Monday to Sunday week around `now`.
    pub async fn week_fixtures(&self, season: &str, now: DateTime<Utc>) -> Result<Vec<FixtureWithTeams>, PoolError> {
        let season = require_season(&self.pool, season).await?;
        Ok(get_fixtures_with_teams(&self.pool, season.id, Some(week_bounds(now))).await?)
    }
}
