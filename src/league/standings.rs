use sqlx::PgPool;

use crate::db::helpers::require_season;
use crate::db::teams::get_standings_by_season;
use crate::error::PoolError;
use crate::models::team::SeasonStandingsResponse;

/// Service responsible for reading league standings
#[derive(Debug)]
pub struct StandingsService {
    pool: PgPool,
}

impl StandingsService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn get_league_standings(&self, season: &str) -> Result<SeasonStandingsResponse, PoolError> {
        let season = require_season(&self.pool, season).await?;
        let standings = get_standings_by_season(&self.pool, season.id).await?;

        Ok(SeasonStandingsResponse {
            season: season.season,
            standings,
        })
    }
}
