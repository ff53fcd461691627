use std::collections::HashMap;

use chrono::Utc;
use serde_json::Value;
use sqlx::PgPool;

use crate::db::fixtures::{get_fixtures_by_ids, upsert_fixture};
use crate::db::helpers::require_season;
use crate::db::settings::record_api_call;
use crate::db::teams::{ensure_team, upsert_standing, upsert_team};
use crate::error::PoolError;
use crate::models::common::SkippedItem;
use crate::models::fixture::Fixture;
use crate::models::sync::SyncReport;
use crate::sync::client::FootballApiClient;
use crate::sync::mapping::{prepare_fixtures, prepare_standings};

/// Writes API fixtures and standings into the pool's tables.
///
/// Malformed items are skipped and reported; everything else in the batch is
/// committed together.
#[derive(Debug, Clone)]
pub struct SyncService {
    pool: PgPool,
}

impl SyncService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    #[tracing::instrument(name = "Ingest fixtures", skip(self, raw), fields(items = raw.len()))]
    pub async fn ingest_fixtures(&self, season: &str, raw: Vec<Value>) -> Result<SyncReport, PoolError> {
        let season = require_season(&self.pool, season).await?;
        let (incoming, mut skipped) = prepare_fixtures(raw);

        let ids: Vec<i32> = incoming.iter().map(|f| f.fixture_id).collect();
        let existing: HashMap<i32, Fixture> = get_fixtures_by_ids(&self.pool, &ids)
            .await?
            .into_iter()
            .map(|f| (f.fixture_id, f))
            .collect();

        let mut tx = self.pool.begin().await?;
        let mut upserted = 0;

        for fixture in &incoming {
            let stored = existing.get(&fixture.fixture_id);
            if let Some(stored) = stored.filter(|f| f.season_id != season.id) {
                tracing::warn!(
                    "Fixture {} already belongs to season id {}, skipping",
                    fixture.fixture_id,
                    stored.season_id
                );
                skipped.push(SkippedItem {
                    external_id: Some(fixture.fixture_id as i64),
                    reason: "Fixture belongs to another season".to_string(),
                });
                continue;
            }

            ensure_team(&mut *tx, &fixture.home_team).await?;
            ensure_team(&mut *tx, &fixture.away_team).await?;
            upsert_fixture(&mut *tx, &fixture.merge(season.id, stored)).await?;
            upserted += 1;
        }

        tx.commit().await?;
        tracing::info!("Stored {} fixtures for season {}, skipped {}", upserted, season.season, skipped.len());

        Ok(SyncReport {
            season: season.season,
            upserted,
            skipped,
        })
    }

    #[tracing::instrument(name = "Ingest standings", skip(self, raw), fields(items = raw.len()))]
    pub async fn ingest_standings(&self, season: &str, raw: Vec<Value>) -> Result<SyncReport, PoolError> {
        let season = require_season(&self.pool, season).await?;
        let (incoming, skipped) = prepare_standings(raw);

        let mut tx = self.pool.begin().await?;
        for standing in &incoming {
            upsert_team(&mut *tx, &standing.team).await?;
            upsert_standing(&mut *tx, season.id, standing).await?;
        }
        tx.commit().await?;

        tracing::info!(
            "Stored {} standings for season {}, skipped {}",
            incoming.len(),
            season.season,
            skipped.len()
        );

        Ok(SyncReport {
            season: season.season,
            upserted: incoming.len(),
            skipped,
        })
    }

    pub async fn sync_fixtures(&self, client: &FootballApiClient, season: &str) -> Result<SyncReport, PoolError> {
        let season = require_season(&self.pool, season).await?;
        let fetched = client.fetch_fixtures(&season.season).await?;
        record_api_call(&self.pool, Utc::now(), fetched.remaining_requests).await?;
        self.ingest_fixtures(&season.season, fetched.items).await
    }

    pub async fn sync_standings(&self, client: &FootballApiClient, season: &str) -> Result<SyncReport, PoolError> {
        let season = require_season(&self.pool, season).await?;
        let fetched = client.fetch_standings(&season.season).await?;
        record_api_call(&self.pool, Utc::now(), fetched.remaining_requests).await?;
        self.ingest_standings(&season.season, fetched.items).await
    }
}
