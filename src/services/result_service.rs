use std::time::Instant;

use sqlx::PgPool;
use uuid::Uuid;

use crate::db::fixtures::get_fixtures_by_season;
use crate::db::helpers::{require_record, require_season};
use crate::db::results::{get_results_by_season, upsert_result};
use crate::db::tips::{get_tips_by_user, update_tip_verdict};
use crate::db::users::{get_user_by_id, list_users};
use crate::error::PoolError;
use crate::models::fixture::Fixture;
use crate::models::result::{RecalculationReport, ResultWithUser, SeasonResult};
use crate::models::user::{UserSummary, ADMIN_USERNAME};
use crate::scoring::compute_user_result;

/// Recomputes and serves the per-user season scoreboards.
#[derive(Debug, Clone)]
pub struct ResultService {
    pool: PgPool,
}

impl ResultService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Recompute results for one user, or for every user except the admin
    /// account when `user_id` is `None`. Each result is rebuilt from scratch.
    #[tracing::instrument(name = "Recalculate season results", skip(self))]
    pub async fn recalculate(&self, season: &str, user_id: Option<Uuid>) -> Result<RecalculationReport, PoolError> {
        let started = Instant::now();
        let season = require_season(&self.pool, season).await?;
        let fixtures = get_fixtures_by_season(&self.pool, season.id).await?;

        let users: Vec<UserSummary> = match user_id {
            Some(id) => {
                let user = require_record(get_user_by_id(&self.pool, id).await?, format!("User {} does not exist", id))?;
                vec![user.into()]
            }
            None => list_users(&self.pool)
                .await?
                .into_iter()
                .filter(|user| user.username != ADMIN_USERNAME)
                .collect(),
        };

        for user in &users {
            self.recalculate_user(season.id, user, &fixtures).await?;
        }

        let elapsed_ms = started.elapsed().as_millis();
        tracing::info!(
            "Calculated results for {} users in season {} over {} fixtures in {} ms",
            users.len(),
            season.season,
            fixtures.len(),
            elapsed_ms
        );

        Ok(RecalculationReport {
            season: season.season,
            users_processed: users.len(),
            elapsed_ms,
        })
    }

    /// Verdict writes and the result upsert commit together.
    async fn recalculate_user(
        &self,
        season_id: i32,
        user: &UserSummary,
        fixtures: &[Fixture],
    ) -> Result<SeasonResult, PoolError> {
        let mut tx = self.pool.begin().await?;

        let tips = get_tips_by_user(&mut *tx, user.id).await?;
        let computed = compute_user_result(fixtures, &tips);

        for update in &computed.verdict_updates {
            update_tip_verdict(&mut *tx, update.tip_id, update.verdict).await?;
        }
        let result = upsert_result(&mut *tx, season_id, user.id, &computed).await?;

        tx.commit().await?;

        tracing::debug!(
            "Result for {}: {}/{} correct, {} verdicts updated",
            user.username,
            computed.tally.correct,
            computed.tally.finished,
            computed.verdict_updates.len()
        );
        Ok(result)
    }

    pub async fn season_results(&self, season: &str) -> Result<Vec<ResultWithUser>, PoolError> {
        let season = require_season(&self.pool, season).await?;
        Ok(get_results_by_season(&self.pool, season.id).await?)
    }
}
