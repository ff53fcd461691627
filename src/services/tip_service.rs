use std::collections::HashMap;

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::db::fixtures::{get_fixtures_by_ids, get_fixtures_with_teams};
use crate::db::helpers::{require_record, require_season};
use crate::db::settings::get_settings;
use crate::db::tips::{get_tips_by_user, get_user_tips_for_fixtures, upsert_tip};
use crate::db::users::{get_user_by_id, get_user_by_username};
use crate::error::PoolError;
use crate::models::fixture::{Fixture, FixtureStatus};
use crate::models::tip::{
    Tip, TipItemOutcome, TipSubmissionItem, TipSubmissionReport, TipWithFixture, UserTipsResponse,
};
use crate::scoring::outcome::Outcome;

#[derive(Debug, Clone)]
pub struct TipService {
    pool: PgPool,
}

impl TipService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Validate and store a batch of tips for one user. A rejected item
    /// never aborts the rest of the batch.
    #[tracing::instrument(name = "Submit tips", skip(self, items), fields(items = items.len()))]
    pub async fn submit_tips(
        &self,
        user_id: Uuid,
        season: &str,
        items: Vec<TipSubmissionItem>,
        now: DateTime<Utc>,
    ) -> Result<TipSubmissionReport, PoolError> {
        let season = require_season(&self.pool, season).await?;
        let allow_late = get_settings(&self.pool).await?.allow_late_modification;

        let ids: Vec<i32> = items.iter().map(|item| item.fixture_id).collect();
        let fixtures: HashMap<i32, Fixture> = get_fixtures_by_ids(&self.pool, &ids)
            .await?
            .into_iter()
            .filter(|f| f.season_id == season.id)
            .map(|f| (f.fixture_id, f))
            .collect();
        let mut existing: HashMap<(Uuid, i32), Tip> = get_user_tips_for_fixtures(&self.pool, user_id, &ids)
            .await?
            .into_iter()
            .map(|tip| ((tip.user_id, tip.fixture_id), tip))
            .collect();

        let mut report = TipSubmissionReport::default();
        for item in &items {
            let outcome = match validate_tip(item, fixtures.get(&item.fixture_id), now, allow_late) {
                Ok(outcome) => outcome,
                Err(e) => {
                    tracing::debug!("Rejected tip for fixture {}: {}", item.fixture_id, e);
                    report.rejected += 1;
                    report.items.push(TipItemOutcome {
                        fixture_id: item.fixture_id,
                        accepted: false,
                        message: e.public_message(),
                    });
                    continue;
                }
            };

            let stored = upsert_tip(&self.pool, user_id, item.fixture_id, outcome).await?;
            let message = match existing.insert((user_id, item.fixture_id), stored) {
                Some(previous) if previous.symbol == outcome => format!("Tip {} unchanged", outcome),
                Some(previous) => format!("Tip changed from {} to {}", previous.symbol, outcome),
                None => format!("Tip {} saved", outcome),
            };
            report.accepted += 1;
            report.items.push(TipItemOutcome {
                fixture_id: item.fixture_id,
                accepted: true,
                message,
            });
        }

        tracing::info!(
            "User {} submitted {} tips for season {}: {} accepted, {} rejected",
            user_id,
            items.len(),
            season.season,
            report.accepted,
            report.rejected
        );
        Ok(report)
    }

    /// Tips of `user_id`, or of `username` when given, joined with their
    /// fixtures in the season.
    pub async fn user_tips(
        &self,
        user_id: Uuid,
        username: Option<&str>,
        season: &str,
    ) -> Result<UserTipsResponse, PoolError> {
        let season = require_season(&self.pool, season).await?;
        let user = match username {
            Some(name) => require_record(
                get_user_by_username(&self.pool, name).await?,
                format!("User {} does not exist", name),
            )?,
            None => require_record(
                get_user_by_id(&self.pool, user_id).await?,
                format!("User {} does not exist", user_id),
            )?,
        };

        let mut fixtures: HashMap<i32, _> = get_fixtures_with_teams(&self.pool, season.id, None)
            .await?
            .into_iter()
            .map(|f| (f.fixture.fixture_id, f))
            .collect();

        let tips = get_tips_by_user(&self.pool, user.id)
            .await?
            .into_iter()
            .filter_map(|tip| {
                fixtures
                    .remove(&tip.fixture_id)
                    .map(|fixture| TipWithFixture { tip, fixture })
            })
            .collect();

        Ok(UserTipsResponse {
            username: user.username,
            tips,
        })
    }
}

/// Checks a single submitted tip against its fixture.
pub fn validate_tip(
    item: &TipSubmissionItem,
    fixture: Option<&Fixture>,
    now: DateTime<Utc>,
    allow_late: bool,
) -> Result<Outcome, PoolError> {
    let outcome: Outcome = item.value.trim().parse()?;
    let fixture = fixture.ok_or_else(|| {
        PoolError::NotFound(format!("Fixture {} is not part of this season", item.fixture_id))
    })?;

    if !allow_late {
        if fixture.kickoff <= now {
            return Err(PoolError::Validation(format!(
                "Fixture {} has already kicked off",
                fixture.fixture_id
            )));
        }
        if fixture.status != FixtureStatus::NotStarted {
            return Err(PoolError::Validation(format!(
                "Fixture {} is {}",
                fixture.fixture_id,
                fixture.status.as_str()
            )));
        }
    }

    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn fixture_at(kickoff: DateTime<Utc>, status: FixtureStatus) -> Fixture {
        Fixture {
            fixture_id: 7,
            season_id: 1,
            round: 1,
            kickoff,
            status,
            home_team_id: 1,
            away_team_id: 2,
            home_score: None,
            away_score: None,
        }
    }

    fn item(value: &str) -> TipSubmissionItem {
        TipSubmissionItem {
            fixture_id: 7,
            value: value.to_string(),
        }
    }

    #[test]
    fn accepts_trimmed_symbols_before_kickoff() {
        let now = Utc::now();
        let fixture = fixture_at(now + Duration::hours(2), FixtureStatus::NotStarted);
        assert_eq!(validate_tip(&item(" X "), Some(&fixture), now, false).unwrap(), Outcome::Draw);
        assert_eq!(validate_tip(&item("2"), Some(&fixture), now, false).unwrap(), Outcome::Away);
    }

    #[test]
    fn rejects_unknown_symbol_before_fixture_lookup() {
        let now = Utc::now();
        assert!(matches!(validate_tip(&item("x"), None, now, false), Err(PoolError::Validation(_))));
        assert!(matches!(validate_tip(&item("3"), None, now, false), Err(PoolError::Validation(_))));
    }

    #[test]
    fn unknown_fixture_is_not_found() {
        assert!(matches!(
            validate_tip(&item("1"), None, Utc::now(), false),
            Err(PoolError::NotFound(_))
        ));
    }

    #[test]
    fn late_tips_need_the_setting() {
        let now = Utc::now();
        let started = fixture_at(now - Duration::minutes(5), FixtureStatus::NotStarted);
        let finished = fixture_at(now + Duration::hours(1), FixtureStatus::Finished);

        assert!(matches!(validate_tip(&item("1"), Some(&started), now, false), Err(PoolError::Validation(_))));
        assert!(matches!(validate_tip(&item("1"), Some(&finished), now, false), Err(PoolError::Validation(_))));
        assert_eq!(validate_tip(&item("1"), Some(&started), now, true).unwrap(), Outcome::Home);
        assert_eq!(validate_tip(&item("1"), Some(&finished), now, true).unwrap(), Outcome::Home);
    }
}
