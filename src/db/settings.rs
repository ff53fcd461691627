use chrono::{DateTime, Utc};
use sqlx::PgExecutor;

use crate::models::settings::PoolSettings;

pub async fn get_settings<'e, E: PgExecutor<'e>>(executor: E) -> Result<PoolSettings, sqlx::Error> {
    sqlx::query_as::<_, PoolSettings>(
        "SELECT last_update, remaining_requests, allow_late_modification FROM pool_settings WHERE id = 1",
    )
    .fetch_one(executor)
    .await
}

/// Record the time of the last API call and the quota it reported.
pub async fn record_api_call<'e, E: PgExecutor<'e>>(
    executor: E,
    at: DateTime<Utc>,
    remaining_requests: Option<i32>,
) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        UPDATE pool_settings
        SET last_update = $1,
            remaining_requests = COALESCE($2, remaining_requests)
        WHERE id = 1
        "#,
    )
    .bind(at)
    .bind(remaining_requests)
    .execute(executor)
    .await?;
    Ok(())
}

/// Flip the late-modification flag and return its new value.
pub async fn toggle_late_modification<'e, E: PgExecutor<'e>>(executor: E) -> Result<bool, sqlx::Error> {
    sqlx::query_scalar::<_, bool>(
        r#"
        UPDATE pool_settings
        SET allow_late_modification = NOT allow_late_modification
        WHERE id = 1
        RETURNING allow_late_modification
        "#,
    )
    .fetch_one(executor)
    .await
}
