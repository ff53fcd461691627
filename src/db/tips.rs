use sqlx::PgExecutor;
use uuid::Uuid;

use crate::models::tip::Tip;
use crate::scoring::outcome::{Outcome, TipVerdict};

const TIP_COLUMNS: &str = "id, fixture_id, symbol, correct, user_id, updated_at";

/// Every tip the user has made, in any season.
pub async fn get_tips_by_user<'e, E: PgExecutor<'e>>(executor: E, user_id: Uuid) -> Result<Vec<Tip>, sqlx::Error> {
    let sql = format!("SELECT {} FROM tips WHERE user_id = $1 ORDER BY fixture_id", TIP_COLUMNS);
    sqlx::query_as::<_, Tip>(&sql)
        .bind(user_id)
        .fetch_all(executor)
        .await
}

pub async fn get_user_tips_for_fixtures<'e, E: PgExecutor<'e>>(
    executor: E,
    user_id: Uuid,
    fixture_ids: &[i32],
) -> Result<Vec<Tip>, sqlx::Error> {
    let sql = format!(
        "SELECT {} FROM tips WHERE user_id = $1 AND fixture_id = ANY($2)",
        TIP_COLUMNS
    );
    sqlx::query_as::<_, Tip>(&sql)
        .bind(user_id)
        .bind(fixture_ids)
        .fetch_all(executor)
        .await
}

/// Create the user's tip for a fixture or overwrite its symbol in place.
/// Overwriting clears the stored verdict until the next result run.
pub async fn upsert_tip<'e, E: PgExecutor<'e>>(
    executor: E,
    user_id: Uuid,
    fixture_id: i32,
    symbol: Outcome,
) -> Result<Tip, sqlx::Error> {
    let sql = format!(
        r#"
        INSERT INTO tips (fixture_id, symbol, correct, user_id, updated_at)
        VALUES ($1, $2, 0, $3, NOW())
        ON CONFLICT (user_id, fixture_id) DO UPDATE SET
            symbol = EXCLUDED.symbol,
            correct = 0,
            updated_at = NOW()
        RETURNING {}
        "#,
        TIP_COLUMNS
    );
    sqlx::query_as::<_, Tip>(&sql)
        .bind(fixture_id)
        .bind(symbol.symbol())
        .bind(user_id)
        .fetch_one(executor)
        .await
}

pub async fn update_tip_verdict<'e, E: PgExecutor<'e>>(
    executor: E,
    tip_id: i32,
    verdict: TipVerdict,
) -> Result<(), sqlx::Error> {
    sqlx::query("UPDATE tips SET correct = $1 WHERE id = $2")
        .bind(verdict.as_i32())
        .bind(tip_id)
        .execute(executor)
        .await?;
    Ok(())
}
