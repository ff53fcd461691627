use sqlx::types::Json;
use sqlx::PgExecutor;
use uuid::Uuid;

use crate::models::result::{ResultWithUser, SeasonResult};
use crate::scoring::UserResult;

const RESULT_COLUMNS: &str =
    "r.id, r.season_id, r.user_id, r.total, r.finished, r.correct, r.incorrect, r.tip_1, r.tip_x, r.tip_2, r.round_stats, r.last_update";

/// Write a freshly computed result for (season, user), replacing every
/// aggregate column of an existing row.
pub async fn upsert_result<'e, E: PgExecutor<'e>>(
    executor: E,
    season_id: i32,
    user_id: Uuid,
    computed: &UserResult,
) -> Result<SeasonResult, sqlx::Error> {
    let tally = &computed.tally;
    let sql = format!(
        r#"
        INSERT INTO results AS r (
            season_id, user_id, total, finished, correct, incorrect,
            tip_1, tip_x, tip_2, round_stats, last_update
        )
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, NOW())
        ON CONFLICT (season_id, user_id) DO UPDATE SET
            total = EXCLUDED.total,
            finished = EXCLUDED.finished,
            correct = EXCLUDED.correct,
            incorrect = EXCLUDED.incorrect,
            tip_1 = EXCLUDED.tip_1,
            tip_x = EXCLUDED.tip_x,
            tip_2 = EXCLUDED.tip_2,
            round_stats = EXCLUDED.round_stats,
            last_update = EXCLUDED.last_update
        RETURNING {}
        "#,
        RESULT_COLUMNS
    );
    sqlx::query_as::<_, SeasonResult>(&sql)
        .bind(season_id)
        .bind(user_id)
        .bind(tally.total)
        .bind(tally.finished)
        .bind(tally.correct)
        .bind(tally.incorrect)
        .bind(tally.tip_1)
        .bind(tally.tip_x)
        .bind(tally.tip_2)
        .bind(Json(&computed.rounds))
        .fetch_one(executor)
        .await
}

/// Scoreboard of a season, best first.
pub async fn get_results_by_season<'e, E: PgExecutor<'e>>(
    executor: E,
    season_id: i32,
) -> Result<Vec<ResultWithUser>, sqlx::Error> {
    let sql = format!(
        r#"
        SELECT {}, u.username
        FROM results r
        JOIN users u ON u.id = r.user_id
        WHERE r.season_id = $1
        ORDER BY r.correct DESC, u.username
        "#,
        RESULT_COLUMNS
    );
    sqlx::query_as::<_, ResultWithUser>(&sql)
        .bind(season_id)
        .fetch_all(executor)
        .await
}
