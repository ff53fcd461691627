use sqlx::PgExecutor;

use crate::models::season::Season;

pub async fn insert_season<'e, E: PgExecutor<'e>>(
    executor: E,
    season: &str,
    display_name: &str,
) -> Result<Season, sqlx::Error> {
    sqlx::query_as::<_, Season>(
        "INSERT INTO seasons (season, display_name) VALUES ($1, $2) RETURNING id, season, display_name",
    )
    .bind(season)
    .bind(display_name)
    .fetch_one(executor)
    .await
}

pub async fn get_season<'e, E: PgExecutor<'e>>(executor: E, season: &str) -> Result<Option<Season>, sqlx::Error> {
    sqlx::query_as::<_, Season>("SELECT id, season, display_name FROM seasons WHERE season = $1")
        .bind(season)
        .fetch_optional(executor)
        .await
}

pub async fn list_seasons<'e, E: PgExecutor<'e>>(executor: E) -> Result<Vec<Season>, sqlx::Error> {
    sqlx::query_as::<_, Season>("SELECT id, season, display_name FROM seasons ORDER BY season")
        .fetch_all(executor)
        .await
}
