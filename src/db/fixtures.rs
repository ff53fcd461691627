use chrono::{DateTime, Utc};
use sqlx::PgExecutor;

use crate::models::fixture::{Fixture, FixtureWithTeams};

const FIXTURE_COLUMNS: &str =
    "f.fixture_id, f.season_id, f.round, f.kickoff, f.status, f.home_team_id, f.away_team_id, f.home_score, f.away_score";

/// All fixtures of a season, ordered by round and then kickoff.
pub async fn get_fixtures_by_season<'e, E: PgExecutor<'e>>(
    executor: E,
    season_id: i32,
) -> Result<Vec<Fixture>, sqlx::Error> {
    let sql = format!(
        "SELECT {} FROM fixtures f WHERE f.season_id = $1 ORDER BY f.round, f.kickoff, f.fixture_id",
        FIXTURE_COLUMNS
    );
    sqlx::query_as::<_, Fixture>(&sql)
        .bind(season_id)
        .fetch_all(executor)
        .await
}

pub async fn get_fixtures_by_ids<'e, E: PgExecutor<'e>>(
    executor: E,
    fixture_ids: &[i32],
) -> Result<Vec<Fixture>, sqlx::Error> {
    let sql = format!("SELECT {} FROM fixtures f WHERE f.fixture_id = ANY($1)", FIXTURE_COLUMNS);
    sqlx::query_as::<_, Fixture>(&sql)
        .bind(fixture_ids)
        .fetch_all(executor)
        .await
}

/// Season fixtures with team names, optionally limited to a kickoff window.
pub async fn get_fixtures_with_teams<'e, E: PgExecutor<'e>>(
    executor: E,
    season_id: i32,
    window: Option<(DateTime<Utc>, DateTime<Utc>)>,
) -> Result<Vec<FixtureWithTeams>, sqlx::Error> {
    let (from, to) = window.unzip();
    let sql = format!(
        r#"
        SELECT {}, ht.name AS home_team_name, awt.name AS away_team_name
        FROM fixtures f
        JOIN teams ht ON ht.team_id = f.home_team_id
        JOIN teams awt ON awt.team_id = f.away_team_id
        WHERE f.season_id = $1
          AND ($2::timestamptz IS NULL OR f.kickoff >= $2)
          AND ($3::timestamptz IS NULL OR f.kickoff <= $3)
        ORDER BY f.round, f.kickoff, f.fixture_id
        "#,
        FIXTURE_COLUMNS
    );
    sqlx::query_as::<_, FixtureWithTeams>(&sql)
        .bind(season_id)
        .bind(from)
        .bind(to)
        .fetch_all(executor)
        .await
}

/// Insert or update a fixture by its external id. The caller has already
/// merged status and score with the stored row.
pub async fn upsert_fixture<'e, E: PgExecutor<'e>>(executor: E, fixture: &Fixture) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        INSERT INTO fixtures (
            fixture_id, season_id, round, kickoff, status,
            home_team_id, away_team_id, home_score, away_score
        )
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
        ON CONFLICT (fixture_id) DO UPDATE SET
            round = EXCLUDED.round,
            kickoff = EXCLUDED.kickoff,
            status = EXCLUDED.status,
            home_score = EXCLUDED.home_score,
            away_score = EXCLUDED.away_score
        "#,
    )
    .bind(fixture.fixture_id)
    .bind(fixture.season_id)
    .bind(fixture.round)
    .bind(fixture.kickoff)
    .bind(fixture.status.as_str())
    .bind(fixture.home_team_id)
    .bind(fixture.away_team_id)
    .bind(fixture.home_score)
    .bind(fixture.away_score)
    .execute(executor)
    .await?;
    Ok(())
}
