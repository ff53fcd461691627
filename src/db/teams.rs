use sqlx::PgExecutor;

use crate::models::team::{StandingWithTeam, Team};
use crate::sync::mapping::IncomingStanding;

/// Insert a team or refresh its name and logo.
pub async fn upsert_team<'e, E: PgExecutor<'e>>(executor: E, team: &Team) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        INSERT INTO teams (team_id, name, logo)
        VALUES ($1, $2, $3)
        ON CONFLICT (team_id) DO UPDATE SET
            name = EXCLUDED.name,
            logo = COALESCE(EXCLUDED.logo, teams.logo)
        "#,
    )
    .bind(team.team_id)
    .bind(&team.name)
    .bind(&team.logo)
    .execute(executor)
    .await?;
    Ok(())
}

/// Make sure a team referenced by a fixture exists without overwriting a
/// name that a standings sync already stored.
pub async fn ensure_team<'e, E: PgExecutor<'e>>(executor: E, team: &Team) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        INSERT INTO teams (team_id, name, logo)
        VALUES ($1, $2, $3)
        ON CONFLICT (team_id) DO NOTHING
        "#,
    )
    .bind(team.team_id)
    .bind(&team.name)
    .bind(&team.logo)
    .execute(executor)
    .await?;
    Ok(())
}

pub async fn upsert_standing<'e, E: PgExecutor<'e>>(
    executor: E,
    season_id: i32,
    standing: &IncomingStanding,
) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        INSERT INTO team_standings (
            season_id, team_id, rank, points, games_played, wins, draws, losses,
            goals_scored, goals_conceded, form, status, promotion, last_update
        )
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, NOW())
        ON CONFLICT (season_id, team_id) DO UPDATE SET
            rank = EXCLUDED.rank,
            points = EXCLUDED.points,
            games_played = EXCLUDED.games_played,
            wins = EXCLUDED.wins,
            draws = EXCLUDED.draws,
            losses = EXCLUDED.losses,
            goals_scored = EXCLUDED.goals_scored,
            goals_conceded = EXCLUDED.goals_conceded,
            form = EXCLUDED.form,
            status = EXCLUDED.status,
            promotion = EXCLUDED.promotion,
            last_update = EXCLUDED.last_update
        "#,
    )
    .bind(season_id)
    .bind(standing.team.team_id)
    .bind(standing.rank)
    .bind(standing.points)
    .bind(standing.games_played)
    .bind(standing.wins)
    .bind(standing.draws)
    .bind(standing.losses)
    .bind(standing.goals_scored)
    .bind(standing.goals_conceded)
    .bind(&standing.form)
    .bind(&standing.status)
    .bind(&standing.promotion)
    .execute(executor)
    .await?;
    Ok(())
}

/// League table of a season ordered by rank.
pub async fn get_standings_by_season<'e, E: PgExecutor<'e>>(
    executor: E,
    season_id: i32,
) -> Result<Vec<StandingWithTeam>, sqlx::Error> {
    sqlx::query_as::<_, StandingWithTeam>(
        r#"
        SELECT s.id, s.season_id, s.team_id, s.rank, s.points, s.games_played, s.wins,
               s.draws, s.losses, s.goals_scored, s.goals_conceded, s.form, s.status,
               s.promotion, s.last_update, t.name, t.logo
        FROM team_standings s
        JOIN teams t ON t.team_id = s.team_id
        WHERE s.season_id = $1
        ORDER BY s.rank
        "#,
    )
    .bind(season_id)
    .fetch_all(executor)
    .await
}
