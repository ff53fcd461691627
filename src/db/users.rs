use sqlx::PgExecutor;
use uuid::Uuid;

use crate::models::user::{User, UserSummary};

pub async fn insert_user<'e, E: PgExecutor<'e>>(
    executor: E,
    username: &str,
    password_hash: &str,
    is_admin: bool,
) -> Result<User, sqlx::Error> {
    sqlx::query_as::<_, User>(
        r#"
        INSERT INTO users (id, username, password_hash, is_admin, created_at)
        VALUES ($1, $2, $3, $4, NOW())
        RETURNING id, username, password_hash, is_admin, created_at
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(username)
    .bind(password_hash)
    .bind(is_admin)
    .fetch_one(executor)
    .await
}

pub async fn get_user_by_username<'e, E: PgExecutor<'e>>(
    executor: E,
    username: &str,
) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as::<_, User>(
        "SELECT id, username, password_hash, is_admin, created_at FROM users WHERE username = $1",
    )
    .bind(username)
    .fetch_optional(executor)
    .await
}

pub async fn get_user_by_id<'e, E: PgExecutor<'e>>(
    executor: E,
    user_id: Uuid,
) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as::<_, User>(
        "SELECT id, username, password_hash, is_admin, created_at FROM users WHERE id = $1",
    )
    .bind(user_id)
    .fetch_optional(executor)
    .await
}

pub async fn list_users<'e, E: PgExecutor<'e>>(executor: E) -> Result<Vec<UserSummary>, sqlx::Error> {
    sqlx::query_as::<_, UserSummary>("SELECT id, username, is_admin FROM users ORDER BY username")
        .fetch_all(executor)
        .await
}

/// Returns false when no such user exists.
pub async fn set_admin<'e, E: PgExecutor<'e>>(executor: E, user_id: Uuid) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("UPDATE users SET is_admin = TRUE WHERE id = $1")
        .bind(user_id)
        .execute(executor)
        .await?;
    Ok(result.rows_affected() > 0)
}
