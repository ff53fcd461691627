use actix_web::{web, HttpResponse};
use secrecy::ExposeSecret;
use sqlx::PgPool;

use crate::db::users::insert_user;
use crate::error::PoolError;
use crate::models::common::ApiResponse;
use crate::models::user::{RegistrationRequest, UserSummary, ADMIN_USERNAME, MIN_PASSWORD_LENGTH};
use crate::utils::password::hash_password;

#[tracing::instrument(
    name = "Adding a new user",
    // Don't show arguments
    skip(user_form, pool),
    fields(
        username = %user_form.username
    )
)]
pub async fn register_user(
    user_form: web::Json<RegistrationRequest>,
    pool: web::Data<PgPool>
) -> HttpResponse {
    match create_user(&user_form, &pool).await {
        Ok(user) => HttpResponse::Created().json(ApiResponse::success("User registered", user)),
        Err(e) => e.to_response(),
    }
}

pub async fn create_user(
    user_form: &RegistrationRequest,
    pool: &PgPool
) -> Result<UserSummary, PoolError> {
    let username = validate_registration(user_form)?;
    let password_hash = hash_password(user_form.password.expose_secret()).map_err(|e| {
        tracing::error!("Failed to hash password: {:?}", e);
        PoolError::Validation("Password could not be processed".to_string())
    })?;

    let is_admin = username == ADMIN_USERNAME;
    let user = insert_user(pool, &username, &password_hash, is_admin)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db) if db.is_unique_violation() => {
                PoolError::Validation(format!("Username {} is already taken", username))
            }
            other => PoolError::from(other),
        })?;

    tracing::info!("Registered user {} (admin: {})", user.username, user.is_admin);
    Ok(user.into())
}

/// Returns the trimmed username.
pub fn validate_registration(user_form: &RegistrationRequest) -> Result<String, PoolError> {
    let username = user_form.username.trim();
    if username.is_empty() {
        return Err(PoolError::Validation("Username must not be empty".to_string()));
    }
    if user_form.password.expose_secret().chars().count() < MIN_PASSWORD_LENGTH {
        return Err(PoolError::Validation(format!(
            "Password must be at least {} characters",
            MIN_PASSWORD_LENGTH
        )));
    }
    Ok(username.to_string())
}
