use actix_web::{web, HttpResponse, Result};
use sqlx::PgPool;
use uuid::Uuid;

use crate::db::users::{list_users, set_admin};
use crate::error::PoolError;
use crate::middleware::auth::Claims;
use crate::models::common::ApiResponse;

// GET /admin/users
pub async fn get_users(pool: web::Data<PgPool>) -> Result<HttpResponse> {
    match list_users(pool.get_ref()).await {
        Ok(users) => Ok(HttpResponse::Ok().json(ApiResponse::success("Users retrieved", users))),
        Err(e) => Ok(PoolError::from(e).to_response()),
    }
}

// POST /admin/users/{id}/admin
#[tracing::instrument(name = "Promote user to admin", skip(pool, claims), fields(admin = %claims.username))]
pub async fn promote_user(
    pool: web::Data<PgPool>,
    user_id: web::Path<Uuid>,
    claims: web::ReqData<Claims>,
) -> Result<HttpResponse> {
    let user_id = user_id.into_inner();
    match set_admin(pool.get_ref(), user_id).await {
        Ok(true) => {
            tracing::info!("User {} promoted to admin", user_id);
            Ok(HttpResponse::Ok().json(ApiResponse::<()>::success_message(format!(
                "User {} is now an admin",
                user_id
            ))))
        }
        Ok(false) => Ok(PoolError::NotFound(format!("User {} does not exist", user_id)).to_response()),
        Err(e) => Ok(PoolError::from(e).to_response()),
    }
}
