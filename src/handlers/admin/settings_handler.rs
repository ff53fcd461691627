use actix_web::{web, HttpResponse, Result};
use sqlx::PgPool;

use crate::db::settings::toggle_late_modification;
use crate::error::PoolError;
use crate::middleware::auth::Claims;
use crate::models::common::ApiResponse;

// POST /admin/settings/late-modification
#[tracing::instrument(name = "Toggle late tip modification", skip(pool, claims), fields(admin = %claims.username))]
pub async fn toggle_late_modification_handler(
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
) -> Result<HttpResponse> {
    match toggle_late_modification(pool.get_ref()).await {
        Ok(allowed) => {
            tracing::info!("Late tip modification is now {}", if allowed { "on" } else { "off" });
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                format!("Late modification allowed: {}", allowed),
                allowed,
            )))
        }
        Err(e) => Ok(PoolError::from(e).to_response()),
    }
}
