use actix_web::{web, HttpResponse};
use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::middleware::auth::Claims;
use crate::models::common::ApiResponse;
use crate::models::tip::{TipSubmissionItem, UserTipsQuery};
use crate::services::TipService;

#[tracing::instrument(
    name = "Submit tips",
    skip(items, pool, claims),
    fields(username = %claims.username)
)]
pub async fn submit_tips(
    season: String,
    items: web::Json<Vec<TipSubmissionItem>>,
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
) -> HttpResponse {
    let user_id = match acting_user(&claims) {
        Ok(id) => id,
        Err(response) => return response,
    };

    let service = TipService::new(pool.get_ref().clone());
    match service.submit_tips(user_id, &season, items.into_inner(), Utc::now()).await {
        Ok(report) => {
            let message = format!("{} tips saved, {} rejected", report.accepted, report.rejected);
            HttpResponse::Ok().json(ApiResponse::success(message, report))
        }
        Err(e) => e.to_response(),
    }
}

#[tracing::instrument(
    name = "Get user tips",
    skip(query, pool, claims),
    fields(username = %claims.username)
)]
pub async fn get_user_tips(
    season: String,
    query: web::Query<UserTipsQuery>,
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
) -> HttpResponse {
    let user_id = match acting_user(&claims) {
        Ok(id) => id,
        Err(response) => return response,
    };

    let service = TipService::new(pool.get_ref().clone());
    match service.user_tips(user_id, query.username.as_deref(), &season).await {
        Ok(tips) => HttpResponse::Ok().json(ApiResponse::success("Tips retrieved", tips)),
        Err(e) => e.to_response(),
    }
}

fn acting_user(claims: &Claims) -> Result<Uuid, HttpResponse> {
    claims.user_id().ok_or_else(|| {
        tracing::error!("Invalid user id in token: {}", claims.sub);
        HttpResponse::Unauthorized().json(ApiResponse::<()>::error("Invalid token"))
    })
}
