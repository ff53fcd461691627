use actix_web::{web, HttpResponse, Result};
use sqlx::PgPool;

use crate::league::SeasonService;
use crate::middleware::auth::Claims;
use crate::models::common::ApiResponse;
use crate::models::season::CreateSeasonRequest;

// POST /admin/seasons
#[tracing::instrument(
    name = "Create season",
    skip(pool, request, claims),
    fields(admin = %claims.username, season = %request.season)
)]
pub async fn create_season(
    pool: web::Data<PgPool>,
    request: web::Json<CreateSeasonRequest>,
    claims: web::ReqData<Claims>,
) -> Result<HttpResponse> {
    let service = SeasonService::new(pool.get_ref().clone());
    match service.create_season(&request.season).await {
        Ok(season) => Ok(HttpResponse::Created().json(ApiResponse::success(
            format!("Season {} created", season.display_name),
            season,
        ))),
        Err(e) => Ok(e.to_response()),
    }
}
