use actix_web::{web, HttpResponse, Result};
use sqlx::PgPool;
use uuid::Uuid;

use crate::middleware::auth::Claims;
use crate::models::common::ApiResponse;
use crate::models::result::RecalculationReport;
use crate::services::ResultService;

// POST /admin/seasons/{season}/results
#[tracing::instrument(name = "Calculate results for all users", skip(pool, claims), fields(admin = %claims.username))]
pub async fn calculate_all_results(
    pool: web::Data<PgPool>,
    season: web::Path<String>,
    claims: web::ReqData<Claims>,
) -> Result<HttpResponse> {
    let service = ResultService::new(pool.get_ref().clone());
    match service.recalculate(&season, None).await {
        Ok(report) => Ok(report_response(report)),
        Err(e) => Ok(e.to_response()),
    }
}

// POST /admin/seasons/{season}/results/{user_id}
#[tracing::instrument(name = "Calculate results for one user", skip(pool, claims), fields(admin = %claims.username))]
pub async fn calculate_user_result(
    pool: web::Data<PgPool>,
    path: web::Path<(String, Uuid)>,
    claims: web::ReqData<Claims>,
) -> Result<HttpResponse> {
    let (season, user_id) = path.into_inner();
    let service = ResultService::new(pool.get_ref().clone());
    match service.recalculate(&season, Some(user_id)).await {
        Ok(report) => Ok(report_response(report)),
        Err(e) => Ok(e.to_response()),
    }
}

fn report_response(report: RecalculationReport) -> HttpResponse {
    let message = format!(
        "Calculated results for {} users in season {} in {} ms",
        report.users_processed, report.season, report.elapsed_ms
    );
    HttpResponse::Ok().json(ApiResponse::success(message, report))
}
