use actix_web::{web, HttpResponse, Result};
use serde_json::Value;
use sqlx::PgPool;

use crate::middleware::auth::Claims;
use crate::models::common::ApiResponse;
use crate::models::sync::SyncReport;
use crate::sync::payload::ApiEnvelope;
use crate::sync::FootballApiClient;
use crate::services::SyncService;

// POST /admin/seasons/{season}/sync/fixtures
#[tracing::instrument(name = "Sync fixtures from API", skip(pool, client, claims), fields(admin = %claims.username))]
pub async fn sync_fixtures(
    pool: web::Data<PgPool>,
    client: web::Data<FootballApiClient>,
    season: web::Path<String>,
    claims: web::ReqData<Claims>,
) -> Result<HttpResponse> {
    let service = SyncService::new(pool.get_ref().clone());
    Ok(report_response("fixtures", service.sync_fixtures(&client, &season).await))
}

// POST /admin/seasons/{season}/sync/standings
#[tracing::instrument(name = "Sync standings from API", skip(pool, client, claims), fields(admin = %claims.username))]
pub async fn sync_standings(
    pool: web::Data<PgPool>,
    client: web::Data<FootballApiClient>,
    season: web::Path<String>,
    claims: web::ReqData<Claims>,
) -> Result<HttpResponse> {
    let service = SyncService::new(pool.get_ref().clone());
    Ok(report_response("standings", service.sync_standings(&client, &season).await))
}

// POST /admin/seasons/{season}/ingest/fixtures
#[tracing::instrument(name = "Ingest fixture payload", skip(pool, payload, claims), fields(admin = %claims.username))]
pub async fn ingest_fixtures(
    pool: web::Data<PgPool>,
    season: web::Path<String>,
    payload: web::Json<ApiEnvelope<Value>>,
    claims: web::ReqData<Claims>,
) -> Result<HttpResponse> {
    let service = SyncService::new(pool.get_ref().clone());
    let items = payload.into_inner().response;
    Ok(report_response("fixtures", service.ingest_fixtures(&season, items).await))
}

// POST /admin/seasons/{season}/ingest/standings
#[tracing::instrument(name = "Ingest standings payload", skip(pool, payload, claims), fields(admin = %claims.username))]
pub async fn ingest_standings(
    pool: web::Data<PgPool>,
    season: web::Path<String>,
    payload: web::Json<ApiEnvelope<Value>>,
    claims: web::ReqData<Claims>,
) -> Result<HttpResponse> {
    let service = SyncService::new(pool.get_ref().clone());
    let items = payload.into_inner().response;
    Ok(report_response("standings", service.ingest_standings(&season, items).await))
}

fn report_response(kind: &str, result: Result<SyncReport, crate::error::PoolError>) -> HttpResponse {
    match result {
        Ok(report) => {
            let message = format!(
                "Stored {} {} for season {}, skipped {}",
                report.upserted,
                kind,
                report.season,
                report.skipped.len()
            );
            HttpResponse::Ok().json(ApiResponse::success(message, report))
        }
        Err(e) => e.to_response(),
    }
}
