// src/routes/seasons.rs
use actix_web::{get, post, web, HttpResponse};
use sqlx::PgPool;

use crate::handlers::{season_handler, tip_handler};
use crate::middleware::auth::Claims;
use crate::models::tip::{TipSubmissionItem, UserTipsQuery};

/// List all seasons
#[get("")]
async fn list_seasons(pool: web::Data<PgPool>) -> HttpResponse {
    season_handler::list_seasons(pool).await
}

#[get("/{season}")]
async fn get_season(path: web::Path<String>, pool: web::Data<PgPool>) -> HttpResponse {
    season_handler::get_season(path.into_inner(), pool).await
}

/// Fixtures with the next one to be played
#[get("/{season}/fixtures")]
async fn get_season_fixtures(path: web::Path<String>, pool: web::Data<PgPool>) -> HttpResponse {
    season_handler::get_season_fixtures(path.into_inner(), pool).await
}

/// Fixtures of the current week
#[get("/{season}/fixtures/week")]
async fn get_week_fixtures(path: web::Path<String>, pool: web::Data<PgPool>) -> HttpResponse {
    season_handler::get_week_fixtures(path.into_inner(), pool).await
}

#[get("/{season}/standings")]
async fn get_standings(path: web::Path<String>, pool: web::Data<PgPool>) -> HttpResponse {
    season_handler::get_standings(path.into_inner(), pool).await
}

#[get("/{season}/results")]
async fn get_results(path: web::Path<String>, pool: web::Data<PgPool>) -> HttpResponse {
    season_handler::get_results(path.into_inner(), pool).await
}

/// Submit or overwrite tips for the logged in user
#[post("/{season}/tips")]
async fn submit_tips(
    path: web::Path<String>,
    items: web::Json<Vec<TipSubmissionItem>>,
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
) -> HttpResponse {
    tip_handler::submit_tips(path.into_inner(), items, pool, claims).await
}

#[get("/{season}/tips")]
async fn get_tips(
    path: web::Path<String>,
    query: web::Query<UserTipsQuery>,
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
) -> HttpResponse {
    tip_handler::get_user_tips(path.into_inner(), query, pool, claims).await
}

#[get("")]
async fn get_pool_settings(pool: web::Data<PgPool>) -> HttpResponse {
    season_handler::get_pool_settings(pool).await
}
