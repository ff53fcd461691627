use actix_web::{web, HttpResponse};
use chrono::Utc;
use sqlx::PgPool;

use crate::db::settings::get_settings;
use crate::error::PoolError;
use crate::league::{FixtureService, SeasonService, StandingsService};
use crate::models::common::ApiResponse;
use crate::services::ResultService;

/// List all seasons
pub async fn list_seasons(pool: web::Data<PgPool>) -> HttpResponse {
    match SeasonService::new(pool.get_ref().clone()).list_seasons().await {
        Ok(seasons) => HttpResponse::Ok().json(ApiResponse::success("Seasons retrieved", seasons)),
        Err(e) => e.to_response(),
    }
}

pub async fn get_season(season: String, pool: web::Data<PgPool>) -> HttpResponse {
    match SeasonService::new(pool.get_ref().clone()).get_season(&season).await {
        Ok(season) => HttpResponse::Ok().json(ApiResponse::success("Season retrieved", season)),
        Err(e) => e.to_response(),
    }
}

/// Fixtures of a season in round order, plus the one nearest to now
pub async fn get_season_fixtures(season: String, pool: web::Data<PgPool>) -> HttpResponse {
    let service = FixtureService::new(pool.get_ref().clone());
    match service.season_fixtures(&season, Utc::now()).await {
        Ok(fixtures) => HttpResponse::Ok().json(ApiResponse::success("Fixtures retrieved", fixtures)),
        Err(e) => e.to_response(),
    }
}

pub async fn get_week_fixtures(season: String, pool: web::Data<PgPool>) -> HttpResponse {
    let service = FixtureService::new(pool.get_ref().clone());
    match service.week_fixtures(&season, Utc::now()).await {
        Ok(fixtures) => HttpResponse::Ok().json(ApiResponse::success("Fixtures retrieved", fixtures)),
        Err(e) => e.to_response(),
    }
}

pub async fn get_standings(season: String, pool: web::Data<PgPool>) -> HttpResponse {
    let service = StandingsService::new(pool.get_ref().clone());
    match service.get_league_standings(&season).await {
        Ok(standings) => HttpResponse::Ok().json(ApiResponse::success("Standings retrieved", standings)),
        Err(e) => e.to_response(),
    }
}

pub async fn get_results(season: String, pool: web::Data<PgPool>) -> HttpResponse {
    let service = ResultService::new(pool.get_ref().clone());
    match service.season_results(&season).await {
        Ok(results) => HttpResponse::Ok().json(ApiResponse::success("Results retrieved", results)),
        Err(e) => e.to_response(),
    }
}

pub async fn get_pool_settings(pool: web::Data<PgPool>) -> HttpResponse {
    match get_settings(pool.get_ref()).await {
        Ok(settings) => HttpResponse::Ok().json(ApiResponse::success("Settings retrieved", settings)),
        Err(e) => PoolError::from(e).to_response(),
    }
}
