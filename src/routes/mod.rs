use actix_web::web;

pub mod admin;
pub mod auth;
pub mod backend_health;
pub mod registration;
pub mod seasons;

use crate::middleware::auth::AuthMiddleware;

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(registration::register)
        .service(backend_health::backend_health)
        .service(auth::login);

    // Season routes (require authentication)
    cfg.service(
        web::scope("/seasons")
            .wrap(AuthMiddleware)
            .service(seasons::list_seasons)
            .service(seasons::get_season)
            .service(seasons::get_season_fixtures)
            .service(seasons::get_week_fixtures)
            .service(seasons::get_standings)
            .service(seasons::get_results)
            .service(seasons::submit_tips)
            .service(seasons::get_tips)
    );
    cfg.service(
        web::scope("/settings")
            .wrap(AuthMiddleware)
            .service(seasons::get_pool_settings)
    );

    admin::init_admin_routes(cfg);
}
