use actix_web::web;

use crate::handlers::admin::{
    result_handler,
    season_handler,
    settings_handler,
    sync_handler,
    user_handler,
};
use crate::middleware::admin::AdminMiddleware;

pub fn init_admin_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/admin")
            .wrap(AdminMiddleware)
            // User management routes
            .service(
                web::resource("/users")
                    .route(web::get().to(user_handler::get_users))
            )
            .service(
                web::resource("/users/{id}/admin")
                    .route(web::post().to(user_handler::promote_user))
            )

            // Season management routes
            .service(
                web::resource("/seasons")
                    .route(web::post().to(season_handler::create_season))
            )
            .service(
                web::resource("/seasons/{season}/sync/fixtures")
                    .route(web::post().to(sync_handler::sync_fixtures))
            )
            .service(
                web::resource("/seasons/{season}/sync/standings")
                    .route(web::post().to(sync_handler::sync_standings))
            )
            .service(
                web::resource("/seasons/{season}/ingest/fixtures")
                    .route(web::post().to(sync_handler::ingest_fixtures))
            )
            .service(
                web::resource("/seasons/{season}/ingest/standings")
                    .route(web::post().to(sync_handler::ingest_standings))
            )

            // Result calculation routes
            .service(
                web::resource("/seasons/{season}/results")
                    .route(web::post().to(result_handler::calculate_all_results))
            )
            .service(
                web::resource("/seasons/{season}/results/{user_id}")
                    .route(web::post().to(result_handler::calculate_user_result))
            )

            // Pool settings
            .service(
                web::resource("/settings/late-modification")
                    .route(web::post().to(settings_handler::toggle_late_modification_handler))
            )
    );
}
