use actix_web::web;

use crate::campsite_handlers::*;

/// Registers every campsite API route.
///
/// Expects a `web::Data<CampsiteService>` to be registered on the app.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(api_root))
        .route("/health", web::get().to(health_check))
        .route("/states", web::get().to(list_states))
        .route("/stats", web::get().to(get_statistics))
        .service(
            web::scope("/campsites")
                .route("", web::get().to(list_campsites))
                .route("/recommendations", web::post().to(recommend_campsites))
                .route("/{campsite_id}", web::get().to(get_campsite))
                .route(
                    "/{campsite_id}/calculate-cost",
                    web::get().to(calculate_trip_cost),
                ),
        );
}
