use actix_web::web;

use crate::handlers::health_handlers::health_check;
use crate::handlers::page_handlers::{app_js, index};
use crate::handlers::qr_handlers::{generate_qr_api, scan_form};

/// Configure the routes
pub fn init_routes(cfg: &mut web::ServiceConfig) {
    // Page routes
    cfg.route("/", web::get().to(index));
    cfg.route("/scan", web::post().to(scan_form));
    cfg.route("/static/app.js", web::get().to(app_js));
    // Programmatic API
    cfg.service(
        web::scope("/api")
            .route("/qr", web::post().to(generate_qr_api))
            .route("/health/check", web::get().to(health_check)),
    );
}
