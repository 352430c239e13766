mod encoder;
mod handlers;
mod routes;
mod structs;
mod utils;
mod views;

use actix_cors::Cors;
use actix_web::{App, HttpServer, http, middleware::Logger};
use dotenv::dotenv;
use env_logger::Env;
use routes::init_routes;
use std::env;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let port = env::var("PORT")
        .ok()
        .and_then(|p| p.parse::<u16>().ok())
        .unwrap_or(3000);

    log::info!("Server is running on port {}", port);

    // Start the Actix Web server
    HttpServer::new(move || {
        // Create a logger with a custom format instead
        let logger = Logger::new("%a \"%r\" %s %b \"%{Referer}i\" \"%{User-Agent}i\" %D ms");
        // The JSON endpoint is usable cross-origin
        let cors = Cors::default()
            .allow_any_origin()
            .allowed_methods(vec!["GET", "POST"])
            .allowed_header(http::header::CONTENT_TYPE)
            .max_age(3600);
        App::new().wrap(logger).wrap(cors).configure(init_routes)
    })
    .bind(("127.0.0.1", port))?
    .run()
    .await
}
