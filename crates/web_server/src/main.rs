//! Main entry point for the Campsite Catalog backend server.
//! This crate wires the configured catalog repository into the REST API.

use actix_web::{App, HttpServer, middleware::Logger, web};
use web_handlers::{CampsiteService, configure_routes};

mod config;
use config::ServerConfig;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize logger
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    log::info!("🚀 Starting campsite catalog server...");

    let config = match ServerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            log::error!("❌ Invalid configuration: {}", e);
            std::process::exit(1);
        }
    };

    let repository = match config.build_repository() {
        Ok(repository) => repository,
        Err(e) => {
            log::error!("❌ Failed to create {} repository: {}", config.repository, e);
            if config.seed_file.is_some() {
                log::error!("💡 Check that CAMPSITE_SEED_FILE points to a JSON array of campsites");
            }
            std::process::exit(1);
        }
    };

    let service = CampsiteService::new(repository);
    match service.get_campsite_count() {
        Ok(count) => log::info!(
            "🏕️ Catalog ready with {} campsites ({} repository)",
            count,
            config.repository
        ),
        Err(e) => log::warn!("⚠️ Catalog is not readable yet: {}", e),
    }

    let (host, port) = config.bind_address();
    log::info!("🌐 Server will be available at: http://{}:{}", host, port);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(service.clone()))
            .wrap(Logger::default())
            .configure(configure_routes)
    })
    .bind((host, port))?
    .run()
    .await
}
