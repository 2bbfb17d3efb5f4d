use actix_cors::Cors;
use actix_web::{middleware, web, App, HttpServer};
use sportmap::config::{LoggingSettings, Settings};
use sportmap::routes::{self, handle_json_payload_error, handle_query_payload_error, AppState};
use sportmap::services::{EventCatalog, PresenceStore};
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn init_logging(logging: &LoggingSettings) {
    // RUST_LOG wins over the configured level
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&logging.level));
    let log_format = std::env::var("LOG_FORMAT").unwrap_or_else(|_| logging.format.clone());

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(true);

    if log_format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.compact().init();
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    // SPORTMAP_CONFIG points at a single file instead of the config/ directory
    let settings = match std::env::var("SPORTMAP_CONFIG") {
        Ok(path) => Settings::load_from(path),
        Err(_) => Settings::load(),
    };
    let logging = settings
        .as_ref()
        .map(|s| s.logging.clone())
        .unwrap_or_default();
    init_logging(&logging);

    let settings = settings.map_err(|e| {
        error!("Failed to load configuration: {}", e);
        std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string())
    })?;

    info!("Starting SportMap service...");

    let catalog = EventCatalog::from_settings(&settings.events).map_err(|e| {
        error!("Failed to build event source: {}", e);
        std::io::Error::new(std::io::ErrorKind::Other, e.to_string())
    })?;

    match catalog.reload().await {
        Ok(count) => info!("Event catalog ready ({} events)", count),
        Err(e) => {
            error!("Failed to load events: {}", e);
            return Err(std::io::Error::new(std::io::ErrorKind::Other, e.to_string()));
        }
    }

    let presence = PresenceStore::from_settings(&settings.presence);
    info!(
        "Presence store initialized (capacity: {}, max age: {}s)",
        settings.presence.capacity, settings.presence.max_age_secs
    );

    let app_state = AppState {
        catalog: Arc::new(catalog),
        presence: Arc::new(presence),
        filters: settings.filters.clone(),
    };

    // Configure HTTP server
    let host = settings.server.host.clone();
    let port = settings.server.port;
    let workers = settings.server.workers.unwrap_or(4);

    info!("Starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .app_data(web::JsonConfig::default().error_handler(handle_json_payload_error))
            .app_data(web::QueryConfig::default().error_handler(handle_query_payload_error))
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::Compress::default())
            .configure(routes::configure_routes)
    })
    .workers(workers)
    .bind((host, port))?
    .run()
    .await
}
