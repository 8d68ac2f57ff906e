use actix_cors::Cors;
use actix_web::{middleware, web, App, HttpServer};
use shortlist_score::config::Settings;
use shortlist_score::routes::{self, AppState};
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// Default JSON body limit (1 MiB); extractions are small structured records
const DEFAULT_JSON_LIMIT: usize = 1024 * 1024;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    // Load configuration
    let settings = match Settings::load() {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            return Err(std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string()));
        }
    };

    // Initialize logging (LOG_LEVEL / LOG_FORMAT win over the config file)
    let log_level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| settings.logging.level.clone());
    let log_format = std::env::var("LOG_FORMAT").unwrap_or_else(|_| settings.logging.format.clone());

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log_level)),
        )
        .with_target(false)
        .with_level(true);

    if log_format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.init();
    }

    info!("Starting Shortlist scoring service v{}", env!("CARGO_PKG_VERSION"));

    let analyzer = settings.analyzer();
    info!(
        "Analyzer initialized: must-have cap {}, {} acronyms, potential ceiling {}",
        analyzer.engine().rules().must_have_cap,
        analyzer.engine().matcher().acronyms().len(),
        settings.potential.ceiling
    );

    let app_state = AppState {
        analyzer: Arc::new(analyzer),
    };

    // Configure HTTP server
    let host = settings.server.host.clone();
    let port = settings.server.port;
    let workers = settings.server.workers.unwrap_or(4);
    let json_limit = settings.server.json_limit.unwrap_or(DEFAULT_JSON_LIMIT);

    info!("Starting HTTP server on {}:{}", host, port);

    let server = HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .app_data(routes::json_config(json_limit))
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::Compress::default())
            .configure(routes::configure_routes)
    })
    .workers(workers)
    .bind((host, port))
    .inspect_err(|e| error!("Failed to bind HTTP server: {}", e))?;

    server.run().await
}
