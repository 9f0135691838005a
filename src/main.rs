use actix_cors::Cors;
use actix_web::{middleware, web, App, HttpServer};
use brew_quality::config::{LogFormat, LoggingSettings, Settings};
use brew_quality::core::{QualityClassifier, Recommender};
use brew_quality::routes::{self, AppState};
use brew_quality::services;
use std::sync::Arc;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

fn init_tracing(logging: &LoggingSettings) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logging.level));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(true);

    match logging.log_format() {
        LogFormat::Json => subscriber.json().init(),
        LogFormat::Pretty => subscriber.pretty().init(),
        LogFormat::Full => subscriber.init(),
    }
}

fn startup_error(what: &str, err: impl std::fmt::Display) -> std::io::Error {
    error!("{}: {}", what, err);
    std::io::Error::new(std::io::ErrorKind::Other, format!("{}: {}", what, err))
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    let settings = Settings::load();
    let logging = settings
        .as_ref()
        .map(|s| s.logging.clone())
        .unwrap_or_default();
    init_tracing(&logging);

    info!("Starting brew-quality service...");

    let settings = settings.map_err(|e| startup_error("Failed to load configuration", e))?;

    info!("Configuration loaded successfully");

    // The service is not ready without a model
    let forest = services::load_model(&settings.model.path)
        .map_err(|e| startup_error("Failed to load classifier", e))?;

    info!(
        "Classifier loaded from {} ({} trees, labels: {:?})",
        settings.model.path.display(),
        forest.tree_count(),
        forest.labels()
    );

    let target_label = settings.recommend.target_label.clone();
    if !forest.labels().iter().any(|l| *l == target_label) {
        warn!(
            "Model cannot emit target label {:?}; recommendations will always be empty",
            target_label
        );
    }

    let catalog = services::load_catalog(settings.catalog.path.as_deref())
        .map_err(|e| startup_error("Failed to load catalog", e))?;

    info!("Catalog loaded with {} profiles", catalog.len());

    let recommender = Recommender::new(
        Arc::new(catalog),
        target_label,
        settings.recommend.max_results,
    );

    let app_state = AppState {
        classifier: Arc::new(forest),
        recommender,
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
