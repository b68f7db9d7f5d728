use actix_cors::Cors;
use actix_web::{middleware, web, App, HttpServer};
use ria_matchmaker::config::{LoggingSettings, Settings};
use ria_matchmaker::core::Matcher;
use ria_matchmaker::routes::{self, AppState};
use ria_matchmaker::services::DatasetCache;
use std::path::PathBuf;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    let loaded = Settings::load();

    // Initialize logging; env vars win over the [logging] section
    let logging = match &loaded {
        Ok(settings) => settings.logging.clone(),
        Err(_) => LoggingSettings::default(),
    }
    .with_env_overrides();

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(&logging.level).unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .with_level(true);

    if logging.format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.init();
    }

    info!("Starting RIA matchmaker service...");

    let settings = loaded.map_err(|e| {
        error!("Failed to load configuration: {}", e);
        std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string())
    })?;

    info!("Configuration loaded successfully");

    let weights = settings.scoring.weights.to_weights().map_err(|e| {
        error!("Invalid scoring weights: {}", e);
        std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string())
    })?;
    let matcher = Matcher::new(weights);

    info!("Matcher initialized with weights: {:?}", matcher.weights());

    let cache_ttl = settings.dataset.cache_ttl_secs.unwrap_or(3600);
    let cache_capacity = settings.dataset.cache_capacity.unwrap_or(4);
    let datasets = DatasetCache::new(cache_capacity, cache_ttl);
    let dataset_path = PathBuf::from(&settings.dataset.path);

    // Warm the cache; the service still starts and reports degraded health on failure
    match datasets.get(&dataset_path).await {
        Ok(dataset) => info!("{} investment advisers loaded from {}", dataset.len(), dataset_path.display()),
        Err(e) => warn!("Dataset not loaded at startup ({}): {}", dataset_path.display(), e),
    }

    let app_state = AppState {
        datasets,
        dataset_path,
        matcher,
        top_n: settings.analytics.top_n,
    };

    let host = settings.server.host.clone();
    let port = settings.server.port;
    let workers = settings.server.workers.unwrap_or(4);

    info!("Starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .configure(routes::configure_payload_errors)
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
