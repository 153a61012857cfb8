use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use audioguide_backend::controllers::markup::MarkupController;
use audioguide_backend::domain::narration::MarkupService;
use audioguide_backend::infrastructure::config::{Config, LogFormat};
use audioguide_backend::infrastructure::http::start_http_server;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env()?;

    // Initialize logging
    init_logging(&config);

    tracing::info!(
        "Starting Audioguide Backend on {}:{}",
        config.host,
        config.port
    );
    tracing::info!(
        environment = ?config.environment,
        markup_cache_enabled = config.markup_cache_enabled,
        max_content_chars = config.max_content_chars,
        max_terms = config.max_terms,
        "Configuration loaded"
    );

    let config = Arc::new(config);

    // === DEPENDENCY INJECTION SETUP ===
    // 1. Instantiate services
    tracing::info!("Instantiating services...");
    let markup_service = Arc::new(MarkupService::new(
        config.markup_cache_enabled,
        config.max_content_chars,
        config.max_terms,
    ));

    // 2. Instantiate controllers (inject services)
    tracing::info!("Instantiating controllers...");
    let markup_controller = Arc::new(MarkupController::new(markup_service));

    // Start HTTP server with all routes
    start_http_server(config, markup_controller).await?;

    Ok(())
}

fn init_logging(config: &Config) {
    if config.log_format == LogFormat::Json {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "audioguide_backend=debug,tower_http=debug".into()),
            )
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "audioguide_backend=debug,tower_http=debug".into()),
            )
            .with(tracing_subscriber::fmt::layer().pretty())
            .init();
    }
}
