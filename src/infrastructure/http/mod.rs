pub mod request_id;

use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::controllers::{health, markup::MarkupController};
use crate::infrastructure::config::Config;
pub use request_id::{request_id_middleware, RequestId, X_REQUEST_ID};

/// Build the application router with all routes and layers
pub fn build_router(config: &Config, markup_controller: Arc<MarkupController>) -> Router {
    let markup_routes = Router::new()
        .route("/api/markup/synthesize", post(MarkupController::synthesize))
        .route("/api/markup/preview", post(MarkupController::preview))
        .route("/api/markup/warnings", post(MarkupController::warnings))
        .route("/api/vendors", get(MarkupController::list_vendors))
        .route("/api/vendors/:vendor", get(MarkupController::get_vendor))
        .with_state(markup_controller);

    let app = Router::new()
        .route("/health", get(health::health))
        .route("/health/ready", get(health::health_ready))
        .merge(markup_routes)
        .layer(
            ServiceBuilder::new()
                .layer(middleware::from_fn(request_id_middleware))
                .layer(TraceLayer::new_for_http()),
        );

    // Local preview panes run on another origin during development
    if config.is_development() {
        app.layer(CorsLayer::permissive())
    } else {
        app
    }
}

/// Start the HTTP server with all routes configured
pub async fn start_http_server(
    config: Arc<Config>,
    markup_controller: Arc<MarkupController>,
) -> Result<(), Box<dyn std::error::Error>> {
    let app = build_router(&config, markup_controller);

    let listener =
        tokio::net::TcpListener::bind(format!("{}:{}", config.host, config.port)).await?;

    tracing::info!("Server listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}
