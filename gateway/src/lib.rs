pub mod backend;
pub mod config;
pub mod error;
pub mod logging;
pub mod routes;
pub mod test_util;

pub use backend::BackendClient;
pub use config::{AssetsConfig, BackendConfig, Config, LoggingConfig, ServerConfig};
pub use error::Error;

use std::sync::Arc;

use axum::{middleware, Router};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

/// Shared application state.
pub struct AppState {
    pub config: Config,
    /// Client for the backend invocations are delegated to.
    pub backend: BackendClient,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let backend = BackendClient::new(&config.backend.base_url());
        Self { config, backend }
    }
}

/// Build the gateway application: `/gateway`, `/ready` and `/assets`.
pub fn app(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let assets = ServeDir::new(&state.config.assets.dir);

    Router::new()
        .merge(routes::health::router())
        .merge(routes::gateway::router(state))
        .nest_service("/assets", assets)
        .layer(cors)
        .layer(middleware::from_fn(logging::request_logger))
        .layer(TraceLayer::new_for_http())
}
