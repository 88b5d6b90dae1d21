use axum::{routing::get, Router};

/// GET /ready - readiness check
async fn ready() -> &'static str {
    "OK"
}

pub fn router() -> Router {
    Router::new().route("/ready", get(ready))
}
