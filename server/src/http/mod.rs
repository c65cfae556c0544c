use axum::Router;
use axum::routing::get;

pub mod health;

pub fn routes() -> Router {
    Router::new()
        .route("/api/health", get(health::health))
}
