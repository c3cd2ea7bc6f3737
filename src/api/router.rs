use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use super::handlers;
use super::state::AppState;

/// All routes, with permissive CORS for the admin front-end.
pub fn build_router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(handlers::health))
        .route("/api/livekit/token", post(handlers::livekit_token))
        .route(
            "/payments/create-session",
            post(handlers::create_checkout_session),
        )
        .route("/payments/webhook", post(handlers::payments_webhook))
        .route("/api/moderation/classify", post(handlers::classify_text))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
