// HTTP handlers.
//
// Same shape as every adapter in this repo:
// 1. Pull plain data out of the request
// 2. Call the core service
// 3. Turn the result (or error) into JSON
//
// No business logic lives here.

use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use chrono::{SecondsFormat, Utc};
use serde::Deserialize;
use serde_json::{json, Value};

use super::error::{ApiError, ApiResult};
use super::state::AppState;
use crate::core::livekit::{IssuedToken, TokenRequest};
use crate::core::moderation::ModerationResult;
use crate::core::payments::{acknowledge_webhook, CheckoutSession, PaymentsError};

pub const SIGNATURE_HEADER: &str = "stripe-signature";

/// GET /health
pub async fn health() -> Json<Value> {
    Json(json!({
        "ok": true,
        "service": "backend",
        "time": Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
    }))
}

/// POST /api/livekit/token
///
/// The body is optional; anything that isn't a JSON object is treated as `{}`.
pub async fn livekit_token(
    State(state): State<Arc<AppState>>,
    payload: Option<Json<TokenRequest>>,
) -> ApiResult<Json<IssuedToken>> {
    let livekit = state
        .livekit
        .as_ref()
        .ok_or_else(|| ApiError::internal("LIVEKIT_URL/API KEY/SECRET missing"))?;

    let request = payload.map(|Json(req)| req).unwrap_or_default();
    livekit.issue_token(request).map(Json).map_err(|e| {
        tracing::error!("livekit token error: {}", e);
        ApiError::internal("token_failed")
    })
}

/// POST /payments/create-session
pub async fn create_checkout_session(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<CheckoutSession>> {
    let payments = state
        .payments
        .as_ref()
        .ok_or_else(|| ApiError::internal("STRIPE_SECRET_KEY missing"))?;

    payments
        .create_checkout_session()
        .await
        .map(Json)
        .map_err(|e| {
            tracing::error!("create-session error: {}", e);
            ApiError::internal("stripe_failed")
        })
}

/// POST /payments/webhook
///
/// Takes the raw body so a signature check can be added without re-serializing.
pub async fn payments_webhook(headers: HeaderMap, body: Bytes) -> Response {
    let signature = headers
        .get(SIGNATURE_HEADER)
        .and_then(|v| v.to_str().ok());

    match acknowledge_webhook(signature, &body) {
        Ok(_) => Json(json!({ "ok": true })).into_response(),
        Err(PaymentsError::MissingSignature) => {
            (StatusCode::BAD_REQUEST, "No signature").into_response()
        }
        Err(e) => {
            tracing::error!("webhook error: {}", e);
            ApiError::internal("webhook_failed").into_response()
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ClassifyRequest {
    pub text: String,
}

/// POST /api/moderation/classify
pub async fn classify_text(
    State(state): State<Arc<AppState>>,
    Json(req): Json<ClassifyRequest>,
) -> Json<ModerationResult> {
    Json(state.moderator.classify(&req.text))
}
