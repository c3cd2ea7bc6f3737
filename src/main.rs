// This is the entry point of the demo platform backend.
//
// **Architecture Overview:**
// - `core/` = Business logic (moderation, token issuing, checkout rules)
// - `infra/` = Implementations of core traits (JWT signing, Stripe API)
// - `api/` = HTTP adapters (routes, handlers, error responses)
//
// This file's job is to:
// 1. Load configuration
// 2. Initialize services (dependency injection)
// 3. Build the router and serve it

// These attrs point each module declaration at a more descriptive root file
// so we don't end up with half a dozen mod.rs files that all look the same.
#[path = "api/api_layer.rs"]
mod api;
mod config;
#[path = "core/core_layer.rs"]
mod core;
#[path = "infra/infra_layer.rs"]
mod infra;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use crate::api::state::{DynLivekitService, DynPaymentsService};
use crate::api::{build_router, AppState};
use crate::config::AppConfig;
use crate::core::livekit::{LivekitService, TokenSigner};
use crate::core::moderation::create_moderator;
use crate::core::payments::{CheckoutClient, CheckoutConfig, PaymentsService};
use crate::infra::livekit::LivekitJwtSigner;
use crate::infra::payments::StripeApiClient;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file (if it exists)
    dotenv::dotenv().ok();

    // Initialize logging so we can see what's happening
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = AppConfig::from_env();

    // ========================================================================
    // DEPENDENCY INJECTION
    // ========================================================================
    // Create our services with their dependencies.
    // This is the "composition root" where we wire everything together.

    let livekit: Option<DynLivekitService> = match &config.livekit {
        Some(settings) => {
            let signer = LivekitJwtSigner::new(settings.api_key.clone(), &settings.api_secret);
            tracing::info!("LiveKit tokens enabled for {}", settings.url);
            Some(LivekitService::new(
                Box::new(signer) as Box<dyn TokenSigner>,
                settings.url.clone(),
            ))
        }
        None => {
            tracing::warn!("LIVEKIT_URL/API KEY/SECRET not set, token route will return 500");
            None
        }
    };

    let payments: Option<DynPaymentsService> = match &config.stripe_secret_key {
        Some(secret) => {
            let client =
                StripeApiClient::new(secret).context("Failed to create Stripe API client")?;
            let checkout = CheckoutConfig {
                public_web_url: config.public_web_url.clone(),
                ..CheckoutConfig::default()
            };
            tracing::info!("Stripe checkout enabled");
            Some(PaymentsService::new(
                Box::new(client) as Box<dyn CheckoutClient>,
                checkout,
            ))
        }
        None => {
            tracing::warn!("STRIPE_SECRET_KEY not set, checkout route will return 500");
            None
        }
    };

    tracing::info!(
        "Moderation: profanity={} spam={} custom words={}",
        config.moderation.enable_profanity_filter,
        config.moderation.enable_spam_detection,
        config.moderation.custom_blocked_words.len()
    );

    let state = Arc::new(AppState {
        moderator: create_moderator(config.moderation.clone()),
        livekit,
        payments,
    });

    // ========================================================================
    // HTTP SERVER
    // ========================================================================

    let app = build_router(state);
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    tracing::info!("[backend] listening on http://{}", addr);
    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
