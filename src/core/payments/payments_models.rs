// Payments domain models - checkout sessions and webhook receipts.
//
// No provider types leak in here; the infra client maps these to its wire format.

use serde::{Deserialize, Serialize};

pub const DEFAULT_PUBLIC_WEB_URL: &str = "http://localhost:5173";

/// What the checkout sells and where the buyer lands afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckoutConfig {
    pub currency: String,
    /// Smallest currency unit (cents for USD)
    pub unit_amount: u64,
    pub product_name: String,
    pub quantity: u32,
    /// Front-end origin used for the success/cancel redirects
    pub public_web_url: String,
}

impl Default for CheckoutConfig {
    fn default() -> Self {
        Self {
            currency: "usd".to_string(),
            unit_amount: 500, // $5.00
            product_name: "Coins".to_string(),
            quantity: 1,
            public_web_url: DEFAULT_PUBLIC_WEB_URL.to_string(),
        }
    }
}

/// One-off payment session request handed to the provider.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckoutRequest {
    pub currency: String,
    pub unit_amount: u64,
    pub product_name: String,
    pub quantity: u32,
    pub success_url: String,
    pub cancel_url: String,
}

impl CheckoutRequest {
    pub fn from_config(config: &CheckoutConfig) -> Self {
        let base = config.public_web_url.trim_end_matches('/');
        Self {
            currency: config.currency.clone(),
            unit_amount: config.unit_amount,
            product_name: config.product_name.clone(),
            quantity: config.quantity,
            success_url: format!("{}/checkout?success=1", base),
            cancel_url: format!("{}/checkout?canceled=1", base),
        }
    }
}

/// Session created by the provider. `url` is where the buyer is redirected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckoutSession {
    pub id: String,
    pub url: Option<String>,
}

/// What we learned from an accepted webhook delivery.
#[derive(Debug, Clone, PartialEq)]
pub struct WebhookReceipt {
    /// Provider event type, when the payload was readable JSON
    #[allow(dead_code)]
    pub event_type: Option<String>,
}
