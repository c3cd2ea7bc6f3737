use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue};
use reqwest::Client;
use serde::Deserialize;

use crate::core::payments::{CheckoutClient, CheckoutRequest, CheckoutSession, PaymentsError};

const STRIPE_API_VERSION: &str = "2024-06-20";

/// Minimal Stripe REST client. Only checkout session creation is exposed.
pub struct StripeApiClient {
    client: Client,
    base_url: String,
}

impl StripeApiClient {
    pub fn new(secret_key: &str) -> Result<Self, PaymentsError> {
        let mut headers = HeaderMap::new();
        headers.insert(
            "Authorization",
            HeaderValue::from_str(&format!("Bearer {}", secret_key))
                .map_err(|e| PaymentsError::Api(e.to_string()))?,
        );
        headers.insert("Stripe-Version", HeaderValue::from_static(STRIPE_API_VERSION));

        let client = Client::builder()
            .default_headers(headers)
            .build()
            .map_err(|e| PaymentsError::Api(e.to_string()))?;

        Ok(Self {
            client,
            base_url: "https://api.stripe.com/v1".to_string(),
        })
    }

    /// Stripe takes nested parameters as bracketed form keys.
    fn session_form(request: &CheckoutRequest) -> Vec<(&'static str, String)> {
        vec![
            ("mode", "payment".to_string()),
            (
                "line_items[0][price_data][currency]",
                request.currency.clone(),
            ),
            (
                "line_items[0][price_data][unit_amount]",
                request.unit_amount.to_string(),
            ),
            (
                "line_items[0][price_data][product_data][name]",
                request.product_name.clone(),
            ),
            ("line_items[0][quantity]", request.quantity.to_string()),
            ("success_url", request.success_url.clone()),
            ("cancel_url", request.cancel_url.clone()),
        ]
    }
}

#[async_trait]
impl CheckoutClient for StripeApiClient {
    async fn create_session(
        &self,
        request: &CheckoutRequest,
    ) -> Result<CheckoutSession, PaymentsError> {
        let url = format!("{}/checkout/sessions", self.base_url);
        let resp = self
            .client
            .post(url)
            .form(&Self::session_form(request))
            .send()
            .await
            .map_err(|e| PaymentsError::Api(e.to_string()))?;

        let status = resp.status();
        if status.is_success() {
            resp.json::<CheckoutSession>()
                .await
                .map_err(|e| PaymentsError::Api(e.to_string()))
        } else {
            let message = resp
                .json::<ApiErrorBody>()
                .await
                .ok()
                .and_then(|body| body.error.message)
                .unwrap_or_else(|| "no error message".to_string());
            Err(PaymentsError::Api(format!(
                "Stripe returned {} for checkout session: {}",
                status, message
            )))
        }
    }
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    error: ApiErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ApiErrorDetail {
    #[serde(default)]
    message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::payments::CheckoutConfig;

    #[test]
    fn test_session_form_encodes_line_item() {
        let request = CheckoutRequest::from_config(&CheckoutConfig::default());
        let form = StripeApiClient::session_form(&request);

        let get = |key: &str| {
            form.iter()
                .find(|(k, _)| *k == key)
                .map(|(_, v)| v.as_str())
        };
        assert_eq!(get("mode"), Some("payment"));
        assert_eq!(get("line_items[0][price_data][currency]"), Some("usd"));
        assert_eq!(get("line_items[0][price_data][unit_amount]"), Some("500"));
        assert_eq!(
            get("line_items[0][price_data][product_data][name]"),
            Some("Coins")
        );
        assert_eq!(get("line_items[0][quantity]"), Some("1"));
        assert_eq!(
            get("success_url"),
            Some("http://localhost:5173/checkout?success=1")
        );
    }

    #[test]
    fn test_error_body_parses_message() {
        let body: ApiErrorBody =
            serde_json::from_str(r#"{"error":{"message":"Invalid API Key","type":"invalid_request_error"}}"#)
                .unwrap();
        assert_eq!(body.error.message.as_deref(), Some("Invalid API Key"));
    }

    #[test]
    fn test_rejects_unprintable_secret() {
        assert!(StripeApiClient::new("bad\nkey").is_err());
    }
}
