// Payments service - checkout session creation and webhook intake.
//
// NO provider SDK here - the `CheckoutClient` port hides the HTTP API.

use super::payments_models::{CheckoutConfig, CheckoutRequest, CheckoutSession, WebhookReceipt};
use async_trait::async_trait;
use thiserror::Error;

// ============================================================================
// ERRORS
// ============================================================================

#[derive(Debug, Error)]
pub enum PaymentsError {
    #[error("Payments provider error: {0}")]
    Api(String),

    #[error("Webhook request has no signature")]
    MissingSignature,
}

// ============================================================================
// PROVIDER TRAIT (PORT)
// ============================================================================

/// Creates checkout sessions with the payments provider.
#[async_trait]
pub trait CheckoutClient: Send + Sync {
    async fn create_session(&self, request: &CheckoutRequest)
        -> Result<CheckoutSession, PaymentsError>;
}

#[async_trait]
impl<T: CheckoutClient + ?Sized> CheckoutClient for Box<T> {
    async fn create_session(
        &self,
        request: &CheckoutRequest,
    ) -> Result<CheckoutSession, PaymentsError> {
        (**self).create_session(request).await
    }
}

// ============================================================================
// CORE SERVICE
// ============================================================================

pub struct PaymentsService<C: CheckoutClient> {
    client: C,
    config: CheckoutConfig,
}

impl<C: CheckoutClient> PaymentsService<C> {
    pub fn new(client: C, config: CheckoutConfig) -> Self {
        Self { client, config }
    }

    /// Create a single-item checkout session for the configured product.
    pub async fn create_checkout_session(&self) -> Result<CheckoutSession, PaymentsError> {
        let request = CheckoutRequest::from_config(&self.config);
        let session = self.client.create_session(&request).await?;
        tracing::info!("Created checkout session {}", session.id);
        Ok(session)
    }
}

/// Accept a webhook delivery.
///
/// Only the presence of the signature header is checked; the signature
/// itself is not verified. The event type is pulled out for logging.
pub fn acknowledge_webhook(
    signature: Option<&str>,
    payload: &[u8],
) -> Result<WebhookReceipt, PaymentsError> {
    if signature.map_or(true, str::is_empty) {
        return Err(PaymentsError::MissingSignature);
    }

    let event_type = serde_json::from_slice::<serde_json::Value>(payload)
        .ok()
        .and_then(|event| event.get("type")?.as_str().map(str::to_string));

    tracing::info!(
        "Received payments webhook ({} bytes, type: {})",
        payload.len(),
        event_type.as_deref().unwrap_or("unknown")
    );

    Ok(WebhookReceipt { event_type })
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    struct MockCheckoutClient {
        requests: Mutex<Vec<CheckoutRequest>>,
        fail: bool,
    }

    impl MockCheckoutClient {
        fn new(fail: bool) -> Self {
            Self {
                requests: Mutex::new(Vec::new()),
                fail,
            }
        }
    }

    #[async_trait]
    impl CheckoutClient for MockCheckoutClient {
        async fn create_session(
            &self,
            request: &CheckoutRequest,
        ) -> Result<CheckoutSession, PaymentsError> {
            if self.fail {
                return Err(PaymentsError::Api("card_declined".to_string()));
            }
            self.requests.lock().unwrap().push(request.clone());
            Ok(CheckoutSession {
                id: "cs_test_123".to_string(),
                url: Some("https://checkout.example/cs_test_123".to_string()),
            })
        }
    }

    #[tokio::test]
    async fn test_create_session_uses_configured_product() {
        let config = CheckoutConfig {
            public_web_url: "https://app.example".to_string(),
            ..CheckoutConfig::default()
        };
        let service = PaymentsService::new(MockCheckoutClient::new(false), config);

        let session = service.create_checkout_session().await.unwrap();
        assert_eq!(session.id, "cs_test_123");

        let requests = service.client.requests.lock().unwrap();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].unit_amount, 500);
        assert_eq!(
            requests[0].cancel_url,
            "https://app.example/checkout?canceled=1"
        );
    }

    #[tokio::test]
    async fn test_provider_error_propagates() {
        let service = PaymentsService::new(MockCheckoutClient::new(true), CheckoutConfig::default());
        let err = service.create_checkout_session().await.unwrap_err();
        assert!(matches!(err, PaymentsError::Api(_)));
    }

    #[test]
    fn test_webhook_requires_signature() {
        assert!(matches!(
            acknowledge_webhook(None, b"{}"),
            Err(PaymentsError::MissingSignature)
        ));
        assert!(matches!(
            acknowledge_webhook(Some(""), b"{}"),
            Err(PaymentsError::MissingSignature)
        ));
    }

    #[test]
    fn test_webhook_reads_event_type() {
        let receipt = acknowledge_webhook(
            Some("t=1,v1=abc"),
            br#"{"id":"evt_1","type":"checkout.session.completed"}"#,
        )
        .unwrap();
        assert_eq!(
            receipt.event_type.as_deref(),
            Some("checkout.session.completed")
        );
    }

    #[test]
    fn test_webhook_accepts_unreadable_payload() {
        let receipt = acknowledge_webhook(Some("t=1,v1=abc"), b"not json").unwrap();
        assert!(receipt.event_type.is_none());
    }
}
