// Payments infra layer.
// - `stripe_client.rs` talks to the Stripe HTTP API.

#[path = "stripe_client.rs"]
pub mod stripe_client;

pub use stripe_client::StripeApiClient;
