// LiveKit token service - decides who joins which room with which rights.
//
// Signing is delegated to a `TokenSigner` so the core stays free of JWT details.

use super::livekit_models::{IssuedToken, TokenRequest, VideoGrant};
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum LivekitError {
    #[error("Token signing failed: {0}")]
    Signing(String),
}

/// Turns an identity and grant into a signed access token.
pub trait TokenSigner: Send + Sync {
    fn sign(&self, identity: &str, grant: &VideoGrant) -> Result<String, LivekitError>;
}

impl<T: TokenSigner + ?Sized> TokenSigner for Box<T> {
    fn sign(&self, identity: &str, grant: &VideoGrant) -> Result<String, LivekitError> {
        (**self).sign(identity, grant)
    }
}

pub struct LivekitService<S: TokenSigner> {
    signer: S,
    url: String,
}

impl<S: TokenSigner> LivekitService<S> {
    /// `url` is the LiveKit server the client should connect to.
    pub fn new(signer: S, url: String) -> Self {
        Self { signer, url }
    }

    /// Issue a participant token. Anonymous callers get a `guest-<uuid>` identity.
    pub fn issue_token(&self, request: TokenRequest) -> Result<IssuedToken, LivekitError> {
        let identity = request
            .identity
            .filter(|id| !id.is_empty())
            .unwrap_or_else(guest_identity);
        let grant = VideoGrant::participant(request.room_name.clone());

        let token = self.signer.sign(&identity, &grant)?;
        tracing::info!(
            "Issued LiveKit token for {} (room: {})",
            identity,
            request.room_name.as_deref().unwrap_or("<any>")
        );

        Ok(IssuedToken {
            token,
            url: self.url.clone(),
            identity,
            room_name: request.room_name,
        })
    }
}

fn guest_identity() -> String {
    format!("guest-{}", Uuid::new_v4())
}
