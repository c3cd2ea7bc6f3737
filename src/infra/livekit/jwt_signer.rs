// LiveKit access token signer.
//
// LiveKit tokens are plain HS256 JWTs signed with the project's API secret.
// The API key goes in `iss`, the participant identity in `sub`, and the room
// permissions in the `video` claim.

use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use serde::{Deserialize, Serialize};
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use crate::core::livekit::{LivekitError, TokenSigner, VideoGrant};

/// Same default lifetime the LiveKit server SDKs use.
const DEFAULT_TOKEN_TTL: Duration = Duration::from_secs(6 * 60 * 60);

/// JWT claims understood by the LiveKit server.
#[derive(Debug, Serialize, Deserialize)]
pub struct LivekitClaims {
    /// API key
    pub iss: String,
    /// Participant identity
    pub sub: String,
    /// Token id, set to the identity
    pub jti: String,
    /// Not before (Unix timestamp)
    pub nbf: u64,
    /// Expiration (Unix timestamp)
    pub exp: u64,
    pub video: VideoGrant,
}

pub struct LivekitJwtSigner {
    api_key: String,
    encoding_key: EncodingKey,
    ttl: Duration,
}

impl LivekitJwtSigner {
    pub fn new(api_key: String, api_secret: &str) -> Self {
        Self {
            api_key,
            encoding_key: EncodingKey::from_secret(api_secret.as_bytes()),
            ttl: DEFAULT_TOKEN_TTL,
        }
    }

    #[allow(dead_code)]
    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = ttl;
        self
    }

    fn now_secs() -> Result<u64, LivekitError> {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .map_err(|e| LivekitError::Signing(e.to_string()))
    }
}

impl TokenSigner for LivekitJwtSigner {
    fn sign(&self, identity: &str, grant: &VideoGrant) -> Result<String, LivekitError> {
        let now = Self::now_secs()?;
        let claims = LivekitClaims {
            iss: self.api_key.clone(),
            sub: identity.to_string(),
            jti: identity.to_string(),
            nbf: now,
            exp: now + self.ttl.as_secs(),
            video: grant.clone(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| LivekitError::Signing(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jsonwebtoken::{decode, DecodingKey, Validation};

    const SECRET: &str = "test-livekit-secret";

    fn decode_claims(token: &str) -> LivekitClaims {
        decode::<LivekitClaims>(
            token,
            &DecodingKey::from_secret(SECRET.as_bytes()),
            &Validation::new(Algorithm::HS256),
        )
        .expect("token should verify with the same secret")
        .claims
    }

    #[test]
    fn test_token_carries_identity_and_grant() {
        let signer = LivekitJwtSigner::new("APIkey123".to_string(), SECRET);
        let grant = VideoGrant::participant(Some("lobby".to_string()));

        let token = signer.sign("alice", &grant).unwrap();
        let claims = decode_claims(&token);

        assert_eq!(claims.iss, "APIkey123");
        assert_eq!(claims.sub, "alice");
        assert_eq!(claims.jti, "alice");
        assert_eq!(claims.video, grant);
        assert_eq!(claims.exp - claims.nbf, DEFAULT_TOKEN_TTL.as_secs());
    }

    #[test]
    fn test_custom_ttl() {
        let signer = LivekitJwtSigner::new("key".to_string(), SECRET)
            .with_ttl(Duration::from_secs(600));
        let token = signer.sign("bob", &VideoGrant::participant(None)).unwrap();
        let claims = decode_claims(&token);

        assert_eq!(claims.exp - claims.nbf, 600);
        assert!(claims.video.room.is_none());
    }

    #[test]
    fn test_wrong_secret_fails_verification() {
        let signer = LivekitJwtSigner::new("key".to_string(), SECRET);
        let token = signer.sign("carol", &VideoGrant::participant(None)).unwrap();

        let result = decode::<LivekitClaims>(
            &token,
            &DecodingKey::from_secret(b"other-secret"),
            &Validation::new(Algorithm::HS256),
        );
        assert!(result.is_err());
    }
}
