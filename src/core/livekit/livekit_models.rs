// LiveKit domain models - token requests and room grants.

use serde::{Deserialize, Serialize};

/// Room permissions embedded in an access token.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoGrant {
    pub room_join: bool,
    /// Omitted from the token when the caller didn't name a room
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub room: Option<String>,
    pub can_publish: bool,
    pub can_subscribe: bool,
    pub can_publish_data: bool,
}

impl VideoGrant {
    /// Full participant rights: join, publish, subscribe and send data.
    pub fn participant(room: Option<String>) -> Self {
        Self {
            room_join: true,
            room,
            can_publish: true,
            can_subscribe: true,
            can_publish_data: true,
        }
    }
}

/// Caller input for a token. Both fields are optional.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenRequest {
    #[serde(default)]
    pub identity: Option<String>,
    #[serde(default)]
    pub room_name: Option<String>,
}

/// A signed token plus what the client needs to connect with it.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IssuedToken {
    pub token: String,
    pub url: String,
    pub identity: String,
    /// Serialized as `null` when absent
    pub room_name: Option<String>,
}
