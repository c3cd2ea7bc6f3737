// Process configuration, read from environment variables.
//
// `main` loads `.env` first, then calls `AppConfig::from_env()`.
// Parsing goes through a lookup closure so tests never touch the real environment.

use crate::core::moderation::ModerationConfig;
use crate::core::payments::DEFAULT_PUBLIC_WEB_URL;

const DEFAULT_PORT: u16 = 5000;

/// LiveKit project credentials. Only built when all three are set.
#[derive(Debug, Clone, PartialEq)]
pub struct LivekitSettings {
    pub url: String,
    pub api_key: String,
    pub api_secret: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub port: u16,
    pub livekit: Option<LivekitSettings>,
    pub stripe_secret_key: Option<String>,
    pub public_web_url: String,
    pub moderation: ModerationConfig,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the config from any key lookup. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let port = match get("PORT") {
            Some(raw) => raw.trim().parse::<u16>().unwrap_or_else(|_| {
                tracing::warn!("Invalid PORT value {:?}, using {}", raw, DEFAULT_PORT);
                DEFAULT_PORT
            }),
            None => DEFAULT_PORT,
        };

        let livekit = match (
            get("LIVEKIT_URL"),
            get("LIVEKIT_API_KEY"),
            get("LIVEKIT_API_SECRET"),
        ) {
            (Some(url), Some(api_key), Some(api_secret)) => Some(LivekitSettings {
                url,
                api_key,
                api_secret,
            }),
            _ => None,
        };

        let defaults = ModerationConfig::default();
        let moderation = ModerationConfig {
            enable_profanity_filter: parse_flag(
                get("MODERATION_ENABLE_PROFANITY"),
                defaults.enable_profanity_filter,
            ),
            enable_spam_detection: parse_flag(
                get("MODERATION_ENABLE_SPAM"),
                defaults.enable_spam_detection,
            ),
            custom_blocked_words: get("MODERATION_BLOCKED_WORDS")
                .map(|raw| parse_word_list(&raw))
                .unwrap_or_default(),
        };

        Self {
            port,
            livekit,
            stripe_secret_key: get("STRIPE_SECRET_KEY"),
            public_web_url: get("PUBLIC_WEB_URL")
                .unwrap_or_else(|| DEFAULT_PUBLIC_WEB_URL.to_string()),
            moderation,
        }
    }
}

fn parse_flag(value: Option<String>, default: bool) -> bool {
    match value.as_deref().map(|v| v.trim().to_ascii_lowercase()) {
        Some(v) if matches!(v.as_str(), "1" | "true" | "yes" | "on") => true,
        Some(v) if matches!(v.as_str(), "0" | "false" | "no" | "off") => false,
        Some(v) => {
            tracing::warn!("Unrecognised boolean {:?}, using {}", v, default);
            default
        }
        None => default,
    }
}

/// Comma-separated list, trimmed, empties dropped.
fn parse_word_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|w| !w.is_empty())
        .map(str::to_string)
        .collect()
}
