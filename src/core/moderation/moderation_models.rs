// Moderation domain models - input config and classification output.
//
// Pure data types with no HTTP dependencies.
// The HTTP layer serializes these straight to JSON.

use serde::{Deserialize, Serialize};

/// Which detectors are enabled and which extra words are blocked.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModerationConfig {
    pub enable_profanity_filter: bool,
    pub enable_spam_detection: bool,
    /// Matched as case-insensitive substrings.
    #[serde(default)]
    pub custom_blocked_words: Vec<String>,
}

impl Default for ModerationConfig {
    fn default() -> Self {
        Self {
            enable_profanity_filter: true,
            enable_spam_detection: true,
            custom_blocked_words: Vec::new(),
        }
    }
}

/// Recommended action for a piece of text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Suggestion {
    Allow,
    Review,
    Block,
}

impl Suggestion {
    /// Map a clamped confidence onto an action. Both thresholds are strict.
    pub fn from_confidence(confidence: f64) -> Self {
        if confidence > 0.8 {
            Suggestion::Block
        } else if confidence > 0.5 {
            Suggestion::Review
        } else {
            Suggestion::Allow
        }
    }
}

impl std::fmt::Display for Suggestion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Suggestion::Allow => write!(f, "allow"),
            Suggestion::Review => write!(f, "review"),
            Suggestion::Block => write!(f, "block"),
        }
    }
}

/// Result of classifying one piece of text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModerationResult {
    /// True iff at least one detector fired
    pub flagged: bool,
    /// Sum of detector weights, clamped to [0.0, 1.0]
    pub confidence: f64,
    /// One entry per detector that fired, in detection order
    pub reasons: Vec<String>,
    pub suggestion: Suggestion,
}

impl ModerationResult {
    /// Build a result from the reasons and raw score collected by the detectors.
    pub fn from_signals(reasons: Vec<String>, raw_confidence: f64) -> Self {
        let confidence = raw_confidence.clamp(0.0, 1.0);
        Self {
            flagged: !reasons.is_empty(),
            confidence,
            reasons,
            suggestion: Suggestion::from_confidence(confidence),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_enables_builtin_detectors() {
        let config = ModerationConfig::default();
        assert!(config.enable_profanity_filter);
        assert!(config.enable_spam_detection);
        assert!(config.custom_blocked_words.is_empty());
    }

    #[test]
    fn test_thresholds_are_strict() {
        assert_eq!(Suggestion::from_confidence(0.0), Suggestion::Allow);
        assert_eq!(Suggestion::from_confidence(0.5), Suggestion::Allow);
        assert_eq!(Suggestion::from_confidence(0.6), Suggestion::Review);
        assert_eq!(Suggestion::from_confidence(0.8), Suggestion::Review);
        assert_eq!(Suggestion::from_confidence(1.0), Suggestion::Block);
    }

    #[test]
    fn test_config_uses_camel_case_keys() {
        let config: ModerationConfig = serde_json::from_str(
            r#"{"enableProfanityFilter":false,"enableSpamDetection":true,"customBlockedWords":["foo"]}"#,
        )
        .unwrap();
        assert!(!config.enable_profanity_filter);
        assert!(config.enable_spam_detection);
        assert_eq!(config.custom_blocked_words, vec!["foo".to_string()]);
    }

    #[test]
    fn test_result_serializes_lowercase_suggestion() {
        let result = ModerationResult::from_signals(vec!["Contains profanity".to_string()], 0.8);
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["suggestion"], "review");
        assert_eq!(json["flagged"], true);
    }

    #[test]
    fn test_from_signals_clamps_score() {
        let result = ModerationResult::from_signals(
            vec!["a".to_string(), "b".to_string(), "c".to_string()],
            2.1,
        );
        assert_eq!(result.confidence, 1.0);
        assert_eq!(result.suggestion, Suggestion::Block);
    }
}
