// Text moderation service - rule-based classification of user-submitted text.
//
// Three independent detectors each add a weight to the confidence score:
// - Profanity (built-in word list)
// - Spam (shouting or long character runs)
// - Custom blocked words (from config, always on)
//
// NO HTTP dependencies here - just pure domain logic.

use super::moderation_models::{ModerationConfig, ModerationResult};

// ============================================================================
// DETECTOR CONSTANTS
// ============================================================================

/// Built-in blocked terms, matched as lower-case substrings.
pub const PROFANITY_WORDS: &[&str] = &["spam", "scam"];

pub const PROFANITY_WEIGHT: f64 = 0.8;
pub const SPAM_WEIGHT: f64 = 0.6;
pub const BLOCKED_WORDS_WEIGHT: f64 = 0.7;

pub const PROFANITY_REASON: &str = "Contains profanity";
pub const SPAM_REASON: &str = "Potential spam content";
pub const BLOCKED_WORDS_REASON: &str = "Contains blocked words";

/// Uppercase share above which text counts as shouting.
const MAX_CAPS_RATIO: f64 = 0.5;

/// Shortest run of one repeated character that counts as spam.
const MIN_REPEAT_RUN: usize = 5;

// ============================================================================
// CORE SERVICE
// ============================================================================

/// Stateless classifier bound to one config.
///
/// Holds nothing mutable, so a single instance can be shared across tasks.
#[derive(Debug, Clone)]
pub struct TextModerator {
    config: ModerationConfig,
}

/// Create a moderator bound to `config`.
pub fn create_moderator(config: ModerationConfig) -> TextModerator {
    TextModerator::new(config)
}

impl TextModerator {
    pub fn new(config: ModerationConfig) -> Self {
        Self { config }
    }

    /// Classify a piece of text. Never fails, including on empty input.
    pub fn classify(&self, text: &str) -> ModerationResult {
        classify(text, &self.config)
    }
}

/// Run every enabled detector over `text` and combine their signals.
pub fn classify(text: &str, config: &ModerationConfig) -> ModerationResult {
    let lower = text.to_lowercase();
    let mut reasons = Vec::new();
    let mut confidence = 0.0;

    if config.enable_profanity_filter && contains_profanity(&lower) {
        confidence += PROFANITY_WEIGHT;
        reasons.push(PROFANITY_REASON.to_string());
    }

    if config.enable_spam_detection && looks_like_spam(text) {
        confidence += SPAM_WEIGHT;
        reasons.push(SPAM_REASON.to_string());
    }

    if contains_blocked_word(&lower, &config.custom_blocked_words) {
        confidence += BLOCKED_WORDS_WEIGHT;
        reasons.push(BLOCKED_WORDS_REASON.to_string());
    }

    let result = ModerationResult::from_signals(reasons, confidence);
    if result.flagged {
        tracing::debug!(
            "Moderation flagged text: confidence={:.2} suggestion={} reasons={:?}",
            result.confidence,
            result.suggestion,
            result.reasons
        );
    }
    result
}

/// `lower` must already be lower-cased.
fn contains_profanity(lower: &str) -> bool {
    PROFANITY_WORDS.iter().any(|word| lower.contains(word))
}

/// `lower` must already be lower-cased.
fn contains_blocked_word(lower: &str, blocked: &[String]) -> bool {
    blocked
        .iter()
        .any(|word| lower.contains(word.to_lowercase().as_str()))
}

fn looks_like_spam(text: &str) -> bool {
    caps_ratio(text) > MAX_CAPS_RATIO || longest_repeat_run(text) >= MIN_REPEAT_RUN
}

/// Share of ASCII uppercase letters among all characters. Empty text is 0.0.
fn caps_ratio(text: &str) -> f64 {
    let total = text.chars().count();
    if total == 0 {
        return 0.0;
    }
    let upper = text.chars().filter(|c| c.is_ascii_uppercase()).count();
    upper as f64 / total as f64
}

/// Length of the longest run of one repeated character.
///
/// Line terminators never form a run.
fn longest_repeat_run(text: &str) -> usize {
    let mut longest = 0;
    let mut current = 0;
    let mut previous: Option<char> = None;

    for c in text.chars() {
        if is_line_terminator(c) {
            previous = None;
            current = 0;
            continue;
        }
        if previous == Some(c) {
            current += 1;
        } else {
            previous = Some(c);
            current = 1;
        }
        longest = longest.max(current);
    }

    longest
}

fn is_line_terminator(c: char) -> bool {
    matches!(c, '\n' | '\r' | '\u{2028}' | '\u{2029}')
}

// ============================================================================
// TESTS
// ============================================================================
