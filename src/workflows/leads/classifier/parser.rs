use std::sync::LazyLock;

use regex::Regex;

use super::super::domain::Intent;

pub const NO_EXPLANATION_PLACEHOLDER: &str = "No explanation provided.";

static INTENT_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)intent:\s*(high|medium|low)").unwrap());
static EXPLANATION_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)explanation:\s*(.*)").unwrap());

/// Verdict extracted from the oracle's free text.
///
/// `used_fallback` distinguishes a genuinely Low verdict from a Low that was defaulted
/// because the reply carried no recognizable intent line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntentVerdict {
    pub intent: Intent,
    pub explanation: String,
    pub used_fallback: bool,
}

/// Lenient parse that never fails: a missing intent defaults to Low and a missing or
/// blank explanation becomes a fixed placeholder.
pub fn parse_verdict(response: &str) -> IntentVerdict {
    let (intent, used_fallback) = match INTENT_PATTERN.captures(response) {
        Some(captures) => {
            let intent = match captures[1].to_ascii_lowercase().as_str() {
                "high" => Intent::High,
                "medium" => Intent::Medium,
                _ => Intent::Low,
            };
            (intent, false)
        }
        None => (Intent::Low, true),
    };

    let explanation = EXPLANATION_PATTERN
        .captures(response)
        .map(|captures| captures[1].trim().to_string())
        .filter(|text| !text.is_empty())
        .unwrap_or_else(|| NO_EXPLANATION_PLACEHOLDER.to_string());

    IntentVerdict {
        intent,
        explanation,
        used_fallback,
    }
}
