//! Deterministic extraction of requirements and preferences from
//! free-text requests.
//!
//! Both entry points are pure: identical text always yields identical
//! output, and input that matches nothing yields empty fields rather
//! than an error.

mod lexicon;
mod normalizer;
mod numeric;

use crate::recommend::domain::{Preferences, Requirements};
use normalizer::normalize_text;
use regex::Regex;
use std::sync::OnceLock;

static AVOID_PHRASE_PATTERN: OnceLock<Regex> = OnceLock::new();

fn avoid_phrase_pattern() -> &'static Regex {
    AVOID_PHRASE_PATTERN
        .get_or_init(|| Regex::new(r"(?:avoid|no)\s+([a-z\s]+)").expect("pattern compiles"))
}

/// Extract hard-ish outfit requirements from the request text.
pub fn extract_requirements(text: &str) -> Requirements {
    let normalized = normalize_text(text);

    let occasion = lexicon::first_match(&normalized, lexicon::OCCASION_KEYWORDS)
        .unwrap_or_default()
        .to_string();
    let seasonality = lexicon::first_match(&normalized, lexicon::SEASON_KEYWORDS)
        .unwrap_or_default()
        .to_string();

    let colors = lexicon::all_matches(&normalized, lexicon::COLOR_KEYWORDS);
    let exclusions = lexicon::all_matches(&normalized, lexicon::EXCLUSION_KEYWORDS);

    let min_warmth =
        numeric::extract_temperature_f(&normalized).map(numeric::warmth_for_temperature);
    let formality_target = formality_for_occasion(&occasion);
    let budget = numeric::extract_budget(&normalized);

    Requirements {
        occasion,
        seasonality,
        min_warmth,
        formality_target,
        categories: Vec::new(),
        colors,
        exclusions,
        budget,
        seed: Some(normalized),
    }
}

/// Extract softer style and color leanings from the request text.
pub fn extract_preferences(text: &str) -> Preferences {
    let normalized = normalize_text(text);

    let style_cues = lexicon::all_matches(&normalized, lexicon::STYLE_KEYWORDS);
    let palette = lexicon::first_match(&normalized, lexicon::PALETTE_KEYWORDS)
        .unwrap_or_default()
        .to_string();
    let preferred_colors = lexicon::all_matches(&normalized, lexicon::COLOR_KEYWORDS);

    // Colors only count as avoided when named inside an "avoid ..." /
    // "no ..." phrase.
    let avoid_colors = match avoid_phrase_pattern().captures(&normalized) {
        Some(captures) => lexicon::all_matches(&captures[1], lexicon::COLOR_KEYWORDS),
        None => Vec::new(),
    };

    Preferences {
        style_cues,
        palette,
        preferred_colors,
        avoid_colors,
        avoid_tags: Vec::new(),
    }
}

/// Fixed occasion-to-formality lookup; occasions outside the table
/// leave the target absent.
fn formality_for_occasion(occasion: &str) -> Option<u8> {
    match occasion {
        "formal" => Some(5),
        "work" | "date" => Some(4),
        "travel" | "casual" | "outdoors" => Some(2),
        _ => None,
    }
}
