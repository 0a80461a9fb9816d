use super::config;
use crate::recommend::domain::{Item, Preferences, Requirements};
use std::collections::BTreeSet;

/// Number of axes an item is judged on. Every axis counts toward the
/// denominator whether or not the request activates it, so a request
/// that specifies fewer axes lowers the achievable ceiling.
const AXIS_COUNT: f32 = 6.0;

/// Score one item against the request on six normalized axes,
/// returning the [0, 1] mean and the reasons behind any credit.
pub(crate) fn score_item(
    item: &Item,
    requirements: &Requirements,
    preferences: &Preferences,
) -> (f32, Vec<String>) {
    let mut reasons: Vec<String> = Vec::new();
    let mut score = 0.0f32;

    // Occasion
    if !requirements.occasion.is_empty()
        && item
            .occasion_tags
            .iter()
            .any(|tag| tag == &requirements.occasion)
    {
        score += 1.0;
        reasons.push(format!("Occasion tag match: {}", requirements.occasion));
    }

    // Style: fraction of requested cues the item carries.
    if !preferences.style_cues.is_empty() {
        let item_tags: BTreeSet<&str> = item.style_tags.iter().map(String::as_str).collect();
        let cues: BTreeSet<&str> = preferences.style_cues.iter().map(String::as_str).collect();
        let matched: Vec<&str> = item_tags.intersection(&cues).copied().collect();

        score += matched.len() as f32 / cues.len() as f32;
        if !matched.is_empty() {
            reasons.push(format!("Style overlap: {}", matched.join(", ")));
        }
    }

    // Color / palette
    if !item.color_family.is_empty() {
        if preferences.avoid_colors.contains(&item.color_family) {
            reasons.push(format!("Avoid color: {}", item.color_family));
        } else if preferences.preferred_colors.contains(&item.color_family) {
            score += 1.0;
            reasons.push(format!("Preferred color: {}", item.color_family));
        } else if matches!(preferences.palette.as_str(), "monochrome" | "neutrals")
            && config::is_neutral(&item.color_family)
        {
            score += 0.7;
            reasons.push("Palette fit (neutral/tonal)".to_string());
        }
    }

    // Seasonality: all-season items satisfy any requested season.
    if !requirements.seasonality.is_empty()
        && (item.seasonality == requirements.seasonality || item.seasonality == "all")
    {
        score += 1.0;
        reasons.push(format!("Seasonality fit: {}", item.seasonality));
    }

    // Warmth: full credit at or above the minimum, partial below.
    if let Some(min_warmth) = requirements.min_warmth {
        if item.warmth >= min_warmth {
            score += 1.0;
            reasons.push(format!(
                "Warmth meets min: {} >= {}",
                item.warmth, min_warmth
            ));
        } else {
            score += item.warmth as f32 / min_warmth.max(1) as f32;
        }
    }

    // Formality closeness: the 1-5 range bounds the difference at 4.
    if let Some(target) = requirements.formality_target {
        let diff = (item.formality as f32 - target as f32).abs();
        score += (1.0 - diff / 4.0).max(0.0);
        reasons.push(format!("Formality: {} vs {}", item.formality, target));
    }

    (score / AXIS_COUNT, reasons)
}
