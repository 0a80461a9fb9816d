//! Outfit scoring and ranking.
//!
//! Scoring is two-phase by contract: `rank_outfits` first assigns
//! every outfit's score (and reason trail) in place, then sorts a
//! fresh ordering; the sort itself never computes scores.

mod config;
mod rules;

pub use config::{score_weights, ScoreWeights};

use crate::recommend::domain::{Outfit, Preferences, Requirements};
use std::cmp::Ordering;

/// Upper bound on the reasons retained per outfit for display.
const MAX_REASONS: usize = 12;

/// Score a single outfit in [0, 1]. An outfit with no items scores
/// exactly 0.0 without evaluating item axes.
pub fn score_outfit(
    outfit: &Outfit<'_>,
    requirements: &Requirements,
    preferences: &Preferences,
) -> f32 {
    evaluate_outfit(outfit, requirements, preferences).0
}

fn evaluate_outfit(
    outfit: &Outfit<'_>,
    requirements: &Requirements,
    preferences: &Preferences,
) -> (f32, Vec<String>) {
    if outfit.items.is_empty() {
        return (0.0, Vec::new());
    }

    let completeness = completeness_bonus(outfit);

    let mut item_scores: Vec<f32> = Vec::with_capacity(outfit.items.len());
    let mut reasons: Vec<String> = Vec::new();
    for item in &outfit.items {
        let (item_score, item_reasons) = rules::score_item(item, requirements, preferences);
        item_scores.push(item_score);
        reasons.extend(item_reasons);
    }
    let meta_score = item_scores.iter().sum::<f32>() / item_scores.len() as f32;

    let completeness_weight = score_weights().completeness;
    let blended = completeness_weight * completeness + (1.0 - completeness_weight) * meta_score;

    reasons.truncate(MAX_REASONS);
    (blended.clamp(0.0, 1.0), reasons)
}

/// Two independent 0.5 bonuses: shoes present, and a base layer
/// (dress, or top plus bottom) present.
fn completeness_bonus(outfit: &Outfit<'_>) -> f32 {
    let has_shoe = outfit
        .items
        .iter()
        .any(|item| matches!(item.category.as_str(), "shoe" | "shoes"));
    let has_dress = outfit.items.iter().any(|item| item.category == "dress");
    let has_top = outfit.items.iter().any(|item| item.category == "top");
    let has_bottom = outfit.items.iter().any(|item| item.category == "bottom");

    let mut completeness = 0.0;
    if has_shoe {
        completeness += 0.5;
    }
    if has_dress || (has_top && has_bottom) {
        completeness += 0.5;
    }
    completeness
}

/// Assign scores to every outfit, then return them sorted by score
/// descending. The sort is stable, so ties keep their input order; an
/// absent score sorts as 0.0.
pub fn rank_outfits<'a>(
    mut outfits: Vec<Outfit<'a>>,
    requirements: &Requirements,
    preferences: &Preferences,
) -> Vec<Outfit<'a>> {
    for outfit in &mut outfits {
        let (score, reasons) = evaluate_outfit(outfit, requirements, preferences);
        outfit.score = Some(score);
        outfit.reasons = reasons;
    }

    outfits.sort_by(|left, right| {
        let left_score = left.score.unwrap_or(0.0);
        let right_score = right.score.unwrap_or(0.0);
        right_score
            .partial_cmp(&left_score)
            .unwrap_or(Ordering::Equal)
    });

    outfits
}
