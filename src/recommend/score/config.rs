use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

/// Scoring rubric weights.
///
/// Only `completeness` participates in the blend today; the per-axis
/// item components average unweighted over all six axes. The per-axis
/// entries are retained so the rubric can be tuned in one place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreWeights {
    pub completeness: f32,
    pub occasion: f32,
    pub style: f32,
    pub color: f32,
    pub seasonality: f32,
    pub warmth: f32,
    pub formality: f32,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            completeness: 0.05,
            occasion: 0.15,
            style: 0.25,
            color: 0.15,
            seasonality: 0.15,
            warmth: 0.10,
            formality: 0.15,
        }
    }
}

/// Process-wide scoring weights, initialized once and never mutated.
pub fn score_weights() -> &'static ScoreWeights {
    static WEIGHTS: OnceLock<ScoreWeights> = OnceLock::new();
    WEIGHTS.get_or_init(ScoreWeights::default)
}

/// Color families treated as neutral for palette matching.
pub(crate) const NEUTRAL_COLORS: &[&str] = &["black", "white", "gray", "navy", "beige", "brown"];

pub(crate) fn is_neutral(color_family: &str) -> bool {
    NEUTRAL_COLORS.contains(&color_family)
}
