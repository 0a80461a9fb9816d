//! Outfit recommendation pipeline: extraction, assembly, scoring, and
//! presentation formatting.

pub mod assemble;
pub mod domain;
pub mod extract;
pub mod prompts;
pub mod render;
pub mod score;

#[cfg(test)]
mod tests;

pub use assemble::{assemble_outfits, filter_items_by_requirements};
pub use domain::{Budget, Item, Outfit, Preferences, Requirements};
pub use extract::{extract_preferences, extract_requirements};
pub use render::{render_outfit_description, render_outfit_summary, ItemView, OutfitView};
pub use score::{rank_outfits, score_outfit, score_weights, ScoreWeights};

use crate::catalog::Catalog;

/// Everything a single query produces: the structured reading of the
/// request plus the ranked candidates.
#[derive(Debug)]
pub struct Recommendation<'a> {
    pub requirements: Requirements,
    pub preferences: Preferences,
    pub outfits: Vec<Outfit<'a>>,
}

/// Run the full pipeline for one free-text request.
pub fn recommend<'a>(catalog: &'a Catalog, text: &str, max_outfits: usize) -> Recommendation<'a> {
    let requirements = extract::extract_requirements(text);
    let preferences = extract::extract_preferences(text);

    let outfits = assemble::assemble_outfits(catalog.get_all_items(), &requirements, max_outfits);
    let outfits = score::rank_outfits(outfits, &requirements, &preferences);

    tracing::debug!(
        occasion = %requirements.occasion,
        seasonality = %requirements.seasonality,
        outfits = outfits.len(),
        "ranked outfit candidates"
    );

    Recommendation {
        requirements,
        preferences,
        outfits,
    }
}
