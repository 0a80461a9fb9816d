use serde::{Deserialize, Serialize};

/// A single clothing item from the catalog.
///
/// Every field has a defined value; the catalog loader substitutes
/// documented defaults for blank or malformed columns, so downstream
/// code never probes for missing attributes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: String,
    pub name: String,
    /// Lowercase category tag: top/bottom/shoe/outerwear/accessory/dress/...
    pub category: String,
    pub brand: String,
    /// Normalized color bucket, e.g. "navy", "beige".
    pub color_family: String,
    pub price: f32,
    pub style_tags: Vec<String>,
    pub occasion_tags: Vec<String>,
    /// One of all/spring/summer/fall/winter.
    pub seasonality: String,
    /// 1-5, 1 = lightest.
    pub warmth: u8,
    /// 1-5, 1 = most casual.
    pub formality: u8,
    pub image_path: Option<String>,
}

/// A candidate outfit assembled for a single request.
///
/// Items are borrowed from the catalog; outfits never outlive it.
/// `score` stays `None` until the scorer runs and, once set, lies in
/// [0, 1].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Outfit<'a> {
    pub id: String,
    pub items: Vec<&'a Item>,
    pub description: String,
    pub score: Option<f32>,
    /// Human-readable match explanations collected during scoring.
    pub reasons: Vec<String>,
}

/// An extracted price constraint; either bound may be absent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Budget {
    pub min: Option<f32>,
    pub max: Option<f32>,
}

/// Hard-ish constraints extracted from the request text.
///
/// Read-only once produced; the assembler and scorer never mutate it.
/// Absent fields disable the corresponding preference rather than
/// signalling an error.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Requirements {
    pub occasion: String,
    pub seasonality: String,
    pub min_warmth: Option<u8>,
    pub formality_target: Option<u8>,
    /// Category allow-list; usually empty.
    pub categories: Vec<String>,
    /// Color-family allow-list, in extraction order.
    pub colors: Vec<String>,
    pub exclusions: Vec<String>,
    pub budget: Option<Budget>,
    /// Normalized query text, used only to seed the bucket shuffle.
    pub seed: Option<String>,
}

/// Softer style/color leanings used for scoring only, never filtering.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Preferences {
    pub style_cues: Vec<String>,
    /// One of monochrome/neutrals/colorful, or empty.
    pub palette: String,
    pub preferred_colors: Vec<String>,
    pub avoid_colors: Vec<String>,
    pub avoid_tags: Vec<String>,
}
