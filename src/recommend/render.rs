//! Presentation formatting for assembled outfits.

use crate::recommend::domain::{Item, Outfit, Requirements};
use serde::Serialize;

/// Fixed brand voice feeding the description templates.
pub struct BrandVoice {
    pub brand: &'static str,
    pub tone: &'static str,
    pub signature_phrases: [&'static str; 3],
}

pub const BRAND_VOICE: BrandVoice = BrandVoice {
    brand: "YourBrand",
    tone: "confident, modern, concise",
    signature_phrases: ["clean lines", "elevated essentials", "effortless style"],
};

/// Render the full text description for an outfit: brand-voice opener,
/// itemized list, a conditional rationale block, and the score line
/// once scoring has run.
pub fn render_outfit_description(outfit: &Outfit<'_>, requirements: Option<&Requirements>) -> String {
    if outfit.items.is_empty() {
        return "Empty outfit".to_string();
    }

    let occasion = requirements
        .map(|req| req.occasion.as_str())
        .filter(|occasion| !occasion.is_empty())
        .unwrap_or("the moment");
    let seasonality = requirements
        .map(|req| req.seasonality.as_str())
        .filter(|season| !season.is_empty())
        .unwrap_or("all-seasons");

    let opener = format!(
        "{} meet {}, built for {} in {}.",
        title_case(BRAND_VOICE.signature_phrases[0]),
        BRAND_VOICE.signature_phrases[2],
        occasion,
        seasonality,
    );

    let mut description = format!("{opener}\n\n{}\n\nItems:\n", outfit.description);
    let item_lines: Vec<String> = outfit.items.iter().map(|item| item_line(item)).collect();
    description.push_str(&item_lines.join("\n"));

    if let Some(requirements) = requirements {
        let rationale = rationale_lines(requirements);
        if !rationale.is_empty() {
            description.push_str("\n\nWhy this works:\n");
            description.push_str(&rationale.join("\n"));
        }
    }

    if let Some(score) = outfit.score {
        description.push_str(&format!("\n\nScore: {score:.2}"));
    }

    description
}

fn item_line(item: &Item) -> String {
    format!(
        "- {} ({}, {}, ${})",
        item.name, item.brand, item.color_family, item.price
    )
}

fn rationale_lines(requirements: &Requirements) -> Vec<String> {
    let mut lines = Vec::new();

    if !requirements.occasion.is_empty() {
        lines.push(format!("- Aligned to occasion: {}", requirements.occasion));
    }
    if !requirements.seasonality.is_empty() {
        lines.push(format!("- Season-ready for {}.", requirements.seasonality));
    }
    if let Some(target) = requirements.formality_target {
        lines.push(format!("- Formality targeted around {target}/5."));
    }
    if !requirements.colors.is_empty() {
        lines.push(format!(
            "- Color direction: {}.",
            requirements.colors.join(", ")
        ));
    }

    lines
}

/// Short one-line summary: item count, distinct categories, total price.
pub fn render_outfit_summary(outfit: &Outfit<'_>) -> String {
    if outfit.items.is_empty() {
        return "No items".to_string();
    }

    let mut categories: Vec<&str> = outfit
        .items
        .iter()
        .map(|item| item.category.as_str())
        .collect();
    categories.sort_unstable();
    categories.dedup();

    let total_price: f32 = outfit.items.iter().map(|item| item.price).sum();

    format!(
        "{} items ({}) - ${total_price:.2}",
        outfit.items.len(),
        categories.join(", ")
    )
}

fn title_case(phrase: &str) -> String {
    phrase
        .split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Serializable projection of an item for machine-readable output.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ItemView {
    pub id: String,
    pub name: String,
    pub category: String,
    pub brand: String,
    pub color_family: String,
    pub price: f32,
}

/// Serializable projection of a scored outfit.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OutfitView {
    pub id: String,
    pub description: String,
    pub score: Option<f32>,
    pub total_price: f32,
    pub items: Vec<ItemView>,
    pub reasons: Vec<String>,
}

impl Item {
    pub fn to_view(&self) -> ItemView {
        ItemView {
            id: self.id.clone(),
            name: self.name.clone(),
            category: self.category.clone(),
            brand: self.brand.clone(),
            color_family: self.color_family.clone(),
            price: self.price,
        }
    }
}

impl<'a> Outfit<'a> {
    pub fn to_view(&self) -> OutfitView {
        OutfitView {
            id: self.id.clone(),
            description: self.description.clone(),
            score: self.score,
            total_price: self.items.iter().map(|item| item.price).sum(),
            items: self.items.iter().map(|item| item.to_view()).collect(),
            reasons: self.reasons.clone(),
        }
    }
}
