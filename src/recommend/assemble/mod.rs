//! Constraint-driven outfit assembly.

mod filter;
mod shuffle;

pub use filter::filter_items_by_requirements;

use crate::recommend::domain::{Item, Outfit, Requirements};
use rand::seq::SliceRandom;
use std::collections::HashSet;

/// Conditions derived once per assembly run from the requirements.
#[derive(Debug, Clone, Copy)]
pub(crate) struct AssemblyConditions {
    pub(crate) needs_outerwear: bool,
    pub(crate) is_hot: bool,
    pub(crate) is_casual: bool,
}

impl AssemblyConditions {
    pub(crate) fn from_requirements(requirements: &Requirements) -> Self {
        let min_warmth = requirements.min_warmth;
        Self {
            needs_outerwear: requirements.seasonality == "winter"
                || min_warmth.map_or(false, |warmth| warmth >= 4),
            is_hot: requirements.seasonality == "summer"
                || min_warmth.map_or(false, |warmth| warmth <= 2),
            is_casual: requirements.occasion == "casual",
        }
    }
}

/// Assemble up to `max_outfits` candidate outfits from the catalog.
///
/// Tops and accessories are de-duplicated across the run; bottoms and
/// shoes deliberately draw round-robin and may repeat between outfits.
/// A catalog with no usable tops yields an empty list, never an error.
pub fn assemble_outfits<'a>(
    items: &'a [Item],
    requirements: &Requirements,
    max_outfits: usize,
) -> Vec<Outfit<'a>> {
    let filtered = filter::filter_items_by_requirements(items, requirements);
    let conditions = AssemblyConditions::from_requirements(requirements);

    let mut tops: Vec<&Item> = Vec::new();
    let mut bottoms: Vec<&Item> = Vec::new();
    let mut shoes: Vec<&Item> = Vec::new();
    let mut outerwear: Vec<&Item> = Vec::new();
    let mut accessories: Vec<&Item> = Vec::new();

    for item in filtered {
        match item.category.as_str() {
            "top" => tops.push(item),
            "bottom" => bottoms.push(item),
            "shoe" | "shoes" => shoes.push(item),
            "outerwear" => outerwear.push(item),
            "accessory" => accessories.push(item),
            _ => {}
        }
    }

    if let Some(seed) = requirements.seed.as_deref() {
        let mut rng = shuffle::rng_for_seed(seed);
        for bucket in [
            &mut tops,
            &mut bottoms,
            &mut shoes,
            &mut outerwear,
            &mut accessories,
        ] {
            bucket.shuffle(&mut rng);
        }
    }

    if conditions.is_casual {
        narrow_to_tagged(&mut tops, "casual");
        narrow_to_tagged(&mut bottoms, "casual");
    }

    let top_pool = if conditions.is_hot {
        preferred_hot_pool(&tops)
    } else {
        tops
    };
    let bottom_pool = if conditions.is_hot {
        preferred_hot_pool(&bottoms)
    } else {
        bottoms
    };

    let mut outfits: Vec<Outfit<'a>> = Vec::new();
    let mut used_top_ids: HashSet<&str> = HashSet::new();
    let mut used_accessory_ids: HashSet<&str> = HashSet::new();

    for index in 0..max_outfits {
        let mut outfit_items: Vec<&Item> = Vec::new();

        if !top_pool.is_empty() && !bottom_pool.is_empty() {
            let top = top_pool
                .iter()
                .find(|top| !used_top_ids.contains(top.id.as_str()))
                .copied()
                .unwrap_or(top_pool[index % top_pool.len()]);
            used_top_ids.insert(top.id.as_str());
            outfit_items.push(top);

            outfit_items.push(bottom_pool[index % bottom_pool.len()]);
        } else if !top_pool.is_empty() {
            outfit_items.push(top_pool[index % top_pool.len()]);
        } else {
            // No usable base layer; further iterations cannot produce
            // anything either.
            break;
        }

        if conditions.needs_outerwear && !outerwear.is_empty() {
            outfit_items.push(outerwear[index % outerwear.len()]);
        }

        if !shoes.is_empty() {
            outfit_items.push(shoes[index % shoes.len()]);
        }

        if index % 2 == 0 && !accessories.is_empty() {
            let accessory = accessories
                .iter()
                .find(|accessory| !used_accessory_ids.contains(accessory.id.as_str()))
                .copied()
                .unwrap_or(accessories[index % accessories.len()]);
            used_accessory_ids.insert(accessory.id.as_str());
            outfit_items.push(accessory);
        }

        let sequence = outfits.len() + 1;
        outfits.push(Outfit {
            id: format!("outfit_{sequence}"),
            description: format!("Outfit {sequence} with {} items", outfit_items.len()),
            items: outfit_items,
            score: None,
            reasons: Vec::new(),
        });
    }

    outfits
}

/// Keep only items carrying `tag` as an occasion tag, when any exist.
fn narrow_to_tagged(bucket: &mut Vec<&Item>, tag: &str) {
    let has_tagged = bucket
        .iter()
        .any(|item| item.occasion_tags.iter().any(|candidate| candidate == tag));
    if has_tagged {
        bucket.retain(|item| item.occasion_tags.iter().any(|candidate| candidate == tag));
    }
}

/// Hot-weather preference: summer-tagged items, or light items that
/// work year-round or in spring. Falls back to the full pool when the
/// preference would empty it.
fn preferred_hot_pool<'a>(bucket: &[&'a Item]) -> Vec<&'a Item> {
    let preferred: Vec<&Item> = bucket
        .iter()
        .copied()
        .filter(|item| {
            item.seasonality == "summer"
                || (matches!(item.seasonality.as_str(), "all" | "spring") && item.warmth <= 2)
        })
        .collect();

    if preferred.is_empty() {
        bucket.to_vec()
    } else {
        preferred
    }
}
