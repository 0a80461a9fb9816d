use super::AssemblyConditions;
use crate::recommend::domain::{Item, Requirements};

/// Filter catalog items down to the candidates an assembly run may
/// draw from.
///
/// Allow-lists apply only when the requirement is non-empty. The
/// narrowing rules are monotonic restrictions: each keeps the wider
/// pool whenever narrowing would empty it, except the casual tie /
/// formality exclusion, which is absolute.
pub fn filter_items_by_requirements<'a>(
    items: &'a [Item],
    requirements: &Requirements,
) -> Vec<&'a Item> {
    let conditions = AssemblyConditions::from_requirements(requirements);

    let mut filtered: Vec<&Item> = items
        .iter()
        .filter(|item| matches_category_allow_list(item, requirements))
        .filter(|item| matches_color_allow_list(item, requirements))
        .collect();

    if conditions.is_hot && conditions.is_casual {
        narrow_to_light_bottoms(&mut filtered);
    }

    if conditions.is_casual {
        narrow_to_casual_shoes(&mut filtered);
        filtered.retain(|item| !is_excluded_casual_accessory(item));
    }

    filtered
}

fn matches_category_allow_list(item: &Item, requirements: &Requirements) -> bool {
    if requirements.categories.is_empty() {
        return true;
    }
    requirements
        .categories
        .iter()
        .any(|category| category.eq_ignore_ascii_case(&item.category))
}

fn matches_color_allow_list(item: &Item, requirements: &Requirements) -> bool {
    if requirements.colors.is_empty() {
        return true;
    }
    requirements
        .colors
        .iter()
        .any(|color| color.eq_ignore_ascii_case(&item.color_family))
}

fn is_bottom(item: &Item) -> bool {
    item.category == "bottom"
}

fn is_shoe(item: &Item) -> bool {
    matches!(item.category.as_str(), "shoe" | "shoes")
}

fn is_light_bottom(item: &Item) -> bool {
    item.warmth <= 2 && matches!(item.seasonality.as_str(), "summer" | "all")
}

/// When any light bottoms survive the allow-lists, drop the rest of
/// the bottoms; otherwise leave the bottoms untouched.
fn narrow_to_light_bottoms(filtered: &mut Vec<&Item>) {
    let has_light_bottom = filtered
        .iter()
        .any(|item| is_bottom(item) && is_light_bottom(item));
    if has_light_bottom {
        filtered.retain(|item| !is_bottom(item) || is_light_bottom(item));
    }
}

/// When any low-formality shoes exist, drop the dressier ones.
fn narrow_to_casual_shoes(filtered: &mut Vec<&Item>) {
    let has_casual_shoe = filtered
        .iter()
        .any(|item| is_shoe(item) && item.formality <= 2);
    if has_casual_shoe {
        filtered.retain(|item| !is_shoe(item) || item.formality <= 2);
    }
}

/// Absolute exclusion: casual requests never carry a tie or a
/// formality-5 accessory, even if that empties the accessory pool.
fn is_excluded_casual_accessory(item: &Item) -> bool {
    item.category == "accessory"
        && (item.name.to_ascii_lowercase().contains("tie") || item.formality >= 5)
}
