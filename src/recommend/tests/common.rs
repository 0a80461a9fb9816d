use crate::recommend::domain::{Item, Outfit, Preferences, Requirements};

pub(super) fn item(id: &str, category: &str) -> Item {
    Item {
        id: id.to_string(),
        name: format!("Item {id}"),
        category: category.to_string(),
        brand: "Atelier".to_string(),
        color_family: "navy".to_string(),
        price: 50.0,
        style_tags: Vec::new(),
        occasion_tags: Vec::new(),
        seasonality: "all".to_string(),
        warmth: 3,
        formality: 3,
        image_path: None,
    }
}

pub(super) fn casual_item(id: &str, category: &str) -> Item {
    let mut item = item(id, category);
    item.occasion_tags = vec!["casual".to_string()];
    item.warmth = 2;
    item.formality = 2;
    item
}

pub(super) fn outfit(items: Vec<&Item>) -> Outfit<'_> {
    Outfit {
        id: "outfit_1".to_string(),
        description: format!("Outfit 1 with {} items", items.len()),
        items,
        score: None,
        reasons: Vec::new(),
    }
}

pub(super) fn requirements() -> Requirements {
    Requirements::default()
}

pub(super) fn casual_requirements() -> Requirements {
    Requirements {
        occasion: "casual".to_string(),
        formality_target: Some(2),
        ..Requirements::default()
    }
}

pub(super) fn preferences() -> Preferences {
    Preferences::default()
}

/// Wardrobe with enough variety to exercise every assembly branch.
pub(super) fn mixed_wardrobe() -> Vec<Item> {
    let mut shoes_casual = casual_item("s1", "shoe");
    shoes_casual.formality = 1;
    let mut shoes_dress = item("s2", "shoe");
    shoes_dress.formality = 4;

    let mut belt = casual_item("a1", "accessory");
    belt.name = "Woven Belt".to_string();
    let mut tie = item("a2", "accessory");
    tie.name = "Silk Tie".to_string();
    tie.formality = 3;
    let mut watch = item("a3", "accessory");
    watch.name = "Dress Watch".to_string();
    watch.formality = 5;

    vec![
        casual_item("t1", "top"),
        casual_item("t2", "top"),
        casual_item("b1", "bottom"),
        casual_item("b2", "bottom"),
        shoes_casual,
        shoes_dress,
        item("o1", "outerwear"),
        belt,
        tie,
        watch,
    ]
}
