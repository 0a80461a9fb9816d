use crate::recommend::domain::Item;
use serde::{Deserialize, Deserializer};
use std::io::Read;

/// Rating substituted when a warmth/formality column is blank or
/// unparseable.
const DEFAULT_RATING: u8 = 3;

/// Parse catalog rows, skipping malformed records instead of failing
/// the load. Numeric columns degrade to documented defaults.
pub(crate) fn parse_items<R: Read>(reader: R) -> Vec<Item> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut items = Vec::new();
    for record in csv_reader.deserialize::<CatalogRow>() {
        match record {
            Ok(row) => items.push(row.into_item()),
            Err(err) => {
                tracing::warn!(error = %err, "skipping malformed catalog row");
            }
        }
    }

    items
}

#[derive(Debug, Deserialize)]
struct CatalogRow {
    #[serde(default)]
    item_id: String,
    #[serde(default)]
    name: String,
    #[serde(default)]
    category: String,
    #[serde(default)]
    brand: String,
    #[serde(default)]
    color_family: String,
    #[serde(default)]
    price: String,
    #[serde(default)]
    style_tags: String,
    #[serde(default)]
    occasion_tags: String,
    #[serde(default)]
    seasonality: String,
    #[serde(default)]
    warmth: String,
    #[serde(default)]
    formality: String,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    image_path: Option<String>,
}

impl CatalogRow {
    fn into_item(self) -> Item {
        let seasonality = self.seasonality.to_ascii_lowercase();

        Item {
            id: self.item_id,
            name: self.name,
            category: self.category.to_ascii_lowercase(),
            brand: self.brand,
            color_family: self.color_family.to_ascii_lowercase(),
            price: self.price.parse::<f32>().unwrap_or(0.0).max(0.0),
            style_tags: split_tags(&self.style_tags),
            occasion_tags: split_tags(&self.occasion_tags),
            seasonality: if seasonality.is_empty() {
                "all".to_string()
            } else {
                seasonality
            },
            warmth: parse_rating(&self.warmth),
            formality: parse_rating(&self.formality),
            image_path: self.image_path,
        }
    }
}

fn split_tags(raw: &str) -> Vec<String> {
    raw.split('|')
        .map(|tag| tag.trim().to_ascii_lowercase())
        .filter(|tag| !tag.is_empty())
        .collect()
}

fn parse_rating(raw: &str) -> u8 {
    raw.parse::<u8>()
        .ok()
        .filter(|rating| (1..=5).contains(rating))
        .unwrap_or(DEFAULT_RATING)
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}
