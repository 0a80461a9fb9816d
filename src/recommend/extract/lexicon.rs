//! Keyword tables driving the text extraction.
//!
//! Tables are ordered slices rather than maps: for single-valued
//! fields the first label whose trigger appears in the text wins, so
//! declaration order is part of the contract.

pub(crate) type KeywordTable = &'static [(&'static str, &'static [&'static str])];

pub(crate) const OCCASION_KEYWORDS: KeywordTable = &[
    (
        "work",
        &[
            "work",
            "office",
            "meeting",
            "presentation",
            "interview",
            "client",
            "conference",
        ],
    ),
    ("date", &["date", "dinner", "night out", "restaurant"]),
    (
        "casual",
        &["casual", "weekend", "brunch", "coffee", "errands", "hangout"],
    ),
    (
        "formal",
        &["formal", "black tie", "gala", "wedding", "cocktail", "event"],
    ),
    (
        "travel",
        &["travel", "airport", "flight", "plane", "hotel", "vacation"],
    ),
    ("outdoors", &["outdoor", "hike", "trail", "camp", "festival"]),
];

pub(crate) const STYLE_KEYWORDS: KeywordTable = &[
    ("minimal", &["minimal", "clean", "simple", "sleek", "pared-back"]),
    (
        "tailored",
        &["tailored", "structured", "sharp", "polished", "blazer"],
    ),
    ("classic", &["classic", "timeless", "preppy", "heritage"]),
    (
        "streetwear",
        &["streetwear", "oversized", "graphic", "sneaker", "hoodie"],
    ),
    ("boho", &["boho", "bohemian", "flowy", "floral"]),
    ("edgy", &["edgy", "leather", "black", "punk"]),
    (
        "sporty",
        &["sporty", "athleisure", "active", "gym", "running"],
    ),
];

pub(crate) const COLOR_KEYWORDS: KeywordTable = &[
    ("black", &["black"]),
    ("white", &["white", "ivory"]),
    ("navy", &["navy"]),
    ("gray", &["gray", "grey", "charcoal"]),
    ("beige", &["beige", "tan", "camel", "khaki"]),
    ("brown", &["brown", "chocolate"]),
    ("red", &["red", "burgundy", "maroon"]),
    ("green", &["green", "olive", "sage"]),
    ("blue", &["blue", "cobalt"]),
    ("pink", &["pink", "fuchsia"]),
    ("purple", &["purple", "lavender"]),
    ("yellow", &["yellow", "mustard"]),
    ("orange", &["orange", "rust"]),
];

pub(crate) const PALETTE_KEYWORDS: KeywordTable = &[
    (
        "monochrome",
        &["monochrome", "all black", "all-white", "one color"],
    ),
    ("neutrals", &["neutral", "neutrals", "tonal", "earth tones"]),
    ("colorful", &["colorful", "bright", "bold color", "vibrant"]),
];

pub(crate) const SEASON_KEYWORDS: KeywordTable = &[
    ("winter", &["winter", "cold", "snow", "freezing", "chilly"]),
    ("summer", &["summer", "hot", "heat", "humid"]),
    ("spring", &["spring"]),
    ("fall", &["fall", "autumn", "crisp"]),
    ("rainy", &["rain", "rainy", "drizzle", "wet"]),
];

pub(crate) const EXCLUSION_KEYWORDS: KeywordTable = &[
    ("no_heels", &["no heels", "without heels", "no high heels"]),
    ("no_denim", &["no denim", "without denim"]),
    ("no_leather", &["no leather", "vegan"]),
];

fn matches_any(text: &str, triggers: &[&str]) -> bool {
    triggers.iter().any(|trigger| text.contains(trigger))
}

/// First label in declaration order with a trigger present in `text`.
pub(crate) fn first_match(text: &str, table: KeywordTable) -> Option<&'static str> {
    table
        .iter()
        .find(|(_, triggers)| matches_any(text, triggers))
        .map(|(label, _)| *label)
}

/// All labels with a trigger present in `text`, in declaration order.
pub(crate) fn all_matches(text: &str, table: KeywordTable) -> Vec<String> {
    table
        .iter()
        .filter(|(_, triggers)| matches_any(text, triggers))
        .map(|(label, _)| label.to_string())
        .collect()
}
