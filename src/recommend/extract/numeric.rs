use crate::recommend::domain::Budget;
use regex::Regex;
use std::sync::OnceLock;

static PRICE_RANGE_PATTERN: OnceLock<Regex> = OnceLock::new();
static PRICE_CAP_PATTERN: OnceLock<Regex> = OnceLock::new();
static PRICE_AMOUNT_PATTERN: OnceLock<Regex> = OnceLock::new();
static TEMPERATURE_F_PATTERN: OnceLock<Regex> = OnceLock::new();
static TEMPERATURE_DEGREES_PATTERN: OnceLock<Regex> = OnceLock::new();

fn price_range_pattern() -> &'static Regex {
    PRICE_RANGE_PATTERN.get_or_init(|| {
        Regex::new(r"\$?\s*(\d{2,5})\s*(?:-|to)\s*\$?\s*(\d{2,5})").expect("pattern compiles")
    })
}

fn price_cap_pattern() -> &'static Regex {
    PRICE_CAP_PATTERN.get_or_init(|| {
        Regex::new(r"(?:under|below|less than)\s*\$?\s*(\d{2,5})").expect("pattern compiles")
    })
}

fn price_amount_pattern() -> &'static Regex {
    PRICE_AMOUNT_PATTERN.get_or_init(|| Regex::new(r"\$\s*(\d{2,5})").expect("pattern compiles"))
}

fn temperature_f_pattern() -> &'static Regex {
    TEMPERATURE_F_PATTERN
        .get_or_init(|| Regex::new(r"(\d{2,3})\s*°?\s*f\b").expect("pattern compiles"))
}

fn temperature_degrees_pattern() -> &'static Regex {
    TEMPERATURE_DEGREES_PATTERN
        .get_or_init(|| Regex::new(r"(\d{2,3})\s*degrees").expect("pattern compiles"))
}

/// Extract a budget from normalized text.
///
/// Patterns are tried in priority order: an explicit range
/// ("$100-$250", "100 to 250") beats a cap ("under $200"), which beats
/// a bare amount ("$150"). Caps and bare amounts yield max-only
/// budgets.
pub(crate) fn extract_budget(text: &str) -> Option<Budget> {
    if let Some(caps) = price_range_pattern().captures(text) {
        return Some(Budget {
            min: parse_amount(&caps[1]),
            max: parse_amount(&caps[2]),
        });
    }

    if let Some(caps) = price_cap_pattern().captures(text) {
        return Some(Budget {
            min: None,
            max: parse_amount(&caps[1]),
        });
    }

    if let Some(caps) = price_amount_pattern().captures(text) {
        return Some(Budget {
            min: None,
            max: parse_amount(&caps[1]),
        });
    }

    None
}

fn parse_amount(digits: &str) -> Option<f32> {
    digits.parse::<f32>().ok()
}

/// Extract a Fahrenheit temperature like "45F", "45°F", or "45 degrees".
pub(crate) fn extract_temperature_f(text: &str) -> Option<i32> {
    let captures = temperature_f_pattern()
        .captures(text)
        .or_else(|| temperature_degrees_pattern().captures(text))?;
    captures[1].parse::<i32>().ok()
}

/// Map a temperature to a 1-5 warmth requirement.
pub(crate) fn warmth_for_temperature(temp_f: i32) -> u8 {
    if temp_f <= 35 {
        5
    } else if temp_f <= 50 {
        4
    } else if temp_f <= 65 {
        3
    } else if temp_f <= 80 {
        2
    } else {
        1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn budget_range_beats_single_amount() {
        let budget = extract_budget("$100-$250").expect("range parses");
        assert_eq!(budget.min, Some(100.0));
        assert_eq!(budget.max, Some(250.0));

        let budget = extract_budget("100 to 250 total").expect("range parses");
        assert_eq!(budget.min, Some(100.0));
        assert_eq!(budget.max, Some(250.0));
    }

    #[test]
    fn budget_cap_and_bare_amount() {
        let budget = extract_budget("under $200").expect("cap parses");
        assert_eq!(budget.min, None);
        assert_eq!(budget.max, Some(200.0));

        let budget = extract_budget("around $150 or so").expect("amount parses");
        assert_eq!(budget.min, None);
        assert_eq!(budget.max, Some(150.0));

        assert_eq!(extract_budget("no numbers here"), None);
    }

    #[test]
    fn temperature_thresholds_map_to_warmth() {
        assert_eq!(extract_temperature_f("it is 45°f out"), Some(45));
        assert_eq!(extract_temperature_f("about 72 degrees"), Some(72));
        assert_eq!(extract_temperature_f("sunny"), None);

        assert_eq!(warmth_for_temperature(30), 5);
        assert_eq!(warmth_for_temperature(45), 4);
        assert_eq!(warmth_for_temperature(60), 3);
        assert_eq!(warmth_for_temperature(75), 2);
        assert_eq!(warmth_for_temperature(95), 1);
    }
}
