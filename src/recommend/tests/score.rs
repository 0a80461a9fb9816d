use super::common::*;
use crate::recommend::domain::{Preferences, Requirements};
use crate::recommend::score::{rank_outfits, score_outfit};

const EPSILON: f32 = 1e-5;

fn assert_close(actual: f32, expected: f32) {
    assert!(
        (actual - expected).abs() < EPSILON,
        "expected {expected}, got {actual}"
    );
}

#[test]
fn empty_outfit_scores_zero() {
    let empty = outfit(Vec::new());
    assert_eq!(score_outfit(&empty, &requirements(), &preferences()), 0.0);
}

#[test]
fn scores_stay_within_bounds() {
    let items = mixed_wardrobe();
    let all: Vec<&_> = items.iter().collect();
    let candidate = outfit(all);

    let cases = [
        (requirements(), preferences()),
        (casual_requirements(), preferences()),
        (
            Requirements {
                occasion: "casual".to_string(),
                seasonality: "summer".to_string(),
                min_warmth: Some(5),
                formality_target: Some(1),
                ..Requirements::default()
            },
            Preferences {
                style_cues: vec!["minimal".to_string()],
                palette: "neutrals".to_string(),
                preferred_colors: vec!["navy".to_string()],
                avoid_colors: vec!["red".to_string()],
                avoid_tags: Vec::new(),
            },
        ),
    ];

    for (reqs, prefs) in &cases {
        let score = score_outfit(&candidate, reqs, prefs);
        assert!((0.0..=1.0).contains(&score), "score {score} out of bounds");
    }
}

#[test]
fn blended_score_matches_expected_value() {
    // Each item hits the occasion, seasonality, and formality axes
    // exactly (3 of 6), and the outfit is complete, so the blend is
    // 0.05 * 1.0 + 0.95 * 0.5.
    let mut top = casual_item("t1", "top");
    top.seasonality = "summer".to_string();
    let mut bottom = casual_item("b1", "bottom");
    bottom.seasonality = "summer".to_string();
    let mut shoe = casual_item("s1", "shoe");
    shoe.seasonality = "summer".to_string();

    let reqs = Requirements {
        occasion: "casual".to_string(),
        seasonality: "summer".to_string(),
        formality_target: Some(2),
        ..Requirements::default()
    };

    let candidate = outfit(vec![&top, &bottom, &shoe]);
    let score = score_outfit(&candidate, &reqs, &preferences());

    assert_close(score, 0.05 + 0.95 * 0.5);
}

#[test]
fn preferred_color_credits_one_axis() {
    let mut scarf = item("a1", "accessory");
    scarf.color_family = "blue".to_string();

    let prefs = Preferences {
        preferred_colors: vec!["blue".to_string()],
        ..Preferences::default()
    };

    // Single accessory: no completeness bonus, one axis of six earns
    // full credit.
    let candidate = outfit(vec![&scarf]);
    let score = score_outfit(&candidate, &requirements(), &prefs);

    assert_close(score, 0.95 * (1.0 / 6.0));
}

#[test]
fn avoided_color_earns_nothing() {
    let mut scarf = item("a1", "accessory");
    scarf.color_family = "blue".to_string();

    let prefs = Preferences {
        preferred_colors: vec!["blue".to_string()],
        avoid_colors: vec!["blue".to_string()],
        ..Preferences::default()
    };

    let candidate = outfit(vec![&scarf]);
    assert_eq!(score_outfit(&candidate, &requirements(), &prefs), 0.0);
}

#[test]
fn neutral_palette_earns_partial_color_credit() {
    let mut scarf = item("a1", "accessory");
    scarf.color_family = "beige".to_string();

    let prefs = Preferences {
        palette: "neutrals".to_string(),
        ..Preferences::default()
    };

    let candidate = outfit(vec![&scarf]);
    let score = score_outfit(&candidate, &requirements(), &prefs);

    assert_close(score, 0.95 * (0.7 / 6.0));
}

#[test]
fn style_overlap_is_fractional() {
    let mut scarf = item("a1", "accessory");
    scarf.style_tags = vec!["minimal".to_string()];

    let prefs = Preferences {
        style_cues: vec!["minimal".to_string(), "tailored".to_string()],
        ..Preferences::default()
    };

    let candidate = outfit(vec![&scarf]);
    let score = score_outfit(&candidate, &requirements(), &prefs);

    assert_close(score, 0.95 * (0.5 / 6.0));
}

#[test]
fn warmth_below_minimum_earns_partial_credit() {
    let mut scarf = item("a1", "accessory");
    scarf.warmth = 2;

    let reqs = Requirements {
        min_warmth: Some(4),
        ..Requirements::default()
    };

    let candidate = outfit(vec![&scarf]);
    let score = score_outfit(&candidate, &reqs, &preferences());

    assert_close(score, 0.95 * (0.5 / 6.0));
}

#[test]
fn formality_distance_decays_linearly() {
    let mut scarf = item("a1", "accessory");
    scarf.formality = 2;

    let reqs = Requirements {
        formality_target: Some(4),
        ..Requirements::default()
    };

    let candidate = outfit(vec![&scarf]);
    let score = score_outfit(&candidate, &reqs, &preferences());

    assert_close(score, 0.95 * (0.5 / 6.0));
}

#[test]
fn ranking_is_a_sorted_permutation() {
    let strong_top = casual_item("t1", "top");
    let strong_bottom = casual_item("b1", "bottom");
    let strong_shoe = casual_item("s1", "shoe");
    let weak_accessory = item("a1", "accessory");

    let weak = outfit(vec![&weak_accessory]);
    let strong = {
        let mut built = outfit(vec![&strong_top, &strong_bottom, &strong_shoe]);
        built.id = "outfit_2".to_string();
        built
    };

    let ranked = rank_outfits(
        vec![weak, strong],
        &casual_requirements(),
        &preferences(),
    );

    assert_eq!(ranked.len(), 2);
    assert_eq!(ranked[0].id, "outfit_2");
    assert_eq!(ranked[1].id, "outfit_1");

    let scores: Vec<f32> = ranked
        .iter()
        .map(|outfit| outfit.score.expect("score assigned"))
        .collect();
    assert!(scores[0] >= scores[1]);
    assert!(scores.iter().all(|score| (0.0..=1.0).contains(score)));
}

#[test]
fn ranking_ties_keep_input_order() {
    let top = casual_item("t1", "top");
    let bottom = casual_item("b1", "bottom");

    let first = outfit(vec![&top, &bottom]);
    let second = {
        let mut built = outfit(vec![&top, &bottom]);
        built.id = "outfit_2".to_string();
        built
    };

    let ranked = rank_outfits(
        vec![first, second],
        &casual_requirements(),
        &preferences(),
    );

    assert_eq!(ranked[0].id, "outfit_1");
    assert_eq!(ranked[1].id, "outfit_2");
    assert_eq!(ranked[0].score, ranked[1].score);
}

#[test]
fn ranking_attaches_reasons() {
    let top = casual_item("t1", "top");
    let bottom = casual_item("b1", "bottom");
    let candidate = outfit(vec![&top, &bottom]);

    let ranked = rank_outfits(vec![candidate], &casual_requirements(), &preferences());

    assert!(!ranked[0].reasons.is_empty());
    assert!(ranked[0]
        .reasons
        .iter()
        .any(|reason| reason.contains("casual")));
}
