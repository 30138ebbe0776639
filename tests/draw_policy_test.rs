//! Integration test: Weight Model -> Draw Engine policy
//!
//! Exercises the full decision path: distribution building → candidate
//! sampling → priority selection → reroll gating, over hand-built style
//! pools and the standard catalog.

use gachasim::character::Character;
use gachasim::draw::{DrawEngine, CANDIDATES_PER_DRAW};
use gachasim::error::GachaError;
use gachasim::styles::{Style, StyleCatalog};
use gachasim::weights::WeightModel;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn create_test_rng() -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(12345)
}

fn probability_of(distribution: &[(Style, f64)], style: Style) -> Option<f64> {
    distribution
        .iter()
        .find(|(entry, _)| *entry == style)
        .map(|(_, probability)| *probability)
}

// =========================================================================
// Distribution building: normalization and the three-style filter
// =========================================================================

#[test]
fn test_single_available_style_draws_with_certainty() {
    let catalog = StyleCatalog::from_entries(vec![(Style::MagmaOrb, 1)]);
    let character = Character::new(catalog, Style::MagmaOrb, 1, false);
    let distribution = WeightModel::new(100.0, 0.8).distribution_for(&character);

    assert_eq!(distribution.len(), 1);
    assert!(
        (distribution[0].1 - 1.0).abs() < 1e-9,
        "sole style should carry probability 1, got {}",
        distribution[0].1
    );
}

#[test]
fn test_mixed_investment_distribution_is_exact() {
    // Three styles at weights 100, 100, 80: expected probabilities
    // 0.3571, 0.3571, 0.2857.
    let catalog = StyleCatalog::from_entries(vec![
        (Style::MagmaOrb, 1),
        (Style::FrostComet, 1),
        (Style::SparkOrb, 1),
    ]);
    let mut character = Character::new(catalog, Style::MagmaOrb, 1, false);
    character.set_value(Style::SparkOrb, 1).unwrap();

    let distribution = WeightModel::new(100.0, 0.8).distribution_for(&character);
    let total: f64 = distribution.iter().map(|(_, p)| p).sum();

    assert!((total - 1.0).abs() < 1e-9, "probabilities must sum to 1");
    assert!((probability_of(&distribution, Style::MagmaOrb).unwrap() - 5.0 / 14.0).abs() < 1e-9);
    assert!((probability_of(&distribution, Style::FrostComet).unwrap() - 5.0 / 14.0).abs() < 1e-9);
    assert!((probability_of(&distribution, Style::SparkOrb).unwrap() - 2.0 / 7.0).abs() < 1e-9);
}

#[test]
fn test_three_owned_styles_stop_offering_fresh_ones() {
    let catalog = StyleCatalog::from_entries(vec![
        (Style::MagmaOrb, 1),
        (Style::FrostComet, 1),
        (Style::SparkOrb, 1),
        (Style::BlackHole, 1),
    ]);
    let mut character = Character::new(catalog, Style::MagmaOrb, 1, false);
    character.set_value(Style::MagmaOrb, 1).unwrap();
    character.set_value(Style::FrostComet, 2).unwrap();
    character.set_value(Style::SparkOrb, 1).unwrap();

    let distribution = WeightModel::default().distribution_for(&character);

    assert_eq!(distribution.len(), 3);
    assert!(
        probability_of(&distribution, Style::BlackHole).is_none(),
        "an uninvested style must vanish once three styles are owned"
    );
    for (style, probability) in &distribution {
        assert!(
            *probability > 0.0,
            "{:?} should keep a positive probability",
            style
        );
    }
}

#[test]
fn test_filter_inactive_below_three_owned_styles() {
    let catalog = StyleCatalog::from_entries(vec![
        (Style::MagmaOrb, 1),
        (Style::FrostComet, 1),
        (Style::SparkOrb, 1),
        (Style::BlackHole, 1),
    ]);
    let mut character = Character::new(catalog, Style::MagmaOrb, 1, false);
    character.set_value(Style::MagmaOrb, 3).unwrap();
    character.set_value(Style::FrostComet, 2).unwrap();

    let distribution = WeightModel::default().distribution_for(&character);
    assert_eq!(
        distribution.len(),
        4,
        "with two owned styles every unlocked style stays in the pool"
    );
}

#[test]
fn test_sampled_frequencies_match_distribution() {
    let catalog = StyleCatalog::from_entries(vec![
        (Style::MagmaOrb, 1),
        (Style::FrostComet, 1),
        (Style::SparkOrb, 1),
    ]);
    let mut character = Character::new(catalog, Style::MagmaOrb, 1, false);
    character.set_value(Style::SparkOrb, 1).unwrap();

    let model = WeightModel::new(100.0, 0.8);
    let engine = DrawEngine::new(model, false);
    let mut rng = create_test_rng();

    let draws = 3000;
    let mut spark_slots = 0u32;
    for _ in 0..draws {
        let outcome = engine.perform_draw(&character, 0, &mut rng).unwrap();
        for candidate in outcome.candidates {
            if candidate == Style::SparkOrb {
                spark_slots += 1;
            }
        }
    }

    let frequency = spark_slots as f64 / (draws * CANDIDATES_PER_DRAW as u32) as f64;
    let expected = 2.0 / 7.0;
    assert!(
        (frequency - expected).abs() < 0.03,
        "Spark Orb slot frequency {:.4} should be near {:.4}",
        frequency,
        expected
    );
}

// =========================================================================
// Selection: first match on the attribute, else first by position
// =========================================================================

#[test]
fn test_selection_prefers_attribute_over_position() {
    let engine = DrawEngine::new(WeightModel::default(), false);
    let character = Character::new(StyleCatalog::standard(), Style::MagmaOrb, 35, false);
    let mut rng = create_test_rng();

    let mut matched = 0u32;
    let draws = 1000;
    for _ in 0..draws {
        let outcome = engine.perform_draw(&character, 0, &mut rng).unwrap();
        if outcome.candidates.contains(&Style::MagmaOrb) {
            matched += 1;
            assert_eq!(
                outcome.selected,
                Style::MagmaOrb,
                "a triple containing the attribute must select it"
            );
        } else {
            assert_eq!(
                outcome.selected, outcome.candidates[0],
                "a triple missing the attribute must fall back to position 0"
            );
        }
    }

    // With 12 uniform styles roughly a quarter of triples contain the
    // attribute; make sure both branches actually ran.
    assert!(matched > 100, "attribute branch never exercised");
    assert!(matched < 900, "positional branch never exercised");
}

// =========================================================================
// Reroll gating: the budget and the asymmetric eligibility rule
// =========================================================================

#[test]
fn test_rerolls_disabled_means_budget_untouched() {
    let engine = DrawEngine::new(WeightModel::default(), false);
    let character = Character::new(StyleCatalog::standard(), Style::MagmaOrb, 35, true);
    let mut rng = create_test_rng();

    for _ in 0..500 {
        let outcome = engine.perform_draw(&character, 10, &mut rng).unwrap();
        assert_eq!(outcome.rerolls_used, 0);
        assert_eq!(outcome.remaining_budget, 10);
    }
}

#[test]
fn test_reroll_budget_is_monotonic_and_bounded() {
    let engine = DrawEngine::new(WeightModel::default(), true);
    let character = Character::new(StyleCatalog::standard(), Style::MagmaOrb, 35, true);
    let mut rng = create_test_rng();

    for budget in [0u32, 1, 2, 5] {
        for _ in 0..200 {
            let outcome = engine.perform_draw(&character, budget, &mut rng).unwrap();
            assert!(
                outcome.rerolls_used <= budget,
                "used {} rerolls out of a budget of {}",
                outcome.rerolls_used,
                budget
            );
            assert_eq!(outcome.remaining_budget, budget - outcome.rerolls_used);
        }
    }
}

#[test]
fn test_reroll_fires_while_chasing_invested_attribute() {
    // The starter tool invests the attribute, so any missed triple with
    // budget left must be rerolled rather than settled.
    let engine = DrawEngine::new(WeightModel::default(), true);
    let character = Character::new(StyleCatalog::standard(), Style::MagmaOrb, 35, true);
    let mut rng = create_test_rng();

    let mut total_rerolls = 0u32;
    for _ in 0..500 {
        let outcome = engine.perform_draw(&character, 3, &mut rng).unwrap();
        total_rerolls += outcome.rerolls_used;
        if outcome.remaining_budget > 0 {
            assert!(
                outcome.candidates.contains(&Style::MagmaOrb),
                "leftover budget implies the kept triple contains the attribute"
            );
        }
    }
    assert!(total_rerolls > 0, "rerolls should have fired at least once");
}

#[test]
fn test_no_reroll_once_diversified_without_attribute_progress() {
    // Three foreign styles owned and the attribute still at zero: the
    // eligibility rule withholds the budget entirely.
    let engine = DrawEngine::new(WeightModel::default(), true);
    let mut character = Character::new(StyleCatalog::standard(), Style::MagmaOrb, 35, false);
    character.set_value(Style::IceSpike, 2).unwrap();
    character.set_value(Style::WindBlade, 1).unwrap();
    character.set_value(Style::ShadowClaw, 4).unwrap();

    let mut rng = create_test_rng();
    for _ in 0..500 {
        let outcome = engine.perform_draw(&character, 5, &mut rng).unwrap();
        assert_eq!(outcome.rerolls_used, 0);
        assert_eq!(outcome.remaining_budget, 5);
    }
}

#[test]
fn test_reroll_allowed_when_attribute_progress_exists() {
    // Same three-styles-owned situation, but one point sits in the
    // attribute: the first arm of the eligibility rule keeps rerolls live.
    let engine = DrawEngine::new(WeightModel::default(), true);
    let mut character = Character::new(StyleCatalog::standard(), Style::MagmaOrb, 35, false);
    character.set_value(Style::MagmaOrb, 1).unwrap();
    character.set_value(Style::WindBlade, 1).unwrap();
    character.set_value(Style::ShadowClaw, 1).unwrap();

    let mut rng = create_test_rng();
    let mut total_rerolls = 0u32;
    for _ in 0..500 {
        let outcome = engine.perform_draw(&character, 2, &mut rng).unwrap();
        total_rerolls += outcome.rerolls_used;
    }
    assert!(
        total_rerolls > 0,
        "invested attribute should keep the reroll policy active"
    );
}

#[test]
fn test_reroll_allowed_below_three_styles() {
    // Fresh character, nothing owned: the second arm (fewer than three
    // styles) keeps rerolls live even with zero attribute progress.
    let engine = DrawEngine::new(WeightModel::default(), true);
    let character = Character::new(StyleCatalog::standard(), Style::MagmaOrb, 35, false);

    let mut rng = create_test_rng();
    let mut total_rerolls = 0u32;
    for _ in 0..500 {
        let outcome = engine.perform_draw(&character, 2, &mut rng).unwrap();
        total_rerolls += outcome.rerolls_used;
    }
    assert!(
        total_rerolls > 0,
        "an undiversified character should be allowed to reroll"
    );
}

// =========================================================================
// Error paths
// =========================================================================

#[test]
fn test_empty_style_pool_fails_the_draw() {
    let catalog = StyleCatalog::from_entries(vec![]);
    let character = Character::new(catalog, Style::MagmaOrb, 10, false);
    let engine = DrawEngine::new(WeightModel::default(), true);
    let mut rng = create_test_rng();

    assert_eq!(
        engine.perform_draw(&character, 3, &mut rng),
        Err(GachaError::EmptyDistribution)
    );
}

#[test]
fn test_locked_styles_reject_value_writes() {
    let mut character = Character::new(StyleCatalog::standard(), Style::MagmaOrb, 5, false);
    assert_eq!(
        character.add_value(Style::ShadowClaw, 1),
        Err(GachaError::InvalidAttribute(Style::ShadowClaw))
    );
    assert_eq!(
        character.set_value(Style::StoneResonance, 2),
        Err(GachaError::InvalidAttribute(Style::StoneResonance))
    );
}
