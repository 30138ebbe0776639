//! Draw-by-draw walkthrough of a single roster pass.
//!
//! Renders what the aggregate tables hide: the exact candidate triples, which
//! rule picked the winner, and where the reroll budget went. Intended for
//! eyeballing the mechanics, not for statistics.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use super::config::SimConfig;
use crate::draw::DrawEngine;
use crate::error::GachaError;
use crate::styles::Style;
use crate::weights::WeightModel;

/// Walks every roster character through one round of draws and returns the
/// full decision log.
pub fn trace_roster(config: &SimConfig) -> Result<String, GachaError> {
    let mut rng = match config.seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    };
    trace_roster_with_rng(config, &mut rng)
}

/// Same as [`trace_roster`], but against a caller-owned generator.
pub fn trace_roster_with_rng(
    config: &SimConfig,
    rng: &mut impl Rng,
) -> Result<String, GachaError> {
    let engine = DrawEngine::new(
        WeightModel::new(config.initial_weight, config.decay_ratio),
        config.reroll_enabled,
    );

    let mut log = String::new();
    for (index, spec) in config.roster.iter().enumerate() {
        let mut character = spec.build();
        let mut budget = config.reroll_budget;

        log.push_str(&format!(
            "character {} ({}, level {}, starter tool: {})\n",
            index + 1,
            spec.attribute.name(),
            spec.level,
            spec.has_starter_tool
        ));
        log.push_str(&format!(
            "  starting styles owned: {}\n",
            character.style_count()
        ));

        for draw in 1..=config.draws_per_round {
            let pool = engine
                .weights()
                .distribution_for(&character)
                .iter()
                .map(|(style, probability)| format!("{} {:.3}", style.slug(), probability))
                .collect::<Vec<_>>()
                .join(", ");
            log.push_str(&format!("  draw {:2}: pool [{}]\n", draw, pool));

            let budget_before = budget;
            let outcome = engine.perform_draw(&character, budget_before, rng)?;
            budget = outcome.remaining_budget;

            for (reroll, triple) in outcome.rejected.iter().enumerate() {
                log.push_str(&format!(
                    "  draw {:2}: [{}] rerolled, budget left {}\n",
                    draw,
                    format_triple(triple),
                    budget_before - (reroll as u32 + 1)
                ));
            }

            let rule = if outcome.matched_attribute(character.attribute()) {
                "matched attribute"
            } else {
                "first by position"
            };
            log.push_str(&format!(
                "  draw {:2}: [{}] -> {} ({})\n",
                draw,
                format_triple(&outcome.candidates),
                outcome.selected.name(),
                rule
            ));

            character.add_value(outcome.selected, 1)?;
        }

        log.push_str(&format!(
            "  final styles owned: {}\n",
            character.style_count()
        ));
        for (&style, &value) in character.values() {
            if value > 0 {
                log.push_str(&format!("    {:<16} {}\n", style.name(), value));
            }
        }
        log.push('\n');
    }

    Ok(log)
}

fn format_triple(triple: &[Style; 3]) -> String {
    triple
        .iter()
        .map(|style| style.slug())
        .collect::<Vec<_>>()
        .join(", ")
}
