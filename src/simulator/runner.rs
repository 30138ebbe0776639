//! Main simulation runner.
//!
//! Drives rounds of draws across the whole roster and accumulates, for every
//! character and draw index, how often each main-attribute value occurred.
//! Statistics are tracked externally from DrawOutcome values; the runner owns
//! all character mutation.

use std::collections::HashMap;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::Serialize;

use super::config::SimConfig;
use super::report::SimReport;
use crate::character::Character;
use crate::draw::DrawEngine;
use crate::error::GachaError;
use crate::weights::WeightModel;

/// Occurrence counts per (character, draw index, main-attribute value).
///
/// Draw index 0 is the pre-draw state; indexes 1..=draws_per_round capture
/// the state after each draw. Buckets combine by plain summation, so partial
/// stats from independent runs merge in any order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SimStats {
    counts: Vec<Vec<HashMap<u32, u32>>>,
}

impl SimStats {
    pub fn new(num_characters: usize, draws_per_round: u32) -> Self {
        let per_character = vec![HashMap::new(); draws_per_round as usize + 1];
        Self {
            counts: vec![per_character; num_characters],
        }
    }

    /// Records one observation of a main-attribute value.
    pub fn record(&mut self, character: usize, draw_index: usize, value: u32) {
        *self.counts[character][draw_index].entry(value).or_insert(0) += 1;
    }

    /// Value-to-count buckets for one (character, draw index) cell.
    pub fn buckets(&self, character: usize, draw_index: usize) -> &HashMap<u32, u32> {
        &self.counts[character][draw_index]
    }

    pub fn num_characters(&self) -> usize {
        self.counts.len()
    }

    /// Draw indexes tracked per character (draws_per_round + 1).
    pub fn num_draw_indexes(&self) -> usize {
        self.counts.first().map_or(0, |cells| cells.len())
    }

    /// Total observations in one cell; equals the round count after a run.
    pub fn total(&self, character: usize, draw_index: usize) -> u32 {
        self.counts[character][draw_index].values().sum()
    }

    /// Folds another stats block into this one by per-bucket summation.
    /// Both blocks must cover the same roster shape.
    pub fn merge(&mut self, other: &SimStats) {
        assert_eq!(
            self.counts.len(),
            other.counts.len(),
            "stats shapes must match to merge"
        );
        for (mine, theirs) in self.counts.iter_mut().zip(&other.counts) {
            assert_eq!(mine.len(), theirs.len(), "stats shapes must match to merge");
            for (cell, other_cell) in mine.iter_mut().zip(theirs) {
                for (&value, &count) in other_cell {
                    *cell.entry(value).or_insert(0) += count;
                }
            }
        }
    }
}

/// Runs the full simulation and returns a report.
pub fn run_simulation(config: &SimConfig) -> Result<SimReport, GachaError> {
    let mut rng = match config.seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    };

    let stats = collect_stats(config, &mut rng)?;
    Ok(SimReport::from_stats(config, stats))
}

/// Runs every configured round against the supplied generator and returns
/// the raw occurrence counts.
pub fn collect_stats(config: &SimConfig, rng: &mut impl Rng) -> Result<SimStats, GachaError> {
    let engine = DrawEngine::new(
        WeightModel::new(config.initial_weight, config.decay_ratio),
        config.reroll_enabled,
    );
    let mut characters: Vec<Character> = config.roster.iter().map(|spec| spec.build()).collect();
    let mut stats = SimStats::new(characters.len(), config.draws_per_round);

    for round in 0..config.rounds {
        run_round(config, &engine, &mut characters, &mut stats, rng)?;

        if config.verbosity >= 2 && (round + 1) % 100 == 0 {
            println!("  completed round {}/{}", round + 1, config.rounds);
        }
    }

    Ok(stats)
}

/// One round: reset every character, record the pre-draw state, then let
/// each character resolve each draw in turn.
fn run_round(
    config: &SimConfig,
    engine: &DrawEngine,
    characters: &mut [Character],
    stats: &mut SimStats,
    rng: &mut impl Rng,
) -> Result<(), GachaError> {
    // Fresh reroll budget per character every round
    let mut budgets = vec![config.reroll_budget; characters.len()];

    for (index, character) in characters.iter_mut().enumerate() {
        character.reset();
        stats.record(index, 0, character.value(character.attribute()));
    }

    for draw_index in 1..=config.draws_per_round as usize {
        for (index, character) in characters.iter_mut().enumerate() {
            let outcome = engine.perform_draw(character, budgets[index], rng)?;
            budgets[index] = outcome.remaining_budget;
            character.add_value(outcome.selected, 1)?;
            stats.record(index, draw_index, character.value(character.attribute()));
        }
    }

    Ok(())
}
