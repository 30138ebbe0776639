//! Simulation configuration and the default roster.

use serde::{Deserialize, Serialize};

use crate::character::Character;
use crate::styles::{Style, StyleCatalog};
use crate::weights::{DEFAULT_DECAY_RATIO, DEFAULT_INITIAL_WEIGHT};

/// Blueprint for one roster character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterSpec {
    pub attribute: Style,
    pub level: u32,
    pub has_starter_tool: bool,
}

impl CharacterSpec {
    pub fn new(attribute: Style, level: u32, has_starter_tool: bool) -> Self {
        Self {
            attribute,
            level,
            has_starter_tool,
        }
    }

    /// Builds the live character against the standard catalog.
    pub fn build(&self) -> Character {
        Character::new(
            StyleCatalog::standard(),
            self.attribute,
            self.level,
            self.has_starter_tool,
        )
    }

    /// Stable label for report filenames and headers,
    /// e.g. `magma_orb_lv5_toolfalse`.
    pub fn label(&self) -> String {
        format!(
            "{}_lv{}_tool{}",
            self.attribute.slug(),
            self.level,
            self.has_starter_tool
        )
    }
}

/// The six characters the balance study tracks: the level-1 fire style as
/// main attribute, at three level breakpoints, with and without the starter
/// tool.
pub fn default_roster() -> Vec<CharacterSpec> {
    vec![
        CharacterSpec::new(Style::MagmaOrb, 5, false),
        CharacterSpec::new(Style::MagmaOrb, 5, true),
        CharacterSpec::new(Style::MagmaOrb, 18, false),
        CharacterSpec::new(Style::MagmaOrb, 18, true),
        CharacterSpec::new(Style::MagmaOrb, 35, false),
        CharacterSpec::new(Style::MagmaOrb, 35, true),
    ]
}

/// Configuration for a simulation run.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// Number of simulated rounds
    pub rounds: u32,

    /// Draws each character performs per round
    pub draws_per_round: u32,

    /// Random seed for reproducibility (None = random)
    pub seed: Option<u64>,

    /// Base weight of an uninvested style
    pub initial_weight: f64,

    /// Per-point weight decay for invested styles, in (0, 1]
    pub decay_ratio: f64,

    /// Whether the reroll policy is active
    pub reroll_enabled: bool,

    /// Rerolls granted to each character at the start of every round
    pub reroll_budget: u32,

    /// Final-value threshold for the success-ratio statistic
    pub success_threshold: u32,

    /// Log verbosity (0 = silent, 1 = summary, 2 = per-round progress)
    pub verbosity: u8,

    /// The characters to simulate
    pub roster: Vec<CharacterSpec>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            rounds: 1000,
            draws_per_round: 15,
            seed: None,
            initial_weight: DEFAULT_INITIAL_WEIGHT,
            decay_ratio: DEFAULT_DECAY_RATIO,
            reroll_enabled: false,
            reroll_budget: 0,
            success_threshold: 7,
            verbosity: 1,
            roster: default_roster(),
        }
    }
}

impl SimConfig {
    /// Quick config for smoke-testing the pipeline
    pub fn quick_test() -> Self {
        Self {
            rounds: 100,
            verbosity: 0,
            ..Default::default()
        }
    }

    /// Config for studying the reroll policy at a given budget
    pub fn reroll_study(budget: u32) -> Self {
        Self {
            reroll_enabled: true,
            reroll_budget: budget,
            ..Default::default()
        }
    }
}
