//! The draw engine: weighted triple-draws, the priority selection rule, and
//! the budgeted reroll policy.
//!
//! One draw samples three weighted candidates with replacement, scans them in
//! sampled order, and selects the first match on the character's main
//! attribute; without a match the first candidate wins by position. When
//! rerolling is enabled and the triple misses the main attribute, the engine
//! may burn one point of budget and sample a fresh triple instead of
//! settling.

use rand::Rng;

use crate::character::Character;
use crate::error::GachaError;
use crate::styles::Style;
use crate::weights::WeightModel;

/// Candidates offered per draw.
pub const CANDIDATES_PER_DRAW: usize = 3;

/// The result of one fully resolved draw.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DrawOutcome {
    /// The style the character takes the point in.
    pub selected: Style,
    /// The kept candidate triple, in sampled order.
    pub candidates: [Style; CANDIDATES_PER_DRAW],
    /// Rerolls consumed resolving this draw.
    pub rerolls_used: u32,
    /// Reroll budget left after this draw.
    pub remaining_budget: u32,
    /// Every rejected triple, oldest first.
    pub rejected: Vec<[Style; CANDIDATES_PER_DRAW]>,
}

impl DrawOutcome {
    /// Whether the selection hit the given main attribute, as opposed to
    /// falling back to the positional default.
    pub fn matched_attribute(&self, attribute: Style) -> bool {
        self.selected == attribute
    }
}

/// Executes draws against a weight model.
///
/// The engine never mutates the character; committing the selected increment
/// is the caller's job. That keeps a single draw replayable from the same
/// state in traces and tests.
#[derive(Debug, Clone, Copy)]
pub struct DrawEngine {
    weights: WeightModel,
    reroll_enabled: bool,
}

impl DrawEngine {
    pub fn new(weights: WeightModel, reroll_enabled: bool) -> Self {
        Self {
            weights,
            reroll_enabled,
        }
    }

    pub fn weights(&self) -> &WeightModel {
        &self.weights
    }

    pub fn reroll_enabled(&self) -> bool {
        self.reroll_enabled
    }

    /// Resolves one draw for the character, spending at most `reroll_budget`
    /// rerolls. Fails only when the character has no styles to draw from.
    pub fn perform_draw(
        &self,
        character: &Character,
        reroll_budget: u32,
        rng: &mut impl Rng,
    ) -> Result<DrawOutcome, GachaError> {
        // The character is immutable for the whole draw, so one distribution
        // serves the initial triple and every reroll.
        let distribution = self.weights.distribution_for(character);
        if distribution.is_empty() {
            return Err(GachaError::EmptyDistribution);
        }

        let mut remaining_budget = reroll_budget;
        let mut rerolls_used = 0;
        let mut rejected = Vec::new();

        loop {
            let candidates = [
                sample_weighted(&distribution, rng),
                sample_weighted(&distribution, rng),
                sample_weighted(&distribution, rng),
            ];

            // Ordered scan: the first occurrence of the main attribute wins.
            let mut matched = None;
            for &candidate in &candidates {
                if candidate == character.attribute() {
                    matched = Some(candidate);
                    break;
                }
            }

            if let Some(selected) = matched {
                return Ok(DrawOutcome {
                    selected,
                    candidates,
                    rerolls_used,
                    remaining_budget,
                    rejected,
                });
            }

            if self.should_reroll(character, remaining_budget) {
                remaining_budget -= 1;
                rerolls_used += 1;
                rejected.push(candidates);
                continue;
            }

            // No match and no reroll: the first candidate wins by position.
            return Ok(DrawOutcome {
                selected: candidates[0],
                candidates,
                rerolls_used,
                remaining_budget,
                rejected,
            });
        }
    }

    /// Reroll gate for a triple that missed the main attribute.
    ///
    /// Budget is only spent while the character is still chasing its main
    /// style: either some points are already invested in it, or the
    /// character holds fewer than three styles. A diversified character with
    /// zero main-attribute progress keeps its budget untouched.
    fn should_reroll(&self, character: &Character, remaining_budget: u32) -> bool {
        if !self.reroll_enabled || remaining_budget == 0 {
            return false;
        }
        character.value(character.attribute()) > 0 || character.style_count() < 3
    }
}

/// One weighted categorical sample via cumulative-probability scan.
///
/// `distribution` must be non-empty with probabilities summing to 1; the
/// final entry absorbs any floating-point shortfall.
fn sample_weighted(distribution: &[(Style, f64)], rng: &mut impl Rng) -> Style {
    let roll: f64 = rng.gen();
    let mut cumulative = 0.0;
    for &(style, probability) in distribution {
        cumulative += probability;
        if roll < cumulative {
            return style;
        }
    }
    distribution[distribution.len() - 1].0
}
