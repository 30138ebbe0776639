//! Draw-weight model: turns accumulated style values into a probability
//! distribution over a character's available styles.

use crate::character::Character;
use crate::styles::Style;

/// Default base weight of an uninvested style, from the live tuning data.
pub const DEFAULT_INITIAL_WEIGHT: f64 = 500.0;

/// Default per-point decay applied to invested styles.
pub const DEFAULT_DECAY_RATIO: f64 = 0.6;

/// Geometric decay model shared by every character in a simulation.
///
/// An uninvested style keeps the full `initial_weight`; each accumulated
/// point multiplies the weight by `decay_ratio`, so heavily invested styles
/// show up less and less often among draw candidates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeightModel {
    initial_weight: f64,
    decay_ratio: f64,
}

impl Default for WeightModel {
    fn default() -> Self {
        Self::new(DEFAULT_INITIAL_WEIGHT, DEFAULT_DECAY_RATIO)
    }
}

impl WeightModel {
    /// `initial_weight` should be positive and `decay_ratio` in (0, 1];
    /// a ratio of exactly 1.0 keeps all weights flat.
    pub fn new(initial_weight: f64, decay_ratio: f64) -> Self {
        Self {
            initial_weight,
            decay_ratio,
        }
    }

    pub fn initial_weight(&self) -> f64 {
        self.initial_weight
    }

    pub fn decay_ratio(&self) -> f64 {
        self.decay_ratio
    }

    /// Raw weight of a single style at the given accumulated value.
    pub fn weight_for(&self, style_value: u32) -> f64 {
        if style_value == 0 {
            self.initial_weight
        } else {
            self.initial_weight * self.decay_ratio.powi(style_value as i32)
        }
    }

    /// Probability distribution over the character's available styles, in
    /// value-table order.
    ///
    /// A character already holding three or more styles stops drawing new
    /// ones: every value-0 style is dropped before weighting. The filter can
    /// never empty the distribution, since a style count of 3 means at least
    /// three styles survive it. An empty result only occurs for a character
    /// with no available styles at all.
    pub fn distribution_for(&self, character: &Character) -> Vec<(Style, f64)> {
        let style_count = character.style_count();

        let mut weighted: Vec<(Style, f64)> = Vec::new();
        for (&style, &value) in character.values() {
            if style_count >= 3 && value == 0 {
                continue;
            }
            weighted.push((style, self.weight_for(value)));
        }

        let total: f64 = weighted.iter().map(|(_, weight)| weight).sum();
        if total > 0.0 {
            for entry in &mut weighted {
                entry.1 /= total;
            }
        } else if !weighted.is_empty() {
            // Degenerate weights (total 0): fall back to a uniform spread.
            let uniform = 1.0 / weighted.len() as f64;
            for entry in &mut weighted {
                entry.1 = uniform;
            }
        }

        weighted
    }
}
