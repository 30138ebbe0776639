//! Error types for character mutation and the draw engine.

use crate::styles::Style;

/// Errors surfaced while mutating character values or resolving a draw.
///
/// Neither variant is recoverable at runtime: both indicate a caller bug or a
/// broken configuration, so they propagate immediately instead of being
/// retried or swallowed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum GachaError {
    /// A style outside the character's current available set was targeted.
    /// Value keys are never created on the fly.
    #[error("style {0:?} is not available to this character")]
    InvalidAttribute(Style),

    /// The weight model produced no candidates to sample from. Cannot happen
    /// for a level >= 1 character under the standard catalog.
    #[error("no styles available to draw from")]
    EmptyDistribution,
}
