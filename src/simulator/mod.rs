//! Monte Carlo gacha-draw simulator.
//!
//! Run thousands of simulated rounds to analyze:
//! - How fast the main attribute accumulates points per draw
//! - The spread of final values across rounds
//! - How the starter tool and the reroll budget shift the distribution
//!
//! The runner drives the same DrawEngine (src/draw.rs) used everywhere else,
//! so measured distributions match single-draw behavior exactly.

mod config;
mod report;
mod runner;
mod trace;

pub use config::{default_roster, CharacterSpec, SimConfig};
pub use report::SimReport;
pub use runner::{collect_stats, run_simulation, SimStats};
pub use trace::{trace_roster, trace_roster_with_rng};
