//! Gacha-style draw simulator for style-progression balance work.
//!
//! Characters roll three weighted style candidates per draw and keep one;
//! every accumulated point decays that style's future draw weight. This
//! crate houses the draw engine itself plus a Monte Carlo runner that
//! measures how the main attribute's value distributes over many simulated
//! rounds.

pub mod character;
pub mod draw;
pub mod error;
pub mod simulator;
pub mod styles;
pub mod weights;
