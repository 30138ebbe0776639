//! Style identifiers and the unlock-level catalog.
//!
//! Styles are the progression tracks a character invests draw points into.
//! Each style unlocks at a fixed character level; the catalog is the lookup
//! table answering "which styles can a level-L character roll".

use serde::{Deserialize, Serialize};

/// Number of styles in the standard catalog.
pub const NUM_STYLES: usize = 12;

/// One progression track a character can accumulate draw points in.
///
/// Variants are declared in unlock order, which is also the order the
/// catalog and every derived distribution iterate in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Style {
    MagmaOrb,
    FrostComet,
    SparkOrb,
    BlackHole,
    LightningCore,
    IceSpike,
    WindBlade,
    Rockslide,
    FireRain,
    AirBarrier,
    StoneResonance,
    ShadowClaw,
}

impl Style {
    /// Returns all styles in unlock order.
    pub fn all() -> [Style; NUM_STYLES] {
        [
            Style::MagmaOrb,
            Style::FrostComet,
            Style::SparkOrb,
            Style::BlackHole,
            Style::LightningCore,
            Style::IceSpike,
            Style::WindBlade,
            Style::Rockslide,
            Style::FireRain,
            Style::AirBarrier,
            Style::StoneResonance,
            Style::ShadowClaw,
        ]
    }

    /// Display name for reports and trace output.
    pub fn name(&self) -> &'static str {
        match self {
            Style::MagmaOrb => "Magma Orb",
            Style::FrostComet => "Frost Comet",
            Style::SparkOrb => "Spark Orb",
            Style::BlackHole => "Black Hole",
            Style::LightningCore => "Lightning Core",
            Style::IceSpike => "Ice Spike",
            Style::WindBlade => "Wind Blade",
            Style::Rockslide => "Rockslide",
            Style::FireRain => "Fire Rain",
            Style::AirBarrier => "Air Barrier",
            Style::StoneResonance => "Stone Resonance",
            Style::ShadowClaw => "Shadow Claw",
        }
    }

    /// Lowercase identifier used in report filenames.
    pub fn slug(&self) -> &'static str {
        match self {
            Style::MagmaOrb => "magma_orb",
            Style::FrostComet => "frost_comet",
            Style::SparkOrb => "spark_orb",
            Style::BlackHole => "black_hole",
            Style::LightningCore => "lightning_core",
            Style::IceSpike => "ice_spike",
            Style::WindBlade => "wind_blade",
            Style::Rockslide => "rockslide",
            Style::FireRain => "fire_rain",
            Style::AirBarrier => "air_barrier",
            Style::StoneResonance => "stone_resonance",
            Style::ShadowClaw => "shadow_claw",
        }
    }
}

/// Ordered (style, unlock level) table.
///
/// The catalog is immutable once built. Every character carries its own copy,
/// so tests and what-if studies can run reduced style pools without touching
/// the standard table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StyleCatalog {
    entries: Vec<(Style, u32)>,
}

impl Default for StyleCatalog {
    fn default() -> Self {
        Self::standard()
    }
}

impl StyleCatalog {
    /// The standard 12-style catalog, from the live balance data.
    pub fn standard() -> Self {
        Self {
            entries: vec![
                (Style::MagmaOrb, 1),
                (Style::FrostComet, 1),
                (Style::SparkOrb, 2),
                (Style::BlackHole, 5),
                (Style::LightningCore, 7),
                (Style::IceSpike, 10),
                (Style::WindBlade, 13),
                (Style::Rockslide, 18),
                (Style::FireRain, 22),
                (Style::AirBarrier, 27),
                (Style::StoneResonance, 32),
                (Style::ShadowClaw, 35),
            ],
        }
    }

    /// Builds a catalog from explicit (style, unlock level) pairs, preserving
    /// their order. Intended for tests and reduced-pool studies.
    pub fn from_entries(entries: Vec<(Style, u32)>) -> Self {
        Self { entries }
    }

    /// Unlock level for a style, or None if the catalog does not list it.
    pub fn unlock_level(&self, style: Style) -> Option<u32> {
        self.entries
            .iter()
            .find(|(entry, _)| *entry == style)
            .map(|(_, level)| *level)
    }

    /// Styles available to a character of the given level, in catalog order.
    /// A style is available once its unlock level is at or below the level.
    pub fn available_at(&self, level: u32) -> Vec<Style> {
        self.entries
            .iter()
            .filter(|(_, unlock)| *unlock <= level)
            .map(|(style, _)| *style)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
