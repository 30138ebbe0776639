//! Character draw-progression state.
//!
//! A character tracks one accumulated value per available style. The key set
//! of the value table always mirrors exactly what the catalog unlocks at the
//! character's level; changing the level or the starter-tool flag rebuilds
//! the table from scratch and discards all accumulated progress.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::GachaError;
use crate::styles::{Style, StyleCatalog};

/// One simulated character: a main attribute, a level, and the accumulated
/// value per unlocked style.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Character {
    attribute: Style,
    level: u32,
    has_starter_tool: bool,
    catalog: StyleCatalog,
    values: BTreeMap<Style, u32>,
}

impl Character {
    /// Creates a character and derives its value table from the catalog.
    ///
    /// With the starter tool, the main-attribute style begins at 1 instead
    /// of 0, provided the catalog makes it available at this level. An
    /// attribute the catalog never unlocks is tolerated: draws then simply
    /// fall through to the positional default.
    pub fn new(
        catalog: StyleCatalog,
        attribute: Style,
        level: u32,
        has_starter_tool: bool,
    ) -> Self {
        let mut character = Self {
            attribute,
            level,
            has_starter_tool,
            catalog,
            values: BTreeMap::new(),
        };
        character.rebuild_values();
        character
    }

    /// Rebuilds the value table for the current level and tool flag.
    /// Always a full reset, never a merge with previous progress.
    fn rebuild_values(&mut self) {
        self.values.clear();
        for style in self.catalog.available_at(self.level) {
            let initial = if self.has_starter_tool && style == self.attribute {
                1
            } else {
                0
            };
            self.values.insert(style, initial);
        }
    }

    pub fn attribute(&self) -> Style {
        self.attribute
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn has_starter_tool(&self) -> bool {
        self.has_starter_tool
    }

    pub fn catalog(&self) -> &StyleCatalog {
        &self.catalog
    }

    /// Accumulated value for a style, or 0 when the style is unavailable.
    pub fn value(&self, style: Style) -> u32 {
        self.values.get(&style).copied().unwrap_or(0)
    }

    /// The full value table at the current level. Iteration follows style
    /// declaration order, which is unlock order for the standard catalog.
    pub fn values(&self) -> &BTreeMap<Style, u32> {
        &self.values
    }

    /// Number of styles holding a strictly positive value.
    pub fn style_count(&self) -> usize {
        self.values.values().filter(|value| **value > 0).count()
    }

    /// Styles available at the current level, in catalog order.
    pub fn available_styles(&self) -> Vec<Style> {
        self.catalog.available_at(self.level)
    }

    /// Overwrites a style's value. Fails for styles outside the available
    /// set: keys are never created on the fly.
    pub fn set_value(&mut self, style: Style, value: u32) -> Result<(), GachaError> {
        match self.values.get_mut(&style) {
            Some(slot) => {
                *slot = value;
                Ok(())
            }
            None => Err(GachaError::InvalidAttribute(style)),
        }
    }

    /// Adds to a style's value. Fails for styles outside the available set.
    pub fn add_value(&mut self, style: Style, amount: u32) -> Result<(), GachaError> {
        match self.values.get_mut(&style) {
            Some(slot) => {
                *slot = slot.saturating_add(amount);
                Ok(())
            }
            None => Err(GachaError::InvalidAttribute(style)),
        }
    }

    /// Resets every value to its initial state, honoring the starter tool.
    pub fn reset(&mut self) {
        self.rebuild_values();
    }

    /// Changes the level and rebuilds the value table.
    pub fn set_level(&mut self, level: u32) {
        self.level = level;
        self.rebuild_values();
    }

    /// Changes the starter-tool flag and rebuilds the value table.
    pub fn set_starter_tool(&mut self, has_starter_tool: bool) {
        self.has_starter_tool = has_starter_tool;
        self.rebuild_values();
    }
}
