//! # Conversion Categories
//!
//! The closed set of conversion categories. A category selects both the unit
//! set and the conversion strategy; units are never compared across
//! categories.

use serde::{Deserialize, Serialize};

/// Conversion category discriminator.
///
/// Fixed, closed set: every conversion request names exactly one category,
/// and each category is served by its own immutable table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Category {
    /// Metric and imperial distance units
    #[default]
    Length,
    /// °C, °F and K, related by affine formulas rather than plain factors
    Temperature,
    /// Metric and imperial mass units
    Weight,
    /// Binary (base-1024) storage units from bits to PB
    DigitalStorage,
    /// Currency codes converted through per-base rate sub-tables
    Currency,
    /// Ancient units convertible via direct factors or canonical bridging
    HistoricalUnits,
}

impl Category {
    /// All categories in presentation order, for UI selection
    pub const ALL: [Category; 6] = [
        Category::Length,
        Category::Temperature,
        Category::Weight,
        Category::DigitalStorage,
        Category::Currency,
        Category::HistoricalUnits,
    ];

    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            Category::Length => "Length",
            Category::Temperature => "Temperature",
            Category::Weight => "Weight",
            Category::DigitalStorage => "Digital Storage",
            Category::Currency => "Currency",
            Category::HistoricalUnits => "Historical Units",
        }
    }

    /// Parse a display name back into a category (ASCII case-insensitive).
    /// Returns None for anything outside the closed set.
    pub fn from_name(name: &str) -> Option<Self> {
        Category::ALL
            .iter()
            .copied()
            .find(|category| category.display_name().eq_ignore_ascii_case(name.trim()))
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
