//! # Linear Conversion Tables
//!
//! Scale-factor tables for the linear categories: Length, Weight and Digital
//! Storage. Every unit carries a positive factor expressing "1 unit = factor
//! canonical-units", with exactly one canonical unit at factor 1.0 per
//! category. Converting multiplies by the source factor and divides by the
//! target factor, so any pair of listed units is reachable.
//!
//! ## Example
//!
//! ```rust
//! use convert_core::Category;
//! use convert_core::tables::linear::builtin_length_table;
//!
//! let table = builtin_length_table();
//! let meters = table.convert(Category::Length, 2.5, "km", "m").unwrap();
//! assert_eq!(meters, 2500.0);
//! ```

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::category::Category;
use crate::errors::{ConvertError, ConvertResult};

use super::round_to;

/// Scale-factor table for one linear category.
///
/// Stores factors against the category's canonical unit plus the unit list
/// in presentation order. The rounding policy is part of the table because
/// categories disagree on it: Weight and Digital Storage round to 6 decimal
/// places, Length does not round at all.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinearTable {
    /// Factors keyed by unit identifier ("1 unit = factor canonical-units")
    factors: HashMap<String, f64>,
    /// Unit identifiers in presentation order
    order: Vec<String>,
    /// Decimal places applied to results; None leaves results unrounded
    rounding: Option<u32>,
}

impl LinearTable {
    /// Build a table from (unit, factor) entries, keeping entry order as the
    /// unit list order.
    pub fn new(entries: &[(&str, f64)], rounding: Option<u32>) -> Self {
        let mut table = LinearTable {
            factors: HashMap::new(),
            order: Vec::new(),
            rounding,
        };
        for (unit, factor) in entries {
            table.insert(unit, *factor);
        }
        table
    }

    /// Add a unit or replace an existing unit's factor. Replacing keeps the
    /// unit's original position in the list.
    pub fn insert(&mut self, unit: &str, factor: f64) {
        if !self.factors.contains_key(unit) {
            self.order.push(unit.to_string());
        }
        self.factors.insert(unit.to_string(), factor);
    }

    /// Scale factor for a unit, if listed
    pub fn factor(&self, unit: &str) -> Option<f64> {
        self.factors.get(unit).copied()
    }

    /// Check whether a unit is listed
    pub fn contains(&self, unit: &str) -> bool {
        self.factors.contains_key(unit)
    }

    /// Unit identifiers in presentation order
    pub fn units(&self) -> &[String] {
        &self.order
    }

    /// Decimal places applied to results (None = unrounded)
    pub fn rounding(&self) -> Option<u32> {
        self.rounding
    }

    /// Number of units in the table
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Check if the table is empty
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Convert between two listed units: `value * factor[from] / factor[to]`,
    /// rounded per the table's policy. A unit without a factor is a table
    /// defect and fails as MissingFactor naming that unit.
    pub fn convert(
        &self,
        category: Category,
        value: f64,
        from_unit: &str,
        to_unit: &str,
    ) -> ConvertResult<f64> {
        let from_factor = self
            .factor(from_unit)
            .ok_or_else(|| ConvertError::missing_factor(category, from_unit, from_unit, to_unit))?;
        let to_factor = self
            .factor(to_unit)
            .ok_or_else(|| ConvertError::missing_factor(category, to_unit, from_unit, to_unit))?;
        let converted = value * from_factor / to_factor;
        Ok(match self.rounding {
            Some(places) => round_to(converted, places),
            None => converted,
        })
    }
}

// ============================================================================
// Built-in tables
// ============================================================================

/// Built-in length table: metric and imperial distance units, metre
/// canonical. Length results are unrounded.
pub fn builtin_length_table() -> LinearTable {
    LinearTable::new(
        &[
            ("mm", 0.001),
            ("cm", 0.01),
            ("m", 1.0),
            ("km", 1000.0),
            ("inch", 0.0254),
            ("foot", 0.3048),
            ("mile", 1609.34),
            ("yard", 0.9144),
        ],
        None,
    )
}

/// Built-in weight table: gram canonical, 6-decimal rounding.
pub fn builtin_weight_table() -> LinearTable {
    LinearTable::new(
        &[
            ("mg", 0.001),
            ("g", 1.0),
            ("kg", 1000.0),
            ("ton", 1_000_000.0),
            ("lb", 453.592),
            ("oz", 28.3495),
        ],
        Some(6),
    )
}

/// Built-in digital storage table: byte canonical, 6-decimal rounding.
/// Multiples are binary (base-1024), not decimal.
pub fn builtin_storage_table() -> LinearTable {
    LinearTable::new(
        &[
            ("bits", 0.125),
            ("bytes", 1.0),
            ("KB", 1024.0),
            ("MB", 1_048_576.0),
            ("GB", 1_073_741_824.0),
            ("TB", 1_099_511_627_776.0),
            ("PB", 1_125_899_906_842_624.0),
        ],
        Some(6),
    )
}
