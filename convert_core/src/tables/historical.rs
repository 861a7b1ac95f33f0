//! # Historical Unit Table
//!
//! Ancient units with direct factors to a small set of canonical modern
//! units. Not every pair of historical units shares a direct factor, so each
//! unit node names a designated canonical unit ("kg" or "g" for the built-in
//! set); a pair without a direct factor is bridged through a canonical unit
//! both sides can reach. Results round to 4 decimal places.
//!
//! ## Example
//!
//! ```rust
//! use convert_core::tables::historical::builtin_historical_table;
//!
//! let table = builtin_historical_table();
//! // direct factor
//! assert_eq!(table.convert(1.0, "talent", "kg").unwrap(), 26.0);
//! // bridged through grams: 1 deben = 91 g, 1 shekel = 11.4 g
//! assert_eq!(table.convert(1.0, "deben", "shekel").unwrap(), 7.9825);
//! ```

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::category::Category;
use crate::errors::{ConvertError, ConvertResult};

use super::round_to;

/// Decimal places applied to historical results
const HISTORICAL_DECIMALS: u32 = 4;

/// One unit node: its direct factor edges and its designated canonical unit.
///
/// The designated canonical unit should appear in the node's own factor
/// list; a node that cannot reach its own canonical cannot bridge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoricalUnit {
    /// Direct factors as (target unit, factor) edges:
    /// 1 of this unit = factor target-units
    factors: Vec<(String, f64)>,
    /// Bridge unit used when a pair has no direct factor
    canonical: String,
}

impl HistoricalUnit {
    /// Build a node from its canonical unit and direct factor edges
    pub fn new(canonical: &str, factors: &[(&str, f64)]) -> Self {
        HistoricalUnit {
            factors: factors
                .iter()
                .map(|(unit, factor)| ((*unit).to_string(), *factor))
                .collect(),
            canonical: canonical.to_string(),
        }
    }

    /// Direct factor to a target unit, if present
    pub fn factor_to(&self, unit: &str) -> Option<f64> {
        self.factors
            .iter()
            .find(|(target, _)| target == unit)
            .map(|(_, factor)| *factor)
    }

    /// Direct factor edges in declaration order
    pub fn factors(&self) -> &[(String, f64)] {
        &self.factors
    }

    /// Designated canonical unit for bridging
    pub fn canonical(&self) -> &str {
        &self.canonical
    }
}

/// Adjacency table over historical unit nodes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoricalTable {
    nodes: HashMap<String, HistoricalUnit>,
    order: Vec<String>,
}

impl HistoricalTable {
    /// Create an empty table
    pub fn new() -> Self {
        HistoricalTable {
            nodes: HashMap::new(),
            order: Vec::new(),
        }
    }

    /// Add or replace a unit node. Replacing keeps the unit's original
    /// position in the list.
    pub fn insert(&mut self, unit: &str, node: HistoricalUnit) {
        if !self.nodes.contains_key(unit) {
            self.order.push(unit.to_string());
        }
        self.nodes.insert(unit.to_string(), node);
    }

    /// Node for a unit, if listed
    pub fn get(&self, unit: &str) -> Option<&HistoricalUnit> {
        self.nodes.get(unit)
    }

    /// Unit identifiers in presentation order
    pub fn units(&self) -> &[String] {
        &self.order
    }

    /// Number of unit nodes
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Check if the table is empty
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Two-step resolution, rounded to 4 decimal places.
    ///
    /// Step 1: a direct factor for (from, to) wins and needs no node for the
    /// target. Step 2: bridge with `value * factor[from][bridge] /
    /// factor[to][bridge]`, preferring the source's designated canonical
    /// unit, else any unit both nodes carry a factor for. No bridge means
    /// the table lacks a shared canonical unit for the pair (MissingFactor).
    pub fn convert(&self, value: f64, from_unit: &str, to_unit: &str) -> ConvertResult<f64> {
        let from_node = self.get(from_unit).ok_or_else(|| {
            ConvertError::missing_factor(Category::HistoricalUnits, from_unit, from_unit, to_unit)
        })?;

        if let Some(factor) = from_node.factor_to(to_unit) {
            return Ok(round_to(value * factor, HISTORICAL_DECIMALS));
        }

        let to_node = self.get(to_unit).ok_or_else(|| {
            ConvertError::missing_factor(Category::HistoricalUnits, to_unit, from_unit, to_unit)
        })?;
        let (from_factor, to_factor) = bridge_factors(from_node, to_node).ok_or_else(|| {
            ConvertError::missing_factor(
                Category::HistoricalUnits,
                from_node.canonical(),
                from_unit,
                to_unit,
            )
        })?;
        Ok(round_to(value * from_factor / to_factor, HISTORICAL_DECIMALS))
    }
}

impl Default for HistoricalTable {
    fn default() -> Self {
        Self::new()
    }
}

/// Pick the bridge unit for two nodes and return both sides' factors to it:
/// the source's designated canonical first, else the first factor unit the
/// target also carries.
fn bridge_factors(from_node: &HistoricalUnit, to_node: &HistoricalUnit) -> Option<(f64, f64)> {
    let designated = from_node.canonical();
    if let (Some(from_factor), Some(to_factor)) =
        (from_node.factor_to(designated), to_node.factor_to(designated))
    {
        return Some((from_factor, to_factor));
    }
    from_node.factors().iter().find_map(|(unit, from_factor)| {
        to_node
            .factor_to(unit)
            .map(|to_factor| (*from_factor, to_factor))
    })
}

// ============================================================================
// Built-in table
// ============================================================================

/// Built-in historical table. The modern canonical units (kg, lb, g, oz) are
/// identity nodes so conversions out of them resolve through the same
/// bridging step as everything else.
pub fn builtin_historical_table() -> HistoricalTable {
    let mut table = HistoricalTable::new();
    table.insert("libra", HistoricalUnit::new("kg", &[("kg", 0.327), ("lb", 0.721)]));
    table.insert("talent", HistoricalUnit::new("kg", &[("kg", 26.0), ("lb", 57.32)]));
    table.insert("stone", HistoricalUnit::new("kg", &[("kg", 6.35), ("lb", 14.0)]));
    table.insert("deben", HistoricalUnit::new("g", &[("g", 91.0), ("oz", 3.21)]));
    table.insert("shekel", HistoricalUnit::new("g", &[("g", 11.4), ("oz", 0.402)]));
    table.insert("kg", HistoricalUnit::new("kg", &[("kg", 1.0)]));
    table.insert("lb", HistoricalUnit::new("lb", &[("lb", 1.0)]));
    table.insert("g", HistoricalUnit::new("g", &[("g", 1.0)]));
    table.insert("oz", HistoricalUnit::new("oz", &[("oz", 1.0)]));
    table
}
