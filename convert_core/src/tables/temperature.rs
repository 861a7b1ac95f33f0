//! # Temperature Conversion Table
//!
//! Pairwise affine formulas among °C, °F and K. Temperature scales differ by
//! offset as well as scale, so unlike the linear categories each ordered pair
//! carries its own transform. Only the six non-identity ordered pairs exist;
//! identity pairs are short-circuited by the engine. Results round to 2
//! decimal places.
//!
//! ## Example
//!
//! ```rust
//! use convert_core::tables::temperature::builtin_temperature_table;
//!
//! let table = builtin_temperature_table();
//! assert_eq!(table.convert(100.0, "°C", "°F").unwrap(), 212.0);
//! assert_eq!(table.convert(0.0, "K", "°C").unwrap(), -273.15);
//! ```

use serde::{Deserialize, Serialize};

use crate::category::Category;
use crate::errors::{ConvertError, ConvertResult};

use super::round_to;

/// Decimal places applied to temperature results
const TEMPERATURE_DECIMALS: u32 = 2;

/// Affine transform applied to a temperature reading:
/// `result = value * scale + offset`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AffineFormula {
    pub scale: f64,
    pub offset: f64,
}

impl AffineFormula {
    /// Apply the transform to a reading
    pub fn apply(&self, value: f64) -> f64 {
        value * self.scale + self.offset
    }
}

/// One directed conversion between two temperature units
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemperaturePair {
    pub from_unit: String,
    pub to_unit: String,
    pub formula: AffineFormula,
}

/// Ordered-pair formula table for temperature conversion.
///
/// Units are registered as pairs are inserted, so the unit list and the
/// formula set always come from the same data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemperatureTable {
    pairs: Vec<TemperaturePair>,
    order: Vec<String>,
}

impl TemperatureTable {
    /// Create an empty table
    pub fn new() -> Self {
        TemperatureTable {
            pairs: Vec::new(),
            order: Vec::new(),
        }
    }

    /// Define or replace the formula for one ordered pair, registering
    /// unseen units in the unit list as they appear
    pub fn insert(&mut self, from_unit: &str, to_unit: &str, formula: AffineFormula) {
        self.register_unit(from_unit);
        self.register_unit(to_unit);
        if let Some(pair) = self
            .pairs
            .iter_mut()
            .find(|pair| pair.from_unit == from_unit && pair.to_unit == to_unit)
        {
            pair.formula = formula;
        } else {
            self.pairs.push(TemperaturePair {
                from_unit: from_unit.to_string(),
                to_unit: to_unit.to_string(),
                formula,
            });
        }
    }

    fn register_unit(&mut self, unit: &str) {
        if !self.order.iter().any(|u| u == unit) {
            self.order.push(unit.to_string());
        }
    }

    /// Formula for an ordered pair, if defined
    pub fn formula(&self, from_unit: &str, to_unit: &str) -> Option<&AffineFormula> {
        self.pairs
            .iter()
            .find(|pair| pair.from_unit == from_unit && pair.to_unit == to_unit)
            .map(|pair| &pair.formula)
    }

    /// Check whether a unit is registered
    pub fn contains(&self, unit: &str) -> bool {
        self.order.iter().any(|u| u == unit)
    }

    /// Unit identifiers in presentation order
    pub fn units(&self) -> &[String] {
        &self.order
    }

    /// Number of directed pairs in the table
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Check if the table is empty
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Convert between two temperature units, rounding to 2 decimal places.
    ///
    /// A pair absent from the table means the unit set and the formula set
    /// disagree, which is a table defect (MissingFactor), never a user error.
    pub fn convert(&self, value: f64, from_unit: &str, to_unit: &str) -> ConvertResult<f64> {
        let formula = self.formula(from_unit, to_unit).ok_or_else(|| {
            let missing = if !self.contains(from_unit) {
                from_unit
            } else if !self.contains(to_unit) {
                to_unit
            } else {
                // both units registered but the pair is undefined
                from_unit
            };
            ConvertError::missing_factor(Category::Temperature, missing, from_unit, to_unit)
        })?;
        Ok(round_to(formula.apply(value), TEMPERATURE_DECIMALS))
    }
}

impl Default for TemperatureTable {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Built-in table
// ============================================================================

/// Built-in temperature table: the six directed pairs among °C, °F and K.
pub fn builtin_temperature_table() -> TemperatureTable {
    let mut table = TemperatureTable::new();
    table.insert(
        "°C",
        "°F",
        AffineFormula {
            scale: 9.0 / 5.0,
            offset: 32.0,
        },
    );
    table.insert(
        "°F",
        "°C",
        AffineFormula {
            scale: 5.0 / 9.0,
            offset: -32.0 * 5.0 / 9.0,
        },
    );
    table.insert(
        "K",
        "°C",
        AffineFormula {
            scale: 1.0,
            offset: -273.15,
        },
    );
    table.insert(
        "°C",
        "K",
        AffineFormula {
            scale: 1.0,
            offset: 273.15,
        },
    );
    table.insert(
        "K",
        "°F",
        AffineFormula {
            scale: 9.0 / 5.0,
            offset: 32.0 - 273.15 * 9.0 / 5.0,
        },
    );
    table.insert(
        "°F",
        "K",
        AffineFormula {
            scale: 5.0 / 9.0,
            offset: 273.15 - 32.0 * 5.0 / 9.0,
        },
    );
    table
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_has_six_pairs_and_three_units() {
        let table = builtin_temperature_table();
        assert_eq!(table.len(), 6);
        assert_eq!(table.units(), &["°C", "°F", "K"]);
        for from_unit in table.units() {
            for to_unit in table.units() {
                if from_unit != to_unit {
                    assert!(table.formula(from_unit, to_unit).is_some());
                }
            }
        }
    }

    #[test]
    fn test_celsius_fahrenheit() {
        let table = builtin_temperature_table();
        assert_eq!(table.convert(100.0, "°C", "°F").unwrap(), 212.0);
        assert_eq!(table.convert(0.0, "°C", "°F").unwrap(), 32.0);
        assert_eq!(table.convert(-40.0, "°C", "°F").unwrap(), -40.0);
        assert_eq!(table.convert(32.0, "°F", "°C").unwrap(), 0.0);
        assert_eq!(table.convert(212.0, "°F", "°C").unwrap(), 100.0);
    }

    #[test]
    fn test_kelvin_pairs() {
        let table = builtin_temperature_table();
        assert_eq!(table.convert(0.0, "°C", "K").unwrap(), 273.15);
        assert_eq!(table.convert(300.0, "K", "°C").unwrap(), 26.85);
        assert_eq!(table.convert(0.0, "K", "°F").unwrap(), -459.67);
        assert_eq!(table.convert(98.6, "°F", "K").unwrap(), 310.15);
    }

    #[test]
    fn test_results_round_to_two_decimals() {
        let table = builtin_temperature_table();
        // 37.77777... °C exact would be repeating; table reports 2 decimals
        assert_eq!(table.convert(100.0, "°F", "°C").unwrap(), 37.78);
        assert_eq!(table.convert(1.0, "°F", "°C").unwrap(), -17.22);
    }

    #[test]
    fn test_round_trip_within_tolerance() {
        let table = builtin_temperature_table();
        for celsius in [-40.0, 0.0, 26.3, 37.4, 100.0] {
            let fahrenheit = table.convert(celsius, "°C", "°F").unwrap();
            let back = table.convert(fahrenheit, "°F", "°C").unwrap();
            assert!(
                (back - celsius).abs() < 0.01,
                "°C -> °F -> °C drifted: {celsius} became {back}"
            );
        }
    }

    #[test]
    fn test_unknown_unit_is_missing_factor() {
        let table = builtin_temperature_table();
        let err = table.convert(20.0, "°C", "R").unwrap_err();
        assert_eq!(err.error_code(), "MISSING_FACTOR");
        match &err {
            ConvertError::MissingFactor { unit, .. } => assert_eq!(unit, "R"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_undefined_pair_between_known_units_is_missing_factor() {
        // a table whose unit list and formula set disagree
        let mut table = TemperatureTable::new();
        table.insert(
            "°C",
            "°F",
            AffineFormula {
                scale: 9.0 / 5.0,
                offset: 32.0,
            },
        );
        let err = table.convert(50.0, "°F", "°C").unwrap_err();
        assert_eq!(err.error_code(), "MISSING_FACTOR");
        assert!(err.is_table_defect());
    }

    #[test]
    fn test_insert_replaces_existing_pair() {
        let mut table = TemperatureTable::new();
        let wrong = AffineFormula {
            scale: 2.0,
            offset: 0.0,
        };
        let right = AffineFormula {
            scale: 1.0,
            offset: -273.15,
        };
        table.insert("K", "°C", wrong);
        table.insert("K", "°C", right);
        assert_eq!(table.len(), 1);
        assert_eq!(table.formula("K", "°C"), Some(&right));
    }

    #[test]
    fn test_serde_round_trip() {
        let table = builtin_temperature_table();
        let json = serde_json::to_string(&table).unwrap();
        let roundtrip: TemperatureTable = serde_json::from_str(&json).unwrap();
        // the K -> °F offset prints with 17 significant digits; the parsed
        // JSON must give back the identical f64, not a neighboring one
        assert_eq!(roundtrip.formula("K", "°F"), table.formula("K", "°F"));
        assert_eq!(table, roundtrip);
    }
}
