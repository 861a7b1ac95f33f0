//! # Conversion Engine
//!
//! The public conversion surface. [`CategoryConverter`] pairs each category
//! with its immutable table and strategy; [`ConversionEngine`] validates the
//! request, short-circuits identity pairs and dispatches to the category's
//! converter.
//!
//! ## Quick Start
//!
//! ```rust
//! use convert_core::{Category, ConversionEngine};
//!
//! let engine = ConversionEngine::new();
//!
//! let meters = engine.convert(Category::Length, 2.5, "km", "m").unwrap();
//! assert_eq!(meters, 2500.0);
//!
//! let fahrenheit = engine.convert(Category::Temperature, 100.0, "°C", "°F").unwrap();
//! assert_eq!(fahrenheit, 212.0);
//!
//! // unit lists drive selection widgets
//! assert_eq!(engine.units(Category::Temperature), &["°C", "°F", "K"]);
//! ```

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::category::Category;
use crate::errors::{ConvertError, ConvertResult};
use crate::tables::currency::{builtin_rate_snapshot, CurrencyRateTable};
use crate::tables::historical::{builtin_historical_table, HistoricalTable};
use crate::tables::linear::{
    builtin_length_table, builtin_storage_table, builtin_weight_table, LinearTable,
};
use crate::tables::temperature::{builtin_temperature_table, TemperatureTable};

/// Conversion strategy for one category, carrying that category's table.
///
/// The three linear categories share the `Linear` variant and record which
/// category they serve; the other strategies are category-specific.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "strategy")]
pub enum CategoryConverter {
    /// Scale-factor conversion (Length, Weight, Digital Storage)
    Linear {
        category: Category,
        table: LinearTable,
    },
    /// Pairwise affine formulas among temperature scales
    Temperature { table: TemperatureTable },
    /// Cross-rate lookup keyed by base currency
    Currency { table: CurrencyRateTable },
    /// Direct factors with canonical-unit bridging
    Historical { table: HistoricalTable },
}

impl CategoryConverter {
    /// The category this converter serves
    pub fn category(&self) -> Category {
        match self {
            CategoryConverter::Linear { category, .. } => *category,
            CategoryConverter::Temperature { .. } => Category::Temperature,
            CategoryConverter::Currency { .. } => Category::Currency,
            CategoryConverter::Historical { .. } => Category::HistoricalUnits,
        }
    }

    /// Valid unit identifiers for this converter, in presentation order
    pub fn units(&self) -> &[String] {
        match self {
            CategoryConverter::Linear { table, .. } => table.units(),
            CategoryConverter::Temperature { table } => table.units(),
            CategoryConverter::Currency { table } => table.currencies(),
            CategoryConverter::Historical { table } => table.units(),
        }
    }

    /// Run this converter's strategy. Value validation and the identity
    /// short-circuit happen in [`ConversionEngine::convert`] before dispatch.
    pub fn convert(&self, value: f64, from_unit: &str, to_unit: &str) -> ConvertResult<f64> {
        match self {
            CategoryConverter::Linear { category, table } => {
                table.convert(*category, value, from_unit, to_unit)
            }
            CategoryConverter::Temperature { table } => table.convert(value, from_unit, to_unit),
            CategoryConverter::Currency { table } => table.convert(value, from_unit, to_unit),
            CategoryConverter::Historical { table } => table.convert(value, from_unit, to_unit),
        }
    }
}

/// The conversion engine: one immutable converter per category.
///
/// Stateless per call; every method takes `&self` and the tables are never
/// mutated after construction, so one instance can be shared freely across
/// threads. Refreshing currency rates means building a new engine with
/// [`ConversionEngine::with_currency_rates`] and swapping it in, not
/// mutating this one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversionEngine {
    length: CategoryConverter,
    temperature: CategoryConverter,
    weight: CategoryConverter,
    digital_storage: CategoryConverter,
    currency: CategoryConverter,
    historical_units: CategoryConverter,
}

impl ConversionEngine {
    /// Engine over the built-in tables
    pub fn new() -> Self {
        ConversionEngine {
            length: CategoryConverter::Linear {
                category: Category::Length,
                table: builtin_length_table(),
            },
            temperature: CategoryConverter::Temperature {
                table: builtin_temperature_table(),
            },
            weight: CategoryConverter::Linear {
                category: Category::Weight,
                table: builtin_weight_table(),
            },
            digital_storage: CategoryConverter::Linear {
                category: Category::DigitalStorage,
                table: builtin_storage_table(),
            },
            currency: CategoryConverter::Currency {
                table: builtin_rate_snapshot(),
            },
            historical_units: CategoryConverter::Historical {
                table: builtin_historical_table(),
            },
        }
    }

    /// Shared engine over the built-in tables, constructed on first use
    pub fn builtin() -> &'static ConversionEngine {
        static BUILTIN: Lazy<ConversionEngine> = Lazy::new(ConversionEngine::new);
        &BUILTIN
    }

    /// Replace the currency rate snapshot, e.g. with rates from a live feed
    pub fn with_currency_rates(mut self, table: CurrencyRateTable) -> Self {
        self.currency = CategoryConverter::Currency { table };
        self
    }

    /// Borrow the converter serving a category
    pub fn converter(&self, category: Category) -> &CategoryConverter {
        match category {
            Category::Length => &self.length,
            Category::Temperature => &self.temperature,
            Category::Weight => &self.weight,
            Category::DigitalStorage => &self.digital_storage,
            Category::Currency => &self.currency,
            Category::HistoricalUnits => &self.historical_units,
        }
    }

    /// Valid unit identifiers for a category, in presentation order
    pub fn units(&self, category: Category) -> &[String] {
        self.converter(category).units()
    }

    /// Convert `value` from `from_unit` to `to_unit` within `category`.
    ///
    /// Non-finite values are rejected before any table lookup. Identical
    /// unit identifiers return the value unchanged, with no rounding, for
    /// every category.
    pub fn convert(
        &self,
        category: Category,
        value: f64,
        from_unit: &str,
        to_unit: &str,
    ) -> ConvertResult<f64> {
        if !value.is_finite() {
            return Err(ConvertError::invalid_value(category, value, from_unit, to_unit));
        }
        if from_unit == to_unit {
            return Ok(value);
        }
        self.converter(category).convert(value, from_unit, to_unit)
    }
}

impl Default for ConversionEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_converter_dispatch_matches_category() {
        let engine = ConversionEngine::new();
        for category in Category::ALL {
            assert_eq!(engine.converter(category).category(), category);
        }
    }

    #[test]
    fn test_identity_returns_value_unchanged_for_every_category() {
        let engine = ConversionEngine::new();
        let units = [
            (Category::Length, "mile"),
            (Category::Temperature, "°F"),
            (Category::Weight, "oz"),
            (Category::DigitalStorage, "TB"),
            (Category::Currency, "PKR"),
            (Category::HistoricalUnits, "shekel"),
        ];
        for (category, unit) in units {
            for value in [0.0, -3.25, 98.653, 1e9] {
                assert_eq!(engine.convert(category, value, unit, unit).unwrap(), value);
            }
        }
    }

    #[test]
    fn test_identity_applies_no_rounding() {
        let engine = ConversionEngine::new();
        // more precision than the category's rounding would keep
        let value = 12.345_678_901;
        assert_eq!(
            engine
                .convert(Category::Temperature, value, "°C", "°C")
                .unwrap(),
            value
        );
        assert_eq!(
            engine
                .convert(Category::HistoricalUnits, value, "libra", "libra")
                .unwrap(),
            value
        );
    }

    #[test]
    fn test_identity_short_circuits_before_lookup() {
        let engine = ConversionEngine::new();
        assert_eq!(
            engine.convert(Category::Currency, 5.0, "XYZ", "XYZ").unwrap(),
            5.0
        );
    }

    #[test]
    fn test_non_finite_values_rejected_before_lookup() {
        let engine = ConversionEngine::new();
        for category in Category::ALL {
            for value in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
                let err = engine.convert(category, value, "a", "b").unwrap_err();
                assert_eq!(err.error_code(), "INVALID_VALUE");
                assert_eq!(err.category(), category);
            }
        }
        // rejected even when the pair is an identity
        let err = engine
            .convert(Category::Length, f64::NAN, "m", "m")
            .unwrap_err();
        assert_eq!(err.error_code(), "INVALID_VALUE");
    }

    #[test]
    fn test_convert_routes_to_each_strategy() {
        let engine = ConversionEngine::new();
        assert_eq!(
            engine.convert(Category::Length, 2.5, "km", "m").unwrap(),
            2500.0
        );
        assert_eq!(
            engine
                .convert(Category::Temperature, 100.0, "°C", "°F")
                .unwrap(),
            212.0
        );
        assert_eq!(
            engine.convert(Category::Weight, 500.0, "g", "kg").unwrap(),
            0.5
        );
        assert_eq!(
            engine
                .convert(Category::DigitalStorage, 1.0, "KB", "bytes")
                .unwrap(),
            1024.0
        );
        assert_eq!(
            engine
                .convert(Category::DigitalStorage, 1.0, "MB", "bytes")
                .unwrap(),
            1_048_576.0
        );
        let inr = engine.convert(Category::Currency, 100.0, "USD", "INR").unwrap();
        assert!((inr - 8321.0).abs() < 1e-9);
        assert_eq!(
            engine
                .convert(Category::HistoricalUnits, 1.0, "talent", "kg")
                .unwrap(),
            26.0
        );
    }

    #[test]
    fn test_unsupported_currency_pair_surfaces_distinctly() {
        let engine = ConversionEngine::new();
        let err = engine
            .convert(Category::Currency, 5.0, "USD", "XYZ")
            .unwrap_err();
        assert_eq!(err.error_code(), "UNSUPPORTED_PAIR");
        assert_eq!(err.category(), Category::Currency);
        assert_eq!(err.from_unit(), "USD");
        assert_eq!(err.to_unit(), "XYZ");
    }

    #[test]
    fn test_unit_lists_match_table_order() {
        let engine = ConversionEngine::new();
        assert_eq!(
            engine.units(Category::Length),
            &["mm", "cm", "m", "km", "inch", "foot", "mile", "yard"]
        );
        assert_eq!(engine.units(Category::Temperature), &["°C", "°F", "K"]);
        assert_eq!(
            engine.units(Category::Weight),
            &["mg", "g", "kg", "ton", "lb", "oz"]
        );
        assert_eq!(
            engine.units(Category::DigitalStorage),
            &["bits", "bytes", "KB", "MB", "GB", "TB", "PB"]
        );
        assert_eq!(
            engine.units(Category::Currency),
            &["USD", "EUR", "GBP", "INR", "PKR", "JPY"]
        );
        assert_eq!(
            engine.units(Category::HistoricalUnits),
            &["libra", "talent", "stone", "deben", "shekel", "kg", "lb", "g", "oz"]
        );
    }

    #[test]
    fn test_with_currency_rates_swaps_only_currency() {
        let mut rates = CurrencyRateTable::new();
        rates.insert_base("USD", &[("EUR", 2.0)]);
        let engine = ConversionEngine::new().with_currency_rates(rates);

        assert_eq!(
            engine.convert(Category::Currency, 3.0, "USD", "EUR").unwrap(),
            6.0
        );
        assert_eq!(engine.units(Category::Currency), &["USD"]);
        // the swapped snapshot no longer quotes the builtin pairs
        let err = engine
            .convert(Category::Currency, 1.0, "USD", "GBP")
            .unwrap_err();
        assert_eq!(err.error_code(), "UNSUPPORTED_PAIR");

        // other categories still use the built-in tables
        assert_eq!(
            engine.convert(Category::Length, 1.0, "km", "m").unwrap(),
            1000.0
        );
    }

    #[test]
    fn test_builtin_is_shared_and_usable() {
        let first = ConversionEngine::builtin();
        let second = ConversionEngine::builtin();
        assert!(std::ptr::eq(first, second));
        assert_eq!(
            first.convert(Category::Length, 1.0, "m", "cm").unwrap(),
            100.0
        );
        assert_eq!(first, &ConversionEngine::new());
    }

    #[test]
    fn test_engine_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ConversionEngine>();
    }

    #[test]
    fn test_serde_round_trip_with_strategy_tags() {
        let engine = ConversionEngine::new();
        let value = serde_json::to_value(&engine).unwrap();
        assert_eq!(value["length"]["strategy"], "Linear");
        assert_eq!(value["length"]["category"], "Length");
        assert_eq!(value["temperature"]["strategy"], "Temperature");
        assert_eq!(value["currency"]["strategy"], "Currency");
        assert_eq!(value["historical_units"]["strategy"], "Historical");

        let roundtrip: ConversionEngine = serde_json::from_value(value).unwrap();
        assert_eq!(engine, roundtrip);
    }
}
