//! # Conversion Tables
//!
//! Immutable per-category conversion tables. Each table type owns its lookup
//! data and implements that category's conversion algorithm; the engine wires
//! one table to each category. Tables follow a construct-once, read-many
//! discipline: build them fully, then only borrow them.
//!
//! - [`linear`] - Scale-factor tables (Length, Weight, Digital Storage)
//! - [`temperature`] - Ordered-pair affine formulas among °C, °F and K
//! - [`currency`] - Two-level cross-rate matrix keyed by base currency
//! - [`historical`] - Direct factors with canonical-unit bridging

pub mod currency;
pub mod historical;
pub mod linear;
pub mod temperature;

// Re-export commonly used types
pub use currency::CurrencyRateTable;
pub use historical::{HistoricalTable, HistoricalUnit};
pub use linear::LinearTable;
pub use temperature::{AffineFormula, TemperatureTable};

/// Round a conversion result to a fixed number of decimal places.
pub(crate) fn round_to(value: f64, places: u32) -> f64 {
    let scale = 10f64.powi(places as i32);
    (value * scale).round() / scale
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_to() {
        assert_eq!(round_to(7.982_456_14, 4), 7.9825);
        assert_eq!(round_to(2.204_624_42, 6), 2.204_624);
        assert_eq!(round_to(-17.777_77, 2), -17.78);
        assert_eq!(round_to(26.0, 4), 26.0);
        assert_eq!(round_to(0.333_333_333, 2), 0.33);
    }
}
