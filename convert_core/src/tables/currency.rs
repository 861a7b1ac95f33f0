//! # Currency Rate Table
//!
//! Two-level cross-rate lookup: base currency first, then target. The table
//! is a static snapshot used exactly as given; reciprocal rates are never
//! derived and transitive consistency across bases is not assumed. Every
//! base carries an identity rate of 1.0 for itself, pinned when the table is
//! built so lookups need no defensive fallback.
//!
//! The engine does not fetch rates. A deployment sourcing rates from a live
//! feed builds a fresh table and swaps it in via
//! [`ConversionEngine::with_currency_rates`](crate::ConversionEngine::with_currency_rates).
//!
//! ## Example
//!
//! ```rust
//! use convert_core::tables::currency::CurrencyRateTable;
//!
//! let mut table = CurrencyRateTable::new();
//! table.insert_base("USD", &[("EUR", 0.92)]);
//! assert_eq!(table.rate("USD", "USD"), Some(1.0));
//! assert_eq!(table.rate("USD", "EUR"), Some(0.92));
//! ```

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::category::Category;
use crate::errors::{ConvertError, ConvertResult};

/// Cross-rate matrix keyed by base currency first, target second.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrencyRateTable {
    /// rate\[base\]\[target\]: value of one unit of base in target currency
    rates: HashMap<String, HashMap<String, f64>>,
    /// Base currency codes in insertion order
    order: Vec<String>,
}

impl CurrencyRateTable {
    /// Create an empty table
    pub fn new() -> Self {
        CurrencyRateTable {
            rates: HashMap::new(),
            order: Vec::new(),
        }
    }

    /// Add or extend the rate sub-table for a base currency.
    ///
    /// The base's identity rate is pinned to 1.0 afterwards regardless of
    /// the supplied entries, so every constructed table satisfies the
    /// rate\[C\]\[C\] = 1.0 invariant.
    pub fn insert_base(&mut self, base: &str, rates: &[(&str, f64)]) {
        let sub = self.rates.entry(base.to_string()).or_default();
        for (target, rate) in rates {
            sub.insert((*target).to_string(), *rate);
        }
        sub.insert(base.to_string(), 1.0);
        if !self.order.iter().any(|code| code == base) {
            self.order.push(base.to_string());
        }
    }

    /// Rate quoting one unit of `base` in `target`, if present
    pub fn rate(&self, base: &str, target: &str) -> Option<f64> {
        self.rates.get(base).and_then(|sub| sub.get(target)).copied()
    }

    /// Check whether a currency is listed as a base
    pub fn contains_base(&self, base: &str) -> bool {
        self.rates.contains_key(base)
    }

    /// Base currency codes in insertion order
    pub fn currencies(&self) -> &[String] {
        &self.order
    }

    /// Number of base currencies
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Check if the table is empty
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Convert by direct cross-rate lookup, no rounding.
    ///
    /// An unknown base is a table defect (MissingFactor). A known base
    /// without a quote for the target is the legitimately unavailable pair
    /// (UnsupportedPair), which callers may surface as its own message.
    pub fn convert(&self, value: f64, from_unit: &str, to_unit: &str) -> ConvertResult<f64> {
        let sub = self.rates.get(from_unit).ok_or_else(|| {
            ConvertError::missing_factor(Category::Currency, from_unit, from_unit, to_unit)
        })?;
        let rate = sub.get(to_unit).copied().ok_or_else(|| {
            ConvertError::unsupported_pair(Category::Currency, from_unit, to_unit)
        })?;
        Ok(value * rate)
    }
}

impl Default for CurrencyRateTable {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Built-in snapshot
// ============================================================================

/// Built-in static rate snapshot (approximate rates, no live feed).
pub fn builtin_rate_snapshot() -> CurrencyRateTable {
    let mut table = CurrencyRateTable::new();
    table.insert_base(
        "USD",
        &[
            ("EUR", 0.92),
            ("GBP", 0.78),
            ("INR", 83.21),
            ("PKR", 280.5),
            ("JPY", 150.0),
        ],
    );
    table.insert_base(
        "EUR",
        &[
            ("USD", 1.09),
            ("GBP", 0.85),
            ("INR", 90.5),
            ("PKR", 295.0),
            ("JPY", 162.8),
        ],
    );
    table.insert_base(
        "GBP",
        &[
            ("USD", 1.28),
            ("EUR", 1.17),
            ("INR", 105.3),
            ("PKR", 340.0),
            ("JPY", 180.4),
        ],
    );
    table.insert_base(
        "INR",
        &[
            ("USD", 0.012),
            ("EUR", 0.011),
            ("GBP", 0.0095),
            ("PKR", 3.37),
            ("JPY", 1.8),
        ],
    );
    table.insert_base(
        "PKR",
        &[
            ("USD", 0.0036),
            ("EUR", 0.0034),
            ("GBP", 0.0029),
            ("INR", 0.30),
            ("JPY", 0.53),
        ],
    );
    table.insert_base(
        "JPY",
        &[
            ("USD", 0.0067),
            ("EUR", 0.0061),
            ("GBP", 0.0055),
            ("INR", 0.56),
            ("PKR", 1.89),
        ],
    );
    table
}
