//! # Error Types
//!
//! Structured error types for convert_core. Each failure carries the
//! category and the unit pair that was requested, so callers can render a
//! specific message or handle the failure programmatically without parsing
//! text.
//!
//! ## Example
//!
//! ```rust
//! use convert_core::errors::{ConvertError, ConvertResult};
//! use convert_core::Category;
//!
//! fn ensure_finite(value: f64) -> ConvertResult<()> {
//!     if !value.is_finite() {
//!         return Err(ConvertError::invalid_value(Category::Length, value, "m", "km"));
//!     }
//!     Ok(())
//! }
//!
//! assert!(ensure_finite(1.5).is_ok());
//! assert!(ensure_finite(f64::NAN).is_err());
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::category::Category;

/// Result type alias for convert_core operations
pub type ConvertResult<T> = Result<T, ConvertError>;

/// Structured error type for conversion operations.
///
/// Each variant provides specific context about what went wrong. The engine
/// never produces user-facing text; `Display` output is diagnostic and the
/// caller decides how to present a failure.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum ConvertError {
    /// The requested pair is not resolvable under the category's strategy
    /// (e.g. the target currency is absent from the base's rate sub-table)
    #[error("Unsupported pair: {category} cannot convert '{from_unit}' to '{to_unit}'")]
    UnsupportedPair {
        category: Category,
        from_unit: String,
        to_unit: String,
    },

    /// A referenced unit has no usable factor in its category's table.
    /// Indicates a table construction defect rather than a legitimately
    /// unavailable pair.
    #[error("Missing factor for '{unit}' in {category} table - converting '{from_unit}' to '{to_unit}'")]
    MissingFactor {
        category: Category,
        unit: String,
        from_unit: String,
        to_unit: String,
    },

    /// The input value is not a finite number (NaN or infinity)
    #[error("Invalid value {value} for {category}: '{from_unit}' to '{to_unit}' requires a finite number")]
    InvalidValue {
        category: Category,
        value: String,
        from_unit: String,
        to_unit: String,
    },
}

impl ConvertError {
    /// Create an UnsupportedPair error
    pub fn unsupported_pair(
        category: Category,
        from_unit: impl Into<String>,
        to_unit: impl Into<String>,
    ) -> Self {
        ConvertError::UnsupportedPair {
            category,
            from_unit: from_unit.into(),
            to_unit: to_unit.into(),
        }
    }

    /// Create a MissingFactor error naming the unit whose factor is absent
    pub fn missing_factor(
        category: Category,
        unit: impl Into<String>,
        from_unit: impl Into<String>,
        to_unit: impl Into<String>,
    ) -> Self {
        ConvertError::MissingFactor {
            category,
            unit: unit.into(),
            from_unit: from_unit.into(),
            to_unit: to_unit.into(),
        }
    }

    /// Create an InvalidValue error. The offending value is stored as a
    /// string so the error stays comparable and JSON-safe even for NaN.
    pub fn invalid_value(
        category: Category,
        value: f64,
        from_unit: impl Into<String>,
        to_unit: impl Into<String>,
    ) -> Self {
        ConvertError::InvalidValue {
            category,
            value: value.to_string(),
            from_unit: from_unit.into(),
            to_unit: to_unit.into(),
        }
    }

    /// The category the failed conversion was requested in
    pub fn category(&self) -> Category {
        match self {
            ConvertError::UnsupportedPair { category, .. }
            | ConvertError::MissingFactor { category, .. }
            | ConvertError::InvalidValue { category, .. } => *category,
        }
    }

    /// The source unit of the failed conversion
    pub fn from_unit(&self) -> &str {
        match self {
            ConvertError::UnsupportedPair { from_unit, .. }
            | ConvertError::MissingFactor { from_unit, .. }
            | ConvertError::InvalidValue { from_unit, .. } => from_unit,
        }
    }

    /// The target unit of the failed conversion
    pub fn to_unit(&self) -> &str {
        match self {
            ConvertError::UnsupportedPair { to_unit, .. }
            | ConvertError::MissingFactor { to_unit, .. }
            | ConvertError::InvalidValue { to_unit, .. } => to_unit,
        }
    }

    /// Check if this failure points at table configuration rather than the
    /// request itself
    pub fn is_table_defect(&self) -> bool {
        matches!(self, ConvertError::MissingFactor { .. })
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            ConvertError::UnsupportedPair { .. } => "UNSUPPORTED_PAIR",
            ConvertError::MissingFactor { .. } => "MISSING_FACTOR",
            ConvertError::InvalidValue { .. } => "INVALID_VALUE",
        }
    }
}
