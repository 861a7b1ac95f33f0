//! # convert_core - Unit Conversion Engine
//!
//! `convert_core` is the computational heart of Quantum Converter, mapping a
//! numeric value from one unit to another within a chosen category (length,
//! temperature, weight, digital storage, currency, historical units). The
//! engine is pure and stateless: category-scoped tables are built once, and
//! each call turns (category, value, from unit, to unit) into a converted
//! value or a typed failure.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: conversions are pure functions over immutable tables
//! - **JSON-First**: all types implement Serialize/Deserialize
//! - **Rich Errors**: structured failure kinds, not just strings
//! - **UI-Agnostic**: the engine never produces user-facing text; callers
//!   own presentation, history and rate fetching
//!
//! ## Quick Start
//!
//! ```rust
//! use convert_core::{Category, ConversionEngine};
//!
//! let engine = ConversionEngine::new();
//!
//! assert_eq!(engine.convert(Category::Length, 2.5, "km", "m").unwrap(), 2500.0);
//! assert_eq!(engine.convert(Category::DigitalStorage, 1.0, "KB", "bytes").unwrap(), 1024.0);
//!
//! // failures carry the category and the unit pair that was requested
//! let err = engine.convert(Category::Currency, 5.0, "USD", "XYZ").unwrap_err();
//! assert_eq!(err.error_code(), "UNSUPPORTED_PAIR");
//! ```
//!
//! ## Modules
//!
//! - [`category`] - The closed set of conversion categories
//! - [`tables`] - Per-category conversion tables and the built-in data
//! - [`engine`] - Strategy dispatch and the public conversion surface
//! - [`errors`] - Structured error types

pub mod category;
pub mod engine;
pub mod errors;
pub mod tables;

// Re-export commonly used types at crate root for convenience
pub use category::Category;
pub use engine::{CategoryConverter, ConversionEngine};
pub use errors::{ConvertError, ConvertResult};
