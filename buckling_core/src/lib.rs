//! # buckling_core - Column Buckling Calculation Engine
//!
//! `buckling_core` converts user-entered quantities into SI base units,
//! evaluates Euler buckling of an ideal column, classifies the factor of
//! safety and formats the results for display.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take input and return results
//! - **JSON-First**: All input and result types implement Serialize/Deserialize
//! - **Rich Errors**: Structured error types, not just strings
//! - **No silent NaN**: Invalid inputs fail instead of producing NaN/∞
//!
//! ## Pipeline
//!
//! ```text
//! value + unit ──units::convert──▶ SI value ──buckling::evaluate──▶ BucklingResult ──format/report──▶ text
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use buckling_core::units::{convert, QuantityCategory};
//! use buckling_core::calculations::buckling::{evaluate, SafetyClass};
//! use buckling_core::format::format_default;
//!
//! let l = convert(3.0, QuantityCategory::Length, "m").unwrap();
//! let e = convert(200.0, QuantityCategory::Modulus, "GPa").unwrap();
//! let i = convert(9.6e6, QuantityCategory::Inertia, "mm4").unwrap();
//! let a = convert(2850.0, QuantityCategory::Area, "mm2").unwrap();
//! let sy = convert(250.0, QuantityCategory::Stress, "MPa").unwrap();
//!
//! let result = evaluate(l, e, i, a, sy, 1.0).unwrap();
//! assert_eq!(result.safety, SafetyClass::Unsafe);
//! assert_eq!(format_default(result.yield_load_n), "7.125×10⁵");
//! ```
//!
//! ## Modules
//!
//! - [`units`] - Unit conversion table and lookup
//! - [`equations`] - Closed-form buckling formulas
//! - [`calculations`] - Buckling evaluation and full column analysis
//! - [`format`] - Power-notation number formatting
//! - [`report`] - Report assembly and plain-text rendering
//! - [`settings`] - Report presentation settings
//! - [`file_io`] - JSON input/settings loading and result saving
//! - [`errors`] - Structured error types

pub mod calculations;
pub mod equations;
pub mod errors;
pub mod file_io;
pub mod format;
pub mod report;
pub mod settings;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use calculations::{
    analyze, evaluate, BucklingInput, BucklingResult, ColumnAnalysis, ColumnInput, PartialColumnInput, SafetyClass,
};
pub use errors::{CalcError, CalcResult};
pub use format::{format_default, format_fixed, format_power};
pub use report::Report;
pub use settings::ReportSettings;
pub use units::{convert, QuantityCategory};
