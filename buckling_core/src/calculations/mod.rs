//! # Structural Calculations
//!
//! Each calculation follows the pattern:
//!
//! - `*Input` - Input parameters (JSON-serializable)
//! - `*Result` - Calculation results (JSON-serializable)
//! - `calculate(input) -> Result<*Result, CalcError>` - Pure calculation function
//!
//! ## Available Calculations
//!
//! - [`buckling`] - Euler buckling of an ideal column from SI base-unit inputs
//! - [`column`] - Full pipeline from user-entered values and units

pub mod buckling;
pub mod column;

// Re-export commonly used types
pub use buckling::{evaluate, BucklingInput, BucklingResult, EndCondition, SafetyClass, StatusLevel};
pub use column::{analyze, ColumnAnalysis, ColumnInput, Measurement, PartialColumnInput};
