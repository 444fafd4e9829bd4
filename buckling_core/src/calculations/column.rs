//! # Column Analysis
//!
//! Runs the whole pipeline for a column as the user entered it: raw values
//! with their unit symbols are checked, converted to SI base units, and
//! handed to the Euler buckling evaluation.
//!
//! ## Example
//!
//! ```rust
//! use buckling_core::calculations::column::{analyze, ColumnInput, Measurement};
//! use buckling_core::calculations::buckling::{EndCondition, SafetyClass};
//!
//! let input = ColumnInput {
//!     label: "Steel example".to_string(),
//!     length: Measurement::new(3.0, "m"),
//!     modulus: Measurement::new(200.0, "GPa"),
//!     inertia: Measurement::new(9.6e6, "mm4"),
//!     area: Measurement::new(2850.0, "mm2"),
//!     yield_stress: Measurement::new(250.0, "MPa"),
//!     end_condition: EndCondition::PinnedPinned,
//! };
//!
//! let analysis = analyze(&input).unwrap();
//! assert_eq!(analysis.result.safety, SafetyClass::Unsafe);
//! ```

use serde::{Deserialize, Serialize};

use crate::calculations::buckling::{calculate, require_positive, BucklingInput, BucklingResult, EndCondition};
use crate::errors::{CalcError, CalcResult};
use crate::units::{convert, QuantityCategory};

/// A value as typed by the user, with the unit symbol it was entered in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Measurement {
    /// Number as entered
    pub value: f64,
    /// Unit symbol, e.g. `"mm4"`
    pub unit: String,
}

impl Measurement {
    /// Create a measurement from a value and unit symbol.
    pub fn new(value: f64, unit: impl Into<String>) -> Self {
        Measurement {
            value,
            unit: unit.into(),
        }
    }

    /// Value in the category's SI base unit.
    pub fn to_base(&self, category: QuantityCategory) -> CalcResult<f64> {
        convert(self.value, category, &self.unit)
    }
}

/// Raw column inputs in user units.
///
/// ## JSON Example
///
/// ```json
/// {
///   "label": "Aluminum example",
///   "length": { "value": 2.5, "unit": "m" },
///   "modulus": { "value": 69.0, "unit": "GPa" },
///   "inertia": { "value": 130000.0, "unit": "mm4" },
///   "area": { "value": 564.0, "unit": "mm2" },
///   "yield_stress": { "value": 240.0, "unit": "MPa" },
///   "end_condition": "fixed-pinned"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnInput {
    /// User label for this column (e.g., "C-1")
    #[serde(default)]
    pub label: String,

    /// Unbraced length L
    pub length: Measurement,

    /// Elastic modulus E
    pub modulus: Measurement,

    /// Second moment of area I
    pub inertia: Measurement,

    /// Cross-sectional area A
    pub area: Measurement,

    /// Yield stress σY
    pub yield_stress: Measurement,

    /// End support condition (sets K)
    #[serde(default)]
    pub end_condition: EndCondition,
}

impl ColumnInput {
    /// Each raw measurement paired with its field name and quantity category
    pub fn measurements(&self) -> [(&'static str, QuantityCategory, &Measurement); 5] {
        [
            ("length", QuantityCategory::Length, &self.length),
            ("modulus", QuantityCategory::Modulus, &self.modulus),
            ("inertia", QuantityCategory::Inertia, &self.inertia),
            ("area", QuantityCategory::Area, &self.area),
            ("yield_stress", QuantityCategory::Stress, &self.yield_stress),
        ]
    }

    /// Validate input parameters: all five raw values finite and positive.
    pub fn validate(&self) -> CalcResult<()> {
        for (field, _, measurement) in self.measurements() {
            require_positive(field, measurement.value)?;
        }
        Ok(())
    }

    /// Validate and convert every measurement into SI base units.
    pub fn to_base(&self) -> CalcResult<BucklingInput> {
        self.validate()?;
        Ok(BucklingInput {
            length_m: self.length.to_base(QuantityCategory::Length)?,
            modulus_pa: self.modulus.to_base(QuantityCategory::Modulus)?,
            inertia_m4: self.inertia.to_base(QuantityCategory::Inertia)?,
            area_m2: self.area.to_base(QuantityCategory::Area)?,
            yield_stress_pa: self.yield_stress.to_base(QuantityCategory::Stress)?,
            k_factor: self.end_condition.k_factor(),
        })
    }
}

/// Column inputs that may still be incomplete, as read from a file before
/// command-line values are layered on top.
///
/// Every field is optional in JSON; [`PartialColumnInput::complete`] reports
/// the first measurement still missing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PartialColumnInput {
    pub label: Option<String>,
    pub length: Option<Measurement>,
    pub modulus: Option<Measurement>,
    pub inertia: Option<Measurement>,
    pub area: Option<Measurement>,
    pub yield_stress: Option<Measurement>,
    pub end_condition: Option<EndCondition>,
}

impl PartialColumnInput {
    /// Turn into a full [`ColumnInput`].
    ///
    /// Label defaults to empty and the end condition to pinned-pinned.
    ///
    /// # Returns
    ///
    /// * `Ok(ColumnInput)` - All five measurements present (values not yet validated)
    /// * `Err(CalcError::MissingField)` - A measurement is absent
    pub fn complete(self) -> CalcResult<ColumnInput> {
        fn require(field: &str, measurement: Option<Measurement>) -> CalcResult<Measurement> {
            measurement.ok_or_else(|| CalcError::missing_field(field))
        }

        Ok(ColumnInput {
            label: self.label.unwrap_or_default(),
            length: require("length", self.length)?,
            modulus: require("modulus", self.modulus)?,
            inertia: require("inertia", self.inertia)?,
            area: require("area", self.area)?,
            yield_stress: require("yield_stress", self.yield_stress)?,
            end_condition: self.end_condition.unwrap_or_default(),
        })
    }
}

/// Everything produced for one column: raw input, converted input, result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnAnalysis {
    pub input: ColumnInput,
    pub base: BucklingInput,
    pub result: BucklingResult,
}

/// Analyze a column from raw user inputs.
///
/// # Returns
///
/// * `Ok(ColumnAnalysis)` - Converted inputs and buckling result
/// * `Err(CalcError)` - Invalid value, unknown unit, or failed evaluation
pub fn analyze(input: &ColumnInput) -> CalcResult<ColumnAnalysis> {
    let base = input.to_base()?;
    let result = calculate(&base)?;
    tracing::debug!(label = %input.label, safety = ?result.safety, "column analyzed");
    Ok(ColumnAnalysis {
        input: input.clone(),
        base,
        result,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculations::buckling::SafetyClass;

    fn steel_column() -> ColumnInput {
        ColumnInput {
            label: "Steel".to_string(),
            length: Measurement::new(3.0, "m"),
            modulus: Measurement::new(200.0, "GPa"),
            inertia: Measurement::new(9.6e6, "mm4"),
            area: Measurement::new(2850.0, "mm2"),
            yield_stress: Measurement::new(250.0, "MPa"),
            end_condition: EndCondition::PinnedPinned,
        }
    }

    fn aluminum_column() -> ColumnInput {
        ColumnInput {
            label: "Aluminum".to_string(),
            length: Measurement::new(2.5, "m"),
            modulus: Measurement::new(69.0, "GPa"),
            inertia: Measurement::new(1.3e5, "mm4"),
            area: Measurement::new(564.0, "mm2"),
            yield_stress: Measurement::new(240.0, "MPa"),
            end_condition: EndCondition::FixedPinned,
        }
    }

    #[test]
    fn test_steel_conversion() {
        let base = steel_column().to_base().unwrap();
        assert!((base.inertia_m4 - 9.6e-6).abs() < 1e-18);
        assert!((base.area_m2 - 2.85e-3).abs() < 1e-15);
        assert_eq!(base.modulus_pa, 2e11);
        assert_eq!(base.yield_stress_pa, 2.5e8);
        assert_eq!(base.k_factor, 1.0);
    }

    #[test]
    fn test_steel_analysis() {
        let analysis = analyze(&steel_column()).unwrap();
        assert!((analysis.result.slenderness_ratio - 51.69).abs() < 0.05);
        assert!((analysis.result.factor_of_safety - 0.338).abs() < 1e-3);
        assert_eq!(analysis.result.safety, SafetyClass::Unsafe);
    }

    #[test]
    fn test_aluminum_analysis() {
        let analysis = analyze(&aluminum_column()).unwrap();
        // Le = 0.7 × 2.5 = 1.75 m
        assert!((analysis.result.effective_length_m - 1.75).abs() < 1e-12);
        // Pcr = π² × 69e9 × 1.3e-7 / 1.75² ≈ 28.91 kN, Py = 240e6 × 5.64e-4 = 135.36 kN
        assert!((analysis.result.critical_load_kn() - 28.91).abs() < 0.05);
        assert!((analysis.result.yield_load_kn() - 135.36).abs() < 1e-6);
        assert_eq!(analysis.result.safety, SafetyClass::VerySafe);
    }

    #[test]
    fn test_unknown_unit_propagates() {
        let mut column = steel_column();
        column.length = Measurement::new(5.0, "furlong");
        assert_eq!(
            analyze(&column).unwrap_err(),
            CalcError::unknown_unit("length", "furlong")
        );
    }

    #[test]
    fn test_raw_zero_rejected_before_conversion() {
        let mut column = steel_column();
        column.area = Measurement::new(0.0, "bogus");
        match analyze(&column).unwrap_err() {
            CalcError::InvalidInput { field, .. } => assert_eq!(field, "area"),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_json_defaults() {
        let json = r#"{
            "length": { "value": 3.0, "unit": "m" },
            "modulus": { "value": 200.0, "unit": "GPa" },
            "inertia": { "value": 9600000.0, "unit": "mm4" },
            "area": { "value": 2850.0, "unit": "mm2" },
            "yield_stress": { "value": 250.0, "unit": "MPa" }
        }"#;
        let column: ColumnInput = serde_json::from_str(json).unwrap();
        assert_eq!(column.label, "");
        assert_eq!(column.end_condition, EndCondition::PinnedPinned);
        assert_eq!(column, ColumnInput { label: String::new(), ..steel_column() });
    }

    #[test]
    fn test_partial_input_from_json() {
        let partial: PartialColumnInput =
            serde_json::from_str(r#"{ "length": { "value": 3.0, "unit": "m" } }"#).unwrap();
        assert_eq!(partial.length, Some(Measurement::new(3.0, "m")));
        assert!(partial.modulus.is_none());
        assert!(partial.end_condition.is_none());
    }

    #[test]
    fn test_partial_input_reports_missing_field() {
        let partial = PartialColumnInput {
            length: Some(Measurement::new(3.0, "m")),
            ..PartialColumnInput::default()
        };
        assert_eq!(
            partial.complete().unwrap_err(),
            CalcError::MissingField {
                field: "modulus".to_string()
            }
        );
    }

    #[test]
    fn test_partial_input_complete_defaults() {
        let steel = steel_column();
        let partial = PartialColumnInput {
            label: None,
            length: Some(steel.length.clone()),
            modulus: Some(steel.modulus.clone()),
            inertia: Some(steel.inertia.clone()),
            area: Some(steel.area.clone()),
            yield_stress: Some(steel.yield_stress.clone()),
            end_condition: None,
        };
        let input = partial.complete().unwrap();
        assert_eq!(input.label, "");
        assert_eq!(input.end_condition, EndCondition::PinnedPinned);
        assert_eq!(input.inertia, steel.inertia);
    }
}
