//! # Euler Buckling Evaluation
//!
//! Evaluates an ideal column against Euler buckling from SI base-unit
//! inputs and classifies the resulting factor of safety.
//!
//! ## Procedure
//!
//! 1. r = √(I/A)
//! 2. Le = K·L
//! 3. λ = Le/r
//! 4. Pcr = π²EI/Le²
//! 5. Py = σY·A
//! 6. FoS = Py/Pcr
//!
//! ## Example
//!
//! ```rust
//! use buckling_core::calculations::buckling::{evaluate, SafetyClass};
//!
//! // L = 3 m, E = 200 GPa, I = 9.6e-6 m⁴, A = 2.85e-3 m², σY = 250 MPa, pinned-pinned
//! let result = evaluate(3.0, 200e9, 9.6e-6, 2.85e-3, 250e6, 1.0).unwrap();
//! assert!((result.factor_of_safety - 0.338).abs() < 1e-3);
//! assert_eq!(result.safety, SafetyClass::Unsafe);
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::equations::buckling::{
    effective_length, euler_critical_load, factor_of_safety, radius_of_gyration, slenderness_ratio,
    yield_load,
};
use crate::errors::{CalcError, CalcResult};

const CALCULATION_TYPE: &str = "Euler buckling";

// ============================================================================
// End Conditions
// ============================================================================

/// Column end support condition, fixing the effective length factor K.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EndCondition {
    /// Both ends fixed (K = 0.5)
    FixedFixed,
    /// One end fixed, one pinned (K = 0.7)
    FixedPinned,
    /// Both ends pinned (K = 1.0)
    #[default]
    PinnedPinned,
    /// Flagpole: one end fixed, one free (K = 2.0)
    FixedFree,
}

impl EndCondition {
    /// All end conditions for iteration
    pub const ALL: [EndCondition; 4] = [
        EndCondition::FixedFixed,
        EndCondition::FixedPinned,
        EndCondition::PinnedPinned,
        EndCondition::FixedFree,
    ];

    /// Effective length factor K
    pub fn k_factor(&self) -> f64 {
        match self {
            EndCondition::FixedFixed => 0.5,
            EndCondition::FixedPinned => 0.7,
            EndCondition::PinnedPinned => 1.0,
            EndCondition::FixedFree => 2.0,
        }
    }

    /// Kebab-case name used in files and on the command line
    pub fn name(&self) -> &'static str {
        match self {
            EndCondition::FixedFixed => "fixed-fixed",
            EndCondition::FixedPinned => "fixed-pinned",
            EndCondition::PinnedPinned => "pinned-pinned",
            EndCondition::FixedFree => "fixed-free",
        }
    }

    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            EndCondition::FixedFixed => "Fixed-Fixed (K = 0.5)",
            EndCondition::FixedPinned => "Fixed-Pinned (K = 0.7)",
            EndCondition::PinnedPinned => "Pinned-Pinned (K = 1.0)",
            EndCondition::FixedFree => "Fixed-Free (K = 2.0)",
        }
    }

    /// Match a numeric K value to its end condition.
    pub fn from_k_factor(k: f64) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|condition| (condition.k_factor() - k).abs() < 1e-9)
    }
}

impl fmt::Display for EndCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for EndCondition {
    type Err = CalcError;

    /// Accepts the kebab-case name or the numeric K value ("0.7", "2").
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace('_', "-");
        if let Some(condition) = Self::ALL.into_iter().find(|c| c.name() == normalized) {
            return Ok(condition);
        }
        normalized
            .parse::<f64>()
            .ok()
            .and_then(Self::from_k_factor)
            .ok_or_else(|| CalcError::unknown_end_condition(s))
    }
}

// ============================================================================
// Safety Classification
// ============================================================================

/// Safety category derived from the factor of safety.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SafetyClass {
    /// FoS ≥ 2
    VerySafe,
    /// 1 ≤ FoS < 2
    Safe,
    /// 0.8 ≤ FoS < 1
    MarginallyUnsafe,
    /// FoS < 0.8
    Unsafe,
}

/// Coarse pass/warn/fail level for styling a safety class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusLevel {
    /// FoS ≥ 1
    Ok,
    /// Marginally unsafe band
    Warning,
    /// FoS < 0.8
    Failure,
}

impl SafetyClass {
    /// Classify a factor of safety. Lower bounds are inclusive; first match wins.
    pub fn from_factor_of_safety(fos: f64) -> Self {
        if fos >= 2.0 {
            SafetyClass::VerySafe
        } else if fos >= 1.0 {
            SafetyClass::Safe
        } else if fos >= 0.8 {
            SafetyClass::MarginallyUnsafe
        } else {
            SafetyClass::Unsafe
        }
    }

    /// Status text including the threshold band
    pub fn label(&self) -> &'static str {
        match self {
            SafetyClass::VerySafe => "Very Safe (FoS ≥ 2)",
            SafetyClass::Safe => "Safe (1 ≤ FoS < 2)",
            SafetyClass::MarginallyUnsafe => "Marginally Unsafe (0.8 ≤ FoS < 1)",
            SafetyClass::Unsafe => "Unsafe (FoS < 0.8)",
        }
    }

    /// Pass/warn/fail level for this class
    pub fn status_level(&self) -> StatusLevel {
        match self {
            SafetyClass::VerySafe | SafetyClass::Safe => StatusLevel::Ok,
            SafetyClass::MarginallyUnsafe => StatusLevel::Warning,
            SafetyClass::Unsafe => StatusLevel::Failure,
        }
    }
}

impl fmt::Display for SafetyClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ============================================================================
// Input / Result
// ============================================================================

/// Buckling inputs in SI base units.
///
/// ## JSON Example
///
/// ```json
/// {
///   "length_m": 3.0,
///   "modulus_pa": 200000000000.0,
///   "inertia_m4": 9.6e-6,
///   "area_m2": 0.00285,
///   "yield_stress_pa": 250000000.0,
///   "k_factor": 1.0
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BucklingInput {
    /// Unbraced length L (m)
    pub length_m: f64,

    /// Elastic modulus E (Pa)
    pub modulus_pa: f64,

    /// Second moment of area I (m⁴)
    pub inertia_m4: f64,

    /// Cross-sectional area A (m²)
    pub area_m2: f64,

    /// Yield stress σY (Pa)
    pub yield_stress_pa: f64,

    /// Effective length factor K
    pub k_factor: f64,
}

impl BucklingInput {
    /// Validate input parameters: every value finite and strictly positive.
    pub fn validate(&self) -> CalcResult<()> {
        require_positive("length_m", self.length_m)?;
        require_positive("modulus_pa", self.modulus_pa)?;
        require_positive("inertia_m4", self.inertia_m4)?;
        require_positive("area_m2", self.area_m2)?;
        require_positive("yield_stress_pa", self.yield_stress_pa)?;
        require_positive("k_factor", self.k_factor)?;
        Ok(())
    }
}

/// Reject NaN, infinite, zero and negative values.
pub(crate) fn require_positive(field: &str, value: f64) -> CalcResult<()> {
    if !value.is_finite() {
        return Err(CalcError::invalid_input(
            field,
            value.to_string(),
            "Value must be a finite number",
        ));
    }
    if value <= 0.0 {
        return Err(CalcError::invalid_input(
            field,
            value.to_string(),
            "Value must be positive",
        ));
    }
    Ok(())
}

/// Results from a buckling evaluation.
///
/// ## JSON Example
///
/// ```json
/// {
///   "radius_of_gyration_m": 0.05804,
///   "effective_length_m": 3.0,
///   "slenderness_ratio": 51.69,
///   "critical_load_n": 2105515.6,
///   "yield_load_n": 712500.0,
///   "factor_of_safety": 0.3384,
///   "safety": "unsafe"
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BucklingResult {
    /// Radius of gyration r (m)
    pub radius_of_gyration_m: f64,

    /// Effective length Le = K·L (m)
    pub effective_length_m: f64,

    /// Slenderness ratio λ = Le/r
    pub slenderness_ratio: f64,

    /// Euler critical load Pcr (N)
    pub critical_load_n: f64,

    /// Yield load Py (N)
    pub yield_load_n: f64,

    /// Factor of safety Py/Pcr
    pub factor_of_safety: f64,

    /// Classification of the factor of safety
    pub safety: SafetyClass,
}

impl BucklingResult {
    /// Critical load in kN
    pub fn critical_load_kn(&self) -> f64 {
        self.critical_load_n / 1000.0
    }

    /// Yield load in kN
    pub fn yield_load_kn(&self) -> f64 {
        self.yield_load_n / 1000.0
    }

    /// Check if the classification is safe or very safe (FoS ≥ 1)
    pub fn is_safe(&self) -> bool {
        self.safety.status_level() == StatusLevel::Ok
    }
}

// ============================================================================
// Evaluation
// ============================================================================

/// Evaluate Euler buckling from base-unit values.
///
/// # Arguments
///
/// * `l` - Unbraced length (m)
/// * `e` - Elastic modulus (Pa)
/// * `i` - Second moment of area (m⁴)
/// * `a` - Cross-sectional area (m²)
/// * `sigma_y` - Yield stress (Pa)
/// * `k` - Effective length factor
///
/// # Returns
///
/// * `Ok(BucklingResult)` - Fully populated result
/// * `Err(CalcError::InvalidInput)` - Any value NaN, infinite, zero or negative
/// * `Err(CalcError::CalculationFailed)` - A derived value overflowed
pub fn evaluate(l: f64, e: f64, i: f64, a: f64, sigma_y: f64, k: f64) -> CalcResult<BucklingResult> {
    calculate(&BucklingInput {
        length_m: l,
        modulus_pa: e,
        inertia_m4: i,
        area_m2: a,
        yield_stress_pa: sigma_y,
        k_factor: k,
    })
}

/// Evaluate Euler buckling for a validated [`BucklingInput`].
pub fn calculate(input: &BucklingInput) -> CalcResult<BucklingResult> {
    input.validate()?;

    let r = radius_of_gyration(input.inertia_m4, input.area_m2);
    let le = effective_length(input.k_factor, input.length_m);
    let lambda = slenderness_ratio(le, r);
    let pcr = euler_critical_load(input.modulus_pa, input.inertia_m4, le);
    let py = yield_load(input.yield_stress_pa, input.area_m2);
    let fos = factor_of_safety(py, pcr);

    // Finite positive inputs can still overflow or underflow at the extremes
    for (name, value) in [
        ("radius_of_gyration_m", r),
        ("effective_length_m", le),
        ("slenderness_ratio", lambda),
        ("critical_load_n", pcr),
        ("yield_load_n", py),
        ("factor_of_safety", fos),
    ] {
        if !value.is_finite() || value <= 0.0 {
            return Err(CalcError::calculation_failed(
                CALCULATION_TYPE,
                format!("{} evaluated to {}", name, value),
            ));
        }
    }

    let safety = SafetyClass::from_factor_of_safety(fos);
    tracing::debug!(
        radius_of_gyration_m = r,
        slenderness_ratio = lambda,
        critical_load_n = pcr,
        yield_load_n = py,
        factor_of_safety = fos,
        ?safety,
        "buckling evaluated"
    );

    Ok(BucklingResult {
        radius_of_gyration_m: r,
        effective_length_m: le,
        slenderness_ratio: lambda,
        critical_load_n: pcr,
        yield_load_n: py,
        factor_of_safety: fos,
        safety,
    })
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn base_input() -> impl Strategy<Value = BucklingInput> {
        (
            0.1_f64..20.0,
            1e9_f64..4e11,
            1e-9_f64..1e-3,
            1e-5_f64..1e-1,
            1e7_f64..1e9,
            prop::sample::select(vec![0.5, 0.7, 1.0, 2.0]),
        )
            .prop_map(|(l, e, i, a, sy, k)| BucklingInput {
                length_m: l,
                modulus_pa: e,
                inertia_m4: i,
                area_m2: a,
                yield_stress_pa: sy,
                k_factor: k,
            })
    }

    proptest! {
        #[test]
        fn more_inertia_raises_critical_load(input in base_input(), scale in 1.01_f64..10.0) {
            let base = calculate(&input).unwrap();
            let stiffer = calculate(&BucklingInput { inertia_m4: input.inertia_m4 * scale, ..input }).unwrap();
            prop_assert!(stiffer.critical_load_n > base.critical_load_n);
            prop_assert!(stiffer.factor_of_safety < base.factor_of_safety);
        }

        #[test]
        fn higher_yield_stress_raises_yield_load(input in base_input(), scale in 1.01_f64..10.0) {
            let base = calculate(&input).unwrap();
            let stronger = calculate(&BucklingInput { yield_stress_pa: input.yield_stress_pa * scale, ..input }).unwrap();
            prop_assert!(stronger.yield_load_n > base.yield_load_n);
            prop_assert!(stronger.factor_of_safety > base.factor_of_safety);
        }

        #[test]
        fn classification_matches_factor_of_safety(input in base_input()) {
            let result = calculate(&input).unwrap();
            prop_assert_eq!(result.safety, SafetyClass::from_factor_of_safety(result.factor_of_safety));
        }
    }
}
