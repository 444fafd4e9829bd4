//! # Euler Column Buckling Formulas
//!
//! Closed-form relations for an ideal, axially loaded, elastic column.
//! All functions are unit-agnostic; the calculation layer feeds them SI
//! base units (m, Pa, m⁴, m²) so loads come out in newtons.
//!
//! ## Notation
//!
//! - `L` = Unbraced column length
//! - `K` = Effective length factor (end condition)
//! - `Le` = Effective length (K·L)
//! - `E` = Elastic modulus
//! - `I` = Second moment of area (weak axis)
//! - `A` = Cross-sectional area
//! - `r` = Radius of gyration (√(I/A))
//! - `λ` = Slenderness ratio (Le/r)
//! - `σY` = Yield stress
//!
//! ## References
//!
//! - Timoshenko & Gere, Theory of Elastic Stability, 2nd Edition, Chapter 2
//! - AISC 360-22 Commentary, Appendix 7 (effective length factors)

use std::f64::consts::PI;

/// Calculate radius of gyration from section properties
///
/// # Formula
/// r = √(I/A)
///
/// # Arguments
/// * `i` - Second moment of area
/// * `a` - Cross-sectional area
///
/// # Returns
/// Radius of gyration in length units consistent with the inputs
///
/// # Example
/// ```rust
/// use buckling_core::equations::buckling::radius_of_gyration;
///
/// // 9.6e-6 m⁴ over 2.85e-3 m²
/// let r = radius_of_gyration(9.6e-6, 2.85e-3);
/// assert!((r - 0.05804).abs() < 1e-4);
/// ```
#[inline]
pub fn radius_of_gyration(i: f64, a: f64) -> f64 {
    (i / a).sqrt()
}

/// Calculate effective length
///
/// # Formula
/// Le = K × L
///
/// # Arguments
/// * `k` - Effective length factor (0.5 fixed-fixed ... 2.0 fixed-free)
/// * `l` - Unbraced length
#[inline]
pub fn effective_length(k: f64, l: f64) -> f64 {
    k * l
}

/// Calculate slenderness ratio
///
/// # Formula
/// λ = Le / r
///
/// Dimensionless as long as `le` and `r` share a length unit.
#[inline]
pub fn slenderness_ratio(le: f64, r: f64) -> f64 {
    le / r
}

/// Calculate Euler critical buckling load
///
/// ```text
///        P
///        ↓
///       ─┬─
///        │  )
///        │   )  ← first buckling mode
///        │  )
///       ─┴─
/// ```
///
/// # Formula
/// Pcr = π²EI / Le²
///
/// # Arguments
/// * `e` - Elastic modulus
/// * `i` - Second moment of area
/// * `le` - Effective length
///
/// # Example
/// ```rust
/// use buckling_core::equations::buckling::euler_critical_load;
///
/// // E = 200 GPa, I = 9.6e-6 m⁴, Le = 3 m
/// let pcr = euler_critical_load(2e11, 9.6e-6, 3.0);
/// // Pcr = π² × 2e11 × 9.6e-6 / 9 ≈ 2.1055e6 N
/// assert!((pcr - 2.1055e6).abs() < 1e3);
/// ```
#[inline]
pub fn euler_critical_load(e: f64, i: f64, le: f64) -> f64 {
    PI.powi(2) * e * i / le.powi(2)
}

/// Calculate squash (yield) load of the full section
///
/// # Formula
/// Py = σY × A
#[inline]
pub fn yield_load(sigma_y: f64, a: f64) -> f64 {
    sigma_y * a
}

/// Calculate factor of safety as yield load over critical load
///
/// # Formula
/// FoS = Py / Pcr
///
/// Note the ratio is yield over critical. A column whose Euler load is far
/// above its squash load gets a *small* number here.
#[inline]
pub fn factor_of_safety(py: f64, pcr: f64) -> f64 {
    py / pcr
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f64 = 1e-9;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() <= TOLERANCE * b.abs().max(1.0)
    }

    #[test]
    fn test_radius_of_gyration() {
        // Solid square 0.1 m: I = b⁴/12, A = b², r = b/√12
        let b: f64 = 0.1;
        let r = radius_of_gyration(b.powi(4) / 12.0, b * b);
        assert!(approx_eq(r, b / 12.0_f64.sqrt()), "r = {}", r);
    }

    #[test]
    fn test_effective_length_factors() {
        assert_eq!(effective_length(0.5, 4.0), 2.0);
        assert_eq!(effective_length(2.0, 4.0), 8.0);
    }

    #[test]
    fn test_slenderness_ratio() {
        let lambda = slenderness_ratio(3.0, 0.058038);
        assert!((lambda - 51.69).abs() < 0.01, "λ = {}", lambda);
    }

    #[test]
    fn test_euler_load_scales_with_inverse_square_of_length() {
        let p1 = euler_critical_load(2e11, 1e-6, 2.0);
        let p2 = euler_critical_load(2e11, 1e-6, 4.0);
        assert!(approx_eq(p1 / p2, 4.0));
    }

    #[test]
    fn test_yield_load() {
        // 250 MPa × 2850 mm²
        assert!(approx_eq(yield_load(2.5e8, 2.85e-3), 712_500.0));
    }

    #[test]
    fn test_factor_of_safety_is_yield_over_critical() {
        assert_eq!(factor_of_safety(1.0, 4.0), 0.25);
    }
}
