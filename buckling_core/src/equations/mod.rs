//! # Structural Mechanics Equations
//!
//! The closed-form formulas used by the calculations, kept in one place so
//! they can be checked against references independently of input handling.
//!
//! ## Modules
//!
//! - [`buckling`] - Euler column buckling (r, Le, λ, Pcr, Py, FoS)
//!
//! ## Conventions
//!
//! - **Axial load**: Positive in compression
//! - **Units**: Functions are unit-agnostic; callers pass consistent units

pub mod buckling;

pub use buckling::{
    effective_length,
    euler_critical_load,
    factor_of_safety,
    radius_of_gyration,
    slenderness_ratio,
    yield_load,
};
