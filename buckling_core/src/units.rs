//! # Unit Conversion
//!
//! Converts user-entered quantities into SI base units. Every input of a
//! buckling calculation belongs to one [`QuantityCategory`], and each category
//! accepts a closed set of unit symbols with a fixed linear scale factor.
//!
//! ## Base Units
//!
//! | Category | Base unit | Accepted symbols |
//! |---|---|---|
//! | length | m | m, cm, mm, in |
//! | modulus | Pa | GPa, MPa |
//! | inertia | m⁴ | m4, cm4, mm4 |
//! | area | m² | m2, cm2, mm2 |
//! | stress | Pa | MPa, Pa |
//!
//! Superscript spellings (`mm⁴`, `cm²`, ...) are accepted as aliases of the
//! ASCII symbols.
//!
//! ## Example
//!
//! ```rust
//! use buckling_core::units::{convert, QuantityCategory};
//!
//! let inertia_m4 = convert(9.6e6, QuantityCategory::Inertia, "mm4").unwrap();
//! assert!((inertia_m4 - 9.6e-6).abs() < 1e-18);
//!
//! // Unregistered symbols are an error, never a silent default
//! assert!(convert(5.0, QuantityCategory::Length, "furlong").is_err());
//! ```

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

// ============================================================================
// Quantity Categories
// ============================================================================

/// Physical quantity an input value measures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuantityCategory {
    /// Column length (base: meter)
    Length,
    /// Elastic modulus E (base: pascal)
    Modulus,
    /// Second moment of area I (base: meter⁴)
    Inertia,
    /// Cross-sectional area A (base: meter²)
    Area,
    /// Yield stress σY (base: pascal)
    Stress,
}

impl QuantityCategory {
    /// All categories for iteration
    pub const ALL: [QuantityCategory; 5] = [
        QuantityCategory::Length,
        QuantityCategory::Modulus,
        QuantityCategory::Inertia,
        QuantityCategory::Area,
        QuantityCategory::Stress,
    ];

    /// Lowercase name used in files and on the command line
    pub fn name(&self) -> &'static str {
        match self {
            QuantityCategory::Length => "length",
            QuantityCategory::Modulus => "modulus",
            QuantityCategory::Inertia => "inertia",
            QuantityCategory::Area => "area",
            QuantityCategory::Stress => "stress",
        }
    }

    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            QuantityCategory::Length => "Length",
            QuantityCategory::Modulus => "Elastic Modulus",
            QuantityCategory::Inertia => "Moment of Inertia",
            QuantityCategory::Area => "Cross-Sectional Area",
            QuantityCategory::Stress => "Stress",
        }
    }

    /// Symbol of the SI base unit every value is converted into
    pub fn base_unit(&self) -> &'static str {
        match self {
            QuantityCategory::Length => "m",
            QuantityCategory::Modulus => "Pa",
            QuantityCategory::Inertia => "m4",
            QuantityCategory::Area => "m2",
            QuantityCategory::Stress => "Pa",
        }
    }
}

impl fmt::Display for QuantityCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for QuantityCategory {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "length" => Ok(QuantityCategory::Length),
            "modulus" => Ok(QuantityCategory::Modulus),
            "inertia" => Ok(QuantityCategory::Inertia),
            "area" => Ok(QuantityCategory::Area),
            "stress" => Ok(QuantityCategory::Stress),
            _ => Err(CalcError::unknown_category(s)),
        }
    }
}

// ============================================================================
// Conversion Table
// ============================================================================

/// One registered unit: `value_in_base = value * factor`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UnitEntry {
    pub category: QuantityCategory,
    /// Canonical ASCII symbol
    pub symbol: &'static str,
    /// Alternative spellings accepted on lookup
    pub aliases: &'static [&'static str],
    /// Strictly positive multiplier to the category's base unit
    pub factor: f64,
}

/// Every accepted (category, unit) pair. Linear factors only, no offsets.
pub static UNIT_TABLE: [UnitEntry; 14] = [
    // Length
    UnitEntry { category: QuantityCategory::Length, symbol: "m", aliases: &[], factor: 1.0 },
    UnitEntry { category: QuantityCategory::Length, symbol: "cm", aliases: &[], factor: 0.01 },
    UnitEntry { category: QuantityCategory::Length, symbol: "mm", aliases: &[], factor: 0.001 },
    UnitEntry { category: QuantityCategory::Length, symbol: "in", aliases: &[], factor: 0.0254 },
    // Elastic modulus
    UnitEntry { category: QuantityCategory::Modulus, symbol: "GPa", aliases: &[], factor: 1e9 },
    UnitEntry { category: QuantityCategory::Modulus, symbol: "MPa", aliases: &[], factor: 1e6 },
    // Second moment of area
    UnitEntry { category: QuantityCategory::Inertia, symbol: "m4", aliases: &["m⁴"], factor: 1.0 },
    UnitEntry { category: QuantityCategory::Inertia, symbol: "cm4", aliases: &["cm⁴"], factor: 1e-8 },
    UnitEntry { category: QuantityCategory::Inertia, symbol: "mm4", aliases: &["mm⁴"], factor: 1e-12 },
    // Area
    UnitEntry { category: QuantityCategory::Area, symbol: "m2", aliases: &["m²"], factor: 1.0 },
    UnitEntry { category: QuantityCategory::Area, symbol: "cm2", aliases: &["cm²"], factor: 1e-4 },
    UnitEntry { category: QuantityCategory::Area, symbol: "mm2", aliases: &["mm²"], factor: 1e-6 },
    // Stress
    UnitEntry { category: QuantityCategory::Stress, symbol: "MPa", aliases: &[], factor: 1e6 },
    UnitEntry { category: QuantityCategory::Stress, symbol: "Pa", aliases: &[], factor: 1.0 },
];

/// Symbol (and alias) index per category, built once from [`UNIT_TABLE`].
static UNIT_INDEX: Lazy<HashMap<QuantityCategory, HashMap<&'static str, &'static UnitEntry>>> =
    Lazy::new(|| {
        let mut index: HashMap<QuantityCategory, HashMap<&'static str, &'static UnitEntry>> = HashMap::new();
        for entry in UNIT_TABLE.iter() {
            let symbols = index.entry(entry.category).or_default();
            symbols.insert(entry.symbol, entry);
            for alias in entry.aliases {
                symbols.insert(*alias, entry);
            }
        }
        index
    });

/// Look up the table entry for a unit symbol within a category.
pub fn lookup(category: QuantityCategory, unit: &str) -> CalcResult<&'static UnitEntry> {
    let unit = unit.trim();
    UNIT_INDEX
        .get(&category)
        .and_then(|symbols| symbols.get(unit))
        .copied()
        .ok_or_else(|| {
            tracing::debug!(%category, unit, "unit lookup failed");
            CalcError::unknown_unit(category.name(), unit)
        })
}

/// Scale factor from `unit` to the category's base unit.
pub fn scale_factor(category: QuantityCategory, unit: &str) -> CalcResult<f64> {
    lookup(category, unit).map(|entry| entry.factor)
}

/// Convert a value expressed in `unit` into the category's base unit.
///
/// No rounding and no sign check: validating magnitudes is the caller's job.
///
/// # Example
///
/// ```rust
/// use buckling_core::units::{convert, QuantityCategory};
///
/// assert_eq!(convert(200.0, QuantityCategory::Modulus, "GPa").unwrap(), 200e9);
/// assert_eq!(convert(250.0, QuantityCategory::Stress, "MPa").unwrap(), 250e6);
/// ```
pub fn convert(value: f64, category: QuantityCategory, unit: &str) -> CalcResult<f64> {
    Ok(value * scale_factor(category, unit)?)
}

/// Convert a base-unit value back into `unit`. Inverse of [`convert`].
pub fn convert_from_base(value: f64, category: QuantityCategory, unit: &str) -> CalcResult<f64> {
    Ok(value / scale_factor(category, unit)?)
}

/// Registered units for a category, in table order.
pub fn units_for(category: QuantityCategory) -> impl Iterator<Item = &'static UnitEntry> {
    UNIT_TABLE.iter().filter(move |entry| entry.category == category)
}
