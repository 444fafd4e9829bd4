//! # Report Settings
//!
//! Presentation options for reports. Settings only affect how results are
//! displayed, never the calculated values.
//!
//! Settings serialize as JSON; missing fields take their defaults, so an
//! empty object `{}` is a valid settings file.
//!
//! ```rust
//! use buckling_core::settings::ReportSettings;
//!
//! let settings: ReportSettings = serde_json::from_str(r#"{ "decimals": 2 }"#).unwrap();
//! assert_eq!(settings.decimals, 2);
//! assert!(settings.show_kilonewtons);
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::format::DEFAULT_DECIMALS;

/// Upper bound on displayed decimal places
pub const MAX_DECIMALS: usize = 12;

/// Report presentation settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportSettings {
    /// Decimal places for formatted values (default: 3)
    pub decimals: usize,

    /// Append the kN equivalent to loads reported in N
    pub show_kilonewtons: bool,

    /// Include a generation timestamp under the title
    pub include_timestamp: bool,

    /// Report heading
    pub title: String,
}

impl Default for ReportSettings {
    fn default() -> Self {
        ReportSettings {
            decimals: DEFAULT_DECIMALS,
            show_kilonewtons: true,
            include_timestamp: true,
            title: "Column Buckling Analysis Report".to_string(),
        }
    }
}

impl ReportSettings {
    /// Validate settings values.
    pub fn validate(&self) -> CalcResult<()> {
        if self.decimals > MAX_DECIMALS {
            return Err(CalcError::invalid_input(
                "decimals",
                self.decimals.to_string(),
                format!("Decimal places must be at most {}", MAX_DECIMALS),
            ));
        }
        Ok(())
    }

    /// Builder-style override of the decimal places
    pub fn with_decimals(mut self, decimals: usize) -> Self {
        self.decimals = decimals;
        self
    }
}
