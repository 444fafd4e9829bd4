//! # Analysis Report
//!
//! Assembles a [`ColumnAnalysis`] into a titled report with two sections,
//! the echoed input parameters and the buckling results, each a list of
//! label/value lines. The report is serializable, and renders to aligned
//! plain text for terminals.
//!
//! ## Example
//!
//! ```rust
//! use buckling_core::calculations::{analyze, ColumnInput, EndCondition, Measurement};
//! use buckling_core::report::Report;
//! use buckling_core::settings::ReportSettings;
//!
//! let input = ColumnInput {
//!     label: "C-1".to_string(),
//!     length: Measurement::new(3.0, "m"),
//!     modulus: Measurement::new(200.0, "GPa"),
//!     inertia: Measurement::new(9.6e6, "mm4"),
//!     area: Measurement::new(2850.0, "mm2"),
//!     yield_stress: Measurement::new(250.0, "MPa"),
//!     end_condition: EndCondition::PinnedPinned,
//! };
//! let analysis = analyze(&input).unwrap();
//!
//! let report = Report::build_at(&analysis, &ReportSettings::default(), None);
//! let text = report.render_text();
//! assert!(text.contains("Critical Load (Pcr):"));
//! assert!(text.contains("Unsafe (FoS < 0.8)"));
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::calculations::buckling::{SafetyClass, StatusLevel};
use crate::calculations::column::{ColumnAnalysis, Measurement};
use crate::format::{format_fixed, format_power};
use crate::settings::ReportSettings;

/// Section heading for the echoed inputs
pub const INPUT_SECTION: &str = "Input Parameters";
/// Section heading for the calculated values
pub const RESULT_SECTION: &str = "Buckling Results";

/// One labelled value in a report section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportLine {
    pub label: String,
    pub value: String,
}

impl ReportLine {
    fn new(label: &str, value: String) -> Self {
        ReportLine {
            label: label.to_string(),
            value,
        }
    }
}

/// Titled group of report lines.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportSection {
    /// Section heading, e.g. [`INPUT_SECTION`]
    pub title: String,
    /// Lines in display order
    pub lines: Vec<ReportLine>,
}

/// Formatted report for one column analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub title: String,
    pub label: String,
    pub generated: Option<DateTime<Utc>>,
    pub sections: Vec<ReportSection>,
    pub safety: SafetyClass,
    pub status: StatusLevel,
}

impl Report {
    /// Build a report, stamped with the current time when the settings ask for it.
    pub fn build(analysis: &ColumnAnalysis, settings: &ReportSettings) -> Self {
        let generated = settings.include_timestamp.then(Utc::now);
        Self::build_at(analysis, settings, generated)
    }

    /// Build a report with an explicit (or no) generation time.
    pub fn build_at(analysis: &ColumnAnalysis, settings: &ReportSettings, generated: Option<DateTime<Utc>>) -> Self {
        let input = &analysis.input;
        let result = &analysis.result;
        let fmt = |value: f64| format_power(value, settings.decimals);

        let load = |newtons: f64| {
            if settings.show_kilonewtons {
                format!("{} N ({} kN)", fmt(newtons), fmt(newtons / 1000.0))
            } else {
                format!("{} N", fmt(newtons))
            }
        };

        let inputs = ReportSection {
            title: INPUT_SECTION.to_string(),
            lines: vec![
                ReportLine::new("Length (L)", echo(&input.length)),
                ReportLine::new("Modulus (E)", echo(&input.modulus)),
                ReportLine::new("Moment of Inertia (I)", echo(&input.inertia)),
                ReportLine::new("Area (A)", echo(&input.area)),
                ReportLine::new("End Condition", input.end_condition.display_name().to_string()),
                ReportLine::new("Yield Stress (σY)", echo(&input.yield_stress)),
            ],
        };

        let results = ReportSection {
            title: RESULT_SECTION.to_string(),
            lines: vec![
                ReportLine::new("Radius of Gyration (r)", format!("{} m", fmt(result.radius_of_gyration_m))),
                ReportLine::new(
                    "Effective Length (Le)",
                    format!("{} m (K = {})", fmt(result.effective_length_m), analysis.base.k_factor),
                ),
                ReportLine::new("Slenderness Ratio (λ)", fmt(result.slenderness_ratio)),
                ReportLine::new("Critical Load (Pcr)", load(result.critical_load_n)),
                ReportLine::new("Yield Load (Py)", load(result.yield_load_n)),
                ReportLine::new(
                    "Factor of Safety",
                    format!("{} - {}", format_fixed(result.factor_of_safety, settings.decimals), result.safety.label()),
                ),
            ],
        };

        Report {
            title: settings.title.clone(),
            label: input.label.clone(),
            generated,
            sections: vec![inputs, results],
            safety: result.safety,
            status: result.safety.status_level(),
        }
    }

    /// Look up a line value by section title and label.
    pub fn value(&self, section: &str, label: &str) -> Option<&str> {
        self.sections
            .iter()
            .find(|s| s.title == section)
            .and_then(|s| s.lines.iter().find(|line| line.label == label))
            .map(|line| line.value.as_str())
    }

    /// Render as aligned plain text.
    pub fn render_text(&self) -> String {
        let width = self
            .sections
            .iter()
            .flat_map(|section| section.lines.iter())
            .map(|line| line.label.chars().count() + 1)
            .max()
            .unwrap_or(0);

        let mut out = String::new();
        out.push_str(&self.title);
        out.push('\n');
        out.push_str(&"=".repeat(self.title.chars().count()));
        out.push('\n');
        if let Some(generated) = self.generated {
            out.push_str(&format!("Generated: {}\n", generated.format("%Y-%m-%d %H:%M:%S UTC")));
        }
        if !self.label.is_empty() {
            out.push_str(&format!("Column: {}\n", self.label));
        }

        for section in &self.sections {
            out.push('\n');
            out.push_str(&section.title);
            out.push('\n');
            for line in &section.lines {
                let label = format!("{}:", line.label);
                out.push_str(&format!("  {:<width$}  {}\n", label, line.value, width = width));
            }
        }
        out
    }
}

/// Raw value and unit exactly as entered.
fn echo(measurement: &Measurement) -> String {
    format!("{} {}", measurement.value, measurement.unit)
}
