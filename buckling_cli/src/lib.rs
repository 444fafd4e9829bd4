//! # Buckling CLI
//!
//! Command-line front end for `buckling_core`. Argument parsing lives here,
//! separate from `main`, so the commands can be driven from tests.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use buckling_core::calculations::{analyze, ColumnInput, EndCondition, Measurement, PartialColumnInput};
use buckling_core::errors::CalcResult;
use buckling_core::file_io::{load_partial_column_input, load_settings, save_analysis};
use buckling_core::format::format_default;
use buckling_core::report::Report;
use buckling_core::settings::ReportSettings;
use buckling_core::units::{convert, units_for, QuantityCategory};

#[derive(Parser, Debug)]
#[command(name = "buckling")]
#[command(about = "Column buckling calculator - Euler buckling with unit conversion", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Analyze a column for Euler buckling
    Analyze(AnalyzeArgs),
    /// Convert a value into the SI base unit of its category
    Convert {
        /// Value to convert
        #[arg(allow_negative_numbers = true)]
        value: f64,
        /// Quantity category (length, modulus, inertia, area, stress)
        category: String,
        /// Unit symbol the value is expressed in
        unit: String,
    },
    /// List the supported units for every category
    Units,
}

#[derive(Args, Debug, Default)]
pub struct AnalyzeArgs {
    /// JSON file with the column inputs; flags below override its values
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Label printed in the report
    #[arg(long)]
    pub label: Option<String>,

    /// Unbraced length L
    #[arg(long, allow_negative_numbers = true)]
    pub length: Option<f64>,
    /// Length unit (m, cm, mm, in) [default: m]
    #[arg(long)]
    pub length_unit: Option<String>,

    /// Elastic modulus E
    #[arg(long, allow_negative_numbers = true)]
    pub modulus: Option<f64>,
    /// Modulus unit (GPa, MPa) [default: GPa]
    #[arg(long)]
    pub modulus_unit: Option<String>,

    /// Moment of inertia I
    #[arg(long, allow_negative_numbers = true)]
    pub inertia: Option<f64>,
    /// Inertia unit (m4, cm4, mm4) [default: mm4]
    #[arg(long)]
    pub inertia_unit: Option<String>,

    /// Cross-sectional area A
    #[arg(long, allow_negative_numbers = true)]
    pub area: Option<f64>,
    /// Area unit (m2, cm2, mm2) [default: mm2]
    #[arg(long)]
    pub area_unit: Option<String>,

    /// Yield stress σY
    #[arg(long, allow_negative_numbers = true)]
    pub yield_stress: Option<f64>,
    /// Yield stress unit (MPa, Pa) [default: MPa]
    #[arg(long)]
    pub yield_stress_unit: Option<String>,

    /// End condition: fixed-fixed, fixed-pinned, pinned-pinned, fixed-free, or K value
    #[arg(long)]
    pub end_condition: Option<String>,

    /// JSON file with report settings
    #[arg(long)]
    pub settings: Option<PathBuf>,

    /// Decimal places in the report (overrides settings file)
    #[arg(long)]
    pub decimals: Option<usize>,

    /// Leave the generation timestamp out of the report
    #[arg(long)]
    pub no_timestamp: bool,

    /// Print the analysis as JSON instead of the text report
    #[arg(long)]
    pub json: bool,

    /// Also save the analysis as JSON to this path
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Default unit per category when a flag gives a value without a unit
fn default_unit(category: QuantityCategory) -> &'static str {
    match category {
        QuantityCategory::Length => "m",
        QuantityCategory::Modulus => "GPa",
        QuantityCategory::Inertia => "mm4",
        QuantityCategory::Area => "mm2",
        QuantityCategory::Stress => "MPa",
    }
}

/// Layer a flag value/unit pair over a measurement that may have come from file.
///
/// A value flag with nothing underneath starts from the category's default unit.
/// A unit flag alone leaves a missing measurement missing.
fn apply_flags(slot: &mut Option<Measurement>, category: QuantityCategory, value: Option<f64>, unit: Option<&String>) {
    if let Some(v) = value {
        match slot {
            Some(existing) => existing.value = v,
            None => *slot = Some(Measurement::new(v, default_unit(category))),
        }
    }
    if let (Some(existing), Some(u)) = (slot.as_mut(), unit) {
        existing.unit = u.clone();
    }
}

impl AnalyzeArgs {
    /// Build the column input from the optional file and the flags.
    ///
    /// The file may leave measurements out; anything still absent after the
    /// flags are applied is a `MissingField` error.
    pub fn column_input(&self) -> CalcResult<ColumnInput> {
        let mut partial = match &self.input {
            Some(path) => load_partial_column_input(path)?,
            None => PartialColumnInput::default(),
        };

        if let Some(label) = &self.label {
            partial.label = Some(label.clone());
        }
        if let Some(name) = &self.end_condition {
            partial.end_condition = Some(name.parse::<EndCondition>()?);
        }

        apply_flags(&mut partial.length, QuantityCategory::Length, self.length, self.length_unit.as_ref());
        apply_flags(&mut partial.modulus, QuantityCategory::Modulus, self.modulus, self.modulus_unit.as_ref());
        apply_flags(&mut partial.inertia, QuantityCategory::Inertia, self.inertia, self.inertia_unit.as_ref());
        apply_flags(&mut partial.area, QuantityCategory::Area, self.area, self.area_unit.as_ref());
        apply_flags(
            &mut partial.yield_stress,
            QuantityCategory::Stress,
            self.yield_stress,
            self.yield_stress_unit.as_ref(),
        );

        partial.complete()
    }

    /// Settings file (or defaults) with flag overrides applied.
    pub fn report_settings(&self) -> CalcResult<ReportSettings> {
        let mut settings = match &self.settings {
            Some(path) => load_settings(path)?,
            None => ReportSettings::default(),
        };
        if let Some(decimals) = self.decimals {
            settings.decimals = decimals;
        }
        if self.no_timestamp {
            settings.include_timestamp = false;
        }
        settings.validate()?;
        Ok(settings)
    }
}

/// Run a parsed command and return what should be printed to stdout.
pub fn run(cli: &Cli) -> CalcResult<String> {
    match &cli.command {
        Commands::Analyze(args) => cmd_analyze(args),
        Commands::Convert { value, category, unit } => cmd_convert(*value, category, unit),
        Commands::Units => Ok(cmd_units()),
    }
}

fn cmd_analyze(args: &AnalyzeArgs) -> CalcResult<String> {
    let input = args.column_input()?;
    let settings = args.report_settings()?;
    let analysis = analyze(&input)?;
    tracing::info!(label = %input.label, safety = ?analysis.result.safety, "analysis complete");

    if let Some(path) = &args.output {
        save_analysis(&analysis, path)?;
    }

    if args.json {
        Ok(serde_json::to_string_pretty(&analysis)?)
    } else {
        Ok(Report::build(&analysis, &settings).render_text())
    }
}

fn cmd_convert(value: f64, category: &str, unit: &str) -> CalcResult<String> {
    let category: QuantityCategory = category.parse()?;
    let base = convert(value, category, unit)?;
    Ok(format!(
        "{} {} = {} {}",
        value,
        unit,
        format_default(base),
        category.base_unit()
    ))
}

fn cmd_units() -> String {
    let mut out = String::new();
    for category in QuantityCategory::ALL {
        out.push_str(&format!(
            "{} ({}, base: {})\n",
            category.name(),
            category.display_name(),
            category.base_unit()
        ));
        for entry in units_for(category) {
            out.push_str(&format!("  {:<5} x {:e}\n", entry.symbol, entry.factor));
        }
    }
    out
}
