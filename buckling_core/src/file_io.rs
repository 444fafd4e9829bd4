//! # File I/O Module
//!
//! Reads column inputs and report settings from JSON files, and writes
//! analyses back out.
//!
//! - **Atomic saves**: Write to `.tmp`, sync, rename to prevent corruption
//! - **Validated loads**: Settings are checked before they are returned
//!
//! ## Example
//!
//! ```rust,no_run
//! use buckling_core::file_io::{load_column_input, save_analysis};
//! use buckling_core::calculations::analyze;
//! use std::path::Path;
//!
//! let input = load_column_input(Path::new("column.json"))?;
//! let analysis = analyze(&input)?;
//! save_analysis(&analysis, Path::new("column.result.json"))?;
//! # Ok::<(), buckling_core::errors::CalcError>(())
//! ```

use std::fs::{self, File};
use std::io::{Read, Write};
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::calculations::column::{ColumnAnalysis, ColumnInput, PartialColumnInput};
use crate::errors::{CalcError, CalcResult};
use crate::settings::ReportSettings;

/// Read and parse a JSON file.
fn load_json<T: DeserializeOwned>(path: &Path) -> CalcResult<T> {
    let mut file = File::open(path).map_err(|e| {
        CalcError::file_error("open", path.display().to_string(), e.to_string())
    })?;

    let mut contents = String::new();
    file.read_to_string(&mut contents).map_err(|e| {
        CalcError::file_error("read", path.display().to_string(), e.to_string())
    })?;

    let value = serde_json::from_str(&contents).map_err(|e| CalcError::SerializationError {
        reason: format!("Invalid JSON in {}: {}", path.display(), e),
    })?;

    tracing::debug!(path = %path.display(), "loaded JSON file");
    Ok(value)
}

/// Serialize to pretty JSON and write atomically via a temp file.
fn save_json<T: Serialize>(value: &T, path: &Path) -> CalcResult<()> {
    let json = serde_json::to_string_pretty(value)?;

    let tmp_path = path.with_extension("json.tmp");

    let mut tmp_file = File::create(&tmp_path).map_err(|e| {
        CalcError::file_error("create temp file", tmp_path.display().to_string(), e.to_string())
    })?;

    let written = tmp_file
        .write_all(json.as_bytes())
        .map_err(|e| CalcError::file_error("write temp file", tmp_path.display().to_string(), e.to_string()))
        .and_then(|()| {
            tmp_file.sync_all().map_err(|e| {
                CalcError::file_error("sync temp file", tmp_path.display().to_string(), e.to_string())
            })
        });
    drop(tmp_file);
    if let Err(e) = written {
        let _ = fs::remove_file(&tmp_path);
        return Err(e);
    }

    fs::rename(&tmp_path, path).map_err(|e| {
        let _ = fs::remove_file(&tmp_path);
        CalcError::file_error("rename to final", path.display().to_string(), e.to_string())
    })?;

    tracing::debug!(path = %path.display(), "saved JSON file");
    Ok(())
}

/// Load raw column inputs from a JSON file.
///
/// # Returns
///
/// * `Ok(ColumnInput)` - Parsed input (values not yet validated)
/// * `Err(CalcError::MissingField)` - A measurement is absent from the file
/// * `Err(CalcError::SerializationError)` - Invalid JSON
/// * `Err(CalcError::FileError)` - I/O error
pub fn load_column_input(path: &Path) -> CalcResult<ColumnInput> {
    load_partial_column_input(path)?.complete()
}

/// Load column inputs that may leave some measurements out.
pub fn load_partial_column_input(path: &Path) -> CalcResult<PartialColumnInput> {
    load_json(path)
}

/// Load report settings from a JSON file and validate them.
pub fn load_settings(path: &Path) -> CalcResult<ReportSettings> {
    let settings: ReportSettings = load_json(path)?;
    settings.validate()?;
    Ok(settings)
}

/// Save a completed analysis as pretty-printed JSON.
pub fn save_analysis(analysis: &ColumnAnalysis, path: &Path) -> CalcResult<()> {
    save_json(analysis, path)
}
