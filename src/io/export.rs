//! Exports: valuation JSON, series CSV and batch CSV.
//!
//! The JSON file is the portable representation of one valuation (input,
//! effective config, result) and can be re-plotted with `bv plot`. The CSVs
//! are meant for spreadsheets.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use chrono::Local;

use crate::domain::{PricingConfig, ValuationFile, ValuationInput, ValuationResult};
use crate::error::AppError;
use crate::valuation::BatchEntry;

pub fn valuation_file(
    input: &ValuationInput,
    config: &PricingConfig,
    result: &ValuationResult,
) -> ValuationFile {
    ValuationFile {
        tool: "bv".to_string(),
        generated_on: Local::now().date_naive(),
        input: input.clone(),
        config: config.clone(),
        result: result.clone(),
    }
}

pub fn write_valuation_json(path: &Path, file: &ValuationFile) -> Result<(), AppError> {
    let out = File::create(path).map_err(|e| {
        AppError::new(2, format!("Failed to create valuation JSON '{}': {e}", path.display()))
    })?;
    let mut writer = BufWriter::new(out);
    serde_json::to_writer_pretty(&mut writer, file)
        .map_err(|e| AppError::new(2, format!("Failed to write valuation JSON: {e}")))?;
    writer
        .flush()
        .map_err(|e| AppError::new(2, format!("Failed to write valuation JSON: {e}")))
}

pub fn read_valuation_json(path: &Path) -> Result<ValuationFile, AppError> {
    let file = File::open(path).map_err(|e| {
        AppError::new(2, format!("Failed to open valuation JSON '{}': {e}", path.display()))
    })?;
    serde_json::from_reader(file)
        .map_err(|e| AppError::new(2, format!("Invalid valuation JSON: {e}")))
}

/// Write the depreciation series as `year,value` rows.
pub fn write_series_csv(path: &Path, result: &ValuationResult) -> Result<(), AppError> {
    let mut out = create_csv(path)?;
    writeln!(out, "year,value").map_err(write_err)?;
    for p in &result.depreciation_series {
        writeln!(out, "{},{}", p.year, p.value).map_err(write_err)?;
    }
    out.flush().map_err(write_err)
}

/// Write one row per listing; failed listings carry the error message.
pub fn write_batch_csv(
    path: &Path,
    inputs: &[ValuationInput],
    entries: &[BatchEntry],
) -> Result<(), AppError> {
    let mut out = create_csv(path)?;
    writeln!(
        out,
        "index,original_price,model_year,condition,brand_tier,estimated_price,min,max,error"
    )
    .map_err(write_err)?;

    for entry in entries {
        let Some(input) = inputs.get(entry.index) else {
            continue;
        };
        let prefix = format!(
            "{},{},{},{},{}",
            entry.index, input.original_price, input.model_year, input.condition, input.brand_tier
        );
        let row = match &entry.outcome {
            Ok(r) => writeln!(
                out,
                "{prefix},{},{},{},",
                r.estimated_price, r.price_range.min, r.price_range.max
            ),
            Err(e) => writeln!(out, "{prefix},,,,\"{}\"", e.to_string().replace('"', "'")),
        };
        row.map_err(write_err)?;
    }

    out.flush().map_err(write_err)
}

fn create_csv(path: &Path) -> Result<BufWriter<File>, AppError> {
    File::create(path)
        .map(BufWriter::new)
        .map_err(|e| AppError::new(2, format!("Failed to create CSV '{}': {e}", path.display())))
}

fn write_err(e: std::io::Error) -> AppError {
    AppError::new(2, format!("Failed to write CSV: {e}"))
}
