//! Shared valuation workflows used by the CLI commands.
//!
//! Keeping this in one place keeps `app.rs` about presentation (printing,
//! exports) while the workflows stay testable without spawning processes:
//! config -> listings -> valuation -> summary

use tracing::info;

use crate::data::{DEFAULT_PRICE_SIGMA, SampleConfig, generate_listings};
use crate::domain::{PricingConfig, ValuationInput, ValuationResult};
use crate::error::AppError;
use crate::io::read_listings_json;
use crate::valuation::{
    BatchEntry, BatchSummary, estimate_batch, estimate_input, resolve_current_year,
    summarize_batch,
};

/// Where batch listings come from.
#[derive(Debug, Clone)]
pub enum ListingSource {
    File(std::path::PathBuf),
    Sample {
        count: usize,
        seed: u64,
        median_price: f64,
        max_age_years: u32,
    },
}

/// All computed outputs of a single `bv batch` run.
#[derive(Debug, Clone)]
pub struct BatchOutput {
    pub inputs: Vec<ValuationInput>,
    pub entries: Vec<BatchEntry>,
    pub summary: BatchSummary,
}

pub fn run_estimate(
    input: &ValuationInput,
    config: &PricingConfig,
) -> Result<ValuationResult, AppError> {
    let result = estimate_input(input, config)?;
    info!(
        estimated_price = result.estimated_price,
        min = result.price_range.min,
        max = result.price_range.max,
        "estimate ready"
    );
    Ok(result)
}

pub fn run_batch(source: &ListingSource, config: &PricingConfig) -> Result<BatchOutput, AppError> {
    let inputs = match source {
        ListingSource::File(path) => read_listings_json(path)?,
        ListingSource::Sample {
            count,
            seed,
            median_price,
            max_age_years,
        } => generate_listings(&SampleConfig {
            count: *count,
            seed: *seed,
            median_price: *median_price,
            price_sigma: DEFAULT_PRICE_SIGMA,
            max_age_years: *max_age_years,
            current_year: resolve_current_year(config),
        })?,
    };
    info!(n = inputs.len(), "listings loaded");

    let entries = estimate_batch(&inputs, config);
    let summary = summarize_batch(&inputs, &entries);
    info!(
        valued = summary.n_valued,
        failed = summary.n_failed,
        "batch valued"
    );

    Ok(BatchOutput {
        inputs,
        entries,
        summary,
    })
}
