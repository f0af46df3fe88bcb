//! Parallel valuation of many listings against one shared config.
//!
//! The evaluation year is resolved once up front so every listing in a batch
//! is valued as of the same year, even if the batch straddles midnight on
//! New Year's Eve.

use rayon::prelude::*;
use tracing::{debug, warn};

use crate::domain::{PricingConfig, ValuationInput, ValuationResult};
use crate::error::ValuationError;
use crate::valuation::composer::{estimate_at, resolve_current_year};

/// Outcome for one input, tagged with its position in the batch.
#[derive(Debug, Clone, PartialEq)]
pub struct BatchEntry {
    pub index: usize,
    pub outcome: Result<ValuationResult, ValuationError>,
}

/// Value every input in parallel. Output order matches input order.
pub fn estimate_batch(inputs: &[ValuationInput], config: &PricingConfig) -> Vec<BatchEntry> {
    let current_year = resolve_current_year(config);
    debug!(n = inputs.len(), current_year, "valuing batch");

    let entries: Vec<BatchEntry> = inputs
        .par_iter()
        .enumerate()
        .map(|(index, input)| BatchEntry {
            index,
            outcome: estimate_at(input, config, current_year),
        })
        .collect();

    for entry in &entries {
        if let Err(err) = &entry.outcome {
            warn!(index = entry.index, %err, "listing rejected");
        }
    }

    entries
}

/// Aggregate statistics over a batch.
#[derive(Debug, Clone, PartialEq)]
pub struct BatchSummary {
    pub n_inputs: usize,
    pub n_valued: usize,
    pub n_failed: usize,
    pub total_original: f64,
    pub total_estimated: f64,
    pub mean_estimated: f64,
    /// Mean of `estimated / original` over valued listings.
    pub mean_retained: f64,
}

pub fn summarize_batch(inputs: &[ValuationInput], entries: &[BatchEntry]) -> BatchSummary {
    let mut n_valued = 0usize;
    let mut total_original = 0.0;
    let mut total_estimated = 0.0;
    let mut retained_sum = 0.0;

    for entry in entries {
        let (Ok(result), Some(input)) = (&entry.outcome, inputs.get(entry.index)) else {
            continue;
        };
        n_valued += 1;
        total_original += input.original_price;
        total_estimated += result.estimated_price;
        retained_sum += result.estimated_price / input.original_price;
    }

    let (mean_estimated, mean_retained) = if n_valued == 0 {
        (0.0, 0.0)
    } else {
        (
            total_estimated / n_valued as f64,
            retained_sum / n_valued as f64,
        )
    };

    BatchSummary {
        n_inputs: entries.len(),
        n_valued,
        n_failed: entries.len() - n_valued,
        total_original,
        total_estimated,
        mean_estimated,
        mean_retained,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{BrandTier, Condition};
    use crate::error::InputField;
    use crate::valuation::composer::estimate_input;

    fn config() -> PricingConfig {
        PricingConfig {
            current_year: Some(2025),
            ..PricingConfig::default()
        }
    }

    fn listing(price: f64, year: i32, condition: Condition, tier: BrandTier) -> ValuationInput {
        ValuationInput {
            original_price: price,
            model_year: year,
            condition,
            brand_tier: tier,
        }
    }

    #[test]
    fn batch_matches_single_calls_in_order() {
        let config = config();
        let inputs: Vec<ValuationInput> = (0..200)
            .map(|i| {
                let condition = Condition::ALL[i % 4];
                let tier = BrandTier::ALL[i % 2];
                listing(500.0 + 25.0 * i as f64, 2025 - (i as i32 % 30), condition, tier)
            })
            .collect();

        let entries = estimate_batch(&inputs, &config);
        assert_eq!(entries.len(), inputs.len());
        for (i, entry) in entries.iter().enumerate() {
            assert_eq!(entry.index, i);
            assert_eq!(entry.outcome, estimate_input(&inputs[i], &config));
        }
    }

    #[test]
    fn failures_are_reported_per_entry() {
        let config = config();
        let inputs = vec![
            listing(1000.0, 2024, Condition::Excellent, BrandTier::Budget),
            listing(-1.0, 2024, Condition::Good, BrandTier::Budget),
            listing(1000.0, 1800, Condition::Good, BrandTier::Budget),
        ];
        let entries = estimate_batch(&inputs, &config);
        assert!(entries[0].outcome.is_ok());
        assert_eq!(
            entries[1].outcome.as_ref().unwrap_err().field(),
            InputField::OriginalPrice
        );
        assert_eq!(entries[2].outcome.as_ref().unwrap_err().field(), InputField::Year);

        let summary = summarize_batch(&inputs, &entries);
        assert_eq!(summary.n_inputs, 3);
        assert_eq!(summary.n_valued, 1);
        assert_eq!(summary.n_failed, 2);
        assert_eq!(summary.total_estimated, 754.0);
        assert!((summary.mean_retained - 0.754).abs() < 1e-12);
    }

    #[test]
    fn empty_batch_summary_is_zeroed() {
        let summary = summarize_batch(&[], &estimate_batch(&[], &config()));
        assert_eq!(summary.n_inputs, 0);
        assert_eq!(summary.mean_estimated, 0.0);
        assert_eq!(summary.mean_retained, 0.0);
    }
}
