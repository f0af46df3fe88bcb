//! Synthetic listing generation for demos and batch smoke runs.
//!
//! Listings are drawn from a seeded RNG, so the same `SampleConfig` always
//! produces the same listings:
//!
//! - MSRP: log-normal around `median_price`, rounded to 10 currency units
//! - model year: uniform over the last `max_age_years` years
//! - condition / brand tier: fixed categorical weights

use rand::distributions::WeightedIndex;
use rand::prelude::*;
use rand::rngs::StdRng;
use rand_distr::LogNormal;

use crate::domain::{BrandTier, Condition, ValuationInput};
use crate::error::AppError;
use crate::valuation::MIN_MODEL_YEAR;

/// Share of listings per condition, in `Condition::ALL` order.
const CONDITION_WEIGHTS: [u32; 4] = [10, 30, 40, 20];
/// Share of listings per tier, in `BrandTier::ALL` order.
const TIER_WEIGHTS: [u32; 2] = [40, 60];
/// Spread of `ln(price)` used by `bv batch --sample-count`.
pub const DEFAULT_PRICE_SIGMA: f64 = 0.6;

#[derive(Debug, Clone)]
pub struct SampleConfig {
    pub count: usize,
    pub seed: u64,
    pub median_price: f64,
    /// Standard deviation of `ln(price)`.
    pub price_sigma: f64,
    pub max_age_years: u32,
    pub current_year: i32,
}

pub fn generate_listings(config: &SampleConfig) -> Result<Vec<ValuationInput>, AppError> {
    if config.count == 0 {
        return Err(AppError::new(2, "Sample count must be > 0."));
    }
    if !(config.median_price.is_finite() && config.median_price > 0.0) {
        return Err(AppError::new(2, "Sample median price must be > 0."));
    }
    let oldest = i32::try_from(config.max_age_years)
        .ok()
        .and_then(|age| config.current_year.checked_sub(age))
        .filter(|year| (MIN_MODEL_YEAR..=config.current_year).contains(year))
        .ok_or_else(|| {
            AppError::new(
                2,
                format!(
                    "Sample age window of {} years does not fit in [{MIN_MODEL_YEAR}, {}].",
                    config.max_age_years, config.current_year
                ),
            )
        })?;

    let price_dist = LogNormal::new(config.median_price.ln(), config.price_sigma)
        .map_err(|e| AppError::new(2, format!("Invalid sample price distribution: {e}")))?;
    let condition_dist = WeightedIndex::new(CONDITION_WEIGHTS)
        .map_err(|e| AppError::new(4, format!("Condition weights error: {e}")))?;
    let tier_dist = WeightedIndex::new(TIER_WEIGHTS)
        .map_err(|e| AppError::new(4, format!("Tier weights error: {e}")))?;

    let mut rng = StdRng::seed_from_u64(config.seed);
    let mut listings = Vec::with_capacity(config.count);

    for _ in 0..config.count {
        let price = (price_dist.sample(&mut rng) / 10.0).round().max(1.0) * 10.0;
        let model_year = rng.gen_range(oldest..=config.current_year);
        let condition = Condition::ALL[condition_dist.sample(&mut rng)];
        let brand_tier = BrandTier::ALL[tier_dist.sample(&mut rng)];

        listings.push(ValuationInput {
            original_price: price,
            model_year,
            condition,
            brand_tier,
        });
    }

    Ok(listings)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(seed: u64) -> SampleConfig {
        SampleConfig {
            count: 250,
            seed,
            median_price: 1500.0,
            price_sigma: DEFAULT_PRICE_SIGMA,
            max_age_years: 15,
            current_year: 2025,
        }
    }

    #[test]
    fn same_seed_same_listings() {
        let a = generate_listings(&config(7)).unwrap();
        let b = generate_listings(&config(7)).unwrap();
        assert_eq!(a, b);
        assert_ne!(a, generate_listings(&config(8)).unwrap());
    }

    #[test]
    fn listings_are_valid_inputs() {
        let listings = generate_listings(&config(42)).unwrap();
        assert_eq!(listings.len(), 250);
        for l in &listings {
            assert!(l.original_price >= 10.0);
            assert_eq!(l.original_price % 10.0, 0.0);
            assert!((2010..=2025).contains(&l.model_year));
        }
    }

    #[test]
    fn rejects_bad_settings() {
        let zero = SampleConfig { count: 0, ..config(1) };
        assert_eq!(generate_listings(&zero).unwrap_err().exit_code(), 2);

        let price = SampleConfig { median_price: -5.0, ..config(1) };
        assert!(generate_listings(&price).is_err());

        let window = SampleConfig { max_age_years: 200, ..config(1) };
        assert!(generate_listings(&window).is_err());
    }

    #[test]
    fn oversized_age_window_is_rejected_not_wrapped() {
        for max_age_years in [4_000_000_000, 2_147_483_648, u32::MAX] {
            let window = SampleConfig { max_age_years, ..config(1) };
            let err = generate_listings(&window).unwrap_err();
            assert_eq!(err.exit_code(), 2, "{max_age_years}");
        }
    }

    #[test]
    fn zero_age_window_uses_current_year_only() {
        let window = SampleConfig { max_age_years: 0, ..config(3) };
        let listings = generate_listings(&window).unwrap();
        assert!(listings.iter().all(|l| l.model_year == 2025));
    }
}
