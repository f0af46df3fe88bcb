//! Depreciation curve: initial drop followed by power-law decay.
//!
//! The retained value at integer age `a` (years since model year) is:
//!
//! ```text
//! value(a) = price * (1 - d0) * (1 + a)^(-k)
//! ```
//!
//! where `d0` is the initial drop rate and `k` is chosen so that age 1
//! reproduces the configured year-1 additional drop `r` exactly:
//!
//! ```text
//! 2^(-k) = 1 - r   =>   k = log2(1 / (1 - r))
//! ```
//!
//! `k >= 0` for every clamped `r`, so the curve is non-increasing in age and
//! flattens out for older bicycles.

use crate::domain::PricingConfig;
use crate::math::clamp;

const MAX_INITIAL_DROP: f64 = 0.9;
const MAX_YEAR1_DROP: f64 = 0.95;

/// Decay exponent `k` for a year-1 additional drop rate (clamped to `[0, 0.95]`).
pub fn decay_exponent(year1_additional_drop_rate: f64) -> f64 {
    let r = clamp(year1_additional_drop_rate, 0.0, MAX_YEAR1_DROP);
    if r == 0.0 {
        return 0.0;
    }
    (1.0 / (1.0 - r)).log2()
}

/// Coerce an age to a whole, non-negative number of years.
pub fn whole_years(age_years: f64) -> f64 {
    if !age_years.is_finite() {
        return 0.0;
    }
    age_years.floor().max(0.0)
}

/// Curve parameters resolved once from a config.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DepreciationCurve {
    /// Fraction of the original price kept after the initial drop.
    pub retained_after_initial: f64,
    /// Power-law decay exponent.
    pub k: f64,
}

impl DepreciationCurve {
    pub fn from_config(config: &PricingConfig) -> Self {
        Self {
            retained_after_initial: 1.0 - clamp(config.initial_drop_rate, 0.0, MAX_INITIAL_DROP),
            k: decay_exponent(config.year1_additional_drop_rate),
        }
    }

    /// Fraction of the original price retained at `age_years`.
    pub fn retained_fraction(&self, age_years: f64) -> f64 {
        let age = whole_years(age_years);
        self.retained_after_initial * (1.0 + age).powf(-self.k)
    }

    pub fn value(&self, original_price: f64, age_years: f64) -> f64 {
        original_price * self.retained_fraction(age_years)
    }
}

/// Depreciated base value of `original_price` at `age_years`, before brand and
/// condition adjustments.
pub fn depreciated_base(original_price: f64, age_years: f64, config: &PricingConfig) -> f64 {
    DepreciationCurve::from_config(config).value(original_price, age_years)
}
