//! Brand tier and condition multipliers.

use crate::domain::{BrandTier, Condition, PricingConfig};

pub fn brand_multiplier(tier: BrandTier, config: &PricingConfig) -> f64 {
    match tier {
        BrandTier::Premium => config.premium_brand_multiplier,
        BrandTier::Budget => config.budget_brand_multiplier,
    }
}

/// `None` when the config has no multiplier for `condition` (possible after a
/// partial `condition_multipliers` override).
pub fn condition_multiplier(condition: Condition, config: &PricingConfig) -> Option<f64> {
    config.condition_multipliers.get(&condition).copied()
}
