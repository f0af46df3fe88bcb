//! Shared domain types.
//!
//! These types are intentionally kept lightweight and serializable so they can be:
//!
//! - used in-memory by the valuation engine
//! - loaded from listing / config files
//! - exported to JSON/CSV and reloaded later for plotting

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Physical state of the specific bicycle being valued.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Condition {
    New,
    Excellent,
    Good,
    Fair,
}

impl Condition {
    pub const ALL: [Condition; 4] = [
        Condition::New,
        Condition::Excellent,
        Condition::Good,
        Condition::Fair,
    ];

    /// Accepted labels, in declaration order (used in error messages).
    pub const LABELS: &'static [&'static str] = &["new", "excellent", "good", "fair"];

    pub fn label(self) -> &'static str {
        match self {
            Condition::New => "new",
            Condition::Excellent => "excellent",
            Condition::Good => "good",
            Condition::Fair => "fair",
        }
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Condition {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Condition::ALL
            .into_iter()
            .find(|c| c.label().eq_ignore_ascii_case(s))
            .ok_or(())
    }
}

/// Coarse classification of a brand's value retention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum BrandTier {
    Premium,
    Budget,
}

impl BrandTier {
    pub const ALL: [BrandTier; 2] = [BrandTier::Premium, BrandTier::Budget];

    pub const LABELS: &'static [&'static str] = &["premium", "budget"];

    pub fn label(self) -> &'static str {
        match self {
            BrandTier::Premium => "premium",
            BrandTier::Budget => "budget",
        }
    }
}

impl fmt::Display for BrandTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for BrandTier {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        BrandTier::ALL
            .into_iter()
            .find(|t| t.label().eq_ignore_ascii_case(s))
            .ok_or(())
    }
}

/// Pricing heuristic parameters.
///
/// Values are stored as supplied; out-of-range rates and bounds are clamped
/// where they are used rather than rejected here, so a slightly malformed
/// operator config still yields a plausible number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricingConfig {
    /// Flat loss the instant a bicycle stops being new, clamped to `[0, 0.9]`.
    pub initial_drop_rate: f64,
    /// Additional loss of post-initial value by the end of year 1, clamped to
    /// `[0, 0.95]`. Pins the steepness of the decay curve.
    pub year1_additional_drop_rate: f64,
    pub premium_brand_multiplier: f64,
    pub budget_brand_multiplier: f64,
    pub condition_multipliers: BTreeMap<Condition, f64>,
    /// Half-width of the confidence range, clamped to `[0, 0.5]`.
    pub range_pct: f64,
    /// Lower bound as a fraction of the original price, clamped to `[0, 1]`.
    pub floor_of_original: f64,
    /// Upper bound as a fraction of the original price, clamped to `[0, 5]`.
    pub ceiling_of_original: f64,
    /// Rounding step for money outputs. `<= 0` or non-finite disables rounding.
    pub round_to: f64,
    /// Evaluation year. Ignored unless `> 1900`; the local calendar year is used instead.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_year: Option<i32>,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            initial_drop_rate: 0.18,
            year1_additional_drop_rate: 0.08,
            premium_brand_multiplier: 1.1,
            budget_brand_multiplier: 1.0,
            condition_multipliers: default_condition_multipliers(),
            range_pct: 0.05,
            floor_of_original: 0.05,
            ceiling_of_original: 1.0,
            round_to: 1.0,
            current_year: None,
        }
    }
}

pub fn default_condition_multipliers() -> BTreeMap<Condition, f64> {
    BTreeMap::from([
        (Condition::New, 1.05),
        (Condition::Excellent, 1.0),
        (Condition::Good, 0.9),
        (Condition::Fair, 0.75),
    ])
}

/// A partial [`PricingConfig`]; `Some` fields replace the base value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PricingOverride {
    pub initial_drop_rate: Option<f64>,
    pub year1_additional_drop_rate: Option<f64>,
    pub premium_brand_multiplier: Option<f64>,
    pub budget_brand_multiplier: Option<f64>,
    /// Replaces the whole map. Conditions missing from it can no longer be valued.
    pub condition_multipliers: Option<BTreeMap<Condition, f64>>,
    pub range_pct: Option<f64>,
    pub floor_of_original: Option<f64>,
    pub ceiling_of_original: Option<f64>,
    pub round_to: Option<f64>,
    pub current_year: Option<i32>,
}

impl PricingConfig {
    /// Shallow field-by-field merge of `over` onto `self`.
    pub fn with_override(&self, over: &PricingOverride) -> PricingConfig {
        PricingConfig {
            initial_drop_rate: over.initial_drop_rate.unwrap_or(self.initial_drop_rate),
            year1_additional_drop_rate: over
                .year1_additional_drop_rate
                .unwrap_or(self.year1_additional_drop_rate),
            premium_brand_multiplier: over
                .premium_brand_multiplier
                .unwrap_or(self.premium_brand_multiplier),
            budget_brand_multiplier: over
                .budget_brand_multiplier
                .unwrap_or(self.budget_brand_multiplier),
            condition_multipliers: over
                .condition_multipliers
                .clone()
                .unwrap_or_else(|| self.condition_multipliers.clone()),
            range_pct: over.range_pct.unwrap_or(self.range_pct),
            floor_of_original: over.floor_of_original.unwrap_or(self.floor_of_original),
            ceiling_of_original: over.ceiling_of_original.unwrap_or(self.ceiling_of_original),
            round_to: over.round_to.unwrap_or(self.round_to),
            current_year: over.current_year.or(self.current_year),
        }
    }
}

/// One bicycle to value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValuationInput {
    /// MSRP when new.
    pub original_price: f64,
    pub model_year: i32,
    pub condition: Condition,
    pub brand_tier: BrandTier,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceRange {
    pub min: f64,
    pub max: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeriesPoint {
    pub year: i32,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValuationResult {
    pub estimated_price: f64,
    pub price_range: PriceRange,
    /// Ascending by year, `model_year..=current_year`.
    pub depreciation_series: Vec<SeriesPoint>,
}

/// A saved valuation (JSON), self-describing so it can be re-plotted later.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValuationFile {
    pub tool: String,
    pub generated_on: NaiveDate,
    pub input: ValuationInput,
    pub config: PricingConfig,
    pub result: ValuationResult,
}
