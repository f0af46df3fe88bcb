//! Public valuation entry points.
//!
//! Flow for a single bicycle:
//!
//! 1. validate caller input (fail fast, nothing computed yet)
//! 2. resolve the evaluation year and the bicycle's age
//! 3. depreciated base × brand multiplier × condition multiplier
//! 4. clamp into `[floor, ceiling]`, round, build the ±range
//! 5. repeat step 3–4 for every year since the model year (chart series)
//!
//! Everything here is a pure function of the input, the config and the
//! evaluation year, so calls can run on any number of threads against a
//! shared `&PricingConfig`.

use chrono::{Datelike, Local};
use tracing::debug;

use crate::domain::{
    BrandTier, Condition, PriceRange, PricingConfig, PricingOverride, SeriesPoint,
    ValuationInput, ValuationResult,
};
use crate::error::{InputField, ValuationError};
use crate::math::{clamp, round_to_step};
use crate::models::{DepreciationCurve, brand_multiplier, condition_multiplier};

pub const MIN_MODEL_YEAR: i32 = 1900;
pub const MAX_MODEL_YEAR: i32 = 3000;

const MAX_RANGE_PCT: f64 = 0.5;
const MAX_FLOOR_OF_ORIGINAL: f64 = 1.0;
const MAX_CEILING_OF_ORIGINAL: f64 = 5.0;

/// Estimate a bicycle's value from raw, caller-supplied fields.
///
/// `condition` and `brand_tier` are matched case-insensitively. The effective
/// config is the defaults with `config_override` merged on top (see
/// [`PricingConfig::with_override`]).
///
/// # Errors
/// [`ValuationError::InvalidInput`] for, in order: a non-positive or non-finite
/// price, a non-integer year or one outside `[1900, 3000]`, an unknown
/// condition, an unknown brand tier, or a condition the config has no
/// multiplier for.
pub fn estimate(
    original_price: f64,
    model_year: f64,
    condition: &str,
    brand_tier: &str,
    config_override: Option<&PricingOverride>,
) -> Result<ValuationResult, ValuationError> {
    let original_price = validate_original_price(original_price)?;
    let model_year = validate_model_year(model_year)?;
    let condition = parse_condition(condition)?;
    let brand_tier = parse_brand_tier(brand_tier)?;

    let defaults = PricingConfig::default();
    let config = match config_override {
        Some(over) => defaults.with_override(over),
        None => defaults,
    };

    let input = ValuationInput {
        original_price,
        model_year,
        condition,
        brand_tier,
    };
    estimate_input(&input, &config)
}

/// Estimate a typed input against a fully resolved config.
pub fn estimate_input(
    input: &ValuationInput,
    config: &PricingConfig,
) -> Result<ValuationResult, ValuationError> {
    estimate_at(input, config, resolve_current_year(config))
}

/// Estimate with an explicit evaluation year (already resolved by the caller).
pub fn estimate_at(
    input: &ValuationInput,
    config: &PricingConfig,
    current_year: i32,
) -> Result<ValuationResult, ValuationError> {
    validate_original_price(input.original_price)?;
    validate_model_year(f64::from(input.model_year))?;

    let adjustment = brand_multiplier(input.brand_tier, config)
        * condition_multiplier(input.condition, config).ok_or_else(|| {
            ValuationError::invalid(
                InputField::Condition,
                format!(
                    "no multiplier configured for condition '{}'",
                    input.condition
                ),
            )
        })?;

    let curve = DepreciationCurve::from_config(config);
    let bounds = PriceBounds::new(input.original_price, config);
    let step = config.round_to;

    let age = (current_year - input.model_year).max(0);
    let adjusted = curve.value(input.original_price, f64::from(age)) * adjustment;
    let clamped = bounds.clamp(adjusted);
    let estimated_price = round_to_step(clamped, step);

    let range_pct = clamp(config.range_pct, 0.0, MAX_RANGE_PCT);
    let price_range = PriceRange {
        min: round_to_step(bounds.clamp(clamped * (1.0 - range_pct)), step),
        max: round_to_step(bounds.clamp(clamped * (1.0 + range_pct)), step),
    };

    let depreciation_series = if input.model_year >= current_year {
        vec![SeriesPoint {
            year: input.model_year,
            value: estimated_price,
        }]
    } else {
        (input.model_year..=current_year)
            .map(|year| {
                let raw = curve.value(input.original_price, f64::from(year - input.model_year));
                SeriesPoint {
                    year,
                    value: round_to_step(bounds.clamp(raw * adjustment), step),
                }
            })
            .collect()
    };

    debug!(
        model_year = input.model_year,
        current_year,
        age,
        adjusted,
        floor = bounds.floor,
        ceiling = bounds.ceiling,
        estimated_price,
        "valuation computed"
    );

    Ok(ValuationResult {
        estimated_price,
        price_range,
        depreciation_series,
    })
}

/// `config.current_year` when it is after 1900, otherwise the local calendar year.
///
/// The result is capped at [`MAX_MODEL_YEAR`], which bounds the series length.
pub fn resolve_current_year(config: &PricingConfig) -> i32 {
    config
        .current_year
        .filter(|&year| year > MIN_MODEL_YEAR)
        .unwrap_or_else(|| Local::now().year())
        .min(MAX_MODEL_YEAR)
}

/// Absolute price bounds derived from the original price.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceBounds {
    pub floor: f64,
    pub ceiling: f64,
}

impl PriceBounds {
    pub fn new(original_price: f64, config: &PricingConfig) -> Self {
        Self {
            floor: original_price * clamp(config.floor_of_original, 0.0, MAX_FLOOR_OF_ORIGINAL),
            ceiling: original_price
                * clamp(config.ceiling_of_original, 0.0, MAX_CEILING_OF_ORIGINAL),
        }
    }

    pub fn clamp(&self, value: f64) -> f64 {
        clamp(value, self.floor, self.ceiling)
    }
}

fn validate_original_price(price: f64) -> Result<f64, ValuationError> {
    if !(price.is_finite() && price > 0.0) {
        return Err(ValuationError::invalid(
            InputField::OriginalPrice,
            format!("must be a finite number > 0, got {price}"),
        ));
    }
    Ok(price)
}

fn validate_model_year(year: f64) -> Result<i32, ValuationError> {
    let in_range = year.is_finite()
        && year.fract() == 0.0
        && year >= f64::from(MIN_MODEL_YEAR)
        && year <= f64::from(MAX_MODEL_YEAR);
    if !in_range {
        return Err(ValuationError::invalid(
            InputField::Year,
            format!("must be a whole year in [{MIN_MODEL_YEAR}, {MAX_MODEL_YEAR}], got {year}"),
        ));
    }
    Ok(year as i32)
}

fn parse_condition(label: &str) -> Result<Condition, ValuationError> {
    label.parse().map_err(|()| {
        ValuationError::not_one_of(
            InputField::Condition,
            format!("unknown condition '{label}'"),
            Condition::LABELS,
        )
    })
}

fn parse_brand_tier(label: &str) -> Result<BrandTier, ValuationError> {
    label.parse().map_err(|()| {
        ValuationError::not_one_of(
            InputField::BrandTier,
            format!("unknown brand tier '{label}'"),
            BrandTier::LABELS,
        )
    })
}
