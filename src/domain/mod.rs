//! Domain types used throughout the engine.
//!
//! This module defines:
//!
//! - categorical inputs (`Condition`, `BrandTier`)
//! - pricing parameters (`PricingConfig`, `PricingOverride`)
//! - per-call input/output (`ValuationInput`, `ValuationResult`, `SeriesPoint`)
//! - the saved valuation schema (`ValuationFile`)

pub mod types;

pub use types::*;
