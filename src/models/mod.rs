//! Pricing model building blocks.
//!
//! Both pieces are small, pure functions of a `PricingConfig` so the composer
//! can stay a thin orchestration layer.

pub mod adjustments;
pub mod curve;

pub use adjustments::*;
pub use curve::*;
