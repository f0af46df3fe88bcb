//! Valuation orchestration.
//!
//! Responsibilities:
//!
//! - validate caller input and resolve the effective config
//! - combine the depreciation curve with brand/condition multipliers
//! - clamp, round and build the confidence range and chart series
//! - value whole batches in parallel

pub mod batch;
pub mod composer;

pub use batch::*;
pub use composer::*;
