//! Numeric utilities shared by the curve and the composer.

pub mod rounding;

pub use rounding::*;
