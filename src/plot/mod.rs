//! Terminal charts of depreciation series.

pub mod ascii;

pub use ascii::*;
