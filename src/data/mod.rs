//! Listing data sources that do not come from files.
//!
//! - seeded synthetic listings (`sample`)

pub mod sample;

pub use sample::*;
