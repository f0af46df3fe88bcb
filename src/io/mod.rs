//! Input/output helpers.
//!
//! - pricing config files + `BV_CONFIG` (`config`)
//! - listing files for batch runs (`listings`)
//! - valuation JSON and CSV exports (`export`)

pub mod config;
pub mod export;
pub mod listings;

pub use config::*;
pub use export::*;
pub use listings::*;
