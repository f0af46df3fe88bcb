//! `bike-valuation` library crate.
//!
//! Estimates the resale value of a used bicycle from its original price,
//! model year, condition and brand tier using a config-driven depreciation
//! curve. The main entry points are [`valuation::estimate`] (raw labels) and
//! [`valuation::estimate_input`] (typed input).
//!
//! The binary (`bv`) is a thin wrapper around this library so that:
//!
//! - core logic is testable without spawning processes
//! - the engine can be embedded in other services unchanged

pub mod app;
pub mod cli;
pub mod data;
pub mod domain;
pub mod error;
pub mod io;
pub mod logging;
pub mod math;
pub mod models;
pub mod plot;
pub mod report;
pub mod valuation;
