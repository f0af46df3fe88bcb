//! Command-line parsing for the `bv` bicycle valuation tool.
//!
//! The goal of this module is to keep **argument parsing** and **command dispatch**
//! separate from the valuation code.

use std::path::PathBuf;

use clap::{ArgAction, ArgGroup, Args, Parser, Subcommand};

use crate::domain::{BrandTier, Condition};

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "bv", version, about = "Bicycle resale valuation (config-driven depreciation)")]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace). `RUST_LOG` overrides.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Value one bicycle, print the estimate and its depreciation chart.
    Estimate(EstimateArgs),
    /// Value a listing file (or a synthetic sample) in parallel.
    Batch(BatchArgs),
    /// Plot a previously exported valuation JSON.
    Plot(PlotArgs),
}

/// Pricing config selection shared by all valuation commands.
#[derive(Debug, Args, Clone)]
pub struct ConfigArgs {
    /// Pricing override JSON (falls back to `BV_CONFIG`).
    #[arg(long, value_name = "JSON")]
    pub config: Option<PathBuf>,

    /// Evaluation year (defaults to the current calendar year).
    #[arg(long)]
    pub current_year: Option<i32>,
}

#[derive(Debug, Args, Clone)]
pub struct EstimateArgs {
    /// Original price (MSRP) when new.
    #[arg(short, long)]
    pub price: f64,

    /// Model year.
    #[arg(short, long)]
    pub year: i32,

    /// Condition of the bicycle.
    #[arg(short, long, value_enum)]
    pub condition: Condition,

    /// Brand tier.
    #[arg(short, long, value_enum)]
    pub tier: BrandTier,

    #[command(flatten)]
    pub pricing: ConfigArgs,

    /// Disable the terminal chart.
    #[arg(long)]
    pub no_plot: bool,

    /// Chart width (columns).
    #[arg(long, default_value_t = 60)]
    pub width: usize,

    /// Chart height (rows).
    #[arg(long, default_value_t = 15)]
    pub height: usize,

    /// Export input, config and result to JSON.
    #[arg(long = "export-json")]
    pub export_json: Option<PathBuf>,

    /// Export the depreciation series to CSV.
    #[arg(long = "export-csv")]
    pub export_csv: Option<PathBuf>,
}

#[derive(Debug, Args, Clone)]
#[command(group(ArgGroup::new("source").required(true).args(["input", "sample_count"])))]
pub struct BatchArgs {
    /// Listings JSON (array of listings).
    #[arg(long, value_name = "JSON")]
    pub input: Option<PathBuf>,

    /// Value this many synthetic listings instead of a file.
    #[arg(short = 'n', long)]
    pub sample_count: Option<usize>,

    /// Random seed for synthetic listings.
    #[arg(long, default_value_t = 42)]
    pub seed: u64,

    /// Median MSRP of synthetic listings.
    #[arg(long, default_value_t = 1500.0)]
    pub median_price: f64,

    /// Oldest synthetic listing, in years before the evaluation year.
    #[arg(long, default_value_t = 15)]
    pub max_age: u32,

    #[command(flatten)]
    pub pricing: ConfigArgs,

    /// Show at most this many rejected listings.
    #[arg(long, default_value_t = 10)]
    pub top: usize,

    /// Export per-listing results to CSV.
    #[arg(long)]
    pub export: Option<PathBuf>,
}

/// Options for plotting a saved valuation.
#[derive(Debug, Parser)]
pub struct PlotArgs {
    /// Valuation JSON produced by `bv estimate --export-json`.
    #[arg(long, value_name = "JSON")]
    pub valuation: PathBuf,

    /// Chart width (columns).
    #[arg(long, default_value_t = 60)]
    pub width: usize,

    /// Chart height (rows).
    #[arg(long, default_value_t = 15)]
    pub height: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_estimate() {
        let cli = Cli::parse_from([
            "bv", "-vv", "estimate", "-p", "1000", "-y", "2020", "-c", "good", "-t", "premium",
            "--current-year", "2025", "--no-plot",
        ]);
        assert_eq!(cli.verbose, 2);
        let Command::Estimate(args) = cli.command else {
            panic!("expected estimate");
        };
        assert_eq!(args.price, 1000.0);
        assert_eq!(args.condition, Condition::Good);
        assert_eq!(args.tier, BrandTier::Premium);
        assert_eq!(args.pricing.current_year, Some(2025));
        assert!(args.no_plot);
    }

    #[test]
    fn rejects_unknown_labels() {
        let res = Cli::try_parse_from([
            "bv", "estimate", "-p", "1000", "-y", "2020", "-c", "mint", "-t", "premium",
        ]);
        assert!(res.is_err());
    }

    #[test]
    fn batch_needs_exactly_one_source() {
        assert!(Cli::try_parse_from(["bv", "batch"]).is_err());
        assert!(
            Cli::try_parse_from(["bv", "batch", "--input", "a.json", "-n", "10"]).is_err()
        );
        let cli = Cli::try_parse_from(["bv", "batch", "-n", "10", "--seed", "7"]).unwrap();
        let Command::Batch(args) = cli.command else {
            panic!("expected batch");
        };
        assert_eq!(args.sample_count, Some(10));
        assert_eq!(args.seed, 7);
    }
}
