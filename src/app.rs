//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - parses CLI arguments and installs logging
//! - resolves the pricing config (defaults, config file, CLI year)
//! - runs single or batch valuations
//! - prints reports/charts
//! - writes optional exports

use clap::Parser;
use tracing::debug;

use crate::cli::{BatchArgs, Command, EstimateArgs, PlotArgs};
use crate::domain::ValuationInput;
use crate::error::AppError;
use crate::io::effective_config;

pub mod pipeline;

use pipeline::ListingSource;

/// Entry point for the `bv` binary.
pub fn run() -> Result<(), AppError> {
    let cli = crate::cli::Cli::parse();
    crate::logging::init_logging(cli.verbose);

    match cli.command {
        Command::Estimate(args) => handle_estimate(args),
        Command::Batch(args) => handle_batch(args),
        Command::Plot(args) => handle_plot(args),
    }
}

fn handle_estimate(args: EstimateArgs) -> Result<(), AppError> {
    let config = effective_config(args.pricing.config.as_deref(), args.pricing.current_year)?;
    debug!(?config, "effective pricing config");

    let input = ValuationInput {
        original_price: args.price,
        model_year: args.year,
        condition: args.condition,
        brand_tier: args.tier,
    };
    let result = pipeline::run_estimate(&input, &config)?;

    println!("{}", crate::report::format_valuation(&input, &result, &config));
    if !args.no_plot {
        println!(
            "{}",
            crate::plot::render_series_plot(&result.depreciation_series, args.width, args.height)
        );
    }

    if let Some(path) = &args.export_json {
        let file = crate::io::valuation_file(&input, &config, &result);
        crate::io::write_valuation_json(path, &file)?;
    }
    if let Some(path) = &args.export_csv {
        crate::io::write_series_csv(path, &result)?;
    }

    Ok(())
}

fn handle_batch(args: BatchArgs) -> Result<(), AppError> {
    let config = effective_config(args.pricing.config.as_deref(), args.pricing.current_year)?;

    let source = match (&args.input, args.sample_count) {
        (Some(path), _) => ListingSource::File(path.clone()),
        (None, Some(count)) => ListingSource::Sample {
            count,
            seed: args.seed,
            median_price: args.median_price,
            max_age_years: args.max_age,
        },
        (None, None) => return Err(AppError::new(2, "Provide --input or --sample-count.")),
    };

    let out = pipeline::run_batch(&source, &config)?;
    println!(
        "{}",
        crate::report::format_batch_summary(&out.summary, &out.entries, args.top)
    );

    if let Some(path) = &args.export {
        crate::io::write_batch_csv(path, &out.inputs, &out.entries)?;
    }

    Ok(())
}

fn handle_plot(args: PlotArgs) -> Result<(), AppError> {
    let file = crate::io::read_valuation_json(&args.valuation)?;

    println!(
        "{}",
        crate::report::format_valuation(&file.input, &file.result, &file.config)
    );
    println!(
        "{}",
        crate::plot::render_series_plot(&file.result.depreciation_series, args.width, args.height)
    );
    Ok(())
}
