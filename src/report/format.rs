//! Formatted terminal output for valuations and batches.
//!
//! We keep formatting code in one place so:
//! - the valuation code stays clean and testable
//! - output changes are localized (important for snapshot tests)

use crate::domain::{PricingConfig, ValuationInput, ValuationResult};
use crate::valuation::{BatchEntry, BatchSummary};

/// Format a single valuation: input, headline estimate, range and per-year table.
pub fn format_valuation(
    input: &ValuationInput,
    result: &ValuationResult,
    config: &PricingConfig,
) -> String {
    let mut out = String::new();

    out.push_str("=== bv - Bicycle Valuation ===\n");
    out.push_str(&format!(
        "Bike: MSRP {} | model year {} | {} | {} tier\n",
        fmt_money(input.original_price),
        input.model_year,
        input.condition,
        input.brand_tier,
    ));
    out.push_str(&format!(
        "Config: initial drop {:.1}% | year-1 drop {:.1}% | range ±{:.1}% | round to {}\n",
        config.initial_drop_rate * 100.0,
        config.year1_additional_drop_rate * 100.0,
        config.range_pct * 100.0,
        config.round_to,
    ));
    out.push('\n');

    out.push_str(&format!(
        "Estimated price: {} ({:.1}% of MSRP)\n",
        fmt_money(result.estimated_price),
        100.0 * result.estimated_price / input.original_price,
    ));
    out.push_str(&format!(
        "Range: {} .. {}\n",
        fmt_money(result.price_range.min),
        fmt_money(result.price_range.max),
    ));
    out.push('\n');

    out.push_str(&format!("{:<6} {:>12} {:>9}\n", "year", "value", "retained"));
    out.push_str(&format!("{:-<6} {:-<12} {:-<9}\n", "", "", ""));
    for p in &result.depreciation_series {
        out.push_str(&format!(
            "{:<6} {:>12} {:>8.1}%\n",
            p.year,
            fmt_money(p.value),
            100.0 * p.value / input.original_price,
        ));
    }

    out
}

/// Format batch totals plus the first `top_n` failures.
pub fn format_batch_summary(summary: &BatchSummary, entries: &[BatchEntry], top_n: usize) -> String {
    let mut out = String::new();

    out.push_str("=== bv - Batch Valuation ===\n");
    out.push_str(&format!(
        "Listings: n={} | valued={} | failed={}\n",
        summary.n_inputs, summary.n_valued, summary.n_failed
    ));
    out.push_str(&format!(
        "MSRP total: {} | estimated total: {}\n",
        fmt_money(summary.total_original),
        fmt_money(summary.total_estimated)
    ));
    out.push_str(&format!(
        "Mean estimate: {} | mean retained: {:.1}%\n",
        fmt_money(summary.mean_estimated),
        summary.mean_retained * 100.0
    ));

    let failures: Vec<String> = entries
        .iter()
        .filter_map(|e| e.outcome.as_ref().err().map(|err| format!("  #{}: {err}", e.index)))
        .take(top_n)
        .collect();
    if !failures.is_empty() {
        out.push_str("\nRejected listings:\n");
        for line in failures {
            out.push_str(&line);
            out.push('\n');
        }
        if summary.n_failed > top_n {
            out.push_str(&format!("  ... and {} more\n", summary.n_failed - top_n));
        }
    }

    out
}

/// Whole amounts print without decimals; anything else keeps two.
fn fmt_money(v: f64) -> String {
    if v.fract() == 0.0 {
        format!("{v:.0}")
    } else {
        format!("{v:.2}")
    }
}
