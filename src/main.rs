//! panel-takeoff - CLI for the panel quantity takeoff.

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use panel_takeoff::parser::{parse_order_arg, parse_order_file};
use panel_takeoff::{build_report, decompose_order, RateTables, DEFAULT_FX_RATE};

/// Cut lists, stock bars, fabrication time and cost for a panel order.
#[derive(Parser, Debug)]
#[command(name = "panel-takeoff")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Order lines as CODE=QTY, e.g. WF600X2250=10
    orders: Vec<String>,

    /// JSON order file: array of {"base_code", "quantity"}
    #[arg(long)]
    order: Option<PathBuf>,

    /// JSON rate table file; omitted fields keep their defaults
    #[arg(long)]
    rates: Option<PathBuf>,

    /// Secondary currency units per USD
    #[arg(long, default_value_t = DEFAULT_FX_RATE)]
    fx: f64,

    /// Stock bar length in mm
    #[arg(long)]
    stock_length: Option<u32>,

    /// Write the report to a file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Check the order only, don't price it
    #[arg(long)]
    validate: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    let filter = if args.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    // Collect order lines
    let mut lines = Vec::new();
    if let Some(path) = &args.order {
        let from_file = parse_order_file(path)
            .with_context(|| format!("Failed to read order {}", path.display()))?;
        info!("Read {} line(s) from {}", from_file.len(), path.display());
        lines.extend(from_file);
    }
    for arg in &args.orders {
        lines.push(parse_order_arg(arg).with_context(|| format!("Bad order line '{}'", arg))?);
    }
    if lines.is_empty() {
        warn!("Empty order");
    }

    // Rate tables
    let mut rates = match &args.rates {
        Some(path) => RateTables::from_json_file(path)
            .with_context(|| format!("Failed to load rates {}", path.display()))?,
        None => RateTables::default(),
    };
    if let Some(stock_length) = args.stock_length {
        rates.stock_length_mm = stock_length;
    }
    if args.fx <= 0.0 {
        warn!("FX rate {} is not positive, labor will be priced at 0", args.fx);
    }

    // Validate-only mode
    if args.validate {
        let (_, diagnostics) = decompose_order(&lines);
        for warning in &diagnostics.warnings {
            warn!("{}: {}", warning.code, warning.message);
        }
        for skipped in &diagnostics.skipped {
            error!("{}: {}", skipped.code, skipped.message);
        }
        if !diagnostics.all_lines_used() {
            anyhow::bail!("{} line(s) cannot be decomposed", diagnostics.skipped.len());
        }
        info!("Validation passed");
        return Ok(());
    }

    let report = build_report(&lines, &rates, args.fx);
    let json = serde_json::to_string_pretty(&report)?;

    match &args.output {
        Some(path) => {
            std::fs::write(path, &json)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            info!("Generated: {}", path.display());
        }
        None => println!("{}", json),
    }

    Ok(())
}
