//! panel-takeoff - Quantity takeoff and costing for aluminum formwork panels.
//!
//! Decomposes an order of panel codes into the profile pieces that build them,
//! plans stock bars per profile, estimates weld length and fabrication time,
//! and prices every panel line.
//!
//! # Example
//!
//! ```
//! use panel_takeoff::{build_report, OrderLine, Profile, RateTables, DEFAULT_FX_RATE};
//!
//! let order = [OrderLine::new("WF600X2250", 10), OrderLine::new("SF400X2000", 5)];
//! let report = build_report(&order, &RateTables::default(), DEFAULT_FX_RATE);
//!
//! assert_eq!(report.profile_totals[&Profile::AlaMuro].length_mm, 65_000);
//! assert_eq!(report.raw_material[&Profile::AlaMuro].bars_needed, 15);
//! assert_eq!(report.times.total_min, 2678.0);
//! ```

pub mod config;
pub mod decompose;
pub mod error;
pub mod estimate;
pub mod model;
pub mod parser;
pub mod report;
pub mod validation;

// Re-exports for convenience
pub use config::{RateTables, DEFAULT_FX_RATE, DEFAULT_STOCK_LENGTH_MM};
pub use decompose::{decompose, decompose_order};
pub use error::{ErrorCode, Result, TakeoffError};
pub use estimate::{
    estimate_costs, estimate_times, plan_stock, weld_by_panel, PanelCost, PanelTime, StockPlan,
};
pub use model::{CutPiece, OrderLine, PanelCode, PanelType, Profile};
pub use parser::parse_panel_code;
pub use report::{build_report, OrderReport, OrderSummary};
pub use validation::Diagnostics;

/// Run the takeoff for `CODE=QTY` order lines.
///
/// Malformed arguments fail the whole call; panel codes that cannot be
/// decomposed are only reported in the diagnostics.
pub fn takeoff_from_args<S: AsRef<str>>(
    args: &[S],
    rates: &RateTables,
    fx_rate: f64,
) -> Result<OrderReport> {
    let lines = args
        .iter()
        .map(|arg| parser::parse_order_arg(arg.as_ref()))
        .collect::<Result<Vec<_>>>()?;
    Ok(build_report(&lines, rates, fx_rate))
}
