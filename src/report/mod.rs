//! Order aggregation: everything the takeoff produces for one order.

mod area;
mod summary;

pub use area::{area_rows, panel_area, total_area, AreaRow};
pub use summary::{consumable_totals, cost_report_rows, CostReportRow, OrderSummary};

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::config::RateTables;
use crate::decompose::decompose_order;
use crate::estimate::{
    estimate_costs, estimate_times, plan_stock, weld_by_panel, ConsumableUsage, PanelCosts,
    PanelTimes, PanelWeld, RawMaterialPlan,
};
use crate::model::{profile_totals, CutPiece, OrderLine, ProfileTotals};
use crate::parser::merge_order_lines;
use crate::validation::Diagnostics;

/// Every output of one takeoff run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderReport {
    /// Merged order lines that were decomposed.
    pub lines: Vec<OrderLine>,
    pub fx_rate: f64,
    pub cut_list: Vec<CutPiece>,
    pub profile_totals: ProfileTotals,
    pub raw_material: RawMaterialPlan,
    pub weld: PanelWeld,
    pub times: PanelTimes,
    pub costs: PanelCosts,
    pub consumable_totals: ConsumableUsage,
    pub areas: Vec<AreaRow>,
    pub cost_rows: Vec<CostReportRow>,
    pub summary: OrderSummary,
    pub diagnostics: Diagnostics,
}

/// Run the full takeoff for an order.
///
/// Lines that cannot be decomposed are reported in `diagnostics` and left out
/// of every total. An empty or fully invalid order yields an empty report.
pub fn build_report(lines: &[OrderLine], rates: &RateTables, fx_rate: f64) -> OrderReport {
    let (cut_list, diagnostics) = decompose_order(lines);

    let skipped = diagnostics.skipped_codes();
    let kept: Vec<OrderLine> = merge_order_lines(lines)
        .into_iter()
        .filter(|line| line.quantity > 0 && !skipped.contains(&line.base_code.as_str()))
        .collect();

    let weld = weld_by_panel(&cut_list);
    let times = estimate_times(&cut_list, &weld, rates);
    let raw_material = plan_stock(&cut_list, rates.stock_length_mm);
    let costs = estimate_costs(&cut_list, &weld, &times.by_panel, rates, fx_rate);

    let areas = area_rows(&kept);
    let cost_rows = cost_report_rows(&areas, &costs);
    let summary = OrderSummary::new(&cut_list, &areas, &times, &costs);

    info!(
        "{} panel(s), {} piece(s), {:.2} m2, {:.1} min, {:.2} USD",
        summary.total_panel_count,
        summary.total_piece_count,
        summary.total_area_m2,
        summary.total_minutes,
        summary.total_cost_usd
    );

    OrderReport {
        lines: kept,
        fx_rate,
        profile_totals: profile_totals(&cut_list),
        consumable_totals: consumable_totals(&costs.usage),
        cut_list,
        raw_material,
        weld,
        times,
        costs,
        areas,
        cost_rows,
        summary,
        diagnostics,
    }
}
