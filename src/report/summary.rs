//! Order-wide totals.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::area::{total_area, AreaRow};
use crate::config::HOURS_PER_DAY;
use crate::estimate::{ConsumableUsage, PanelCosts, PanelTimes};
use crate::model::CutPiece;

/// Sum consumable usage over every panel line.
pub fn consumable_totals(usage: &BTreeMap<String, ConsumableUsage>) -> ConsumableUsage {
    let mut totals = ConsumableUsage::new();
    for panel_usage in usage.values() {
        for (name, line) in panel_usage {
            let total = totals.entry(name.clone()).or_default();
            total.quantity += line.quantity;
            total.cost_usd += line.cost_usd;
        }
    }
    totals
}

/// Cost of one order line, per unit and per m².
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostReportRow {
    pub base_code: String,
    pub quantity: u32,
    pub unit_area_m2: f64,
    /// Cost of the whole line.
    pub line_cost_usd: f64,
    pub unit_cost_usd: f64,
    /// Unit cost over unit area, 0 when the area is 0.
    pub usd_per_m2: f64,
    /// Labor over all phases for the whole line.
    pub labor_usd: f64,
}

/// One cost row per priced area row, in area row order.
pub fn cost_report_rows(areas: &[AreaRow], costs: &PanelCosts) -> Vec<CostReportRow> {
    areas
        .iter()
        .filter_map(|area| {
            let cost = costs.by_panel.get(&area.base_code)?;
            let unit_cost_usd = if area.quantity > 0 {
                cost.total_usd / f64::from(area.quantity)
            } else {
                0.0
            };
            let usd_per_m2 = if area.unit_area_m2 > 0.0 {
                unit_cost_usd / area.unit_area_m2
            } else {
                0.0
            };
            Some(CostReportRow {
                base_code: area.base_code.clone(),
                quantity: area.quantity,
                unit_area_m2: area.unit_area_m2,
                line_cost_usd: cost.total_usd,
                unit_cost_usd,
                usd_per_m2,
                labor_usd: cost.labor_usd(),
            })
        })
        .collect()
}

/// Headline figures of an order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OrderSummary {
    pub total_piece_count: u64,
    pub total_panel_count: u64,
    pub total_area_m2: f64,
    pub total_cost_usd: f64,
    /// 0 when the order has no area.
    pub average_cost_per_m2: f64,
    pub total_minutes: f64,
    pub total_hours: f64,
    /// Shop days of eight hours.
    pub total_days: f64,
}

impl OrderSummary {
    pub fn new(pieces: &[CutPiece], areas: &[AreaRow], times: &PanelTimes, costs: &PanelCosts) -> Self {
        let total_area_m2 = total_area(areas);
        let total_hours = times.total_min / 60.0;

        Self {
            total_piece_count: pieces.iter().map(|p| u64::from(p.piece_count)).sum(),
            total_panel_count: areas.iter().map(|a| u64::from(a.quantity)).sum(),
            total_area_m2,
            total_cost_usd: costs.total_usd,
            average_cost_per_m2: if total_area_m2 > 0.0 {
                costs.total_usd / total_area_m2
            } else {
                0.0
            },
            total_minutes: times.total_min,
            total_hours,
            total_days: total_hours / HOURS_PER_DAY,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::estimate::{PanelCost, UsageLine};
    use crate::model::{OrderLine, Profile};
    use crate::report::area_rows;

    fn usage(entries: &[(&str, f64, f64)]) -> ConsumableUsage {
        entries
            .iter()
            .map(|&(name, quantity, cost_usd)| (name.to_string(), UsageLine { quantity, cost_usd }))
            .collect()
    }

    #[test]
    fn test_consumable_totals() {
        let by_panel = BTreeMap::from([
            ("A".to_string(), usage(&[("gas", 1.0, 2.0), ("ojales", 14.0, 12.978)])),
            ("B".to_string(), usage(&[("gas", 0.5, 1.0)])),
        ]);
        let totals = consumable_totals(&by_panel);
        assert_eq!(totals["gas"], UsageLine { quantity: 1.5, cost_usd: 3.0 });
        assert_eq!(totals["ojales"].quantity, 14.0);
        assert_eq!(totals.len(), 2);
    }

    #[test]
    fn test_cost_report_rows() {
        let areas = area_rows(&[OrderLine::new("WF600X2250", 10), OrderLine::new("ZZ1X1", 1)]);
        let mut costs = PanelCosts::default();
        costs.by_panel.insert(
            "WF600X2250".to_string(),
            PanelCost {
                labor_cut_usd: 10.0,
                labor_weld_usd: 20.0,
                total_usd: 270.0,
                ..PanelCost::default()
            },
        );

        let rows = cost_report_rows(&areas, &costs);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].unit_cost_usd, 27.0);
        assert_eq!(rows[0].usd_per_m2, 20.0);
        assert_eq!(rows[0].labor_usd, 30.0);
    }

    #[test]
    fn test_summary() {
        let pieces = vec![
            CutPiece::new("WF600X2250", Profile::AlaMuro, 20, 2250),
            CutPiece::new("WF600X2250", Profile::Tubo, 4, 47),
        ];
        let areas = area_rows(&[OrderLine::new("WF600X2250", 10)]);
        let times = PanelTimes {
            total_min: 960.0,
            ..PanelTimes::default()
        };
        let costs = PanelCosts {
            total_usd: 135.0,
            ..PanelCosts::default()
        };

        let summary = OrderSummary::new(&pieces, &areas, &times, &costs);
        assert_eq!(summary.total_piece_count, 24);
        assert_eq!(summary.total_panel_count, 10);
        assert_eq!(summary.average_cost_per_m2, 10.0);
        assert_eq!(summary.total_hours, 16.0);
        assert_eq!(summary.total_days, 2.0);
    }

    #[test]
    fn test_summary_without_area() {
        let summary = OrderSummary::new(&[], &[], &PanelTimes::default(), &PanelCosts::default());
        assert_eq!(summary, OrderSummary::default());
    }
}
