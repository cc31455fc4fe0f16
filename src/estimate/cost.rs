//! Cost per panel line: material, labor, consumables and energy.
//!
//! Labor rates are in the secondary currency and are converted with the
//! caller's exchange rate. Everything else is priced in the reporting
//! currency. A zero or missing rate contributes nothing.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::{PanelTime, PanelWeld};
use crate::config::{Phase, RateTables, UsageUnit};
use crate::model::{group_by_panel, piece_count, profile_totals, CutPiece, PanelCode, PanelType};
use crate::parser::parse_panel_code;

/// Usage detail key for eyelets.
pub const EYELETS: &str = "ojales";
/// Usage detail key for rivets.
pub const RIVETS: &str = "remaches";
/// Usage detail key for electricity, in kWh.
pub const ENERGY: &str = "energia";

/// Height covered by one pair of eyelets.
const EYELET_PITCH_MM: u32 = 300;

/// Cost breakdown of one panel line, reporting currency.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PanelCost {
    pub material_usd: f64,
    pub labor_cut_usd: f64,
    pub labor_weld_usd: f64,
    pub labor_drill_usd: f64,
    /// Shop consumables plus eyelets and rivets.
    pub consumables_usd: f64,
    pub energy_usd: f64,
    pub total_usd: f64,
}

impl PanelCost {
    /// Labor over all three phases.
    pub fn labor_usd(&self) -> f64 {
        self.labor_cut_usd + self.labor_weld_usd + self.labor_drill_usd
    }
}

/// Quantity and cost of one consumable.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct UsageLine {
    pub quantity: f64,
    pub cost_usd: f64,
}

/// Consumable name to usage, for one panel line.
pub type ConsumableUsage = BTreeMap<String, UsageLine>;

/// Costs of every panel line.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PanelCosts {
    pub by_panel: BTreeMap<String, PanelCost>,
    pub usage: BTreeMap<String, ConsumableUsage>,
    pub total_usd: f64,
}

/// Eyelet count of a panel line, 0 for panels that carry none.
///
/// Wide frames always carry eyelets; slim and mid frames only at 600 wide.
pub fn eyelet_count(code: &PanelCode) -> u32 {
    let (Some(width), Some(height)) = (code.dim(0), code.dim(1)) else {
        return 0;
    };
    let fitted = match code.panel_type() {
        Some(PanelType::WideFrame) => true,
        Some(PanelType::SlimFrame | PanelType::MidFrame) => width == 600,
        _ => false,
    };
    if fitted {
        height / EYELET_PITCH_MM * 2
    } else {
        0
    }
}

fn ratio(numerator: f64, denominator: f64) -> f64 {
    if denominator > 0.0 {
        numerator / denominator
    } else {
        0.0
    }
}

/// Inputs that drive consumable usage for one panel line.
struct Drivers {
    weld_mm: f64,
    weld_min: f64,
    cuts: f64,
}

impl Drivers {
    fn value(&self, unit: UsageUnit) -> f64 {
        match unit {
            UsageUnit::WeldMeters => self.weld_mm / 1000.0,
            UsageUnit::WeldMillimeters => self.weld_mm,
            UsageUnit::WeldMinutes => self.weld_min,
            UsageUnit::Cuts => self.cuts,
        }
    }
}

/// Price one panel line.
///
/// `rows` are the line's cut list rows, already scaled by quantity.
pub fn panel_cost<'a>(
    rows: impl IntoIterator<Item = &'a CutPiece>,
    code: &PanelCode,
    weld_mm: u64,
    time: &PanelTime,
    rates: &RateTables,
    fx_rate: f64,
) -> (PanelCost, ConsumableUsage) {
    let rows: Vec<CutPiece> = rows.into_iter().cloned().collect();

    let material_usd: f64 = profile_totals(&rows)
        .iter()
        .map(|(profile, total)| {
            total.length_mm as f64 / 1000.0
                * rates.unit_weight(*profile)
                * rates.aluminum_price_per_kg
        })
        .sum();

    let labor = |phase| ratio(time.phase(phase) * rates.labor_rate_per_min(phase), fx_rate);

    let drivers = Drivers {
        weld_mm: weld_mm as f64,
        weld_min: time.weld_min,
        cuts: piece_count(&rows) as f64,
    };
    let mut usage = ConsumableUsage::new();
    for (name, consumable) in &rates.consumables {
        let quantity = ratio(drivers.value(consumable.unit), consumable.yield_rate);
        usage.insert(
            name.clone(),
            UsageLine {
                quantity,
                cost_usd: quantity * consumable.unit_price,
            },
        );
    }

    let eyelets = eyelet_count(code);
    if eyelets > 0 {
        let rivets = eyelets * 2;
        for (name, count, price) in [
            (EYELETS, eyelets, rates.hardware.eyelet),
            (RIVETS, rivets, rates.hardware.rivet),
        ] {
            usage.insert(
                name.to_string(),
                UsageLine {
                    quantity: f64::from(count),
                    cost_usd: f64::from(count) * price,
                },
            );
        }
    }
    let consumables_usd: f64 = usage.values().map(|u| u.cost_usd).sum();

    let kwh: f64 = Phase::ALL
        .iter()
        .map(|&phase| time.phase(phase) / 60.0 * rates.machine_power_kw.get(phase))
        .sum();
    let energy_usd = kwh * rates.energy_price_per_kwh;
    usage.insert(
        ENERGY.to_string(),
        UsageLine {
            quantity: kwh,
            cost_usd: energy_usd,
        },
    );

    let mut cost = PanelCost {
        material_usd,
        labor_cut_usd: labor(Phase::Cut),
        labor_weld_usd: labor(Phase::Weld),
        labor_drill_usd: labor(Phase::Drill),
        consumables_usd,
        energy_usd,
        total_usd: 0.0,
    };
    cost.total_usd = cost.material_usd + cost.labor_usd() + cost.consumables_usd + cost.energy_usd;

    (cost, usage)
}

/// Price every panel line of a cut list.
///
/// A panel missing from `times` is priced with zero minutes, and one missing
/// from `weld` with no seam.
pub fn estimate_costs(
    pieces: &[CutPiece],
    weld: &PanelWeld,
    times: &BTreeMap<String, PanelTime>,
    rates: &RateTables,
    fx_rate: f64,
) -> PanelCosts {
    let mut costs = PanelCosts::default();

    for (panel, rows) in group_by_panel(pieces) {
        let code = parse_panel_code(panel);
        let time = times.get(panel).copied().unwrap_or_default();
        let weld_mm = weld.get(panel).copied().unwrap_or(0);

        let (cost, usage) = panel_cost(rows, &code, weld_mm, &time, rates, fx_rate);
        costs.by_panel.insert(panel.to_string(), cost);
        costs.usage.insert(panel.to_string(), usage);
    }
    costs.total_usd = costs.by_panel.values().map(|c| c.total_usd).sum();

    costs
}
