//! Estimators run over a decomposed cut list.
//!
//! - `weld`: weld seam length per panel line
//! - `timing`: cut, weld and drill minutes
//! - `stock`: stock bars per profile
//! - `cost`: material, labor, consumables and energy

mod cost;
mod stock;
mod timing;
mod weld;

pub use cost::{
    estimate_costs, eyelet_count, panel_cost, ConsumableUsage, PanelCost, PanelCosts, UsageLine,
    ENERGY, EYELETS, RIVETS,
};
pub use stock::{plan_profile, plan_stock, RawMaterialPlan, StockPlan};
pub use timing::{estimate_times, PanelTime, PanelTimes};
pub use weld::{weld_by_panel, weld_length, PanelWeld};
