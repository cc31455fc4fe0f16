//! Fabrication time per panel line.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::PanelWeld;
use crate::config::{Phase, RateTables};
use crate::model::{group_by_panel, piece_count, CutPiece};
use crate::parser::parse_panel_code;

/// Minutes per phase for one panel line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PanelTime {
    pub cut_min: f64,
    pub weld_min: f64,
    pub drill_min: f64,
    /// `cut_min + weld_min + drill_min`.
    pub total_min: f64,
}

impl PanelTime {
    pub fn new(cut_min: f64, weld_min: f64, drill_min: f64) -> Self {
        Self {
            cut_min,
            weld_min,
            drill_min,
            total_min: cut_min + weld_min + drill_min,
        }
    }

    /// Minutes spent in `phase`.
    pub fn phase(&self, phase: Phase) -> f64 {
        match phase {
            Phase::Cut => self.cut_min,
            Phase::Weld => self.weld_min,
            Phase::Drill => self.drill_min,
        }
    }
}

/// Times of every panel line plus the order total.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PanelTimes {
    pub by_panel: BTreeMap<String, PanelTime>,
    pub total_min: f64,
}

impl PanelTimes {
    /// Build from per-panel times, deriving the total.
    pub fn from_panels(by_panel: BTreeMap<String, PanelTime>) -> Self {
        let total_min = by_panel.values().map(|t| t.total_min).sum();
        Self {
            by_panel,
            total_min,
        }
    }
}

/// Estimate cut, weld and drill minutes for every panel line.
///
/// Panels missing from `weld` get no weld time.
pub fn estimate_times(pieces: &[CutPiece], weld: &PanelWeld, rates: &RateTables) -> PanelTimes {
    let by_panel = group_by_panel(pieces)
        .into_iter()
        .map(|(panel, rows)| {
            let count = piece_count(rows.iter().copied()) as f64;
            let type_tag = parse_panel_code(panel).type_tag;

            let cut_min = count * rates.cut_minutes_per_piece;
            let weld_mm = weld.get(panel).copied().unwrap_or(0) as f64;
            let weld_min = if rates.weld_speed_mm_per_min > 0.0 {
                weld_mm / rates.weld_speed_mm_per_min
            } else {
                0.0
            };
            let drill_min = count * rates.drill_minutes(&type_tag);

            (panel.to_string(), PanelTime::new(cut_min, weld_min, drill_min))
        })
        .collect();

    PanelTimes::from_panels(by_panel)
}
