//! Stock bar planning by first-fit decreasing.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::{debug, warn};

use crate::model::{CutPiece, Profile};

/// Bars consumed for one profile.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockPlan {
    pub bars_needed: u64,
    /// Offcut left over in all bars.
    pub waste_mm: u64,
}

/// Stock plan per profile, in report order.
pub type RawMaterialPlan = BTreeMap<Profile, StockPlan>;

/// Pack piece lengths into bars of `stock_length_mm`.
///
/// Pieces are placed longest first into the first open bar with room left,
/// opening a new bar when none fits. Zero-length pieces are ignored. A piece
/// longer than a bar takes a bar of its own with no offcut.
pub fn plan_profile(lengths: &[u32], stock_length_mm: u32) -> StockPlan {
    let mut sorted: Vec<u32> = lengths.iter().copied().filter(|&l| l > 0).collect();
    sorted.sort_unstable_by(|a, b| b.cmp(a));

    let mut remaining: Vec<u32> = Vec::new();
    for length in sorted {
        match remaining.iter_mut().find(|room| **room >= length) {
            Some(room) => *room -= length,
            None => {
                if length > stock_length_mm {
                    warn!(
                        "Piece of {} mm is longer than a {} mm bar",
                        length, stock_length_mm
                    );
                }
                remaining.push(stock_length_mm.saturating_sub(length));
            }
        }
    }

    StockPlan {
        bars_needed: remaining.len() as u64,
        waste_mm: remaining.iter().map(|&r| u64::from(r)).sum(),
    }
}

/// Plan every profile of a cut list. Profiles share no stock, so they are
/// planned in parallel.
pub fn plan_stock(pieces: &[CutPiece], stock_length_mm: u32) -> RawMaterialPlan {
    let mut lengths: BTreeMap<Profile, Vec<u32>> = BTreeMap::new();
    for piece in pieces.iter().filter(|p| p.uses_stock()) {
        lengths
            .entry(piece.profile)
            .or_default()
            .extend(std::iter::repeat(piece.piece_length_mm).take(piece.piece_count as usize));
    }

    lengths
        .par_iter()
        .map(|(profile, profile_lengths)| {
            let plan = plan_profile(profile_lengths, stock_length_mm);
            debug!(
                "{}: {} piece(s) on {} bar(s), {} mm waste",
                profile,
                profile_lengths.len(),
                plan.bars_needed,
                plan.waste_mm
            );
            (*profile, plan)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decompose::decompose;
    use crate::parser::parse_panel_code;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_first_fit_decreasing() {
        let plan = plan_profile(&[2000, 2250, 2000, 2250, 2000], 5850);
        // 2250+2250 | 2000+2000 | 2000
        assert_eq!(
            plan,
            StockPlan {
                bars_needed: 3,
                waste_mm: 1350 + 1850 + 3850
            }
        );
    }

    #[test]
    fn test_first_matching_bar_wins() {
        // 3000 | 2900, then 2800 fits the first bar
        let plan = plan_profile(&[3000, 2900, 2800], 5850);
        assert_eq!(plan.bars_needed, 2);
        assert_eq!(plan.waste_mm, 50 + 2950);
    }

    #[test]
    fn test_zero_lengths_excluded() {
        assert_eq!(plan_profile(&[0, 0], 5850), StockPlan::default());
        assert_eq!(plan_profile(&[], 5850), StockPlan::default());
    }

    #[test]
    fn test_exact_fill() {
        let plan = plan_profile(&[2925, 2925], 5850);
        assert_eq!(plan, StockPlan { bars_needed: 1, waste_mm: 0 });
    }

    #[test]
    fn test_oversized_piece() {
        let plan = plan_profile(&[6000, 100], 5850);
        assert_eq!(plan, StockPlan { bars_needed: 2, waste_mm: 5750 });
    }

    #[test]
    fn test_conservation() {
        let lengths = [1234, 987, 4321, 5850, 17, 2999, 2999, 600, 600, 600];
        let plan = plan_profile(&lengths, 5850);
        let total: u64 = lengths.iter().map(|&l| u64::from(l)).sum();
        assert_eq!(plan.bars_needed * 5850, total + plan.waste_mm);
    }

    #[test]
    fn test_reference_plan() {
        let mut pieces = decompose(&parse_panel_code("WF600X2250"), 10).unwrap();
        pieces.extend(decompose(&parse_panel_code("SF400X2000"), 5).unwrap());
        let plan = plan_stock(&pieces, 5850);

        assert_eq!(plan[&Profile::AlaMuro], StockPlan { bars_needed: 15, waste_mm: 22750 });
        assert_eq!(plan[&Profile::RefuerzoGrande], StockPlan { bars_needed: 10, waste_mm: 6320 });
        assert_eq!(plan[&Profile::RefuerzoChico], StockPlan { bars_needed: 2, waste_mm: 4410 });
        assert_eq!(plan[&Profile::BastidorMuro50], StockPlan { bars_needed: 3, waste_mm: 1550 });
        assert_eq!(plan.len(), 4);
    }

    #[test]
    fn test_hardware_rows_skip_planning() {
        let pieces = decompose(&parse_panel_code("OC100X100X1200"), 1).unwrap();
        let plan = plan_stock(&pieces, 5850);
        assert_eq!(plan[&Profile::Ocn], StockPlan { bars_needed: 1, waste_mm: 4650 });
    }
}
