//! Decomposition of panels into cut lists.
//!
//! Each panel type has one pure rule function. Dispatch is an exhaustive
//! match on [`PanelType`], so an unknown tag can only come from the parser.

mod closure;
mod corners;
mod edges;
mod frames;

use crate::error::{Result, TakeoffError};
use crate::model::{CutPiece, OrderLine, PanelCode, PanelType, Profile};
use crate::parser::{merge_order_lines, parse_panel_code};
use crate::validation::{validate_order_lines, Diagnostics};
use tracing::{debug, warn};

pub use closure::reinforcement_count;
pub use corners::corner_support_steps;
pub use frames::{mid_frame_braces, slim_frame_braces, MidBraces, SlimBraces};

/// Large rib clearance: ribs sized to a frame are `width - 28`.
pub const LARGE_RIB_CLEARANCE_MM: u32 = 28;

/// Small rib clearance: small ribs are `width - 86`.
pub const SMALL_RIB_CLEARANCE_MM: u32 = 86;

/// Diagonal corner braces are `width + 110`.
pub const DIAGONAL_BRACE_EXTRA_MM: u32 = 110;

/// Decompose one panel into its cut list, scaled by `quantity`.
pub fn decompose(code: &PanelCode, quantity: u32) -> Result<Vec<CutPiece>> {
    let panel_type = code
        .panel_type()
        .ok_or_else(|| TakeoffError::UnrecognizedPanelType {
            code: code.base_code.clone(),
            tag: code.type_tag.clone(),
        })?;

    match panel_type {
        PanelType::WideFrame => frames::wide_frame(code, quantity),
        PanelType::SlimFrame => frames::slim_frame(code, quantity),
        PanelType::MidFrame => frames::mid_frame(code, quantity),
        PanelType::ClosureStrip | PanelType::ClosureStripInner | PanelType::ClosureStripOuter => {
            closure::closure_strip(code, quantity, panel_type.is_inset())
        }
        PanelType::InnerCorner => corners::inner_corner(code, quantity),
        PanelType::OuterCorner => corners::outer_corner(code, quantity),
        PanelType::CornerSupport => corners::corner_support(code, quantity),
        PanelType::BraceHeader => edges::brace_header(code, quantity),
        PanelType::BaseClosurePlate | PanelType::ClosurePlate => {
            edges::base_closure_plate(code, quantity)
        }
        PanelType::CeilingEdge => edges::ceiling_edge(code, quantity),
    }
}

/// Decompose every order line.
///
/// Lines that fail are skipped with a diagnostic; the rest of the order is
/// still decomposed.
pub fn decompose_order(lines: &[OrderLine]) -> (Vec<CutPiece>, Diagnostics) {
    let (lines, mut diagnostics) = validate_order_lines(&merge_order_lines(lines));
    let mut pieces = Vec::new();

    for line in &lines {
        let code = parse_panel_code(&line.base_code);
        match decompose(&code, line.quantity) {
            Ok(rows) => {
                debug!(
                    "{} x{}: {} cut list row(s)",
                    line.base_code,
                    line.quantity,
                    rows.len()
                );
                pieces.extend(rows);
            }
            Err(err) => {
                warn!("Skipping {}: {}", line.base_code, err);
                diagnostics.add_skipped(&line.base_code, &err);
            }
        }
    }

    (pieces, diagnostics)
}

/// Cut list under construction for one panel line.
struct CutList<'a> {
    code: &'a PanelCode,
    quantity: u32,
    rows: Vec<CutPiece>,
    overflowed: bool,
}

impl<'a> CutList<'a> {
    fn new(code: &'a PanelCode, quantity: u32) -> Self {
        Self {
            code,
            quantity,
            rows: Vec::new(),
            overflowed: false,
        }
    }

    /// Add `per_panel` pieces of `length` for every ordered panel.
    fn add(&mut self, profile: Profile, per_panel: u32, length: u32) -> &mut Self {
        match per_panel.checked_mul(self.quantity) {
            Some(0) => {}
            Some(count) => self
                .rows
                .push(CutPiece::new(&self.code.base_code, profile, count, length)),
            None => self.overflowed = true,
        }
        self
    }

    /// The rows, or `QuantityOverflow` when any count did not fit.
    fn finish(self) -> Result<Vec<CutPiece>> {
        if self.overflowed {
            return Err(TakeoffError::QuantityOverflow {
                code: self.code.base_code.clone(),
                quantity: self.quantity,
            });
        }
        Ok(self.rows)
    }
}

/// The first `N` dimensions of a code.
fn leading_dims<const N: usize>(code: &PanelCode) -> Result<[u32; N]> {
    if code.dims.len() < N {
        return Err(TakeoffError::MalformedDimensions {
            code: code.base_code.clone(),
            expected: N,
            found: code.dims.len(),
        });
    }
    let mut dims = [0; N];
    dims.copy_from_slice(&code.dims[..N]);
    Ok(dims)
}

fn out_of_catalog(code: &PanelCode, dimension: &'static str, value: u32) -> TakeoffError {
    TakeoffError::OutOfCatalog {
        code: code.base_code.clone(),
        dimension,
        value,
    }
}

/// Check that `value` lies in the closed band `min..=max`.
fn require_band(
    code: &PanelCode,
    dimension: &'static str,
    value: u32,
    min: u32,
    max: u32,
) -> Result<()> {
    if (min..=max).contains(&value) {
        Ok(())
    } else {
        Err(out_of_catalog(code, dimension, value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use crate::model::profile_totals;

    fn decompose_str(code: &str, quantity: u32) -> Result<Vec<CutPiece>> {
        decompose(&parse_panel_code(code), quantity)
    }

    #[test]
    fn test_unknown_type_is_recoverable_error() {
        let err = decompose_str("ZZ600X2250", 1).unwrap_err();
        assert_eq!(err.code(), ErrorCode::UnrecognizedPanelType);

        let err = decompose_str("600X2250", 1).unwrap_err();
        assert_eq!(err.code(), ErrorCode::UnrecognizedPanelType);
    }

    #[test]
    fn test_too_few_dimensions() {
        let err = decompose_str("WF600", 1).unwrap_err();
        match err {
            TakeoffError::MalformedDimensions {
                code,
                expected,
                found,
            } => {
                assert_eq!(code, "WF600");
                assert_eq!(expected, 2);
                assert_eq!(found, 1);
            }
            other => panic!("Expected MalformedDimensions, got {other:?}"),
        }
    }

    #[test]
    fn test_every_variant_dispatches() {
        let codes = [
            "WF600X2250",
            "SF400X2000",
            "MF500X1200",
            "CL70X70X1200",
            "CLI100X50X600X900",
            "CLE100X50X600X900",
            "IC150X150X2400",
            "OC100X100X1200",
            "BH120X1500",
            "BCP300X1200",
            "CP300X1200",
            "CE600X1000",
            "CS300X1500",
        ];
        for code in codes {
            let rows = decompose_str(code, 1).unwrap_or_else(|e| panic!("{code}: {e}"));
            assert!(!rows.is_empty(), "{code} produced no rows");
            assert!(rows.iter().all(|r| r.panel == code));
        }
    }

    #[test]
    fn test_total_length_invariant() {
        let (pieces, _) = decompose_order(&[
            OrderLine::new("WF450X1800", 3),
            OrderLine::new("OC150X100X1000", 2),
            OrderLine::new("CE600X1000", 4),
        ]);
        for piece in &pieces {
            assert_eq!(
                piece.total_length_mm,
                u64::from(piece.piece_count) * u64::from(piece.piece_length_mm)
            );
        }
    }

    #[test]
    fn test_quantity_split_keeps_totals() {
        let whole = decompose_str("SF500X1500", 7).unwrap();
        let mut split = decompose_str("SF500X1500", 3).unwrap();
        split.extend(decompose_str("SF500X1500", 4).unwrap());
        assert_eq!(profile_totals(&whole), profile_totals(&split));
    }

    #[test]
    fn test_decompose_order_skips_bad_lines() {
        let (pieces, diagnostics) = decompose_order(&[
            OrderLine::new("WF600X2250", 1),
            OrderLine::new("XX100X100", 2),
            OrderLine::new("WF700X2250", 1),
            OrderLine::new("SF400X2000", 1),
        ]);
        assert_eq!(diagnostics.skipped_codes(), vec!["XX100X100", "WF700X2250"]);
        assert!(pieces.iter().any(|p| p.panel == "WF600X2250"));
        assert!(pieces.iter().any(|p| p.panel == "SF400X2000"));
        assert!(!pieces.iter().any(|p| p.panel == "WF700X2250"));
    }

    #[test]
    fn test_piece_count_overflow_is_an_error() {
        let err = decompose_str("WF600X2250", 1_000_000_000).unwrap_err();
        assert_eq!(err.code(), ErrorCode::QuantityOverflow);

        // x6 ribs overflow first, x2 rows would still fit
        let rows = decompose_str("WF600X2250", u32::MAX / 6).unwrap();
        assert_eq!(rows[4].piece_count, u32::MAX / 6 * 6);
    }

    #[test]
    fn test_decompose_order_skips_overflowing_line() {
        let (pieces, diagnostics) = decompose_order(&[
            OrderLine::new("WF600X2250", 1_000_000_000),
            OrderLine::new("SF400X2000", 5),
        ]);
        assert_eq!(diagnostics.skipped_codes(), vec!["WF600X2250"]);
        assert_eq!(
            diagnostics.skipped[0].error_code,
            ErrorCode::QuantityOverflow as i32
        );
        assert!(pieces.iter().all(|p| p.panel == "SF400X2000"));
        assert!(!pieces.is_empty());
    }

    #[test]
    fn test_decompose_order_empty() {
        let (pieces, diagnostics) = decompose_order(&[]);
        assert!(pieces.is_empty());
        assert!(diagnostics.all_lines_used());
    }

    #[test]
    fn test_decompose_is_deterministic() {
        let lines = [
            OrderLine::new("CLI100X50X600X900", 2),
            OrderLine::new("CS300X1500", 3),
        ];
        assert_eq!(decompose_order(&lines), decompose_order(&lines));
    }
}
