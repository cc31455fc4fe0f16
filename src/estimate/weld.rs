//! Weld seam length per panel line.

use std::collections::BTreeMap;

use crate::model::{group_by_panel, CutPiece, PanelCode, PanelType, Profile, ProfileFamily};
use crate::parser::parse_panel_code;

/// Weld length in mm, keyed by panel base code.
pub type PanelWeld = BTreeMap<String, u64>;

/// Seam run per rib station along a reinforcement.
const RIB_STATION_MM: u32 = 120;
const RIB_STATION_SEAM_MM: u64 = 100;
const SMALL_RIB_END_SEAMS_MM: u64 = 240;
const LARGE_RIB_END_SEAMS_MM: u64 = 400;
const BASE_FRAME_EXTRA_MM: u64 = 100;

/// Seam of one reinforcement piece.
fn rib_seam(length: u32, end_seams: u64) -> u64 {
    u64::from(length.div_ceil(RIB_STATION_MM)) * RIB_STATION_SEAM_MM + end_seams
}

/// Seam of one piece of a profile, excluding wings.
fn piece_seam(profile: Profile, length: u32) -> u64 {
    match profile.family() {
        ProfileFamily::BaseFrame => u64::from(length) + BASE_FRAME_EXTRA_MM,
        ProfileFamily::SmallReinforcement => rib_seam(length, SMALL_RIB_END_SEAMS_MM),
        ProfileFamily::LargeReinforcement => rib_seam(length, LARGE_RIB_END_SEAMS_MM),
        ProfileFamily::ClosureStrip if profile == Profile::Cln50 => 270,
        ProfileFamily::ClosureStrip => 250,
        ProfileFamily::InnerCorner => 300,
        ProfileFamily::Coupling => 157,
        ProfileFamily::Wing | ProfileFamily::Plain => 0,
    }
}

/// Doubled when `governing > 150`.
fn doubled_over_150(governing: u32, base: u32) -> u64 {
    if governing > 150 {
        2 * u64::from(base)
    } else {
        u64::from(base)
    }
}

/// Fixed seams added once per panel line.
fn type_extra(code: &PanelCode) -> u64 {
    let dim = |i| code.dim(i).unwrap_or(0);
    match code.panel_type() {
        Some(PanelType::ClosureStripInner | PanelType::ClosureStripOuter) => 470,
        Some(PanelType::WideFrame) => 300,
        Some(PanelType::CornerSupport) => doubled_over_150(dim(1), dim(0)),
        Some(PanelType::BaseClosurePlate | PanelType::ClosurePlate) => {
            doubled_over_150(dim(0), dim(0))
        }
        Some(PanelType::CeilingEdge) => {
            let width = dim(0);
            let edge = if width == 600 { 600 } else { 0 };
            doubled_over_150(width, width) + edge
        }
        Some(PanelType::InnerCorner) => {
            doubled_over_150(dim(0).max(dim(1)), dim(2))
        }
        _ => 0,
    }
}

/// Total weld length of one panel line.
///
/// `rows` are the cut list rows of that line, already scaled by quantity. The
/// first wing row counts its length once; every other row counts per piece.
pub fn weld_length<'a>(rows: impl IntoIterator<Item = &'a CutPiece>, code: &PanelCode) -> u64 {
    let mut wing_counted = false;
    let mut total = 0;

    for row in rows {
        if row.profile.family() == ProfileFamily::Wing {
            if !wing_counted {
                total += u64::from(row.piece_length_mm);
                wing_counted = true;
            }
            continue;
        }
        total += piece_seam(row.profile, row.piece_length_mm) * u64::from(row.piece_count);
    }

    total + type_extra(code)
}

/// Weld length of every panel line in a cut list.
pub fn weld_by_panel(pieces: &[CutPiece]) -> PanelWeld {
    group_by_panel(pieces)
        .into_iter()
        .map(|(panel, rows)| {
            let code = parse_panel_code(panel);
            (panel.to_string(), weld_length(rows, &code))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decompose::decompose;

    fn weld_of(code: &str, quantity: u32) -> u64 {
        let code = parse_panel_code(code);
        let rows = decompose(&code, quantity).expect("Should decompose");
        weld_length(&rows, &code)
    }

    #[test]
    fn test_rib_seam() {
        assert_eq!(rib_seam(470, SMALL_RIB_END_SEAMS_MM), 640);
        assert_eq!(rib_seam(480, LARGE_RIB_END_SEAMS_MM), 800);
        assert_eq!(rib_seam(481, LARGE_RIB_END_SEAMS_MM), 900);
    }

    #[test]
    fn test_reference_frames() {
        assert_eq!(weld_of("WF600X2250", 10), 90950);
        assert_eq!(weld_of("SF400X2000", 5), 33700);
    }

    #[test]
    fn test_wing_counted_once() {
        let code = parse_panel_code("WF600X2250");
        let rows = vec![
            CutPiece::new("WF600X2250", Profile::AlaMuro, 4, 2250),
            CutPiece::new("WF600X2250", Profile::AlaMuro, 2, 1000),
        ];
        assert_eq!(weld_length(&rows, &code), 2250 + 300);
    }

    #[test]
    fn test_closure_strip_seams() {
        // 1 x CLN50 600, 1 x 900, 5 ribs, plus the inset extra
        assert_eq!(weld_of("CLI100X50X600X900", 1), 7 * 270 + 470);
        assert_eq!(weld_of("CL70X70X1200", 1), 4 * 250);
    }

    #[test]
    fn test_type_extras() {
        assert_eq!(type_extra(&parse_panel_code("CS300X1500")), 600);
        assert_eq!(type_extra(&parse_panel_code("CS300X150")), 300);
        assert_eq!(type_extra(&parse_panel_code("BCP150X1200")), 150);
        assert_eq!(type_extra(&parse_panel_code("CP151X1200")), 302);
        assert_eq!(type_extra(&parse_panel_code("CE600X1000")), 1800);
        assert_eq!(type_extra(&parse_panel_code("CE599X1000")), 1198);
        assert_eq!(type_extra(&parse_panel_code("IC150X150X2400")), 2400);
        assert_eq!(type_extra(&parse_panel_code("IC150X151X2400")), 4800);
        assert_eq!(type_extra(&parse_panel_code("OC150X151X2400")), 0);
        assert_eq!(type_extra(&parse_panel_code("ZZ1X1")), 0);
    }

    #[test]
    fn test_plain_profiles_have_no_seam() {
        assert_eq!(piece_seam(Profile::Ocn, 1200), 0);
        assert_eq!(piece_seam(Profile::Bh150, 1200), 0);
        assert_eq!(piece_seam(Profile::Tubo, 47), 157);
    }

    #[test]
    fn test_weld_by_panel() {
        let code = parse_panel_code("WF600X2250");
        let mut pieces = decompose(&code, 10).unwrap();
        pieces.extend(decompose(&parse_panel_code("SF400X2000"), 5).unwrap());

        let weld = weld_by_panel(&pieces);
        assert_eq!(weld.len(), 2);
        assert_eq!(weld["WF600X2250"], 90950);
        assert_eq!(weld["SF400X2000"], 33700);
    }
}
