//! Edge pieces: BH, BCP/CP and CE.

use super::{leading_dims, out_of_catalog, require_band, CutList};
use crate::error::Result;
use crate::model::{CutPiece, PanelCode, Profile};

/// Longest piece cut from one stock bar.
const MAX_EDGE_LENGTH_MM: u32 = 5850;

/// BH `[width, length]`. Only the 120 and 150 sections exist.
pub(super) fn brace_header(code: &PanelCode, quantity: u32) -> Result<Vec<CutPiece>> {
    let [width, length] = leading_dims::<2>(code)?;
    let profile = match width {
        120 => Profile::Bh120,
        150 => Profile::Bh150,
        _ => return Err(out_of_catalog(code, "width", width)),
    };
    require_band(code, "length", length, 100, MAX_EDGE_LENGTH_MM)?;

    let mut list = CutList::new(code, quantity);
    list.add(profile, 1, length)
        .add(Profile::RefuerzoChico, length / 500 + 1, width - 20);
    list.finish()
}

/// BCP and CP `[width, length]`.
pub(super) fn base_closure_plate(code: &PanelCode, quantity: u32) -> Result<Vec<CutPiece>> {
    let [width, length] = leading_dims::<2>(code)?;
    require_band(code, "width", width, 100, 600)?;
    require_band(code, "length", length, 100, MAX_EDGE_LENGTH_MM)?;

    let mut list = CutList::new(code, quantity);
    list.add(Profile::Bcpn, 1, length)
        .add(Profile::RefuerzoChico, length / 600, width - 30)
        .add(Profile::BastidorLosa54, 2, width);
    list.finish()
}

/// Rib count and rib length of a ceiling edge, by height band.
fn ceiling_ribs(height: u32) -> (u32, u32) {
    match height {
        0..=599 => (1, height / 2),
        600..=899 => (2, height / 3),
        900..=1199 => (3, (300 + (height - 300) / 2) / 2),
        _ => (4, height / 5),
    }
}

/// CE `[width, height]`.
pub(super) fn ceiling_edge(code: &PanelCode, quantity: u32) -> Result<Vec<CutPiece>> {
    let [width, height] = leading_dims::<2>(code)?;
    require_band(code, "width", width, 100, 600)?;
    require_band(code, "height", height, 100, 1500)?;
    let (ribs, rib_length) = ceiling_ribs(height);

    let mut list = CutList::new(code, quantity);
    list.add(Profile::AlaLosa, 2, height)
        .add(Profile::RefuerzoGrande, ribs, rib_length)
        .add(Profile::BastidorLosa50, 2, width);
    list.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use crate::parser::parse_panel_code;
    use pretty_assertions::assert_eq;

    fn rows(pieces: Result<Vec<CutPiece>>) -> Vec<(Profile, u32, u32)> {
        pieces
            .expect("Should decompose")
            .into_iter()
            .map(|p| (p.profile, p.piece_count, p.piece_length_mm))
            .collect()
    }

    // ==================== BH tests ====================

    #[test]
    fn test_brace_header() {
        let code = parse_panel_code("BH150X1500");
        assert_eq!(
            rows(brace_header(&code, 2)),
            vec![(Profile::Bh150, 2, 1500), (Profile::RefuerzoChico, 8, 130)]
        );
    }

    #[test]
    fn test_brace_header_sections() {
        let ok = parse_panel_code("BH120X5850");
        assert_eq!(rows(brace_header(&ok, 1))[0], (Profile::Bh120, 1, 5850));

        for code in ["BH130X1500", "BH120X5851", "BH120X99"] {
            let err = brace_header(&parse_panel_code(code), 1).unwrap_err();
            assert_eq!(err.code(), ErrorCode::OutOfCatalog, "{code}");
        }
    }

    // ==================== BCP tests ====================

    #[test]
    fn test_base_closure_plate() {
        let code = parse_panel_code("BCP300X1200");
        assert_eq!(
            rows(base_closure_plate(&code, 1)),
            vec![
                (Profile::Bcpn, 1, 1200),
                (Profile::RefuerzoChico, 2, 270),
                (Profile::BastidorLosa54, 2, 300),
            ]
        );
    }

    #[test]
    fn test_short_plate_has_no_ribs() {
        let code = parse_panel_code("CP300X599");
        assert_eq!(
            rows(base_closure_plate(&code, 1)),
            vec![(Profile::Bcpn, 1, 599), (Profile::BastidorLosa54, 2, 300)]
        );
    }

    // ==================== CE tests ====================

    #[test]
    fn test_ceiling_ribs_bands() {
        assert_eq!(ceiling_ribs(100), (1, 50));
        assert_eq!(ceiling_ribs(599), (1, 299));
        assert_eq!(ceiling_ribs(600), (2, 200));
        assert_eq!(ceiling_ribs(899), (2, 299));
        assert_eq!(ceiling_ribs(900), (3, 300));
        assert_eq!(ceiling_ribs(1000), (3, 325));
        assert_eq!(ceiling_ribs(1199), (3, 374));
        assert_eq!(ceiling_ribs(1200), (4, 240));
        assert_eq!(ceiling_ribs(1500), (4, 300));
    }

    #[test]
    fn test_ceiling_edge() {
        let code = parse_panel_code("CE600X1000");
        assert_eq!(
            rows(ceiling_edge(&code, 1)),
            vec![
                (Profile::AlaLosa, 2, 1000),
                (Profile::RefuerzoGrande, 3, 325),
                (Profile::BastidorLosa50, 2, 600),
            ]
        );
    }

    #[test]
    fn test_ceiling_edge_height_limit() {
        let err = ceiling_edge(&parse_panel_code("CE600X1501"), 1).unwrap_err();
        assert_eq!(err.code(), ErrorCode::OutOfCatalog);
    }
}
