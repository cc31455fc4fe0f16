//! Closure strips: CL and the inset CLI/CLE variants.

use super::{leading_dims, out_of_catalog, CutList};
use crate::error::Result;
use crate::model::{CutPiece, PanelCode, Profile};

/// Length covered by one closure strip rib.
const RIB_SPAN_MM: u32 = 600;

/// Strip profile for a cross-section. `None` when the section is not stocked.
fn strip_profile(width: u32, height: u32) -> Option<Profile> {
    match (height, width) {
        (50, _) => Some(Profile::Cln50),
        (70, _) => Some(Profile::Cln70),
        (100, _) => Some(Profile::Cln100),
        (150, 70) => Some(Profile::Cln70),
        _ => None,
    }
}

/// Transverse ribs of a strip of total length `length` with inset legs `a`
/// and `b` (both 0 for a straight strip).
pub fn reinforcement_count(length: u32, a: u32, b: u32) -> u32 {
    // 2 + floor(length / 600 - 1), then one more per full span of each leg
    1 + length / RIB_SPAN_MM + a / RIB_SPAN_MM + b / RIB_SPAN_MM
}

/// CL `[width, height, length]` or CLI/CLE `[width, height, a, b]`.
pub(super) fn closure_strip(code: &PanelCode, quantity: u32, inset: bool) -> Result<Vec<CutPiece>> {
    let (width, height, a, b) = if inset {
        let [width, height, a, b] = leading_dims::<4>(code)?;
        (width, height, a, b)
    } else {
        let [width, height, length] = leading_dims::<3>(code)?;
        (width, height, length, 0)
    };
    let profile = strip_profile(width, height).ok_or_else(|| out_of_catalog(code, "height", height))?;

    let mut list = CutList::new(code, quantity);
    let ribs = if inset {
        list.add(profile, 1, a).add(profile, 1, b);
        reinforcement_count(a.saturating_add(b), a, b)
    } else {
        list.add(profile, 1, a);
        reinforcement_count(a, 0, 0)
    };
    list.add(profile, ribs, width);

    list.finish()
}
