//! Corner pieces: IC, OC and CS.

use super::{leading_dims, require_band, CutList, LARGE_RIB_CLEARANCE_MM};
use crate::error::Result;
use crate::model::{CutPiece, PanelCode, Profile};

/// Length of the CS spacer tubes.
const SUPPORT_TUBE_MM: u32 = 47;

/// Number of rib stations along a corner support of `height`.
///
/// Stations start at 100 mm; the pitch is 400 twice, then alternates 300/400.
pub fn corner_support_steps(height: u32) -> u32 {
    let mut offset = 100;
    let mut steps = 0;
    let mut step = 400;
    while offset < height {
        offset += step;
        steps += 1;
        step = if steps == 1 || step == 300 { 400 } else { 300 };
    }
    steps
}

fn corner_dims(code: &PanelCode) -> Result<[u32; 3]> {
    let dims = leading_dims::<3>(code)?;
    let [width, height, length] = dims;
    require_band(code, "width", width, 100, 300)?;
    require_band(code, "height", height, 100, 300)?;
    require_band(code, "length", length, 100, 3000)?;
    Ok(dims)
}

/// IC `[width, height, length]`.
pub(super) fn inner_corner(code: &PanelCode, quantity: u32) -> Result<Vec<CutPiece>> {
    let [width, height, length] = corner_dims(code)?;

    let mut list = CutList::new(code, quantity);
    list.add(Profile::Icn, 1, length)
        .add(Profile::Icn, length / 300 + 1, (width + height) / 2 - 20);
    list.finish()
}

/// OC `[width, height, length]`. The zero-length OCN row counts bracing clips.
pub(super) fn outer_corner(code: &PanelCode, quantity: u32) -> Result<Vec<CutPiece>> {
    let [width, height, length] = corner_dims(code)?;
    let stations = length / 400 + 1;

    let mut list = CutList::new(code, quantity);
    list.add(Profile::Ocn, 1, length)
        .add(Profile::RefuerzoChico, stations, width + height - 40)
        .add(Profile::Ocn, stations, 0);
    list.finish()
}

/// CS `[width, height]`.
pub(super) fn corner_support(code: &PanelCode, quantity: u32) -> Result<Vec<CutPiece>> {
    let [width, height] = leading_dims::<2>(code)?;
    require_band(code, "width", width, 100, 600)?;
    require_band(code, "height", height, 100, 3000)?;
    let steps = corner_support_steps(height);

    let mut list = CutList::new(code, quantity);
    list.add(Profile::BastidorMuro54, 2, height)
        .add(Profile::RefuerzoGrande, steps, width - LARGE_RIB_CLEARANCE_MM)
        .add(Profile::Tubo, 2 * steps, SUPPORT_TUBE_MM);
    list.finish()
}
