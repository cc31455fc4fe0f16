//! Wall and slab frames: WF, SF and MF.

use super::{
    leading_dims, out_of_catalog, require_band, CutList, DIAGONAL_BRACE_EXTRA_MM,
    LARGE_RIB_CLEARANCE_MM, SMALL_RIB_CLEARANCE_MM,
};
use crate::error::Result;
use crate::model::{CutPiece, PanelCode, Profile};

/// Fixed length of the WF transverse ribs.
const WIDE_FRAME_RIB_MM: u32 = 470;

/// Ribs per WF panel.
const WIDE_FRAME_RIBS: u32 = 6;

/// Height of the first SF rib.
const SLIM_FIRST_RIB_MM: u32 = 280;
const SLIM_SMALL_STEP_MM: u32 = 140;
const SLIM_FIRST_LARGE_STEP_MM: u32 = 79;
const SLIM_LARGE_STEP_MM: u32 = 160;

/// MF rib pitch.
const MID_RIB_PITCH_MM: u32 = 300;

/// Rib counts along a slim frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SlimBraces {
    pub large: u32,
    pub small: u32,
}

/// Walk the height of a slim frame, alternating small and large steps.
///
/// A small step adds a small rib. A large step turns the last small rib into
/// a large one.
pub fn slim_frame_braces(height: u32) -> SlimBraces {
    let mut braces = SlimBraces::default();
    let mut offset = SLIM_FIRST_RIB_MM;
    let mut large_next = false;
    let mut first_large = true;

    while offset < height {
        if large_next {
            offset += if first_large {
                SLIM_FIRST_LARGE_STEP_MM
            } else {
                SLIM_LARGE_STEP_MM
            };
            first_large = false;
            braces.large += 1;
            braces.small = braces.small.saturating_sub(1);
        } else {
            offset += SLIM_SMALL_STEP_MM;
            braces.small += 1;
        }
        large_next = !large_next;
    }

    braces
}

/// Rib layout of a mid frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MidBraces {
    /// Full-width ribs on the 300 mm pitch.
    pub large: u32,
    /// Length of the two stubs splitting the residual gap.
    pub stub_mm: u32,
}

pub fn mid_frame_braces(height: u32) -> MidBraces {
    let mut offset = 0;
    let mut large = 0;
    while offset + MID_RIB_PITCH_MM < height {
        offset += MID_RIB_PITCH_MM;
        large += 1;
    }
    MidBraces {
        large,
        stub_mm: (height - offset) / 2,
    }
}

/// WF `[width, height]`. The corner brace layout depends on the width band.
pub(super) fn wide_frame(code: &PanelCode, quantity: u32) -> Result<Vec<CutPiece>> {
    let [width, height] = leading_dims::<2>(code)?;
    let mut list = CutList::new(code, quantity);

    match width {
        100..=300 => {
            list.add(Profile::AlaMuro, 2, height)
                .add(Profile::RefuerzoChico, 1, width - LARGE_RIB_CLEARANCE_MM);
        }
        301..=399 => {
            list.add(Profile::AlaMuro, 2, height)
                .add(Profile::RefuerzoChico, 2, width - LARGE_RIB_CLEARANCE_MM);
        }
        400..=579 => {
            list.add(Profile::AlaMuro, 2, height).add(
                Profile::RefuerzoGrande,
                1,
                width + DIAGONAL_BRACE_EXTRA_MM,
            );
        }
        580..=600 => {
            list.add(Profile::AlaMuro, 2, height)
                .add(
                    Profile::RefuerzoGrande,
                    1,
                    width + DIAGONAL_BRACE_EXTRA_MM,
                )
                .add(Profile::RefuerzoChico, 1, width - LARGE_RIB_CLEARANCE_MM);
        }
        _ => return Err(out_of_catalog(code, "width", width)),
    }

    list.add(Profile::RefuerzoGrande, 1, width - LARGE_RIB_CLEARANCE_MM)
        .add(Profile::RefuerzoGrande, WIDE_FRAME_RIBS, WIDE_FRAME_RIB_MM)
        .add(Profile::BastidorMuro50, 2, width);

    list.finish()
}

/// SF `[width, height]`.
pub(super) fn slim_frame(code: &PanelCode, quantity: u32) -> Result<Vec<CutPiece>> {
    let [width, height] = leading_dims::<2>(code)?;
    require_band(code, "width", width, 100, 600)?;
    require_band(code, "height", height, 100, 2249)?;

    let braces = slim_frame_braces(height);
    let mut list = CutList::new(code, quantity);
    list.add(Profile::AlaMuro, 2, height);
    if width > 450 {
        list.add(
            Profile::RefuerzoGrande,
            1,
            width + DIAGONAL_BRACE_EXTRA_MM,
        );
    }
    list.add(
        Profile::RefuerzoGrande,
        braces.large,
        width - LARGE_RIB_CLEARANCE_MM,
    )
    .add(
        Profile::RefuerzoChico,
        braces.small,
        width - SMALL_RIB_CLEARANCE_MM,
    )
    .add(Profile::BastidorMuro50, 2, width);

    list.finish()
}

/// MF `[width, height]`. Stubs are small ribs on narrow frames. A walk that
/// leaves no residual has no stubs.
pub(super) fn mid_frame(code: &PanelCode, quantity: u32) -> Result<Vec<CutPiece>> {
    let [width, height] = leading_dims::<2>(code)?;
    require_band(code, "width", width, 100, 600)?;
    require_band(code, "height", height, 100, 2100)?;

    let braces = mid_frame_braces(height);
    let stub = if width < 400 {
        Profile::RefuerzoChico
    } else {
        Profile::RefuerzoGrande
    };

    let mut list = CutList::new(code, quantity);
    list.add(Profile::AlaLosa, 2, height)
        .add(
            Profile::RefuerzoGrande,
            braces.large,
            width - LARGE_RIB_CLEARANCE_MM,
        )
        .add(Profile::RefuerzoChico, 1, width - SMALL_RIB_CLEARANCE_MM);
    if braces.stub_mm > 0 {
        list.add(stub, 2, braces.stub_mm);
    }
    list.add(Profile::BastidorLosa50, 2, width);

    list.finish()
}
