//! Data model types for panel takeoff.

mod cut;
mod panel;
mod profile;

pub use cut::{group_by_panel, piece_count, profile_totals, CutPiece, ProfileTotal, ProfileTotals};
pub use panel::{OrderLine, PanelCode, PanelType};
pub use profile::{Profile, ProfileFamily};
