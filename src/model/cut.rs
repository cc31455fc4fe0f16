//! Cut list rows and per-profile totals.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::Profile;

/// One row of a cut list: `piece_count` pieces of one length from one profile.
///
/// A row with `piece_length_mm == 0` is a hardware-like count that uses no
/// linear stock.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CutPiece {
    /// Base code of the panel this row belongs to.
    pub panel: String,
    /// Profile the pieces are cut from.
    pub profile: Profile,
    /// Number of pieces (already scaled by the order quantity).
    pub piece_count: u32,
    /// Length of each piece.
    pub piece_length_mm: u32,
    /// `piece_count * piece_length_mm`.
    pub total_length_mm: u64,
}

impl CutPiece {
    /// Create a new row, deriving the total length.
    pub fn new(
        panel: impl Into<String>,
        profile: Profile,
        piece_count: u32,
        piece_length_mm: u32,
    ) -> Self {
        Self {
            panel: panel.into(),
            profile,
            piece_count,
            piece_length_mm,
            total_length_mm: u64::from(piece_count) * u64::from(piece_length_mm),
        }
    }

    /// Whether the row consumes linear stock.
    pub fn uses_stock(&self) -> bool {
        self.piece_length_mm > 0 && self.piece_count > 0
    }
}

/// Piece count and length summed over every row of one profile.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileTotal {
    pub piece_count: u64,
    pub length_mm: u64,
}

/// Totals per profile, in report order.
pub type ProfileTotals = BTreeMap<Profile, ProfileTotal>;

/// Sum piece counts and lengths per profile.
pub fn profile_totals(pieces: &[CutPiece]) -> ProfileTotals {
    let mut totals = ProfileTotals::new();
    for piece in pieces {
        let entry = totals.entry(piece.profile).or_default();
        entry.piece_count += u64::from(piece.piece_count);
        entry.length_mm += piece.total_length_mm;
    }
    totals
}

/// Group rows by panel, keeping the order in which panels first appear.
pub fn group_by_panel(pieces: &[CutPiece]) -> Vec<(&str, Vec<&CutPiece>)> {
    let mut groups: Vec<(&str, Vec<&CutPiece>)> = Vec::new();
    for piece in pieces {
        match groups.iter_mut().find(|(panel, _)| *panel == piece.panel) {
            Some((_, rows)) => rows.push(piece),
            None => groups.push((piece.panel.as_str(), vec![piece])),
        }
    }
    groups
}

/// Total number of pieces in a set of rows.
pub fn piece_count<'a>(rows: impl IntoIterator<Item = &'a CutPiece>) -> u64 {
    rows.into_iter().map(|r| u64::from(r.piece_count)).sum()
}
