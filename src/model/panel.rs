//! Panel codes, panel types and order lines.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Panel type variants of the catalog, one per accepted type tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum PanelType {
    /// WF - wide wall frame.
    WideFrame,
    /// SF - slim wall frame.
    SlimFrame,
    /// MF - mid slab frame.
    MidFrame,
    /// CL - closure strip.
    ClosureStrip,
    /// CLI - closure strip, inner inset.
    ClosureStripInner,
    /// CLE - closure strip, outer inset.
    ClosureStripOuter,
    /// IC - inner corner.
    InnerCorner,
    /// OC - outer corner.
    OuterCorner,
    /// BH - brace header.
    BraceHeader,
    /// BCP - base closure plate.
    BaseClosurePlate,
    /// CP - short spelling of the base closure plate, same rule.
    ClosurePlate,
    /// CE - ceiling edge.
    CeilingEdge,
    /// CS - corner support.
    CornerSupport,
}

impl PanelType {
    /// All panel types.
    pub const ALL: [PanelType; 13] = [
        PanelType::WideFrame,
        PanelType::SlimFrame,
        PanelType::MidFrame,
        PanelType::ClosureStrip,
        PanelType::ClosureStripInner,
        PanelType::ClosureStripOuter,
        PanelType::InnerCorner,
        PanelType::OuterCorner,
        PanelType::BraceHeader,
        PanelType::BaseClosurePlate,
        PanelType::ClosurePlate,
        PanelType::CeilingEdge,
        PanelType::CornerSupport,
    ];

    /// Canonical type tag.
    pub fn tag(&self) -> &'static str {
        match self {
            PanelType::WideFrame => "WF",
            PanelType::SlimFrame => "SF",
            PanelType::MidFrame => "MF",
            PanelType::ClosureStrip => "CL",
            PanelType::ClosureStripInner => "CLI",
            PanelType::ClosureStripOuter => "CLE",
            PanelType::InnerCorner => "IC",
            PanelType::OuterCorner => "OC",
            PanelType::BraceHeader => "BH",
            PanelType::BaseClosurePlate => "BCP",
            PanelType::ClosurePlate => "CP",
            PanelType::CeilingEdge => "CE",
            PanelType::CornerSupport => "CS",
        }
    }

    /// Look up a canonical tag.
    pub fn from_tag(tag: &str) -> Option<Self> {
        PanelType::ALL.iter().copied().find(|t| t.tag() == tag)
    }

    /// Whether this is one of the inset closure strips.
    pub fn is_inset(&self) -> bool {
        matches!(
            self,
            PanelType::ClosureStripInner | PanelType::ClosureStripOuter
        )
    }
}

impl fmt::Display for PanelType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// A parsed panel identifier.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PanelCode {
    /// Canonical type tag (aliases resolved), empty when the code has no prefix.
    pub type_tag: String,
    /// Code truncated at the first `-`.
    pub base_code: String,
    /// Every maximal digit run of the base code, left to right.
    pub dims: Vec<u32>,
    /// Base code split on `x`/`X`.
    pub tokens: Vec<String>,
}

impl PanelCode {
    /// Resolve the type tag against the catalog.
    pub fn panel_type(&self) -> Option<PanelType> {
        PanelType::from_tag(&self.type_tag)
    }

    /// Dimension at `index`, if present.
    pub fn dim(&self, index: usize) -> Option<u32> {
        self.dims.get(index).copied()
    }
}

/// One aggregated order line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderLine {
    /// Normalized base code.
    pub base_code: String,
    /// Number of panels ordered.
    pub quantity: u32,
}

impl OrderLine {
    /// Create a new order line.
    pub fn new(base_code: impl Into<String>, quantity: u32) -> Self {
        Self {
            base_code: base_code.into(),
            quantity,
        }
    }
}
