//! Aluminum profile catalog.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the 17 extrusion profiles kept as raw stock.
///
/// Declaration order is the shop's report order, so sorted maps keyed by
/// `Profile` list profiles the way the cut reports expect them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Profile {
    /// Slab panel side rail.
    #[serde(rename = "ALA_LOSA")]
    AlaLosa,
    /// Wall panel side rail.
    #[serde(rename = "ALA_MURO")]
    AlaMuro,
    #[serde(rename = "BASTIDOR_LOSA_50")]
    BastidorLosa50,
    #[serde(rename = "BASTIDOR_LOSA_54")]
    BastidorLosa54,
    #[serde(rename = "BASTIDOR_MURO_50")]
    BastidorMuro50,
    #[serde(rename = "BASTIDOR_MURO_54")]
    BastidorMuro54,
    /// Base closure plate body.
    #[serde(rename = "BCPN")]
    Bcpn,
    #[serde(rename = "BH120")]
    Bh120,
    #[serde(rename = "BH150")]
    Bh150,
    #[serde(rename = "CLN50")]
    Cln50,
    #[serde(rename = "CLN70")]
    Cln70,
    #[serde(rename = "CLN100")]
    Cln100,
    /// Inner corner angle.
    #[serde(rename = "ICN")]
    Icn,
    /// Outer corner angle.
    #[serde(rename = "OCN")]
    Ocn,
    /// Small cross rib.
    #[serde(rename = "REFUERZOCHICO")]
    RefuerzoChico,
    /// Large cross rib.
    #[serde(rename = "REFUERZOGRANDE")]
    RefuerzoGrande,
    /// Round tube, cut into couplings.
    #[serde(rename = "TUBO")]
    Tubo,
}

/// Weld behavior shared by a group of profiles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileFamily {
    Wing,
    BaseFrame,
    SmallReinforcement,
    LargeReinforcement,
    ClosureStrip,
    InnerCorner,
    Coupling,
    /// Bodies welded as part of other seams.
    Plain,
}

impl Profile {
    /// All profiles in report order.
    pub const ALL: [Profile; 17] = [
        Profile::AlaLosa,
        Profile::AlaMuro,
        Profile::BastidorLosa50,
        Profile::BastidorLosa54,
        Profile::BastidorMuro50,
        Profile::BastidorMuro54,
        Profile::Bcpn,
        Profile::Bh120,
        Profile::Bh150,
        Profile::Cln50,
        Profile::Cln70,
        Profile::Cln100,
        Profile::Icn,
        Profile::Ocn,
        Profile::RefuerzoChico,
        Profile::RefuerzoGrande,
        Profile::Tubo,
    ];

    /// Catalog name as printed on shop reports.
    pub fn name(&self) -> &'static str {
        match self {
            Profile::AlaLosa => "ALA_LOSA",
            Profile::AlaMuro => "ALA_MURO",
            Profile::BastidorLosa50 => "BASTIDOR_LOSA_50",
            Profile::BastidorLosa54 => "BASTIDOR_LOSA_54",
            Profile::BastidorMuro50 => "BASTIDOR_MURO_50",
            Profile::BastidorMuro54 => "BASTIDOR_MURO_54",
            Profile::Bcpn => "BCPN",
            Profile::Bh120 => "BH120",
            Profile::Bh150 => "BH150",
            Profile::Cln50 => "CLN50",
            Profile::Cln70 => "CLN70",
            Profile::Cln100 => "CLN100",
            Profile::Icn => "ICN",
            Profile::Ocn => "OCN",
            Profile::RefuerzoChico => "REFUERZOCHICO",
            Profile::RefuerzoGrande => "REFUERZOGRANDE",
            Profile::Tubo => "TUBO",
        }
    }

    /// Weld family of this profile.
    pub fn family(&self) -> ProfileFamily {
        match self {
            Profile::AlaLosa | Profile::AlaMuro => ProfileFamily::Wing,
            Profile::BastidorLosa50
            | Profile::BastidorLosa54
            | Profile::BastidorMuro50
            | Profile::BastidorMuro54 => ProfileFamily::BaseFrame,
            Profile::RefuerzoChico => ProfileFamily::SmallReinforcement,
            Profile::RefuerzoGrande => ProfileFamily::LargeReinforcement,
            Profile::Cln50 | Profile::Cln70 | Profile::Cln100 => ProfileFamily::ClosureStrip,
            Profile::Icn => ProfileFamily::InnerCorner,
            Profile::Tubo => ProfileFamily::Coupling,
            Profile::Bcpn | Profile::Bh120 | Profile::Bh150 | Profile::Ocn => {
                ProfileFamily::Plain
            }
        }
    }
}

impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
