//! Shop constants and rate tables.

use crate::error::{Result, TakeoffError};
use crate::model::Profile;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// Raw stock bar length in mm.
pub const DEFAULT_STOCK_LENGTH_MM: u32 = 5850;

/// Secondary currency units per reporting currency unit.
pub const DEFAULT_FX_RATE: f64 = 970.0;

/// Saw minutes per cut piece.
pub const DEFAULT_CUT_MINUTES_PER_PIECE: f64 = 1.0;

/// Weld travel speed in mm per minute.
pub const DEFAULT_WELD_SPEED_MM_PER_MIN: f64 = 50.0;

/// Companion width used for the area of single-dimension panels.
pub const SINGLE_DIM_COMPANION_WIDTH_MM: u32 = 108;

/// Working hours in one shop day.
pub const HOURS_PER_DAY: f64 = 8.0;

/// Fabrication phase with its own labor rate and machine power.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    Cut,
    Weld,
    Drill,
}

impl Phase {
    pub const ALL: [Phase; 3] = [Phase::Cut, Phase::Weld, Phase::Drill];
}

/// One value per fabrication phase.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PhaseRates {
    pub cut: f64,
    pub weld: f64,
    pub drill: f64,
}

impl PhaseRates {
    pub fn get(&self, phase: Phase) -> f64 {
        match phase {
            Phase::Cut => self.cut,
            Phase::Weld => self.weld,
            Phase::Drill => self.drill,
        }
    }
}

/// Usage driver of a consumable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UsageUnit {
    /// Linear weld metres.
    #[serde(rename = "m")]
    WeldMeters,
    /// Linear weld millimetres.
    #[serde(rename = "mm")]
    WeldMillimeters,
    /// Weld minutes.
    #[serde(rename = "min")]
    WeldMinutes,
    /// Number of cut pieces.
    #[serde(rename = "cut")]
    Cuts,
}

/// A shop supply used up in proportion to its driver.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Consumable {
    /// Price of one unit, reporting currency.
    pub unit_price: f64,
    /// Driver amount one unit lasts for.
    pub yield_rate: f64,
    pub unit: UsageUnit,
}

impl Consumable {
    pub fn new(unit_price: f64, yield_rate: f64, unit: UsageUnit) -> Self {
        Self {
            unit_price,
            yield_rate,
            unit,
        }
    }
}

/// Unit prices of the eyelets and rivets fitted to wall panels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HardwarePrices {
    pub eyelet: f64,
    pub rivet: f64,
}

impl Default for HardwarePrices {
    fn default() -> Self {
        Self {
            eyelet: 0.927,
            rivet: 0.135,
        }
    }
}

/// Static rate tables threaded through every estimator.
///
/// Missing or zero entries contribute nothing instead of failing: operators
/// roll tables out incrementally.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RateTables {
    pub stock_length_mm: u32,
    pub cut_minutes_per_piece: f64,
    pub weld_speed_mm_per_min: f64,
    /// Drill minutes per cut piece, keyed by panel type tag.
    pub drill_minutes_by_type: BTreeMap<String, f64>,
    /// Reporting currency per kg.
    pub aluminum_price_per_kg: f64,
    pub profile_unit_weight_kg_per_m: BTreeMap<Profile, f64>,
    /// Secondary currency per hour.
    pub labor_rate_per_hour: PhaseRates,
    pub machine_power_kw: PhaseRates,
    /// Reporting currency per kWh.
    pub energy_price_per_kwh: f64,
    pub consumables: BTreeMap<String, Consumable>,
    pub hardware: HardwarePrices,
}

impl Default for RateTables {
    fn default() -> Self {
        let drill_minutes_by_type = [
            ("CL", 0.5),
            ("CLI", 0.5),
            ("CLE", 0.5),
            ("BH", 0.4),
            ("BCP", 0.3),
            ("CP", 0.3),
            ("CS", 0.25),
            ("IC", 0.2),
            ("OC", 0.2),
        ]
        .into_iter()
        .map(|(tag, minutes)| (tag.to_string(), minutes))
        .collect();

        let profile_unit_weight_kg_per_m = [
            (Profile::AlaLosa, 3.12),
            (Profile::AlaMuro, 3.48),
            (Profile::BastidorLosa50, 0.716),
            (Profile::BastidorLosa54, 0.782),
            (Profile::BastidorMuro50, 0.716),
            (Profile::BastidorMuro54, 0.782),
            (Profile::Bcpn, 1.94),
            (Profile::Bh120, 2.21),
            (Profile::Bh150, 2.64),
            (Profile::Cln50, 1.05),
            (Profile::Cln70, 1.26),
            (Profile::Cln100, 1.58),
            (Profile::Icn, 2.05),
            (Profile::Ocn, 1.88),
            (Profile::RefuerzoChico, 0.718),
            (Profile::RefuerzoGrande, 0.9265),
            (Profile::Tubo, 0.54),
        ]
        .into_iter()
        .collect();

        let consumables = [
            ("gas", 12.77, 575.0),
            ("soldadura", 17.62, 150.0),
            ("boquillas", 0.84, 150.0),
            ("teflon", 13.37, 900.0),
            ("tobera", 4.57, 750.0),
            ("espiral", 6.73, 750.0),
            ("difusor", 2.42, 750.0),
            ("discos_lija", 1.91, 75.0),
            ("discos_corte", 1.06, 750.0),
            ("esmeril", 37.23, 30000.0),
        ]
        .into_iter()
        .map(|(name, price, yield_rate)| {
            (
                name.to_string(),
                Consumable::new(price, yield_rate, UsageUnit::WeldMeters),
            )
        })
        .collect();

        Self {
            stock_length_mm: DEFAULT_STOCK_LENGTH_MM,
            cut_minutes_per_piece: DEFAULT_CUT_MINUTES_PER_PIECE,
            weld_speed_mm_per_min: DEFAULT_WELD_SPEED_MM_PER_MIN,
            drill_minutes_by_type,
            aluminum_price_per_kg: 5.104,
            profile_unit_weight_kg_per_m,
            labor_rate_per_hour: PhaseRates {
                cut: 5056.0,
                weld: 6611.0,
                drill: 5056.0,
            },
            machine_power_kw: PhaseRates {
                cut: 5.0,
                weld: 4.4,
                drill: 1.1,
            },
            energy_price_per_kwh: 0.2,
            consumables,
            hardware: HardwarePrices::default(),
        }
    }
}

impl RateTables {
    /// Load rate tables from a JSON file. Omitted fields keep their defaults.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(TakeoffError::FileNotFound {
                path: path.to_path_buf(),
            });
        }
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Labor rate per minute for a phase, secondary currency.
    pub fn labor_rate_per_min(&self, phase: Phase) -> f64 {
        self.labor_rate_per_hour.get(phase) / 60.0
    }

    /// Drill minutes per piece for a type tag, 0 when absent.
    pub fn drill_minutes(&self, type_tag: &str) -> f64 {
        self.drill_minutes_by_type
            .get(type_tag)
            .copied()
            .unwrap_or(0.0)
    }

    /// Unit weight in kg/m, 0 when absent.
    pub fn unit_weight(&self, profile: Profile) -> f64 {
        self.profile_unit_weight_kg_per_m
            .get(&profile)
            .copied()
            .unwrap_or(0.0)
    }
}
