//! Panel face area.

use serde::{Deserialize, Serialize};

use crate::config::SINGLE_DIM_COMPANION_WIDTH_MM;
use crate::model::{OrderLine, PanelCode};
use crate::parser::parse_panel_code;

/// Face area of one panel in m².
///
/// One dimension is paired with the fixed companion width; three and four
/// dimensions fold into width and height by summing pairs. No dimensions
/// yields 0.
pub fn panel_area(code: &PanelCode) -> f64 {
    let d = |i: usize| u64::from(code.dims[i]);
    let (width, height) = match code.dims.len() {
        0 => (0, 0),
        1 => (u64::from(SINGLE_DIM_COMPANION_WIDTH_MM), d(0)),
        2 => (d(0), d(1)),
        3 => (d(0) + d(1), d(2)),
        _ => (d(0) + d(1), d(2) + d(3)),
    };
    (width * height) as f64 / 1_000_000.0
}

/// Area of one order line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AreaRow {
    pub base_code: String,
    pub quantity: u32,
    pub unit_area_m2: f64,
    pub total_area_m2: f64,
}

/// Area rows sorted by base code, ignoring case.
pub fn area_rows(lines: &[OrderLine]) -> Vec<AreaRow> {
    let mut rows: Vec<AreaRow> = lines
        .iter()
        .map(|line| {
            let unit_area_m2 = panel_area(&parse_panel_code(&line.base_code));
            AreaRow {
                base_code: line.base_code.clone(),
                quantity: line.quantity,
                unit_area_m2,
                total_area_m2: unit_area_m2 * f64::from(line.quantity),
            }
        })
        .collect();
    rows.sort_by_key(|row| row.base_code.to_lowercase());
    rows
}

/// Area of the whole order in m².
pub fn total_area(rows: &[AreaRow]) -> f64 {
    rows.iter().map(|row| row.total_area_m2).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn area(code: &str) -> f64 {
        panel_area(&parse_panel_code(code))
    }

    #[test]
    fn test_panel_area_by_dimension_count() {
        assert_eq!(area("WF600X2250"), 1.35);
        assert_eq!(area("SF400X2000"), 0.8);
        assert_eq!(area("X1000"), 0.108);
        assert_eq!(area("IC150X150X2000"), 0.6);
        assert_eq!(area("CLI100X50X600X900"), 0.225);
        assert_eq!(area("WF"), 0.0);
    }

    #[test]
    fn test_area_rows_sorted_case_insensitive() {
        let rows = area_rows(&[
            OrderLine::new("WF600X2250", 10),
            OrderLine::new("cl70X70X1200", 1),
            OrderLine::new("SF400X2000", 5),
        ]);
        let codes: Vec<&str> = rows.iter().map(|r| r.base_code.as_str()).collect();
        assert_eq!(codes, vec!["cl70X70X1200", "SF400X2000", "WF600X2250"]);
        assert_eq!(rows[2].total_area_m2, 13.5);
    }

    #[test]
    fn test_total_area() {
        let rows = area_rows(&[
            OrderLine::new("WF600X2250", 10),
            OrderLine::new("SF400X2000", 5),
        ]);
        assert_eq!(total_area(&rows), 17.5);
    }
}
