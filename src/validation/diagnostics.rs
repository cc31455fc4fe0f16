//! Per-line diagnostics collected while processing an order.

use crate::error::TakeoffError;
use crate::model::OrderLine;
use serde::{Deserialize, Serialize};

/// One skipped or suspicious order line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    /// Raw panel code of the line.
    pub code: String,
    /// Numeric error code, 0 for plain warnings.
    pub error_code: i32,
    pub message: String,
}

/// Diagnostics for a whole order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostics {
    /// Lines left out of the takeoff.
    pub skipped: Vec<Diagnostic>,
    /// Lines kept, with a remark.
    pub warnings: Vec<Diagnostic>,
}

impl Diagnostics {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a line skipped because of `error`.
    pub fn add_skipped(&mut self, code: impl Into<String>, error: &TakeoffError) {
        self.skipped.push(Diagnostic {
            code: code.into(),
            error_code: error.code_value(),
            message: error.to_string(),
        });
    }

    /// Add a warning.
    pub fn add_warning(&mut self, code: impl Into<String>, message: impl Into<String>) {
        self.warnings.push(Diagnostic {
            code: code.into(),
            error_code: 0,
            message: message.into(),
        });
    }

    /// True when no line was skipped.
    pub fn all_lines_used(&self) -> bool {
        self.skipped.is_empty()
    }

    /// Codes of the skipped lines.
    pub fn skipped_codes(&self) -> Vec<&str> {
        self.skipped.iter().map(|d| d.code.as_str()).collect()
    }
}

/// Drop lines that cannot be decomposed at all, recording why.
pub fn validate_order_lines(lines: &[OrderLine]) -> (Vec<OrderLine>, Diagnostics) {
    let mut diagnostics = Diagnostics::new();
    let mut kept = Vec::with_capacity(lines.len());

    for line in lines {
        if line.base_code.trim().is_empty() {
            diagnostics.add_skipped(
                &line.base_code,
                &TakeoffError::InvalidOrderLine {
                    line: line.base_code.clone(),
                    message: "empty panel code".to_string(),
                },
            );
        } else if line.quantity == 0 {
            diagnostics.add_warning(&line.base_code, "Quantity is zero, line ignored");
        } else {
            kept.push(line.clone());
        }
    }

    (kept, diagnostics)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;

    #[test]
    fn test_diagnostics_new_is_clean() {
        let diagnostics = Diagnostics::new();
        assert!(diagnostics.all_lines_used());
        assert!(diagnostics.warnings.is_empty());
    }

    #[test]
    fn test_add_skipped_records_code() {
        let mut diagnostics = Diagnostics::new();
        let err = TakeoffError::UnrecognizedPanelType {
            code: "ZZ1X2".to_string(),
            tag: "ZZ".to_string(),
        };
        diagnostics.add_skipped("ZZ1X2", &err);
        assert!(!diagnostics.all_lines_used());
        assert_eq!(diagnostics.skipped_codes(), vec!["ZZ1X2"]);
        assert_eq!(
            diagnostics.skipped[0].error_code,
            ErrorCode::UnrecognizedPanelType as i32
        );
    }

    #[test]
    fn test_validate_order_lines() {
        let lines = vec![
            OrderLine::new("WF600X2250", 10),
            OrderLine::new("SF400X2000", 0),
            OrderLine::new("  ", 3),
        ];
        let (kept, diagnostics) = validate_order_lines(&lines);
        assert_eq!(kept, vec![OrderLine::new("WF600X2250", 10)]);
        assert_eq!(diagnostics.warnings.len(), 1);
        assert_eq!(diagnostics.warnings[0].code, "SF400X2000");
        assert_eq!(diagnostics.skipped.len(), 1);
    }
}
