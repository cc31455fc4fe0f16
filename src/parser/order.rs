//! Order line input.

use crate::error::{Result, TakeoffError};
use crate::model::OrderLine;
use std::path::Path;

/// Parse a `CODE=QTY` command-line order line.
///
/// The quantity keeps only its digits, so `WF600X2250=10 pcs` reads as 10.
pub fn parse_order_arg(arg: &str) -> Result<OrderLine> {
    let invalid = |message: &str| TakeoffError::InvalidOrderLine {
        line: arg.to_string(),
        message: message.to_string(),
    };

    let (code, quantity) = arg.split_once('=').ok_or_else(|| invalid("expected CODE=QTY"))?;
    let code = code.trim();
    if code.is_empty() {
        return Err(invalid("empty panel code"));
    }

    let digits: String = quantity.chars().filter(|c| c.is_ascii_digit()).collect();
    let quantity = digits
        .parse::<u32>()
        .map_err(|_| invalid("quantity is not a number"))?;

    Ok(OrderLine::new(base_code(code), quantity))
}

/// Load order lines from a JSON array of `{ "base_code", "quantity" }`.
pub fn parse_order_file(path: &Path) -> Result<Vec<OrderLine>> {
    if !path.exists() {
        return Err(TakeoffError::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    let content = std::fs::read_to_string(path)?;
    let lines: Vec<OrderLine> = serde_json::from_str(&content)?;
    Ok(lines
        .into_iter()
        .map(|line| OrderLine::new(base_code(&line.base_code), line.quantity))
        .collect())
}

/// Merge lines sharing a base code, keeping first-seen order.
///
/// Codes are reduced to their base first, so `WF600X2250-A` and
/// `WF600X2250-B` merge into one `WF600X2250` line.
pub fn merge_order_lines(lines: &[OrderLine]) -> Vec<OrderLine> {
    let mut merged: Vec<OrderLine> = Vec::with_capacity(lines.len());
    for line in lines {
        let code = base_code(&line.base_code);
        match merged.iter_mut().find(|m| m.base_code == code) {
            Some(existing) => existing.quantity = existing.quantity.saturating_add(line.quantity),
            None => merged.push(OrderLine::new(code, line.quantity)),
        }
    }
    merged
}

/// Trimmed code without its `-` suffix.
fn base_code(code: &str) -> &str {
    let code = code.trim();
    code.split('-').next().unwrap_or(code)
}
