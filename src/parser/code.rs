//! Panel code parser.
//!
//! A panel code looks like `WF600X2250` or `CLI70X50X600X900-B`: an alphabetic
//! type tag, digit runs for the dimensions separated by `X`, and an optional
//! suffix after `-` that does not affect the takeoff.

use crate::model::PanelCode;

/// Historical tag spellings and the canonical tag they stand for.
const TAG_ALIASES: &[(&str, &str)] = &[("EI", "IC"), ("ESI", "IC"), ("EE", "OC"), ("ESE", "OC")];

/// Parse a panel identifier.
///
/// Never fails: a code without an alphabetic prefix gets an empty type tag and
/// a code without digits gets no dimensions.
pub fn parse_panel_code(code: &str) -> PanelCode {
    let base_code = code.split('-').next().unwrap_or_default().to_string();

    let prefix: String = base_code
        .chars()
        .take_while(|c| c.is_ascii_alphabetic())
        .collect::<String>()
        .to_ascii_uppercase();
    let type_tag = canonical_tag(&prefix).to_string();

    let dims = digit_runs(&base_code);
    let tokens = base_code
        .split(['x', 'X'])
        .map(|s| s.to_string())
        .collect();

    PanelCode {
        type_tag,
        base_code,
        dims,
        tokens,
    }
}

/// Resolve a tag alias.
pub fn canonical_tag(tag: &str) -> &str {
    TAG_ALIASES
        .iter()
        .find(|(alias, _)| *alias == tag)
        .map(|(_, canonical)| *canonical)
        .unwrap_or(tag)
}

/// Every maximal run of ASCII digits, in order. Runs too large for `u32`
/// saturate.
fn digit_runs(s: &str) -> Vec<u32> {
    let mut dims = Vec::new();
    let mut current: Option<u32> = None;

    for c in s.chars() {
        match c.to_digit(10) {
            Some(d) => {
                let value = current.unwrap_or(0);
                current = Some(value.saturating_mul(10).saturating_add(d));
            }
            None => {
                if let Some(value) = current.take() {
                    dims.push(value);
                }
            }
        }
    }
    if let Some(value) = current {
        dims.push(value);
    }

    dims
}
