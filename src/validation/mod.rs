//! Order validation and diagnostics.

mod diagnostics;

pub use diagnostics::{validate_order_lines, Diagnostic, Diagnostics};
