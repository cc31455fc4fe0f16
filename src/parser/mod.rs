//! Panel code and order line parsing.

mod code;
mod order;

pub use code::{canonical_tag, parse_panel_code};
pub use order::{merge_order_lines, parse_order_arg, parse_order_file};
