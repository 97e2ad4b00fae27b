//! Output formatting for address plans.

mod terminal;

pub use terminal::{format_field, render_plan};
