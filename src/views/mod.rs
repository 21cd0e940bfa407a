//! HTML rendering of the dashboard page

pub mod page;
pub mod widgets;

pub use page::{render_error_page, render_page};
