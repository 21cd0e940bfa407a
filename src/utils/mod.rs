pub mod errors;
pub mod format;
pub mod html;

pub use errors::describe_error;
pub use format::{capitalize, format_change, format_uptime, format_usd};
pub use html::escape;
