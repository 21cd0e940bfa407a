//! Data models for the dashboard
//!
//! Quotes and history points are produced fresh on every render cycle and never
//! persisted. Session state is the only thing that outlives a cycle.

pub mod chart;
pub mod dashboard;
pub mod news;
pub mod notice;
pub mod ping;
pub mod price;
pub mod session;

// Re-export commonly used types for convenience
pub use chart::{HistoryOutcome, HistoryPoint};
pub use dashboard::{DashboardView, MetricTile, TrendItem};
pub use news::NewsItem;
pub use notice::{Notice, NoticeLevel};
pub use ping::PingMetrics;
pub use price::PriceQuote;
pub use session::SessionState;
