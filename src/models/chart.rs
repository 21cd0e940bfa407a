//! Chart generation models

use chrono::{DateTime, Local};
use super::Notice;

/// A single data point on a price chart
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryPoint {
    pub timestamp: DateTime<Local>,
    pub usd_price: f64,
}

/// Result of fetching the market chart for one coin.
///
/// A failed or empty fetch still yields an outcome: `points` is empty and
/// `notice` tells the user why.
#[derive(Debug, Clone)]
pub struct HistoryOutcome {
    pub coin_id: String,
    pub points: Vec<HistoryPoint>,
    pub notice: Option<Notice>,
}

impl HistoryOutcome {
    pub fn empty(coin_id: &str, notice: Notice) -> Self {
        Self {
            coin_id: coin_id.to_string(),
            points: Vec::new(),
            notice: Some(notice),
        }
    }
}
