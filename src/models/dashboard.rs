//! View model handed to the page renderer

use chrono::{DateTime, Local};
use super::{NewsItem, Notice};

/// One metric tile in the prices row
#[derive(Debug, Clone, PartialEq)]
pub struct MetricTile {
    pub label: String,
    pub value: String,
    pub delta: String,
    pub delta_negative: bool,
}

/// Entry of the trends section, in selection order
#[derive(Debug, Clone)]
pub enum TrendItem {
    Chart { coin_id: String, svg: String },
    Notice(Notice),
}

/// Everything one render cycle produced
#[derive(Debug, Clone)]
pub struct DashboardView {
    pub selected: Vec<String>,
    pub selection_notice: Option<Notice>,
    pub tiles: Vec<MetricTile>,
    pub trends: Vec<TrendItem>,
    pub news: Vec<NewsItem>,
    pub question: String,
    pub answer: Option<String>,
    pub updated_at: DateTime<Local>,
}
