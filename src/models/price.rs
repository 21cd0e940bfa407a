//! Price query models

/// Spot price and 24h change for one coin, as returned by the price endpoint
#[derive(Debug, Clone, PartialEq)]
pub struct PriceQuote {
    pub asset_id: String,
    pub usd_price: f64,
    pub usd_24h_change_pct: f64,
}
