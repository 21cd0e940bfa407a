//! Raw market-chart samples to chart-ready points

use chrono::{DateTime, Local, Utc};
use thiserror::Error;
use crate::models::HistoryPoint;

#[derive(Error, Debug, PartialEq)]
pub enum SeriesError {
    #[error("timestamp {0} ms is out of range")]
    TimestampOutOfRange(f64),
}

/// Convert epoch milliseconds to a local wall-clock instant
fn epoch_ms_to_local(epoch_ms: f64) -> Result<DateTime<Local>, SeriesError> {
    if !epoch_ms.is_finite() {
        return Err(SeriesError::TimestampOutOfRange(epoch_ms));
    }
    DateTime::<Utc>::from_timestamp_millis(epoch_ms as i64)
        .map(|utc| utc.with_timezone(&Local))
        .ok_or(SeriesError::TimestampOutOfRange(epoch_ms))
}

/// Turn `(epoch_ms, price)` pairs into history points.
///
/// Order and length are preserved and prices pass through untouched.
pub fn to_history_points(raw: &[(f64, f64)]) -> Result<Vec<HistoryPoint>, SeriesError> {
    raw.iter()
        .map(|&(epoch_ms, price)| {
            Ok(HistoryPoint {
                timestamp: epoch_ms_to_local(epoch_ms)?,
                usd_price: price,
            })
        })
        .collect()
}

/// Split points into parallel time and price sequences
pub fn split_series(points: &[HistoryPoint]) -> (Vec<DateTime<Local>>, Vec<f64>) {
    points.iter().map(|p| (p.timestamp, p.usd_price)).unzip()
}
