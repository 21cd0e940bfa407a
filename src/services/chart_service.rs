use chrono::{DateTime, Duration, Local};
use plotters::prelude::*;
use crate::models::HistoryPoint;
use crate::services::series_service::split_series;
use crate::utils::capitalize;

pub const CHART_WIDTH: u32 = 960;
pub const CHART_HEIGHT: u32 = 400;

/// Y axis bounds with 10% padding, never below zero
fn price_bounds(prices: &[f64]) -> (f64, f64) {
    let min_price = prices.iter().copied().fold(f64::INFINITY, f64::min);
    let max_price = prices.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    let price_range = (max_price - min_price).max(1e-8);
    let padding = price_range * 0.1;
    ((min_price - padding).max(0.0), max_price + padding)
}

/// X axis bounds; a single sample gets an hour of room around it
fn time_bounds(times: &[DateTime<Local>]) -> (DateTime<Local>, DateTime<Local>) {
    let x_min = times.iter().min().copied().unwrap_or_else(Local::now);
    let x_max = times.iter().max().copied().unwrap_or(x_min);
    if x_min == x_max {
        (x_min - Duration::minutes(30), x_max + Duration::minutes(30))
    } else {
        (x_min, x_max)
    }
}

/// Render a coin's price history as an SVG line chart
pub fn render_price_chart(
    coin_id: &str,
    points: &[HistoryPoint],
    width: u32,
    height: u32,
) -> Result<String, String> {
    if points.is_empty() {
        return Err(format!("No price data to chart for {}", coin_id));
    }

    let (times, prices) = split_series(points);
    let (y_min, y_max) = price_bounds(&prices);
    let (x_min, x_max) = time_bounds(&times);
    let mut svg = String::new();

    {
        let root = SVGBackend::with_string(&mut svg, (width, height)).into_drawing_area();
        root.fill(&WHITE)
            .map_err(|e| format!("Failed to fill canvas: {}", e))?;

        let mut chart = ChartBuilder::on(&root)
            .caption(
                format!("{} Price (Last 24h)", capitalize(coin_id)),
                ("sans-serif", 22).into_font(),
            )
            .margin(40)
            .x_label_area_size(40)
            .y_label_area_size(80)
            .build_cartesian_2d(x_min..x_max, y_min..y_max)
            .map_err(|e| format!("Failed to build chart: {}", e))?;

        chart
            .configure_mesh()
            .x_desc("Time")
            .y_desc("Price (USD)")
            .x_labels(8)
            .x_label_formatter(&|t: &DateTime<Local>| t.format("%d %b %H:%M").to_string())
            .draw()
            .map_err(|e| format!("Failed to draw mesh: {}", e))?;

        chart
            .draw_series(LineSeries::new(times.into_iter().zip(prices), &BLUE))
            .map_err(|e| format!("Failed to draw line: {}", e))?;

        root.present()
            .map_err(|e| format!("Failed to render chart: {}", e))?;
    }

    Ok(svg)
}
