use crate::models::{DashboardView, TrendItem};
use crate::utils::escape;
use super::widgets;

const STYLE: &str = r#"
body { font-family: sans-serif; margin: 0 auto; max-width: 1100px; padding: 1rem 2rem; color: #262730; }
h1 { margin-bottom: 0.5rem; }
hr { border: none; border-top: 1px solid #e6e6e6; margin: 2rem 0; }
select { min-width: 16rem; }
.metrics { display: flex; flex-wrap: wrap; gap: 2rem; }
.metric-label { font-size: 0.9rem; }
.metric-value { font-size: 2rem; }
.metric-delta.up { color: #09ab3b; }
.metric-delta.down { color: #ff2b2b; }
.notice { padding: 0.75rem 1rem; border-radius: 0.5rem; margin: 0.5rem 0; }
.notice-info { background: #e8f0fe; }
.notice-warning { background: #fffce7; }
.notice-error { background: #ffecec; }
.chart svg { max-width: 100%; height: auto; }
.answer { white-space: pre-wrap; background: #f7f7f9; padding: 1rem; border-radius: 0.5rem; }
input[type=text] { width: 60%; padding: 0.4rem; }
.caption { color: #808495; font-size: 0.85rem; }
"#;

fn document(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{}</title>
<style>{}</style>
</head>
<body>
{}
</body>
</html>
"#,
        escape(title),
        STYLE,
        body
    )
}

/// Render the dashboard in its fixed section order
pub fn render_page(view: &DashboardView) -> String {
    let mut body = String::new();
    body.push_str("<h1>📍 MHD Crypto Dashboard</h1>\n");
    body.push_str(r#"<form method="get" action="/">"#);
    body.push_str(&widgets::coin_multiselect(&view.selected));
    body.push_str(r#" <button type="submit">Update</button>"#);

    body.push_str("\n<h2>💹 Prices &amp; 24h Change</h2>\n");
    if let Some(notice) = &view.selection_notice {
        body.push_str(&widgets::notice(notice));
    }
    body.push_str(r#"<div class="metrics">"#);
    for tile in &view.tiles {
        body.push_str(&widgets::metric_tile(tile));
    }
    body.push_str("</div>\n<hr>\n<h2>📈 24-Hour Price Trends</h2>\n");

    for item in &view.trends {
        match item {
            TrendItem::Chart { coin_id, svg } => body.push_str(&widgets::chart(coin_id, svg)),
            TrendItem::Notice(notice) => body.push_str(&widgets::notice(notice)),
        }
    }

    body.push_str("\n<hr>\n<h2>📰 Latest Crypto News</h2>\n");
    body.push_str(&widgets::news_list(&view.news));

    body.push_str("\n<hr>\n<h2>🤖 LLM Crypto Insight</h2>\n");
    body.push_str(&widgets::question_box(&view.question, view.answer.as_deref()));
    body.push_str("</form>\n");

    body.push_str(&format!(
        r#"<p class="caption">Updated at {}</p>"#,
        view.updated_at.format("%H:%M:%S")
    ));

    document("💰 Crypto Dashboard", &body)
}

/// Page shown when a render cycle fails
pub fn render_error_page(message: &str) -> String {
    let body = format!(
        r#"<h1>📍 MHD Crypto Dashboard</h1>
<div class="notice notice-error"><strong>Something went wrong while rendering the dashboard.</strong>
<pre>{}</pre></div>
<p><a href="/">Try again</a></p>"#,
        escape(message)
    );
    document("💰 Crypto Dashboard", &body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Local, TimeZone};
    use crate::catalog;
    use crate::models::{MetricTile, Notice};

    fn view() -> DashboardView {
        DashboardView {
            selected: vec!["bitcoin".to_string(), "ethereum".to_string()],
            selection_notice: None,
            tiles: vec![
                MetricTile {
                    label: "Bitcoin".to_string(),
                    value: "$60,000".to_string(),
                    delta: "+2.50%".to_string(),
                    delta_negative: false,
                },
                MetricTile {
                    label: "Ethereum".to_string(),
                    value: "$3,000".to_string(),
                    delta: "-1.10%".to_string(),
                    delta_negative: true,
                },
            ],
            trends: vec![
                TrendItem::Chart { coin_id: "bitcoin".to_string(), svg: "<svg id=\"btc\"></svg>".to_string() },
                TrendItem::Notice(Notice::warning("No data returned for ethereum")),
            ],
            news: catalog::get_news_items(),
            question: String::new(),
            answer: None,
            updated_at: Local.with_ymd_and_hms(2024, 5, 1, 14, 3, 9).unwrap(),
        }
    }

    #[test]
    fn test_sections_in_order() {
        let html = render_page(&view());

        let positions: Vec<usize> = [
            "<select",
            "$60,000",
            "$3,000",
            "<svg id=\"btc\">",
            "No data returned for ethereum",
            "Bitcoin rises above $60k",
            "Ask the AI",
            "Updated at 14:03:09",
        ]
        .iter()
        .map(|needle| html.find(needle).unwrap_or_else(|| panic!("missing {needle}")))
        .collect();

        assert!(positions.windows(2).all(|w| w[0] < w[1]));
        assert!(html.contains("+2.50%"));
        assert!(html.contains("-1.10%"));
        assert!(!html.contains("AI Response"));
    }

    #[test]
    fn test_error_page_escapes_message() {
        let html = render_error_page("Price request failed: <html> body");
        assert!(html.contains("Price request failed: &lt;html&gt; body"));
    }
}
