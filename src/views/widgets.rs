//! Building blocks of the dashboard page. Every function returns an HTML
//! fragment with all dynamic text escaped.

use crate::catalog::AVAILABLE_COINS;
use crate::models::{MetricTile, NewsItem, Notice};
use crate::utils::{capitalize, escape};

/// Multi-select over the fixed coin list, current selection pre-selected
pub fn coin_multiselect(selected: &[String]) -> String {
    let options: String = AVAILABLE_COINS
        .iter()
        .map(|coin| {
            let marker = if selected.iter().any(|s| s == coin) { " selected" } else { "" };
            format!(
                r#"<option value="{}"{}>{}</option>"#,
                escape(coin),
                marker,
                escape(&capitalize(coin))
            )
        })
        .collect();

    format!(
        r#"<label for="coins">Select coins to track:</label>
<select id="coins" name="coins" multiple size="{}">{}</select>
<input type="hidden" name="submitted" value="1">"#,
        AVAILABLE_COINS.len(),
        options
    )
}

pub fn metric_tile(tile: &MetricTile) -> String {
    let direction = if tile.delta_negative { "down" } else { "up" };
    format!(
        r#"<div class="metric"><div class="metric-label">{}</div><div class="metric-value">{}</div><div class="metric-delta {}">{}</div></div>"#,
        escape(&tile.label),
        escape(&tile.value),
        direction,
        escape(&tile.delta)
    )
}

pub fn notice(notice: &Notice) -> String {
    format!(
        r#"<div class="notice {}">{}</div>"#,
        notice.level.css_class(),
        escape(&notice.message)
    )
}

/// Wrap an SVG chart produced by the chart service. The SVG is trusted markup.
pub fn chart(coin_id: &str, svg: &str) -> String {
    format!(
        r#"<figure class="chart" data-coin="{}">{}</figure>"#,
        escape(coin_id),
        svg
    )
}

pub fn news_list(items: &[NewsItem]) -> String {
    let entries: String = items
        .iter()
        .map(|item| {
            format!(
                r#"<li>🔗 <a href="{}" target="_blank" rel="noopener">{}</a></li>"#,
                escape(&item.link),
                escape(&item.title)
            )
        })
        .collect();
    format!(r#"<ul class="news">{}</ul>"#, entries)
}

/// Question box, plus the model's answer when there is one
pub fn question_box(question: &str, answer: Option<&str>) -> String {
    let mut html = format!(
        r#"<label for="q">Ask the AI about the crypto trends above:</label>
<input type="text" id="q" name="q" value="{}">
<button type="submit">Update</button>"#,
        escape(question)
    );
    if let Some(answer) = answer {
        html.push_str(&format!(
            r#"<p>📌 AI Response:</p><div class="answer">{}</div>"#,
            escape(answer)
        ));
    }
    html
}
