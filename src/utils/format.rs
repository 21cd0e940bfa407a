//! Display formatting for metric tiles and status output

use std::time::Duration;

/// Insert `,` between groups of three digits of an unsigned integer string
fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Format a USD price as `$60,000` or `$3,012.45`.
///
/// Whole numbers print without a fractional part; anything else keeps the
/// shortest representation of the value, never rounded.
pub fn format_usd(value: f64) -> String {
    if !value.is_finite() {
        return format!("${}", value);
    }

    let sign = if value < 0.0 { "-" } else { "" };
    let repr = format!("{}", value.abs());
    let (int_part, frac_part) = match repr.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (repr.as_str(), None),
    };

    match frac_part {
        Some(frac) => format!("{}${}.{}", sign, group_thousands(int_part), frac),
        None => format!("{}${}", sign, group_thousands(int_part)),
    }
}

/// Signed percentage with two decimals, e.g. `+2.50%`
pub fn format_change(pct: f64) -> String {
    format!("{:+.2}%", pct)
}

/// `bitcoin` -> `Bitcoin`
pub fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(|c| c.to_lowercase())).collect(),
        None => String::new(),
    }
}

/// Uptime as `1h 2m 3s`
pub fn format_uptime(elapsed: Duration) -> String {
    let hours = elapsed.as_secs() / 3600;
    let minutes = (elapsed.as_secs() % 3600) / 60;
    let seconds = elapsed.as_secs() % 60;
    format!("{}h {}m {}s", hours, minutes, seconds)
}
