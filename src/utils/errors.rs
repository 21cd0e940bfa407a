use std::error::Error;

/// Flatten an error and its sources into one line for user-facing notices
///
/// reqwest hides the useful part ("connection refused", "dns error") in the
/// source chain, so `to_string()` alone reads as a bare URL.
/// Sources whose text is already contained in the line are skipped.
pub fn describe_error(error: &(dyn Error + 'static)) -> String {
    let mut message = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        let text = cause.to_string();
        if !text.is_empty() && !message.contains(&text) {
            message.push_str(": ");
            message.push_str(&text);
        }
        source = cause.source();
    }
    message
}
