//! HTML entity escaping for user-entered chat text.

#[cfg(test)]
#[path = "escape_test.rs"]
mod escape_test;

/// Escape the five HTML-significant characters so user text renders
/// literally inside a markup bubble. `&` goes first; later passes must not
/// re-escape entities this one produced.
pub fn escape_html(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#039;")
}
