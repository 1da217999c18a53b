//! crates/logging/src/sink/color.rs
//! ANSI coloring keyed on the rendered level label.

use std::borrow::Cow;

const RESET: &str = "\u{1b}[0m";

/// Level keywords and the SGR color applied when they appear in a line.
/// Checked in order; the first match wins.
const PALETTE: [(&str, &str); 4] = [
    ("[DEBUG]", "\u{1b}[90m"),
    ("[INFO]", "\u{1b}[36m"),
    ("[WARNING]", "\u{1b}[33m"),
    ("[ERROR]", "\u{1b}[31m"),
];

/// Wraps `line` in the color of the first bracketed level label it contains.
///
/// Debug lines are gray, info cyan, warning yellow, and error red. Lines
/// without a label, such as minimal-verbosity output, are returned unchanged.
///
/// # Examples
///
/// ```
/// use logging::colorize;
///
/// assert_eq!(colorize("[ERROR] boom"), "\u{1b}[31m[ERROR] boom\u{1b}[0m");
/// assert_eq!(colorize("plain"), "plain");
/// ```
#[must_use]
pub fn colorize(line: &str) -> Cow<'_, str> {
    PALETTE
        .iter()
        .find(|(keyword, _)| line.contains(keyword))
        .map_or(Cow::Borrowed(line), |(_, color)| {
            Cow::Owned(format!("{color}{line}{RESET}"))
        })
}
