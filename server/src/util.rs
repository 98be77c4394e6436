//! Shared utility functions

/// Longest title Discord renders in an embed before we clip it ourselves.
const MAX_TITLE_LENGTH: usize = 247;

/// Clip an embed title to 247 characters, marking the cut with `...`.
///
/// Length is measured in characters, not bytes. Titles below the maximum
/// pass through unchanged; everything else comes back as the first 247
/// characters plus the three-character marker. No word-boundary or locale
/// awareness.
///
/// # Examples
///
/// ```
/// use relay_server::util::trim_title;
///
/// assert_eq!(trim_title("boom"), "boom");
/// assert_eq!(trim_title(&"x".repeat(300)).chars().count(), 250);
/// ```
pub fn trim_title(title: &str) -> String {
    if title.chars().count() < MAX_TITLE_LENGTH {
        return title.to_string();
    }

    let clipped: String = title.chars().take(MAX_TITLE_LENGTH).collect();
    format!("{clipped}...")
}
