//! Display-width helpers for text widgets.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::view::TextAlignment;

/// Truncates a string to fit within a maximum display width, adding ellipsis if needed.
///
/// Uses Unicode width calculations for proper handling of CJK and other wide characters.
///
/// ```rust
/// use composer::widget::truncate_to_width;
///
/// assert_eq!(truncate_to_width("Hello", 10), "Hello");
/// assert_eq!(truncate_to_width("Hello World", 6), "Hello…");
/// ```
pub fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    // Reserve 1 column for the ellipsis
    let limit = max_width.saturating_sub(1);

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > limit {
            break;
        }
        result.push(c);
        current_width += char_width;
    }

    result.push('…');
    result
}

/// Fits `s` into exactly `width` columns: truncated if too wide, otherwise
/// padded with spaces according to `alignment`.
pub fn fit_to_width(s: &str, width: usize, alignment: TextAlignment) -> String {
    let truncated = truncate_to_width(s, width);
    let slack = width.saturating_sub(truncated.width());
    let (left, right) = match alignment {
        TextAlignment::Left => (0, slack),
        TextAlignment::Right => (slack, 0),
        TextAlignment::Center => (slack / 2, slack - slack / 2),
    };
    format!("{}{}{}", " ".repeat(left), truncated, " ".repeat(right))
}
