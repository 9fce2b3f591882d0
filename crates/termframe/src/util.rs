//! Text measuring and field formatting.

use serde_json::Value;
use unicode_width::UnicodeWidthStr;

use crate::types::{Align, Padding};

/// Returns the display width of a string in terminal columns.
///
/// # Example
///
/// ```rust
/// use termframe::util::display_width;
///
/// assert_eq!(display_width("hello"), 5);
/// assert_eq!(display_width("日本"), 4);
/// ```
pub fn display_width(s: &str) -> usize {
    s.width()
}

/// Positions `text` inside a field of `width` columns.
///
/// - `Left`: `padding.left` spaces, the text, then spaces up to `width`.
/// - `Right`: spaces, the text, then `padding.right` spaces.
/// - `Center`: equal spaces on both sides, the odd one on the right.
///   Padding is ignored; centered regions never carry padding.
///
/// When the text plus its padding does not fit, the field is returned wider
/// than `width` instead of cutting the text. Element builders size their
/// fields so this never happens for the content they render.
///
/// # Example
///
/// ```rust
/// use termframe::util::format_field;
/// use termframe::{Align, Padding};
///
/// assert_eq!(format_field("ab", 6, Align::Left, Padding::new(1, 0)), " ab   ");
/// assert_eq!(format_field("ab", 6, Align::Right, Padding::new(0, 1)), "   ab ");
/// assert_eq!(format_field("ab", 5, Align::Center, Padding::ZERO), " ab  ");
/// ```
pub fn format_field(text: &str, width: usize, align: Align, padding: Padding) -> String {
    let text_width = display_width(text);
    let (left, right) = match align {
        Align::Center => {
            let space = width.saturating_sub(text_width);
            (space / 2, space - space / 2)
        }
        Align::Left => (
            padding.left,
            width.saturating_sub(text_width + padding.left),
        ),
        Align::Right => (
            width.saturating_sub(text_width + padding.right),
            padding.right,
        ),
    };

    let mut field = String::with_capacity(text.len() + left + right);
    field.extend(std::iter::repeat_n(' ', left));
    field.push_str(text);
    field.extend(std::iter::repeat_n(' ', right));
    field
}

/// Human-readable name of a JSON value's type, used in error messages.
pub(crate) fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "list",
        Value::Object(_) => "map",
    }
}
