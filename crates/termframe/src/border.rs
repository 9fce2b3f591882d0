//! Border line rendering.
//!
//! Every element draws its frame from the same two primitives: [`rule_line`]
//! for horizontal lines and [`join_row`] for content lines. Single-region
//! elements pass one width; tables pass one width per column and get the
//! junction glyphs at every column boundary.

use std::iter::repeat_n;

use crate::style::BorderGlyphs;

/// Kind of horizontal line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Rule {
    /// First line of the block.
    Top,
    /// Between a header (or menu header) and the content below it.
    ///
    /// Uses the `header_bottom` fill so the header boundary stays visually
    /// distinct from row separators.
    HeaderSeparator,
    /// Between data rows, and above a menu footer.
    RowSeparator,
    /// Last line of the block.
    Bottom,
}

impl Rule {
    /// Returns (left cap, fill, junction, right cap).
    fn glyphs(&self, g: &BorderGlyphs) -> (char, char, char, char) {
        match self {
            Rule::Top => (g.top_left, g.horizontal, g.mid_top, g.top_right),
            Rule::HeaderSeparator => (g.mid_left, g.header_bottom, g.cross, g.mid_right),
            Rule::RowSeparator => (g.mid_left, g.horizontal, g.cross, g.mid_right),
            Rule::Bottom => (g.bottom_left, g.horizontal, g.mid_bottom, g.bottom_right),
        }
    }
}

/// Draw a horizontal line spanning `widths`, with a junction between segments.
///
/// # Example
///
/// ```rust
/// use termframe::border::{rule_line, Rule};
/// use termframe::BorderStyle;
///
/// let glyphs = BorderStyle::Single.glyphs();
/// assert_eq!(rule_line(glyphs, &[2, 3], Rule::Top), "┌──┬───┐");
/// assert_eq!(rule_line(glyphs, &[2, 3], Rule::HeaderSeparator), "├╌╌┼╌╌╌┤");
/// ```
pub fn rule_line(glyphs: &BorderGlyphs, widths: &[usize], rule: Rule) -> String {
    let (left, fill, junction, right) = rule.glyphs(glyphs);
    let total: usize = widths.iter().sum::<usize>() + widths.len() + 1;
    let mut line = String::with_capacity(total * 3);

    line.push(left);
    for (i, &width) in widths.iter().enumerate() {
        if i > 0 {
            line.push(junction);
        }
        line.extend(repeat_n(fill, width));
    }
    line.push(right);
    line
}

/// Wrap already formatted cells in vertical borders, dividing adjacent cells
/// with the vertical glyph.
pub fn join_row<S: AsRef<str>>(glyphs: &BorderGlyphs, cells: &[S]) -> String {
    let mut line = String::new();
    line.push(glyphs.vertical);
    for (i, cell) in cells.iter().enumerate() {
        if i > 0 {
            line.push(glyphs.vertical);
        }
        line.push_str(cell.as_ref());
    }
    line.push(glyphs.vertical);
    line
}
