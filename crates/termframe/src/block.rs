//! The rendered, immutable output shared by every element.
//!
//! Elements never draw borders themselves. They resolve their widths, then
//! feed rules and content rows to a [`BlockWriter`], which produces the final
//! [`Block`].

use std::fmt;

use crate::border::{join_row, rule_line, Rule};
use crate::style::BorderGlyphs;
use crate::types::{Align, Padding};
use crate::util::format_field;

/// A fully rendered bordered block.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Block {
    text: String,
    width: usize,
    height: usize,
    inner_width: usize,
}

impl Block {
    /// The rendered lines joined by `\n`, without a trailing newline.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Outer width including both border columns.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of rendered lines including the top and bottom borders.
    pub fn height(&self) -> usize {
        self.height
    }

    /// `(width, height)`.
    pub fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Width between the outer border columns.
    pub fn inner_width(&self) -> usize {
        self.inner_width
    }

    /// Iterate over the rendered lines.
    pub fn lines(&self) -> std::str::Lines<'_> {
        self.text.lines()
    }
}

impl fmt::Display for Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Accumulates the lines of a block for a fixed set of region widths.
///
/// The top border is written on creation and the bottom border by
/// [`BlockWriter::finish`].
pub(crate) struct BlockWriter<'a> {
    glyphs: &'a BorderGlyphs,
    widths: Vec<usize>,
    lines: Vec<String>,
}

impl<'a> BlockWriter<'a> {
    pub(crate) fn new(glyphs: &'a BorderGlyphs, widths: Vec<usize>) -> Self {
        let top = rule_line(glyphs, &widths, Rule::Top);
        BlockWriter {
            glyphs,
            widths,
            lines: vec![top],
        }
    }

    pub(crate) fn rule(&mut self, rule: Rule) {
        self.lines.push(rule_line(self.glyphs, &self.widths, rule));
    }

    /// Push a row of cells that are already formatted to their column widths.
    pub(crate) fn row<S: AsRef<str>>(&mut self, cells: &[S]) {
        self.lines.push(join_row(self.glyphs, cells));
    }

    /// Push one line of a single-region block, formatted to the region width.
    pub(crate) fn field(&mut self, text: &str, align: Align, padding: Padding) {
        let width = self.widths.first().copied().unwrap_or(0);
        let cell = format_field(text, width, align, padding);
        self.lines.push(join_row(self.glyphs, &[cell]));
    }

    pub(crate) fn finish(mut self) -> Block {
        self.rule(Rule::Bottom);
        let columns = self.widths.len();
        let inner_width = self.widths.iter().sum::<usize>() + columns.saturating_sub(1);
        Block {
            height: self.lines.len(),
            text: self.lines.join("\n"),
            width: inner_width + 2,
            inner_width,
        }
    }
}

/// Inherent accessors delegating to the element's rendered [`Block`].
macro_rules! block_accessors {
    ($element:ty) => {
        impl $element {
            /// The rendered block as text, lines joined by `\n`.
            pub fn text(&self) -> &str {
                self.block.text()
            }

            /// Outer width including borders.
            pub fn width(&self) -> usize {
                self.block.width()
            }

            /// Outer height (number of lines) including borders.
            pub fn height(&self) -> usize {
                self.block.height()
            }

            /// `(width, height)` of the rendered block.
            pub fn dimensions(&self) -> (usize, usize) {
                self.block.dimensions()
            }

            /// Width between the outer border columns.
            pub fn inner_width(&self) -> usize {
                self.block.inner_width()
            }

            /// The rendered block.
            pub fn block(&self) -> &$crate::block::Block {
                &self.block
            }
        }

        impl ::std::fmt::Display for $element {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                ::std::fmt::Display::fmt(&self.block, f)
            }
        }
    };
}

pub(crate) use block_accessors;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::BorderStyle;

    #[test]
    fn writer_frames_single_region() {
        let mut writer = BlockWriter::new(BorderStyle::Single.glyphs(), vec![4]);
        writer.field("ab", Align::Right, Padding::ZERO);
        let block = writer.finish();

        assert_eq!(block.text(), "┌────┐\n│  ab│\n└────┘");
        assert_eq!(block.dimensions(), (6, 3));
        assert_eq!(block.inner_width(), 4);
    }

    #[test]
    fn writer_counts_column_dividers() {
        let mut writer = BlockWriter::new(BorderStyle::Simple.glyphs(), vec![1, 2]);
        writer.row(&["a", "bc"]);
        let block = writer.finish();

        assert_eq!(block.text(), "+-+--+\n|a|bc|\n+-+--+");
        assert_eq!(block.width(), 6);
        assert_eq!(block.inner_width(), 4);
        assert_eq!(block.lines().count(), block.height());
    }

    #[test]
    fn display_matches_text() {
        let block = BlockWriter::new(BorderStyle::Double.glyphs(), vec![2]).finish();
        assert_eq!(block.to_string(), "╔══╗\n╚══╝");
        assert_eq!(block.height(), 2);
    }
}
