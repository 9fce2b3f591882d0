//! Bordered menus with an optional header and footer.
//!
//! A menu has three regions, each aligned and padded on its own. The header
//! is closed off with the header separator rule, the footer with a plain row
//! separator. Items can be numbered with an [`IndexScheme`] or prefixed with
//! custom labels.
//!
//! ```rust
//! use termframe::{IndexScheme, Menu};
//!
//! let menu = Menu::builder(["Open", "Quit"])
//!     .index(IndexScheme::NumberDot)
//!     .build()?;
//!
//! assert_eq!(menu.text(), "┌───────┐\n│1. Open│\n│2. Quit│\n└───────┘");
//! # Ok::<(), termframe::FrameError>(())
//! ```

use tracing::debug;

use crate::block::{block_accessors, Block, BlockWriter};
use crate::border::Rule;
use crate::error::{PaddingError, Result, ValidationError};
use crate::style::BorderStyle;
use crate::types::{Align, IndexScheme, Padding, TextInput};
use crate::width::{single_region_width, Region};

/// How menu items are labelled.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ItemPrefix {
    /// Items are rendered as given.
    #[default]
    None,
    /// Generated numbering.
    Scheme(IndexScheme),
    /// One literal prefix per item. Items past the end of the list get none.
    Custom(Vec<String>),
}

impl ItemPrefix {
    fn label(&self, index: usize, item: &str) -> String {
        match self {
            ItemPrefix::None => item.to_string(),
            ItemPrefix::Scheme(scheme) => format!("{}{}", scheme.prefix(index), item),
            ItemPrefix::Custom(prefixes) => match prefixes.get(index) {
                Some(prefix) => format!("{}{}", prefix, item),
                None => item.to_string(),
            },
        }
    }
}

/// Alignment and padding of one menu region.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RegionLayout {
    pub align: Align,
    pub padding: Padding,
}

impl RegionLayout {
    fn check(&self, region: &str) -> std::result::Result<(), PaddingError> {
        if self.align == Align::Center && !self.padding.is_zero() {
            return Err(PaddingError::CenterConflict {
                region: region.to_string(),
                left: self.padding.left,
                right: self.padding.right,
            });
        }
        Ok(())
    }
}

/// A rendered menu.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Menu {
    items: Vec<String>,
    entries: Vec<String>,
    header: Option<Vec<String>>,
    footer: Option<Vec<String>>,
    prefix: ItemPrefix,
    style: BorderStyle,
    block: Block,
}

block_accessors!(Menu);

impl Menu {
    /// Build a menu from items with default settings.
    pub fn new<I, S>(items: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::builder(items).build()
    }

    pub fn builder<I, S>(items: I) -> MenuBuilder
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        MenuBuilder::new(items)
    }

    /// Items as given, without prefixes.
    pub fn items(&self) -> &[String] {
        &self.items
    }

    /// Items as rendered, with their prefixes.
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// Header lines, when a header is rendered.
    pub fn header(&self) -> Option<&[String]> {
        self.header.as_deref()
    }

    /// Footer lines, when a footer is rendered.
    pub fn footer(&self) -> Option<&[String]> {
        self.footer.as_deref()
    }

    pub fn prefix(&self) -> &ItemPrefix {
        &self.prefix
    }

    pub fn style(&self) -> BorderStyle {
        self.style
    }
}

/// Builder for [`Menu`].
#[derive(Clone, Debug)]
pub struct MenuBuilder {
    items: Vec<String>,
    header: Option<TextInput>,
    footer: Option<TextInput>,
    index: Option<IndexScheme>,
    custom_prefix: Option<Vec<String>>,
    header_layout: RegionLayout,
    item_layout: RegionLayout,
    footer_layout: RegionLayout,
    min_width: usize,
    style: BorderStyle,
}

impl MenuBuilder {
    pub fn new<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        MenuBuilder {
            items: items.into_iter().map(Into::into).collect(),
            header: None,
            footer: None,
            index: None,
            custom_prefix: None,
            header_layout: RegionLayout::default(),
            item_layout: RegionLayout::default(),
            footer_layout: RegionLayout::default(),
            min_width: 0,
            style: BorderStyle::default(),
        }
    }

    pub fn header(mut self, header: impl Into<TextInput>) -> Self {
        self.header = Some(header.into());
        self
    }

    pub fn footer(mut self, footer: impl Into<TextInput>) -> Self {
        self.footer = Some(footer.into());
        self
    }

    /// Number items with a generated prefix.
    pub fn index(mut self, scheme: IndexScheme) -> Self {
        self.index = Some(scheme);
        self
    }

    /// Prefix each item with the literal at the same position.
    pub fn custom_prefix<I, S>(mut self, prefixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.custom_prefix = Some(prefixes.into_iter().map(Into::into).collect());
        self
    }

    /// Alignment of the header, items and footer, in that order.
    pub fn align(mut self, header: Align, items: Align, footer: Align) -> Self {
        self.header_layout.align = header;
        self.item_layout.align = items;
        self.footer_layout.align = footer;
        self
    }

    pub fn header_align(mut self, align: Align) -> Self {
        self.header_layout.align = align;
        self
    }

    pub fn item_align(mut self, align: Align) -> Self {
        self.item_layout.align = align;
        self
    }

    pub fn footer_align(mut self, align: Align) -> Self {
        self.footer_layout.align = align;
        self
    }

    /// The same padding for all three regions.
    pub fn padding(mut self, padding: impl Into<Padding>) -> Self {
        let padding = padding.into();
        self.header_layout.padding = padding;
        self.item_layout.padding = padding;
        self.footer_layout.padding = padding;
        self
    }

    pub fn header_padding(mut self, padding: impl Into<Padding>) -> Self {
        self.header_layout.padding = padding.into();
        self
    }

    pub fn item_padding(mut self, padding: impl Into<Padding>) -> Self {
        self.item_layout.padding = padding.into();
        self
    }

    pub fn footer_padding(mut self, padding: impl Into<Padding>) -> Self {
        self.footer_layout.padding = padding.into();
        self
    }

    /// Minimum outer width, counting both border columns.
    pub fn min_width(mut self, min_width: usize) -> Self {
        self.min_width = min_width;
        self
    }

    pub fn style(mut self, style: BorderStyle) -> Self {
        self.style = style;
        self
    }

    /// Validate the configuration and render the menu.
    pub fn build(self) -> Result<Menu> {
        if self.items.is_empty() {
            return Err(ValidationError::EmptyMenu.into());
        }
        let prefix = match (self.index, self.custom_prefix) {
            (Some(_), Some(_)) => return Err(ValidationError::PrefixIndexConflict.into()),
            (Some(scheme), None) => ItemPrefix::Scheme(scheme),
            (None, Some(prefixes)) => {
                if prefixes.len() > self.items.len() {
                    return Err(ValidationError::PrefixCountMismatch {
                        prefixes: prefixes.len(),
                        items: self.items.len(),
                    }
                    .into());
                }
                ItemPrefix::Custom(prefixes)
            }
            (None, None) => ItemPrefix::None,
        };
        self.header_layout.check("header")?;
        self.item_layout.check("items")?;
        self.footer_layout.check("footer")?;

        let header = self.header.and_then(section_lines);
        let footer = self.footer.and_then(section_lines);
        let entries: Vec<String> = self
            .items
            .iter()
            .enumerate()
            .map(|(i, item)| prefix.label(i, item))
            .collect();

        let mut regions = vec![Region::new(&entries, self.item_layout.padding)];
        if let Some(lines) = &header {
            regions.push(Region::new(lines, self.header_layout.padding));
        }
        if let Some(lines) = &footer {
            regions.push(Region::new(lines, self.footer_layout.padding));
        }
        let inner = single_region_width(&regions, self.min_width);

        let mut writer = BlockWriter::new(self.style.glyphs(), vec![inner]);
        if let Some(lines) = &header {
            for line in lines {
                writer.field(line, self.header_layout.align, self.header_layout.padding);
            }
            writer.rule(Rule::HeaderSeparator);
        }
        for entry in &entries {
            writer.field(entry, self.item_layout.align, self.item_layout.padding);
        }
        if let Some(lines) = &footer {
            writer.rule(Rule::RowSeparator);
            for line in lines {
                writer.field(line, self.footer_layout.align, self.footer_layout.padding);
            }
        }
        let block = writer.finish();

        debug!(
            width = block.width(),
            height = block.height(),
            items = entries.len(),
            header = header.is_some(),
            footer = footer.is_some(),
            "built menu"
        );

        Ok(Menu {
            items: self.items,
            entries,
            header,
            footer,
            prefix,
            style: self.style,
            block,
        })
    }
}

/// Lines of an optional section; a section with no visible text is omitted.
fn section_lines(input: TextInput) -> Option<Vec<String>> {
    let lines = input.into_lines();
    if lines.iter().all(|line| line.is_empty()) {
        None
    } else {
        Some(lines)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ErrorKind, FrameError};

    #[test]
    fn plain_items() {
        let menu = Menu::new(["Option 1", "Option 2", "Option 3"]).unwrap();
        assert_eq!(
            menu.text(),
            "┌────────┐\n│Option 1│\n│Option 2│\n│Option 3│\n└────────┘"
        );
        assert!(menu.header().is_none());
        assert!(menu.footer().is_none());
    }

    #[test]
    fn custom_prefix_is_literal() {
        let menu = Menu::builder(["Start", "Stop"])
            .custom_prefix(["[s] ", "[x] "])
            .build()
            .unwrap();
        assert_eq!(menu.entries(), ["[s] Start", "[x] Stop"]);
        assert_eq!(menu.items(), ["Start", "Stop"]);
    }

    #[test]
    fn short_custom_prefix_leaves_items_bare() {
        let menu = Menu::builder(["a", "b", "c"])
            .custom_prefix(["1: "])
            .build()
            .unwrap();
        assert_eq!(menu.entries(), ["1: a", "b", "c"]);
    }

    #[test]
    fn too_many_custom_prefixes() {
        let err = Menu::builder(["a"])
            .custom_prefix(["1", "2"])
            .build()
            .unwrap_err();
        assert!(matches!(
            err,
            FrameError::Validation(ValidationError::PrefixCountMismatch {
                prefixes: 2,
                items: 1
            })
        ));
    }

    #[test]
    fn scheme_and_custom_prefix_conflict() {
        let err = Menu::builder(["Option 1"])
            .index(IndexScheme::NumberDot)
            .custom_prefix(["1."])
            .build()
            .unwrap_err();
        assert!(matches!(
            err,
            FrameError::Validation(ValidationError::PrefixIndexConflict)
        ));
    }

    #[test]
    fn empty_menu() {
        let err = Menu::new(Vec::<String>::new()).unwrap_err();
        assert!(matches!(err, FrameError::Validation(ValidationError::EmptyMenu)));
    }

    #[test]
    fn center_conflict_names_region() {
        let err = Menu::builder(["x"])
            .footer_align(Align::Center)
            .footer_padding((0, 1))
            .build()
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Padding);
        assert!(err.to_string().contains("footer"));
    }

    #[test]
    fn empty_header_is_not_rendered() {
        let menu = Menu::builder(["x"]).header("").build().unwrap();
        assert!(menu.header().is_none());
        assert_eq!(menu.height(), 3);
    }

    #[test]
    fn wide_footer_sets_width() {
        let menu = Menu::builder(["a"]).footer("a long footer").build().unwrap();
        assert_eq!(menu.inner_width(), 13);
        assert_eq!(menu.text().lines().nth(1), Some("│a            │"));
    }

    #[test]
    fn letter_scheme_numbering() {
        let menu = Menu::builder(["x", "y"])
            .index(IndexScheme::LetterLowerParentheses)
            .build()
            .unwrap();
        assert_eq!(menu.entries(), ["a) x", "b) y"]);
        assert_eq!(menu.prefix(), &ItemPrefix::Scheme(IndexScheme::LetterLowerParentheses));
    }
}
