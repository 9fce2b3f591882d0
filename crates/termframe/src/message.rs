//! Single-region bordered messages.
//!
//! ```rust
//! use termframe::{Align, BorderStyle, Message};
//!
//! let message = Message::builder("Hello World")
//!     .align(Align::Center)
//!     .min_width(20)
//!     .style(BorderStyle::Double)
//!     .build()?;
//!
//! assert_eq!(message.text().lines().nth(1), Some("║   Hello World    ║"));
//! # Ok::<(), termframe::FrameError>(())
//! ```

use tracing::debug;

use crate::block::{block_accessors, Block, BlockWriter};
use crate::error::{PaddingError, Result, ValidationError};
use crate::style::BorderStyle;
use crate::types::{Align, Padding, TextInput};
use crate::width::{single_region_width, Region};

/// A block of text lines inside a border.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Message {
    lines: Vec<String>,
    align: Align,
    padding: Padding,
    style: BorderStyle,
    min_width: usize,
    block: Block,
}

block_accessors!(Message);

impl Message {
    /// Build a message with default settings: left aligned, single border,
    /// no minimum width and no padding.
    pub fn new(text: impl Into<TextInput>) -> Result<Self> {
        Self::builder(text).build()
    }

    pub fn builder(text: impl Into<TextInput>) -> MessageBuilder {
        MessageBuilder::new(text)
    }

    /// Content lines, as split from the input.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn align(&self) -> Align {
        self.align
    }

    pub fn padding(&self) -> Padding {
        self.padding
    }

    pub fn style(&self) -> BorderStyle {
        self.style
    }

    /// Configured minimum outer width.
    pub fn min_width(&self) -> usize {
        self.min_width
    }
}

/// Builder for [`Message`].
#[derive(Clone, Debug)]
pub struct MessageBuilder {
    text: TextInput,
    align: Align,
    min_width: usize,
    style: BorderStyle,
    padding: Padding,
}

impl MessageBuilder {
    pub fn new(text: impl Into<TextInput>) -> Self {
        MessageBuilder {
            text: text.into(),
            align: Align::default(),
            min_width: 0,
            style: BorderStyle::default(),
            padding: Padding::ZERO,
        }
    }

    pub fn align(mut self, align: Align) -> Self {
        self.align = align;
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

    /// Left and right padding. A single number pads both sides.
    pub fn padding(mut self, padding: impl Into<Padding>) -> Self {
        self.padding = padding.into();
        self
    }

    /// Validate the configuration and render the message.
    pub fn build(self) -> Result<Message> {
        let lines = self.text.into_lines();
        if lines.iter().all(|line| line.trim().is_empty()) {
            return Err(ValidationError::EmptyContent.into());
        }
        if self.align == Align::Center && !self.padding.is_zero() {
            return Err(PaddingError::CenterConflict {
                region: "message".to_string(),
                left: self.padding.left,
                right: self.padding.right,
            }
            .into());
        }

        let inner = single_region_width(&[Region::new(&lines, self.padding)], self.min_width);
        let mut writer = BlockWriter::new(self.style.glyphs(), vec![inner]);
        for line in &lines {
            writer.field(line, self.align, self.padding);
        }
        let block = writer.finish();

        debug!(
            width = block.width(),
            height = block.height(),
            style = %self.style,
            "built message"
        );

        Ok(Message {
            lines,
            align: self.align,
            padding: self.padding,
            style: self.style,
            min_width: self.min_width,
            block,
        })
    }
}
