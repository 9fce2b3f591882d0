//! # Termframe - Bordered Text Blocks for Terminals
//!
//! `termframe` lays out free text, option lists and tabular data as bordered,
//! aligned and padded plain-text blocks. Every element is validated and
//! rendered once, when it is built, and is immutable afterwards.
//!
//! ## Core Concepts
//!
//! - [`Message`]: one region of text lines
//! - [`Menu`]: header, items and footer regions, with optional item numbering
//! - [`Table`]: columns sized independently, with optional headers, index
//!   column and row separators
//! - [`BorderStyle`]: the four built-in glyph sets (single, double, bold,
//!   simple)
//! - [`config`]: the same elements described in YAML or JSON
//!
//! ## Quick Start
//!
//! ```rust
//! use termframe::{Align, Message, Table};
//!
//! let message = Message::new("Hi")?;
//! assert_eq!(message.text(), "┌──┐\n│Hi│\n└──┘");
//!
//! let table = Table::builder(vec![vec!["Name", "Qty"], vec!["pears", "12"]])
//!     .align(Align::Left, Align::Right)
//!     .build()?;
//! println!("{table}");
//! assert_eq!(table.dimensions(), (11, 5));
//! # Ok::<(), termframe::FrameError>(())
//! ```
//!
//! ## Widths
//!
//! Message and menu minimum widths are *outer* widths: they include the two
//! border columns. Table minimum widths apply to each column's inner width.
//! Content is never wrapped or cut; a field grows to fit its widest line.
//!
//! ## Errors
//!
//! Building returns a [`FrameError`] whose [`kind`](FrameError::kind) is one
//! of validation, padding, style or config. Nothing is logged on failure;
//! successful builds emit a `tracing` debug event with the resolved
//! dimensions.

mod block;
pub mod border;
pub mod config;
mod error;
pub mod menu;
pub mod message;
pub mod prelude;
pub mod style;
pub mod table;
mod types;
pub mod util;
pub mod width;

pub use block::Block;
pub use error::{ErrorKind, FrameError, PaddingError, Result, StyleError, ValidationError};
pub use menu::{ItemPrefix, Menu, MenuBuilder, RegionLayout};
pub use message::{Message, MessageBuilder};
pub use style::{BorderGlyphs, BorderStyle};
pub use table::{Cell, ColumnAlign, Headers, Row, Table, TableBuilder};
pub use types::{Align, IndexScheme, Padding, TextInput};
pub use width::{ColumnMinimum, ResolvedWidths};
