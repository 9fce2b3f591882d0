//! Convenient imports for building elements.
//!
//! ```rust
//! use termframe::prelude::*;
//!
//! let menu = Menu::builder(["Yes", "No"]).style(BorderStyle::Bold).build()?;
//! assert_eq!(menu.height(), 4);
//! # Ok::<(), FrameError>(())
//! ```

pub use crate::config::{MenuConfig, MessageConfig, TableConfig};
pub use crate::{
    Align, BorderStyle, Cell, ColumnAlign, ColumnMinimum, FrameError, Headers, IndexScheme, Menu,
    Message, Padding, Row, Table,
};
