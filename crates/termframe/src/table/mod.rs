//! Bordered tables.
//!
//! A table is built from positional rows (lists of cells) or keyed rows
//! (maps from column name to cell). Both shapes are validated and normalized
//! into one positional grid before any width is computed, so rendering never
//! looks at the input shape again.
//!
//! # Alignment
//!
//! Header cells use the header alignment. For a data cell the first match
//! wins:
//!
//! 1. a per-row override for its column ([`ColumnAlign::PerRow`]),
//! 2. a column override ([`ColumnAlign::Uniform`]),
//! 3. the data alignment.
//!
//! Column numbers in overrides and minimum widths count data columns only;
//! the optional index column is never addressable.
//!
//! # Example
//!
//! ```rust
//! use termframe::Table;
//!
//! let table = Table::new(vec![vec!["A", "B"], vec!["1", "2"]])?;
//! assert_eq!(table.text(), "┌─┬─┐\n│A│B│\n├╌┼╌┤\n│1│2│\n└─┴─┘");
//! # Ok::<(), termframe::FrameError>(())
//! ```

mod cell;
mod data;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

pub use cell::Cell;
pub use data::{rows_from_json, Headers, Row};

use crate::block::{block_accessors, Block, BlockWriter};
use crate::border::Rule;
use crate::error::{PaddingError, Result, ValidationError};
use crate::style::BorderStyle;
use crate::types::{Align, Padding};
use crate::util::{display_width, format_field};
use crate::width::{column_widths, ColumnMinimum, ColumnWidthRequest, ResolvedWidths};

/// Alignment override for one data column.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ColumnAlign {
    /// Every data row of the column.
    Uniform(Align),
    /// One alignment per data row, in row order.
    PerRow(Vec<Align>),
}

impl ColumnAlign {
    fn for_row(&self, row: usize) -> Option<Align> {
        match self {
            ColumnAlign::Uniform(align) => Some(*align),
            ColumnAlign::PerRow(aligns) => aligns.get(row).copied(),
        }
    }
}

impl From<Align> for ColumnAlign {
    fn from(align: Align) -> Self {
        ColumnAlign::Uniform(align)
    }
}

impl From<Vec<Align>> for ColumnAlign {
    fn from(aligns: Vec<Align>) -> Self {
        ColumnAlign::PerRow(aligns)
    }
}

/// A rendered table.
#[derive(Clone, Debug, PartialEq)]
pub struct Table {
    headers: Option<Vec<String>>,
    rows: Vec<Vec<Cell>>,
    column_count: usize,
    indexed: bool,
    widths: ResolvedWidths,
    style: BorderStyle,
    block: Block,
}

block_accessors!(Table);

impl Table {
    /// Build a table with default settings: headers from the first row,
    /// left aligned, single border.
    pub fn new<I, R>(rows: I) -> Result<Self>
    where
        I: IntoIterator<Item = R>,
        R: Into<Row>,
    {
        Self::builder(rows).build()
    }

    pub fn builder<I, R>(rows: I) -> TableBuilder
    where
        I: IntoIterator<Item = R>,
        R: Into<Row>,
    {
        TableBuilder::new(rows)
    }

    /// Number of data columns, not counting the index column.
    pub fn column_count(&self) -> usize {
        self.column_count
    }

    /// Number of data rows, not counting the header row.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Resolved width of every rendered column. With an index column, it is
    /// entry 0 and data columns follow.
    pub fn effective_widths(&self) -> &ResolvedWidths {
        &self.widths
    }

    /// Header labels, when a header row is rendered.
    pub fn headers(&self) -> Option<&[String]> {
        self.headers.as_deref()
    }

    /// Data rows in positional form.
    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    pub fn is_indexed(&self) -> bool {
        self.indexed
    }

    pub fn style(&self) -> BorderStyle {
        self.style
    }
}

/// Builder for [`Table`].
#[derive(Clone, Debug)]
pub struct TableBuilder {
    rows: Vec<Row>,
    headers: Headers,
    index: bool,
    header_align: Align,
    data_align: Align,
    custom_align: BTreeMap<usize, ColumnAlign>,
    min_width: ColumnMinimum,
    style: BorderStyle,
    header_padding: Padding,
    data_padding: Padding,
    row_separator: bool,
    max_column_width: Option<usize>,
    max_table_width: Option<usize>,
}

impl TableBuilder {
    pub fn new<I, R>(rows: I) -> Self
    where
        I: IntoIterator<Item = R>,
        R: Into<Row>,
    {
        TableBuilder {
            rows: rows.into_iter().map(Into::into).collect(),
            headers: Headers::default(),
            index: false,
            header_align: Align::default(),
            data_align: Align::default(),
            custom_align: BTreeMap::new(),
            min_width: ColumnMinimum::default(),
            style: BorderStyle::default(),
            header_padding: Padding::ZERO,
            data_padding: Padding::ZERO,
            row_separator: false,
            max_column_width: None,
            max_table_width: None,
        }
    }

    /// Start from JSON data: a list of lists or a list of objects.
    pub fn from_json(data: &serde_json::Value) -> Result<Self> {
        Ok(Self::new(rows_from_json(data)?))
    }

    pub fn headers(mut self, headers: impl Into<Headers>) -> Self {
        self.headers = headers.into();
        self
    }

    /// Prepend a right-aligned column of 1-based row numbers.
    pub fn index(mut self, index: bool) -> Self {
        self.index = index;
        self
    }

    /// Header and data alignment.
    pub fn align(mut self, header: Align, data: Align) -> Self {
        self.header_align = header;
        self.data_align = data;
        self
    }

    /// Override the alignment of one data column.
    pub fn column_align(mut self, column: usize, align: impl Into<ColumnAlign>) -> Self {
        self.custom_align.insert(column, align.into());
        self
    }

    /// Replace all column alignment overrides.
    pub fn custom_align(mut self, overrides: BTreeMap<usize, ColumnAlign>) -> Self {
        self.custom_align = overrides;
        self
    }

    /// Minimum inner width for every data column, or per column.
    pub fn min_width(mut self, min_width: impl Into<ColumnMinimum>) -> Self {
        self.min_width = min_width.into();
        self
    }

    pub fn style(mut self, style: BorderStyle) -> Self {
        self.style = style;
        self
    }

    /// The same padding for headers and data.
    pub fn padding(mut self, padding: impl Into<Padding>) -> Self {
        let padding = padding.into();
        self.header_padding = padding;
        self.data_padding = padding;
        self
    }

    pub fn header_padding(mut self, padding: impl Into<Padding>) -> Self {
        self.header_padding = padding.into();
        self
    }

    pub fn data_padding(mut self, padding: impl Into<Padding>) -> Self {
        self.data_padding = padding.into();
        self
    }

    /// Draw a separator line between data rows.
    pub fn row_separator(mut self, enable: bool) -> Self {
        self.row_separator = enable;
        self
    }

    /// Reject cells and columns wider than `max`.
    pub fn max_column_width(mut self, max: usize) -> Self {
        self.max_column_width = Some(max);
        self
    }

    /// Reject tables whose columns and inner dividers add up to more than
    /// `max`.
    pub fn max_table_width(mut self, max: usize) -> Self {
        self.max_table_width = Some(max);
        self
    }

    /// Validate the configuration and render the table.
    pub fn build(mut self) -> Result<Table> {
        let grid = data::normalize(std::mem::take(&mut self.rows), &self.headers)?;
        let columns = grid.columns;
        let row_count = grid.rows.len();

        for (&column, align) in &self.custom_align {
            if column >= columns {
                return Err(ValidationError::ColumnOutOfRange {
                    index: column,
                    columns,
                }
                .into());
            }
            if let ColumnAlign::PerRow(aligns) = align {
                if aligns.len() != row_count {
                    return Err(ValidationError::AlignmentCountMismatch {
                        column,
                        found: aligns.len(),
                        rows: row_count,
                    }
                    .into());
                }
            }
        }
        if let ColumnMinimum::PerColumn(minimums) = &self.min_width {
            if let Some(&column) = minimums.keys().find(|&&column| column >= columns) {
                return Err(ValidationError::ColumnOutOfRange {
                    index: column,
                    columns,
                }
                .into());
            }
        }
        self.check_center_padding()?;

        let text: Vec<Vec<String>> = grid
            .rows
            .iter()
            .map(|row| row.iter().map(Cell::render).collect())
            .collect();
        if let Some(max) = self.max_column_width {
            for row in &text {
                for (column, cell) in row.iter().enumerate() {
                    let length = display_width(cell);
                    if length > max {
                        return Err(ValidationError::CellTooLong {
                            column,
                            length,
                            max,
                        }
                        .into());
                    }
                }
            }
        }

        let widths = column_widths(&ColumnWidthRequest {
            columns,
            rows: &text,
            headers: grid.headers.as_deref(),
            header_padding: self.header_padding,
            data_padding: self.data_padding,
            minimum: &self.min_width,
            indexed: self.index,
        });
        self.check_limits(&widths)?;

        let offset = usize::from(self.index);
        let mut writer = BlockWriter::new(self.style.glyphs(), widths.widths.clone());

        if let Some(labels) = &grid.headers {
            let mut cells = Vec::with_capacity(widths.len());
            if self.index {
                cells.push(" ".repeat(widths.widths[0]));
            }
            for (column, label) in labels.iter().enumerate() {
                cells.push(format_field(
                    label,
                    widths.widths[column + offset],
                    self.header_align,
                    self.header_padding,
                ));
            }
            writer.row(&cells);
            writer.rule(Rule::HeaderSeparator);
        }

        for (row, values) in text.iter().enumerate() {
            if row > 0 && self.row_separator {
                writer.rule(Rule::RowSeparator);
            }
            let mut cells = Vec::with_capacity(widths.len());
            if self.index {
                cells.push(format_field(
                    &(row + 1).to_string(),
                    widths.widths[0],
                    Align::Right,
                    Padding::ZERO,
                ));
            }
            for (column, value) in values.iter().enumerate() {
                cells.push(format_field(
                    value,
                    widths.widths[column + offset],
                    self.cell_align(column, row),
                    self.data_padding,
                ));
            }
            writer.row(&cells);
        }
        let block = writer.finish();

        debug!(
            width = block.width(),
            height = block.height(),
            columns,
            rows = row_count,
            indexed = self.index,
            "built table"
        );

        Ok(Table {
            headers: grid.headers,
            rows: grid.rows,
            column_count: columns,
            indexed: self.index,
            widths,
            style: self.style,
            block,
        })
    }

    fn cell_align(&self, column: usize, row: usize) -> Align {
        self.custom_align
            .get(&column)
            .and_then(|align| align.for_row(row))
            .unwrap_or(self.data_align)
    }

    /// Centered cells never carry padding: not in the header row, the data
    /// rows, nor any column whose override centers some of its cells.
    fn check_center_padding(&self) -> std::result::Result<(), PaddingError> {
        let conflict = |region: String, padding: Padding| PaddingError::CenterConflict {
            region,
            left: padding.left,
            right: padding.right,
        };
        if self.header_align == Align::Center && !self.header_padding.is_zero() {
            return Err(conflict("headers".to_string(), self.header_padding));
        }
        if self.data_padding.is_zero() {
            return Ok(());
        }
        if self.data_align == Align::Center {
            return Err(conflict("data".to_string(), self.data_padding));
        }
        for (column, align) in &self.custom_align {
            let centered = match align {
                ColumnAlign::Uniform(align) => *align == Align::Center,
                ColumnAlign::PerRow(aligns) => aligns.contains(&Align::Center),
            };
            if centered {
                return Err(conflict(format!("column {}", column), self.data_padding));
            }
        }
        Ok(())
    }

    fn check_limits(&self, widths: &ResolvedWidths) -> std::result::Result<(), ValidationError> {
        let data_widths = &widths.widths[usize::from(self.index)..];
        if let Some(max) = self.max_column_width {
            let too_wide = data_widths.iter().enumerate().find(|&(_, &w)| w > max);
            if let Some((column, &width)) = too_wide {
                return Err(ValidationError::ColumnTooWide { column, width, max });
            }
        }
        if let Some(max) = self.max_table_width {
            let width = widths.total() + widths.len().saturating_sub(1);
            if width > max {
                return Err(ValidationError::TableTooWide { width, max });
            }
        }
        Ok(())
    }
}
