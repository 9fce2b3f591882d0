//! Width resolution for bordered regions and table columns.
//!
//! Two strategies share this module:
//!
//! - [`single_region_width`] sizes the one inner width used by messages and
//!   menus. Its minimum is the *bordered* width, so a minimum that wins is
//!   reduced by the two border columns.
//! - [`column_widths`] sizes each table column independently. Its minimums
//!   are inner widths and apply as given.

use std::collections::BTreeMap;

use serde::de::{self, Deserializer, MapAccess, Visitor};
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::types::Padding;
use crate::util::display_width;

/// Resolved widths for all columns of a bordered layout.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolvedWidths {
    /// Inner width of each column in display columns.
    pub widths: Vec<usize>,
}

impl ResolvedWidths {
    /// Get the width of a specific column.
    pub fn get(&self, index: usize) -> Option<usize> {
        self.widths.get(index).copied()
    }

    /// Sum of all column widths (without borders).
    pub fn total(&self) -> usize {
        self.widths.iter().sum()
    }

    /// Number of columns.
    pub fn len(&self) -> usize {
        self.widths.len()
    }

    /// Check if there are no columns.
    pub fn is_empty(&self) -> bool {
        self.widths.is_empty()
    }

    /// Full width once the outer borders and the dividers between columns
    /// are drawn.
    pub fn outer_width(&self) -> usize {
        self.total() + self.len() + 1
    }
}

/// One independently padded block of lines inside a single region.
#[derive(Clone, Copy, Debug)]
pub struct Region<'a> {
    pub lines: &'a [String],
    pub padding: Padding,
}

impl<'a> Region<'a> {
    pub fn new(lines: &'a [String], padding: Padding) -> Self {
        Region { lines, padding }
    }
}

/// Inner width of a single-region layout (messages and menus).
///
/// The widest padded line wins when it is wider than `minimum_width`.
/// Otherwise the minimum, which counts the two border columns, is reduced to
/// an inner width by subtracting those two columns.
///
/// Unlike a bare `minimum_width - 2`, the result is clamped to the widest
/// padded line. This only matters when that line is exactly `minimum_width`
/// or one column narrower: the plain rule would return a field narrower than
/// the content, so the content's width is returned instead and every line
/// still fits its field.
///
/// # Example
///
/// ```rust
/// use termframe::width::{single_region_width, Region};
/// use termframe::Padding;
///
/// let lines = vec!["Right".to_string()];
/// assert_eq!(single_region_width(&[Region::new(&lines, Padding::ZERO)], 0), 5);
/// assert_eq!(single_region_width(&[Region::new(&lines, Padding::ZERO)], 20), 18);
/// ```
pub fn single_region_width(regions: &[Region<'_>], minimum_width: usize) -> usize {
    let widest = regions
        .iter()
        .flat_map(|region| {
            region
                .lines
                .iter()
                .map(move |line| display_width(line) + region.padding.total())
        })
        .max()
        .unwrap_or(0);

    let width = if widest > minimum_width {
        widest
    } else {
        minimum_width.saturating_sub(2).max(widest)
    };
    trace!(widest, minimum_width, width, "resolved single region width");
    width
}

/// Minimum inner widths for table data columns.
///
/// Deserializes from a number or from a map of column number to width.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ColumnMinimum {
    /// The same minimum for every column.
    Uniform(usize),
    /// Minimums keyed by zero-based data column; unlisted columns have none.
    PerColumn(BTreeMap<usize, usize>),
}

impl Default for ColumnMinimum {
    fn default() -> Self {
        ColumnMinimum::Uniform(0)
    }
}

impl ColumnMinimum {
    /// Minimum for a data column.
    pub fn for_column(&self, column: usize) -> usize {
        match self {
            ColumnMinimum::Uniform(width) => *width,
            ColumnMinimum::PerColumn(widths) => widths.get(&column).copied().unwrap_or(0),
        }
    }
}

impl<'de> Deserialize<'de> for ColumnMinimum {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct MinimumVisitor;

        impl<'de> Visitor<'de> for MinimumVisitor {
            type Value = ColumnMinimum;

            fn expecting(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str("a non-negative width or a map of column to width")
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
                usize::try_from(v)
                    .map(ColumnMinimum::Uniform)
                    .map_err(|_| E::custom(format!("width {} is too large", v)))
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
                usize::try_from(v)
                    .map(ColumnMinimum::Uniform)
                    .map_err(|_| E::invalid_value(de::Unexpected::Signed(v), &self))
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
                let mut widths = BTreeMap::new();
                while let Some((column, width)) = map.next_entry::<usize, usize>()? {
                    widths.insert(column, width);
                }
                Ok(ColumnMinimum::PerColumn(widths))
            }
        }

        deserializer.deserialize_any(MinimumVisitor)
    }
}

impl From<usize> for ColumnMinimum {
    fn from(width: usize) -> Self {
        ColumnMinimum::Uniform(width)
    }
}

impl From<BTreeMap<usize, usize>> for ColumnMinimum {
    fn from(widths: BTreeMap<usize, usize>) -> Self {
        ColumnMinimum::PerColumn(widths)
    }
}

impl<const N: usize> From<[(usize, usize); N]> for ColumnMinimum {
    fn from(widths: [(usize, usize); N]) -> Self {
        ColumnMinimum::PerColumn(widths.into_iter().collect())
    }
}

/// Inputs of the per-column width resolver.
#[derive(Clone, Debug)]
pub struct ColumnWidthRequest<'a> {
    /// Number of data columns (excluding the index column).
    pub columns: usize,
    /// Stringified data cells, one `Vec` per row.
    pub rows: &'a [Vec<String>],
    /// Header labels, when a header row is rendered.
    pub headers: Option<&'a [String]>,
    pub header_padding: Padding,
    pub data_padding: Padding,
    pub minimum: &'a ColumnMinimum,
    /// Prepend a row-number column.
    pub indexed: bool,
}

/// Width of every rendered table column.
///
/// Each data column is as wide as the largest of its widest cell plus the data
/// padding, its header plus the header padding, and its configured minimum.
/// With `indexed`, column 0 is the row-number column, sized to the decimal
/// length of the row count, and data columns follow it.
///
/// # Example
///
/// ```rust
/// use termframe::width::{column_widths, ColumnMinimum, ColumnWidthRequest};
/// use termframe::Padding;
///
/// let rows = vec![vec!["1".to_string(), "123456".to_string()]];
/// let headers = vec!["Header 1".to_string(), "Header 2".to_string()];
/// let resolved = column_widths(&ColumnWidthRequest {
///     columns: 2,
///     rows: &rows,
///     headers: Some(&headers),
///     header_padding: Padding::ZERO,
///     data_padding: Padding::new(0, 4),
///     minimum: &ColumnMinimum::Uniform(0),
///     indexed: true,
/// });
/// assert_eq!(resolved.widths, vec![1, 8, 10]);
/// ```
pub fn column_widths(request: &ColumnWidthRequest<'_>) -> ResolvedWidths {
    let mut widths = Vec::with_capacity(request.columns + usize::from(request.indexed));

    if request.indexed {
        widths.push(request.rows.len().to_string().len());
    }

    for column in 0..request.columns {
        let data = request
            .rows
            .iter()
            .filter_map(|row| row.get(column))
            .map(|cell| display_width(cell) + request.data_padding.total())
            .max()
            .unwrap_or(0);
        let header = request
            .headers
            .and_then(|headers| headers.get(column))
            .map(|label| display_width(label) + request.header_padding.total())
            .unwrap_or(0);
        widths.push(data.max(header).max(request.minimum.for_column(column)));
    }

    trace!(?widths, "resolved column widths");
    ResolvedWidths { widths }
}
