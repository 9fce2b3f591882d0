//! Error types for building frames.
//!
//! Every element validates its whole configuration when it is built. Failures
//! are grouped in three kinds, each with its own enum so callers can match on
//! the kind ([`FrameError::kind`]) or on the precise cause.

use thiserror::Error;

/// Malformed or semantically invalid content or configuration.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// Content was not text or a list of text lines.
    #[error("content must be a string or a list of strings, got {0}")]
    InvalidContent(String),

    /// Every content line is empty or whitespace.
    #[error("content cannot be empty")]
    EmptyContent,

    /// Alignment name outside of left, center, right.
    #[error("alignment must be one of left, center, right, got '{0}'")]
    InvalidAlign(String),

    /// Minimum width that is not a non-negative integer (or, for tables, a
    /// map of column to such an integer).
    #[error("minimum width must be a non-negative integer, got {0}")]
    InvalidMinWidth(String),

    /// Maximum width that is not a non-negative integer.
    #[error("maximum width must be a non-negative integer, got {0}")]
    InvalidMaxWidth(String),

    /// On/off setting that is not a boolean.
    #[error("{field} must be true or false, got {found}")]
    InvalidFlag { field: String, found: String },

    /// Unknown menu numbering scheme.
    #[error("unknown index scheme '{0}'")]
    InvalidIndexScheme(String),

    /// Menu items were not a list of strings.
    #[error("menu items must be a list of strings, got {0}")]
    InvalidItems(String),

    /// Menu has no items.
    #[error("menu cannot be empty")]
    EmptyMenu,

    /// Custom prefixes were not a list of strings.
    #[error("custom prefix must be a list of strings, got {0}")]
    InvalidPrefix(String),

    /// Custom prefix list length differs from the item count.
    #[error("custom prefix has {prefixes} entries for {items} menu items")]
    PrefixCountMismatch { prefixes: usize, items: usize },

    /// Both a numbering scheme and custom prefixes were configured.
    #[error("cannot use both a custom prefix and an index scheme")]
    PrefixIndexConflict,

    /// Table data is not a list of rows.
    #[error("table data must be a list of lists or a list of maps, got {0}")]
    InvalidDataType(String),

    /// Table has no rows.
    #[error("table cannot be empty")]
    EmptyTable,

    /// Headers derived from list rows need a header row plus data.
    #[error("table needs at least 2 rows when headers come from the data, got {0}")]
    InsufficientRows(usize),

    /// List rows have different lengths.
    #[error("all rows must have the same number of columns, got lengths {0:?}")]
    InconsistentRowLengths(Vec<usize>),

    /// Map rows have different key sets.
    #[error("all rows must have the same keys, expected {expected:?}, row {row} has {found:?}")]
    InconsistentKeys {
        row: usize,
        expected: Vec<String>,
        found: Vec<String>,
    },

    /// Explicit header labels do not match the column count.
    #[error("got {headers} headers for {columns} columns")]
    HeaderCountMismatch { headers: usize, columns: usize },

    /// Header configuration is neither none, from_data nor a label list.
    #[error("headers must be none, from_data or a list of strings, got {0}")]
    InvalidHeaders(String),

    /// Override keyed by a column that does not exist.
    #[error("column index {index} out of range, table has {columns} columns")]
    ColumnOutOfRange { index: usize, columns: usize },

    /// Per-row alignment override with the wrong number of entries.
    #[error("column {column} has {found} row alignments for {rows} rows")]
    AlignmentCountMismatch {
        column: usize,
        found: usize,
        rows: usize,
    },

    /// Cell value that is not text, integer, real number or null.
    #[error("cell in row {row}, column {column} must be text or a number, got {found}")]
    InvalidCellType {
        row: usize,
        column: usize,
        found: String,
    },

    /// Cell text longer than the configured column ceiling.
    #[error("cell in column {column} has length {length}, maximum is {max}")]
    CellTooLong {
        column: usize,
        length: usize,
        max: usize,
    },

    /// Resolved column width above the configured column ceiling.
    #[error("column {column} has width {width}, maximum is {max}")]
    ColumnTooWide {
        column: usize,
        width: usize,
        max: usize,
    },

    /// Total table width above the configured table ceiling.
    #[error("table has width {width}, maximum is {max}")]
    TableTooWide { width: usize, max: usize },
}

/// Padding that is malformed, negative, or combined with centering.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PaddingError {
    /// A padding amount below zero.
    #[error("padding must not be negative, got ({left}, {right})")]
    Negative { left: i64, right: i64 },

    /// Padding shape does not match the element's regions.
    #[error("padding must be a number or {expected} (left, right) pairs, got {found}")]
    Malformed { expected: usize, found: String },

    /// Non-zero padding on a centered region.
    #[error("cannot use padding ({left}, {right}) with center alignment in {region}")]
    CenterConflict {
        region: String,
        left: usize,
        right: usize,
    },
}

/// Unknown border style.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StyleError {
    /// Name not present in the style registry.
    #[error("style must be one of single, double, bold, simple, got '{0}'")]
    Unknown(String),

    /// Style given as something other than a name.
    #[error("style must be a string, got {0}")]
    NotAName(String),
}

/// The coarse category of a [`FrameError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    Padding,
    Style,
    Config,
}

/// Error returned by every element builder.
#[derive(Debug, Error)]
pub enum FrameError {
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("padding error: {0}")]
    Padding(#[from] PaddingError),

    #[error("style error: {0}")]
    Style(#[from] StyleError),

    /// Configuration document could not be parsed.
    #[error("config error: {0}")]
    Config(String),
}

impl FrameError {
    /// Returns the kind of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            FrameError::Validation(_) => ErrorKind::Validation,
            FrameError::Padding(_) => ErrorKind::Padding,
            FrameError::Style(_) => ErrorKind::Style,
            FrameError::Config(_) => ErrorKind::Config,
        }
    }
}

impl From<serde_yaml::Error> for FrameError {
    fn from(err: serde_yaml::Error) -> Self {
        FrameError::Config(err.to_string())
    }
}

impl From<serde_json::Error> for FrameError {
    fn from(err: serde_json::Error) -> Self {
        FrameError::Config(err.to_string())
    }
}

/// Result type for frame construction.
pub type Result<T> = std::result::Result<T, FrameError>;
