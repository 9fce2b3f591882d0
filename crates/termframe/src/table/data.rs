//! Row shapes and their normalization into a positional grid.

use std::collections::BTreeSet;

use indexmap::IndexMap;
use serde_json::Value;

use super::cell::Cell;
use crate::error::ValidationError;
use crate::util::json_type_name;

/// One input row: either ordered cells or cells keyed by column name.
#[derive(Clone, Debug, PartialEq)]
pub enum Row {
    Positional(Vec<Cell>),
    Keyed(IndexMap<String, Cell>),
}

impl Row {
    /// Build a keyed row from `(name, value)` pairs, in column order.
    pub fn keyed<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Cell>,
    {
        Row::Keyed(
            pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    /// Read a row from a JSON list or object.
    pub fn from_json(value: &Value, row: usize) -> Result<Self, ValidationError> {
        match value {
            Value::Array(items) => items
                .iter()
                .enumerate()
                .map(|(column, item)| Cell::from_json(item, row, column))
                .collect::<Result<Vec<_>, _>>()
                .map(Row::Positional),
            Value::Object(map) => map
                .iter()
                .enumerate()
                .map(|(column, (key, item))| {
                    Cell::from_json(item, row, column).map(|cell| (key.clone(), cell))
                })
                .collect::<Result<IndexMap<_, _>, _>>()
                .map(Row::Keyed),
            other => Err(ValidationError::InvalidDataType(format!(
                "a list containing {}",
                json_type_name(other)
            ))),
        }
    }

    /// Number of cells in the row.
    pub fn len(&self) -> usize {
        match self {
            Row::Positional(cells) => cells.len(),
            Row::Keyed(cells) => cells.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T: Into<Cell>> From<Vec<T>> for Row {
    fn from(cells: Vec<T>) -> Self {
        Row::Positional(cells.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Cell>, const N: usize> From<[T; N]> for Row {
    fn from(cells: [T; N]) -> Self {
        Row::Positional(cells.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Cell>> From<IndexMap<String, T>> for Row {
    fn from(cells: IndexMap<String, T>) -> Self {
        Row::Keyed(cells.into_iter().map(|(k, v)| (k, v.into())).collect())
    }
}

/// Read table rows from a JSON list of lists or list of objects.
pub fn rows_from_json(value: &Value) -> Result<Vec<Row>, ValidationError> {
    match value {
        Value::Array(rows) => rows
            .iter()
            .enumerate()
            .map(|(i, row)| Row::from_json(row, i))
            .collect(),
        other => Err(ValidationError::InvalidDataType(
            json_type_name(other).to_string(),
        )),
    }
}

/// Where header labels come from.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Headers {
    /// No header row.
    None,
    /// The first row of positional data, or the keys of keyed data.
    #[default]
    FromData,
    /// Explicit labels, one per column.
    Labels(Vec<String>),
}

impl Headers {
    /// Read a header setting: `null`, `"none"` (or `"None"`), `"from_data"`
    /// or a list of labels.
    pub fn from_json(value: &Value) -> Result<Self, ValidationError> {
        match value {
            Value::Null => Ok(Headers::None),
            Value::String(s) if s == "none" || s == "None" => Ok(Headers::None),
            Value::String(s) if s == "from_data" => Ok(Headers::FromData),
            Value::Array(items) => items
                .iter()
                .map(|item| match item {
                    Value::String(s) => Ok(s.clone()),
                    other => Err(ValidationError::InvalidHeaders(format!(
                        "a list containing {}",
                        json_type_name(other)
                    ))),
                })
                .collect::<Result<Vec<_>, _>>()
                .map(Headers::Labels),
            Value::String(s) => Err(ValidationError::InvalidHeaders(format!("'{}'", s))),
            other => Err(ValidationError::InvalidHeaders(
                json_type_name(other).to_string(),
            )),
        }
    }
}

impl<S: Into<String>> From<Vec<S>> for Headers {
    fn from(labels: Vec<S>) -> Self {
        Headers::Labels(labels.into_iter().map(Into::into).collect())
    }
}

impl<S: Into<String>, const N: usize> From<[S; N]> for Headers {
    fn from(labels: [S; N]) -> Self {
        Headers::Labels(labels.into_iter().map(Into::into).collect())
    }
}

/// Rows after validation: a rectangular grid plus the header labels.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct Grid {
    pub headers: Option<Vec<String>>,
    pub rows: Vec<Vec<Cell>>,
    pub columns: usize,
}

/// Validate row shapes and resolve headers.
///
/// Positional rows must all have the same length; with
/// [`Headers::FromData`] the first row becomes the header row, so at least
/// two rows are required. Keyed rows must share one key set; column order is
/// the key order of the first row, and the keys double as header labels.
pub(crate) fn normalize(rows: Vec<Row>, headers: &Headers) -> Result<Grid, ValidationError> {
    let keyed = match rows.first() {
        None => return Err(ValidationError::EmptyTable),
        Some(row) => matches!(row, Row::Keyed(_)),
    };

    if keyed {
        normalize_keyed(rows, headers)
    } else {
        normalize_positional(rows, headers)
    }
}

fn normalize_positional(rows: Vec<Row>, headers: &Headers) -> Result<Grid, ValidationError> {
    let mut grid = Vec::with_capacity(rows.len());
    for row in rows {
        match row {
            Row::Positional(cells) => grid.push(cells),
            Row::Keyed(_) => return Err(mixed_shapes()),
        }
    }

    if *headers == Headers::FromData && grid.len() < 2 {
        return Err(ValidationError::InsufficientRows(grid.len()));
    }

    let lengths: Vec<usize> = grid.iter().map(Vec::len).collect();
    let columns = lengths[0];
    if lengths.iter().any(|&len| len != columns) {
        return Err(ValidationError::InconsistentRowLengths(lengths));
    }

    let labels = match headers {
        Headers::None => None,
        Headers::FromData => Some(grid.remove(0).iter().map(Cell::render).collect()),
        Headers::Labels(labels) => Some(checked_labels(labels, columns)?),
    };

    Ok(Grid {
        headers: labels,
        rows: grid,
        columns,
    })
}

fn normalize_keyed(rows: Vec<Row>, headers: &Headers) -> Result<Grid, ValidationError> {
    let mut maps = Vec::with_capacity(rows.len());
    for row in rows {
        match row {
            Row::Keyed(cells) => maps.push(cells),
            Row::Positional(_) => return Err(mixed_shapes()),
        }
    }

    let keys: Vec<String> = maps[0].keys().cloned().collect();
    let expected: BTreeSet<&String> = keys.iter().collect();
    for (i, map) in maps.iter().enumerate().skip(1) {
        let found: BTreeSet<&String> = map.keys().collect();
        if found != expected {
            return Err(ValidationError::InconsistentKeys {
                row: i,
                expected: keys.clone(),
                found: map.keys().cloned().collect(),
            });
        }
    }

    let columns = keys.len();
    let grid: Vec<Vec<Cell>> = maps
        .into_iter()
        .map(|mut map| {
            keys.iter()
                .map(|key| map.swap_remove(key).unwrap_or(Cell::Null))
                .collect::<Vec<_>>()
        })
        .collect();

    let labels = match headers {
        Headers::None => None,
        Headers::FromData => Some(keys),
        Headers::Labels(labels) => Some(checked_labels(labels, columns)?),
    };

    Ok(Grid {
        headers: labels,
        rows: grid,
        columns,
    })
}

fn checked_labels(labels: &[String], columns: usize) -> Result<Vec<String>, ValidationError> {
    if labels.len() != columns {
        return Err(ValidationError::HeaderCountMismatch {
            headers: labels.len(),
            columns,
        });
    }
    Ok(labels.to_vec())
}

fn mixed_shapes() -> ValidationError {
    ValidationError::InvalidDataType("a list mixing lists and maps".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn text_rows(rows: &[&[&str]]) -> Vec<Row> {
        rows.iter().map(|row| Row::from(row.to_vec())).collect()
    }

    #[test]
    fn positional_from_data_consumes_first_row() {
        let grid = normalize(text_rows(&[&["A", "B"], &["1", "2"]]), &Headers::FromData).unwrap();
        assert_eq!(grid.headers, Some(vec!["A".to_string(), "B".to_string()]));
        assert_eq!(grid.rows.len(), 1);
        assert_eq!(grid.columns, 2);
    }

    #[test]
    fn positional_without_headers_keeps_all_rows() {
        let grid = normalize(text_rows(&[&["A", "B"]]), &Headers::None).unwrap();
        assert_eq!(grid.headers, None);
        assert_eq!(grid.rows.len(), 1);
    }

    #[test]
    fn single_row_cannot_supply_headers() {
        assert_eq!(
            normalize(text_rows(&[&["A"]]), &Headers::FromData),
            Err(ValidationError::InsufficientRows(1))
        );
    }

    #[test]
    fn ragged_rows() {
        assert_eq!(
            normalize(text_rows(&[&["A", "B"], &["1"]]), &Headers::None),
            Err(ValidationError::InconsistentRowLengths(vec![2, 1]))
        );
    }

    #[test]
    fn keyed_rows_follow_first_row_order() {
        let rows = vec![
            Row::keyed([("Name", Cell::from("Alice")), ("Age", Cell::from(30))]),
            Row::keyed([("Age", Cell::from(25)), ("Name", Cell::from("Bob"))]),
        ];
        let grid = normalize(rows, &Headers::FromData).unwrap();
        assert_eq!(grid.headers, Some(vec!["Name".to_string(), "Age".to_string()]));
        assert_eq!(grid.rows[1], vec![Cell::from("Bob"), Cell::Int(25)]);
    }

    #[test]
    fn keyed_rows_with_labels_read_values_by_key() {
        let rows = vec![Row::keyed([("n", 1), ("m", 2)])];
        let grid = normalize(rows, &Headers::from(["First", "Second"])).unwrap();
        assert_eq!(grid.headers, Some(vec!["First".to_string(), "Second".to_string()]));
        assert_eq!(grid.rows[0], vec![Cell::Int(1), Cell::Int(2)]);
    }

    #[test]
    fn keyed_rows_with_different_keys() {
        let rows = vec![Row::keyed([("a", 1)]), Row::keyed([("b", 1)])];
        let err = normalize(rows, &Headers::FromData).unwrap_err();
        assert!(matches!(err, ValidationError::InconsistentKeys { row: 1, .. }));
    }

    #[test]
    fn label_count_must_match() {
        let err = normalize(text_rows(&[&["a", "b"]]), &Headers::from(["x"])).unwrap_err();
        assert_eq!(
            err,
            ValidationError::HeaderCountMismatch {
                headers: 1,
                columns: 2
            }
        );
    }

    #[test]
    fn mixed_shapes_rejected() {
        let rows = vec![Row::from(vec!["a"]), Row::keyed([("a", 1)])];
        assert!(matches!(
            normalize(rows, &Headers::None),
            Err(ValidationError::InvalidDataType(_))
        ));
    }

    #[test]
    fn empty_table() {
        assert_eq!(normalize(Vec::new(), &Headers::None), Err(ValidationError::EmptyTable));
    }

    #[test]
    fn rows_from_json_shapes() {
        let rows = rows_from_json(&json!([["a", 1], {"k": null}])).unwrap();
        assert_eq!(rows[0], Row::Positional(vec![Cell::from("a"), Cell::Int(1)]));
        assert_eq!(rows[1].len(), 1);
        assert!(matches!(
            rows_from_json(&json!("rows")),
            Err(ValidationError::InvalidDataType(_))
        ));
        assert!(rows_from_json(&json!([1, 2])).is_err());
    }

    #[test]
    fn headers_from_json() {
        assert_eq!(Headers::from_json(&json!(null)), Ok(Headers::None));
        assert_eq!(Headers::from_json(&json!("none")), Ok(Headers::None));
        assert_eq!(Headers::from_json(&json!("None")), Ok(Headers::None));
        assert_eq!(Headers::from_json(&json!("from_data")), Ok(Headers::FromData));
        assert_eq!(
            Headers::from_json(&json!(["a"])),
            Ok(Headers::Labels(vec!["a".into()]))
        );
        assert!(Headers::from_json(&json!("keys")).is_err());
        assert!(Headers::from_json(&json!(3)).is_err());
    }
}
