//! Table cell values and their text form.

use std::fmt;

use serde_json::Value;

use crate::error::ValidationError;
use crate::util::json_type_name;

/// A scalar table cell.
#[derive(Clone, Debug, PartialEq)]
pub enum Cell {
    Text(String),
    Int(i64),
    Float(f64),
    /// A missing value, rendered as `None`.
    Null,
}

impl Cell {
    /// Read a cell from a JSON value. Only strings, numbers and null are
    /// accepted; `row` and `column` locate the cell in the error.
    pub fn from_json(value: &Value, row: usize, column: usize) -> Result<Self, ValidationError> {
        match value {
            Value::Null => Ok(Cell::Null),
            Value::String(s) => Ok(Cell::Text(s.clone())),
            Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Ok(Cell::Int(i))
                } else if let Some(u) = n.as_u64() {
                    // Above i64::MAX; the decimal text is all that is rendered.
                    Ok(Cell::Text(u.to_string()))
                } else {
                    Ok(Cell::Float(n.as_f64().unwrap_or(f64::NAN)))
                }
            }
            other => Err(ValidationError::InvalidCellType {
                row,
                column,
                found: json_type_name(other).to_string(),
            }),
        }
    }

    /// The text drawn in the table.
    pub fn render(&self) -> String {
        match self {
            Cell::Text(s) => s.clone(),
            Cell::Int(i) => i.to_string(),
            Cell::Float(f) => format_float(*f),
            Cell::Null => "None".to_string(),
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

/// Shortest round-trip text of a float.
///
/// Integral values keep a trailing `.0`. Magnitudes from `1e16` up and below
/// `1e-4` switch to exponent form with a signed, two-digit exponent.
fn format_float(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        let text = if value > 0.0 { "inf" } else { "-inf" };
        return text.to_string();
    }

    let magnitude = value.abs();
    if magnitude != 0.0 && !(1e-4..1e16).contains(&magnitude) {
        let sci = format!("{:e}", value);
        return match sci.split_once('e') {
            Some((mantissa, exponent)) => {
                let (sign, digits) = match exponent.strip_prefix('-') {
                    Some(digits) => ('-', digits),
                    None => ('+', exponent),
                };
                format!("{}e{}{:0>2}", mantissa, sign, digits)
            }
            None => sci,
        };
    }

    let text = value.to_string();
    if text.contains('.') {
        text
    } else {
        format!("{}.0", text)
    }
}

impl From<&str> for Cell {
    fn from(s: &str) -> Self {
        Cell::Text(s.to_string())
    }
}

impl From<String> for Cell {
    fn from(s: String) -> Self {
        Cell::Text(s)
    }
}

impl From<&String> for Cell {
    fn from(s: &String) -> Self {
        Cell::Text(s.clone())
    }
}

macro_rules! int_cell {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Cell {
                fn from(n: $t) -> Self {
                    Cell::Int(i64::from(n))
                }
            }
        )*
    };
}

int_cell!(i8, i16, i32, i64, u8, u16, u32);

impl From<f64> for Cell {
    fn from(f: f64) -> Self {
        Cell::Float(f)
    }
}

impl From<f32> for Cell {
    fn from(f: f32) -> Self {
        Cell::Float(f64::from(f))
    }
}

impl<T: Into<Cell>> From<Option<T>> for Cell {
    fn from(value: Option<T>) -> Self {
        value.map_or(Cell::Null, Into::into)
    }
}
