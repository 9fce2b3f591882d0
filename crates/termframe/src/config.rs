//! Declarative element configuration.
//!
//! Each config struct mirrors its element builder and can be loaded from YAML
//! or JSON. Content fields stay loosely typed until [`build`] time so that
//! content of the wrong shape fails with the same validation errors as the
//! builders, not with a parse error.
//!
//! Padding is either one number, applied to both sides of every region, or
//! explicit `[left, right]` pairs: one pair for a message, `[header, items,
//! footer]` for a menu and `[headers, data]` for a table.
//!
//! ```rust
//! use termframe::config::TableConfig;
//!
//! let config = TableConfig::from_yaml(
//!     r#"
//! data:
//!   - [Name, Qty]
//!   - [apples, 3]
//! align: [left, right]
//! style: simple
//! "#,
//! )?;
//! let table = config.build()?;
//! assert_eq!(table.text().lines().nth(3), Some("|apples|  3|"));
//! # Ok::<(), termframe::FrameError>(())
//! ```
//!
//! [`build`]: MessageConfig::build

use std::collections::BTreeMap;

use serde::Deserialize;
use serde_json::Value;

use crate::error::{PaddingError, Result, StyleError, ValidationError};
use crate::menu::Menu;
use crate::message::Message;
use crate::style::{resolve, BorderStyle};
use crate::table::{rows_from_json, ColumnAlign, Headers, Table};
use crate::types::{Align, IndexScheme, Padding, TextInput};
use crate::util::json_type_name;
use crate::width::ColumnMinimum;

/// Configuration of a [`Message`].
#[derive(Clone, Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MessageConfig {
    /// A string or a list of lines.
    pub text: Value,
    /// An alignment name.
    #[serde(default)]
    pub align: Option<Value>,
    /// Minimum outer width, a non-negative integer.
    #[serde(default)]
    pub min_width: Option<Value>,
    #[serde(default)]
    pub style: Option<Value>,
    #[serde(default)]
    pub padx: Option<Value>,
}

impl MessageConfig {
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Validate the configuration and render the message.
    pub fn build(&self) -> Result<Message> {
        let text = TextInput::from_json(&self.text)?;
        let [align] = parse_aligns::<1>(self.align.as_ref())?;
        let [padding] = parse_padding::<1>(self.padx.as_ref())?;
        Message::builder(text)
            .align(align)
            .min_width(parse_min_width(self.min_width.as_ref())?)
            .style(parse_style(self.style.as_ref())?)
            .padding(padding)
            .build()
    }
}

/// Configuration of a [`Menu`].
#[derive(Clone, Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MenuConfig {
    /// A list of item strings.
    pub items: Value,
    #[serde(default)]
    pub header: Option<Value>,
    #[serde(default)]
    pub footer: Option<Value>,
    /// Numbering scheme name, such as `number.dot`.
    #[serde(default)]
    pub index: Option<Value>,
    /// A list of literal prefixes.
    #[serde(default)]
    pub custom_prefix: Option<Value>,
    /// `[header, items, footer]`.
    #[serde(default)]
    pub align: Option<Value>,
    #[serde(default)]
    pub min_width: Option<Value>,
    #[serde(default)]
    pub style: Option<Value>,
    #[serde(default)]
    pub padx: Option<Value>,
}

impl MenuConfig {
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Validate the configuration and render the menu.
    pub fn build(&self) -> Result<Menu> {
        let items = string_list(&self.items).map_err(ValidationError::InvalidItems)?;
        let [header_align, item_align, footer_align] = parse_aligns::<3>(self.align.as_ref())?;
        let [header_padding, item_padding, footer_padding] = parse_padding::<3>(self.padx.as_ref())?;

        let mut builder = Menu::builder(items)
            .align(header_align, item_align, footer_align)
            .header_padding(header_padding)
            .item_padding(item_padding)
            .footer_padding(footer_padding)
            .min_width(parse_min_width(self.min_width.as_ref())?)
            .style(parse_style(self.style.as_ref())?);
        if let Some(header) = &self.header {
            builder = builder.header(TextInput::from_json(header)?);
        }
        if let Some(footer) = &self.footer {
            builder = builder.footer(TextInput::from_json(footer)?);
        }
        match &self.index {
            None | Some(Value::Null) => {}
            Some(Value::String(name)) => builder = builder.index(name.parse::<IndexScheme>()?),
            Some(other) => {
                return Err(ValidationError::InvalidIndexScheme(other.to_string()).into())
            }
        }
        if let Some(prefixes) = &self.custom_prefix {
            builder = builder.custom_prefix(
                string_list(prefixes).map_err(ValidationError::InvalidPrefix)?,
            );
        }
        builder.build()
    }
}

/// Configuration of a [`Table`].
#[derive(Clone, Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TableConfig {
    /// A list of lists or a list of maps.
    pub data: Value,
    /// `none`, `from_data` (the default) or a list of labels.
    #[serde(default)]
    pub headers: Option<Value>,
    /// Prepend a row-number column.
    #[serde(default)]
    pub index: Option<Value>,
    /// `[headers, data]`.
    #[serde(default)]
    pub align: Option<Value>,
    /// Data column number to an alignment name or a list of one name per row.
    #[serde(default)]
    pub custom_align: BTreeMap<usize, Value>,
    /// A width for every data column, or a map of data column to width.
    #[serde(default)]
    pub min_width: Option<Value>,
    #[serde(default)]
    pub style: Option<Value>,
    #[serde(default)]
    pub padx: Option<Value>,
    #[serde(default)]
    pub row_sep: Option<Value>,
    #[serde(default)]
    pub max_column_width: Option<Value>,
    #[serde(default)]
    pub max_table_width: Option<Value>,
}

impl TableConfig {
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Validate the configuration and render the table.
    pub fn build(&self) -> Result<Table> {
        let rows = rows_from_json(&self.data)?;
        let headers = match &self.headers {
            Some(value) => Headers::from_json(value)?,
            None => Headers::FromData,
        };
        let [header_align, data_align] = parse_aligns::<2>(self.align.as_ref())?;
        let [header_padding, data_padding] = parse_padding::<2>(self.padx.as_ref())?;
        let custom_align = self
            .custom_align
            .iter()
            .map(|(&column, value)| Ok((column, parse_column_align(value)?)))
            .collect::<std::result::Result<BTreeMap<_, _>, ValidationError>>()?;

        let mut builder = Table::builder(rows)
            .headers(headers)
            .index(parse_flag("index", self.index.as_ref())?)
            .align(header_align, data_align)
            .custom_align(custom_align)
            .min_width(parse_column_minimum(self.min_width.as_ref())?)
            .style(parse_style(self.style.as_ref())?)
            .header_padding(header_padding)
            .data_padding(data_padding)
            .row_separator(parse_flag("row_sep", self.row_sep.as_ref())?);
        if let Some(max) = parse_limit(self.max_column_width.as_ref())? {
            builder = builder.max_column_width(max);
        }
        if let Some(max) = parse_limit(self.max_table_width.as_ref())? {
            builder = builder.max_table_width(max);
        }
        builder.build()
    }
}

fn parse_style(value: Option<&Value>) -> std::result::Result<BorderStyle, StyleError> {
    match value {
        None => Ok(BorderStyle::default()),
        Some(Value::String(name)) => resolve(name),
        Some(other) => Err(StyleError::NotAName(json_type_name(other).to_string())),
    }
}

/// Parse exactly `N` alignment names; absent means all left. A single
/// region also takes a bare name.
fn parse_aligns<const N: usize>(
    value: Option<&Value>,
) -> std::result::Result<[Align; N], ValidationError> {
    let mut aligns = [Align::default(); N];
    let names = match value {
        None | Some(Value::Null) => return Ok(aligns),
        Some(single @ Value::String(_)) if N == 1 => std::slice::from_ref(single),
        Some(Value::Array(names)) => names.as_slice(),
        Some(other) => {
            return Err(ValidationError::InvalidAlign(
                json_type_name(other).to_string(),
            ))
        }
    };
    if names.len() != N {
        return Err(ValidationError::InvalidAlign(format!(
            "{} values where {} are expected",
            names.len(),
            N
        )));
    }
    for (slot, name) in aligns.iter_mut().zip(names) {
        *slot = match name {
            Value::String(name) => name.parse()?,
            other => {
                return Err(ValidationError::InvalidAlign(
                    json_type_name(other).to_string(),
                ))
            }
        };
    }
    Ok(aligns)
}

/// Outer minimum width of a message or menu; absent means none.
fn parse_min_width(value: Option<&Value>) -> std::result::Result<usize, ValidationError> {
    match value {
        None | Some(Value::Null) => Ok(0),
        Some(value) => value
            .as_u64()
            .and_then(|width| usize::try_from(width).ok())
            .ok_or_else(|| ValidationError::InvalidMinWidth(value.to_string())),
    }
}

/// Optional maximum width; absent or null disables the limit.
fn parse_limit(value: Option<&Value>) -> std::result::Result<Option<usize>, ValidationError> {
    match value {
        None | Some(Value::Null) => Ok(None),
        Some(value) => value
            .as_u64()
            .and_then(|width| usize::try_from(width).ok())
            .map(Some)
            .ok_or_else(|| ValidationError::InvalidMaxWidth(value.to_string())),
    }
}

fn parse_column_minimum(
    value: Option<&Value>,
) -> std::result::Result<ColumnMinimum, ValidationError> {
    match value {
        None | Some(Value::Null) => Ok(ColumnMinimum::default()),
        Some(value) => ColumnMinimum::deserialize(value)
            .map_err(|_| ValidationError::InvalidMinWidth(value.to_string())),
    }
}

fn parse_flag(field: &str, value: Option<&Value>) -> std::result::Result<bool, ValidationError> {
    match value {
        None | Some(Value::Null) => Ok(false),
        Some(Value::Bool(flag)) => Ok(*flag),
        Some(other) => Err(ValidationError::InvalidFlag {
            field: field.to_string(),
            found: other.to_string(),
        }),
    }
}

fn parse_column_align(value: &Value) -> std::result::Result<ColumnAlign, ValidationError> {
    match value {
        Value::String(name) => Ok(ColumnAlign::Uniform(name.parse()?)),
        Value::Array(names) => names
            .iter()
            .map(|name| match name {
                Value::String(name) => name.parse(),
                other => Err(ValidationError::InvalidAlign(
                    json_type_name(other).to_string(),
                )),
            })
            .collect::<std::result::Result<Vec<_>, _>>()
            .map(ColumnAlign::PerRow),
        other => Err(ValidationError::InvalidAlign(
            json_type_name(other).to_string(),
        )),
    }
}

/// Parse padding for `N` regions: a uniform number, a `[left, right]` pair
/// when `N` is 1, or `N` pairs otherwise.
fn parse_padding<const N: usize>(
    value: Option<&Value>,
) -> std::result::Result<[Padding; N], PaddingError> {
    let malformed = |found: &Value| PaddingError::Malformed {
        expected: N,
        found: found.to_string(),
    };
    let Some(value) = value else {
        return Ok([Padding::ZERO; N]);
    };

    match value {
        Value::Number(n) => {
            let amount = n.as_i64().ok_or_else(|| malformed(value))?;
            let padding = Padding::try_from((amount, amount))?;
            Ok([padding; N])
        }
        Value::Array(items) if N == 1 && items.len() == 2 => {
            Ok([parse_pair(value).ok_or_else(|| malformed(value))??; N])
        }
        Value::Array(items) if items.len() == N => {
            let mut paddings = [Padding::ZERO; N];
            for (slot, item) in paddings.iter_mut().zip(items) {
                *slot = parse_pair(item).ok_or_else(|| malformed(value))??;
            }
            Ok(paddings)
        }
        other => Err(malformed(other)),
    }
}

/// `None` when `value` is not a pair of integers.
fn parse_pair(value: &Value) -> Option<std::result::Result<Padding, PaddingError>> {
    match value.as_array()?.as_slice() {
        [left, right] => Some(Padding::try_from((left.as_i64()?, right.as_i64()?))),
        _ => None,
    }
}

/// A list of strings, or the description of what was found instead.
fn string_list(value: &Value) -> std::result::Result<Vec<String>, String> {
    let Value::Array(items) = value else {
        return Err(json_type_name(value).to_string());
    };
    items
        .iter()
        .map(|item| match item {
            Value::String(s) => Ok(s.clone()),
            other => Err(format!("a list containing {}", json_type_name(other))),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn padding_forms() {
        assert_eq!(parse_padding::<1>(None).unwrap(), [Padding::ZERO]);
        assert_eq!(parse_padding::<1>(Some(&json!(2))).unwrap(), [Padding::new(2, 2)]);
        assert_eq!(
            parse_padding::<1>(Some(&json!([1, 3]))).unwrap(),
            [Padding::new(1, 3)]
        );
        assert_eq!(
            parse_padding::<2>(Some(&json!([[0, 0], [3, 1]]))).unwrap(),
            [Padding::ZERO, Padding::new(3, 1)]
        );
        assert_eq!(
            parse_padding::<3>(Some(&json!(1))).unwrap(),
            [Padding::new(1, 1); 3]
        );
    }

    #[test]
    fn padding_errors() {
        assert_eq!(
            parse_padding::<1>(Some(&json!(-1))),
            Err(PaddingError::Negative { left: -1, right: -1 })
        );
        assert_eq!(
            parse_padding::<2>(Some(&json!([[0, -2], [0, 0]]))),
            Err(PaddingError::Negative { left: 0, right: -2 })
        );
        assert!(matches!(
            parse_padding::<3>(Some(&json!([[1, 1]]))),
            Err(PaddingError::Malformed { expected: 3, .. })
        ));
        assert!(matches!(
            parse_padding::<1>(Some(&json!("wide"))),
            Err(PaddingError::Malformed { .. })
        ));
        assert!(matches!(
            parse_padding::<1>(Some(&json!([1, 2, 3]))),
            Err(PaddingError::Malformed { .. })
        ));
    }

    #[test]
    fn alignment_lists() {
        assert_eq!(parse_aligns::<2>(None).unwrap(), [Align::Left, Align::Left]);
        let names = json!(["center", "right"]);
        assert_eq!(
            parse_aligns::<2>(Some(&names)).unwrap(),
            [Align::Center, Align::Right]
        );
        assert!(parse_aligns::<3>(Some(&names)).is_err());
        assert_eq!(parse_aligns::<1>(Some(&json!("right"))).unwrap(), [Align::Right]);
        assert_eq!(
            parse_aligns::<2>(Some(&json!("right"))),
            Err(ValidationError::InvalidAlign("string".into()))
        );
        assert!(parse_aligns::<2>(Some(&json!(["left", 1]))).is_err());
    }

    #[test]
    fn min_width_values() {
        assert_eq!(parse_min_width(None), Ok(0));
        assert_eq!(parse_min_width(Some(&json!(12))), Ok(12));
        assert_eq!(
            parse_min_width(Some(&json!(-1))),
            Err(ValidationError::InvalidMinWidth("-1".into()))
        );
        assert!(parse_min_width(Some(&json!(2.5))).is_err());

        assert_eq!(
            parse_column_minimum(Some(&json!({"0": 3}))),
            Ok(ColumnMinimum::from([(0, 3)]))
        );
        assert_eq!(parse_column_minimum(Some(&json!(4))), Ok(ColumnMinimum::Uniform(4)));
        assert!(parse_column_minimum(Some(&json!({"0": -3}))).is_err());
        assert!(parse_column_minimum(Some(&json!("wide"))).is_err());
    }

    #[test]
    fn limit_values() {
        assert_eq!(parse_limit(None), Ok(None));
        assert_eq!(parse_limit(Some(&json!(40))), Ok(Some(40)));
        assert!(matches!(
            parse_limit(Some(&json!(-5))),
            Err(ValidationError::InvalidMaxWidth(_))
        ));
    }

    #[test]
    fn flag_values() {
        assert_eq!(parse_flag("index", None), Ok(false));
        assert_eq!(parse_flag("index", Some(&json!(true))), Ok(true));
        assert_eq!(
            parse_flag("row_sep", Some(&json!(1))),
            Err(ValidationError::InvalidFlag {
                field: "row_sep".into(),
                found: "1".into()
            })
        );
    }

    #[test]
    fn style_values() {
        assert_eq!(parse_style(None), Ok(BorderStyle::Single));
        assert_eq!(parse_style(Some(&json!("bold"))), Ok(BorderStyle::Bold));
        assert_eq!(
            parse_style(Some(&json!("fancy"))),
            Err(StyleError::Unknown("fancy".into()))
        );
        assert_eq!(
            parse_style(Some(&json!(1))),
            Err(StyleError::NotAName("number".into()))
        );
    }

    #[test]
    fn column_align_values() {
        assert_eq!(
            parse_column_align(&json!("right")),
            Ok(ColumnAlign::Uniform(Align::Right))
        );
        assert_eq!(
            parse_column_align(&json!(["left", "center"])),
            Ok(ColumnAlign::PerRow(vec![Align::Left, Align::Center]))
        );
        assert!(parse_column_align(&json!(["up"])).is_err());
        assert!(parse_column_align(&json!(3)).is_err());
    }
}
