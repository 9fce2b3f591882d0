//! Core configuration types shared by every element.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{PaddingError, ValidationError};
use crate::util::json_type_name;

/// Text alignment within a field.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Align {
    /// Left-align text (pad on the right).
    #[default]
    Left,
    /// Center text, extra space goes to the right.
    Center,
    /// Right-align text (pad on the left).
    Right,
}

impl Align {
    pub fn name(&self) -> &'static str {
        match self {
            Align::Left => "left",
            Align::Center => "center",
            Align::Right => "right",
        }
    }
}

impl fmt::Display for Align {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Align {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "left" => Ok(Align::Left),
            "center" => Ok(Align::Center),
            "right" => Ok(Align::Right),
            other => Err(ValidationError::InvalidAlign(other.to_string())),
        }
    }
}

/// Horizontal padding as literal spaces inserted (left, right) of the text.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Padding {
    pub left: usize,
    pub right: usize,
}

impl Padding {
    /// No padding on either side.
    pub const ZERO: Padding = Padding { left: 0, right: 0 };

    pub fn new(left: usize, right: usize) -> Self {
        Padding { left, right }
    }

    /// The same amount on both sides.
    pub fn uniform(amount: usize) -> Self {
        Padding::new(amount, amount)
    }

    /// Sum of both sides.
    pub fn total(&self) -> usize {
        self.left + self.right
    }

    pub fn is_zero(&self) -> bool {
        self.left == 0 && self.right == 0
    }
}

impl From<usize> for Padding {
    fn from(amount: usize) -> Self {
        Padding::uniform(amount)
    }
}

impl From<(usize, usize)> for Padding {
    fn from((left, right): (usize, usize)) -> Self {
        Padding::new(left, right)
    }
}

impl TryFrom<(i64, i64)> for Padding {
    type Error = PaddingError;

    fn try_from((left, right): (i64, i64)) -> Result<Self, Self::Error> {
        match (usize::try_from(left), usize::try_from(right)) {
            (Ok(l), Ok(r)) => Ok(Padding::new(l, r)),
            _ => Err(PaddingError::Negative { left, right }),
        }
    }
}

/// Text content given either as one string or as a list of lines.
///
/// A single string is split on `\n`; a list is taken line by line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TextInput {
    Line(String),
    Lines(Vec<String>),
}

impl TextInput {
    /// Resolve into the canonical ordered sequence of lines.
    pub fn into_lines(self) -> Vec<String> {
        match self {
            TextInput::Line(text) => text.split('\n').map(str::to_string).collect(),
            TextInput::Lines(lines) => lines,
        }
    }

    /// Read text content from a JSON value (a string or a list of strings).
    pub fn from_json(value: &Value) -> Result<Self, ValidationError> {
        match value {
            Value::String(s) => Ok(TextInput::Line(s.clone())),
            Value::Array(items) => items
                .iter()
                .map(|item| match item {
                    Value::String(s) => Ok(s.clone()),
                    other => Err(ValidationError::InvalidContent(format!(
                        "a list containing {}",
                        json_type_name(other)
                    ))),
                })
                .collect::<Result<Vec<_>, _>>()
                .map(TextInput::Lines),
            other => Err(ValidationError::InvalidContent(
                json_type_name(other).to_string(),
            )),
        }
    }
}

impl From<&str> for TextInput {
    fn from(text: &str) -> Self {
        TextInput::Line(text.to_string())
    }
}

impl From<String> for TextInput {
    fn from(text: String) -> Self {
        TextInput::Line(text)
    }
}

impl From<Vec<String>> for TextInput {
    fn from(lines: Vec<String>) -> Self {
        TextInput::Lines(lines)
    }
}

impl From<Vec<&str>> for TextInput {
    fn from(lines: Vec<&str>) -> Self {
        TextInput::Lines(lines.into_iter().map(str::to_string).collect())
    }
}

impl From<&[&str]> for TextInput {
    fn from(lines: &[&str]) -> Self {
        TextInput::Lines(lines.iter().map(|s| s.to_string()).collect())
    }
}

impl<const N: usize> From<[&str; N]> for TextInput {
    fn from(lines: [&str; N]) -> Self {
        TextInput::Lines(lines.iter().map(|s| s.to_string()).collect())
    }
}

/// Numbering scheme for menu items.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IndexScheme {
    /// `1. `, `2. `, ...
    #[serde(rename = "number.dot")]
    NumberDot,
    /// `1) `, `2) `, ...
    #[serde(rename = "number.parentheses")]
    NumberParentheses,
    /// `A. `, `B. `, ...
    #[serde(rename = "letter.upper.dot")]
    LetterUpperDot,
    /// `A) `, `B) `, ...
    #[serde(rename = "letter.upper.parentheses")]
    LetterUpperParentheses,
    /// `a. `, `b. `, ...
    #[serde(rename = "letter.lower.dot")]
    LetterLowerDot,
    /// `a) `, `b) `, ...
    #[serde(rename = "letter.lower.parentheses")]
    LetterLowerParentheses,
}

impl IndexScheme {
    pub const ALL: [IndexScheme; 6] = [
        IndexScheme::NumberDot,
        IndexScheme::NumberParentheses,
        IndexScheme::LetterUpperDot,
        IndexScheme::LetterUpperParentheses,
        IndexScheme::LetterLowerDot,
        IndexScheme::LetterLowerParentheses,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            IndexScheme::NumberDot => "number.dot",
            IndexScheme::NumberParentheses => "number.parentheses",
            IndexScheme::LetterUpperDot => "letter.upper.dot",
            IndexScheme::LetterUpperParentheses => "letter.upper.parentheses",
            IndexScheme::LetterLowerDot => "letter.lower.dot",
            IndexScheme::LetterLowerParentheses => "letter.lower.parentheses",
        }
    }

    fn closer(&self) -> char {
        match self {
            IndexScheme::NumberDot | IndexScheme::LetterUpperDot | IndexScheme::LetterLowerDot => {
                '.'
            }
            _ => ')',
        }
    }

    /// Prefix for the item at zero-based `index`, including the trailing space.
    ///
    /// Letter schemes run out after `z`; from the 27th item on they fall back
    /// to the item's 1-based number.
    ///
    /// ```rust
    /// use termframe::IndexScheme;
    ///
    /// assert_eq!(IndexScheme::NumberDot.prefix(0), "1. ");
    /// assert_eq!(IndexScheme::NumberParentheses.prefix(9), "10) ");
    /// assert_eq!(IndexScheme::LetterLowerDot.prefix(1), "b. ");
    /// assert_eq!(IndexScheme::LetterUpperDot.prefix(26), "27. ");
    /// ```
    pub fn prefix(&self, index: usize) -> String {
        let label = match self {
            IndexScheme::NumberDot | IndexScheme::NumberParentheses => (index + 1).to_string(),
            IndexScheme::LetterUpperDot | IndexScheme::LetterUpperParentheses => {
                letter_or_number(b'A', index)
            }
            IndexScheme::LetterLowerDot | IndexScheme::LetterLowerParentheses => {
                letter_or_number(b'a', index)
            }
        };
        format!("{}{} ", label, self.closer())
    }
}

fn letter_or_number(base: u8, index: usize) -> String {
    match u8::try_from(index) {
        Ok(offset) if offset < 26 => char::from(base + offset).to_string(),
        _ => (index + 1).to_string(),
    }
}

impl fmt::Display for IndexScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for IndexScheme {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        IndexScheme::ALL
            .into_iter()
            .find(|scheme| scheme.name() == s)
            .ok_or_else(|| ValidationError::InvalidIndexScheme(s.to_string()))
    }
}
