//! Border style registry.
//!
//! A [`BorderStyle`] names one of the four built-in glyph sets. Each set maps
//! the twelve semantic border positions (corners, edges, junctions and the
//! header separator) to a single display character.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::StyleError;

/// Border style for all bordered elements.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BorderStyle {
    /// Light box-drawing characters: ┌, ─, ┐, │, └, ┘, ├, ┼, ┤, ┬, ┴ with a ╌ header rule.
    #[default]
    Single,
    /// Double-line box-drawing characters: ╔, ═, ╗, ║, ╚, ╝, ╠, ╬, ╣, ╦, ╩.
    Double,
    /// Heavy box-drawing characters: ┏, ━, ┓, ┃, ┗, ┛, ┣, ╋, ┫, ┳, ┻ with a ╍ header rule.
    Bold,
    /// ASCII only: +, -, | with a = header rule.
    Simple,
}

/// Glyphs for every semantic border position.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BorderGlyphs {
    pub top_left: char,
    pub top_right: char,
    pub bottom_left: char,
    pub bottom_right: char,
    pub horizontal: char,
    pub vertical: char,
    pub cross: char,
    pub mid_left: char,
    pub mid_right: char,
    pub mid_top: char,
    pub mid_bottom: char,
    /// Fill used only for the rule between a header and the data below it.
    pub header_bottom: char,
}

const SINGLE: BorderGlyphs = BorderGlyphs {
    top_left: '┌',
    top_right: '┐',
    bottom_left: '└',
    bottom_right: '┘',
    horizontal: '─',
    vertical: '│',
    cross: '┼',
    mid_left: '├',
    mid_right: '┤',
    mid_top: '┬',
    mid_bottom: '┴',
    header_bottom: '╌',
};

const DOUBLE: BorderGlyphs = BorderGlyphs {
    top_left: '╔',
    top_right: '╗',
    bottom_left: '╚',
    bottom_right: '╝',
    horizontal: '═',
    vertical: '║',
    cross: '╬',
    mid_left: '╠',
    mid_right: '╣',
    mid_top: '╦',
    mid_bottom: '╩',
    header_bottom: '═',
};

const BOLD: BorderGlyphs = BorderGlyphs {
    top_left: '┏',
    top_right: '┓',
    bottom_left: '┗',
    bottom_right: '┛',
    horizontal: '━',
    vertical: '┃',
    cross: '╋',
    mid_left: '┣',
    mid_right: '┫',
    mid_top: '┳',
    mid_bottom: '┻',
    header_bottom: '╍',
};

const SIMPLE: BorderGlyphs = BorderGlyphs {
    top_left: '+',
    top_right: '+',
    bottom_left: '+',
    bottom_right: '+',
    horizontal: '-',
    vertical: '|',
    cross: '+',
    mid_left: '|',
    mid_right: '|',
    mid_top: '+',
    mid_bottom: '+',
    header_bottom: '=',
};

impl BorderStyle {
    /// All registered styles.
    pub const ALL: [BorderStyle; 4] = [
        BorderStyle::Single,
        BorderStyle::Double,
        BorderStyle::Bold,
        BorderStyle::Simple,
    ];

    /// Get the glyph set for this style.
    pub fn glyphs(&self) -> &'static BorderGlyphs {
        match self {
            BorderStyle::Single => &SINGLE,
            BorderStyle::Double => &DOUBLE,
            BorderStyle::Bold => &BOLD,
            BorderStyle::Simple => &SIMPLE,
        }
    }

    /// The registry name of this style.
    pub fn name(&self) -> &'static str {
        match self {
            BorderStyle::Single => "single",
            BorderStyle::Double => "double",
            BorderStyle::Bold => "bold",
            BorderStyle::Simple => "simple",
        }
    }
}

impl fmt::Display for BorderStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for BorderStyle {
    type Err = StyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BorderStyle::ALL
            .into_iter()
            .find(|style| style.name() == s)
            .ok_or_else(|| StyleError::Unknown(s.to_string()))
    }
}

/// Resolve a style name to its registered style.
///
/// # Example
///
/// ```rust
/// use termframe::style::{resolve, BorderStyle};
///
/// assert_eq!(resolve("double").unwrap(), BorderStyle::Double);
/// assert!(resolve("rounded").is_err());
/// ```
pub fn resolve(name: &str) -> Result<BorderStyle, StyleError> {
    name.parse()
}
