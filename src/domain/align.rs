use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Requested alignment mode for a column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlignMode {
    #[default]
    Left,
    Right,
    Center,
}

impl AlignMode {
    pub fn all_variants() -> &'static [AlignMode] {
        &[AlignMode::Left, AlignMode::Right, AlignMode::Center]
    }

    /// Cycles left -> center -> right -> left.
    pub fn next(self) -> Self {
        match self {
            AlignMode::Left => AlignMode::Center,
            AlignMode::Center => AlignMode::Right,
            AlignMode::Right => AlignMode::Left,
        }
    }
}

impl fmt::Display for AlignMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AlignMode::Left => write!(f, "left"),
            AlignMode::Right => write!(f, "right"),
            AlignMode::Center => write!(f, "center"),
        }
    }
}

impl FromStr for AlignMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "left" => Ok(AlignMode::Left),
            "right" => Ok(AlignMode::Right),
            "center" | "centre" => Ok(AlignMode::Center),
            _ => Err(format!("Unknown align mode: {}", s)),
        }
    }
}

/// Justification written to a cell's style
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAlign {
    Left,
    Right,
    Center,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaddingSide {
    Left,
    Right,
}

/// What right-mode alignment does with the cell's justification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RightJustify {
    /// Justify right-mode cells to the right.
    #[default]
    Right,
    /// Leave whatever justification the cell already has.
    Inherit,
}

/// How the anchor ("longest") cell of a column is chosen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AnchorPolicy {
    /// Most characters wins. The padding math still uses rendered width, so
    /// with proportional fonts this may not be the widest cell.
    #[default]
    CharCount,
    /// Widest rendered width wins.
    RenderedWidth,
}
