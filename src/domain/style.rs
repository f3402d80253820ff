use super::align::{PaddingSide, TextAlign};

pub const DEFAULT_FONT_FAMILY: &str = "monospace";
pub const DEFAULT_FONT_SIZE_PX: f64 = 16.0;
pub const DEFAULT_ADVANCE_RATIO: f64 = 0.5;

/// Font metrics a table renders with.
///
/// Measurements are only comparable with a cell's box width when they are
/// taken with the table's own font context.
#[derive(Debug, Clone, PartialEq)]
pub struct FontContext {
    pub family: String,
    pub size_px: f64,
    /// Advance width of one monospace cell as a fraction of `size_px`.
    pub advance_ratio: f64,
}

impl Default for FontContext {
    fn default() -> Self {
        Self {
            family: DEFAULT_FONT_FAMILY.to_string(),
            size_px: DEFAULT_FONT_SIZE_PX,
            advance_ratio: DEFAULT_ADVANCE_RATIO,
        }
    }
}

impl FontContext {
    pub fn new(family: impl Into<String>, size_px: f64, advance_ratio: f64) -> Self {
        Self {
            family: family.into(),
            size_px,
            advance_ratio,
        }
    }

    /// Pixel width of a single terminal cell.
    pub fn cell_advance_px(&self) -> f64 {
        (self.size_px * self.advance_ratio).max(0.0)
    }
}

/// Presentation attributes written onto a cell by the aligner.
///
/// `None` means "not set inline", i.e. the presentation layer's default.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CellStyle {
    pub text_align: Option<TextAlign>,
    pub padding_left: Option<f64>,
    pub padding_right: Option<f64>,
    pub width_percent: Option<f64>,
}

impl CellStyle {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub fn padding(&self, side: PaddingSide) -> Option<f64> {
        match side {
            PaddingSide::Left => self.padding_left,
            PaddingSide::Right => self.padding_right,
        }
    }

    pub fn set_padding(&mut self, side: PaddingSide, value: Option<f64>) {
        match side {
            PaddingSide::Left => self.padding_left = value,
            PaddingSide::Right => self.padding_right = value,
        }
    }

    pub fn clear_alignment(&mut self) {
        *self = Self::default();
    }
}
