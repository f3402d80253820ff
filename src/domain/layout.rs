use super::align::{PaddingSide, TextAlign};
use super::style::CellStyle;

/// Width advice for one column, produced by the allocator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColumnLayout {
    /// Measured width of the column's longest text plus padding; 0 when empty.
    pub render_width_px: f64,
    /// Share of the table width; unset when every column is empty.
    pub width_percent: Option<f64>,
}

/// Padding shared by every cell of a column.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AlignmentResult {
    /// `None` leaves the cell's current justification alone.
    pub text_align: Option<TextAlign>,
    pub padding_side: PaddingSide,
    /// Always non-negative.
    pub padding_px: f64,
}

impl AlignmentResult {
    /// Writes this result onto a cell: justification, then the padding on
    /// `padding_side` with the opposite side cleared.
    pub fn apply_to(&self, style: &mut CellStyle) {
        style.padding_left = None;
        style.padding_right = None;
        if let Some(text_align) = self.text_align {
            style.text_align = Some(text_align);
        }
        style.set_padding(self.padding_side, Some(self.padding_px));
    }
}
