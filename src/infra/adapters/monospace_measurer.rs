use unicode_width::UnicodeWidthStr;

use tabalign_app::ports::TextMeasurer;
use tabalign_domain::FontContext;

/// Measures text as a run of monospace cells.
///
/// Wide (CJK) characters count as two cells, zero-width ones as none.
#[derive(Debug, Clone, Copy, Default)]
pub struct MonospaceMeasurer;

impl MonospaceMeasurer {
    pub fn new() -> Self {
        Self
    }

    pub fn cells(text: &str) -> usize {
        text.width()
    }
}

impl TextMeasurer for MonospaceMeasurer {
    fn measure(&self, text: &str, font: &FontContext) -> f64 {
        Self::cells(text) as f64 * font.cell_advance_px()
    }
}
