use unicode_width::UnicodeWidthChar;

use tabalign_domain::{CellStyle, TextAlign};

/// Converts a pixel length to whole terminal cells, rounding to nearest.
pub fn px_to_cells(px: f64, cell_px: f64) -> usize {
    if cell_px <= 0.0 || !px.is_finite() {
        return 0;
    }
    (px / cell_px).round().max(0.0) as usize
}

/// Longest prefix of `text` that fits in `max_width` cells, with its width.
pub fn truncate_to_width(text: &str, max_width: usize) -> (&str, usize) {
    let mut used = 0;
    for (idx, ch) in text.char_indices() {
        let w = ch.width().unwrap_or(0);
        if used + w > max_width {
            return (&text[..idx], used);
        }
        used += w;
    }
    (text, used)
}

/// Lays out one cell's text the way a box with inline padding and
/// `text-align` would: padding is reserved first, the text is justified
/// inside what remains and cut off when it overflows.
///
/// The returned string is always exactly `width` cells wide.
pub fn layout_cell(text: &str, width: u16, style: &CellStyle, cell_px: f64) -> String {
    let width = usize::from(width);
    let left = style
        .padding_left
        .map_or(0, |px| px_to_cells(px, cell_px))
        .min(width);
    let right = style
        .padding_right
        .map_or(0, |px| px_to_cells(px, cell_px))
        .min(width - left);
    let inner = width - left - right;

    let (visible, used) = truncate_to_width(text, inner);
    let slack = inner - used;
    let (before, after) = match style.text_align {
        Some(TextAlign::Right) => (slack, 0),
        Some(TextAlign::Center) => (slack / 2, slack - slack / 2),
        Some(TextAlign::Left) | None => (0, slack),
    };

    format!(
        "{}{}{}",
        " ".repeat(left + before),
        visible,
        " ".repeat(after + right)
    )
}
