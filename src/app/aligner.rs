//! Ratio-anchored column alignment.
//!
//! The column's anchor cell is placed at a fixed fraction of the cell box;
//! the padding that achieves this is then shared by every cell of the column,
//! so shorter entries line up with the anchor's start (left/center modes) or
//! end (right mode) instead of being justified individually.

use tabalign_domain::{
    AlignMode, AlignmentOptions, AlignmentResult, FontContext, PaddingSide, RightJustify,
    TextAlign,
};

use crate::anchor::select_anchor;
use crate::ports::TextMeasurer;

/// Computes the padding shared by a column's cells.
///
/// Returns `None` when every cell is empty; the column is then left as is.
pub fn align_column(
    cell_texts: &[&str],
    cell_box_width_px: f64,
    font: &FontContext,
    measurer: &dyn TextMeasurer,
    mode: AlignMode,
    options: &AlignmentOptions,
) -> Option<AlignmentResult> {
    let anchor = select_anchor(
        cell_texts.iter().copied(),
        options.anchor_policy(),
        font,
        measurer,
    )?;
    let half_text = anchor.width_px / 2.0;

    let (text_align, padding_side, raw_padding) = match mode {
        AlignMode::Left => (
            Some(TextAlign::Left),
            PaddingSide::Left,
            cell_box_width_px * options.left_align_ratio(),
        ),
        AlignMode::Right => (
            match options.right_justify() {
                RightJustify::Right => Some(TextAlign::Right),
                RightJustify::Inherit => None,
            },
            PaddingSide::Right,
            cell_box_width_px * options.right_align_ratio() - half_text,
        ),
        AlignMode::Center => (
            Some(TextAlign::Center),
            PaddingSide::Left,
            cell_box_width_px * options.center_align_ratio() - half_text,
        ),
    };

    Some(AlignmentResult {
        text_align,
        padding_side,
        // f64::max also maps NaN to 0
        padding_px: raw_padding.max(0.0),
    })
}
