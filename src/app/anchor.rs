//! Anchor cell selection shared by the allocator and the aligner.

use tabalign_domain::{AnchorPolicy, FontContext};

use crate::ports::TextMeasurer;

/// The cell judged longest in a column, with its rendered width.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Anchor<'a> {
    pub text: &'a str,
    pub width_px: f64,
}

pub fn select_anchor<'a, I>(
    texts: I,
    policy: AnchorPolicy,
    font: &FontContext,
    measurer: &dyn TextMeasurer,
) -> Option<Anchor<'a>>
where
    I: IntoIterator<Item = &'a str>,
{
    match policy {
        AnchorPolicy::CharCount => {
            let text = longest_by_chars(texts)?;
            Some(Anchor {
                text,
                width_px: measure(measurer, text, font),
            })
        }
        AnchorPolicy::RenderedWidth => {
            let mut widest: Option<Anchor<'a>> = None;
            for text in texts.into_iter().filter(|t| !t.is_empty()) {
                let width_px = measure(measurer, text, font);
                if widest.is_none_or(|w| width_px > w.width_px) {
                    widest = Some(Anchor { text, width_px });
                }
            }
            widest
        }
    }
}

/// Text with the most characters; the first one wins a tie.
///
/// Empty texts never qualify, so an all-empty input yields `None`.
pub fn longest_by_chars<'a, I>(texts: I) -> Option<&'a str>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut longest: Option<(&'a str, usize)> = None;
    for text in texts {
        let len = text.chars().count();
        if len > longest.map_or(0, |(_, l)| l) {
            longest = Some((text, len));
        }
    }
    longest.map(|(text, _)| text)
}

/// Negative or non-finite measurements count as zero width.
pub(crate) fn measure(measurer: &dyn TextMeasurer, text: &str, font: &FontContext) -> f64 {
    let width = measurer.measure(text, font);
    if width.is_finite() && width > 0.0 {
        width
    } else {
        0.0
    }
}
