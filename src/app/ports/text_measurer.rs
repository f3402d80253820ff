use tabalign_domain::FontContext;

/// Measures rendered text width.
///
/// Must use exactly the metrics of `font`; the aligner compares the result
/// with cell box widths of the same table.
#[cfg_attr(test, mockall::automock)]
pub trait TextMeasurer: Send + Sync {
    fn measure(&self, text: &str, font: &FontContext) -> f64;
}
