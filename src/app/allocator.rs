//! Content-based column width allocation.
//!
//! Each column is sized by its longest text (header included) plus a fixed
//! padding, then every column gets its share of the summed widths as a
//! percentage.

use tabalign_domain::{AnchorPolicy, ColumnCells, ColumnLayout, FontContext};

use crate::anchor::select_anchor;
use crate::ports::TextMeasurer;

pub fn allocate_column_widths(
    columns: &[ColumnCells],
    font: &FontContext,
    measurer: &dyn TextMeasurer,
    padding_px: f64,
    policy: AnchorPolicy,
) -> Vec<ColumnLayout> {
    let render_widths: Vec<f64> = columns
        .iter()
        .map(|column| {
            select_anchor(column.candidates(), policy, font, measurer)
                .map_or(0.0, |anchor| anchor.width_px + padding_px)
        })
        .collect();

    distribute_percentages(&render_widths)
}

/// Turns render widths into layouts; percentages stay unset when the total is zero.
pub fn distribute_percentages(render_widths: &[f64]) -> Vec<ColumnLayout> {
    let total: f64 = render_widths.iter().sum();

    render_widths
        .iter()
        .map(|&render_width_px| ColumnLayout {
            render_width_px,
            width_percent: (total > 0.0).then(|| render_width_px * 100.0 / total),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::MockTextMeasurer;
    use crate::test_support::PerCharMeasurer;
    use proptest::prelude::*;

    fn column(header: &str, body: &[&str]) -> ColumnCells {
        ColumnCells {
            header: Some(header.to_string()),
            body: body.iter().map(|s| Some((*s).to_string())).collect(),
        }
    }

    fn percents(layouts: &[ColumnLayout]) -> Vec<f64> {
        layouts.iter().filter_map(|l| l.width_percent).collect()
    }

    #[test]
    fn proportional_shares() {
        let layouts = distribute_percentages(&[40.0, 60.0, 100.0]);
        assert_eq!(percents(&layouts), vec![20.0, 30.0, 50.0]);
    }

    #[test]
    fn render_width_is_longest_text_plus_padding() {
        // 10px per char, padding 20: "name" (4) vs "alice" (5) -> 70
        let layouts = allocate_column_widths(
            &[column("name", &["bob", "alice"]), column("id", &["1", "22"])],
            &FontContext::default(),
            &PerCharMeasurer::new(10.0),
            20.0,
            AnchorPolicy::CharCount,
        );

        assert_eq!(layouts[0].render_width_px, 70.0);
        assert_eq!(layouts[1].render_width_px, 40.0);
        assert_eq!(percents(&layouts).iter().sum::<f64>(), 100.0);
    }

    #[test]
    fn header_counts_as_candidate() {
        let layouts = allocate_column_widths(
            &[column("description", &["a", "b"])],
            &FontContext::default(),
            &PerCharMeasurer::new(1.0),
            0.0,
            AnchorPolicy::CharCount,
        );

        assert_eq!(layouts[0].render_width_px, 11.0);
    }

    #[test]
    fn header_wins_char_count_tie_with_body() {
        // "code" and "wide" both have 4 chars but render differently.
        let mut measurer = MockTextMeasurer::new();
        measurer
            .expect_measure()
            .returning(|text, _| if text == "code" { 30.0 } else { 90.0 });

        let layouts = allocate_column_widths(
            &[column("code", &["wide", "ab"])],
            &FontContext::default(),
            &measurer,
            20.0,
            AnchorPolicy::CharCount,
        );

        assert_eq!(layouts[0].render_width_px, 50.0);
    }

    #[test]
    fn empty_column_gets_zero_without_padding() {
        let layouts = allocate_column_widths(
            &[column("", &["", "", ""]), column("x", &["yy"])],
            &FontContext::default(),
            &PerCharMeasurer::new(10.0),
            20.0,
            AnchorPolicy::CharCount,
        );

        assert_eq!(layouts[0].render_width_px, 0.0);
        assert_eq!(layouts[0].width_percent, Some(0.0));
        assert_eq!(layouts[1].width_percent, Some(100.0));
    }

    #[test]
    fn all_empty_leaves_percentages_unset() {
        let layouts = allocate_column_widths(
            &[column("", &[""]), ColumnCells::default()],
            &FontContext::default(),
            &PerCharMeasurer::new(10.0),
            20.0,
            AnchorPolicy::CharCount,
        );

        assert!(layouts.iter().all(|l| l.render_width_px == 0.0));
        assert!(layouts.iter().all(|l| l.width_percent.is_none()));
    }

    #[test]
    fn no_columns_no_layouts() {
        let layouts = allocate_column_widths(
            &[],
            &FontContext::default(),
            &PerCharMeasurer::new(10.0),
            20.0,
            AnchorPolicy::CharCount,
        );
        assert!(layouts.is_empty());
    }

    #[test]
    fn missing_cells_are_skipped() {
        let ragged = ColumnCells {
            header: Some("h".to_string()),
            body: vec![None, Some("abc".to_string()), None],
        };

        let layouts = allocate_column_widths(
            &[ragged],
            &FontContext::default(),
            &PerCharMeasurer::new(2.0),
            0.0,
            AnchorPolicy::CharCount,
        );

        assert_eq!(layouts[0].render_width_px, 6.0);
    }

    proptest! {
        #[test]
        fn percentages_sum_to_hundred(
            widths in proptest::collection::vec(0.0f64..500.0, 1..8),
        ) {
            let layouts = distribute_percentages(&widths);
            let total: f64 = widths.iter().sum();

            if total > 0.0 {
                let sum: f64 = percents(&layouts).iter().sum();
                prop_assert!((sum - 100.0).abs() < 1e-6, "sum was {}", sum);
            } else {
                prop_assert!(layouts.iter().all(|l| l.width_percent.is_none()));
            }
        }
    }
}
