//! Applies allocation and per-column alignment to a table through [`TableAccess`].

use std::sync::Arc;

use tabalign_domain::{
    AlignmentOptions, AlignmentResult, CellRef, ColumnConfigs, ColumnLayout, TableId, TableTarget,
};

use crate::aligner::align_column;
use crate::allocator::allocate_column_widths;
use crate::error::AlignError;
use crate::ports::{TableAccess, TextMeasurer};
use crate::resize::{ResizeRegistry, ResizeSubscription};

/// Outcome of one processing pass over a table.
#[derive(Debug, Clone, PartialEq)]
pub struct TablePass {
    pub table: TableId,
    pub layouts: Vec<ColumnLayout>,
    /// `None` for columns left untouched (no text).
    pub alignments: Vec<Option<AlignmentResult>>,
}

#[derive(Debug)]
pub struct AppliedAlignment {
    pub pass: TablePass,
    /// Present when auto-resize is enabled.
    pub subscription: Option<ResizeSubscription>,
}

pub struct AlignmentService {
    options: AlignmentOptions,
    measurer: Arc<dyn TextMeasurer>,
    registry: ResizeRegistry,
}

impl AlignmentService {
    pub fn new(options: AlignmentOptions, measurer: Arc<dyn TextMeasurer>) -> Self {
        Self {
            options,
            measurer,
            registry: ResizeRegistry::new(),
        }
    }

    pub fn options(&self) -> &AlignmentOptions {
        &self.options
    }

    pub fn registry(&self) -> &ResizeRegistry {
        &self.registry
    }

    pub fn apply_alignment(
        &mut self,
        access: &mut dyn TableAccess,
        target: &TableTarget,
        columns: &ColumnConfigs,
    ) -> Result<AppliedAlignment, AlignError> {
        let Some(table) = access.resolve(target) else {
            tracing::error!(table = %target, "table not found, alignment skipped");
            return Err(AlignError::TargetNotFound(target.to_string()));
        };

        let pass = self.process_table(access, table, columns);
        let subscription = self
            .options
            .auto_resize()
            .then(|| self.registry.register(table, columns.clone()));

        Ok(AppliedAlignment { pass, subscription })
    }

    /// Sizes the columns, then aligns each one.
    pub fn process_table(
        &self,
        access: &mut dyn TableAccess,
        table: TableId,
        columns: &ColumnConfigs,
    ) -> TablePass {
        let snapshot = access.snapshot(table);
        let font = access.font_context(table);

        let layouts = allocate_column_widths(
            &snapshot.columns,
            &font,
            self.measurer.as_ref(),
            self.options.padding_px(),
            self.options.anchor_policy(),
        );
        apply_layout(access, table, &layouts);

        let mut alignments = Vec::with_capacity(snapshot.column_count());
        for (index, column) in snapshot.columns.iter().enumerate() {
            let mode = columns.get(index).align;
            let box_width = access.column_box_width(table, index);
            let texts: Vec<&str> = column.body_texts().collect();

            let result = align_column(
                &texts,
                box_width,
                &font,
                self.measurer.as_ref(),
                mode,
                &self.options,
            );

            match &result {
                Some(result) => {
                    for (row, cell) in column.body.iter().enumerate() {
                        if cell.is_none() {
                            continue;
                        }
                        let cell = CellRef::Body { row, column: index };
                        let mut style = access.cell_style(table, cell);
                        result.apply_to(&mut style);
                        access.set_cell_style(table, cell, style);
                    }
                    tracing::debug!(
                        %table,
                        column = index,
                        %mode,
                        box_width,
                        padding = result.padding_px,
                        "column aligned"
                    );
                }
                None => tracing::debug!(%table, column = index, "empty column left as is"),
            }

            alignments.push(result);
        }

        TablePass {
            table,
            layouts,
            alignments,
        }
    }

    /// Clears every applied style and drops the table's resize registration.
    pub fn remove_alignment(
        &mut self,
        access: &mut dyn TableAccess,
        target: &TableTarget,
    ) -> Result<(), AlignError> {
        let Some(table) = access.resolve(target) else {
            tracing::warn!(table = %target, "table not found, nothing to reset");
            return Err(AlignError::TargetNotFound(target.to_string()));
        };

        self.registry.unregister(table);
        clear_alignment(access, table);
        Ok(())
    }

    /// Re-runs the pass for a registered table; unregistered tables are ignored.
    pub fn handle_resize(&self, access: &mut dyn TableAccess, table: TableId) -> Option<TablePass> {
        let columns = self.registry.columns(table)?.clone();
        tracing::debug!(%table, "resize, re-aligning");
        Some(self.process_table(access, table, &columns))
    }

    pub fn release(&mut self, subscription: ResizeSubscription) -> bool {
        self.registry.release(subscription)
    }
}

/// Writes header widths and switches to fixed layout when any column has content.
fn apply_layout(access: &mut dyn TableAccess, table: TableId, layouts: &[ColumnLayout]) {
    if layouts.iter().all(|layout| layout.width_percent.is_none()) {
        return;
    }

    for (column, layout) in layouts.iter().enumerate() {
        let header = CellRef::Header { column };
        let mut style = access.cell_style(table, header);
        style.width_percent = layout.width_percent;
        access.set_cell_style(table, header, style);
    }
    access.set_fixed_layout(table, true);
}

/// Removes inline alignment, padding and width from every cell. Idempotent.
pub fn clear_alignment(access: &mut dyn TableAccess, table: TableId) {
    for cell in access.cells(table) {
        let mut style = access.cell_style(table, cell);
        if style.is_empty() {
            continue;
        }
        style.clear_alignment();
        access.set_cell_style(table, cell, style);
    }
    access.set_fixed_layout(table, false);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{FakeTable, PerCharMeasurer};
    use tabalign_domain::{AlignMode, CellStyle, ColumnConfig, PaddingSide, TextAlign};

    fn service(options: AlignmentOptions) -> AlignmentService {
        AlignmentService::new(options, Arc::new(PerCharMeasurer::new(10.0)))
    }

    fn sample_table() -> FakeTable {
        FakeTable::new(
            "people",
            &["id", "name", "note"],
            &[
                vec!["1", "alice", ""],
                vec!["22", "bob", ""],
                vec!["333", "christina", ""],
            ],
            1000.0,
        )
    }

    #[test]
    fn every_cell_of_a_column_gets_the_same_padding() {
        let mut table = sample_table();
        let mut service = service(AlignmentOptions::default());
        let columns = ColumnConfigs::new().with(1, ColumnConfig::new(AlignMode::Center));

        service
            .apply_alignment(&mut table, &TableTarget::from("people"), &columns)
            .unwrap();

        for column in 0..2 {
            let styles = table.body_styles(column);
            assert!(styles.iter().all(|s| *s == styles[0]));
            assert!(!styles[0].is_empty());
        }
        assert_eq!(table.body_styles(1)[0].text_align, Some(TextAlign::Center));
    }

    #[test]
    fn widths_follow_content_and_layout_becomes_fixed() {
        let mut table = sample_table();
        let mut service = service(AlignmentOptions::default());

        let applied = service
            .apply_alignment(&mut table, &TableTarget::from("people"), &ColumnConfigs::new())
            .unwrap();

        // id: 3 chars -> 50, name: 9 chars -> 110, note: header "note" -> 60
        let widths: Vec<f64> = applied
            .pass
            .layouts
            .iter()
            .map(|l| l.render_width_px)
            .collect();
        assert_eq!(widths, vec![50.0, 110.0, 60.0]);
        assert!(table.fixed_layout);

        let header = table.style(CellRef::Header { column: 1 });
        assert_eq!(header.width_percent, Some(50.0));
    }

    #[test]
    fn left_padding_uses_box_after_layout() {
        let mut table = sample_table();
        let mut service = service(AlignmentOptions::default());

        let applied = service
            .apply_alignment(&mut table, &TableTarget::from("people"), &ColumnConfigs::new())
            .unwrap();

        // name column: 50% of 1000 = 500, left ratio 0.1 -> 50
        let name = applied.pass.alignments[1].unwrap();
        assert_eq!(name.padding_side, PaddingSide::Left);
        assert_eq!(name.padding_px, 50.0);
        assert_eq!(table.body_styles(1)[2].padding_left, Some(50.0));
        assert_eq!(table.body_styles(1)[2].padding_right, None);
    }

    #[test]
    fn empty_body_column_is_not_styled() {
        let mut table = sample_table();
        let mut service = service(AlignmentOptions::default());

        let applied = service
            .apply_alignment(&mut table, &TableTarget::from("people"), &ColumnConfigs::new())
            .unwrap();

        assert_eq!(applied.pass.alignments[2], None);
        assert!(table.body_styles(2).iter().all(CellStyle::is_empty));
    }

    #[test]
    fn all_empty_table_keeps_auto_layout() {
        let mut table = FakeTable::new("blank", &["", ""], &[vec!["", ""]], 400.0);
        let mut service = service(AlignmentOptions::default());

        let applied = service
            .apply_alignment(&mut table, &TableTarget::from("blank"), &ColumnConfigs::new())
            .unwrap();

        assert!(!table.fixed_layout);
        assert!(applied.pass.layouts.iter().all(|l| l.width_percent.is_none()));
        assert!(table.all_styles_empty());
    }

    #[test]
    fn unknown_target_is_reported_without_side_effects() {
        let mut table = sample_table();
        let mut service = service(AlignmentOptions::default());

        let err = service
            .apply_alignment(&mut table, &TableTarget::from("missing"), &ColumnConfigs::new())
            .unwrap_err();

        assert_eq!(err, AlignError::TargetNotFound("missing".to_string()));
        assert!(table.styles.is_empty());
        assert!(!table.fixed_layout);
        assert!(service.registry().is_empty());
    }

    #[test]
    fn remove_restores_default_presentation() {
        let mut table = sample_table();
        let mut service = service(AlignmentOptions::default());
        let columns = ColumnConfigs::new()
            .with(0, ColumnConfig::new(AlignMode::Right))
            .with(1, ColumnConfig::new(AlignMode::Center));
        let target = TableTarget::from("people");

        let applied = service
            .apply_alignment(&mut table, &target, &columns)
            .unwrap();
        assert!(applied.subscription.is_some());

        service.remove_alignment(&mut table, &target).unwrap();

        assert!(table.all_styles_empty());
        assert!(!table.fixed_layout);
        assert!(service.registry().is_empty());

        // Idempotent
        service.remove_alignment(&mut table, &target).unwrap();
        assert!(table.all_styles_empty());
    }

    #[test]
    fn remove_unknown_target_errors() {
        let mut table = sample_table();
        let mut service = service(AlignmentOptions::default());

        let err = service
            .remove_alignment(&mut table, &TableTarget::from("nope"))
            .unwrap_err();

        assert!(matches!(err, AlignError::TargetNotFound(_)));
    }

    #[test]
    fn repeated_apply_keeps_a_single_registration() {
        let mut table = sample_table();
        let mut service = service(AlignmentOptions::default());
        let target = TableTarget::from("people");

        let first = service
            .apply_alignment(&mut table, &target, &ColumnConfigs::new())
            .unwrap();
        let second = service
            .apply_alignment(&mut table, &target, &ColumnConfigs::new())
            .unwrap();

        assert_eq!(service.registry().len(), 1);
        assert_eq!(first.pass, second.pass);

        assert!(!service.release(first.subscription.unwrap()));
        assert!(service.release(second.subscription.unwrap()));
        assert!(service.registry().is_empty());
    }

    #[test]
    fn auto_resize_disabled_returns_no_subscription() {
        let mut table = sample_table();
        let options = AlignmentOptions::builder()
            .auto_resize(false)
            .build()
            .unwrap();
        let mut service = service(options);

        let applied = service
            .apply_alignment(&mut table, &TableTarget::from("people"), &ColumnConfigs::new())
            .unwrap();

        assert!(applied.subscription.is_none());
        let id = table.id;
        assert!(service.handle_resize(&mut table, id).is_none());
    }

    #[test]
    fn resize_recomputes_with_registered_columns() {
        let mut table = sample_table();
        let mut service = service(AlignmentOptions::default());
        let columns = ColumnConfigs::new().with(1, ColumnConfig::new(AlignMode::Center));

        let _applied = service
            .apply_alignment(&mut table, &TableTarget::from("people"), &columns)
            .unwrap();

        // name column box: 50% of 2000 = 1000, center 0.5 -> 500 - 90/2
        table.container_width_px = 2000.0;
        let id = table.id;
        let pass = service.handle_resize(&mut table, id).unwrap();

        assert_eq!(pass.alignments[1].unwrap().padding_px, 455.0);
        assert_eq!(table.body_styles(1)[0].padding_left, Some(455.0));
    }

    #[test]
    fn reapplying_switches_padding_side() {
        let mut table = sample_table();
        let mut service = service(AlignmentOptions::default());
        let target = TableTarget::from("people");

        let _ = service
            .apply_alignment(&mut table, &target, &ColumnConfigs::new())
            .unwrap();
        let _ = service
            .apply_alignment(
                &mut table,
                &target,
                &ColumnConfigs::new().with(1, ColumnConfig::new(AlignMode::Right)),
            )
            .unwrap();

        let style = table.body_styles(1)[0];
        assert_eq!(style.padding_left, None);
        assert!(style.padding_right.is_some());
        assert_eq!(style.text_align, Some(TextAlign::Right));
    }
}
