//! Fakes for exercising the alignment core without a display.

use std::collections::HashMap;

use tabalign_domain::{CellRef, CellStyle, FontContext, TableId, TableSnapshot, TableTarget};

use crate::ports::{TableAccess, TableHost, TextMeasurer};

/// Every character is `px_per_char` wide, whatever the font.
#[derive(Debug, Clone, Copy)]
pub struct PerCharMeasurer {
    px_per_char: f64,
}

impl PerCharMeasurer {
    pub fn new(px_per_char: f64) -> Self {
        Self { px_per_char }
    }
}

impl TextMeasurer for PerCharMeasurer {
    fn measure(&self, text: &str, _font: &FontContext) -> f64 {
        text.chars().count() as f64 * self.px_per_char
    }
}

/// Single-table host. Columns share the container equally until header
/// widths are applied under fixed layout.
#[derive(Debug, Clone)]
pub struct FakeTable {
    pub name: String,
    pub id: TableId,
    pub snapshot: TableSnapshot,
    pub font: FontContext,
    pub container_width_px: f64,
    pub styles: HashMap<CellRef, CellStyle>,
    pub fixed_layout: bool,
}

impl FakeTable {
    pub fn new(name: &str, headers: &[&str], rows: &[Vec<&str>], container_width_px: f64) -> Self {
        Self {
            name: name.to_string(),
            id: TableId::new(1),
            snapshot: TableSnapshot::from_rows(headers, rows),
            font: FontContext::default(),
            container_width_px,
            styles: HashMap::new(),
            fixed_layout: false,
        }
    }

    pub fn style(&self, cell: CellRef) -> CellStyle {
        self.styles.get(&cell).copied().unwrap_or_default()
    }

    pub fn body_styles(&self, column: usize) -> Vec<CellStyle> {
        (0..self.snapshot.row_count)
            .map(|row| self.style(CellRef::Body { row, column }))
            .collect()
    }

    pub fn all_styles_empty(&self) -> bool {
        self.styles.values().all(CellStyle::is_empty)
    }
}

impl TableAccess for FakeTable {
    fn resolve(&self, target: &TableTarget) -> Option<TableId> {
        match target {
            TableTarget::Name(name) if *name == self.name => Some(self.id),
            TableTarget::Id(id) if *id == self.id => Some(self.id),
            _ => None,
        }
    }

    fn snapshot(&self, _table: TableId) -> TableSnapshot {
        self.snapshot.clone()
    }

    fn font_context(&self, _table: TableId) -> FontContext {
        self.font.clone()
    }

    fn column_box_width(&self, _table: TableId, column: usize) -> f64 {
        let header_width = self.style(CellRef::Header { column }).width_percent;
        match header_width {
            Some(percent) if self.fixed_layout => self.container_width_px * percent / 100.0,
            _ => self.container_width_px / self.snapshot.column_count().max(1) as f64,
        }
    }

    fn cell_style(&self, _table: TableId, cell: CellRef) -> CellStyle {
        self.style(cell)
    }

    fn set_cell_style(&mut self, _table: TableId, cell: CellRef, style: CellStyle) {
        self.styles.insert(cell, style);
    }

    fn is_fixed_layout(&self, _table: TableId) -> bool {
        self.fixed_layout
    }

    fn set_fixed_layout(&mut self, _table: TableId, fixed: bool) {
        self.fixed_layout = fixed;
    }

    fn cells(&self, _table: TableId) -> Vec<CellRef> {
        let mut cells = Vec::new();
        for (column, cells_of_column) in self.snapshot.columns.iter().enumerate() {
            cells.push(CellRef::Header { column });
            for (row, cell) in cells_of_column.body.iter().enumerate() {
                if cell.is_some() {
                    cells.push(CellRef::Body { row, column });
                }
            }
        }
        cells
    }
}

impl TableHost for FakeTable {
    fn set_container_width(&mut self, _table: TableId, width_px: f64) {
        self.container_width_px = width_px;
    }
}
