use std::collections::BTreeMap;

use tabalign_app::ports::{TableAccess, TableHost};
use tabalign_domain::{CellRef, CellStyle, FontContext, TableId, TableSnapshot, TableTarget};

#[derive(Debug, Clone)]
struct StoredTable {
    name: String,
    snapshot: TableSnapshot,
    font: FontContext,
    container_width_px: f64,
    header_styles: Vec<CellStyle>,
    body_styles: Vec<Vec<CellStyle>>,
    fixed_layout: bool,
}

impl StoredTable {
    fn has_cell(&self, cell: CellRef) -> bool {
        match cell {
            CellRef::Header { column } => column < self.snapshot.column_count(),
            CellRef::Body { row, column } => self
                .snapshot
                .column(column)
                .and_then(|c| c.body.get(row))
                .is_some_and(Option::is_some),
        }
    }

    fn style_slot(&mut self, cell: CellRef) -> Option<&mut CellStyle> {
        if !self.has_cell(cell) {
            return None;
        }
        match cell {
            CellRef::Header { column } => self.header_styles.get_mut(column),
            CellRef::Body { row, column } => {
                self.body_styles.get_mut(row).and_then(|r| r.get_mut(column))
            }
        }
    }
}

/// Tables held in memory, addressable by name or id.
///
/// Until a fixed layout is applied, columns split the container width
/// equally; under fixed layout a column's box follows its header width.
#[derive(Debug, Default)]
pub struct InMemoryTableStore {
    tables: BTreeMap<TableId, StoredTable>,
    next_id: u64,
}

impl InMemoryTableStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(
        &mut self,
        name: impl Into<String>,
        snapshot: TableSnapshot,
        font: FontContext,
        container_width_px: f64,
    ) -> TableId {
        self.next_id += 1;
        let id = TableId::new(self.next_id);
        let columns = snapshot.column_count();
        let rows = snapshot.row_count;

        self.tables.insert(
            id,
            StoredTable {
                name: name.into(),
                snapshot,
                font,
                container_width_px: clamp_width(container_width_px),
                header_styles: vec![CellStyle::default(); columns],
                body_styles: vec![vec![CellStyle::default(); columns]; rows],
                fixed_layout: false,
            },
        );
        id
    }

    pub fn remove(&mut self, table: TableId) -> bool {
        self.tables.remove(&table).is_some()
    }

    pub fn name(&self, table: TableId) -> Option<&str> {
        self.tables.get(&table).map(|t| t.name.as_str())
    }

    pub fn container_width(&self, table: TableId) -> Option<f64> {
        self.tables.get(&table).map(|t| t.container_width_px)
    }

    pub fn len(&self) -> usize {
        self.tables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }
}

impl TableAccess for InMemoryTableStore {
    fn resolve(&self, target: &TableTarget) -> Option<TableId> {
        match target {
            TableTarget::Id(id) => self.tables.contains_key(id).then_some(*id),
            TableTarget::Name(name) => self
                .tables
                .iter()
                .find(|(_, t)| t.name == *name)
                .map(|(id, _)| *id),
        }
    }

    fn snapshot(&self, table: TableId) -> TableSnapshot {
        self.tables
            .get(&table)
            .map(|t| t.snapshot.clone())
            .unwrap_or_default()
    }

    fn font_context(&self, table: TableId) -> FontContext {
        self.tables
            .get(&table)
            .map(|t| t.font.clone())
            .unwrap_or_default()
    }

    fn column_box_width(&self, table: TableId, column: usize) -> f64 {
        let Some(t) = self.tables.get(&table) else {
            return 0.0;
        };
        let header_width = t.header_styles.get(column).and_then(|s| s.width_percent);

        match header_width {
            Some(percent) if t.fixed_layout => t.container_width_px * percent / 100.0,
            _ => t.container_width_px / t.snapshot.column_count().max(1) as f64,
        }
    }

    fn cell_style(&self, table: TableId, cell: CellRef) -> CellStyle {
        let Some(t) = self.tables.get(&table) else {
            return CellStyle::default();
        };
        let style = match cell {
            CellRef::Header { column } => t.header_styles.get(column),
            CellRef::Body { row, column } => t.body_styles.get(row).and_then(|r| r.get(column)),
        };
        style.copied().unwrap_or_default()
    }

    fn set_cell_style(&mut self, table: TableId, cell: CellRef, style: CellStyle) {
        if let Some(slot) = self
            .tables
            .get_mut(&table)
            .and_then(|t| t.style_slot(cell))
        {
            *slot = style;
        }
    }

    fn is_fixed_layout(&self, table: TableId) -> bool {
        self.tables.get(&table).is_some_and(|t| t.fixed_layout)
    }

    fn set_fixed_layout(&mut self, table: TableId, fixed: bool) {
        if let Some(t) = self.tables.get_mut(&table) {
            t.fixed_layout = fixed;
        }
    }

    fn cells(&self, table: TableId) -> Vec<CellRef> {
        let Some(t) = self.tables.get(&table) else {
            return Vec::new();
        };

        let mut cells = Vec::new();
        for (column, column_cells) in t.snapshot.columns.iter().enumerate() {
            cells.push(CellRef::Header { column });
            cells.extend(
                column_cells
                    .body
                    .iter()
                    .enumerate()
                    .filter(|(_, cell)| cell.is_some())
                    .map(|(row, _)| CellRef::Body { row, column }),
            );
        }
        cells
    }
}

impl TableHost for InMemoryTableStore {
    fn set_container_width(&mut self, table: TableId, width_px: f64) {
        if let Some(t) = self.tables.get_mut(&table) {
            t.container_width_px = clamp_width(width_px);
        }
    }
}

/// Negative and NaN widths become 0.
fn clamp_width(width_px: f64) -> f64 {
    width_px.max(0.0)
}
