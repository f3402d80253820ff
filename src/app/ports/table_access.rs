use tabalign_domain::{CellRef, CellStyle, FontContext, TableId, TableSnapshot, TableTarget};

/// Presentation layer holding the tables to align.
///
/// Implementations own the cells and their styles; the alignment core only
/// reads text and box metrics through this trait and writes styles back.
pub trait TableAccess {
    fn resolve(&self, target: &TableTarget) -> Option<TableId>;

    /// Trimmed text of every header and body cell.
    fn snapshot(&self, table: TableId) -> TableSnapshot;

    /// Font the table's cells render with.
    fn font_context(&self, table: TableId) -> FontContext;

    /// Rendered width of a column's cell box under the current layout.
    fn column_box_width(&self, table: TableId, column: usize) -> f64;

    fn cell_style(&self, table: TableId, cell: CellRef) -> CellStyle;

    fn set_cell_style(&mut self, table: TableId, cell: CellRef, style: CellStyle);

    fn is_fixed_layout(&self, table: TableId) -> bool;

    fn set_fixed_layout(&mut self, table: TableId, fixed: bool);

    /// Every header and body cell that exists, ragged rows included.
    fn cells(&self, table: TableId) -> Vec<CellRef>;
}

/// A [`TableAccess`] whose container can be resized by the host display.
pub trait TableHost: TableAccess {
    fn set_container_width(&mut self, table: TableId, width_px: f64);
}
