use tabalign_domain::{AlignMode, ColumnConfigs, TableId};

#[derive(Debug, Clone)]
pub struct AppState {
    pub table: TableId,
    pub table_name: String,
    pub column_count: usize,
    pub selected_column: usize,
    pub columns: ColumnConfigs,
    /// Whether ratio alignment is currently applied to the table.
    pub aligned: bool,
    pub terminal_width: u16,
    pub terminal_height: u16,
    pub message: Option<String>,
    pub should_quit: bool,
    pub render_dirty: bool,
}

impl AppState {
    pub fn new(
        table: TableId,
        table_name: impl Into<String>,
        column_count: usize,
        columns: ColumnConfigs,
    ) -> Self {
        Self {
            table,
            table_name: table_name.into(),
            column_count,
            selected_column: 0,
            columns,
            aligned: false,
            terminal_width: 0,
            terminal_height: 0,
            message: None,
            should_quit: false,
            render_dirty: true,
        }
    }

    pub fn selected_mode(&self) -> AlignMode {
        self.columns.get(self.selected_column).align
    }

    pub fn mark_dirty(&mut self) {
        self.render_dirty = true;
    }

    pub fn clear_dirty(&mut self) {
        self.render_dirty = false;
    }
}
