use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::Widget;
use unicode_width::UnicodeWidthStr;

use tabalign_app::ports::TableAccess;
use tabalign_domain::{CellRef, TableId};

use super::cell_text::layout_cell;
use crate::theme::Theme;

/// Draws a table from whatever its host reports: column boxes come from
/// `column_box_width`, cell padding and justification from `cell_style`.
pub struct TableView<'a, T: TableAccess + ?Sized> {
    tables: &'a T,
    table: TableId,
    selected_column: Option<usize>,
}

impl<'a, T: TableAccess + ?Sized> TableView<'a, T> {
    pub fn new(tables: &'a T, table: TableId) -> Self {
        Self {
            tables,
            table,
            selected_column: None,
        }
    }

    pub fn selected_column(mut self, column: Option<usize>) -> Self {
        self.selected_column = column;
        self
    }
}

/// Column box widths in whole cells, cut to fit `available`.
pub fn column_widths<T: TableAccess + ?Sized>(
    tables: &T,
    table: TableId,
    column_count: usize,
    cell_px: f64,
    available: u16,
) -> Vec<u16> {
    let mut remaining = available;
    (0..column_count)
        .map(|column| {
            let px = tables.column_box_width(table, column);
            let cells = if cell_px > 0.0 && px.is_finite() {
                (px / cell_px).floor().max(0.0) as u16
            } else {
                0
            };
            let cells = cells.min(remaining);
            remaining -= cells;
            cells
        })
        .collect()
}

impl<T: TableAccess + ?Sized> Widget for TableView<'_, T> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let snapshot = self.tables.snapshot(self.table);
        let cell_px = self.tables.font_context(self.table).cell_advance_px();
        if area.is_empty() || snapshot.column_count() == 0 || cell_px <= 0.0 {
            return;
        }

        let widths = column_widths(
            self.tables,
            self.table,
            snapshot.column_count(),
            cell_px,
            area.width,
        );
        let visible_rows = snapshot
            .row_count
            .min(usize::from(area.height.saturating_sub(1)));

        let header_style = Style::default()
            .bg(Theme::TABLE_HEADER_BG)
            .fg(Theme::TEXT_PRIMARY)
            .add_modifier(Modifier::BOLD);

        let mut x = area.x;
        for (column, (cells, &width)) in snapshot.columns.iter().zip(&widths).enumerate() {
            if width == 0 {
                continue;
            }
            let selected = self.selected_column == Some(column);

            let header_cell_style = self
                .tables
                .cell_style(self.table, CellRef::Header { column });
            let header = layout_cell(
                cells.header.as_deref().unwrap_or(""),
                width,
                &header_cell_style,
                cell_px,
            );
            let style = if selected {
                header_style.bg(Theme::SELECTED_HEADER_BG)
            } else {
                header_style
            };
            buf.set_stringn(x, area.y, &header, usize::from(width), style);

            let body_style = Style::default().fg(if selected {
                Theme::TEXT_ACCENT
            } else {
                Theme::TEXT_PRIMARY
            });
            for row in 0..visible_rows {
                let Some(Some(text)) = cells.body.get(row) else {
                    continue;
                };
                let cell_style = self
                    .tables
                    .cell_style(self.table, CellRef::Body { row, column });
                let line = layout_cell(text, width, &cell_style, cell_px);
                let y = area.y + 1 + row as u16;
                buf.set_stringn(x, y, &line, usize::from(width), body_style);
            }

            x += width;
        }
    }
}

/// Renders the whole table once, header first, as plain lines with
/// trailing blanks removed.
pub fn render_table_lines<T: TableAccess + ?Sized>(
    tables: &T,
    table: TableId,
    width: u16,
) -> Vec<String> {
    let rows = tables.snapshot(table).row_count;
    let height = u16::try_from(rows + 1).unwrap_or(u16::MAX);
    let area = Rect::new(0, 0, width, height);
    let mut buf = Buffer::empty(area);

    TableView::new(tables, table).render(area, &mut buf);

    (0..height)
        .map(|y| {
            let mut line = String::new();
            let mut x = 0;
            while x < width {
                let symbol = buf[(x, y)].symbol();
                line.push_str(symbol);
                x += symbol.width().max(1) as u16;
            }
            line.trim_end().to_string()
        })
        .collect()
}
