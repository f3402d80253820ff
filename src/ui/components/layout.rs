use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};

use tabalign_app::ports::TableAccess;
use tabalign_app::state::AppState;

use super::status_bar::StatusBar;
use super::table_view::TableView;
use super::title_bar::TitleBar;

pub struct MainLayout;

impl MainLayout {
    pub fn render(frame: &mut Frame, state: &AppState, tables: &dyn TableAccess) {
        let area = frame.area();

        let [title_area, table_area, status_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .areas(area);

        TitleBar::render(frame, title_area, state);
        frame.render_widget(
            TableView::new(tables, state.table).selected_column(Some(state.selected_column)),
            table_area,
        );
        StatusBar::render(frame, status_area, state);
    }
}
