use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use tabalign_app::state::AppState;

use crate::theme::Theme;

pub struct TitleBar;

impl TitleBar {
    pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
        let line = Self::build_line(state);
        frame.render_widget(
            Paragraph::new(line).style(Style::default().bg(Theme::TITLE_BG)),
            area,
        );
    }

    pub fn build_line(state: &AppState) -> Line<'static> {
        let (status, color) = if state.aligned {
            ("aligned", Theme::STATUS_ALIGNED)
        } else {
            ("unaligned", Theme::STATUS_UNALIGNED)
        };

        let mut spans = vec![
            Span::styled(
                format!(" {} ", state.table_name),
                Style::default()
                    .fg(Theme::TEXT_PRIMARY)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(status.to_string(), Style::default().fg(color)),
        ];

        if state.column_count > 0 {
            spans.push(Span::styled(
                format!(
                    "  column {}/{}: {}",
                    state.selected_column + 1,
                    state.column_count,
                    state.selected_mode()
                ),
                Style::default().fg(Theme::TEXT_SECONDARY),
            ));
        }

        Line::from(spans)
    }
}
