use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use tabalign_app::state::AppState;

use crate::theme::Theme;

const HINTS: &[(&str, &str)] = &[
    ("←/→", "column"),
    ("l/c/r", "align"),
    ("Space", "cycle"),
    ("a", "apply"),
    ("x", "remove"),
    ("q", "quit"),
];

pub struct StatusBar;

impl StatusBar {
    pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
        let line = match &state.message {
            Some(message) => Self::error_line(message),
            None => Self::hint_line(HINTS),
        };
        frame.render_widget(Paragraph::new(line), area);
    }

    pub fn error_line(message: &str) -> Line<'static> {
        Line::from(Span::styled(
            message.to_string(),
            Style::default().fg(Theme::STATUS_ERROR),
        ))
    }

    /// Format: "key1 desc1  key2 desc2  ..."
    pub fn hint_line(hints: &[(&str, &str)]) -> Line<'static> {
        let mut spans = Vec::new();

        for (i, (key, desc)) in hints.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw("  "));
            }
            spans.push(Span::styled(
                (*key).to_string(),
                Style::default().fg(Theme::TEXT_ACCENT),
            ));
            spans.push(Span::styled(
                format!(" {desc}"),
                Style::default().fg(Theme::TEXT_SECONDARY),
            ));
        }

        Line::from(spans)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hint_line_joins_pairs() {
        let line = StatusBar::hint_line(&[("a", "apply"), ("q", "quit")]);
        assert_eq!(line.to_string(), "a apply  q quit");
    }
}
