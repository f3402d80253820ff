use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use tabalign_app::action::Action;
use tabalign_app::state::AppState;
use tabalign_domain::AlignMode;

use super::Event;

pub fn handle_event(event: Event, state: &AppState) -> Action {
    match event {
        Event::Init => Action::Render,
        Event::Resize(w, h) => Action::Resize(w, h),
        Event::Key(key) => handle_key_event(key, state),
    }
}

fn handle_key_event(key: KeyEvent, state: &AppState) -> Action {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Action::Quit,
            _ => Action::None,
        };
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => Action::Quit,

        // Column selection
        KeyCode::Left | KeyCode::BackTab => Action::SelectPreviousColumn,
        KeyCode::Right | KeyCode::Tab => Action::SelectNextColumn,

        // Mode of the selected column
        KeyCode::Char('l') => Action::SetAlign(AlignMode::Left),
        KeyCode::Char('r') => Action::SetAlign(AlignMode::Right),
        KeyCode::Char('c') => Action::SetAlign(AlignMode::Center),
        KeyCode::Char(' ') => Action::CycleAlign,

        KeyCode::Char('a') => Action::ApplyAlignment,
        KeyCode::Char('x') if state.aligned => Action::RemoveAlignment,

        _ => Action::None,
    }
}
