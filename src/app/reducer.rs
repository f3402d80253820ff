//! Pure reducer: state transitions only, no I/O.
//!
//! Table access and rendering happen in the effects returned here, so the
//! reducer can be tested without a table host or a terminal.

use tabalign_domain::AlignMode;

use crate::action::Action;
use crate::effect::Effect;
use crate::state::AppState;

pub fn reduce(state: &mut AppState, action: Action) -> Vec<Effect> {
    let should_mark_dirty = !matches!(action, Action::None | Action::Render);

    let effects = reduce_inner(state, action);

    if should_mark_dirty {
        state.mark_dirty();
    }

    effects
}

fn reduce_inner(state: &mut AppState, action: Action) -> Vec<Effect> {
    match action {
        Action::None => vec![],
        Action::Quit => {
            state.should_quit = true;
            vec![]
        }
        Action::Render => {
            state.clear_dirty();
            vec![Effect::Render]
        }
        Action::Resize(width, height) => {
            state.terminal_width = width;
            state.terminal_height = height;
            vec![
                Effect::ResizeContainer {
                    width_cells: width,
                },
                Effect::Render,
            ]
        }
        Action::SelectNextColumn => {
            if state.selected_column + 1 < state.column_count {
                state.selected_column += 1;
            }
            vec![Effect::Render]
        }
        Action::SelectPreviousColumn => {
            state.selected_column = state.selected_column.saturating_sub(1);
            vec![Effect::Render]
        }
        Action::SetAlign(mode) => set_align(state, mode),
        Action::CycleAlign => {
            let mode = state.selected_mode().next();
            set_align(state, mode)
        }
        Action::ApplyAlignment => {
            state.aligned = true;
            state.message = None;
            vec![Effect::ApplyAlignment, Effect::Render]
        }
        Action::RemoveAlignment => {
            state.aligned = false;
            state.message = None;
            vec![Effect::RemoveAlignment, Effect::Render]
        }
    }
}

fn set_align(state: &mut AppState, mode: AlignMode) -> Vec<Effect> {
    if state.column_count == 0 {
        return vec![];
    }

    state.columns.set_align(state.selected_column, mode);
    if state.aligned {
        vec![Effect::ApplyAlignment, Effect::Render]
    } else {
        vec![Effect::Render]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use tabalign_domain::{ColumnConfigs, TableId};

    fn state() -> AppState {
        AppState::new(TableId::new(1), "t", 3, ColumnConfigs::new())
    }

    #[test]
    fn quit_sets_flag() {
        let mut state = state();
        let effects = reduce(&mut state, Action::Quit);
        assert!(state.should_quit);
        assert!(effects.is_empty());
    }

    #[test]
    fn resize_resizes_container_then_renders() {
        let mut state = state();
        let effects = reduce(&mut state, Action::Resize(120, 40));

        assert_eq!(state.terminal_width, 120);
        assert_eq!(state.terminal_height, 40);
        assert_eq!(
            effects,
            vec![
                Effect::ResizeContainer { width_cells: 120 },
                Effect::Render
            ]
        );
    }

    #[rstest]
    #[case(0, Action::SelectNextColumn, 1)]
    #[case(2, Action::SelectNextColumn, 2)]
    #[case(1, Action::SelectPreviousColumn, 0)]
    #[case(0, Action::SelectPreviousColumn, 0)]
    fn column_selection_is_clamped(
        #[case] start: usize,
        #[case] action: Action,
        #[case] expected: usize,
    ) {
        let mut state = state();
        state.selected_column = start;

        reduce(&mut state, action);

        assert_eq!(state.selected_column, expected);
    }

    #[test]
    fn set_align_reapplies_only_when_aligned() {
        let mut state = state();

        let effects = reduce(&mut state, Action::SetAlign(AlignMode::Right));
        assert_eq!(effects, vec![Effect::Render]);
        assert_eq!(state.selected_mode(), AlignMode::Right);

        reduce(&mut state, Action::ApplyAlignment);
        let effects = reduce(&mut state, Action::SetAlign(AlignMode::Center));
        assert_eq!(effects, vec![Effect::ApplyAlignment, Effect::Render]);
    }

    #[test]
    fn cycle_align_advances_selected_column_only() {
        let mut state = state();
        state.selected_column = 1;

        reduce(&mut state, Action::CycleAlign);

        assert_eq!(state.columns.get(1).align, AlignMode::Center);
        assert_eq!(state.columns.get(0).align, AlignMode::Left);
    }

    #[test]
    fn remove_alignment_clears_flag() {
        let mut state = state();
        reduce(&mut state, Action::ApplyAlignment);
        assert!(state.aligned);

        let effects = reduce(&mut state, Action::RemoveAlignment);

        assert!(!state.aligned);
        assert_eq!(effects, vec![Effect::RemoveAlignment, Effect::Render]);
    }

    #[test]
    fn render_clears_dirty_flag() {
        let mut state = state();
        reduce(&mut state, Action::SelectNextColumn);
        assert!(state.render_dirty);

        reduce(&mut state, Action::Render);
        assert!(!state.render_dirty);
    }

    #[test]
    fn set_align_without_columns_does_nothing() {
        let mut state = AppState::new(TableId::new(1), "empty", 0, ColumnConfigs::new());
        assert!(reduce(&mut state, Action::SetAlign(AlignMode::Right)).is_empty());
        assert!(state.columns.is_empty());
    }
}
