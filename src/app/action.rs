use tabalign_domain::AlignMode;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    None,
    Quit,
    Render,
    Resize(u16, u16),
    SelectNextColumn,
    SelectPreviousColumn,
    SetAlign(AlignMode),
    CycleAlign,
    ApplyAlignment,
    RemoveAlignment,
}

impl Action {
    pub fn is_none(&self) -> bool {
        matches!(self, Action::None)
    }
}
