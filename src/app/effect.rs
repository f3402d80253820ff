//! Side effects returned by the reducer, executed by EffectRunner.

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    Render,
    ApplyAlignment,
    RemoveAlignment,
    /// Host container changed size, in terminal cells.
    ResizeContainer { width_cells: u16 },
}
