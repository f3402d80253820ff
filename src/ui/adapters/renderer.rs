use color_eyre::eyre::Result;

use tabalign_app::ports::{Renderer, TableAccess};
use tabalign_app::state::AppState;

use crate::components::MainLayout;
use crate::tui::TuiRunner;

pub struct TuiRenderer<'a> {
    tui: &'a mut TuiRunner,
}

impl<'a> TuiRenderer<'a> {
    pub fn new(tui: &'a mut TuiRunner) -> Self {
        Self { tui }
    }
}

impl Renderer for TuiRenderer<'_> {
    fn draw(&mut self, state: &AppState, tables: &dyn TableAccess) -> Result<()> {
        self.tui.terminal().draw(|frame| {
            MainLayout::render(frame, state, tables);
        })?;
        Ok(())
    }
}
