use color_eyre::eyre::Result;

use crate::ports::TableAccess;
use crate::state::AppState;

pub trait Renderer {
    fn draw(&mut self, state: &AppState, tables: &dyn TableAccess) -> Result<()>;
}
