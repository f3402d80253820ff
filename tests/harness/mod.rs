pub mod fixtures;

use std::sync::Arc;

use color_eyre::eyre::Result;
use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;

use tabalign::app::AlignmentService;
use tabalign::app::action::Action;
use tabalign::app::effect_runner::EffectRunner;
use tabalign::app::ports::{Renderer, TableAccess};
use tabalign::app::reducer::reduce;
use tabalign::app::state::AppState;
use tabalign::domain::{AlignmentOptions, ColumnConfigs, TableId};
use tabalign::infra::adapters::{InMemoryTableStore, MonospaceMeasurer};
use tabalign::ui::components::MainLayout;

pub const TEST_WIDTH: u16 = 40;
/// Title, header, three body rows, status.
pub const TEST_HEIGHT: u16 = 6;
pub const CELL_PX: f64 = 8.0;

pub struct TestRenderer {
    pub terminal: Terminal<TestBackend>,
}

impl Renderer for TestRenderer {
    fn draw(&mut self, state: &AppState, tables: &dyn TableAccess) -> Result<()> {
        self.terminal.draw(|frame| {
            MainLayout::render(frame, state, tables);
        })?;
        Ok(())
    }
}

/// The viewer wired to a TestBackend, driven one action at a time.
pub struct Viewer {
    pub runner: EffectRunner,
    pub store: InMemoryTableStore,
    pub state: AppState,
    pub renderer: TestRenderer,
}

impl Viewer {
    pub fn new(columns: ColumnConfigs) -> Self {
        let (store, table) = fixtures::sample_store(f64::from(TEST_WIDTH) * CELL_PX);
        let column_count = store.snapshot(table).column_count();
        let service = AlignmentService::new(
            AlignmentOptions::default(),
            Arc::new(MonospaceMeasurer::new()),
        );

        Self {
            runner: EffectRunner::new(service),
            store,
            state: AppState::new(table, fixtures::TABLE_NAME, column_count, columns),
            renderer: TestRenderer {
                terminal: create_test_terminal(TEST_WIDTH, TEST_HEIGHT),
            },
        }
    }

    pub fn table(&self) -> TableId {
        self.state.table
    }

    pub fn dispatch(&mut self, action: Action) {
        let effects = reduce(&mut self.state, action);
        self.runner
            .run(effects, &mut self.store, &mut self.renderer, &mut self.state)
            .unwrap();
        self.state.clear_dirty();
    }

    /// Resizes the backend as a terminal would, then reports it.
    pub fn resize(&mut self, width: u16, height: u16) {
        self.renderer.terminal.backend_mut().resize(width, height);
        self.dispatch(Action::Resize(width, height));
    }

    pub fn screen(&self) -> Vec<String> {
        buffer_lines(self.renderer.terminal.backend().buffer())
    }

    pub fn render_to_string(&self) -> String {
        self.screen().join("\n")
    }

}

pub fn create_test_terminal(width: u16, height: u16) -> Terminal<TestBackend> {
    let backend = TestBackend::new(width, height);
    Terminal::new(backend).unwrap()
}

/// One string per row, trailing blanks removed.
pub fn buffer_lines(buffer: &Buffer) -> Vec<String> {
    (0..buffer.area.height)
        .map(|y| {
            let mut line = String::new();
            for x in 0..buffer.area.width {
                line.push_str(buffer[(x, y)].symbol());
            }
            line.trim_end().to_string()
        })
        .collect()
}
