use std::io::{Write, stdout};
use std::path::Path;
use std::sync::Arc;

use clap::Parser;
use color_eyre::eyre::Result;

use tabalign::app::AlignmentService;
use tabalign::app::action::Action;
use tabalign::app::effect_runner::EffectRunner;
use tabalign::app::ports::TableAccess;
use tabalign::app::reducer::reduce;
use tabalign::app::state::AppState;
use tabalign::cli::Args;
use tabalign::domain::{ColumnConfigs, TableId, TableTarget};
use tabalign::infra::adapters::{InMemoryTableStore, MonospaceMeasurer};
use tabalign::infra::config::{OptionsFile, log_dir};
use tabalign::infra::import::load_table;
use tabalign::ui::adapters::TuiRenderer;
use tabalign::ui::components::render_table_lines;
use tabalign::ui::event::handler::handle_event;
use tabalign::ui::tui::TuiRunner;
use tabalign::{error, logging};

/// Container width used by --print when no width is given.
const DEFAULT_WIDTH_CELLS: u16 = 80;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    // Runs without a log file when the cache dir is unavailable.
    let log_guard = log_dir()
        .ok()
        .and_then(|dir| logging::init_file_logging(&dir).ok());
    error::install_hooks(log_guard.as_ref().map(|guard| guard.path.as_path()))?;

    let args = Args::parse();

    let file = OptionsFile::load_or_default(args.config.as_deref())?;
    let options = file.alignment_options()?;
    let font = file.font_context()?;
    let mut columns = file.column_configs();
    columns.merge(&args.column_overrides());

    let snapshot = load_table(&args.input)?;
    let column_count = snapshot.column_count();
    let name = table_name(&args.input);
    let width_px = args
        .width
        .unwrap_or_else(|| f64::from(DEFAULT_WIDTH_CELLS) * font.cell_advance_px());

    let mut store = InMemoryTableStore::new();
    let table = store.insert(name.clone(), snapshot, font, width_px);
    tracing::info!(%table, %name, column_count, "table loaded");

    let service = AlignmentService::new(options, Arc::new(MonospaceMeasurer::new()));

    if args.print {
        return print_table(service, &mut store, table, &columns);
    }

    let state = AppState::new(table, name, column_count, columns);
    run_viewer(EffectRunner::new(service), store, state).await
}

fn table_name(path: &Path) -> String {
    path.file_name().map_or_else(
        || path.display().to_string(),
        |name| name.to_string_lossy().into_owned(),
    )
}

fn print_table(
    mut service: AlignmentService,
    store: &mut InMemoryTableStore,
    table: TableId,
    columns: &ColumnConfigs,
) -> Result<()> {
    service.apply_alignment(store, &TableTarget::Id(table), columns)?;

    let cell_px = store.font_context(table).cell_advance_px();
    let width_px = store.container_width(table).unwrap_or_default();
    let width_cells = if cell_px > 0.0 {
        (width_px / cell_px).floor() as u16
    } else {
        DEFAULT_WIDTH_CELLS
    };

    let mut out = stdout().lock();
    for line in render_table_lines(&*store, table, width_cells) {
        writeln!(out, "{line}")?;
    }
    Ok(())
}

async fn run_viewer(
    mut runner: EffectRunner,
    mut store: InMemoryTableStore,
    mut state: AppState,
) -> Result<()> {
    let mut tui = TuiRunner::new()?;
    tui.enter()?;

    let result = event_loop(&mut tui, &mut runner, &mut store, &mut state).await;

    tui.exit()?;
    result
}

async fn event_loop(
    tui: &mut TuiRunner,
    runner: &mut EffectRunner,
    store: &mut InMemoryTableStore,
    state: &mut AppState,
) -> Result<()> {
    let size = tui.terminal().size()?;
    dispatch(Action::Resize(size.width, size.height), tui, runner, store, state)?;
    dispatch(Action::ApplyAlignment, tui, runner, store, state)?;

    while let Some(event) = tui.next_event().await {
        let action = handle_event(event, state);
        if !action.is_none() {
            dispatch(action, tui, runner, store, state)?;
        }

        if state.should_quit {
            break;
        }
    }

    Ok(())
}

fn dispatch(
    action: Action,
    tui: &mut TuiRunner,
    runner: &mut EffectRunner,
    store: &mut InMemoryTableStore,
    state: &mut AppState,
) -> Result<()> {
    let effects = reduce(state, action);
    let mut renderer = TuiRenderer::new(tui);
    runner.run(effects, store, &mut renderer, state)?;
    state.clear_dirty();
    Ok(())
}
