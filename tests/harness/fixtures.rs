use tabalign::domain::{AlignMode, ColumnConfig, ColumnConfigs, FontContext, TableId};
use tabalign::infra::adapters::InMemoryTableStore;
use tabalign::infra::import::read_table;

pub const TABLE_NAME: &str = "stock.csv";

pub const STOCK_CSV: &str = "item,qty,price\nbolt,5,0.10\nwasher,120,0.02\nnut,42,0.05\n";

/// Default font: 8px per cell.
pub fn sample_store(container_width_px: f64) -> (InMemoryTableStore, TableId) {
    let snapshot = read_table(STOCK_CSV.as_bytes(), b',').unwrap();
    let mut store = InMemoryTableStore::new();
    let table = store.insert(
        TABLE_NAME,
        snapshot,
        FontContext::default(),
        container_width_px,
    );
    (store, table)
}

/// qty right, price center, item left.
pub fn mixed_columns() -> ColumnConfigs {
    ColumnConfigs::new()
        .with(1, ColumnConfig::new(AlignMode::Right))
        .with(2, ColumnConfig::new(AlignMode::Center))
}
