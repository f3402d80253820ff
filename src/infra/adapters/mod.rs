pub mod memory_table_store;
pub mod monospace_measurer;

pub use memory_table_store::InMemoryTableStore;
pub use monospace_measurer::MonospaceMeasurer;
