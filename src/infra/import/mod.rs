pub mod csv_file;

pub use csv_file::{CsvSourceError, load_table, read_table};
