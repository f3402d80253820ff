use std::fs::File;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use tabalign_domain::TableSnapshot;

#[derive(Debug, thiserror::Error)]
pub enum CsvSourceError {
    #[error("failed to open {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("CSV parse error: {0}")]
    Read(#[from] csv::Error),
    #[error("CSV input has no header row")]
    MissingHeader,
}

/// Reads a header row plus body rows. Rows may be shorter or longer than
/// the header; missing cells stay empty and extra cells are dropped.
pub fn read_table<R: Read>(reader: R, delimiter: u8) -> Result<TableSnapshot, CsvSourceError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .delimiter(delimiter)
        .from_reader(reader);

    let headers: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();
    if headers.is_empty() {
        return Err(CsvSourceError::MissingHeader);
    }

    let mut rows = Vec::new();
    for result in reader.records() {
        let record = result?;
        rows.push(record.iter().map(str::to_string).collect::<Vec<_>>());
    }

    tracing::debug!(columns = headers.len(), rows = rows.len(), "read CSV table");
    Ok(TableSnapshot::from_rows(&headers, &rows))
}

/// Tab-separated when the file ends in `.tsv`, comma-separated otherwise.
pub fn load_table(path: &Path) -> Result<TableSnapshot, CsvSourceError> {
    let file = File::open(path).map_err(|source| CsvSourceError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    let delimiter = match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case("tsv") => b'\t',
        _ => b',',
    };
    read_table(file, delimiter)
}
