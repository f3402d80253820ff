use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TableId(u64);

impl TableId {
    pub fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for TableId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "table#{}", self.0)
    }
}

/// How a caller names the table it wants aligned
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableTarget {
    Name(String),
    Id(TableId),
}

impl fmt::Display for TableTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TableTarget::Name(name) => write!(f, "{}", name),
            TableTarget::Id(id) => write!(f, "{}", id),
        }
    }
}

impl From<&str> for TableTarget {
    fn from(name: &str) -> Self {
        TableTarget::Name(name.to_string())
    }
}

impl From<TableId> for TableTarget {
    fn from(id: TableId) -> Self {
        TableTarget::Id(id)
    }
}

/// Address of a single cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellRef {
    Header { column: usize },
    Body { row: usize, column: usize },
}

impl CellRef {
    pub fn column(self) -> usize {
        match self {
            CellRef::Header { column } | CellRef::Body { column, .. } => column,
        }
    }
}

/// Text content of one column, header first.
///
/// `None` marks a cell the row does not have (ragged rows).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnCells {
    pub header: Option<String>,
    pub body: Vec<Option<String>>,
}

impl ColumnCells {
    /// Header then body texts, skipping missing cells.
    pub fn candidates(&self) -> impl Iterator<Item = &str> {
        self.header.as_deref().into_iter().chain(self.body_texts())
    }

    pub fn body_texts(&self) -> impl Iterator<Item = &str> {
        self.body.iter().filter_map(|cell| cell.as_deref())
    }
}

/// Read-only view of a table's text content for one processing pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableSnapshot {
    pub columns: Vec<ColumnCells>,
    pub row_count: usize,
}

impl TableSnapshot {
    /// Builds a column-major snapshot from a header row and body rows.
    ///
    /// The header row fixes the column count; extra body cells are ignored
    /// and short rows leave their trailing cells missing. Texts are trimmed.
    pub fn from_rows<S: AsRef<str>>(headers: &[S], rows: &[Vec<S>]) -> Self {
        let columns = (0..headers.len())
            .map(|col| ColumnCells {
                header: Some(headers[col].as_ref().trim().to_string()),
                body: rows
                    .iter()
                    .map(|row| row.get(col).map(|cell| cell.as_ref().trim().to_string()))
                    .collect(),
            })
            .collect();

        Self {
            columns,
            row_count: rows.len(),
        }
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    pub fn column(&self, index: usize) -> Option<&ColumnCells> {
        self.columns.get(index)
    }
}
