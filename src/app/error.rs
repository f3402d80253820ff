#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AlignError {
    #[error("Table not found: {0}")]
    TargetNotFound(String),
}
