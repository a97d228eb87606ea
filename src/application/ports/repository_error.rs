#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("seed load failed: {0}")]
    SeedLoadFailed(String),
    #[error("invalid record: {0}")]
    InvalidRecord(String),
    #[error("duplicate worker id: {0}")]
    DuplicateId(String),
}
