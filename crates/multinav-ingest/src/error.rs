use multinav_common::MultinavError;

#[derive(Debug, thiserror::Error)]
pub enum IngestError {
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),
    #[error("ingest server returned status {0}")]
    Status(u16),
    #[error("invalid ingest url: {0}")]
    InvalidUrl(String),
}

impl From<IngestError> for MultinavError {
    fn from(e: IngestError) -> Self {
        MultinavError::Ingest(e.to_string())
    }
}
