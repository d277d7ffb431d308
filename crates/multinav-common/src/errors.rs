use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),
}

#[derive(Debug, thiserror::Error)]
pub enum MultinavError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// The browser-embedding host rejected an operation on a pane.
    #[error("host error on pane {pane}: {message}")]
    Host { pane: usize, message: String },

    #[error("ingest error: {0}")]
    Ingest(String),

    #[error("ipc error: {0}")]
    Ipc(String),

    #[error("{0}")]
    Other(String),
}

impl MultinavError {
    pub fn host(pane: usize, message: impl Into<String>) -> Self {
        Self::Host {
            pane,
            message: message.into(),
        }
    }
}
