pub mod commands;
pub mod errors;
pub mod id;
pub mod types;

pub use commands::{ControlCommand, InputMode};
pub use errors::{ConfigError, MultinavError};
pub use id::{new_id, SessionId};
pub use types::{PaneIndex, Rect, Size, DEFAULT_INGEST_URL, MAX_PANES};

pub type Result<T> = std::result::Result<T, MultinavError>;
