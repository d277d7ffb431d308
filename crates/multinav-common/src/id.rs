use serde::{Deserialize, Serialize};
use std::fmt;

pub fn new_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

/// Identifier grouping log records produced for one broadcast prompt.
///
/// Formatted as the UTC second the session started followed by `-multinav`,
/// e.g. `2026-10-15T09:30:00-multinav`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(String);

impl SessionId {
    pub fn new() -> Self {
        Self::at(chrono::Utc::now())
    }

    pub fn at(time: chrono::DateTime<chrono::Utc>) -> Self {
        Self(format!("{}-multinav", time.format("%Y-%m-%dT%H:%M:%S")))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
