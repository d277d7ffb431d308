//! Log shipping for assistant responses scraped from panes.
//!
//! Panes report the text they render; the [`ContentObserver`] keeps only
//! changes, [`LogEvent::from_content`] turns them into ingest records, and
//! [`IngestSink`] posts those records without ever blocking the caller.

pub mod error;
pub mod event;
pub mod observations;
pub mod observer;
pub mod prompt;
pub mod sink;

pub use error::IngestError;
pub use event::LogEvent;
pub use observations::Observations;
pub use observer::{ContentObserver, ContentPayload};
pub use prompt::PromptTracker;
pub use sink::IngestSink;
