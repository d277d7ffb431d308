//! JavaScript injected into the WebViews.
//!
//! - `capture`: init script for content panes. Forwards trusted input,
//!   exposes the content hook and the synthetic-input injector.
//! - `inject`: per-event call into that injector.
//! - `style`: background paint and the source-pane outline.

mod capture;
mod inject;
mod style;

pub use capture::PANE_CAPTURE_SCRIPT;
pub use inject::inject_script;
pub use style::{background_script, highlight_script};
