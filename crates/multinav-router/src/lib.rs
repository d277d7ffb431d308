//! Input routing core.
//!
//! Decides which panes receive broadcast text/keys and mirrored raw input,
//! rescales pointer coordinates between differently sized panes, and owns
//! the single [`Session`] that ties layout, routing and zoom together.
//!
//! Everything here runs on the host's event thread; the host itself is only
//! reached through the [`PaneHost`] trait.

pub mod event;
pub mod host;
pub mod mirror;
pub mod mode;
pub mod router;
pub mod session;
pub mod shortcuts;
pub mod text;
pub mod zoom;

pub use event::{KeyModifiers, MouseButton, PaneInputEvent};
pub use host::PaneHost;
pub use mirror::MirrorSource;
pub use mode::{InputIntent, ModeState};
pub use router::{remap_point, InputRouter, RoutedEvent};
pub use session::{PaneInputOutcome, Session, SessionDefaults};
pub use shortcuts::{match_shortcut, KeyCombo, ShortcutAction};
pub use zoom::ZoomLevel;
