//! MultinavApp struct definition and constructor.

use std::sync::Arc;
use std::time::Instant;

use winit::window::Window;

use multinav_common::types::{Rect, Size};
use multinav_common::Result;
use multinav_config::MultinavConfig;
use multinav_ingest::{ContentObserver, IngestSink, PromptTracker};
use multinav_router::{PaneHost, PaneInputEvent, Session};
use multinav_webview::WebViewRegistry;

use crate::settings::session_defaults;

/// Top-level application state.
pub struct MultinavApp {
    pub(super) config: MultinavConfig,
    pub(super) session: Session,

    // Windowing
    pub(super) window: Option<Arc<Window>>,
    pub(super) modifiers: winit::keyboard::ModifiersState,

    // Control panel + content panes
    pub(super) webviews: Option<WebViewRegistry>,

    // Log shipping
    pub(super) observer: ContentObserver,
    pub(super) prompt: PromptTracker,
    pub(super) sink: Option<IngestSink>,
    pub(super) tokio_runtime: Option<tokio::runtime::Runtime>,

    // Whether the app should exit
    pub(super) should_exit: bool,
    pub(super) last_poll: Instant,
}

impl MultinavApp {
    pub fn new(config: MultinavConfig) -> Self {
        let session = Session::new(session_defaults(&config));
        Self {
            config,
            session,
            window: None,
            modifiers: winit::keyboard::ModifiersState::empty(),
            webviews: None,
            observer: ContentObserver::new(),
            prompt: PromptTracker::new(),
            sink: None,
            tokio_runtime: None,
            should_exit: false,
            last_poll: Instant::now(),
        }
    }

    /// Run `f` against the session and the webview host.
    ///
    /// Before the webviews exist the session still updates its own state;
    /// only the pane side effects are dropped. Startup replays zoom, layout
    /// and the source outline once the panes are built.
    pub(super) fn with_host<R>(
        &mut self,
        f: impl FnOnce(&mut Session, &mut dyn PaneHost) -> R,
    ) -> R {
        match self.webviews.as_mut() {
            Some(webviews) => f(&mut self.session, webviews),
            None => f(&mut self.session, &mut NoPanes),
        }
    }

    /// Current window size in logical pixels, the unit the layout uses.
    pub(super) fn logical_window_size(&self) -> Option<Size> {
        let window = self.window.as_ref()?;
        Some(to_logical(window.inner_size(), window.scale_factor()))
    }
}

/// Host used until the webviews are built. Every pane operation is a no-op.
struct NoPanes;

impl NoPanes {
    fn skip(&self, pane: Option<usize>, op: &str) -> Result<()> {
        tracing::debug!(?pane, op, "webviews not ready, pane operation skipped");
        Ok(())
    }
}

impl PaneHost for NoPanes {
    fn load_url(&mut self, pane: usize, _url: &str) -> Result<()> {
        self.skip(Some(pane), "load_url")
    }

    fn reload(&mut self, pane: usize) -> Result<()> {
        self.skip(Some(pane), "reload")
    }

    fn set_bounds(&mut self, pane: usize, _rect: Rect) -> Result<()> {
        self.skip(Some(pane), "set_bounds")
    }

    fn set_control_bounds(&mut self, _rect: Rect) -> Result<()> {
        self.skip(None, "set_control_bounds")
    }

    fn set_zoom(&mut self, pane: usize, _factor: f64) -> Result<()> {
        self.skip(Some(pane), "set_zoom")
    }

    fn send_input(&mut self, pane: usize, _event: &PaneInputEvent) -> Result<()> {
        self.skip(Some(pane), "send_input")
    }

    fn set_source_highlight(&mut self, pane: usize, _on: bool, _color: &str) -> Result<()> {
        self.skip(Some(pane), "set_source_highlight")
    }

    fn focus_control(&mut self) -> Result<()> {
        self.skip(None, "focus_control")
    }
}

/// Convert a physical window size to layout units.
pub(super) fn to_logical(size: winit::dpi::PhysicalSize<u32>, scale_factor: f64) -> Size {
    let logical = size.to_logical::<f64>(scale_factor);
    Size::new(
        logical.width.round().max(0.0) as u32,
        logical.height.round().max(0.0) as u32,
    )
}
