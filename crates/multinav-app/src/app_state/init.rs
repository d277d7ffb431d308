//! Window creation, webview setup, and the log-shipping runtime.

use std::sync::Arc;
use std::time::Duration;

use winit::dpi::LogicalSize;
use winit::event_loop::ActiveEventLoop;
use winit::window::WindowAttributes;

use multinav_common::types::MAX_PANES;
use multinav_ingest::IngestSink;
use multinav_webview::scripts::background_script;
use multinav_webview::{ViewId, WebViewConfig, WebViewManager, WebViewRegistry};

use super::core::MultinavApp;

// =============================================================================
// INITIALIZATION
// =============================================================================

impl MultinavApp {
    /// Create the window, then the control panel and pane webviews.
    /// Returns `false` if initialization failed and the event loop should exit.
    pub(super) fn initialize_window(&mut self, event_loop: &ActiveEventLoop) -> bool {
        let w = &self.config.window;
        let attrs = WindowAttributes::default()
            .with_title(w.title.clone())
            .with_inner_size(LogicalSize::new(f64::from(w.width), f64::from(w.height)))
            .with_min_inner_size(LogicalSize::new(
                f64::from(w.min_width),
                f64::from(w.min_height),
            ));

        let window = match event_loop.create_window(attrs) {
            Ok(w) => Arc::new(w),
            Err(e) => {
                tracing::error!("Failed to create window: {e}");
                return false;
            }
        };
        self.window = Some(window);

        if !self.initialize_webviews() {
            return false;
        }

        if let Some(size) = self.logical_window_size() {
            self.with_host(|session, host| {
                session.resize(size, host);
                session.initialize(host);
            });
        }

        tracing::info!("Window created and webviews initialized");
        true
    }

    /// Build the control panel and every pane slot. Panes are created once
    /// and only repositioned afterwards; a pane that fails to build is
    /// logged and its slot stays empty.
    fn initialize_webviews(&mut self) -> bool {
        let Some(window) = self.window.clone() else {
            return false;
        };
        let devtools = self.config.advanced.devtools_enabled();
        let mut registry = WebViewRegistry::new(WebViewManager::new());

        let mut control = WebViewConfig::control().with_devtools(devtools);
        control
            .init_scripts
            .push(background_script(&self.config.window.background));
        if let Err(e) = registry.create(
            ViewId::Control,
            window.as_ref(),
            wry::Rect::default(),
            control,
        ) {
            tracing::error!(error = %e, "Failed to create control panel");
            return false;
        }

        for pane in 0..MAX_PANES {
            let url = self.config.panes.url_for(pane);
            let config = WebViewConfig::pane(url, &self.config.panes.background_css)
                .with_devtools(devtools);
            match registry.create(ViewId::Pane(pane), window.as_ref(), wry::Rect::default(), config) {
                Ok(()) => tracing::info!(pane, url, "Pane webview created"),
                Err(e) => tracing::error!(pane, error = %e, "Failed to create pane webview"),
            }
        }

        if devtools {
            for view in [ViewId::Control, ViewId::Pane(0)] {
                if let Some(handle) = registry.get(view) {
                    handle.open_devtools();
                }
            }
        }
        if let Some(control) = registry.get(ViewId::Control) {
            if let Err(e) = control.focus() {
                tracing::warn!(error = %e, "Failed to focus control panel");
            }
        }

        tracing::info!(webviews = registry.count(), "WebView registry initialized");
        self.webviews = Some(registry);
        true
    }

    /// Set up the ingest sink and the runtime its POSTs run on.
    pub(super) fn start_ingest(&mut self) {
        let ingest = &self.config.ingest;
        if !ingest.enabled {
            tracing::info!("Log shipping disabled");
            return;
        }

        let sink = match IngestSink::new(&ingest.url, Duration::from_millis(u64::from(ingest.timeout_ms))) {
            Ok(sink) => sink,
            Err(e) => {
                tracing::warn!(url = %ingest.url, error = %e, "Log shipping disabled: bad sink");
                return;
            }
        };

        match tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .thread_name("multinav-ingest")
            .enable_all()
            .build()
        {
            Ok(rt) => {
                tracing::info!(url = %sink.url(), "Log shipping enabled");
                self.tokio_runtime = Some(rt);
                self.sink = Some(sink);
            }
            Err(e) => {
                tracing::warn!(error = %e, "Log shipping disabled: no async runtime");
            }
        }
    }
}
