//! The one owned piece of session state.
//!
//! `Session` holds the pane registry, layout inputs, router and zoom level,
//! and drives a [`PaneHost`] in response to control commands, window
//! resizes and input captured inside panes. Host calls fail per pane: a
//! failure is logged and the remaining panes are still processed.

use std::collections::HashSet;

use multinav_common::types::{Rect, Size, MAX_PANES};
use multinav_common::{ControlCommand, InputMode, MultinavError};
use multinav_layout::{Layout, LayoutEngine, PaneCount, PaneRegistry};
use tracing::{debug, info, warn};

use crate::event::PaneInputEvent;
use crate::host::PaneHost;
use crate::mirror::MirrorSource;
use crate::router::{InputRouter, RoutedEvent};
use crate::shortcuts::{match_shortcut, ShortcutAction};
use crate::zoom::ZoomLevel;


/// Startup values, normally filled from the config file.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionDefaults {
    pub control_width: u32,
    pub pane_count: PaneCount,
    pub mode: InputMode,
    pub spray_all: bool,
    pub mirror_enabled: bool,
    pub mirror_source: i64,
    pub zoom: f64,
    pub highlight_color: String,
}

impl Default for SessionDefaults {
    fn default() -> Self {
        Self {
            control_width: LayoutEngine::default().control_width,
            pane_count: PaneCount::Four,
            mode: InputMode::Control,
            spray_all: true,
            mirror_enabled: false,
            mirror_source: 0,
            zoom: 1.0,
            highlight_color: "#2a60e8".into(),
        }
    }
}

/// What happened to one event captured inside a pane.
#[derive(Debug, Clone, PartialEq)]
pub enum PaneInputOutcome {
    /// The event was a global shortcut and was consumed.
    Shortcut(ShortcutAction),
    /// Relayed to this many panes.
    Mirrored(usize),
    /// Not relayed (mirroring off, wrong source, or unknown pane).
    Ignored,
    /// Key-up of a key whose key-down was consumed as a shortcut.
    Swallowed,
}

pub struct Session {
    registry: PaneRegistry,
    engine: LayoutEngine,
    pane_count: PaneCount,
    window: Option<Size>,
    layout: Option<Layout>,
    router: InputRouter,
    zoom: ZoomLevel,
    highlight_color: String,
    /// Keys whose key-down was taken as a shortcut, by pane, until the
    /// matching key-up arrives.
    held_shortcuts: HashSet<(usize, String)>,
}

/// Identity of a physical key, stable between its key-down and key-up even
/// when modifiers change the logical key in between.
fn held_key(key_code: &str, code: Option<&str>) -> String {
    match code {
        Some(code) if !code.is_empty() => code.to_string(),
        _ => key_code.to_ascii_lowercase(),
    }
}

impl Session {
    pub fn new(defaults: SessionDefaults) -> Self {
        Self {
            registry: PaneRegistry::create(MAX_PANES),
            engine: LayoutEngine {
                control_width: defaults.control_width,
            },
            pane_count: defaults.pane_count,
            window: None,
            layout: None,
            router: InputRouter::new(
                defaults.mode,
                defaults.spray_all,
                MirrorSource::new(defaults.mirror_enabled, defaults.mirror_source),
            ),
            zoom: ZoomLevel::new(defaults.zoom),
            highlight_color: defaults.highlight_color,
            held_shortcuts: HashSet::new(),
        }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn registry(&self) -> &PaneRegistry {
        &self.registry
    }

    pub fn router(&self) -> &InputRouter {
        &self.router
    }

    pub fn pane_count(&self) -> PaneCount {
        self.pane_count
    }

    pub fn zoom(&self) -> f64 {
        self.zoom.get()
    }

    /// Most recent layout pass, if the window size is known.
    pub fn layout(&self) -> Option<&Layout> {
        self.layout.as_ref()
    }

    pub fn pane_bounds(&self, pane: usize) -> Option<Rect> {
        self.registry.bounds(pane)
    }

    // =========================================================================
    // Startup and layout
    // =========================================================================

    /// Push the starting zoom and source outline to every pane.
    pub fn initialize(&mut self, host: &mut dyn PaneHost) {
        self.apply_zoom(host);
        self.refresh_highlight(host);
    }

    /// Record the new window size and re-apply the layout.
    pub fn resize(&mut self, window: Size, host: &mut dyn PaneHost) {
        self.window = Some(window);
        self.relayout(host);
    }

    fn relayout(&mut self, host: &mut dyn PaneHost) {
        let Some(window) = self.window else {
            debug!("relayout skipped: window size not known yet");
            return;
        };
        let layout = self.engine.compute(window, self.pane_count);
        self.registry.apply_layout(&layout);

        if let Err(e) = host.set_control_bounds(layout.control) {
            warn!(error = %e, "failed to position control panel");
        }
        for (pane, rect) in layout.panes.iter().enumerate() {
            if let Err(e) = host.set_bounds(pane, *rect) {
                warn!(pane, error = %e, "failed to position pane");
            }
        }
        debug!(
            width = window.width,
            height = window.height,
            panes = self.pane_count.get(),
            "layout applied"
        );
        self.layout = Some(layout);
    }

    // =========================================================================
    // Control commands
    // =========================================================================

    pub fn execute(&mut self, command: &ControlCommand, host: &mut dyn PaneHost) {
        debug!(command = command.name(), "executing control command");
        match command {
            ControlCommand::NavigateAll { url } => {
                self.each_pane(host, "navigate", |h, pane| h.load_url(pane, url));
            }
            ControlCommand::NavigateOne { index, url } => {
                match usize::try_from(*index).ok().filter(|i| self.registry.contains(*i)) {
                    Some(pane) => {
                        if let Err(e) = host.load_url(pane, url) {
                            warn!(pane, error = %e, "navigate failed");
                        }
                    }
                    None => debug!(index, "navigateOne ignored: no such pane"),
                }
            }
            ControlCommand::ReloadAll => self.reload_all(host),
            ControlCommand::SetViewCount { count } => {
                self.pane_count = PaneCount::from_requested(*count);
                info!(panes = self.pane_count.get(), "view count changed");
                self.relayout(host);
            }
            ControlCommand::SetMirrorSource { index } => self.set_mirror_source(*index, host),
            ControlCommand::SetMirrorEnabled { enabled } => {
                self.router.set_mirror_enabled(*enabled);
                info!(enabled, "mirroring toggled");
            }
            ControlCommand::SetInputMode { mode } => self.router.set_input_mode(*mode),
            ControlCommand::SetLeader { index } => self.router.set_leader(*index),
            ControlCommand::SetSprayAll { enabled } => self.router.set_spray_all(*enabled),
            ControlCommand::SendText { text } => {
                let routed = self.router.route_text(text);
                self.deliver(&routed, host);
            }
            ControlCommand::SendKey { key } => {
                let routed = self.router.route_key(key);
                self.deliver(&routed, host);
            }
            ControlCommand::SetZoom { factor } => self.set_zoom(*factor, host),
            // Prompt bookkeeping lives with the log shipper.
            ControlCommand::Prompt { .. } => {}
        }
    }

    fn reload_all(&mut self, host: &mut dyn PaneHost) {
        self.each_pane(host, "reload", |h, pane| h.reload(pane));
    }

    fn set_mirror_source(&mut self, index: i64, host: &mut dyn PaneHost) {
        let source = self.router.set_mirror_source(index);
        info!(source, "mirror source changed");
        self.refresh_highlight(host);
    }

    fn set_zoom(&mut self, factor: f64, host: &mut dyn PaneHost) {
        match self.zoom.set(factor) {
            Some(_) => self.apply_zoom(host),
            None => warn!(factor, "ignoring non-finite zoom factor"),
        }
    }

    fn apply_zoom(&mut self, host: &mut dyn PaneHost) {
        let factor = self.zoom.get();
        self.each_pane(host, "zoom", |h, pane| h.set_zoom(pane, factor));
    }

    fn refresh_highlight(&mut self, host: &mut dyn PaneHost) {
        let source = self.router.mirror().source();
        let color = &self.highlight_color;
        self.each_pane(host, "highlight", |h, pane| {
            h.set_source_highlight(pane, pane == source, color)
        });
    }

    // =========================================================================
    // Pane input
    // =========================================================================

    /// Handle one raw event captured inside pane `origin`.
    ///
    /// Shortcuts are checked first and consumed along with their key-up;
    /// everything else goes through the mirror rules.
    pub fn handle_pane_input(
        &mut self,
        origin: usize,
        event: &PaneInputEvent,
        host: &mut dyn PaneHost,
    ) -> PaneInputOutcome {
        if !self.registry.contains(origin) {
            debug!(origin, "input from unknown pane dropped");
            return PaneInputOutcome::Ignored;
        }

        match event {
            PaneInputEvent::KeyDown {
                key_code,
                code,
                modifiers,
            } => {
                if let Some(action) = match_shortcut(key_code, code.as_deref(), *modifiers) {
                    self.held_shortcuts
                        .insert((origin, held_key(key_code, code.as_deref())));
                    self.apply_shortcut(action, host);
                    return PaneInputOutcome::Shortcut(action);
                }
            }
            PaneInputEvent::KeyUp { key_code, code, .. } => {
                let held = (origin, held_key(key_code, code.as_deref()));
                if self.held_shortcuts.remove(&held) {
                    debug!(origin, key = %held.1, "shortcut key-up swallowed");
                    return PaneInputOutcome::Swallowed;
                }
            }
            _ => {}
        }

        let routed = self.router.route_mirrored(origin, event, &self.registry);
        if routed.is_empty() {
            return PaneInputOutcome::Ignored;
        }
        self.deliver(&routed, host);
        PaneInputOutcome::Mirrored(routed.len())
    }

    pub fn apply_shortcut(&mut self, action: ShortcutAction, host: &mut dyn PaneHost) {
        debug!(?action, "shortcut");
        match action {
            ShortcutAction::ReloadAll => self.reload_all(host),
            ShortcutAction::FocusControlUrl => {
                if let Err(e) = host.focus_control() {
                    warn!(error = %e, "failed to focus control panel");
                }
            }
            ShortcutAction::ToggleMirror => {
                let enabled = !self.router.mirror().enabled;
                self.router.set_mirror_enabled(enabled);
                info!(enabled, "mirroring toggled");
            }
            ShortcutAction::SetMirrorSource(pane) => {
                self.set_mirror_source(pane as i64, host);
            }
            ShortcutAction::ZoomBy(delta) => {
                if self.zoom.step(delta).is_some() {
                    self.apply_zoom(host);
                }
            }
            ShortcutAction::ZoomReset => {
                self.zoom.reset();
                self.apply_zoom(host);
            }
        }
    }

    // =========================================================================
    // Helpers
    // =========================================================================

    fn deliver(&self, routed: &[RoutedEvent], host: &mut dyn PaneHost) {
        for RoutedEvent { pane, event } in routed {
            if let Err(e) = host.send_input(*pane, event) {
                warn!(pane, kind = event.kind(), error = %e, "input delivery failed");
            }
        }
    }

    /// Run `op` on every pane, logging failures without stopping.
    fn each_pane<F>(&self, host: &mut dyn PaneHost, what: &str, mut op: F)
    where
        F: FnMut(&mut dyn PaneHost, usize) -> Result<(), MultinavError>,
    {
        for pane in self.registry.indices() {
            if let Err(e) = op(&mut *host, pane) {
                warn!(pane, op = what, error = %e, "pane operation failed");
            }
        }
    }
}
