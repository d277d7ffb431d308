//! Window title management: reflects the session's input state.

use multinav_common::InputMode;

use super::core::MultinavApp;

// =============================================================================
// WINDOW TITLE
// =============================================================================

impl MultinavApp {
    /// Update the window title to reflect the current mode.
    pub(super) fn update_window_title(&self) {
        let Some(ref window) = self.window else {
            return;
        };
        window.set_title(&self.window_title());
    }

    /// Format: "{title} | {mode} | {n} panes | mirror {source|off}"
    pub(super) fn window_title(&self) -> String {
        let router = self.session.router();
        let mode = match (router.mode(), router.leader()) {
            (InputMode::Control, _) if router.spray_all() => "control (all)".to_string(),
            (InputMode::Control, _) => "control".to_string(),
            (InputMode::Mirror, Some(leader)) => format!("mirror (leader {})", leader + 1),
            (InputMode::Mirror, None) => "mirror".to_string(),
            (InputMode::None, _) => "none".to_string(),
        };
        let mirror = router.mirror();
        let mirror = if mirror.enabled {
            format!("mirror from {}", mirror.source() + 1)
        } else {
            "mirror off".to_string()
        };
        format!(
            "{} | {mode} | {} panes | {mirror}",
            self.config.window.title,
            self.session.pane_count().get()
        )
    }
}

// =============================================================================
// TESTS
// =============================================================================
