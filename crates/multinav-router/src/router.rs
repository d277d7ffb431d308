//! Target selection for broadcast input and coordinate remapping for
//! mirrored input.

use multinav_common::types::{Rect, MAX_PANES};
use multinav_common::InputMode;
use multinav_layout::PaneRegistry;
use tracing::{debug, warn};

use crate::event::PaneInputEvent;
use crate::mirror::MirrorSource;
use crate::mode::{InputIntent, ModeState};
use crate::text::{expand_text, key_press};

/// One event addressed to one pane.
#[derive(Debug, Clone, PartialEq)]
pub struct RoutedEvent {
    pub pane: usize,
    pub event: PaneInputEvent,
}

impl RoutedEvent {
    pub fn new(pane: usize, event: PaneInputEvent) -> Self {
        Self { pane, event }
    }
}

/// Mode/leader/spray state plus mirror source, and the rules that turn them
/// into destination sets.
#[derive(Debug, Clone)]
pub struct InputRouter {
    state: ModeState,
    spray_all: bool,
    mirror: MirrorSource,
    pane_count: usize,
}

impl Default for InputRouter {
    fn default() -> Self {
        Self::new(InputMode::Control, true, MirrorSource::default())
    }
}

impl InputRouter {
    pub fn new(mode: InputMode, spray_all: bool, mirror: MirrorSource) -> Self {
        Self {
            state: ModeState::from_mode(mode),
            spray_all,
            mirror,
            pane_count: MAX_PANES,
        }
    }

    // -- state accessors --

    pub fn mode(&self) -> InputMode {
        self.state.mode()
    }

    pub fn leader(&self) -> Option<usize> {
        self.state.leader()
    }

    pub fn spray_all(&self) -> bool {
        self.spray_all
    }

    pub fn mirror(&self) -> MirrorSource {
        self.mirror
    }

    // -- mutators --

    pub fn apply_intent(&mut self, intent: InputIntent) {
        if let InputIntent::MirrorFrom(pane) = intent {
            if pane >= self.pane_count {
                warn!(pane, "leader index out of range, ignoring");
                return;
            }
        }
        let next = self.state.apply(intent);
        if next != self.state {
            debug!(from = ?self.state, to = ?next, "input mode changed");
        }
        self.state = next;
    }

    pub fn set_input_mode(&mut self, mode: InputMode) {
        self.apply_intent(mode.into());
    }

    pub fn set_leader(&mut self, index: Option<usize>) {
        self.apply_intent(match index {
            Some(pane) => InputIntent::MirrorFrom(pane),
            None => InputIntent::ClearLeader,
        });
    }

    pub fn set_spray_all(&mut self, enabled: bool) {
        self.spray_all = enabled;
    }

    /// Returns the clamped source index actually stored.
    pub fn set_mirror_source(&mut self, index: i64) -> usize {
        self.mirror.set_source(index)
    }

    pub fn set_mirror_enabled(&mut self, enabled: bool) {
        self.mirror.enabled = enabled;
    }

    // -- routing --

    /// Destination set for broadcast text.
    pub fn broadcast_targets(&self) -> Vec<usize> {
        match self.state {
            ModeState::Control if self.spray_all => (0..self.pane_count).collect(),
            ModeState::Control => Vec::new(),
            ModeState::Mirror { leader } => leader.into_iter().collect(),
            ModeState::None => Vec::new(),
        }
    }

    /// Expand `text` into char events for every broadcast target.
    pub fn route_text(&self, text: &str) -> Vec<RoutedEvent> {
        let chars = expand_text(text);
        self.broadcast_targets()
            .into_iter()
            .flat_map(|pane| {
                chars
                    .iter()
                    .cloned()
                    .map(move |event| RoutedEvent::new(pane, event))
            })
            .collect()
    }

    /// Key press for every pane, whatever the mode.
    pub fn route_key(&self, key: &str) -> Vec<RoutedEvent> {
        let [down, up] = key_press(key);
        (0..self.pane_count)
            .flat_map(|pane| {
                [
                    RoutedEvent::new(pane, down.clone()),
                    RoutedEvent::new(pane, up.clone()),
                ]
            })
            .collect()
    }

    /// Relay a raw event captured in `origin` to every other pane.
    ///
    /// Pointer coordinates are rescaled from the origin's bounds into each
    /// destination's bounds. Destinations whose bounds are unknown or empty
    /// are skipped.
    pub fn route_mirrored(
        &self,
        origin: usize,
        event: &PaneInputEvent,
        panes: &PaneRegistry,
    ) -> Vec<RoutedEvent> {
        if self.state == ModeState::Control || !self.mirror.relays_from(origin) {
            return Vec::new();
        }

        let mut out = Vec::with_capacity(panes.len().saturating_sub(1));
        for pane in panes.indices().filter(|&i| i != origin) {
            let Some((x, y)) = event.position() else {
                out.push(RoutedEvent::new(pane, event.clone()));
                continue;
            };
            let mapped = panes
                .bounds(origin)
                .zip(panes.bounds(pane))
                .and_then(|(src, dst)| remap_point(x, y, &src, &dst));
            match mapped {
                Some((mx, my)) => out.push(RoutedEvent::new(pane, event.with_position(mx, my))),
                None => debug!(origin, pane, "mirror remap skipped: no usable bounds"),
            }
        }
        out
    }
}

/// Scale a point from `src` pane space into `dst` pane space.
///
/// Rounds to the nearest pixel and clamps into `[0, dst - 1]` on each axis.
/// Returns `None` when either rect is empty or the input is not finite.
pub fn remap_point(x: f64, y: f64, src: &Rect, dst: &Rect) -> Option<(f64, f64)> {
    if src.is_empty() || dst.is_empty() || !x.is_finite() || !y.is_finite() {
        return None;
    }
    let scale_x = f64::from(dst.width) / f64::from(src.width);
    let scale_y = f64::from(dst.height) / f64::from(src.height);
    let mx = (x * scale_x).round().clamp(0.0, f64::from(dst.width - 1));
    let my = (y * scale_y).round().clamp(0.0, f64::from(dst.height - 1));
    Some((mx, my))
}
