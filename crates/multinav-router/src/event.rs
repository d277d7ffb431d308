//! Raw input events captured inside a pane, and the synthetic events the
//! router injects back into panes.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MouseButton {
    #[default]
    Left,
    Middle,
    Right,
}

/// Modifier keys held during a keyboard event.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyModifiers {
    pub ctrl: bool,
    pub alt: bool,
    pub shift: bool,
    pub meta: bool,
}

impl KeyModifiers {
    pub const NONE: Self = Self {
        ctrl: false,
        alt: false,
        shift: false,
        meta: false,
    };
}

fn one() -> u32 {
    1
}

/// One input event, pointer coordinates in the pane's own viewport.
///
/// Serialized with a `type` tag matching the capture script, e.g.
/// `{"type":"mouseDown","x":10,"y":20,"button":"left"}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum PaneInputEvent {
    #[serde(rename_all = "camelCase")]
    MouseMove {
        x: f64,
        y: f64,
        #[serde(default)]
        movement_x: f64,
        #[serde(default)]
        movement_y: f64,
    },
    #[serde(rename_all = "camelCase")]
    MouseDown {
        x: f64,
        y: f64,
        #[serde(default)]
        button: MouseButton,
        #[serde(default = "one")]
        click_count: u32,
    },
    #[serde(rename_all = "camelCase")]
    MouseUp {
        x: f64,
        y: f64,
        #[serde(default)]
        button: MouseButton,
        #[serde(default = "one")]
        click_count: u32,
    },
    #[serde(rename_all = "camelCase")]
    MouseWheel {
        x: f64,
        y: f64,
        #[serde(default)]
        delta_x: f64,
        #[serde(default)]
        delta_y: f64,
        #[serde(default)]
        can_scroll: bool,
    },
    #[serde(rename_all = "camelCase")]
    KeyDown {
        key_code: String,
        #[serde(default)]
        code: Option<String>,
        #[serde(default)]
        modifiers: KeyModifiers,
    },
    #[serde(rename_all = "camelCase")]
    KeyUp {
        key_code: String,
        #[serde(default)]
        code: Option<String>,
        #[serde(default)]
        modifiers: KeyModifiers,
    },
    #[serde(rename_all = "camelCase")]
    Char { key_code: String },
}

impl PaneInputEvent {
    pub fn char(text: impl Into<String>) -> Self {
        Self::Char {
            key_code: text.into(),
        }
    }

    pub fn key_down(key: impl Into<String>) -> Self {
        Self::KeyDown {
            key_code: key.into(),
            code: None,
            modifiers: KeyModifiers::NONE,
        }
    }

    pub fn key_up(key: impl Into<String>) -> Self {
        Self::KeyUp {
            key_code: key.into(),
            code: None,
            modifiers: KeyModifiers::NONE,
        }
    }

    /// Wire tag of this event.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::MouseMove { .. } => "mouseMove",
            Self::MouseDown { .. } => "mouseDown",
            Self::MouseUp { .. } => "mouseUp",
            Self::MouseWheel { .. } => "mouseWheel",
            Self::KeyDown { .. } => "keyDown",
            Self::KeyUp { .. } => "keyUp",
            Self::Char { .. } => "char",
        }
    }

    /// Pointer coordinates, if this is a pointer event.
    pub fn position(&self) -> Option<(f64, f64)> {
        match *self {
            Self::MouseMove { x, y, .. }
            | Self::MouseDown { x, y, .. }
            | Self::MouseUp { x, y, .. }
            | Self::MouseWheel { x, y, .. } => Some((x, y)),
            Self::KeyDown { .. } | Self::KeyUp { .. } | Self::Char { .. } => None,
        }
    }

    /// Copy of this event with its pointer coordinates replaced. Keyboard
    /// events are returned unchanged.
    pub fn with_position(&self, new_x: f64, new_y: f64) -> Self {
        let mut out = self.clone();
        match &mut out {
            Self::MouseMove { x, y, .. }
            | Self::MouseDown { x, y, .. }
            | Self::MouseUp { x, y, .. }
            | Self::MouseWheel { x, y, .. } => {
                *x = new_x;
                *y = new_y;
            }
            Self::KeyDown { .. } | Self::KeyUp { .. } | Self::Char { .. } => {}
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_capture_script_mouse_down() {
        let ev: PaneInputEvent =
            serde_json::from_str(r#"{"type":"mouseDown","x":12.5,"y":40,"button":"right"}"#)
                .unwrap();
        assert_eq!(
            ev,
            PaneInputEvent::MouseDown {
                x: 12.5,
                y: 40.0,
                button: MouseButton::Right,
                click_count: 1,
            }
        );
    }

    #[test]
    fn parses_wheel_with_camel_case_fields() {
        let ev: PaneInputEvent = serde_json::from_str(
            r#"{"type":"mouseWheel","x":1,"y":2,"deltaX":0,"deltaY":-120,"canScroll":true}"#,
        )
        .unwrap();
        match ev {
            PaneInputEvent::MouseWheel {
                delta_y,
                can_scroll,
                ..
            } => {
                assert_eq!(delta_y, -120.0);
                assert!(can_scroll);
            }
            other => panic!("expected wheel, got {other:?}"),
        }
    }

    #[test]
    fn parses_key_down_with_modifiers() {
        let ev: PaneInputEvent = serde_json::from_str(
            r#"{"type":"keyDown","keyCode":"M","code":"KeyM","modifiers":{"ctrl":true,"shift":true}}"#,
        )
        .unwrap();
        assert_eq!(
            ev,
            PaneInputEvent::KeyDown {
                key_code: "M".into(),
                code: Some("KeyM".into()),
                modifiers: KeyModifiers {
                    ctrl: true,
                    shift: true,
                    ..KeyModifiers::NONE
                },
            }
        );
    }

    #[test]
    fn key_events_have_no_position() {
        assert_eq!(PaneInputEvent::key_down("Enter").position(), None);
        assert_eq!(PaneInputEvent::char("a").position(), None);
    }

    #[test]
    fn with_position_only_touches_coordinates() {
        let ev = PaneInputEvent::MouseWheel {
            x: 10.0,
            y: 20.0,
            delta_x: 3.0,
            delta_y: 4.0,
            can_scroll: true,
        };
        let moved = ev.with_position(1.0, 2.0);
        assert_eq!(
            moved,
            PaneInputEvent::MouseWheel {
                x: 1.0,
                y: 2.0,
                delta_x: 3.0,
                delta_y: 4.0,
                can_scroll: true,
            }
        );
        let key = PaneInputEvent::key_up("a");
        assert_eq!(key.with_position(5.0, 5.0), key);
    }

    #[test]
    fn serializes_with_type_tag() {
        let json = serde_json::to_value(PaneInputEvent::char("é")).unwrap();
        assert_eq!(json["type"], "char");
        assert_eq!(json["keyCode"], "é");
    }

    #[test]
    fn rejects_unknown_event_type() {
        assert!(serde_json::from_str::<PaneInputEvent>(r#"{"type":"touchStart","x":1,"y":1}"#)
            .is_err());
    }
}
