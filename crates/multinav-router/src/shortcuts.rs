//! Global keyboard shortcuts, checked before any input is mirrored.

use serde::Deserialize;

use crate::event::KeyModifiers;
use crate::zoom::ZOOM_STEP;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ShortcutAction {
    ReloadAll,
    FocusControlUrl,
    ToggleMirror,
    SetMirrorSource(usize),
    ZoomBy(f64),
    ZoomReset,
}

/// A key-down seen outside the panes (the control panel), forwarded only
/// to be matched against the shortcut table.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyCombo {
    pub key_code: String,
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub modifiers: KeyModifiers,
}

impl KeyCombo {
    pub fn action(&self) -> Option<ShortcutAction> {
        match_shortcut(&self.key_code, self.code.as_deref(), self.modifiers)
    }
}

/// Match a key-down against the shortcut table.
///
/// `key` is the logical key (`"M"`, `"+"`, `"1"`), `code` the physical key
/// (`"Digit1"`, `"Numpad1"`, `"Equal"`) when known. Rules are tried in
/// order and the first match wins.
pub fn match_shortcut(key: &str, code: Option<&str>, mods: KeyModifiers) -> Option<ShortcutAction> {
    let KeyModifiers {
        ctrl, shift, alt, ..
    } = mods;
    if !ctrl {
        return None;
    }
    let code = code.unwrap_or("");
    let is = |letter: &str| key.eq_ignore_ascii_case(letter);

    if shift && !alt && is("r") {
        return Some(ShortcutAction::ReloadAll);
    }
    if !shift && !alt && is("l") {
        return Some(ShortcutAction::FocusControlUrl);
    }
    if shift && !alt && is("m") {
        return Some(ShortcutAction::ToggleMirror);
    }
    if !shift && alt {
        for (i, digit) in ["1", "2", "3", "4"].into_iter().enumerate() {
            if code == format!("Digit{digit}") || code == format!("Numpad{digit}") || key == digit {
                return Some(ShortcutAction::SetMirrorSource(i));
            }
        }
    }
    if !alt {
        if code == "Equal" || key == "+" || key == "=" {
            return Some(ShortcutAction::ZoomBy(ZOOM_STEP));
        }
        if code == "Minus" || key == "-" {
            return Some(ShortcutAction::ZoomBy(-ZOOM_STEP));
        }
        if code == "Digit0" || key == "0" {
            return Some(ShortcutAction::ZoomReset);
        }
    }
    None
}
