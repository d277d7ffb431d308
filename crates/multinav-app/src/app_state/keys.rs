//! Shortcut matching for key presses on the host window itself.

use winit::keyboard::{Key, ModifiersState, PhysicalKey};

use multinav_router::{match_shortcut, KeyModifiers, ShortcutAction};

/// Match a winit key press against the shortcut table. Logical keys are
/// named the way the DOM names them (`"r"`, `"Enter"`), physical keys by
/// their code (`"Digit1"`, `"Equal"`).
pub(super) fn shortcut_for(
    logical: &Key,
    physical: PhysicalKey,
    mods: ModifiersState,
) -> Option<ShortcutAction> {
    let key = match logical {
        Key::Character(c) => c.to_string(),
        Key::Named(named) => format!("{named:?}"),
        _ => return None,
    };
    let code = match physical {
        PhysicalKey::Code(code) => Some(format!("{code:?}")),
        PhysicalKey::Unidentified(_) => None,
    };
    let mods = KeyModifiers {
        ctrl: mods.control_key(),
        alt: mods.alt_key(),
        shift: mods.shift_key(),
        meta: mods.super_key(),
    };
    match_shortcut(&key, code.as_deref(), mods)
}
