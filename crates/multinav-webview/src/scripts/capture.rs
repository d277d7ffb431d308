/// Initialization script for every content pane.
///
/// Runs after the IPC bridge. Listeners sit in the capture phase on `window`
/// so the page still sees every event. Only `isTrusted` events are forwarded:
/// input the router injects is synthetic, so it never echoes back.
///
/// Key-downs that hit the global shortcut table are `preventDefault`ed so
/// the page's own accelerators (browser zoom, reload) never run twice.
///
/// Also installs:
/// - `window.multinav.reportContent(payload)`, the hook site scrapers call
///   with `{provider, model?, text, tokensOut?, latencyMs?, detectedAt?}`
/// - `window.multinav.inject(event)`, which replays a routed event
pub const PANE_CAPTURE_SCRIPT: &str = r#"
(function() {
    if (window.multinav && window.multinav.captureInstalled) { return; }
    var mn = window.multinav = window.multinav || {};
    mn.captureInstalled = true;

    function send(kind, payload) {
        if (mn.ipc) { mn.ipc.send(kind, payload); }
    }

    function forward(ev) { send('input', ev); }

    function buttonName(b) {
        return b === 2 ? 'right' : b === 1 ? 'middle' : 'left';
    }

    function buttonCode(name) {
        return name === 'right' ? 2 : name === 'middle' ? 1 : 0;
    }

    function mods(e) {
        return { ctrl: e.ctrlKey, alt: e.altKey, shift: e.shiftKey, meta: e.metaKey };
    }

    // Same table the host matches against; keep in step with shortcuts.rs.
    function isShortcut(e) {
        if (!e.ctrlKey) { return false; }
        var k = (e.key || '').toLowerCase(), c = e.code || '';
        if (!e.altKey && e.shiftKey && (k === 'r' || k === 'm')) { return true; }
        if (!e.altKey && !e.shiftKey && k === 'l') { return true; }
        if (e.altKey && !e.shiftKey &&
            (/^(Digit|Numpad)[1-4]$/.test(c) || /^[1-4]$/.test(k))) { return true; }
        if (!e.altKey &&
            (c === 'Equal' || c === 'Minus' || c === 'Digit0' ||
             k === '=' || k === '+' || k === '-' || k === '0')) { return true; }
        return false;
    }

    // ---- capture -------------------------------------------------------

    window.addEventListener('mousemove', function(e) {
        if (!e.isTrusted) { return; }
        forward({ type: 'mouseMove', x: e.clientX, y: e.clientY,
                  movementX: e.movementX, movementY: e.movementY });
    }, { capture: true, passive: true });

    window.addEventListener('mousedown', function(e) {
        if (!e.isTrusted) { return; }
        forward({ type: 'mouseDown', x: e.clientX, y: e.clientY,
                  button: buttonName(e.button), clickCount: e.detail || 1 });
    }, { capture: true });

    window.addEventListener('mouseup', function(e) {
        if (!e.isTrusted) { return; }
        forward({ type: 'mouseUp', x: e.clientX, y: e.clientY,
                  button: buttonName(e.button), clickCount: e.detail || 1 });
    }, { capture: true });

    window.addEventListener('wheel', function(e) {
        if (!e.isTrusted) { return; }
        forward({ type: 'mouseWheel', x: e.clientX, y: e.clientY,
                  deltaX: e.deltaX, deltaY: e.deltaY, canScroll: true });
    }, { capture: true, passive: true });

    window.addEventListener('keydown', function(e) {
        if (!e.isTrusted) { return; }
        if (isShortcut(e)) { e.preventDefault(); }
        forward({ type: 'keyDown', keyCode: e.key, code: e.code, modifiers: mods(e) });
    }, { capture: true });

    window.addEventListener('keypress', function(e) {
        if (!e.isTrusted || e.key.length !== 1) { return; }
        forward({ type: 'char', keyCode: e.key });
    }, { capture: true });

    window.addEventListener('keyup', function(e) {
        if (!e.isTrusted) { return; }
        forward({ type: 'keyUp', keyCode: e.key, code: e.code, modifiers: mods(e) });
    }, { capture: true });

    // ---- content hook --------------------------------------------------

    mn.reportContent = function(payload) {
        if (!payload || typeof payload.text !== 'string') { return; }
        send('content', payload);
    };

    // ---- synthetic input -----------------------------------------------

    function pointTarget(ev) {
        return document.elementFromPoint(ev.x, ev.y) || document.body || document.documentElement;
    }

    function keyTarget() {
        return document.activeElement || document.body || document.documentElement;
    }

    function mouse(type, ev, extra) {
        var init = { bubbles: true, cancelable: true, composed: true, view: window,
                     clientX: ev.x, clientY: ev.y };
        for (var k in extra) { init[k] = extra[k]; }
        var target = pointTarget(ev);
        target.dispatchEvent(new MouseEvent(type, init));
        return target;
    }

    function key(type, ev) {
        var m = ev.modifiers || {};
        keyTarget().dispatchEvent(new KeyboardEvent(type, {
            bubbles: true, cancelable: true, composed: true,
            key: ev.keyCode, code: ev.code || '',
            ctrlKey: !!m.ctrl, altKey: !!m.alt, shiftKey: !!m.shift, metaKey: !!m.meta
        }));
    }

    function insertText(text) {
        var el = keyTarget();
        if (document.execCommand && document.execCommand('insertText', false, text)) { return; }
        if (el && 'value' in el) {
            var start = el.selectionStart != null ? el.selectionStart : el.value.length;
            var end = el.selectionEnd != null ? el.selectionEnd : el.value.length;
            el.value = el.value.slice(0, start) + text + el.value.slice(end);
            el.selectionStart = el.selectionEnd = start + text.length;
            el.dispatchEvent(new InputEvent('input', { bubbles: true, data: text, inputType: 'insertText' }));
        }
    }

    mn.inject = function(ev) {
        switch (ev.type) {
        case 'mouseMove':
            mouse('mousemove', ev, { movementX: ev.movementX || 0, movementY: ev.movementY || 0 });
            break;
        case 'mouseDown':
            var down = mouse('mousedown', ev, { button: buttonCode(ev.button), detail: ev.clickCount || 1 });
            if (down && down.focus) { down.focus(); }
            break;
        case 'mouseUp':
            mouse('mouseup', ev, { button: buttonCode(ev.button), detail: ev.clickCount || 1 });
            if (buttonCode(ev.button) === 0) {
                mouse('click', ev, { button: 0, detail: ev.clickCount || 1 });
            }
            break;
        case 'mouseWheel':
            pointTarget(ev).dispatchEvent(new WheelEvent('wheel', {
                bubbles: true, cancelable: true, clientX: ev.x, clientY: ev.y,
                deltaX: ev.deltaX || 0, deltaY: ev.deltaY || 0
            }));
            if (ev.canScroll) { window.scrollBy(ev.deltaX || 0, ev.deltaY || 0); }
            break;
        case 'keyDown':
            key('keydown', ev);
            break;
        case 'keyUp':
            key('keyup', ev);
            break;
        case 'char':
            key('keypress', ev);
            insertText(ev.keyCode);
            break;
        }
    };

    send('hello', null);
})();
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forwards_only_trusted_events() {
        let listeners = PANE_CAPTURE_SCRIPT.matches("addEventListener('").count();
        let guards = PANE_CAPTURE_SCRIPT.matches("e.isTrusted").count();
        assert_eq!(listeners, 7);
        assert_eq!(guards, listeners);
    }

    #[test]
    fn uses_router_wire_tags() {
        for tag in [
            "'mouseMove'",
            "'mouseDown'",
            "'mouseUp'",
            "'mouseWheel'",
            "'keyDown'",
            "'keyUp'",
            "'char'",
        ] {
            assert!(PANE_CAPTURE_SCRIPT.contains(tag), "missing {tag}");
        }
    }

    #[test]
    fn shortcut_key_downs_are_prevented() {
        let keydown = PANE_CAPTURE_SCRIPT
            .split("addEventListener('keydown'")
            .nth(1)
            .and_then(|rest| rest.split("addEventListener('").next())
            .unwrap();
        assert!(keydown.contains("if (isShortcut(e)) { e.preventDefault(); }"));
        for code in ["Equal", "Minus", "Digit0", "(Digit|Numpad)[1-4]"] {
            assert!(PANE_CAPTURE_SCRIPT.contains(code), "missing {code}");
        }
    }

    #[test]
    fn posts_pane_kinds() {
        assert!(PANE_CAPTURE_SCRIPT.contains("send('input'"));
        assert!(PANE_CAPTURE_SCRIPT.contains("send('content'"));
        assert!(PANE_CAPTURE_SCRIPT.contains("send('hello'"));
    }
}
