use multinav_router::PaneInputEvent;

/// Script that replays `event` in a pane through the injector installed by
/// the capture script. The event is serialized in its wire form, so the
/// page sees the same field names the capture side produces.
pub fn inject_script(event: &PaneInputEvent) -> String {
    let json = serde_json::to_string(event).unwrap_or_else(|_| "null".to_string());
    format!("window.multinav && window.multinav.inject && window.multinav.inject({json});")
}
