//! IPC message validation and dispatch from webviews to the session.

use multinav_common::{ControlCommand, MultinavError};
use multinav_ingest::ContentPayload;
use multinav_router::{KeyCombo, PaneInputEvent, PaneInputOutcome, ShortcutAction};
use multinav_webview::ipc::{CONTROL_KINDS, PANE_KINDS};
use multinav_webview::{IpcMessage, ViewId};

use crate::app_state::core::MultinavApp;

// =============================================================================
// PARSING
// =============================================================================

/// A validated message from one of the webviews.
#[derive(Debug, Clone, PartialEq)]
pub(super) enum Inbound {
    /// Operator command from the control panel.
    Command(ControlCommand),
    /// Shortcut pressed while the control panel had focus.
    Shortcut(ShortcutAction),
    /// A pane finished loading a document.
    Hello(usize),
    /// Raw input captured in a pane.
    Input(usize, PaneInputEvent),
    /// Text a pane's content hook reported.
    Content(usize, ContentPayload),
}

/// Validate an IPC body against the kinds its view may send.
///
/// Commands are only accepted from the control panel. The pane index comes
/// from the view that delivered the message.
pub(super) fn parse_inbound(view: ViewId, body: &str) -> Result<Inbound, MultinavError> {
    let msg = IpcMessage::from_json(body)
        .ok_or_else(|| MultinavError::Ipc("not a {kind, payload} envelope".into()))?;

    match view {
        ViewId::Control => {
            if !CONTROL_KINDS.contains(&msg.kind.as_str()) {
                return Err(MultinavError::Ipc(format!(
                    "unknown control kind {:?}",
                    msg.kind
                )));
            }
            if msg.kind == "shortcut" {
                let combo: KeyCombo = serde_json::from_value(msg.payload)
                    .map_err(|e| MultinavError::Ipc(format!("bad shortcut payload: {e}")))?;
                return combo.action().map(Inbound::Shortcut).ok_or_else(|| {
                    MultinavError::Ipc(format!("no shortcut for {:?}", combo.key_code))
                });
            }
            ControlCommand::from_json(body)
                .map(Inbound::Command)
                .map_err(|e| MultinavError::Ipc(format!("bad {} payload: {e}", msg.kind)))
        }
        ViewId::Pane(pane) => {
            if !PANE_KINDS.contains(&msg.kind.as_str()) {
                return Err(MultinavError::Ipc(format!(
                    "unknown pane kind {:?}",
                    msg.kind
                )));
            }
            let bad_payload =
                |e: serde_json::Error| MultinavError::Ipc(format!("bad {} payload: {e}", msg.kind));
            match msg.kind.as_str() {
                "hello" => Ok(Inbound::Hello(pane)),
                "input" => serde_json::from_value(msg.payload.clone())
                    .map(|event| Inbound::Input(pane, event))
                    .map_err(bad_payload),
                _ => serde_json::from_value(msg.payload.clone())
                    .map(|payload| Inbound::Content(pane, payload))
                    .map_err(bad_payload),
            }
        }
    }
}

// =============================================================================
// DISPATCH
// =============================================================================

impl MultinavApp {
    /// Handle a single IPC message from a webview.
    pub(in crate::app_state) fn handle_ipc_message(&mut self, view: ViewId, body: &str) {
        let inbound = match parse_inbound(view, body) {
            Ok(inbound) => inbound,
            Err(e) => {
                tracing::warn!(
                    view = %view,
                    body_len = body.len(),
                    error = %e,
                    "IPC message rejected"
                );
                return;
            }
        };

        match inbound {
            Inbound::Command(command) => self.run_command(&command),
            Inbound::Shortcut(action) => {
                tracing::debug!(?action, "shortcut from control panel");
                self.with_host(|session, host| session.apply_shortcut(action, host));
                self.sync_control_panel();
            }
            Inbound::Hello(pane) => {
                tracing::debug!(pane, "pane document ready");
                self.observer.reset(pane);
            }
            Inbound::Input(pane, event) => self.route_pane_input(pane, &event),
            Inbound::Content(pane, payload) => self.handle_content(pane, &payload),
        }
    }

    pub(in crate::app_state) fn run_command(&mut self, command: &ControlCommand) {
        tracing::debug!(command = command.name(), "control command");
        if let ControlCommand::Prompt { text } = command {
            self.record_prompt(text);
            return;
        }
        self.with_host(|session, host| session.execute(command, host));
        self.sync_control_panel();
    }

    fn route_pane_input(&mut self, pane: usize, event: &PaneInputEvent) {
        let outcome = self.with_host(|session, host| session.handle_pane_input(pane, event, host));
        match outcome {
            PaneInputOutcome::Shortcut(action) => {
                tracing::debug!(pane, ?action, "shortcut from pane");
                self.sync_control_panel();
            }
            PaneInputOutcome::Mirrored(count) => {
                tracing::trace!(pane, kind = event.kind(), count, "input mirrored");
            }
            PaneInputOutcome::Ignored | PaneInputOutcome::Swallowed => {}
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use multinav_common::InputMode;
    use multinav_config::MultinavConfig;
    use multinav_router::MouseButton;

    #[test]
    fn control_commands_parse() {
        let inbound = parse_inbound(
            ViewId::Control,
            r#"{"kind":"navigateOne","payload":{"index":2,"url":"https://a.test"}}"#,
        )
        .unwrap();
        assert_eq!(
            inbound,
            Inbound::Command(ControlCommand::NavigateOne {
                index: 2,
                url: "https://a.test".into()
            })
        );

        let inbound = parse_inbound(ViewId::Control, r#"{"kind":"reloadAll"}"#).unwrap();
        assert_eq!(inbound, Inbound::Command(ControlCommand::ReloadAll));

        let inbound = parse_inbound(
            ViewId::Control,
            r#"{"kind":"setInputMode","payload":{"mode":"none"}}"#,
        )
        .unwrap();
        assert_eq!(
            inbound,
            Inbound::Command(ControlCommand::SetInputMode {
                mode: InputMode::None
            })
        );
    }

    #[test]
    fn every_control_kind_parses() {
        let bodies = [
            r#"{"kind":"navigateAll","payload":{"url":"https://a.test"}}"#,
            r#"{"kind":"navigateOne","payload":{"index":0,"url":"https://a.test"}}"#,
            r#"{"kind":"reloadAll"}"#,
            r#"{"kind":"setViewCount","payload":{"count":3}}"#,
            r#"{"kind":"setMirrorSource","payload":{"index":9}}"#,
            r#"{"kind":"setMirrorEnabled","payload":{"enabled":true}}"#,
            r#"{"kind":"setInputMode","payload":{"mode":"mirror"}}"#,
            r#"{"kind":"setLeader","payload":{"index":null}}"#,
            r#"{"kind":"setSprayAll","payload":{"enabled":false}}"#,
            r#"{"kind":"sendText","payload":{"text":"hi"}}"#,
            r#"{"kind":"sendKey","payload":{"key":"Enter"}}"#,
            r#"{"kind":"setZoom","payload":{"factor":1.5}}"#,
            r#"{"kind":"prompt","payload":{"text":"hi"}}"#,
            r#"{"kind":"shortcut","payload":{"keyCode":"l","code":"KeyL","modifiers":{"ctrl":true}}}"#,
        ];
        assert_eq!(bodies.len(), CONTROL_KINDS.len());
        for body in bodies {
            assert!(
                matches!(
                    parse_inbound(ViewId::Control, body),
                    Ok(Inbound::Command(_) | Inbound::Shortcut(_))
                ),
                "{body}"
            );
        }
    }

    #[test]
    fn control_panel_shortcuts_parse() {
        let body = r#"{"kind":"shortcut","payload":{"keyCode":"M","code":"KeyM","modifiers":{"ctrl":true,"shift":true}}}"#;
        assert_eq!(
            parse_inbound(ViewId::Control, body).unwrap(),
            Inbound::Shortcut(ShortcutAction::ToggleMirror)
        );

        let body = r#"{"kind":"shortcut","payload":{"keyCode":"q","modifiers":{"ctrl":true}}}"#;
        let err = parse_inbound(ViewId::Control, body).unwrap_err();
        assert!(err.to_string().contains("no shortcut"));
    }

    #[test]
    fn panes_cannot_send_shortcut_kind() {
        let body = r#"{"kind":"shortcut","payload":{"keyCode":"0","modifiers":{"ctrl":true}}}"#;
        assert!(parse_inbound(ViewId::Pane(0), body).is_err());
    }

    #[test]
    fn control_panel_shortcut_updates_session() {
        let mut app = MultinavApp::new(MultinavConfig::default());
        app.handle_ipc_message(
            ViewId::Control,
            r#"{"kind":"shortcut","payload":{"keyCode":"=","code":"Equal","modifiers":{"ctrl":true}}}"#,
        );
        assert!((app.session.zoom() - 1.1).abs() < 1e-9);

        app.handle_ipc_message(
            ViewId::Control,
            r#"{"kind":"shortcut","payload":{"keyCode":"m","code":"KeyM","modifiers":{"ctrl":true,"shift":true}}}"#,
        );
        assert!(app.session.router().mirror().enabled);
    }

    #[test]
    fn unknown_control_kind_rejected() {
        let err = parse_inbound(ViewId::Control, r#"{"kind":"format_disk","payload":{}}"#)
            .unwrap_err();
        assert!(matches!(err, MultinavError::Ipc(_)));
        assert!(err.to_string().contains("format_disk"));
    }

    #[test]
    fn malformed_payload_rejected() {
        let err = parse_inbound(
            ViewId::Control,
            r#"{"kind":"setViewCount","payload":{"count":"three"}}"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("bad setViewCount payload"));
        assert!(parse_inbound(ViewId::Control, "[]").is_err());
    }

    #[test]
    fn panes_cannot_issue_commands() {
        assert!(parse_inbound(ViewId::Pane(0), r#"{"kind":"reloadAll"}"#).is_err());
    }

    #[test]
    fn control_panel_cannot_post_pane_input() {
        let body = r#"{"kind":"input","payload":{"type":"char","keyCode":"a"}}"#;
        assert!(parse_inbound(ViewId::Control, body).is_err());
    }

    #[test]
    fn pane_input_takes_index_from_view() {
        let body = r#"{"kind":"input","payload":{"type":"mouseDown","x":10,"y":20,"button":"right","fromIndex":3}}"#;
        let inbound = parse_inbound(ViewId::Pane(1), body).unwrap();
        assert_eq!(
            inbound,
            Inbound::Input(
                1,
                PaneInputEvent::MouseDown {
                    x: 10.0,
                    y: 20.0,
                    button: MouseButton::Right,
                    click_count: 1,
                }
            )
        );
    }

    #[test]
    fn pane_content_and_hello_parse() {
        let body = r#"{"kind":"content","payload":{"provider":"chat.example","text":"answer","latencyMs":1200}}"#;
        match parse_inbound(ViewId::Pane(2), body).unwrap() {
            Inbound::Content(2, payload) => {
                assert_eq!(payload.text, "answer");
                assert_eq!(payload.latency_ms, Some(1200));
            }
            other => panic!("unexpected {other:?}"),
        }
        assert_eq!(
            parse_inbound(ViewId::Pane(0), r#"{"kind":"hello","payload":null}"#).unwrap(),
            Inbound::Hello(0)
        );
    }

    #[test]
    fn bad_pane_event_rejected() {
        let body = r#"{"kind":"input","payload":{"type":"teleport"}}"#;
        assert!(parse_inbound(ViewId::Pane(0), body).is_err());
    }

    #[test]
    fn prompt_command_records_without_webviews() {
        let mut app = MultinavApp::new(MultinavConfig::default());
        app.handle_ipc_message(
            ViewId::Control,
            r#"{"kind":"prompt","payload":{"text":"what is rust"}}"#,
        );
        assert_eq!(app.prompt.text(), "what is rust");
        assert!(app.prompt.at().is_some());
    }

    #[test]
    fn rejected_message_changes_nothing() {
        let mut app = MultinavApp::new(MultinavConfig::default());
        app.handle_ipc_message(ViewId::Pane(0), r#"{"kind":"prompt","payload":{"text":"x"}}"#);
        assert_eq!(app.prompt.text(), "");
    }
}
