//! [`PaneHost`] over the WebView registry.

use multinav_common::types::Rect;
use multinav_common::{MultinavError, Result};
use multinav_router::{PaneHost, PaneInputEvent};
use serde_json::Value;

use crate::bounds::rect_to_wry;
use crate::events::ViewId;
use crate::ipc::FOCUS_URL_KIND;
use crate::manager::{WebViewHandle, WebViewRegistry};
use crate::scripts::{highlight_script, inject_script};

fn host_error(pane: usize, e: wry::Error) -> MultinavError {
    MultinavError::host(pane, e.to_string())
}

impl WebViewRegistry {
    fn pane(&self, pane: usize) -> Result<&WebViewHandle> {
        self.get(ViewId::Pane(pane))
            .ok_or_else(|| MultinavError::host(pane, "no webview for pane"))
    }

    fn control_handle(&self) -> Result<&WebViewHandle> {
        self.get(ViewId::Control)
            .ok_or_else(|| MultinavError::Other("control panel webview not created".into()))
    }
}

impl PaneHost for WebViewRegistry {
    fn load_url(&mut self, pane: usize, url: &str) -> Result<()> {
        self.pane(pane)?
            .load_url(url)
            .map_err(|e| host_error(pane, e))
    }

    fn reload(&mut self, pane: usize) -> Result<()> {
        self.pane(pane)?.reload().map_err(|e| host_error(pane, e))
    }

    fn set_bounds(&mut self, pane: usize, rect: Rect) -> Result<()> {
        self.pane(pane)?
            .set_bounds(rect_to_wry(rect))
            .map_err(|e| host_error(pane, e))
    }

    fn set_control_bounds(&mut self, rect: Rect) -> Result<()> {
        self.control_handle()?
            .set_bounds(rect_to_wry(rect))
            .map_err(|e| MultinavError::Other(format!("control panel bounds: {e}")))
    }

    fn set_zoom(&mut self, pane: usize, factor: f64) -> Result<()> {
        self.pane(pane)?.zoom(factor).map_err(|e| host_error(pane, e))
    }

    fn send_input(&mut self, pane: usize, event: &PaneInputEvent) -> Result<()> {
        let script = inject_script(event);
        self.pane(pane)?
            .evaluate_script(&script)
            .map_err(|e| host_error(pane, e))
    }

    fn set_source_highlight(&mut self, pane: usize, on: bool, color: &str) -> Result<()> {
        let script = highlight_script(on, color);
        self.pane(pane)?
            .evaluate_script(&script)
            .map_err(|e| host_error(pane, e))?;
        if on {
            self.highlights.insert(pane, script);
        } else {
            self.highlights.remove(&pane);
        }
        Ok(())
    }

    fn focus_control(&mut self) -> Result<()> {
        let control = self.control_handle()?;
        control
            .focus()
            .and_then(|()| control.send_ipc(FOCUS_URL_KIND, &Value::Null))
            .map_err(|e| MultinavError::Other(format!("focus control panel: {e}")))
    }
}
