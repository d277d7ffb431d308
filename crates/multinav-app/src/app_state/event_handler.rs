//! `ApplicationHandler` implementation for the winit event loop.

use winit::application::ApplicationHandler;
use winit::event::{ElementState, KeyEvent, WindowEvent};
use winit::event_loop::ActiveEventLoop;
use winit::window::WindowId;

use super::core::{to_logical, MultinavApp};
use super::keys::shortcut_for;

impl ApplicationHandler for MultinavApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        if !self.initialize_window(event_loop) {
            event_loop.exit();
            return;
        }

        self.start_ingest();
        self.update_window_title();
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                tracing::info!("Window close requested");
                self.shutdown();
                event_loop.exit();
            }

            WindowEvent::Resized(size) => {
                if size.width > 0 && size.height > 0 {
                    let scale = self.window.as_ref().map_or(1.0, |w| w.scale_factor());
                    let size = to_logical(size, scale);
                    self.with_host(|session, host| session.resize(size, host));
                }
            }

            WindowEvent::ScaleFactorChanged { .. } => {
                if let Some(size) = self.logical_window_size() {
                    self.with_host(|session, host| session.resize(size, host));
                }
            }

            WindowEvent::ModifiersChanged(new_modifiers) => {
                self.modifiers = new_modifiers.state();
            }

            WindowEvent::KeyboardInput { event, .. } => {
                self.handle_keyboard_input(event);
            }

            _ => {}
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if self.should_exit {
            event_loop.exit();
            return;
        }
        self.poll_and_schedule(event_loop);
    }
}

impl MultinavApp {
    /// Key presses that reach the window rather than a webview. Only
    /// shortcuts are acted on.
    fn handle_keyboard_input(&mut self, event: KeyEvent) {
        if event.state != ElementState::Pressed || event.repeat {
            return;
        }
        let Some(action) = shortcut_for(&event.logical_key, event.physical_key, self.modifiers)
        else {
            return;
        };
        self.with_host(|session, host| session.apply_shortcut(action, host));
        self.sync_control_panel();
    }
}
