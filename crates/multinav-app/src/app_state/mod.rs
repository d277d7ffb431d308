//! Top-level application state.
//!
//! Implements `winit::application::ApplicationHandler` to drive the main
//! event loop. Coordinates config, the session, webviews, and log shipping.

mod core;
mod event_handler;
mod ingest;
mod init;
mod keys;
mod polling;
mod shutdown;
mod title;
mod types;
mod webview_bridge;

pub use core::MultinavApp;
