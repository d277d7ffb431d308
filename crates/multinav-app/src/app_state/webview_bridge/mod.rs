//! Bridge between the webviews and the session.
//!
//! Handles IPC message validation and dispatch, and keeps the control
//! panel's widgets in step with session state.

mod control;
mod ipc_dispatch;
