//! Top-level application state.
//!
//! Implements `winit::application::ApplicationHandler` to drive the panel:
//! a dock window, the strip layout, the poll schedule, and the intent queue
//! feeding the reconciliation engine.

mod core;
mod event_handler;
mod init;
mod polling;
mod render;
mod shutdown;
mod strip;
mod title;
mod types;

pub use self::core::TaskstripApp;
pub use strip::StripLayout;
