//! UI layer for the desktop shell: app window and the counter button widget.

pub mod app;
pub mod widgets;

pub use app::{CounterApp, StartupConfig};
