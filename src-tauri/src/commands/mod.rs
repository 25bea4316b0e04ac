//! Commands Layer
//!
//! Tauri command handlers the picker frontend invokes.

mod clipboard_cmd;
mod window_cmd;

pub use clipboard_cmd::*;
pub use window_cmd::*;
