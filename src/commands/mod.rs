//! Tauri Command Wrappers
//!
//! Frontend bindings to backend commands, plus the picker collaborators
//! built on them.

mod clipboard;
mod window;

use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    // `catch` turns a rejected command into Err instead of a thrown exception
    #[wasm_bindgen(js_namespace = ["window", "__TAURI__", "core"], catch)]
    async fn invoke(cmd: &str, args: JsValue) -> Result<JsValue, JsValue>;
}

/// Readable message for a rejected invoke
fn js_error(err: JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{:?}", err))
}

// Re-export all public items
pub use clipboard::*;
pub use window::*;
