//! Clipboard Commands
//!
//! Frontend wrapper for the native paste, and the paste collaborator the
//! pickers dispatch through.

use async_trait::async_trait;
use picker_core::{PasteTarget, PickerError, PickerResult};
use serde::Serialize;

use super::{invoke, js_error};

#[derive(Serialize)]
struct PasteTextArgs<'a> {
    text: &'a str,
}

/// Hide the picker and paste `text` into the previously focused app
pub async fn paste_text(text: &str) -> Result<(), String> {
    let js_args = serde_wasm_bindgen::to_value(&PasteTextArgs { text })
        .map_err(|e| format!("Failed to serialize args: {}", e))?;
    invoke("paste_text", js_args).await.map_err(js_error)?;
    Ok(())
}

/// Paste collaborator backed by the `paste_text` command
#[derive(Clone, Copy, Default)]
pub struct TauriPaste;

#[async_trait(?Send)]
impl PasteTarget for TauriPaste {
    async fn paste(&self, text: &str) -> PickerResult<()> {
        paste_text(text).await.map_err(|e| {
            web_sys::console::error_1(&format!("[PASTE] paste_text failed: {}", e).into());
            PickerError::PasteFailed(e)
        })
    }
}
