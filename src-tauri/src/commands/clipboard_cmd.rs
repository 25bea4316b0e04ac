//! Clipboard Commands
//!
//! Pasting a picked kaomoji or symbol into the previously focused app.

use tauri::{AppHandle, Manager, Runtime, State, WebviewWindow};

use crate::paste::{self, ClipboardState, PickerWindow};

impl<R: Runtime> PickerWindow for WebviewWindow<R> {
    fn hide_picker(&self) -> Result<(), String> {
        self.hide().map_err(|e| e.to_string())
    }

    fn restore_picker(&self) -> Result<(), String> {
        self.show().map_err(|e| e.to_string())?;
        self.set_focus().map_err(|e| e.to_string())
    }
}

/// Hide the picker, then paste `text` into whatever app regains focus.
/// The picker comes back if the paste fails.
#[tauri::command]
pub async fn paste_text(
    app: AppHandle,
    state: State<'_, ClipboardState>,
    text: String,
) -> Result<(), String> {
    paste::validate_text(&text).map_err(|e| e.to_string())?;

    #[cfg(not(any(target_os = "android", target_os = "ios")))]
    let window = app.get_webview_window("main");
    #[cfg(any(target_os = "android", target_os = "ios"))]
    let window: Option<WebviewWindow> = None;

    match paste::paste_hidden(window.as_ref(), paste::paste_text(&state, &text)).await {
        Ok(()) => Ok(()),
        Err(e) => {
            let _ = rolling_logger::error(&format!("paste_text failed: {}", e));
            Err(e.to_string())
        }
    }
}
