//! Window Commands
//!
//! Frontend bindings for dragging and the title bar controls.

use async_trait::async_trait;
use picker_core::{PickerError, PickerResult, WindowDrag};
use serde::Serialize;
use wasm_bindgen::prelude::*;

use super::{invoke, js_error};

#[derive(Serialize)]
struct PinnedArgs {
    pinned: bool,
}

// ========================
// Commands
// ========================

pub async fn start_dragging() -> Result<(), String> {
    invoke("start_dragging", JsValue::NULL).await.map_err(js_error)?;
    Ok(())
}

pub async fn set_pinned(pinned: bool) -> Result<(), String> {
    let js_args = serde_wasm_bindgen::to_value(&PinnedArgs { pinned }).map_err(|e| e.to_string())?;
    invoke("set_pinned", js_args).await.map_err(js_error)?;
    Ok(())
}

pub async fn minimize_window() -> Result<(), String> {
    invoke("minimize_window", JsValue::NULL).await.map_err(js_error)?;
    Ok(())
}

pub async fn hide_window() -> Result<(), String> {
    invoke("hide_window", JsValue::NULL).await.map_err(js_error)?;
    Ok(())
}

pub async fn close_window() -> Result<(), String> {
    invoke("close_window", JsValue::NULL).await.map_err(js_error)?;
    Ok(())
}

// ========================
// Collaborators
// ========================

/// Window-drag collaborator backed by `start_dragging`
#[derive(Clone, Copy, Default)]
pub struct TauriWindow;

#[async_trait(?Send)]
impl WindowDrag for TauriWindow {
    async fn begin_drag(&self) -> PickerResult<()> {
        start_dragging().await.map_err(|e| {
            web_sys::console::warn_1(&format!("[DRAG] start_dragging failed: {}", e).into());
            PickerError::DragFailed(e)
        })
    }
}
