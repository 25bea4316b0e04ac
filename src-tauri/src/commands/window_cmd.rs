//! Window Commands
//!
//! Dragging and window controls for the undecorated picker window.

use tauri::{AppHandle, Manager};

/// Begin an interactive window move (called on mouse-press in the drag handle)
#[tauri::command]
pub async fn start_dragging(app: AppHandle) -> Result<(), String> {
    #[cfg(not(any(target_os = "android", target_os = "ios")))]
    {
        let window = app.get_webview_window("main").ok_or("Window not found")?;
        if let Err(e) = window.start_dragging() {
            log::warn!("start_dragging failed: {}", e);
            return Err(e.to_string());
        }
    }
    Ok(())
}

/// Set window always-on-top state
#[tauri::command]
pub async fn set_pinned(app: AppHandle, pinned: bool) -> Result<(), String> {
    #[cfg(not(any(target_os = "android", target_os = "ios")))]
    {
        let window = app.get_webview_window("main").ok_or("Window not found")?;
        window.set_always_on_top(pinned).map_err(|e| e.to_string())?;
    }
    Ok(())
}

/// Minimize window
#[tauri::command]
pub async fn minimize_window(app: AppHandle) -> Result<(), String> {
    #[cfg(not(any(target_os = "android", target_os = "ios")))]
    {
        let window = app.get_webview_window("main").ok_or("Window not found")?;
        window.minimize().map_err(|e| e.to_string())?;
    }
    Ok(())
}

/// Hide window without quitting (Escape in the picker)
#[tauri::command]
pub async fn hide_window(app: AppHandle) -> Result<(), String> {
    #[cfg(not(any(target_os = "android", target_os = "ios")))]
    {
        let window = app.get_webview_window("main").ok_or("Window not found")?;
        window.hide().map_err(|e| e.to_string())?;
    }
    Ok(())
}

/// Close window
#[tauri::command]
pub async fn close_window(app: AppHandle) -> Result<(), String> {
    #[cfg(not(any(target_os = "android", target_os = "ios")))]
    {
        let window = app.get_webview_window("main").ok_or("Window not found")?;
        window.close().map_err(|e| e.to_string())?;
    }
    Ok(())
}
