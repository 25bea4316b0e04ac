//! Native Paste
//!
//! Puts text on the system clipboard, then sends the paste shortcut to
//! whichever application holds the focus once the picker is hidden.
//! Shortcut methods in order: uinput (Linux), enigo, xdotool (Linux).

use std::future::Future;
use std::time::Duration;

use arboard::Clipboard;
use tokio::sync::Mutex;

/// Wait after hiding the picker so the previous app regains focus
pub const FOCUS_SETTLE_MS: u64 = 120;
/// Gap between synthetic key events
const KEY_DELAY_MS: u64 = 20;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PasteError {
    EmptyText,
    Clipboard(String),
    Keystroke(String),
    Window(String),
}

impl std::fmt::Display for PasteError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PasteError::EmptyText => write!(f, "Nothing to paste"),
            PasteError::Clipboard(msg) => write!(f, "Clipboard error: {}", msg),
            PasteError::Keystroke(msg) => write!(f, "Paste keystroke failed: {}", msg),
            PasteError::Window(msg) => write!(f, "Window error: {}", msg),
        }
    }
}

impl std::error::Error for PasteError {}

/// Long-lived clipboard handle.
///
/// Kept for the app's lifetime: on Linux the clipboard contents are served
/// by this process and vanish when the last handle is dropped.
#[derive(Default)]
pub struct ClipboardState {
    clipboard: Mutex<Option<Clipboard>>,
}

impl ClipboardState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the clipboard text, opening the clipboard on first use
    pub async fn set_text(&self, text: &str) -> Result<(), PasteError> {
        validate_text(text)?;

        let mut guard = self.clipboard.lock().await;
        if guard.is_none() {
            *guard = Some(Clipboard::new().map_err(|e| PasteError::Clipboard(e.to_string()))?);
        }

        match guard.as_mut() {
            Some(clipboard) => clipboard
                .set_text(text)
                .map_err(|e| PasteError::Clipboard(e.to_string())),
            None => Err(PasteError::Clipboard("clipboard unavailable".to_string())),
        }
    }
}

/// Reject text that would paste nothing visible
pub fn validate_text(text: &str) -> Result<(), PasteError> {
    if text.trim().is_empty() {
        return Err(PasteError::EmptyText);
    }
    Ok(())
}

/// Copy `text` and paste it into the focused application
pub async fn paste_text(state: &ClipboardState, text: &str) -> Result<(), PasteError> {
    state.set_text(text).await?;

    tokio::time::sleep(Duration::from_millis(FOCUS_SETTLE_MS)).await;

    tokio::task::spawn_blocking(simulate_paste)
        .await
        .map_err(|e| PasteError::Keystroke(e.to_string()))?
}

/// The picker window as seen by a paste: hidden while the keystroke goes
/// to the previous app, brought back when the paste fails.
pub trait PickerWindow {
    fn hide_picker(&self) -> Result<(), String>;
    fn restore_picker(&self) -> Result<(), String>;
}

/// Hide `window`, run `paste`, and restore the window if the paste failed
/// so the user sees the error instead of an app that vanished.
pub async fn paste_hidden<W, F>(window: Option<&W>, paste: F) -> Result<(), PasteError>
where
    W: PickerWindow,
    F: Future<Output = Result<(), PasteError>>,
{
    if let Some(window) = window {
        window.hide_picker().map_err(PasteError::Window)?;
    }

    let result = paste.await;

    if result.is_err() {
        if let Some(window) = window {
            if let Err(e) = window.restore_picker() {
                log::warn!("failed to restore picker after paste error: {}", e);
            }
        }
    }

    result
}

/// Send the paste shortcut, trying each method in turn
fn simulate_paste() -> Result<(), PasteError> {
    #[cfg(target_os = "linux")]
    match crate::uinput::send_paste_shortcut() {
        Ok(()) => {
            log::debug!("paste shortcut sent via uinput");
            return Ok(());
        }
        Err(e) => log::warn!("uinput paste failed: {}, trying enigo", e),
    }

    match simulate_paste_enigo() {
        Ok(()) => {
            log::debug!("paste shortcut sent via enigo");
            return Ok(());
        }
        Err(e) => log::warn!("enigo paste failed: {}, trying fallback", e),
    }

    match fallback_paste() {
        Ok(()) => {
            log::debug!("paste shortcut sent via fallback");
            Ok(())
        }
        Err(e) => {
            log::error!("fallback paste failed: {}", e);
            Err(PasteError::Keystroke("all paste methods failed".to_string()))
        }
    }
}

fn simulate_paste_enigo() -> Result<(), PasteError> {
    use enigo::{Direction, Enigo, Keyboard, Settings};

    let keystroke = |e: &dyn std::fmt::Display| PasteError::Keystroke(e.to_string());
    let delay = || std::thread::sleep(Duration::from_millis(KEY_DELAY_MS));
    let modifier = paste_modifier();

    let mut enigo = Enigo::new(&Settings::default()).map_err(|e| keystroke(&e))?;

    enigo.key(modifier, Direction::Press).map_err(|e| keystroke(&e))?;
    delay();
    let sent = enigo.key(enigo::Key::Unicode('v'), Direction::Click);
    delay();
    // Always release the modifier, even if the V press failed
    enigo.key(modifier, Direction::Release).map_err(|e| keystroke(&e))?;

    sent.map_err(|e| keystroke(&e))
}

#[cfg(target_os = "macos")]
fn paste_modifier() -> enigo::Key {
    enigo::Key::Meta
}

#[cfg(not(target_os = "macos"))]
fn paste_modifier() -> enigo::Key {
    enigo::Key::Control
}

/// xdotool covers X11 sessions where enigo cannot connect
#[cfg(target_os = "linux")]
fn fallback_paste() -> Result<(), PasteError> {
    if std::env::var("DISPLAY").is_err() {
        return Err(PasteError::Keystroke("no X display for xdotool".to_string()));
    }

    let output = std::process::Command::new("xdotool")
        .args(["key", "--clearmodifiers", "ctrl+v"])
        .output()
        .map_err(|e| PasteError::Keystroke(format!("xdotool: {}", e)))?;

    if output.status.success() {
        Ok(())
    } else {
        Err(PasteError::Keystroke(format!(
            "xdotool exited with {}",
            output.status
        )))
    }
}

#[cfg(not(target_os = "linux"))]
fn fallback_paste() -> Result<(), PasteError> {
    Err(PasteError::Keystroke("no fallback on this platform".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_text() {
        assert_eq!(validate_text(""), Err(PasteError::EmptyText));
        assert_eq!(validate_text(" \n\t"), Err(PasteError::EmptyText));
        assert!(validate_text("(^_^)").is_ok());
        assert!(validate_text(" → ").is_ok());
    }

    #[test]
    fn test_error_display() {
        assert_eq!(PasteError::EmptyText.to_string(), "Nothing to paste");
        assert_eq!(
            PasteError::Keystroke("no display".to_string()).to_string(),
            "Paste keystroke failed: no display"
        );
    }

    #[derive(Default)]
    struct FakeWindow {
        calls: std::cell::RefCell<Vec<&'static str>>,
        fail_hide: bool,
    }

    impl PickerWindow for FakeWindow {
        fn hide_picker(&self) -> Result<(), String> {
            self.calls.borrow_mut().push("hide");
            if self.fail_hide {
                Err("no window".to_string())
            } else {
                Ok(())
            }
        }

        fn restore_picker(&self) -> Result<(), String> {
            self.calls.borrow_mut().push("restore");
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_failed_paste_restores_window() {
        let window = FakeWindow::default();
        let result = paste_hidden(Some(&window), async {
            Err(PasteError::Keystroke("all paste methods failed".to_string()))
        })
        .await;

        assert!(matches!(result, Err(PasteError::Keystroke(_))));
        assert_eq!(*window.calls.borrow(), vec!["hide", "restore"]);
    }

    #[tokio::test]
    async fn test_successful_paste_keeps_window_hidden() {
        let window = FakeWindow::default();
        let result = paste_hidden(Some(&window), async { Ok(()) }).await;

        assert_eq!(result, Ok(()));
        assert_eq!(*window.calls.borrow(), vec!["hide"]);
    }

    #[tokio::test]
    async fn test_hide_failure_skips_paste() {
        let window = FakeWindow { fail_hide: true, ..Default::default() };
        let pasted = std::cell::Cell::new(false);
        let result = paste_hidden(Some(&window), async {
            pasted.set(true);
            Ok(())
        })
        .await;

        assert_eq!(result, Err(PasteError::Window("no window".to_string())));
        assert!(!pasted.get());
        assert_eq!(*window.calls.borrow(), vec!["hide"]);
    }

    #[tokio::test]
    async fn test_paste_without_window() {
        let result = paste_hidden::<FakeWindow, _>(None, async {
            Err(PasteError::Clipboard("busy".to_string()))
        })
        .await;
        assert_eq!(result, Err(PasteError::Clipboard("busy".to_string())));
    }

    #[tokio::test]
    async fn test_empty_text_never_touches_clipboard() {
        let state = ClipboardState::new();
        assert_eq!(state.set_text("   ").await, Err(PasteError::EmptyText));
        assert!(state.clipboard.lock().await.is_none());
    }
}
