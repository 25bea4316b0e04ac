//! Host Collaborators and Paste Dispatch
//!
//! The native shell is reached only through these traits, so the pickers
//! can be driven without a live window.
//! Futures are `?Send`: the frontend runs on a single WASM thread.

use async_trait::async_trait;

use crate::entity::{PickerError, PickerResult};
use crate::item::Item;

/// Default toast text for a rejected paste
pub const DEFAULT_PASTE_FAILURE_MESSAGE: &str = "Couldn't paste. Please try again.";

/// Pastes text into whatever application holds the OS focus
#[async_trait(?Send)]
pub trait PasteTarget {
    async fn paste(&self, text: &str) -> PickerResult<()>;
}

/// Starts an interactive window move
#[async_trait(?Send)]
pub trait WindowDrag {
    async fn begin_drag(&self) -> PickerResult<()>;
}

/// Shows a short transient message to the user
pub trait Notifier {
    fn notify(&self, message: &str);
}

/// Start a window move. Failures are logged and otherwise ignored;
/// the user can simply retry the gesture.
pub async fn begin_window_drag<W: WindowDrag + ?Sized>(window: &W) {
    if let Err(e) = window.begin_drag().await {
        log::warn!("window drag did not start: {}", e);
    }
}

/// Forwards selections to the paste target and reports failures
pub struct PasteDispatcher<P, N> {
    target: P,
    notifier: N,
    failure_message: String,
}

impl<P: PasteTarget, N: Notifier> PasteDispatcher<P, N> {
    pub fn new(target: P, notifier: N) -> Self {
        Self::with_failure_message(target, notifier, DEFAULT_PASTE_FAILURE_MESSAGE)
    }

    pub fn with_failure_message(target: P, notifier: N, failure_message: impl Into<String>) -> Self {
        Self {
            target,
            notifier,
            failure_message: failure_message.into(),
        }
    }

    /// Paste the item's text. On failure, log, notify once, and return the
    /// error. No retry.
    pub async fn paste(&self, item: &Item) -> PickerResult<()> {
        log::debug!("pasting item {} ({})", item.id, item.category);

        match self.target.paste(&item.text).await {
            Ok(()) => Ok(()),
            Err(e) => {
                log::error!("paste of item {} failed: {}", item.id, e);
                self.notifier.notify(&self.failure_message);
                Err(match e {
                    PickerError::PasteFailed(msg) => PickerError::PasteFailed(msg),
                    other => PickerError::PasteFailed(other.to_string()),
                })
            }
        }
    }
}
