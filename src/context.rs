//! Toast Context
//!
//! Transient notifications provided via Leptos Context API. This is the
//! notifier the pickers report paste failures through.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use picker_core::Notifier;

/// How long a toast stays visible
pub const TOAST_DURATION_MS: u32 = 2500;

/// App-wide toast signals provided via context
#[derive(Clone, Copy)]
pub struct ToastContext {
    /// Message currently shown (None = hidden) - read
    pub message: ReadSignal<Option<String>>,
    /// Message currently shown - write
    set_message: WriteSignal<Option<String>>,
    /// Bumped per toast so an older timer never hides a newer message
    generation: ReadSignal<u32>,
    set_generation: WriteSignal<u32>,
}

impl ToastContext {
    pub fn new() -> Self {
        let (message, set_message) = signal::<Option<String>>(None);
        let (generation, set_generation) = signal(0u32);
        Self {
            message,
            set_message,
            generation,
            set_generation,
        }
    }

    /// Show `text` for `TOAST_DURATION_MS`
    pub fn show(&self, text: &str) {
        self.set_message.set(Some(text.to_string()));
        self.set_generation.update(|g| *g = g.wrapping_add(1));

        let shown = self.generation.get_untracked();
        let generation = self.generation;
        let set_message = self.set_message;
        spawn_local(async move {
            TimeoutFuture::new(TOAST_DURATION_MS).await;
            if generation.get_untracked() == shown {
                set_message.set(None);
            }
        });
    }

    pub fn dismiss(&self) {
        self.set_message.set(None);
    }
}

impl Notifier for ToastContext {
    fn notify(&self, message: &str) {
        self.show(message);
    }
}

/// Create the toast context and provide it to all children
pub fn provide_toast() -> ToastContext {
    let toast = ToastContext::new();
    provide_context(toast);
    toast
}

/// Get the toast context
pub fn use_toast() -> ToastContext {
    expect_context::<ToastContext>()
}
