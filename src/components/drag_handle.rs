//! Drag Handle Component
//!
//! Mouse-press on the handle starts a native window move.

use leptos::prelude::*;
use leptos::task::spawn_local;
use picker_core::begin_window_drag;

use crate::commands::TauriWindow;

/// Primary mouse button
const PRIMARY_BUTTON: i16 = 0;

/// Draggable region; inert while `locked` is true
#[component]
pub fn DragHandle(
    #[prop(into)] locked: Signal<bool>,
    children: Children,
) -> impl IntoView {
    let on_mousedown = move |ev: web_sys::MouseEvent| {
        if locked.get_untracked() || ev.button() != PRIMARY_BUTTON {
            return;
        }
        // Double-clicks would otherwise start a second drag
        if ev.detail() > 1 {
            return;
        }
        ev.prevent_default();
        spawn_local(async {
            begin_window_drag(&TauriWindow).await;
        });
    };

    view! {
        <div
            class=move || if locked.get() { "titlebar-drag-region locked" } else { "titlebar-drag-region" }
            on:mousedown=on_mousedown
        >
            {children()}
        </div>
    }
}
