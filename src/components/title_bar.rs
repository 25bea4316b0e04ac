//! Title Bar
//!
//! Drag handle on the left, pin / minimize / close on the right. The window
//! cannot be dragged while pinned on top.

use std::future::Future;

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands;
use crate::components::DragHandle;

/// Run a window command in the background; failures only reach the console
fn spawn_window_command<F>(name: &'static str, command: F)
where
    F: Future<Output = Result<(), String>> + 'static,
{
    spawn_local(async move {
        if let Err(e) = command.await {
            web_sys::console::warn_1(&format!("[WINDOW] {} failed: {}", name, e).into());
        }
    });
}

fn pin_tooltip(pinned: bool) -> &'static str {
    if pinned {
        "Unpin"
    } else {
        "Keep on top"
    }
}

#[component]
pub fn TitleBar(
    is_pinned: ReadSignal<bool>,
    set_is_pinned: WriteSignal<bool>,
) -> impl IntoView {
    let on_pin = move |_| {
        let pinned = !is_pinned.get_untracked();
        set_is_pinned.set(pinned);
        spawn_window_command("set_pinned", commands::set_pinned(pinned));
    };

    view! {
        <div class="custom-titlebar" class:pinned=move || is_pinned.get()>
            <DragHandle locked=is_pinned>
                <span class="titlebar-title">"(^_^) Kaomoji Picker"</span>
                <Show when=move || is_pinned.get()>
                    <span class="lock-icon">"🔒"</span>
                </Show>
            </DragHandle>

            <div class="titlebar-controls">
                <button
                    class="titlebar-btn pin"
                    class:active=move || is_pinned.get()
                    title=move || pin_tooltip(is_pinned.get())
                    on:click=on_pin
                >
                    "📌"
                </button>
                <button
                    class="titlebar-btn minimize"
                    title="Minimize"
                    on:click=|_| spawn_window_command("minimize_window", commands::minimize_window())
                >
                    "─"
                </button>
                <button
                    class="titlebar-btn close"
                    title="Close"
                    on:click=|_| spawn_window_command("close_window", commands::close_window())
                >
                    "✕"
                </button>
            </div>
        </div>
    }
}
