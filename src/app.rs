//! Kaomoji Picker Frontend App
//!
//! Title bar, picker tabs and the toast layer.

use leptos::prelude::*;
use picker_core::ItemCatalog;

use crate::components::{KaomojiPicker, SymbolPicker, TitleBar, ToastHost};
use crate::context::provide_toast;
use crate::models::PickerTab;
use crate::picker::{use_picker, PickerHandle};

#[component]
pub fn App() -> impl IntoView {
    // Provide toast context before the pickers pick it up as their notifier
    provide_toast();

    // State
    let (is_pinned, set_is_pinned) = signal(false);
    let (tab, set_tab) = signal(PickerTab::default());

    // Both pickers live for the whole session so their recents survive tab switches
    let kaomoji = use_picker(ItemCatalog::kaomoji());
    let symbols = use_picker(ItemCatalog::symbols());

    let picker_for = move |t: PickerTab| -> PickerHandle {
        match t {
            PickerTab::Kaomoji => kaomoji,
            PickerTab::Symbols => symbols,
        }
    };

    let switch_to = move |t: PickerTab| {
        if tab.get_untracked() != t {
            picker_for(t).reset();
            set_tab.set(t);
        }
    };

    let on_keydown = move |ev: web_sys::KeyboardEvent| {
        if ev.ctrl_key() && ev.key() == "Tab" {
            ev.prevent_default();
            switch_to(tab.get_untracked().next());
        }
    };

    view! {
        <div class="app-layout" on:keydown=on_keydown>
            <TitleBar is_pinned=is_pinned set_is_pinned=set_is_pinned />

            <div class="picker-tabs">
                {PickerTab::ALL.into_iter().map(|t| view! {
                    <button
                        class=move || if tab.get() == t { "picker-tab active" } else { "picker-tab" }
                        on:click=move |_| switch_to(t)
                    >
                        {t.label()}
                    </button>
                }).collect_view()}
            </div>

            <main class="main-content">
                {move || match tab.get() {
                    PickerTab::Kaomoji => view! { <KaomojiPicker picker=kaomoji /> }.into_any(),
                    PickerTab::Symbols => view! { <SymbolPicker picker=symbols /> }.into_any(),
                }}
            </main>

            <ToastHost />
        </div>
    }
}
