//! Picker Panel Component
//!
//! Search box, category tabs, recents and results shared by both pickers.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::commands;
use crate::components::{CategoryTabs, ItemGrid};
use crate::picker::PickerHandle;

#[component]
pub fn PickerPanel(
    picker: PickerHandle,
    placeholder: &'static str,
    empty_message: &'static str,
    #[prop(optional)] wide: bool,
) -> impl IntoView {
    let on_keydown = move |ev: web_sys::KeyboardEvent| {
        match ev.key().as_str() {
            "Enter" => {
                ev.prevent_default();
                picker.select_first();
            }
            "Escape" => {
                ev.prevent_default();
                if picker.search().is_empty() {
                    picker.reset();
                    spawn_local(async {
                        let _ = commands::hide_window().await;
                    });
                } else {
                    picker.set_search(String::new());
                }
            }
            _ => {}
        }
    };

    view! {
        <div class="picker-panel">
            <input
                type="text"
                class="picker-search"
                placeholder=placeholder
                autocomplete="off"
                prop:value=move || picker.search()
                on:input=move |ev| {
                    if let Some(input) = ev.target().and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok()) {
                        picker.set_search(input.value());
                    }
                }
                on:keydown=on_keydown
            />

            <CategoryTabs picker=picker />

            <div class="picker-scroll">
                // Recents only on the unfiltered view
                <Show when=move || picker.show_recents() && !picker.recents().is_empty()>
                    <div class="picker-section">
                        <h3 class="picker-section-title">"Recent"</h3>
                        {move || view! { <ItemGrid items=picker.recents() picker=picker wide=wide /> }}
                    </div>
                </Show>

                {move || {
                    let results = picker.results();
                    if results.is_empty() {
                        view! { <p class="picker-empty">{empty_message}</p> }.into_any()
                    } else {
                        view! { <ItemGrid items=results picker=picker wide=wide /> }.into_any()
                    }
                }}
            </div>

            <div class="picker-preview">
                {move || match picker.hovered() {
                    Some(item) => format!("{} · {}", item.label(), item.category),
                    None => String::new(),
                }}
            </div>
        </div>
    }
}
