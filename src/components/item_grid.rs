//! Item Grid Component
//!
//! Clickable grid of kaomoji or symbols.

use leptos::prelude::*;
use picker_core::Item;

use crate::picker::PickerHandle;

/// One selectable cell
#[component]
fn ItemButton(item: Item, picker: PickerHandle) -> impl IntoView {
    let label = item.label().to_string();
    let text = item.text.clone();
    let for_hover = item.clone();

    view! {
        <button
            class="picker-item"
            title=label
            on:click=move |_| picker.select(item.clone())
            on:mouseenter=move |_| picker.set_hovered(Some(for_hover.clone()))
            on:mouseleave=move |_| picker.set_hovered(None)
        >
            {text}
        </button>
    }
}

/// Grid of items; `wide` gives kaomoji room for their longer text
#[component]
pub fn ItemGrid(
    items: Vec<Item>,
    picker: PickerHandle,
    #[prop(optional)] wide: bool,
) -> impl IntoView {
    view! {
        <div class=if wide { "picker-grid wide" } else { "picker-grid" }>
            {items.into_iter().map(|item| view! { <ItemButton item=item picker=picker /> }).collect_view()}
        </div>
    }
}
