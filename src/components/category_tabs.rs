//! Category Tabs Component
//!
//! "All" plus one button per catalog category.

use leptos::prelude::*;

use crate::picker::PickerHandle;

pub const ALL_LABEL: &str = "All";

/// Category buttons for a picker
#[component]
pub fn CategoryTabs(picker: PickerHandle) -> impl IntoView {
    let categories = picker.categories();

    let all_button = view! {
        <button
            class=move || if picker.category().is_none() { "category-btn active" } else { "category-btn" }
            on:click=move |_| picker.set_category(None)
        >
            {ALL_LABEL}
        </button>
    };

    view! {
        <div class="category-tabs">
            {all_button}
            {categories.into_iter().map(|category| {
                let label = category.clone();
                let for_class = category.clone();
                let is_selected = move || picker.category().as_deref() == Some(for_class.as_str());
                view! {
                    <button
                        class=move || if is_selected() { "category-btn active" } else { "category-btn" }
                        on:click=move |_| picker.set_category(Some(category.clone()))
                    >
                        {label}
                    </button>
                }
            }).collect_view()}
        </div>
    }
}
