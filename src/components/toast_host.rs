//! Toast Host Component
//!
//! Renders the message from `ToastContext`, if any.

use leptos::prelude::*;

use crate::context::use_toast;

#[component]
pub fn ToastHost() -> impl IntoView {
    let toast = use_toast();

    view! {
        <Show when=move || toast.message.get().is_some()>
            <div class="toast" role="status" on:click=move |_| toast.dismiss()>
                {move || toast.message.get().unwrap_or_default()}
            </div>
        </Show>
    }
}
