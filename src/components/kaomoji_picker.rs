//! Kaomoji Picker Component

use leptos::prelude::*;

use crate::components::PickerPanel;
use crate::picker::PickerHandle;

#[component]
pub fn KaomojiPicker(picker: PickerHandle) -> impl IntoView {
    view! {
        <PickerPanel
            picker=picker
            placeholder="Search kaomoji (e.g. happy, bear)..."
            empty_message="No kaomoji found (._.)"
            wide=true
        />
    }
}
