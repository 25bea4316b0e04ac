//! Symbol Picker Component

use leptos::prelude::*;

use crate::components::PickerPanel;
use crate::picker::PickerHandle;

#[component]
pub fn SymbolPicker(picker: PickerHandle) -> impl IntoView {
    view! {
        <PickerPanel
            picker=picker
            placeholder="Search symbols (e.g. arrow, euro)..."
            empty_message="No symbols found"
        />
    }
}
