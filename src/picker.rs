//! Picker Hook
//!
//! Binds a `PickerController` to Leptos reactivity. The controller lives in
//! a local `StoredValue`; revision signals tell views when to re-read it.

use leptos::prelude::*;
use leptos::task::spawn_local;
use picker_core::{Item, ItemCatalog, PickerController};

use crate::commands::TauriPaste;
use crate::context::{use_toast, ToastContext};

pub type FrontendController = PickerController<TauriPaste, ToastContext>;

#[derive(Clone, Copy)]
pub struct PickerHandle {
    controller: StoredValue<FrontendController, LocalStorage>,
    /// Search, category and recents
    revision: ReadSignal<u32>,
    set_revision: WriteSignal<u32>,
    /// Hover only, so hovering never rebuilds the grid
    hover_revision: ReadSignal<u32>,
    set_hover_revision: WriteSignal<u32>,
}

/// Create a picker over `catalog`. Needs a `ToastContext` in scope.
pub fn use_picker(catalog: ItemCatalog) -> PickerHandle {
    let controller = PickerController::new(catalog, TauriPaste, use_toast());
    let (revision, set_revision) = signal(0u32);
    let (hover_revision, set_hover_revision) = signal(0u32);

    PickerHandle {
        controller: StoredValue::new_local(controller),
        revision,
        set_revision,
        hover_revision,
        set_hover_revision,
    }
}

impl PickerHandle {
    fn bump(&self) {
        self.set_revision.update(|v| *v += 1);
    }

    // ========================
    // Reactive reads
    // ========================

    pub fn search(&self) -> String {
        let _ = self.revision.get();
        self.controller.with_value(|c| c.search())
    }

    pub fn category(&self) -> Option<String> {
        let _ = self.revision.get();
        self.controller.with_value(|c| c.category())
    }

    pub fn categories(&self) -> Vec<String> {
        self.controller.with_value(|c| c.categories())
    }

    pub fn results(&self) -> Vec<Item> {
        let _ = self.revision.get();
        self.controller.with_value(|c| c.results())
    }

    pub fn recents(&self) -> Vec<Item> {
        let _ = self.revision.get();
        self.controller.with_value(|c| c.recents())
    }

    pub fn show_recents(&self) -> bool {
        let _ = self.revision.get();
        self.controller.with_value(|c| c.show_recents())
    }

    pub fn hovered(&self) -> Option<Item> {
        let _ = self.hover_revision.get();
        self.controller.with_value(|c| c.hovered())
    }

    // ========================
    // Input
    // ========================

    pub fn set_search(&self, text: String) {
        self.controller.update_value(|c| c.set_search(text));
        self.bump();
    }

    pub fn set_category(&self, category: Option<String>) {
        self.controller.update_value(|c| c.set_category(category));
        self.bump();
    }

    pub fn set_hovered(&self, item: Option<Item>) {
        self.controller.update_value(|c| c.set_hovered(item));
        self.set_hover_revision.update(|v| *v += 1);
    }

    /// Back to the default view (picker re-shown or tab switched)
    pub fn reset(&self) {
        self.controller.update_value(|c| c.reset());
        self.bump();
        self.set_hover_revision.update(|v| *v += 1);
    }

    /// Fire-and-forget paste. A success records the item and clears the
    /// filter, so both revisions move.
    pub fn select(&self, item: Item) {
        let id = item.id.clone();
        let pending = self.controller.with_value(|c| c.select(item));
        let set_revision = self.set_revision;
        let set_hover_revision = self.set_hover_revision;

        spawn_local(async move {
            match pending.await {
                Ok(()) => {
                    set_revision.update(|v| *v += 1);
                    set_hover_revision.update(|v| *v += 1);
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("[PICKER] select {} failed: {}", id, e).into());
                }
            }
        });
    }

    /// Paste the first visible result (Enter in the search box)
    pub fn select_first(&self) {
        let first = self.controller.with_value(|c| c.results().into_iter().next());
        if let Some(item) = first {
            self.select(item);
        }
    }
}
