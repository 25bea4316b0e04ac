//! Picker Core
//!
//! UI-free logic behind the kaomoji and symbol pickers:
//! - catalog: read-only item lists (built-in or loaded from JSON)
//! - filter: category + search filtering
//! - recency: bounded recently-used list
//! - dispatch: host collaborator traits and paste dispatch
//! - controller: the composed state a picker view binds to

mod builtin;
mod catalog;
mod config;
mod controller;
mod dispatch;
mod entity;
mod filter;
mod item;
mod recency;

#[cfg(test)]
mod tests;

pub use catalog::ItemCatalog;
pub use config::PickerConfig;
pub use controller::PickerController;
pub use dispatch::{
    begin_window_drag, Notifier, PasteDispatcher, PasteTarget, WindowDrag,
    DEFAULT_PASTE_FAILURE_MESSAGE,
};
pub use entity::{Entity, PickerError, PickerResult};
pub use filter::{filter_items, FilterState};
pub use item::{CatalogKind, Item};
pub use recency::{RecencyTracker, DEFAULT_RECENT_CAP};
