//! UI Components
//!
//! Reusable Leptos components.

mod category_tabs;
mod drag_handle;
mod item_grid;
mod kaomoji_picker;
mod picker_panel;
mod symbol_picker;
mod title_bar;
mod toast_host;

pub use category_tabs::CategoryTabs;
pub use drag_handle::DragHandle;
pub use item_grid::ItemGrid;
pub use kaomoji_picker::KaomojiPicker;
pub use picker_panel::PickerPanel;
pub use symbol_picker::SymbolPicker;
pub use title_bar::TitleBar;
pub use toast_host::ToastHost;
