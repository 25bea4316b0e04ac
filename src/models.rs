//! Frontend Models
//!
//! Which picker is on screen.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PickerTab {
    #[default]
    Kaomoji,
    Symbols,
}

impl PickerTab {
    pub const ALL: [PickerTab; 2] = [PickerTab::Kaomoji, PickerTab::Symbols];

    pub fn label(&self) -> &'static str {
        match self {
            PickerTab::Kaomoji => "(^_^) Kaomoji",
            PickerTab::Symbols => "★ Symbols",
        }
    }

    /// Ctrl+Tab cycles pickers
    pub fn next(&self) -> Self {
        match self {
            PickerTab::Kaomoji => PickerTab::Symbols,
            PickerTab::Symbols => PickerTab::Kaomoji,
        }
    }
}
