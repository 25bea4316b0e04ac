//! Core Entity Trait and Errors
//!
//! Entities carry a stable identifier so the recents list can
//! de-duplicate them. Errors shared by every picker component live here too.

/// Anything that can be selected in a picker
pub trait Entity: Sized + Clone {
    /// The type of the entity's unique identifier
    type Id: Clone + Eq + std::hash::Hash;

    /// Returns the entity's unique identifier
    fn id(&self) -> Self::Id;
}

/// Common result type for picker operations
pub type PickerResult<T> = Result<T, PickerError>;

/// Picker-level errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickerError {
    /// The paste collaborator rejected the request
    PasteFailed(String),
    /// The window manager refused to start an interactive move
    DragFailed(String),
    /// A catalog could not be loaded
    InvalidCatalog(String),
    /// Picker configuration could not be parsed
    InvalidConfig(String),
    /// The host bridge returned something we could not decode
    Bridge(String),
}

impl std::fmt::Display for PickerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PickerError::PasteFailed(msg) => write!(f, "Paste failed: {}", msg),
            PickerError::DragFailed(msg) => write!(f, "Drag failed: {}", msg),
            PickerError::InvalidCatalog(msg) => write!(f, "Invalid catalog: {}", msg),
            PickerError::InvalidConfig(msg) => write!(f, "Invalid config: {}", msg),
            PickerError::Bridge(msg) => write!(f, "Bridge error: {}", msg),
        }
    }
}

impl std::error::Error for PickerError {}
