//! Core value types for the view layer: locations, cursor styles, and modes.

/// Cursor shape and style descriptors.
pub mod cursor;
/// Document-space coordinates.
pub mod location;
/// Editor mode definitions.
pub mod mode;

pub use cursor::{CursorShape, CursorStyle};
pub use location::{ColIdx, LineIdx, Location};
pub use mode::Mode;
