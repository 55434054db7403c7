//! Document view core for a modal editor.
//!
//! Binds a shared document, a validated cursor, the active mode, and a stack
//! of cursor styles. Input handling drives a [`DocumentView`]; rendering reads
//! [`DocumentView::cursor`] and [`DocumentView::current_style`].

/// TOML cursor style configuration.
pub mod config;
/// Document bounds contract and rope-backed document.
pub mod document;
/// View, document, and config errors.
pub mod error;
/// Mode to cursor style mapping.
pub mod styles;
/// Tagged cursor style stack.
pub mod stack;
/// The document view and its scoped style guard.
pub mod view;

#[cfg(test)]
mod invariants;

pub use config::CursorConfig;
pub use document::{DocumentBounds, DocumentId, TextDocument, clamp_location};
pub use error::{ConfigError, DocumentError, ViewError};
pub use quire_primitives::{CursorShape, CursorStyle, Location, Mode};
pub use stack::{OverrideId, StyleEntry, StyleOrigin, StyleStack};
pub use styles::{ModeStyleMap, ModeStyles};
pub use view::{DocumentView, DocumentViewBuilder, StyleGuard};
