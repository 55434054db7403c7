//! Error types for the view layer.

use std::path::PathBuf;

use thiserror::Error;

/// Errors reported by [`DocumentView`](crate::DocumentView) operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ViewError {
	/// A pop was attempted while only the mode-derived style remained.
	///
	/// Recoverable: the stack is left unchanged.
	#[error("cursor style stack underflow: no explicit override to pop")]
	StackUnderflow,

	/// A view was requested without a document to bind.
	///
	/// No cursor position is definable without a document, so this is a
	/// caller contract violation rather than a runtime condition.
	#[error("document view requires a bound document")]
	InvalidDocumentBinding,
}

/// Result type for view operations.
pub type Result<T> = std::result::Result<T, ViewError>;

/// Errors that can occur when loading a [`TextDocument`](crate::TextDocument).
#[derive(Debug, Error)]
pub enum DocumentError {
	/// Error reading the backing file.
	#[error("I/O error reading {path}: {error}")]
	Io {
		/// Path to the file that failed to read.
		path: PathBuf,
		/// The underlying I/O error.
		error: std::io::Error,
	},
}

/// Errors that can occur when loading cursor configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
	/// Error parsing TOML syntax or shape.
	#[error("TOML parse error: {0}")]
	Toml(#[from] toml::de::Error),

	/// Error reading a configuration file.
	#[error("I/O error reading {path}: {error}")]
	Io {
		/// Path to the file that failed to read.
		path: PathBuf,
		/// The underlying I/O error.
		error: std::io::Error,
	},
}
