//! Cursor style configuration.
//!
//! Loaded from TOML with a single `[cursor]` table keyed by mode name:
//!
//! ```toml
//! [cursor]
//! normal = { shape = "block" }
//! insert = { shape = "bar", blink = true }
//! ```
//!
//! Modes left out keep the stock [`ModeStyleMap`] style.

use std::path::Path;

use quire_primitives::{CursorStyle, Mode};
use serde::Deserialize;

use crate::error::ConfigError;
use crate::styles::ModeStyleMap;

/// Top-level configuration document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CursorConfig {
	#[serde(default)]
	pub cursor: CursorTable,
}

/// Per-mode cursor style overrides.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CursorTable {
	pub normal: Option<CursorStyle>,
	pub insert: Option<CursorStyle>,
	pub visual: Option<CursorStyle>,
	pub command: Option<CursorStyle>,
	pub replace: Option<CursorStyle>,
}

impl CursorTable {
	/// Returns the configured override for `mode`, if any.
	pub fn get(&self, mode: Mode) -> Option<CursorStyle> {
		match mode {
			Mode::Normal => self.normal,
			Mode::Insert => self.insert,
			Mode::Visual => self.visual,
			Mode::Command => self.command,
			Mode::Replace => self.replace,
		}
	}
}

impl CursorConfig {
	/// Parses configuration from TOML text.
	pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
		Ok(toml::from_str(text)?)
	}

	/// Reads and parses a configuration file.
	pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
		let path = path.as_ref();
		let text = std::fs::read_to_string(path).map_err(|error| ConfigError::Io {
			path: path.to_path_buf(),
			error,
		})?;

		let config = Self::from_toml_str(&text)?;
		tracing::debug!(path = %path.display(), "Loaded cursor config");
		Ok(config)
	}

	/// Applies the overrides on top of the stock style table.
	pub fn into_style_map(self) -> ModeStyleMap {
		self.apply_to(ModeStyleMap::default())
	}

	/// Applies the overrides on top of `base`.
	pub fn apply_to(&self, mut base: ModeStyleMap) -> ModeStyleMap {
		for mode in Mode::ALL {
			if let Some(style) = self.cursor.get(mode) {
				base.set(mode, style);
			}
		}
		base
	}
}
