//! Editor mode state.

use serde::{Deserialize, Serialize};

/// Default set of editing modes.
///
/// The view core is generic over its mode type; this enum is the set used by
/// the stock cursor style table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Mode {
	#[default]
	Normal,
	Insert,
	/// Character, line or block selection.
	Visual,
	/// Command-line entry (`:`).
	Command,
	Replace,
}

impl Mode {
	/// Every mode, in declaration order.
	pub const ALL: [Mode; 5] = [Mode::Normal, Mode::Insert, Mode::Visual, Mode::Command, Mode::Replace];

	/// Returns a simple string identifier for the mode.
	pub fn name(&self) -> &'static str {
		match self {
			Mode::Normal => "normal",
			Mode::Insert => "insert",
			Mode::Visual => "visual",
			Mode::Command => "command",
			Mode::Replace => "replace",
		}
	}
}
