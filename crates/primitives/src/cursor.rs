//! Cursor rendering descriptors.

use serde::{Deserialize, Serialize};

/// Glyph used to draw the cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CursorShape {
	#[default]
	Block,
	Underline,
	Bar,
}

impl CursorShape {
	/// Returns a simple string identifier for the shape.
	pub fn name(&self) -> &'static str {
		match self {
			CursorShape::Block => "block",
			CursorShape::Underline => "underline",
			CursorShape::Bar => "bar",
		}
	}
}

/// How the cursor should be drawn: a shape and whether it blinks.
///
/// Opaque to the view core beyond equality; frontends map it to whatever
/// their terminal or toolkit understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CursorStyle {
	pub shape: CursorShape,
	#[serde(default)]
	pub blink: bool,
}

impl CursorStyle {
	pub const BLOCK: CursorStyle = CursorStyle::new(CursorShape::Block, false);
	pub const UNDERLINE: CursorStyle = CursorStyle::new(CursorShape::Underline, false);
	pub const BAR: CursorStyle = CursorStyle::new(CursorShape::Bar, false);

	pub const fn new(shape: CursorShape, blink: bool) -> Self {
		Self { shape, blink }
	}

	/// Steady block cursor.
	pub const fn block() -> Self {
		Self::BLOCK
	}

	/// Steady underline cursor.
	pub const fn underline() -> Self {
		Self::UNDERLINE
	}

	/// Steady bar (beam) cursor.
	pub const fn bar() -> Self {
		Self::BAR
	}

	/// Returns the same shape with blinking enabled.
	pub const fn blinking(self) -> Self {
		Self { blink: true, ..self }
	}
}

impl From<CursorShape> for CursorStyle {
	fn from(shape: CursorShape) -> Self {
		Self::new(shape, false)
	}
}
