//! Mode to cursor style mapping.

use quire_primitives::{CursorStyle, Mode};

/// Supplies the cursor style associated with a mode.
///
/// The view calls [`style_for`](ModeStyles::style_for) exactly once per mode
/// change and once per rebind, and caches the result as the mode-derived
/// entry of its style stack.
pub trait ModeStyles<M> {
	fn style_for(&self, mode: &M) -> CursorStyle;
}

impl<M, F> ModeStyles<M> for F
where
	F: Fn(&M) -> CursorStyle,
{
	fn style_for(&self, mode: &M) -> CursorStyle {
		self(mode)
	}
}

/// Per-mode cursor styles for the stock [`Mode`] set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModeStyleMap {
	styles: [CursorStyle; Mode::ALL.len()],
}

impl ModeStyleMap {
	/// Returns the style configured for `mode`.
	pub fn get(&self, mode: Mode) -> CursorStyle {
		self.styles[index(mode)]
	}

	pub fn set(&mut self, mode: Mode, style: CursorStyle) {
		self.styles[index(mode)] = style;
	}

	/// Builder form of [`set`](Self::set).
	pub fn with(mut self, mode: Mode, style: CursorStyle) -> Self {
		self.set(mode, style);
		self
	}

	/// Iterates every mode with its style.
	pub fn iter(&self) -> impl Iterator<Item = (Mode, CursorStyle)> + '_ {
		Mode::ALL.iter().map(|&mode| (mode, self.get(mode)))
	}
}

impl Default for ModeStyleMap {
	fn default() -> Self {
		let mut map = Self {
			styles: [CursorStyle::BLOCK; Mode::ALL.len()],
		};
		map.set(Mode::Insert, CursorStyle::BAR);
		map.set(Mode::Command, CursorStyle::BAR);
		map.set(Mode::Replace, CursorStyle::UNDERLINE);
		map
	}
}

impl ModeStyles<Mode> for ModeStyleMap {
	fn style_for(&self, mode: &Mode) -> CursorStyle {
		self.get(*mode)
	}
}

fn index(mode: Mode) -> usize {
	match mode {
		Mode::Normal => 0,
		Mode::Insert => 1,
		Mode::Visual => 2,
		Mode::Command => 3,
		Mode::Replace => 4,
	}
}
