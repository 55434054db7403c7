use std::fmt;

/// A zero-based line index.
pub type LineIdx = usize;

/// A zero-based column, measured in characters from the start of a line.
pub type ColIdx = usize;

/// A cursor coordinate in document space.
///
/// Ordering is by line, then column. A location carries no reference to the
/// document it was computed against, so it may go stale when that document
/// is edited; consumers re-validate it against current bounds before use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Location {
	/// Line index.
	pub line: LineIdx,
	/// Column within the line. May equal the line length (end of line).
	pub column: ColIdx,
}

impl Location {
	/// The first position of any document.
	pub const ORIGIN: Location = Location { line: 0, column: 0 };

	/// Creates a location at `line`, `column`.
	pub const fn new(line: LineIdx, column: ColIdx) -> Self {
		Self { line, column }
	}

	/// Returns the origin location `0:0`.
	pub const fn origin() -> Self {
		Self::ORIGIN
	}

	/// Returns true if this is the origin.
	#[inline]
	pub fn is_origin(&self) -> bool {
		*self == Self::ORIGIN
	}

	/// Returns a location shifted by signed deltas, saturating at zero.
	///
	/// The result is not validated against any document.
	pub fn offset(self, lines: isize, columns: isize) -> Self {
		Self {
			line: self.line.saturating_add_signed(lines),
			column: self.column.saturating_add_signed(columns),
		}
	}
}

impl From<(LineIdx, ColIdx)> for Location {
	fn from((line, column): (LineIdx, ColIdx)) -> Self {
		Self::new(line, column)
	}
}

impl fmt::Display for Location {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}:{}", self.line, self.column)
	}
}
