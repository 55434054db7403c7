//! Tagged cursor style stack.
//!
//! The bottom entry is always the single [`StyleOrigin::ModeDerived`] entry;
//! every entry above it is [`StyleOrigin::Explicit`]. Mode changes rewrite the
//! bottom entry in place and never touch the overrides, so a feature that
//! pushed a style keeps it visible until it pops.

use quire_primitives::CursorStyle;
use smallvec::{SmallVec, smallvec};


/// Where a stack entry came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StyleOrigin {
	/// Computed from the active mode. Exactly one per stack, at the bottom.
	ModeDerived,
	/// Pushed by a caller as a temporary override.
	Explicit,
}

/// One entry of a [`StyleStack`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StyleEntry {
	pub style: CursorStyle,
	pub origin: StyleOrigin,
}

impl StyleEntry {
	pub fn mode_derived(style: CursorStyle) -> Self {
		Self {
			style,
			origin: StyleOrigin::ModeDerived,
		}
	}

	pub fn explicit(style: CursorStyle) -> Self {
		Self {
			style,
			origin: StyleOrigin::Explicit,
		}
	}
}

/// Identifies one explicit push for the lifetime of a [`StyleStack`].
///
/// Ids increase with every push, so entries above any given entry always
/// carry larger ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct OverrideId(u64);

/// A never-empty LIFO of cursor styles.
///
/// Equality compares entries only, not push ids.
#[derive(Debug, Clone)]
pub struct StyleStack {
	/// Bottom to top. `entries[0]` is the mode-derived entry.
	entries: SmallVec<[StyleEntry; 4]>,
	/// Push id of each entry, parallel to `entries`. The base slot is unused.
	ids: SmallVec<[OverrideId; 4]>,
	next_id: u64,
}

impl StyleStack {
	/// Creates a stack holding only the mode-derived `base` style.
	pub fn new(base: CursorStyle) -> Self {
		Self {
			entries: smallvec![StyleEntry::mode_derived(base)],
			ids: smallvec![OverrideId(0)],
			next_id: 1,
		}
	}

	/// Returns the style on top of the stack.
	#[inline]
	pub fn current(&self) -> CursorStyle {
		self.top().style
	}

	/// Returns the top entry.
	pub fn top(&self) -> StyleEntry {
		self.entries[self.entries.len() - 1]
	}

	/// Replaces the mode-derived entry in place.
	pub fn set_base(&mut self, style: CursorStyle) {
		self.entries[0] = StyleEntry::mode_derived(style);
	}

	/// Pushes an explicit override and returns its id.
	pub fn push(&mut self, style: CursorStyle) -> OverrideId {
		let id = OverrideId(self.next_id);
		self.next_id += 1;
		self.entries.push(StyleEntry::explicit(style));
		self.ids.push(id);
		id
	}

	/// Pops the top explicit override.
	///
	/// Returns `None` without touching the stack when only the mode-derived
	/// entry remains.
	pub fn pop(&mut self) -> Option<CursorStyle> {
		if self.entries.len() == 1 {
			return None;
		}
		self.ids.pop();
		self.entries.pop().map(|entry| entry.style)
	}

	/// Drops the override pushed as `id` and every override pushed after it.
	///
	/// Overrides pushed before `id` stay, whether or not `id` is still on the
	/// stack. Returns how many entries were dropped.
	pub fn truncate_from(&mut self, id: OverrideId) -> usize {
		let keep = self.ids[1..].iter().position(|&other| other >= id).map_or(self.ids.len(), |pos| pos + 1);
		let dropped = self.entries.len() - keep;
		self.entries.truncate(keep);
		self.ids.truncate(keep);
		dropped
	}

	/// Collapses the stack to a single mode-derived entry.
	pub fn reset(&mut self, base: CursorStyle) {
		self.entries.truncate(1);
		self.ids.truncate(1);
		self.set_base(base);
	}

	/// Number of entries, including the mode-derived one. Never zero.
	#[inline]
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	/// Always false; present for API symmetry with `len`.
	#[inline]
	pub fn is_empty(&self) -> bool {
		false
	}

	/// Number of explicit overrides above the mode-derived entry.
	#[inline]
	pub fn override_depth(&self) -> usize {
		self.entries.len() - 1
	}

	/// Entries from bottom to top.
	pub fn entries(&self) -> &[StyleEntry] {
		&self.entries
	}

	/// Returns true if the origin tagging invariant holds.
	pub(crate) fn is_well_formed(&self) -> bool {
		if self.ids.len() != self.entries.len() {
			return false;
		}
		match self.entries.split_first() {
			Some((base, rest)) => {
				base.origin == StyleOrigin::ModeDerived && rest.iter().all(|e| e.origin == StyleOrigin::Explicit)
			}
			None => false,
		}
	}
}

impl PartialEq for StyleStack {
	fn eq(&self, other: &Self) -> bool {
		self.entries == other.entries
	}
}

impl Eq for StyleStack {}
