//! Document view: cursor, mode, and cursor style bound to one document.
//!
//! A [`DocumentView`] is the state an input dispatcher drives and a renderer
//! reads each frame. It keeps three things consistent with the bound document:
//!
//! - the cursor, which is clamped into the document's current bounds on every
//!   move and reset to the origin on rebind;
//! - the mode, whose cursor style is recomputed on every change and written to
//!   the bottom of the style stack;
//! - the style stack, whose explicit overrides stay on top of the mode-derived
//!   style until they are popped.
//!
//! Every operation is synchronous and bounded; nothing here blocks or does I/O.

mod builder;
mod guard;

use std::fmt;
use std::sync::Arc;

pub use builder::DocumentViewBuilder;
pub use guard::StyleGuard;
use quire_primitives::{CursorStyle, Location, Mode};

use crate::document::{DocumentBounds, TextDocument};
use crate::error::{Result, ViewError};
use crate::stack::{OverrideId, StyleStack};
use crate::styles::{ModeStyleMap, ModeStyles};

#[cfg(test)]
mod tests;

/// A cursor, mode, and style stack bound to a shared document.
pub struct DocumentView<D: ?Sized = TextDocument, M = Mode, S = ModeStyleMap> {
	/// The bound document, shared with whoever edits it.
	document: Arc<D>,
	/// Last committed cursor; valid against the document at commit time.
	cursor: Location,
	mode: M,
	/// Mode to style mapping supplied at construction.
	styles: S,
	stack: StyleStack,
	/// Number of rejected pops since construction.
	underflows: u64,
}

impl<D: DocumentBounds + ?Sized> DocumentView<D, Mode, ModeStyleMap> {
	/// Creates a view in [`Mode::Normal`] using the stock style table.
	pub fn with_defaults(document: Arc<D>) -> Self {
		Self::new(document, Mode::default(), ModeStyleMap::default())
	}
}

impl<D, M, S> DocumentView<D, M, S>
where
	D: DocumentBounds + ?Sized,
	M: Clone + PartialEq + fmt::Debug,
	S: ModeStyles<M>,
{
	/// Creates a view bound to `document` with the cursor at the origin.
	pub fn new(document: Arc<D>, mode: M, styles: S) -> Self {
		let base = styles.style_for(&mode);
		Self {
			document,
			cursor: Location::ORIGIN,
			mode,
			styles,
			stack: StyleStack::new(base),
			underflows: 0,
		}
	}

	/// Starts a builder; see [`DocumentViewBuilder`].
	pub fn builder() -> DocumentViewBuilder<D, M, S> {
		DocumentViewBuilder::new()
	}

	/// Returns the current cursor location.
	///
	/// If the document was edited since the last move this may be stale; call
	/// [`revalidate`](Self::revalidate) to re-clamp it.
	#[inline]
	pub fn cursor(&self) -> Location {
		self.cursor
	}

	/// Returns the bound document.
	pub fn document(&self) -> &Arc<D> {
		&self.document
	}

	/// Binds a new document and returns the previous one.
	///
	/// Resets the cursor to the origin and collapses the style stack to a
	/// single mode-derived entry for the current mode. The mode is kept.
	pub fn set_document(&mut self, document: Arc<D>) -> Arc<D> {
		let previous = std::mem::replace(&mut self.document, document);
		let dropped = self.stack.override_depth();

		self.cursor = Location::ORIGIN;
		self.stack.reset(self.styles.style_for(&self.mode));
		debug_assert!(self.stack.is_well_formed());

		tracing::trace!(mode = ?self.mode, dropped_overrides = dropped, "Rebound document");
		previous
	}

	#[inline]
	pub fn mode(&self) -> &M {
		&self.mode
	}

	/// Switches mode and updates the mode-derived cursor style.
	///
	/// Explicit overrides stay on top, so [`current_style`](Self::current_style)
	/// only changes here when none are active.
	pub fn set_mode(&mut self, mode: M) {
		let style = self.styles.style_for(&mode);
		tracing::debug!(from = ?self.mode, to = ?mode, ?style, overrides = self.stack.override_depth(), "Mode changed");

		self.mode = mode;
		self.stack.set_base(style);
		debug_assert!(self.stack.is_well_formed());
	}

	/// Returns the mode to style mapping.
	pub fn styles(&self) -> &S {
		&self.styles
	}

	/// Moves the cursor to `target`, clamped into the document's current bounds.
	///
	/// Never fails. Returns the committed location.
	pub fn move_to(&mut self, target: Location) -> Location {
		let clamped = DocumentBounds::clamp(&*self.document, target);
		if clamped != target {
			tracing::trace!(%target, %clamped, "Clamped cursor target");
		}

		self.cursor = clamped;
		clamped
	}

	/// Re-clamps the current cursor against the document's current bounds.
	pub fn revalidate(&mut self) -> Location {
		self.move_to(self.cursor)
	}

	/// Returns the style the renderer should draw: the top of the stack.
	#[inline]
	pub fn current_style(&self) -> CursorStyle {
		self.stack.current()
	}

	/// Pushes an explicit cursor style override.
	///
	/// Prefer [`push_scoped`](Self::push_scoped), which cannot leak the entry.
	pub fn push_cursor_style(&mut self, style: CursorStyle) {
		self.stack.push(style);
	}

	/// Pushes an explicit override that is popped when the guard drops.
	///
	/// The guard dereferences to the view so the scope can keep driving it.
	/// On drop every override pushed since, this one included, is discarded,
	/// even if the scope popped or rebound below it in the meantime.
	pub fn push_scoped(&mut self, style: CursorStyle) -> StyleGuard<'_, D, M, S> {
		let id = self.stack.push(style);
		StyleGuard::new(self, id)
	}

	/// Pops the top explicit override and returns it.
	///
	/// When no override is active the stack is left unchanged, the underflow
	/// is logged and counted, and [`ViewError::StackUnderflow`] is returned.
	pub fn pop_cursor_style(&mut self) -> Result<CursorStyle> {
		match self.stack.pop() {
			Some(style) => Ok(style),
			None => {
				self.underflows += 1;
				tracing::warn!(mode = ?self.mode, underflows = self.underflows, "Cursor style pop without matching push");
				Err(ViewError::StackUnderflow)
			}
		}
	}

	/// Read-only view of the style stack.
	pub fn style_stack(&self) -> &StyleStack {
		&self.stack
	}

	/// Number of explicit overrides currently active.
	#[inline]
	pub fn override_depth(&self) -> usize {
		self.stack.override_depth()
	}

	/// Number of rejected pops since construction.
	pub fn underflow_count(&self) -> u64 {
		self.underflows
	}
}

impl<D: ?Sized, M, S> DocumentView<D, M, S> {
	/// Discards the guarded override and everything above it when a [`StyleGuard`] drops.
	fn release_override(&mut self, id: OverrideId) {
		let dropped = self.stack.truncate_from(id);
		if dropped > 1 {
			tracing::debug!(dropped, ?id, "Discarded cursor styles left above scoped override");
		}
	}
}

impl<D, M, S> fmt::Debug for DocumentView<D, M, S>
where
	D: ?Sized,
	M: fmt::Debug,
{
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("DocumentView")
			.field("cursor", &self.cursor)
			.field("mode", &self.mode)
			.field("stack", &self.stack)
			.field("underflows", &self.underflows)
			.finish_non_exhaustive()
	}
}
