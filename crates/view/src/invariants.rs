//! Machine-checkable invariant proofs for the view subsystem.
//!
//! Each invariant is expressed as a `pub(crate) fn test_*()` that runs as a
//! test and documents one guarantee [`DocumentView`] makes to its callers.

use std::sync::Arc;

use crate::{CursorStyle, DocumentBounds, DocumentView, Location, Mode, TextDocument, ViewError};

fn view(text: &str) -> DocumentView {
	DocumentView::with_defaults(Arc::new(TextDocument::from(text)))
}

/// Invariant: The style stack MUST hold exactly one mode-derived entry, at the bottom.
#[cfg_attr(test, test)]
pub(crate) fn test_single_mode_derived_entry() {
	let mut view = view("abc");
	view.push_cursor_style(CursorStyle::bar());
	view.set_mode(Mode::Insert);
	view.push_cursor_style(CursorStyle::underline());
	view.set_mode(Mode::Normal);
	let _ = view.pop_cursor_style();
	let _ = view.pop_cursor_style();
	let _ = view.pop_cursor_style();

	assert!(view.style_stack().is_well_formed());
	assert_eq!(view.style_stack().len(), 1);
}

/// Invariant: The cursor MUST lie within document bounds after every move.
#[cfg_attr(test, test)]
pub(crate) fn test_cursor_within_bounds() {
	let mut view = view("hello\n\n0123456789");
	for target in [Location::new(1, 4), Location::new(99, 0), Location::new(0, 99), Location::new(2, 10)] {
		let loc = view.move_to(target);
		let doc = view.document();
		assert!(loc.line < doc.line_count(), "{loc} out of line bounds");
		assert!(loc.column <= doc.line_len(loc.line), "{loc} out of column bounds");
	}
}

/// Invariant: A rejected pop MUST leave the stack unchanged.
#[cfg_attr(test, test)]
pub(crate) fn test_underflow_is_noop() {
	let mut view = view("abc");
	view.set_mode(Mode::Replace);
	let before = view.style_stack().clone();

	assert_eq!(view.pop_cursor_style(), Err(ViewError::StackUnderflow));
	assert_eq!(view.style_stack(), &before);
}

/// Invariant: Rebinding MUST reset the cursor and collapse the stack.
#[cfg_attr(test, test)]
pub(crate) fn test_rebind_resets_view_state() {
	let mut view = view("abc\ndef");
	view.move_to(Location::new(1, 2));
	view.push_cursor_style(CursorStyle::bar());

	view.set_document(Arc::new(TextDocument::from("xyz")));
	assert!(view.cursor().is_origin());
	assert_eq!(view.override_depth(), 0);
	assert!(view.style_stack().is_well_formed());
}
