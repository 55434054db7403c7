use std::cell::Cell;
use std::panic::{AssertUnwindSafe, catch_unwind};

use super::*;
use crate::StyleEntry;

fn doc(text: &str) -> Arc<TextDocument> {
	TextDocument::from(text).shared()
}

fn view(text: &str) -> DocumentView {
	DocumentView::with_defaults(doc(text))
}

#[test]
fn new_view_starts_at_origin_with_mode_style() {
	let view = view("hello\nworld");
	assert_eq!(view.cursor(), Location::ORIGIN);
	assert_eq!(*view.mode(), Mode::Normal);
	assert_eq!(view.current_style(), CursorStyle::block());
	assert_eq!(view.style_stack().entries(), &[StyleEntry::mode_derived(CursorStyle::block())]);
}

#[test]
fn move_to_commits_valid_target() {
	let mut view = view("hello\nworld");
	assert_eq!(view.move_to(Location::new(1, 3)), Location::new(1, 3));
	assert_eq!(view.cursor(), Location::new(1, 3));
}

#[test]
fn move_to_allows_end_of_line() {
	let mut view = view("hello\nworld");
	assert_eq!(view.move_to(Location::new(0, 5)), Location::new(0, 5));
}

#[test]
fn move_to_clamps_into_empty_line() {
	let mut view = view("hello\n\n0123456789");
	assert_eq!(view.move_to(Location::new(1, 4)), Location::new(1, 0));
}

#[test]
fn move_to_clamps_past_last_line() {
	let mut view = view("hello\n\n0123456789");
	assert_eq!(view.move_to(Location::new(40, 40)), Location::new(2, 10));
}

#[test]
fn stale_cursor_is_reclamped_after_external_edit() {
	let document = doc("first line\nsecond line\nthird");
	let mut view = DocumentView::with_defaults(document.clone());
	view.move_to(Location::new(2, 5));

	document.replace("short");
	assert_eq!(view.cursor(), Location::new(2, 5), "cursor is cached until revalidated");

	assert_eq!(view.revalidate(), Location::new(0, 5));
	document.replace("");
	assert_eq!(view.revalidate(), Location::ORIGIN);
}

#[test]
fn set_mode_updates_style_without_overrides() {
	let mut view = view("text");
	view.set_mode(Mode::Insert);
	assert_eq!(view.current_style(), CursorStyle::bar());
	view.set_mode(Mode::Replace);
	assert_eq!(view.current_style(), CursorStyle::underline());
}

#[test]
fn set_mode_beneath_override_surfaces_after_pop() {
	let mut view = view("text");
	let search = CursorStyle::underline().blinking();

	view.push_cursor_style(search);
	view.set_mode(Mode::Insert);
	assert_eq!(view.current_style(), search);

	view.set_mode(Mode::Command);
	view.set_mode(Mode::Replace);
	assert_eq!(view.current_style(), search);

	assert_eq!(view.pop_cursor_style(), Ok(search));
	assert_eq!(view.current_style(), CursorStyle::underline());
	assert_eq!(*view.mode(), Mode::Replace);
}

#[test]
fn mapping_called_once_per_mode_change() {
	let calls = Cell::new(0);
	let stock = ModeStyleMap::default();
	let styles = |mode: &Mode| {
		calls.set(calls.get() + 1);
		stock.get(*mode)
	};

	let mut view = DocumentView::new(doc("x"), Mode::Normal, styles);
	assert_eq!(calls.get(), 1);

	view.push_cursor_style(CursorStyle::bar());
	view.set_mode(Mode::Insert);
	assert_eq!(calls.get(), 2);
	view.set_mode(Mode::Visual);
	assert_eq!(calls.get(), 3);

	view.move_to(Location::new(0, 1));
	view.pop_cursor_style().unwrap();
	assert_eq!(calls.get(), 3);
}

#[test]
fn pop_on_fresh_view_underflows() {
	let mut view = view("text");
	view.set_mode(Mode::Insert);

	assert_eq!(view.pop_cursor_style(), Err(ViewError::StackUnderflow));
	assert_eq!(view.current_style(), CursorStyle::bar());
	assert_eq!(view.style_stack().len(), 1);
	assert_eq!(view.underflow_count(), 1);
}

#[test]
fn push_pop_restores_previous_style() {
	let mut view = view("text");
	view.push_cursor_style(CursorStyle::underline());
	let before = view.current_style();

	view.push_cursor_style(CursorStyle::bar().blinking());
	assert_eq!(view.current_style(), CursorStyle::bar().blinking());
	view.pop_cursor_style().unwrap();
	assert_eq!(view.current_style(), before);
}

#[test]
fn rebind_resets_cursor_and_stack_but_keeps_mode() {
	let mut view = view("0123456789\n0\n0\n0\n0\n0123456789");
	view.set_mode(Mode::Visual);
	view.move_to(Location::new(5, 3));
	view.push_cursor_style(CursorStyle::bar());
	view.push_cursor_style(CursorStyle::underline());

	let next = doc("other");
	let previous = view.set_document(next.clone());

	assert_eq!(previous.line_count(), 6);
	assert!(Arc::ptr_eq(view.document(), &next));
	assert_eq!(view.cursor(), Location::ORIGIN);
	assert_eq!(*view.mode(), Mode::Visual);
	assert_eq!(view.style_stack().entries(), &[StyleEntry::mode_derived(CursorStyle::block())]);
}

#[test]
fn scoped_override_pops_on_drop() {
	let mut view = view("text");
	{
		let guard = view.push_scoped(CursorStyle::underline());
		assert_eq!(guard.current_style(), CursorStyle::underline());
		assert_eq!(guard.override_depth(), 1);
	}
	assert_eq!(view.current_style(), CursorStyle::block());
	assert_eq!(view.override_depth(), 0);
}

#[test]
fn scoped_override_survives_mode_change_inside_scope() {
	let mut view = view("text");
	{
		let mut search = view.push_scoped(CursorStyle::underline());
		search.set_mode(Mode::Insert);
		assert_eq!(search.current_style(), CursorStyle::underline());
	}
	assert_eq!(view.current_style(), CursorStyle::bar());
}

#[test]
fn nested_guards_release_in_order() {
	let mut view = view("text");
	view.push_cursor_style(CursorStyle::bar());

	let mut outer = view.push_scoped(CursorStyle::underline());
	{
		let inner = outer.push_scoped(CursorStyle::block().blinking());
		assert_eq!(inner.override_depth(), 3);
	}
	assert_eq!(outer.current_style(), CursorStyle::underline());
	drop(outer);

	assert_eq!(view.current_style(), CursorStyle::bar());
	assert_eq!(view.override_depth(), 1);
}

#[test]
fn guard_discards_leaked_pushes() {
	let mut view = view("text");
	{
		let mut guard = view.push_scoped(CursorStyle::underline());
		guard.push_cursor_style(CursorStyle::bar());
		guard.push_cursor_style(CursorStyle::bar().blinking());
	}
	assert_eq!(view.override_depth(), 0);
	assert_eq!(view.current_style(), CursorStyle::block());
}

#[test]
fn guard_releases_on_early_return() {
	fn search(view: &mut DocumentView, fail: bool) -> Result<Location> {
		let mut overlay = view.push_scoped(CursorStyle::underline());
		if fail {
			return Err(ViewError::StackUnderflow);
		}
		Ok(overlay.move_to(Location::new(0, 2)))
	}

	let mut view = view("text");
	assert!(search(&mut view, true).is_err());
	assert_eq!(view.override_depth(), 0);

	assert_eq!(search(&mut view, false), Ok(Location::new(0, 2)));
	assert_eq!(view.override_depth(), 0);
}

#[test]
fn guard_releases_on_panic() {
	let mut view = view("text");
	let result = catch_unwind(AssertUnwindSafe(|| {
		let _overlay = view.push_scoped(CursorStyle::underline());
		panic!("overlay failed");
	}));

	assert!(result.is_err());
	assert_eq!(view.override_depth(), 0);
	assert_eq!(view.current_style(), CursorStyle::block());
}

#[test]
fn guard_after_manual_pop_does_not_touch_outer_entries() {
	let mut view = view("text");
	view.push_cursor_style(CursorStyle::bar());
	{
		let mut guard = view.push_scoped(CursorStyle::underline());
		assert_eq!(guard.pop_cursor_style(), Ok(CursorStyle::underline()));
	}
	assert_eq!(view.current_style(), CursorStyle::bar());
	assert_eq!(view.override_depth(), 1);
}

#[test]
fn guard_discards_pushes_after_rebind_in_scope() {
	let mut view = view("text");
	view.push_cursor_style(CursorStyle::bar());
	{
		let mut guard = view.push_scoped(CursorStyle::underline());
		guard.set_document(doc("other"));
		guard.push_cursor_style(CursorStyle::block().blinking());
	}
	assert_eq!(view.override_depth(), 0);
	assert_eq!(view.current_style(), CursorStyle::block());
	assert!(view.style_stack().is_well_formed());
}

#[test]
fn guard_discards_pushes_after_popping_below_own_entry() {
	let mut view = view("text");
	view.push_cursor_style(CursorStyle::bar());
	{
		let mut guard = view.push_scoped(CursorStyle::underline());
		assert_eq!(guard.pop_cursor_style(), Ok(CursorStyle::underline()));
		assert_eq!(guard.pop_cursor_style(), Ok(CursorStyle::bar()));
		guard.push_cursor_style(CursorStyle::block().blinking());
	}
	assert_eq!(view.override_depth(), 0);
	assert_eq!(view.current_style(), CursorStyle::block());
}

#[test]
fn guard_ids_increase_across_scopes() {
	let mut view = view("text");
	let first = view.push_scoped(CursorStyle::bar()).id();
	let second = view.push_scoped(CursorStyle::bar()).id();
	assert!(second > first);
	assert_eq!(view.override_depth(), 0);
}

/// Bounds that pin every clamp to a fixed location.
struct Pinned;

impl DocumentBounds for Pinned {
	fn line_count(&self) -> usize {
		10
	}

	fn line_len(&self, _line: quire_primitives::LineIdx) -> usize {
		10
	}

	fn clamp(&self, _target: Location) -> Location {
		Location::new(0, 1)
	}
}

#[test]
fn move_to_delegates_clamping_to_document() {
	let mut view = DocumentView::with_defaults(Arc::new(Pinned));
	assert_eq!(view.move_to(Location::new(4, 4)), Location::new(0, 1));
	assert_eq!(view.cursor(), Location::new(0, 1));
}

#[test]
fn builder_without_document_is_invalid_binding() {
	let result = DocumentView::<TextDocument>::builder().mode(Mode::Insert).build();
	assert_eq!(result.unwrap_err(), ViewError::InvalidDocumentBinding);

	let result = DocumentView::<TextDocument>::builder().maybe_document(None).build();
	assert_eq!(result.unwrap_err(), ViewError::InvalidDocumentBinding);
}

#[test]
fn builder_applies_mode_and_styles() {
	let styles = ModeStyleMap::default().with(Mode::Insert, CursorStyle::underline());
	let view = DocumentView::builder()
		.document(doc("abc"))
		.mode(Mode::Insert)
		.styles(styles)
		.build()
		.unwrap();

	assert_eq!(*view.mode(), Mode::Insert);
	assert_eq!(view.current_style(), CursorStyle::underline());
	assert_eq!(view.styles(), &styles);
}

#[test]
fn views_over_trait_objects() {
	let shared: Arc<dyn DocumentBounds> = Arc::new(ropey::Rope::from_str("ab\ncdef"));
	let mut view = DocumentView::with_defaults(shared);
	assert_eq!(view.move_to(Location::new(1, 9)), Location::new(1, 4));
}
