use std::ops::{Deref, DerefMut};

use super::DocumentView;
use crate::stack::OverrideId;

/// Scoped cursor style override returned by [`DocumentView::push_scoped`].
///
/// Dropping the guard discards its override and every override pushed after
/// it, on every exit path including `?` and unwinding. Guards nest through
/// [`DerefMut`], so the borrow checker enforces LIFO release.
#[must_use = "dropping the guard immediately pops the style it pushed"]
pub struct StyleGuard<'a, D: ?Sized, M, S> {
	view: &'a mut DocumentView<D, M, S>,
	/// The guarded push; it and everything pushed later go on drop.
	id: OverrideId,
}

impl<'a, D: ?Sized, M, S> StyleGuard<'a, D, M, S> {
	pub(super) fn new(view: &'a mut DocumentView<D, M, S>, id: OverrideId) -> Self {
		Self { view, id }
	}

	/// Id of the override this guard pushed.
	pub fn id(&self) -> OverrideId {
		self.id
	}
}

impl<D: ?Sized, M, S> Deref for StyleGuard<'_, D, M, S> {
	type Target = DocumentView<D, M, S>;

	fn deref(&self) -> &Self::Target {
		self.view
	}
}

impl<D: ?Sized, M, S> DerefMut for StyleGuard<'_, D, M, S> {
	fn deref_mut(&mut self) -> &mut Self::Target {
		self.view
	}
}

impl<D: ?Sized, M, S> Drop for StyleGuard<'_, D, M, S> {
	fn drop(&mut self) {
		self.view.release_override(self.id);
	}
}
