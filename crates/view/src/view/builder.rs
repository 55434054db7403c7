use std::fmt;
use std::sync::Arc;

use super::DocumentView;
use crate::document::DocumentBounds;
use crate::error::{Result, ViewError};
use crate::styles::ModeStyles;

/// Step-by-step construction of a [`DocumentView`].
///
/// Mode and styles fall back to their `Default` impls. A document is
/// mandatory; [`build`](Self::build) fails with
/// [`ViewError::InvalidDocumentBinding`] without one.
pub struct DocumentViewBuilder<D: ?Sized, M, S> {
	document: Option<Arc<D>>,
	mode: Option<M>,
	styles: Option<S>,
}

impl<D: ?Sized, M, S> DocumentViewBuilder<D, M, S> {
	pub fn new() -> Self {
		Self {
			document: None,
			mode: None,
			styles: None,
		}
	}

	pub fn document(mut self, document: Arc<D>) -> Self {
		self.document = Some(document);
		self
	}

	/// Sets or clears the document, for callers whose binding may be absent.
	pub fn maybe_document(mut self, document: Option<Arc<D>>) -> Self {
		self.document = document;
		self
	}

	pub fn mode(mut self, mode: M) -> Self {
		self.mode = Some(mode);
		self
	}

	pub fn styles(mut self, styles: S) -> Self {
		self.styles = Some(styles);
		self
	}
}

impl<D, M, S> DocumentViewBuilder<D, M, S>
where
	D: DocumentBounds + ?Sized,
	M: Clone + PartialEq + fmt::Debug + Default,
	S: ModeStyles<M> + Default,
{
	pub fn build(self) -> Result<DocumentView<D, M, S>> {
		let Some(document) = self.document else {
			tracing::error!("Attempted to build a document view without a document");
			return Err(ViewError::InvalidDocumentBinding);
		};

		Ok(DocumentView::new(
			document,
			self.mode.unwrap_or_default(),
			self.styles.unwrap_or_default(),
		))
	}
}

impl<D: ?Sized, M, S> Default for DocumentViewBuilder<D, M, S> {
	fn default() -> Self {
		Self::new()
	}
}
