//! Document bounds contract and the rope-backed text document.
//!
//! The view layer never edits text. It only asks a document how many lines it
//! has and how long each line is, through [`DocumentBounds`]. Anything that can
//! answer those two questions can be bound to a [`DocumentView`].
//!
//! [`TextDocument`] is the stock implementation: a [`Rope`] behind a lock so
//! that one handle can be shared between the view and whoever performs edits.
//!
//! [`DocumentView`]: crate::DocumentView

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use parking_lot::RwLock;
use quire_primitives::{LineIdx, Location};
use ropey::{Rope, RopeSlice};

use crate::error::DocumentError;


/// Read-only bounds queries consumed by the view.
pub trait DocumentBounds {
	/// Number of lines in the document.
	fn line_count(&self) -> usize;

	/// Length of `line` in characters, excluding any line terminator.
	///
	/// Only meaningful for `line < line_count()`.
	fn line_len(&self, line: LineIdx) -> usize;

	/// Clamps `target` into the current bounds; see [`clamp_location`].
	///
	/// Documents edited from elsewhere should override this to answer both
	/// bounds queries from one snapshot.
	fn clamp(&self, target: Location) -> Location {
		clamp_location(self, target)
	}
}

impl<T: DocumentBounds + ?Sized> DocumentBounds for Arc<T> {
	fn line_count(&self) -> usize {
		(**self).line_count()
	}

	fn line_len(&self, line: LineIdx) -> usize {
		(**self).line_len(line)
	}

	fn clamp(&self, target: Location) -> Location {
		(**self).clamp(target)
	}
}

impl<T: DocumentBounds + ?Sized> DocumentBounds for &T {
	fn line_count(&self) -> usize {
		(**self).line_count()
	}

	fn line_len(&self, line: LineIdx) -> usize {
		(**self).line_len(line)
	}

	fn clamp(&self, target: Location) -> Location {
		(**self).clamp(target)
	}
}

/// Clamps `target` into the current bounds of `doc`.
///
/// The line is clamped first, then the column against the clamped line's
/// length. A document with no lines clamps everything to the origin.
pub fn clamp_location<D: DocumentBounds + ?Sized>(doc: &D, target: Location) -> Location {
	let line_count = doc.line_count();
	if line_count == 0 {
		return Location::ORIGIN;
	}

	let line = target.line.min(line_count - 1);
	let column = target.column.min(doc.line_len(line));
	Location::new(line, column)
}

/// Counter for generating unique document IDs.
static NEXT_DOCUMENT_ID: AtomicU64 = AtomicU64::new(1);

/// Unique identifier for a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DocumentId(pub u64);

impl DocumentId {
	/// Generates a new unique document ID.
	pub fn next() -> Self {
		Self(NEXT_DOCUMENT_ID.fetch_add(1, Ordering::Relaxed))
	}
}

/// A shared, lockable text document.
///
/// Every method takes `&self`, so a single `Arc<TextDocument>` can be bound
/// to a view while the owning buffer keeps editing it. Locks are held only
/// for the duration of each call.
pub struct TextDocument {
	/// Unique identifier for this document.
	id: DocumentId,

	/// The text content.
	content: RwLock<Rope>,

	/// Associated file path (None for scratch documents).
	path: RwLock<Option<PathBuf>>,

	/// Bumped on every edit.
	version: AtomicU64,
}

impl TextDocument {
	/// Creates an empty scratch document.
	pub fn new() -> Self {
		Self::from_rope(Rope::new())
	}

	/// Reads a document from disk and associates it with `path`.
	pub fn from_path(path: impl AsRef<Path>) -> Result<Self, DocumentError> {
		let path = path.as_ref();
		let contents = std::fs::read_to_string(path).map_err(|error| DocumentError::Io {
			path: path.to_path_buf(),
			error,
		})?;

		let doc = Self::from(contents);
		*doc.path.write() = Some(path.to_path_buf());
		tracing::trace!(id = doc.id.0, path = %path.display(), lines = doc.line_count(), "Loaded document");
		Ok(doc)
	}

	fn from_rope(content: Rope) -> Self {
		Self {
			id: DocumentId::next(),
			content: RwLock::new(content),
			path: RwLock::new(None),
			version: AtomicU64::new(0),
		}
	}

	/// Wraps the document in a shared handle ready to bind to a view.
	pub fn shared(self) -> Arc<Self> {
		Arc::new(self)
	}

	pub fn id(&self) -> DocumentId {
		self.id
	}

	pub fn path(&self) -> Option<PathBuf> {
		self.path.read().clone()
	}

	pub fn set_path(&self, path: Option<PathBuf>) {
		*self.path.write() = path;
	}

	/// Monotonic edit counter; starts at zero.
	pub fn version(&self) -> u64 {
		self.version.load(Ordering::Acquire)
	}

	/// Returns true if the document holds no characters.
	pub fn is_empty(&self) -> bool {
		self.content.read().len_chars() == 0
	}

	/// Returns true if the document is non-empty and does not end in a newline.
	pub fn is_missing_trailing_newline(&self) -> bool {
		let content = self.content.read();
		let len = content.len_chars();
		len > 0 && content.char(len - 1) != '\n'
	}

	/// Returns the full text.
	pub fn contents(&self) -> String {
		self.content.read().to_string()
	}

	/// Returns the text of `line` without its terminator, if it exists.
	pub fn line(&self, line: LineIdx) -> Option<String> {
		let content = self.content.read();
		let slice = content.get_line(line)?;
		let text_len = text_len(slice);
		Some(slice.slice(..text_len).to_string())
	}

	/// Executes a closure with read access to the content.
	///
	/// The lock guard cannot escape the closure.
	pub fn with_content<R>(&self, f: impl FnOnce(&Rope) -> R) -> R {
		let guard = self.content.read();
		f(&guard)
	}

	/// Executes a closure with write access to the content and bumps the version.
	///
	/// Views bound to this document are not notified; their cursors stay
	/// where they were until the next move re-clamps them.
	pub fn edit<R>(&self, f: impl FnOnce(&mut Rope) -> R) -> R {
		let mut guard = self.content.write();
		let result = f(&mut guard);
		let version = self.version.fetch_add(1, Ordering::AcqRel) + 1;
		tracing::trace!(id = self.id.0, version, lines = guard.len_lines(), "Document edited");
		result
	}

	/// Replaces the whole content.
	pub fn replace(&self, contents: &str) {
		self.edit(|rope| *rope = Rope::from_str(contents));
	}
}

impl Default for TextDocument {
	fn default() -> Self {
		Self::new()
	}
}

impl From<Rope> for TextDocument {
	fn from(content: Rope) -> Self {
		Self::from_rope(content)
	}
}

impl From<&str> for TextDocument {
	fn from(contents: &str) -> Self {
		Self::from_rope(Rope::from_str(contents))
	}
}

impl From<String> for TextDocument {
	fn from(contents: String) -> Self {
		Self::from(contents.as_str())
	}
}

impl std::fmt::Debug for TextDocument {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("TextDocument")
			.field("id", &self.id)
			.field("path", &*self.path.read())
			.field("version", &self.version())
			.field("len_chars", &self.content.read().len_chars())
			.finish()
	}
}

impl DocumentBounds for TextDocument {
	/// Number of lines, including the empty line after a trailing newline.
	fn line_count(&self) -> usize {
		self.content.read().len_lines()
	}

	fn line_len(&self, line: LineIdx) -> usize {
		self.content.read().get_line(line).map_or(0, text_len)
	}

	/// Clamps against a single snapshot, so a concurrent edit cannot land
	/// between the line and column checks.
	fn clamp(&self, target: Location) -> Location {
		clamp_location(&*self.content.read(), target)
	}
}

impl DocumentBounds for Rope {
	fn line_count(&self) -> usize {
		self.len_lines()
	}

	fn line_len(&self, line: LineIdx) -> usize {
		self.get_line(line).map_or(0, text_len)
	}
}

/// Length of a line slice in chars, minus its line terminator.
fn text_len(line: RopeSlice) -> usize {
	let len = line.len_chars();
	if len == 0 {
		return 0;
	}

	match line.char(len - 1) {
		'\n' if len >= 2 && line.char(len - 2) == '\r' => len - 2,
		'\n' | '\r' | '\u{000B}' | '\u{000C}' | '\u{0085}' | '\u{2028}' | '\u{2029}' => len - 1,
		_ => len,
	}
}
