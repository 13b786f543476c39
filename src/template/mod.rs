use core::convert::Infallible;
use core::ops::Range;
use core::str::FromStr;

mod parse;
mod render;

/// A template compiled into a sequence of literal and variable pieces.
///
/// Compilation happens once, eagerly, in [`Template::new()`].
/// After that the piece sequence is immutable and [`Self::render()`] can be called
/// any number of times with different variable maps,
/// including concurrently from multiple threads.
///
/// The template owns its source string;
/// pieces are stored as ranges into it, so compiling allocates no per-piece strings.
///
/// # Templates without placeholders
///
/// A source without a single placeholder compiles to an empty piece sequence,
/// so every render of it returns `""` rather than the original text.
/// See the crate documentation for details.
#[derive(Clone, PartialEq, Eq)]
pub struct Template {
	/// The original source text.
	///
	/// Kept for [`Self::source()`]; rendering only reads it through the piece ranges.
	source: String,

	/// The compiled pieces, in sequence order.
	parts: Vec<Part>,
}

/// One compiled piece, stored as a byte range into the source.
///
/// All range boundaries fall on ASCII bytes (`"` or the byte after it),
/// so slicing the source with them can not split a UTF-8 sequence.
#[derive(Clone, Debug, PartialEq, Eq)]
enum Part {
	/// A span of literal text, copied verbatim to the output.
	Literal(Range<usize>),

	/// The name span of a variable, looked up in the map at render time.
	Variable(Range<usize>),
}

impl std::fmt::Debug for Template {
	#[inline]
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_tuple("Template").field(&self.source).finish()
	}
}

impl Template {
	/// Get the original source text.
	#[inline]
	pub fn source(&self) -> &str {
		&self.source
	}

	/// Iterate over the compiled pieces in sequence order.
	///
	/// Concatenating the pieces, with every variable replaced by its mapped value,
	/// gives exactly the output of [`Self::render()`] with that map.
	#[inline]
	pub fn pieces(&self) -> Pieces<'_> {
		Pieces {
			source: &self.source,
			inner: self.parts.iter(),
		}
	}
}

impl From<&str> for Template {
	#[inline]
	fn from(source: &str) -> Self {
		Self::new(source)
	}
}

impl From<String> for Template {
	#[inline]
	fn from(source: String) -> Self {
		Self::new(source)
	}
}

impl FromStr for Template {
	type Err = Infallible;

	#[inline]
	fn from_str(source: &str) -> Result<Self, Self::Err> {
		Ok(Self::new(source))
	}
}

/// A borrowed view of one compiled piece of a [`Template`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Piece<'a> {
	/// Literal text, copied verbatim to the output on every render.
	Literal(&'a str),

	/// A variable name, resolved against the map on every render.
	///
	/// The name is the text between the `$` and the closing quote of the placeholder.
	Variable(&'a str),
}

impl<'a> Piece<'a> {
	/// Get the literal text, if this piece is a literal.
	#[inline]
	pub fn as_literal(&self) -> Option<&'a str> {
		match self {
			Self::Literal(text) => Some(text),
			Self::Variable(_) => None,
		}
	}

	/// Get the variable name, if this piece is a variable reference.
	#[inline]
	pub fn as_variable(&self) -> Option<&'a str> {
		match self {
			Self::Literal(_) => None,
			Self::Variable(name) => Some(name),
		}
	}
}

/// Iterator over the pieces of a [`Template`], returned by [`Template::pieces()`].
#[derive(Clone, Debug)]
pub struct Pieces<'a> {
	source: &'a str,
	inner: std::slice::Iter<'a, Part>,
}

impl<'a> Iterator for Pieces<'a> {
	type Item = Piece<'a>;

	#[inline]
	fn next(&mut self) -> Option<Self::Item> {
		Some(view(self.source, self.inner.next()?))
	}

	#[inline]
	fn size_hint(&self) -> (usize, Option<usize>) {
		self.inner.size_hint()
	}
}

impl DoubleEndedIterator for Pieces<'_> {
	#[inline]
	fn next_back(&mut self) -> Option<Self::Item> {
		Some(view(self.source, self.inner.next_back()?))
	}
}

impl ExactSizeIterator for Pieces<'_> {}

impl std::iter::FusedIterator for Pieces<'_> {}

fn view<'a>(source: &'a str, part: &Part) -> Piece<'a> {
	match part {
		Part::Literal(range) => Piece::Literal(&source[range.clone()]),
		Part::Variable(range) => Piece::Variable(&source[range.clone()]),
	}
}
