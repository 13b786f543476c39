use super::{Part, Template};

impl Template {
	/// Compile a template from its source text.
	///
	/// The source is scanned once, left to right, for placeholders of the form `"$name"`:
	/// a double quote, a dollar sign, one or more non-quote characters, and a closing double quote.
	/// The text between the end of one placeholder name and the dollar sign of the next
	/// becomes a literal piece, so the quote characters around each placeholder stay in the output.
	///
	/// Compilation accepts any string and can not fail.
	/// Text that merely resembles a placeholder, like `"$"` or an unterminated `"$name`,
	/// is scanned past without producing a variable piece.
	/// Compiling the same source twice produces structurally identical pieces.
	pub fn new(source: impl Into<String>) -> Self {
		let source = source.into();
		let parts = parse(&source);
		Self { source, parts }
	}
}

/// Scan the source into parts.
///
/// Placeholder boundaries are all ASCII bytes,
/// so every emitted range lies on a UTF-8 character boundary
/// and variable names may contain arbitrary non-quote text.
fn parse(source: &str) -> Vec<Part> {
	let bytes = source.as_bytes();
	let mut parts = Vec::new();

	// End of the last placeholder's name span.
	// This is the position of its closing quote, which belongs to the next literal.
	let mut previous = 0;
	let mut finger = 0;

	while let Some(offset) = memchr::memchr(b'"', &bytes[finger..]) {
		let quote = finger + offset;
		if bytes.get(quote + 1) != Some(&b'$') {
			finger = quote + 1;
			continue;
		}

		let name_start = quote + 2;
		let name_end = match memchr::memchr(b'"', &bytes[name_start..]) {
			Some(offset) => name_start + offset,
			// No quote left anywhere ahead, so no further placeholder can close.
			None => break,
		};

		// `"$"` has an empty name and is not a placeholder.
		// Its second quote may still open the next one.
		if name_end == name_start {
			finger = name_end;
			continue;
		}

		parts.push(Part::Literal(previous..quote + 1));
		parts.push(Part::Variable(name_start..name_end));
		previous = name_end;
		finger = name_end + 1;
	}

	// The trailing literal runs from the closing quote of the last placeholder
	// to the end of the source. Without any placeholder nothing is emitted at all:
	// a placeholder-free source compiles to an empty piece sequence.
	if !parts.is_empty() {
		parts.push(Part::Literal(previous..bytes.len()));
	}

	parts
}
