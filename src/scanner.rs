//! Quote-aware tokenizer.

use crate::types::Token;

/// Scan
///
/// Read `buffer` from byte offset `start` up to the next `delimiter` that is not inside a pair of
/// `quote` characters. Quote characters toggle the quoted state and are kept in the token text.
/// If no unquoted delimiter is found the token runs to the end of the buffer and is marked
/// `done`. An odd number of quotes is accepted as-is and reported through `unbalanced`.
///
/// `start` must fall on a char boundary; anything past the end of the buffer yields an empty,
/// done token.
pub fn scan(buffer: &str, start: usize, delimiter: char, quote: char) -> Token<'_> {
	debug_assert_ne!(delimiter, quote);
	debug_assert!(start >= buffer.len() || buffer.is_char_boundary(start));
	let rest = match buffer.get(start..) {
		Some(rest) => rest,
		None => return end_of_buffer(buffer, buffer.len(), false),
	};

	let mut inside_quote = false;
	for (offset, c) in rest.char_indices() {
		if c == quote {
			inside_quote = !inside_quote;
		} else if c == delimiter && !inside_quote {
			let index = start + offset;
			return Token {
				text: &buffer[start..index],
				index,
				done: false,
				unbalanced: false,
			};
		}
	}
	end_of_buffer(buffer, start, inside_quote)
}

fn end_of_buffer(buffer: &str, start: usize, unbalanced: bool) -> Token<'_> {
	Token {
		text: &buffer[start..],
		index: buffer.len(),
		done: true,
		unbalanced,
	}
}

/// Tokens
///
/// Iterate every delimiter-separated token of `buffer`, starting at offset 0. The iterator ends
/// after the first `done` token.
pub fn tokens(buffer: &str, delimiter: char, quote: char) -> Tokens<'_> {
	Tokens {
		buffer,
		delimiter,
		quote,
		next: Some(0),
	}
}

pub struct Tokens<'a> {
	buffer: &'a str,
	delimiter: char,
	quote: char,
	next: Option<usize>,
}

impl<'a> Iterator for Tokens<'a> {
	type Item = Token<'a>;

	fn next(&mut self) -> Option<Self::Item> {
		let start = self.next?;
		let token = scan(self.buffer, start, self.delimiter, self.quote);
		self.next = if token.done {
			None
		} else {
			Some(token.index + self.delimiter.len_utf8())
		};
		Some(token)
	}
}
