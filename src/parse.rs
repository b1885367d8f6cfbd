//! Header and row splitting.

use crate::config::Config;
use crate::scanner::tokens;
use crate::types::{Columns, Row};

/// Parse Headers
///
/// Split the header line into column names. An empty line has no columns, and a trailing
/// delimiter does not add an empty column.
pub fn parse_headers(line: &str, config: &Config) -> Columns {
	// Only a scan starting at the end of the line is both done and empty
	tokens(line, config.delimiter(), config.quote_char())
		.filter(|header| !(header.done && header.text.is_empty()))
		.map(|header| header.text.to_owned())
		.collect()
}

/// Parse Row
///
/// Split a data line into at most `column_count` values. Anything past the last column is
/// ignored; a line with fewer fields gives a shorter row, and an empty line gives none.
pub fn parse_row(line: &str, column_count: usize, config: &Config) -> Row {
	if line.is_empty() {
		return Row::new();
	}
	tokens(line, config.delimiter(), config.quote_char())
		.take(column_count)
		.map(|value| value.text.to_owned())
		.collect()
}
