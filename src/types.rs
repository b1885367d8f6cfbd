//! Global type definitions.

/// Header names, in file order. Values pair with columns by position.
pub type Columns = Vec<String>;

/// Field values of a single record, never longer than its `Columns`.
pub type Row = Vec<String>;

/// Record delimiter used when splitting the buffer into lines.
pub const RECORD_DELIMITER: char = '\n';

/// Default field delimiter.
pub const DEFAULT_DELIMITER: char = ',';

/// One step of the scanner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
	/// Text up to the next unquoted delimiter, quotes included.
	pub text: &'a str,
	/// Offset of the matched delimiter, or the buffer length when `done`.
	pub index: usize,
	/// True when the scan hit the end of the buffer.
	pub done: bool,
	/// True when the token holds an odd number of quote characters.
	pub unbalanced: bool,
}

/// Quote convention, applied to both records and fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Quote {
	#[default]
	Double,
	Single,
}

/// A (columns, values) pair as handed to the output side.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
	pub columns: Columns,
	pub values: Row,
}

/// Counts reported once the pipeline finishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Summary {
	pub rows_written: usize,
	pub rows_skipped: usize,
}

impl Quote {
	pub fn from_single_quotes(use_single_quotes: bool) -> Self {
		if use_single_quotes {
			Quote::Single
		} else {
			Quote::Double
		}
	}

	pub fn as_char(self) -> char {
		match self {
			Quote::Double => '"',
			Quote::Single => '\'',
		}
	}
}

impl Record {
	pub fn new(columns: Columns, values: Row) -> Self {
		Self { columns, values }
	}
}
