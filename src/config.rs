//! Scanner configuration.

use anyhow::{bail, Result};

use crate::types::{Quote, DEFAULT_DELIMITER, RECORD_DELIMITER};

/// Field delimiter and quote convention for one file.
///
/// The record delimiter is always `\n`. A single quote setting covers both
/// record and field splitting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
	delimiter: char,
	quote: Quote,
}

impl Config {
	/// New
	///
	/// Build a config, rejecting delimiters that collide with the quote character or the record
	/// delimiter.
	pub fn new(delimiter: char, quote: Quote) -> Result<Self> {
		if delimiter == quote.as_char() {
			bail!("delimiter {:?} is the same as the quote character", delimiter);
		}
		if delimiter == RECORD_DELIMITER {
			bail!("delimiter cannot be a newline");
		}
		Ok(Self { delimiter, quote })
	}

	pub fn with_single_quotes(use_single_quotes: bool) -> Self {
		Self {
			delimiter: DEFAULT_DELIMITER,
			quote: Quote::from_single_quotes(use_single_quotes),
		}
	}

	pub fn delimiter(&self) -> char {
		self.delimiter
	}

	pub fn quote(&self) -> Quote {
		self.quote
	}

	pub fn quote_char(&self) -> char {
		self.quote.as_char()
	}
}

impl Default for Config {
	fn default() -> Self {
		Self::with_single_quotes(false)
	}
}

#[cfg(test)]
mod test {
	use super::*;
	use rstest::*;

	#[rstest]
	#[case(',', Quote::Double)]
	#[case(';', Quote::Single)]
	#[case('\t', Quote::Double)]
	#[case('"', Quote::Single)]
	fn accepts_distinct_delimiter(#[case] delimiter: char, #[case] quote: Quote) {
		let config = Config::new(delimiter, quote).unwrap();
		assert_eq!(config.delimiter(), delimiter);
		assert_eq!(config.quote(), quote);
	}

	#[rstest]
	#[case('"', Quote::Double)]
	#[case('\'', Quote::Single)]
	#[case('\n', Quote::Double)]
	fn rejects_colliding_delimiter(#[case] delimiter: char, #[case] quote: Quote) {
		assert!(Config::new(delimiter, quote).is_err());
	}

	#[test]
	fn single_quote_flag_selects_quote_char() {
		assert_eq!(Config::with_single_quotes(true).quote_char(), '\'');
		assert_eq!(Config::default().quote_char(), '"');
		assert_eq!(Config::default().delimiter(), ',');
	}
}
