//! Record transforms.
//!
//! The input side remaps raw (columns, values) pairs before rendering; the output side turns a
//! record into the text appended to the sink.

use anyhow::{bail, Result};

use crate::types::{Record, Row};

/// Remaps a parsed row before it is rendered.
pub trait InputTransform {
	fn transform_input(&self, columns: &[String], values: Row) -> Result<Record>;
}

impl<F> InputTransform for F
where
	F: Fn(&[String], Row) -> Result<Record>,
{
	fn transform_input(&self, columns: &[String], values: Row) -> Result<Record> {
		self(columns, values)
	}
}

/// Renders one record as output text.
pub trait OutputTransform {
	fn transform_output(&self, record: &Record) -> Result<String>;
}

/// Input-side transform, identity unless a custom one is given.
#[derive(Default)]
pub enum Transform {
	#[default]
	Identity,
	Custom(Box<dyn InputTransform>),
}

impl Transform {
	pub fn custom<T: InputTransform + 'static>(transform: T) -> Self {
		Transform::Custom(Box::new(transform))
	}

	pub fn apply(&self, columns: &[String], values: Row) -> Result<Record> {
		match self {
			Transform::Identity => Ok(Record::new(columns.to_vec(), values)),
			Transform::Custom(transform) => transform.transform_input(columns, values),
		}
	}
}

/// Sql Insert
///
/// Renders each record as a single `INSERT` statement terminated by a newline.
#[derive(Debug, Clone)]
pub struct SqlInsert {
	table: String,
}

impl SqlInsert {
	pub fn new(table: impl Into<String>) -> Self {
		Self {
			table: table.into(),
		}
	}
}

impl OutputTransform for SqlInsert {
	fn transform_output(&self, record: &Record) -> Result<String> {
		if record.columns.is_empty() {
			bail!("cannot build an insert without columns");
		}
		if record.columns.len() < record.values.len() {
			bail!(
				"{} values for {} columns",
				record.values.len(),
				record.columns.len()
			);
		}
		// Short rows only fill the leading columns
		let columns: Vec<String> = record
			.columns
			.iter()
			.take(record.values.len())
			.map(|c| sql_identifier(c))
			.collect();
		let values: Vec<String> = record.values.iter().map(|v| sql_literal(v)).collect();
		Ok(format!(
			"INSERT INTO {} ({}) VALUES ({});\n",
			sql_identifier(&self.table),
			columns.join(", "),
			values.join(", ")
		))
	}
}

/// Csv Line
///
/// Renders each record's values as one CSV line. Surrounding quotes kept by the scanner are
/// removed first, and the writer re-quotes whatever needs it.
#[derive(Debug, Clone, Default)]
pub struct CsvLine;

impl OutputTransform for CsvLine {
	fn transform_output(&self, record: &Record) -> Result<String> {
		let mut buf = Vec::new();
		{
			let mut wtr = csv::WriterBuilder::new()
				.flexible(true)
				.terminator(csv::Terminator::Any(b'\n'))
				.from_writer(&mut buf);
			wtr.write_record(record.values.iter().map(|v| unquote(v)))?;
			wtr.flush()?;
		}
		Ok(String::from_utf8(buf)?)
	}
}

fn unquote(text: &str) -> &str {
	for quote in ['"', '\''] {
		if text.len() >= 2 && text.starts_with(quote) && text.ends_with(quote) {
			return &text[1..text.len() - 1];
		}
	}
	text
}

/// Identifiers are double-quoted with embedded `"` doubled.
fn sql_identifier(name: &str) -> String {
	format!("\"{}\"", unquote(name.trim()).replace('"', "\"\""))
}

/// Sql Literal
///
/// Empty fields become `NULL` and numbers pass through. Anything else loses its surrounding
/// quotes and is wrapped in single quotes with embedded quotes doubled.
fn sql_literal(value: &str) -> String {
	let trimmed = value.trim();
	if trimmed.is_empty() {
		return "NULL".to_owned();
	}
	let numeric = trimmed
		.chars()
		.all(|c| c.is_ascii_digit() || matches!(c, '-' | '+' | '.' | 'e' | 'E'));
	if numeric && trimmed.parse::<f64>().is_ok() {
		return trimmed.to_owned();
	}
	format!("'{}'", unquote(trimmed).replace('\'', "''"))
}

#[cfg(test)]
mod test {
	use super::*;
	use rstest::*;

	fn record(columns: &[&str], values: &[&str]) -> Record {
		Record::new(
			columns.iter().map(|s| s.to_string()).collect(),
			values.iter().map(|s| s.to_string()).collect(),
		)
	}

	#[test]
	fn identity_keeps_columns_and_values() {
		let columns = vec!["a".to_string(), "b".to_string()];
		let result = Transform::Identity
			.apply(&columns, vec!["1".to_string(), "2".to_string()])
			.unwrap();
		assert_eq!(result, record(&["a", "b"], &["1", "2"]));
	}

	#[test]
	fn custom_closure_is_applied() {
		let upper = Transform::custom(|columns: &[String], values: Row| -> Result<Record> {
			Ok(Record::new(
				columns.iter().map(|c| c.to_uppercase()).collect(),
				values,
			))
		});
		let result = upper
			.apply(&["a".to_string()], vec!["1".to_string()])
			.unwrap();
		assert_eq!(result, record(&["A"], &["1"]));
	}

	#[rstest]
	#[case("", "NULL")]
	#[case("  ", "NULL")]
	#[case("42", "42")]
	#[case("-1.5", "-1.5")]
	#[case("inf", "'inf'")]
	#[case("-inf", "'-inf'")]
	#[case("NaN", "'NaN'")]
	#[case("'kept'", "'kept'")]
	#[case("'O'Brien'", "'O''Brien'")]
	#[case("'x'); DROP TABLE t; --'", "'x''); DROP TABLE t; --'")]
	#[case("x'); DROP TABLE t; --", "'x''); DROP TABLE t; --'")]
	#[case("\"a,b\"", "'a,b'")]
	#[case("O'Brien", "'O''Brien'")]
	#[case("plain", "'plain'")]
	fn literals(#[case] value: &str, #[case] expected: &str) {
		assert_eq!(sql_literal(value), expected);
	}

	#[test]
	fn sql_insert_renders_statement() {
		let sql = SqlInsert::new("people")
			.transform_output(&record(&["id", "\"full name\""], &["7", "\"Doe, Jane\""]))
			.unwrap();
		assert_eq!(
			sql,
			"INSERT INTO \"people\" (\"id\", \"full name\") VALUES (7, 'Doe, Jane');\n"
		);
	}

	#[rstest]
	#[case("plain", "\"plain\"")]
	#[case(" spaced ", "\"spaced\"")]
	#[case("'single'", "\"single\"")]
	#[case("my table", "\"my table\"")]
	#[case("a\"b", "\"a\"\"b\"")]
	fn identifiers(#[case] name: &str, #[case] expected: &str) {
		assert_eq!(sql_identifier(name), expected);
	}

	#[test]
	fn sql_insert_quotes_table_name() {
		let sql = SqlInsert::new("t\"; DROP TABLE x; --")
			.transform_output(&record(&["a"], &["1"]))
			.unwrap();
		assert_eq!(
			sql,
			"INSERT INTO \"t\"\"; DROP TABLE x; --\" (\"a\") VALUES (1);\n"
		);
	}

	#[test]
	fn sql_insert_uses_leading_columns_for_short_rows() {
		let sql = SqlInsert::new("t")
			.transform_output(&record(&["a", "b", "c"], &["1"]))
			.unwrap();
		assert_eq!(sql, "INSERT INTO \"t\" (\"a\") VALUES (1);\n");
	}

	#[rstest]
	#[case(&[], &["1"])]
	#[case(&["a"], &["1", "2"])]
	fn sql_insert_rejects_bad_shapes(#[case] columns: &[&str], #[case] values: &[&str]) {
		assert!(SqlInsert::new("t")
			.transform_output(&record(columns, values))
			.is_err());
	}

	#[test]
	fn csv_line_requotes_fields() {
		let line = CsvLine
			.transform_output(&record(&["a", "b"], &["x,y", "z"]))
			.unwrap();
		assert_eq!(line, "\"x,y\",z\n");
	}

	#[rstest]
	#[case("\"Smith, Jane\"", "\"Smith, Jane\"\n")]
	#[case("'Smith, Jane'", "\"Smith, Jane\"\n")]
	#[case("\"plain\"", "plain\n")]
	fn csv_line_drops_scanner_quotes(#[case] value: &str, #[case] expected: &str) {
		let line = CsvLine
			.transform_output(&record(&["a"], &[value]))
			.unwrap();
		assert_eq!(line, expected);
	}
}
