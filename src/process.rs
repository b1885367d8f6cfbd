//! Record pipeline.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::config::Config;
use crate::parse::{parse_headers, parse_row};
use crate::scanner::scan;
use crate::sink::Sink;
use crate::transform::{OutputTransform, Transform};
use crate::types::{Summary, Token, RECORD_DELIMITER};

/// Process File
///
/// Read the whole file at `path` and run it through the pipeline. The sink is left open; closing
/// it is up to the caller.
pub fn process_file<P, O, S>(
	path: P,
	config: &Config,
	transform: &Transform,
	output: &O,
	sink: &mut S,
) -> Result<Summary>
where
	P: AsRef<Path>,
	O: OutputTransform + ?Sized,
	S: Sink + ?Sized,
{
	let path = path.as_ref();
	let input = fs::read_to_string(path)
		.with_context(|| format!("failed to read input file {}", path.display()))?;
	run(&input, config, transform, output, sink)
}

/// Run
///
/// Split `input` into records, take column names from the first one, and send every following
/// non-empty record through `transform` and `output` into `sink`. Records are handled strictly in
/// order and the first transform or sink failure aborts the run.
pub fn run<O, S>(
	input: &str,
	config: &Config,
	transform: &Transform,
	output: &O,
	sink: &mut S,
) -> Result<Summary>
where
	O: OutputTransform + ?Sized,
	S: Sink + ?Sized,
{
	let quote = config.quote_char();
	let mut line = scan(input, 0, RECORD_DELIMITER, quote);
	warn_unbalanced(&line, 1);
	let columns = parse_headers(strip_cr(line.text), config);
	log::debug!("Columns {:?}", columns);

	let mut summary = Summary::default();
	let mut line_no = 1;
	while !line.done {
		let start = line.index + RECORD_DELIMITER.len_utf8();
		line = scan(input, start, RECORD_DELIMITER, quote);
		line_no += 1;
		warn_unbalanced(&line, line_no);

		let values = parse_row(strip_cr(line.text), columns.len(), config);
		if values.is_empty() {
			log::debug!("Skipping empty line {}", line_no);
			summary.rows_skipped += 1;
			continue;
		}
		log::debug!("Line {}: {:?}", line_no, values);

		let rendered = transform
			.apply(&columns, values)
			.and_then(|record| output.transform_output(&record))
			.with_context(|| format!("failed to transform record on line {}", line_no))?;
		sink.append(&rendered)
			.with_context(|| format!("failed to append record on line {}", line_no))?;
		summary.rows_written += 1;
	}

	Ok(summary)
}

fn strip_cr(text: &str) -> &str {
	text.strip_suffix('\r').unwrap_or(text)
}

fn warn_unbalanced(line: &Token, line_no: usize) {
	if line.unbalanced {
		log::warn!("Unterminated quote on line {}, reading to end of input", line_no);
	}
}
