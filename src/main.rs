//! Program entrypoint and argument parsing.

use std::env;
use std::fs::File;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{anyhow, bail, Context, Result};

use csv_sql::{
	process_file, Config, CsvLine, OutputTransform, Quote, Sink, SqlInsert, Transform, WriterSink,
};

static USAGE: &str = "Usage: csv-sql [--single-quotes] [--delimiter <char>] [--format sql|csv] \
	[--table <name>] <input> [output]";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Format {
	Sql,
	Csv,
}

#[derive(Debug, PartialEq, Eq)]
struct Args {
	input: PathBuf,
	output: Option<PathBuf>,
	delimiter: char,
	single_quotes: bool,
	format: Format,
	table: Option<String>,
}

/// Parse Args
///
/// Parse flags and positional paths, rejecting anything unexpected.
/// (Skipping a dependency on `Clap` or equivalent given how few options there are).
fn parse_args<I: IntoIterator<Item = String>>(args: I) -> Result<Args> {
	let mut args = args.into_iter();
	let mut positional = Vec::new();
	let mut delimiter = ',';
	let mut single_quotes = false;
	let mut format = Format::Sql;
	let mut table = None;

	while let Some(arg) = args.next() {
		match arg.as_str() {
			"--single-quotes" => single_quotes = true,
			"--delimiter" => {
				let value = args.next().ok_or_else(|| anyhow!("--delimiter needs a value"))?;
				delimiter = parse_delimiter(&value)?;
			}
			"--format" => {
				format = match args.next().as_deref() {
					Some("sql") => Format::Sql,
					Some("csv") => Format::Csv,
					_ => bail!("--format must be `sql` or `csv`"),
				}
			}
			"--table" => {
				table = Some(args.next().ok_or_else(|| anyhow!("--table needs a value"))?);
			}
			flag if flag.starts_with("--") => bail!("Unknown option {}\n{}", flag, USAGE),
			_ => positional.push(PathBuf::from(&arg)),
		}
	}

	let mut positional = positional.into_iter();
	let input = positional.next().ok_or_else(|| anyhow!(USAGE))?;
	let output = positional.next();
	if positional.next().is_some() {
		return Err(anyhow!(USAGE)); // Reject any unexpected args, just to be sure
	}
	Ok(Args {
		input,
		output,
		delimiter,
		single_quotes,
		format,
		table,
	})
}

fn parse_delimiter(value: &str) -> Result<char> {
	if value == "\\t" {
		return Ok('\t');
	}
	let mut chars = value.chars();
	match (chars.next(), chars.next()) {
		(Some(c), None) => Ok(c),
		_ => bail!("delimiter must be a single character, got {:?}", value),
	}
}

/// Table name defaults to the input file stem.
fn table_name(args: &Args) -> String {
	args.table.clone().unwrap_or_else(|| {
		args.input
			.file_stem()
			.and_then(|s| s.to_str())
			.unwrap_or("records")
			.to_owned()
	})
}

/// Process
///
/// Run the pipeline into `sink`, closing it whether or not the run succeeded. A pipeline error
/// takes precedence over a close error.
fn process<W: Write>(args: &Args, config: &Config, mut sink: WriterSink<W>) -> Result<()> {
	let output: Box<dyn OutputTransform> = match args.format {
		Format::Sql => Box::new(SqlInsert::new(table_name(args))),
		Format::Csv => Box::new(CsvLine),
	};
	let result = process_file(
		&args.input,
		config,
		&Transform::Identity,
		output.as_ref(),
		&mut sink,
	);
	let closed = sink.close().context("failed to close output");
	let summary = result?;
	closed?;
	log::info!(
		"Wrote {} records ({} empty lines skipped)",
		summary.rows_written,
		summary.rows_skipped
	);
	Ok(())
}

fn create_output(path: &Path) -> Result<WriterSink<File>> {
	WriterSink::create(path)
		.with_context(|| format!("failed to open output file {}", path.display()))
}

fn main() -> Result<()> {
	env_logger::init();
	let args = parse_args(env::args().skip(1))?;
	let config = Config::new(args.delimiter, Quote::from_single_quotes(args.single_quotes))?;
	match &args.output {
		Some(path) => process(&args, &config, create_output(path)?),
		None => process(&args, &config, WriterSink::new(io::stdout())),
	}
}
