//! Re-emit the records of a delimited text file through a pluggable transform.
//!
//! Records are split on newlines and fields on a configurable delimiter, in both cases ignoring
//! delimiters that sit between a pair of quote characters.

pub mod config;
pub mod parse;
pub mod process;
pub mod scanner;
pub mod sink;
pub mod transform;
pub mod types;

pub use config::Config;
pub use process::{process_file, run};
pub use sink::{Sink, WriterSink};
pub use transform::{CsvLine, InputTransform, OutputTransform, SqlInsert, Transform};
pub use types::{Columns, Quote, Record, Row, Summary, Token};
