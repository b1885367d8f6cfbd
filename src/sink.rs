//! Output sinks.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Destination for rendered records.
pub trait Sink {
	/// Append already-rendered text verbatim.
	fn append(&mut self, text: &str) -> io::Result<()>;

	/// Flush anything still buffered. The sink must not be appended to afterwards.
	fn close(&mut self) -> io::Result<()>;
}

/// Writer Sink
///
/// Buffered sink over anything implementing `std::io::Write`, e.g. a file or stdout.
pub struct WriterSink<W: Write> {
	inner: BufWriter<W>,
}

impl<W: Write> WriterSink<W> {
	pub fn new(writer: W) -> Self {
		Self {
			inner: BufWriter::new(writer),
		}
	}

	/// Into Inner
	///
	/// Flush and hand back the wrapped writer.
	pub fn into_inner(self) -> io::Result<W> {
		self.inner.into_inner().map_err(|e| e.into_error())
	}
}

impl WriterSink<File> {
	/// Create
	///
	/// Open `path` for writing, truncating any existing file.
	pub fn create<P: AsRef<Path>>(path: P) -> io::Result<Self> {
		let file = File::create(path)?;
		Ok(Self::new(file))
	}
}

impl<W: Write> Sink for WriterSink<W> {
	fn append(&mut self, text: &str) -> io::Result<()> {
		self.inner.write_all(text.as_bytes())
	}

	fn close(&mut self) -> io::Result<()> {
		self.inner.flush()
	}
}

impl<S: Sink + ?Sized> Sink for &mut S {
	fn append(&mut self, text: &str) -> io::Result<()> {
		(**self).append(text)
	}

	fn close(&mut self) -> io::Result<()> {
		(**self).close()
	}
}
