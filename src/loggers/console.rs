//! Console backend.
//!
//! Writes each message as one line to standard output.

use std::fs::File;
use std::io::{self, Write};

use tracing_subscriber::fmt::MakeWriter;

use super::traits::ErrorLogger;
use crate::error::{LogError, LogResult};

/// Process standard output, re-checked on every message.
///
/// `std::io::Stdout` reports success when descriptor 1 has been closed, so
/// each writer goes through a duplicate of the descriptor instead. Closing
/// stdout makes the duplication fail and the write returns that error.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdoutTarget;

/// Writer produced by [`StdoutTarget`]
#[derive(Debug)]
pub struct StdoutWriter(io::Result<File>);

impl StdoutWriter {
    fn file(&mut self) -> io::Result<&mut File> {
        self.0.as_mut().map_err(|e| match e.raw_os_error() {
            Some(code) => io::Error::from_raw_os_error(code),
            None => io::Error::new(e.kind(), e.to_string()),
        })
    }
}

impl Write for StdoutWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.file()?.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.file()?.flush()
    }
}

impl<'a> MakeWriter<'a> for StdoutTarget {
    type Writer = StdoutWriter;

    fn make_writer(&'a self) -> Self::Writer {
        // Pending `print!` output goes first so lines stay ordered
        StdoutWriter(io::stdout().flush().and_then(|()| duplicate_stdout()))
    }
}

#[cfg(unix)]
fn duplicate_stdout() -> io::Result<File> {
    use std::os::fd::AsFd;

    io::stdout().as_fd().try_clone_to_owned().map(File::from)
}

#[cfg(windows)]
fn duplicate_stdout() -> io::Result<File> {
    use std::os::windows::io::AsHandle;

    io::stdout().as_handle().try_clone_to_owned().map(File::from)
}

/// Console logger
///
/// The output target is any [`MakeWriter`]; [`ConsoleLogger::new`] targets
/// `stdout`, tests plug in a capturing buffer.
#[derive(Debug, Clone)]
pub struct ConsoleLogger<M = StdoutTarget> {
    make_writer: M,
    destination: &'static str,
}

impl ConsoleLogger {
    pub fn new() -> Self {
        Self {
            make_writer: StdoutTarget,
            destination: "stdout",
        }
    }
}

impl Default for ConsoleLogger {
    fn default() -> Self {
        Self::new()
    }
}

impl<M> ConsoleLogger<M>
where
    M: for<'a> MakeWriter<'a> + Send + Sync,
{
    /// Creates a console logger writing through `make_writer`
    ///
    /// # Arguments
    /// * `make_writer` - Produces a fresh writer per message
    /// * `destination` - Label used in error reports (e.g. "stdout")
    pub fn with_writer(make_writer: M, destination: &'static str) -> Self {
        Self {
            make_writer,
            destination,
        }
    }

    pub fn destination(&self) -> &'static str {
        self.destination
    }
}

impl<M> ErrorLogger for ConsoleLogger<M>
where
    M: for<'a> MakeWriter<'a> + Send + Sync,
{
    fn write_error(&self, message: &str) -> LogResult<()> {
        let mut writer = self.make_writer.make_writer();

        writeln!(writer, "{message}")
            .and_then(|()| writer.flush())
            .map_err(|e| LogError::io(self.destination, e))
    }

    fn name(&self) -> &'static str {
        "console"
    }
}
