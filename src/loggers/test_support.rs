//! Test doubles shared by the logger tests

use std::io;
use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::{Arc, Mutex};

use tracing_subscriber::fmt::MakeWriter;

use super::traits::ErrorLogger;
use crate::clock::{DaySource, Weekday};
use crate::error::{LogError, LogResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Behavior {
    Succeed,
    Fail,
    Panic,
}

/// Logger that records every message it receives
#[derive(Debug)]
pub struct RecordingLogger {
    calls: Mutex<Vec<String>>,
    behavior: Behavior,
    journal: Option<(usize, Arc<Mutex<Vec<usize>>>)>,
}

impl RecordingLogger {
    pub fn new() -> Self {
        Self::with_behavior(Behavior::Succeed)
    }

    /// Records the call, then fails with an I/O error
    pub fn failing() -> Self {
        Self::with_behavior(Behavior::Fail)
    }

    /// Records the call, then panics
    pub fn panicking() -> Self {
        Self::with_behavior(Behavior::Panic)
    }

    /// Succeeds and appends `id` to a journal shared between loggers
    pub fn journaled(id: usize, journal: Arc<Mutex<Vec<usize>>>) -> Self {
        Self {
            journal: Some((id, journal)),
            ..Self::new()
        }
    }

    fn with_behavior(behavior: Behavior) -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            behavior,
            journal: None,
        }
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

impl ErrorLogger for RecordingLogger {
    fn write_error(&self, message: &str) -> LogResult<()> {
        self.calls.lock().unwrap().push(message.to_string());
        if let Some((id, journal)) = &self.journal {
            journal.lock().unwrap().push(*id);
        }

        match self.behavior {
            Behavior::Succeed => Ok(()),
            Behavior::Fail => Err(LogError::io(
                "recording",
                io::Error::new(io::ErrorKind::PermissionDenied, "refused"),
            )),
            Behavior::Panic => panic!("recording logger asked to panic"),
        }
    }

    fn name(&self) -> &'static str {
        "recording"
    }
}

/// Day source whose answer can change between calls
#[derive(Debug)]
pub struct SettableDay(AtomicU8);

impl SettableDay {
    pub fn new(day: Weekday) -> Self {
        Self(AtomicU8::new(Self::encode(day)))
    }

    pub fn set(&self, day: Weekday) {
        self.0.store(Self::encode(day), Ordering::SeqCst);
    }

    fn encode(day: Weekday) -> u8 {
        Weekday::ALL.iter().position(|d| *d == day).unwrap_or(0) as u8
    }
}

impl DaySource for SettableDay {
    fn today(&self) -> Weekday {
        Weekday::ALL[self.0.load(Ordering::SeqCst) as usize]
    }
}

/// In-memory console target
#[derive(Debug, Clone, Default)]
pub struct CapturedOutput(Arc<Mutex<Vec<u8>>>);

impl CapturedOutput {
    pub fn contents(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }
}

pub struct CapturedWriter(Arc<Mutex<Vec<u8>>>);

impl io::Write for CapturedWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for CapturedOutput {
    type Writer = CapturedWriter;

    fn make_writer(&'a self) -> Self::Writer {
        CapturedWriter(self.0.clone())
    }
}

/// Console target that behaves like a closed descriptor
#[derive(Debug, Clone, Copy)]
pub struct BrokenPipe;

pub struct BrokenPipeWriter;

impl io::Write for BrokenPipeWriter {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "stream closed"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "stream closed"))
    }
}

impl<'a> MakeWriter<'a> for BrokenPipe {
    type Writer = BrokenPipeWriter;

    fn make_writer(&'a self) -> Self::Writer {
        BrokenPipeWriter
    }
}
