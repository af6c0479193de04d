//! Output sinks handed to backends by the host
//!
//! A sink is a cheaply cloneable handle to wherever the host wants console
//! output to land. The memory variant exists so hosts (and tests) can
//! capture output instead of printing it.

use std::fmt;
use std::io::{self, Write};
use std::sync::{Arc, Mutex};

/// Shared writer handle for progress bars and spinners
#[derive(Clone)]
pub struct OutputSink {
    target: Arc<Mutex<SinkTarget>>,
}

enum SinkTarget {
    Stdout,
    Stderr,
    Memory(Vec<u8>),
}

impl OutputSink {
    /// Sink writing to standard output
    pub fn stdout() -> Self {
        Self::from_target(SinkTarget::Stdout)
    }

    /// Sink writing to standard error
    pub fn stderr() -> Self {
        Self::from_target(SinkTarget::Stderr)
    }

    /// Sink capturing output in memory
    pub fn memory() -> Self {
        Self::from_target(SinkTarget::Memory(Vec::new()))
    }

    fn from_target(target: SinkTarget) -> Self {
        Self {
            target: Arc::new(Mutex::new(target)),
        }
    }

    /// Write a string to the sink
    pub fn write_str(&self, text: &str) -> io::Result<()> {
        let mut target = self
            .target
            .lock()
            .map_err(|_| io::Error::other("output sink lock poisoned"))?;

        match &mut *target {
            SinkTarget::Stdout => {
                let mut out = io::stdout().lock();
                out.write_all(text.as_bytes())?;
                out.flush()
            }
            SinkTarget::Stderr => {
                let mut err = io::stderr().lock();
                err.write_all(text.as_bytes())?;
                err.flush()
            }
            SinkTarget::Memory(buffer) => {
                buffer.extend_from_slice(text.as_bytes());
                Ok(())
            }
        }
    }

    /// Write a string followed by a newline
    pub fn line(&self, text: &str) -> io::Result<()> {
        self.write_str(text)?;
        self.write_str("\n")
    }

    /// Captured output, for memory sinks only
    pub fn contents(&self) -> Option<String> {
        let target = self.target.lock().ok()?;
        match &*target {
            SinkTarget::Memory(buffer) => Some(String::from_utf8_lossy(buffer).into_owned()),
            _ => None,
        }
    }
}

impl fmt::Debug for OutputSink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match self.target.lock() {
            Ok(target) => match &*target {
                SinkTarget::Stdout => "stdout",
                SinkTarget::Stderr => "stderr",
                SinkTarget::Memory(_) => "memory",
            },
            Err(_) => "poisoned",
        };
        f.debug_struct("OutputSink").field("target", &kind).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_sink_captures_writes_in_order() {
        let sink = OutputSink::memory();
        sink.write_str("downloading ").unwrap();
        sink.line("ripgrep").unwrap();

        assert_eq!(sink.contents().unwrap(), "downloading ripgrep\n");
    }

    #[test]
    fn clones_share_the_same_buffer() {
        let sink = OutputSink::memory();
        let clone = sink.clone();
        clone.line("one").unwrap();

        assert_eq!(sink.contents().unwrap(), "one\n");
    }

    #[test]
    fn stream_sinks_do_not_expose_contents() {
        assert!(OutputSink::stdout().contents().is_none());
        assert!(OutputSink::stderr().contents().is_none());
    }
}
