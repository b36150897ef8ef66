//! Shared line-oriented output for the terminal front-end and its charts.

use std::io::{self, Write};
use std::sync::{Arc, Mutex};

/// A cloneable handle to one output stream.
///
/// The UI and every chart write through the same console so their lines
/// interleave in the order they were produced.
#[derive(Clone)]
pub struct Console {
    out: Arc<Mutex<Box<dyn Write + Send>>>,
}

impl Console {
    /// A console writing to stdout.
    #[must_use]
    pub fn stdout() -> Self {
        Self::new(Box::new(io::stdout()))
    }

    /// A console writing to `out`.
    #[must_use]
    pub fn new(out: Box<dyn Write + Send>) -> Self {
        Self { out: Arc::new(Mutex::new(out)) }
    }

    /// Writes one line. Output errors (e.g. a closed pipe) are ignored.
    pub fn line(&self, text: &str) {
        if let Ok(mut out) = self.out.lock() {
            let _ = writeln!(out, "{text}");
            let _ = out.flush();
        }
    }

    /// Writes text without a trailing newline.
    pub fn prompt(&self, text: &str) {
        if let Ok(mut out) = self.out.lock() {
            let _ = write!(out, "{text}");
            let _ = out.flush();
        }
    }
}

/// An in-memory writer whose contents can be read back.
#[derive(Clone, Default)]
pub struct Capture {
    buf: Arc<Mutex<Vec<u8>>>,
}

impl Capture {
    /// A console that writes into this capture.
    #[must_use]
    pub fn console(&self) -> Console {
        Console::new(Box::new(self.clone()))
    }

    /// Everything written so far.
    #[must_use]
    pub fn contents(&self) -> String {
        self.buf.lock().map(|buf| String::from_utf8_lossy(&buf).into_owned()).unwrap_or_default()
    }
}

impl Write for Capture {
    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        let mut buf = self.buf.lock().map_err(|_| io::Error::other("capture lock poisoned"))?;
        buf.extend_from_slice(data);
        Ok(data.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
