//! Terminal rendering surface.

use roster_core::ListContainer;
use std::io::Write;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};
use tracing::warn;

/// Container that renders each entry as a bullet line on a writer.
///
/// Output looks like:
///
/// ```text
/// Users:
///   - Leanne Graham
///   - Ervin Howell
/// ```
///
/// The `<id>:` heading is written once, right before the first entry or on
/// an explicit [`write_heading`](Self::write_heading), whichever comes first.
/// A container nothing was rendered into leaves the writer untouched.
pub struct TerminalContainer<W> {
    id: String,
    out: Mutex<Output<W>>,
    written: AtomicUsize,
}

struct Output<W> {
    writer: W,
    heading_written: bool,
}

impl<W: Write> Output<W> {
    fn ensure_heading(&mut self, id: &str) -> std::io::Result<()> {
        if !self.heading_written {
            writeln!(self.writer, "{}:", id)?;
            self.heading_written = true;
        }
        Ok(())
    }
}

impl<W: Write + Send> TerminalContainer<W> {
    pub fn new(id: impl Into<String>, out: W) -> Self {
        Self {
            id: id.into(),
            out: Mutex::new(Output {
                writer: out,
                heading_written: false,
            }),
            written: AtomicUsize::new(0),
        }
    }

    /// Write the `<id>:` heading line if it hasn't been written yet.
    pub fn write_heading(&self) -> std::io::Result<()> {
        let mut out = self.lock();
        out.ensure_heading(&self.id)?;
        out.writer.flush()
    }

    /// Number of entries successfully written
    pub fn written(&self) -> usize {
        self.written.load(Ordering::Relaxed)
    }

    pub fn into_inner(self) -> W {
        self.out
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner)
            .writer
    }

    fn lock(&self) -> MutexGuard<'_, Output<W>> {
        self.out.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<W: Write + Send> ListContainer for TerminalContainer<W> {
    fn id(&self) -> &str {
        &self.id
    }

    fn append_item(&self, text: &str) {
        let mut out = self.lock();
        let result = out
            .ensure_heading(&self.id)
            .and_then(|()| writeln!(out.writer, "  - {}", text))
            .and_then(|()| out.writer.flush());

        match result {
            Ok(()) => {
                self.written.fetch_add(1, Ordering::Relaxed);
            }
            Err(e) => warn!(container = %self.id, error = %e, "Failed to write entry"),
        }
    }
}
