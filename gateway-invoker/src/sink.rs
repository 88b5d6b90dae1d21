//! Output sinks receiving rendered fragments.

use std::io::Write;
use std::sync::Mutex;

/// Destination of rendered results, standing in for the page's `result`
/// element.
///
/// Every call replaces the previous content entirely; concurrent writers
/// race and the last one wins.
pub trait OutputSink: Send + Sync {
    fn replace(&self, html: &str);
}

/// Keeps the latest fragment in memory.
#[derive(Debug, Default)]
pub struct MemorySink {
    inner: Mutex<MemoryContent>,
}

#[derive(Debug, Default)]
struct MemoryContent {
    html: Option<String>,
    writes: usize,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current content, if anything was rendered yet.
    pub fn content(&self) -> Option<String> {
        self.inner
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .html
            .clone()
    }

    /// Number of replacements so far.
    pub fn writes(&self) -> usize {
        self.inner
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .writes
    }
}

impl OutputSink for MemorySink {
    fn replace(&self, html: &str) {
        let mut content = self
            .inner
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        content.html = Some(html.to_string());
        content.writes += 1;
    }
}

/// Writes each fragment as one line to a writer (e.g. stdout).
pub struct WriterSink<W> {
    writer: Mutex<W>,
}

impl<W: Write + Send> WriterSink<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer: Mutex::new(writer),
        }
    }

    pub fn into_inner(self) -> W {
        self.writer
            .into_inner()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl<W: Write + Send> OutputSink for WriterSink<W> {
    fn replace(&self, html: &str) {
        let mut writer = self
            .writer
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        if let Err(e) = writeln!(writer, "{}", html).and_then(|_| writer.flush()) {
            tracing::warn!("Failed to write result: {}", e);
        }
    }
}
