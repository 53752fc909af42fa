//! In-memory output target for testing.

use std::io::{self, Write};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use super::OutputTarget;

/// In-memory output sink for testing.
///
/// Clones share the same buffer, so a test can hand one clone to the
/// generator and inspect the other afterwards.
#[derive(Debug, Clone)]
pub struct InMemorySink {
    id: String,
    buf: Arc<Mutex<Vec<u8>>>,
}

impl InMemorySink {
    /// Create a new empty in-memory sink.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            buf: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Create a sink that already holds content.
    pub fn with_contents(id: impl Into<String>, data: impl Into<Vec<u8>>) -> Self {
        Self {
            id: id.into(),
            buf: Arc::new(Mutex::new(data.into())),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Vec<u8>> {
        self.buf.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Get the contents of the sink as bytes.
    pub fn contents(&self) -> Vec<u8> {
        self.lock().clone()
    }

    /// Get the contents of the sink as a string.
    pub fn contents_string(&self) -> String {
        String::from_utf8_lossy(&self.contents()).into_owned()
    }

    /// Clear the sink contents.
    pub fn clear(&self) {
        self.lock().clear();
    }
}

impl OutputTarget for InMemorySink {
    fn id(&self) -> &str {
        &self.id
    }

    fn open_overwrite(&self) -> io::Result<Box<dyn Write + Send>> {
        self.clear();
        Ok(Box::new(InMemoryWriteHandle {
            buf: self.buf.clone(),
        }))
    }

    fn open_create_new(&self) -> io::Result<Box<dyn Write + Send>> {
        if !self.lock().is_empty() {
            return Err(io::Error::new(
                io::ErrorKind::AlreadyExists,
                format!("sink '{}' already holds content", self.id),
            ));
        }
        Ok(Box::new(InMemoryWriteHandle {
            buf: self.buf.clone(),
        }))
    }
}

/// Write handle for in-memory sink.
struct InMemoryWriteHandle {
    buf: Arc<Mutex<Vec<u8>>>,
}

impl std::fmt::Debug for InMemoryWriteHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InMemoryWriteHandle").finish()
    }
}

impl Write for InMemoryWriteHandle {
    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        let mut guard = self.buf.lock().unwrap_or_else(PoisonError::into_inner);
        guard.extend_from_slice(data);
        Ok(data.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
