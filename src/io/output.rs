//! Output target trait definition.

use std::fmt::Debug;
use std::io::Write;

/// Trait for synchronous output targets.
///
/// Implementors provide a way to open a writable stream to a destination such
/// as a file or an in-memory buffer.
pub trait OutputTarget: Send + Sync + Debug {
    /// Returns a unique identifier for this output target.
    ///
    /// This is used in error messages, logs and the confirmation line.
    /// Convention: the path as given for files.
    fn id(&self) -> &str;

    /// Open the target for writing, truncating any existing content.
    fn open_overwrite(&self) -> std::io::Result<Box<dyn Write + Send>>;

    /// Open the target for writing, failing with `AlreadyExists` if it
    /// already holds content.
    fn open_create_new(&self) -> std::io::Result<Box<dyn Write + Send>>;
}
