//! Writes the payload into an output target.

use std::io::Write;

use crate::config::FileExistsPolicy;
use crate::error::{GenerateError, Stage};
use crate::io::OutputTarget;
use crate::payload::Payload;

/// Report of a successful generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Generated {
    /// Identifier of the target that was written
    pub target: String,
    pub bytes_written: usize,
}

/// Writes a fixed payload to output targets.
#[derive(Debug, Clone, Default)]
pub struct Generator {
    payload: Payload,
    file_exists_policy: FileExistsPolicy,
}

impl Generator {
    /// Create a new generator.
    pub fn new(payload: Payload, file_exists_policy: FileExistsPolicy) -> Self {
        Self {
            payload,
            file_exists_policy,
        }
    }

    /// Get the payload.
    pub fn payload(&self) -> &Payload {
        &self.payload
    }

    /// Get the file exists policy.
    pub fn file_exists_policy(&self) -> FileExistsPolicy {
        self.file_exists_policy
    }

    /// Open `target`, write the whole payload, flush and close it.
    ///
    /// The write handle is dropped before this returns, so on success the
    /// content is visible to whoever reads the target next.
    pub fn generate(&self, target: &dyn OutputTarget) -> Result<Generated, GenerateError> {
        let id = target.id();
        log::debug!(
            "generating {} ({} bytes) into {id}",
            self.payload.name(),
            self.payload.len()
        );

        let mut writer = self.open_output(target)?;

        writer
            .write_all(self.payload.as_bytes())
            .map_err(|e| GenerateError::new(Stage::Write, id, e))?;
        writer
            .flush()
            .map_err(|e| GenerateError::new(Stage::Flush, id, e))?;
        drop(writer);

        log::trace!("closed {id}");
        Ok(Generated {
            target: id.to_string(),
            bytes_written: self.payload.len(),
        })
    }

    /// Open an output based on the file exists policy.
    fn open_output(
        &self,
        target: &dyn OutputTarget,
    ) -> Result<Box<dyn Write + Send>, GenerateError> {
        let result = match self.file_exists_policy {
            FileExistsPolicy::Overwrite => target.open_overwrite(),
            FileExistsPolicy::Error => target.open_create_new(),
        };

        result.map_err(|e| GenerateError::new(Stage::Open, target.id(), e))
    }
}
