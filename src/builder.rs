//! Builder for creating Generator instances.

use crate::config::{FileExistsPolicy, GeneratorConfig};
use crate::generator::Generator;
use crate::payload::Payload;

#[derive(Debug, Clone, Default)]
pub struct GeneratorBuilder {
    payload: Payload,
    file_exists_policy: FileExistsPolicy,
}

impl GeneratorBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(config: &GeneratorConfig) -> Self {
        Self::new().with_file_exists_policy(config.file_exists_policy)
    }

    pub fn with_payload(mut self, payload: Payload) -> Self {
        self.payload = payload;
        self
    }

    pub fn with_file_exists_policy(mut self, policy: FileExistsPolicy) -> Self {
        self.file_exists_policy = policy;
        self
    }

    pub fn build(self) -> Generator {
        Generator::new(self.payload, self.file_exists_policy)
    }
}
