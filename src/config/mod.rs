//! Configuration types for the generator.
//!
//! This module provides:
//! - `FileExistsPolicy`: Policy for handling an existing output file
//! - `GeneratorConfig`: Settings loadable from a TOML file

mod generator;
mod policy;

pub use generator::{CONFIG_ENV_VAR, GeneratorConfig, POLICY_ENV_VAR};
pub use policy::FileExistsPolicy;
