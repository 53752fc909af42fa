//! # srcgen
//!
//! A build-step source generator: writes a fixed, compilable C++ "Hello World"
//! program to a path and reports what it wrote.
//!
//! ## Overview
//!
//! srcgen provides:
//! - **Fixed payload**: `HELLO_WORLD_CPP`, reproduced byte-for-byte on every run
//! - **Output targets**: Implement `OutputTarget` to write somewhere other than a file
//! - **File policies**: Overwrite existing output (default) or refuse to clobber it
//! - **Config files**: `GeneratorConfig` can be loaded from TOML
//! - **CLI**: The `srcgen` binary, exit status 1 when the path is missing
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use srcgen::{FileOutput, GeneratorBuilder};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let generator = GeneratorBuilder::new().build();
//!     let generated = generator.generate(&FileOutput::new("hello.cpp"))?;
//!     println!("Generated src file: {}", generated.target);
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - `toml` - Load `GeneratorConfig` from TOML files (enabled by default)
//! - `miette` - Pretty error reporting with miette

pub mod builder;
pub mod cli;
pub mod config;
pub mod error;
pub mod generator;
pub mod io;
pub mod payload;

// Re-exports for convenience
pub use builder::GeneratorBuilder;
pub use config::{FileExistsPolicy, GeneratorConfig};
pub use error::{CliError, ConfigError, GenerateError, Stage};
pub use generator::{Generated, Generator};
pub use io::{FileOutput, InMemorySink, OutputTarget};
pub use payload::{HELLO_WORLD_CPP, Payload};

/// Write the built-in payload to `path`, overwriting any existing file.
pub fn generate_file(path: impl AsRef<std::path::Path>) -> Result<Generated, GenerateError> {
    Generator::default().generate(&FileOutput::new(path.as_ref()))
}

// Miette re-exports
#[cfg(feature = "miette")]
pub use error::GenerateDiagnostic;
