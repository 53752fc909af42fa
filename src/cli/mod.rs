//! Command line handling for the `srcgen` binary.
//!
//! The binary takes exactly one positional argument, the output file path:
//!
//! ```text
//! srcgen <output-file>
//! ```
//!
//! On success the payload is written to the path and
//! `Generated src file: <path>` is printed. Without an argument the process
//! exits with status 1 and prints nothing.

use std::ffi::OsString;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::builder::GeneratorBuilder;
use crate::config::GeneratorConfig;
use crate::error::{CliError, EXIT_SUCCESS};
use crate::generator::Generated;
use crate::io::FileOutput;

/// Parsed command line arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputArgs {
    output: PathBuf,
}

impl OutputArgs {
    /// Parse arguments, excluding the program name.
    ///
    /// Only the first argument is used; anything after it is ignored.
    pub fn from_args<I, S>(args: I) -> Result<Self, CliError>
    where
        I: IntoIterator<Item = S>,
        S: Into<OsString>,
    {
        let first = args.into_iter().next().map(Into::into);
        match first {
            Some(output) if !output.is_empty() => Ok(Self {
                output: PathBuf::from(output),
            }),
            _ => Err(CliError::MissingArgument),
        }
    }

    /// The output file path.
    pub fn output(&self) -> &Path {
        &self.output
    }
}

/// Write the confirmation line naming the file that was written.
///
/// The path goes out as its raw OS bytes, so a consumer reading the line
/// gets back exactly the path that was passed in.
pub fn write_confirmation(out: &mut dyn Write, path: &Path) -> std::io::Result<()> {
    out.write_all(b"Generated src file: ")?;
    out.write_all(path.as_os_str().as_encoded_bytes())?;
    out.write_all(b"\n")?;
    out.flush()
}

/// Run one generation from command line arguments.
///
/// `config` is only consulted once an output path is present, so a missing
/// argument never touches the config file.
pub fn try_run<I, S, C>(args: I, config: C, stdout: &mut dyn Write) -> Result<Generated, CliError>
where
    I: IntoIterator<Item = S>,
    S: Into<OsString>,
    C: FnOnce() -> Result<GeneratorConfig, crate::error::ConfigError>,
{
    let args = OutputArgs::from_args(args)?;
    let config = config()?;

    let generator = GeneratorBuilder::from_config(&config).build();
    let target = FileOutput::new(args.output());
    let generated = generator.generate(&target)?;

    write_confirmation(stdout, args.output()).map_err(CliError::Report)?;
    Ok(generated)
}

/// Like [`try_run`], but resolves the outcome to a process exit status.
///
/// Errors other than a missing argument are written to `stderr`.
pub fn run<I, S, C>(args: I, config: C, stdout: &mut dyn Write, stderr: &mut dyn Write) -> u8
where
    I: IntoIterator<Item = S>,
    S: Into<OsString>,
    C: FnOnce() -> Result<GeneratorConfig, crate::error::ConfigError>,
{
    match try_run(args, config, stdout) {
        Ok(generated) => {
            log::info!(
                "wrote {} bytes to {}",
                generated.bytes_written,
                generated.target
            );
            EXIT_SUCCESS
        }
        Err(e) => {
            if !e.is_silent() {
                log::debug!("generation failed: {e:?}");
                // Nothing more useful to do if stderr itself is gone.
                let _ = writeln!(stderr, "srcgen error: {e}");
            }
            e.exit_code()
        }
    }
}
