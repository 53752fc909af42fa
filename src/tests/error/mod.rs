//! Error module tests.

mod cli_error_tests;
mod generate_error_tests;
#[cfg(feature = "miette")]
mod miette_tests;
