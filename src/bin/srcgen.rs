use std::process::ExitCode;

use srcgen::GeneratorConfig;

fn main() -> ExitCode {
    env_logger::builder().format_timestamp(None).init();

    let mut stdout = std::io::stdout().lock();
    let mut stderr = std::io::stderr().lock();

    let code = srcgen::cli::run(
        std::env::args_os().skip(1),
        GeneratorConfig::from_env,
        &mut stdout,
        &mut stderr,
    );
    ExitCode::from(code)
}
