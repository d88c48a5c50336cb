use completiongen::{
    commands::{create_cli_command, PARAMETER_VERBOSE},
    exit_codes::CompletionExitCode,
};
use tracing::error;
use tracing_subscriber::{filter::LevelFilter, EnvFilter};

mod cli;
use cli::execute_command;

/// Initialize the logging subsystem. `RUST_LOG` takes precedence over the
/// default level.
fn init_logging(verbose: bool) {
    let default_level = if verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::WARN
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(default_level.into())
                .from_env_lossy(),
        )
        .with_writer(std::io::stderr)
        .init();
}

/// Exit code for a parser error that clap has just tried to print.
///
/// Help and version requests go to stdout and succeed unless that write
/// failed. Usage errors keep their code even when stderr is gone.
fn parse_error_exit_code(use_stderr: bool, printed: &std::io::Result<()>) -> CompletionExitCode {
    match (use_stderr, printed) {
        (true, _) => CompletionExitCode::UsageError,
        (false, Ok(())) => CompletionExitCode::Success,
        (false, Err(_)) => CompletionExitCode::IoFailure,
    }
}

/// Main entry point for the program
fn main() {
    let matches = match create_cli_command().try_get_matches() {
        Ok(matches) => matches,
        Err(e) => {
            let code = parse_error_exit_code(e.use_stderr(), &e.print());
            ::std::process::exit(code.code());
        }
    };

    init_logging(matches.get_flag(PARAMETER_VERBOSE));

    if let Err(e) = execute_command(&matches) {
        let code = e.exit_code();
        error!("{} (exit code {})", code.message(), code.code());
        eprintln!("ERROR: {}", e);
        ::std::process::exit(code.code());
    }
}
