//! CLI command definition and argument parsing.
//!
//! `completiongen` has no subcommands: a single invocation reads a spec file
//! and emits one completion script.

use clap::Command;

pub mod params;

pub use params::{
    PARAMETER_FORCE, PARAMETER_NAME, PARAMETER_OUT, PARAMETER_SHELL, PARAMETER_SPEC,
    PARAMETER_VERBOSE,
};

/// Create the `completiongen` command with all of its arguments.
pub fn create_cli_command() -> Command {
    Command::new(env!("CARGO_PKG_NAME"))
        .version(env!("CARGO_PKG_VERSION"))
        .about(env!("CARGO_PKG_DESCRIPTION"))
        .arg(params::shell_parameter())
        .arg(params::spec_parameter())
        .arg(params::out_parameter())
        .arg(params::force_parameter())
        .arg(params::name_parameter())
        .arg(params::verbose_parameter())
}
