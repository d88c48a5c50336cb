//! Command-line parameters of the `completiongen` command.
//!
//! Parameter names are shared between the argument definitions here and the
//! lookups in the command execution code.

use clap::{Arg, ArgAction};
use std::path::PathBuf;

pub const PARAMETER_SHELL: &str = "shell";
pub const PARAMETER_SPEC: &str = "spec";
pub const PARAMETER_OUT: &str = "out";
pub const PARAMETER_FORCE: &str = "force";
pub const PARAMETER_NAME: &str = "name";
pub const PARAMETER_VERBOSE: &str = "verbose";

/// Create the shell parameter.
///
/// Any name is accepted here so that unknown shells are reported as
/// unsupported rather than as a usage error.
pub fn shell_parameter() -> Arg {
    Arg::new(PARAMETER_SHELL)
        .long(PARAMETER_SHELL)
        .num_args(1)
        .required(true)
        .value_name("SHELL")
        .help("Shell dialect to generate the script for (bash, zsh)")
}

/// Create the spec file parameter.
pub fn spec_parameter() -> Arg {
    Arg::new(PARAMETER_SPEC)
        .long(PARAMETER_SPEC)
        .num_args(1)
        .required(true)
        .value_name("PATH")
        .help("Command spec file (YAML, or JSON with a .json extension)")
        .value_parser(clap::value_parser!(PathBuf))
}

/// Create the output file parameter.
pub fn out_parameter() -> Arg {
    Arg::new(PARAMETER_OUT)
        .short('o')
        .long(PARAMETER_OUT)
        .num_args(1)
        .required(false)
        .value_name("PATH")
        .help("Write the script to this file instead of standard output")
        .value_parser(clap::value_parser!(PathBuf))
}

pub fn force_parameter() -> Arg {
    Arg::new(PARAMETER_FORCE)
        .short('f')
        .long(PARAMETER_FORCE)
        .action(ArgAction::SetTrue)
        .requires(PARAMETER_OUT)
        .help("Overwrite the output file if it already exists")
}

pub fn name_parameter() -> Arg {
    Arg::new(PARAMETER_NAME)
        .short('n')
        .long(PARAMETER_NAME)
        .num_args(1)
        .required(false)
        .value_name("NAME")
        .help("Command name to complete, overriding the name in the spec file")
}

pub fn verbose_parameter() -> Arg {
    Arg::new(PARAMETER_VERBOSE)
        .short('v')
        .long(PARAMETER_VERBOSE)
        .action(ArgAction::SetTrue)
        .help("Enable verbose output for debugging")
}
