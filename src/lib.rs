//! Shell completion script generation.
//!
//! This crate turns a static description of a command-line interface into a
//! completion script for bash or zsh.
//!
//! # Modules
//!
//! - `model`: `CommandSpec` and `OptionSpec`, the description of a CLI
//! - `validation`: structural checks on a `CommandSpec` tree
//! - `shell`: the `ShellKind` enumeration
//! - `generator`: the `generate` entry point and the per-shell renderers
//! - `spec_file`: loading a `CommandSpec` from YAML or JSON
//! - `commands`: the argument definitions of the `completiongen` binary
//! - `error` and `exit_codes`: error taxonomy and process exit codes
//!
//! # Example
//!
//! ```
//! use completiongen::{generate, CommandSpec, OptionSpec, ShellKind};
//!
//! let spec = CommandSpec::new("tool")
//!     .with_subcommand(CommandSpec::new("add"))
//!     .with_subcommand(CommandSpec::new("remove"))
//!     .with_option(OptionSpec::with_choices("--shell", ["bash", "zsh"]));
//!
//! let script = generate(&spec, ShellKind::Bash).unwrap();
//! assert!(script.contains("complete -F _tool_completions"));
//! ```

pub mod commands;
pub mod error;
pub mod exit_codes;
pub mod generator;
pub mod model;
pub mod shell;
pub mod spec_file;
pub mod validation;

pub use error::{GeneratorError, SpecViolation};
pub use generator::generate;
pub use model::{CommandSpec, OptionSpec};
pub use shell::ShellKind;
