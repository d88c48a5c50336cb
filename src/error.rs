use std::path::PathBuf;

use thiserror::Error;

use crate::{exit_codes::CompletionExitCode, spec_file::SpecFileError};

/// Reasons a [`CommandSpec`](crate::model::CommandSpec) tree is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SpecViolation {
    #[error("command name is empty")]
    EmptyName,
    #[error("'{value}' contains whitespace")]
    ContainsWhitespace { value: String },
    #[error("'{value}' contains the reserved character {character:?}")]
    ForbiddenCharacter { value: String, character: char },
    #[error("command name '{name}' starts with '-' and would be completed as an option")]
    NameLooksLikeFlag { name: String },
    #[error("duplicate subcommand name '{name}'")]
    DuplicateSubcommand { name: String },
    #[error("duplicate option flag '{flag}'")]
    DuplicateFlag { flag: String },
    #[error("malformed option flag '{flag}', expected '-x' or '--name'")]
    MalformedFlag { flag: String },
    #[error("option '{flag}' lists value choices but does not take a value")]
    ChoicesWithoutValue { flag: String },
    #[error("option '{flag}' has an empty value choice")]
    EmptyChoice { flag: String },
    #[error("option '{flag}' lists the value choice '{choice}' more than once")]
    DuplicateChoice { flag: String, choice: String },
}

/// Errors returned by [`generate`](crate::generator::generate).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GeneratorError {
    /// `path` is the command path to the offending node, with the option flag
    /// appended when the violation is on an option.
    #[error("invalid command spec at '{path}': {violation}")]
    InvalidSpec { path: String, violation: SpecViolation },
    #[error("unsupported shell '{0}', expected one of: bash, zsh")]
    UnsupportedShell(String),
}

/// Error types that can occur while running the `completiongen` command
#[derive(Debug, Error)]
pub enum CliError {
    /// Invalid command line, as reported by the argument parser
    #[error("{0}")]
    Usage(String),
    #[error(transparent)]
    SpecFile(#[from] SpecFileError),
    #[error(transparent)]
    Generator(#[from] GeneratorError),
    /// The output file exists and `--force` was not given
    #[error("output file {0:?} already exists, use --force to overwrite it")]
    OutputExists(PathBuf),
    #[error("failed to write completion script to {path:?}: {cause}")]
    FailedToWrite {
        path: PathBuf,
        cause: std::io::Error,
    },
}

impl CliError {
    /// Get the exit code reported to the shell for this error
    pub fn exit_code(&self) -> CompletionExitCode {
        match self {
            CliError::Usage(_) => CompletionExitCode::UsageError,
            CliError::SpecFile(SpecFileError::FailedToRead { .. }) => CompletionExitCode::IoFailure,
            CliError::SpecFile(SpecFileError::FailedToParse { .. }) => CompletionExitCode::InvalidSpec,
            CliError::Generator(GeneratorError::InvalidSpec { .. }) => CompletionExitCode::InvalidSpec,
            CliError::Generator(GeneratorError::UnsupportedShell(_)) => {
                CompletionExitCode::UnsupportedShell
            }
            CliError::OutputExists(_) => CompletionExitCode::IoFailure,
            CliError::FailedToWrite { .. } => CompletionExitCode::IoFailure,
        }
    }
}
