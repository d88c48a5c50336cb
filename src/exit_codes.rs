//! Exit codes for the completiongen binary
//!
//! The codes for spec, shell and I/O failures are fixed so that scripts can
//! tell them apart. Usage errors follow the BSD sysexits.h convention.

/// Exit codes reported by `completiongen`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompletionExitCode {
    /// Success (0) - Script generated and written
    Success = 0,

    /// Invalid spec (1) - The command spec is malformed or inconsistent
    InvalidSpec = 1,

    /// Unsupported shell (2) - No generator exists for the requested shell
    UnsupportedShell = 2,

    /// I/O failure (3) - Reading the spec or writing the script failed
    IoFailure = 3,

    /// Command line usage error (64) - User input error
    UsageError = exitcode::USAGE as isize,
}

impl CompletionExitCode {
    /// Convert to numeric exit code
    pub fn code(&self) -> i32 {
        *self as i32
    }

    /// Get descriptive message for the exit code
    pub fn message(&self) -> &'static str {
        match self {
            CompletionExitCode::Success => "Success",
            CompletionExitCode::InvalidSpec => "Invalid command spec",
            CompletionExitCode::UnsupportedShell => "Unsupported shell",
            CompletionExitCode::IoFailure => "Input/output failure",
            CompletionExitCode::UsageError => "Command line usage error",
        }
    }
}

impl From<CompletionExitCode> for i32 {
    fn from(code: CompletionExitCode) -> Self {
        code.code()
    }
}
