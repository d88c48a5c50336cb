//! Shell dialects known to the generator.

use std::str::FromStr;

use strum::{AsRefStr, Display, EnumIter, EnumString, IntoEnumIterator, IntoStaticStr};

use crate::error::GeneratorError;

/// Shells recognized by name. Only [`ShellKind::Bash`] and [`ShellKind::Zsh`]
/// have a script renderer; the others are rejected by
/// [`generate`](crate::generator::generate) with `UnsupportedShell`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, Display, EnumIter, EnumString, IntoStaticStr)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum ShellKind {
    Bash,
    Zsh,
    Fish,
    #[strum(to_string = "powershell", serialize = "pwsh")]
    PowerShell,
    Elvish,
}

impl ShellKind {
    pub fn is_supported(&self) -> bool {
        matches!(self, ShellKind::Bash | ShellKind::Zsh)
    }

    /// Names of the shells a script can be generated for
    pub fn supported_names() -> Vec<&'static str> {
        ShellKind::iter()
            .filter(ShellKind::is_supported)
            .map(<&'static str>::from)
            .collect()
    }

    /// Parses a shell name, failing with `UnsupportedShell` for unknown names.
    pub fn parse(name: &str) -> Result<ShellKind, GeneratorError> {
        ShellKind::from_str(name.trim())
            .map_err(|_| GeneratorError::UnsupportedShell(name.to_string()))
    }
}
