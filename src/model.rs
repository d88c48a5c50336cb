//! Command-line interface description consumed by the generator.
//!
//! A [`CommandSpec`] tree is built once, either through the chained builder
//! methods below or by deserializing a spec file, and then borrowed read-only
//! by [`crate::generator::generate`].

use serde::{Deserialize, Serialize};

/// A command or subcommand together with the options it accepts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CommandSpec {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub subcommands: Vec<CommandSpec>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<OptionSpec>,
}

impl CommandSpec {
    pub fn new<S: Into<String>>(name: S) -> CommandSpec {
        CommandSpec {
            name: name.into(),
            description: None,
            subcommands: Vec::new(),
            options: Vec::new(),
        }
    }

    pub fn with_description<S: Into<String>>(mut self, description: S) -> CommandSpec {
        self.description = Some(description.into());
        self
    }

    pub fn with_subcommand(mut self, subcommand: CommandSpec) -> CommandSpec {
        self.subcommands.push(subcommand);
        self
    }

    pub fn with_option(mut self, option: OptionSpec) -> CommandSpec {
        self.options.push(option);
        self
    }

    pub fn find_subcommand(&self, name: &str) -> Option<&CommandSpec> {
        self.subcommands.iter().find(|s| s.name == name)
    }

    pub fn find_option(&self, flag: &str) -> Option<&OptionSpec> {
        self.options.iter().find(|o| o.flag == flag)
    }
}

/// A flag accepted by a command, optionally followed by a value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OptionSpec {
    pub flag: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, alias = "takesValue")]
    pub takes_value: bool,
    /// Literal completion candidates for the value. Empty means free-form.
    #[serde(default, alias = "valueChoices", skip_serializing_if = "Vec::is_empty")]
    pub value_choices: Vec<String>,
}

impl OptionSpec {
    /// A boolean switch such as `--force`.
    pub fn switch<S: Into<String>>(flag: S) -> OptionSpec {
        OptionSpec {
            flag: flag.into(),
            description: None,
            takes_value: false,
            value_choices: Vec::new(),
        }
    }

    /// An option taking a free-form value; completed as a file path.
    pub fn with_value<S: Into<String>>(flag: S) -> OptionSpec {
        OptionSpec {
            takes_value: true,
            ..OptionSpec::switch(flag)
        }
    }

    /// An option whose value is one of a fixed list of choices.
    pub fn with_choices<S, I, C>(flag: S, choices: I) -> OptionSpec
    where
        S: Into<String>,
        I: IntoIterator<Item = C>,
        C: Into<String>,
    {
        OptionSpec {
            value_choices: choices.into_iter().map(Into::into).collect(),
            ..OptionSpec::with_value(flag)
        }
    }

    pub fn with_description<S: Into<String>>(mut self, description: S) -> OptionSpec {
        self.description = Some(description.into());
        self
    }

    /// True when the value should fall back to file-path completion.
    pub fn completes_files(&self) -> bool {
        self.takes_value && self.value_choices.is_empty()
    }
}
