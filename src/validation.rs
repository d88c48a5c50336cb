//! Structural checks run before a script is generated.
//!
//! Validation stops at the first violation; the returned error carries the
//! command path of the node that broke the rule.
//!
//! Names, flags and choices are emitted as bare words, so they are limited to
//! characters the shells leave alone: no quotes, expansions, globs, braces or
//! tilde. `:` and `=` are refused too, because bash splits the word under the
//! cursor on them (`COMP_WORDBREAKS`).

use std::collections::HashSet;

use tracing::trace;

use crate::error::{GeneratorError, SpecViolation};
use crate::model::{CommandSpec, OptionSpec};

const FORBIDDEN_CHARACTERS: [char; 14] = [
    '\'', '"', '\\', '$', '`', '*', '?', '[', ']', '{', '}', '~', ':', '=',
];

pub fn validate(root: &CommandSpec) -> Result<(), GeneratorError> {
    let mut path = Vec::new();
    validate_command(root, &mut path)
}

fn validate_command<'a>(
    command: &'a CommandSpec,
    path: &mut Vec<&'a str>,
) -> Result<(), GeneratorError> {
    path.push(command.name.as_str());
    trace!("Validating command '{}'", path.join(" "));

    check_name(&command.name).map_err(|violation| invalid(path, None, violation))?;

    let mut flags = HashSet::new();
    for option in &command.options {
        validate_option(option).map_err(|violation| invalid(path, Some(option.flag.as_str()), violation))?;
        if !flags.insert(option.flag.as_str()) {
            return Err(invalid(
                path,
                None,
                SpecViolation::DuplicateFlag {
                    flag: option.flag.clone(),
                },
            ));
        }
    }

    let mut names = HashSet::new();
    for subcommand in &command.subcommands {
        if !subcommand.name.is_empty() && !names.insert(subcommand.name.as_str()) {
            return Err(invalid(
                path,
                None,
                SpecViolation::DuplicateSubcommand {
                    name: subcommand.name.clone(),
                },
            ));
        }
        validate_command(subcommand, path)?;
    }

    path.pop();
    Ok(())
}

fn validate_option(option: &OptionSpec) -> Result<(), SpecViolation> {
    check_flag(&option.flag)?;

    if !option.takes_value && !option.value_choices.is_empty() {
        return Err(SpecViolation::ChoicesWithoutValue {
            flag: option.flag.clone(),
        });
    }

    let mut seen = HashSet::new();
    for choice in &option.value_choices {
        if choice.is_empty() {
            return Err(SpecViolation::EmptyChoice {
                flag: option.flag.clone(),
            });
        }
        check_word(choice)?;
        if !seen.insert(choice.as_str()) {
            return Err(SpecViolation::DuplicateChoice {
                flag: option.flag.clone(),
                choice: choice.clone(),
            });
        }
    }

    Ok(())
}

fn check_flag(flag: &str) -> Result<(), SpecViolation> {
    let body = flag
        .strip_prefix("--")
        .or_else(|| flag.strip_prefix('-'))
        .ok_or_else(|| SpecViolation::MalformedFlag {
            flag: flag.to_string(),
        })?;

    if body.is_empty() || body.starts_with('-') {
        return Err(SpecViolation::MalformedFlag {
            flag: flag.to_string(),
        });
    }

    check_word(flag)
}

fn check_name(name: &str) -> Result<(), SpecViolation> {
    if name.starts_with('-') {
        return Err(SpecViolation::NameLooksLikeFlag {
            name: name.to_string(),
        });
    }
    check_word(name)
}

/// A word is emitted literally, so it must be a single shell token.
fn check_word(word: &str) -> Result<(), SpecViolation> {
    if word.is_empty() {
        return Err(SpecViolation::EmptyName);
    }
    if word.chars().any(char::is_whitespace) {
        return Err(SpecViolation::ContainsWhitespace {
            value: word.to_string(),
        });
    }
    if let Some(character) = word.chars().find(|c| FORBIDDEN_CHARACTERS.contains(c)) {
        return Err(SpecViolation::ForbiddenCharacter {
            value: word.to_string(),
            character,
        });
    }
    Ok(())
}

fn invalid(path: &[&str], flag: Option<&str>, violation: SpecViolation) -> GeneratorError {
    let mut path = path.join(" ");
    if let Some(flag) = flag {
        path.push(' ');
        path.push_str(flag);
    }
    GeneratorError::InvalidSpec { path, violation }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn violation_of(spec: &CommandSpec) -> (String, SpecViolation) {
        match validate(spec) {
            Err(GeneratorError::InvalidSpec { path, violation }) => (path, violation),
            other => panic!("expected InvalidSpec, got {:?}", other),
        }
    }

    #[test]
    fn test_valid_tree_passes() {
        let spec = CommandSpec::new("completiongen")
            .with_option(OptionSpec::with_choices("--shell", ["bash", "zsh"]))
            .with_option(OptionSpec::with_value("--spec"))
            .with_option(OptionSpec::switch("-v"))
            .with_subcommand(CommandSpec::new("add").with_option(OptionSpec::switch("--force")))
            .with_subcommand(CommandSpec::new("remove").with_option(OptionSpec::switch("--force")));

        assert!(validate(&spec).is_ok());
    }

    #[test]
    fn test_duplicate_subcommand() {
        let spec = CommandSpec::new("tool")
            .with_subcommand(CommandSpec::new("add"))
            .with_subcommand(CommandSpec::new("add"));

        let (path, violation) = violation_of(&spec);
        assert_eq!(path, "tool");
        assert_eq!(
            violation,
            SpecViolation::DuplicateSubcommand {
                name: "add".to_string()
            }
        );
    }

    #[test]
    fn test_duplicate_flag_reports_nested_path() {
        let spec = CommandSpec::new("git").with_subcommand(
            CommandSpec::new("remote").with_subcommand(
                CommandSpec::new("add")
                    .with_option(OptionSpec::switch("--fetch"))
                    .with_option(OptionSpec::with_value("--fetch")),
            ),
        );

        let (path, violation) = violation_of(&spec);
        assert_eq!(path, "git remote add");
        assert_eq!(
            violation,
            SpecViolation::DuplicateFlag {
                flag: "--fetch".to_string()
            }
        );
    }

    #[test]
    fn test_empty_and_whitespace_names() {
        let (path, violation) = violation_of(&CommandSpec::new(""));
        assert_eq!(path, "");
        assert_eq!(violation, SpecViolation::EmptyName);

        let spec = CommandSpec::new("tool").with_subcommand(CommandSpec::new("two words"));
        let (path, violation) = violation_of(&spec);
        assert_eq!(path, "tool two words");
        assert!(matches!(violation, SpecViolation::ContainsWhitespace { .. }));
    }

    #[test]
    fn test_malformed_flags() {
        for flag in ["force", "-", "--", "---force", "--for ce", "--$HOME"] {
            let spec = CommandSpec::new("tool").with_option(OptionSpec::switch(flag));
            let (path, violation) = violation_of(&spec);
            assert_eq!(path, format!("tool {}", flag));
            assert!(
                matches!(
                    violation,
                    SpecViolation::MalformedFlag { .. }
                        | SpecViolation::ContainsWhitespace { .. }
                        | SpecViolation::ForbiddenCharacter { .. }
                ),
                "flag {:?} produced {:?}",
                flag,
                violation
            );
        }

        for flag in ["-f", "--force", "--dry-run", "-vv"] {
            let spec = CommandSpec::new("tool").with_option(OptionSpec::switch(flag));
            assert!(validate(&spec).is_ok(), "flag {:?} should be accepted", flag);
        }
    }

    #[test]
    fn test_choice_rules() {
        let mut option = OptionSpec::with_choices("--shell", ["bash"]);
        option.takes_value = false;
        let spec = CommandSpec::new("tool").with_option(option);
        assert!(matches!(violation_of(&spec).1, SpecViolation::ChoicesWithoutValue { .. }));

        let spec = CommandSpec::new("tool").with_option(OptionSpec::with_choices("--shell", ["bash", ""]));
        assert!(matches!(violation_of(&spec).1, SpecViolation::EmptyChoice { .. }));

        let spec =
            CommandSpec::new("tool").with_option(OptionSpec::with_choices("--shell", ["bash", "bash"]));
        let (path, violation) = violation_of(&spec);
        assert_eq!(path, "tool --shell");
        assert!(matches!(violation, SpecViolation::DuplicateChoice { .. }));
    }

    #[test]
    fn test_expanding_characters_are_rejected() {
        for choice in ["*", "{x,y}", "~", "file?", "[ab]"] {
            let spec = CommandSpec::new("tool").with_option(OptionSpec::with_choices("--pick", ["a", choice]));
            let (path, violation) = violation_of(&spec);
            assert_eq!(path, "tool --pick");
            assert!(
                matches!(violation, SpecViolation::ForbiddenCharacter { .. }),
                "choice {:?} produced {:?}",
                choice,
                violation
            );
        }
    }

    #[test]
    fn test_word_break_characters_are_rejected() {
        let spec = CommandSpec::new("tool").with_option(OptionSpec::with_choices("--url", ["http:x"]));
        assert_eq!(
            violation_of(&spec).1,
            SpecViolation::ForbiddenCharacter {
                value: "http:x".to_string(),
                character: ':'
            }
        );

        let spec = CommandSpec::new("tool").with_option(OptionSpec::switch("--mode=fast"));
        assert!(matches!(violation_of(&spec).1, SpecViolation::ForbiddenCharacter { character: '=', .. }));

        let spec = CommandSpec::new("tool").with_subcommand(CommandSpec::new("ns:run"));
        assert_eq!(violation_of(&spec).0, "tool ns:run");
    }

    #[test]
    fn test_subcommand_names_cannot_look_like_flags() {
        let spec = CommandSpec::new("tool").with_subcommand(CommandSpec::new("--add"));
        let (path, violation) = violation_of(&spec);
        assert_eq!(path, "tool --add");
        assert_eq!(
            violation,
            SpecViolation::NameLooksLikeFlag {
                name: "--add".to_string()
            }
        );

        let spec = CommandSpec::new("tool").with_subcommand(CommandSpec::new("b__c"));
        assert!(validate(&spec).is_ok());
    }
}
