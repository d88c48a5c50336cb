//! Completion script generation.
//!
//! Both renderers emit a script that walks the words typed so far and keeps a
//! *state*: the depth-first index of the command entered last, written `s<N>`.
//! The state selects which candidates are offered for the word under the
//! cursor. States never contain a comma, so `<state>,<word>` lookup keys are
//! unambiguous whatever the command names are.

mod bash;
mod zsh;

use tracing::debug;

use crate::error::GeneratorError;
use crate::model::CommandSpec;
use crate::shell::ShellKind;
use crate::validation::validate;

/// Generates a completion script for `root` in the given shell dialect.
///
/// The tree is validated first. Output depends only on the inputs: the same
/// tree and shell always produce byte-identical text.
pub fn generate(root: &CommandSpec, shell: ShellKind) -> Result<String, GeneratorError> {
    if !shell.is_supported() {
        return Err(GeneratorError::UnsupportedShell(shell.to_string()));
    }

    validate(root)?;

    let nodes = nodes(root);
    debug!(
        "Generating {} completions for '{}' ({} command nodes)",
        shell,
        root.name,
        nodes.len()
    );

    match shell {
        ShellKind::Bash => Ok(bash::render(root, &nodes)),
        ShellKind::Zsh => Ok(zsh::render(root, &nodes)),
        other => Err(GeneratorError::UnsupportedShell(other.to_string())),
    }
}

/// Name of the bash completion function for `command_name`,
/// e.g. `_my_tool_completions` for `my-tool`.
pub fn function_name(command_name: &str) -> String {
    format!("_{}_completions", sanitize(command_name))
}

/// Replaces every character outside `[A-Za-z0-9_]` with `_`.
fn sanitize(command_name: &str) -> String {
    command_name
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '_' { c } else { '_' })
        .collect()
}

/// A command in the tree together with its state key.
struct Node<'a> {
    state: String,
    command: &'a CommandSpec,
    /// `(subcommand name, subcommand state)`, in input order.
    children: Vec<(&'a str, String)>,
}

impl<'a> Node<'a> {
    /// Subcommand names followed by option flags, in input order.
    fn candidates(&self) -> impl Iterator<Item = &'a str> {
        let command = self.command;
        command
            .subcommands
            .iter()
            .map(|s| s.name.as_str())
            .chain(command.options.iter().map(|o| o.flag.as_str()))
    }

    fn has_transitions(&self) -> bool {
        !self.command.subcommands.is_empty() || self.command.options.iter().any(|o| o.takes_value)
    }
}

fn state_key(index: usize) -> String {
    format!("s{}", index)
}

/// Flattens the tree depth-first; the root is always `s0`.
fn nodes(root: &CommandSpec) -> Vec<Node<'_>> {
    let mut nodes = Vec::new();
    collect(root, &mut nodes);
    nodes
}

fn collect<'a>(command: &'a CommandSpec, nodes: &mut Vec<Node<'a>>) -> usize {
    let index = nodes.len();
    nodes.push(Node {
        state: state_key(index),
        command,
        children: Vec::new(),
    });

    for subcommand in &command.subcommands {
        let child = collect(subcommand, nodes);
        nodes[index]
            .children
            .push((subcommand.name.as_str(), state_key(child)));
    }

    index
}
