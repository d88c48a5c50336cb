use super::{sanitize, Node};
use crate::model::CommandSpec;

/// Name of the zsh completion function, e.g. `_my_tool` for `my-tool`.
fn function_name(command_name: &str) -> String {
    format!("_{}", sanitize(command_name))
}

pub(super) fn render(root: &CommandSpec, nodes: &[Node<'_>]) -> String {
    let function = function_name(&root.name);

    let mut script = format!("#compdef {}\n\n", root.name);
    script.push_str(&format!("{}() {{\n", function));
    script.push_str("    local cmd prev skip i\n");
    script.push_str("    local -a candidates\n");
    script.push_str("    cmd=\"s0\"\n");
    script.push_str("    skip=0\n");

    if nodes.iter().any(Node::has_transitions) {
        push_word_walk(&mut script, nodes);
    }

    script.push('\n');
    script.push_str("    prev=\"${words[CURRENT-1]}\"\n");
    script.push_str("    case \"${cmd}\" in\n");
    for node in nodes {
        push_node_completions(&mut script, node);
    }
    script.push_str("    esac\n\n");
    script.push_str(&format!(
        "    _describe -t candidates '{} command' candidates\n",
        root.name
    ));
    script.push_str("}\n\n");

    // Autoloaded from an fpath file named `_<command>`, funcstack[1] is that
    // file name and the completion system expects the function to run.
    // Sourced directly, the function registers itself instead.
    script.push_str(&format!("if [ \"$funcstack[1]\" = \"_{}\" ]; then\n", root.name));
    script.push_str(&format!("    {} \"$@\"\n", function));
    script.push_str("else\n");
    script.push_str(&format!("    compdef {} {}\n", function, root.name));
    script.push_str("fi\n");

    script
}

fn push_word_walk(script: &mut String, nodes: &[Node<'_>]) {
    script.push('\n');
    script.push_str("    for ((i = 2; i < CURRENT; i++)); do\n");
    script.push_str("        if (( skip )); then\n");
    script.push_str("            skip=0\n");
    script.push_str("            continue\n");
    script.push_str("        fi\n");
    script.push_str("        case \"${cmd},${words[i]}\" in\n");

    for node in nodes {
        for (name, child) in &node.children {
            script.push_str(&format!("            (\"{},{}\")\n", node.state, name));
            script.push_str(&format!("                cmd=\"{}\"\n", child));
            script.push_str("                ;;\n");
        }
        for option in node.command.options.iter().filter(|o| o.takes_value) {
            script.push_str(&format!("            (\"{},{}\")\n", node.state, option.flag));
            script.push_str("                skip=1\n");
            script.push_str("                ;;\n");
        }
    }

    script.push_str("        esac\n");
    script.push_str("    done\n");
}

fn push_node_completions(script: &mut String, node: &Node<'_>) {
    script.push_str(&format!("        (\"{}\")\n", node.state));

    let value_options: Vec<_> = node.command.options.iter().filter(|o| o.takes_value).collect();
    if !value_options.is_empty() {
        script.push_str("            case \"${prev}\" in\n");
        for option in value_options {
            script.push_str(&format!("                (\"{}\")\n", option.flag));
            if option.completes_files() {
                script.push_str("                    _files\n");
            } else {
                let choices: Vec<String> = option
                    .value_choices
                    .iter()
                    .map(|choice| format!("'{}'", choice))
                    .collect();
                script.push_str(&format!("                    compadd -- {}\n", choices.join(" ")));
            }
            script.push_str("                    return\n");
            script.push_str("                    ;;\n");
        }
        script.push_str("            esac\n");
    }

    let command = node.command;
    let described = command
        .subcommands
        .iter()
        .map(|s| describe_entry(&s.name, s.description.as_deref()))
        .chain(
            command
                .options
                .iter()
                .map(|o| describe_entry(&o.flag, o.description.as_deref())),
        );

    script.push_str("            candidates=(\n");
    for entry in described {
        script.push_str(&format!("                {}\n", entry));
    }
    script.push_str("            )\n");
    script.push_str("            ;;\n");
}

/// One `_describe` item: `'word:description'`, single-quoted.
fn describe_entry(word: &str, description: Option<&str>) -> String {
    match description.map(single_line).filter(|d| !d.is_empty()) {
        Some(description) => format!("'{}:{}'", word, description.replace('\'', "'\\''")),
        None => format!("'{}'", word),
    }
}

fn single_line(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
