use super::{function_name, Node};
use crate::model::CommandSpec;

const INDENT: &str = "    ";

pub(super) fn render(root: &CommandSpec, nodes: &[Node<'_>]) -> String {
    let function = function_name(&root.name);

    let mut script = format!("# bash completion for {}\n\n", root.name);
    script.push_str(&format!("{}() {{\n", function));
    script.push_str("    local cur prev cmd skip i\n");
    script.push_str("    COMPREPLY=()\n");
    script.push_str("    cur=\"${COMP_WORDS[COMP_CWORD]}\"\n");
    script.push_str("    prev=\"${COMP_WORDS[COMP_CWORD-1]}\"\n");
    script.push_str("    cmd=\"s0\"\n");
    script.push_str("    skip=0\n");

    if nodes.iter().any(Node::has_transitions) {
        push_word_walk(&mut script, nodes);
    }

    script.push('\n');
    script.push_str("    case \"${cmd}\" in\n");
    for node in nodes {
        push_node_completions(&mut script, node);
    }
    script.push_str("    esac\n");
    script.push_str("    return 0\n");
    script.push_str("}\n\n");
    script.push_str(&format!(
        "complete -F {} -o bashdefault -o default {}\n",
        function, root.name
    ));

    script
}

/// Replays the words before the cursor to find the current state, skipping
/// the value that follows an option taking one.
fn push_word_walk(script: &mut String, nodes: &[Node<'_>]) {
    script.push('\n');
    script.push_str("    for ((i = 1; i < COMP_CWORD; i++)); do\n");
    script.push_str("        if [[ ${skip} -eq 1 ]]; then\n");
    script.push_str("            skip=0\n");
    script.push_str("            continue\n");
    script.push_str("        fi\n");
    script.push_str("        case \"${cmd},${COMP_WORDS[i]}\" in\n");

    let pad = INDENT.repeat(3);
    for node in nodes {
        for (name, child) in &node.children {
            script.push_str(&format!("{}\"{},{}\")\n", pad, node.state, name));
            script.push_str(&format!("{}    cmd=\"{}\"\n", pad, child));
            script.push_str(&format!("{}    ;;\n", pad));
        }
        for option in node.command.options.iter().filter(|o| o.takes_value) {
            script.push_str(&format!("{}\"{},{}\")\n", pad, node.state, option.flag));
            script.push_str(&format!("{}    skip=1\n", pad));
            script.push_str(&format!("{}    ;;\n", pad));
        }
    }

    script.push_str("        esac\n");
    script.push_str("    done\n");
}

fn push_node_completions(script: &mut String, node: &Node<'_>) {
    script.push_str(&format!("        \"{}\")\n", node.state));

    let value_options: Vec<_> = node.command.options.iter().filter(|o| o.takes_value).collect();
    if !value_options.is_empty() {
        script.push_str("            case \"${prev}\" in\n");
        for option in value_options {
            script.push_str(&format!("                \"{}\")\n", option.flag));
            if option.completes_files() {
                script.push_str("                    COMPREPLY=( $(compgen -f -- \"${cur}\") )\n");
            } else {
                script.push_str(&format!(
                    "                    COMPREPLY=( $(compgen -W \"{}\" -- \"${{cur}}\") )\n",
                    option.value_choices.join(" ")
                ));
            }
            script.push_str("                    return 0\n");
            script.push_str("                    ;;\n");
        }
        script.push_str("            esac\n");
    }

    let words: Vec<&str> = node.candidates().collect();
    script.push_str(&format!(
        "            COMPREPLY=( $(compgen -W \"{}\" -- \"${{cur}}\") )\n",
        words.join(" ")
    ));
    script.push_str("            ;;\n");
}
