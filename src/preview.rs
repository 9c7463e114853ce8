use crate::node::Node;
use colored::Colorize;
use std::path::Path;

/// Print the parsed structure as a tree rooted at the destination, with a
/// nice ASCII style.
pub fn print_tree(structure: &Node, destination: &Path) {
    // the root line shows the destination directory's own name
    let root_name = destination
        .file_name()
        .map(|os| os.to_string_lossy().to_string())
        .unwrap_or_else(|| destination.display().to_string());

    println!(
        "Legend: {} = (directory), {} = (file)",
        "blue".blue(),
        "green".green()
    );

    let fancy_prompt = format!("{} {}\n", "┌─".bold().bright_blue(), "Preview".bold().bright_blue());

    println!("{}", fancy_prompt);

    println!("{}", root_name.blue());
    if let Node::Directory(children) = structure {
        let len = children.len();
        for (i, (name, node)) in children.iter().enumerate() {
            print_node(name, node, "", i == len - 1);
        }
    }
    println!();
}

fn print_node(name: &str, node: &Node, prefix: &str, is_last: bool) {
    let connector = if is_last {
        "└── ".yellow()
    } else {
        "├── ".yellow()
    };
    let label = match node {
        Node::Directory(_) => name.blue(),
        Node::File(_) => name.green(),
    };
    println!("{}{}{}", prefix.yellow(), connector, label);

    if let Node::Directory(children) = node {
        let child_prefix = if is_last {
            format!("{}    ", prefix)
        } else {
            format!("{}│   ", prefix)
        };

        let len = children.len();
        for (i, (child_name, child)) in children.iter().enumerate() {
            print_node(child_name, child, &child_prefix, i == len - 1);
        }
    }
}
