use crate::{
    tree::{Content, Tree},
    utils::is_dir_marker,
};
use colored::Colorize;

/// Renders one level of `tree` beneath `prefix`, recursing into nested trees.
fn render_children(out: &mut String, tree: &Tree, prefix: &str) {
    let len = tree.len();

    for (i, (name, content)) in tree.iter().enumerate() {
        let is_last = i == len - 1;

        let connector = if is_last {
            "└── ".yellow()
        } else {
            "├── ".yellow()
        };
        let label = if is_dir_marker(name) {
            name.blue()
        } else {
            name.green()
        };
        out.push_str(&format!("{}{}{}\n", prefix.yellow(), connector, label));

        if let Content::Nested(children) = content {
            let child_prefix = if is_last {
                format!("{}    ", prefix)
            } else {
                format!("{}│   ", prefix)
            };
            render_children(out, children, &child_prefix);
        }
    }
}

/// Renders `tree` as an ASCII tree headed by `root`.
///
/// Directories are blue, files are green.
pub fn render_tree(tree: &Tree, root: &str) -> String {
    let mut out = String::new();

    out.push_str(&format!("{}\n", root.bold().blue()));
    render_children(&mut out, tree, "");

    out
}

pub fn preview_as_tree(tree: &Tree, root: &str) {
    println!(
        "Legend: {} = (directory), {} = (file)",
        "blue".blue(),
        "green".green()
    );

    let fancy_prompt = format!(
        "{} {}\n",
        "┌─".bold().bright_blue(),
        "Preview".bold().bright_blue(),
    );

    println!("{}", fancy_prompt);

    print!("{}", render_tree(tree, root));
}
