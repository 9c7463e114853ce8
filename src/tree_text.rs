use crate::node::{is_file_name, Node};
use indexmap::IndexMap;

/// Parses indented, glyph-decorated tree text into a directory [`Node`].
///
/// Hierarchy is inferred from the width of each line's decoration prefix:
/// the characters `│ ├ └ ─`, spaces and tabs. Two decoration characters make
/// one nesting level, so plain two-space indentation and two-character glyph
/// prefixes both nest as drawn. Decoration wider than two characters per
/// depth still parses, but levels are skewed and returns to a shallower
/// depth may attach entries to the wrong parent; such input is not rejected
/// or corrected.
///
/// Text after a `//` marker is a comment. Blank lines are skipped. Parsing
/// never fails; garbage input produces a structure that is merely wrong.
pub fn parse_tree_text(text: &str) -> Node {
    let mut root: IndexMap<String, Node> = IndexMap::new();
    // ancestor chain currently open, one entry per level, leaf on top
    let mut stack: Vec<String> = Vec::new();
    let mut prev_level: Option<usize> = None;

    for raw in text.lines() {
        // drop a trailing `// comment`; the prefix keeps its indentation
        let line = raw.split("//").next().unwrap_or_default();
        if line.trim().is_empty() {
            continue;
        }

        let (level, prefix_end) = indent_level(line);
        let name = clean_name(&line[prefix_end..]);

        log::debug!("line '{}': level {}, name '{}'", raw, level, name);

        match prev_level {
            // sibling at the same level replaces the previous entry
            Some(prev) if level == prev => {
                stack.pop();
            }
            // returning to a shallower level drops everything below it and
            // the stale entry at the level itself
            Some(prev) if level < prev => {
                stack.truncate(level + 1);
                stack.pop();
            }
            // first line, or entering a deeper level: nothing to pop
            _ => {}
        }
        stack.push(name);
        prev_level = Some(level);

        insert_path(&mut root, &stack);
    }

    Node::Directory(root)
}

/// Counts the leading decoration characters and derives the nesting level.
///
/// Returns the level and the byte offset where the name begins. The count is
/// in characters, not bytes; the box-drawing glyphs are multi-byte.
fn indent_level(line: &str) -> (usize, usize) {
    lazy_static::lazy_static! {
        static ref DECORATION_PREFIX: regex::Regex =
            regex::Regex::new(r"^[│├└─ \t]*").expect("a valid regex pattern");
    }

    let prefix = DECORATION_PREFIX
        .find(line)
        .map(|m| m.as_str())
        .unwrap_or("");

    (prefix.chars().count() / 2, prefix.len())
}

fn clean_name(rest: &str) -> String {
    let trimmed = rest.trim();
    trimmed.strip_suffix('/').unwrap_or(trimmed).to_string()
}

/// Creates the ancestors named by `stack` and inserts its last entry.
///
/// Re-declared directories merge into the existing mapping; re-declared
/// files are overwritten with empty content.
fn insert_path(root: &mut IndexMap<String, Node>, stack: &[String]) {
    let Some((leaf, ancestors)) = stack.split_last() else {
        return;
    };

    let mut current = root;
    for part in ancestors {
        let slot = current.entry(part.clone()).or_insert_with(Node::empty_dir);
        if let Node::File(_) = slot {
            log::warn!("'{}' was declared as a file but has children", part);
            *slot = Node::empty_dir();
        }
        current = match slot {
            Node::Directory(children) => children,
            Node::File(_) => unreachable!("file slots were just replaced"),
        };
    }

    if is_file_name(leaf) {
        current.insert(leaf.clone(), Node::File(String::new()));
    } else {
        current.entry(leaf.clone()).or_insert_with(Node::empty_dir);
    }
}
