use indexmap::IndexMap;
use serde::Serialize;

/// Returns whether `name` denotes a file rather than a directory.
///
/// The rule is purely syntactic: a name is a file iff it contains a `.` and
/// does not end with `/`. Dotted directory names and extension-less files are
/// deliberately misclassified; the input format has no way to express them.
pub fn is_file_name(name: &str) -> bool {
    name.contains('.') && !name.ends_with('/')
}

/// One entry in a parsed structure: a directory with named children, or a
/// file with a text payload.
///
/// Child order follows insertion order so that a structure materializes the
/// same way every time it is parsed. Serializes untagged, so a `Node` tree
/// renders as the plain nested mapping it was parsed from.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Node {
    /// A mapping from child name to child node.
    Directory(IndexMap<String, Node>),
    /// A text payload, possibly empty. No children.
    File(String),
}

impl Node {
    pub fn empty_dir() -> Self {
        Node::Directory(IndexMap::new())
    }

    /// Converts a decoded JSON value into a node.
    ///
    /// Objects become directories and strings become files; `null` is an
    /// empty file. Numbers, booleans and arrays cannot name a file or a
    /// directory, so they yield `None`; inside an object such values are
    /// dropped with a warning rather than failing the whole conversion.
    pub fn from_json(value: serde_json::Value) -> Option<Node> {
        match value {
            serde_json::Value::Object(object) => {
                let mut children = IndexMap::new();
                for (name, value) in object {
                    match Node::from_json(value) {
                        Some(node) => {
                            children.insert(name, node);
                        }
                        None => {
                            log::warn!(
                                "ignoring '{}': value is not a mapping, string, or null",
                                name
                            );
                        }
                    }
                }
                Some(Node::Directory(children))
            }
            serde_json::Value::String(contents) => Some(Node::File(contents)),
            serde_json::Value::Null => Some(Node::File(String::new())),
            _ => None,
        }
    }

    /// Converts a decoded YAML mapping into a directory node.
    ///
    /// Only string keys can name entries; anything else is dropped with a
    /// warning. Values follow the same rules as [`Node::from_json`].
    pub fn from_yaml_mapping(mapping: serde_yaml::Mapping) -> Node {
        let mut children = IndexMap::new();
        for (key, value) in mapping {
            let Some(name) = key.as_str().map(str::to_string) else {
                log::warn!("ignoring non-string YAML key {:?}", key);
                continue;
            };
            match Node::from_yaml(value) {
                Some(node) => {
                    children.insert(name, node);
                }
                None => {
                    log::warn!(
                        "ignoring '{}': value is not a mapping, string, or null",
                        name
                    );
                }
            }
        }
        Node::Directory(children)
    }

    fn from_yaml(value: serde_yaml::Value) -> Option<Node> {
        match value {
            serde_yaml::Value::Mapping(mapping) => Some(Node::from_yaml_mapping(mapping)),
            serde_yaml::Value::String(contents) => Some(Node::File(contents)),
            serde_yaml::Value::Null => Some(Node::File(String::new())),
            _ => None,
        }
    }
}
