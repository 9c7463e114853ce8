use crate::node::Node;
use crate::tree_text;

/// Parses structure text in whichever format it happens to be.
///
/// Formats are tried in order: JSON (any decodable value is accepted), YAML
/// (accepted only when the document is a mapping), and finally the tree-text
/// parser, which always produces something. This function never fails; a
/// format that does not apply is logged and the next one is tried.
///
/// The returned root is a directory for every input the tree-text parser
/// handles; JSON input may decode to a bare string or other non-mapping
/// value, which comes back as a file node and is rejected later by the
/// materializer.
pub fn parse_structure(input: &str) -> Node {
    match serde_json::from_str::<serde_json::Value>(input) {
        Ok(value) => {
            log::info!("input parsed as JSON");
            return Node::from_json(value).unwrap_or_else(|| {
                log::warn!("top-level JSON value is not a mapping, string, or null");
                Node::File(String::new())
            });
        }
        Err(error) => log::debug!("not JSON ({}); trying YAML", error),
    }

    match serde_yaml::from_str::<serde_yaml::Value>(input) {
        Ok(serde_yaml::Value::Mapping(mapping)) => {
            log::info!("input parsed as a YAML mapping");
            return Node::from_yaml_mapping(mapping);
        }
        Ok(_) => log::debug!("YAML document is not a mapping; trying tree text"),
        Err(error) => log::debug!("not YAML ({}); trying tree text", error),
    }

    log::info!("treating input as tree text");
    tree_text::parse_tree_text(input)
}

#[cfg(test)]
mod tests {
    use super::*;
    use indexmap::IndexMap;

    fn dir(entries: Vec<(&str, Node)>) -> Node {
        Node::Directory(
            entries
                .into_iter()
                .map(|(name, node)| (name.to_string(), node))
                .collect(),
        )
    }

    #[test]
    fn json_object_is_returned_as_decoded() {
        let parsed = parse_structure(r#"{"x": {"y.txt": ""}}"#);

        let expected = dir(vec![(
            "x",
            dir(vec![("y.txt", Node::File(String::new()))]),
        )]);

        assert_eq!(parsed, expected);
    }

    #[test]
    fn json_round_trips_through_the_node_model() {
        let text = r#"{"src": {"main.rs": "fn main() {}"}, "notes.txt": null}"#;

        let direct = Node::from_json(serde_json::from_str(text).unwrap()).unwrap();

        assert_eq!(parse_structure(text), direct);
    }

    #[test]
    fn json_top_level_string_becomes_a_file_root() {
        // quoted, so it decodes as JSON before the fallback ever runs
        assert_eq!(parse_structure(r#""a.txt""#), Node::File("a.txt".into()));
    }

    #[test]
    fn yaml_mapping_is_accepted() {
        let parsed = parse_structure("key: value");

        assert_eq!(parsed, dir(vec![("key", Node::File("value".into()))]));
    }

    #[test]
    fn nested_yaml_mapping_is_accepted() {
        let parsed = parse_structure("src:\n  main.py:\n");

        let expected = dir(vec![(
            "src",
            dir(vec![("main.py", Node::File(String::new()))]),
        )]);

        assert_eq!(parsed, expected);
    }

    #[test]
    fn non_mapping_yaml_falls_back_to_tree_text() {
        // a YAML sequence decodes, but only mappings are accepted
        let parsed = parse_structure("- one\n- two\n");

        let Node::Directory(children) = parsed else {
            panic!("tree-text fallback always produces a directory root");
        };
        let keys: Vec<&String> = children.keys().collect();
        assert_eq!(keys, ["- one", "- two"]);
    }

    #[test]
    fn bare_name_falls_back_to_tree_text() {
        let parsed = parse_structure("a.txt");

        let mut expected = IndexMap::new();
        expected.insert("a.txt".to_string(), Node::File(String::new()));
        assert_eq!(parsed, Node::Directory(expected));
    }

    #[test]
    fn indented_tree_falls_back_to_tree_text() {
        let parsed = parse_structure("src\n  main.py\n  utils\n    helper.py\n");

        let expected = dir(vec![(
            "src",
            dir(vec![
                ("main.py", Node::File(String::new())),
                (
                    "utils",
                    dir(vec![("helper.py", Node::File(String::new()))]),
                ),
            ]),
        )]);

        assert_eq!(parsed, expected);
    }
}
