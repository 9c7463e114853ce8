// Integration testing can be done either by calling library functions directly or by invoking your CLI as a subprocess.
use sapling::{create_project_structure, parse_structure};

#[test]
fn help_describes_the_supported_formats() {
    let mut cmd = assert_cmd::Command::cargo_bin("sapling").unwrap();

    cmd.arg("--help");

    cmd.assert()
        .success()
        .stdout(predicates::str::contains("JSON"));
}

#[test]
fn version_is_reported() {
    let mut cmd = assert_cmd::Command::cargo_bin("sapling").unwrap();

    cmd.arg("--version");

    cmd.assert()
        .success()
        .stdout(predicates::str::contains("sapling"));
}

#[test]
fn tree_text_input_materializes_on_disk() {
    let base = tempfile::tempdir().unwrap();

    let structure = parse_structure("src\n  main.py\n  utils\n    helper.py\n");
    let report = create_project_structure(base.path(), &structure).unwrap();

    assert_eq!(report.failures().count(), 0);
    assert!(base.path().join("src").is_dir());
    assert!(base.path().join("src").join("main.py").is_file());
    assert!(base.path().join("src").join("utils").is_dir());
    assert!(base.path().join("src").join("utils").join("helper.py").is_file());
}

#[test]
fn json_input_materializes_on_disk() {
    let base = tempfile::tempdir().unwrap();

    let structure = parse_structure(r##"{"docs": {"index.md": "# Hello"}, "empty": {}}"##);
    create_project_structure(base.path(), &structure).unwrap();

    assert!(base.path().join("empty").is_dir());
    let index = base.path().join("docs").join("index.md");
    assert_eq!(std::fs::read_to_string(index).unwrap(), "# Hello");
}

#[test]
fn yaml_input_materializes_on_disk() {
    let base = tempfile::tempdir().unwrap();

    let structure = parse_structure("config:\n  settings.toml: \"[section]\"\n");
    create_project_structure(base.path(), &structure).unwrap();

    let settings = base.path().join("config").join("settings.toml");
    assert_eq!(std::fs::read_to_string(settings).unwrap(), "[section]");
}

#[test]
fn non_mapping_input_is_rejected_by_the_materializer() {
    let base = tempfile::tempdir().unwrap();

    // valid JSON, but a bare string has no names to create
    let structure = parse_structure(r#""just a string""#);

    assert!(create_project_structure(base.path(), &structure).is_err());
}
