use crate::errors::{FileOperation, IoError};
use crate::node::Node;
use colored::Colorize;
use indexmap::IndexMap;
use miette::Diagnostic;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error, Diagnostic)]
pub enum MaterializeError {
    #[error("top-level structure is not a directory mapping")]
    #[diagnostic(
        code(sapling::materialize::root_not_directory),
        help("The input must decode to a mapping of names to entries, e.g. {{\"src\": {{\"main.rs\": \"\"}}}}.")
    )]
    RootNotDirectory,

    #[error("could not create the base directory")]
    #[diagnostic(code(sapling::materialize::base_dir))]
    BaseDir(#[from] IoError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Directory,
    File,
}

/// The fate of one directory or file the materializer attempted to create.
#[derive(Debug)]
pub struct EntryOutcome {
    pub path: PathBuf,
    pub kind: EntryKind,
    pub result: Result<(), IoError>,
}

/// Per-path outcomes of one materialization run, in creation order.
///
/// Creation is best-effort: a failed entry is recorded here and its siblings
/// are still processed, so a report can mix successes and failures.
#[derive(Debug, Default)]
pub struct CreationReport {
    pub outcomes: Vec<EntryOutcome>,
}

impl CreationReport {
    pub fn created_count(&self) -> usize {
        self.outcomes.iter().filter(|o| o.result.is_ok()).count()
    }

    pub fn failures(&self) -> impl Iterator<Item = &EntryOutcome> {
        self.outcomes.iter().filter(|o| o.result.is_err())
    }
}

/// Creates the directories and files described by `structure` under
/// `base_path`.
///
/// The root must be a directory node; otherwise nothing is created. The base
/// directory itself must be creatable; past that point failures are recorded
/// per entry and do not abort sibling processing, and nothing that was
/// already created is rolled back. Directories are created if absent and
/// files are always overwritten, so re-running against an existing tree is
/// idempotent.
pub fn create_project_structure(
    base_path: &Path,
    structure: &Node,
) -> Result<CreationReport, MaterializeError> {
    let Node::Directory(children) = structure else {
        log::error!("refusing to materialize: top-level structure is not a directory mapping");
        return Err(MaterializeError::RootNotDirectory);
    };

    fs::create_dir_all(base_path)
        .map_err(|error| IoError::new(FileOperation::Mkdir, base_path.to_path_buf(), error))?;

    log::info!("creating project structure in {}", base_path.display());

    let mut report = CreationReport::default();
    create_entries(base_path, children, &mut report);

    Ok(report)
}

fn create_entries(dir: &Path, children: &IndexMap<String, Node>, report: &mut CreationReport) {
    for (name, node) in children {
        let path = dir.join(name);

        match node {
            Node::Directory(grandchildren) => {
                log::debug!("creating directory {}", path.display());
                match fs::create_dir_all(&path) {
                    Ok(()) => {
                        report.outcomes.push(EntryOutcome {
                            path: path.clone(),
                            kind: EntryKind::Directory,
                            result: Ok(()),
                        });
                        create_entries(&path, grandchildren, report);
                    }
                    Err(error) => {
                        log::error!("failed to create directory {}: {}", path.display(), error);
                        report.outcomes.push(EntryOutcome {
                            path: path.clone(),
                            kind: EntryKind::Directory,
                            result: Err(IoError::new(FileOperation::Mkdir, path, error)),
                        });
                        // children of a failed directory are skipped
                    }
                }
            }
            Node::File(contents) => {
                log::debug!("creating file {}", path.display());
                let result = write_file(&path, contents);
                if let Err(error) = &result {
                    log::error!("failed to create file {}: {}", path.display(), error);
                }
                report.outcomes.push(EntryOutcome {
                    path,
                    kind: EntryKind::File,
                    result,
                });
            }
        }
    }
}

fn write_file(path: &Path, contents: &str) -> Result<(), IoError> {
    // names may embed separators, so the parent may not exist yet
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .map_err(|error| IoError::new(FileOperation::Mkdir, parent.to_path_buf(), error))?;
    }

    fs::write(path, contents)
        .map_err(|error| IoError::new(FileOperation::Write, path.to_path_buf(), error))?;

    let msg = format!("{} {}", "create".green(), path.display());

    println!("{}", &msg);

    Ok(())
}
