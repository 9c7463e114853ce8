//! sapling builds real directory trees from a pasted description.
//!
//! Input can be indented tree text (with or without box-drawing glyphs),
//! JSON, or YAML. [`parse_structure`] figures out which format applies and
//! returns a [`Node`] tree; [`create_project_structure`] materializes that
//! tree on disk, best-effort per entry.

pub mod api;
pub mod dispatch;
pub mod errors;
pub mod materialize;
pub mod node;
pub mod preview;
pub mod prompt;
pub mod tree_text;

pub use api::{run, SaplingError};
pub use dispatch::parse_structure;
pub use materialize::{
    create_project_structure, CreationReport, EntryKind, EntryOutcome, MaterializeError,
};
pub use node::Node;
