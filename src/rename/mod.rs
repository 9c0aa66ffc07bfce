//! Renaming files after their metadata.
//!
//! - [`filename`] turns a title and author into a safe file name
//! - [`renamer`] drives the batch and applies the renames
//! - [`summary`] counts what happened

pub mod filename;
pub mod renamer;
pub mod summary;

pub use filename::{RenamePlan, build_filename, sanitize};
pub use renamer::{BatchRenamer, FileOutcome};
pub use summary::RunSummary;
