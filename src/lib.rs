//! pdf-title-rename - Rename PDF files after their title and author.
//!
//! Each file's document information dictionary and XMP packet are read
//! for a title and an author, and the file is renamed in place to
//! `"Author - Title.pdf"`. It supports:
//!
//! - XMP values taking precedence over the information dictionary
//! - Reducing creator lists to surnames
//! - Interactive confirmation of every file
//! - Dry runs
//! - Filing renamed files into a destination directory
//!
//! # Examples
//!
//! ## Batch Rename
//!
//! ```no_run
//! use pdf_title_rename::{BatchRenamer, Config};
//! use std::path::PathBuf;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config {
//!     inputs: vec![PathBuf::from("scan_0001.pdf")],
//!     dry_run: true,
//!     ..Config::default()
//! };
//!
//! let summary = BatchRenamer::new(config).run()?;
//! println!("{} files, {} without metadata", summary.total, summary.missing);
//! # Ok(())
//! # }
//! ```
//!
//! ## Using Individual Components
//!
//! ```no_run
//! use pdf_title_rename::metadata::MetadataExtractor;
//! use pdf_title_rename::rename::RenamePlan;
//! use std::path::Path;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let path = Path::new("scan_0001.pdf");
//! let extracted = MetadataExtractor::new().extract(path)?;
//!
//! if let Some(plan) = RenamePlan::new(path, &extracted.record) {
//!     println!("would rename to {}", plan.target.display());
//! }
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod cli;
pub mod config;
pub mod error;
pub mod interactive;
pub mod io;
pub mod metadata;
pub mod output;
pub mod rename;
pub mod utils;

// Re-export commonly used types
pub use config::Config;
pub use error::{RenameError, Result};
pub use rename::{BatchRenamer, RunSummary};

use crate::cli::Cli;
use crate::config::Destination;
use crate::output::OutputFormatter;

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name.
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Run a batch from parsed command-line arguments.
///
/// # Errors
///
/// Returns an error when the arguments do not form a valid configuration
/// or when interactive input ends. Failures of single files are reported
/// in the returned summary instead.
pub fn run(cli: &Cli) -> Result<RunSummary> {
    let config = Config::try_from(cli)?;
    log::debug!("{NAME} v{VERSION}: {config:?}");

    if let Destination::Invalid(path) = &config.destination {
        log::debug!("ignoring destination {}", path.display());
        OutputFormatter::from_config(&config).warning("destination is not a valid directory");
    }

    BatchRenamer::new(config).run()
}
