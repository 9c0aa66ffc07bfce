//! Configuration module for pdf-title-rename.
//!
//! This module turns CLI arguments into a validated configuration that
//! drives the batch. It handles:
//! - Expansion of input patterns
//! - Resolution of the destination directory
//! - Validation of the resulting configuration

use std::path::{Path, PathBuf};

use crate::cli::Cli;
use crate::error::{RenameError, Result};
use crate::utils::collect_input_paths;

/// Where renamed files are filed after a successful rename.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Destination {
    /// No destination was requested.
    #[default]
    Disabled,
    /// A destination was requested but is not an existing directory.
    ///
    /// Filing stays off for the whole run.
    Invalid(PathBuf),
    /// Existing directory that renamed files are moved into.
    Directory(PathBuf),
}

impl Destination {
    /// Resolve a requested destination against the filesystem.
    ///
    /// # Examples
    ///
    /// ```
    /// use pdf_title_rename::config::Destination;
    ///
    /// assert_eq!(Destination::resolve(None), Destination::Disabled);
    /// ```
    pub fn resolve(requested: Option<&Path>) -> Self {
        match requested {
            None => Self::Disabled,
            Some(path) if path.is_dir() => Self::Directory(path.to_path_buf()),
            Some(path) => Self::Invalid(path.to_path_buf()),
        }
    }

    /// The directory to file into, if filing is active.
    pub fn directory(&self) -> Option<&Path> {
        match self {
            Self::Directory(path) => Some(path),
            _ => None,
        }
    }

    /// Whether files will be filed after renaming.
    pub fn is_active(&self) -> bool {
        self.directory().is_some()
    }
}

/// Validated configuration for a batch run.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Input PDF files, in processing order.
    pub inputs: Vec<PathBuf>,

    /// Print the planned renames without touching the filesystem.
    pub dry_run: bool,

    /// Run every file through the interactive resolver.
    pub interactive: bool,

    /// Where renamed files are filed.
    pub destination: Destination,

    /// Report per-file diagnostics.
    pub verbose: bool,
}

impl Config {
    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if there are no inputs or an input path is empty.
    pub fn validate(&self) -> Result<()> {
        if self.inputs.is_empty() {
            return Err(RenameError::invalid_config("No input files specified"));
        }

        if self.inputs.iter().any(|p| p.as_os_str().is_empty()) {
            return Err(RenameError::invalid_config("Input file path is empty"));
        }

        Ok(())
    }
}

impl TryFrom<&Cli> for Config {
    type Error = RenameError;

    fn try_from(cli: &Cli) -> Result<Self> {
        let inputs = collect_input_paths(&cli.files);

        let config = Config {
            inputs,
            dry_run: cli.dry_run,
            interactive: cli.interactive,
            destination: Destination::resolve(cli.destination.as_deref()),
            verbose: cli.verbose,
        };

        config.validate()?;

        Ok(config)
    }
}
