//! Batch driver.
//!
//! Files are handled one at a time and in order. Whatever goes wrong with
//! a single file is recorded as its [`FileOutcome`] and the batch moves on;
//! only a closed interactive input stops the run.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use super::{RenamePlan, RunSummary};
use crate::config::Config;
use crate::error::{RenameError, Result};
use crate::interactive::{InteractiveResolver, Resolver};
use crate::metadata::{MetadataExtractor, pipeline::with_filename_title};
use crate::output::OutputFormatter;

/// What happened to one input file.
#[derive(Debug)]
pub enum FileOutcome {
    /// Neither title nor author could be determined.
    Missing,
    /// Dry run: the rename was computed but not applied.
    Planned {
        /// The computed rename.
        plan: RenamePlan,
    },
    /// The file was renamed in place.
    Renamed {
        /// The applied rename.
        plan: RenamePlan,
    },
    /// The file was renamed and moved into the destination directory.
    Filed {
        /// The applied rename.
        plan: RenamePlan,
        /// Where the file ended up.
        location: PathBuf,
    },
    /// The rename itself failed; the file is untouched.
    RenameFailed {
        /// The rename that was attempted.
        plan: RenamePlan,
        /// Why it failed.
        error: RenameError,
    },
    /// The file was renamed but could not be moved into the destination.
    FilingFailed {
        /// The applied rename.
        plan: RenamePlan,
        /// Why the move failed.
        error: RenameError,
    },
    /// The file could not be read.
    ReadFailed {
        /// Why reading failed.
        error: RenameError,
    },
}

impl FileOutcome {
    /// The rename computed for this file, if any.
    pub fn plan(&self) -> Option<&RenamePlan> {
        match self {
            Self::Planned { plan }
            | Self::Renamed { plan }
            | Self::Filed { plan, .. }
            | Self::RenameFailed { plan, .. }
            | Self::FilingFailed { plan, .. } => Some(plan),
            Self::Missing | Self::ReadFailed { .. } => None,
        }
    }

    /// The error this file ended with, if any.
    pub fn error(&self) -> Option<&RenameError> {
        match self {
            Self::RenameFailed { error, .. }
            | Self::FilingFailed { error, .. }
            | Self::ReadFailed { error } => Some(error),
            _ => None,
        }
    }
}

/// Renames a batch of PDF files after their metadata.
pub struct BatchRenamer {
    config: Config,
    extractor: MetadataExtractor,
    resolver: Option<Box<dyn Resolver>>,
    formatter: OutputFormatter,
}

impl BatchRenamer {
    /// Create a renamer for `config`.
    ///
    /// In interactive mode answers are read from standard input unless
    /// another resolver is set with [`BatchRenamer::with_resolver`].
    pub fn new(config: Config) -> Self {
        let formatter = OutputFormatter::from_config(&config);

        Self {
            config,
            extractor: MetadataExtractor::new(),
            resolver: None,
            formatter,
        }
    }

    /// Set the resolver used in interactive mode.
    pub fn with_resolver(mut self, resolver: Box<dyn Resolver>) -> Self {
        self.resolver = Some(resolver);
        self
    }

    /// Process every input and print the summary.
    ///
    /// # Errors
    ///
    /// Returns [`RenameError::InputClosed`] when interactive input ends.
    /// Per-file failures are counted in the summary instead.
    pub fn run(&mut self) -> Result<RunSummary> {
        let mut summary = RunSummary::new();

        let inputs = std::mem::take(&mut self.config.inputs);
        for path in &inputs {
            let outcome = self.process_file(path)?;
            summary.record(&outcome);
        }
        self.config.inputs = inputs;

        self.formatter.summary(
            &summary,
            self.config.dry_run,
            self.config.destination.is_active(),
        );
        Ok(summary)
    }

    /// Process a single file and print what happened to it.
    ///
    /// # Errors
    ///
    /// Returns [`RenameError::InputClosed`] when interactive input ends.
    pub fn process_file(&mut self, path: &Path) -> Result<FileOutcome> {
        self.formatter.processing(path);
        let outcome = self.handle(path)?;
        self.formatter.outcome(&outcome);
        Ok(outcome)
    }

    fn handle(&mut self, path: &Path) -> Result<FileOutcome> {
        let extracted = match self.extractor.extract(path) {
            Ok(extracted) => extracted,
            Err(error) => return Ok(FileOutcome::ReadFailed { error }),
        };
        for diagnostic in &extracted.diagnostics {
            self.formatter.diagnostic(diagnostic);
        }

        let mut record = extracted.record;
        if self.config.interactive {
            let resolver = self.resolver.get_or_insert_with(|| -> Box<dyn Resolver> {
                Box::new(InteractiveResolver::stdio())
            });
            record = resolver.resolve(path, record)?;
        }

        let stem = path.file_stem().map(|stem| stem.to_string_lossy());
        let record = with_filename_title(record, stem.as_deref());

        let Some(plan) = RenamePlan::new(path, &record) else {
            return Ok(FileOutcome::Missing);
        };

        if self.config.dry_run {
            return Ok(FileOutcome::Planned { plan });
        }

        if plan.is_noop() {
            log::debug!("{} already has its target name", plan.source.display());
        }

        if let Err(source) = fs::rename(&plan.source, &plan.target) {
            let error = RenameError::RenameFailed {
                from: plan.source.clone(),
                to: plan.target.clone(),
                source,
            };
            return Ok(FileOutcome::RenameFailed { plan, error });
        }
        log::debug!("renamed {:?} -> {:?}", plan.source, plan.target);

        let Some(destination) = self.config.destination.directory() else {
            return Ok(FileOutcome::Renamed { plan });
        };

        match move_into(&plan.target, destination) {
            Ok(location) => Ok(FileOutcome::Filed { plan, location }),
            Err(source) => {
                let error = RenameError::FilingFailed {
                    path: plan.target.clone(),
                    destination: destination.to_path_buf(),
                    source,
                };
                Ok(FileOutcome::FilingFailed { plan, error })
            }
        }
    }
}

/// Move `file` into `directory`, keeping its name.
///
/// Falls back to copy and remove when the directory is on another device.
fn move_into(file: &Path, directory: &Path) -> io::Result<PathBuf> {
    let name = file
        .file_name()
        .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "path has no file name"))?;
    let location = directory.join(name);

    match fs::rename(file, &location) {
        Ok(()) => {}
        Err(err) if err.kind() == io::ErrorKind::CrossesDevices => {
            log::debug!("{} is on another device, copying", directory.display());
            fs::copy(file, &location)?;
            fs::remove_file(file)?;
        }
        Err(err) => return Err(err),
    }

    Ok(location)
}
