//! Message formatting and display.
//!
//! Every line the batch prints goes through [`OutputFormatter`]. The text
//! of each line is built by plain functions ([`outcome_lines`],
//! [`summary_lines`]) so it can be checked without capturing stdout.
//!
//! # Examples
//!
//! ```
//! use pdf_title_rename::output::formatter::OutputFormatter;
//!
//! let formatter = OutputFormatter::new(false);
//! formatter.info("Processing files...");
//! formatter.warning("destination is not a valid directory");
//! ```

use std::path::Path;

use crate::config::Config;
use crate::metadata::Diagnostic;
use crate::rename::{FileOutcome, RenamePlan, RunSummary};

/// Level of output message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    /// Informational message.
    Info,
    /// Warning message.
    Warning,
    /// Error message.
    Error,
    /// Debug/verbose message.
    Debug,
}

/// Output formatter with configurable verbosity.
pub struct OutputFormatter {
    /// Whether to show verbose output.
    verbose: bool,
    /// Whether to use colored output.
    colored: bool,
}

impl OutputFormatter {
    /// Create a new output formatter.
    ///
    /// # Arguments
    ///
    /// * `verbose` - Show verbose output
    pub fn new(verbose: bool) -> Self {
        Self {
            verbose,
            colored: Self::should_use_color(),
        }
    }

    /// Create a formatter from configuration.
    pub fn from_config(config: &Config) -> Self {
        Self::new(config.verbose)
    }

    /// Detect if colored output should be used.
    ///
    /// Returns true if stdout is a TTY and TERM is set.
    fn should_use_color() -> bool {
        use std::io::IsTerminal;
        std::io::stdout().is_terminal() && std::env::var("TERM").is_ok()
    }

    /// Print an informational message.
    pub fn info(&self, message: &str) {
        self.print_message(MessageLevel::Info, message);
    }

    /// Print a warning message, prefixed with `warning: `.
    pub fn warning(&self, message: &str) {
        self.print_message(MessageLevel::Warning, &format!("warning: {message}"));
    }

    /// Print a debug/verbose message.
    ///
    /// Only displayed in verbose mode.
    pub fn debug(&self, message: &str) {
        if self.verbose {
            self.print_message(MessageLevel::Debug, message);
        }
    }

    /// Print a message with level-appropriate formatting.
    fn print_message(&self, level: MessageLevel, message: &str) {
        let color_code = match level {
            MessageLevel::Info => "",
            MessageLevel::Warning => "\x1b[33m", // Yellow
            MessageLevel::Error => "\x1b[31m",   // Red
            MessageLevel::Debug => "\x1b[36m",   // Cyan
        };

        let reset = "\x1b[0m";

        if self.colored && !color_code.is_empty() {
            println!("{color_code}{message}{reset}");
        } else {
            println!("{message}");
        }
    }

    /// Print the header line for a file.
    pub fn processing(&self, path: &Path) {
        self.info(&format!("Processing \"{}\":", path.display()));
    }

    /// Print a metadata diagnostic.
    ///
    /// Decode failures are always shown, everything else only in verbose mode.
    pub fn diagnostic(&self, diagnostic: &Diagnostic) {
        let line = format!(" -- {diagnostic}");
        if diagnostic.is_notable() {
            self.print_message(MessageLevel::Warning, &line);
        } else {
            self.debug(&line);
        }
    }

    /// Print what happened to a file.
    pub fn outcome(&self, outcome: &FileOutcome) {
        for (level, line) in outcome_lines(outcome) {
            self.print_message(level, &line);
        }
        if let Some(error) = outcome.error() {
            self.debug(&format!(" -- {error}"));
        }
    }

    /// Print the closing summary block.
    pub fn summary(&self, summary: &RunSummary, dry_run: bool, filing: bool) {
        for line in summary_lines(summary, dry_run, filing) {
            self.info(&line);
        }
    }
}

fn renaming_line(plan: &RenamePlan) -> (MessageLevel, String) {
    (
        MessageLevel::Info,
        format!(" -- Renaming to \"{}\"", plan.target.display()),
    )
}

/// Lines printed for a file's outcome, in order.
pub fn outcome_lines(outcome: &FileOutcome) -> Vec<(MessageLevel, String)> {
    match outcome {
        FileOutcome::Missing => vec![(
            MessageLevel::Info,
            " -- Could not find metadata in the file".to_string(),
        )],
        FileOutcome::Planned { plan } | FileOutcome::Renamed { plan } => vec![renaming_line(plan)],
        FileOutcome::Filed { plan, location } => {
            let destination = location.parent().unwrap_or(location);
            vec![
                renaming_line(plan),
                (
                    MessageLevel::Info,
                    format!(" -- Filed to {}", destination.display()),
                ),
            ]
        }
        FileOutcome::RenameFailed { plan, .. } => vec![
            renaming_line(plan),
            (
                MessageLevel::Error,
                " -- Error renaming file, maybe it moved?".to_string(),
            ),
        ],
        FileOutcome::FilingFailed { plan, .. } => vec![
            renaming_line(plan),
            (MessageLevel::Error, " -- Error moving file".to_string()),
        ],
        FileOutcome::ReadFailed { error } => vec![(
            MessageLevel::Error,
            format!(" -- Error reading file: {error}"),
        )],
    }
}

/// Lines of the summary block.
///
/// The `Filed` line only appears when a destination directory is active.
pub fn summary_lines(summary: &RunSummary, dry_run: bool, filing: bool) -> Vec<String> {
    let mut lines = Vec::with_capacity(5);

    if dry_run {
        lines.push(format!("Processed {} files [dry run]:", summary.total));
    } else {
        lines.push(format!("Processed {} files:", summary.total));
    }
    lines.push(format!(" - Renamed: {}", summary.renamed));
    if filing {
        lines.push(format!(" - Filed: {}", summary.filed));
    }
    lines.push(format!(" - Missing metadata: {}", summary.missing));
    lines.push(format!(" - Errors: {}", summary.errors));

    lines
}
