//! CLI argument parsing for pdf-title-rename.
//!
//! This module only defines the command-line surface with `clap`. It is
//! shared with `build.rs` to render the man page, so it must not depend on
//! anything else in the crate. Conversion into a validated run
//! configuration lives in [`crate::config`].
//!
//! # Examples
//!
//! ```no_run
//! use pdf_title_rename::cli::Cli;
//! use clap::Parser;
//!
//! let cli = Cli::parse();
//! println!("Renaming {} files", cli.files.len());
//! ```

use clap::Parser;
use std::path::PathBuf;

/// Batch rename PDF files from their title and author metadata.
///
/// The document information dictionary and the embedded XMP packet are
/// read for a title and an author, and each file is renamed in place to
/// "Author - Title.pdf".
#[derive(Parser, Debug)]
#[command(name = "pdf-title-rename")]
#[command(version)]
#[command(about = "Batch rename PDF files from their title and author metadata", long_about = None)]
#[command(author)]
#[command(arg_required_else_help = true)]
pub struct Cli {
    /// PDF files to rename (in order)
    ///
    /// Paths that do not exist literally are expanded as glob patterns.
    ///
    /// Examples:
    ///   pdf-title-rename paper.pdf report.pdf
    ///   pdf-title-rename -n 'downloads/*.pdf'
    #[arg(required = true, value_name = "FILE")]
    pub files: Vec<PathBuf>,

    /// Dry run - list the renames without touching any file
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Interactive mode - confirm or change title and author for every file
    ///
    /// For each file the found metadata is shown and one of the commands
    /// t (change title), a (change author), o (open the file) or k (keep)
    /// is read from standard input.
    #[arg(short, long)]
    pub interactive: bool,

    /// Move renamed files into this directory
    ///
    /// The directory must already exist. If it does not, a warning is
    /// printed and files are only renamed in place.
    #[arg(short, long = "dest", value_name = "DIR")]
    pub destination: Option<PathBuf>,

    /// Verbose output - report parse and XMP diagnostics for each file
    #[arg(short, long)]
    pub verbose: bool,
}
