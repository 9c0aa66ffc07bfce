//! Interactive confirmation of title and author.
//!
//! For each file the user sees what was found and can change the title,
//! change the author, open the file for a look, or keep the values:
//!
//! ```text
//! ------------------------------------------------------------
//! Filename:            ./scan_0042.pdf
//!  * Found (t)itle:    "Untitled Draft"
//!  * Found (a)uthors:  "Doe"
//! Change (t/a) or open (o) or keep (k)? (t/a/o/k) t
//! New title: Final Report
//! (t/a/o/k) k
//! ```

pub mod opener;

pub use opener::{FileOpener, SystemOpener};

use std::io::{self, BufRead, StdinLock, Stdout, Write};
use std::path::Path;

use crate::error::{RenameError, Result};
use crate::metadata::MetadataRecord;

const SEPARATOR_WIDTH: usize = 60;
const LABEL_WIDTH: usize = 20;
const FIRST_PROMPT: &str = "Change (t/a) or open (o) or keep (k)? (t/a/o/k) ";
const REPEAT_PROMPT: &str = "(t/a/o/k) ";

/// One answer to the command prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `t`: enter a new title.
    EditTitle,
    /// `a`: enter a new author string.
    EditAuthor,
    /// `o`: open the file in the platform viewer.
    Open,
    /// `k`: keep the current values.
    Keep,
    /// Anything else, as typed.
    Invalid(String),
}

impl Command {
    /// Parse a line of user input. Surrounding whitespace and case are ignored.
    ///
    /// # Examples
    ///
    /// ```
    /// use pdf_title_rename::interactive::Command;
    ///
    /// assert_eq!(Command::parse(" K\n"), Command::Keep);
    /// assert_eq!(Command::parse("x"), Command::Invalid("x".to_string()));
    /// ```
    pub fn parse(input: &str) -> Self {
        let answer = input.trim().to_lowercase();
        match answer.as_str() {
            "t" => Self::EditTitle,
            "a" => Self::EditAuthor,
            "o" => Self::Open,
            "k" => Self::Keep,
            _ => Self::Invalid(answer),
        }
    }
}

/// Final say over the metadata of a file before it is renamed.
pub trait Resolver {
    /// Return the record to use for `path`, starting from `record`.
    ///
    /// # Errors
    ///
    /// Returns [`RenameError::InputClosed`] when no more answers can be read.
    fn resolve(&mut self, path: &Path, record: MetadataRecord) -> Result<MetadataRecord>;
}

/// Prompt-driven resolver over arbitrary input and output streams.
pub struct InteractiveResolver<R, W, O> {
    input: R,
    output: W,
    opener: O,
}

impl InteractiveResolver<StdinLock<'static>, Stdout, SystemOpener> {
    /// Resolver on the process's standard input and output.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout(), SystemOpener)
    }
}

impl<R: BufRead, W: Write, O: FileOpener> InteractiveResolver<R, W, O> {
    /// Create a resolver reading answers from `input` and writing prompts to `output`.
    pub fn new(input: R, output: W, opener: O) -> Self {
        Self {
            input,
            output,
            opener,
        }
    }

    fn show(&mut self, path: &Path, record: &MetadataRecord) -> io::Result<()> {
        writeln!(self.output, "{}", "-".repeat(SEPARATOR_WIDTH))?;
        writeln!(self.output, "{:<LABEL_WIDTH$} {}", "Filename:", path.display())?;
        writeln!(
            self.output,
            "{:<LABEL_WIDTH$} {}",
            " * Found (t)itle:",
            describe(record.title.as_deref())
        )?;
        writeln!(
            self.output,
            "{:<LABEL_WIDTH$} {}",
            " * Found (a)uthors:",
            describe(record.author.as_deref())
        )
    }

    /// Print `text` and read one line of input.
    fn ask(&mut self, text: &str) -> Result<String> {
        write!(self.output, "{text}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(RenameError::InputClosed);
        }
        Ok(line)
    }

    fn open(&mut self, path: &Path) -> Result<()> {
        if let Err(err) = self.opener.open(path) {
            let err = RenameError::FailedToOpenViewer {
                path: path.to_path_buf(),
                reason: err.to_string(),
            };
            log::warn!("{err}");
            writeln!(self.output, "{err}")?;
        }
        Ok(())
    }
}

impl<R: BufRead, W: Write, O: FileOpener> Resolver for InteractiveResolver<R, W, O> {
    fn resolve(&mut self, path: &Path, record: MetadataRecord) -> Result<MetadataRecord> {
        self.show(path, &record)?;

        let MetadataRecord {
            mut title,
            mut author,
        } = record;
        let mut prompt = FIRST_PROMPT;

        loop {
            match Command::parse(&self.ask(prompt)?) {
                Command::Keep => return Ok(MetadataRecord::new(title, author)),
                Command::EditTitle => title = Some(self.ask("New title: ")?.trim().to_string()),
                Command::EditAuthor => {
                    author = Some(self.ask("New author string: ")?.trim().to_string())
                }
                Command::Open => self.open(path)?,
                Command::Invalid(answer) => {
                    log::debug!("rejected answer {answer:?}");
                    writeln!(self.output, "Bad option, please choose again:")?;
                }
            }
            prompt = REPEAT_PROMPT;
        }
    }
}

fn describe(value: Option<&str>) -> String {
    match value {
        Some(value) => format!("\"{value}\""),
        None => "(none)".to_string(),
    }
}
