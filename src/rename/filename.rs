//! Target file names.
//!
//! A name is `"<author> - <title>.pdf"`, or `"<title>.pdf"` without an
//! author. Both parts are reduced to letters, digits and a few separators,
//! and the name before the extension is capped at [`MAX_NAME_CHARS`]
//! characters so the result stays within common file name limits.

use std::path::{Path, PathBuf};

use crate::metadata::MetadataRecord;

/// Longest name kept before the extension is appended.
pub const MAX_NAME_CHARS: usize = 250;

/// Extension given to every renamed file.
pub const EXTENSION: &str = ".pdf";

/// Characters kept besides letters and digits.
const KEEP: [char; 5] = [' ', '.', '_', '-', '\u{2014}'];

/// Drop every character that is not alphanumeric or in the allow-list,
/// then trim surrounding whitespace.
///
/// # Examples
///
/// ```
/// use pdf_title_rename::rename::filename::sanitize;
///
/// assert_eq!(sanitize(" A/B: C? "), "AB C");
/// assert_eq!(sanitize("Über\u{2014}Café_2.0"), "Über\u{2014}Café_2.0");
/// ```
pub fn sanitize(text: &str) -> String {
    text.chars()
        .filter(|c| c.is_alphanumeric() || KEEP.contains(c))
        .collect::<String>()
        .trim()
        .to_string()
}

/// Compose the file name for a title and optional author.
///
/// Returns `None` when nothing usable is left after sanitizing. An author
/// that sanitizes to nothing is left out.
///
/// # Examples
///
/// ```
/// use pdf_title_rename::rename::filename::build_filename;
///
/// assert_eq!(
///     build_filename("My Paper", Some("A. Writer")).as_deref(),
///     Some("A. Writer - My Paper.pdf")
/// );
/// assert_eq!(build_filename("Notes", None).as_deref(), Some("Notes.pdf"));
/// assert_eq!(build_filename("???", None), None);
/// ```
pub fn build_filename(title: &str, author: Option<&str>) -> Option<String> {
    let title = sanitize(title);
    let author = author.map(sanitize).filter(|author| !author.is_empty());

    let name = match author {
        Some(author) => format!("{author} - {title}"),
        None if title.is_empty() => return None,
        None => title,
    };

    let truncated: String = name.chars().take(MAX_NAME_CHARS).collect();
    Some(format!("{truncated}{EXTENSION}"))
}

/// A planned rename within the source file's directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenamePlan {
    /// File as it is named now.
    pub source: PathBuf,
    /// File as it will be named.
    pub target: PathBuf,
}

impl RenamePlan {
    /// Plan the rename of `source` according to `record`.
    ///
    /// The record is expected to have passed the precedence rules, so an
    /// author always comes with a title. Returns `None` when the record
    /// yields no usable name.
    pub fn new(source: &Path, record: &MetadataRecord) -> Option<Self> {
        let file_name = match (&record.title, &record.author) {
            (Some(title), author) => build_filename(title, author.as_deref())?,
            (None, Some(author)) => build_filename(author, None)?,
            (None, None) => return None,
        };

        let target = match source.parent() {
            Some(dir) => dir.join(file_name),
            None => PathBuf::from(file_name),
        };

        Some(Self {
            source: source.to_path_buf(),
            target,
        })
    }

    /// Whether the file already has its target name.
    pub fn is_noop(&self) -> bool {
        self.source == self.target
    }
}
