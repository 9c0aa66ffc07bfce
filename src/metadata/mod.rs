//! Title and author metadata extraction.
//!
//! Two sources are read from every document:
//! - the document information dictionary referenced by the trailer
//! - the XMP packet referenced by the catalog's `Metadata` entry
//!
//! XMP values win when present. The precedence rules are plain functions
//! in [`pipeline`] so each can be tested on its own.
//!
//! # Examples
//!
//! ```no_run
//! use pdf_title_rename::metadata::MetadataExtractor;
//! use std::path::Path;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let extracted = MetadataExtractor::new().extract(Path::new("paper.pdf"))?;
//! println!("{:?} by {:?}", extracted.record.title, extracted.record.author);
//! # Ok(())
//! # }
//! ```

pub mod extractor;
pub mod info;
pub mod pipeline;
pub mod xmp;

pub use extractor::{Extracted, MetadataExtractor};
pub use pipeline::MetadataCandidates;
pub use xmp::{XmpPacket, XmpValue};

use std::fmt;

/// Title and author found for a single file.
///
/// Both fields are independently optional. Blank values are never stored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MetadataRecord {
    /// Document title.
    pub title: Option<String>,
    /// Document author, already reduced to surnames when it came from XMP.
    pub author: Option<String>,
}

impl MetadataRecord {
    /// Create a record, dropping blank values.
    pub fn new(title: Option<String>, author: Option<String>) -> Self {
        Self {
            title: non_blank(title),
            author: non_blank(author),
        }
    }

    /// Whether neither title nor author is known.
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.author.is_none()
    }
}

/// Metadata field a diagnostic refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    /// The `Title` entry.
    Title,
    /// The `Author` entry.
    Author,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Title => write!(f, "title"),
            Self::Author => write!(f, "author"),
        }
    }
}

/// Non-fatal problem found while extracting metadata from one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// The file is not a parseable PDF; no metadata could be read.
    ParseFailed {
        /// Parser error message.
        reason: String,
    },
    /// An info dictionary string was not valid text.
    Decode {
        /// Which entry failed.
        field: Field,
        /// The raw bytes of the entry.
        bytes: Vec<u8>,
    },
    /// The XMP packet could not be read; it contributes nothing.
    XmpFailed {
        /// Parser error message.
        reason: String,
    },
}

impl Diagnostic {
    /// Whether this diagnostic is shown without `--verbose`.
    pub fn is_notable(&self) -> bool {
        matches!(self, Self::Decode { .. })
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ParseFailed { reason } => write!(f, "Could not parse PDF: {reason}"),
            Self::Decode { field, bytes } => {
                write!(f, "Could not decode {field} bytes: {}", escape_bytes(bytes))
            }
            Self::XmpFailed { reason } => write!(f, "Could not read XMP metadata: {reason}"),
        }
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Render raw bytes as `b'...'` with non-printable bytes escaped.
fn escape_bytes(bytes: &[u8]) -> String {
    let escaped: String = bytes
        .iter()
        .flat_map(|b| std::ascii::escape_default(*b))
        .map(char::from)
        .collect();
    format!("b'{escaped}'")
}
