//! Precedence rules for title and author.
//!
//! Each rule is a pure function from record to record. [`MetadataCandidates::resolve`]
//! applies them in a fixed order:
//!
//! 1. [`merge_xmp`]: non-empty XMP values replace info dictionary values
//! 2. [`discard_untitled`]: trim the title and drop the "untitled" placeholder
//! 3. [`with_filename_title`]: an author without a title takes the file stem as title

use super::MetadataRecord;

/// Placeholder title written by many producers.
const PLACEHOLDER_TITLE: &str = "untitled";

/// Title and author as found in each metadata source.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MetadataCandidates {
    /// Values from the document information dictionary.
    pub info: MetadataRecord,
    /// Values from the XMP packet.
    pub xmp: MetadataRecord,
}

impl MetadataCandidates {
    /// Create candidates from both sources.
    pub fn new(info: MetadataRecord, xmp: MetadataRecord) -> Self {
        Self { info, xmp }
    }

    /// Apply all rules and return the final record.
    ///
    /// `file_stem` is the current file name without extension.
    ///
    /// # Examples
    ///
    /// ```
    /// use pdf_title_rename::metadata::{MetadataCandidates, MetadataRecord};
    ///
    /// let candidates = MetadataCandidates::new(
    ///     MetadataRecord::new(Some("Untitled".into()), Some("Jane Doe".into())),
    ///     MetadataRecord::default(),
    /// );
    /// let record = candidates.resolve(Some("report"));
    /// assert_eq!(record.title.as_deref(), Some("report"));
    /// assert_eq!(record.author.as_deref(), Some("Jane Doe"));
    /// ```
    pub fn resolve(&self, file_stem: Option<&str>) -> MetadataRecord {
        with_filename_title(discard_untitled(merge_xmp(self)), file_stem)
    }
}

/// Prefer XMP values over info dictionary values, field by field.
pub fn merge_xmp(candidates: &MetadataCandidates) -> MetadataRecord {
    MetadataRecord::new(
        candidates
            .xmp
            .title
            .clone()
            .or_else(|| candidates.info.title.clone()),
        candidates
            .xmp
            .author
            .clone()
            .or_else(|| candidates.info.author.clone()),
    )
}

/// Trim the title and drop it when it is the "untitled" placeholder.
pub fn discard_untitled(record: MetadataRecord) -> MetadataRecord {
    let title = record
        .title
        .map(|title| title.trim().to_string())
        .filter(|title| title.to_lowercase() != PLACEHOLDER_TITLE);

    MetadataRecord::new(title, record.author)
}

/// Use the file stem as title when only the author is known.
///
/// Applying this more than once has no further effect.
pub fn with_filename_title(record: MetadataRecord, file_stem: Option<&str>) -> MetadataRecord {
    match (&record.title, &record.author, file_stem) {
        (None, Some(_), Some(stem)) => MetadataRecord::new(Some(stem.to_string()), record.author),
        _ => record,
    }
}
