//! PDF reading and loading.

use lopdf::Document;
use std::path::Path;

use crate::error::{RenameError, Result};

/// A PDF file read from disk.
///
/// Reading the bytes and parsing them are kept apart: a file that cannot be
/// read is an error for the caller, while a file that reads fine but does
/// not parse still yields a `LoadedPdf` whose `document` holds the parse
/// error.
#[derive(Debug)]
pub struct LoadedPdf {
    /// The parsed document, or why parsing failed.
    pub document: lopdf::Result<Document>,
}

/// Reader for PDF input files.
pub struct PdfReader;

impl PdfReader {
    /// Read and parse the PDF at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`RenameError::FileNotFound`] or [`RenameError::FailedToRead`]
    /// when the file itself cannot be read. Syntax errors are not returned
    /// here; they are stored in [`LoadedPdf::document`].
    pub fn read<P: AsRef<Path>>(path: P) -> Result<LoadedPdf> {
        let path = path.as_ref();

        if path.is_dir() {
            return Err(RenameError::FailedToRead {
                path: path.to_path_buf(),
                source: std::io::Error::other("is a directory"),
            });
        }

        let bytes =
            std::fs::read(path).map_err(|err| RenameError::failed_to_read(path.to_path_buf(), err))?;

        Ok(LoadedPdf {
            document: Self::parse(&bytes),
        })
    }

    /// Parse PDF bytes that are already in memory.
    pub fn parse(bytes: &[u8]) -> lopdf::Result<Document> {
        let document = Document::load_mem(bytes)?;
        log::debug!(
            "parsed PDF {} with {} objects",
            document.version,
            document.objects.len()
        );
        Ok(document)
    }
}
