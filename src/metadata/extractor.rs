//! Metadata extraction for a single file.

use anyhow::{Context, Result as AnyResult};
use lopdf::{Document, Object};
use std::path::Path;

use super::{Diagnostic, MetadataCandidates, MetadataRecord, XmpPacket, info::read_info};
use crate::{Result, io::PdfReader};

/// What was found in one file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Extracted {
    /// Final title and author after all precedence rules.
    pub record: MetadataRecord,
    /// Values per source, before the rules were applied.
    pub candidates: MetadataCandidates,
    /// Non-fatal problems, in the order they were found.
    pub diagnostics: Vec<Diagnostic>,
}

/// Reads title and author from PDF files.
#[derive(Debug, Default, Clone, Copy)]
pub struct MetadataExtractor;

impl MetadataExtractor {
    /// Create a new extractor.
    pub fn new() -> Self {
        Self
    }

    /// Extract metadata from the file at `path`.
    ///
    /// A file that does not parse yields an empty record with a
    /// [`Diagnostic::ParseFailed`]. A broken XMP packet is skipped with a
    /// [`Diagnostic::XmpFailed`] and the info dictionary is still used.
    ///
    /// # Errors
    ///
    /// Returns an error only when the file cannot be read at all.
    pub fn extract(&self, path: &Path) -> Result<Extracted> {
        let loaded = PdfReader::read(path)?;

        let document = match loaded.document {
            Ok(document) => document,
            Err(err) => {
                log::debug!("{}: {err}", path.display());
                return Ok(Extracted {
                    diagnostics: vec![Diagnostic::ParseFailed {
                        reason: err.to_string(),
                    }],
                    ..Extracted::default()
                });
            }
        };

        let stem = path.file_stem().map(|stem| stem.to_string_lossy());
        Ok(self.extract_document(&document, stem.as_deref()))
    }

    /// Extract metadata from an already parsed document.
    ///
    /// `file_stem` is used as title when only an author is found.
    pub fn extract_document(&self, doc: &Document, file_stem: Option<&str>) -> Extracted {
        let (info, mut diagnostics) = read_info(doc);

        let xmp = match read_xmp(doc) {
            Ok(Some(packet)) => MetadataRecord::new(packet.title(), packet.author()),
            Ok(None) => MetadataRecord::default(),
            Err(err) => {
                log::debug!("skipping XMP packet: {err:#}");
                diagnostics.push(Diagnostic::XmpFailed {
                    reason: format!("{err:#}"),
                });
                MetadataRecord::default()
            }
        };

        let candidates = MetadataCandidates::new(info, xmp);
        let record = candidates.resolve(file_stem);
        log::debug!("candidates {candidates:?} resolved to {record:?}");

        Extracted {
            record,
            candidates,
            diagnostics,
        }
    }
}

/// Parse the XMP packet referenced by the catalog, if there is one.
fn read_xmp(doc: &Document) -> AnyResult<Option<XmpPacket>> {
    let Ok(catalog) = doc.catalog() else {
        return Ok(None);
    };
    let Ok(metadata) = catalog.get_deref(b"Metadata", doc) else {
        return Ok(None);
    };
    let Object::Stream(stream) = metadata else {
        return Ok(None);
    };

    let bytes = if stream.dict.has(b"Filter") {
        stream
            .decompressed_content()
            .context("could not decompress metadata stream")?
    } else {
        stream.content.clone()
    };

    XmpPacket::parse(&bytes).map(Some)
}
