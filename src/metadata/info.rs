//! Document information dictionary.
//!
//! Reads `Title` and `Author` from the dictionary referenced by the trailer's
//! `Info` entry. Values may be indirect references and are resolved first.

use lopdf::{Dictionary, Document, Object};

use super::{Diagnostic, Field, MetadataRecord};

/// Read title and author from the document information dictionary.
///
/// A missing dictionary or missing entries simply leave the fields unset.
/// Entries that are strings but not valid text produce a
/// [`Diagnostic::Decode`] and are left unset as well.
pub fn read_info(doc: &Document) -> (MetadataRecord, Vec<Diagnostic>) {
    let mut diagnostics = Vec::new();

    let Some(info) = info_dictionary(doc) else {
        log::debug!("no Info dictionary in trailer");
        return (MetadataRecord::default(), diagnostics);
    };

    let title = string_entry(doc, info, Field::Title, &mut diagnostics);
    let author = string_entry(doc, info, Field::Author, &mut diagnostics);

    (MetadataRecord::new(title, author), diagnostics)
}

/// Locate the info dictionary, whether stored inline or by reference.
fn info_dictionary(doc: &Document) -> Option<&Dictionary> {
    let entry = doc.trailer.get(b"Info").ok()?;
    let (_, object) = doc.dereference(entry).ok()?;
    object.as_dict().ok()
}

fn string_entry(
    doc: &Document,
    info: &Dictionary,
    field: Field,
    diagnostics: &mut Vec<Diagnostic>,
) -> Option<String> {
    let key: &[u8] = match field {
        Field::Title => b"Title",
        Field::Author => b"Author",
    };

    let bytes = match info.get_deref(key, doc) {
        Ok(Object::String(bytes, _)) => bytes,
        // Names, numbers and dangling references carry no usable text.
        Ok(_) | Err(_) => return None,
    };

    match decode_text(bytes) {
        Some(text) => Some(text),
        None => {
            diagnostics.push(Diagnostic::Decode {
                field,
                bytes: bytes.clone(),
            });
            None
        }
    }
}

/// Decode a PDF text string.
///
/// Strings starting with the UTF-16BE byte order mark are decoded as
/// UTF-16BE. Everything else must be valid UTF-8 (an optional UTF-8 byte
/// order mark is dropped). Returns `None` when the bytes are not valid in
/// the detected encoding.
///
/// # Examples
///
/// ```
/// use pdf_title_rename::metadata::info::decode_text;
///
/// assert_eq!(decode_text(b"My Paper").as_deref(), Some("My Paper"));
/// assert_eq!(decode_text(&[0xFE, 0xFF, 0x00, 0x41]).as_deref(), Some("A"));
/// assert_eq!(decode_text(&[0xE9, b't', 0xE9]), None);
/// ```
pub fn decode_text(bytes: &[u8]) -> Option<String> {
    if let Some(utf16) = bytes.strip_prefix(&[0xFE, 0xFF]) {
        if utf16.len() % 2 != 0 {
            return None;
        }
        let units: Vec<u16> = utf16
            .chunks_exact(2)
            .map(|pair| u16::from_be_bytes([pair[0], pair[1]]))
            .collect();
        return String::from_utf16(&units).ok();
    }

    let utf8 = bytes.strip_prefix(&[0xEF, 0xBB, 0xBF]).unwrap_or(bytes);
    std::str::from_utf8(utf8).ok().map(str::to_string)
}
