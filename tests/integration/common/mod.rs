//! Shared helpers for the integration tests.
//!
//! Fixture PDFs are generated with `lopdf` inside a temporary directory, so
//! every test starts from fresh files it is free to rename.

#![allow(dead_code)]

use lopdf::{Dictionary, Document, Object, Stream, dictionary};
use pdf_title_rename::config::{Config, Destination};
use std::path::{Path, PathBuf};

/// Metadata written into a fixture.
#[derive(Debug, Default, Clone)]
pub struct Fixture<'a> {
    /// Info dictionary `Title`.
    pub title: Option<&'a str>,
    /// Info dictionary `Author`.
    pub author: Option<&'a str>,
    /// Raw XMP packet stored as the catalog's `Metadata` stream.
    pub xmp: Option<String>,
}

/// Write a one-page PDF with the given metadata to `dir/name`.
///
/// # Panics
///
/// Panics if the file cannot be written.
pub fn create_pdf(dir: &Path, name: &str, fixture: Fixture<'_>) -> PathBuf {
    let mut doc = Document::with_version("1.5");

    let pages_id = doc.new_object_id();
    let page_id = doc.add_object(dictionary! {
        "Type" => "Page",
        "Parent" => pages_id,
        "MediaBox" => vec![0.into(), 0.into(), 612.into(), 792.into()],
    });
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => vec![Object::from(page_id)],
            "Count" => 1i64,
        }),
    );

    let mut catalog = dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    };
    if let Some(xmp) = fixture.xmp {
        let stream = Stream::new(
            dictionary! { "Type" => "Metadata", "Subtype" => "XML" },
            xmp.into_bytes(),
        );
        catalog.set("Metadata", doc.add_object(stream));
    }
    let catalog_id = doc.add_object(catalog);
    doc.trailer.set("Root", catalog_id);

    let mut info = Dictionary::new();
    if let Some(title) = fixture.title {
        info.set("Title", Object::string_literal(title));
    }
    if let Some(author) = fixture.author {
        info.set("Author", Object::string_literal(author));
    }
    if !info.is_empty() {
        let info_id = doc.add_object(info);
        doc.trailer.set("Info", info_id);
    }

    let path = dir.join(name);
    doc.save(&path).expect("Failed to write fixture PDF");
    path
}

/// An XMP packet with a default-language title and a creator sequence.
pub fn xmp_packet(title: Option<&str>, creators: &[&str]) -> String {
    let title = title
        .map(|t| {
            format!(
                r#"<dc:title><rdf:Alt><rdf:li xml:lang="x-default">{t}</rdf:li></rdf:Alt></dc:title>"#
            )
        })
        .unwrap_or_default();
    let creators = if creators.is_empty() {
        String::new()
    } else {
        let items: String = creators
            .iter()
            .map(|c| format!("<rdf:li>{c}</rdf:li>"))
            .collect();
        format!("<dc:creator><rdf:Seq>{items}</rdf:Seq></dc:creator>")
    };

    format!(
        r#"<?xpacket begin="" id="W5M0MpCehiHzreSzNTczkc9d"?>
<x:xmpmeta xmlns:x="adobe:ns:meta/">
  <rdf:RDF xmlns:rdf="http://www.w3.org/1999/02/22-rdf-syntax-ns#">
    <rdf:Description rdf:about="" xmlns:dc="http://purl.org/dc/elements/1.1/">
      {title}
      {creators}
    </rdf:Description>
  </rdf:RDF>
</x:xmpmeta>
<?xpacket end="w"?>"#
    )
}

/// A configuration that renames `inputs` in place.
pub fn config_for(inputs: Vec<PathBuf>) -> Config {
    Config {
        inputs,
        dry_run: false,
        interactive: false,
        destination: Destination::Disabled,
        verbose: false,
    }
}

/// Sorted file names in `dir`.
pub fn file_names(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = std::fs::read_dir(dir)
        .expect("Failed to list directory")
        .map(|entry| {
            entry
                .expect("Failed to read directory entry")
                .file_name()
                .to_string_lossy()
                .into_owned()
        })
        .collect();
    names.sort();
    names
}

#[cfg(test)]
mod tests {
    use super::*;
    use pdf_title_rename::metadata::XmpPacket;

    #[test]
    fn test_fixture_round_trips_through_lopdf() {
        let dir = tempfile::tempdir().unwrap();
        let path = create_pdf(
            dir.path(),
            "fixture.pdf",
            Fixture {
                title: Some("T"),
                ..Fixture::default()
            },
        );
        assert!(Document::load(&path).is_ok());
    }

    #[test]
    fn test_xmp_packet_parses() {
        let packet = XmpPacket::parse(xmp_packet(Some("T"), &["A B"]).as_bytes()).unwrap();
        assert_eq!(packet.title().as_deref(), Some("T"));
        assert_eq!(packet.author().as_deref(), Some("B"));
    }
}
