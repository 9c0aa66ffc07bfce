//! XMP packet reading.
//!
//! An XMP packet is RDF/XML. Properties are collected into a nested mapping
//! keyed by namespace prefix and property name, e.g. `dc` → `title`. Known
//! namespace URIs are mapped to their usual prefix so a packet that binds
//! Dublin Core to an unusual prefix still ends up under `dc`.
//!
//! Values take one of three shapes:
//! - `rdf:Alt` language alternatives become [`XmpValue::LangAlt`]
//! - `rdf:Seq` and `rdf:Bag` arrays become [`XmpValue::List`]
//! - anything else becomes [`XmpValue::Text`]

use anyhow::{Context, Result, bail};
use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};
use std::collections::{BTreeMap, HashMap};

const RDF_NS: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#";

/// Namespace URIs and the prefix their properties are filed under.
const KNOWN_NAMESPACES: &[(&str, &str)] = &[
    (RDF_NS, "rdf"),
    ("http://purl.org/dc/elements/1.1/", "dc"),
    ("http://ns.adobe.com/xap/1.0/", "xmp"),
    ("http://ns.adobe.com/xap/1.0/mm/", "xmpMM"),
    ("http://ns.adobe.com/xap/1.0/rights/", "xmpRights"),
    ("http://ns.adobe.com/pdf/1.3/", "pdf"),
    ("http://ns.adobe.com/photoshop/1.0/", "photoshop"),
    ("http://www.aiim.org/pdfa/ns/id/", "pdfaid"),
    ("http://prismstandard.org/namespaces/basic/2.0/", "prism"),
];

/// Language used for the default entry of a language alternative.
pub const DEFAULT_LANGUAGE: &str = "x-default";

/// Value of a single XMP property.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum XmpValue {
    /// Simple text value.
    Text(String),
    /// Ordered (`rdf:Seq`) or unordered (`rdf:Bag`) array.
    List(Vec<String>),
    /// Language alternative (`rdf:Alt`), keyed by `xml:lang`.
    LangAlt(BTreeMap<String, String>),
}

/// Properties of a parsed XMP packet.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct XmpPacket {
    properties: BTreeMap<String, BTreeMap<String, XmpValue>>,
}

impl XmpPacket {
    /// Parse a raw XMP packet.
    ///
    /// # Errors
    ///
    /// Returns an error when the packet is not well-formed XML, including
    /// mismatched or unclosed elements.
    ///
    /// # Examples
    ///
    /// ```
    /// use pdf_title_rename::metadata::XmpPacket;
    ///
    /// let xml = br#"<rdf:RDF xmlns:rdf="http://www.w3.org/1999/02/22-rdf-syntax-ns#">
    ///   <rdf:Description xmlns:dc="http://purl.org/dc/elements/1.1/">
    ///     <dc:title><rdf:Alt><rdf:li xml:lang="x-default">Findings</rdf:li></rdf:Alt></dc:title>
    ///   </rdf:Description>
    /// </rdf:RDF>"#;
    ///
    /// let packet = XmpPacket::parse(xml).unwrap();
    /// assert_eq!(packet.title().as_deref(), Some("Findings"));
    /// ```
    pub fn parse(bytes: &[u8]) -> Result<Self> {
        let bytes = bytes.strip_prefix(&[0xEF, 0xBB, 0xBF]).unwrap_or(bytes);

        let mut reader = Reader::from_reader(bytes);
        reader.trim_text(true);

        let mut builder = PacketBuilder::default();
        let mut buf = Vec::new();

        loop {
            match reader
                .read_event_into(&mut buf)
                .with_context(|| format!("malformed XML at byte {}", reader.buffer_position()))?
            {
                Event::Start(ref e) => builder.start(e)?,
                Event::Empty(ref e) => {
                    builder.start(e)?;
                    builder.end();
                }
                Event::End(_) => builder.end(),
                Event::Text(ref e) => {
                    let text = e.unescape().context("invalid text content")?;
                    builder.text(&text);
                }
                Event::CData(ref e) => builder.text(&String::from_utf8_lossy(e)),
                Event::Eof => break,
                _ => {}
            }
            buf.clear();
        }

        builder.finish()
    }

    /// Look up a property by namespace prefix and name.
    pub fn get(&self, prefix: &str, name: &str) -> Option<&XmpValue> {
        self.properties.get(prefix)?.get(name)
    }

    /// The default-language `dc:title`.
    ///
    /// A plain text `dc:title` is accepted as well.
    pub fn title(&self) -> Option<String> {
        let title = match self.get("dc", "title")? {
            XmpValue::LangAlt(alternatives) => alternatives.get(DEFAULT_LANGUAGE)?,
            XmpValue::Text(text) => text,
            XmpValue::List(_) => return None,
        };
        Some(title.clone()).filter(|t| !t.trim().is_empty())
    }

    /// All `dc:creator` entries, in document order.
    ///
    /// A plain text value counts as a single creator.
    pub fn creators(&self) -> Vec<String> {
        match self.get("dc", "creator") {
            Some(XmpValue::Text(text)) => vec![text.clone()],
            Some(XmpValue::List(items)) => items.clone(),
            Some(XmpValue::LangAlt(alternatives)) => alternatives.values().cloned().collect(),
            None => Vec::new(),
        }
    }

    /// The author string derived from `dc:creator`, see [`reduce_creators`].
    pub fn author(&self) -> Option<String> {
        reduce_creators(&self.creators())
    }
}

/// Reduce a creator list to the surnames used in file names.
///
/// Blank entries are dropped. One creator gives its last name token; two or
/// more give the last name tokens of the first and the last creator.
///
/// # Examples
///
/// ```
/// use pdf_title_rename::metadata::xmp::reduce_creators;
///
/// assert_eq!(reduce_creators(&["Jane Doe"]).as_deref(), Some("Doe"));
/// assert_eq!(
///     reduce_creators(&["Jane Doe", "Max Mustermann", "John Q. Smith"]).as_deref(),
///     Some("Doe Smith")
/// );
/// assert_eq!(reduce_creators::<&str>(&[]), None);
/// ```
pub fn reduce_creators<S: AsRef<str>>(creators: &[S]) -> Option<String> {
    let surnames: Vec<&str> = creators
        .iter()
        .filter_map(|creator| creator.as_ref().split_whitespace().last())
        .collect();

    match surnames.as_slice() {
        [] => None,
        [only] => Some((*only).to_string()),
        [first, .., last] => Some(format!("{first} {last}")),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Container {
    Alt,
    Seq,
    Bag,
}

#[derive(Debug)]
struct Item {
    depth: usize,
    lang: Option<String>,
    text: String,
}

#[derive(Debug)]
struct Property {
    prefix: String,
    name: String,
    depth: usize,
    text: String,
    container: Option<Container>,
    items: Vec<(Option<String>, String)>,
    item: Option<Item>,
}

impl Property {
    fn into_value(self) -> XmpValue {
        match self.container {
            Some(Container::Alt) => XmpValue::LangAlt(
                self.items
                    .into_iter()
                    .map(|(lang, text)| (lang.unwrap_or_else(|| DEFAULT_LANGUAGE.to_string()), text))
                    .collect(),
            ),
            Some(Container::Seq | Container::Bag) => {
                XmpValue::List(self.items.into_iter().map(|(_, text)| text).collect())
            }
            None => XmpValue::Text(self.text.trim().to_string()),
        }
    }
}

/// Event-driven collector behind [`XmpPacket::parse`].
#[derive(Debug, Default)]
struct PacketBuilder {
    namespaces: HashMap<String, String>,
    stack: Vec<(String, String)>,
    property: Option<Property>,
    properties: BTreeMap<String, BTreeMap<String, XmpValue>>,
}

impl PacketBuilder {
    fn start(&mut self, element: &BytesStart<'_>) -> Result<()> {
        let mut raw_attributes = Vec::new();
        for attribute in element.attributes() {
            let attribute = attribute.context("invalid attribute")?;
            let key = String::from_utf8_lossy(attribute.key.as_ref()).into_owned();
            let value = attribute
                .unescape_value()
                .context("invalid attribute value")?
                .into_owned();

            if key == "xmlns" {
                self.namespaces.insert(String::new(), value);
            } else if let Some(prefix) = key.strip_prefix("xmlns:") {
                self.namespaces.insert(prefix.to_string(), value);
            } else {
                raw_attributes.push((key, value));
            }
        }

        // Declarations may follow the attributes that use them.
        let attributes: Vec<((String, String), String)> = raw_attributes
            .into_iter()
            .map(|(key, value)| (self.canonical(&key), value))
            .collect();

        let name = self.canonical(&String::from_utf8_lossy(element.name().as_ref()));
        let depth = self.stack.len();
        let parent_is_description = self
            .stack
            .last()
            .is_some_and(|(prefix, local)| prefix == "rdf" && local == "Description");

        if let Some(property) = self.property.as_mut() {
            match (name.0.as_str(), name.1.as_str()) {
                ("rdf", "Alt") if property.container.is_none() => {
                    property.container = Some(Container::Alt)
                }
                ("rdf", "Seq") if property.container.is_none() => {
                    property.container = Some(Container::Seq)
                }
                ("rdf", "Bag") if property.container.is_none() => {
                    property.container = Some(Container::Bag)
                }
                ("rdf", "li") if property.item.is_none() => {
                    let lang = attributes
                        .iter()
                        .find(|((prefix, local), _)| prefix == "xml" && local == "lang")
                        .map(|(_, value)| value.clone());
                    property.item = Some(Item {
                        depth,
                        lang,
                        text: String::new(),
                    });
                }
                _ => {}
            }
        } else if name.0 == "rdf" && name.1 == "Description" {
            for ((prefix, local), value) in attributes {
                if prefix.is_empty() || prefix == "rdf" || prefix == "xml" {
                    continue;
                }
                self.insert(prefix, local, XmpValue::Text(value));
            }
        } else if parent_is_description {
            self.property = Some(Property {
                prefix: name.0.clone(),
                name: name.1.clone(),
                depth,
                text: String::new(),
                container: None,
                items: Vec::new(),
                item: None,
            });
        }

        self.stack.push(name);
        Ok(())
    }

    fn end(&mut self) {
        self.stack.pop();
        let depth = self.stack.len();

        let Some(property) = self.property.as_mut() else {
            return;
        };

        if property.item.as_ref().is_some_and(|item| item.depth == depth)
            && let Some(item) = property.item.take()
        {
            property.items.push((item.lang, item.text.trim().to_string()));
        }

        if property.depth == depth
            && let Some(property) = self.property.take()
        {
            let (prefix, name) = (property.prefix.clone(), property.name.clone());
            self.insert(prefix, name, property.into_value());
        }
    }

    fn text(&mut self, text: &str) {
        let Some(property) = self.property.as_mut() else {
            return;
        };

        match property.item.as_mut() {
            Some(item) => item.text.push_str(text),
            None if property.container.is_none() => property.text.push_str(text),
            None => {}
        }
    }

    fn insert(&mut self, prefix: String, name: String, value: XmpValue) {
        self.properties
            .entry(prefix)
            .or_default()
            .insert(name, value);
    }

    /// Split a qualified name and map its prefix to the canonical one.
    fn canonical(&self, qname: &str) -> (String, String) {
        let (prefix, local) = qname.split_once(':').unwrap_or(("", qname));

        let canonical = self
            .namespaces
            .get(prefix)
            .and_then(|uri| {
                KNOWN_NAMESPACES
                    .iter()
                    .find(|(known, _)| known == uri)
                    .map(|(_, name)| *name)
            })
            .unwrap_or(prefix);

        (canonical.to_string(), local.to_string())
    }

    fn finish(self) -> Result<XmpPacket> {
        if let Some((prefix, local)) = self.stack.last() {
            bail!("unexpected end of packet inside <{prefix}:{local}>");
        }

        Ok(XmpPacket {
            properties: self.properties,
        })
    }
}
