//! Namespace-aware XML element tree.
//!
//! METS validation needs a queryable in-memory tree: namespace-qualified
//! path lookups, attribute access, and namespace-map introspection on the
//! root element. quick-xml gives us the event stream; this module folds it
//! into an [`Element`] tree small enough to hold per item and discard.
//!
//! Path expressions are the subset the rule engine uses: absolute paths
//! from the document (`/mets:mets/mets:metsHdr`) and relative child paths
//! (`mets:mdWrap/mets:xmlData/aes:audioObject/aes:primaryIdentifier`,
//! optionally prefixed `./`). Each step descends exactly one level;
//! prefixes resolve through the caller's namespace table and elements match
//! on (namespace URI, local name).

use std::collections::BTreeMap;
use std::path::Path;

use quick_xml::NsReader;
use quick_xml::events::{BytesStart, Event};
use quick_xml::name::{Namespace, ResolveResult};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum XmlError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("xml error: {0}")]
    Parse(#[from] quick_xml::Error),
    #[error("malformed attribute: {0}")]
    Attr(#[from] quick_xml::events::attributes::AttrError),
    #[error("invalid escape sequence: {0}")]
    Escape(#[from] quick_xml::escape::EscapeError),
    #[error("document has no root element")]
    NoRoot,
    #[error("document ended before the root element was closed")]
    UnexpectedEof,
}

/// One element of a parsed document.
#[derive(Debug, Clone)]
pub struct Element {
    namespace: Option<String>,
    prefix: Option<String>,
    local_name: String,
    attributes: Vec<(String, String)>,
    namespace_map: BTreeMap<String, String>,
    text: Option<String>,
    children: Vec<Element>,
}

impl Element {
    /// Local name without prefix.
    pub fn local_name(&self) -> &str {
        &self.local_name
    }

    /// Resolved namespace URI, if the element is namespace-qualified.
    pub fn namespace(&self) -> Option<&str> {
        self.namespace.as_deref()
    }

    /// Display name as written in the document (`mets:metsHdr`).
    pub fn qualified_name(&self) -> String {
        match &self.prefix {
            Some(prefix) => format!("{prefix}:{}", self.local_name),
            None => self.local_name.clone(),
        }
    }

    /// Attribute value by name.
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn has_attr(&self, name: &str) -> bool {
        self.attr(name).is_some()
    }

    /// Direct text content, if the element has any.
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    /// In-scope namespace declarations, prefix to URI. The default
    /// namespace, when declared, is keyed by the empty string.
    pub fn namespace_map(&self) -> &BTreeMap<String, String> {
        &self.namespace_map
    }

    pub fn children(&self) -> &[Element] {
        &self.children
    }

    /// All descendants matching a relative path, one level per step.
    pub fn find_all<'e>(&'e self, path: &str, namespaces: &[(&str, &str)]) -> Vec<&'e Element> {
        let path = path.strip_prefix("./").unwrap_or(path);
        let mut current = vec![self];
        for step in path.split('/').filter(|step| !step.is_empty()) {
            let (namespace, local_name) = resolve_step(step, namespaces);
            let mut next = Vec::new();
            for element in current {
                next.extend(
                    element
                        .children
                        .iter()
                        .filter(|child| child.matches(namespace, local_name)),
                );
            }
            current = next;
        }
        current
    }

    /// First descendant matching a relative path.
    pub fn find<'e>(&'e self, path: &str, namespaces: &[(&str, &str)]) -> Option<&'e Element> {
        self.find_all(path, namespaces).into_iter().next()
    }

    fn matches(&self, namespace: Option<&str>, local_name: &str) -> bool {
        self.namespace.as_deref() == namespace && self.local_name == local_name
    }

    fn append_text(&mut self, chunk: &str) {
        match &mut self.text {
            Some(text) => text.push_str(chunk),
            None => self.text = Some(chunk.to_string()),
        }
    }
}

/// A parsed XML document.
#[derive(Debug, Clone)]
pub struct Document {
    root: Element,
}

impl Document {
    /// Parse a document from a file on disk.
    pub fn parse_file(path: &Path) -> Result<Self, XmlError> {
        let contents = std::fs::read_to_string(path)?;
        Self::parse_str(&contents)
    }

    /// Parse a document from a string.
    pub fn parse_str(xml: &str) -> Result<Self, XmlError> {
        let mut reader = NsReader::from_str(xml);
        let mut stack: Vec<Element> = Vec::new();
        let mut root: Option<Element> = None;

        loop {
            match reader.read_event()? {
                Event::Start(start) => {
                    let element = build_element(&reader, &start, &stack)?;
                    stack.push(element);
                }
                Event::Empty(start) => {
                    let element = build_element(&reader, &start, &stack)?;
                    attach(&mut stack, &mut root, element);
                }
                Event::End(_) => {
                    // Mismatched end tags are quick-xml's to reject
                    let Some(element) = stack.pop() else { continue };
                    attach(&mut stack, &mut root, element);
                }
                Event::Text(text) => {
                    if let Some(parent) = stack.last_mut() {
                        parent.append_text(&String::from_utf8_lossy(text.as_ref()));
                    }
                }
                // References in text content arrive as their own events
                Event::GeneralRef(reference) => {
                    if let Some(parent) = stack.last_mut() {
                        let name = String::from_utf8_lossy(reference.as_ref()).into_owned();
                        parent.append_text(&resolve_general_ref(&name));
                    }
                }
                Event::CData(cdata) => {
                    if let Some(parent) = stack.last_mut() {
                        parent.append_text(&String::from_utf8_lossy(&cdata.into_inner()));
                    }
                }
                Event::Eof => break,
                _ => {}
            }
        }

        if !stack.is_empty() {
            return Err(XmlError::UnexpectedEof);
        }

        root.map(|root| Self { root }).ok_or(XmlError::NoRoot)
    }

    pub fn root(&self) -> &Element {
        &self.root
    }

    /// All elements matching an absolute path; the first step must match
    /// the root element.
    pub fn find_all<'d>(&'d self, path: &str, namespaces: &[(&str, &str)]) -> Vec<&'d Element> {
        let path = path.strip_prefix('/').unwrap_or(path);
        let Some((first, rest)) = split_first_step(path) else {
            return Vec::new();
        };

        let (namespace, local_name) = resolve_step(first, namespaces);
        if !self.root.matches(namespace, local_name) {
            return Vec::new();
        }

        if rest.is_empty() {
            vec![&self.root]
        } else {
            self.root.find_all(rest, namespaces)
        }
    }

    /// First element matching an absolute path.
    pub fn find<'d>(&'d self, path: &str, namespaces: &[(&str, &str)]) -> Option<&'d Element> {
        self.find_all(path, namespaces).into_iter().next()
    }
}

fn split_first_step(path: &str) -> Option<(&str, &str)> {
    if path.is_empty() {
        return None;
    }
    match path.split_once('/') {
        Some((first, rest)) => Some((first, rest)),
        None => Some((path, "")),
    }
}

fn resolve_step<'n, 's>(
    step: &'s str,
    namespaces: &[(&'n str, &'n str)],
) -> (Option<&'n str>, &'s str) {
    match step.split_once(':') {
        Some((prefix, local_name)) => {
            let uri = namespaces
                .iter()
                .find(|(candidate, _)| *candidate == prefix)
                .map(|(_, uri)| *uri);
            (uri, local_name)
        }
        None => (None, step),
    }
}

fn build_element(
    reader: &NsReader<&[u8]>,
    start: &BytesStart<'_>,
    stack: &[Element],
) -> Result<Element, XmlError> {
    let mut namespace_map = stack
        .last()
        .map(|parent| parent.namespace_map.clone())
        .unwrap_or_default();
    let mut attributes = Vec::new();

    for attribute in start.attributes() {
        let attribute = attribute?;
        let key = String::from_utf8_lossy(attribute.key.as_ref()).into_owned();
        let raw_value = String::from_utf8_lossy(&attribute.value).into_owned();
        let value = quick_xml::escape::unescape(&raw_value)?.into_owned();
        if key == "xmlns" {
            namespace_map.insert(String::new(), value);
        } else if let Some(prefix) = key.strip_prefix("xmlns:") {
            namespace_map.insert(prefix.to_string(), value);
        } else {
            attributes.push((key, value));
        }
    }

    let (resolution, local_name) = reader.resolve_element(start.name());
    let namespace = match resolution {
        ResolveResult::Bound(Namespace(uri)) => Some(String::from_utf8_lossy(uri).into_owned()),
        _ => None,
    };
    let prefix = start
        .name()
        .prefix()
        .map(|prefix| String::from_utf8_lossy(prefix.as_ref()).into_owned());

    Ok(Element {
        namespace,
        prefix,
        local_name: String::from_utf8_lossy(local_name.as_ref()).into_owned(),
        attributes,
        namespace_map,
        text: None,
        children: Vec::new(),
    })
}

/// Resolve a general reference name (`amp`, `#xF8`, ...) to its text.
/// Unknown named entities are kept in their written form.
fn resolve_general_ref(name: &str) -> String {
    match name {
        "amp" => "&".to_string(),
        "lt" => "<".to_string(),
        "gt" => ">".to_string(),
        "apos" => "'".to_string(),
        "quot" => "\"".to_string(),
        _ => {
            let code = if let Some(hex) = name.strip_prefix("#x").or_else(|| name.strip_prefix("#X"))
            {
                u32::from_str_radix(hex, 16).ok()
            } else if let Some(decimal) = name.strip_prefix('#') {
                decimal.parse::<u32>().ok()
            } else {
                None
            };
            match code.and_then(char::from_u32) {
                Some(ch) => ch.to_string(),
                None => format!("&{name};"),
            }
        }
    }
}

fn attach(stack: &mut [Element], root: &mut Option<Element>, element: Element) {
    match stack.last_mut() {
        Some(parent) => parent.children.push(element),
        None => {
            // A second root would already be a quick-xml syntax error
            if root.is_none() {
                *root = Some(element);
            }
        }
    }
}
