//! Minimal element tree built from quick-xml events.
//!
//! The export feeds are small, flat documents, so they are read fully into
//! an [`Element`] tree and then queried by direct-child tag name.

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

use crate::error::FeedError;

#[derive(Debug, Clone, Default, PartialEq)]
pub(crate) struct Element {
    pub(crate) name: String,
    /// Text appearing before the first child element. Raw, untrimmed.
    pub(crate) text: String,
    pub(crate) children: Vec<Element>,
}

impl Element {
    fn new(name: String) -> Self {
        Self {
            name,
            ..Self::default()
        }
    }

    fn push_text(&mut self, text: &str) {
        if self.children.is_empty() {
            self.text.push_str(text);
        }
    }

    /// Direct children named `tag`, in document order.
    pub(crate) fn children_named<'a>(&'a self, tag: &'a str) -> impl Iterator<Item = &'a Element> {
        self.children.iter().filter(move |c| c.name == tag)
    }

    /// First direct child named `tag`.
    pub(crate) fn child(&self, tag: &str) -> Option<&Element> {
        self.children.iter().find(|c| c.name == tag)
    }

    /// Trimmed text of the first direct child named `tag`, or `""` when
    /// there is no such child.
    pub(crate) fn child_text(&self, tag: &str) -> &str {
        self.child(tag).map_or("", |c| c.text.trim())
    }
}

/// Reads `xml` into an element tree and returns its root.
///
/// # Errors
///
/// Returns [`FeedError::Xml`] for syntax errors reported by quick-xml
/// (including mismatched end tags and undefined entity references) and
/// [`FeedError::MalformedDocument`] when the document has no root, has content
/// after the root, or ends with open elements.
pub(crate) fn parse_document(xml: &str) -> Result<Element, FeedError> {
    let mut reader = Reader::from_str(xml);

    let mut stack: Vec<Element> = Vec::new();
    let mut root: Option<Element> = None;

    loop {
        match reader.read_event()? {
            Event::Start(e) => {
                if stack.is_empty() && root.is_some() {
                    return Err(FeedError::MalformedDocument(
                        "content after the root element".to_string(),
                    ));
                }
                stack.push(Element::new(tag_name(&e)));
            }
            Event::Empty(e) => {
                attach(&mut stack, &mut root, Element::new(tag_name(&e)))?;
            }
            Event::End(_) => {
                let element = stack.pop().ok_or_else(|| {
                    FeedError::MalformedDocument("closing tag without an open element".to_string())
                })?;
                attach(&mut stack, &mut root, element)?;
            }
            Event::Text(e) => {
                let text = e.unescape()?;
                if let Some(current) = stack.last_mut() {
                    current.push_text(&text);
                } else if root.is_some() && !text.trim().is_empty() {
                    return Err(FeedError::MalformedDocument(
                        "content after the root element".to_string(),
                    ));
                }
            }
            Event::CData(e) => {
                if let Some(current) = stack.last_mut() {
                    current.push_text(&String::from_utf8_lossy(e.as_ref()));
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if let Some(open) = stack.last() {
        return Err(FeedError::MalformedDocument(format!(
            "unexpected end of document inside <{}>",
            open.name
        )));
    }

    root.ok_or_else(|| FeedError::MalformedDocument("document has no root element".to_string()))
}

/// Appends `element` to the innermost open element, or makes it the root.
fn attach(
    stack: &mut [Element],
    root: &mut Option<Element>,
    element: Element,
) -> Result<(), FeedError> {
    if let Some(parent) = stack.last_mut() {
        parent.children.push(element);
        return Ok(());
    }
    if root.is_some() {
        return Err(FeedError::MalformedDocument(
            "content after the root element".to_string(),
        ));
    }
    *root = Some(element);
    Ok(())
}

fn tag_name(e: &BytesStart<'_>) -> String {
    String::from_utf8_lossy(e.name().as_ref()).into_owned()
}
