//! HAL+XML rendering.
//!
//! The renderer performs a pre-order walk of the resource tree and writes
//! quick-xml events directly. The byte layout is a fixed compatibility
//! contract, not a platform default: every element occupies its own line,
//! lines are indented two spaces per depth and terminated with CRLF, and
//! attribute order within an element is `rel`/`href` first, then `name`,
//! `title`, `hreflang` when present.

use std::io::Write;

use halbuilder::{Link, Resource, Value};
use quick_xml::Writer;
use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};

use crate::error::{RenderError, Result};

/// Renders a resource tree to a HAL+XML string.
pub fn to_xml_string(resource: &Resource) -> Result<String> {
    let mut buffer = Vec::new();
    to_xml_writer(resource, &mut buffer)?;
    String::from_utf8(buffer).map_err(|e| RenderError::Custom(e.to_string()))
}

/// Renders a resource tree to a HAL+XML byte vector.
pub fn to_xml_vec(resource: &Resource) -> Result<Vec<u8>> {
    let mut buffer = Vec::new();
    to_xml_writer(resource, &mut buffer)?;
    Ok(buffer)
}

/// Renders a resource tree to a HAL+XML writer.
pub fn to_xml_writer<W: Write>(resource: &Resource, writer: W) -> Result<()> {
    let mut renderer = XmlRenderer::new(writer);
    renderer.render(resource)
}

/// Stateful walker emitting quick-xml events for one resource tree.
struct XmlRenderer<W: Write> {
    writer: Writer<W>,
}

impl<W: Write> XmlRenderer<W> {
    fn new(writer: W) -> Self {
        XmlRenderer {
            writer: Writer::new(writer),
        }
    }

    fn render(&mut self, resource: &Resource) -> Result<()> {
        self.render_resource(resource, None, 0)
    }

    /// Emits one `<resource>` element and its subtree. `rel` is present for
    /// embedded resources and identifies the relation they were embedded
    /// under; namespaces are declared on the root element only.
    fn render_resource(&mut self, resource: &Resource, rel: Option<&str>, depth: usize) -> Result<()> {
        let xmlns: Vec<(String, String)> = if depth == 0 {
            resource
                .namespaces()
                .iter()
                .map(|ns| (format!("xmlns:{}", ns.prefix()), ns.href().to_string()))
                .collect()
        } else {
            Vec::new()
        };

        let mut element = BytesStart::new("resource");
        if let Some(rel) = rel {
            element.push_attribute(("rel", rel));
        }
        element.push_attribute(("href", resource.href()));
        for (key, value) in &xmlns {
            element.push_attribute((key.as_str(), value.as_str()));
        }
        self.writer.write_event(Event::Start(element))?;

        for link in resource.canonical_links() {
            self.write_line_break(depth + 1)?;
            self.write_link(&link)?;
        }
        for (name, value) in resource.properties() {
            self.write_line_break(depth + 1)?;
            self.write_property(name, value, depth + 1)?;
        }
        for (rel, subresource) in resource.embedded() {
            self.write_line_break(depth + 1)?;
            self.render_resource(subresource, Some(rel), depth + 1)?;
        }

        self.write_line_break(depth)?;
        self.writer.write_event(Event::End(BytesEnd::new("resource")))?;
        Ok(())
    }

    fn write_link(&mut self, link: &Link) -> Result<()> {
        let mut element = BytesStart::new("link");
        element.push_attribute(("rel", link.rel()));
        element.push_attribute(("href", link.href()));
        if let Some(name) = link.name() {
            element.push_attribute(("name", name));
        }
        if let Some(title) = link.title() {
            element.push_attribute(("title", title));
        }
        if let Some(hreflang) = link.hreflang() {
            element.push_attribute(("hreflang", hreflang));
        }
        self.writer.write_event(Event::Empty(element))?;
        Ok(())
    }

    fn write_property(&mut self, name: &str, value: &Value, depth: usize) -> Result<()> {
        match value {
            Value::Null => {
                self.writer.write_event(Event::Empty(BytesStart::new(name)))?;
            }
            Value::Resource(subresource) => {
                self.writer.write_event(Event::Start(BytesStart::new(name)))?;
                self.write_line_break(depth + 1)?;
                self.render_resource(subresource, None, depth + 1)?;
                self.write_line_break(depth)?;
                self.writer.write_event(Event::End(BytesEnd::new(name)))?;
            }
            Value::String(text) => self.write_text_property(name, text)?,
            Value::Integer(number) => self.write_text_property(name, &number.to_string())?,
            Value::Boolean(flag) => {
                self.write_text_property(name, if *flag { "true" } else { "false" })?
            }
        }
        Ok(())
    }

    fn write_text_property(&mut self, name: &str, text: &str) -> Result<()> {
        self.writer.write_event(Event::Start(BytesStart::new(name)))?;
        self.writer.write_event(Event::Text(BytesText::new(text)))?;
        self.writer.write_event(Event::End(BytesEnd::new(name)))?;
        Ok(())
    }

    /// CRLF plus two-space indentation for the coming depth, written as
    /// pre-escaped text so quick-xml passes it through untouched.
    fn write_line_break(&mut self, depth: usize) -> Result<()> {
        let mut text = String::with_capacity(2 + depth * 2);
        text.push_str("\r\n");
        for _ in 0..depth {
            text.push_str("  ");
        }
        self.writer
            .write_event(Event::Text(BytesText::from_escaped(text.as_str())))?;
        Ok(())
    }
}
