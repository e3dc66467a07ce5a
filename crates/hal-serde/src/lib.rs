//! # HAL rendering
//!
//! This crate renders `halbuilder` resource trees into their two wire
//! formats: HAL+XML and HAL+JSON. Both renderers walk the same finished
//! model read-only and must encode identical logical content — the same
//! links, properties, and embedded tree — differing only in surface syntax.
//!
//! Output is byte-exact by contract:
//!
//! - **HAL+XML**: element per line, two-space indentation, CRLF terminators,
//!   fixed attribute order (`rel`/`href`, then `name`, `title`, `hreflang`).
//! - **HAL+JSON**: member order `_links`, properties, `_embedded`; LF
//!   terminators, two-space indentation.
//!
//! ## Example
//!
//! ```ignore
//! use halbuilder_serde::{RenderContent, HAL_JSON, HAL_XML};
//!
//! let xml = resource.render_content(HAL_XML)?;
//! let json = resource.render_content(HAL_JSON)?;
//! ```

pub mod error;
pub mod json;
pub mod xml;

use halbuilder::Resource;

pub use error::{RenderError, Result};
pub use json::{to_json_string, to_json_value};
pub use xml::{to_xml_string, to_xml_vec, to_xml_writer};

/// Render format token selecting HAL+XML.
pub const HAL_XML: &str = "application/hal+xml";

/// Render format token selecting HAL+JSON.
pub const HAL_JSON: &str = "application/hal+json";

/// Renders `resource` in the format selected by `content_type`; any token
/// other than [`HAL_XML`] or [`HAL_JSON`] is rejected.
pub fn render_content(resource: &Resource, content_type: &str) -> Result<String> {
    match content_type {
        HAL_XML => xml::to_xml_string(resource),
        HAL_JSON => json::to_json_string(resource),
        other => Err(RenderError::UnsupportedFormat(other.to_string())),
    }
}

/// Extension trait putting [`render_content`] on [`Resource`] itself.
pub trait RenderContent {
    fn render_content(&self, content_type: &str) -> Result<String>;
}

impl RenderContent for Resource {
    fn render_content(&self, content_type: &str) -> Result<String> {
        render_content(self, content_type)
    }
}
