//! # HAL resource model and builder
//!
//! This crate builds in-memory HAL (Hypertext Application Language) resource
//! graphs: ordered properties, typed links grouped by relation, namespace
//! metadata, and embedded sub-resources forming a tree.
//!
//! A [`ResourceFactory`] is configured once (base URI, namespaces, default
//! links) and then mints [`Resource`] values; chaining builder calls populate
//! each resource. Rendering to HAL+XML and HAL+JSON lives in the companion
//! `halbuilder-serde` crate, which walks the finished model read-only.
//!
//! ## Example
//!
//! ```ignore
//! use halbuilder::ResourceFactory;
//!
//! let factory = ResourceFactory::new("https://example.com/api/")?
//!     .with_namespace("ns", "/apidocs/accounts")?;
//!
//! let customer = factory
//!     .new_resource("customer/123456")?
//!     .with_link("?users", "ns:users")?
//!     .with_property("id", 123456)
//!     .with_property("name", "Example Resource");
//!
//! assert_eq!(customer.href(), "https://example.com/api/customer/123456");
//! ```
//!
//! ## Record adapters
//!
//! Typed records become properties two ways, both deterministic and
//! declaration-ordered:
//!
//! - [`Resource::with_bean`] uses the [`Record`] trait, typically implemented
//!   with `#[derive(Record)]` (re-exported from `halbuilder-macro`).
//! - [`Resource::with_fields`] uses serde `Serialize` introspection directly.

pub mod error;
pub mod factory;
pub mod link;
pub mod namespace;
pub mod resource;
pub mod value;

pub use error::{HalError, Result};
pub use factory::ResourceFactory;
pub use link::{Link, LinkPredicate};
pub use namespace::{Namespace, NamespaceRegistry};
pub use resource::Resource;
pub use value::{Record, Value};

/// Derives [`Record`] for a struct with named fields, enumerating them in
/// declaration order.
pub use halbuilder_macro::Record;
