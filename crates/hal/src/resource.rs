use serde::Serialize;
use url::Url;

use crate::error::{HalError, Result};
use crate::factory::ResourceFactory;
use crate::link::{Link, LinkPredicate};
use crate::namespace::NamespaceRegistry;
use crate::value::{Record, Value};

/// An in-memory HAL resource: a resolved href, ordered properties, links
/// grouped by relation, and embedded sub-resources grouped by relation.
///
/// Resources are minted by a [`ResourceFactory`] and populated through
/// chaining builder calls; every builder step is a pure mutation with no I/O.
/// Fallible steps return `Result<Resource>` so chains compose with `?`:
///
/// ```ignore
/// let resource = factory
///     .new_resource("customer/123456")?
///     .with_link("?users", "ns:users")?
///     .with_property("id", 123456)
///     .with_property("name", "Example Resource");
/// ```
///
/// The canonical self-link is synthesized from the href and is always the
/// first canonical link; builder calls can only add further links, so every
/// resource carries exactly one self-link.
#[derive(Debug, Clone, PartialEq)]
pub struct Resource {
    factory: ResourceFactory,
    href: Url,
    links: Vec<Link>,
    properties: Vec<(String, Value)>,
    embedded: Vec<(String, Resource)>,
}

impl Resource {
    pub(crate) fn new(factory: ResourceFactory, href: Url, links: Vec<Link>) -> Self {
        Resource {
            factory,
            href,
            links,
            properties: Vec::new(),
            embedded: Vec::new(),
        }
    }

    /// The resource's resolved location.
    pub fn href(&self) -> &str {
        self.href.as_str()
    }

    /// Namespaces registered on the minting factory, for relation
    /// qualification and xmlns rendering.
    pub fn namespaces(&self) -> &NamespaceRegistry {
        self.factory.namespaces()
    }

    /// The canonical self-link.
    pub fn resource_link(&self) -> Link {
        Link::new("self", self.href.as_str())
    }

    /// All links across all relations in insertion order, self-link first.
    pub fn canonical_links(&self) -> Vec<Link> {
        let mut links = Vec::with_capacity(self.links.len() + 1);
        links.push(self.resource_link());
        links.extend(self.links.iter().cloned());
        links
    }

    /// Links registered under exactly `rel`, in insertion order. `"self"`
    /// yields the synthesized self-link.
    pub fn links_by_rel(&self, rel: &str) -> Vec<Link> {
        if rel == "self" {
            return vec![self.resource_link()];
        }
        self.links
            .iter()
            .filter(|link| link.rel() == rel)
            .cloned()
            .collect()
    }

    /// Properties in insertion order.
    pub fn properties(&self) -> &[(String, Value)] {
        &self.properties
    }

    /// Embedded sub-resources as (relation, resource) entries in insertion
    /// order. One relation may appear several times.
    pub fn embedded(&self) -> &[(String, Resource)] {
        &self.embedded
    }

    /// Appends a link under `rel`, resolving `href` against this resource's
    /// own href when relative.
    pub fn add_link(&mut self, href: &str, rel: &str) -> Result<()> {
        self.add_full_link(href, rel, None, None, None, None)
    }

    /// Appends a link with the full attribute set.
    pub fn add_full_link(
        &mut self,
        href: &str,
        rel: &str,
        predicate: Option<LinkPredicate>,
        name: Option<&str>,
        title: Option<&str>,
        hreflang: Option<&str>,
    ) -> Result<()> {
        let resolved = self
            .href
            .join(href)
            .map_err(|source| HalError::invalid_uri(href, source))?;
        self.links.push(Link::with_attributes(
            rel,
            resolved.to_string(),
            predicate,
            name,
            title,
            hreflang,
        ));
        Ok(())
    }

    /// Appends a property, or replaces the value in place when `name` is
    /// already present (last write wins, original position kept).
    pub fn add_property(&mut self, name: &str, value: impl Into<Value>) {
        let value = value.into();
        match self.properties.iter_mut().find(|(existing, _)| existing == name) {
            Some(slot) => slot.1 = value,
            None => self.properties.push((name.to_string(), value)),
        }
    }

    /// Chaining form of [`Resource::add_link`].
    pub fn with_link(mut self, href: &str, rel: &str) -> Result<Self> {
        self.add_link(href, rel)?;
        Ok(self)
    }

    /// Chaining form of [`Resource::add_full_link`].
    pub fn with_full_link(
        mut self,
        href: &str,
        rel: &str,
        predicate: Option<LinkPredicate>,
        name: Option<&str>,
        title: Option<&str>,
        hreflang: Option<&str>,
    ) -> Result<Self> {
        self.add_full_link(href, rel, predicate, name, title, hreflang)?;
        Ok(self)
    }

    /// Chaining form of [`Resource::add_property`].
    pub fn with_property(mut self, name: &str, value: impl Into<Value>) -> Self {
        self.add_property(name, value);
        self
    }

    /// Runs a reusable population callback against this resource. Only the
    /// callback's side effects are observed.
    pub fn with_serializable<F>(mut self, populate: F) -> Result<Self>
    where
        F: FnOnce(&mut Resource) -> Result<()>,
    {
        populate(&mut self)?;
        Ok(self)
    }

    /// Adds one property per record entry via the explicit record adapter
    /// (`#[derive(Record)]`), in declaration order.
    pub fn with_bean<T: Record>(mut self, record: &T) -> Self {
        for (name, value) in record.record_properties() {
            self.add_property(&name, value);
        }
        self
    }

    /// Adds one property per public field via serde introspection, in
    /// declaration order. Fields outside the supported property types fail
    /// with [`HalError::UnsupportedPropertyType`].
    pub fn with_fields<T: Serialize>(mut self, record: &T) -> Result<Self> {
        let json = serde_json::to_value(record)
            .map_err(|err| HalError::UnsupportedPropertyType(err.to_string()))?;
        let serde_json::Value::Object(fields) = json else {
            return Err(HalError::UnsupportedPropertyType(
                "record must serialize to an object with named fields".to_string(),
            ));
        };
        for (name, field) in fields {
            let value = Value::from_json(&name, field)?;
            self.add_property(&name, value);
        }
        Ok(self)
    }

    /// Embeds `resource` once under each whitespace-separated relation token
    /// in `rels`, e.g. `"ns:user role:admin"`. Each token receives its own
    /// owned copy, so embedded trees never share structure.
    pub fn with_subresource(mut self, rels: &str, resource: Resource) -> Self {
        for rel in rels.split_whitespace() {
            self.embedded.push((rel.to_string(), resource.clone()));
        }
        self
    }

    /// Convenience: mints `href` on this resource's factory lineage,
    /// populates it from `record` via [`Resource::with_bean`], and embeds it
    /// under `rels`.
    pub fn with_bean_based_subresource<T: Record>(
        self,
        rels: &str,
        href: &str,
        record: &T,
    ) -> Result<Self> {
        let subresource = self.factory.new_resource(href)?.with_bean(record);
        Ok(self.with_subresource(rels, subresource))
    }
}
