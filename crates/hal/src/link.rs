use std::fmt;
use std::sync::Arc;

use crate::resource::Resource;

/// Capability test attached to a link, consulted when deciding which embedded
/// resource instances a declared relation applies to in collection contexts.
pub type LinkPredicate = Arc<dyn Fn(&Resource) -> bool + Send + Sync>;

/// A typed link: a relation token (possibly namespace-qualified, e.g.
/// `ns:parent`), a resolved href, and optional `name`/`title`/`hreflang`
/// attributes.
#[derive(Clone)]
pub struct Link {
    rel: String,
    href: String,
    name: Option<String>,
    title: Option<String>,
    hreflang: Option<String>,
    predicate: Option<LinkPredicate>,
}

impl Link {
    pub fn new(rel: impl Into<String>, href: impl Into<String>) -> Self {
        Link {
            rel: rel.into(),
            href: href.into(),
            name: None,
            title: None,
            hreflang: None,
            predicate: None,
        }
    }

    pub fn with_attributes(
        rel: impl Into<String>,
        href: impl Into<String>,
        predicate: Option<LinkPredicate>,
        name: Option<&str>,
        title: Option<&str>,
        hreflang: Option<&str>,
    ) -> Self {
        Link {
            rel: rel.into(),
            href: href.into(),
            name: name.map(str::to_string),
            title: title.map(str::to_string),
            hreflang: hreflang.map(str::to_string),
            predicate,
        }
    }

    pub fn rel(&self) -> &str {
        &self.rel
    }

    pub fn href(&self) -> &str {
        &self.href
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn hreflang(&self) -> Option<&str> {
        self.hreflang.as_deref()
    }

    /// Evaluates the link's predicate against a candidate resource. Links
    /// without a predicate apply to everything.
    pub fn applies_to(&self, resource: &Resource) -> bool {
        match &self.predicate {
            Some(predicate) => predicate(resource),
            None => true,
        }
    }
}

impl fmt::Debug for Link {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Link")
            .field("rel", &self.rel)
            .field("href", &self.href)
            .field("name", &self.name)
            .field("title", &self.title)
            .field("hreflang", &self.hreflang)
            .field("predicate", &self.predicate.is_some())
            .finish()
    }
}

// Predicates are opaque callables and do not take part in equality.
impl PartialEq for Link {
    fn eq(&self, other: &Self) -> bool {
        self.rel == other.rel
            && self.href == other.href
            && self.name == other.name
            && self.title == other.title
            && self.hreflang == other.hreflang
    }
}

impl fmt::Display for Link {
    /// Renders the link in its XML element form, e.g.
    /// `<link rel="home" href="https://example.com/home"/>`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<link rel=\"{}\" href=\"{}\"", self.rel, self.href)?;
        if let Some(name) = &self.name {
            write!(f, " name=\"{}\"", name)?;
        }
        if let Some(title) = &self.title {
            write!(f, " title=\"{}\"", title)?;
        }
        if let Some(hreflang) = &self.hreflang {
            write!(f, " hreflang=\"{}\"", hreflang)?;
        }
        write!(f, "/>")
    }
}
