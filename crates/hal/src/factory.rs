use url::Url;

use crate::error::{HalError, Result};
use crate::link::Link;
use crate::namespace::NamespaceRegistry;
use crate::resource::Resource;

/// A default link applied to every resource a factory mints, resolved
/// against the factory base at mint time.
#[derive(Debug, Clone, PartialEq, Eq)]
struct LinkTemplate {
    href: String,
    rel: String,
}

/// Process-wide-configured builder that seeds new [`Resource`] instances with
/// a base URI, a shared namespace registry, and a set of default links.
///
/// Configuration calls consume the factory and return an extended one, so a
/// fully-configured factory is an immutable value: it is safe to share
/// read-only across threads, and resources minted from it never observe later
/// configuration.
///
/// ```ignore
/// let factory = ResourceFactory::new("https://example.com/api/")?
///     .with_namespace("ns", "/apidocs/accounts")?
///     .with_link("/home", "home");
///
/// let resource = factory.new_resource("customer/123456")?;
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ResourceFactory {
    base: Url,
    namespaces: NamespaceRegistry,
    default_links: Vec<LinkTemplate>,
}

impl ResourceFactory {
    /// Creates a factory rooted at an absolute base href. Relative or
    /// malformed input fails with [`HalError::InvalidUri`].
    pub fn new(base_href: &str) -> Result<Self> {
        let base = Url::parse(base_href).map_err(|source| HalError::invalid_uri(base_href, source))?;
        Ok(ResourceFactory {
            base,
            namespaces: NamespaceRegistry::default(),
            default_links: Vec::new(),
        })
    }

    /// Registers a namespace prefix. Registering an already-present prefix is
    /// a hard validation error, not silently ignored.
    pub fn with_namespace(mut self, prefix: &str, href: &str) -> Result<Self> {
        self.namespaces.register(prefix, href)?;
        Ok(self)
    }

    /// Appends a default link copied onto every resource this factory
    /// subsequently creates, positioned after the self-link.
    pub fn with_link(mut self, href: &str, rel: &str) -> Self {
        self.default_links.push(LinkTemplate {
            href: href.to_string(),
            rel: rel.to_string(),
        });
        self
    }

    /// Mints a resource at `href` resolved against the factory base, seeded
    /// with its self-link and the factory's default links.
    pub fn new_resource(&self, href: &str) -> Result<Resource> {
        let resolved = self
            .base
            .join(href)
            .map_err(|source| HalError::invalid_uri(href, source))?;

        let mut links = Vec::with_capacity(self.default_links.len());
        for template in &self.default_links {
            let link_href = self
                .base
                .join(&template.href)
                .map_err(|source| HalError::invalid_uri(&template.href, source))?;
            links.push(Link::new(template.rel.clone(), link_href.to_string()));
        }

        Ok(Resource::new(self.clone(), resolved, links))
    }

    pub fn base_href(&self) -> &str {
        self.base.as_str()
    }

    pub fn namespaces(&self) -> &NamespaceRegistry {
        &self.namespaces
    }
}
