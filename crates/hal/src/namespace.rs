use crate::error::{HalError, Result};

/// A short prefix bound to a documentation href template, used to qualify
/// custom relation tokens such as `ns:parent`.
///
/// Namespaces carry documentation metadata only; they are never consulted
/// when resolving link hrefs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Namespace {
    prefix: String,
    href: String,
}

impl Namespace {
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn href(&self) -> &str {
        &self.href
    }
}

/// Registry of namespaces in registration order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NamespaceRegistry {
    namespaces: Vec<Namespace>,
}

impl NamespaceRegistry {
    /// Registers a prefix. Prefixes are unique within one registry; a second
    /// registration of the same prefix fails even with an identical href.
    pub fn register(&mut self, prefix: &str, href: &str) -> Result<()> {
        if self.namespaces.iter().any(|ns| ns.prefix == prefix) {
            return Err(HalError::DuplicateNamespace(prefix.to_string()));
        }
        self.namespaces.push(Namespace {
            prefix: prefix.to_string(),
            href: href.to_string(),
        });
        Ok(())
    }

    /// Looks up the href template registered for `prefix`.
    pub fn resolve(&self, prefix: &str) -> Option<&str> {
        self.namespaces
            .iter()
            .find(|ns| ns.prefix == prefix)
            .map(|ns| ns.href.as_str())
    }

    /// Iterates namespaces in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &Namespace> {
        self.namespaces.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.namespaces.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registers_and_resolves_in_order() -> Result<()> {
        let mut registry = NamespaceRegistry::default();
        registry.register("ns", "/apidocs/accounts")?;
        registry.register("role", "/apidocs/roles")?;

        assert_eq!(registry.resolve("ns"), Some("/apidocs/accounts"));
        assert_eq!(registry.resolve("missing"), None);

        let prefixes: Vec<&str> = registry.iter().map(Namespace::prefix).collect();
        assert_eq!(prefixes, vec!["ns", "role"]);
        Ok(())
    }

    #[test]
    fn rejects_duplicate_prefix_even_with_same_href() {
        let mut registry = NamespaceRegistry::default();
        registry.register("ns", "/apidocs/accounts").unwrap();

        let err = registry.register("ns", "/apidocs/accounts").unwrap_err();
        assert!(matches!(err, HalError::DuplicateNamespace(prefix) if prefix == "ns"));
    }
}
