//! HAL+JSON rendering.
//!
//! Builds an insertion-ordered `serde_json::Map` (the `preserve_order`
//! feature keeps member order) and pretty-prints it with LF line breaks and
//! two-space indentation. Member order is a fixed contract: `_links` first
//! (`self` always present), then properties in insertion order, then
//! `_embedded` when any resources are embedded. A relation with a single
//! link or embedded resource maps to an object; a relation with several maps
//! to an array preserving insertion order.

use halbuilder::{Link, Resource, Value};
use serde_json::{Map, Value as Json};

use crate::error::Result;

/// Renders a resource tree to a pretty-printed HAL+JSON string.
pub fn to_json_string(resource: &Resource) -> Result<String> {
    Ok(serde_json::to_string_pretty(&to_json_value(resource))?)
}

/// Renders a resource tree to a `serde_json::Value`.
pub fn to_json_value(resource: &Resource) -> Json {
    let mut root = Map::new();
    root.insert("_links".to_string(), links_value(resource));

    for (name, value) in resource.properties() {
        root.insert(name.clone(), property_value(value));
    }

    if !resource.embedded().is_empty() {
        root.insert("_embedded".to_string(), embedded_value(resource));
    }

    Json::Object(root)
}

fn links_value(resource: &Resource) -> Json {
    let mut map = Map::new();
    for (rel, links) in group_by_rel(resource.canonical_links()) {
        let value = if links.len() == 1 {
            link_value(&links[0])
        } else {
            Json::Array(links.iter().map(link_value).collect())
        };
        map.insert(rel, value);
    }
    Json::Object(map)
}

fn link_value(link: &Link) -> Json {
    let mut map = Map::new();
    map.insert("href".to_string(), Json::String(link.href().to_string()));
    if let Some(name) = link.name() {
        map.insert("name".to_string(), Json::String(name.to_string()));
    }
    if let Some(title) = link.title() {
        map.insert("title".to_string(), Json::String(title.to_string()));
    }
    if let Some(hreflang) = link.hreflang() {
        map.insert("hreflang".to_string(), Json::String(hreflang.to_string()));
    }
    Json::Object(map)
}

fn property_value(value: &Value) -> Json {
    match value {
        Value::String(text) => Json::String(text.clone()),
        Value::Integer(number) => Json::from(*number),
        Value::Boolean(flag) => Json::Bool(*flag),
        Value::Null => Json::Null,
        Value::Resource(subresource) => to_json_value(subresource),
    }
}

fn embedded_value(resource: &Resource) -> Json {
    let mut map = Map::new();
    let entries = resource
        .embedded()
        .iter()
        .map(|(rel, subresource)| (rel.clone(), subresource))
        .collect::<Vec<_>>();
    for (rel, subresources) in group_entries(entries) {
        let value = if subresources.len() == 1 {
            to_json_value(subresources[0])
        } else {
            Json::Array(subresources.iter().map(|sub| to_json_value(sub)).collect())
        };
        map.insert(rel, value);
    }
    Json::Object(map)
}

/// Groups links under their relation token, preserving first-seen relation
/// order and per-relation insertion order.
fn group_by_rel(links: Vec<Link>) -> Vec<(String, Vec<Link>)> {
    let mut groups: Vec<(String, Vec<Link>)> = Vec::new();
    for link in links {
        match groups.iter_mut().find(|(rel, _)| rel == link.rel()) {
            Some((_, group)) => group.push(link),
            None => groups.push((link.rel().to_string(), vec![link])),
        }
    }
    groups
}

fn group_entries<'a>(entries: Vec<(String, &'a Resource)>) -> Vec<(String, Vec<&'a Resource>)> {
    let mut groups: Vec<(String, Vec<&'a Resource>)> = Vec::new();
    for (rel, resource) in entries {
        match groups.iter_mut().find(|(existing, _)| *existing == rel) {
            Some((_, group)) => group.push(resource),
            None => groups.push((rel, vec![resource])),
        }
    }
    groups
}
