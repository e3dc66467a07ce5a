use halbuilder::{Record, Resource, ResourceFactory};
use halbuilder_serde::{HAL_JSON, HAL_XML, RenderContent, RenderError, render_content};
use serde::Serialize;
use serde_json::json;

type TestResult = std::result::Result<(), Box<dyn std::error::Error>>;

fn resource_factory() -> ResourceFactory {
    ResourceFactory::new("https://example.com/api/")
        .unwrap()
        .with_namespace("ns", "/apidocs/accounts")
        .unwrap()
        .with_namespace("role", "/apidocs/roles")
        .unwrap()
}

/// Every scenario starts from a customer resource carrying the documented
/// parent link.
fn base_resource(factory: &ResourceFactory, href: &str) -> halbuilder::Result<Resource> {
    factory.new_resource(href)?.with_full_link(
        "/api/customer/1234",
        "ns:parent",
        None,
        Some("bob"),
        Some("The Parent"),
        Some("en"),
    )
}

fn customer(factory: &ResourceFactory) -> halbuilder::Result<Resource> {
    Ok(base_resource(factory, "customer/123456")?
        .with_link("?users", "ns:users")?
        .with_property("id", 123456)
        .with_property("age", 33)
        .with_property("name", "Example Resource")
        .with_property("optional", true)
        .with_property("expired", false))
}

fn crlf(lines: &[&str]) -> String {
    lines.join("\r\n")
}

const EXAMPLE_XML_LINES: &[&str] = &[
    r#"<resource href="https://example.com/api/customer/123456" xmlns:ns="/apidocs/accounts" xmlns:role="/apidocs/roles">"#,
    r#"  <link rel="self" href="https://example.com/api/customer/123456"/>"#,
    r#"  <link rel="ns:parent" href="https://example.com/api/customer/1234" name="bob" title="The Parent" hreflang="en"/>"#,
    r#"  <link rel="ns:users" href="https://example.com/api/customer/123456?users"/>"#,
    r#"  <id>123456</id>"#,
    r#"  <age>33</age>"#,
    r#"  <name>Example Resource</name>"#,
    r#"  <optional>true</optional>"#,
    r#"  <expired>false</expired>"#,
];

fn example_xml() -> String {
    let mut lines: Vec<&str> = EXAMPLE_XML_LINES.to_vec();
    lines.push("</resource>");
    crlf(&lines)
}

/// The embedded-user block at one level of nesting, as rendered under `rel`.
fn user_xml_lines(rel: &str, id: i64) -> Vec<String> {
    vec![
        format!(r#"  <resource rel="{rel}" href="https://example.com/user/{id}">"#),
        format!(r#"    <link rel="self" href="https://example.com/user/{id}"/>"#),
        format!(r#"    <id>{id}</id>"#),
        r#"    <age>32</age>"#.to_string(),
        r#"    <name>Example User</name>"#.to_string(),
        r#"    <optional>true</optional>"#.to_string(),
        r#"    <expired>false</expired>"#.to_string(),
        r#"  </resource>"#.to_string(),
    ]
}

fn example_xml_with_users(user_ids_per_rel: &[(&str, i64)]) -> String {
    let mut lines: Vec<String> = EXAMPLE_XML_LINES.iter().map(|line| line.to_string()).collect();
    for (rel, id) in user_ids_per_rel {
        lines.extend(user_xml_lines(rel, *id));
    }
    lines.push("</resource>".to_string());
    let borrowed: Vec<&str> = lines.iter().map(String::as_str).collect();
    crlf(&borrowed)
}

const EXAMPLE_JSON: &str = r#"{
  "_links": {
    "self": {
      "href": "https://example.com/api/customer/123456"
    },
    "ns:parent": {
      "href": "https://example.com/api/customer/1234",
      "name": "bob",
      "title": "The Parent",
      "hreflang": "en"
    },
    "ns:users": {
      "href": "https://example.com/api/customer/123456?users"
    }
  },
  "id": 123456,
  "age": 33,
  "name": "Example Resource",
  "optional": true,
  "expired": false
}"#;

fn example_links_json() -> serde_json::Value {
    json!({
        "self": {
            "href": "https://example.com/api/customer/123456"
        },
        "ns:parent": {
            "href": "https://example.com/api/customer/1234",
            "name": "bob",
            "title": "The Parent",
            "hreflang": "en"
        },
        "ns:users": {
            "href": "https://example.com/api/customer/123456?users"
        }
    })
}

fn user_json(id: i64) -> serde_json::Value {
    json!({
        "_links": {
            "self": {
                "href": format!("https://example.com/user/{id}")
            }
        },
        "id": id,
        "age": 32,
        "name": "Example User",
        "optional": true,
        "expired": false
    })
}

#[derive(Record)]
struct Customer {
    id: i64,
    age: i64,
    name: String,
    optional: bool,
    expired: bool,
}

impl Customer {
    fn new(id: i64, name: &str, age: i64) -> Self {
        Customer {
            id,
            age,
            name: name.to_string(),
            optional: true,
            expired: false,
        }
    }
}

#[derive(Serialize)]
struct OtherCustomer {
    pub id: i64,
    pub age: i64,
    pub name: String,
    pub optional: bool,
    pub expired: bool,
}

#[test]
fn test_customer_hal() -> TestResult {
    let party = customer(&resource_factory())?;

    assert_eq!(
        party.resource_link().href(),
        "https://example.com/api/customer/123456"
    );
    assert_eq!(party.render_content(HAL_XML)?, example_xml());
    assert_eq!(party.render_content(HAL_JSON)?, EXAMPLE_JSON);
    Ok(())
}

#[test]
fn test_with_serializable() -> TestResult {
    let party = base_resource(&resource_factory(), "customer/123456")?
        .with_link("?users", "ns:users")?
        .with_serializable(|resource| {
            resource.add_property("id", 123456);
            resource.add_property("age", 33);
            resource.add_property("name", "Example Resource");
            resource.add_property("optional", true);
            resource.add_property("expired", false);
            Ok(())
        })?;

    assert_eq!(party.render_content(HAL_XML)?, example_xml());
    assert_eq!(party.render_content(HAL_JSON)?, EXAMPLE_JSON);
    Ok(())
}

#[test]
fn test_hal_with_bean() -> TestResult {
    let party = base_resource(&resource_factory(), "customer/123456")?
        .with_link("?users", "ns:users")?
        .with_bean(&Customer::new(123456, "Example Resource", 33));

    assert_eq!(party.render_content(HAL_XML)?, example_xml());
    assert_eq!(party.render_content(HAL_JSON)?, EXAMPLE_JSON);
    Ok(())
}

#[test]
fn test_hal_with_fields() -> TestResult {
    let party = base_resource(&resource_factory(), "customer/123456")?
        .with_link("?users", "ns:users")?
        .with_fields(&OtherCustomer {
            id: 123456,
            age: 33,
            name: "Example Resource".to_string(),
            optional: true,
            expired: false,
        })?;

    assert_eq!(party.render_content(HAL_XML)?, example_xml());
    assert_eq!(party.render_content(HAL_JSON)?, EXAMPLE_JSON);
    Ok(())
}

#[test]
fn test_hal_with_subresource() -> TestResult {
    let factory = resource_factory();
    let user = factory
        .new_resource("/user/11")?
        .with_property("id", 11)
        .with_property("age", 32)
        .with_property("name", "Example User")
        .with_property("optional", true)
        .with_property("expired", false);

    let party = customer(&factory)?.with_subresource("ns:user role:admin", user);

    assert_eq!(
        party.render_content(HAL_XML)?,
        example_xml_with_users(&[("ns:user", 11), ("role:admin", 11)])
    );

    let expected = serde_json::to_string_pretty(&json!({
        "_links": example_links_json(),
        "id": 123456,
        "age": 33,
        "name": "Example Resource",
        "optional": true,
        "expired": false,
        "_embedded": {
            "ns:user": user_json(11),
            "role:admin": user_json(11)
        }
    }))?;
    assert_eq!(party.render_content(HAL_JSON)?, expected);
    Ok(())
}

#[test]
fn test_hal_with_bean_subresource() -> TestResult {
    let party = customer(&resource_factory())?.with_bean_based_subresource(
        "ns:user role:admin",
        "/user/11",
        &Customer::new(11, "Example User", 32),
    )?;

    // Identical output to the explicitly-built subresource scenario.
    assert_eq!(
        party.render_content(HAL_XML)?,
        example_xml_with_users(&[("ns:user", 11), ("role:admin", 11)])
    );
    Ok(())
}

#[test]
fn test_hal_with_multiple_subresources() -> TestResult {
    let party = customer(&resource_factory())?
        .with_bean_based_subresource("ns:user role:admin", "/user/11", &Customer::new(11, "Example User", 32))?
        .with_bean_based_subresource("ns:user role:admin", "/user/12", &Customer::new(12, "Example User", 32))?;

    assert_eq!(
        party.render_content(HAL_XML)?,
        example_xml_with_users(&[
            ("ns:user", 11),
            ("role:admin", 11),
            ("ns:user", 12),
            ("role:admin", 12),
        ])
    );

    // A relation holding several embedded resources serializes as an array
    // preserving insertion order.
    let expected = serde_json::to_string_pretty(&json!({
        "_links": example_links_json(),
        "id": 123456,
        "age": 33,
        "name": "Example Resource",
        "optional": true,
        "expired": false,
        "_embedded": {
            "ns:user": [user_json(11), user_json(12)],
            "role:admin": [user_json(11), user_json(12)]
        }
    }))?;
    assert_eq!(party.render_content(HAL_JSON)?, expected);
    Ok(())
}

#[test]
fn test_relation_with_multiple_links_renders_as_array() -> TestResult {
    let party = resource_factory()
        .new_resource("customer/123456")?
        .with_link("/item/1", "ns:item")?
        .with_link("/item/2", "ns:item")?;

    // A relation holding several links serializes as an array preserving
    // insertion order; a single-link relation stays an object.
    let parsed: serde_json::Value = serde_json::from_str(&party.render_content(HAL_JSON)?)?;
    assert_eq!(
        parsed["_links"]["ns:item"],
        json!([
            { "href": "https://example.com/item/1" },
            { "href": "https://example.com/item/2" }
        ])
    );
    assert!(parsed["_links"]["self"].is_object());

    let xml = party.render_content(HAL_XML)?;
    assert!(xml.contains(&crlf(&[
        r#"  <link rel="ns:item" href="https://example.com/item/1"/>"#,
        r#"  <link rel="ns:item" href="https://example.com/item/2"/>"#,
    ])));
    Ok(())
}

#[test]
fn test_nested_resource_property_renders_recursively() -> TestResult {
    let factory = resource_factory();
    let address = factory
        .new_resource("/address/1")?
        .with_property("city", "Springfield");
    let party = factory
        .new_resource("customer/123456")?
        .with_property("id", 123456)
        .with_property("address", address);

    let expected_xml = crlf(&[
        r#"<resource href="https://example.com/api/customer/123456" xmlns:ns="/apidocs/accounts" xmlns:role="/apidocs/roles">"#,
        r#"  <link rel="self" href="https://example.com/api/customer/123456"/>"#,
        r#"  <id>123456</id>"#,
        r#"  <address>"#,
        r#"    <resource href="https://example.com/address/1">"#,
        r#"      <link rel="self" href="https://example.com/address/1"/>"#,
        r#"      <city>Springfield</city>"#,
        r#"    </resource>"#,
        r#"  </address>"#,
        r#"</resource>"#,
    ]);
    assert_eq!(party.render_content(HAL_XML)?, expected_xml);

    // The property key maps to a fully recursive HAL object.
    let parsed: serde_json::Value = serde_json::from_str(&party.render_content(HAL_JSON)?)?;
    assert_eq!(parsed["address"]["city"], json!("Springfield"));
    assert_eq!(
        parsed["address"]["_links"]["self"]["href"],
        json!("https://example.com/address/1")
    );
    Ok(())
}

#[test]
fn test_unknown_format_token_is_rejected() -> TestResult {
    let party = customer(&resource_factory())?;

    let err = render_content(&party, "application/xml").unwrap_err();
    assert!(matches!(err, RenderError::UnsupportedFormat(token) if token == "application/xml"));
    Ok(())
}

/// Both renderers must encode the same logical content: every canonical link,
/// property, and embedded relation present in one output is present in the
/// other.
#[test]
fn test_cross_format_equivalence() -> TestResult {
    let party = customer(&resource_factory())?.with_bean_based_subresource(
        "ns:user role:admin",
        "/user/11",
        &Customer::new(11, "Example User", 32),
    )?;

    let xml = party.render_content(HAL_XML)?;
    let parsed: serde_json::Value = serde_json::from_str(&party.render_content(HAL_JSON)?)?;

    for link in party.canonical_links() {
        assert_eq!(
            parsed["_links"][link.rel()]["href"],
            json!(link.href()),
            "JSON is missing link {}",
            link.rel()
        );
        assert!(
            xml.contains(&format!(r#"<link rel="{}" href="{}""#, link.rel(), link.href())),
            "XML is missing link {}",
            link.rel()
        );
    }
    for (name, _) in party.properties() {
        assert!(parsed.get(name).is_some(), "JSON is missing property {name}");
        assert!(xml.contains(&format!("<{name}>")), "XML is missing property {name}");
    }
    for (rel, subresource) in party.embedded() {
        assert!(
            parsed["_embedded"].get(rel).is_some(),
            "JSON is missing embedded rel {rel}"
        );
        assert!(
            xml.contains(&format!(r#"<resource rel="{}" href="{}">"#, rel, subresource.href())),
            "XML is missing embedded rel {rel}"
        );
    }
    Ok(())
}
