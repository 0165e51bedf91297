#![allow(clippy::unwrap_used, clippy::expect_used)]

use super::*;
use crate::model::{MethodBinding, ServiceIdentity};
use http::Method;

#[test]
fn test_capitalize() {
    assert_eq!(capitalize("widget"), "Widget");
    assert_eq!(capitalize("myWidget"), "MyWidget");
    assert_eq!(capitalize("x"), "X");
    assert_eq!(capitalize(""), "");
}

#[test]
fn test_capitalize_idempotent() {
    assert_eq!(capitalize("Widget"), "Widget");
    assert_eq!(capitalize(&capitalize("widget")), "Widget");
}

#[test]
fn test_capitalize_first_char_only() {
    // Only the first character changes; the rest is left untouched.
    assert_eq!(capitalize("getWidgetById"), "GetWidgetById");
    assert_eq!(capitalize("éclair"), "Éclair");
}

#[test]
fn test_controller_name() {
    assert_eq!(
        controller_name(&ServiceIdentity::new("widget")),
        "WidgetController"
    );
    assert_eq!(
        controller_name(&ServiceIdentity::new("Widget")),
        "WidgetController"
    );
}

#[test]
fn test_api_namespace_precedence() {
    let config = GeneratorConfig::default();
    let declared = ServiceIdentity::with_api_namespace("widget", "Acme.Widgets");
    assert_eq!(api_namespace(&declared, &config), "Acme.Widgets");

    let bare = ServiceIdentity::new("widget");
    assert_eq!(api_namespace(&bare, &config), "Widget");

    let overridden = GeneratorConfig {
        api_namespace_name: Some("Override.Api".to_string()),
        ..Default::default()
    };
    assert_eq!(api_namespace(&declared, &overridden), "Override.Api");
}

#[test]
fn test_controller_namespace_defaulting() {
    let config = GeneratorConfig::default();
    assert_eq!(
        controller_namespace("Acme.Widgets", &config),
        "Acme.Widgets.Controllers"
    );

    let overridden = GeneratorConfig {
        namespace_name: Some("Acme.Web".to_string()),
        ..Default::default()
    };
    assert_eq!(controller_namespace("Acme.Widgets", &overridden), "Acme.Web");
}

#[test]
fn test_method_attribute_well_known_verbs() {
    assert_eq!(method_attribute(&Method::GET), "HttpGet");
    assert_eq!(method_attribute(&Method::POST), "HttpPost");
    assert_eq!(method_attribute(&Method::PUT), "HttpPut");
    assert_eq!(method_attribute(&Method::DELETE), "HttpDelete");
    assert_eq!(method_attribute(&Method::HEAD), "HttpHead");
    assert_eq!(method_attribute(&Method::OPTIONS), "HttpOptions");
    assert_eq!(method_attribute(&Method::PATCH), "HttpPatch");
}

#[test]
fn test_method_attribute_custom_verb() {
    let purge = Method::from_bytes(b"PURGE").unwrap();
    assert_eq!(method_attribute(&purge), "AcceptVerbs(\"PURGE\")");
}

#[test]
fn test_method_attribute_preserves_custom_verb_casing() {
    // A lowercase token is not one of the well-known verbs; it must pass
    // through AcceptVerbs verbatim, not be normalized.
    let lower = Method::from_bytes(b"purge").unwrap();
    assert_eq!(method_attribute(&lower), "AcceptVerbs(\"purge\")");
}

#[test]
fn test_route_fragment() {
    assert_eq!(route_fragment("/widgets/{id}"), Some("widgets/{id}"));
    assert_eq!(route_fragment("/"), Some(""));
    assert_eq!(route_fragment("widgets"), None);
    assert_eq!(route_fragment(""), None);
}

#[test]
fn test_route_fragment_strips_exactly_one_slash() {
    assert_eq!(route_fragment("//double"), Some("/double"));
}

#[test]
fn test_method_view_obsolete_variants() {
    let mut binding = MethodBinding::new("get", Method::GET, "/widgets/{id}");
    let view = templates::method_view("widget", &binding).unwrap();
    assert_eq!(view.operation, "Get");
    assert_eq!(view.attribute, "HttpGet");
    assert_eq!(view.route, "widgets/{id}");
    assert_eq!(view.obsolete, None);

    binding.deprecated = true;
    let view = templates::method_view("widget", &binding).unwrap();
    assert_eq!(view.obsolete.as_deref(), Some("Obsolete"));

    binding.deprecation_message = Some("use v2".to_string());
    let view = templates::method_view("widget", &binding).unwrap();
    assert_eq!(view.obsolete.as_deref(), Some("Obsolete(\"use v2\")"));
}

#[test]
fn test_method_view_escapes_obsolete_message() {
    let binding = MethodBinding {
        deprecated: true,
        deprecation_message: Some("use \"v2\" at C:\\api".to_string()),
        ..MethodBinding::new("get", Method::GET, "/widgets/{id}")
    };
    let view = templates::method_view("widget", &binding).unwrap();
    assert_eq!(
        view.obsolete.as_deref(),
        Some("Obsolete(\"use \\\"v2\\\" at C:\\\\api\")")
    );
}

#[test]
fn test_method_view_rejects_bad_path() {
    let binding = MethodBinding::new("get", Method::GET, "widgets");
    let err = templates::method_view("widget", &binding).unwrap_err();
    assert_eq!(
        err,
        ContractViolation::RoutePathMissingSlash {
            service: "widget".to_string(),
            method: "get".to_string(),
            path: "widgets".to_string(),
        }
    );
    let message = err.to_string();
    assert!(message.contains("widget.get"));
    assert!(message.contains("'widgets'"));
}

#[test]
fn test_empty_service_name_rejected() {
    let identity = ServiceIdentity::new("");
    let err = generate_controller(&identity, &GeneratorConfig::default(), &[]).unwrap_err();
    let violation = err.downcast::<ContractViolation>().unwrap();
    assert_eq!(violation, ContractViolation::EmptyServiceName);
}
