use crate::model::ServiceIdentity;

use super::config::GeneratorConfig;

/// Uppercase the first character of an identifier, leaving the rest alone.
///
/// Applied once to raw definition names; a no-op on names that already start
/// with an uppercase letter.
///
/// # Example
///
/// ```rust,ignore
/// assert_eq!(capitalize("widget"), "Widget");
/// assert_eq!(capitalize("Widget"), "Widget");
/// ```
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// Resolve the API namespace the generated controller imports.
///
/// Precedence: explicit override, then the namespace declared in the
/// service's package metadata, then the capitalized service name.
pub fn api_namespace(identity: &ServiceIdentity, config: &GeneratorConfig) -> String {
    config
        .api_namespace_name
        .clone()
        .or_else(|| identity.api_namespace.clone())
        .unwrap_or_else(|| capitalize(&identity.name))
}

/// Resolve the namespace the controller itself lives in.
///
/// Defaults to the API namespace with a `.Controllers` sub-scope.
pub fn controller_namespace(api_namespace: &str, config: &GeneratorConfig) -> String {
    config
        .namespace_name
        .clone()
        .unwrap_or_else(|| format!("{api_namespace}.Controllers"))
}

pub fn controller_name(identity: &ServiceIdentity) -> String {
    format!("{}Controller", capitalize(&identity.name))
}

/// Operation name emitted for one service method.
pub fn operation_name(method_name: &str) -> String {
    capitalize(method_name)
}
