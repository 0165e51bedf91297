use askama::Template;

use crate::model::MethodBinding;

use super::error::ContractViolation;
use super::{naming, verbs};

/// Per-method view spliced into the controller template.
///
/// All name and verb resolution happens before rendering; the template only
/// handles layout (separators, conditional obsolete marker).
#[derive(Debug, Clone)]
pub struct MethodView {
    /// Capitalized operation name (also names the runtime handler method).
    pub operation: String,
    /// Routing attribute token, e.g. `HttpGet` or `AcceptVerbs("PURGE")`.
    pub attribute: String,
    /// Route path with the leading `/` stripped.
    pub route: String,
    /// Obsolete attribute body, when the method is deprecated.
    pub obsolete: Option<String>,
}

/// Template data for the generated controller source unit.
#[derive(Template)]
#[template(path = "controller.cs.txt", escape = "none")]
pub struct ControllerTemplate {
    /// Generator name stamped into the provenance header.
    pub generator_name: &'static str,
    /// Generator version stamped into the provenance header.
    pub generator_version: &'static str,
    /// Resolved API namespace (imported by the controller).
    pub api_namespace: String,
    /// Resolved namespace the controller lives in.
    pub namespace_name: String,
    /// Controller type name.
    pub controller_name: String,
    /// One view per method, in declaration order.
    pub methods: Vec<MethodView>,
}

/// Escape a deprecation message for splicing into a C# string literal.
///
/// Messages are free-form prose, unlike the model's identifiers and paths,
/// so backslashes and quotes must not break out of the literal.
fn escape_string_literal(s: &str) -> String {
    s.replace('\\', "\\\\").replace('"', "\\\"")
}

/// Resolve one binding into its template view.
///
/// # Errors
///
/// Returns [`ContractViolation::RoutePathMissingSlash`] when the binding
/// path lacks its leading separator.
pub fn method_view(service: &str, binding: &MethodBinding) -> Result<MethodView, ContractViolation> {
    let route = verbs::route_fragment(&binding.path).ok_or_else(|| {
        ContractViolation::RoutePathMissingSlash {
            service: service.to_string(),
            method: binding.name.clone(),
            path: binding.path.clone(),
        }
    })?;
    let obsolete = if binding.deprecated {
        Some(match &binding.deprecation_message {
            Some(message) => format!("Obsolete(\"{}\")", escape_string_literal(message)),
            None => "Obsolete".to_string(),
        })
    } else {
        None
    };
    Ok(MethodView {
        operation: naming::operation_name(&binding.name),
        attribute: verbs::method_attribute(&binding.method),
        route: route.to_string(),
        obsolete,
    })
}
