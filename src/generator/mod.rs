//! # Generator Module
//!
//! Turns a validated service model into one ASP.NET Web API controller
//! source unit.
//!
//! ## Pipeline
//!
//! ```text
//! Service Model → Name Resolution → Verb/Route Resolution → Template Rendering → GeneratedUnit
//! ```
//!
//! 1. **Name resolution** - Derives the controller name and namespaces from
//!    the service identity and the optional [`GeneratorConfig`] overrides
//! 2. **Verb/route resolution** - Maps each binding's HTTP verb to its
//!    routing attribute and strips the leading `/` from its path
//! 3. **Template rendering** - Renders the Askama controller template with
//!    the resolved data, one method block per binding in declaration order
//!
//! The whole pipeline is a pure function: no I/O, no shared state, and
//! byte-identical output for identical input. Writing the resulting
//! [`GeneratedUnit`](crate::model::GeneratedUnit) to disk is the caller's
//! concern.

mod config;
mod error;
mod naming;
mod templates;
#[cfg(test)]
mod tests;
mod verbs;

pub use config::GeneratorConfig;
pub use error::ContractViolation;
pub use naming::{api_namespace, capitalize, controller_name, controller_namespace, operation_name};
pub use templates::{ControllerTemplate, MethodView};
pub use verbs::{method_attribute, route_fragment};

use anyhow::Context;
use askama::Template;
use tracing::debug;

use crate::model::{GeneratedUnit, MethodBinding, ServiceIdentity};

/// Generator name stamped into provenance markers of generated files.
pub const GENERATOR_NAME: &str = env!("CARGO_PKG_NAME");
/// Generator version stamped into provenance markers of generated files.
pub const GENERATOR_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Generate the controller source unit for one service.
///
/// Bindings must be in declaration order; the emitted methods preserve that
/// order exactly, so regenerating from an unchanged model is byte-stable.
///
/// # Errors
///
/// Returns a [`ContractViolation`] when the model breaks its contract (empty
/// service name, or a binding path without its leading `/`). Template
/// rendering failures propagate as generator defects.
pub fn generate_controller(
    identity: &ServiceIdentity,
    config: &GeneratorConfig,
    bindings: &[MethodBinding],
) -> anyhow::Result<GeneratedUnit> {
    if identity.name.is_empty() {
        return Err(ContractViolation::EmptyServiceName.into());
    }

    let api_namespace = naming::api_namespace(identity, config);
    let namespace_name = naming::controller_namespace(&api_namespace, config);
    let controller_name = naming::controller_name(identity);
    debug!(
        service = %identity.name,
        %api_namespace,
        %namespace_name,
        %controller_name,
        "resolved controller names"
    );

    let methods = bindings
        .iter()
        .map(|binding| templates::method_view(&identity.name, binding))
        .collect::<Result<Vec<_>, _>>()?;

    let file_name = format!("{controller_name}.cs");
    let mut content = ControllerTemplate {
        generator_name: GENERATOR_NAME,
        generator_version: GENERATOR_VERSION,
        api_namespace,
        namespace_name,
        controller_name,
        methods,
    }
    .render()
    .context("Failed to render controller template")?;
    // Askama trims the template's final newline; the emitted unit ends with one.
    content.push('\n');

    debug!(%file_name, methods = bindings.len(), "generated controller unit");
    Ok(GeneratedUnit { file_name, content })
}
