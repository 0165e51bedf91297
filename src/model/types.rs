use http::Method;

/// Identity of the service a controller is generated for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceIdentity {
    /// Service name as declared in the definition (non-empty by contract).
    pub name: String,
    /// Namespace declared in the service's package metadata, if any.
    pub api_namespace: Option<String>,
}

impl ServiceIdentity {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            api_namespace: None,
        }
    }

    pub fn with_api_namespace(name: impl Into<String>, api_namespace: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            api_namespace: Some(api_namespace.into()),
        }
    }
}

/// Resolved HTTP binding for one service method.
///
/// Bindings are produced by the binding-resolution layer in declaration
/// order; that order is preserved verbatim in the emitted controller.
#[derive(Debug, Clone)]
pub struct MethodBinding {
    /// Raw method name from the service definition.
    pub name: String,
    /// Effective HTTP verb. Extension verbs keep their declared casing.
    pub method: Method,
    /// URL path, always starting with `/`.
    pub path: String,
    /// Whether the method is marked obsolete in the definition.
    pub deprecated: bool,
    /// Optional message accompanying the obsolete marker.
    pub deprecation_message: Option<String>,
}

impl MethodBinding {
    pub fn new(name: impl Into<String>, method: Method, path: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            method,
            path: path.into(),
            deprecated: false,
            deprecation_message: None,
        }
    }
}

/// One complete, named source artifact produced by a generation call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedUnit {
    /// Output file name, e.g. `OrderController.cs`.
    pub file_name: String,
    /// Full source text of the unit.
    pub content: String,
}
