use std::fmt;

/// Upstream model contract violation detected during generation.
///
/// The generator performs no domain validation; these cover the two
/// invariants it depends on to emit well-formed output. Both are defects in
/// the caller's model, not recoverable runtime conditions: generation of the
/// unit aborts without emitting anything.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContractViolation {
    /// The service name is empty, so no controller name can be derived.
    EmptyServiceName,
    /// A binding's route path does not start with `/`.
    ///
    /// Route emission strips exactly one leading separator; a path without
    /// one would produce an invalid route declaration.
    RoutePathMissingSlash {
        /// The service being generated.
        service: String,
        /// The method whose binding is malformed.
        method: String,
        /// The offending path.
        path: String,
    },
}

impl fmt::Display for ContractViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContractViolation::EmptyServiceName => {
                write!(
                    f,
                    "Model contract violation: service name is empty. \
                    The controller name is derived from the service name, which must be non-empty."
                )
            }
            ContractViolation::RoutePathMissingSlash {
                service,
                method,
                path,
            } => {
                write!(
                    f,
                    "Model contract violation: path '{}' of method '{}.{}' does not start with '/'. \
                    Binding paths must carry exactly one leading separator.",
                    path, service, method
                )
            }
        }
    }
}

impl std::error::Error for ContractViolation {}
