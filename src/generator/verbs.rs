use http::Method;

use super::naming::capitalize;

/// Verbs that get the short-form `Http*` routing attribute in ASP.NET.
///
/// This set is fixed; anything else falls through to `AcceptVerbs`.
const WELL_KNOWN_VERBS: [&str; 7] = ["DELETE", "GET", "HEAD", "OPTIONS", "PATCH", "POST", "PUT"];

/// Map an HTTP verb to the routing attribute token emitted above the method.
///
/// Well-known verbs map to the canonical short form (`GET` → `HttpGet`,
/// `PATCH` → `HttpPatch`). Any other verb is emitted through the generic
/// verb-list attribute with its casing preserved verbatim, e.g.
/// `AcceptVerbs("PURGE")`.
pub fn method_attribute(method: &Method) -> String {
    let verb = method.as_str();
    if WELL_KNOWN_VERBS.contains(&verb) {
        format!("Http{}", capitalize(&verb.to_ascii_lowercase()))
    } else {
        format!("AcceptVerbs(\"{verb}\")")
    }
}

/// Strip the single leading `/` from a binding path to form the `Route`
/// attribute argument.
///
/// Returns `None` when the path does not start with `/`; the binding layer
/// guarantees it does, so `None` means the model broke its contract.
pub fn route_fragment(path: &str) -> Option<&str> {
    path.strip_prefix('/')
}
