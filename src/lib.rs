//! # aspnetgen
//!
//! **aspnetgen** generates ASP.NET Web API controller scaffolding from a
//! validated, in-memory service model.
//!
//! ## Overview
//!
//! Given a service identity and its resolved HTTP method bindings, the
//! generator emits one complete C# source unit: a `partial class` controller
//! with one operation per method, each tagged with its routing attribute and
//! delegating to a runtime-supplied handler. The crate never parses service
//! definitions and never touches the filesystem for output; the upstream
//! definition layer produces the model, and the caller writes the resulting
//! unit wherever it belongs.
//!
//! ## Architecture
//!
//! - **[`model`]** - The input/output data model: service identity, method
//!   bindings, and the generated unit
//! - **[`generator`]** - Name/namespace resolution, verb-to-attribute
//!   mapping, and Askama-based text emission
//!
//! ## Usage
//!
//! ```rust,ignore
//! use aspnetgen::generator::{generate_controller, GeneratorConfig};
//! use aspnetgen::model::{MethodBinding, ServiceIdentity};
//! use http::Method;
//!
//! let identity = ServiceIdentity::new("order");
//! let bindings = vec![
//!     MethodBinding::new("get", Method::GET, "/orders/{id}"),
//!     MethodBinding::new("create", Method::POST, "/orders"),
//! ];
//! let unit = generate_controller(&identity, &GeneratorConfig::default(), &bindings)?;
//! assert_eq!(unit.file_name, "OrderController.cs");
//! # Ok::<(), anyhow::Error>(())
//! ```
//!
//! ## Generated contract
//!
//! Each emitted operation calls
//! `GetServiceHttpHandler().TryHandle<Operation>Async(httpRequest, cancellationToken)`.
//! Application code supplies those handler methods in a separate compilation
//! unit; the `partial class` declaration and the
//! `System.CodeDom.Compiler.GeneratedCode` marker keep regeneration safe
//! alongside hand-written members.

pub mod generator;
pub mod model;

pub use generator::{generate_controller, ContractViolation, GeneratorConfig};
pub use model::{GeneratedUnit, MethodBinding, ServiceIdentity};
