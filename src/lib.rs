//! # callspec
//!
//! Declarative HTTP API clients for Rust.
//!
//! Describe an API as a set of operations (verb, endpoint template, static
//! headers, and the role each parameter plays), bind it to a client
//! configuration once, and every call compiles into a fully resolved
//! [`RequestDescriptor`]: URL, merged headers, body, auth, proxy and TLS
//! settings. Sending the request is left to whatever execution layer
//! implements [`CallExecutor`].
//!
//! ## Crates
//!
//! - **callspec-schema** - Operation metadata: verbs, templates, parameter roles
//! - **callspec-client** - Client configuration, request compiler, client factory
//!
//! ## Quick Start
//!
//! ```rust
//! use callspec::{ApiClient, ApiSpec, Arguments, Call, ClientConfig, OperationSpec};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ClientConfig::builder("https://api.github.com/")
//!     .with_query_param("per_page", "50")
//!     .build()?;
//!
//! let api = ApiClient::new(config).bind(
//!     ApiSpec::new("github").operation(
//!         OperationSpec::get("list_repos", "/users/{user}/repos")
//!             .header("Accept:application/vnd.github+json")
//!             .path("user")
//!             .returns::<Call<Vec<serde_json::Value>>>(),
//!     ),
//! )?;
//!
//! let call: Call<Vec<serde_json::Value>> =
//!     api.call("list_repos", &Arguments::new().arg("octocat"))?;
//! assert_eq!(
//!     call.request().url(),
//!     "https://api.github.com/users/octocat/repos?per_page=50"
//! );
//! # Ok(())
//! # }
//! ```

// Re-export all crates for convenient access
pub use callspec_client as client;
pub use callspec_schema as schema;

// Re-export commonly used types at the top level
pub use callspec_client::{
    Api, ApiClient, Argument, Arguments, BasicAuth, Call, CallExecutor, ClientConfig, Error,
    ErrorKind, ProxySettings, RequestBody, RequestDescriptor, Result,
};
pub use callspec_schema::{ApiSpec, HttpMethod, OperationSpec, ParamSpec, TypeToken};
