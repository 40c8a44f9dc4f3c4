//! # callspec-client
//!
//! Compiles calls on declaratively described HTTP operations into request
//! descriptors, without performing any network I/O.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    Application Layer                        │
//! │  (typed wrappers calling Api::call / Api::compile)          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    ApiClient / Api                          │
//! │  - Holds the shared ClientConfig                            │
//! │  - Dispatches by operation name, caches prepared metadata   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    Request compiler                         │
//! │  - Path substitution, query assembly, header merge, body    │
//! │  - Emits an immutable RequestDescriptor                     │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//!                  CallExecutor (external, does I/O)
//! ```
//!
//! ## Example
//!
//! ```rust
//! use callspec_client::{ApiClient, Arguments, Call, ClientConfig, RequestBody};
//! use callspec_schema::{ApiSpec, OperationSpec};
//! use serde::Serialize;
//!
//! #[derive(Serialize)]
//! struct NewIssue {
//!     title: String,
//! }
//!
//! # fn main() -> callspec_client::Result<()> {
//! let config = ClientConfig::builder("https://api.example.com/")
//!     .with_basic_auth("octocat", "token")
//!     .build()?;
//!
//! let api = ApiClient::new(config).bind(
//!     ApiSpec::new("issues").operation(
//!         OperationSpec::post("create_issue", "/repos/{owner}/{repo}/issues")
//!             .header("Accept:application/json")
//!             .path("owner")
//!             .path("repo")
//!             .body::<NewIssue>("issue")
//!             .returns::<Call<serde_json::Value>>(),
//!     ),
//! )?;
//!
//! let args = Arguments::new()
//!     .arg("octocat")
//!     .arg("hello-world")
//!     .value(&NewIssue { title: "Found a bug".into() })?;
//! let call: Call<serde_json::Value> = api.call("create_issue", &args)?;
//!
//! let request = call.request();
//! assert_eq!(request.url(), "https://api.example.com/repos/octocat/hello-world/issues");
//! assert_eq!(request.header("accept"), Some("application/json"));
//! assert!(matches!(request.body(), Some(RequestBody::Json(_))));
//! # Ok(())
//! # }
//! ```

mod argument;
mod call;
mod client;
mod compiler;
mod config;
mod error;
mod headers;
mod query;
mod request;
mod template;

pub use argument::{ArgValue, Argument, Arguments};
pub use call::{Call, CallExecutor};
pub use client::{Api, ApiClient};
pub use compiler::{compile, PreparedOperation};
pub use config::{BasicAuth, ClientConfig, ClientConfigBuilder, ProxySettings};
pub use error::{Error, ErrorKind, Result};
pub use query::encode_param;
pub use request::{RequestBody, RequestDescriptor};

pub use callspec_schema as schema;
