//! # callspec-schema
//!
//! Declarative metadata for describing an HTTP API as a set of operations.
//!
//! An [`ApiSpec`] is the abstract operation set. Each [`OperationSpec`]
//! carries the markers the request compiler in `callspec-client` reads:
//!
//! | Marker | Attaches to | Type |
//! |---|---|---|
//! | Request | operation | [`RequestLine`] |
//! | Headers | operation | `Vec<String>` of `key:value` entries |
//! | FollowRedirects | operation | `Option<bool>` |
//! | PathSubstitution | parameter | [`ParamRole::Path`] |
//! | HeaderMap | parameter | [`ParamRole::HeaderMap`] |
//! | Body | parameter | [`ParamRole::Body`] |
//!
//! ## Example
//!
//! ```rust
//! use callspec_schema::{ApiSpec, OperationSpec};
//!
//! #[derive(serde::Serialize)]
//! struct NewRepo {
//!     name: String,
//! }
//!
//! let api = ApiSpec::new("github")
//!     .operation(
//!         OperationSpec::get("list_repos", "/users/{user}/repos")
//!             .header("Accept:application/vnd.github+json")
//!             .path("user")
//!             .returns::<Vec<String>>(),
//!     )
//!     .operation(
//!         OperationSpec::post("create_repo", "/user/repos")
//!             .header_map("headers")
//!             .body::<NewRepo>("repo"),
//!     );
//!
//! assert_eq!(api.operations().len(), 2);
//! ```
//!
//! ## Design Principles
//!
//! - **Pure data**: no I/O and no compilation logic, only the vocabulary
//! - **Serde only**: specs serialize for inspection and dumping

mod method;
mod operation;
mod token;

pub use method::HttpMethod;
pub use operation::{ApiSpec, OperationSpec, ParamRole, ParamSpec, RequestLine};
pub use token::{ReturnType, TypeToken};
