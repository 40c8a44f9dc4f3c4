//! Operation and parameter markers.

use serde::Serialize;

use crate::method::HttpMethod;
use crate::token::{ReturnType, TypeToken};

// =============================================================================
// Request marker
// =============================================================================

/// Verb plus endpoint template of an operation.
///
/// The template may contain any number of `{name}` placeholders, and a name
/// may repeat.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RequestLine {
    pub method: HttpMethod,
    pub endpoint: String,
}

impl RequestLine {
    pub fn new(method: HttpMethod, endpoint: impl Into<String>) -> Self {
        Self {
            method,
            endpoint: endpoint.into(),
        }
    }
}

// =============================================================================
// Parameters
// =============================================================================

/// Compile-time classification of one formal parameter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "role", content = "value", rename_all = "snake_case")]
pub enum ParamRole {
    /// Substituted into every `{name}` placeholder of the endpoint template.
    Path(String),
    /// A string-to-string mapping merged over the static headers.
    HeaderMap,
    /// Candidate payload for POST, PUT and PATCH, declared with its type.
    Body(TypeToken),
    /// Carried in the signature but inert for compilation.
    Unbound,
}

/// One formal parameter: its name and role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParamSpec {
    pub name: String,
    #[serde(flatten)]
    pub role: ParamRole,
}

impl ParamSpec {
    /// A path parameter named after its placeholder.
    pub fn path(placeholder: impl Into<String>) -> Self {
        let placeholder = placeholder.into();
        Self {
            name: placeholder.clone(),
            role: ParamRole::Path(placeholder),
        }
    }

    pub fn header_map(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            role: ParamRole::HeaderMap,
        }
    }

    /// A body parameter accepting arguments of type `T`.
    pub fn body<T: ?Sized + 'static>(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            role: ParamRole::Body(TypeToken::of::<T>()),
        }
    }

    pub fn unbound(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            role: ParamRole::Unbound,
        }
    }

    /// Rename the parameter without changing its role.
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }
}

// =============================================================================
// Operation
// =============================================================================

/// Declarative description of one operation.
///
/// Built with chained setters; the parameter order is the order in which
/// arguments must be supplied at invocation time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OperationSpec {
    name: String,
    request: Option<RequestLine>,
    headers: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    follow_redirects: Option<bool>,
    params: Vec<ParamSpec>,
    response_type: TypeToken,
}

impl OperationSpec {
    /// An operation without a Request marker.
    ///
    /// Call [`OperationSpec::request`] before binding it, or use one of the
    /// verb constructors.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            request: None,
            headers: Vec::new(),
            follow_redirects: None,
            params: Vec::new(),
            response_type: TypeToken::of::<()>(),
        }
    }

    pub fn get(name: impl Into<String>, endpoint: impl Into<String>) -> Self {
        Self::new(name).request(HttpMethod::Get, endpoint)
    }

    pub fn put(name: impl Into<String>, endpoint: impl Into<String>) -> Self {
        Self::new(name).request(HttpMethod::Put, endpoint)
    }

    pub fn post(name: impl Into<String>, endpoint: impl Into<String>) -> Self {
        Self::new(name).request(HttpMethod::Post, endpoint)
    }

    pub fn patch(name: impl Into<String>, endpoint: impl Into<String>) -> Self {
        Self::new(name).request(HttpMethod::Patch, endpoint)
    }

    pub fn delete(name: impl Into<String>, endpoint: impl Into<String>) -> Self {
        Self::new(name).request(HttpMethod::Delete, endpoint)
    }

    /// Set the Request marker.
    pub fn request(mut self, method: HttpMethod, endpoint: impl Into<String>) -> Self {
        self.request = Some(RequestLine::new(method, endpoint));
        self
    }

    /// Add one static header in `key:value` form.
    ///
    /// The entry is only parsed when the operation is compiled.
    pub fn header(mut self, header: impl Into<String>) -> Self {
        self.headers.push(header.into());
        self
    }

    /// Add several static headers in `key:value` form.
    pub fn headers<I, S>(mut self, headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.headers.extend(headers.into_iter().map(Into::into));
        self
    }

    /// Override the execution layer's redirect policy.
    pub fn follow_redirects(mut self, follow: bool) -> Self {
        self.follow_redirects = Some(follow);
        self
    }

    /// Append a parameter.
    pub fn param(mut self, param: ParamSpec) -> Self {
        self.params.push(param);
        self
    }

    /// Append a path parameter bound to `{placeholder}`.
    pub fn path(self, placeholder: impl Into<String>) -> Self {
        self.param(ParamSpec::path(placeholder))
    }

    /// Append a header map parameter.
    pub fn header_map(self, name: impl Into<String>) -> Self {
        self.param(ParamSpec::header_map(name))
    }

    /// Append a body parameter of type `T`.
    pub fn body<T: ?Sized + 'static>(self, name: impl Into<String>) -> Self {
        self.param(ParamSpec::body::<T>(name))
    }

    /// Append a parameter that plays no part in compilation.
    pub fn unbound(self, name: impl Into<String>) -> Self {
        self.param(ParamSpec::unbound(name))
    }

    /// Declare the return type, unwrapping call-handle wrappers.
    pub fn returns<R: ReturnType>(mut self) -> Self {
        self.response_type = R::response_type();
        self
    }

    /// Declare the response type token directly.
    pub fn response_type(mut self, token: TypeToken) -> Self {
        self.response_type = token;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn request_line(&self) -> Option<&RequestLine> {
        self.request.as_ref()
    }

    pub fn static_headers(&self) -> &[String] {
        &self.headers
    }

    pub fn redirect_policy(&self) -> Option<bool> {
        self.follow_redirects
    }

    pub fn params(&self) -> &[ParamSpec] {
        &self.params
    }

    pub fn declared_response_type(&self) -> TypeToken {
        self.response_type
    }
}

// =============================================================================
// Operation set
// =============================================================================

/// An abstract operation set: the interface a client is built from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiSpec {
    name: String,
    operations: Vec<OperationSpec>,
}

impl ApiSpec {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            operations: Vec::new(),
        }
    }

    /// Add an operation.
    pub fn operation(mut self, operation: OperationSpec) -> Self {
        self.operations.push(operation);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn operations(&self) -> &[OperationSpec] {
        &self.operations
    }

    /// Look up an operation by name.
    pub fn find(&self, name: &str) -> Option<&OperationSpec> {
        self.operations.iter().find(|op| op.name == name)
    }

    pub fn into_operations(self) -> Vec<OperationSpec> {
        self.operations
    }
}
