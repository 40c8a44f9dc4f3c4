//! Compiled request descriptors.

use bytes::Bytes;
use callspec_schema::{HttpMethod, TypeToken};
use indexmap::IndexMap;

use crate::argument::{ArgValue, Argument};
use crate::config::{BasicAuth, ProxySettings};

/// Request body content.
#[derive(Debug, Clone, PartialEq)]
pub enum RequestBody {
    Json(serde_json::Value),
    Text(String),
    Bytes(Bytes),
}

impl From<&Argument> for RequestBody {
    fn from(argument: &Argument) -> Self {
        match argument.get() {
            ArgValue::Json(value) => RequestBody::Json(value.clone()),
            ArgValue::Text(text) => RequestBody::Text(text.clone()),
            ArgValue::Bytes(bytes) => RequestBody::Bytes(bytes.clone()),
            ArgValue::Headers(map) => RequestBody::Json(
                map.iter()
                    .map(|(k, v)| (k.clone(), serde_json::Value::String(v.clone())))
                    .collect::<serde_json::Map<_, _>>()
                    .into(),
            ),
        }
    }
}

/// A fully resolved HTTP request, ready for the execution layer.
///
/// Immutable once compiled. The execution layer decodes the response into
/// the type named by [`RequestDescriptor::response_type`].
#[derive(Debug, Clone, PartialEq)]
pub struct RequestDescriptor {
    pub(crate) method: HttpMethod,
    pub(crate) url: String,
    pub(crate) headers: IndexMap<String, String>,
    pub(crate) body: Option<RequestBody>,
    pub(crate) auth: Option<BasicAuth>,
    pub(crate) proxy: Option<ProxySettings>,
    pub(crate) tls_verification_disabled: bool,
    pub(crate) follow_redirects: Option<bool>,
    pub(crate) response_type: TypeToken,
}

impl RequestDescriptor {
    pub fn method(&self) -> HttpMethod {
        self.method
    }

    /// Resolved URL including default query parameters.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Merged headers.
    pub fn headers(&self) -> &IndexMap<String, String> {
        &self.headers
    }

    /// Header value by case-insensitive name.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    pub fn body(&self) -> Option<&RequestBody> {
        self.body.as_ref()
    }

    pub fn auth(&self) -> Option<&BasicAuth> {
        self.auth.as_ref()
    }

    pub fn proxy(&self) -> Option<&ProxySettings> {
        self.proxy.as_ref()
    }

    pub fn tls_verification_disabled(&self) -> bool {
        self.tls_verification_disabled
    }

    /// Redirect override; `None` leaves the execution layer's default.
    pub fn follow_redirects(&self) -> Option<bool> {
        self.follow_redirects
    }

    pub fn response_type(&self) -> TypeToken {
        self.response_type
    }
}
