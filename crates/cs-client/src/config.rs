//! Client configuration.
//!
//! A [`ClientConfig`] is built once, before any operation is bound, and then
//! shared read-only by every descriptor compiled through the client.

use base64::Engine;
use indexmap::IndexMap;
use tracing::instrument;

use crate::error::{Error, ErrorKind, Result};

/// Shared settings applied to every operation of one client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL every endpoint template is appended to.
    pub base_url: String,
    /// Query parameters appended to every request, in insertion order.
    pub query_params: IndexMap<String, String>,
    /// Basic authentication credentials.
    pub auth: Option<BasicAuth>,
    /// Proxy the execution layer should route through.
    pub proxy: Option<ProxySettings>,
    /// Skip certificate and hostname verification. Never in production.
    pub tls_verification_disabled: bool,
}

impl ClientConfig {
    /// Create a new client config builder.
    pub fn builder(base_url: impl Into<String>) -> ClientConfigBuilder {
        ClientConfigBuilder::new(base_url)
    }
}

/// Builder for ClientConfig.
#[derive(Debug)]
pub struct ClientConfigBuilder {
    config: ClientConfig,
}

impl ClientConfigBuilder {
    /// Start a builder for the given base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            config: ClientConfig {
                base_url: base_url.into(),
                query_params: IndexMap::new(),
                auth: None,
                proxy: None,
                tls_verification_disabled: false,
            },
        }
    }

    /// Add a default query parameter. Re-adding a key replaces its value in place.
    pub fn with_query_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.config.query_params.insert(key.into(), value.into());
        self
    }

    /// Add several default query parameters.
    pub fn with_query_params<I, K, V>(mut self, params: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.config
            .query_params
            .extend(params.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }

    /// Set basic authentication credentials.
    pub fn with_basic_auth(
        mut self,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        self.config.auth = Some(BasicAuth::new(username, password));
        self
    }

    /// Set the proxy.
    pub fn with_proxy(mut self, proxy: ProxySettings) -> Self {
        self.config.proxy = Some(proxy);
        self
    }

    /// Disable TLS certificate and hostname verification.
    pub fn with_tls_verification_disabled(mut self, disabled: bool) -> Self {
        self.config.tls_verification_disabled = disabled;
        self
    }

    /// Build the client configuration.
    ///
    /// Fails if the base URL is not an absolute URL.
    #[instrument(skip(self), fields(base_url = %self.config.base_url))]
    pub fn build(self) -> Result<ClientConfig> {
        let parsed = url::Url::parse(&self.config.base_url)?;
        if parsed.cannot_be_a_base() {
            return Err(Error::new(ErrorKind::InvalidUrl(format!(
                "{} cannot be used as a base URL",
                self.config.base_url
            ))));
        }
        if self.config.tls_verification_disabled {
            tracing::warn!("TLS verification disabled for this client");
        }
        Ok(self.config)
    }
}

/// Basic authentication credentials.
///
/// The password is redacted in Debug output.
#[derive(Clone, PartialEq, Eq)]
pub struct BasicAuth {
    pub username: String,
    pub password: String,
}

impl std::fmt::Debug for BasicAuth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BasicAuth")
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

impl BasicAuth {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Value of the `Authorization` header for these credentials.
    pub fn authorization_header(&self) -> String {
        let raw = format!("{}:{}", self.username, self.password);
        format!(
            "Basic {}",
            base64::engine::general_purpose::STANDARD.encode(raw)
        )
    }
}

/// Proxy the execution layer routes requests through.
///
/// The password is redacted in Debug output.
#[derive(Clone, PartialEq, Eq)]
pub struct ProxySettings {
    pub url: String,
    pub username: Option<String>,
    pub password: Option<String>,
    pub port: u16,
}

impl std::fmt::Debug for ProxySettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProxySettings")
            .field("url", &self.url)
            .field("username", &self.username)
            .field("password", &self.password.as_ref().map(|_| "[REDACTED]"))
            .field("port", &self.port)
            .finish()
    }
}

impl ProxySettings {
    /// An unauthenticated proxy.
    pub fn new(url: impl Into<String>, port: u16) -> Self {
        Self {
            url: url.into(),
            username: None,
            password: None,
            port,
        }
    }

    /// Add proxy credentials.
    pub fn with_credentials(
        mut self,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        self.username = Some(username.into());
        self.password = Some(password.into());
        self
    }
}
