//! Client factory and bound operation sets.

use std::collections::HashMap;
use std::sync::Arc;

use callspec_schema::{ApiSpec, OperationSpec, TypeToken};
use dashmap::DashMap;
use tracing::{debug, instrument};

use crate::argument::Arguments;
use crate::call::Call;
use crate::compiler::PreparedOperation;
use crate::config::ClientConfig;
use crate::error::{Error, ErrorKind, Result};
use crate::request::RequestDescriptor;

/// Builds callable implementations of operation sets.
///
/// Owns the shared [`ClientConfig`]; every [`Api`] bound through it reads the
/// same configuration.
///
/// # Example
///
/// ```rust
/// use callspec_client::{ApiClient, Arguments, ClientConfig};
/// use callspec_schema::{ApiSpec, OperationSpec};
///
/// # fn main() -> callspec_client::Result<()> {
/// let client = ApiClient::new(ClientConfig::builder("https://api.github.com/").build()?);
/// let api = client.bind(
///     ApiSpec::new("github")
///         .operation(OperationSpec::get("list_repos", "/users/{user}/repos").path("user")),
/// )?;
///
/// let request = api.compile("list_repos", &Arguments::new().arg("octocat"))?;
/// assert_eq!(request.url(), "https://api.github.com/users/octocat/repos");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ApiClient {
    config: Arc<ClientConfig>,
}

impl ApiClient {
    pub fn new(config: ClientConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Build the callable implementation of `spec`.
    ///
    /// Fails if an operation lacks its Request marker or two operations share
    /// a name. Static headers are parsed on first invocation.
    #[instrument(skip_all, fields(api = %spec.name()))]
    pub fn bind(&self, spec: ApiSpec) -> Result<Api> {
        let name = spec.name().to_string();
        let mut operations = HashMap::with_capacity(spec.operations().len());

        for operation in spec.into_operations() {
            if operation.request_line().is_none() {
                return Err(Error::new(ErrorKind::Configuration(format!(
                    "no request metadata found for operation '{}'",
                    operation.name()
                ))));
            }
            let key = operation.name().to_string();
            if operations.insert(key.clone(), operation).is_some() {
                return Err(Error::new(ErrorKind::Configuration(format!(
                    "operation '{key}' declared more than once in '{name}'"
                ))));
            }
        }

        debug!(operations = operations.len(), "Bound operation set");

        Ok(Api {
            inner: Arc::new(ApiInner {
                name,
                config: Arc::clone(&self.config),
                operations,
                prepared: DashMap::new(),
            }),
        })
    }
}

/// A bound operation set: dispatches calls by operation name.
///
/// Cheap to clone and safe to share across threads. Prepared metadata is
/// cached per operation on first use.
#[derive(Debug, Clone)]
pub struct Api {
    inner: Arc<ApiInner>,
}

#[derive(Debug)]
struct ApiInner {
    name: String,
    config: Arc<ClientConfig>,
    operations: HashMap<String, OperationSpec>,
    prepared: DashMap<String, Arc<PreparedOperation>>,
}

impl Api {
    pub fn name(&self) -> &str {
        &self.inner.name
    }

    pub fn config(&self) -> &ClientConfig {
        &self.inner.config
    }

    pub fn operation(&self, name: &str) -> Option<&OperationSpec> {
        self.inner.operations.get(name)
    }

    pub fn operation_names(&self) -> impl Iterator<Item = &str> {
        self.inner.operations.keys().map(String::as_str)
    }

    /// Compile a call into a request descriptor.
    pub fn compile(&self, operation: &str, args: &Arguments) -> Result<RequestDescriptor> {
        self.prepared(operation)?.compile(&self.inner.config, args)
    }

    /// Compile a call into a typed handle.
    ///
    /// `R` must be the operation's declared response type.
    pub fn call<R: 'static>(&self, operation: &str, args: &Arguments) -> Result<Call<R>> {
        let prepared = self.prepared(operation)?;
        let requested = TypeToken::of::<R>();
        if prepared.response_type() != requested {
            return Err(Error::new(ErrorKind::ResponseTypeMismatch {
                operation: operation.to_string(),
                declared: prepared.response_type().to_string(),
                requested: requested.to_string(),
            }));
        }
        Ok(Call::new(prepared.compile(&self.inner.config, args)?))
    }

    /// Cached prepared metadata, computed on first use.
    ///
    /// Concurrent first calls may both prepare; the first insert wins.
    fn prepared(&self, operation: &str) -> Result<Arc<PreparedOperation>> {
        if let Some(prepared) = self.inner.prepared.get(operation) {
            return Ok(Arc::clone(prepared.value()));
        }

        let spec = self
            .inner
            .operations
            .get(operation)
            .ok_or_else(|| Error::new(ErrorKind::UnknownOperation(operation.to_string())))?;
        let prepared = Arc::new(PreparedOperation::prepare(spec)?);
        debug!(operation, "Prepared operation metadata");

        let entry = self
            .inner
            .prepared
            .entry(operation.to_string())
            .or_insert(prepared);
        Ok(Arc::clone(entry.value()))
    }

    #[cfg(test)]
    fn cached(&self) -> usize {
        self.inner.prepared.len()
    }
}
