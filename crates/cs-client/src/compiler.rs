//! The request compiler.
//!
//! Turns one operation's metadata, the shared [`ClientConfig`] and a call's
//! [`Arguments`] into a [`RequestDescriptor`]. Compilation reads the config
//! but never mutates it, and performs no I/O.
//!
//! Steps, in order:
//!
//! 1. prepare: require the Request marker, parse static headers, check that
//!    at most one header map parameter is declared
//! 2. seed the URL from base URL and endpoint template
//! 3. substitute path parameters, then reject leftover placeholders
//! 4. append default query parameters
//! 5. merge the header map argument over the static headers
//! 6. resolve the body (POST, PUT and PATCH only)
//! 7. carry auth, proxy, TLS and redirect settings through

use callspec_schema::{HttpMethod, OperationSpec, ParamRole, TypeToken};
use indexmap::IndexMap;
use tracing::{debug, instrument, warn};

use crate::argument::Arguments;
use crate::config::ClientConfig;
use crate::error::{Error, ErrorKind, Result};
use crate::request::{RequestBody, RequestDescriptor};
use crate::{headers, query, template};

/// Compile one call.
///
/// Equivalent to [`PreparedOperation::prepare`] followed by
/// [`PreparedOperation::compile`]; bound clients cache the prepared form.
pub fn compile(
    operation: &OperationSpec,
    config: &ClientConfig,
    args: &Arguments,
) -> Result<RequestDescriptor> {
    PreparedOperation::prepare(operation)?.compile(config, args)
}

/// Operation metadata validated and parsed once, reusable across calls.
#[derive(Debug, Clone)]
pub struct PreparedOperation {
    spec: OperationSpec,
    method: HttpMethod,
    endpoint: String,
    static_headers: IndexMap<String, String>,
    header_map_position: Option<usize>,
}

impl PreparedOperation {
    /// Validate and parse the operation's metadata.
    pub fn prepare(spec: &OperationSpec) -> Result<Self> {
        let line = spec.request_line().ok_or_else(|| {
            Error::new(ErrorKind::Configuration(format!(
                "no request metadata found for operation '{}'",
                spec.name()
            )))
        })?;

        let static_headers = headers::parse_static(spec.static_headers())?;

        let mut header_maps = spec
            .params()
            .iter()
            .enumerate()
            .filter(|(_, param)| param.role == ParamRole::HeaderMap)
            .map(|(position, _)| position);
        let header_map_position = header_maps.next();
        if header_maps.next().is_some() {
            return Err(Error::new(ErrorKind::Configuration(format!(
                "operation '{}' declares more than one header map parameter",
                spec.name()
            ))));
        }

        Ok(Self {
            spec: spec.clone(),
            method: line.method,
            endpoint: line.endpoint.clone(),
            static_headers,
            header_map_position,
        })
    }

    pub fn spec(&self) -> &OperationSpec {
        &self.spec
    }

    pub fn method(&self) -> HttpMethod {
        self.method
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn static_headers(&self) -> &IndexMap<String, String> {
        &self.static_headers
    }

    pub fn response_type(&self) -> TypeToken {
        self.spec.declared_response_type()
    }

    /// Compile one call against this operation.
    #[instrument(skip_all, fields(operation = %self.spec.name(), method = %self.method))]
    pub fn compile(&self, config: &ClientConfig, args: &Arguments) -> Result<RequestDescriptor> {
        let params = self.spec.params();
        if args.len() != params.len() {
            return Err(Error::new(ErrorKind::ArgumentCount {
                operation: self.spec.name().to_string(),
                expected: params.len(),
                actual: args.len(),
            }));
        }

        let mut url = template::seed_url(&config.base_url, &self.endpoint);
        self.substitute_path(&mut url, args)?;
        query::append_query(&mut url, &config.query_params);
        debug!(url = %url, "Resolved request URL");

        let headers = headers::merge(self.static_headers.clone(), self.dynamic_headers(args)?);
        debug!(count = headers.len(), "Merged request headers");

        let body = if self.method.carries_body() {
            self.resolve_body(args)
        } else {
            if self.has_supplied_body(args) {
                debug!("Ignoring body argument for {} request", self.method);
            }
            None
        };

        Ok(RequestDescriptor {
            method: self.method,
            url,
            headers,
            body,
            auth: config.auth.clone(),
            proxy: config.proxy.clone(),
            tls_verification_disabled: config.tls_verification_disabled,
            follow_redirects: self.spec.redirect_policy(),
            response_type: self.spec.declared_response_type(),
        })
    }

    fn substitute_path(&self, url: &mut String, args: &Arguments) -> Result<()> {
        let mut unsupplied = Vec::new();
        for (position, param) in self.spec.params().iter().enumerate() {
            let ParamRole::Path(name) = &param.role else {
                continue;
            };
            match args.supplied(position) {
                Some(arg) => {
                    let replaced = template::substitute(url, name, &arg.to_path_segment());
                    debug!(placeholder = %name, replaced, "Substituted path variable");
                }
                None => {
                    debug!(placeholder = %name, "Path argument not supplied");
                    unsupplied.push((name.as_str(), param.name.as_str()));
                }
            }
        }
        template::ensure_resolved(url, &self.endpoint, &unsupplied)
    }

    fn dynamic_headers(&self, args: &Arguments) -> Result<IndexMap<String, String>> {
        let Some(position) = self.header_map_position else {
            return Ok(IndexMap::new());
        };
        let Some(arg) = args.supplied(position) else {
            return Ok(IndexMap::new());
        };

        arg.as_header_map().ok_or_else(|| {
            Error::new(ErrorKind::HeaderArgumentType {
                parameter: self.spec.params()[position].name.clone(),
                found: format!("{} ({})", arg.shape(), arg.type_token()),
            })
        })
    }

    /// First body parameter, in declaration order, whose argument is supplied
    /// with the declared type.
    fn resolve_body(&self, args: &Arguments) -> Option<RequestBody> {
        for (position, param) in self.spec.params().iter().enumerate() {
            let ParamRole::Body(declared) = &param.role else {
                continue;
            };
            let Some(arg) = args.supplied(position) else {
                continue;
            };
            if arg.type_token() == *declared {
                debug!(parameter = %param.name, "Selected request body");
                return Some(RequestBody::from(arg));
            }
            warn!(
                parameter = %param.name,
                declared = %declared,
                supplied = %arg.type_token(),
                "Body argument type does not match declaration, skipping"
            );
        }
        None
    }

    fn has_supplied_body(&self, args: &Arguments) -> bool {
        self.spec
            .params()
            .iter()
            .enumerate()
            .any(|(position, param)| {
                matches!(param.role, ParamRole::Body(_)) && args.supplied(position).is_some()
            })
    }
}
