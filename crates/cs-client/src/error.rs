//! Error types for callspec-client.

/// Result type alias for callspec-client operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for callspec-client operations.
///
/// Every error is raised while compiling a call; no descriptor is returned
/// alongside one.
#[derive(Debug, thiserror::Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional source error.
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl Error {
    /// Create a new error with the given kind.
    pub fn new(kind: ErrorKind) -> Self {
        Self { kind, source: None }
    }

    /// Create a new error with the given kind and source.
    pub fn with_source(
        kind: ErrorKind,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            kind,
            source: Some(Box::new(source)),
        }
    }

    /// Returns true if the operation or client was declared incorrectly.
    pub fn is_configuration_error(&self) -> bool {
        self.kind.is_configuration_error()
    }

    /// Returns true if the arguments supplied to a call were at fault.
    ///
    /// An unresolved path variable counts here when its path argument was
    /// left unsupplied.
    pub fn is_argument_error(&self) -> bool {
        matches!(
            self.kind,
            ErrorKind::HeaderArgumentType { .. }
                | ErrorKind::ArgumentCount { .. }
                | ErrorKind::Serialization(_)
                | ErrorKind::UnresolvedPathVariable {
                    missing_argument: Some(_),
                    ..
                }
        )
    }
}

/// The kind of error that occurred.
#[derive(Debug, thiserror::Error)]
pub enum ErrorKind {
    /// Operation or client declared incorrectly.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// A `{placeholder}` survived path substitution.
    ///
    /// `missing_argument` names the declared path parameter whose argument
    /// was not supplied; `None` means no parameter is declared for it.
    #[error(
        "Unresolved path variable {placeholder} in endpoint template '{template}'; {}",
        unresolved_hint(.missing_argument)
    )]
    UnresolvedPathVariable {
        template: String,
        placeholder: String,
        missing_argument: Option<String>,
    },

    /// Static header entry is not in `key:value` form.
    #[error("Malformed header '{0}': expected <key>:<value>")]
    MalformedHeader(String),

    /// Header map argument is not a string-to-string mapping.
    #[error("Header map parameter '{parameter}' expects a string-to-string mapping, got {found}")]
    HeaderArgumentType { parameter: String, found: String },

    /// No operation with this name in the bound operation set.
    #[error("Unknown operation: {0}")]
    UnknownOperation(String),

    /// Argument list length differs from the declared parameter list.
    #[error("Operation '{operation}' takes {expected} argument(s), {actual} supplied")]
    ArgumentCount {
        operation: String,
        expected: usize,
        actual: usize,
    },

    /// Typed call requested for a response type the operation does not declare.
    #[error("Operation '{operation}' declares response type {declared}, requested {requested}")]
    ResponseTypeMismatch {
        operation: String,
        declared: String,
        requested: String,
    },

    /// Invalid URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Argument value could not be serialized.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl ErrorKind {
    /// Returns true if this kind stems from a declaration rather than a call.
    pub fn is_configuration_error(&self) -> bool {
        matches!(
            self,
            ErrorKind::Configuration(_)
                | ErrorKind::MalformedHeader(_)
                | ErrorKind::UnresolvedPathVariable {
                    missing_argument: None,
                    ..
                }
                | ErrorKind::UnknownOperation(_)
                | ErrorKind::InvalidUrl(_)
        )
    }
}

fn unresolved_hint(missing_argument: &Option<String>) -> String {
    match missing_argument {
        Some(parameter) => format!("no argument supplied for path parameter '{parameter}'"),
        None => "declare a path parameter for it".to_string(),
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::with_source(ErrorKind::Serialization(err.to_string()), err)
    }
}

impl From<url::ParseError> for Error {
    fn from(err: url::ParseError) -> Self {
        Error::with_source(ErrorKind::InvalidUrl(err.to_string()), err)
    }
}
