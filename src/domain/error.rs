use std::fmt;

/// Root category of a failure, independent of how much context was added on
/// the way up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    NotFound,
    Network,
    Protocol,
    Unknown,
}

/// Errors produced anywhere between the transport and the use cases.
///
/// Each layer wraps the failure below it with [`CountryError::context`]
/// instead of replacing it, so the original error stays reachable through
/// `Error::source()`.
#[derive(Debug)]
pub enum CountryError {
    /// Input rejected before any network call (country code, query length).
    Validation(String),
    /// The endpoint has no entity for the requested code.
    NotFound(String),
    /// Transport or connectivity failure, including non-2xx HTTP statuses.
    Network(String),
    /// Malformed response, or a response carrying GraphQL errors.
    Protocol(String),
    /// Anything else.
    Unknown(String),
    /// A lower-level failure with a message prefix from the layer above.
    Context {
        context: String,
        source: Box<CountryError>,
    },
}

impl CountryError {
    /// Wraps `self` with a prefix, keeping it as the underlying cause.
    pub fn context(self, context: impl Into<String>) -> Self {
        CountryError::Context {
            context: context.into(),
            source: Box::new(self),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            CountryError::Validation(_) => ErrorKind::Validation,
            CountryError::NotFound(_) => ErrorKind::NotFound,
            CountryError::Network(_) => ErrorKind::Network,
            CountryError::Protocol(_) => ErrorKind::Protocol,
            CountryError::Unknown(_) => ErrorKind::Unknown,
            CountryError::Context { source, .. } => source.kind(),
        }
    }

    pub fn is_validation(&self) -> bool {
        self.kind() == ErrorKind::Validation
    }
}

impl fmt::Display for CountryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CountryError::Validation(msg)
            | CountryError::NotFound(msg)
            | CountryError::Network(msg)
            | CountryError::Protocol(msg)
            | CountryError::Unknown(msg) => write!(f, "{msg}"),
            CountryError::Context { context, source } => write!(f, "{context}: {source}"),
        }
    }
}

impl std::error::Error for CountryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CountryError::Context { source, .. } => Some(source.as_ref()),
            _ => None,
        }
    }
}

/// Message shown to the user for a failed operation. Falls back to
/// `default` when the error renders as blank text.
pub fn user_message(error: &CountryError, default: &str) -> String {
    let message = error.to_string();
    if message.trim().is_empty() {
        default.to_string()
    } else {
        message
    }
}
