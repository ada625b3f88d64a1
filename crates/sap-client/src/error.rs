use thiserror::Error;

/// Errors that can occur when calling SAP or reading its responses.
#[derive(Debug, Error)]
pub enum SapError {
    /// The request never produced a response (DNS, connect, TLS, timeout).
    #[error("SAP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// SAP answered with a non-success HTTP status.
    #[error("SAP returned HTTP {status}: {message}")]
    Status { status: u16, message: String },

    /// The payload parsed but the expected envelope/body/response element is missing.
    #[error("{0}")]
    Structure(String),

    /// The SOAP body carried a fault instead of a function response.
    #[error("SOAP fault {code}: {message}")]
    Fault { code: String, message: String },

    /// The response body is not well-formed XML.
    #[error("Malformed XML: {0}")]
    Xml(String),

    /// The response body is not valid JSON.
    #[error("Malformed JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The configured endpoint or a derived request URL is invalid.
    #[error("Invalid SAP URL: {0}")]
    InvalidUrl(String),
}

/// Coarse classification of a [`SapError`], used for logs and metrics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// SAP could not be reached or refused the request.
    Transport,
    /// SAP answered, but not with the shape the route expects.
    Structure,
    /// The gateway itself is misconfigured.
    Config,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::Transport => "transport",
            ErrorKind::Structure => "structure",
            ErrorKind::Config => "config",
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl SapError {
    /// Builds a structure error.
    pub fn structure(message: impl Into<String>) -> Self {
        SapError::Structure(message.into())
    }

    /// Classifies this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            SapError::Transport(_) | SapError::Status { .. } => ErrorKind::Transport,
            SapError::Structure(_)
            | SapError::Fault { .. }
            | SapError::Xml(_)
            | SapError::Json(_) => ErrorKind::Structure,
            SapError::InvalidUrl(_) => ErrorKind::Config,
        }
    }
}

/// Result type for SAP operations.
pub type Result<T> = std::result::Result<T, SapError>;
