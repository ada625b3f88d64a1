//! Domain error types.

use sap_client::{ErrorKind, SapError};
use thiserror::Error;

/// Errors that can occur while reading portal data from SAP.
#[derive(Debug, Error)]
pub enum DomainError {
    /// The SAP call failed or returned an unexpected payload.
    #[error(transparent)]
    Sap(#[from] SapError),

    /// SAP answered, but a field the portal cannot do without was empty.
    #[error("{0}")]
    MissingField(String),
}

impl DomainError {
    /// Classifies this error for logs and metrics.
    pub fn kind(&self) -> ErrorKind {
        match self {
            DomainError::Sap(err) => err.kind(),
            DomainError::MissingField(_) => ErrorKind::Structure,
        }
    }
}
