//! API error types with HTTP response mapping.
//!
//! Each portal keeps the error body its frontend already parses:
//! - customer: `{ "success": false, "message": ..., "error": ... }`
//! - vendor: `{ "status": "error" | "failure", "message": ..., "details": ... }`
//! - employee: `{ "error": ... }`

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use domain::DomainError;
use serde_json::{Value, json};

/// Which portal's error body to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Family {
    Customer,
    Vendor,
    Employee,
}

impl Family {
    pub fn as_str(&self) -> &'static str {
        match self {
            Family::Customer => "customer",
            Family::Vendor => "vendor",
            Family::Employee => "employee",
        }
    }
}

/// API-level error type that maps to HTTP responses.
#[derive(Debug)]
pub enum ApiError {
    /// Required request input was missing.
    BadRequest { family: Family, message: String },
    /// SAP rejected the supplied credentials.
    Unauthorized { family: Family, message: String },
    /// SAP answered with nothing to show for a route that treats that as missing.
    NotFound { family: Family, message: String },
    /// The SAP call failed; `message` is the route's public message.
    Upstream {
        family: Family,
        message: String,
        source: DomainError,
    },
}

impl ApiError {
    pub fn bad_request(family: Family, message: impl Into<String>) -> Self {
        ApiError::BadRequest {
            family,
            message: message.into(),
        }
    }

    pub fn unauthorized(family: Family, message: impl Into<String>) -> Self {
        ApiError::Unauthorized {
            family,
            message: message.into(),
        }
    }

    pub fn not_found(family: Family, message: impl Into<String>) -> Self {
        ApiError::NotFound {
            family,
            message: message.into(),
        }
    }

    fn family(&self) -> Family {
        match self {
            ApiError::BadRequest { family, .. }
            | ApiError::Unauthorized { family, .. }
            | ApiError::NotFound { family, .. }
            | ApiError::Upstream { family, .. } => *family,
        }
    }

    fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            ApiError::Unauthorized { .. } => StatusCode::UNAUTHORIZED,
            ApiError::NotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::Upstream { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn body(&self) -> Value {
        match (self.family(), self) {
            (Family::Customer, ApiError::Upstream { message, source, .. }) => json!({
                "success": false,
                "message": message,
                "error": source.to_string(),
            }),
            (Family::Customer, ApiError::BadRequest { message, .. }) => {
                json!({ "status": false, "message": message })
            }
            (
                Family::Customer,
                ApiError::NotFound { message, .. } | ApiError::Unauthorized { message, .. },
            ) => json!({ "success": false, "message": message }),

            (Family::Vendor, ApiError::Upstream { message, source, .. }) => json!({
                "status": "error",
                "message": message,
                "details": source.to_string(),
            }),
            (Family::Vendor, ApiError::BadRequest { message, .. }) => {
                json!({ "status": "error", "message": message })
            }
            (
                Family::Vendor,
                ApiError::NotFound { message, .. } | ApiError::Unauthorized { message, .. },
            ) => json!({ "status": "failure", "message": message }),

            (
                Family::Employee,
                ApiError::BadRequest { message, .. }
                | ApiError::Unauthorized { message, .. }
                | ApiError::NotFound { message, .. }
                | ApiError::Upstream { message, .. },
            ) => json!({ "error": message }),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let family = self.family().as_str();

        if let ApiError::Upstream {
            message, source, ..
        } = &self
        {
            let kind = source.kind().as_str();
            tracing::error!(portal = family, kind, error = %source, "{message}");
            metrics::counter!("gateway_upstream_errors_total", "portal" => family, "kind" => kind)
                .increment(1);
        }

        (status, Json(self.body())).into_response()
    }
}

/// Unwraps a JSON request body.
///
/// A missing, malformed or mistyped body is answered like missing input:
/// a 400 in the family's shape carrying `message`.
pub fn json_body<T>(
    payload: Result<Json<T>, JsonRejection>,
    family: Family,
    message: &str,
) -> Result<T, ApiError> {
    match payload {
        Ok(Json(body)) => Ok(body),
        Err(rejection) => {
            tracing::debug!(
                portal = family.as_str(),
                error = %rejection,
                "rejected request body"
            );
            Err(ApiError::bad_request(family, message))
        }
    }
}

/// Attaches a route's public failure message to a domain error.
pub trait UpstreamContext<T> {
    fn context(self, family: Family, message: &str) -> Result<T, ApiError>;
}

impl<T> UpstreamContext<T> for Result<T, DomainError> {
    fn context(self, family: Family, message: &str) -> Result<T, ApiError> {
        self.map_err(|source| ApiError::Upstream {
            family,
            message: message.to_string(),
            source,
        })
    }
}
