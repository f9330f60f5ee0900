use actix_web::HttpResponse;
use thiserror::Error;

use crate::domain::errors::DomainError;

/// Boundary error: everything a handler can fail with. Internal failures
/// carry the storage-level detail for the log, but only the per-endpoint
/// `message` ever crosses the HTTP boundary.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    BadRequest(String),

    #[error("{message}: {detail}")]
    Internal {
        message: &'static str,
        detail: String,
    },
}

impl AppError {
    pub fn internal(message: &'static str, detail: impl ToString) -> Self {
        AppError::Internal {
            message,
            detail: detail.to_string(),
        }
    }

    /// Map a domain failure for one endpoint: invalid input surfaces with
    /// its own description, everything else collapses to `message`.
    pub fn from_domain(message: &'static str, err: DomainError) -> Self {
        match err {
            DomainError::InvalidInput(msg) => AppError::BadRequest(msg),
            other => AppError::internal(message, other),
        }
    }
}

impl actix_web::ResponseError for AppError {
    fn error_response(&self) -> HttpResponse {
        match self {
            AppError::BadRequest(msg) => HttpResponse::BadRequest().json(serde_json::json!({
                "error": msg
            })),
            AppError::Internal { message, detail } => {
                log::error!("{}: {}", message, detail);
                HttpResponse::InternalServerError().json(serde_json::json!({
                    "error": message
                }))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::ResponseError;

    #[test]
    fn bad_request_returns_400() {
        let resp = AppError::BadRequest("quantity must be at least 1".to_string()).error_response();
        assert_eq!(resp.status(), actix_web::http::StatusCode::BAD_REQUEST);
    }

    #[test]
    fn internal_error_returns_500() {
        let err = AppError::internal("Error creating order", "connection refused");
        assert_eq!(
            err.error_response().status(),
            actix_web::http::StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn internal_display_includes_detail() {
        let err = AppError::internal("Error creating order", "connection refused");
        assert_eq!(
            err.to_string(),
            "Error creating order: connection refused"
        );
    }

    #[test]
    fn domain_invalid_input_maps_to_bad_request() {
        let err = AppError::from_domain(
            "Error creating order",
            DomainError::InvalidInput("order must contain at least one item".to_string()),
        );
        assert!(matches!(err, AppError::BadRequest(_)));
    }

    #[test]
    fn domain_internal_maps_to_internal_with_endpoint_message() {
        let err = AppError::from_domain(
            "Error creating order",
            DomainError::Internal("deadlock detected".to_string()),
        );
        match err {
            AppError::Internal { message, detail } => {
                assert_eq!(message, "Error creating order");
                assert!(detail.contains("deadlock detected"));
            }
            other => panic!("expected Internal, got {other:?}"),
        }
    }
}
