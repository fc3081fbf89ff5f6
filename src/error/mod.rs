use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use crate::template::TemplateError;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Authentication error: {0}")]
    Auth(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error(transparent)]
    Template(#[from] TemplateError),
}

#[derive(Serialize)]
struct ErrorResponse {
    error: ErrorBody,
}

#[derive(Serialize)]
struct ErrorBody {
    code: String,
    message: String,
}

impl AppError {
    fn parts(&self) -> (StatusCode, &'static str, String) {
        match self {
            AppError::Auth(msg) => (StatusCode::UNAUTHORIZED, "UNAUTHORIZED", msg.clone()),
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::Template(e) => {
                let status = match e {
                    TemplateError::Malformed { .. } => StatusCode::BAD_REQUEST,
                    TemplateError::UnboundVariable(_) => StatusCode::UNPROCESSABLE_ENTITY,
                };
                (status, e.code(), e.to_string())
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = self.parts();

        tracing::warn!(
            code = %code,
            status = %status.as_u16(),
            message = %message,
            "API request rejected"
        );

        let body = ErrorResponse {
            error: ErrorBody {
                code: code.to_string(),
                message,
            },
        };

        (status, Json(body)).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::template::MalformedReason;

    #[test]
    fn test_template_error_status() {
        let malformed = AppError::from(TemplateError::Malformed {
            offset: 0,
            reason: MalformedReason::Unterminated,
        });
        assert_eq!(malformed.into_response().status(), StatusCode::BAD_REQUEST);

        let unbound = AppError::from(TemplateError::UnboundVariable("b".to_string()));
        assert_eq!(
            unbound.into_response().status(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
    }

    #[test]
    fn test_validation_and_auth_status() {
        let validation = AppError::Validation("identifiers must not be empty".to_string());
        assert_eq!(validation.into_response().status(), StatusCode::BAD_REQUEST);

        let auth = AppError::Auth("Missing API key".to_string());
        assert_eq!(auth.into_response().status(), StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn test_every_error_is_a_client_error() {
        let errors = [
            AppError::Auth("Invalid API key".to_string()),
            AppError::Validation("identifiers must not be empty".to_string()),
            AppError::from(TemplateError::Malformed {
                offset: 3,
                reason: MalformedReason::EmptyName,
            }),
            AppError::from(TemplateError::UnboundVariable("b".to_string())),
        ];

        for err in errors {
            let (status, code, message) = err.parts();
            assert!(status.is_client_error(), "{code} mapped to {status}");
            assert_eq!(message, match &err {
                AppError::Template(e) => e.to_string(),
                AppError::Auth(msg) | AppError::Validation(msg) => msg.clone(),
            });
        }
    }

    #[test]
    fn test_template_error_code() {
        let err = AppError::from(TemplateError::UnboundVariable("b".to_string()));
        let (_, code, message) = err.parts();
        assert_eq!(code, "UNBOUND_VARIABLE");
        assert_eq!(message, "Unbound variable: b");
    }
}
