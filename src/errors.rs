use std::borrow::Cow;

use actix_web::{
    error::ResponseError,
    http::{header::ContentType, StatusCode},
    HttpResponse
};
use derive_more::Display;
use serde::Serialize;
use validator::ValidationErrors;

/// Contact form fields in declaration order. The wire contract reports the
/// first offending field, so the conversion below must not depend on the
/// iteration order of `ValidationErrors`.
const VALIDATED_FIELD_ORDER: [&str; 3] = ["name", "email", "message"];

#[derive(Debug, Display)]
pub enum AppError {
    #[display("Validation failed: {}: {}", _0.field, _0.message)]
    Validation(FieldError),

    #[display("Not found: {_0}")]
    NotFound(String),

    #[display("Conflict: {_0}")]
    Conflict(String),

    #[display("Internal server error: {_0}")]
    Internal(String),
}

impl ResponseError for AppError {
    fn error_response(&self) -> HttpResponse {
        let body = match self {
            AppError::Validation(err) => {
                serde_json::json!({
                    "message": err.message,
                    "field": err.field,
                })
            }
            AppError::NotFound(msg) | AppError::Conflict(msg) => {
                serde_json::json!({"message": msg})
            }
            AppError::Internal(_) => {
                tracing::error!("{self}");
                serde_json::json!({"message": "Internal server error"})
            }
        };
        HttpResponse::build(self.status_code())
            .insert_header(ContentType::json())
            .json(body)
    }

    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Conflict(_) => StatusCode::CONFLICT,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        let field_errors = errors.field_errors();

        let first = VALIDATED_FIELD_ORDER
            .iter()
            .find_map(|field| {
                field_errors
                    .get(*field)
                    .and_then(|errs| errs.first())
                    .map(|e| FieldError {
                        field: (*field).to_string(),
                        message: e
                            .message
                            .as_ref()
                            .map(|s| s.to_string())
                            .unwrap_or_else(|| "Invalid value".to_string()),
                    })
            })
            .or_else(|| {
                field_errors.iter().next().map(|(field, errs)| FieldError {
                    field: field.to_string(),
                    message: errs
                        .first()
                        .and_then(|e| e.message.as_ref())
                        .map(|s| s.to_string())
                        .unwrap_or_else(|| "Invalid value".to_string()),
                })
            });

        AppError::Validation(first.unwrap_or_else(|| FieldError {
            field: "body".to_string(),
            message: "Invalid request".to_string(),
        }))
    }
}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::Database(e) if e.code() == Some(Cow::Borrowed("23505")) => {
                AppError::Conflict("Database conflict occurred".into())
            }
            sqlx::Error::Database(e) if e.code() == Some(Cow::Borrowed("23503")) => {
                AppError::Conflict("Foreign key violation".into())
            }
            _ => AppError::Internal(format!("Database error: {}", err))
        }
    }
}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::Internal(err.to_string())
    }
}

#[derive(Debug, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::message::ContactForm;
    use validator::Validate;

    #[test]
    fn validation_error_reports_first_field_in_declaration_order() {
        let form = ContactForm {
            name: "".to_string(),
            email: "not-an-email".to_string(),
            message: "".to_string(),
        };
        let err = AppError::from(form.validate().unwrap_err());

        match err {
            AppError::Validation(field_err) => {
                assert_eq!(field_err.field, "name");
                assert_eq!(field_err.message, "Name is required");
            }
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn malformed_email_maps_to_email_field() {
        let form = ContactForm {
            name: "Jane".to_string(),
            email: "not-an-email".to_string(),
            message: "Hi".to_string(),
        };
        let err = AppError::from(form.validate().unwrap_err());

        match err {
            AppError::Validation(field_err) => {
                assert_eq!(field_err.field, "email");
                assert_eq!(field_err.message, "Invalid email address");
            }
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn status_codes_follow_the_error_taxonomy() {
        let validation = AppError::Validation(FieldError {
            field: "name".into(),
            message: "Name is required".into(),
        });
        assert_eq!(validation.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(
            AppError::NotFound("Project not found".into()).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::Conflict("slug taken".into()).status_code(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            AppError::Internal("boom".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
