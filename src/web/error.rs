use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use std::fmt;

use crate::forms::FormError;
use crate::parser::slug::SlugError;

#[derive(Debug)]
pub enum AppError {
    NotFound(String),

    DatabaseError(String),

    ValidationError(String),

    TemplateError(String),

    InternalError(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound(msg) => write!(f, "Not found: {msg}"),
            Self::DatabaseError(msg) => write!(f, "Database error: {msg}"),
            Self::ValidationError(msg) => write!(f, "Validation error: {msg}"),
            Self::TemplateError(msg) => write!(f, "Template error: {msg}"),
            Self::InternalError(msg) => write!(f, "Internal error: {msg}"),
        }
    }
}

impl std::error::Error for AppError {}

impl AppError {
    #[must_use]
    pub fn status(&self) -> StatusCode {
        match self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::ValidationError(_) => StatusCode::BAD_REQUEST,
            Self::DatabaseError(_) | Self::TemplateError(_) | Self::InternalError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    pub fn not_found(resource: &str, id: impl fmt::Display) -> Self {
        Self::NotFound(format!("{resource} {id} not found"))
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::InternalError(msg.into())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match &self {
            Self::NotFound(msg) | Self::ValidationError(msg) => msg.clone(),
            Self::DatabaseError(msg) => {
                tracing::error!("Database error: {}", msg);
                "A database error occurred".to_string()
            }
            Self::TemplateError(msg) => {
                tracing::error!("Template error: {}", msg);
                "An internal error occurred".to_string()
            }
            Self::InternalError(msg) => {
                tracing::error!("Internal error: {}", msg);
                "An internal error occurred".to_string()
            }
        };

        (status, Html(error_page(status, &message))).into_response()
    }
}

/// Standalone error page; it must render even when the template engine is
/// the thing that failed.
fn error_page(status: StatusCode, message: &str) -> String {
    let title = format!(
        "{} {}",
        status.as_u16(),
        status.canonical_reason().unwrap_or("Error")
    );
    let title = html_escape::encode_text(&title);
    let message = html_escape::encode_text(message);

    format!(
        "<!DOCTYPE html>\n<html lang=\"fr\">\n<head>\n<meta charset=\"UTF-8\">\n<title>{title}</title>\n<link rel=\"stylesheet\" href=\"/static/app.css\">\n</head>\n<body>\n<main class=\"error\">\n<h1>{title}</h1>\n<p>{message}</p>\n<p><a href=\"/\">Retour à l'accueil</a></p>\n</main>\n</body>\n</html>\n"
    )
}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        if let Some(db_err) = err.downcast_ref::<sea_orm::DbErr>() {
            return Self::DatabaseError(db_err.to_string());
        }
        Self::InternalError(format!("{err:#}"))
    }
}

impl From<tera::Error> for AppError {
    fn from(err: tera::Error) -> Self {
        use std::error::Error as _;

        let mut msg = err.to_string();
        let mut source = err.source();
        while let Some(cause) = source {
            msg.push_str(": ");
            msg.push_str(&cause.to_string());
            source = cause.source();
        }
        Self::TemplateError(msg)
    }
}

impl From<SlugError> for AppError {
    fn from(err: SlugError) -> Self {
        Self::NotFound(err.to_string())
    }
}

impl From<FormError> for AppError {
    fn from(err: FormError) -> Self {
        Self::ValidationError(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            AppError::NotFound("x".into()).status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::ValidationError("x".into()).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::internal("x").status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_slug_errors_are_not_found() {
        let err: AppError = SlugError::Missing.into();
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_error_page_escapes_message() {
        let page = error_page(StatusCode::NOT_FOUND, "No program with <script> title");
        assert!(page.contains("404 Not Found"));
        assert!(page.contains("&lt;script&gt;"));
        assert!(!page.contains("<script>"));
    }
}
