use std::fmt;

use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    extract::path::ErrorKind,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;
use tracing::warn;

pub type AppResult<T> = Result<T, AppError>;

/// Where in the request a bad value was found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Location {
    /// A path parameter; `None` when the router couldn't name it.
    Path(Option<String>),
    Body,
}

impl Location {
    fn parts(&self) -> Vec<String> {
        match self {
            Location::Path(Some(key)) => vec!["path".to_string(), key.clone()],
            Location::Path(None) => vec!["path".to_string()],
            Location::Body => vec!["body".to_string()],
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.parts().join("."))
    }
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("validation failure at {location}: {message}")]
    ValidationFailure { location: Location, message: String },
}

impl AppError {
    pub fn validation(location: Location, message: impl Into<String>) -> Self {
        Self::ValidationFailure {
            location,
            message: message.into(),
        }
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        let key = match &rejection {
            PathRejection::FailedToDeserializePathParams(err) => match err.kind() {
                ErrorKind::ParseErrorAtKey { key, .. }
                | ErrorKind::InvalidUtf8InPathParam { key } => Some(key.clone()),
                _ => None,
            },
            _ => None,
        };
        Self::validation(Location::Path(key), rejection.body_text())
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        Self::validation(Location::Body, rejection.body_text())
    }
}

#[derive(Serialize)]
struct FieldError {
    loc: Vec<String>,
    msg: String,
}

#[derive(Serialize)]
struct ErrorBody {
    error: &'static str,
    detail: Vec<FieldError>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::ValidationFailure { location, message } => {
                warn!(%location, %message, "Request validation failed");
                let body = ErrorBody {
                    error: "validation_failure",
                    detail: vec![FieldError {
                        loc: location.parts(),
                        msg: message,
                    }],
                };
                (StatusCode::UNPROCESSABLE_ENTITY, Json(body)).into_response()
            }
        }
    }
}
