//! Errors raised by user application handlers.
//!
//! The aggregate never fails; these cover lookups, access checks and
//! infrastructure failures around it.

use thiserror::Error;

use crate::domain::foundation::{DomainError, ErrorCode, UserId, ValidationError};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UserError {
    #[error("User not found: {0}")]
    NotFound(UserId),

    #[error("User already exists: {0}")]
    AlreadyExists(String),

    #[error("User is inactive: {0}")]
    Inactive(UserId),

    #[error("Permission denied: {0}")]
    Forbidden(String),

    #[error("Validation failed for '{field}': {message}")]
    ValidationFailed { field: String, message: String },

    /// Failure outside the domain; `code` is the port's original error code.
    #[error("[{code}] {message}")]
    Infrastructure { code: ErrorCode, message: String },
}

impl UserError {
    pub fn not_found(id: UserId) -> Self {
        UserError::NotFound(id)
    }

    /// `key` is the conflicting id or email.
    pub fn already_exists(key: impl Into<String>) -> Self {
        UserError::AlreadyExists(key.into())
    }

    pub fn inactive(id: UserId) -> Self {
        UserError::Inactive(id)
    }

    pub fn forbidden(reason: impl Into<String>) -> Self {
        UserError::Forbidden(reason.into())
    }

    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        UserError::ValidationFailed {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn infrastructure(code: ErrorCode, message: impl Into<String>) -> Self {
        UserError::Infrastructure {
            code,
            message: message.into(),
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            UserError::NotFound(_) => ErrorCode::UserNotFound,
            UserError::AlreadyExists(_) => ErrorCode::UserAlreadyExists,
            UserError::Inactive(_) => ErrorCode::UserInactive,
            UserError::Forbidden(_) => ErrorCode::Forbidden,
            UserError::ValidationFailed { .. } => ErrorCode::ValidationFailed,
            UserError::Infrastructure { code, .. } => *code,
        }
    }
}

impl From<DomainError> for UserError {
    fn from(err: DomainError) -> Self {
        let user_id = err
            .details
            .get("user_id")
            .and_then(|id| UserId::new(id.as_str()).ok());

        match (err.code, user_id) {
            (ErrorCode::UserNotFound, Some(id)) => UserError::NotFound(id),
            (ErrorCode::UserInactive, Some(id)) => UserError::Inactive(id),
            (ErrorCode::UserAlreadyExists, _) => UserError::AlreadyExists(
                err.details
                    .get("user_id")
                    .cloned()
                    .unwrap_or_else(|| err.message.clone()),
            ),
            (ErrorCode::Forbidden | ErrorCode::Unauthorized, _) => UserError::Forbidden(err.message),
            (
                ErrorCode::ValidationFailed | ErrorCode::EmptyField | ErrorCode::InvalidFormat,
                _,
            ) => UserError::ValidationFailed {
                field: err
                    .details
                    .get("field")
                    .cloned()
                    .unwrap_or_else(|| "unknown".to_string()),
                message: err.message,
            },
            (code, _) => UserError::Infrastructure {
                code,
                message: err.message,
            },
        }
    }
}

impl From<ValidationError> for UserError {
    fn from(err: ValidationError) -> Self {
        UserError::ValidationFailed {
            field: err.field().to_string(),
            message: err.to_string(),
        }
    }
}
