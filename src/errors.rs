// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! # Unified Error Handling System
//!
//! Centralized error handling for the dyncfg crate. Defines standard error
//! types and error codes so the administrative CRUD surface reports failures
//! consistently, while the read path stays free to degrade instead of failing.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Standard error codes used throughout the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorCode {
    // Validation (3000-3999)
    #[serde(rename = "INVALID_INPUT")]
    InvalidInput = 3000,

    // Resource Management (4000-4999)
    #[serde(rename = "NOT_FOUND")]
    NotFound = 4000,
    #[serde(rename = "DUPLICATE_CONFIG")]
    DuplicateConfig = 4001,
    #[serde(rename = "TENANT_MISMATCH")]
    TenantMismatch = 4002,
    #[serde(rename = "CONSTRAINT_VIOLATION")]
    ConstraintViolation = 4003,

    // Configuration (6000-6999)
    #[serde(rename = "CONFIG_ERROR")]
    ConfigError = 6000,

    // Internal Errors (9000-9999)
    #[serde(rename = "INTERNAL_ERROR")]
    InternalError = 9000,
    #[serde(rename = "DATABASE_ERROR")]
    DatabaseError = 9001,
    #[serde(rename = "SERIALIZATION_ERROR")]
    SerializationError = 9002,
}

impl ErrorCode {
    /// Get the HTTP status code for this error
    #[must_use]
    pub const fn http_status(&self) -> u16 {
        match self {
            // 400 Bad Request
            Self::InvalidInput => 400,

            // 403 Forbidden
            Self::TenantMismatch => 403,

            // 404 Not Found
            Self::NotFound => 404,

            // 409 Conflict
            Self::DuplicateConfig | Self::ConstraintViolation => 409,

            // 500 Internal Server Error
            Self::ConfigError
            | Self::InternalError
            | Self::DatabaseError
            | Self::SerializationError => 500,
        }
    }

    /// Get a user-friendly description of this error
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::InvalidInput => "The provided input is invalid",
            Self::NotFound => "The requested configuration entry was not found",
            Self::DuplicateConfig => {
                "A configuration entry with this name already exists for the application"
            }
            Self::TenantMismatch => {
                "The configuration entry belongs to a different application"
            }
            Self::ConstraintViolation => "A store-level constraint rejected the operation",
            Self::ConfigError => "Configuration error encountered",
            Self::InternalError => "An internal error occurred",
            Self::DatabaseError => "Database operation failed",
            Self::SerializationError => "Data serialization/deserialization failed",
        }
    }
}

/// Unified error type for the application
#[derive(Debug, Error)]
pub struct AppError {
    /// Error code
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Source error for error chaining
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl AppError {
    /// Create a new `AppError` with the given code and message
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            source: None,
        }
    }

    /// Add a source error for error chaining
    #[must_use]
    pub fn with_source(mut self, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Get the HTTP status code for this error
    #[must_use]
    pub const fn http_status(&self) -> u16 {
        self.code.http_status()
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.description(), self.message)
    }
}

/// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;

/// Convenience functions for creating common errors
impl AppError {
    /// Configuration entry not found
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::NotFound, message)
    }

    /// Active entry with the same name already exists for the tenant
    pub fn duplicate_config(name: impl Into<String>, application: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::DuplicateConfig,
            format!(
                "config '{}' already exists for application '{}'",
                name.into(),
                application.into()
            ),
        )
    }

    /// Entry exists but belongs to a different tenant
    pub fn tenant_mismatch(id: i64, application: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::TenantMismatch,
            format!(
                "config '{id}' does not belong to application '{}'",
                application.into()
            ),
        )
    }

    /// Store-level constraint rejected the operation
    pub fn constraint_violation(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConstraintViolation, message)
    }

    /// Invalid input
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidInput, message)
    }

    /// Configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConfigError, message)
    }

    /// Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }

    /// Database error
    pub fn database(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::DatabaseError, message)
    }

    /// Serialization error
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::SerializationError, message)
    }
}

/// Conversion from `serde_json::Error` for cache entry (de)serialization
impl From<serde_json::Error> for AppError {
    fn from(error: serde_json::Error) -> Self {
        Self::serialization(error.to_string()).with_source(error)
    }
}

/// Conversion from `anyhow::Error` to `AppError`
impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        Self::new(ErrorCode::InternalError, error.to_string())
    }
}
