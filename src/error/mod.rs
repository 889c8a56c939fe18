//! Error handling for the instructor assistant.
//!
//! This module provides:
//! - [`IaError`]: The main error enum for all ledger, store and form operations
//! - [`ErrorCode`]: Standardized error codes for machine parsing
//! - [`StructuredError`]: Rich error type with a suggestion and context

mod codes;

use std::io;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

pub use codes::ErrorCode;

/// Main error type for instructor assistant operations.
#[derive(Error, Debug)]
pub enum IaError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("INI parse error: {0}")]
    Ini(#[from] ini::Error),

    #[error("Missing required file: {0}")]
    ConfigMissing(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Store {path} is malformed: {reason}")]
    StoreCorrupt { path: PathBuf, reason: String },

    #[error("Wrong password for instructor '{0}'")]
    AuthenticationFailed(String),

    #[error("Instructor not found: {0}")]
    InstructorNotFound(String),

    #[error("Template not found: {0}")]
    TemplateNotFound(String),

    #[error("Student not found: {0}")]
    StudentNotFound(String),

    #[error("Slot {slot} holds {expected} values, got {found}")]
    TypeMismatch {
        slot: String,
        expected: &'static str,
        found: &'static str,
    },

    #[error("Import row {row} has a missing or invalid '{column}' value")]
    MalformedImportRow { row: usize, column: String },

    #[error("Save directory does not exist: {}", .0.display())]
    OutputPathInvalid(PathBuf),

    #[error("Validation failed: {0}")]
    Validation(String),
}

impl IaError {
    /// Get the error code for this error.
    #[must_use]
    pub const fn code(&self) -> ErrorCode {
        match self {
            Self::Io(_) => ErrorCode::IoError,
            Self::Json(_) | Self::Csv(_) => ErrorCode::SerializationError,
            Self::Ini(_) | Self::Config(_) => ErrorCode::ConfigInvalid,
            Self::ConfigMissing(_) => ErrorCode::ConfigMissing,
            Self::StoreCorrupt { .. } => ErrorCode::StoreCorrupt,
            Self::AuthenticationFailed(_) => ErrorCode::AuthenticationFailed,
            Self::InstructorNotFound(_) => ErrorCode::InstructorNotFound,
            Self::TemplateNotFound(_) => ErrorCode::TemplateNotFound,
            Self::StudentNotFound(_) => ErrorCode::StudentNotFound,
            Self::TypeMismatch { .. } => ErrorCode::TypeMismatch,
            Self::MalformedImportRow { .. } => ErrorCode::MalformedImportRow,
            Self::OutputPathInvalid(_) => ErrorCode::OutputPathInvalid,
            Self::Validation(_) => ErrorCode::ValidationFailed,
        }
    }

    /// Get context information for this error as JSON.
    #[must_use]
    pub fn context(&self) -> Option<Value> {
        match self {
            Self::StoreCorrupt { path, reason } => Some(serde_json::json!({
                "path": path.display().to_string(),
                "reason": reason,
            })),
            Self::AuthenticationFailed(name) | Self::InstructorNotFound(name) => {
                Some(serde_json::json!({ "instructor": name }))
            }
            Self::TemplateNotFound(name) => Some(serde_json::json!({ "template": name })),
            Self::StudentNotFound(name) => Some(serde_json::json!({ "student": name })),
            Self::TypeMismatch {
                slot,
                expected,
                found,
            } => Some(serde_json::json!({
                "slot": slot,
                "expected": expected,
                "found": found,
            })),
            Self::MalformedImportRow { row, column } => {
                Some(serde_json::json!({ "row": row, "column": column }))
            }
            Self::OutputPathInvalid(path) => {
                Some(serde_json::json!({ "path": path.display().to_string() }))
            }
            _ => None,
        }
    }

    /// Convert this error to a structured error.
    #[must_use]
    pub fn to_structured(&self) -> StructuredError {
        StructuredError::from_ia_error(self)
    }
}

/// A structured error with machine-readable code, suggestion, and context.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StructuredError {
    /// The error code (e.g., "TEMPLATE_NOT_FOUND")
    pub code: ErrorCode,

    /// The numeric error code (e.g., 202)
    pub numeric_code: u16,

    /// Human-readable error message
    pub message: String,

    /// Actionable suggestion for recovery
    pub suggestion: String,

    /// Additional context for debugging
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<Value>,

    /// Whether the user can recover without restarting
    pub recoverable: bool,

    /// Error category (e.g., "auth", "config", "store")
    pub category: String,
}

impl StructuredError {
    /// Create a new structured error.
    #[must_use]
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            numeric_code: code.numeric(),
            suggestion: code.suggestion().to_string(),
            context: None,
            recoverable: code.is_recoverable(),
            category: code.category().to_string(),
            code,
            message: message.into(),
        }
    }

    /// Create a structured error from an [`IaError`].
    #[must_use]
    pub fn from_ia_error(err: &IaError) -> Self {
        let mut structured = Self::new(err.code(), err.to_string());
        structured.context = err.context();
        structured
    }

    /// Add context to this error.
    #[must_use]
    pub fn with_context(mut self, context: Value) -> Self {
        self.context = Some(context);
        self
    }
}

impl std::fmt::Display for StructuredError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

impl From<IaError> for StructuredError {
    fn from(err: IaError) -> Self {
        Self::from_ia_error(&err)
    }
}

impl From<&IaError> for StructuredError {
    fn from(err: &IaError) -> Self {
        Self::from_ia_error(err)
    }
}

/// Result type alias using [`IaError`].
pub type Result<T> = std::result::Result<T, IaError>;
