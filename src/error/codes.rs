//! Standardized error codes for machine-parseable output.
//!
//! Error codes follow a numeric taxonomy:
//! - 1xx: Instructor authentication errors
//! - 2xx: Record lookup errors
//! - 3xx: Config and store errors
//! - 4xx: Input and output errors
//! - 9xx: Internal errors

use serde::{Deserialize, Serialize};

/// Standardized error codes for machine-readable output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    // ========================================
    // Auth errors (1xx)
    // ========================================
    /// E101: Password did not match the stored hash
    AuthenticationFailed,
    /// E102: No instructor stored under that name
    InstructorNotFound,

    // ========================================
    // Record errors (2xx)
    // ========================================
    /// E201: Student is not in the roster
    StudentNotFound,
    /// E202: No template stored under that name
    TemplateNotFound,

    // ========================================
    // Config errors (3xx)
    // ========================================
    /// E301: Required schema, label or config file is absent
    ConfigMissing,
    /// E302: Config file has invalid syntax or values
    ConfigInvalid,
    /// E303: Persisted JSON store does not match its schema
    StoreCorrupt,

    // ========================================
    // Input/output errors (4xx)
    // ========================================
    /// E401: Value kind does not match the slot kind
    TypeMismatch,
    /// E402: Save directory no longer exists
    OutputPathInvalid,
    /// E403: Import row is missing a required column
    MalformedImportRow,
    /// E404: Input rejected by validation
    ValidationFailed,

    // ========================================
    // Internal errors (9xx)
    // ========================================
    /// E901: Serialization/deserialization failed
    SerializationError,
    /// E902: IO operation failed
    IoError,
}

impl ErrorCode {
    /// Get the numeric error code (e.g., `AuthenticationFailed` -> 101).
    #[must_use]
    pub const fn numeric(&self) -> u16 {
        match self {
            Self::AuthenticationFailed => 101,
            Self::InstructorNotFound => 102,

            Self::StudentNotFound => 201,
            Self::TemplateNotFound => 202,

            Self::ConfigMissing => 301,
            Self::ConfigInvalid => 302,
            Self::StoreCorrupt => 303,

            Self::TypeMismatch => 401,
            Self::OutputPathInvalid => 402,
            Self::MalformedImportRow => 403,
            Self::ValidationFailed => 404,

            Self::SerializationError => 901,
            Self::IoError => 902,
        }
    }

    /// Get the error code as a formatted string (e.g., "E101").
    #[must_use]
    pub fn code_string(&self) -> String {
        format!("E{}", self.numeric())
    }

    /// Get the default suggestion for this error code.
    #[must_use]
    pub const fn suggestion(&self) -> &'static str {
        match self {
            Self::AuthenticationFailed => "Re-enter the instructor password. No skills were signed off",
            Self::InstructorNotFound => "Run `ia instructor list` to see stored instructors, or add one with `ia instructor add`",
            Self::StudentNotFound => "Import the student with `ia student import <file.csv>` and check the spelling of the full name",
            Self::TemplateNotFound => "Run `ia template list` to see saved templates",
            Self::ConfigMissing => "Restore the missing file into the data directory (see IA_DATA_DIR)",
            Self::ConfigInvalid => "Check config.ini for the [style], [save path] and [new_user] sections",
            Self::StoreCorrupt => "The JSON store was edited or truncated. Restore it from a backup or delete the broken entry",
            Self::TypeMismatch => "Date skills take a date and flex skills take text",
            Self::OutputPathInvalid => "Choose an existing save directory with `ia config set-save-path DIR` or IA_SAVE_PATH",
            Self::MalformedImportRow => "Fix the listed row and column in the spreadsheet and import again. Nothing was imported",
            Self::ValidationFailed => "Review the reported value and try again",
            Self::SerializationError => "The data format may be corrupted. Check input data for validity",
            Self::IoError => "File operation failed. Check path exists and permissions are correct",
        }
    }

    /// Check if this error is potentially recoverable by the user.
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        !matches!(
            self,
            Self::ConfigMissing | Self::StoreCorrupt | Self::SerializationError
        )
    }

    /// Get the error category name.
    #[must_use]
    pub const fn category(&self) -> &'static str {
        match self.numeric() / 100 {
            1 => "auth",
            2 => "records",
            3 => "config",
            4 => "input",
            9 => "internal",
            _ => "unknown",
        }
    }

    /// Iterate over all error codes.
    pub fn all() -> impl Iterator<Item = Self> {
        [
            Self::AuthenticationFailed,
            Self::InstructorNotFound,
            Self::StudentNotFound,
            Self::TemplateNotFound,
            Self::ConfigMissing,
            Self::ConfigInvalid,
            Self::StoreCorrupt,
            Self::TypeMismatch,
            Self::OutputPathInvalid,
            Self::MalformedImportRow,
            Self::ValidationFailed,
            Self::SerializationError,
            Self::IoError,
        ]
        .into_iter()
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code_string())
    }
}
