use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::error::{ErrorCode, IaError, Result};

#[derive(Serialize)]
pub struct MachineResponse<T> {
    pub status: MachineStatus,
    pub timestamp: DateTime<Utc>,
    pub version: String,
    pub data: T,
}

#[derive(Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MachineStatus {
    Ok,
    Error {
        /// Error code enum value (e.g., "TEMPLATE_NOT_FOUND")
        code: ErrorCode,
        numeric_code: u16,
        message: String,
        /// Actionable suggestion for recovery
        suggestion: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        context: Option<serde_json::Value>,
        recoverable: bool,
        category: String,
    },
}

impl From<&IaError> for MachineStatus {
    fn from(err: &IaError) -> Self {
        let structured = err.to_structured();
        Self::Error {
            code: structured.code,
            numeric_code: structured.numeric_code,
            message: structured.message,
            suggestion: structured.suggestion,
            context: structured.context,
            recoverable: structured.recoverable,
            category: structured.category,
        }
    }
}

pub fn machine_ok<T: Serialize>(data: T) -> MachineResponse<T> {
    MachineResponse {
        status: MachineStatus::Ok,
        timestamp: Utc::now(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        data,
    }
}

/// Error response carrying the structured form of `err`.
pub fn machine_error(err: &IaError) -> MachineResponse<serde_json::Value> {
    MachineResponse {
        status: err.into(),
        timestamp: Utc::now(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        data: serde_json::Value::Null,
    }
}

pub fn emit_json<T: Serialize>(value: &T) -> Result<()> {
    let payload = serde_json::to_string_pretty(value)?;
    println!("{payload}");
    Ok(())
}

/// Emit `data` wrapped in an ok response.
pub fn emit_ok<T: Serialize>(data: T) -> Result<()> {
    emit_json(&machine_ok(data))
}

pub struct HumanLayout {
    lines: Vec<String>,
    key_width: usize,
}

impl Default for HumanLayout {
    fn default() -> Self {
        Self::new()
    }
}

impl HumanLayout {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            lines: Vec::new(),
            key_width: 18,
        }
    }

    pub fn title(&mut self, text: &str) -> &mut Self {
        self.lines.push(text.to_string());
        self.lines.push("=".repeat(text.len().max(3)));
        self
    }

    pub fn section(&mut self, text: &str) -> &mut Self {
        self.lines.push(String::new());
        self.lines.push(text.to_string());
        self.lines.push("-".repeat(text.len().max(3)));
        self
    }

    pub fn kv(&mut self, key: &str, value: &str) -> &mut Self {
        self.lines
            .push(format!("{key:width$} {value}", width = self.key_width));
        self
    }

    pub fn bullet(&mut self, text: &str) -> &mut Self {
        self.lines.push(format!("- {text}"));
        self
    }

    pub fn push_line(&mut self, line: impl Into<String>) -> &mut Self {
        self.lines.push(line.into());
        self
    }

    #[must_use]
    pub fn build(self) -> String {
        self.lines.join("\n")
    }
}

pub fn emit_human(layout: HumanLayout) {
    println!("{}", layout.build());
}
