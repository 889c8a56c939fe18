use std::path::{Path, PathBuf};

use chrono::{Datelike, NaiveDate};
use tracing::info;

use super::FieldMap;
use crate::error::{IaError, Result};
use crate::utils::fs::{FileMode, write_atomic};

/// Target file of a filled form:
/// `<save_dir>/<student>_Student_Record_Form_<day>_<month>_<year>.pdf`.
///
/// Fails with [`IaError::OutputPathInvalid`] when `save_dir` is not an
/// existing directory.
pub fn output_path(save_dir: &Path, student: &str, date: NaiveDate) -> Result<PathBuf> {
    if !save_dir.is_dir() {
        return Err(IaError::OutputPathInvalid(save_dir.to_path_buf()));
    }
    let student: String = student
        .chars()
        .map(|c| if matches!(c, '/' | '\\') { '_' } else { c })
        .collect();
    Ok(save_dir.join(format!(
        "{student}_Student_Record_Form_{}_{}_{}.pdf",
        date.day(),
        date.month(),
        date.year()
    )))
}

/// Writes a field map to the filled form file.
pub trait FormWriter {
    /// Write `fields` for `target`. Returns the path actually written.
    fn write(&self, fields: &FieldMap, target: &Path) -> Result<PathBuf>;
}

/// Writes the field map as pretty JSON next to the target, with a `.json`
/// extension, for a PDF filler to consume.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonFormWriter;

impl FormWriter for JsonFormWriter {
    fn write(&self, fields: &FieldMap, target: &Path) -> Result<PathBuf> {
        let dir = target.parent().unwrap_or_else(|| Path::new("."));
        if !dir.as_os_str().is_empty() && !dir.is_dir() {
            return Err(IaError::OutputPathInvalid(dir.to_path_buf()));
        }
        let path = target.with_extension("json");
        let rendered = serde_json::to_string_pretty(fields)?;
        write_atomic(&path, rendered.as_bytes(), FileMode::Default)?;
        info!(path = %path.display(), fields = fields.len(), "form written");
        Ok(path)
    }
}
