//! Filesystem utilities.
//!
//! Helper functions for file operations.

use std::fs;
use std::path::Path;

use crate::error::Result;

/// Ensure a directory exists, creating it if necessary.
pub fn ensure_dir(path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    if !path.exists() {
        fs::create_dir_all(path)?;
    }
    Ok(())
}

/// Read a file to string, returning None if it doesn't exist.
pub fn read_optional(path: impl AsRef<Path>) -> Result<Option<String>> {
    let path = path.as_ref();
    if path.exists() {
        Ok(Some(fs::read_to_string(path)?))
    } else {
        Ok(None)
    }
}

/// Permissions applied to a file written by [`write_atomic`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FileMode {
    /// Whatever the process umask yields.
    #[default]
    Default,
    /// Owner read/write only (0600 on Unix).
    Private,
}

/// Write `contents` to a sibling temp file, then rename it over `path`.
///
/// The parent directory is created when missing.
pub fn write_atomic(path: impl AsRef<Path>, contents: &[u8], mode: FileMode) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        ensure_dir(parent)?;
    }

    let temp_path = path.with_extension("tmp");
    fs::write(&temp_path, contents)?;

    #[cfg(unix)]
    if mode == FileMode::Private {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(&temp_path, fs::Permissions::from_mode(0o600))?;
    }
    #[cfg(not(unix))]
    let _ = mode;

    fs::rename(&temp_path, path)?;
    Ok(())
}
