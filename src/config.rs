//! Application configuration (`config.ini`) and data file locations.

use std::path::{Path, PathBuf};

use ini::Ini;
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::error::{IaError, Result};

const STYLE_SECTION: &str = "style";
const THEME_KEY: &str = "theme";
const SAVE_SECTION: &str = "save path";
const SAVE_KEY: &str = "student_record_path";
const NEW_USER_SECTION: &str = "new_user";
const NEW_USER_KEY: &str = "new_user";

pub const DEFAULT_THEME: &str = "dark_theme";

/// Files the application reads and writes, resolved against one data
/// directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AppPaths {
    pub root: PathBuf,
}

impl AppPaths {
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Data directory from `IA_DATA_DIR`, else the platform data directory,
    /// else the working directory.
    #[must_use]
    pub fn discover(explicit: Option<&Path>) -> Self {
        let root = explicit
            .map(Path::to_path_buf)
            .or_else(|| env_string("IA_DATA_DIR").map(PathBuf::from))
            .or_else(|| dirs::data_dir().map(|dir| dir.join("instructor-assistant")))
            .unwrap_or_else(|| PathBuf::from("."));
        Self { root }
    }

    #[must_use]
    pub fn config(&self) -> PathBuf {
        self.root.join("config.ini")
    }

    #[must_use]
    pub fn instructors(&self) -> PathBuf {
        self.root.join("instructor_data.json")
    }

    #[must_use]
    pub fn templates(&self) -> PathBuf {
        self.root.join("dive_template_data.json")
    }

    #[must_use]
    pub fn labels(&self) -> PathBuf {
        self.root.join("ui_setup_labels.json")
    }

    #[must_use]
    pub fn form_fields(&self) -> PathBuf {
        self.root.join("pdf_form_fields.json")
    }
}

/// Values taken from the environment. They shadow the file values and are
/// never written back.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct EnvOverrides {
    theme: Option<String>,
    save_path: Option<PathBuf>,
}

/// Settings from `config.ini`, with `IA_THEME` and `IA_SAVE_PATH` layered on
/// top. Accessors return the effective values; [`AppConfig::save`] writes the
/// file values only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    theme: String,
    save_path: Option<PathBuf>,
    new_user: bool,
    overrides: EnvOverrides,
    path: PathBuf,
}

#[derive(Serialize)]
struct EffectiveConfig<'a> {
    theme: &'a str,
    save_path: Option<&'a Path>,
    new_user: bool,
    env_overrides: Vec<&'static str>,
}

impl Serialize for AppConfig {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        EffectiveConfig {
            theme: self.theme(),
            save_path: self.save_path(),
            new_user: self.new_user,
            env_overrides: self.overridden_keys(),
        }
        .serialize(serializer)
    }
}

impl AppConfig {
    /// Load `config.ini` and apply overrides from the process environment.
    /// The file must exist.
    pub fn load(path: &Path) -> Result<Self> {
        Self::load_with_env(path, env_string)
    }

    /// Load `config.ini`, taking overrides from `lookup`.
    pub fn load_with_env(path: &Path, lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        if !path.exists() {
            return Err(IaError::ConfigMissing(path.display().to_string()));
        }
        let ini = Ini::load_from_file(path)?;
        let get = |section: &str, key: &str| {
            ini.section(Some(section))
                .and_then(|props| props.get(key))
                .map(str::trim)
                .filter(|value| !value.is_empty())
        };

        let new_user = match get(NEW_USER_SECTION, NEW_USER_KEY) {
            Some(value) => parse_bool(value).ok_or_else(|| {
                IaError::Config(format!(
                    "[{NEW_USER_SECTION}] {NEW_USER_KEY} must be true or false, got '{value}'"
                ))
            })?,
            None => false,
        };
        let mut config = Self {
            theme: get(STYLE_SECTION, THEME_KEY)
                .unwrap_or(DEFAULT_THEME)
                .to_string(),
            save_path: get(SAVE_SECTION, SAVE_KEY).map(PathBuf::from),
            new_user,
            overrides: EnvOverrides::default(),
            path: path.to_path_buf(),
        };
        config.apply_env_overrides(lookup);
        debug!(path = %path.display(), theme = %config.theme(), "loaded config");
        Ok(config)
    }

    /// Replace the override layer with `IA_THEME` and `IA_SAVE_PATH` from
    /// `lookup`. File values are untouched.
    pub fn apply_env_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        self.overrides = EnvOverrides {
            theme: lookup("IA_THEME"),
            save_path: lookup("IA_SAVE_PATH").map(PathBuf::from),
        };
    }

    /// Effective theme.
    #[must_use]
    pub fn theme(&self) -> &str {
        self.overrides.theme.as_deref().unwrap_or(&self.theme)
    }

    /// Effective save directory.
    #[must_use]
    pub fn save_path(&self) -> Option<&Path> {
        self.overrides
            .save_path
            .as_deref()
            .or(self.save_path.as_deref())
    }

    /// Save directory as stored in `config.ini`.
    #[must_use]
    pub fn stored_save_path(&self) -> Option<&Path> {
        self.save_path.as_deref()
    }

    #[must_use]
    pub const fn new_user(&self) -> bool {
        self.new_user
    }

    /// Names of the environment variables currently in effect.
    #[must_use]
    pub fn overridden_keys(&self) -> Vec<&'static str> {
        let mut keys = Vec::new();
        if self.overrides.theme.is_some() {
            keys.push("IA_THEME");
        }
        if self.overrides.save_path.is_some() {
            keys.push("IA_SAVE_PATH");
        }
        keys
    }

    /// On first run, point the save path at the desktop (or home) and clear
    /// the new-user flag. Returns true when the file was updated.
    pub fn initialize_first_run(&mut self) -> Result<bool> {
        if !self.new_user {
            return Ok(false);
        }
        let default_dir = dirs::desktop_dir()
            .filter(|dir| dir.is_dir())
            .or_else(dirs::home_dir)
            .ok_or_else(|| IaError::Config("no desktop or home directory found".to_string()))?;
        self.save_path = Some(default_dir);
        self.new_user = false;
        self.save()?;
        info!(save_path = ?self.save_path, "first run: default save path set");
        if self.overrides.save_path.is_some() {
            debug!("IA_SAVE_PATH still overrides the stored save path");
        }
        Ok(true)
    }

    /// Set the save directory. It must exist.
    pub fn set_save_path(&mut self, dir: &Path) -> Result<()> {
        if !dir.is_dir() {
            return Err(IaError::OutputPathInvalid(dir.to_path_buf()));
        }
        self.save_path = Some(dir.to_path_buf());
        if let Some(active) = &self.overrides.save_path {
            warn!(override_path = %active.display(), "IA_SAVE_PATH still takes precedence");
        }
        self.save()
    }

    /// The save directory, which must still exist.
    pub fn require_save_path(&self) -> Result<&Path> {
        let dir = self
            .save_path()
            .ok_or_else(|| IaError::Config(format!("[{SAVE_SECTION}] {SAVE_KEY} is not set")))?;
        if dir.is_dir() {
            Ok(dir)
        } else {
            Err(IaError::OutputPathInvalid(dir.to_path_buf()))
        }
    }

    /// Write the file values back to `config.ini`, keeping unrelated
    /// entries. Environment overrides are never persisted.
    pub fn save(&self) -> Result<()> {
        let mut ini = if self.path.exists() {
            Ini::load_from_file(&self.path)?
        } else {
            Ini::new()
        };
        ini.with_section(Some(STYLE_SECTION))
            .set(THEME_KEY, self.theme.as_str());
        ini.with_section(Some(SAVE_SECTION)).set(
            SAVE_KEY,
            self.save_path
                .as_deref()
                .map(|p| p.display().to_string())
                .unwrap_or_default(),
        );
        ini.with_section(Some(NEW_USER_SECTION))
            .set(NEW_USER_KEY, if self.new_user { "True" } else { "False" });
        ini.write_to_file(&self.path)?;
        debug!(path = %self.path.display(), "saved config");
        Ok(())
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

fn env_string(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn overrides(key: &str) -> Option<String> {
        match key {
            "IA_THEME" => Some("light_theme".to_string()),
            "IA_SAVE_PATH" => Some("/srv/forms".to_string()),
            _ => None,
        }
    }

    fn write_config(temp: &TempDir, body: &str) -> PathBuf {
        let path = temp.path().join("config.ini");
        std::fs::write(&path, body).unwrap();
        path
    }

    #[test]
    fn missing_config_is_fatal() {
        let temp = TempDir::new().unwrap();
        let err = AppConfig::load(&temp.path().join("config.ini")).unwrap_err();
        assert!(matches!(err, IaError::ConfigMissing(_)));
    }

    #[test]
    fn loads_sections() {
        let temp = TempDir::new().unwrap();
        let path = write_config(
            &temp,
            "[style]\ntheme = sea_theme\n\n[save path]\nstudent_record_path = /tmp/forms\n\n[new_user]\nnew_user = False\n",
        );
        let config = AppConfig::load_with_env(&path, |_| None).unwrap();
        assert_eq!(config.save_path(), Some(Path::new("/tmp/forms")));
        assert_eq!(config.theme(), "sea_theme");
        assert!(!config.new_user());
    }

    #[test]
    fn defaults_when_keys_absent() {
        let temp = TempDir::new().unwrap();
        let path = write_config(&temp, "[style]\n");
        let config = AppConfig::load_with_env(&path, |_| None).unwrap();
        assert_eq!(config.theme(), DEFAULT_THEME);
        assert_eq!(config.save_path(), None);
    }

    #[test]
    fn invalid_new_user_flag_is_rejected() {
        let temp = TempDir::new().unwrap();
        let path = write_config(&temp, "[new_user]\nnew_user = maybe\n");
        assert!(matches!(AppConfig::load(&path), Err(IaError::Config(_))));
    }

    #[test]
    fn env_overrides_take_precedence() {
        let temp = TempDir::new().unwrap();
        let path = write_config(&temp, "[style]\ntheme = dark_theme\n");
        let config = AppConfig::load_with_env(&path, overrides).unwrap();
        assert_eq!(config.theme(), "light_theme");
        assert_eq!(config.save_path(), Some(Path::new("/srv/forms")));
        assert_eq!(config.stored_save_path(), None);
        assert_eq!(config.overridden_keys(), ["IA_THEME", "IA_SAVE_PATH"]);
    }

    #[test]
    fn env_overrides_are_not_written_back() {
        let temp = TempDir::new().unwrap();
        let path = write_config(&temp, "[style]\ntheme = dark_theme\n");
        let mut config = AppConfig::load_with_env(&path, overrides).unwrap();

        let forms = temp.path().join("forms");
        std::fs::create_dir(&forms).unwrap();
        config.set_save_path(&forms).unwrap();
        assert_eq!(config.save_path(), Some(Path::new("/srv/forms")));

        let reloaded = AppConfig::load_with_env(&path, |_| None).unwrap();
        assert_eq!(reloaded.theme(), "dark_theme");
        assert_eq!(reloaded.save_path(), Some(forms.as_path()));
        let raw = std::fs::read_to_string(&path).unwrap();
        assert!(!raw.contains("light_theme"));
        assert!(!raw.contains("/srv/forms"));
    }

    #[test]
    fn first_run_keeps_the_save_path_override() {
        let temp = TempDir::new().unwrap();
        let path = write_config(&temp, "[new_user]\nnew_user = True\n");
        let mut config = AppConfig::load_with_env(&path, overrides).unwrap();

        assert!(config.initialize_first_run().unwrap());
        assert!(!config.new_user());
        assert_eq!(config.save_path(), Some(Path::new("/srv/forms")));
        assert!(config.stored_save_path().is_some());

        let raw = std::fs::read_to_string(&path).unwrap();
        assert!(!raw.contains("/srv/forms"));
        assert!(!raw.contains("light_theme"));
    }

    #[test]
    fn set_save_path_persists_and_rejects_missing_dirs() {
        let temp = TempDir::new().unwrap();
        let path = write_config(&temp, "[style]\ntheme = dark_theme\n");
        let mut config = AppConfig::load_with_env(&path, |_| None).unwrap();

        let missing = temp.path().join("missing");
        assert!(matches!(
            config.set_save_path(&missing),
            Err(IaError::OutputPathInvalid(_))
        ));

        let forms = temp.path().join("forms");
        std::fs::create_dir(&forms).unwrap();
        config.set_save_path(&forms).unwrap();

        let raw = std::fs::read_to_string(&path).unwrap();
        assert!(raw.contains("student_record_path"));
        assert!(raw.contains(&forms.display().to_string()));
    }

    #[test]
    fn require_save_path_checks_existence() {
        let temp = TempDir::new().unwrap();
        let path = write_config(
            &temp,
            &format!(
                "[save path]\nstudent_record_path = {}\n",
                temp.path().join("gone").display()
            ),
        );
        let config = AppConfig::load_with_env(&path, |_| None).unwrap();
        assert!(matches!(
            config.require_save_path(),
            Err(IaError::OutputPathInvalid(_))
        ));
    }

    #[test]
    fn app_paths_resolve_under_root() {
        let paths = AppPaths::new("/data");
        assert_eq!(paths.config(), PathBuf::from("/data/config.ini"));
        assert_eq!(paths.templates(), PathBuf::from("/data/dive_template_data.json"));
        assert_eq!(paths.form_fields(), PathBuf::from("/data/pdf_form_fields.json"));
    }
}
