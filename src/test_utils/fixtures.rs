use std::collections::BTreeMap;
use std::path::PathBuf;

use chrono::NaiveDate;
use tempfile::TempDir;

use crate::config::AppPaths;
use crate::fields::{FieldMapper, FormSchema};
use crate::labels::SkillLabels;
use crate::session::Session;
use crate::student::REQUIRED_COLUMNS;

/// Isolated data directory holding every file a session needs.
///
/// `config.ini` points the save path at `forms/` inside the same temp dir.
pub struct DataDirFixture {
    pub temp_dir: TempDir,
    pub root: PathBuf,
    pub forms_dir: PathBuf,
}

impl DataDirFixture {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let root = temp_dir.path().to_path_buf();
        let forms_dir = root.join("forms");
        std::fs::create_dir_all(&forms_dir).expect("Failed to create forms dir");

        let fixture = Self {
            temp_dir,
            root,
            forms_dir,
        };
        fixture.create_file(
            "config.ini",
            &format!(
                "[style]\ntheme = dark_theme\n\n[save path]\nstudent_record_path = {}\n\n[new_user]\nnew_user = False\n",
                fixture.forms_dir.display()
            ),
        );
        let labels = serde_json::to_string_pretty(&SkillLabels::default())
            .expect("Failed to render labels");
        fixture.create_file("ui_setup_labels.json", &labels);

        let schema = FormSchema::from_mapper(FieldMapper);
        let defaults: BTreeMap<&str, &str> = schema.defaults().collect();
        let fields = serde_json::to_string_pretty(&defaults).expect("Failed to render schema");
        fixture.create_file("pdf_form_fields.json", &fields);

        println!("[FIXTURE] Created data directory: {:?}", fixture.root);
        fixture
    }

    pub fn paths(&self) -> AppPaths {
        AppPaths::new(&self.root)
    }

    /// Open a session dated `today`.
    pub fn session(&self, today: NaiveDate) -> Session {
        Session::open(self.paths(), today).expect("Failed to open session")
    }

    /// Create a file under the data directory.
    pub fn create_file(&self, relative_path: &str, content: &str) -> PathBuf {
        let full_path = self.root.join(relative_path);
        if let Some(parent) = full_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent dirs");
        }
        std::fs::write(&full_path, content).expect("Failed to write file");
        println!(
            "[FIXTURE] Created file: {:?} ({} bytes)",
            full_path,
            content.len()
        );
        full_path
    }

    /// Write a student CSV with the standard header and the given rows.
    pub fn create_students_csv(&self, name: &str, rows: &[&str]) -> PathBuf {
        let mut doc = REQUIRED_COLUMNS.join(",");
        doc.push('\n');
        for row in rows {
            doc.push_str(row);
            doc.push('\n');
        }
        self.create_file(name, &doc)
    }
}

impl Default for DataDirFixture {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for DataDirFixture {
    fn drop(&mut self) {
        println!("[FIXTURE] Cleaning up data directory: {:?}", self.root);
    }
}
