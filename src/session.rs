//! One working session over a data directory.
//!
//! Owns the ledger, the student roster and the persisted stores, and tracks
//! which student and template are currently selected.

use std::path::PathBuf;

use chrono::NaiveDate;
use tracing::info;

use crate::config::{AppConfig, AppPaths};
use crate::error::{IaError, Result};
use crate::fields::FormSchema;
use crate::form::{FieldMap, FormAssembler, FormWriter, output_path};
use crate::instructor::{InstructorDirectory, SignOff};
use crate::labels::SkillLabels;
use crate::ledger::SkillLedger;
use crate::student::{ImportReport, Student, StudentRoster, import_csv};
use crate::templates::TemplateStore;

#[derive(Debug)]
pub struct Session {
    paths: AppPaths,
    pub config: AppConfig,
    pub labels: SkillLabels,
    assembler: FormAssembler,
    pub instructors: InstructorDirectory,
    pub templates: TemplateStore,
    pub ledger: SkillLedger,
    pub roster: StudentRoster,
    selected_student: Option<String>,
    selected_template: Option<String>,
    today: NaiveDate,
}

impl Session {
    /// Open every file under `paths`. Config, labels and the form schema
    /// must exist; the instructor and template stores may not yet.
    pub fn open(paths: AppPaths, today: NaiveDate) -> Result<Self> {
        let mut config = AppConfig::load(&paths.config())?;
        config.initialize_first_run()?;
        let labels = SkillLabels::load(&paths.labels())?;
        let schema = FormSchema::load(&paths.form_fields())?;
        let instructors = InstructorDirectory::open(paths.instructors())?;
        let templates = TemplateStore::open(paths.templates())?;
        info!(
            root = %paths.root.display(),
            instructors = instructors.len(),
            templates = templates.len(),
            "session opened"
        );
        Ok(Self {
            paths,
            config,
            labels,
            assembler: FormAssembler::new(schema),
            instructors,
            templates,
            ledger: SkillLedger::new(today),
            roster: StudentRoster::new(),
            selected_student: None,
            selected_template: None,
            today,
        })
    }

    #[must_use]
    pub const fn paths(&self) -> &AppPaths {
        &self.paths
    }

    #[must_use]
    pub const fn today(&self) -> NaiveDate {
        self.today
    }

    #[must_use]
    pub const fn assembler(&self) -> &FormAssembler {
        &self.assembler
    }

    /// Reset the ledger and forget the selected student.
    pub fn reset(&mut self) {
        self.ledger.reset(self.today);
        self.selected_student = None;
    }

    pub fn add_student(&mut self, student: Student) -> Result<()> {
        self.roster.add(student)?;
        Ok(())
    }

    pub fn import_students(&mut self, path: &std::path::Path) -> Result<ImportReport> {
        import_csv(path, &mut self.roster)
    }

    pub fn select_student(&mut self, name: &str) -> Result<()> {
        self.roster.get(name)?;
        self.selected_student = Some(name.to_string());
        Ok(())
    }

    pub fn selected_student(&self) -> Option<&Student> {
        self.selected_student
            .as_deref()
            .and_then(|name| self.roster.get(name).ok())
    }

    pub fn select_template(&mut self, name: &str) -> Result<()> {
        self.templates.get(name)?;
        self.selected_template = Some(name.to_string());
        Ok(())
    }

    #[must_use]
    pub fn selected_template(&self) -> Option<&str> {
        self.selected_template.as_deref()
    }

    /// Apply the selected template to the ledger.
    pub fn apply_selected_template(&mut self) -> Result<()> {
        let name = self
            .selected_template
            .as_deref()
            .ok_or_else(|| IaError::Validation("no template selected".to_string()))?;
        self.templates.apply(name, &mut self.ledger)
    }

    /// Delete a template, clearing the selection if it was selected.
    pub fn delete_template(&mut self, name: &str) -> Result<()> {
        self.templates.delete(name)?;
        if self.selected_template.as_deref() == Some(name) {
            self.selected_template = None;
        }
        Ok(())
    }

    /// Authenticate `instructor` and credit them on the ledger.
    pub fn sign_off(&mut self, instructor: &str, password: &str) -> Result<SignOff> {
        self.instructors
            .sign_off(instructor, password, &mut self.ledger, self.today)
    }

    /// Field map for the selected student.
    #[must_use]
    pub fn build_fields(&self) -> FieldMap {
        self.assembler.build(
            &self.ledger,
            self.selected_student(),
            self.ledger.checkboxes(),
        )
    }

    /// Build the field map and hand it to `writer`.
    pub fn generate(&self, writer: &dyn FormWriter) -> Result<PathBuf> {
        let student = self
            .selected_student()
            .ok_or_else(|| IaError::Validation("select a student before generating".to_string()))?;
        let save_dir = self.config.require_save_path()?;
        let target = output_path(save_dir, &student.full_name(), self.today)?;
        let fields = self.build_fields();
        writer.write(&fields, &target)
    }
}
