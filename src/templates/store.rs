use std::collections::BTreeMap;
use std::path::PathBuf;

use tracing::info;

use super::{Template, TemplateDraft, TemplateRecord};
use crate::error::{IaError, Result};
use crate::ledger::SkillLedger;
use crate::storage::JsonStore;

/// Templates persisted in `dive_template_data.json`, validated on open.
#[derive(Debug)]
pub struct TemplateStore {
    store: JsonStore<TemplateRecord>,
    templates: BTreeMap<String, Template>,
}

impl TemplateStore {
    /// Open the store. A missing file is an empty store; a record that fails
    /// validation makes the whole store corrupt.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let store: JsonStore<TemplateRecord> = JsonStore::open(path)?;
        let mut templates = BTreeMap::new();
        for (name, record) in store.iter() {
            let template =
                Template::try_from(record.clone()).map_err(|reason| IaError::StoreCorrupt {
                    path: store.path().to_path_buf(),
                    reason: format!("template '{name}': {reason}"),
                })?;
            templates.insert(name.to_string(), template);
        }
        Ok(Self { store, templates })
    }

    /// Capture `draft` under `name`, replacing any template of that name.
    pub fn save(&mut self, name: &str, draft: &TemplateDraft) -> Result<Template> {
        let name = name.trim();
        if name.is_empty() {
            return Err(IaError::Validation("template name is empty".to_string()));
        }
        let template = draft.capture()?;
        self.store.insert(name, TemplateRecord::from(&template));
        self.store.save()?;
        let replaced = self
            .templates
            .insert(name.to_string(), template.clone())
            .is_some();
        info!(template = %name, replaced, "template saved");
        Ok(template)
    }

    /// Save the ledger's current switches and options as a template.
    pub fn save_ledger(&mut self, name: &str, ledger: &SkillLedger) -> Result<Template> {
        self.save(name, &TemplateDraft::from_ledger(ledger))
    }

    pub fn get(&self, name: &str) -> Result<&Template> {
        self.templates
            .get(name)
            .ok_or_else(|| IaError::TemplateNotFound(name.to_string()))
    }

    /// Template names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.templates.keys().map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.templates.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    pub fn delete(&mut self, name: &str) -> Result<Template> {
        let removed = self
            .templates
            .remove(name)
            .ok_or_else(|| IaError::TemplateNotFound(name.to_string()))?;
        self.store.remove(name);
        self.store.save()?;
        info!(template = %name, "template deleted");
        Ok(removed)
    }

    /// Replay template `name` onto `ledger`.
    pub fn apply(&self, name: &str, ledger: &mut SkillLedger) -> Result<()> {
        self.get(name)?.apply_to(ledger)?;
        info!(template = %name, "template applied");
        Ok(())
    }
}
