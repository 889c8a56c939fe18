//! Human-readable skill names (`ui_setup_labels.json`).

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::catalog::{CATALOG, Category, SlotId};
use crate::error::{IaError, Result};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillLabels {
    #[serde(rename = "cw_water_list")]
    pub cw: Vec<String>,
    #[serde(rename = "kd_string_list")]
    pub kd: Vec<String>,
    #[serde(rename = "ow_string_list")]
    pub ow: Vec<String>,
}

impl Default for SkillLabels {
    /// Labels taken from the catalog's short names.
    fn default() -> Self {
        let names = |category: Category| {
            CATALOG
                .iter()
                .filter(|def| def.slot.category() == category)
                .map(|def| def.name.to_string())
                .collect()
        };
        Self {
            cw: names(Category::Cw),
            kd: names(Category::Kd),
            ow: names(Category::Ow),
        }
    }
}

impl SkillLabels {
    /// Load and check the label file. A missing file is fatal.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(IaError::ConfigMissing(path.display().to_string()));
        }
        let raw = std::fs::read_to_string(path)?;
        let labels: Self = serde_json::from_str(&raw).map_err(|err| IaError::StoreCorrupt {
            path: path.to_path_buf(),
            reason: err.to_string(),
        })?;
        labels.check().map_err(|reason| IaError::StoreCorrupt {
            path: path.to_path_buf(),
            reason,
        })?;
        Ok(labels)
    }

    fn check(&self) -> std::result::Result<(), String> {
        for category in Category::ALL {
            let found = self.list(category).len();
            if found != category.len() {
                return Err(format!(
                    "{category} list has {found} labels, expected {}",
                    category.len()
                ));
            }
        }
        Ok(())
    }

    fn list(&self, category: Category) -> &[String] {
        match category {
            Category::Cw => &self.cw,
            Category::Kd => &self.kd,
            Category::Ow => &self.ow,
        }
    }

    /// Label of a slot.
    #[must_use]
    pub fn label(&self, id: SlotId) -> &str {
        self.list(id.category())
            .get(id.position())
            .map_or(id.def().name, String::as_str)
    }
}
