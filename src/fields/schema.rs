//! Authoritative field list of the target form (`pdf_form_fields.json`).

use std::collections::BTreeMap;
use std::path::Path;

use tracing::debug;

use super::{FieldId, FieldMapper};
use crate::error::{IaError, Result};

/// Field ids and their default values, as declared by the form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormSchema {
    defaults: BTreeMap<String, String>,
}

impl FormSchema {
    /// Load the schema file. A missing file is fatal.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(IaError::ConfigMissing(path.display().to_string()));
        }
        let raw = std::fs::read_to_string(path)?;
        let defaults: BTreeMap<String, String> =
            serde_json::from_str(&raw).map_err(|err| IaError::StoreCorrupt {
                path: path.to_path_buf(),
                reason: format!("expected an object of field id -> string: {err}"),
            })?;
        let schema = Self { defaults };
        schema.verify(FieldMapper).map_err(|missing| IaError::StoreCorrupt {
            path: path.to_path_buf(),
            reason: format!("missing form fields: {}", missing.join(", ")),
        })?;
        debug!(path = %path.display(), fields = schema.len(), "loaded form schema");
        Ok(schema)
    }

    /// Schema declaring exactly the given ids, all defaulting to "".
    pub fn from_field_ids<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            defaults: ids.into_iter().map(|id| (id.into(), String::new())).collect(),
        }
    }

    /// Schema covering every field the mapper writes.
    #[must_use]
    pub fn from_mapper(mapper: FieldMapper) -> Self {
        Self::from_field_ids(mapper.all_field_ids())
    }

    /// Ensure every mapped field id exists in the schema.
    ///
    /// Returns the ids the schema lacks on failure.
    pub fn verify(&self, mapper: FieldMapper) -> std::result::Result<(), Vec<FieldId>> {
        let missing: Vec<FieldId> = mapper
            .all_field_ids()
            .into_iter()
            .filter(|id| !self.defaults.contains_key(*id))
            .collect();
        if missing.is_empty() { Ok(()) } else { Err(missing) }
    }

    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.defaults.contains_key(id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.defaults.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.defaults.is_empty()
    }

    pub fn defaults(&self) -> impl Iterator<Item = (&str, &str)> {
        self.defaults.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}
