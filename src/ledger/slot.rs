use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::catalog::{SkillKind, SlotId};

/// Text box state: what the user typed, and the placeholder shown when
/// nothing was typed. Templates only ever set the placeholder.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextEntry {
    typed: Option<String>,
    placeholder: String,
}

impl TextEntry {
    #[must_use]
    pub fn typed(text: impl Into<String>) -> Self {
        Self {
            typed: Some(text.into()),
            placeholder: String::new(),
        }
    }

    /// Value written to the form: typed text, else the placeholder.
    #[must_use]
    pub fn effective(&self) -> &str {
        self.typed.as_deref().unwrap_or(&self.placeholder)
    }

    #[must_use]
    pub fn is_edited(&self) -> bool {
        self.typed.is_some()
    }

    #[must_use]
    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    pub fn set_typed(&mut self, text: impl Into<String>) {
        self.typed = Some(text.into());
    }

    pub fn set_placeholder(&mut self, text: impl Into<String>) {
        self.placeholder = text.into();
    }

    pub fn clear(&mut self) {
        self.typed = None;
        self.placeholder.clear();
    }
}

/// Value supplied by the caller for a slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkillValue {
    Date(NaiveDate),
    Text(String),
}

impl SkillValue {
    #[must_use]
    pub const fn kind_name(&self) -> &'static str {
        match self {
            Self::Date(_) => "date",
            Self::Text(_) => "text",
        }
    }
}

/// Current value of a slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SlotValue {
    Date(NaiveDate),
    Text(TextEntry),
}

impl SlotValue {
    /// Default value for a slot of `kind` after a reset.
    #[must_use]
    pub fn reset_for(kind: SkillKind, today: NaiveDate) -> Self {
        if kind.is_dated() {
            Self::Date(today)
        } else {
            Self::Text(TextEntry::default())
        }
    }

    #[must_use]
    pub const fn as_date(&self) -> Option<NaiveDate> {
        match self {
            Self::Date(date) => Some(*date),
            Self::Text(_) => None,
        }
    }

    #[must_use]
    pub const fn as_text(&self) -> Option<&TextEntry> {
        match self {
            Self::Text(entry) => Some(entry),
            Self::Date(_) => None,
        }
    }
}

/// Instructor credited for a slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attribution {
    pub instructor: String,
    pub initials: String,
    pub cert_number: String,
}

/// Per-session record of one catalog row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillSlot {
    pub id: SlotId,
    pub enabled: bool,
    pub value: SlotValue,
    pub attribution: Option<Attribution>,
}

impl SkillSlot {
    pub(super) fn reset(id: SlotId, today: NaiveDate) -> Self {
        Self {
            id,
            enabled: true,
            value: SlotValue::reset_for(id.kind(), today),
            attribution: None,
        }
    }
}
