//! Per-session skill ledger.
//!
//! The ledger is the single source of truth for what the form will say:
//! one [`SkillSlot`] per catalog row, the per-category "select all"
//! switches, the knowledge development quiz boxes and checkboxes, the
//! course options and the two instructor header blocks. Presentation code
//! renders from it and mutates it only through these operations.

mod headers;
mod slot;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::catalog::{
    CATALOG, Category, QUIZ_COUNT, SLOT_COUNT, SkillCode, SkillKind, SlotId,
    aggregate_constituents, flex_slot, kd_complete, kd_row,
};
use crate::error::{IaError, Result};

pub use headers::{HeaderEntry, HeaderOutcome, InstructorHeaders};
pub use slot::{Attribution, SkillSlot, SkillValue, SlotValue, TextEntry};

/// State of a category after a bulk toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CategoryState {
    AllEnabled,
    AllDisabled,
}

impl CategoryState {
    const fn from_enabled(enabled: bool) -> Self {
        if enabled {
            Self::AllEnabled
        } else {
            Self::AllDisabled
        }
    }
}

/// Which knowledge development path is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KnowledgePath {
    /// Sections 1-5 in the manual and classroom.
    Classroom,
    /// eLearning followed by the quick review.
    Elearning,
}

/// Course option checkboxes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseOptions {
    pub rdp_table: bool,
    pub erdpml: bool,
    pub computer: bool,
}

impl CourseOptions {
    #[must_use]
    pub const fn as_array(self) -> [bool; 3] {
        [self.rdp_table, self.erdpml, self.computer]
    }

    #[must_use]
    pub const fn from_array([rdp_table, erdpml, computer]: [bool; 3]) -> Self {
        Self {
            rdp_table,
            erdpml,
            computer,
        }
    }
}

/// Every checkbox the form carries outside the skill slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Checkboxes {
    pub knowledge_review: [bool; QUIZ_COUNT],
    pub video: [bool; QUIZ_COUNT],
    pub course: CourseOptions,
}

impl Default for Checkboxes {
    fn default() -> Self {
        Self {
            knowledge_review: [true; QUIZ_COUNT],
            video: [true; QUIZ_COUNT],
            course: CourseOptions::default(),
        }
    }
}

/// The mutable per-session state behind one record form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillLedger {
    slots: Vec<SkillSlot>,
    quiz: [TextEntry; QUIZ_COUNT],
    checkboxes: Checkboxes,
    headers: InstructorHeaders,
}

impl SkillLedger {
    /// A freshly reset ledger dated `today`.
    #[must_use]
    pub fn new(today: NaiveDate) -> Self {
        let mut ledger = Self {
            slots: Vec::with_capacity(SLOT_COUNT),
            quiz: Default::default(),
            checkboxes: Checkboxes::default(),
            headers: InstructorHeaders::default(),
        };
        ledger.reset(today);
        ledger
    }

    /// Every slot enabled, dates set to `today`, text and attribution cleared.
    pub fn reset(&mut self, today: NaiveDate) {
        self.slots = CATALOG
            .iter()
            .map(|def| SkillSlot::reset(def.slot, today))
            .collect();
        self.quiz.iter_mut().for_each(TextEntry::clear);
        self.checkboxes = Checkboxes::default();
        self.headers.clear();
        debug!(%today, "ledger reset");
    }

    #[must_use]
    pub fn slot(&self, id: SlotId) -> &SkillSlot {
        &self.slots[id.flat_index()]
    }

    fn slot_mut(&mut self, id: SlotId) -> &mut SkillSlot {
        &mut self.slots[id.flat_index()]
    }

    /// All slots in flat order.
    pub fn slots(&self) -> impl Iterator<Item = &SkillSlot> {
        self.slots.iter()
    }

    pub fn category_slots(&self, category: Category) -> impl Iterator<Item = &SkillSlot> {
        let start = category.offset();
        self.slots[start..start + category.len()].iter()
    }

    #[must_use]
    pub fn is_enabled(&self, id: SlotId) -> bool {
        self.slot(id).enabled
    }

    pub fn set_enabled(&mut self, id: SlotId, enabled: bool) {
        self.slot_mut(id).enabled = enabled;
    }

    /// Set a slot's value. The value kind must match the slot kind.
    pub fn set_value(&mut self, id: SlotId, value: SkillValue) -> Result<()> {
        let kind = id.kind();
        let slot = self.slot_mut(id);
        match (kind, value) {
            (SkillKind::Date | SkillKind::Aggregate, SkillValue::Date(date)) => {
                slot.value = SlotValue::Date(date);
                Ok(())
            }
            (SkillKind::FreeText, SkillValue::Text(text)) => {
                match &mut slot.value {
                    SlotValue::Text(entry) => entry.set_typed(text),
                    other => *other = SlotValue::Text(TextEntry::typed(text)),
                }
                Ok(())
            }
            (kind, value) => Err(IaError::TypeMismatch {
                slot: format!("{id} ({})", id.def().name),
                expected: if kind.is_dated() { "date" } else { "text" },
                found: value.kind_name(),
            }),
        }
    }

    /// Date currently held by the slot of `code`.
    #[must_use]
    pub fn date(&self, code: SkillCode) -> Option<NaiveDate> {
        self.slot(code.slot()).value.as_date()
    }

    /// Current text entry of flex skill `index`.
    #[must_use]
    pub fn flex(&self, index: usize) -> Option<&TextEntry> {
        flex_slot(index).and_then(|id| self.slot(id).value.as_text())
    }

    /// Set the placeholder of flex skill `index`, keeping any typed text.
    pub fn set_flex_placeholder(&mut self, index: usize, text: &str) {
        if let Some(id) = flex_slot(index)
            && let SlotValue::Text(entry) = &mut self.slot_mut(id).value
        {
            entry.set_placeholder(text);
        }
    }

    #[must_use]
    pub fn quiz(&self, index: usize) -> Option<&TextEntry> {
        self.quiz.get(index)
    }

    pub fn set_quiz(&mut self, index: usize, text: impl Into<String>) {
        if let Some(entry) = self.quiz.get_mut(index) {
            entry.set_typed(text);
        }
    }

    pub fn set_quiz_placeholder(&mut self, index: usize, text: impl Into<String>) {
        if let Some(entry) = self.quiz.get_mut(index) {
            entry.set_placeholder(text);
        }
    }

    #[must_use]
    pub const fn checkboxes(&self) -> &Checkboxes {
        &self.checkboxes
    }

    pub const fn checkboxes_mut(&mut self) -> &mut Checkboxes {
        &mut self.checkboxes
    }

    #[must_use]
    pub const fn headers(&self) -> &InstructorHeaders {
        &self.headers
    }

    /// Record an instructor in the first free header block.
    pub fn attribute_header(&mut self, entry: HeaderEntry) -> HeaderOutcome {
        self.headers.attribute(entry)
    }

    /// Credit `attribution` on every enabled slot. Returns the number of slots.
    pub fn attribute_enabled(&mut self, attribution: &Attribution) -> usize {
        let mut count = 0;
        for slot in self.slots.iter_mut().filter(|slot| slot.enabled) {
            slot.attribution = Some(attribution.clone());
            count += 1;
        }
        count
    }

    /// Whether every slot of the category is switched on.
    #[must_use]
    pub fn category_selected(&self, category: Category) -> bool {
        category.slots().all(|id| self.is_enabled(id))
    }

    /// Flip a category to the opposite of its current "all enabled" state.
    pub fn toggle_category(&mut self, category: Category) -> CategoryState {
        let target = !self.category_selected(category);
        self.set_category(category, target);
        CategoryState::from_enabled(target)
    }

    /// Flip all three categories together. Deselecting also clears the
    /// course options.
    pub fn toggle_all(&mut self) -> CategoryState {
        let target = !Category::ALL
            .into_iter()
            .all(|category| self.category_selected(category));
        for category in Category::ALL {
            self.set_category(category, target);
        }
        if !target {
            self.checkboxes.course = CourseOptions::default();
        }
        CategoryState::from_enabled(target)
    }

    fn set_category(&mut self, category: Category, enabled: bool) {
        for id in category.slots() {
            self.set_enabled(id, enabled);
        }
        if category == Category::Kd {
            self.checkboxes.knowledge_review = [enabled; QUIZ_COUNT];
            self.checkboxes.video = [enabled; QUIZ_COUNT];
        }
        debug!(%category, enabled, "category toggled");
    }

    /// Switch knowledge development between the classroom sections and the
    /// eLearning quick review.
    pub fn toggle_elearning(&mut self) -> KnowledgePath {
        let to_elearning = self.is_enabled(kd_row(0));
        for position in 0..5 {
            self.set_kd_row(position, !to_elearning);
        }
        self.set_kd_row(5, to_elearning);
        if to_elearning {
            KnowledgePath::Elearning
        } else {
            KnowledgePath::Classroom
        }
    }

    fn set_kd_row(&mut self, position: usize, enabled: bool) {
        self.set_enabled(kd_row(position), enabled);
        self.checkboxes.knowledge_review[position] = enabled;
        self.checkboxes.video[position] = enabled;
    }

    /// Clear the review and video checkboxes of every disabled KD row.
    pub(crate) fn clear_disabled_kd_checks(&mut self) {
        for position in 0..QUIZ_COUNT {
            if !self.is_enabled(kd_row(position)) {
                self.checkboxes.knowledge_review[position] = false;
                self.checkboxes.video[position] = false;
            }
        }
    }

    /// Whether an aggregate code's sign-off should be written: its own slot
    /// and all its constituents are enabled.
    #[must_use]
    pub fn aggregate_complete(&self, code: SkillCode) -> bool {
        if !code.is_aggregate() || !self.is_enabled(code.slot()) {
            return false;
        }
        if code.value() == 21 {
            return kd_complete(|id| self.is_enabled(id));
        }
        aggregate_constituents(code)
            .into_iter()
            .all(|id| self.is_enabled(id))
    }

}
