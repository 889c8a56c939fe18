use chrono::NaiveDate;

use crate::catalog::{
    Category, FLEX_COUNT, QUIZ_COUNT, SLOT_COUNT, SkillCode, SlotId, flex_slot, kd_row,
};
use crate::error::{IaError, Result};
use crate::ledger::{CourseOptions, SkillLedger};

use super::{CalendarEntry, FlexEntry, SKIP_SENTINEL, Template};

/// Editor state of a template before it is saved.
///
/// Every entry starts unedited. An unedited entry shows a default that
/// follows its row's switch: the row's own code when on, `--` when off.
/// Typed text overrides the default.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateDraft {
    entries: [Option<String>; SkillCode::COUNT],
    flex: [Option<String>; FLEX_COUNT],
    switches: [bool; SLOT_COUNT],
    quiz: [String; QUIZ_COUNT],
    course: CourseOptions,
}

impl Default for TemplateDraft {
    fn default() -> Self {
        Self {
            entries: Default::default(),
            flex: Default::default(),
            switches: [true; SLOT_COUNT],
            quiz: Default::default(),
            course: CourseOptions::default(),
        }
    }
}

impl TemplateDraft {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Draft mirroring a ledger's switches, quiz text, typed flex text and
    /// course options. Calendar entries stay at their defaults.
    #[must_use]
    pub fn from_ledger(ledger: &SkillLedger) -> Self {
        let mut draft = Self::new();
        for slot in ledger.slots() {
            draft.switches[slot.id.flat_index()] = slot.enabled;
        }
        for index in 0..QUIZ_COUNT {
            if let Some(entry) = ledger.quiz(index) {
                draft.quiz[index] = entry.effective().to_string();
            }
        }
        for index in 0..FLEX_COUNT {
            draft.flex[index] = ledger
                .flex(index)
                .filter(|entry| entry.is_edited())
                .map(|entry| entry.effective().to_string());
        }
        draft.course = ledger.checkboxes().course;
        draft
    }

    #[must_use]
    pub fn switch(&self, id: SlotId) -> bool {
        self.switches[id.flat_index()]
    }

    pub fn set_switch(&mut self, id: SlotId, on: bool) {
        self.switches[id.flat_index()] = on;
    }

    /// Flip every switch of a category to the opposite of "all on".
    pub fn toggle_category(&mut self, category: Category) -> bool {
        let target = !category.slots().all(|id| self.switch(id));
        for id in category.slots() {
            self.set_switch(id, target);
        }
        target
    }

    /// Swap the classroom sections for the eLearning review, or back.
    pub fn toggle_elearning(&mut self) -> bool {
        let to_elearning = self.switch(kd_row(0));
        for position in 0..5 {
            self.set_switch(kd_row(position), !to_elearning);
        }
        self.set_switch(kd_row(5), to_elearning);
        to_elearning
    }

    /// Type text into the entry of `code`. Empty text reverts to the default.
    pub fn set_entry(&mut self, code: SkillCode, text: impl Into<String>) {
        let text = text.into();
        self.entries[code.index()] = (!text.is_empty()).then_some(text);
    }

    /// Text currently shown for `code`: typed text, else the default.
    #[must_use]
    pub fn shown_entry(&self, code: SkillCode) -> String {
        match &self.entries[code.index()] {
            Some(text) => text.clone(),
            None if self.switch(code.slot()) => code.to_string(),
            None => SKIP_SENTINEL.to_string(),
        }
    }

    pub fn set_flex(&mut self, index: usize, text: impl Into<String>) {
        if let Some(entry) = self.flex.get_mut(index) {
            let text = text.into();
            *entry = (!text.is_empty()).then_some(text);
        }
    }

    pub fn set_quiz(&mut self, index: usize, text: impl Into<String>) {
        if let Some(entry) = self.quiz.get_mut(index) {
            *entry = text.into();
        }
    }

    pub const fn set_course(&mut self, course: CourseOptions) {
        self.course = course;
    }

    /// Turn the editor state into a template.
    pub fn capture(&self) -> Result<Template> {
        let mut calendar = [CalendarEntry::Skip; SkillCode::COUNT];
        for code in SkillCode::all() {
            calendar[code.index()] = match &self.entries[code.index()] {
                None if self.switch(code.slot()) => CalendarEntry::Reference(code),
                None => CalendarEntry::Skip,
                Some(text) => parse_entry(code, text)?,
            };
        }

        let flex = std::array::from_fn(|index| {
            let on = flex_slot(index).is_some_and(|id| self.switch(id));
            match &self.flex[index] {
                Some(text) if text == SKIP_SENTINEL => FlexEntry::Skip,
                Some(text) => FlexEntry::Literal(text.clone()),
                None if on => FlexEntry::Literal(String::new()),
                None => FlexEntry::Skip,
            }
        });

        Ok(Template {
            calendar,
            switches: self.switches,
            quiz: self.quiz.clone(),
            flex,
            course: self.course,
        })
    }
}

/// Parse typed entry text: `--`, a skill code, or a date.
fn parse_entry(code: SkillCode, text: &str) -> Result<CalendarEntry> {
    let text = text.trim();
    if text == SKIP_SENTINEL {
        return Ok(CalendarEntry::Skip);
    }
    if let Ok(value) = text.parse::<u8>() {
        return SkillCode::new(value).map(CalendarEntry::Reference).ok_or_else(|| {
            IaError::Validation(format!(
                "entry {code} references unknown skill code {value}"
            ))
        });
    }
    ["%Y-%m-%d", "%d/%m/%Y"]
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(text, format).ok())
        .map(CalendarEntry::Literal)
        .ok_or_else(|| {
            IaError::Validation(format!(
                "entry {code} is '{text}'; expected a skill code, '{SKIP_SENTINEL}' or a date"
            ))
        })
}
