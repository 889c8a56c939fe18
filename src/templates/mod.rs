//! Named templates that bulk-populate a ledger.
//!
//! A template stores, per skill code, whether to skip the row, copy another
//! row's date, or set a literal date. References are resolved when the
//! template is applied, against whatever the ledger holds at that moment,
//! and in code order, so a reference sees the result of earlier steps of the
//! same apply.

mod draft;
mod store;

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::catalog::{FLEX_COUNT, QUIZ_COUNT, SLOT_COUNT, SkillCode, SlotId, flex_slot};
use crate::error::Result;
use crate::ledger::{CourseOptions, SkillLedger, SkillValue};

pub use draft::TemplateDraft;
pub use store::TemplateStore;

/// Sentinel used by the store for a skipped entry.
pub const SKIP_SENTINEL: &str = "--";

/// What a template does to one dated row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalendarEntry {
    /// Leave the row untouched.
    Skip,
    /// Copy the live date of another row.
    Reference(SkillCode),
    /// Set a fixed date.
    Literal(NaiveDate),
}

impl fmt::Display for CalendarEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Skip => f.write_str(SKIP_SENTINEL),
            Self::Reference(code) => write!(f, "={code}"),
            Self::Literal(date) => write!(f, "{}", date.format("%Y-%m-%d")),
        }
    }
}

/// What a template does to one flex skill.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlexEntry {
    Skip,
    Literal(String),
}

/// A validated template body. The name is the store key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    pub calendar: [CalendarEntry; SkillCode::COUNT],
    pub switches: [bool; SLOT_COUNT],
    pub quiz: [String; QUIZ_COUNT],
    pub flex: [FlexEntry; FLEX_COUNT],
    pub course: CourseOptions,
}

impl Template {
    /// Replay the template onto `ledger`.
    pub fn apply_to(&self, ledger: &mut SkillLedger) -> Result<()> {
        for (code, entry) in SkillCode::all().zip(self.calendar) {
            let date = match entry {
                CalendarEntry::Skip => continue,
                CalendarEntry::Reference(source) => match ledger.date(source) {
                    Some(date) => date,
                    None => continue,
                },
                CalendarEntry::Literal(date) => date,
            };
            ledger.set_value(code.slot(), SkillValue::Date(date))?;
        }

        for (index, on) in self.switches.iter().enumerate() {
            if !on && let Some(id) = SlotId::from_flat_index(index) {
                ledger.set_enabled(id, false);
            }
        }
        ledger.clear_disabled_kd_checks();

        for (index, text) in self.quiz.iter().enumerate() {
            ledger.set_quiz_placeholder(index, text.as_str());
        }
        for (index, entry) in self.flex.iter().enumerate() {
            if let FlexEntry::Literal(text) = entry {
                ledger.set_flex_placeholder(index, text);
            }
        }

        let course = &mut ledger.checkboxes_mut().course;
        course.rdp_table |= self.course.rdp_table;
        course.erdpml |= self.course.erdpml;
        course.computer |= self.course.computer;

        debug!(
            disabled = self.switches.iter().filter(|on| !**on).count(),
            "template applied"
        );
        Ok(())
    }

    /// Slot ids the template disables.
    pub fn disabled_slots(&self) -> impl Iterator<Item = SlotId> + '_ {
        self.switches
            .iter()
            .enumerate()
            .filter(|(_, on)| !**on)
            .filter_map(|(index, _)| SlotId::from_flat_index(index))
    }

    /// Flex slot ids paired with their entries.
    pub fn flex_entries(&self) -> impl Iterator<Item = (SlotId, &FlexEntry)> {
        self.flex
            .iter()
            .enumerate()
            .filter_map(|(index, entry)| flex_slot(index).map(|id| (id, entry)))
    }
}

/// One calendar entry as stored: a code, the skip sentinel, or a date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawCalendarEntry {
    Code(i64),
    Text(String),
}

/// Template as laid out in `dive_template_data.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateRecord {
    pub calendar_entries: Vec<RawCalendarEntry>,
    pub switches: Vec<u8>,
    pub knowledge_quiz: Vec<String>,
    pub dive_flex: Vec<String>,
    pub course_option: Vec<u8>,
}

fn fixed<T, const N: usize>(values: Vec<T>, field: &str) -> std::result::Result<[T; N], String> {
    let len = values.len();
    values
        .try_into()
        .map_err(|_| format!("{field} has {len} entries, expected {N}"))
}

fn flag(value: u8, field: &str, index: usize) -> std::result::Result<bool, String> {
    match value {
        0 => Ok(false),
        1 => Ok(true),
        other => Err(format!("{field}[{index}] is {other}, expected 0 or 1")),
    }
}

fn calendar_entry(raw: &RawCalendarEntry, index: usize) -> std::result::Result<CalendarEntry, String> {
    match raw {
        RawCalendarEntry::Code(code) => u8::try_from(*code)
            .ok()
            .and_then(SkillCode::new)
            .map(CalendarEntry::Reference)
            .ok_or_else(|| format!("calendar_entries[{index}] references unknown code {code}")),
        RawCalendarEntry::Text(text) if text == SKIP_SENTINEL => Ok(CalendarEntry::Skip),
        RawCalendarEntry::Text(text) => NaiveDate::parse_from_str(text, "%Y-%m-%d")
            .map(CalendarEntry::Literal)
            .map_err(|_| format!("calendar_entries[{index}] is '{text}', expected a code, '--' or YYYY-MM-DD")),
    }
}

impl TryFrom<TemplateRecord> for Template {
    type Error = String;

    fn try_from(record: TemplateRecord) -> std::result::Result<Self, Self::Error> {
        let calendar = record
            .calendar_entries
            .iter()
            .enumerate()
            .map(|(index, raw)| calendar_entry(raw, index))
            .collect::<std::result::Result<Vec<_>, _>>()?;
        let switches = record
            .switches
            .iter()
            .enumerate()
            .map(|(index, value)| flag(*value, "switches", index))
            .collect::<std::result::Result<Vec<_>, _>>()?;
        let course = record
            .course_option
            .iter()
            .enumerate()
            .map(|(index, value)| flag(*value, "course_option", index))
            .collect::<std::result::Result<Vec<_>, _>>()?;
        let flex = record
            .dive_flex
            .into_iter()
            .map(|text| {
                if text == SKIP_SENTINEL {
                    FlexEntry::Skip
                } else {
                    FlexEntry::Literal(text)
                }
            })
            .collect();

        Ok(Self {
            calendar: fixed(calendar, "calendar_entries")?,
            switches: fixed(switches, "switches")?,
            quiz: fixed(record.knowledge_quiz, "knowledge_quiz")?,
            flex: fixed(flex, "dive_flex")?,
            course: CourseOptions::from_array(fixed(course, "course_option")?),
        })
    }
}

impl From<&Template> for TemplateRecord {
    fn from(template: &Template) -> Self {
        Self {
            calendar_entries: template
                .calendar
                .iter()
                .map(|entry| match entry {
                    CalendarEntry::Skip => RawCalendarEntry::Text(SKIP_SENTINEL.to_string()),
                    CalendarEntry::Reference(code) => RawCalendarEntry::Code(i64::from(code.value())),
                    CalendarEntry::Literal(date) => {
                        RawCalendarEntry::Text(date.format("%Y-%m-%d").to_string())
                    }
                })
                .collect(),
            switches: template.switches.iter().map(|on| u8::from(*on)).collect(),
            knowledge_quiz: template.quiz.to_vec(),
            dive_flex: template
                .flex
                .iter()
                .map(|entry| match entry {
                    FlexEntry::Skip => SKIP_SENTINEL.to_string(),
                    FlexEntry::Literal(text) => text.clone(),
                })
                .collect(),
            course_option: template
                .course
                .as_array()
                .iter()
                .map(|on| u8::from(*on))
                .collect(),
        }
    }
}
