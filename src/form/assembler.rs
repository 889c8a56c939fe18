use std::collections::BTreeMap;
use std::fmt;

use chrono::{Datelike, NaiveDate};
use serde::Serialize;
use tracing::debug;

use crate::catalog::{SkillKind, SkillCode};
use crate::fields::{DateFields, FieldMapper, FormSchema, ValueFields};
use crate::ledger::{Checkboxes, SkillLedger, SkillSlot, SlotValue};
use crate::student::{Sex, Student};

/// Checkbox value for a ticked box.
pub const CHECKED: &str = "Yes";
/// Checkbox value for a clear box.
pub const UNCHECKED: &str = "Off";

/// A value written into one form field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    Number(i64),
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => f.write_str(text),
            Self::Number(number) => write!(f, "{number}"),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        Self::Number(value)
    }
}

impl From<u32> for FieldValue {
    fn from(value: u32) -> Self {
        Self::Number(i64::from(value))
    }
}

impl From<i32> for FieldValue {
    fn from(value: i32) -> Self {
        Self::Number(i64::from(value))
    }
}

/// Field id to value, ready for the form writer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldMap(BTreeMap<String, FieldValue>);

impl FieldMap {
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&FieldValue> {
        self.0.get(id)
    }

    pub fn set(&mut self, id: &str, value: impl Into<FieldValue>) {
        self.0.insert(id.to_string(), value.into());
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.0.iter().map(|(id, value)| (id.as_str(), value))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Builds the field map for one student from the ledger.
#[derive(Debug, Clone)]
pub struct FormAssembler {
    schema: FormSchema,
    mapper: FieldMapper,
}

impl FormAssembler {
    #[must_use]
    pub const fn new(schema: FormSchema) -> Self {
        Self {
            schema,
            mapper: FieldMapper,
        }
    }

    #[must_use]
    pub const fn schema(&self) -> &FormSchema {
        &self.schema
    }

    /// The schema defaults, untouched.
    #[must_use]
    pub fn defaults(&self) -> FieldMap {
        let mut map = FieldMap::default();
        for (id, value) in self.schema.defaults() {
            map.set(id, value);
        }
        map
    }

    /// Compose the field map.
    ///
    /// Disabled slots keep their schema defaults. Aggregate sign-off rows
    /// are written only when the category is complete. Student, checkbox,
    /// quiz and header fields are always written.
    #[must_use]
    pub fn build(
        &self,
        ledger: &SkillLedger,
        student: Option<&Student>,
        checkboxes: &Checkboxes,
    ) -> FieldMap {
        let mut map = self.defaults();

        let mut written = 0usize;
        for slot in ledger.slots().filter(|slot| slot.enabled) {
            if slot.id.kind() == SkillKind::Aggregate
                && !slot.id.def().code.is_some_and(|code| ledger.aggregate_complete(code))
            {
                continue;
            }
            self.write_slot(&mut map, slot);
            written += 1;
        }

        self.write_checkboxes(&mut map, checkboxes);
        self.write_quiz(&mut map, ledger);
        self.write_headers(&mut map, ledger);
        if let Some(student) = student {
            self.write_student(&mut map, student);
        }

        debug!(slots = written, fields = map.len(), "field map assembled");
        map
    }

    fn write_slot(&self, map: &mut FieldMap, slot: &SkillSlot) {
        let fields = self.mapper.slot(slot.id);
        match (&fields.value, &slot.value) {
            (ValueFields::Date(date_fields), SlotValue::Date(date)) => {
                write_date(map, date_fields, *date);
            }
            (ValueFields::Text(field), SlotValue::Text(entry)) => {
                map.set(field, entry.effective());
            }
            // Slot values are created per kind, so these never disagree.
            _ => {}
        }
        if let Some(attribution) = &slot.attribution {
            if let Some(initials) = fields.initials {
                map.set(initials, attribution.initials.as_str());
            }
            map.set(fields.cert, attribution.cert_number.as_str());
        }
    }

    fn write_checkboxes(&self, map: &mut FieldMap, checkboxes: &Checkboxes) {
        let tick = |on: bool| if on { CHECKED } else { UNCHECKED };
        for (index, on) in checkboxes.knowledge_review.iter().enumerate() {
            if let Some(field) = self.mapper.knowledge_review(index) {
                map.set(field, tick(*on));
            }
        }
        for (index, on) in checkboxes.video.iter().enumerate() {
            if let Some(field) = self.mapper.video(index) {
                map.set(field, tick(*on));
            }
        }
        for (index, on) in checkboxes.course.as_array().into_iter().enumerate() {
            if let Some(field) = self.mapper.course_option(index) {
                map.set(field, tick(on));
            }
        }
    }

    fn write_quiz(&self, map: &mut FieldMap, ledger: &SkillLedger) {
        for index in 0..crate::catalog::QUIZ_COUNT {
            if let (Some(field), Some(entry)) = (self.mapper.quiz(index), ledger.quiz(index)) {
                map.set(field, entry.effective());
            }
        }
    }

    fn write_headers(&self, map: &mut FieldMap, ledger: &SkillLedger) {
        for (index, entry) in ledger.headers().iter() {
            let Some(fields) = self.mapper.header(index) else {
                continue;
            };
            map.set(fields.instructor, entry.instructor.as_str());
            map.set(fields.cert, entry.cert_number.as_str());
            map.set(fields.center, entry.dive_center.as_str());
            write_date(map, &fields.date, entry.date);
            map.set(fields.phone, entry.phone.as_str());
            map.set(fields.email, entry.email.as_str());
        }
    }

    fn write_student(&self, map: &mut FieldMap, student: &Student) {
        let fields = self.mapper.student();
        map.set(fields.name, student.full_name());
        if let Some((day, month, year)) = student.birth_date_parts() {
            map.set(fields.birth_date.day, day);
            map.set(fields.birth_date.month, month);
            map.set(fields.birth_date.year, year);
        }
        match student.sex {
            Sex::Male => {
                map.set(fields.sex_male, CHECKED);
                map.set(fields.sex_female, "No");
            }
            Sex::Female => {
                map.set(fields.sex_male, "No");
                map.set(fields.sex_female, CHECKED);
            }
            Sex::Unspecified => {}
        }
        map.set(fields.street, student.street_address.as_str());
        map.set(fields.city, student.city.as_str());
        map.set(fields.province, student.province.as_str());
        map.set(fields.country, student.country.as_str());
        map.set(fields.postal, student.postal.as_str());
        map.set(fields.phone, student.phone.as_str());
        map.set(fields.email, student.email.as_str());
    }

    /// Field ids written for `code` when its row is enabled.
    #[must_use]
    pub fn fields_for(&self, code: SkillCode) -> Vec<&'static str> {
        self.mapper.fields_for(code).ids()
    }
}

fn write_date(map: &mut FieldMap, fields: &DateFields, date: NaiveDate) {
    map.set(fields.day, date.day());
    map.set(fields.month, date.month());
    map.set(fields.year, date.year());
}
