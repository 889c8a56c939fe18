//! Mapping from skill slots and auxiliary controls to form field ids.
//!
//! [`FieldMapper`] is total over the catalog and its image is pairwise
//! disjoint: no two slots or controls ever target the same field id.

mod mapper;
mod schema;

use serde::Serialize;

use crate::catalog::{QUIZ_COUNT, SkillCode, SlotId};

pub use schema::FormSchema;

/// Identifier of a field in the target form.
pub type FieldId = &'static str;

/// Day/month/year field triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DateFields {
    pub day: FieldId,
    pub month: FieldId,
    pub year: FieldId,
}

impl DateFields {
    #[must_use]
    pub const fn ids(&self) -> [FieldId; 3] {
        [self.day, self.month, self.year]
    }
}

/// Where a slot's value goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueFields {
    Date(DateFields),
    Text(FieldId),
}

/// Every field belonging to one slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SlotFields {
    pub value: ValueFields,
    /// Instructor initials. Sign-off rows have none.
    pub initials: Option<FieldId>,
    /// Instructor certification number.
    pub cert: FieldId,
}

impl SlotFields {
    /// All field ids of the slot, value first.
    #[must_use]
    pub fn ids(&self) -> Vec<FieldId> {
        let mut ids = match self.value {
            ValueFields::Date(date) => date.ids().to_vec(),
            ValueFields::Text(field) => vec![field],
        };
        ids.extend(self.initials);
        ids.push(self.cert);
        ids
    }
}

/// Student bio block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StudentFields {
    pub name: FieldId,
    pub birth_date: DateFields,
    pub sex_male: FieldId,
    pub sex_female: FieldId,
    pub street: FieldId,
    pub city: FieldId,
    pub province: FieldId,
    pub country: FieldId,
    pub postal: FieldId,
    pub phone: FieldId,
    pub email: FieldId,
}

/// One instructor header block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HeaderFields {
    pub instructor: FieldId,
    pub cert: FieldId,
    pub center: FieldId,
    pub date: DateFields,
    pub phone: FieldId,
    pub email: FieldId,
}

/// Controls that are not skill slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AuxControl {
    StudentBio,
    /// Quiz score box of KD row `0..QUIZ_COUNT`.
    Quiz(usize),
    /// Knowledge review checkbox of KD row `0..QUIZ_COUNT`.
    KnowledgeReview(usize),
    /// Video checkbox of KD row `0..QUIZ_COUNT`.
    Video(usize),
    /// Course option checkbox `0..3` (RDP table, eRDPml, computer).
    CourseOption(usize),
    /// Instructor header block `0..2`.
    InstructorHeader(usize),
}

impl AuxControl {
    /// Every auxiliary control.
    #[must_use]
    pub fn all() -> Vec<Self> {
        let mut controls = vec![Self::StudentBio];
        controls.extend((0..QUIZ_COUNT).map(Self::Quiz));
        controls.extend((0..QUIZ_COUNT).map(Self::KnowledgeReview));
        controls.extend((0..QUIZ_COUNT).map(Self::Video));
        controls.extend((0..3).map(Self::CourseOption));
        controls.extend((0..2).map(Self::InstructorHeader));
        controls
    }
}

/// Lookup from catalog slots and auxiliary controls to form fields.
#[derive(Debug, Clone, Copy, Default)]
pub struct FieldMapper;

impl FieldMapper {
    /// Fields of a slot.
    #[must_use]
    pub fn slot(self, slot: SlotId) -> &'static SlotFields {
        &mapper::SLOT_FIELDS[slot.flat_index()]
    }

    /// Fields of a skill code: the day/month/year triple for date codes,
    /// the category sign-off group for aggregate codes.
    #[must_use]
    pub fn fields_for(self, code: SkillCode) -> &'static SlotFields {
        self.slot(code.slot())
    }

    #[must_use]
    pub const fn student(self) -> &'static StudentFields {
        &mapper::STUDENT_FIELDS
    }

    /// Instructor header block `index` (0 or 1).
    #[must_use]
    pub fn header(self, index: usize) -> Option<&'static HeaderFields> {
        mapper::HEADER_FIELDS.get(index)
    }

    #[must_use]
    pub fn quiz(self, index: usize) -> Option<FieldId> {
        mapper::QUIZ_FIELDS.get(index).copied()
    }

    #[must_use]
    pub fn knowledge_review(self, index: usize) -> Option<FieldId> {
        mapper::REVIEW_FIELDS.get(index).copied()
    }

    #[must_use]
    pub fn video(self, index: usize) -> Option<FieldId> {
        mapper::VIDEO_FIELDS.get(index).copied()
    }

    #[must_use]
    pub fn course_option(self, index: usize) -> Option<FieldId> {
        mapper::COURSE_OPTION_FIELDS.get(index).copied()
    }

    /// Field ids of an auxiliary control. Empty for out-of-range indices.
    #[must_use]
    pub fn aux(self, control: AuxControl) -> Vec<FieldId> {
        match control {
            AuxControl::StudentBio => {
                let s = self.student();
                let mut ids = vec![s.name];
                ids.extend(s.birth_date.ids());
                ids.extend([
                    s.sex_male, s.sex_female, s.street, s.city, s.province, s.country, s.postal,
                    s.phone, s.email,
                ]);
                ids
            }
            AuxControl::Quiz(i) => self.quiz(i).into_iter().collect(),
            AuxControl::KnowledgeReview(i) => self.knowledge_review(i).into_iter().collect(),
            AuxControl::Video(i) => self.video(i).into_iter().collect(),
            AuxControl::CourseOption(i) => self.course_option(i).into_iter().collect(),
            AuxControl::InstructorHeader(i) => self
                .header(i)
                .map(|h| {
                    let mut ids = vec![h.instructor, h.cert, h.center];
                    ids.extend(h.date.ids());
                    ids.extend([h.phone, h.email]);
                    ids
                })
                .unwrap_or_default(),
        }
    }

    /// Every field id the mapper can write.
    #[must_use]
    pub fn all_field_ids(self) -> Vec<FieldId> {
        let mut ids: Vec<FieldId> = mapper::SLOT_FIELDS.iter().flat_map(SlotFields::ids).collect();
        for control in AuxControl::all() {
            ids.extend(self.aux(control));
        }
        ids
    }
}
