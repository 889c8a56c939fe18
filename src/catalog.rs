//! Fixed skill catalog of the Record and Referral form.
//!
//! The form has 38 rows split over three categories. Every row is a slot
//! with an enabled switch. The 28 date-bearing rows are additionally
//! addressed by a [`SkillCode`] in `0..=27`, the numbering templates use
//! for references. The ten open water flex skills are free text and have
//! no code.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Skill category, in form order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Category {
    /// Confined water dives and pool skills.
    Cw,
    /// Knowledge development sections.
    Kd,
    /// Open water dives and flex skills.
    Ow,
}

impl Category {
    pub const ALL: [Self; 3] = [Self::Cw, Self::Kd, Self::Ow];

    /// Number of slots in this category.
    #[must_use]
    pub const fn len(self) -> usize {
        match self {
            Self::Cw => 15,
            Self::Kd => 7,
            Self::Ow => 16,
        }
    }

    /// Offset of this category's first slot in the flat slot order.
    #[must_use]
    pub const fn offset(self) -> usize {
        match self {
            Self::Cw => 0,
            Self::Kd => 15,
            Self::Ow => 22,
        }
    }

    /// Slot ids of this category in form order.
    pub fn slots(self) -> impl Iterator<Item = SlotId> {
        (0..self.len()).map(move |position| SlotId {
            category: self,
            position,
        })
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Cw => "Confined Water",
            Self::Kd => "Knowledge Development",
            Self::Ow => "Open Water",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let short = match self {
            Self::Cw => "CW",
            Self::Kd => "KD",
            Self::Ow => "OW",
        };
        f.write_str(short)
    }
}

/// What a slot holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkillKind {
    /// A completion date written as day/month/year.
    Date,
    /// Free text (open water flex skills).
    FreeText,
    /// Category sign-off date, written only when the category is complete.
    Aggregate,
}

impl SkillKind {
    /// Whether slots of this kind carry a date value.
    #[must_use]
    pub const fn is_dated(self) -> bool {
        matches!(self, Self::Date | Self::Aggregate)
    }
}

/// Position of a slot within the ledger. Always in range for its category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "RawSlotId")]
pub struct SlotId {
    category: Category,
    position: usize,
}

#[derive(Deserialize)]
struct RawSlotId {
    category: Category,
    position: usize,
}

impl TryFrom<RawSlotId> for SlotId {
    type Error = String;

    fn try_from(raw: RawSlotId) -> Result<Self, Self::Error> {
        Self::new(raw.category, raw.position)
            .ok_or_else(|| format!("{} has no position {}", raw.category, raw.position))
    }
}

impl SlotId {
    /// Build a slot id, returning `None` when the position is out of range.
    #[must_use]
    pub const fn new(category: Category, position: usize) -> Option<Self> {
        if position < category.len() {
            Some(Self { category, position })
        } else {
            None
        }
    }

    #[must_use]
    pub const fn category(self) -> Category {
        self.category
    }

    #[must_use]
    pub const fn position(self) -> usize {
        self.position
    }

    /// Index of this slot in the flat 0..38 order (CW, KD, OW).
    #[must_use]
    pub const fn flat_index(self) -> usize {
        self.category.offset() + self.position
    }

    /// Inverse of [`SlotId::flat_index`].
    #[must_use]
    pub fn from_flat_index(index: usize) -> Option<Self> {
        Category::ALL.into_iter().find_map(|category| {
            let offset = category.offset();
            (index >= offset && index < offset + category.len()).then_some(Self {
                category,
                position: index - offset,
            })
        })
    }

    #[must_use]
    pub fn def(self) -> &'static SkillDef {
        &CATALOG[self.flat_index()]
    }

    #[must_use]
    pub fn kind(self) -> SkillKind {
        self.def().kind
    }
}

impl fmt::Display for SlotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[{}]", self.category, self.position)
    }
}

impl FromStr for SlotId {
    type Err = String;

    /// Accepts `CW3`, `cw[3]` and similar.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let text = s.trim();
        let split = text
            .find(|c: char| c.is_ascii_digit() || c == '[')
            .ok_or_else(|| format!("slot '{s}' has no position"))?;
        let (prefix, rest) = text.split_at(split);
        let category = match prefix.to_ascii_uppercase().as_str() {
            "CW" => Category::Cw,
            "KD" => Category::Kd,
            "OW" => Category::Ow,
            _ => return Err(format!("unknown category '{prefix}'")),
        };
        let digits = rest.trim_start_matches('[').trim_end_matches(']');
        let position: usize = digits
            .parse()
            .map_err(|_| format!("slot '{s}' has an invalid position"))?;
        Self::new(category, position)
            .ok_or_else(|| format!("{category} has no position {position}"))
    }
}

/// Numeric code of a date-bearing row, `0..=27`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SkillCode(u8);

impl SkillCode {
    /// Number of skill codes.
    pub const COUNT: usize = 28;

    /// Codes denoting a whole-category sign-off.
    pub const AGGREGATES: [Self; 4] = [Self(14), Self(21), Self(26), Self(27)];

    #[must_use]
    pub fn new(value: u8) -> Option<Self> {
        (usize::from(value) < Self::COUNT).then_some(Self(value))
    }

    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The slot this code addresses.
    #[must_use]
    pub fn slot(self) -> SlotId {
        match self.0 {
            0..=14 => SlotId {
                category: Category::Cw,
                position: self.index(),
            },
            15..=21 => SlotId {
                category: Category::Kd,
                position: self.index() - 15,
            },
            22..=25 => SlotId {
                category: Category::Ow,
                position: self.index() - 22,
            },
            // 26, 27: the two OW sign-off rows after the ten flex skills
            _ => SlotId {
                category: Category::Ow,
                position: self.index() - 12,
            },
        }
    }

    #[must_use]
    pub fn is_aggregate(self) -> bool {
        Self::AGGREGATES.contains(&self)
    }

    /// All codes in ascending order.
    pub fn all() -> impl Iterator<Item = Self> {
        (0..Self::COUNT as u8).map(Self)
    }
}

impl fmt::Display for SkillCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Static definition of one form row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkillDef {
    pub slot: SlotId,
    pub kind: SkillKind,
    pub code: Option<SkillCode>,
    /// Short name used in logs and template listings.
    pub name: &'static str,
}

const fn def(
    category: Category,
    position: usize,
    kind: SkillKind,
    code: Option<u8>,
    name: &'static str,
) -> SkillDef {
    SkillDef {
        slot: SlotId { category, position },
        kind,
        code: match code {
            Some(value) => Some(SkillCode(value)),
            None => None,
        },
        name,
    }
}

use Category::{Cw, Kd, Ow};
use SkillKind::{Aggregate, Date, FreeText};

/// Every row of the form, in flat slot order.
pub static CATALOG: [SkillDef; 38] = [
    def(Cw, 0, Date, Some(0), "Confined Water 1"),
    def(Cw, 1, Date, Some(1), "Confined Water 2"),
    def(Cw, 2, Date, Some(2), "Confined Water 3"),
    def(Cw, 3, Date, Some(3), "Confined Water 4"),
    def(Cw, 4, Date, Some(4), "Confined Water 5"),
    def(Cw, 5, Date, Some(5), "200M Swim"),
    def(Cw, 6, Date, Some(6), "10min Float"),
    def(Cw, 7, Date, Some(7), "Equipment Prep"),
    def(Cw, 8, Date, Some(8), "Disconnect LP Hose"),
    def(Cw, 9, Date, Some(9), "Loose Cylinder Band"),
    def(Cw, 10, Date, Some(10), "Weight System Remove & Replace"),
    def(Cw, 11, Date, Some(11), "Emergency Weight Drop"),
    def(Cw, 12, Date, Some(12), "Skin Diver"),
    def(Cw, 13, Date, Some(13), "Drysuit Orientation"),
    def(Cw, 14, Aggregate, Some(14), "All Confined Water Skills"),
    def(Kd, 0, Date, Some(15), "Section 1"),
    def(Kd, 1, Date, Some(16), "Section 2"),
    def(Kd, 2, Date, Some(17), "Section 3"),
    def(Kd, 3, Date, Some(18), "Section 4"),
    def(Kd, 4, Date, Some(19), "Section 5"),
    def(Kd, 5, Date, Some(20), "eLearning Quick Review"),
    def(Kd, 6, Aggregate, Some(21), "All Knowledge Development"),
    def(Ow, 0, Date, Some(22), "Open Water 1"),
    def(Ow, 1, Date, Some(23), "Open Water 2"),
    def(Ow, 2, Date, Some(24), "Open Water 3"),
    def(Ow, 3, Date, Some(25), "Open Water 4"),
    def(Ow, 4, FreeText, None, "Cramp Removal"),
    def(Ow, 5, FreeText, None, "Snorkel/Regulator Exchange"),
    def(Ow, 6, FreeText, None, "Inflatable Signal Tube"),
    def(Ow, 7, FreeText, None, "Emergency Weight Drop"),
    def(Ow, 8, FreeText, None, "Surface Swim with Compass"),
    def(Ow, 9, FreeText, None, "Tired Diver Tow"),
    def(Ow, 10, FreeText, None, "Remove/Replace Scuba"),
    def(Ow, 11, FreeText, None, "Remove/Replace Weight"),
    def(Ow, 12, FreeText, None, "CESA"),
    def(Ow, 13, FreeText, None, "UW Compass Navigation"),
    def(Ow, 14, Aggregate, Some(26), "All Open Water Dive Flex Skills"),
    def(Ow, 15, Aggregate, Some(27), "All Certification Requirements"),
];

/// Total number of slots.
pub const SLOT_COUNT: usize = 38;

/// Number of free-text flex skills.
pub const FLEX_COUNT: usize = 10;

/// Number of KD rows carrying a quiz entry and review/video checkboxes.
pub const QUIZ_COUNT: usize = 6;

/// First OW position of a flex skill.
pub const FLEX_OFFSET: usize = 4;

/// Ordered definitions of one category.
#[must_use]
pub fn category_defs(category: Category) -> &'static [SkillDef] {
    let start = category.offset();
    &CATALOG[start..start + category.len()]
}

/// Slot id of the n-th flex skill (`0..FLEX_COUNT`).
#[must_use]
pub fn flex_slot(index: usize) -> Option<SlotId> {
    (index < FLEX_COUNT).then_some(SlotId {
        category: Category::Ow,
        position: FLEX_OFFSET + index,
    })
}

/// Slots that must all be enabled for an aggregate to be signed off.
///
/// Knowledge development is complete through either the five classroom
/// sections or the eLearning quick review, so its aggregate is checked by
/// [`kd_complete`] instead of a plain constituent list.
#[must_use]
pub fn aggregate_constituents(code: SkillCode) -> Vec<SlotId> {
    match code.value() {
        14 => Category::Cw.slots().take(14).collect(),
        21 => Category::Kd.slots().take(6).collect(),
        26 => (0..FLEX_COUNT).filter_map(flex_slot).collect(),
        27 => Category::Ow.slots().take(14).collect(),
        _ => Vec::new(),
    }
}

/// Knowledge development row `position`, for positions known to be below 7.
pub(crate) const fn kd_row(position: usize) -> SlotId {
    debug_assert!(position < Category::Kd.len());
    SlotId {
        category: Category::Kd,
        position,
    }
}

/// KD completion: sections 1-5 all enabled, or the eLearning row enabled.
pub fn kd_complete(enabled: impl Fn(SlotId) -> bool) -> bool {
    let classroom = Category::Kd.slots().take(5).all(&enabled);
    classroom || enabled(kd_row(5))
}
