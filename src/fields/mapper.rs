//! Static field tables of the Record and Referral form.
//!
//! Field names are the form's own, including its auto-generated
//! `undefined_N` ids. They must not be renamed.

use super::{DateFields, FieldId, HeaderFields, SlotFields, StudentFields, ValueFields};
use crate::catalog::{QUIZ_COUNT, SLOT_COUNT};

const fn date(day: FieldId, month: FieldId, year: FieldId) -> ValueFields {
    ValueFields::Date(DateFields { day, month, year })
}

const fn text(field: FieldId) -> ValueFields {
    ValueFields::Text(field)
}

const fn slot(value: ValueFields, initials: Option<FieldId>, cert: FieldId) -> SlotFields {
    SlotFields {
        value,
        initials,
        cert,
    }
}

/// Per-slot fields, indexed by flat slot index.
pub(super) static SLOT_FIELDS: [SlotFields; SLOT_COUNT] = [
    // Confined water
    slot(date("CW 1", "undefined_27", "undefined_28"), Some("Initials 1"), "undefined_29"),
    slot(date("CW 2", "undefined_21", "undefined_22"), Some("Initials 2"), "undefined_35"),
    slot(date("CW 3", "undefined_23", "undefined_24"), Some("Initials 3"), "undefined_41"),
    slot(date("CW 4", "undefined_25", "undefined_26"), Some("Initials 4"), "undefined_47"),
    slot(
        date("CW 5", "undefined_53", "undefined_54"),
        Some("DSD with all CW Dive 1 skills  Open Water Diver CW Dive 1"),
        "undefined_55",
    ),
    slot(
        date("10 Minute Survival Float", "undefined_66", "undefined_67"),
        Some("200 metreyard Swim OR 300 metreyard MaskSnorkelFin Swim"),
        "undefined_68",
    ),
    slot(date("undefined_75", "undefined_76", "undefined_72"), Some("undefined_73"), "undefined_74"),
    slot(
        date("Equipment Preparation and Care", "undefined_91", "undefined_92"),
        Some("undefined_77"),
        "undefined_78",
    ),
    slot(
        date("Disconnect Low Pressure Inflator Hose", "undefined_95", "undefined_96"),
        Some("undefined_93"),
        "undefined_94",
    ),
    slot(
        date("Loose Cylinder Band", "undefined_100", "undefined_97"),
        Some("undefined_98"),
        "undefined_99",
    ),
    slot(
        date("Weight System Removal and Replacement surface", "undefined_102", "undefined_103"),
        Some("undefined_104"),
        "undefined_101",
    ),
    slot(
        date("Emergency Weight Drop or in OW", "undefined_107", "undefined_108"),
        Some("undefined_105"),
        "undefined_106",
    ),
    slot(
        date("Skin Diving Skills", "undefined_122", "undefined_118"),
        Some("undefined_119"),
        "undefined_120",
    ),
    slot(
        date(
            "Note If all Confined Water Dives Confined Water Dive Flexible Skills and Wa",
            "undefined_129",
            "undefined_123",
        ),
        Some("undefined_124"),
        "undefined_125",
    ),
    slot(date("Date_6", "undefined_132", "undefined_133"), None, "PADI"),
    // Knowledge development
    slot(date("Section 1", "undefined_30", "undefined_31"), Some("undefined_33"), "undefined_34"),
    slot(date("Section 2", "undefined_36", "undefined_37"), Some("undefined_39"), "undefined_40"),
    slot(date("Section 3", "undefined_42", "undefined_43"), Some("undefined_45"), "undefined_46"),
    slot(date("Section 4", "undefined_48", "undefined_49"), Some("undefined_51"), "undefined_52"),
    slot(date("Section 5", "undefined_56", "undefined_57"), Some("undefined_59"), "undefined_60"),
    slot(date("Quick Review", "undefined_61", "undefined_62"), Some("undefined_64"), "undefined_65"),
    slot(date("Date_3", "undefined_70", "undefined_71"), None, "undefined_69"),
    // Open water dives
    slot(date("Dive 1", "undefined_84", "undefined_85"), Some("Initials 1_2"), "undefined_86"),
    slot(date("Dive 2", "undefined_79", "undefined_80"), Some("Initials 2_2"), "undefined_81"),
    slot(date("Dive 3", "undefined_87", "undefined_88"), Some("Initials 1_3"), "undefined_89"),
    slot(date("Dive 4", "undefined_82", "undefined_83"), Some("Initials 2_3"), "undefined_90"),
    // Open water flex skills
    slot(text("Dive_9"), Some("Instructor Initials 1"), "undefined_109"),
    slot(text("Dive"), Some("Instructor Initials 2"), "undefined_110"),
    slot(text("Dive_2"), Some("Instructor Initials 3"), "undefined_111"),
    slot(text("Dive_3"), Some("Instructor Initials 4"), "undefined_112"),
    slot(text("Dive_4"), Some("Instructor Initials 5"), "undefined_113"),
    slot(text("Dive_5"), Some("Instructor Initials 6"), "undefined_114"),
    slot(text("Dive_6"), Some("Instructor Initials 7"), "undefined_115"),
    slot(text("Dive_7"), Some("Instructor Initials 8"), "undefined_116"),
    slot(text("Dive_8"), Some("Instructor Initials 9"), "undefined_117"),
    slot(text("Dive_10"), Some("Instructor Initials 10"), "undefined_121"),
    // Open water sign-offs
    slot(date("Date_4", "undefined_127", "undefined_128"), None, "undefined_126"),
    slot(date("Date_8", "undefined_138", "undefined_139"), None, "undefined_137"),
];

pub(super) const STUDENT_FIELDS: StudentFields = StudentFields {
    name: "Student Name",
    birth_date: DateFields {
        day: "Birth Date",
        month: "undefined",
        year: "undefined_2",
    },
    sex_male: "Check Box20",
    sex_female: "Check Box21",
    street: "Mailing address 1",
    city: "Mailing address 2",
    province: "Mailing address 3",
    country: "Mailing address 4",
    postal: "Mailing address 5",
    phone: "undefined_4",
    email: "Email",
};

pub(super) const HEADER_FIELDS: [HeaderFields; 2] = [
    HeaderFields {
        instructor: "PADI Instructor",
        cert: "PADI No",
        center: "Dive CenterResort No",
        date: DateFields {
            day: "Date",
            month: "undefined_9",
            year: "undefined_10",
        },
        phone: "undefined_12",
        email: "Email_2",
    },
    HeaderFields {
        instructor: "PADI Instructor_2",
        cert: "PADI No_2",
        center: "Dive CenterResort No_2",
        date: DateFields {
            day: "Date_2",
            month: "undefined_15",
            year: "undefined_16",
        },
        phone: "undefined_18",
        email: "Email_3",
    },
];

/// Quiz score text boxes for KD rows 0..=5.
pub(super) const QUIZ_FIELDS: [FieldId; QUIZ_COUNT] = [
    "undefined_32",
    "undefined_38",
    "undefined_44",
    "undefined_50",
    "undefined_58",
    "undefined_63",
];

/// Knowledge review checkboxes for KD rows 0..=5.
pub(super) const REVIEW_FIELDS: [FieldId; QUIZ_COUNT] = [
    "Check Box25",
    "Check Box27",
    "Check Box29",
    "Check Box31",
    "Check Box33",
    "Check Box35",
];

/// Video checkboxes for KD rows 0..=5.
pub(super) const VIDEO_FIELDS: [FieldId; QUIZ_COUNT] = [
    "Check Box26",
    "Check Box28",
    "Check Box30",
    "Check Box32",
    "Check Box34",
    "Check Box36",
];

/// RDP table, eRDPml, dive computer.
pub(super) const COURSE_OPTION_FIELDS: [FieldId; 3] = ["Check Box24", "Check Box23", "Check Box22"];
