use chrono::NaiveDate;
use proptest::prelude::*;

use ia::catalog::{SLOT_COUNT, SkillCode, SlotId};
use ia::ledger::{CourseOptions, SkillLedger};
use ia::templates::{CalendarEntry, FlexEntry, Template, TemplateRecord};
use ia::test_utils::test_today;

fn arb_date() -> impl Strategy<Value = NaiveDate> {
    (2015i32..2030, 1u32..=12, 1u32..=28)
        .prop_map(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d).unwrap())
}

fn arb_fixed_entry() -> impl Strategy<Value = CalendarEntry> {
    prop_oneof![
        Just(CalendarEntry::Skip),
        arb_date().prop_map(CalendarEntry::Literal),
    ]
}

fn template(calendar: Vec<CalendarEntry>, switches: Vec<bool>) -> Template {
    Template {
        calendar: calendar.try_into().unwrap(),
        switches: switches.try_into().unwrap(),
        quiz: Default::default(),
        flex: std::array::from_fn(|_| FlexEntry::Skip),
        course: CourseOptions::default(),
    }
}

proptest! {
    #[test]
    fn literals_and_skips_replay_exactly(
        calendar in prop::collection::vec(arb_fixed_entry(), SkillCode::COUNT),
        switches in prop::collection::vec(any::<bool>(), SLOT_COUNT),
    ) {
        let template = template(calendar, switches);
        let mut ledger = SkillLedger::new(test_today());
        template.apply_to(&mut ledger).unwrap();

        for (code, entry) in SkillCode::all().zip(template.calendar) {
            let expected = match entry {
                CalendarEntry::Literal(date) => date,
                _ => test_today(),
            };
            prop_assert_eq!(ledger.date(code), Some(expected), "code {}", code);
        }
        for (index, on) in template.switches.iter().enumerate() {
            let id = SlotId::from_flat_index(index).unwrap();
            prop_assert_eq!(ledger.is_enabled(id), *on, "slot {}", id);
        }
    }

    #[test]
    fn stored_records_survive_validation(
        calendar in prop::collection::vec(arb_fixed_entry(), SkillCode::COUNT),
        switches in prop::collection::vec(any::<bool>(), SLOT_COUNT),
    ) {
        let template = template(calendar, switches);
        let record = TemplateRecord::from(&template);
        let parsed = Template::try_from(record).unwrap();
        prop_assert_eq!(parsed, template);
    }

    #[test]
    fn out_of_range_switch_values_are_rejected(index in 0..SLOT_COUNT, value in 2u8..) {
        let mut record = TemplateRecord::from(&template(
            vec![CalendarEntry::Skip; SkillCode::COUNT],
            vec![true; SLOT_COUNT],
        ));
        record.switches[index] = value;
        let err = Template::try_from(record).unwrap_err();
        prop_assert!(err.contains("switches"), "{}", err);
    }
}
