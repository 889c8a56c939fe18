use std::collections::HashSet;

use chrono::NaiveDate;

use ia::catalog::{Category, SkillCode, flex_slot};
use ia::fields::{AuxControl, FieldMapper, FormSchema, ValueFields};
use ia::form::{CHECKED, FieldValue, FormAssembler, UNCHECKED};
use ia::ledger::{SkillLedger, SkillValue};
use ia::student::{Sex, Student};
use ia::test_utils::test_today;

fn assembler() -> FormAssembler {
    FormAssembler::new(FormSchema::from_mapper(FieldMapper))
}

fn student() -> Student {
    Student {
        first_name: "Noa".to_string(),
        last_name: "Kealoha".to_string(),
        date_of_birth: NaiveDate::from_ymd_opt(1999, 7, 4),
        sex: Sex::Female,
        phone: "555-0142".to_string(),
        email: "noa@example.com".to_string(),
        street_address: "8 Lagoon Way".to_string(),
        city: "Hilo".to_string(),
        province: "HI".to_string(),
        postal: "96720".to_string(),
        country: "USA".to_string(),
    }
}

fn student_and_checkbox_fields() -> HashSet<&'static str> {
    let mapper = FieldMapper;
    AuxControl::all()
        .into_iter()
        .filter(|control| {
            matches!(
                control,
                AuxControl::StudentBio
                    | AuxControl::KnowledgeReview(_)
                    | AuxControl::Video(_)
                    | AuxControl::CourseOption(_)
            )
        })
        .flat_map(|control| mapper.aux(control))
        .collect()
}

#[test]
fn zero_enabled_slots_differ_from_defaults_only_in_student_and_checkboxes() {
    let assembler = assembler();
    let mut ledger = SkillLedger::new(test_today());
    ledger.toggle_all();
    assert!(ledger.slots().all(|slot| !slot.enabled));

    let student = student();
    let map = assembler.build(&ledger, Some(&student), ledger.checkboxes());
    let defaults = assembler.defaults();
    let allowed = student_and_checkbox_fields();

    assert_eq!(map.len(), defaults.len());
    for (id, value) in map.iter() {
        if defaults.get(id) != Some(value) {
            assert!(allowed.contains(id), "field {id} changed to {value}");
        }
    }
    let name_field = FieldMapper.student().name;
    assert_eq!(map.get(name_field), Some(&FieldValue::from("Noa Kealoha")));
}

#[test]
fn every_enabled_date_slot_is_written() {
    let assembler = assembler();
    let day = NaiveDate::from_ymd_opt(2024, 3, 9).unwrap();
    let ledger = SkillLedger::new(day);
    let map = assembler.build(&ledger, None, ledger.checkboxes());

    for code in SkillCode::all() {
        let fields = assembler.fields_for(code);
        assert_eq!(map.get(fields[0]), Some(&FieldValue::from(9u32)), "code {code}");
        assert_eq!(map.get(fields[1]), Some(&FieldValue::from(3u32)), "code {code}");
        assert_eq!(map.get(fields[2]), Some(&FieldValue::from(2024i32)), "code {code}");
    }
}

#[test]
fn incomplete_category_omits_its_sign_off() {
    let assembler = assembler();
    let mut ledger = SkillLedger::new(test_today());
    ledger.set_enabled(flex_slot(4).unwrap(), false);
    let map = assembler.build(&ledger, None, ledger.checkboxes());
    let defaults = assembler.defaults();

    for value in [26u8, 27] {
        let code = SkillCode::new(value).unwrap();
        for field in assembler.fields_for(code) {
            assert_eq!(map.get(field), defaults.get(field), "aggregate {code} field {field}");
        }
    }
    let cw_sign_off = assembler.fields_for(SkillCode::new(14).unwrap());
    assert_ne!(map.get(cw_sign_off[0]), defaults.get(cw_sign_off[0]));
}

#[test]
fn flex_text_and_checkboxes_are_written() {
    let assembler = assembler();
    let mut ledger = SkillLedger::new(test_today());
    ledger
        .set_value(flex_slot(1).unwrap(), SkillValue::Text("Reg exchange".to_string()))
        .unwrap();
    ledger.toggle_category(Category::Kd);
    ledger.checkboxes_mut().course.rdp_table = true;

    let map = assembler.build(&ledger, None, ledger.checkboxes());
    let ValueFields::Text(flex_field) = FieldMapper.slot(flex_slot(1).unwrap()).value else {
        panic!("flex slots map to a text field");
    };
    assert_eq!(map.get(flex_field), Some(&FieldValue::from("Reg exchange")));

    let mapper = FieldMapper;
    assert_eq!(
        map.get(mapper.knowledge_review(0).unwrap()),
        Some(&FieldValue::from(UNCHECKED))
    );
    assert_eq!(
        map.get(mapper.course_option(0).unwrap()),
        Some(&FieldValue::from(CHECKED))
    );
}
