use chrono::NaiveDate;

use ia::catalog::{Category, SkillCode, SlotId};
use ia::ledger::{CategoryState, SkillLedger, SkillValue};
use ia::templates::{TemplateDraft, TemplateStore};
use ia::test_utils::{TestLogger, test_today};
use tempfile::TempDir;

fn code(value: u8) -> SkillCode {
    SkillCode::new(value).unwrap()
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn store(temp: &TempDir) -> TemplateStore {
    TemplateStore::open(temp.path().join("dive_template_data.json")).unwrap()
}

#[test]
fn weekday_course_replays_onto_reset_ledger() {
    let mut log = TestLogger::new("weekday_course_replays_onto_reset_ledger");
    let temp = TempDir::new().unwrap();
    let mut templates = store(&temp);

    log.step("save Weekday Course: [Reference(0), Skip, 2024-05-01, ...], CW[1] off");
    let mut draft = TemplateDraft::new();
    draft.set_entry(code(1), "--");
    draft.set_entry(code(2), "2024-05-01");
    draft.set_switch(SlotId::new(Category::Cw, 1).unwrap(), false);
    templates.save("Weekday Course", &draft).unwrap();

    log.step("reset a ledger and apply");
    let today = test_today();
    let mut ledger = SkillLedger::new(date(2020, 1, 1));
    ledger.reset(today);
    store(&temp).apply("Weekday Course", &mut ledger).unwrap();

    assert_eq!(ledger.date(code(0)), Some(today));
    assert_eq!(ledger.date(code(1)), Some(today), "skipped row keeps its reset date");
    assert_eq!(ledger.date(code(2)), Some(date(2024, 5, 1)));
    assert!(!ledger.is_enabled(code(1).slot()));
    assert!(ledger.is_enabled(code(2).slot()));
    log.pass();
}

#[test]
fn category_switched_off_by_template_toggles_back_on() {
    let temp = TempDir::new().unwrap();
    let mut templates = store(&temp);
    let mut draft = TemplateDraft::new();
    draft.toggle_category(Category::Ow);
    templates.save("Pool only", &draft).unwrap();

    let mut ledger = SkillLedger::new(test_today());
    templates.apply("Pool only", &mut ledger).unwrap();
    assert!(ledger.category_slots(Category::Ow).all(|slot| !slot.enabled));

    assert_eq!(ledger.toggle_category(Category::Ow), CategoryState::AllEnabled);
    assert!(ledger.category_slots(Category::Ow).all(|slot| slot.enabled));
}

#[test]
fn apply_never_reenables_a_disabled_slot() {
    let temp = TempDir::new().unwrap();
    let mut templates = store(&temp);
    templates.save("All on", &TemplateDraft::new()).unwrap();

    let mut ledger = SkillLedger::new(test_today());
    let ow2 = SlotId::new(Category::Ow, 2).unwrap();
    ledger.set_enabled(ow2, false);
    templates.apply("All on", &mut ledger).unwrap();
    assert!(!ledger.is_enabled(ow2));
}

#[test]
fn reference_reads_value_at_apply_time() {
    let mut log = TestLogger::new("reference_reads_value_at_apply_time");
    let temp = TempDir::new().unwrap();
    let mut templates = store(&temp);

    log.step("save: code 5 references code 3");
    let mut draft = TemplateDraft::new();
    draft.set_entry(code(5), "3");
    templates.save("Ref", &draft).unwrap();

    log.step("mutate code 3 after saving");
    let mut ledger = SkillLedger::new(test_today());
    let moved = date(2024, 1, 2);
    ledger.set_value(code(3).slot(), SkillValue::Date(moved)).unwrap();

    templates.apply("Ref", &mut ledger).unwrap();
    log.log_value("code 5", &ledger.date(code(5)));
    assert_eq!(ledger.date(code(5)), Some(moved));
    log.pass();
}

#[test]
fn reference_sees_earlier_steps_of_the_same_apply() {
    let temp = TempDir::new().unwrap();
    let mut templates = store(&temp);

    let mut draft = TemplateDraft::new();
    draft.set_entry(code(3), "2024-02-03");
    draft.set_entry(code(5), "3");
    templates.save("Chain", &draft).unwrap();

    let mut ledger = SkillLedger::new(test_today());
    templates.apply("Chain", &mut ledger).unwrap();
    assert_eq!(ledger.date(code(5)), Some(date(2024, 2, 3)));
}

#[test]
fn literals_and_skips_round_trip_through_disk() {
    let temp = TempDir::new().unwrap();
    let mut templates = store(&temp);

    let mut draft = TemplateDraft::new();
    draft.set_entry(code(22), "15/08/2024");
    draft.set_entry(code(23), "--");
    draft.set_flex(0, "Compass swim");
    draft.set_quiz(2, "92%");
    templates.save("Open Water", &draft).unwrap();

    let reopened = store(&temp);
    let mut ledger = SkillLedger::new(test_today());
    ledger
        .set_value(code(23).slot(), SkillValue::Date(date(2023, 3, 3)))
        .unwrap();
    reopened.apply("Open Water", &mut ledger).unwrap();

    assert_eq!(ledger.date(code(22)), Some(date(2024, 8, 15)));
    assert_eq!(ledger.date(code(23)), Some(date(2023, 3, 3)));
    assert_eq!(ledger.flex(0).unwrap().effective(), "Compass swim");
    assert!(!ledger.flex(0).unwrap().is_edited());
    assert_eq!(ledger.quiz(2).unwrap().placeholder(), "92%");
}

#[test]
fn ledger_snapshot_saves_switches() {
    let temp = TempDir::new().unwrap();
    let mut templates = store(&temp);

    let mut source = SkillLedger::new(test_today());
    source.toggle_category(Category::Ow);
    templates.save_ledger("No OW", &source).unwrap();

    let mut target = SkillLedger::new(test_today());
    templates.apply("No OW", &mut target).unwrap();
    assert!(Category::Ow.slots().all(|id| !target.is_enabled(id)));
    assert!(Category::Cw.slots().all(|id| target.is_enabled(id)));
}
