use ia::catalog::{Category, SkillCode, SlotId, flex_slot};
use ia::error::IaError;
use ia::ledger::{CategoryState, KnowledgePath, SkillLedger, SkillValue};
use ia::test_utils::test_today;

fn pattern(ledger: &SkillLedger, category: Category) -> Vec<bool> {
    category.slots().map(|id| ledger.is_enabled(id)).collect()
}

#[test]
fn toggling_cw_twice_restores_its_pattern() {
    let mut ledger = SkillLedger::new(test_today());
    let original = pattern(&ledger, Category::Cw);

    assert_eq!(ledger.toggle_category(Category::Cw), CategoryState::AllDisabled);
    assert!(pattern(&ledger, Category::Cw).iter().all(|on| !on));
    assert_eq!(ledger.toggle_category(Category::Cw), CategoryState::AllEnabled);
    assert_eq!(pattern(&ledger, Category::Cw), original);
}

#[test]
fn toggle_category_leaves_other_categories_alone() {
    let mut ledger = SkillLedger::new(test_today());
    ledger.toggle_category(Category::Cw);
    assert!(pattern(&ledger, Category::Kd).iter().all(|on| *on));
    assert!(pattern(&ledger, Category::Ow).iter().all(|on| *on));
}

#[test]
fn toggle_all_round_trip() {
    let mut ledger = SkillLedger::new(test_today());
    ledger.checkboxes_mut().course.erdpml = true;

    assert_eq!(ledger.toggle_all(), CategoryState::AllDisabled);
    assert!(ledger.slots().all(|slot| !slot.enabled));
    assert!(!ledger.checkboxes().course.erdpml);

    assert_eq!(ledger.toggle_all(), CategoryState::AllEnabled);
    assert!(ledger.slots().all(|slot| slot.enabled));
}

#[test]
fn elearning_path_completes_knowledge_development() {
    let mut ledger = SkillLedger::new(test_today());
    let kd_aggregate = SkillCode::new(21).unwrap();

    assert_eq!(ledger.toggle_elearning(), KnowledgePath::Elearning);
    assert!(!ledger.is_enabled(SlotId::new(Category::Kd, 0).unwrap()));
    assert!(ledger.is_enabled(SlotId::new(Category::Kd, 5).unwrap()));
    assert!(!ledger.checkboxes().knowledge_review[0]);
    assert!(ledger.checkboxes().video[5]);
    assert!(ledger.aggregate_complete(kd_aggregate));

    assert_eq!(ledger.toggle_elearning(), KnowledgePath::Classroom);
    assert!(ledger.aggregate_complete(kd_aggregate));
}

#[test]
fn mismatched_value_leaves_slot_unchanged() {
    let mut ledger = SkillLedger::new(test_today());
    let flex = flex_slot(3).unwrap();
    let before = ledger.slot(flex).clone();

    let err = ledger
        .set_value(flex, SkillValue::Date(test_today()))
        .unwrap_err();
    assert!(matches!(err, IaError::TypeMismatch { expected: "text", found: "date", .. }));
    assert_eq!(ledger.slot(flex), &before);
}

#[test]
fn reset_dates_every_dated_slot_today() {
    let mut ledger = SkillLedger::new(test_today());
    ledger.set_value(flex_slot(0).unwrap(), SkillValue::Text("Cramp".to_string())).unwrap();
    ledger.toggle_category(Category::Ow);

    let tomorrow = test_today().succ_opt().unwrap();
    ledger.reset(tomorrow);
    for code in SkillCode::all() {
        assert_eq!(ledger.date(code), Some(tomorrow));
    }
    assert_eq!(ledger.flex(0).unwrap().effective(), "");
    assert!(ledger.slots().all(|slot| slot.enabled));
}
