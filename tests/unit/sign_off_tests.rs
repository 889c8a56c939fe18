use ia::catalog::{Category, SlotId};
use ia::error::IaError;
use ia::instructor::{InstructorDirectory, NewInstructor};
use ia::ledger::{HeaderOutcome, SkillLedger};
use ia::test_utils::{TestLogger, test_today};
use tempfile::TempDir;

fn instructor(name: &str, initials: &str, password: &str) -> NewInstructor {
    NewInstructor {
        name: name.to_string(),
        initials: initials.to_string(),
        cert_number: format!("{initials}-1001"),
        dive_center: "S-2211".to_string(),
        phone: "555-0199".to_string(),
        email: format!("{}@example.com", initials.to_lowercase()),
        password: password.to_string(),
    }
}

fn directory(temp: &TempDir) -> InstructorDirectory {
    let mut dir = InstructorDirectory::open(temp.path().join("instructor_data.json")).unwrap();
    dir.add(instructor("Ana Reyes", "AR", "coral")).unwrap();
    dir.add(instructor("Ben Okafor", "BO", "kelp")).unwrap();
    dir.add(instructor("Cleo Marsh", "CM", "reef")).unwrap();
    dir
}

#[test]
fn wrong_password_leaves_every_slot_unchanged() {
    let mut log = TestLogger::new("wrong_password_leaves_every_slot_unchanged");
    let temp = TempDir::new().unwrap();
    let dir = directory(&temp);

    log.step("sign off once so the ledger carries attribution");
    let mut ledger = SkillLedger::new(test_today());
    ledger.toggle_category(Category::Kd);
    dir.sign_off("Ana Reyes", "coral", &mut ledger, test_today())
        .unwrap();
    let before = ledger.clone();

    log.step("second instructor with the wrong password");
    let err = dir
        .sign_off("Ben Okafor", "coral", &mut ledger, test_today())
        .unwrap_err();
    assert!(matches!(err, IaError::AuthenticationFailed(name) if name == "Ben Okafor"));
    assert_eq!(ledger, before);
    log.pass();
}

#[test]
fn sign_off_credits_only_enabled_slots() {
    let temp = TempDir::new().unwrap();
    let dir = directory(&temp);
    let mut ledger = SkillLedger::new(test_today());
    ledger.toggle_category(Category::Ow);

    let result = dir
        .sign_off("Ben Okafor", "kelp", &mut ledger, test_today())
        .unwrap();
    assert_eq!(result.slots_attributed, 15 + 7);
    assert_eq!(result.header, HeaderOutcome::Written(0));

    let cw0 = SlotId::new(Category::Cw, 0).unwrap();
    let ow0 = SlotId::new(Category::Ow, 0).unwrap();
    assert_eq!(
        ledger.slot(cw0).attribution.as_ref().map(|a| a.initials.as_str()),
        Some("BO")
    );
    assert!(ledger.slot(ow0).attribution.is_none());
}

#[test]
fn header_ring_holds_two_instructors() {
    let temp = TempDir::new().unwrap();
    let dir = directory(&temp);
    let mut ledger = SkillLedger::new(test_today());
    let today = test_today();

    let first = dir.sign_off("Ana Reyes", "coral", &mut ledger, today).unwrap();
    let again = dir.sign_off("Ana Reyes", "coral", &mut ledger, today).unwrap();
    let second = dir.sign_off("Ben Okafor", "kelp", &mut ledger, today).unwrap();
    let third = dir.sign_off("Cleo Marsh", "reef", &mut ledger, today).unwrap();

    assert_eq!(first.header, HeaderOutcome::Written(0));
    assert_eq!(again.header, HeaderOutcome::AlreadyPresent(0));
    assert_eq!(second.header, HeaderOutcome::Written(1));
    assert_eq!(third.header, HeaderOutcome::Full);
    assert_eq!(ledger.headers().get(0).unwrap().instructor, "Ana Reyes");
    assert_eq!(ledger.headers().get(1).unwrap().instructor, "Ben Okafor");

    let cw3 = SlotId::new(Category::Cw, 3).unwrap();
    assert_eq!(
        ledger.slot(cw3).attribution.as_ref().map(|a| a.instructor.as_str()),
        Some("Cleo Marsh"),
        "slot attribution still follows the latest sign-off"
    );
}

#[test]
fn unknown_instructor_is_not_found() {
    let temp = TempDir::new().unwrap();
    let dir = directory(&temp);
    let mut ledger = SkillLedger::new(test_today());
    assert!(matches!(
        dir.sign_off("Nobody", "x", &mut ledger, test_today()),
        Err(IaError::InstructorNotFound(_))
    ));
}

#[test]
fn reset_clears_attribution_and_headers() {
    let temp = TempDir::new().unwrap();
    let dir = directory(&temp);
    let mut ledger = SkillLedger::new(test_today());
    dir.sign_off("Ana Reyes", "coral", &mut ledger, test_today())
        .unwrap();

    ledger.reset(test_today());
    assert_eq!(ledger, SkillLedger::new(test_today()));
}
