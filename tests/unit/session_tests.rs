use ia::error::IaError;
use ia::form::JsonFormWriter;
use ia::instructor::NewInstructor;
use ia::templates::TemplateDraft;
use ia::test_utils::{DataDirFixture, TestLogger, test_today};

const KAI: &str = "Kai,Lee,09/03/2001,male,555-0101,kai@example.com,1 Reef Rd,Cairns,QLD,4870,Australia";

#[test]
fn deleting_the_selected_template_clears_the_selection() {
    let fixture = DataDirFixture::new();
    let mut session = fixture.session(test_today());
    session.templates.save("Weekend", &TemplateDraft::new()).unwrap();
    session.templates.save("Weekday", &TemplateDraft::new()).unwrap();

    session.select_template("Weekend").unwrap();
    session.delete_template("Weekday").unwrap();
    assert_eq!(session.selected_template(), Some("Weekend"));

    session.delete_template("Weekend").unwrap();
    assert_eq!(session.selected_template(), None);
    assert!(matches!(
        session.apply_selected_template(),
        Err(IaError::Validation(_))
    ));
}

#[test]
fn generate_writes_named_form_file() {
    let mut log = TestLogger::new("generate_writes_named_form_file");
    let fixture = DataDirFixture::new();
    let mut session = fixture.session(test_today());

    log.step("import one student and sign off");
    let csv = fixture.create_students_csv("class.csv", &[KAI]);
    session.import_students(&csv).unwrap();
    session.select_student("Kai Lee").unwrap();
    session
        .instructors
        .add(NewInstructor {
            name: "Ana Reyes".to_string(),
            initials: "AR".to_string(),
            cert_number: "123456".to_string(),
            password: "coral".to_string(),
            ..NewInstructor::default()
        })
        .unwrap();
    session.sign_off("Ana Reyes", "coral").unwrap();

    log.step("generate");
    let written = session.generate(&JsonFormWriter).unwrap();
    log.log_value("written", &written);
    assert_eq!(
        written,
        fixture
            .forms_dir
            .join("Kai Lee_Student_Record_Form_15_6_2024.json")
    );
    let json: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&written).unwrap()).unwrap();
    assert_eq!(json["CW 1"], 15);
    assert_eq!(json["Initials 1"], "AR");
    log.pass();
}

#[test]
fn generate_requires_a_selected_student() {
    let fixture = DataDirFixture::new();
    let session = fixture.session(test_today());
    assert!(matches!(
        session.generate(&JsonFormWriter),
        Err(IaError::Validation(_))
    ));
}

#[test]
fn vanished_save_directory_writes_nothing() {
    let fixture = DataDirFixture::new();
    let mut session = fixture.session(test_today());
    let csv = fixture.create_students_csv("class.csv", &[KAI]);
    session.import_students(&csv).unwrap();
    session.select_student("Kai Lee").unwrap();

    std::fs::remove_dir_all(&fixture.forms_dir).unwrap();
    assert!(matches!(
        session.generate(&JsonFormWriter),
        Err(IaError::OutputPathInvalid(_))
    ));
}

#[test]
fn missing_label_file_is_fatal() {
    let fixture = DataDirFixture::new();
    std::fs::remove_file(fixture.paths().labels()).unwrap();
    let err = ia::session::Session::open(fixture.paths(), test_today()).unwrap_err();
    assert!(matches!(err, IaError::ConfigMissing(_)));
}

#[test]
fn reset_forgets_the_selected_student() {
    let fixture = DataDirFixture::new();
    let mut session = fixture.session(test_today());
    let csv = fixture.create_students_csv("class.csv", &[KAI]);
    session.import_students(&csv).unwrap();
    session.select_student("Kai Lee").unwrap();

    session.reset();
    assert!(session.selected_student().is_none());
    assert_eq!(session.roster.len(), 1);
}
