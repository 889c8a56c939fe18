use ia::error::IaError;
use ia::student::{StudentRoster, import_csv};
use ia::test_utils::DataDirFixture;

const KAI: &str = "Kai,Lee,09/03/2001,male,555-0101,kai@example.com,1 Reef Rd,Cairns,QLD,4870,Australia";
const MIA: &str = "Mia,Wong,2000-12-01,F,555-0102,mia@example.com,2 Bay St,Perth,WA,6000,Australia";
const SAM: &str = "Sam,Ortiz,,,555-0103,sam@example.com,3 Dune Ave,Darwin,NT,0800,Australia";

#[test]
fn three_rows_yield_three_listed_students() {
    let fixture = DataDirFixture::new();
    let path = fixture.create_students_csv("class.csv", &[KAI, MIA, SAM]);

    let mut roster = StudentRoster::new();
    let report = import_csv(&path, &mut roster).unwrap();

    assert_eq!(report.added, 3);
    assert_eq!(report.replaced, 0);
    assert_eq!(roster.len(), 3);
    assert_eq!(
        roster.names().collect::<Vec<_>>(),
        ["Kai Lee", "Mia Wong", "Sam Ortiz"]
    );
}

#[test]
fn missing_email_rejects_the_whole_file() {
    let fixture = DataDirFixture::new();
    let no_email = "Ivy,Park,01/01/2002,female,555-0104,,4 Cove Ln,Hobart,TAS,7000,Australia";
    let path = fixture.create_students_csv("class.csv", &[KAI, no_email, MIA]);

    let mut roster = StudentRoster::new();
    let err = import_csv(&path, &mut roster).unwrap_err();
    match err {
        IaError::MalformedImportRow { row, column } => {
            assert_eq!(row, 3);
            assert_eq!(column, "email");
        }
        other => panic!("unexpected error: {other}"),
    }
    assert!(roster.is_empty(), "no row may be committed");
}

#[test]
fn missing_column_is_reported_on_the_header_row() {
    let fixture = DataDirFixture::new();
    let path = fixture.create_file(
        "short.csv",
        "first_name,last_name,sex\nKai,Lee,male\n",
    );
    let mut roster = StudentRoster::new();
    assert!(matches!(
        import_csv(&path, &mut roster),
        Err(IaError::MalformedImportRow { row: 1, .. })
    ));
}

#[test]
fn short_row_names_its_first_absent_column() {
    let fixture = DataDirFixture::new();
    let path = fixture.create_students_csv("class.csv", &[KAI, "Mia,Wong,,female,2"]);

    let mut roster = StudentRoster::new();
    match import_csv(&path, &mut roster).unwrap_err() {
        IaError::MalformedImportRow { row, column } => {
            assert_eq!(row, 3);
            assert_eq!(column, "email");
        }
        other => panic!("unexpected error: {other}"),
    }
    assert!(roster.is_empty());
}

#[test]
fn row_missing_only_trailing_country_is_rejected() {
    let fixture = DataDirFixture::new();
    let path = fixture.create_students_csv(
        "class.csv",
        &["Kai,Lee,09/03/2001,male,555-0101,kai@example.com,1 Reef Rd,Cairns,QLD,4870"],
    );
    let mut roster = StudentRoster::new();
    assert!(matches!(
        import_csv(&path, &mut roster),
        Err(IaError::MalformedImportRow { row: 2, ref column }) if column == "country"
    ));
}

#[test]
fn duplicate_names_replace_in_place() {
    let fixture = DataDirFixture::new();
    let moved = "Kai,Lee,09/03/2001,male,555-0199,kai@example.com,9 New St,Cairns,QLD,4870,Australia";
    let path = fixture.create_students_csv("class.csv", &[KAI, MIA, moved]);

    let mut roster = StudentRoster::new();
    let report = import_csv(&path, &mut roster).unwrap();
    assert_eq!(report.added, 2);
    assert_eq!(report.replaced, 1);
    assert_eq!(roster.get("Kai Lee").unwrap().street_address, "9 New St");
    assert_eq!(roster.names().next(), Some("Kai Lee"));
}
