use std::path::PathBuf;

use ia::config::{AppConfig, DEFAULT_THEME};
use ia::fields::{FieldMapper, FormSchema};
use ia::labels::SkillLabels;

fn seed(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data").join(name)
}

#[test]
fn seed_schema_declares_every_mapped_field() {
    let schema = FormSchema::load(&seed("pdf_form_fields.json")).unwrap();
    assert_eq!(schema.verify(FieldMapper), Ok(()));
    assert!(schema.defaults().all(|(_, value)| value.is_empty()));
}

#[test]
fn seed_labels_match_catalog() {
    let labels = SkillLabels::load(&seed("ui_setup_labels.json")).unwrap();
    assert_eq!(labels, SkillLabels::default());
}

#[test]
fn seed_config_starts_as_new_user() {
    let config = AppConfig::load_with_env(&seed("config.ini"), |_| None).unwrap();
    assert!(config.new_user());
    assert_eq!(config.theme(), DEFAULT_THEME);
    assert_eq!(config.save_path(), None);
}
