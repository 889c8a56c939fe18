//! Unit test suite entry point.

mod form_tests;
mod import_tests;
mod ledger_tests;
mod seed_data_tests;
mod session_tests;
mod sign_off_tests;
mod template_tests;
