//! Shared test utilities for the instructor assistant.

pub mod fixtures;
pub mod logging;

use chrono::NaiveDate;

pub use fixtures::DataDirFixture;
pub use logging::TestLogger;

/// Fixed "today" used across tests.
pub fn test_today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 15).expect("valid date")
}
