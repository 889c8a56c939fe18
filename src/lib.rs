pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod fields;
pub mod form;
pub mod instructor;
pub mod labels;
pub mod ledger;
pub mod session;
pub mod storage;
pub mod student;
pub mod templates;
pub mod test_utils;
pub mod utils;

pub use error::{IaError, Result};

/// Package version from Cargo.toml.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
