//! Property-based test suite entry point.

mod ledger_properties;
mod mapper_properties;
mod template_properties;
