//! Storage layer for the instructor assistant.
//!
//! Instructors and templates persist as JSON objects keyed by name, one file
//! per store, rewritten whole through a temp file and rename.

mod json_store;

pub use json_store::JsonStore;
