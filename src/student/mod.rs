//! Student records and the session roster.

mod import;

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::{IaError, Result};

pub use import::{ImportReport, REQUIRED_COLUMNS, import_csv, parse_csv};

/// Sex as recorded on the form's two checkboxes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    Male,
    Female,
    #[default]
    Unspecified,
}

impl FromStr for Sex {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "male" | "m" => Ok(Self::Male),
            "female" | "f" => Ok(Self::Female),
            "" => Ok(Self::Unspecified),
            other => Err(format!("unknown sex '{other}'")),
        }
    }
}

/// Parse a birth date written `DD/MM/YYYY` or `YYYY-MM-DD`.
pub fn parse_birth_date(text: &str) -> Option<NaiveDate> {
    let text = text.trim();
    ["%d/%m/%Y", "%Y-%m-%d"]
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(text, format).ok())
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: Option<NaiveDate>,
    pub sex: Sex,
    pub phone: String,
    pub email: String,
    pub street_address: String,
    pub city: String,
    pub province: String,
    pub postal: String,
    pub country: String,
}

impl Student {
    /// Roster key and the name printed on the form.
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Birth date as `(day, month, year)` for the form's date triple.
    #[must_use]
    pub fn birth_date_parts(&self) -> Option<(u32, u32, i32)> {
        self.date_of_birth
            .map(|date| (date.day(), date.month(), date.year()))
    }

    /// Check the fields the form cannot do without.
    pub fn validate(&self) -> Result<()> {
        for (field, value) in [
            ("first_name", &self.first_name),
            ("last_name", &self.last_name),
            ("email", &self.email),
        ] {
            if value.trim().is_empty() {
                return Err(IaError::Validation(format!("student {field} is empty")));
            }
        }
        Ok(())
    }
}

impl fmt::Display for Student {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.full_name())
    }
}

/// Students of the session in the order they were first added.
///
/// Keyed by full name. Adding a student whose name is already listed
/// replaces the record and keeps its place in the listing.
#[derive(Debug, Clone, Default)]
pub struct StudentRoster {
    order: Vec<String>,
    students: HashMap<String, Student>,
}

impl StudentRoster {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a student. Returns true when a record was replaced.
    pub fn add(&mut self, student: Student) -> Result<bool> {
        student.validate()?;
        Ok(self.insert(student))
    }

    pub(crate) fn insert(&mut self, student: Student) -> bool {
        let key = student.full_name();
        let replaced = self.students.insert(key.clone(), student).is_some();
        if !replaced {
            self.order.push(key);
        }
        replaced
    }

    pub fn get(&self, name: &str) -> Result<&Student> {
        self.students
            .get(name)
            .ok_or_else(|| IaError::StudentNotFound(name.to_string()))
    }

    pub fn remove(&mut self, name: &str) -> Result<Student> {
        let student = self
            .students
            .remove(name)
            .ok_or_else(|| IaError::StudentNotFound(name.to_string()))?;
        self.order.retain(|key| key != name);
        Ok(student)
    }

    /// Listing entries in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Student> {
        self.order.iter().filter_map(|key| self.students.get(key))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}
