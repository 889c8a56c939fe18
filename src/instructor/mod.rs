//! Instructor directory: persisted identities, credentials and sign-off.
//!
//! A sign-off authenticates an instructor and, only on success, credits them
//! on every enabled slot of the ledger and on one of the form's instructor
//! header blocks. A failed authentication leaves the ledger untouched.

mod password;

use std::path::PathBuf;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::{IaError, Result};
use crate::ledger::{Attribution, HeaderEntry, HeaderOutcome, SkillLedger};
use crate::storage::JsonStore;

pub use password::PasswordRecord;

/// One instructor as stored in `instructor_data.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Instructor {
    #[serde(rename = "PADI Instructor")]
    pub name: String,
    #[serde(rename = "Initials")]
    pub initials: String,
    #[serde(rename = "PADI Number")]
    pub cert_number: String,
    #[serde(rename = "Dive Center")]
    pub dive_center: String,
    #[serde(rename = "Phone")]
    pub phone: String,
    #[serde(rename = "Email")]
    pub email: String,
    #[serde(rename = "Password")]
    pub password: PasswordRecord,
}

impl Instructor {
    #[must_use]
    pub fn attribution(&self) -> Attribution {
        Attribution {
            instructor: self.name.clone(),
            initials: self.initials.clone(),
            cert_number: self.cert_number.clone(),
        }
    }

    #[must_use]
    pub fn header_entry(&self, date: NaiveDate) -> HeaderEntry {
        HeaderEntry {
            instructor: self.name.clone(),
            cert_number: self.cert_number.clone(),
            dive_center: self.dive_center.clone(),
            phone: self.phone.clone(),
            email: self.email.clone(),
            date,
        }
    }
}

/// Details entered for a new instructor, before the password is hashed.
#[derive(Debug, Clone, Default)]
pub struct NewInstructor {
    pub name: String,
    pub initials: String,
    pub cert_number: String,
    pub dive_center: String,
    pub phone: String,
    pub email: String,
    pub password: String,
}

impl NewInstructor {
    fn into_instructor(self) -> Instructor {
        Instructor {
            password: PasswordRecord::hash(&self.password),
            name: self.name,
            initials: self.initials,
            cert_number: self.cert_number,
            dive_center: self.dive_center,
            phone: self.phone,
            email: self.email,
        }
    }
}

/// Result of a successful sign-off.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SignOff {
    /// Number of enabled slots credited to the instructor.
    pub slots_attributed: usize,
    /// Where the instructor header landed.
    pub header: HeaderOutcome,
}

/// Persisted instructors keyed by name.
#[derive(Debug)]
pub struct InstructorDirectory {
    store: JsonStore<Instructor>,
}

impl InstructorDirectory {
    /// Open the directory at `path`. A missing file is an empty directory.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let store: JsonStore<Instructor> = JsonStore::open_private(path)?;
        for (key, instructor) in store.iter() {
            if key != instructor.name {
                return Err(IaError::StoreCorrupt {
                    path: store.path().to_path_buf(),
                    reason: format!(
                        "entry '{key}' holds instructor '{}'",
                        instructor.name
                    ),
                });
            }
        }
        Ok(Self { store })
    }

    /// Add or replace an instructor, hashing the password under a fresh salt.
    pub fn add(&mut self, new: NewInstructor) -> Result<&Instructor> {
        let name = new.name.trim().to_string();
        if name.is_empty() {
            return Err(IaError::Validation("instructor name is empty".to_string()));
        }
        if new.password.is_empty() {
            return Err(IaError::Validation(format!(
                "password for instructor '{name}' is empty"
            )));
        }
        let mut instructor = new.into_instructor();
        instructor.name.clone_from(&name);
        let replaced = self.store.insert(name.clone(), instructor).is_some();
        self.store.save()?;
        info!(instructor = %name, replaced, "instructor saved");
        self.get(&name)
    }

    /// Remove an instructor.
    pub fn remove(&mut self, name: &str) -> Result<Instructor> {
        let removed = self
            .store
            .remove(name)
            .ok_or_else(|| IaError::InstructorNotFound(name.to_string()))?;
        self.store.save()?;
        info!(instructor = %name, "instructor removed");
        Ok(removed)
    }

    pub fn get(&self, name: &str) -> Result<&Instructor> {
        self.store
            .get(name)
            .ok_or_else(|| IaError::InstructorNotFound(name.to_string()))
    }

    /// Instructor names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.store.keys()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Instructor> {
        self.store.iter().map(|(_, instructor)| instructor)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.store.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// Check `password` against the stored digest of `name`.
    pub fn authenticate(&self, name: &str, password: &str) -> Result<bool> {
        let ok = self.get(name)?.password.verify(password);
        if ok {
            info!(instructor = %name, "instructor authenticated");
        } else {
            warn!(instructor = %name, "instructor authentication failed");
        }
        Ok(ok)
    }

    /// Authenticate, then credit the instructor on every enabled slot and on
    /// one header block dated `today`.
    pub fn sign_off(
        &self,
        name: &str,
        password: &str,
        ledger: &mut SkillLedger,
        today: NaiveDate,
    ) -> Result<SignOff> {
        if !self.authenticate(name, password)? {
            return Err(IaError::AuthenticationFailed(name.to_string()));
        }
        let instructor = self.get(name)?;
        let slots_attributed = ledger.attribute_enabled(&instructor.attribution());
        let header = ledger.attribute_header(instructor.header_entry(today));
        info!(instructor = %name, slots_attributed, ?header, "instructor signed off");
        Ok(SignOff {
            slots_attributed,
            header,
        })
    }
}
