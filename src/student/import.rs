//! Bulk student import from CSV.
//!
//! Every row is validated before any is added to the roster, so a bad row
//! leaves the roster exactly as it was. Row numbers in errors are file line
//! numbers: the header is row 1, the first student row 2.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;
use tracing::{info, warn};

use super::{Sex, Student, StudentRoster, parse_birth_date};
use crate::error::{IaError, Result};

/// Columns the import file must carry.
pub const REQUIRED_COLUMNS: [&str; 11] = [
    "first_name",
    "last_name",
    "date_of_birth",
    "sex",
    "phone",
    "email",
    "street_address",
    "city",
    "province",
    "postal",
    "country",
];

/// Columns whose value may not be blank.
const NON_EMPTY_COLUMNS: [&str; 3] = ["first_name", "last_name", "email"];

#[derive(Debug, Default, Deserialize)]
struct ImportRow {
    #[serde(default)]
    first_name: Option<String>,
    #[serde(default)]
    last_name: Option<String>,
    #[serde(default)]
    date_of_birth: Option<String>,
    #[serde(default)]
    sex: Option<String>,
    #[serde(default)]
    phone: Option<String>,
    #[serde(default)]
    email: Option<String>,
    #[serde(default)]
    street_address: Option<String>,
    #[serde(default)]
    city: Option<String>,
    #[serde(default)]
    province: Option<String>,
    #[serde(default)]
    postal: Option<String>,
    #[serde(default)]
    country: Option<String>,
}

fn text(value: Option<String>) -> String {
    value.map(|v| v.trim().to_string()).unwrap_or_default()
}

impl ImportRow {
    fn into_student(self, row: usize) -> Result<Student> {
        let malformed = |column: &str| IaError::MalformedImportRow {
            row,
            column: column.to_string(),
        };

        for (column, value) in NON_EMPTY_COLUMNS
            .into_iter()
            .zip([&self.first_name, &self.last_name, &self.email])
        {
            if value.as_deref().is_none_or(|v| v.trim().is_empty()) {
                return Err(malformed(column));
            }
        }

        let date_of_birth = match self.date_of_birth.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(raw) => Some(parse_birth_date(raw).ok_or_else(|| malformed("date_of_birth"))?),
        };
        let sex = self
            .sex
            .as_deref()
            .unwrap_or_default()
            .parse::<Sex>()
            .map_err(|_| malformed("sex"))?;

        Ok(Student {
            first_name: text(self.first_name),
            last_name: text(self.last_name),
            date_of_birth,
            sex,
            phone: text(self.phone),
            email: text(self.email),
            street_address: text(self.street_address),
            city: text(self.city),
            province: text(self.province),
            postal: text(self.postal),
            country: text(self.country),
        })
    }
}

/// Outcome of a committed import.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize)]
pub struct ImportReport {
    /// Students new to the roster.
    pub added: usize,
    /// Students whose existing record was replaced.
    pub replaced: usize,
}

/// Parse and validate every row of a CSV document.
pub fn parse_csv<R: Read>(reader: R) -> Result<Vec<Student>> {
    let mut table = csv::ReaderBuilder::new()
        .trim(csv::Trim::Headers)
        .flexible(true)
        .from_reader(reader);

    let headers = table.headers()?.clone();
    if let Some(missing) = REQUIRED_COLUMNS
        .iter()
        .find(|column| !headers.iter().any(|h| h == **column))
    {
        return Err(IaError::MalformedImportRow {
            row: 1,
            column: (*missing).to_string(),
        });
    }

    let mut students = Vec::new();
    for (index, record) in table.records().enumerate() {
        let row = index + 2;
        let record = record?;
        if let Some(absent) = headers.get(record.len()) {
            return Err(IaError::MalformedImportRow {
                row,
                column: absent.to_string(),
            });
        }
        let parsed: ImportRow = record.deserialize(Some(&headers))?;
        students.push(parsed.into_student(row)?);
    }
    Ok(students)
}

/// Import the CSV at `path` into `roster`. Nothing is added unless every
/// row is valid.
pub fn import_csv(path: &Path, roster: &mut StudentRoster) -> Result<ImportReport> {
    let file = File::open(path)?;
    let students = parse_csv(file).inspect_err(|err| {
        warn!(path = %path.display(), error = %err, "student import rejected");
    })?;

    let mut report = ImportReport::default();
    for student in students {
        if roster.insert(student) {
            report.replaced += 1;
        } else {
            report.added += 1;
        }
    }
    info!(
        path = %path.display(),
        added = report.added,
        replaced = report.replaced,
        "students imported"
    );
    Ok(report)
}
