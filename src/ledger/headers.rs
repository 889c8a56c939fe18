use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Contents of one instructor header block on the form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeaderEntry {
    pub instructor: String,
    pub cert_number: String,
    pub dive_center: String,
    pub phone: String,
    pub email: String,
    pub date: NaiveDate,
}

/// Where a header attribution landed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HeaderOutcome {
    /// Written to header block `0` or `1`.
    Written(usize),
    /// The instructor already occupies a header block.
    AlreadyPresent(usize),
    /// Both blocks hold other instructors; nothing was written.
    Full,
}

/// The form's two instructor header blocks.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstructorHeaders {
    slots: [Option<HeaderEntry>; 2],
}

impl InstructorHeaders {
    /// Fill the first empty block, unless the instructor is already listed.
    pub fn attribute(&mut self, entry: HeaderEntry) -> HeaderOutcome {
        if let Some(index) = self
            .slots
            .iter()
            .position(|slot| slot.as_ref().is_some_and(|s| s.instructor == entry.instructor))
        {
            return HeaderOutcome::AlreadyPresent(index);
        }
        match self.slots.iter().position(Option::is_none) {
            Some(index) => {
                self.slots[index] = Some(entry);
                HeaderOutcome::Written(index)
            }
            None => {
                warn!(instructor = %entry.instructor, "both instructor headers occupied");
                HeaderOutcome::Full
            }
        }
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&HeaderEntry> {
        self.slots.get(index).and_then(Option::as_ref)
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, &HeaderEntry)> {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(index, slot)| slot.as_ref().map(|entry| (index, entry)))
    }

    pub fn clear(&mut self) {
        self.slots = [None, None];
    }
}
