//! Module with models of the published changes
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One "changes published" entry of the changes page.
/// Consists of:
/// 1. Date the changes are for
/// 2. Day of week token, exactly as written on the page
/// 3. Link to the document with changes; no link means there are no changes for that day
#[derive(Deserialize, Debug, Serialize, PartialEq, Eq, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ChangeElement {
    pub date: NaiveDate,
    pub day_of_week: String,
    pub link_to_document: Option<String>,
}

impl ChangeElement {
    pub fn new(
        date: NaiveDate,
        day_of_week: impl Into<String>,
        link_to_document: Option<String>,
    ) -> Self {
        Self {
            date,
            day_of_week: day_of_week.into(),
            link_to_document,
        }
    }

    pub fn has_changes(&self) -> bool {
        self.link_to_document.is_some()
    }

    pub fn describe(&self, indent: &str) -> String {
        format!(
            "\n{indent}ChangeElement:\n{indent}Date = {};\n{indent}LinkToDocument = {};\n{indent}CurrentDay = {}.\n",
            self.date,
            self.link_to_document.as_deref().unwrap_or("none"),
            self.day_of_week
        )
    }
}

/// One period node (usually a month) of the changes page.
#[derive(Deserialize, Debug, Serialize, PartialEq, Eq, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct MonthChanges {
    pub name: String,
    pub elements: Vec<ChangeElement>,
}

#[derive(Deserialize, Debug, Serialize, PartialEq, Eq, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ChangeEntry {
    pub lesson_number: Option<u8>,
    pub description: String,
}

/// Changes of one group for one day. `changes_date` is only set when `changes_found` is.
#[derive(Deserialize, Debug, Serialize, PartialEq, Eq, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct ChangesOfDay {
    pub changes_found: bool,
    pub changes_date: Option<NaiveDate>,
    pub entries: Vec<ChangeEntry>,
}

impl ChangesOfDay {
    pub fn not_found() -> Self {
        Self::default()
    }

    pub fn found(date: NaiveDate, entries: Vec<ChangeEntry>) -> Self {
        Self {
            changes_found: true,
            changes_date: Some(date),
            entries,
        }
    }
}
