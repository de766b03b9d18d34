use chrono::{DateTime, TimeZone};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Number of leading `machine_id` characters shown in a card header.
pub const SHORT_ID_LEN: usize = 8;

/// Check values that mark a machine as having a configuration issue.
pub const ISSUE_VALUES: [&str; 3] = ["Not Encrypted", "Updates Available", "Not Present"];

/// Check values rendered as compliant on a check line.
pub const OK_VALUES: [&str; 3] = ["Encrypted", "Up to Date", "Present"];

pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
pub const INVALID_DATE: &str = "Invalid Date";

/// One monitored host as reported by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MachineRecord {
    pub machine_id: String,
    pub os: String,
    /// Unix timestamp (seconds) of the last report
    pub last_check_in: i64,
    /// Check name to result, in the order the backend sent them
    #[serde(default)]
    pub checks: IndexMap<String, String>,
}

impl MachineRecord {
    /// True if any check value is exactly one of [`ISSUE_VALUES`].
    ///
    /// Narrower than [`CheckTag::of`]: a value such as `"Error: timeout"` is
    /// tagged as an issue on its line but does not count here.
    pub fn has_configuration_issues(&self) -> bool {
        self.checks
            .values()
            .any(|value| ISSUE_VALUES.contains(&value.as_str()))
    }

    /// First [`SHORT_ID_LEN`] characters of the machine id.
    pub fn short_id(&self) -> &str {
        match self.machine_id.char_indices().nth(SHORT_ID_LEN) {
            Some((end, _)) => &self.machine_id[..end],
            None => &self.machine_id,
        }
    }
}

/// Visual tag of a single check line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckTag {
    Ok,
    Issue,
}

impl CheckTag {
    pub fn of(value: &str) -> Self {
        if OK_VALUES.contains(&value) || value.contains('%') {
            CheckTag::Ok
        } else {
            CheckTag::Issue
        }
    }
}

/// `disk_encryption` -> `DISK ENCRYPTION`
pub fn display_check_name(name: &str) -> String {
    name.replace('_', " ").to_uppercase()
}

/// Formats a check-in timestamp (seconds) in the given time zone.
pub fn format_check_in<Tz: TimeZone>(secs: i64, tz: &Tz) -> String
where
    Tz::Offset: std::fmt::Display,
{
    match DateTime::from_timestamp(secs, 0) {
        Some(utc) => utc.with_timezone(tz).format(TIMESTAMP_FORMAT).to_string(),
        None => INVALID_DATE.to_string(),
    }
}

#[cfg(test)]
#[path = "machine_tests.rs"]
mod tests;
