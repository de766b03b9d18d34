use super::machine::MachineRecord;

/// OS labels the reporting agent emits (`platform.system()` values).
pub const KNOWN_OS: [&str; 3] = ["Windows", "Darwin", "Linux"];

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum OsFilter {
    #[default]
    All,
    Only(String),
}

impl OsFilter {
    pub fn matches(&self, os: &str) -> bool {
        match self {
            OsFilter::All => true,
            OsFilter::Only(wanted) => wanted == os,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    /// Machines without configuration issues
    Ok,
    /// Machines with at least one configuration issue
    Issue,
}

impl StatusFilter {
    pub fn matches(self, has_issue: bool) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Ok => !has_issue,
            StatusFilter::Issue => has_issue,
        }
    }
}

/// The two user-selected filters. Lives only as long as the window.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterState {
    pub os: OsFilter,
    pub status: StatusFilter,
}

impl FilterState {
    pub fn accepts(&self, machine: &MachineRecord) -> bool {
        self.os.matches(&machine.os)
            && self.status.matches(machine.has_configuration_issues())
    }
}

/// Choices for the OS filter: the known agent labels plus anything else seen
/// in the snapshot, sorted and without duplicates.
pub fn os_options(snapshot: &[MachineRecord]) -> Vec<String> {
    let mut options: Vec<String> = KNOWN_OS
        .iter()
        .map(|os| os.to_string())
        .chain(snapshot.iter().map(|m| m.os.clone()))
        .collect();
    options.sort();
    options.dedup();
    options
}
