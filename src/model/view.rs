use super::filter::FilterState;
use super::machine::{CheckTag, MachineRecord, display_check_name, format_check_in};
use chrono::{Local, TimeZone};

#[derive(Debug, Clone, PartialEq)]
pub struct CheckLine {
    /// Upper-cased name with underscores replaced by spaces
    pub name: String,
    pub value: String,
    pub tag: CheckTag,
}

/// Everything drawn for one machine.
#[derive(Debug, Clone, PartialEq)]
pub struct StatusCard {
    pub has_issue: bool,
    pub os: String,
    pub short_id: String,
    pub checked_in: String,
    pub checks: Vec<CheckLine>,
}

impl StatusCard {
    pub fn from_record<Tz: TimeZone>(machine: &MachineRecord, tz: &Tz) -> Self
    where
        Tz::Offset: std::fmt::Display,
    {
        Self {
            has_issue: machine.has_configuration_issues(),
            os: machine.os.clone(),
            short_id: machine.short_id().to_string(),
            checked_in: format_check_in(machine.last_check_in, tz),
            checks: machine
                .checks
                .iter()
                .map(|(name, value)| CheckLine {
                    name: display_check_name(name),
                    value: value.clone(),
                    tag: CheckTag::of(value),
                })
                .collect(),
        }
    }
}

/// What the card area currently shows.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum MachinesView {
    /// Nothing rendered yet
    #[default]
    Loading,
    Cards(Vec<StatusCard>),
    /// Filters matched no machine
    NoResults,
    /// Last fetch failed
    Error,
}

/// Render pass over the snapshot using local time for timestamps.
pub fn render_machines(snapshot: &[MachineRecord], filters: &FilterState) -> MachinesView {
    render_machines_in(snapshot, filters, &Local)
}

/// Builds the view from scratch; the result depends only on the arguments.
pub fn render_machines_in<Tz: TimeZone>(
    snapshot: &[MachineRecord],
    filters: &FilterState,
    tz: &Tz,
) -> MachinesView
where
    Tz::Offset: std::fmt::Display,
{
    let cards: Vec<StatusCard> = snapshot
        .iter()
        .filter(|m| filters.accepts(m))
        .map(|m| StatusCard::from_record(m, tz))
        .collect();

    if cards.is_empty() {
        MachinesView::NoResults
    } else {
        MachinesView::Cards(cards)
    }
}

#[cfg(test)]
#[path = "view_tests.rs"]
mod tests;
