use super::client::FetchError;
use crate::model::{FilterState, MachineRecord, MachinesView, OsFilter, StatusFilter, render_machines};
use tracing::{debug, error};

/// Result of one fetch, as delivered to the UI thread.
pub type FetchOutcome = Result<Vec<MachineRecord>, FetchError>;

/// Owns the last fetched snapshot, the filter selection and the current view.
///
/// All mutation happens on the UI thread: fetch outcomes arrive as messages
/// and filter changes come from the two combo boxes.
#[derive(Debug, Default)]
pub struct DashboardController {
    snapshot: Vec<MachineRecord>,
    filters: FilterState,
    view: MachinesView,
}

impl DashboardController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Controller that already holds a snapshot and has rendered it.
    pub fn with_snapshot(snapshot: Vec<MachineRecord>) -> Self {
        let mut controller = Self {
            snapshot,
            ..Self::default()
        };
        controller.render_machines();
        controller
    }

    pub fn snapshot(&self) -> &[MachineRecord] {
        &self.snapshot
    }

    pub fn filters(&self) -> &FilterState {
        &self.filters
    }

    pub fn view(&self) -> &MachinesView {
        &self.view
    }

    /// Replaces the view with a fresh render of (snapshot, filters).
    pub fn render_machines(&mut self) {
        self.view = render_machines(&self.snapshot, &self.filters);
    }

    pub fn set_os_filter(&mut self, os: OsFilter) {
        self.filters.os = os;
        self.render_machines();
    }

    pub fn set_status_filter(&mut self, status: StatusFilter) {
        self.filters.status = status;
        self.render_machines();
    }

    /// Applies a fetch outcome. Success replaces the snapshot wholesale and
    /// re-renders; failure shows the error view and keeps the old snapshot.
    pub fn apply_fetch(&mut self, outcome: FetchOutcome) {
        match outcome {
            Ok(machines) => {
                debug!(count = machines.len(), "Machines snapshot replaced");
                self.snapshot = machines;
                self.render_machines();
            }
            Err(e) => {
                error!(error = %e, "Could not fetch machines");
                self.view = MachinesView::Error;
            }
        }
    }

    /// No further outcomes will arrive. Shows the error view; the snapshot
    /// and filters stay as they are.
    pub fn poller_stopped(&mut self) {
        error!("Machine polling stopped");
        self.view = MachinesView::Error;
    }
}

#[cfg(test)]
#[path = "controller_tests.rs"]
mod tests;
