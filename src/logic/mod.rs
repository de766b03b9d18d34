pub mod client;
pub mod controller;
pub mod poller;

pub use client::{FetchError, MachinesClient};
pub use controller::{DashboardController, FetchOutcome};
pub use poller::{POLL_INTERVAL, poll_interval, poller_task};
