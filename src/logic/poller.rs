use super::client::MachinesClient;
use super::controller::FetchOutcome;
use std::time::Duration;
use tokio::sync::mpsc::UnboundedSender;
use tokio::time::{Interval, MissedTickBehavior};
use tracing::{debug, info};

/// Time between two fetches of the machines list.
pub const POLL_INTERVAL: Duration = Duration::from_secs(30);

/// Ticks every `period`, first tick immediately. Ticks missed while the
/// process was suspended are not replayed back to back.
pub fn poll_interval(period: Duration) -> Interval {
    let mut interval = tokio::time::interval(period);
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
    interval
}

/// Background task that fetches the machines list once immediately and then
/// on every `period` tick.
///
/// Every tick spawns its own fetch, so a slow request never delays the next
/// one and outcomes are delivered in completion order. `notify` runs after
/// each delivered outcome (the app uses it to wake the UI). The task ends
/// once the receiving side of `outcomes` is gone.
pub async fn poller_task<F>(
    client: MachinesClient,
    period: Duration,
    outcomes: UnboundedSender<FetchOutcome>,
    notify: F,
) where
    F: Fn() + Clone + Send + 'static,
{
    info!(url = client.url(), period_ms = period.as_millis() as u64, "Polling machines");
    let mut interval = poll_interval(period);

    loop {
        interval.tick().await;

        if outcomes.is_closed() {
            debug!("Outcome receiver dropped, stopping poller");
            break;
        }

        let client = client.clone();
        let outcomes = outcomes.clone();
        let notify = notify.clone();
        tokio::spawn(async move {
            let outcome = client.fetch_machines().await;
            if outcomes.send(outcome).is_ok() {
                notify();
            }
        });
    }
}

#[cfg(test)]
#[path = "poller_tests.rs"]
mod tests;
