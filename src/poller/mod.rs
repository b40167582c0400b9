//! CMS poller.
//!
//! Fetches all five resources concurrently on a fixed cadence. A failing
//! resource falls back to its empty value; only a poll where every resource
//! fails is treated as an error.

use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

use crate::cms::ContentSource;
use crate::errors::AppError;
use crate::models::DisplaySnapshot;
use crate::state::{KioskState, PollOutcome};

/// Number of resources read per poll.
const RESOURCE_COUNT: usize = 5;

/// Fetch one complete snapshot.
pub async fn fetch_snapshot(source: &dyn ContentSource) -> Result<DisplaySnapshot, AppError> {
    let (sponsors, schedule, wifi, hacking_time, announcement) = tokio::join!(
        source.sponsors(),
        source.schedule(),
        source.wifi(),
        source.hacking_time(),
        source.announcement(),
    );

    let failures = [
        sponsors.is_err(),
        schedule.is_err(),
        wifi.is_err(),
        hacking_time.is_err(),
        announcement.is_err(),
    ]
    .into_iter()
    .filter(|failed| *failed)
    .count();

    if failures == RESOURCE_COUNT {
        return Err(AppError::AllSourcesFailed);
    }

    Ok(DisplaySnapshot {
        sponsors: or_default("sponsors", sponsors),
        schedule: or_default("schedule", schedule),
        wifi: or_default("wifi", wifi),
        hacking_time: or_default("hackingtime", hacking_time),
        announcement: or_default("announcement", announcement),
        fetched_at: Some(Utc::now()),
    })
}

fn or_default<T: Default>(resource: &str, result: Result<T, AppError>) -> T {
    result.unwrap_or_else(|e| {
        tracing::warn!("Failed to fetch {}: {}", resource, e);
        T::default()
    })
}

/// Run one poll and apply it to `state`.
pub async fn poll_once(state: &KioskState, source: &dyn ContentSource) -> PollOutcome {
    let generation = state.issue_generation();
    let result = fetch_snapshot(source).await;
    state.apply_poll(generation, result).await
}

/// Poll immediately, then every `period`, until the state is cancelled.
///
/// Each poll runs in its own task so a slow CMS never delays the next one;
/// out-of-order completions are resolved by generation.
pub fn spawn_poller(
    state: Arc<KioskState>,
    source: Arc<dyn ContentSource>,
    period: Duration,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Skip);

        loop {
            interval.tick().await;
            if state.is_cancelled() {
                break;
            }

            let generation = state.issue_generation();
            let state = Arc::clone(&state);
            let source = Arc::clone(&source);
            tokio::spawn(async move {
                let result = fetch_snapshot(source.as_ref()).await;
                let outcome = state.apply_poll(generation, result).await;
                tracing::debug!("Poll {} finished: {:?}", generation, outcome);
            });
        }
    })
}
