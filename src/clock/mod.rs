//! Clock ticker.

use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

use crate::state::KioskState;

/// Set the current time immediately, then every `period`, until the state is
/// cancelled.
pub fn spawn_clock(state: Arc<KioskState>, period: Duration) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Skip);

        loop {
            interval.tick().await;
            if state.is_cancelled() {
                break;
            }
            state.set_now(Utc::now()).await;
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::FixedOffset;

    #[tokio::test]
    async fn test_clock_ticks_immediately_and_stops_on_cancel() {
        let state = Arc::new(KioskState::new(FixedOffset::east_opt(0).unwrap(), ""));
        assert!(state.now().await.is_none());

        let handle = spawn_clock(Arc::clone(&state), Duration::from_millis(10));
        tokio::time::sleep(Duration::from_millis(50)).await;
        assert!(state.now().await.is_some());

        state.cancel();
        tokio::time::timeout(Duration::from_secs(1), handle)
            .await
            .expect("clock task did not stop")
            .unwrap();
    }
}
