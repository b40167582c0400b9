//! Shared kiosk state.
//!
//! Owned by the runtime and shared with the HTTP handlers. The snapshot and
//! the current time are only ever replaced as a whole.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

use chrono::{DateTime, FixedOffset, Utc};
use tokio::sync::{Mutex, RwLock};

use crate::errors::AppError;
use crate::models::DisplaySnapshot;
use crate::schedule::{classify, visible_window, AutoScroll, ScrollRequest};
use crate::view::{build_view, DisplayView, ViewContext};

/// What happened to a completed poll.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PollOutcome {
    /// The snapshot was replaced.
    Applied,
    /// A newer poll had already been applied.
    Stale,
    /// Every resource failed; the previous snapshot was kept.
    Failed,
    /// The runtime was shut down while the poll was in flight.
    Cancelled,
}

/// The snapshot together with the generation of the poll that produced it.
#[derive(Debug, Default)]
struct SnapshotSlot {
    snapshot: DisplaySnapshot,
    generation: u64,
}

/// State shared between the timers and the HTTP surface.
pub struct KioskState {
    slot: RwLock<SnapshotSlot>,
    now: RwLock<Option<DateTime<Utc>>>,
    scroll: Mutex<AutoScroll>,
    next_generation: AtomicU64,
    loading: AtomicBool,
    cancelled: AtomicBool,
    tz: FixedOffset,
    asset_base: String,
}

impl KioskState {
    pub fn new(tz: FixedOffset, asset_base: impl Into<String>) -> Self {
        Self {
            slot: RwLock::new(SnapshotSlot::default()),
            now: RwLock::new(None),
            scroll: Mutex::new(AutoScroll::new()),
            next_generation: AtomicU64::new(1),
            loading: AtomicBool::new(true),
            cancelled: AtomicBool::new(false),
            tz,
            asset_base: asset_base.into(),
        }
    }

    /// Reserve the generation number for a poll about to be issued.
    pub fn issue_generation(&self) -> u64 {
        self.next_generation.fetch_add(1, Ordering::SeqCst)
    }

    /// Apply the result of the poll issued as `generation`.
    pub async fn apply_poll(
        &self,
        generation: u64,
        result: Result<DisplaySnapshot, AppError>,
    ) -> PollOutcome {
        if self.is_cancelled() {
            tracing::debug!("Ignoring poll {} after shutdown", generation);
            return PollOutcome::Cancelled;
        }

        let outcome = match result {
            Ok(snapshot) => {
                let mut slot = self.slot.write().await;
                if generation <= slot.generation {
                    tracing::debug!(
                        "Discarding stale poll {} (current generation {})",
                        generation,
                        slot.generation
                    );
                    PollOutcome::Stale
                } else {
                    slot.snapshot = snapshot;
                    slot.generation = generation;
                    PollOutcome::Applied
                }
            }
            Err(e) => {
                tracing::error!("Poll {} failed, keeping previous snapshot: {}", generation, e);
                PollOutcome::Failed
            }
        };

        if self.loading.swap(false, Ordering::SeqCst) {
            tracing::info!("Initial data load resolved");
        }
        if outcome == PollOutcome::Applied {
            self.refresh_scroll().await;
        }

        outcome
    }

    /// Advance the clock.
    pub async fn set_now(&self, now: DateTime<Utc>) {
        if self.is_cancelled() {
            return;
        }
        *self.now.write().await = Some(now);
        self.refresh_scroll().await;
    }

    /// Re-evaluate the schedule anchor against the current snapshot and time.
    pub async fn refresh_scroll(&self) -> Option<ScrollRequest> {
        let now = *self.now.read().await;
        let slot = self.slot.read().await;
        let timed = classify(&slot.snapshot.schedule, now, &self.tz);

        let request = self.scroll.lock().await.observe(visible_window(&timed));
        if let Some(request) = &request {
            tracing::debug!(
                "Schedule anchor moved to {} ({} visible)",
                request.anchor_id,
                request.visible_count
            );
        }
        request
    }

    pub async fn now(&self) -> Option<DateTime<Utc>> {
        *self.now.read().await
    }

    /// Current snapshot and its generation.
    pub async fn snapshot(&self) -> (DisplaySnapshot, u64) {
        let slot = self.slot.read().await;
        (slot.snapshot.clone(), slot.generation)
    }

    /// Generation of the snapshot currently held.
    pub async fn generation(&self) -> u64 {
        self.slot.read().await.generation
    }

    /// Derive the display view from the current state.
    pub async fn view(&self) -> (DisplayView, u64) {
        let now = *self.now.read().await;
        let slot = self.slot.read().await;
        let scroll = self.scroll.lock().await;

        let view = build_view(
            &slot.snapshot,
            &ViewContext {
                now,
                tz: &self.tz,
                asset_base: &self.asset_base,
                loading: self.is_loading(),
                scroll: &scroll,
            },
        );
        (view, slot.generation)
    }

    pub fn is_loading(&self) -> bool {
        self.loading.load(Ordering::SeqCst)
    }

    /// Stop accepting clock and poll updates.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }
}
