//! Auto-scroll anchoring for the schedule list.

use super::TimedScheduleItem;

/// Emitted when the page should scroll the schedule to a new anchor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScrollRequest {
    pub anchor_id: String,
    pub visible_count: usize,
    pub epoch: u64,
}

/// Tracks the first visible item and the visible count.
///
/// A request is emitted only when either of them changes, never on a plain
/// clock tick.
#[derive(Debug, Default)]
pub struct AutoScroll {
    last_key: Option<(Option<String>, usize)>,
    anchor_id: Option<String>,
    epoch: u64,
}

impl AutoScroll {
    pub fn new() -> Self {
        Self::default()
    }

    /// Observe the current visible window.
    pub fn observe(&mut self, visible: &[TimedScheduleItem]) -> Option<ScrollRequest> {
        let first_id = visible.first().map(|item| item.item.id.clone());
        let key = (first_id.clone(), visible.len());

        if self.last_key.as_ref() == Some(&key) {
            return None;
        }
        self.last_key = Some(key);
        self.anchor_id = first_id.clone();

        let anchor_id = first_id?;
        self.epoch += 1;
        Some(ScrollRequest {
            anchor_id,
            visible_count: visible.len(),
            epoch: self.epoch,
        })
    }

    pub fn anchor_id(&self) -> Option<&str> {
        self.anchor_id.as_deref()
    }

    /// Number of scroll requests emitted so far.
    pub fn epoch(&self) -> u64 {
        self.epoch
    }
}

/// Scroll position that brings an item to the top of its container.
///
/// `item_offset` is the item's distance from the container's visible top.
/// The result is clamped to `[0, scroll_height - client_height]`.
/// Mirrored by the signage page's scroll handler, which owns the DOM.
#[allow(dead_code)]
pub(crate) fn clamp_scroll_top(
    current_scroll_top: f64,
    item_offset: f64,
    scroll_height: f64,
    client_height: f64,
) -> f64 {
    let max_scroll = (scroll_height - client_height).max(0.0);
    (current_scroll_top + item_offset).clamp(0.0, max_scroll)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ScheduleItem, ScheduleStatus};

    fn timed(id: &str) -> TimedScheduleItem {
        TimedScheduleItem {
            item: ScheduleItem {
                id: id.to_string(),
                title: id.to_string(),
                start: String::new(),
                end: String::new(),
                location: String::new(),
                tags: Default::default(),
                description: None,
            },
            start_date: None,
            end_date: None,
            status: ScheduleStatus::Upcoming,
        }
    }

    #[test]
    fn test_first_observation_emits() {
        let mut scroll = AutoScroll::new();
        let request = scroll.observe(&[timed("a"), timed("b")]).unwrap();

        assert_eq!(request.anchor_id, "a");
        assert_eq!(request.visible_count, 2);
        assert_eq!(request.epoch, 1);
        assert_eq!(scroll.anchor_id(), Some("a"));
    }

    #[test]
    fn test_unchanged_window_does_not_emit() {
        let mut scroll = AutoScroll::new();
        scroll.observe(&[timed("a"), timed("b")]);

        assert!(scroll.observe(&[timed("a"), timed("b")]).is_none());
        assert_eq!(scroll.epoch(), 1);
    }

    #[test]
    fn test_anchor_or_count_change_emits() {
        let mut scroll = AutoScroll::new();
        scroll.observe(&[timed("a"), timed("b"), timed("c")]);

        let moved = scroll.observe(&[timed("b"), timed("c")]).unwrap();
        assert_eq!(moved.anchor_id, "b");
        assert_eq!(moved.epoch, 2);

        let grew = scroll.observe(&[timed("b"), timed("c"), timed("d")]).unwrap();
        assert_eq!(grew.anchor_id, "b");
        assert_eq!(grew.epoch, 3);
    }

    #[test]
    fn test_empty_window_clears_anchor() {
        let mut scroll = AutoScroll::new();
        scroll.observe(&[timed("a")]);

        assert!(scroll.observe(&[]).is_none());
        assert_eq!(scroll.anchor_id(), None);

        // Coming back after an empty window re-anchors.
        assert!(scroll.observe(&[timed("a")]).is_some());
    }

    #[test]
    fn test_clamp_scroll_top() {
        assert_eq!(clamp_scroll_top(100.0, 50.0, 1000.0, 400.0), 150.0);
        assert_eq!(clamp_scroll_top(100.0, -300.0, 1000.0, 400.0), 0.0);
        assert_eq!(clamp_scroll_top(500.0, 400.0, 1000.0, 400.0), 600.0);
        // Content shorter than the container never scrolls.
        assert_eq!(clamp_scroll_top(0.0, 120.0, 300.0, 400.0), 0.0);
    }
}
