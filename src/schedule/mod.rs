//! Schedule classification.
//!
//! Turns raw CMS schedule records into time-relative, sorted view records and
//! picks the item the schedule list should be anchored on.

mod scroll;
mod timestamp;

pub use scroll::*;
pub use timestamp::*;

use std::cmp::Ordering;

use chrono::{DateTime, FixedOffset, Utc};
use serde::Serialize;

use crate::models::{ScheduleItem, ScheduleStatus};

/// A schedule item with parsed endpoints and its status at a given time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimedScheduleItem {
    #[serde(flatten)]
    pub item: ScheduleItem,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
    pub status: ScheduleStatus,
}

/// Status of a time window at `now`.
///
/// An unavailable `now` means every item is upcoming. An unparseable endpoint
/// never satisfies a comparison.
pub fn status_at(
    start: Option<DateTime<Utc>>,
    end: Option<DateTime<Utc>>,
    now: Option<DateTime<Utc>>,
) -> ScheduleStatus {
    let Some(now) = now else {
        return ScheduleStatus::Upcoming;
    };

    match (start, end) {
        (_, Some(end)) if now >= end => ScheduleStatus::Past,
        (Some(start), Some(end)) if start <= now && now < end => ScheduleStatus::Live,
        _ => ScheduleStatus::Upcoming,
    }
}

/// Classify and sort schedule items ascending by start.
///
/// Items whose start cannot be parsed sort after every valid one.
pub fn classify(
    items: &[ScheduleItem],
    now: Option<DateTime<Utc>>,
    tz: &FixedOffset,
) -> Vec<TimedScheduleItem> {
    let mut timed: Vec<TimedScheduleItem> = items
        .iter()
        .map(|item| {
            let start_date = parse_timestamp(&item.start, tz);
            let end_date = parse_timestamp(&item.end, tz);
            if start_date.is_none() || end_date.is_none() {
                tracing::debug!("Schedule item {} has an unparseable time window", item.id);
            }
            TimedScheduleItem {
                item: item.clone(),
                start_date,
                end_date,
                status: status_at(start_date, end_date, now),
            }
        })
        .collect();

    timed.sort_by(|a, b| match (a.start_date, b.start_date) {
        (Some(a), Some(b)) => a.cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    });

    timed
}

/// Index of the item the schedule should be anchored on.
///
/// The first live item wins, then the soonest upcoming one, then the last
/// item. `None` only for an empty list or an unavailable `now`.
pub fn active_index(items: &[TimedScheduleItem], now: Option<DateTime<Utc>>) -> Option<usize> {
    let now = now?;
    if items.is_empty() {
        return None;
    }

    items
        .iter()
        .position(|item| item.status == ScheduleStatus::Live)
        .or_else(|| {
            items
                .iter()
                .position(|item| item.start_date.is_some_and(|start| start > now))
        })
        .or(Some(items.len() - 1))
}

/// The displayed suffix of the schedule: everything from the first item that
/// is not past. Only the leading run of past items is dropped.
pub fn visible_window(items: &[TimedScheduleItem]) -> &[TimedScheduleItem] {
    match items
        .iter()
        .position(|item| item.status != ScheduleStatus::Past)
    {
        Some(first) => &items[first..],
        None => &[],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn utc() -> FixedOffset {
        FixedOffset::east_opt(0).unwrap()
    }

    fn at(hour: u32, minute: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 1, hour, minute, 0).unwrap()
    }

    fn item(id: &str, start: &str, end: &str) -> ScheduleItem {
        ScheduleItem {
            id: id.to_string(),
            title: format!("Session {}", id),
            start: start.to_string(),
            end: end.to_string(),
            location: "Main hall".to_string(),
            tags: Default::default(),
            description: None,
        }
    }

    fn day() -> Vec<ScheduleItem> {
        vec![
            item("lunch", "2024-05-01T12:00:00", "2024-05-01T13:00:00"),
            item("opening", "2024-05-01T09:00:00", "2024-05-01T10:00:00"),
            item("demo", "2024-05-01T16:00:00", "2024-05-01T17:00:00"),
            item("workshop", "2024-05-01T10:00:00", "2024-05-01T12:00:00"),
        ]
    }

    fn ids(items: &[TimedScheduleItem]) -> Vec<&str> {
        items.iter().map(|i| i.item.id.as_str()).collect()
    }

    #[test]
    fn test_status_boundaries() {
        let (start, end) = (Some(at(10, 0)), Some(at(11, 0)));

        assert_eq!(status_at(start, end, Some(at(9, 59))), ScheduleStatus::Upcoming);
        assert_eq!(status_at(start, end, Some(at(10, 0))), ScheduleStatus::Live);
        assert_eq!(status_at(start, end, Some(at(10, 59))), ScheduleStatus::Live);
        assert_eq!(status_at(start, end, Some(at(11, 0))), ScheduleStatus::Past);
        assert_eq!(status_at(start, end, None), ScheduleStatus::Upcoming);
    }

    #[test]
    fn test_status_with_unparseable_endpoints() {
        let now = Some(at(12, 0));

        assert_eq!(status_at(None, None, now), ScheduleStatus::Upcoming);
        assert_eq!(status_at(Some(at(10, 0)), None, now), ScheduleStatus::Upcoming);
        assert_eq!(status_at(None, Some(at(11, 0)), now), ScheduleStatus::Past);
        assert_eq!(status_at(None, Some(at(13, 0)), now), ScheduleStatus::Upcoming);
    }

    #[test]
    fn test_classify_sorts_by_start() {
        let timed = classify(&day(), Some(at(11, 0)), &utc());

        assert_eq!(ids(&timed), vec!["opening", "workshop", "lunch", "demo"]);
        let statuses: Vec<_> = timed.iter().map(|i| i.status).collect();
        assert_eq!(
            statuses,
            vec![
                ScheduleStatus::Past,
                ScheduleStatus::Live,
                ScheduleStatus::Upcoming,
                ScheduleStatus::Upcoming,
            ]
        );
    }

    #[test]
    fn test_classify_without_now_is_all_upcoming() {
        let timed = classify(&day(), None, &utc());

        assert!(timed.iter().all(|i| i.status == ScheduleStatus::Upcoming));
        assert_eq!(active_index(&timed, None), None);
    }

    #[test]
    fn test_classify_puts_unparseable_start_last() {
        let mut items = day();
        items.insert(0, item("broken", "soon", "later"));

        let timed = classify(&items, Some(at(11, 0)), &utc());

        assert_eq!(timed.last().unwrap().item.id, "broken");
        assert_eq!(timed.last().unwrap().status, ScheduleStatus::Upcoming);
    }

    #[test]
    fn test_active_index_prefers_live() {
        let timed = classify(&day(), Some(at(12, 30)), &utc());

        assert_eq!(active_index(&timed, Some(at(12, 30))), Some(2));
        assert_eq!(timed[2].item.id, "lunch");
    }

    #[test]
    fn test_active_index_falls_back_to_next_upcoming() {
        let now = Some(at(14, 0));
        let timed = classify(&day(), now, &utc());

        assert_eq!(active_index(&timed, now), Some(3));
        assert_eq!(timed[3].item.id, "demo");
    }

    #[test]
    fn test_active_index_all_past_is_last() {
        let now = Some(at(20, 0));
        let timed = classify(&day(), now, &utc());

        assert!(timed.iter().all(|i| i.status == ScheduleStatus::Past));
        assert_eq!(active_index(&timed, now), Some(3));
    }

    #[test]
    fn test_active_index_empty() {
        assert_eq!(active_index(&[], Some(at(12, 0))), None);
    }

    #[test]
    fn test_visible_window_drops_leading_past() {
        let timed = classify(&day(), Some(at(12, 30)), &utc());

        assert_eq!(ids(visible_window(&timed)), vec!["lunch", "demo"]);
    }

    #[test]
    fn test_visible_window_keeps_interleaved_past() {
        // A long-running item that started early keeps a later, already
        // finished item on screen.
        let items = vec![
            item("hacking", "2024-05-01T09:00:00", "2024-05-01T21:00:00"),
            item("checkin", "2024-05-01T09:30:00", "2024-05-01T10:00:00"),
            item("dinner", "2024-05-01T18:00:00", "2024-05-01T19:00:00"),
        ];
        let timed = classify(&items, Some(at(11, 0)), &utc());

        assert_eq!(timed[1].status, ScheduleStatus::Past);
        assert_eq!(ids(visible_window(&timed)), vec!["hacking", "checkin", "dinner"]);
    }

    #[test]
    fn test_visible_window_all_past_is_empty() {
        let timed = classify(&day(), Some(at(23, 0)), &utc());

        assert!(visible_window(&timed).is_empty());
    }
}
