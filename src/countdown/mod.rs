//! Countdown and clock formatting.

use chrono::{DateTime, FixedOffset, Utc};
use serde::Serialize;

use crate::models::HackingTime;
use crate::schedule::parse_timestamp;

/// Shown when the window or the current time is unavailable.
pub const UNAVAILABLE: &str = "--:--:--";
/// Fixed placeholder shown before the event starts.
pub const BEFORE_START: &str = "36:00:00";
/// Shown once the event is over.
pub const FINISHED: &str = "00:00:00";
/// Clock text before the first tick.
pub const CLOCK_UNAVAILABLE: &str = "--:--";

/// Where the current time falls relative to the hacking window.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum EventPhase {
    Unknown,
    Before,
    Running,
    Finished,
}

/// Countdown text together with the phase it was derived from.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Countdown {
    pub text: String,
    pub phase: EventPhase,
}

impl Countdown {
    fn literal(text: &str, phase: EventPhase) -> Self {
        Self {
            text: text.to_string(),
            phase,
        }
    }
}

/// Compute the countdown to the end of the hacking window.
pub fn countdown(
    window: Option<&HackingTime>,
    now: Option<DateTime<Utc>>,
    tz: &FixedOffset,
) -> Countdown {
    let (Some(window), Some(now)) = (window, now) else {
        return Countdown::literal(UNAVAILABLE, EventPhase::Unknown);
    };

    let (Some(start), Some(end)) = (
        parse_timestamp(&window.start, tz),
        parse_timestamp(&window.end, tz),
    ) else {
        tracing::debug!("Hacking window {} has an unparseable endpoint", window.id);
        return Countdown::literal(UNAVAILABLE, EventPhase::Unknown);
    };

    if now < start {
        return Countdown::literal(BEFORE_START, EventPhase::Before);
    }
    if now >= end {
        return Countdown::literal(FINISHED, EventPhase::Finished);
    }

    let remaining = (end - now).num_milliseconds() / 1000;
    Countdown {
        text: format_hms(remaining),
        phase: EventPhase::Running,
    }
}

/// `HH:MM:SS` with unbounded hours.
fn format_hms(total_seconds: i64) -> String {
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;
    format!("{:02}:{:02}:{:02}", hours, minutes, seconds)
}

/// Wall clock as 24-hour `HH:MM` in the display timezone.
pub fn format_clock(now: Option<DateTime<Utc>>, tz: &FixedOffset) -> String {
    match now {
        Some(now) => now.with_timezone(tz).format("%H:%M").to_string(),
        None => CLOCK_UNAVAILABLE.to_string(),
    }
}
