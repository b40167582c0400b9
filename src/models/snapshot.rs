//! In-memory snapshot of everything the kiosk displays.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{AnnouncementInfo, HackingTime, ScheduleItem, Sponsor, WifiInfo};

/// The result of one poll cycle. Replaced wholesale, never merged.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DisplaySnapshot {
    pub sponsors: Vec<Sponsor>,
    pub schedule: Vec<ScheduleItem>,
    pub wifi: Option<WifiInfo>,
    pub hacking_time: Option<HackingTime>,
    pub announcement: Option<AnnouncementInfo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fetched_at: Option<DateTime<Utc>>,
}
