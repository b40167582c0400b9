//! Hacking window singleton.

use serde::{Deserialize, Serialize};

/// Start and end of the event's hacking period.
///
/// Endpoints are raw CMS timestamps; the countdown formatter parses them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HackingTime {
    #[serde(deserialize_with = "super::id_from_string_or_number")]
    pub id: String,
    #[serde(default, deserialize_with = "super::string_or_empty")]
    pub start: String,
    #[serde(default, deserialize_with = "super::string_or_empty")]
    pub end: String,
}
