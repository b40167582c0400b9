//! Announcement banner singleton.

use serde::{Deserialize, Serialize};

/// Banner text shown across the top of the screen.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AnnouncementInfo {
    #[serde(deserialize_with = "super::id_from_string_or_number")]
    pub id: String,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default, deserialize_with = "super::bool_or_false")]
    pub visible: bool,
}

impl AnnouncementInfo {
    /// Shown only when switched on and carrying non-empty content.
    pub fn displayable_content(&self) -> Option<&str> {
        if !self.visible {
            return None;
        }
        self.content.as_deref().filter(|c| !c.trim().is_empty())
    }
}
