//! Schedule item model matching the CMS `schedule` collection.

use std::collections::BTreeSet;

use serde::{Deserialize, Deserializer, Serialize};

/// A single entry of the event schedule.
///
/// `start` and `end` are kept as the raw strings the CMS sent and parsed by
/// the schedule classifier. Unset text fields decode as empty strings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleItem {
    #[serde(deserialize_with = "super::id_from_string_or_number")]
    pub id: String,
    #[serde(default, deserialize_with = "super::string_or_empty")]
    pub title: String,
    #[serde(default, deserialize_with = "super::string_or_empty")]
    pub start: String,
    #[serde(default, deserialize_with = "super::string_or_empty")]
    pub end: String,
    #[serde(default, deserialize_with = "super::string_or_empty")]
    pub location: String,
    #[serde(default, deserialize_with = "tags_or_empty")]
    pub tags: BTreeSet<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Position of a schedule item relative to the current time.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ScheduleStatus {
    Past,
    Live,
    Upcoming,
}

/// CMS tag fields are nullable JSON arrays.
fn tags_or_empty<'de, D>(deserializer: D) -> Result<BTreeSet<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let tags: Option<Vec<String>> = Option::deserialize(deserializer)?;
    Ok(tags.unwrap_or_default().into_iter().collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_null_tags() {
        let item: ScheduleItem = serde_json::from_value(serde_json::json!({
            "id": "1",
            "title": "Opening",
            "start": "2024-05-01T10:00:00",
            "end": "2024-05-01T11:00:00",
            "location": "Main hall",
            "tags": null
        }))
        .unwrap();

        assert!(item.tags.is_empty());
        assert!(item.description.is_none());
    }

    #[test]
    fn test_deserialize_duplicate_tags() {
        let item: ScheduleItem = serde_json::from_value(serde_json::json!({
            "id": "1",
            "title": "Lunch",
            "start": "2024-05-01T12:00:00",
            "end": "2024-05-01T13:00:00",
            "tags": ["food", "break", "food"]
        }))
        .unwrap();

        assert_eq!(item.tags.len(), 2);
        assert_eq!(item.location, "");
    }

    #[test]
    fn test_null_fields_in_collection() {
        let items: Vec<ScheduleItem> = serde_json::from_value(serde_json::json!([
            {
                "id": 1,
                "title": "Opening",
                "start": "2024-05-01T10:00:00",
                "end": "2024-05-01T11:00:00",
                "location": "Main hall"
            },
            {
                "id": 2,
                "title": null,
                "start": "2024-05-01T11:00:00",
                "end": null,
                "location": null,
                "tags": null,
                "description": null
            }
        ]))
        .unwrap();

        assert_eq!(items.len(), 2);
        assert_eq!(items[1].title, "");
        assert_eq!(items[1].end, "");
        assert_eq!(items[1].location, "");
    }
}
