//! Wi-Fi credentials singleton.

use serde::{Deserialize, Serialize};

/// Network credentials displayed to attendees.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WifiInfo {
    #[serde(deserialize_with = "super::id_from_string_or_number")]
    pub id: String,
    #[serde(default, deserialize_with = "super::string_or_empty")]
    pub ssid: String,
    #[serde(default, deserialize_with = "super::string_or_empty")]
    pub password: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_singleton_id() {
        let wifi: WifiInfo = serde_json::from_value(serde_json::json!({
            "id": 1,
            "ssid": "hackathon",
            "password": "hunter2"
        }))
        .unwrap();

        assert_eq!(wifi.id, "1");
    }
}
