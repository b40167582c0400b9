//! Sponsor model matching the CMS `sponsors` collection.

use serde::{Deserialize, Deserializer, Serialize};

/// Sponsorship tier controlling visual grouping.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SponsorLevel {
    Root,
    Admin,
    User,
    Collaborator,
    /// Any level string the kiosk does not know how to place.
    #[default]
    #[serde(other)]
    Unknown,
}

/// A `null` level places the sponsor nowhere.
fn level_or_unknown<'de, D>(deserializer: D) -> Result<SponsorLevel, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<SponsorLevel>::deserialize(deserializer)?.unwrap_or_default())
}

/// A sponsor shown in the logo wall.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Sponsor {
    #[serde(deserialize_with = "super::id_from_string_or_number")]
    pub id: String,
    #[serde(default, deserialize_with = "super::string_or_empty")]
    pub name: String,
    #[serde(default, deserialize_with = "level_or_unknown")]
    pub level: SponsorLevel,
    #[serde(default)]
    pub link: Option<String>,
    /// Asset identifier of the logo, resolved via the asset URL resolver.
    #[serde(default)]
    pub logo: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_level() {
        let sponsor: Sponsor = serde_json::from_value(serde_json::json!({
            "id": "s1",
            "name": "Acme",
            "level": "platinum"
        }))
        .unwrap();

        assert_eq!(sponsor.level, SponsorLevel::Unknown);
        assert!(sponsor.logo.is_none());
    }

    #[test]
    fn test_null_fields_in_collection() {
        let sponsors: Vec<Sponsor> = serde_json::from_value(serde_json::json!([
            { "id": 1, "name": "Acme", "level": "root" },
            { "id": 2, "name": null, "level": null, "link": null, "logo": null }
        ]))
        .unwrap();

        assert_eq!(sponsors.len(), 2);
        assert_eq!(sponsors[1].name, "");
        assert_eq!(sponsors[1].level, SponsorLevel::Unknown);
    }
}
