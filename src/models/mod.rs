//! Data models for the hackathon kiosk.
//!
//! These models mirror the CMS collections and singletons the kiosk reads.

mod announcement;
mod hacking_time;
mod schedule;
mod snapshot;
mod sponsor;
mod wifi;

pub use announcement::*;
pub use hacking_time::*;
pub use schedule::*;
pub use snapshot::*;
pub use sponsor::*;
pub use wifi::*;

use serde::{Deserialize, Deserializer};

/// CMS primary keys are either strings (UUIDs) or auto-increment integers.
pub(crate) fn id_from_string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Text(String),
        Number(i64),
    }

    Ok(match RawId::deserialize(deserializer)? {
        RawId::Text(text) => text,
        RawId::Number(number) => number.to_string(),
    })
}

/// CMS text fields arrive as `null` when unset.
pub(crate) fn string_or_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// CMS boolean fields arrive as `null` when unset.
pub(crate) fn bool_or_false<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<bool>::deserialize(deserializer)?.unwrap_or_default())
}
