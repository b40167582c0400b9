//! Sponsor tier partitioning.

use crate::models::{Sponsor, SponsorLevel};

/// Sponsors grouped into the four display tiers, each in input order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SponsorTiers {
    /// The single headline sponsor. Only the first `root` record is used.
    pub main_sponsor: Option<Sponsor>,
    pub admin: Vec<Sponsor>,
    pub user: Vec<Sponsor>,
    pub collaborator: Vec<Sponsor>,
}

/// Partition sponsors by level.
///
/// Additional `root` sponsors and unknown levels are dropped, not reassigned.
pub fn partition(sponsors: &[Sponsor]) -> SponsorTiers {
    let mut tiers = SponsorTiers::default();

    for sponsor in sponsors {
        match sponsor.level {
            SponsorLevel::Root if tiers.main_sponsor.is_none() => {
                tiers.main_sponsor = Some(sponsor.clone());
            }
            SponsorLevel::Root => {
                tracing::debug!("Ignoring additional root sponsor {}", sponsor.name);
            }
            SponsorLevel::Admin => tiers.admin.push(sponsor.clone()),
            SponsorLevel::User => tiers.user.push(sponsor.clone()),
            SponsorLevel::Collaborator => tiers.collaborator.push(sponsor.clone()),
            SponsorLevel::Unknown => {
                tracing::debug!("Sponsor {} has an unknown level", sponsor.name);
            }
        }
    }

    tiers
}
