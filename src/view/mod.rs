//! Display view assembly.
//!
//! Combines the latest snapshot with the current time into the single
//! document the signage page renders.

use chrono::{DateTime, FixedOffset, Utc};
use serde::Serialize;

use crate::cms::asset_url;
use crate::countdown::{countdown, format_clock, EventPhase};
use crate::models::{DisplaySnapshot, Sponsor, WifiInfo};
use crate::schedule::{active_index, classify, visible_window, AutoScroll, TimedScheduleItem};
use crate::sponsors::partition;

/// Everything the screen shows at one instant.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayView {
    pub clock: String,
    pub countdown: String,
    pub phase: EventPhase,
    pub loading: bool,
    pub schedule: ScheduleView,
    pub sponsors: SponsorView,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wifi: Option<WifiInfo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub announcement: Option<AnnouncementView>,
    pub generated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleView {
    pub items: Vec<TimedScheduleItem>,
    /// Item to highlight, chosen over the full sorted schedule.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active_id: Option<String>,
    /// Item the list should be scrolled to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub anchor_id: Option<String>,
    /// Bumped each time the anchor changes; the page scrolls only on change.
    pub scroll_epoch: u64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SponsorCard {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    /// Empty when the sponsor has no logo.
    pub logo_url: String,
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SponsorView {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub main_sponsor: Option<SponsorCard>,
    pub admin: Vec<SponsorCard>,
    pub user: Vec<SponsorCard>,
    pub collaborator: Vec<SponsorCard>,
}

#[derive(Debug, Clone, Serialize)]
pub struct AnnouncementView {
    /// Markdown source; rendering is left to the page.
    pub content: String,
}

/// Inputs for [`build_view`] that are not part of the snapshot.
pub struct ViewContext<'a> {
    pub now: Option<DateTime<Utc>>,
    pub tz: &'a FixedOffset,
    pub asset_base: &'a str,
    pub loading: bool,
    pub scroll: &'a AutoScroll,
}

/// Build the display view. Pure apart from the `generated_at` stamp.
pub fn build_view(snapshot: &DisplaySnapshot, ctx: &ViewContext<'_>) -> DisplayView {
    let timed = classify(&snapshot.schedule, ctx.now, ctx.tz);
    let active_id = active_index(&timed, ctx.now).map(|index| timed[index].item.id.clone());
    let items = visible_window(&timed).to_vec();

    let countdown = countdown(snapshot.hacking_time.as_ref(), ctx.now, ctx.tz);

    DisplayView {
        clock: format_clock(ctx.now, ctx.tz),
        countdown: countdown.text,
        phase: countdown.phase,
        loading: ctx.loading,
        schedule: ScheduleView {
            items,
            active_id,
            anchor_id: ctx.scroll.anchor_id().map(str::to_string),
            scroll_epoch: ctx.scroll.epoch(),
        },
        sponsors: sponsor_view(&snapshot.sponsors, ctx.asset_base),
        wifi: snapshot.wifi.clone(),
        announcement: snapshot
            .announcement
            .as_ref()
            .and_then(|a| a.displayable_content())
            .map(|content| AnnouncementView {
                content: content.to_string(),
            }),
        generated_at: Utc::now(),
    }
}

fn sponsor_view(sponsors: &[Sponsor], asset_base: &str) -> SponsorView {
    let tiers = partition(sponsors);
    let card = |sponsor: &Sponsor| SponsorCard {
        id: sponsor.id.clone(),
        name: sponsor.name.clone(),
        link: sponsor.link.clone(),
        logo_url: asset_url(asset_base, sponsor.logo.as_deref()),
    };

    SponsorView {
        main_sponsor: tiers.main_sponsor.as_ref().map(card),
        admin: tiers.admin.iter().map(card).collect(),
        user: tiers.user.iter().map(card).collect(),
        collaborator: tiers.collaborator.iter().map(card).collect(),
    }
}
