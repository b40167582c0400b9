//! Content-management backend access.
//!
//! The CMS is the source of truth for everything the kiosk shows. It is read
//! through the [`ContentSource`] trait so the poller can run against fakes.

mod assets;
mod client;

pub use assets::*;
pub use client::*;

use async_trait::async_trait;

use crate::errors::AppError;
use crate::models::{AnnouncementInfo, HackingTime, ScheduleItem, Sponsor, WifiInfo};

/// Read access to the five resources the kiosk displays.
#[async_trait]
pub trait ContentSource: Send + Sync {
    /// All sponsors, in CMS order.
    async fn sponsors(&self) -> Result<Vec<Sponsor>, AppError>;

    /// All schedule items, requested sorted by start.
    async fn schedule(&self) -> Result<Vec<ScheduleItem>, AppError>;

    async fn wifi(&self) -> Result<Option<WifiInfo>, AppError>;

    async fn hacking_time(&self) -> Result<Option<HackingTime>, AppError>;

    async fn announcement(&self) -> Result<Option<AnnouncementInfo>, AppError>;
}
