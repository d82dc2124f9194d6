//! Completion events for the two background fetches. Both fetches run as
//! detached tasks with no ordering guarantee between them; user events
//! carry the uid they were issued for so stale completions can be dropped.

use crate::models::{SiteStats, UserStats};

#[derive(Debug)]
pub enum StatsEvent {
    SiteLoaded(SiteStats),
    SiteFailed(String),
    UserLoaded { uid: u64, stats: UserStats },
    UserFailed { uid: u64, error: String },
}
