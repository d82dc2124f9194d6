use std::time::{Duration, Instant};

use sefstats_core::config::CoreConfig;
use sefstats_core::events::StatsEvent;
use sefstats_core::models::{ActivitySummary, SiteStats, TimeMode, UserStats};

use crate::ui::i18n::InterfaceLang;

/// Quiet period after the last user-id keystroke before a fetch goes out.
pub const UID_DEBOUNCE: Duration = Duration::from_millis(500);

/// Lifecycle of one fetched snapshot. Failures are explicit so the view can
/// offer a retry instead of spinning forever.
#[derive(Debug, Clone)]
pub enum FetchState<T> {
    Loading,
    Loaded(T),
    Failed(String),
}

impl<T> FetchState<T> {
    pub fn value(&self) -> Option<&T> {
        match self {
            FetchState::Loaded(value) => Some(value),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            FetchState::Failed(message) => Some(message),
            _ => None,
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, FetchState::Failed(_))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum InputMode {
    Normal,
    Editing,
}

/// Which fetches a retry request should reissue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RefetchRequest {
    pub site: bool,
    pub user: bool,
}

/// Top-level application state. Owns both snapshots and the active mode;
/// views and chart widgets only ever borrow from here.
pub struct App {
    pub running: bool,
    pub pending_quit: bool,
    pub config: CoreConfig,
    pub moderator: bool,
    pub lang: InterfaceLang,
    pub mode: TimeMode,
    pub input_mode: InputMode,
    pub uid_input: String,
    pub site: FetchState<SiteStats>,
    pub user: FetchState<UserStats>,
    pub last_updated: Option<chrono::DateTime<chrono::Local>>,
    requested_uid: u64,
    uid_commit_deadline: Option<Instant>,
    refetch_requested: bool,
    frame: u64,
}

impl App {
    pub fn new(config: CoreConfig, moderator: bool, lang: InterfaceLang) -> Self {
        let requested_uid = config.viewer_uid;
        Self {
            running: true,
            pending_quit: false,
            config,
            moderator,
            lang,
            mode: TimeMode::default(),
            input_mode: InputMode::Normal,
            uid_input: String::new(),
            site: FetchState::Loading,
            user: FetchState::Loading,
            last_updated: None,
            requested_uid,
            uid_commit_deadline: None,
            refetch_requested: false,
            frame: 0,
        }
    }

    pub fn quit(&mut self) {
        self.running = false;
    }

    pub fn tick(&mut self) {
        self.frame = self.frame.wrapping_add(1);
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// The uid the most recent user fetch was issued for. Completions for
    /// any other uid are stale and dropped.
    pub fn requested_uid(&self) -> u64 {
        self.requested_uid
    }

    pub fn set_mode(&mut self, mode: TimeMode) {
        self.mode = mode;
    }

    pub fn next_mode(&mut self) {
        self.mode = self.mode.next();
    }

    pub fn prev_mode(&mut self) {
        self.mode = self.mode.prev();
    }

    /// Reschedule the debounce deadline after a user-id keystroke. Any
    /// previously pending commit is superseded.
    pub fn schedule_uid_commit(&mut self, now: Instant) {
        self.uid_commit_deadline = Some(now + UID_DEBOUNCE);
    }

    /// Commit on the next poll without waiting out the debounce (Enter).
    pub fn commit_uid_now(&mut self, now: Instant) {
        self.uid_commit_deadline = Some(now);
    }

    /// Drop any pending commit (Esc leaves the input).
    pub fn cancel_uid_commit(&mut self) {
        self.uid_commit_deadline = None;
    }

    /// Check the debounce deadline. When due, resolve the typed id (empty
    /// input falls back to the viewer's own id) and start a user fetch;
    /// the caller spawns the actual request for the returned uid. Invalid
    /// input lands in `Failed` the same way a doomed network call would.
    pub fn poll_uid_commit(&mut self, now: Instant) -> Option<u64> {
        let deadline = self.uid_commit_deadline?;
        if now < deadline {
            return None;
        }
        self.uid_commit_deadline = None;

        let input = self.uid_input.trim();
        let uid = if input.is_empty() {
            self.config.viewer_uid
        } else {
            match input.parse::<u64>() {
                Ok(uid) => uid,
                Err(_) => {
                    self.user = FetchState::Failed(format!("not a valid user id: {input}"));
                    return None;
                }
            }
        };

        self.begin_user_fetch(uid);
        Some(uid)
    }

    /// Clear the current user snapshot and record the uid a new fetch is
    /// being issued for.
    pub fn begin_user_fetch(&mut self, uid: u64) {
        self.requested_uid = uid;
        self.user = FetchState::Loading;
    }

    pub fn begin_site_fetch(&mut self) {
        self.site = FetchState::Loading;
    }

    pub fn apply_event(&mut self, event: StatsEvent) {
        match event {
            StatsEvent::SiteLoaded(stats) => {
                self.site = FetchState::Loaded(stats);
                self.last_updated = Some(chrono::Local::now());
            }
            StatsEvent::SiteFailed(error) => {
                self.site = FetchState::Failed(error);
            }
            StatsEvent::UserLoaded { uid, stats } => {
                if uid != self.requested_uid {
                    tracing::debug!(uid, requested = self.requested_uid, "dropping stale user stats");
                    return;
                }
                self.user = FetchState::Loaded(stats);
                self.last_updated = Some(chrono::Local::now());
            }
            StatsEvent::UserFailed { uid, error } => {
                if uid != self.requested_uid {
                    return;
                }
                self.user = FetchState::Failed(error);
            }
        }
    }

    pub fn request_refetch(&mut self) {
        self.refetch_requested = true;
    }

    /// Consume a pending retry request; only failed fetches are reissued.
    pub fn take_refetch(&mut self) -> Option<RefetchRequest> {
        if !self.refetch_requested {
            return None;
        }
        self.refetch_requested = false;
        let request = RefetchRequest {
            site: self.site.is_failed(),
            user: self.user.is_failed(),
        };
        if request.site || request.user {
            Some(request)
        } else {
            None
        }
    }

    /// The dashboard body renders only once both snapshots carry the
    /// active window.
    pub fn is_ready(&self) -> bool {
        let user_ready = self
            .user
            .value()
            .map(|u| u.is_ready(self.mode))
            .unwrap_or(false);
        let site_ready = self
            .site
            .value()
            .map(|s| s.is_ready(self.mode))
            .unwrap_or(false);
        user_ready && site_ready
    }

    pub fn user_summary(&self) -> Option<&ActivitySummary> {
        self.user.value().and_then(|u| u.period(self.mode))
    }

    pub fn site_summary(&self) -> Option<&ActivitySummary> {
        self.site.value().and_then(|s| s.period(self.mode))
    }

    pub fn heading_name(&self) -> Option<&str> {
        self.user.value().and_then(|u| u.name.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_user(uid: u64) -> UserStats {
        serde_json::from_value(json!({
            "uid": uid,
            "name": "Reader",
            "this_hebrew_year": {"textsRead": 10, "categoriesRead": {"Tanakh": 5.0}},
            "alltime": {"textsRead": 100, "categoriesRead": {"Tanakh": 50.0}}
        }))
        .unwrap()
    }

    fn sample_site() -> SiteStats {
        serde_json::from_value(json!({
            "this_hebrew_year": {"textsRead": 1000, "categoriesRead": {"Tanakh": 600.0}},
            "alltime": {"textsRead": 9000, "categoriesRead": {"Tanakh": 5000.0}}
        }))
        .unwrap()
    }

    fn test_app() -> App {
        App::new(
            CoreConfig::new("https://example.org", 11),
            true,
            InterfaceLang::English,
        )
    }

    #[test]
    fn test_debounce_waits_out_quiet_period() {
        let mut app = test_app();
        app.uid_input = "42".to_string();

        let t0 = Instant::now();
        app.schedule_uid_commit(t0);

        assert_eq!(app.poll_uid_commit(t0 + Duration::from_millis(300)), None);
        assert_eq!(app.poll_uid_commit(t0 + UID_DEBOUNCE), Some(42));
        assert_eq!(app.requested_uid(), 42);
        // Deadline is consumed.
        assert_eq!(app.poll_uid_commit(t0 + Duration::from_secs(5)), None);
    }

    #[test]
    fn test_new_keystroke_supersedes_pending_commit() {
        let mut app = test_app();
        app.uid_input = "4".to_string();

        let t0 = Instant::now();
        app.schedule_uid_commit(t0);
        app.uid_input.push('2');
        app.schedule_uid_commit(t0 + Duration::from_millis(200));

        // The first deadline no longer fires.
        assert_eq!(app.poll_uid_commit(t0 + UID_DEBOUNCE), None);
        assert_eq!(
            app.poll_uid_commit(t0 + Duration::from_millis(200) + UID_DEBOUNCE),
            Some(42)
        );
    }

    #[test]
    fn test_empty_input_falls_back_to_viewer_uid() {
        let mut app = test_app();
        let t0 = Instant::now();
        app.commit_uid_now(t0);
        assert_eq!(app.poll_uid_commit(t0), Some(11));
    }

    #[test]
    fn test_invalid_input_fails_like_a_bad_fetch() {
        let mut app = test_app();
        app.uid_input = "abc".to_string();
        let t0 = Instant::now();
        app.commit_uid_now(t0);
        assert_eq!(app.poll_uid_commit(t0), None);
        assert!(app.user.is_failed());
    }

    #[test]
    fn test_stale_user_completion_is_dropped() {
        let mut app = test_app();
        app.begin_user_fetch(5);

        app.apply_event(StatsEvent::UserLoaded {
            uid: 3,
            stats: sample_user(3),
        });
        assert!(app.user.value().is_none());

        app.apply_event(StatsEvent::UserLoaded {
            uid: 5,
            stats: sample_user(5),
        });
        assert_eq!(app.user.value().unwrap().uid, Some(5));
    }

    #[test]
    fn test_readiness_requires_both_snapshots() {
        let mut app = test_app();
        assert!(!app.is_ready());

        app.apply_event(StatsEvent::SiteLoaded(sample_site()));
        assert!(!app.is_ready());

        app.apply_event(StatsEvent::UserLoaded {
            uid: 11,
            stats: sample_user(11),
        });
        assert!(app.is_ready());
        assert_eq!(app.heading_name(), Some("Reader"));

        // Both windows are present, so switching modes stays ready.
        app.next_mode();
        assert!(app.is_ready());
    }

    #[test]
    fn test_refetch_only_covers_failures() {
        let mut app = test_app();
        app.request_refetch();
        // Nothing has failed yet; loading fetches are already in flight.
        assert_eq!(app.take_refetch(), None);

        app.apply_event(StatsEvent::SiteFailed("boom".to_string()));
        app.request_refetch();
        assert_eq!(
            app.take_refetch(),
            Some(RefetchRequest {
                site: true,
                user: false
            })
        );
        // Consumed.
        assert_eq!(app.take_refetch(), None);
    }

    #[test]
    fn test_mode_selection() {
        let mut app = test_app();
        assert_eq!(app.mode, TimeMode::YearToDate);
        app.next_mode();
        assert_eq!(app.mode, TimeMode::AllTime);
        app.prev_mode();
        assert_eq!(app.mode, TimeMode::YearToDate);
        app.set_mode(TimeMode::AllTime);
        assert_eq!(app.mode, TimeMode::AllTime);
    }
}
