//! Chat list controller
//!
//! Load guard, filtering and unread aggregation over the role-keyed
//! roster. Loading without a session redirects to root and yields no
//! controller; that instance is done.

use brainbuddy_core::{Navigator, Route, UserProfile};
use session_store::{KeyValueStore, Result, SessionRepository};

use crate::samples;
use crate::summary::ChatSummary;

pub struct ChatListController {
    user_type: String,
    profile: UserProfile,
    roster: Vec<ChatSummary>,
    query: String,
}

impl ChatListController {
    /// Read the session and build the list. When no complete session
    /// exists, navigates to root and returns `None` - no further work
    /// happens for this instance.
    pub async fn load<S: KeyValueStore>(
        sessions: &SessionRepository<S>,
        navigator: &dyn Navigator,
    ) -> Result<Option<Self>> {
        let Some(record) = sessions.load().await? else {
            tracing::debug!("no session; redirecting to root");
            navigator.navigate(Route::Root);
            return Ok(None);
        };

        let roster = samples::roster_for(&record.user_type);
        tracing::debug!(
            user_type = %record.user_type,
            entries = roster.len(),
            "chat list loaded"
        );

        Ok(Some(Self {
            user_type: record.user_type,
            profile: record.profile,
            roster,
            query: String::new(),
        }))
    }

    pub fn user_type(&self) -> &str {
        &self.user_type
    }

    pub fn profile(&self) -> &UserProfile {
        &self.profile
    }

    /// The full, unfiltered roster.
    pub fn roster(&self) -> &[ChatSummary] {
        &self.roster
    }

    /// The dashboard route for the session's role, when recognized.
    pub fn dashboard_route(&self) -> Option<Route> {
        brainbuddy_core::UserRole::parse(&self.user_type).map(Route::dashboard_for)
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    /// Entries matching the active query. Pure and idempotent; rerun on
    /// every keystroke.
    pub fn filtered(&self) -> Vec<&ChatSummary> {
        self.roster.iter().filter(|c| c.matches(&self.query)).collect()
    }

    /// Unread total over the unfiltered roster; the active filter does
    /// not affect it.
    pub fn total_unread(&self) -> u32 {
        self.roster.iter().map(|c| c.unread).sum()
    }

    /// Clear the session and navigate to root, unconditionally.
    pub async fn logout<S: KeyValueStore>(
        sessions: &SessionRepository<S>,
        navigator: &dyn Navigator,
    ) -> Result<()> {
        sessions.clear().await?;
        navigator.navigate(Route::Root);
        tracing::info!("logged out");
        Ok(())
    }
}
