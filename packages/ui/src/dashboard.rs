//! View state and handlers for the dashboard screen.
//!
//! The component in [`crate::views::Dashboard`] keeps a `Signal<DashboardState>` and
//! drives it through the functions here. A design fetch is split into
//! [`DashboardState::begin_fetch`] and [`DashboardState::finish_fetch`] so the state is
//! never borrowed across the await. The [`FetchTicket`] handed out by the first half is
//! how a late result for an older identity gets recognised and dropped.

use std::time::Duration;

use store::{Design, DesignKind, DesignQuery, DesignStore, StoreError, ViewMode};

use crate::auth::{AuthClient, AuthError};
use crate::toast::{Notifier, Toast};

/// Header tab.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ActiveTab {
    #[default]
    Designs,
    Templates,
    Ai,
}

impl ActiveTab {
    pub const ALL: [ActiveTab; 3] = [ActiveTab::Designs, ActiveTab::Templates, ActiveTab::Ai];

    pub fn label(self) -> &'static str {
        match self {
            ActiveTab::Designs => "📁 Your Saves",
            ActiveTab::Templates => "Help me design?",
            ActiveTab::Ai => "✨ Don AI",
        }
    }
}

/// Identity and sequence number a fetch was issued for.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FetchTicket {
    identity: Option<String>,
    generation: u64,
}

impl FetchTicket {
    pub fn identity(&self) -> Option<&str> {
        self.identity.as_deref()
    }

    pub fn query(&self) -> DesignQuery {
        DesignQuery::for_identity(self.identity())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FetchOutcome {
    Applied,
    Failed,
    /// The result belonged to a superseded fetch and was dropped.
    Discarded,
}

#[derive(Clone, Debug, PartialEq)]
pub struct DashboardState {
    pub active_tab: ActiveTab,
    pub view_mode: ViewMode,
    pub loading: bool,
    designs: Vec<Design>,
    identity: Option<String>,
    generation: u64,
}

impl Default for DashboardState {
    fn default() -> Self {
        Self::new(ViewMode::default())
    }
}

impl DashboardState {
    pub fn new(view_mode: ViewMode) -> Self {
        Self {
            active_tab: ActiveTab::default(),
            view_mode,
            loading: true,
            designs: Vec::new(),
            identity: None,
            generation: 0,
        }
    }

    /// The cached designs for the current identity.
    pub fn designs(&self) -> &[Design] {
        &self.designs
    }

    pub fn set_tab(&mut self, tab: ActiveTab) {
        self.active_tab = tab;
    }

    pub fn set_view_mode(&mut self, mode: ViewMode) {
        self.view_mode = mode;
    }

    /// Start a fetch for `identity`. Any fetch still in flight is superseded.
    pub fn begin_fetch(&mut self, identity: Option<String>) -> FetchTicket {
        self.generation += 1;
        self.identity = identity.clone();
        self.loading = true;
        tracing::debug!(generation = self.generation, ?identity, "fetching designs");
        FetchTicket {
            identity,
            generation: self.generation,
        }
    }

    /// Apply the result of the fetch `ticket` was issued for.
    pub fn finish_fetch<N: Notifier>(
        &mut self,
        ticket: FetchTicket,
        result: Result<Vec<Design>, StoreError>,
        notifier: &mut N,
    ) -> FetchOutcome {
        if ticket.generation != self.generation || ticket.identity != self.identity {
            tracing::debug!(
                generation = ticket.generation,
                current = self.generation,
                "discarding stale design fetch"
            );
            return FetchOutcome::Discarded;
        }

        self.loading = false;
        match result {
            Ok(designs) => {
                tracing::debug!(count = designs.len(), "designs loaded");
                self.designs = designs;
                FetchOutcome::Applied
            }
            Err(err) => {
                tracing::warn!("Failed to load designs: {}", err);
                self.designs.clear();
                notifier.notify(Toast::destructive("Failed to load designs").with_description(err.to_string()));
                FetchOutcome::Failed
            }
        }
    }
}

/// Fetch and apply in one step, for callers that can hold the state across the await.
pub async fn refresh<S: DesignStore, N: Notifier>(
    state: &mut DashboardState,
    store: &S,
    identity: Option<String>,
    notifier: &mut N,
) -> FetchOutcome {
    let ticket = state.begin_fetch(identity);
    let result = store.list_designs(&ticket.query()).await;
    state.finish_fetch(ticket, result, notifier)
}

/// Sign the current user out. The identity change re-triggers the design fetch.
pub async fn sign_out<A: AuthClient, N: Notifier>(auth: &A, notifier: &mut N) -> Result<(), AuthError> {
    match auth.sign_out().await {
        Ok(()) => {
            notifier.notify(Toast::new("Successfully signed out!").with_description("You have been logged out."));
            Ok(())
        }
        Err(err) => {
            tracing::warn!("Sign out failed: {}", err);
            notifier.notify(Toast::destructive("Sign out failed").with_description(err.to_string()));
            Err(err)
        }
    }
}

/// Controls that are shown but intentionally not wired to anything yet.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StubAction {
    Create,
    Home,
    Templates,
    Brand,
    Apps,
    Search,
    Filter,
    OpenDesign,
    MoreOptions,
    DesignShortcut(DesignKind),
}

pub const STUB_TITLE: &str =
    "🚧 This feature isn't implemented yet—but don't worry! You can request it in your next prompt! 🚀";
pub const STUB_DURATION: Duration = Duration::from_millis(3000);

impl StubAction {
    /// Every stub control on the dashboard, one shortcut per catalog entry.
    pub fn all() -> Vec<StubAction> {
        let mut actions = vec![
            StubAction::Create,
            StubAction::Home,
            StubAction::Templates,
            StubAction::Brand,
            StubAction::Apps,
            StubAction::Search,
            StubAction::Filter,
            StubAction::OpenDesign,
            StubAction::MoreOptions,
        ];
        actions.extend(DesignKind::ALL.into_iter().map(StubAction::DesignShortcut));
        actions
    }
}

/// Answer a stub control with the fixed "not implemented" toast.
pub fn trigger_stub<N: Notifier>(action: StubAction, notifier: &mut N) {
    tracing::debug!(?action, "unimplemented control");
    notifier.notify(Toast::new(STUB_TITLE).with_duration(STUB_DURATION));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::FakeAuth;
    use crate::toast::ToastQueue;
    use chrono::{TimeZone, Utc};
    use store::MemoryStore;

    fn design(id: &str, owner: Option<&str>) -> Design {
        Design {
            id: id.to_string(),
            user_id: owner.map(str::to_string),
            title: format!("Design {id}"),
            r#type: "Logo".to_string(),
            thumbnail_bg: "bg-purple-200".to_string(),
            is_private: owner.is_some(),
            last_edited_at: Some(Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).unwrap()),
        }
    }

    fn seeded_store() -> MemoryStore {
        MemoryStore::with_designs(vec![
            design("demo", None),
            design("mine", Some("alice")),
            design("theirs", Some("bob")),
        ])
    }

    #[test]
    fn test_initial_state() {
        let state = DashboardState::new(ViewMode::List);
        assert!(state.loading);
        assert!(state.designs().is_empty());
        assert_eq!(state.active_tab, ActiveTab::Designs);
        assert_eq!(state.view_mode, ViewMode::List);
    }

    #[test]
    fn test_ticket_query_matches_identity() {
        let mut state = DashboardState::default();
        let anon = state.begin_fetch(None);
        assert_eq!(anon.query(), DesignQuery::for_identity(None));
        let alice = state.begin_fetch(Some("alice".to_string()));
        assert_eq!(alice.query(), DesignQuery::for_identity(Some("alice")));
    }

    #[tokio::test]
    async fn test_refresh_anonymous_then_signed_in() {
        let store = seeded_store();
        let mut toasts = ToastQueue::default();
        let mut state = DashboardState::default();

        let outcome = refresh(&mut state, &store, None, &mut toasts).await;
        assert_eq!(outcome, FetchOutcome::Applied);
        assert!(!state.loading);
        assert_eq!(state.designs().len(), 1);
        assert_eq!(state.designs()[0].id, "demo");

        refresh(&mut state, &store, Some("alice".to_string()), &mut toasts).await;
        assert_eq!(state.designs().len(), 1);
        assert_eq!(state.designs()[0].id, "mine");
        assert!(toasts.is_empty());
    }

    #[tokio::test]
    async fn test_fetch_failure_clears_list_and_notifies_once() {
        let store = seeded_store();
        let mut toasts = ToastQueue::default();
        let mut state = DashboardState::default();
        refresh(&mut state, &store, None, &mut toasts).await;
        assert_eq!(state.designs().len(), 1);

        store.fail_with(Some(StoreError::Query("connection refused".to_string())));
        let outcome = refresh(&mut state, &store, None, &mut toasts).await;

        assert_eq!(outcome, FetchOutcome::Failed);
        assert!(state.designs().is_empty());
        assert!(!state.loading);
        assert_eq!(toasts.len(), 1);
        let toast = toasts.toasts().next().unwrap();
        assert!(toast.is_destructive());
        assert_eq!(toast.title, "Failed to load designs");
        assert_eq!(toast.description.as_deref(), Some("connection refused"));
    }

    #[tokio::test]
    async fn test_stale_result_for_previous_identity_is_discarded() {
        let store = seeded_store();
        let mut toasts = ToastQueue::default();
        let mut state = DashboardState::default();

        // anonymous fetch issued, then the user signs in before it resolves
        let stale = state.begin_fetch(None);
        let fresh = state.begin_fetch(Some("alice".to_string()));

        let fresh_rows = store.list_designs(&fresh.query()).await;
        assert_eq!(state.finish_fetch(fresh, fresh_rows, &mut toasts), FetchOutcome::Applied);

        let stale_rows = store.list_designs(&stale.query()).await;
        assert_eq!(state.finish_fetch(stale, stale_rows, &mut toasts), FetchOutcome::Discarded);

        assert_eq!(state.designs().len(), 1);
        assert_eq!(state.designs()[0].id, "mine");
        assert!(!state.loading);
    }

    #[tokio::test]
    async fn test_stale_failure_is_silent() {
        let mut toasts = ToastQueue::default();
        let mut state = DashboardState::default();

        let stale = state.begin_fetch(Some("alice".to_string()));
        let _fresh = state.begin_fetch(None);

        let outcome = state.finish_fetch(stale, Err(StoreError::Query("timeout".to_string())), &mut toasts);
        assert_eq!(outcome, FetchOutcome::Discarded);
        assert!(toasts.is_empty());
        // still waiting on the fresh fetch
        assert!(state.loading);
    }

    #[test]
    fn test_superseded_fetch_for_same_identity_is_discarded() {
        let mut toasts = ToastQueue::default();
        let mut state = DashboardState::default();

        let first = state.begin_fetch(None);
        let second = state.begin_fetch(None);

        assert_eq!(
            state.finish_fetch(second, Ok(vec![design("new", None)]), &mut toasts),
            FetchOutcome::Applied
        );
        assert_eq!(
            state.finish_fetch(first, Ok(vec![design("old", None)]), &mut toasts),
            FetchOutcome::Discarded
        );
        assert_eq!(state.designs()[0].id, "new");
    }

    #[test]
    fn test_tab_and_view_mode_setters() {
        let mut state = DashboardState::default();
        state.set_tab(ActiveTab::Ai);
        state.set_view_mode(ViewMode::List);
        assert_eq!(state.active_tab, ActiveTab::Ai);
        assert_eq!(state.view_mode, ViewMode::List);
        assert_eq!(ActiveTab::Templates.label(), "Help me design?");
    }

    #[test]
    fn test_every_stub_produces_one_fixed_toast() {
        let actions = StubAction::all();
        assert_eq!(actions.len(), 9 + DesignKind::ALL.len());

        for action in actions {
            let mut toasts = ToastQueue::default();
            trigger_stub(action, &mut toasts);
            assert_eq!(toasts.len(), 1, "{action:?}");
            let toast = toasts.toasts().next().unwrap();
            assert_eq!(toast.title, STUB_TITLE);
            assert_eq!(toast.description, None);
            assert_eq!(toast.duration, Some(Duration::from_millis(3000)));
            assert!(!toast.is_destructive());
        }
    }

    #[tokio::test]
    async fn test_sign_out_success_notifies() {
        let auth = FakeAuth::signed_in("alice");
        let mut toasts = ToastQueue::default();

        sign_out(&auth, &mut toasts).await.unwrap();

        assert_eq!(auth.sign_out_calls(), 1);
        assert_eq!(toasts.len(), 1);
        let toast = toasts.toasts().next().unwrap();
        assert_eq!(toast.title, "Successfully signed out!");
        assert_eq!(toast.description.as_deref(), Some("You have been logged out."));
    }

    #[tokio::test]
    async fn test_sign_out_failure_is_reported_not_thrown() {
        let auth = FakeAuth::signed_in("alice");
        auth.fail_with("network down");
        let mut toasts = ToastQueue::default();

        let result = sign_out(&auth, &mut toasts).await;

        assert_eq!(result, Err(AuthError::new("network down")));
        assert_eq!(toasts.len(), 1);
        let toast = toasts.toasts().next().unwrap();
        assert!(toast.is_destructive());
        assert_eq!(toast.description.as_deref(), Some("network down"));
    }
}
