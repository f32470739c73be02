use dioxus::prelude::*;
use store::{DesignStore, SuiteConfig, ViewMode};

use crate::auth::AuthSession;
use crate::auth_modal::{AuthMode, AuthModalState};
use crate::dashboard::{self, ActiveTab, DashboardState, StubAction};
use crate::repo::ApiDesignStore;
use crate::toast::ToastQueue;

use super::nav_rail::RAIL_OFFSET;
use super::{AuthModal, DashboardHeader, DesignTypeGrid, NavRail, RecentDesigns};

/// The dashboard screen. Designs are refetched whenever the session identity
/// changes; nothing is fetched while the initial session probe is running.
#[component]
pub fn Dashboard(session: AuthSession, toasts: Signal<ToastQueue>, config: SuiteConfig) -> Element {
    let mut toasts = toasts;
    let mut state = use_signal(|| DashboardState::new(config.dashboard.default_view));
    let mut modal = use_signal(AuthModalState::default);

    use_effect(move || {
        let auth = session.state();
        if auth.loading {
            return;
        }
        let ticket = state.write().begin_fetch(auth.identity());
        spawn(async move {
            let result = ApiDesignStore.list_designs(&ticket.query()).await;
            state.write().finish_fetch(ticket, result, &mut toasts);
        });
    });

    let on_stub = EventHandler::new(move |action: StubAction| {
        dashboard::trigger_stub(action, &mut toasts);
    });

    let on_sign_out = move |_| {
        spawn(async move {
            if let Err(e) = dashboard::sign_out(&session, &mut toasts).await {
                tracing::debug!("sign out failed, already reported: {}", e);
            }
        });
    };

    let snapshot = state.read().clone();
    let skeleton_count = config.dashboard.skeleton_count;

    rsx! {
        document::Title { "Design Platform - Create Amazing Designs" }
        document::Meta {
            name: "description",
            content: "Create stunning designs with our intuitive design platform. Choose from templates, customize designs, and bring your ideas to life.",
        }

        AuthModal { session: session, toasts: toasts, state: modal }

        div {
            class: "min-h-screen bg-gradient-to-br from-purple-50 via-blue-50 to-cyan-50 flex",
            NavRail { on_stub: on_stub }

            main {
                class: "flex-1 {RAIL_OFFSET}",
                DashboardHeader {
                    user: session.user(),
                    active_tab: snapshot.active_tab,
                    on_tab: move |tab: ActiveTab| state.write().set_tab(tab),
                    on_open_auth: move |mode: AuthMode| modal.write().open(mode),
                    on_sign_out: on_sign_out,
                    on_stub: on_stub,
                }
                DesignTypeGrid { on_stub: on_stub }
                RecentDesigns {
                    designs: snapshot.designs().to_vec(),
                    loading: snapshot.loading,
                    view_mode: snapshot.view_mode,
                    skeleton_count: skeleton_count,
                    on_view_mode: move |mode: ViewMode| state.write().set_view_mode(mode),
                    on_stub: on_stub,
                }
            }
        }
    }
}
