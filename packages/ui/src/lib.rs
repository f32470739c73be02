//! This crate contains all shared UI for the workspace: the dashboard, the
//! auth dialog, toasts and the small component kit they are built from.

pub mod components;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

mod repo;
pub use repo::ApiDesignStore;

pub mod views;
pub use views::Dashboard;

mod auth;
pub use auth::{use_auth_session, AuthClient, AuthError, AuthSession, AuthState};

pub mod auth_modal;
pub use auth_modal::{AuthMode, AuthModalState};

pub mod dashboard;
pub use dashboard::{ActiveTab, DashboardState, StubAction};

pub mod time_ago;
pub use time_ago::time_ago;

pub mod toast;
pub use toast::{use_toast_queue, Notifier, Toast, ToastQueue, Toaster};

#[cfg(test)]
mod testing;
