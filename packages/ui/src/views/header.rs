use api::UserInfo;
use dioxus::prelude::*;

use crate::auth_modal::AuthMode;
use crate::components::{Button, ButtonSize, ButtonVariant, Input};
use crate::dashboard::{ActiveTab, StubAction};
use crate::icons::{FaMagnifyingGlass, FaRightFromBracket, FaRightToBracket, FaUserPlus};
use crate::Icon;

/// Title, account controls, tab switcher and the (stubbed) template search.
#[component]
pub fn DashboardHeader(
    user: Option<UserInfo>,
    active_tab: ActiveTab,
    on_tab: EventHandler<ActiveTab>,
    on_open_auth: EventHandler<AuthMode>,
    on_sign_out: EventHandler<()>,
    on_stub: EventHandler<StubAction>,
) -> Element {
    let greeting = user.as_ref().map(|u| format!("Welcome, {}", u.greeting_name()));

    rsx! {
        header {
            class: "bg-white/80 backdrop-blur-sm border-b border-gray-200 px-8 py-6",
            div {
                class: "max-w-7xl mx-auto relative",

                div {
                    class: "absolute top-0 right-0 flex items-center gap-2",
                    if let Some(greeting) = greeting {
                        span { class: "text-sm font-medium text-gray-700", "{greeting}" }
                        Button {
                            variant: ButtonVariant::Outline,
                            size: ButtonSize::Small,
                            onclick: move |_| on_sign_out.call(()),
                            Icon { icon: FaRightFromBracket, width: 14, height: 14 }
                            "Log Out"
                        }
                    } else {
                        Button {
                            variant: ButtonVariant::Ghost,
                            size: ButtonSize::Small,
                            onclick: move |_| on_open_auth.call(AuthMode::SignIn),
                            Icon { icon: FaRightToBracket, width: 14, height: 14 }
                            "Sign In"
                        }
                        Button {
                            onclick: move |_| on_open_auth.call(AuthMode::SignUp),
                            Icon { icon: FaUserPlus, width: 14, height: 14 }
                            "Sign Up"
                        }
                    }
                }

                h1 {
                    class: "text-4xl font-bold text-center mb-8 pt-8 bg-gradient-to-r from-purple-600 to-blue-600 bg-clip-text text-transparent",
                    "Don AI - A Creative Suite"
                }

                div {
                    class: "flex justify-center mb-8",
                    div {
                        class: "flex bg-gray-100 rounded-full p-1",
                        for (index, tab) in ActiveTab::ALL.into_iter().enumerate() {
                            Button {
                                key: "{index}",
                                variant: tab_variant(tab == active_tab),
                                class: tab_class(tab == active_tab),
                                onclick: move |_| on_tab.call(tab),
                                {tab.label()}
                            }
                        }
                    }
                }

                div {
                    class: "flex justify-center",
                    div {
                        class: "relative max-w-2xl w-full",
                        span {
                            class: "absolute left-4 top-1/2 -translate-y-1/2 text-gray-400",
                            Icon { icon: FaMagnifyingGlass, width: 18, height: 18 }
                        }
                        Input {
                            class: "w-full h-14 pl-12 pr-16 rounded-2xl shadow-sm",
                            placeholder: "Search millions of templates...",
                            onclick: move |_| on_stub.call(StubAction::Search),
                        }
                        Button {
                            class: "absolute right-2 top-1/2 -translate-y-1/2 rounded-xl",
                            onclick: move |_| on_stub.call(StubAction::Search),
                            "→"
                        }
                    }
                }
            }
        }
    }
}

fn tab_variant(active: bool) -> ButtonVariant {
    if active {
        ButtonVariant::Primary
    } else {
        ButtonVariant::Ghost
    }
}

fn tab_class(active: bool) -> String {
    if active {
        "rounded-full px-6 bg-white text-gray-900 shadow-sm".to_string()
    } else {
        "rounded-full px-6".to_string()
    }
}
