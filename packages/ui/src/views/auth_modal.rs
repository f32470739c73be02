use dioxus::prelude::*;

use crate::auth::AuthSession;
use crate::auth_modal::{self, AuthModalState};
use crate::components::{Button, ButtonVariant, Input, Label};
use crate::icons::FaSpinner;
use crate::toast::ToastQueue;
use crate::Icon;

use super::ModalOverlay;

/// Sign-in / sign-up dialog. Open state and mode live in `state`, which the
/// parent owns; the form fields travel with it.
#[component]
pub fn AuthModal(
    session: AuthSession,
    toasts: Signal<ToastQueue>,
    state: Signal<AuthModalState>,
) -> Element {
    let mut toasts = toasts;
    let mut state = state;
    let snapshot = state.read().clone();

    let Some(mode) = snapshot.mode() else {
        return rsx! {};
    };
    let submitting = snapshot.submitting;
    let title = mode.title();
    let description = mode.description();
    let switch_label = mode.switch_label();
    let submit_label = mode.submit_label();

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let credentials = match state.write().begin_submit() {
            Ok(credentials) => credentials,
            Err(rejected) => {
                tracing::debug!(?rejected, "auth submission rejected");
                return;
            }
        };
        spawn(async move {
            let result = auth_modal::perform(&session, &credentials).await;
            state.write().finish_submit(credentials.mode, result, &mut toasts);
        });
    };

    rsx! {
        ModalOverlay {
            on_close: move |_| state.write().dismiss(),

            div {
                class: "p-6",
                h2 { class: "text-lg font-semibold text-gray-900", "{title}" }
                p { class: "mt-1 text-sm text-gray-500", "{description}" }

                form {
                    onsubmit: handle_submit,

                    div {
                        class: "grid gap-4 py-4",
                        div {
                            class: "grid grid-cols-4 items-center gap-4",
                            Label { html_for: "email", class: "text-right", "Email" }
                            Input {
                                id: "email",
                                r#type: "email",
                                class: "col-span-3",
                                value: snapshot.email.clone(),
                                required: true,
                                disabled: submitting,
                                oninput: move |evt: FormEvent| state.write().email = evt.value(),
                            }
                        }
                        div {
                            class: "grid grid-cols-4 items-center gap-4",
                            Label { html_for: "password", class: "text-right", "Password" }
                            Input {
                                id: "password",
                                r#type: "password",
                                class: "col-span-3",
                                value: snapshot.password.clone(),
                                required: true,
                                minlength: api::auth::MIN_PASSWORD_LEN,
                                disabled: submitting,
                                oninput: move |evt: FormEvent| state.write().password = evt.value(),
                            }
                        }
                    }

                    div {
                        class: "flex flex-col-reverse gap-2 sm:flex-row sm:justify-between",
                        Button {
                            variant: ButtonVariant::Ghost,
                            disabled: submitting,
                            onclick: move |_| state.write().switch_mode(),
                            "{switch_label}"
                        }
                        Button {
                            r#type: "submit",
                            disabled: submitting,
                            if submitting {
                                span {
                                    class: "animate-spin",
                                    Icon { icon: FaSpinner, width: 16, height: 16 }
                                }
                            }
                            "{submit_label}"
                        }
                    }
                }
            }
        }
    }
}
