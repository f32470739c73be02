use dioxus::prelude::*;

/// A full-screen overlay that centers its children in a dialog card.
/// Clicking outside the card or pressing Escape triggers `on_close`.
#[component]
pub fn ModalOverlay(on_close: EventHandler<()>, children: Element) -> Element {
    rsx! {
        div {
            class: "fixed inset-0 flex items-center justify-center bg-black/50",
            style: "z-index: 2000",
            tabindex: "-1",
            onmounted: move |evt: MountedEvent| async move {
                let _ = evt.set_focus(true).await;
            },
            onclick: move |_| on_close.call(()),
            onkeydown: move |evt: KeyboardEvent| {
                if evt.key() == Key::Escape {
                    on_close.call(());
                }
            },
            div {
                class: "bg-white rounded-lg shadow-lg w-full mx-4 sm:max-w-[425px]",
                role: "dialog",
                aria_modal: "true",
                onclick: move |evt: Event<MouseData>| evt.stop_propagation(),
                {children}
            }
        }
    }
}
