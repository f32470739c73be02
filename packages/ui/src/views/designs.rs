use dioxus::prelude::*;
use store::{Design, DesignKind, ViewMode};

use crate::components::{Button, ButtonSize, ButtonVariant};
use crate::dashboard::StubAction;
use crate::icons::{FaEllipsis, FaFilter, FaList, FaTableCellsLarge};
use crate::time_ago::time_ago_now;
use crate::Icon;

/// The row of design-type shortcuts.
#[component]
pub fn DesignTypeGrid(on_stub: EventHandler<StubAction>) -> Element {
    rsx! {
        section {
            class: "px-8 py-8",
            div {
                class: "max-w-7xl mx-auto grid grid-cols-5 md:grid-cols-8 lg:grid-cols-15 gap-4 mb-4",
                for (index, kind) in DesignKind::ALL.into_iter().enumerate() {
                    ShortcutTile { key: "{index}", kind: kind, on_stub: on_stub }
                }
            }
        }
    }
}

#[component]
fn ShortcutTile(kind: DesignKind, on_stub: EventHandler<StubAction>) -> Element {
    let color = kind.color();
    let icon = kind.icon();
    let label = kind.label();

    rsx! {
        div {
            class: "flex flex-col items-center gap-2 cursor-pointer group",
            onclick: move |_| on_stub.call(StubAction::DesignShortcut(kind)),
            div {
                class: "w-16 h-16 {color} rounded-2xl flex items-center justify-center text-white text-2xl shadow-lg group-hover:shadow-xl transition-shadow",
                "{icon}"
            }
            span { class: "text-sm font-medium text-gray-700 text-center", "{label}" }
        }
    }
}

/// "Recent designs" heading, layout toggles and the list itself.
#[component]
pub fn RecentDesigns(
    designs: Vec<Design>,
    loading: bool,
    view_mode: ViewMode,
    skeleton_count: usize,
    on_view_mode: EventHandler<ViewMode>,
    on_stub: EventHandler<StubAction>,
) -> Element {
    let container_class = match view_mode {
        ViewMode::Grid => "grid grid-cols-2 md:grid-cols-3 lg:grid-cols-4 xl:grid-cols-6 gap-6",
        ViewMode::List => "flex flex-col gap-4",
    };

    rsx! {
        section {
            class: "px-8 pb-8",
            div {
                class: "max-w-7xl mx-auto",
                div {
                    class: "flex items-center justify-between mb-6",
                    h2 { class: "text-2xl font-bold text-gray-900", "Recent designs" }
                    div {
                        class: "flex items-center gap-2",
                        Button {
                            variant: ButtonVariant::Ghost,
                            size: ButtonSize::Icon,
                            class: toggle_class(view_mode == ViewMode::Grid),
                            title: "Grid view",
                            onclick: move |_| on_view_mode.call(ViewMode::Grid),
                            Icon { icon: FaTableCellsLarge, width: 16, height: 16 }
                        }
                        Button {
                            variant: ButtonVariant::Ghost,
                            size: ButtonSize::Icon,
                            class: toggle_class(view_mode == ViewMode::List),
                            title: "List view",
                            onclick: move |_| on_view_mode.call(ViewMode::List),
                            Icon { icon: FaList, width: 16, height: 16 }
                        }
                        Button {
                            variant: ButtonVariant::Ghost,
                            size: ButtonSize::Icon,
                            title: "Filter",
                            onclick: move |_| on_stub.call(StubAction::Filter),
                            Icon { icon: FaFilter, width: 16, height: 16 }
                        }
                    }
                }

                div {
                    class: "{container_class}",
                    if loading {
                        for index in 0..skeleton_count {
                            DesignSkeleton { key: "{index}" }
                        }
                    } else {
                        for design in designs {
                            DesignCard {
                                key: "{design.id}",
                                design: design.clone(),
                                view_mode: view_mode,
                                on_stub: on_stub,
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn DesignSkeleton() -> Element {
    rsx! {
        div {
            class: "bg-white rounded-2xl shadow-sm animate-pulse",
            div { class: "aspect-[3/4] bg-gray-200" }
            div {
                class: "p-4 flex flex-col gap-2",
                div { class: "h-4 bg-gray-200 rounded" }
                div { class: "h-3 bg-gray-200 rounded w-3/4" }
            }
        }
    }
}

#[component]
fn DesignCard(design: Design, view_mode: ViewMode, on_stub: EventHandler<StubAction>) -> Element {
    let edited = time_ago_now(design.last_edited_at);
    let kind = design.r#type.clone();
    let more_options = move |evt: MouseEvent| {
        evt.stop_propagation();
        on_stub.call(StubAction::MoreOptions);
    };

    match view_mode {
        ViewMode::Grid => rsx! {
            div {
                class: "bg-white rounded-2xl shadow-sm hover:shadow-lg transition-shadow cursor-pointer group overflow-hidden",
                onclick: move |_| on_stub.call(StubAction::OpenDesign),
                div {
                    class: "aspect-[3/4] {design.thumbnail_bg} relative",
                    if design.is_private {
                        div {
                            class: "absolute top-3 left-3 bg-black/20 backdrop-blur-sm rounded-full px-2 py-1",
                            span { class: "text-white text-xs font-medium", "🔒 Private" }
                        }
                    }
                    div {
                        class: "absolute top-3 right-3 opacity-0 group-hover:opacity-100 transition-opacity",
                        Button {
                            variant: ButtonVariant::Ghost,
                            size: ButtonSize::Icon,
                            class: "w-8 h-8 bg-white/80 hover:bg-white",
                            onclick: more_options,
                            Icon { icon: FaEllipsis, width: 16, height: 16 }
                        }
                    }
                }
                div {
                    class: "p-4",
                    h3 { class: "font-semibold text-gray-900 mb-1 truncate", "{design.title}" }
                    p { class: "text-sm text-gray-500 mb-2", "{kind} • Edited {edited}" }
                }
            }
        },
        ViewMode::List => rsx! {
            div {
                class: "bg-white rounded-2xl shadow-sm hover:shadow-lg transition-shadow cursor-pointer flex items-center p-4 gap-4",
                onclick: move |_| on_stub.call(StubAction::OpenDesign),
                div { class: "w-16 h-16 {design.thumbnail_bg} rounded-xl flex-shrink-0" }
                div {
                    class: "flex-1 min-w-0",
                    h3 { class: "font-semibold text-gray-900 truncate", "{design.title}" }
                    p { class: "text-sm text-gray-500", "{kind} • Edited {edited}" }
                }
                Button {
                    variant: ButtonVariant::Ghost,
                    size: ButtonSize::Icon,
                    class: "w-8 h-8 flex-shrink-0",
                    onclick: more_options,
                    Icon { icon: FaEllipsis, width: 16, height: 16 }
                }
            }
        },
    }
}

fn toggle_class(active: bool) -> String {
    if active {
        "bg-gray-100".to_string()
    } else {
        String::new()
    }
}
