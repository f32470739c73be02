use dioxus::prelude::*;

use crate::components::{Button, ButtonSize, ButtonVariant};
use crate::dashboard::StubAction;
use crate::icons::{FaFolder, FaHouse, FaPlus, FaStar, FaTableCellsLarge};
use crate::Icon;

/// Width of the rail. The content column is pushed right by [`RAIL_OFFSET`].
const RAIL_WIDTH: &str = "w-16";
pub(super) const RAIL_OFFSET: &str = "ml-16";

/// Fixed icon rail on the left edge. None of its destinations exist yet.
#[component]
pub fn NavRail(on_stub: EventHandler<StubAction>) -> Element {
    rsx! {
        nav {
            class: "fixed left-0 top-0 h-full {RAIL_WIDTH} bg-white shadow-lg z-50 flex flex-col items-center py-4 gap-6",
            Button {
                variant: ButtonVariant::Ghost,
                size: ButtonSize::Icon,
                class: "rounded-xl bg-purple-100 hover:bg-purple-200 text-purple-600",
                title: "Create",
                onclick: move |_| on_stub.call(StubAction::Create),
                Icon { icon: FaPlus, width: 20, height: 20 }
            }
            div {
                class: "flex flex-col gap-4",
                Button {
                    variant: ButtonVariant::Ghost,
                    size: ButtonSize::Icon,
                    class: "rounded-xl",
                    title: "Home",
                    onclick: move |_| on_stub.call(StubAction::Home),
                    Icon { icon: FaHouse, width: 20, height: 20 }
                }
                Button {
                    variant: ButtonVariant::Ghost,
                    size: ButtonSize::Icon,
                    class: "rounded-xl",
                    title: "Templates",
                    onclick: move |_| on_stub.call(StubAction::Templates),
                    Icon { icon: FaFolder, width: 20, height: 20 }
                }
                Button {
                    variant: ButtonVariant::Ghost,
                    size: ButtonSize::Icon,
                    class: "rounded-xl",
                    title: "Brand",
                    onclick: move |_| on_stub.call(StubAction::Brand),
                    Icon { icon: FaStar, width: 20, height: 20 }
                }
                Button {
                    variant: ButtonVariant::Ghost,
                    size: ButtonSize::Icon,
                    class: "rounded-xl",
                    title: "Apps",
                    onclick: move |_| on_stub.call(StubAction::Apps),
                    Icon { icon: FaTableCellsLarge, width: 20, height: 20 }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_offset_clears_rail() {
        let width = RAIL_WIDTH.trim_start_matches("w-");
        let offset = RAIL_OFFSET.trim_start_matches("ml-");
        assert_eq!(width, offset);
    }
}
