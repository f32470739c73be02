use dioxus::prelude::*;

#[component]
pub fn Input(
    #[props(default)] id: String,
    #[props(default = "text".to_string())] r#type: String,
    #[props(default)] class: String,
    #[props(default)] placeholder: String,
    #[props(default)] value: String,
    #[props(default)] required: bool,
    #[props(default)] disabled: bool,
    minlength: Option<usize>,
    oninput: Option<EventHandler<FormEvent>>,
    onclick: Option<EventHandler<MouseEvent>>,
) -> Element {
    rsx! {
        input {
            id: "{id}",
            class: "h-10 rounded-md border border-gray-300 bg-white px-3 py-2 text-sm outline-none focus:ring-2 focus:ring-purple-500 disabled:opacity-50 {class}",
            r#type: r#type.clone(),
            placeholder: "{placeholder}",
            value: "{value}",
            required: required,
            disabled: disabled,
            minlength: minlength.map(|n| n.to_string()),
            oninput: move |evt| {
                if let Some(handler) = &oninput {
                    handler.call(evt);
                }
            },
            onclick: move |evt| {
                if let Some(handler) = &onclick {
                    handler.call(evt);
                }
            },
        }
    }
}
