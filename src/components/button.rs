use dioxus::prelude::*;

/// Pill call-to-action with optional leading/trailing icons
#[component]
pub fn Button(
    title: String,
    #[props(default)] id: String,
    #[props(default)] container_class: String,
    left_icon: Option<Element>,
    right_icon: Option<Element>,
) -> Element {
    let id_attr = (!id.is_empty()).then_some(id);

    rsx! {
        button {
            id: id_attr,
            class: "group relative z-10 w-fit cursor-pointer overflow-hidden rounded-full bg-violet-50 px-7 py-3 text-black {container_class}",
            {left_icon}
            span {
                class: "relative inline-flex overflow-hidden font-general text-xs uppercase",
                div { "{title}" }
            }
            {right_icon}
        }
    }
}
