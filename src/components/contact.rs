use dioxus::prelude::*;

use super::{AnimatedTitle, Button};
use crate::content::{ClipImage, ContactContent, Slot};

/// Image cut to a CSS clip-path shape
#[component]
pub fn ImageClipBox(src: String, clip_class: String) -> Element {
    rsx! {
        div {
            class: "{clip_class}",
            img { src: "{src}" }
        }
    }
}

#[component]
pub fn Contact(content: ContactContent) -> Element {
    let left: Vec<ClipImage> = content.images_in(Slot::Left).cloned().collect();
    let right: Vec<ClipImage> = content.images_in(Slot::Right).cloned().collect();

    rsx! {
        div {
            id: "contact",
            class: "my-20 min-h-96 w-screen px-10",
            div {
                class: "relative rounded-lg bg-black py-24 text-blue-50 sm:overflow-hidden",

                div {
                    class: "absolute -left-20 top-0 hidden h-full w-72 overflow-hidden sm:block lg:left-20 lg:w-96",
                    for image in left {
                        ImageClipBox { key: "{image.src}", src: image.src.clone(), clip_class: image.clip_class.clone() }
                    }
                }

                div {
                    class: "absolute -top-40 left-20 w-60 sm:top-1/2 md:left-auto md:right-10 lg:top-20 lg:w-80",
                    for image in right {
                        ImageClipBox { key: "{image.src}", src: image.src.clone(), clip_class: image.clip_class.clone() }
                    }
                }

                div {
                    class: "flex flex-col items-center text-center",
                    p { class: "mb-10 font-general text-[10px] uppercase", "{content.kicker}" }

                    AnimatedTitle {
                        title: content.title.clone(),
                        class: "special-font !md:text-[6.2rem] w-full font-zentry !text-5xl !font-black !leading-[.9]",
                    }

                    Button { title: content.button.clone(), container_class: "mt-10 cursor-pointer" }
                }
            }
        }
    }
}
