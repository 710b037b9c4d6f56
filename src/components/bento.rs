use dioxus::prelude::*;

use crate::effects::geometry::unique_id;
use crate::effects::tilt::{self, Tilt};
use crate::effects::{BoundingRect, CursorHighlight, MediaKind};

const MEDIA_CLASS: &str = "absolute left-0 top-0 size-full object-cover object-center";

/// Container that leans toward the cursor while hovered
#[component]
pub fn BentoTilt(#[props(default)] class: String, children: Element) -> Element {
    let id = use_hook(|| unique_id("bento-tilt"));
    let mut transform = use_signal(|| None::<Tilt>);

    let measure_id = id.clone();
    let transform_css = tilt::transform_css(transform());

    rsx! {
        div {
            id: "{id}",
            class: "{class}",
            style: "transform: {transform_css};",
            onmousemove: move |e: Event<MouseData>| {
                let pointer = e.client_coordinates();
                let rect = BoundingRect::measure(&measure_id);
                if rect.is_none() {
                    log::warn!("{measure_id}: not measurable, keeping tilt");
                }
                transform.set(tilt::on_move(transform(), rect, pointer.x, pointer.y));
            },
            onmouseleave: move |_| transform.set(tilt::on_leave(transform())),
            {children}
        }
    }
}

/// Feature card: looping background media, title, copy and an optional
/// "coming soon" pill with a cursor-following glow.
#[component]
pub fn BentoCard(
    src: String,
    /// Title markup; `<b>` tags pick out highlighted letters
    title: String,
    #[props(default)] description: String,
    #[props(default)] is_coming_soon: bool,
) -> Element {
    let pill_id = use_hook(|| unique_id("coming-soon"));
    let mut glow = use_signal(CursorHighlight::default);

    let measure_id = pill_id.clone();
    let glow_style = glow.read().style();

    rsx! {
        div {
            class: "relative size-full",
            {match MediaKind::classify(&src) {
                MediaKind::Image => rsx! {
                    img { src: "{src}", alt: "", class: MEDIA_CLASS }
                },
                MediaKind::Video => rsx! {
                    video {
                        src: "{src}",
                        r#loop: true,
                        muted: true,
                        autoplay: true,
                        class: MEDIA_CLASS,
                    }
                },
            }}

            div {
                class: "relative z-10 flex size-full flex-col justify-between p-5 text-blue-50",
                div {
                    h1 { class: "bento-title special-font", dangerous_inner_html: "{title}" }
                    if !description.is_empty() {
                        p { class: "mt-3 max-w-64 text-xs md:text-base", "{description}" }
                    }
                }

                if is_coming_soon {
                    div {
                        id: "{pill_id}",
                        class: "border-hsla relative flex w-fit cursor-pointer items-center gap-1 overflow-hidden rounded-full bg-black px-5 py-2 text-xs uppercase text-white/20",
                        onmousemove: move |e: Event<MouseData>| {
                            let pointer = e.client_coordinates();
                            let rect = BoundingRect::measure(&measure_id);
                            if rect.is_none() {
                                log::warn!("{measure_id}: not measurable, keeping glow");
                            }
                            glow.write().on_move(rect, pointer.x, pointer.y);
                        },
                        onmouseenter: move |_| glow.write().on_enter(),
                        onmouseleave: move |_| glow.write().on_leave(),

                        // Glow layer
                        div {
                            class: "pointer-events-none absolute -inset-px opacity-0 transition duration-300",
                            style: "{glow_style}",
                        }
                        LocationArrowIcon { class: "relative z-20" }
                        p { class: "relative z-20", "coming soon" }
                    }
                }
            }
        }
    }
}

#[component]
fn LocationArrowIcon(#[props(default)] class: String) -> Element {
    rsx! {
        svg {
            class: "{class}",
            width: "1em",
            height: "1em",
            view_box: "0 0 24 24",
            fill: "currentColor",
            path { d: "M19.375 12.219l-14-7c-.4-.2-.88-.1-1.17.24-.29.34-.3.84-.03 1.19l4.56 6.35-4.56 6.35c-.27.36-.26.85.03 1.19.19.23.47.36.77.36.15 0 .31-.03.45-.1l14-7c.34-.17.55-.52.55-.89s-.21-.72-.55-.89z" }
        }
    }
}
