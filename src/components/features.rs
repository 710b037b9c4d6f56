use dioxus::prelude::*;

use super::{BentoCard, BentoTilt};
use crate::content::{FeatureCard, FeaturesContent, PromoTile, GRID_CARDS};

/// Placement of the three grid cards, in content order
const GRID_TILT_CLASSES: [&str; GRID_CARDS] = [
    "bento-tilt_1 row-span-1 md:col-span-1 md:row-span-2",
    "bento-tilt_1 row-span-1 ms-32 md:col-span-1 md:ms-0",
    "bento-tilt_1 me-14 md:col-span-1 md:me-0",
];

const TAG_CLASS: &str = "text-white/90 text-[10px] font-medium px-3 py-1.5 bg-white/15 rounded-full backdrop-blur-sm";

#[component]
pub fn Features(content: FeaturesContent) -> Element {
    let hero = content.hero.clone();
    let grid: Vec<(FeatureCard, &'static str)> = content
        .grid
        .iter()
        .cloned()
        .zip(GRID_TILT_CLASSES)
        .collect();

    rsx! {
        section {
            class: "bg-black pb-52",
            div {
                class: "container mx-auto px-3 md:px-10",
                div {
                    class: "px-5 py-32",
                    p { class: "font-circular-web text-lg text-blue-50", "{content.headline}" }
                    p {
                        class: "max-w-3xl font-circular-web text-lg text-blue-50 opacity-50",
                        "{content.blurb}"
                    }
                }

                BentoTilt {
                    class: "border-hsla relative mb-7 h-96 w-full overflow-hidden rounded-3xl md:h-[65vh]",
                    BentoCard {
                        src: hero.src,
                        title: hero.title,
                        description: hero.description.unwrap_or_default(),
                        is_coming_soon: hero.coming_soon,
                    }
                }

                div {
                    class: "grid h-[135vh] w-full grid-cols-2 grid-rows-3 gap-7",
                    for (card, tilt_class) in grid {
                        BentoTilt {
                            key: "{card.src}",
                            class: tilt_class.to_string(),
                            BentoCard {
                                src: card.src.clone(),
                                title: card.title.clone(),
                                description: card.description.clone().unwrap_or_default(),
                                is_coming_soon: card.coming_soon,
                            }
                        }
                    }

                    BentoTilt {
                        class: "bento-tilt_2",
                        PromoCard { promo: content.promo.clone() }
                    }

                    BentoTilt {
                        class: "bento-tilt_2",
                        video {
                            src: "{content.closing_video}",
                            r#loop: true,
                            muted: true,
                            autoplay: true,
                            class: "size-full object-cover object-center",
                        }
                    }
                }
            }
        }
    }
}

/// "Create mini apps" tile: title, tags and a contact strip
#[component]
fn PromoCard(promo: PromoTile) -> Element {
    rsx! {
        div {
            class: "flex size-full flex-col justify-between bg-gradient-to-br from-blue-600 to-blue-800 p-5 sm:p-6 md:p-8 relative overflow-hidden rounded-3xl",
            div {
                class: "space-y-4",
                div {
                    h1 {
                        class: "font-zentry text-3xl sm:text-4xl md:text-5xl font-black text-white leading-[0.9] mb-3",
                        for (i, line) in promo.title_lines.iter().enumerate() {
                            if i > 0 { br {} }
                            "{line}"
                        }
                    }
                    p { class: "text-white/80 text-xs sm:text-sm mt-3 max-w-[220px]", "{promo.blurb}" }
                }

                // Tags sit in the corner on wider screens
                div {
                    class: "flex flex-row flex-wrap gap-2 sm:absolute sm:top-5 sm:right-5 sm:flex-col sm:items-end",
                    for tag in promo.tags.iter() {
                        span { key: "{tag}", class: TAG_CLASS, "{tag}" }
                    }
                }
            }

            div {
                class: "bg-black/50 backdrop-blur-md rounded-3xl p-3 sm:p-4 flex flex-row items-center justify-between gap-3",
                p { class: "text-white font-semibold text-xs sm:text-sm", "{promo.prompt}" }
                div {
                    class: "flex items-center gap-1.5 bg-black/70 px-2.5 py-1.5 rounded-full",
                    svg {
                        class: "w-3 h-3 text-white flex-shrink-0",
                        fill: "none",
                        stroke: "currentColor",
                        view_box: "0 0 24 24",
                        path {
                            stroke_linecap: "round",
                            stroke_linejoin: "round",
                            stroke_width: "2",
                            d: "M3 8l7.89 5.26a2 2 0 002.22 0L21 8M5 19h14a2 2 0 002-2V7a2 2 0 00-2-2H5a2 2 0 00-2 2v10a2 2 0 002 2z",
                        }
                    }
                    span { class: "text-white text-[10px] sm:text-[11px] whitespace-nowrap", "{promo.email}" }
                }
            }
        }
    }
}
