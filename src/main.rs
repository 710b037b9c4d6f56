mod components;
mod content;
mod effects;

use dioxus::prelude::*;
use log::Level;

use components::{Contact, Features};
use content::SiteContent;

const MAIN_CSS: Asset = asset!("/assets/main.css");

#[allow(non_snake_case)]
fn App() -> Element {
    // Parsed once per mount; the content is static
    let content = use_hook(|| match SiteContent::load() {
        Ok(content) => {
            log::info!("site content loaded: {} feature cards", content.card_count());
            Some(content)
        }
        Err(err) => {
            log::error!("failed to load site content: {err}");
            None
        }
    });

    rsx! {
        document::Stylesheet { href: MAIN_CSS }
        main {
            id: "main",
            class: "relative min-h-screen w-screen overflow-x-hidden",
            {match content {
                Some(SiteContent { features, contact }) => rsx! {
                    Features { content: features }
                    Contact { content: contact }
                },
                None => rsx! {
                    p {
                        class: "p-10 text-center font-general text-sm uppercase text-blue-50",
                        "This page is temporarily unavailable."
                    }
                },
            }}
        }
    }
}

fn main() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(Level::Info) {
        web_sys::console::error_1(&format!("logger init failed: {err}").into());
    }
    dioxus::launch(App);
}
