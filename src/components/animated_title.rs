//! AnimatedTitle - headline split into individually revealed words
//!
//! The reveal itself is the `animated-word` keyframe in main.css; each
//! word only gets a staggered `animation-delay`.

use dioxus::prelude::*;

const LINE_BREAKS: &[&str] = &["<br />", "<br/>", "<br>"];
const STAGGER_MS: usize = 30;

/// Split title markup into lines of words.
///
/// Inline tags such as `<b>` stay attached to their word, so a word is
/// rendered as inner HTML, not text.
pub fn title_lines(markup: &str) -> Vec<Vec<String>> {
    let mut normalized = markup.to_string();
    for br in &LINE_BREAKS[1..] {
        normalized = normalized.replace(br, LINE_BREAKS[0]);
    }
    normalized
        .split(LINE_BREAKS[0])
        .map(|line| line.split_whitespace().map(str::to_string).collect::<Vec<_>>())
        .filter(|words| !words.is_empty())
        .collect()
}

/// Attach a staggered reveal delay (ms) to every word, counting across lines
pub fn staggered(lines: Vec<Vec<String>>) -> Vec<Vec<(String, usize)>> {
    let mut index = 0;
    lines
        .into_iter()
        .map(|words| {
            words
                .into_iter()
                .map(|word| {
                    let delay = index * STAGGER_MS;
                    index += 1;
                    (word, delay)
                })
                .collect()
        })
        .collect()
}

#[component]
pub fn AnimatedTitle(title: String, #[props(default)] class: String) -> Element {
    let lines = staggered(title_lines(&title));

    rsx! {
        div {
            class: "animated-title {class}",
            for (row, words) in lines.into_iter().enumerate() {
                div {
                    key: "{row}",
                    class: "flex-center max-w-full flex-wrap gap-2 px-10 md:gap-3",
                    for (word, delay) in words {
                        span {
                            class: "animated-word",
                            style: "animation-delay: {delay}ms;",
                            dangerous_inner_html: "{word}",
                        }
                    }
                }
            }
        }
    }
}
