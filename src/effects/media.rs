//! Media - pick the element that renders a background source

use std::fmt;

/// How a card background is rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    /// Animated `.gif`, rendered as `<img>`
    Image,
    /// Anything else, rendered as a looping muted `<video>`
    Video,
}

impl MediaKind {
    /// `.gif` (any case) is an image; every other path is treated as video.
    pub fn classify(src: &str) -> Self {
        if src.to_lowercase().ends_with(".gif") {
            Self::Image
        } else {
            Self::Video
        }
    }

    pub fn describe(&self) -> &'static str {
        match self {
            Self::Image => "image",
            Self::Video => "video",
        }
    }
}

impl fmt::Display for MediaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.describe())
    }
}
