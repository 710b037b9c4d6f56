//! Site content - page copy and asset paths
//!
//! `content/site.json` is embedded at compile time and parsed once at
//! startup. Components receive the parsed pieces as props.

mod error;

pub use error::ContentError;

use serde::Deserialize;

const SITE_JSON: &str = include_str!("../../content/site.json");

/// Card slots in the feature grid below the hero card
pub const GRID_CARDS: usize = 3;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SiteContent {
    pub features: FeaturesContent,
    pub contact: ContactContent,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FeaturesContent {
    pub headline: String,
    pub blurb: String,
    pub hero: FeatureCard,
    pub grid: Vec<FeatureCard>,
    pub promo: PromoTile,
    pub closing_video: String,
}

/// One bento card. `title` may carry inline `<b>` markup.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FeatureCard {
    pub src: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub coming_soon: bool,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PromoTile {
    pub title_lines: Vec<String>,
    pub blurb: String,
    pub tags: Vec<String>,
    pub prompt: String,
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ContactContent {
    pub kicker: String,
    /// AnimatedTitle markup: `<br />` breaks lines, `<b>` highlights letters
    pub title: String,
    pub button: String,
    pub images: Vec<ClipImage>,
}

/// Which side of the contact banner an image sits on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Slot {
    Left,
    Right,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ClipImage {
    pub src: String,
    pub clip_class: String,
    pub slot: Slot,
}

impl SiteContent {
    /// Parse and validate the embedded `site.json`
    pub fn load() -> Result<Self, ContentError> {
        Self::from_json(SITE_JSON)
    }

    pub fn from_json(json: &str) -> Result<Self, ContentError> {
        let content: Self = serde_json::from_str(json)?;
        content.validate()?;
        Ok(content)
    }

    fn validate(&self) -> Result<(), ContentError> {
        let features = &self.features;
        if features.grid.len() != GRID_CARDS {
            return Err(ContentError::GridSize {
                expected: GRID_CARDS,
                found: features.grid.len(),
            });
        }

        let cards = std::iter::once(&features.hero).chain(features.grid.iter());
        for card in cards {
            if card.src.trim().is_empty() {
                return Err(ContentError::EmptySource { title: card.title.clone() });
            }
        }
        if features.closing_video.trim().is_empty() {
            return Err(ContentError::EmptySource { title: "closing video".to_string() });
        }
        for image in &self.contact.images {
            if image.src.trim().is_empty() {
                return Err(ContentError::EmptySource { title: image.clip_class.clone() });
            }
        }
        Ok(())
    }

    pub fn card_count(&self) -> usize {
        1 + self.features.grid.len()
    }
}

impl ContactContent {
    pub fn images_in(&self, slot: Slot) -> impl Iterator<Item = &ClipImage> {
        self.images.iter().filter(move |image| image.slot == slot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::effects::MediaKind;

    #[test]
    fn embedded_content_loads() {
        let content = SiteContent::load().expect("site.json should load");
        assert_eq!(content.features.grid.len(), GRID_CARDS);
        assert_eq!(content.card_count(), 4);
        assert_eq!(content.contact.images_in(Slot::Left).count(), 2);
        assert_eq!(content.contact.images_in(Slot::Right).count(), 1);
    }

    #[test]
    fn embedded_grid_has_one_gif() {
        let content = SiteContent::load().unwrap();
        let gifs: Vec<_> = content
            .features
            .grid
            .iter()
            .filter(|c| MediaKind::classify(&c.src) == MediaKind::Image)
            .map(|c| c.title.as_str())
            .collect();
        assert_eq!(gifs, vec!["ch<b>a</b>nnels"]);
    }

    fn with_features(mutate: impl FnOnce(&mut serde_json::Value)) -> String {
        let mut value: serde_json::Value = serde_json::from_str(SITE_JSON).unwrap();
        mutate(&mut value["features"]);
        value.to_string()
    }

    #[test]
    fn rejects_empty_source() {
        let json = with_features(|f| f["grid"][1]["src"] = "  ".into());
        match SiteContent::from_json(&json) {
            Err(ContentError::EmptySource { title }) => assert_eq!(title, "Layer<b>e</b>d groups"),
            other => panic!("expected EmptySource, got {other:?}"),
        }
    }

    #[test]
    fn rejects_wrong_grid_size() {
        let json = with_features(|f| {
            f["grid"].as_array_mut().unwrap().pop();
        });
        match SiteContent::from_json(&json) {
            Err(ContentError::GridSize { expected, found }) => {
                assert_eq!((expected, found), (3, 2));
            }
            other => panic!("expected GridSize, got {other:?}"),
        }
    }

    #[test]
    fn rejects_malformed_json() {
        let err = SiteContent::from_json("{ not json").unwrap_err();
        assert!(matches!(err, ContentError::Parse(_)));
        assert!(err.to_string().starts_with("site content is not valid JSON"));
    }

    #[test]
    fn description_and_flag_are_optional() {
        let json = with_features(|f| {
            let hero = f["hero"].as_object_mut().unwrap();
            hero.remove("description");
            hero.remove("coming_soon");
        });
        let content = SiteContent::from_json(&json).unwrap();
        assert_eq!(content.features.hero.description, None);
        assert!(!content.features.hero.coming_soon);
    }
}
