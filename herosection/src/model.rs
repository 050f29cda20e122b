//! Shared content descriptors used by every hero variant.
//!
//! These are the building blocks the per-variant property records compose:
//! text blocks, buttons, backgrounds, media, and the list-valued items of
//! the gallery/testimonial/service/feature layouts. Everything serializes
//! camelCase to match the stored section JSON.

use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};

/// HTML element rendered for a text block.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HeadingTag {
    H1,
    #[default]
    H2,
    H3,
    H4,
    H5,
    H6,
    P,
}

impl HeadingTag {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::H1 => "h1",
            Self::H2 => "h2",
            Self::H3 => "h3",
            Self::H4 => "h4",
            Self::H5 => "h5",
            Self::H6 => "h6",
            Self::P => "p",
        }
    }
}

/// A styled piece of text with its heading tag.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TextBlock {
    pub text: String,
    pub color: Option<String>,
    pub font_size: Option<String>,
    pub tag: HeadingTag,
}

impl TextBlock {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    pub fn with_tag(mut self, tag: HeadingTag) -> Self {
        self.tag = tag;
        self
    }
}

/// Visual treatment of a button.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ButtonStyle {
    #[default]
    Primary,
    Secondary,
    Outline,
    Ghost,
    Link,
}

/// Button sizing scale.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ButtonSize {
    Small,
    #[default]
    Medium,
    Large,
}

/// Where a link opens.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum LinkTarget {
    #[default]
    #[serde(rename = "SELF")]
    Self_,
    #[serde(rename = "BLANK")]
    Blank,
}

/// A configured call-to-action button.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ButtonConfig {
    pub text: String,
    pub url: String,
    pub style: ButtonStyle,
    pub size: ButtonSize,
    pub target: LinkTarget,
    pub icon: Option<String>,
}

impl ButtonConfig {
    pub fn new(text: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            url: url.into(),
            ..Self::default()
        }
    }
}

/// Dimming layer over image and video backgrounds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Overlay {
    pub color: String,
    pub opacity: f64,
}

impl Default for Overlay {
    fn default() -> Self {
        Self {
            color: "#000000".to_string(),
            opacity: 0.4,
        }
    }
}

/// Background treatment of a section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Background {
    Color {
        color: String,
    },
    Gradient {
        from: String,
        to: String,
        #[serde(default = "default_gradient_angle")]
        angle: u16,
    },
    Image {
        url: String,
        #[serde(default)]
        alt: String,
        #[serde(default)]
        overlay: Option<Overlay>,
    },
    Video {
        url: String,
        #[serde(default)]
        poster: Option<String>,
        #[serde(default)]
        overlay: Option<Overlay>,
    },
}

fn default_gradient_angle() -> u16 {
    135
}

impl Default for Background {
    fn default() -> Self {
        Self::Color {
            color: "#111827".to_string(),
        }
    }
}

/// An image or video panel (split-screen media, product shot).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Media {
    pub url: String,
    pub alt: String,
    /// Treat the media as a video element instead of an image.
    pub video: bool,
    pub poster: Option<String>,
}

// --- List-valued items ---
//
// Items carry a generated `"<kind>-<unix-millis>"` id; they are created on
// add, removed by filtering the owning list, and reordered in place. Nothing
// here is persisted by this crate.

/// Generates a fresh list-item id of the form `"<kind>-<unix-millis>"`.
pub fn generate_item_id(kind: &str) -> String {
    let millis = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or_default();
    format!("{kind}-{millis}")
}

/// One entry of a feature grid.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FeatureItem {
    pub id: String,
    pub icon: Option<String>,
    pub title: String,
    pub description: String,
}

/// One image of a gallery.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GalleryItem {
    pub id: String,
    pub image: String,
    pub alt: String,
    pub caption: Option<String>,
}

/// One quote of a testimonial block.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TestimonialItem {
    pub id: String,
    pub quote: String,
    pub author: String,
    pub role: Option<String>,
    pub avatar: Option<String>,
    pub rating: Option<u8>,
}

/// One entry of a service grid.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ServiceItem {
    pub id: String,
    pub icon: Option<String>,
    pub title: String,
    pub description: String,
    pub link: Option<String>,
}

/// A small logo/label pair shown under product heroes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TrustBadge {
    pub id: String,
    pub image: String,
    pub label: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_background_tagged_serialization() {
        let bg = Background::Image {
            url: "/img/hero.jpg".into(),
            alt: "Skyline".into(),
            overlay: Some(Overlay::default()),
        };
        let value = serde_json::to_value(&bg).unwrap();
        assert_eq!(value["type"], json!("image"));
        assert_eq!(value["overlay"]["opacity"], json!(0.4));

        let parsed: Background =
            serde_json::from_value(json!({"type": "color", "color": "#fff"})).unwrap();
        assert_eq!(
            parsed,
            Background::Color {
                color: "#fff".into()
            }
        );
    }

    #[test]
    fn test_generate_item_id_shape() {
        let id = generate_item_id("gallery");
        let (kind, stamp) = id.split_once('-').unwrap();
        assert_eq!(kind, "gallery");
        assert!(stamp.parse::<u128>().is_ok());
    }

    #[test]
    fn test_link_target_serializes_uppercase() {
        assert_eq!(
            serde_json::to_string(&LinkTarget::Blank).unwrap(),
            "\"BLANK\""
        );
    }
}
