//! Typed, resolved section properties.
//!
//! [`HeroProps`] is the renderable property bag: shared theme / responsive /
//! accessibility configuration plus one strongly typed record per layout
//! variant. It is constructed by deep-merging registry defaults with stored
//! or edited data, and is immutable per render — edits replace it wholesale.
//!
//! Dotted-path (stringly typed) access is deliberately confined to the
//! editor layer and the migration mapper, where the incoming shape is
//! dynamic; everything from here down is typed.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{
    config::{AccessibilityConfig, ResponsiveConfig, ThemeConfig},
    error::Result,
    model::{
        Background, ButtonConfig, FeatureItem, GalleryItem, Media, Overlay, ServiceItem, TextBlock,
        TestimonialItem, TrustBadge,
    },
    variant::HeroVariant,
};

/// Horizontal alignment of a content block.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlign {
    Left,
    #[default]
    Center,
    Right,
}

/// Which side of a split layout the media panel occupies.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaSide {
    Left,
    #[default]
    Right,
}

/// Testimonial arrangement.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TestimonialLayout {
    #[default]
    Carousel,
    Grid,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CenteredProps {
    pub title: TextBlock,
    pub subtitle: Option<TextBlock>,
    pub description: Option<TextBlock>,
    pub primary_button: Option<ButtonConfig>,
    pub secondary_button: Option<ButtonConfig>,
    pub background: Background,
    pub text_align: TextAlign,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SplitScreenProps {
    pub title: TextBlock,
    pub subtitle: Option<TextBlock>,
    pub description: Option<TextBlock>,
    pub primary_button: Option<ButtonConfig>,
    pub media: Media,
    pub media_side: MediaSide,
    pub background: Background,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VideoProps {
    pub title: TextBlock,
    pub subtitle: Option<TextBlock>,
    pub primary_button: Option<ButtonConfig>,
    pub video_url: String,
    pub poster: Option<String>,
    pub autoplay: bool,
    #[serde(rename = "loop")]
    pub loop_playback: bool,
    pub muted: bool,
    pub overlay: Option<Overlay>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MinimalProps {
    pub title: TextBlock,
    pub subtitle: Option<TextBlock>,
    pub primary_button: Option<ButtonConfig>,
    pub background: Background,
    pub text_align: TextAlign,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FeatureProps {
    pub title: TextBlock,
    pub description: Option<TextBlock>,
    pub features: Vec<FeatureItem>,
    pub columns: u8,
    pub background: Background,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TestimonialProps {
    pub title: TextBlock,
    pub testimonials: Vec<TestimonialItem>,
    pub layout: TestimonialLayout,
    pub background: Background,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProductProps {
    pub title: TextBlock,
    pub description: Option<TextBlock>,
    pub image: Media,
    pub price: Option<String>,
    pub primary_button: Option<ButtonConfig>,
    pub secondary_button: Option<ButtonConfig>,
    pub trust_badges: Vec<TrustBadge>,
    pub background: Background,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ServiceProps {
    pub title: TextBlock,
    pub description: Option<TextBlock>,
    pub services: Vec<ServiceItem>,
    pub columns: u8,
    pub background: Background,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CtaProps {
    pub title: TextBlock,
    pub subtitle: Option<TextBlock>,
    pub primary_button: Option<ButtonConfig>,
    pub secondary_button: Option<ButtonConfig>,
    pub urgency_text: Option<String>,
    pub background: Background,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GalleryProps {
    pub title: TextBlock,
    pub items: Vec<GalleryItem>,
    pub columns: u8,
    pub lightbox: bool,
    pub background: Background,
}

/// Variant-specific content, tagged by the `variant` field of the stored
/// JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "variant", rename_all = "kebab-case")]
pub enum VariantContent {
    Centered(CenteredProps),
    SplitScreen(SplitScreenProps),
    Video(VideoProps),
    Minimal(MinimalProps),
    Feature(FeatureProps),
    Testimonial(TestimonialProps),
    Product(ProductProps),
    Service(ServiceProps),
    Cta(CtaProps),
    Gallery(GalleryProps),
}

impl VariantContent {
    pub fn variant(&self) -> HeroVariant {
        match self {
            Self::Centered(_) => HeroVariant::Centered,
            Self::SplitScreen(_) => HeroVariant::SplitScreen,
            Self::Video(_) => HeroVariant::Video,
            Self::Minimal(_) => HeroVariant::Minimal,
            Self::Feature(_) => HeroVariant::Feature,
            Self::Testimonial(_) => HeroVariant::Testimonial,
            Self::Product(_) => HeroVariant::Product,
            Self::Service(_) => HeroVariant::Service,
            Self::Cta(_) => HeroVariant::Cta,
            Self::Gallery(_) => HeroVariant::Gallery,
        }
    }
}

impl Default for VariantContent {
    fn default() -> Self {
        Self::Centered(CenteredProps::default())
    }
}

/// The fully resolved, renderable property bag of one section instance.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeroProps {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub theme: ThemeConfig,
    #[serde(default)]
    pub responsive: ResponsiveConfig,
    #[serde(default)]
    pub accessibility: AccessibilityConfig,
    #[serde(flatten)]
    pub content: VariantContent,
}

impl HeroProps {
    pub fn variant(&self) -> HeroVariant {
        self.content.variant()
    }

    /// Deserializes a resolved property object.
    pub fn from_value(value: &Value) -> Result<Self> {
        Ok(serde_json::from_value(value.clone())?)
    }

    /// Serializes back into the stored JSON shape.
    pub fn to_value(&self) -> Result<Value> {
        Ok(serde_json::to_value(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_variant_tag_drives_content_type() {
        let value = json!({
            "id": "home-hero",
            "variant": "centered",
            "title": {"text": "Welcome", "tag": "h1"},
            "primaryButton": {"text": "Go", "url": "/start"},
            "background": {"type": "color", "color": "#111827"},
            "textAlign": "center"
        });
        let props = HeroProps::from_value(&value).unwrap();
        assert_eq!(props.variant(), HeroVariant::Centered);
        let VariantContent::Centered(content) = &props.content else {
            panic!("expected centered content");
        };
        assert_eq!(content.title.text, "Welcome");
        assert_eq!(content.primary_button.as_ref().unwrap().url, "/start");
    }

    #[test]
    fn test_unknown_variant_fails_typed_parse() {
        let value = json!({"variant": "not-a-real-variant", "title": {"text": "x"}});
        assert!(HeroProps::from_value(&value).is_err());
    }

    #[test]
    fn test_round_trip_keeps_variant_tag() {
        let props = HeroProps {
            id: "g1".into(),
            content: VariantContent::Gallery(GalleryProps {
                title: TextBlock::new("Shots"),
                columns: 3,
                lightbox: true,
                ..GalleryProps::default()
            }),
            ..HeroProps::default()
        };
        let value = props.to_value().unwrap();
        assert_eq!(value["variant"], json!("gallery"));
        assert_eq!(HeroProps::from_value(&value).unwrap(), props);
    }
}
