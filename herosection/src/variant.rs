//! The hero layout variant catalogue.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The closed set of hero layout variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HeroVariant {
    /// Centered title, subtitle and button group over a background.
    Centered,
    /// Content beside an image or video panel.
    SplitScreen,
    /// Full-bleed background video with overlaid content.
    Video,
    /// Reduced typography-only layout.
    Minimal,
    /// Headline plus a grid of feature items.
    Feature,
    /// Quote carousel or grid.
    Testimonial,
    /// Product shot with price, buttons and trust badges.
    Product,
    /// Service catalogue grid.
    Service,
    /// High-urgency call-to-action block.
    Cta,
    /// Image gallery grid with optional lightbox.
    Gallery,
}

impl HeroVariant {
    /// Every variant, in catalogue order.
    pub const ALL: [HeroVariant; 10] = [
        Self::Centered,
        Self::SplitScreen,
        Self::Video,
        Self::Minimal,
        Self::Feature,
        Self::Testimonial,
        Self::Product,
        Self::Service,
        Self::Cta,
        Self::Gallery,
    ];

    /// Kebab-case identifier used in section data (`split-screen`, `cta`).
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Centered => "centered",
            Self::SplitScreen => "split-screen",
            Self::Video => "video",
            Self::Minimal => "minimal",
            Self::Feature => "feature",
            Self::Testimonial => "testimonial",
            Self::Product => "product",
            Self::Service => "service",
            Self::Cta => "cta",
            Self::Gallery => "gallery",
        }
    }

    /// PascalCase name used in component identifiers.
    ///
    /// `Cta` is special-cased to `CTA`, matching the historical component
    /// names.
    pub fn pascal_name(&self) -> &'static str {
        match self {
            Self::Centered => "Centered",
            Self::SplitScreen => "SplitScreen",
            Self::Video => "Video",
            Self::Minimal => "Minimal",
            Self::Feature => "Feature",
            Self::Testimonial => "Testimonial",
            Self::Product => "Product",
            Self::Service => "Service",
            Self::Cta => "CTA",
            Self::Gallery => "Gallery",
        }
    }

    /// Registry section id for this variant (`hero-centered`).
    pub fn section_id(&self) -> String {
        format!("hero-{}", self.as_str())
    }

    /// Editor component name, `Hero<Pascal>Editor`.
    pub fn editor_component(&self) -> String {
        format!("Hero{}Editor", self.pascal_name())
    }

    /// Preview component name, `Hero<Pascal>Preview`.
    pub fn preview_component(&self) -> String {
        format!("Hero{}Preview", self.pascal_name())
    }
}

impl fmt::Display for HeroVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HeroVariant {
    type Err = crate::error::SectionError;

    /// Accepts the kebab-case variant name or the full section id
    /// (`centered` and `hero-centered` both parse to [`Self::Centered`]).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.strip_prefix("hero-").unwrap_or(s);
        Self::ALL
            .iter()
            .find(|v| v.as_str() == name)
            .copied()
            .ok_or_else(|| crate::error::SectionError::UnknownSection { id: s.to_string() })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_component_names_follow_pattern() {
        for variant in HeroVariant::ALL {
            let editor = variant.editor_component();
            let preview = variant.preview_component();
            assert!(editor.starts_with("Hero") && editor.ends_with("Editor"), "{editor}");
            assert!(preview.starts_with("Hero") && preview.ends_with("Preview"), "{preview}");
        }
        assert_eq!(HeroVariant::Cta.editor_component(), "HeroCTAEditor");
        assert_eq!(
            HeroVariant::SplitScreen.preview_component(),
            "HeroSplitScreenPreview"
        );
    }

    #[test]
    fn test_from_str_accepts_name_and_section_id() {
        assert_eq!(
            "split-screen".parse::<HeroVariant>().unwrap(),
            HeroVariant::SplitScreen
        );
        assert_eq!(
            "hero-gallery".parse::<HeroVariant>().unwrap(),
            HeroVariant::Gallery
        );
        assert!("not-a-real-variant".parse::<HeroVariant>().is_err());
    }

    #[test]
    fn test_serde_names_are_kebab_case() {
        let v: HeroVariant = serde_json::from_str("\"split-screen\"").unwrap();
        assert_eq!(v, HeroVariant::SplitScreen);
        assert_eq!(serde_json::to_string(&HeroVariant::Cta).unwrap(), "\"cta\"");
    }
}
