//! Server-side HTML rendering of sections.
//!
//! Each variant has one renderer behind the [`VariantRenderer`] trait; the
//! output is plain HTML with stable class names, no client runtime. The
//! top-level [`render_section`] entry point is total over stored JSON:
//! objects that fail the typed parse render as a default centered section
//! instead of erroring, so a page with one corrupt section still renders.

use std::sync::Arc;

use log::warn;
use serde_json::Value;

use crate::{
    error::{Result, SectionError},
    props::HeroProps,
    variant::HeroVariant,
};

pub mod markup;
mod variants;

/// Renders one layout variant to HTML.
pub trait VariantRenderer: Send + Sync {
    /// The variant this renderer accepts.
    fn variant(&self) -> HeroVariant;

    /// Renders resolved properties. Fails with
    /// [`SectionError::VariantMismatch`] when handed another variant's
    /// content.
    fn render(&self, props: &HeroProps) -> Result<String>;
}

fn mismatch(expected: HeroVariant, props: &HeroProps) -> SectionError {
    SectionError::VariantMismatch {
        expected: expected.as_str(),
        found: props.variant().as_str(),
    }
}

/// The renderer implementation for a variant.
pub fn renderer_for(variant: HeroVariant) -> Arc<dyn VariantRenderer> {
    match variant {
        HeroVariant::Centered => Arc::new(variants::CenteredRenderer),
        HeroVariant::SplitScreen => Arc::new(variants::SplitScreenRenderer),
        HeroVariant::Video => Arc::new(variants::VideoRenderer),
        HeroVariant::Minimal => Arc::new(variants::MinimalRenderer),
        HeroVariant::Feature => Arc::new(variants::FeatureRenderer),
        HeroVariant::Testimonial => Arc::new(variants::TestimonialRenderer),
        HeroVariant::Product => Arc::new(variants::ProductRenderer),
        HeroVariant::Service => Arc::new(variants::ServiceRenderer),
        HeroVariant::Cta => Arc::new(variants::CtaRenderer),
        HeroVariant::Gallery => Arc::new(variants::GalleryRenderer),
    }
}

/// Renders typed properties with the matching renderer.
pub fn render_props(props: &HeroProps) -> Result<String> {
    renderer_for(props.variant()).render(props)
}

/// Renders a stored section object.
///
/// Unparseable objects degrade to a default centered section with a
/// warning; rendering itself can still fail, and that failure propagates.
pub fn render_section(value: &Value) -> Result<String> {
    let props = match HeroProps::from_value(value) {
        Ok(props) => props,
        Err(e) => {
            warn!("stored section does not parse, rendering centered defaults: {e}");
            let mut props = HeroProps::default();
            if let Some(id) = value.get("id").and_then(Value::as_str) {
                props.id = id.to_string();
            }
            props
        }
    };
    render_props(&props)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::props::{CenteredProps, VariantContent};
    use crate::model::TextBlock;
    use serde_json::json;

    fn centered(title: &str) -> HeroProps {
        HeroProps {
            id: "home-hero".into(),
            content: VariantContent::Centered(CenteredProps {
                title: TextBlock::new(title),
                ..CenteredProps::default()
            }),
            ..HeroProps::default()
        }
    }

    #[test]
    fn test_render_escapes_user_text() {
        let html = render_props(&centered("<script>alert(1)</script>")).unwrap();
        assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
        assert!(!html.contains("<script>"));
    }

    #[test]
    fn test_renderer_rejects_wrong_variant() {
        let renderer = renderer_for(HeroVariant::Gallery);
        let err = renderer.render(&centered("x")).unwrap_err();
        assert!(matches!(
            err,
            SectionError::VariantMismatch {
                expected: "gallery",
                found: "centered"
            }
        ));
    }

    #[test]
    fn test_every_builtin_default_renders() {
        let registry = crate::registry::SectionRegistry::builtin();
        for entry in registry.entries() {
            let html = render_section(&entry.default_props).unwrap();
            assert!(html.starts_with("<section"), "{}", entry.id);
            assert!(
                html.contains(&format!("data-variant=\"{}\"", entry.variant.as_str())),
                "{}",
                entry.id
            );
        }
    }

    #[test]
    fn test_unparseable_section_degrades_to_centered() {
        let html = render_section(&json!({"id": "broken", "variant": "holo-cube"})).unwrap();
        assert!(html.contains("data-variant=\"centered\""));
        assert!(html.contains("id=\"broken\""));
    }
}
