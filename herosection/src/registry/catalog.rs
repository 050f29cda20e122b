//! Builtin hero catalogue data.
//!
//! One entry per layout variant: default properties (which double as the
//! preview sample data) and the declarative editor schema. Shared schema
//! fragments (title, background, buttons, theme, accessibility) are built
//! once here and composed per variant, so the show/hide and validation
//! behavior stays identical across editors.

use std::collections::BTreeSet;

use formedit::schema::{
    EditorSchema, EditorSection, FieldDefinition, FieldDependency, SelectOption,
};
use serde_json::{Value, json};

use crate::{
    config::{AccessibilityConfig, ResponsiveConfig, ThemeConfig, ThemeMode},
    variant::HeroVariant,
};

use super::SectionConfig;

/// All builtin entries, in catalogue order.
pub fn builtin_entries() -> Vec<SectionConfig> {
    vec![
        centered(),
        split_screen(),
        video(),
        minimal(),
        feature(),
        testimonial(),
        product(),
        service(),
        cta(),
        gallery(),
    ]
}

fn entry(
    variant: HeroVariant,
    name: &str,
    description: &str,
    icon: &str,
    tags: &[&str],
    default_props: Value,
    editor_schema: EditorSchema,
) -> SectionConfig {
    SectionConfig {
        id: variant.section_id(),
        variant,
        name: name.to_string(),
        description: description.to_string(),
        icon: icon.to_string(),
        category: "hero".to_string(),
        default_props,
        editor_schema,
        editor_component: variant.editor_component(),
        preview_component: variant.preview_component(),
        tags: tags.iter().map(|t| (*t).to_string()).collect::<BTreeSet<_>>(),
        is_active: true,
        version: "1.0.0".to_string(),
        theme_compatibility: vec![ThemeMode::Light, ThemeMode::Dark, ThemeMode::Custom],
        responsive_support: true,
    }
}

/// Shared base of every default property object.
fn base_props(variant: HeroVariant) -> Value {
    json!({
        "id": variant.section_id(),
        "variant": variant.as_str(),
        "theme": serde_json::to_value(ThemeConfig::default()).expect("theme defaults serialize"),
        "responsive": serde_json::to_value(ResponsiveConfig::default())
            .expect("responsive defaults serialize"),
        "accessibility": serde_json::to_value(AccessibilityConfig::default())
            .expect("accessibility defaults serialize"),
    })
}

fn props(variant: HeroVariant, content: Value) -> Value {
    formedit::path::merge(&base_props(variant), &content)
}

// --- Shared schema fragments ---

fn heading_options() -> Vec<SelectOption> {
    ["h1", "h2", "h3", "h4", "h5", "h6", "p"]
        .iter()
        .map(|tag| SelectOption::new(tag.to_uppercase(), *tag))
        .collect()
}

fn title_section() -> EditorSection {
    EditorSection::new("content", "Content")
        .icon("text")
        .field(
            FieldDefinition::text("title.text", "Title")
                .required("Title is required")
                .max_length(120, "Title must be at most 120 characters"),
        )
        .field(FieldDefinition::select(
            "title.tag",
            "Title tag",
            heading_options(),
        ))
        .field(FieldDefinition::text("subtitle.text", "Subtitle"))
        .field(FieldDefinition::color("title.color", "Title color"))
}

fn button_fields(path: &str, label: &str) -> Vec<FieldDefinition> {
    vec![
        FieldDefinition::text(format!("{path}.text"), format!("{label} text")),
        FieldDefinition::url(format!("{path}.url"), format!("{label} URL")).pattern(
            "^(/|https?://|#|mailto:)",
            "URL must be absolute, root-relative, an anchor or a mailto link",
        ),
        FieldDefinition::select(
            format!("{path}.style"),
            format!("{label} style"),
            vec![
                SelectOption::new("Primary", "primary"),
                SelectOption::new("Secondary", "secondary"),
                SelectOption::new("Outline", "outline"),
                SelectOption::new("Ghost", "ghost"),
                SelectOption::new("Link", "link"),
            ],
        ),
        FieldDefinition::select(
            format!("{path}.target"),
            format!("{label} opens in"),
            vec![
                SelectOption::new("Same tab", "SELF"),
                SelectOption::new("New tab", "BLANK"),
            ],
        ),
    ]
}

fn buttons_section() -> EditorSection {
    let mut section = EditorSection::new("buttons", "Buttons").icon("cursor");
    for field in button_fields("primaryButton", "Primary button") {
        section = section.field(field);
    }
    for field in button_fields("secondaryButton", "Secondary button") {
        section = section.field(field);
    }
    section
}

/// Background fields plus the dependencies that gate them on
/// `background.type`.
fn background_section() -> (EditorSection, Vec<FieldDependency>) {
    let section = EditorSection::new("background", "Background")
        .icon("image")
        .field(FieldDefinition::select(
            "background.type",
            "Type",
            vec![
                SelectOption::new("Solid color", "color"),
                SelectOption::new("Gradient", "gradient"),
                SelectOption::new("Image", "image"),
                SelectOption::new("Video", "video"),
            ],
        ))
        .field(FieldDefinition::color("background.color", "Color"))
        .field(FieldDefinition::color("background.from", "Gradient from"))
        .field(FieldDefinition::color("background.to", "Gradient to"))
        .field(FieldDefinition::slider("background.angle", "Gradient angle", 0.0, 360.0, 15.0))
        .field(FieldDefinition::image("background.url", "Image URL"))
        .field(FieldDefinition::text("background.alt", "Image alt text"))
        .field(FieldDefinition::image("background.poster", "Video poster"))
        .field(FieldDefinition::slider(
            "background.overlay.opacity",
            "Overlay opacity",
            0.0,
            1.0,
            0.05,
        ))
        .field(FieldDefinition::color("background.overlay.color", "Overlay color"));

    let deps = vec![
        FieldDependency::show_when_equals("background.color", "background.type", "color"),
        FieldDependency::show_when_equals("background.from", "background.type", "gradient"),
        FieldDependency::show_when_equals("background.to", "background.type", "gradient"),
        FieldDependency::show_when_equals("background.angle", "background.type", "gradient"),
        FieldDependency::show_when_equals("background.alt", "background.type", "image"),
        FieldDependency::show_when_equals("background.poster", "background.type", "video"),
        FieldDependency::hide_when_equals("background.url", "background.type", "color"),
        FieldDependency::hide_when_equals("background.url", "background.type", "gradient"),
        FieldDependency::hide_when_equals("background.overlay.opacity", "background.type", "color"),
        FieldDependency::hide_when_equals("background.overlay.opacity", "background.type", "gradient"),
        FieldDependency::hide_when_equals("background.overlay.color", "background.type", "color"),
        FieldDependency::hide_when_equals("background.overlay.color", "background.type", "gradient"),
    ];
    (section, deps)
}

fn theme_section() -> EditorSection {
    EditorSection::new("theme", "Theme")
        .icon("palette")
        .collapsed()
        .field(FieldDefinition::select(
            "theme.mode",
            "Mode",
            vec![
                SelectOption::new("Light", "light"),
                SelectOption::new("Dark", "dark"),
                SelectOption::new("Custom", "custom"),
            ],
        ))
        .field(
            FieldDefinition::color("theme.primaryColor", "Primary color")
                .pattern("^#[0-9a-fA-F]{6}$", "Use a 6-digit hex color"),
        )
        .field(
            FieldDefinition::color("theme.textColor", "Text color")
                .pattern("^#[0-9a-fA-F]{6}$", "Use a 6-digit hex color"),
        )
}

fn accessibility_section() -> EditorSection {
    EditorSection::new("accessibility", "Accessibility")
        .icon("access")
        .collapsed()
        .field(FieldDefinition::text("accessibility.ariaLabel", "ARIA label"))
        .field(FieldDefinition::boolean("accessibility.reducedMotion", "Reduce motion"))
        .field(FieldDefinition::boolean("accessibility.highContrast", "High contrast"))
        .field(FieldDefinition::text("accessibility.defaultAlt", "Fallback alt text"))
}

/// The schema shape shared by most variants: content, variant-specific
/// sections, background (with its dependencies), theme, accessibility.
fn standard_schema(extra_sections: Vec<EditorSection>, with_buttons: bool) -> EditorSchema {
    let (background, deps) = background_section();
    let mut schema = EditorSchema::new().section(title_section());
    if with_buttons {
        schema = schema.section(buttons_section());
    }
    for section in extra_sections {
        schema = schema.section(section);
    }
    schema = schema
        .section(background)
        .section(theme_section())
        .section(accessibility_section());
    for dep in deps {
        schema = schema.dependency(dep);
    }
    schema
}

// --- Variant entries ---

fn centered() -> SectionConfig {
    let layout = EditorSection::new("layout", "Layout").field(FieldDefinition::select(
        "textAlign",
        "Text alignment",
        vec![
            SelectOption::new("Left", "left"),
            SelectOption::new("Center", "center"),
            SelectOption::new("Right", "right"),
        ],
    ));
    entry(
        HeroVariant::Centered,
        "Centered hero",
        "Title, subtitle and buttons centered over a full-width background",
        "align-center",
        &["banner", "classic", "buttons"],
        props(
            HeroVariant::Centered,
            json!({
                "title": {"text": "Build pages people remember", "tag": "h1"},
                "subtitle": {"text": "Compose your story from configurable sections", "tag": "p"},
                "primaryButton": {"text": "Get started", "url": "/signup", "style": "primary"},
                "secondaryButton": {"text": "Learn more", "url": "/docs", "style": "outline"},
                "background": {"type": "color", "color": "#111827"},
                "textAlign": "center"
            }),
        ),
        standard_schema(vec![layout], true),
    )
}

fn split_screen() -> SectionConfig {
    let media = EditorSection::new("media", "Media")
        .icon("image")
        .field(FieldDefinition::image("media.url", "Media URL").required("Media URL is required"))
        .field(FieldDefinition::text("media.alt", "Media alt text"))
        .field(FieldDefinition::boolean("media.video", "Media is a video"))
        .field(FieldDefinition::select(
            "mediaSide",
            "Media side",
            vec![
                SelectOption::new("Left", "left"),
                SelectOption::new("Right", "right"),
            ],
        ));
    entry(
        HeroVariant::SplitScreen,
        "Split-screen hero",
        "Copy on one side, image or video panel on the other",
        "columns",
        &["media", "two-column"],
        props(
            HeroVariant::SplitScreen,
            json!({
                "title": {"text": "Show, then tell", "tag": "h1"},
                "subtitle": {"text": "Pair your message with a visual", "tag": "p"},
                "primaryButton": {"text": "See it in action", "url": "/demo"},
                "media": {"url": "/media/hero-split.jpg", "alt": "Product screenshot", "video": false},
                "mediaSide": "right",
                "background": {"type": "color", "color": "#ffffff"}
            }),
        ),
        standard_schema(vec![media], true),
    )
}

fn video() -> SectionConfig {
    let playback = EditorSection::new("video", "Video")
        .icon("play")
        .field(FieldDefinition::video("videoUrl", "Video URL").required("Video URL is required"))
        .field(FieldDefinition::image("poster", "Poster image"))
        .field(FieldDefinition::boolean("autoplay", "Autoplay").default_value(true))
        .field(FieldDefinition::boolean("loop", "Loop").default_value(true))
        .field(FieldDefinition::boolean("muted", "Muted").default_value(true))
        .field(FieldDefinition::slider("overlay.opacity", "Overlay opacity", 0.0, 1.0, 0.05));
    // Video heroes own their background; no background section here.
    let mut schema = EditorSchema::new()
        .section(title_section())
        .section(buttons_section())
        .section(playback)
        .section(theme_section())
        .section(accessibility_section());
    schema = schema.dependency(FieldDependency::hide_when_equals("poster", "autoplay", true));
    entry(
        HeroVariant::Video,
        "Video hero",
        "Full-bleed background video with overlaid title and buttons",
        "film",
        &["video", "motion", "media"],
        props(
            HeroVariant::Video,
            json!({
                "title": {"text": "Motion tells the story", "tag": "h1"},
                "primaryButton": {"text": "Watch the film", "url": "/film"},
                "videoUrl": "/media/hero.mp4",
                "poster": "/media/hero-poster.jpg",
                "autoplay": true,
                "loop": true,
                "muted": true,
                "overlay": {"color": "#000000", "opacity": 0.4}
            }),
        ),
        schema,
    )
}

fn minimal() -> SectionConfig {
    let layout = EditorSection::new("layout", "Layout").field(FieldDefinition::select(
        "textAlign",
        "Text alignment",
        vec![
            SelectOption::new("Left", "left"),
            SelectOption::new("Center", "center"),
            SelectOption::new("Right", "right"),
        ],
    ));
    entry(
        HeroVariant::Minimal,
        "Minimal hero",
        "Typography-only opener with a single optional button",
        "minus",
        &["minimal", "typography"],
        props(
            HeroVariant::Minimal,
            json!({
                "title": {"text": "Less, but better", "tag": "h1"},
                "subtitle": {"text": "One message, no noise", "tag": "p"},
                "primaryButton": {"text": "Read on", "url": "/story", "style": "link"},
                "background": {"type": "color", "color": "#ffffff"},
                "textAlign": "left"
            }),
        ),
        standard_schema(vec![layout], true),
    )
}

fn feature() -> SectionConfig {
    let features = EditorSection::new("features", "Features")
        .icon("grid")
        .field(FieldDefinition::slider("columns", "Columns", 1.0, 4.0, 1.0))
        .field(
            FieldDefinition::repeater("features", "Feature items").default_value(json!({
                "id": "feature",
                "icon": "star",
                "title": "New feature",
                "description": ""
            })),
        );
    entry(
        HeroVariant::Feature,
        "Feature hero",
        "Headline above a grid of product features",
        "grid",
        &["features", "grid", "list"],
        props(
            HeroVariant::Feature,
            json!({
                "title": {"text": "Everything in one place", "tag": "h1"},
                "description": {"text": "The essentials, side by side", "tag": "p"},
                "features": [
                    {"id": "feature-1", "icon": "zap", "title": "Fast",
                     "description": "Renders in milliseconds"},
                    {"id": "feature-2", "icon": "shield", "title": "Safe",
                     "description": "Validated before every save"},
                    {"id": "feature-3", "icon": "layers", "title": "Composable",
                     "description": "Sections combine freely"}
                ],
                "columns": 3,
                "background": {"type": "color", "color": "#f9fafb"}
            }),
        ),
        standard_schema(vec![features], false),
    )
}

fn testimonial() -> SectionConfig {
    let quotes = EditorSection::new("testimonials", "Testimonials")
        .icon("quote")
        .field(FieldDefinition::select(
            "layout",
            "Layout",
            vec![
                SelectOption::new("Carousel", "carousel"),
                SelectOption::new("Grid", "grid"),
            ],
        ))
        .field(
            FieldDefinition::repeater("testimonials", "Quotes").default_value(json!({
                "id": "testimonial",
                "quote": "",
                "author": "",
                "role": null,
                "rating": 5
            })),
        );
    entry(
        HeroVariant::Testimonial,
        "Testimonial hero",
        "Customer quotes as the opening statement",
        "quote",
        &["social-proof", "quotes", "list"],
        props(
            HeroVariant::Testimonial,
            json!({
                "title": {"text": "Loved by the people who use it", "tag": "h2"},
                "testimonials": [
                    {"id": "testimonial-1", "quote": "We shipped our relaunch in a week.",
                     "author": "Maya K.", "role": "Head of Content", "rating": 5},
                    {"id": "testimonial-2", "quote": "The editor finally makes sense.",
                     "author": "Jonas B.", "role": "Marketing Lead", "rating": 5}
                ],
                "layout": "carousel",
                "background": {"type": "color", "color": "#ffffff"}
            }),
        ),
        standard_schema(vec![quotes], false),
    )
}

fn product() -> SectionConfig {
    let product = EditorSection::new("product", "Product")
        .icon("package")
        .field(FieldDefinition::image("image.url", "Product image").required("Product image is required"))
        .field(FieldDefinition::text("image.alt", "Image alt text"))
        .field(FieldDefinition::text("price", "Price label"))
        .field(
            FieldDefinition::repeater("trustBadges", "Trust badges").default_value(json!({
                "id": "badge",
                "image": "",
                "label": ""
            })),
        );
    entry(
        HeroVariant::Product,
        "Product hero",
        "Product shot with price, call-to-action and trust badges",
        "package",
        &["commerce", "product", "conversion"],
        props(
            HeroVariant::Product,
            json!({
                "title": {"text": "The last notebook you'll buy", "tag": "h1"},
                "description": {"text": "Hard cover, soft pages, honest price", "tag": "p"},
                "image": {"url": "/media/product.jpg", "alt": "Notebook on a desk"},
                "price": "$24",
                "primaryButton": {"text": "Buy now", "url": "/checkout"},
                "trustBadges": [
                    {"id": "badge-1", "image": "/media/badge-ssl.svg", "label": "Secure checkout"},
                    {"id": "badge-2", "image": "/media/badge-returns.svg", "label": "30-day returns"}
                ],
                "background": {"type": "color", "color": "#ffffff"}
            }),
        ),
        standard_schema(vec![product], true),
    )
}

fn service() -> SectionConfig {
    let services = EditorSection::new("services", "Services")
        .icon("briefcase")
        .field(FieldDefinition::slider("columns", "Columns", 1.0, 4.0, 1.0))
        .field(
            FieldDefinition::repeater("services", "Service items").default_value(json!({
                "id": "service",
                "icon": "circle",
                "title": "New service",
                "description": "",
                "link": null
            })),
        );
    entry(
        HeroVariant::Service,
        "Service hero",
        "Service catalogue grid with links into detail pages",
        "briefcase",
        &["services", "grid", "list"],
        props(
            HeroVariant::Service,
            json!({
                "title": {"text": "What we do", "tag": "h1"},
                "services": [
                    {"id": "service-1", "icon": "pen", "title": "Design",
                     "description": "Identity and interface design", "link": "/services/design"},
                    {"id": "service-2", "icon": "code", "title": "Build",
                     "description": "Web engineering end to end", "link": "/services/build"}
                ],
                "columns": 2,
                "background": {"type": "color", "color": "#f9fafb"}
            }),
        ),
        standard_schema(vec![services], false),
    )
}

fn cta() -> SectionConfig {
    let urgency = EditorSection::new("cta", "Call to action")
        .icon("megaphone")
        .field(FieldDefinition::text("urgencyText", "Urgency text").max_length(
            80,
            "Urgency text must be at most 80 characters",
        ));
    entry(
        HeroVariant::Cta,
        "CTA hero",
        "High-contrast call-to-action block with urgency messaging",
        "megaphone",
        &["conversion", "cta", "banner"],
        props(
            HeroVariant::Cta,
            json!({
                "title": {"text": "Launch week: 30% off", "tag": "h1"},
                "subtitle": {"text": "Offer ends Sunday", "tag": "p"},
                "primaryButton": {"text": "Claim the offer", "url": "/offer"},
                "urgencyText": "Only a few seats left",
                "background": {"type": "gradient", "from": "#2563eb", "to": "#9333ea", "angle": 135}
            }),
        ),
        standard_schema(vec![urgency], true),
    )
}

fn gallery() -> SectionConfig {
    let items = EditorSection::new("gallery", "Gallery")
        .icon("images")
        .field(FieldDefinition::slider("columns", "Columns", 1.0, 6.0, 1.0))
        .field(FieldDefinition::boolean("lightbox", "Open images in a lightbox"))
        .field(
            FieldDefinition::repeater("items", "Images").default_value(json!({
                "id": "gallery",
                "image": "",
                "alt": "",
                "caption": null
            })),
        );
    entry(
        HeroVariant::Gallery,
        "Gallery hero",
        "Image grid opener with optional lightbox",
        "images",
        &["gallery", "images", "grid"],
        props(
            HeroVariant::Gallery,
            json!({
                "title": {"text": "Recent work", "tag": "h2"},
                "items": [
                    {"id": "gallery-1", "image": "/media/work-1.jpg", "alt": "Poster series"},
                    {"id": "gallery-2", "image": "/media/work-2.jpg", "alt": "Packaging"},
                    {"id": "gallery-3", "image": "/media/work-3.jpg", "alt": "Web campaign",
                     "caption": "Campaign, 2025"}
                ],
                "columns": 3,
                "lightbox": true,
                "background": {"type": "color", "color": "#ffffff"}
            }),
        ),
        standard_schema(vec![items], false),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::props::HeroProps;

    #[test]
    fn test_default_props_parse_into_typed_model() {
        for entry in builtin_entries() {
            let parsed = HeroProps::from_value(&entry.default_props)
                .unwrap_or_else(|e| panic!("defaults of `{}` invalid: {e}", entry.id));
            assert_eq!(parsed.variant(), entry.variant, "{}", entry.id);
        }
    }

    #[test]
    fn test_editor_schemas_verify() {
        for entry in builtin_entries() {
            entry
                .editor_schema
                .verify()
                .unwrap_or_else(|e| panic!("schema of `{}` invalid: {e}", entry.id));
        }
    }

    #[test]
    fn test_background_fields_gate_on_type() {
        let entry = centered();
        let props = entry.default_props.clone();
        // Color background: color visible, image url hidden.
        assert!(entry.editor_schema.is_visible("background.color", &props));
        assert!(!entry.editor_schema.is_visible("background.url", &props));

        let props = formedit::path::with_path(&props, "background.type", json!("image"));
        assert!(!entry.editor_schema.is_visible("background.color", &props));
        assert!(entry.editor_schema.is_visible("background.url", &props));
        assert!(entry.editor_schema.is_visible("background.overlay.opacity", &props));
    }
}
