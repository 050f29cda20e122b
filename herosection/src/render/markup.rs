//! Shared HTML building blocks.
//!
//! All user-supplied strings pass through [`escape_html`] or
//! [`escape_attr`] before reaching the output; renderers never
//! interpolate raw property values.

use std::fmt::Write;

use crate::{
    config::AccessibilityConfig,
    model::{Background, ButtonConfig, ButtonSize, ButtonStyle, LinkTarget, TextBlock},
    props::{HeroProps, TextAlign},
};

/// Escapes text content.
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Escapes attribute values. Same set as [`escape_html`]; kept separate so
/// call sites state which context they write into.
pub fn escape_attr(input: &str) -> String {
    escape_html(input)
}

pub fn align_class(align: TextAlign) -> &'static str {
    match align {
        TextAlign::Left => "align-left",
        TextAlign::Center => "align-center",
        TextAlign::Right => "align-right",
    }
}

/// Opens the section root element: id, variant class, ARIA label and the
/// background of the section.
pub fn section_open(props: &HeroProps, extra_class: &str) -> String {
    let variant = props.variant();
    let mut open = String::new();
    let _ = write!(
        open,
        "<section class=\"hero hero-{}{}{}\"",
        variant.as_str(),
        if extra_class.is_empty() { "" } else { " " },
        extra_class
    );
    if !props.id.is_empty() {
        let _ = write!(open, " id=\"{}\"", escape_attr(&props.id));
    }
    let _ = write!(open, " data-variant=\"{}\"", variant.as_str());
    let label = props
        .accessibility
        .aria_label
        .as_deref()
        .filter(|l| !l.is_empty());
    match label {
        Some(label) => {
            let _ = write!(open, " aria-label=\"{}\"", escape_attr(label));
        }
        None => open.push_str(" role=\"region\""),
    }
    if props.accessibility.reduced_motion {
        open.push_str(" data-reduced-motion=\"true\"");
    }
    open.push('>');
    open
}

pub fn section_close() -> &'static str {
    "</section>"
}

/// Markup for a section background. Color and gradient become a styled
/// layer; image and video become real elements so alt text and posters
/// survive.
pub fn background(bg: &Background, access: &AccessibilityConfig) -> String {
    let mut out = String::new();
    match bg {
        Background::Color { color } => {
            let _ = write!(
                out,
                "<div class=\"hero-bg\" style=\"background-color:{}\"></div>",
                escape_attr(color)
            );
        }
        Background::Gradient { from, to, angle } => {
            let _ = write!(
                out,
                "<div class=\"hero-bg\" style=\"background:linear-gradient({}deg,{},{})\"></div>",
                angle,
                escape_attr(from),
                escape_attr(to)
            );
        }
        Background::Image { url, alt, overlay } => {
            let alt = if alt.is_empty() { &access.default_alt } else { alt };
            let _ = write!(
                out,
                "<img class=\"hero-bg\" src=\"{}\" alt=\"{}\">",
                escape_attr(url),
                escape_attr(alt)
            );
            if let Some(overlay) = overlay {
                let _ = write!(
                    out,
                    "<div class=\"hero-overlay\" style=\"background-color:{};opacity:{}\"></div>",
                    escape_attr(&overlay.color),
                    overlay.opacity
                );
            }
        }
        Background::Video { url, poster, overlay } => {
            let _ = write!(
                out,
                "<video class=\"hero-bg\" src=\"{}\"",
                escape_attr(url)
            );
            if let Some(poster) = poster {
                let _ = write!(out, " poster=\"{}\"", escape_attr(poster));
            }
            // Reduced motion suppresses autoplay; the video stays present
            // and playable.
            if !access.reduced_motion {
                out.push_str(" autoplay");
            }
            out.push_str(" loop muted playsinline></video>");
            if let Some(overlay) = overlay {
                let _ = write!(
                    out,
                    "<div class=\"hero-overlay\" style=\"background-color:{};opacity:{}\"></div>",
                    escape_attr(&overlay.color),
                    overlay.opacity
                );
            }
        }
    }
    out
}

/// Renders a text block with its configured heading tag and inline style.
pub fn text_block(block: &TextBlock, class: &str) -> String {
    let tag = block.tag.as_str();
    let mut style = String::new();
    if let Some(color) = &block.color {
        let _ = write!(style, "color:{};", escape_attr(color));
    }
    if let Some(size) = &block.font_size {
        let _ = write!(style, "font-size:{};", escape_attr(size));
    }
    let style_attr = if style.is_empty() {
        String::new()
    } else {
        format!(" style=\"{style}\"")
    };
    format!(
        "<{tag} class=\"{class}\"{style_attr}>{}</{tag}>",
        escape_html(&block.text)
    )
}

/// Like [`text_block`] for optional blocks, skipping empty text.
pub fn optional_text(block: Option<&TextBlock>, class: &str) -> String {
    match block {
        Some(block) if !block.text.is_empty() => text_block(block, class),
        _ => String::new(),
    }
}

fn style_class(style: ButtonStyle) -> &'static str {
    match style {
        ButtonStyle::Primary => "btn-primary",
        ButtonStyle::Secondary => "btn-secondary",
        ButtonStyle::Outline => "btn-outline",
        ButtonStyle::Ghost => "btn-ghost",
        ButtonStyle::Link => "btn-link",
    }
}

fn size_class(size: ButtonSize) -> &'static str {
    match size {
        ButtonSize::Small => "btn-sm",
        ButtonSize::Medium => "btn-md",
        ButtonSize::Large => "btn-lg",
    }
}

/// One call-to-action anchor. Buttons without text render nothing.
pub fn button(config: &ButtonConfig) -> String {
    if config.text.is_empty() {
        return String::new();
    }
    let href = if config.url.is_empty() { "#" } else { &config.url };
    let target = match config.target {
        LinkTarget::Blank => " target=\"_blank\" rel=\"noopener\"",
        LinkTarget::Self_ => "",
    };
    let icon = match &config.icon {
        Some(icon) if !icon.is_empty() => {
            format!("<span class=\"btn-icon\" data-icon=\"{}\"></span>", escape_attr(icon))
        }
        _ => String::new(),
    };
    format!(
        "<a class=\"btn {} {}\" href=\"{}\"{target}>{icon}{}</a>",
        style_class(config.style),
        size_class(config.size),
        escape_attr(href),
        escape_html(&config.text)
    )
}

/// The button row; empty when neither button renders.
pub fn button_group(primary: Option<&ButtonConfig>, secondary: Option<&ButtonConfig>) -> String {
    let buttons: String = [primary, secondary]
        .into_iter()
        .flatten()
        .map(button)
        .collect();
    if buttons.is_empty() {
        String::new()
    } else {
        format!("<div class=\"hero-buttons\">{buttons}</div>")
    }
}

/// An image with alt fallback from the accessibility configuration.
pub fn image(url: &str, alt: &str, class: &str, access: &AccessibilityConfig) -> String {
    let alt = if alt.is_empty() { &access.default_alt } else { alt };
    format!(
        "<img class=\"{class}\" src=\"{}\" alt=\"{}\">",
        escape_attr(url),
        escape_attr(alt)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::HeadingTag;

    #[test]
    fn test_escape_html_covers_markup_characters() {
        assert_eq!(
            escape_html("<b>\"a\" & 'b'</b>"),
            "&lt;b&gt;&quot;a&quot; &amp; &#39;b&#39;&lt;/b&gt;"
        );
    }

    #[test]
    fn test_text_block_uses_configured_tag() {
        let block = TextBlock::new("Hi").with_tag(HeadingTag::H3);
        assert_eq!(text_block(&block, "hero-title"), "<h3 class=\"hero-title\">Hi</h3>");
    }

    #[test]
    fn test_button_target_blank_gets_noopener() {
        let mut config = ButtonConfig::new("Go", "https://example.com");
        config.target = LinkTarget::Blank;
        let html = button(&config);
        assert!(html.contains("target=\"_blank\" rel=\"noopener\""));
        assert!(html.contains("href=\"https://example.com\""));
    }

    #[test]
    fn test_video_background_honors_reduced_motion() {
        let bg = Background::Video {
            url: "/media/hero.mp4".into(),
            poster: None,
            overlay: None,
        };
        let mut access = AccessibilityConfig::default();
        assert!(background(&bg, &access).contains(" autoplay"));

        access.reduced_motion = true;
        let html = background(&bg, &access);
        assert!(!html.contains("autoplay"));
        assert!(html.contains(" loop muted playsinline"));
    }

    #[test]
    fn test_section_open_prefers_aria_label() {
        let mut props = HeroProps::default();
        props.id = "home-hero".into();
        props.accessibility.aria_label = Some("Welcome banner".into());
        let open = section_open(&props, "");
        assert!(open.contains("aria-label=\"Welcome banner\""));
        assert!(!open.contains("role=\"region\""));
        assert!(open.contains("id=\"home-hero\""));

        props.accessibility.aria_label = None;
        assert!(section_open(&props, "").contains("role=\"region\""));
    }
}
