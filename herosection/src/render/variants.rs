//! One renderer per layout variant.

use std::fmt::Write;

use crate::{
    error::Result,
    model::Media,
    props::{HeroProps, MediaSide, TestimonialLayout, VariantContent},
    variant::HeroVariant,
};

use super::{VariantRenderer, markup, mismatch};

fn media_panel(media: &Media, props: &HeroProps) -> String {
    if media.video {
        let poster = match &media.poster {
            Some(poster) => format!(" poster=\"{}\"", markup::escape_attr(poster)),
            None => String::new(),
        };
        format!(
            "<video class=\"hero-media\" src=\"{}\"{poster} controls playsinline></video>",
            markup::escape_attr(&media.url)
        )
    } else {
        markup::image(&media.url, &media.alt, "hero-media", &props.accessibility)
    }
}

pub(super) struct CenteredRenderer;

impl VariantRenderer for CenteredRenderer {
    fn variant(&self) -> HeroVariant {
        HeroVariant::Centered
    }

    fn render(&self, props: &HeroProps) -> Result<String> {
        let VariantContent::Centered(c) = &props.content else {
            return Err(mismatch(self.variant(), props));
        };
        Ok(format!(
            "{}{}<div class=\"hero-content {}\">{}{}{}{}</div>{}",
            markup::section_open(props, markup::align_class(c.text_align)),
            markup::background(&c.background, &props.accessibility),
            markup::align_class(c.text_align),
            markup::text_block(&c.title, "hero-title"),
            markup::optional_text(c.subtitle.as_ref(), "hero-subtitle"),
            markup::optional_text(c.description.as_ref(), "hero-description"),
            markup::button_group(c.primary_button.as_ref(), c.secondary_button.as_ref()),
            markup::section_close()
        ))
    }
}

pub(super) struct SplitScreenRenderer;

impl VariantRenderer for SplitScreenRenderer {
    fn variant(&self) -> HeroVariant {
        HeroVariant::SplitScreen
    }

    fn render(&self, props: &HeroProps) -> Result<String> {
        let VariantContent::SplitScreen(c) = &props.content else {
            return Err(mismatch(self.variant(), props));
        };
        let side = match c.media_side {
            MediaSide::Left => "media-left",
            MediaSide::Right => "media-right",
        };
        Ok(format!(
            "{}{}<div class=\"hero-split {side}\">\
             <div class=\"hero-copy\">{}{}{}{}</div>\
             <div class=\"hero-panel\">{}</div>\
             </div>{}",
            markup::section_open(props, side),
            markup::background(&c.background, &props.accessibility),
            markup::text_block(&c.title, "hero-title"),
            markup::optional_text(c.subtitle.as_ref(), "hero-subtitle"),
            markup::optional_text(c.description.as_ref(), "hero-description"),
            markup::button_group(c.primary_button.as_ref(), None),
            media_panel(&c.media, props),
            markup::section_close()
        ))
    }
}

pub(super) struct VideoRenderer;

impl VariantRenderer for VideoRenderer {
    fn variant(&self) -> HeroVariant {
        HeroVariant::Video
    }

    fn render(&self, props: &HeroProps) -> Result<String> {
        let VariantContent::Video(c) = &props.content else {
            return Err(mismatch(self.variant(), props));
        };
        let mut video = format!(
            "<video class=\"hero-bg\" src=\"{}\"",
            markup::escape_attr(&c.video_url)
        );
        if let Some(poster) = &c.poster {
            let _ = write!(video, " poster=\"{}\"", markup::escape_attr(poster));
        }
        // Reduced-motion preference wins over the autoplay flag.
        if c.autoplay && !props.accessibility.reduced_motion {
            video.push_str(" autoplay");
        }
        if c.loop_playback {
            video.push_str(" loop");
        }
        if c.muted {
            video.push_str(" muted");
        }
        video.push_str(" playsinline></video>");
        let overlay = match &c.overlay {
            Some(overlay) => format!(
                "<div class=\"hero-overlay\" style=\"background-color:{};opacity:{}\"></div>",
                markup::escape_attr(&overlay.color),
                overlay.opacity
            ),
            None => String::new(),
        };
        Ok(format!(
            "{}{video}{overlay}<div class=\"hero-content align-center\">{}{}{}</div>{}",
            markup::section_open(props, ""),
            markup::text_block(&c.title, "hero-title"),
            markup::optional_text(c.subtitle.as_ref(), "hero-subtitle"),
            markup::button_group(c.primary_button.as_ref(), None),
            markup::section_close()
        ))
    }
}

pub(super) struct MinimalRenderer;

impl VariantRenderer for MinimalRenderer {
    fn variant(&self) -> HeroVariant {
        HeroVariant::Minimal
    }

    fn render(&self, props: &HeroProps) -> Result<String> {
        let VariantContent::Minimal(c) = &props.content else {
            return Err(mismatch(self.variant(), props));
        };
        Ok(format!(
            "{}{}<div class=\"hero-content {}\">{}{}{}</div>{}",
            markup::section_open(props, markup::align_class(c.text_align)),
            markup::background(&c.background, &props.accessibility),
            markup::align_class(c.text_align),
            markup::text_block(&c.title, "hero-title"),
            markup::optional_text(c.subtitle.as_ref(), "hero-subtitle"),
            markup::button_group(c.primary_button.as_ref(), None),
            markup::section_close()
        ))
    }
}

pub(super) struct FeatureRenderer;

impl VariantRenderer for FeatureRenderer {
    fn variant(&self) -> HeroVariant {
        HeroVariant::Feature
    }

    fn render(&self, props: &HeroProps) -> Result<String> {
        let VariantContent::Feature(c) = &props.content else {
            return Err(mismatch(self.variant(), props));
        };
        let mut grid = format!("<ul class=\"hero-features\" data-columns=\"{}\">", c.columns);
        for item in &c.features {
            let icon = match &item.icon {
                Some(icon) if !icon.is_empty() => {
                    format!("<span class=\"feature-icon\" data-icon=\"{}\"></span>", markup::escape_attr(icon))
                }
                _ => String::new(),
            };
            let _ = write!(
                grid,
                "<li class=\"feature\">{icon}<h3>{}</h3><p>{}</p></li>",
                markup::escape_html(&item.title),
                markup::escape_html(&item.description)
            );
        }
        grid.push_str("</ul>");
        Ok(format!(
            "{}{}<div class=\"hero-content\">{}{}{grid}</div>{}",
            markup::section_open(props, ""),
            markup::background(&c.background, &props.accessibility),
            markup::text_block(&c.title, "hero-title"),
            markup::optional_text(c.description.as_ref(), "hero-description"),
            markup::section_close()
        ))
    }
}

pub(super) struct TestimonialRenderer;

impl VariantRenderer for TestimonialRenderer {
    fn variant(&self) -> HeroVariant {
        HeroVariant::Testimonial
    }

    fn render(&self, props: &HeroProps) -> Result<String> {
        let VariantContent::Testimonial(c) = &props.content else {
            return Err(mismatch(self.variant(), props));
        };
        let layout = match c.layout {
            TestimonialLayout::Carousel => "carousel",
            TestimonialLayout::Grid => "grid",
        };
        let mut quotes = format!("<div class=\"hero-testimonials\" data-layout=\"{layout}\">");
        for item in &c.testimonials {
            let rating = match item.rating {
                Some(rating) => format!("<span class=\"rating\" data-stars=\"{rating}\"></span>"),
                None => String::new(),
            };
            let role = match &item.role {
                Some(role) if !role.is_empty() => {
                    format!("<span class=\"role\">{}</span>", markup::escape_html(role))
                }
                _ => String::new(),
            };
            let _ = write!(
                quotes,
                "<figure class=\"testimonial\"><blockquote>{}</blockquote>\
                 <figcaption>{}{role}{rating}</figcaption></figure>",
                markup::escape_html(&item.quote),
                markup::escape_html(&item.author)
            );
        }
        quotes.push_str("</div>");
        Ok(format!(
            "{}{}<div class=\"hero-content\">{}{quotes}</div>{}",
            markup::section_open(props, ""),
            markup::background(&c.background, &props.accessibility),
            markup::text_block(&c.title, "hero-title"),
            markup::section_close()
        ))
    }
}

pub(super) struct ProductRenderer;

impl VariantRenderer for ProductRenderer {
    fn variant(&self) -> HeroVariant {
        HeroVariant::Product
    }

    fn render(&self, props: &HeroProps) -> Result<String> {
        let VariantContent::Product(c) = &props.content else {
            return Err(mismatch(self.variant(), props));
        };
        let price = match &c.price {
            Some(price) if !price.is_empty() => {
                format!("<span class=\"hero-price\">{}</span>", markup::escape_html(price))
            }
            _ => String::new(),
        };
        let mut badges = String::new();
        if !c.trust_badges.is_empty() {
            badges.push_str("<ul class=\"trust-badges\">");
            for badge in &c.trust_badges {
                let _ = write!(
                    badges,
                    "<li>{}<span>{}</span></li>",
                    markup::image(&badge.image, &badge.label, "badge", &props.accessibility),
                    markup::escape_html(&badge.label)
                );
            }
            badges.push_str("</ul>");
        }
        Ok(format!(
            "{}{}<div class=\"hero-split media-right\">\
             <div class=\"hero-copy\">{}{}{price}{}{badges}</div>\
             <div class=\"hero-panel\">{}</div>\
             </div>{}",
            markup::section_open(props, ""),
            markup::background(&c.background, &props.accessibility),
            markup::text_block(&c.title, "hero-title"),
            markup::optional_text(c.description.as_ref(), "hero-description"),
            markup::button_group(c.primary_button.as_ref(), c.secondary_button.as_ref()),
            media_panel(&c.image, props),
            markup::section_close()
        ))
    }
}

pub(super) struct ServiceRenderer;

impl VariantRenderer for ServiceRenderer {
    fn variant(&self) -> HeroVariant {
        HeroVariant::Service
    }

    fn render(&self, props: &HeroProps) -> Result<String> {
        let VariantContent::Service(c) = &props.content else {
            return Err(mismatch(self.variant(), props));
        };
        let mut grid = format!("<ul class=\"hero-services\" data-columns=\"{}\">", c.columns);
        for item in &c.services {
            let icon = match &item.icon {
                Some(icon) if !icon.is_empty() => {
                    format!("<span class=\"service-icon\" data-icon=\"{}\"></span>", markup::escape_attr(icon))
                }
                _ => String::new(),
            };
            let title = match &item.link {
                Some(link) if !link.is_empty() => format!(
                    "<a href=\"{}\">{}</a>",
                    markup::escape_attr(link),
                    markup::escape_html(&item.title)
                ),
                _ => markup::escape_html(&item.title),
            };
            let _ = write!(
                grid,
                "<li class=\"service\">{icon}<h3>{title}</h3><p>{}</p></li>",
                markup::escape_html(&item.description)
            );
        }
        grid.push_str("</ul>");
        Ok(format!(
            "{}{}<div class=\"hero-content\">{}{}{grid}</div>{}",
            markup::section_open(props, ""),
            markup::background(&c.background, &props.accessibility),
            markup::text_block(&c.title, "hero-title"),
            markup::optional_text(c.description.as_ref(), "hero-description"),
            markup::section_close()
        ))
    }
}

pub(super) struct CtaRenderer;

impl VariantRenderer for CtaRenderer {
    fn variant(&self) -> HeroVariant {
        HeroVariant::Cta
    }

    fn render(&self, props: &HeroProps) -> Result<String> {
        let VariantContent::Cta(c) = &props.content else {
            return Err(mismatch(self.variant(), props));
        };
        let urgency = match &c.urgency_text {
            Some(text) if !text.is_empty() => {
                format!("<p class=\"hero-urgency\">{}</p>", markup::escape_html(text))
            }
            _ => String::new(),
        };
        Ok(format!(
            "{}{}<div class=\"hero-content align-center\">{urgency}{}{}{}</div>{}",
            markup::section_open(props, ""),
            markup::background(&c.background, &props.accessibility),
            markup::text_block(&c.title, "hero-title"),
            markup::optional_text(c.subtitle.as_ref(), "hero-subtitle"),
            markup::button_group(c.primary_button.as_ref(), c.secondary_button.as_ref()),
            markup::section_close()
        ))
    }
}

pub(super) struct GalleryRenderer;

impl VariantRenderer for GalleryRenderer {
    fn variant(&self) -> HeroVariant {
        HeroVariant::Gallery
    }

    fn render(&self, props: &HeroProps) -> Result<String> {
        let VariantContent::Gallery(c) = &props.content else {
            return Err(mismatch(self.variant(), props));
        };
        let mut grid = format!(
            "<div class=\"hero-gallery\" data-columns=\"{}\" data-lightbox=\"{}\">",
            c.columns, c.lightbox
        );
        for item in &c.items {
            let caption = match &item.caption {
                Some(caption) if !caption.is_empty() => {
                    format!("<figcaption>{}</figcaption>", markup::escape_html(caption))
                }
                _ => String::new(),
            };
            let _ = write!(
                grid,
                "<figure class=\"gallery-item\">{}{caption}</figure>",
                markup::image(&item.image, &item.alt, "gallery-image", &props.accessibility)
            );
        }
        grid.push_str("</div>");
        Ok(format!(
            "{}{}<div class=\"hero-content\">{}{grid}</div>{}",
            markup::section_open(props, ""),
            markup::background(&c.background, &props.accessibility),
            markup::text_block(&c.title, "hero-title"),
            markup::section_close()
        ))
    }
}
