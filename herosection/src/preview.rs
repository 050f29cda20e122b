//! Standalone preview documents.
//!
//! Wraps a rendered section in a complete HTML page with a fixed-width
//! frame per device mode, so a section can be inspected in a browser
//! without the surrounding site.

use std::{fmt, str::FromStr};

use serde_json::Value;

use crate::{
    error::{Result, SectionError},
    render,
};

/// Device frame of a preview.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PreviewMode {
    Mobile,
    Tablet,
    #[default]
    Desktop,
}

impl PreviewMode {
    pub const ALL: [PreviewMode; 3] = [Self::Mobile, Self::Tablet, Self::Desktop];

    /// Frame width in CSS pixels.
    pub fn width(&self) -> u32 {
        match self {
            Self::Mobile => 375,
            Self::Tablet => 768,
            Self::Desktop => 1280,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Mobile => "mobile",
            Self::Tablet => "tablet",
            Self::Desktop => "desktop",
        }
    }
}

impl fmt::Display for PreviewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PreviewMode {
    type Err = SectionError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "mobile" => Ok(Self::Mobile),
            "tablet" => Ok(Self::Tablet),
            "desktop" => Ok(Self::Desktop),
            other => Err(SectionError::Render {
                reason: format!("unknown preview mode `{other}`"),
            }),
        }
    }
}

// Minimal layout rules so a preview is legible without the site styles.
const BASE_STYLE: &str = "\
body{margin:0;font-family:Inter,system-ui,sans-serif;background:#e5e7eb}\
.preview-frame{margin:2rem auto;background:#fff;box-shadow:0 4px 24px rgba(0,0,0,.15);overflow:hidden}\
.hero{position:relative;padding:4rem 3rem;overflow:hidden}\
.hero-bg,.hero-overlay{position:absolute;inset:0;width:100%;height:100%;object-fit:cover}\
.hero-content,.hero-split{position:relative}\
.hero-split{display:flex;gap:2rem}\
.hero-split.media-left{flex-direction:row-reverse}\
.align-center{text-align:center}\
.align-right{text-align:right}\
.hero-media,.gallery-image{max-width:100%;display:block}\
.hero-buttons{display:flex;gap:.75rem;margin-top:1.5rem}\
.align-center .hero-buttons{justify-content:center}\
.btn{padding:.6rem 1.2rem;border-radius:.375rem;text-decoration:none}\
.hero-features,.hero-services{list-style:none;display:grid;gap:1.5rem;padding:0}\
.hero-gallery{display:grid;gap:1rem}";

/// Renders a stored section as a complete preview page.
pub fn render_preview(value: &Value, mode: PreviewMode) -> Result<String> {
    let section = render::render_section(value)?;
    let title = value
        .get("id")
        .and_then(Value::as_str)
        .filter(|id| !id.is_empty())
        .unwrap_or("Section preview");
    Ok(format!(
        "<!doctype html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
         <title>{}</title>\n<style>{BASE_STYLE}</style>\n</head>\n\
         <body data-preview-mode=\"{}\">\n\
         <div class=\"preview-frame\" style=\"width:{}px\">\n{section}\n</div>\n\
         </body>\n</html>\n",
        render::markup::escape_html(title),
        mode.as_str(),
        mode.width()
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_mode_widths() {
        assert_eq!(PreviewMode::Mobile.width(), 375);
        assert_eq!(PreviewMode::Tablet.width(), 768);
        assert_eq!(PreviewMode::Desktop.width(), 1280);
        assert_eq!("tablet".parse::<PreviewMode>().unwrap(), PreviewMode::Tablet);
        assert!("watch".parse::<PreviewMode>().is_err());
    }

    #[test]
    fn test_preview_wraps_section_in_document() {
        let props = json!({
            "id": "home-hero",
            "variant": "minimal",
            "title": {"text": "Hello", "tag": "h1"}
        });
        let html = render_preview(&props, PreviewMode::Mobile).unwrap();
        assert!(html.starts_with("<!doctype html>"));
        assert!(html.contains("width:375px"));
        assert!(html.contains("data-preview-mode=\"mobile\""));
        assert!(html.contains("<title>home-hero</title>"));
        assert!(html.contains("data-variant=\"minimal\""));
    }
}
