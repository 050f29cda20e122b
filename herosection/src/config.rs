//! Theme, responsive and accessibility configuration defaults.
//!
//! Every registered section carries one of each of these configuration
//! objects; the `Default` impls are the defaults provider the registry
//! catalogue and the migration mapper build on.

use serde::{Deserialize, Serialize};

/// Color scheme selector.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
    Custom,
}

/// Section-level theme configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ThemeConfig {
    pub mode: ThemeMode,
    pub primary_color: String,
    pub secondary_color: String,
    pub text_color: String,
    pub background_color: String,
    pub font_family: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            mode: ThemeMode::Light,
            primary_color: "#2563eb".to_string(),
            secondary_color: "#9333ea".to_string(),
            text_color: "#111827".to_string(),
            background_color: "#ffffff".to_string(),
            font_family: "Inter, system-ui, sans-serif".to_string(),
        }
    }
}

/// Viewport widths at which the layout switches modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Breakpoints {
    pub mobile: u32,
    pub tablet: u32,
    pub desktop: u32,
}

impl Default for Breakpoints {
    fn default() -> Self {
        Self {
            mobile: 640,
            tablet: 1024,
            desktop: 1280,
        }
    }
}

/// Per-mode section padding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PaddingScale {
    pub mobile: String,
    pub tablet: String,
    pub desktop: String,
}

impl Default for PaddingScale {
    fn default() -> Self {
        Self {
            mobile: "2rem 1rem".to_string(),
            tablet: "3rem 2rem".to_string(),
            desktop: "4rem 3rem".to_string(),
        }
    }
}

/// Responsive behavior of a section.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ResponsiveConfig {
    pub breakpoints: Breakpoints,
    pub padding: PaddingScale,
    /// Stack side-by-side layouts vertically below the mobile breakpoint.
    pub stack_on_mobile: bool,
}

/// Accessibility wiring of a section.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AccessibilityConfig {
    /// ARIA label placed on the section root element.
    pub aria_label: Option<String>,
    pub reduced_motion: bool,
    pub high_contrast: bool,
    /// Fallback alt text for media whose own alt is empty.
    pub default_alt: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_defaults_round_trip_camel_case() {
        let value = serde_json::to_value(ThemeConfig::default()).unwrap();
        assert_eq!(value["primaryColor"], json!("#2563eb"));
        assert_eq!(value["mode"], json!("light"));

        let responsive: ResponsiveConfig = serde_json::from_value(json!({})).unwrap();
        assert_eq!(responsive.breakpoints.tablet, 1024);
        assert_eq!(responsive.padding.desktop, "4rem 3rem");
    }
}
