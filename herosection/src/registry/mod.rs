//! Static section catalogue.
//!
//! The registry maps a section id to everything needed to edit, preview
//! and render it: variant tag, default properties, editor schema,
//! component names, tags and capability declarations. It is built once at
//! startup and never mutated afterwards; consumers receive it by
//! reference instead of going through global state.

use std::collections::BTreeSet;

use formedit::EditorSchema;
use serde_json::Value;

use crate::{config::ThemeMode, variant::HeroVariant};

pub mod catalog;

/// One registered section variant.
#[derive(Debug, Clone)]
pub struct SectionConfig {
    /// Unique section id (`hero-centered`).
    pub id: String,
    pub variant: HeroVariant,
    pub name: String,
    pub description: String,
    pub icon: String,
    pub category: String,
    /// Complete default property object; the sample data previews render.
    pub default_props: Value,
    pub editor_schema: EditorSchema,
    pub editor_component: String,
    pub preview_component: String,
    pub tags: BTreeSet<String>,
    /// Inactive entries are excluded from listing and search but stay
    /// addressable by id.
    pub is_active: bool,
    pub version: String,
    pub theme_compatibility: Vec<ThemeMode>,
    pub responsive_support: bool,
}

/// Validation findings for an entry about to be registered.
///
/// Non-throwing by design: registration-time checks collect human-readable
/// problems instead of failing lookups later.
pub fn validate(config: &SectionConfig) -> Vec<String> {
    let mut errors = Vec::new();
    if config.id.is_empty() {
        errors.push("section id must not be empty".to_string());
    } else if !config.id.starts_with("hero-") {
        errors.push(format!("section id `{}` must start with `hero-`", config.id));
    }
    if config.name.is_empty() {
        errors.push(format!("section `{}` has no name", config.id));
    }
    if config.editor_component != config.variant.editor_component() {
        errors.push(format!(
            "section `{}`: editor component `{}` does not match `{}`",
            config.id,
            config.editor_component,
            config.variant.editor_component()
        ));
    }
    if config.preview_component != config.variant.preview_component() {
        errors.push(format!(
            "section `{}`: preview component `{}` does not match `{}`",
            config.id,
            config.preview_component,
            config.variant.preview_component()
        ));
    }
    if !config.default_props.is_object() {
        errors.push(format!(
            "section `{}`: default props must be an object",
            config.id
        ));
    } else if config.default_props.get("variant")
        != Some(&Value::String(config.variant.as_str().to_string()))
    {
        errors.push(format!(
            "section `{}`: default props variant tag must be `{}`",
            config.id,
            config.variant.as_str()
        ));
    }
    if config.editor_schema.sections.is_empty() {
        errors.push(format!("section `{}` has an empty editor schema", config.id));
    }
    errors
}

/// The immutable catalogue of registered sections.
#[derive(Debug, Clone)]
pub struct SectionRegistry {
    entries: Vec<SectionConfig>,
}

impl SectionRegistry {
    /// Builds the registry over explicit entries, dropping invalid ones.
    ///
    /// Problems are reported through the returned list rather than a hard
    /// failure; a partially valid catalogue still serves the valid entries.
    pub fn with_entries(entries: Vec<SectionConfig>) -> (Self, Vec<String>) {
        let mut errors = Vec::new();
        let mut accepted: Vec<SectionConfig> = Vec::new();
        for config in entries {
            let mut found = validate(&config);
            if accepted.iter().any(|e| e.id == config.id) {
                found.push(format!("duplicate section id `{}`", config.id));
            }
            if found.is_empty() {
                accepted.push(config);
            } else {
                errors.extend(found);
            }
        }
        (Self { entries: accepted }, errors)
    }

    /// The builtin hero catalogue.
    pub fn builtin() -> Self {
        let (registry, errors) = Self::with_entries(catalog::builtin_entries());
        // The builtin table is validated by tests; any error here is a bug.
        debug_assert!(errors.is_empty(), "builtin catalogue invalid: {errors:?}");
        registry
    }

    /// Looks up a section by id. Inactive entries are still addressable;
    /// unknown ids return `None`, never an error.
    pub fn get(&self, id: &str) -> Option<&SectionConfig> {
        self.entries.iter().find(|e| e.id == id)
    }

    /// All active entries, in catalogue order.
    pub fn active(&self) -> Vec<&SectionConfig> {
        self.entries.iter().filter(|e| e.is_active).collect()
    }

    /// Active entries for one layout variant.
    pub fn by_variant(&self, variant: HeroVariant) -> Vec<&SectionConfig> {
        self.entries
            .iter()
            .filter(|e| e.is_active && e.variant == variant)
            .collect()
    }

    /// Case-insensitive substring search over name, description and tags
    /// (OR semantics). Inactive entries are never returned.
    pub fn search(&self, query: &str) -> Vec<&SectionConfig> {
        let query = query.to_lowercase();
        self.entries
            .iter()
            .filter(|e| e.is_active)
            .filter(|e| {
                e.name.to_lowercase().contains(&query)
                    || e.description.to_lowercase().contains(&query)
                    || e.tags.iter().any(|t| t.to_lowercase().contains(&query))
            })
            .collect()
    }

    /// Every entry, active or not.
    pub fn entries(&self) -> &[SectionConfig] {
        &self.entries
    }

    /// Variants with no active registry entry.
    ///
    /// The catalogue is treated as open: missing variants are reported,
    /// not asserted against a fixed count.
    pub fn missing_variants(&self) -> Vec<HeroVariant> {
        HeroVariant::ALL
            .into_iter()
            .filter(|v| !self.entries.iter().any(|e| e.is_active && e.variant == *v))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn builtin() -> SectionRegistry {
        SectionRegistry::builtin()
    }

    #[test]
    fn test_builtin_ids_are_unique_and_valid() {
        let registry = builtin();
        let mut seen = BTreeSet::new();
        for entry in registry.entries() {
            assert!(seen.insert(entry.id.clone()), "duplicate id {}", entry.id);
            assert!(validate(entry).is_empty(), "invalid entry {}", entry.id);
        }
    }

    #[test]
    fn test_builtin_covers_every_variant() {
        assert!(builtin().missing_variants().is_empty());
    }

    #[test]
    fn test_component_naming_pattern() {
        for entry in builtin().entries() {
            assert_eq!(
                entry.editor_component,
                format!("Hero{}Editor", entry.variant.pascal_name())
            );
            assert_eq!(
                entry.preview_component,
                format!("Hero{}Preview", entry.variant.pascal_name())
            );
        }
        let cta = builtin().get("hero-cta").unwrap().clone();
        assert_eq!(cta.editor_component, "HeroCTAEditor");
    }

    #[test]
    fn test_get_unknown_returns_none() {
        assert!(builtin().get("hero-holographic").is_none());
    }

    #[test]
    fn test_search_is_case_insensitive_or_match() {
        let registry = builtin();
        let hits = registry.search("VIDEO");
        assert!(hits.iter().any(|e| e.id == "hero-video"));
        // Tag match: the split-screen entry is tagged "media".
        assert!(registry.search("media").iter().any(|e| e.id == "hero-split-screen"));
        assert!(registry.search("zzzz-no-such").is_empty());
    }

    #[test]
    fn test_inactive_entries_hidden_but_addressable() {
        let mut entries = catalog::builtin_entries();
        entries[0].is_active = false;
        let id = entries[0].id.clone();
        let (registry, errors) = SectionRegistry::with_entries(entries);
        assert!(errors.is_empty());
        assert!(registry.get(&id).is_some());
        assert!(registry.active().iter().all(|e| e.id != id));
        assert!(registry.search("hero").iter().all(|e| e.id != id));
        assert!(registry.missing_variants().contains(&HeroVariant::Centered));
    }

    #[test]
    fn test_with_entries_rejects_duplicates_and_bad_entries() {
        let mut entries = catalog::builtin_entries();
        let mut dup = entries[0].clone();
        dup.is_active = true;
        entries.push(dup);
        let mut broken = entries[1].clone();
        broken.id = "banner-broken".to_string();
        entries.push(broken);

        let count = catalog::builtin_entries().len();
        let (registry, errors) = SectionRegistry::with_entries(entries);
        assert_eq!(registry.entries().len(), count);
        assert!(errors.iter().any(|e| e.contains("duplicate")));
        assert!(errors.iter().any(|e| e.contains("must start with `hero-`")));
    }
}
