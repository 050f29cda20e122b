//! Property migration for outdated stored sections.
//!
//! Pages saved by earlier releases carry section ids and property shapes
//! that no longer exist in the catalogue. The migration table rewrites
//! those objects into a current variant: each entry matches one legacy
//! section id and carries either a path mapping or a transform function.
//! A transform supersedes a mapping when both are present. Lookup is
//! first match wins, and unknown ids migrate to nothing rather than
//! guessing.

use formedit::path::{get_path, set_path};
use serde_json::{Value, json};

use crate::variant::HeroVariant;

type TransformFn = fn(&Value) -> Value;

/// One rewrite rule for a legacy section id.
pub struct HeroSectionMigration {
    pub source_id: &'static str,
    pub target: HeroVariant,
    /// Old dotted path to new dotted path. Absent old paths are skipped.
    pub mapping: &'static [(&'static str, &'static str)],
    pub transform: Option<TransformFn>,
}

/// Result of a successful migration.
#[derive(Debug, Clone, PartialEq)]
pub struct MigratedSection {
    pub target_id: String,
    pub props: Value,
}

/// Ordered list of migration rules.
pub struct MigrationTable {
    entries: Vec<HeroSectionMigration>,
}

impl MigrationTable {
    /// The builtin rules for section shapes shipped by earlier releases.
    pub fn builtin() -> Self {
        Self {
            entries: vec![
                HeroSectionMigration {
                    source_id: "hero-section",
                    target: HeroVariant::Centered,
                    mapping: &[],
                    transform: Some(hero_section_to_centered),
                },
                HeroSectionMigration {
                    source_id: "legacy-hero",
                    target: HeroVariant::Centered,
                    mapping: &[
                        ("heading", "title.text"),
                        ("subheading", "subtitle.text"),
                        ("cta.label", "primaryButton.text"),
                        ("cta.href", "primaryButton.url"),
                        ("image", "background.url"),
                    ],
                    transform: None,
                },
            ],
        }
    }

    pub fn entries(&self) -> &[HeroSectionMigration] {
        &self.entries
    }

    /// Migrates one stored section. Returns `None` for unknown ids; the
    /// caller decides whether that is an error or a skip.
    pub fn migrate(&self, source_id: &str, props: &Value) -> Option<MigratedSection> {
        let entry = self.entries.iter().find(|e| e.source_id == source_id)?;
        let mut migrated = match entry.transform {
            Some(transform) => transform(props),
            None => apply_mapping(props, entry.mapping),
        };
        // Every migrated object must carry its variant tag; transforms may
        // have set it already.
        if migrated.get("variant").is_none() {
            set_path(
                &mut migrated,
                "variant",
                Value::String(entry.target.as_str().to_string()),
            );
        }
        Some(MigratedSection {
            target_id: entry.target.section_id(),
            props: migrated,
        })
    }
}

/// Copies values along `(old_path, new_path)` pairs into a fresh object.
/// Old paths with no value are skipped, never written as `null`.
pub fn apply_mapping(props: &Value, mapping: &[(&str, &str)]) -> Value {
    let mut out = json!({});
    for (old, new) in mapping {
        if let Some(value) = get_path(props, old) {
            set_path(&mut out, new, value.clone());
        }
    }
    out
}

/// The original single-layout hero: flat `title`/`subtitle` strings, one
/// button as `buttonText`/`buttonLink`, an optional `backgroundImage`.
fn hero_section_to_centered(props: &Value) -> Value {
    let mut out = apply_mapping(
        props,
        &[
            ("title", "title.text"),
            ("subtitle", "subtitle.text"),
            ("buttonText", "primaryButton.text"),
            ("buttonLink", "primaryButton.url"),
        ],
    );
    set_path(&mut out, "title.tag", json!("h1"));
    set_path(&mut out, "textAlign", json!("center"));
    match get_path(props, "backgroundImage") {
        Some(url) => {
            set_path(&mut out, "background", json!({"type": "image", "url": url.clone()}));
        }
        None => {
            set_path(&mut out, "background", json!({"type": "color", "color": "#111827"}));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::props::HeroProps;

    #[test]
    fn test_hero_section_transform() {
        let table = MigrationTable::builtin();
        let old = json!({"title": "T", "buttonText": "B", "buttonLink": "/x"});
        let migrated = table.migrate("hero-section", &old).unwrap();
        assert_eq!(migrated.target_id, "hero-centered");
        assert_eq!(migrated.props["title"]["text"], json!("T"));
        assert_eq!(migrated.props["primaryButton"]["text"], json!("B"));
        assert_eq!(migrated.props["primaryButton"]["url"], json!("/x"));
        assert_eq!(migrated.props["textAlign"], json!("center"));
        assert!(HeroProps::from_value(&migrated.props).is_ok());
    }

    #[test]
    fn test_legacy_hero_mapping() {
        let table = MigrationTable::builtin();
        let old = json!({
            "heading": "Welcome",
            "subheading": "Hi",
            "image": "/img/bg.jpg",
            "unrelated": true
        });
        let migrated = table.migrate("legacy-hero", &old).unwrap();
        assert_eq!(migrated.props["title"]["text"], json!("Welcome"));
        assert_eq!(migrated.props["subtitle"]["text"], json!("Hi"));
        assert_eq!(migrated.props["background"]["url"], json!("/img/bg.jpg"));
        assert_eq!(migrated.props["variant"], json!("centered"));
        // Absent cta paths are skipped entirely.
        assert!(migrated.props.get("primaryButton").is_none());
        assert!(migrated.props.get("unrelated").is_none());
    }

    #[test]
    fn test_unknown_id_migrates_to_nothing() {
        let table = MigrationTable::builtin();
        assert!(table.migrate("mystery-widget", &json!({})).is_none());
    }

    #[test]
    fn test_mapping_creates_nested_objects() {
        let out = apply_mapping(&json!({"old": 5}), &[("old", "a.b")]);
        assert_eq!(out, json!({"a": {"b": 5}}));
    }
}
