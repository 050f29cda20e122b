//! Editing session over a schema and a property object.
//!
//! An [`EditorSession`] is the state the generic editor UI drives: the
//! current property object, per-field validation errors, and a dirty flag.
//! Every edit produces a new property object (clone plus path write), so
//! previous snapshots handed to callers stay valid.

use std::collections::BTreeMap;

use serde_json::Value;

use crate::{
    path::{get_path, with_path},
    schema::{EditorSchema, FieldDefinition},
};

/// Interpreter state for one open editor.
#[derive(Debug, Clone)]
pub struct EditorSession {
    schema: EditorSchema,
    props: Value,
    errors: BTreeMap<String, String>,
    dirty: bool,
}

impl EditorSession {
    /// Creates a session over the given schema and initial properties.
    ///
    /// Field `default_value`s are written for paths absent from the initial
    /// object; present values are never overwritten.
    pub fn new(schema: EditorSchema, initial: Value) -> Self {
        let mut props = initial;
        for field in schema.fields() {
            if let Some(default) = &field.default_value
                && get_path(&props, &field.id).is_none()
            {
                props = with_path(&props, &field.id, default.clone());
            }
        }
        Self {
            schema,
            props,
            errors: BTreeMap::new(),
            dirty: false,
        }
    }

    pub fn schema(&self) -> &EditorSchema {
        &self.schema
    }

    /// The current (possibly unsaved) property object.
    pub fn props(&self) -> &Value {
        &self.props
    }

    /// Consumes the session, yielding the current property object.
    pub fn into_props(self) -> Value {
        self.props
    }

    /// Whether the session holds unsaved edits.
    pub fn dirty(&self) -> bool {
        self.dirty
    }

    pub fn errors(&self) -> &BTreeMap<String, String> {
        &self.errors
    }

    pub fn error_for(&self, field_id: &str) -> Option<&str> {
        self.errors.get(field_id).map(String::as_str)
    }

    /// Reads the current value at a field's dotted path.
    pub fn value_of(&self, path: &str) -> Option<&Value> {
        get_path(&self.props, path)
    }

    /// Writes a value at a dotted path, replacing the property object.
    ///
    /// Clears any stale validation error for the field so the user sees
    /// feedback only after the next save attempt.
    pub fn set_value(&mut self, path: &str, value: Value) {
        self.props = with_path(&self.props, path, value);
        self.errors.remove(path);
        self.dirty = true;
    }

    /// Dependency evaluation for one field against the current properties.
    pub fn is_visible(&self, field_id: &str) -> bool {
        self.schema.is_visible(field_id, &self.props)
    }

    /// Every field currently visible, in declaration order.
    pub fn visible_fields(&self) -> Vec<&FieldDefinition> {
        self.schema
            .fields()
            .filter(|f| self.schema.is_visible(&f.id, &self.props))
            .collect()
    }

    /// Runs save-time validation over all visible fields.
    ///
    /// Hidden fields are skipped: a value the user cannot see must not
    /// block saving. Per field, the first failing rule's message is kept.
    /// Returns `true` when the object is valid.
    pub fn validate(&mut self) -> bool {
        self.errors.clear();
        for field in self.schema.fields() {
            if !self.schema.is_visible(&field.id, &self.props) {
                continue;
            }
            let value = get_path(&self.props, &field.id);
            for rule in &field.validation {
                if let Err(message) = rule.check(value) {
                    self.errors.insert(field.id.clone(), message);
                    break;
                }
            }
        }
        self.errors.is_empty()
    }

    /// Validates and, when clean, yields the properties to persist.
    ///
    /// While any visible field fails validation the save is blocked and the
    /// collected errors are returned instead.
    pub fn try_save(&mut self) -> Result<&Value, &BTreeMap<String, String>> {
        if self.validate() {
            self.dirty = false;
            Ok(&self.props)
        } else {
            Err(&self.errors)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{EditorSection, FieldDefinition, FieldDependency, SelectOption};
    use serde_json::json;

    fn title_schema() -> EditorSchema {
        EditorSchema::new().section(
            EditorSection::new("content", "Content").field(
                FieldDefinition::text("title.text", "Title").required("Title is required"),
            ),
        )
    }

    #[test]
    fn test_save_blocked_until_required_field_filled() {
        let mut session = EditorSession::new(title_schema(), json!({"title": {"text": ""}}));

        assert!(session.try_save().is_err());
        assert_eq!(session.error_for("title.text"), Some("Title is required"));

        session.set_value("title.text", json!("Welcome"));
        let saved = session.try_save().expect("save must pass after correction");
        assert_eq!(saved["title"]["text"], json!("Welcome"));
    }

    #[test]
    fn test_set_value_clears_field_error() {
        let mut session = EditorSession::new(title_schema(), json!({}));
        assert!(session.try_save().is_err());
        session.set_value("title.text", json!("T"));
        assert!(session.errors().is_empty());
    }

    #[test]
    fn test_hidden_fields_do_not_block_save() {
        let schema = EditorSchema::new()
            .section(
                EditorSection::new("background", "Background")
                    .field(FieldDefinition::select(
                        "background.type",
                        "Type",
                        vec![
                            SelectOption::new("Color", "color"),
                            SelectOption::new("Image", "image"),
                        ],
                    ))
                    .field(
                        FieldDefinition::image("background.url", "Image URL")
                            .required("Image URL is required"),
                    ),
            )
            .dependency(FieldDependency::show_when_equals(
                "background.url",
                "background.type",
                "image",
            ));

        let mut session = EditorSession::new(schema, json!({"background": {"type": "color"}}));
        assert!(session.try_save().is_ok());

        session.set_value("background.type", json!("image"));
        assert!(session.try_save().is_err());
    }

    #[test]
    fn test_defaults_applied_only_for_absent_paths() {
        let schema = EditorSchema::new().section(
            EditorSection::new("layout", "Layout")
                .field(FieldDefinition::text("textAlign", "Alignment").default_value("center"))
                .field(FieldDefinition::boolean("lightbox", "Lightbox").default_value(true)),
        );
        let session = EditorSession::new(schema, json!({"textAlign": "left"}));
        assert_eq!(session.value_of("textAlign"), Some(&json!("left")));
        assert_eq!(session.value_of("lightbox"), Some(&json!(true)));
    }

    #[test]
    fn test_edits_produce_new_objects() {
        let mut session = EditorSession::new(title_schema(), json!({"title": {"text": "a"}}));
        let before = session.props().clone();
        session.set_value("title.text", json!("b"));
        assert_eq!(before["title"]["text"], json!("a"));
        assert_eq!(session.props()["title"]["text"], json!("b"));
        assert!(session.dirty());
    }
}
