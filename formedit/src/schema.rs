//! Declarative editor schema types.
//!
//! An [`EditorSchema`] describes a property editor as data: ordered sections
//! of fields, per-field validation rules, and visibility dependencies.
//! One generic interpreter (see [`crate::session`] and [`crate::ui`])
//! evaluates the schema against the current property object, so individual
//! editors declare *what* they edit instead of re-implementing show/hide
//! and validation logic.

use log::warn;
use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{error::SchemaError, path::get_path};

/// The closed set of field editor types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FieldType {
    /// Single-line text input.
    Text,
    /// Multi-line text input.
    Textarea,
    /// Choice among declared [`SelectOption`]s.
    Select,
    /// On/off toggle.
    Boolean,
    /// Color value (hex string).
    Color,
    /// Image URL.
    Image,
    /// Video URL.
    Video,
    /// Link URL.
    Url,
    /// Free numeric input.
    Number,
    /// Numeric input constrained by min/max/step.
    Slider,
    /// Ordered list of sub-objects.
    Repeater,
}

/// One selectable option of a [`FieldType::Select`] field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectOption {
    pub label: String,
    pub value: Value,
    pub icon: Option<String>,
}

impl SelectOption {
    pub fn new(label: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
            icon: None,
        }
    }
}

/// A save-time validation rule attached to a field.
///
/// Rules are evaluated independently; the first failing rule's message is
/// the one surfaced to the user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum ValidationRule {
    /// Fails on absent, `null` or empty-string values.
    Required { message: String },
    /// Fails when a string value exceeds `limit` characters.
    MaxLength { limit: usize, message: String },
    /// Fails when a string value does not match the regular expression.
    Pattern { pattern: String, message: String },
}

impl ValidationRule {
    /// Checks the rule against the current value at the field's path.
    ///
    /// Returns the configured message on failure. Non-string values pass
    /// `MaxLength` and `Pattern` checks; those rules only constrain text.
    pub fn check(&self, value: Option<&Value>) -> Result<(), String> {
        match self {
            Self::Required { message } => {
                let empty = match value {
                    None | Some(Value::Null) => true,
                    Some(Value::String(s)) => s.trim().is_empty(),
                    Some(_) => false,
                };
                if empty {
                    return Err(message.clone());
                }
            }
            Self::MaxLength { limit, message } => {
                if let Some(Value::String(s)) = value
                    && s.chars().count() > *limit
                {
                    return Err(message.clone());
                }
            }
            Self::Pattern { pattern, message } => {
                if let Some(Value::String(s)) = value {
                    match Regex::new(pattern) {
                        Ok(re) => {
                            if !re.is_match(s) {
                                return Err(message.clone());
                            }
                        }
                        Err(e) => {
                            // A broken pattern must not brick the editor.
                            warn!("skipping uncompilable pattern `{pattern}`: {e}");
                        }
                    }
                }
            }
        }
        Ok(())
    }

    /// Verifies the rule itself is well-formed (compilable pattern).
    pub fn verify(&self) -> Result<(), SchemaError> {
        if let Self::Pattern { pattern, .. } = self {
            Regex::new(pattern).map_err(|source| SchemaError::InvalidPattern {
                pattern: pattern.clone(),
                source,
            })?;
        }
        Ok(())
    }
}

/// Comparison applied by a [`FieldDependency`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DependencyCondition {
    Equals,
    NotEquals,
}

/// What a matching [`FieldDependency`] does to its field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DependencyAction {
    Show,
    Hide,
}

/// Declarative visibility rule between two fields.
///
/// Visibility is a pure function of the *current* (possibly unsaved)
/// property object: toggling the controlling value and re-evaluating flips
/// visibility deterministically.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldDependency {
    /// Dotted path of the field whose visibility is controlled.
    pub field: String,
    /// Dotted path of the controlling value.
    pub depends_on: String,
    pub condition: DependencyCondition,
    pub value: Value,
    pub action: DependencyAction,
}

impl FieldDependency {
    /// Show `field` only while the value at `depends_on` strictly equals `value`.
    pub fn show_when_equals(
        field: impl Into<String>,
        depends_on: impl Into<String>,
        value: impl Into<Value>,
    ) -> Self {
        Self {
            field: field.into(),
            depends_on: depends_on.into(),
            condition: DependencyCondition::Equals,
            value: value.into(),
            action: DependencyAction::Show,
        }
    }

    /// Hide `field` while the value at `depends_on` strictly equals `value`.
    pub fn hide_when_equals(
        field: impl Into<String>,
        depends_on: impl Into<String>,
        value: impl Into<Value>,
    ) -> Self {
        Self {
            action: DependencyAction::Hide,
            ..Self::show_when_equals(field, depends_on, value)
        }
    }

    /// Whether this rule lets its field be shown for the given properties.
    pub fn allows(&self, props: &Value) -> bool {
        let current = get_path(props, &self.depends_on);
        let matched = match self.condition {
            DependencyCondition::Equals => current == Some(&self.value),
            DependencyCondition::NotEquals => current != Some(&self.value),
        };
        match self.action {
            DependencyAction::Show => matched,
            DependencyAction::Hide => !matched,
        }
    }
}

/// Definition of one editable field.
///
/// The `id` is the dotted path into the property object the field edits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldDefinition {
    pub id: String,
    pub field_type: FieldType,
    pub label: String,
    pub required: bool,
    pub default_value: Option<Value>,
    pub options: Vec<SelectOption>,
    pub validation: Vec<ValidationRule>,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub step: Option<f64>,
    pub help: Option<String>,
}

impl FieldDefinition {
    pub fn new(id: impl Into<String>, field_type: FieldType, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            field_type,
            label: label.into(),
            required: false,
            default_value: None,
            options: Vec::new(),
            validation: Vec::new(),
            min: None,
            max: None,
            step: None,
            help: None,
        }
    }

    pub fn text(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self::new(id, FieldType::Text, label)
    }

    pub fn textarea(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self::new(id, FieldType::Textarea, label)
    }

    pub fn select(
        id: impl Into<String>,
        label: impl Into<String>,
        options: Vec<SelectOption>,
    ) -> Self {
        let mut field = Self::new(id, FieldType::Select, label);
        field.options = options;
        field
    }

    pub fn boolean(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self::new(id, FieldType::Boolean, label)
    }

    pub fn color(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self::new(id, FieldType::Color, label)
    }

    pub fn image(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self::new(id, FieldType::Image, label)
    }

    pub fn video(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self::new(id, FieldType::Video, label)
    }

    pub fn url(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self::new(id, FieldType::Url, label)
    }

    pub fn number(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self::new(id, FieldType::Number, label)
    }

    pub fn slider(
        id: impl Into<String>,
        label: impl Into<String>,
        min: f64,
        max: f64,
        step: f64,
    ) -> Self {
        let mut field = Self::new(id, FieldType::Slider, label);
        field.min = Some(min);
        field.max = Some(max);
        field.step = Some(step);
        field
    }

    pub fn repeater(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self::new(id, FieldType::Repeater, label)
    }

    /// Marks the field required with the given failure message.
    pub fn required(mut self, message: impl Into<String>) -> Self {
        self.required = true;
        self.validation.insert(
            0,
            ValidationRule::Required {
                message: message.into(),
            },
        );
        self
    }

    pub fn max_length(mut self, limit: usize, message: impl Into<String>) -> Self {
        self.validation.push(ValidationRule::MaxLength {
            limit,
            message: message.into(),
        });
        self
    }

    pub fn pattern(mut self, pattern: impl Into<String>, message: impl Into<String>) -> Self {
        self.validation.push(ValidationRule::Pattern {
            pattern: pattern.into(),
            message: message.into(),
        });
        self
    }

    pub fn default_value(mut self, value: impl Into<Value>) -> Self {
        self.default_value = Some(value.into());
        self
    }

    pub fn help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }
}

/// A collapsible group of related fields. Order is rendering order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EditorSection {
    pub id: String,
    pub title: String,
    pub icon: Option<String>,
    pub collapsible: bool,
    pub default_expanded: bool,
    pub fields: Vec<FieldDefinition>,
}

impl EditorSection {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            icon: None,
            collapsible: true,
            default_expanded: true,
            fields: Vec::new(),
        }
    }

    pub fn icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    pub fn collapsed(mut self) -> Self {
        self.default_expanded = false;
        self
    }

    pub fn field(mut self, field: FieldDefinition) -> Self {
        self.fields.push(field);
        self
    }
}

/// Complete declarative description of a property editor.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EditorSchema {
    pub sections: Vec<EditorSection>,
    pub dependencies: Vec<FieldDependency>,
}

impl EditorSchema {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn section(mut self, section: EditorSection) -> Self {
        self.sections.push(section);
        self
    }

    pub fn dependency(mut self, dependency: FieldDependency) -> Self {
        self.dependencies.push(dependency);
        self
    }

    /// Iterates every field in declaration order.
    pub fn fields(&self) -> impl Iterator<Item = &FieldDefinition> {
        self.sections.iter().flat_map(|s| s.fields.iter())
    }

    /// Looks up a field definition by its dotted-path id.
    pub fn field(&self, id: &str) -> Option<&FieldDefinition> {
        self.fields().find(|f| f.id == id)
    }

    /// Evaluates all dependency rules for one field against the current
    /// property object. Fields without dependency entries are always
    /// visible; multiple entries must all allow the field.
    pub fn is_visible(&self, field_id: &str, props: &Value) -> bool {
        self.dependencies
            .iter()
            .filter(|d| d.field == field_id)
            .all(|d| d.allows(props))
    }

    /// Verifies rule well-formedness and dependency targets.
    pub fn verify(&self) -> Result<(), SchemaError> {
        for field in self.fields() {
            for rule in &field.validation {
                rule.verify()?;
            }
        }
        for dep in &self.dependencies {
            if self.field(&dep.field).is_none() {
                return Err(SchemaError::UnknownField {
                    path: dep.field.clone(),
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn background_schema() -> EditorSchema {
        EditorSchema::new()
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
                    .field(FieldDefinition::color("background.color", "Color"))
                    .field(FieldDefinition::image("background.url", "Image URL")),
            )
            .dependency(FieldDependency::show_when_equals(
                "background.color",
                "background.type",
                "color",
            ))
            .dependency(FieldDependency::show_when_equals(
                "background.url",
                "background.type",
                "image",
            ))
    }

    #[test]
    fn test_visibility_flips_with_controlling_value() {
        let schema = background_schema();
        let mut props = json!({"background": {"type": "color"}});

        assert!(schema.is_visible("background.color", &props));
        assert!(!schema.is_visible("background.url", &props));

        props["background"]["type"] = json!("image");
        assert!(!schema.is_visible("background.color", &props));
        assert!(schema.is_visible("background.url", &props));
    }

    #[test]
    fn test_field_without_dependency_is_always_visible() {
        let schema = background_schema();
        assert!(schema.is_visible("background.type", &json!({})));
    }

    #[test]
    fn test_not_equals_and_hide() {
        let dep = FieldDependency {
            field: "overlay".into(),
            depends_on: "kind".into(),
            condition: DependencyCondition::NotEquals,
            value: json!("none"),
            action: DependencyAction::Show,
        };
        assert!(dep.allows(&json!({"kind": "image"})));
        assert!(!dep.allows(&json!({"kind": "none"})));

        let hide = FieldDependency::hide_when_equals("overlay", "kind", "none");
        assert!(!hide.allows(&json!({"kind": "none"})));
        assert!(hide.allows(&json!({"kind": "image"})));
    }

    #[test]
    fn test_required_rule() {
        let rule = ValidationRule::Required {
            message: "Title is required".into(),
        };
        assert!(rule.check(None).is_err());
        assert!(rule.check(Some(&json!(null))).is_err());
        assert!(rule.check(Some(&json!(""))).is_err());
        assert!(rule.check(Some(&json!("T"))).is_ok());
        assert!(rule.check(Some(&json!(0))).is_ok());
    }

    #[test]
    fn test_max_length_rule() {
        let rule = ValidationRule::MaxLength {
            limit: 3,
            message: "too long".into(),
        };
        assert!(rule.check(Some(&json!("abc"))).is_ok());
        assert_eq!(rule.check(Some(&json!("abcd"))), Err("too long".into()));
        assert!(rule.check(Some(&json!(12345))).is_ok());
    }

    #[test]
    fn test_pattern_rule() {
        let rule = ValidationRule::Pattern {
            pattern: "^#[0-9a-fA-F]{6}$".into(),
            message: "not a hex color".into(),
        };
        assert!(rule.check(Some(&json!("#2563eb"))).is_ok());
        assert!(rule.check(Some(&json!("blue"))).is_err());
    }

    #[test]
    fn test_verify_rejects_bad_pattern_and_unknown_dependency() {
        let schema = EditorSchema::new()
            .section(
                EditorSection::new("content", "Content")
                    .field(FieldDefinition::text("title.text", "Title").pattern("(", "broken")),
            );
        assert!(schema.verify().is_err());

        let schema = EditorSchema::new()
            .section(EditorSection::new("content", "Content"))
            .dependency(FieldDependency::show_when_equals("ghost", "x", 1));
        assert!(matches!(
            schema.verify(),
            Err(SchemaError::UnknownField { .. })
        ));
    }

    #[test]
    fn test_first_failing_rule_wins() {
        let field = FieldDefinition::text("title.text", "Title")
            .required("required")
            .max_length(2, "too long");
        let mut failures = field
            .validation
            .iter()
            .filter_map(|r| r.check(Some(&json!(""))).err());
        assert_eq!(failures.next(), Some("required".into()));
    }
}
