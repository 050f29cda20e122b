//! Per-type field editors.
//!
//! Rendering dispatches on [`FieldType`] through one lookup instead of
//! per-field code: every field of a given type gets the same editor
//! dialog, fed by the field definition and the current session value.

use std::time::{SystemTime, UNIX_EPOCH};

use cursive::{
    Cursive,
    traits::{Nameable, Resizable, Scrollable},
    views::{Dialog, EditView, SelectView, TextArea},
};
use serde_json::Value;

use crate::schema::{FieldDefinition, FieldType};

use super::{UiState, refresh_field_list};

const FIELD_INPUT: &str = "field_input";
const REPEATER_LIST: &str = "repeater_list";

/// Opens the editor dialog appropriate for the field's type.
pub fn open_field_editor(siv: &mut Cursive, field_id: String) {
    let field = siv
        .with_user_data(|state: &mut UiState| state.session.schema().field(&field_id).cloned())
        .flatten();
    let Some(field) = field else { return };

    match field.field_type {
        FieldType::Boolean => toggle_boolean(siv, &field),
        FieldType::Select => show_select(siv, &field),
        FieldType::Number | FieldType::Slider => show_numeric(siv, &field),
        FieldType::Repeater => show_repeater(siv, &field),
        FieldType::Text
        | FieldType::Textarea
        | FieldType::Color
        | FieldType::Image
        | FieldType::Video
        | FieldType::Url => show_text(siv, &field),
    }
}

fn set_field(siv: &mut Cursive, field_id: &str, value: Value) {
    let field_id = field_id.to_string();
    siv.with_user_data(move |state: &mut UiState| {
        state.session.set_value(&field_id, value);
    });
    refresh_field_list(siv);
}

fn current_value(siv: &mut Cursive, field_id: &str) -> Option<Value> {
    let field_id = field_id.to_string();
    siv.with_user_data(move |state: &mut UiState| state.session.value_of(&field_id).cloned())
        .flatten()
}

fn toggle_boolean(siv: &mut Cursive, field: &FieldDefinition) {
    let current = matches!(current_value(siv, &field.id), Some(Value::Bool(true)));
    set_field(siv, &field.id, Value::Bool(!current));
}

fn show_text(siv: &mut Cursive, field: &FieldDefinition) {
    let current = match current_value(siv, &field.id) {
        Some(Value::String(s)) => s,
        _ => String::new(),
    };
    let field_id = field.id.clone();
    let title = match &field.help {
        Some(help) => format!("{} ({help})", field.label),
        None => field.label.clone(),
    };
    siv.add_layer(
        Dialog::around(
            EditView::new()
                .content(current)
                .with_name(FIELD_INPUT)
                .min_width(40),
        )
        .title(title)
        .button("Save", move |siv| {
            let content = siv
                .call_on_name(FIELD_INPUT, |view: &mut EditView| view.get_content())
                .expect("input view exists");
            siv.pop_layer();
            set_field(siv, &field_id, Value::String(content.to_string()));
        })
        .dismiss_button("Cancel"),
    );
}

fn show_numeric(siv: &mut Cursive, field: &FieldDefinition) {
    let current = match current_value(siv, &field.id) {
        Some(Value::Number(n)) => n.to_string(),
        _ => String::new(),
    };
    let field_def = field.clone();
    let title = match (field.min, field.max) {
        (Some(min), Some(max)) => format!("{} [{min} to {max}]", field.label),
        _ => field.label.clone(),
    };
    siv.add_layer(
        Dialog::around(
            EditView::new()
                .content(current)
                .with_name(FIELD_INPUT)
                .min_width(20),
        )
        .title(title)
        .button("Save", move |siv| {
            let content = siv
                .call_on_name(FIELD_INPUT, |view: &mut EditView| view.get_content())
                .expect("input view exists");
            match content.parse::<f64>() {
                Ok(mut n) => {
                    if let Some(min) = field_def.min {
                        n = n.max(min);
                    }
                    if let Some(max) = field_def.max {
                        n = n.min(max);
                    }
                    let value = serde_json::Number::from_f64(n)
                        .map(Value::Number)
                        .unwrap_or(Value::Null);
                    siv.pop_layer();
                    set_field(siv, &field_def.id, value);
                }
                Err(_) => {
                    siv.add_layer(Dialog::info("Not a number").title("Invalid value"));
                }
            }
        })
        .dismiss_button("Cancel"),
    );
}

fn show_select(siv: &mut Cursive, field: &FieldDefinition) {
    let mut select: SelectView<Value> = SelectView::new();
    for option in &field.options {
        select.add_item(option.label.clone(), option.value.clone());
    }
    let field_id = field.id.clone();
    select.set_on_submit(move |siv, value: &Value| {
        let value = value.clone();
        siv.pop_layer();
        set_field(siv, &field_id, value);
    });
    siv.add_layer(
        Dialog::around(select.scrollable())
            .title(field.label.clone())
            .dismiss_button("Cancel"),
    );
}

// --- Repeater ---

fn show_repeater(siv: &mut Cursive, field: &FieldDefinition) {
    let mut select: SelectView<usize> = SelectView::new();
    let field_for_submit = field.clone();
    select.set_on_submit(move |siv, index: &usize| {
        edit_repeater_item(siv, &field_for_submit, *index);
    });

    let add = field.clone();
    let remove = field.clone();
    let up = field.clone();
    let down = field.clone();
    siv.add_layer(
        Dialog::around(select.with_name(REPEATER_LIST).scrollable().min_width(40))
            .title(field.label.clone())
            .button("Add", move |siv| {
                let template = add.default_value.clone();
                with_items(siv, &add, move |items| {
                    items.push(new_item(template.as_ref()));
                });
            })
            .button("Remove", move |siv| {
                if let Some(index) = selected_index(siv) {
                    with_items(siv, &remove, move |items| {
                        if index < items.len() {
                            items.remove(index);
                        }
                    });
                }
            })
            .button("Up", move |siv| {
                if let Some(index) = selected_index(siv)
                    && index > 0
                {
                    with_items(siv, &up, move |items| items.swap(index, index - 1));
                }
            })
            .button("Down", move |siv| {
                if let Some(index) = selected_index(siv) {
                    with_items(siv, &down, move |items| {
                        if index + 1 < items.len() {
                            items.swap(index, index + 1);
                        }
                    });
                }
            })
            .dismiss_button("Close"),
    );
    refresh_repeater_list(siv, field);
}

fn selected_index(siv: &mut Cursive) -> Option<usize> {
    siv.call_on_name(REPEATER_LIST, |view: &mut SelectView<usize>| {
        view.selection().map(|rc| *rc)
    })
    .flatten()
}

/// Applies a mutation to the repeater's item list and refreshes both the
/// repeater dialog and the field list behind it.
fn with_items(siv: &mut Cursive, field: &FieldDefinition, mutate: impl FnOnce(&mut Vec<Value>)) {
    let mut items = match current_value(siv, &field.id) {
        Some(Value::Array(items)) => items,
        _ => Vec::new(),
    };
    mutate(&mut items);
    set_field(siv, &field.id, Value::Array(items));
    refresh_repeater_list(siv, field);
}

fn refresh_repeater_list(siv: &mut Cursive, field: &FieldDefinition) {
    let items = match current_value(siv, &field.id) {
        Some(Value::Array(items)) => items,
        _ => Vec::new(),
    };
    siv.call_on_name(REPEATER_LIST, |view: &mut SelectView<usize>| {
        view.clear();
        for (index, item) in items.iter().enumerate() {
            view.add_item(item_summary(index, item), index);
        }
    });
}

/// New list item from the field's template, with a fresh generated id.
///
/// When the template carries an `id` of the form `"<kind>"` or
/// `"<kind>-<n>"`, the new item gets `"<kind>-<unix-millis>"`.
fn new_item(template: Option<&Value>) -> Value {
    let mut item = template.cloned().unwrap_or_else(|| Value::Object(Default::default()));
    if let Some(map) = item.as_object_mut()
        && let Some(Value::String(id)) = map.get("id")
    {
        let kind = id.split('-').next().unwrap_or("item").to_string();
        let millis = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis())
            .unwrap_or_default();
        map.insert("id".to_string(), Value::String(format!("{kind}-{millis}")));
    }
    item
}

fn item_summary(index: usize, item: &Value) -> String {
    if let Some(map) = item.as_object() {
        for key in ["title", "label", "text", "quote", "author", "caption", "id"] {
            if let Some(Value::String(s)) = map.get(key)
                && !s.is_empty()
            {
                return format!("{}. {s}", index + 1);
            }
        }
    }
    format!("{}. (item)", index + 1)
}

fn edit_repeater_item(siv: &mut Cursive, field: &FieldDefinition, index: usize) {
    let items = match current_value(siv, &field.id) {
        Some(Value::Array(items)) => items,
        _ => return,
    };
    let Some(item) = items.get(index) else { return };
    let content = serde_json::to_string_pretty(item).unwrap_or_default();

    let field_def = field.clone();
    siv.add_layer(
        Dialog::around(
            TextArea::new()
                .content(content)
                .with_name(FIELD_INPUT)
                .min_size((50, 10)),
        )
        .title(format!("{} #{}", field.label, index + 1))
        .button("Save", move |siv| {
            let content = siv
                .call_on_name(FIELD_INPUT, |view: &mut TextArea| {
                    view.get_content().to_string()
                })
                .expect("input view exists");
            match serde_json::from_str::<Value>(&content) {
                Ok(parsed) => {
                    siv.pop_layer();
                    with_items(siv, &field_def, move |items| {
                        if index < items.len() {
                            items[index] = parsed;
                        }
                    });
                }
                Err(e) => {
                    siv.add_layer(Dialog::info(format!("Invalid JSON: {e}")).title("Error"));
                }
            }
        })
        .dismiss_button("Cancel"),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_new_item_generates_kind_timestamp_id() {
        let template = json!({"id": "gallery", "image": "", "caption": ""});
        let item = new_item(Some(&template));
        let id = item["id"].as_str().unwrap();
        assert!(id.starts_with("gallery-"));
        assert!(id.len() > "gallery-".len());
    }

    #[test]
    fn test_new_item_without_template() {
        assert_eq!(new_item(None), json!({}));
    }

    #[test]
    fn test_item_summary_prefers_title() {
        let item = json!({"id": "svc-1", "title": "Consulting"});
        assert_eq!(item_summary(0, &item), "1. Consulting");
        assert_eq!(item_summary(2, &json!({})), "3. (item)");
    }
}
