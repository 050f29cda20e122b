//! Cursive form interpreter for editor schemas.
//!
//! The UI is fully generic: it walks an [`EditorSchema`], renders the
//! section list, the per-section field list, and a type-appropriate editor
//! for each field, routing every edit through the [`EditorSession`].
//! Global keys: `s` save, `q` quit, `Esc` back.

use cursive::{
    Cursive, CursiveExt,
    event::Key,
    traits::{Nameable, Resizable, Scrollable},
    views::{Dialog, DummyView, LinearLayout, SelectView, TextView},
};
use serde_json::Value;

use crate::{schema::EditorSchema, session::EditorSession};

pub mod editors;

use editors::open_field_editor;

/// Shared state stored as the Cursive user data.
pub struct UiState {
    pub session: EditorSession,
    pub saved: bool,
    /// Index of the currently open section, if any.
    pub section: Option<usize>,
}

/// Runs the schema-driven editor over an initial property object.
///
/// Returns `Ok(Some(props))` when the user saved, `Ok(None)` when the
/// editor was quit without saving.
///
/// # Errors
///
/// Returns an error when the schema fails verification (bad validation
/// pattern or dangling dependency target).
pub fn run_editor(
    title: &str,
    schema: EditorSchema,
    initial: Value,
) -> anyhow::Result<Option<Value>> {
    schema.verify()?;

    let sections: Vec<(String, usize)> = schema
        .sections
        .iter()
        .enumerate()
        .map(|(i, s)| (s.title.clone(), i))
        .collect();
    let session = EditorSession::new(schema, initial);

    #[cfg(feature = "logging")]
    {
        cursive::logger::init();
        cursive::logger::set_filter_levels_from_env();
    }

    let mut siv = Cursive::default();
    siv.set_user_data(UiState {
        session,
        saved: false,
        section: None,
    });

    siv.add_global_callback('q', handle_quit);
    siv.add_global_callback('Q', handle_quit);
    siv.add_global_callback('s', handle_save);
    siv.add_global_callback('S', handle_save);
    siv.add_global_callback(Key::Esc, handle_back);

    siv.add_fullscreen_layer(section_list_view(title, &sections));
    siv.run();

    let state = siv
        .take_user_data::<UiState>()
        .expect("editor state is set before run");
    if state.saved {
        Ok(Some(state.session.into_props()))
    } else {
        Ok(None)
    }
}

fn section_list_view(title: &str, sections: &[(String, usize)]) -> impl cursive::View {
    let mut select = SelectView::new();
    for (label, index) in sections {
        select.add_item(label.clone(), *index);
    }
    select.set_on_submit(|siv, index: &usize| open_section(siv, *index));

    Dialog::around(
        LinearLayout::vertical()
            .child(select.scrollable())
            .child(DummyView)
            .child(TextView::new("enter: open  s: save  esc: back  q: quit")),
    )
    .title(title.to_string())
    .min_width(48)
}

fn open_section(siv: &mut Cursive, index: usize) {
    let title = siv
        .with_user_data(|state: &mut UiState| {
            state.section = Some(index);
            state
                .session
                .schema()
                .sections
                .get(index)
                .map(|s| s.title.clone())
        })
        .flatten();
    let Some(title) = title else { return };

    let mut select: SelectView<String> = SelectView::new();
    select.set_on_submit(|siv, field_id: &String| open_field_editor(siv, field_id.clone()));
    let dialog = Dialog::around(select.with_name("field_list").scrollable())
        .title(title)
        .button("Back", |siv| {
            siv.pop_layer();
        })
        .min_width(56);
    siv.add_layer(dialog);
    refresh_field_list(siv);
}

/// Rebuilds the visible-field list of the open section.
///
/// Called after every edit so dependency-driven visibility changes take
/// effect immediately.
pub fn refresh_field_list(siv: &mut Cursive) {
    let Some(items) = siv.with_user_data(|state: &mut UiState| {
        let Some(index) = state.section else {
            return Vec::new();
        };
        let Some(section) = state.session.schema().sections.get(index) else {
            return Vec::new();
        };
        section
            .fields
            .iter()
            .filter(|f| state.session.is_visible(&f.id))
            .map(|f| {
                let current = value_summary(state.session.value_of(&f.id));
                let marker = if state.session.error_for(&f.id).is_some() {
                    "! "
                } else {
                    ""
                };
                (format!("{marker}{}: {current}", f.label), f.id.clone())
            })
            .collect::<Vec<_>>()
    }) else {
        return;
    };

    siv.call_on_name("field_list", |view: &mut SelectView<String>| {
        view.clear();
        for (label, id) in items {
            view.add_item(label, id);
        }
    });
}

/// Short display form of a field's current value.
fn value_summary(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => "(unset)".to_string(),
        Some(Value::String(s)) => {
            let mut out: String = s.chars().take(28).collect();
            if s.chars().count() > 28 {
                out.push('…');
            }
            out
        }
        Some(Value::Bool(true)) => "on".to_string(),
        Some(Value::Bool(false)) => "off".to_string(),
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Array(items)) => format!("[{} items]", items.len()),
        Some(Value::Object(_)) => "{…}".to_string(),
    }
}

/// Attempts a save on the session, marking the state saved on success.
///
/// On failure returns the validation errors keyed by field label rather
/// than field id, so the dialog reads like the form. The error map is
/// cloned out before the label lookup, ending the save's borrow of the
/// session.
fn save_outcome(state: &mut UiState) -> Result<(), Vec<(String, String)>> {
    let errors = match state.session.try_save() {
        Ok(_) => {
            state.saved = true;
            return Ok(());
        }
        Err(errors) => errors.clone(),
    };
    Err(errors
        .iter()
        .map(|(id, message)| {
            let label = state
                .session
                .schema()
                .field(id)
                .map(|f| f.label.clone())
                .unwrap_or_else(|| id.clone());
            (label, message.clone())
        })
        .collect())
}

/// Saves through the session; on validation failure the save is refused
/// and the failing fields are listed next to their labels.
pub fn handle_save(siv: &mut Cursive) {
    let result = siv.with_user_data(save_outcome);

    match result {
        Some(Ok(())) => siv.quit(),
        Some(Err(errors)) => {
            let message = errors
                .iter()
                .map(|(label, msg)| format!("{label}: {msg}"))
                .collect::<Vec<_>>()
                .join("\n");
            refresh_field_list(siv);
            siv.add_layer(Dialog::info(message).title("Validation failed"));
        }
        None => {}
    }
}

/// Quits, asking for confirmation while unsaved edits exist.
pub fn handle_quit(siv: &mut Cursive) {
    let dirty = siv
        .with_user_data(|state: &mut UiState| state.session.dirty())
        .unwrap_or(false);
    if !dirty {
        siv.quit();
        return;
    }
    siv.add_layer(
        Dialog::text("Discard unsaved changes?")
            .title("Quit")
            .button("Discard", |siv| siv.quit())
            .button("Cancel", |siv| {
                siv.pop_layer();
            }),
    );
}

/// Steps back one layer, quitting from the top-level section list.
pub fn handle_back(siv: &mut Cursive) {
    if siv.screen_mut().len() > 1 {
        siv.pop_layer();
        // Back at the section list the open-section index no longer applies.
        if siv.screen_mut().len() == 1 {
            siv.with_user_data(|state: &mut UiState| {
                state.section = None;
            });
        }
    } else {
        handle_quit(siv);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{EditorSection, FieldDefinition};
    use serde_json::json;

    fn state(initial: Value) -> UiState {
        let schema = EditorSchema::new().section(
            EditorSection::new("content", "Content").field(
                FieldDefinition::text("title.text", "Title").required("Title is required"),
            ),
        );
        UiState {
            session: EditorSession::new(schema, initial),
            saved: false,
            section: None,
        }
    }

    #[test]
    fn test_save_outcome_labels_failing_fields() {
        let mut state = state(json!({}));
        let errors = save_outcome(&mut state).unwrap_err();
        assert_eq!(
            errors,
            vec![("Title".to_string(), "Title is required".to_string())]
        );
        assert!(!state.saved);
    }

    #[test]
    fn test_save_outcome_marks_saved_when_valid() {
        let mut state = state(json!({"title": {"text": "Welcome"}}));
        assert!(save_outcome(&mut state).is_ok());
        assert!(state.saved);
    }

    #[test]
    fn test_value_summary_truncates_long_strings() {
        let long = "x".repeat(40);
        let summary = value_summary(Some(&json!(long)));
        assert_eq!(summary.chars().count(), 29);
        assert_eq!(value_summary(None), "(unset)");
    }
}
