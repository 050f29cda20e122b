//! Interactive section editing.
//!
//! Opens the schema-driven editor over a stored property file, seeded with
//! the registry defaults of the section so a fresh file starts complete.

use std::path::Path;

use colored::Colorize;
use formedit::ui::run_editor;
use serde_json::{Value, json};

use crate::ctx::AppContext;

/// Runs the editor for one section and writes the result back.
///
/// A missing file starts from the registry defaults; an existing one is
/// deep-merged over them so new default fields appear without clobbering
/// stored values. Quitting without saving leaves the file untouched.
pub async fn edit(ctx: &AppContext, id: &str, file: &Path) -> anyhow::Result<()> {
    let entry = ctx.entry(id)?;
    let stored = if file.exists() {
        ctx.read_props(file).await?
    } else {
        json!({})
    };
    let initial = formedit::path::merge(&entry.default_props, &stored);
    check_variant(&initial, entry.variant.as_str(), file);

    let Some(saved) = run_editor(&entry.name, entry.editor_schema.clone(), initial)? else {
        println!("{}", "Quit without saving, file unchanged".yellow());
        return Ok(());
    };

    let ext = file.extension().and_then(|s| s.to_str()).unwrap_or("json");
    formedit::run::write_props(file, ext, &saved).await?;
    println!(
        "{}",
        format!("Saved {} ({})", file.display(), entry.id).bold().green()
    );
    Ok(())
}

fn check_variant(props: &Value, expected: &str, file: &Path) {
    if let Some(found) = props.get("variant").and_then(Value::as_str)
        && found != expected
    {
        warn!(
            "{} stores variant `{found}`, editing as `{expected}`; consider `cmstool migrate`",
            file.display()
        );
    }
}
