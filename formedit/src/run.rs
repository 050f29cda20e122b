//! File-backed editor workflow.
//!
//! Loads a JSON or TOML property file, runs the schema-driven editor over
//! it, and writes the result back with a timestamped backup of the previous
//! content.

use std::{
    path::Path,
    time::{SystemTime, UNIX_EPOCH},
};

use anyhow::Context;
use serde_json::Value;

use crate::{schema::EditorSchema, ui::run_editor};

/// Runs the editor over the property file at `path`.
///
/// Missing or empty files start from an empty property object. Returns the
/// saved property object, or `None` when the user quit without saving (the
/// file is left untouched in that case).
///
/// # Errors
///
/// Returns errors for unsupported file extensions, unparsable content, or
/// I/O failures while writing the result.
pub async fn run_file(
    title: &str,
    schema: EditorSchema,
    path: impl AsRef<Path>,
) -> anyhow::Result<Option<Value>> {
    let path = path.as_ref();
    let content = tokio::fs::read_to_string(path).await.unwrap_or_default();
    let ext = path
        .extension()
        .and_then(|s| s.to_str())
        .unwrap_or("")
        .to_string();

    let initial = parse_props(&content, &ext)?;

    let Some(value) = run_editor(title, schema, initial)? else {
        return Ok(None);
    };

    write_props(path, &ext, &value).await?;
    Ok(Some(value))
}

/// Parses property-file content according to its extension.
pub fn parse_props(content: &str, ext: &str) -> anyhow::Result<Value> {
    if content.trim().is_empty() {
        return Ok(Value::Object(Default::default()));
    }
    let value = match ext {
        "json" => serde_json::from_str(content)?,
        "toml" | "tml" => {
            let v: toml::Value = toml::from_str(content)?;
            serde_json::to_value(v)?
        }
        _ => anyhow::bail!("unsupported property file extension: {ext:?}"),
    };
    Ok(value)
}

/// Serializes a property object according to the file extension.
pub fn serialize_props(value: &Value, ext: &str) -> anyhow::Result<String> {
    let s = match ext {
        "json" => serde_json::to_string_pretty(value)?,
        "toml" | "tml" => toml::to_string_pretty(value)?,
        _ => anyhow::bail!("unsupported property file extension: {ext:?}"),
    };
    Ok(s)
}

/// Writes the property object, backing up any existing file first.
pub async fn write_props(path: &Path, ext: &str, value: &Value) -> anyhow::Result<()> {
    let content = serialize_props(value, ext)?;

    if path.exists() {
        let secs = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or_default();
        let backup_path = path.with_extension(format!("bk-{secs}.{ext}"));
        tokio::fs::copy(path, &backup_path)
            .await
            .with_context(|| format!("Failed to back up {}", path.display()))?;
    }

    tokio::fs::write(path, content)
        .await
        .with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_props_json_and_toml() {
        let json = parse_props(r#"{"title": {"text": "T"}}"#, "json").unwrap();
        assert_eq!(json["title"]["text"], json!("T"));

        let toml = parse_props("[title]\ntext = \"T\"\n", "toml").unwrap();
        assert_eq!(toml["title"]["text"], json!("T"));
    }

    #[test]
    fn test_parse_props_empty_content() {
        assert_eq!(parse_props("", "json").unwrap(), json!({}));
        assert_eq!(parse_props("  \n", "toml").unwrap(), json!({}));
    }

    #[test]
    fn test_parse_props_unknown_extension() {
        assert!(parse_props("x", "yaml").is_err());
    }
}
