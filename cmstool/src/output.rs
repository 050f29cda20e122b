//! Rendering, preview and migration commands.

use std::path::{Path, PathBuf};

use colored::Colorize;
use herosection::{
    HeroProps, PreviewMode,
    factory::ArtifactKind,
    migrate::MigrationTable,
    render::render_section,
};
use serde_json::Value;

use crate::ctx::AppContext;

/// Resolves the property object to operate on: a stored file when given,
/// otherwise the registry defaults of `id`.
async fn load_props(
    ctx: &AppContext,
    id: Option<&str>,
    file: Option<&Path>,
) -> anyhow::Result<(Value, String)> {
    match (file, id) {
        (Some(file), _) => {
            let props = ctx.read_props(file).await?;
            let stem = file
                .file_stem()
                .and_then(|s| s.to_str())
                .unwrap_or("section")
                .to_string();
            Ok((props, stem))
        }
        (None, Some(id)) => {
            let entry = ctx.entry(id)?;
            Ok((entry.default_props.clone(), entry.id.clone()))
        }
        (None, None) => bail!("pass a section id or a property file"),
    }
}

fn render_html(ctx: &AppContext, props: &Value) -> anyhow::Result<String> {
    // Typed parse goes through the cached factory renderer; anything else
    // falls back to the degrading pipeline.
    match HeroProps::from_value(props) {
        Ok(typed) => {
            let renderer = ctx.factory.renderer_for(ArtifactKind::Preview, typed.variant());
            Ok(renderer.render(&typed)?)
        }
        Err(_) => Ok(render_section(props)?),
    }
}

/// Renders a section to an HTML fragment in the output directory.
pub async fn render(
    ctx: &AppContext,
    id: Option<&str>,
    file: Option<&Path>,
    stdout: bool,
) -> anyhow::Result<()> {
    let (props, stem) = load_props(ctx, id, file).await?;
    let html = render_html(ctx, &props)?;
    if stdout {
        println!("{html}");
        return Ok(());
    }
    let path = ctx.write_output(&format!("{stem}.html"), &html).await?;
    println!("{}", format!("Rendered {}", path.display()).bold().green());
    Ok(())
}

/// Renders device-framed preview pages.
///
/// With an explicit mode one page is written; without, all three frames.
pub async fn preview(
    ctx: &AppContext,
    id: Option<&str>,
    file: Option<&Path>,
    mode: Option<PreviewMode>,
) -> anyhow::Result<()> {
    let (props, stem) = load_props(ctx, id, file).await?;
    let modes: Vec<PreviewMode> = match mode {
        Some(mode) => vec![mode],
        None => PreviewMode::ALL.to_vec(),
    };
    for mode in modes {
        let html = herosection::preview::render_preview(&props, mode)?;
        let path = ctx
            .write_output(&format!("{stem}.{mode}.html"), &html)
            .await?;
        println!(
            "{}",
            format!("Preview ({}px) {}", mode.width(), path.display()).bold().green()
        );
    }
    Ok(())
}

/// Rewrites a stored legacy section file to its current shape.
///
/// The source id comes from `--from`, falling back to the `type` field of
/// the stored object. The file is rewritten in place (with a backup)
/// unless an output path is given.
pub async fn migrate(
    ctx: &AppContext,
    file: &Path,
    from: Option<&str>,
    output: Option<&Path>,
) -> anyhow::Result<()> {
    let props = ctx.read_props(file).await?;
    let source_id = match from {
        Some(from) => from.to_string(),
        None => props
            .get("type")
            .and_then(Value::as_str)
            .map(str::to_string)
            .ok_or_else(|| anyhow!("no `--from` given and the file carries no `type` field"))?,
    };

    let table = MigrationTable::builtin();
    let Some(migrated) = table.migrate(&source_id, &props) else {
        let known = table
            .entries()
            .iter()
            .map(|e| e.source_id)
            .collect::<Vec<_>>()
            .join(", ");
        bail!("no migration for `{source_id}` (known: {known})");
    };

    let target: PathBuf = output.map(Path::to_path_buf).unwrap_or_else(|| file.to_path_buf());
    let ext = target.extension().and_then(|s| s.to_str()).unwrap_or("json");
    formedit::run::write_props(&target, ext, &migrated.props).await?;
    println!(
        "{}",
        format!(
            "Migrated `{source_id}` -> `{}` at {}",
            migrated.target_id,
            target.display()
        )
        .bold()
        .green()
    );
    Ok(())
}
