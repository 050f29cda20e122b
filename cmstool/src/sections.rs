//! Catalogue listing and inspection.

use colored::Colorize;
use herosection::{HeroVariant, registry::SectionConfig};

use crate::ctx::AppContext;

/// Prints the catalogue, optionally narrowed by search query or variant.
pub fn list(
    ctx: &AppContext,
    query: Option<&str>,
    variant: Option<HeroVariant>,
    all: bool,
) -> anyhow::Result<()> {
    let entries: Vec<&SectionConfig> = match (query, variant) {
        (Some(query), _) => ctx.registry.search(query),
        (None, Some(variant)) => ctx.registry.by_variant(variant),
        (None, None) if all => ctx.registry.entries().iter().collect(),
        (None, None) => ctx.registry.active(),
    };

    if entries.is_empty() {
        println!("{}", "No matching sections".yellow());
        return Ok(());
    }

    for entry in entries {
        let state = if entry.is_active {
            String::new()
        } else {
            format!(" {}", "(inactive)".red())
        };
        println!(
            "{:<20} {}{state}",
            entry.id.bold().green(),
            entry.name.bold()
        );
        println!("  {}", entry.description);
        if !entry.tags.is_empty() {
            let tags = entry.tags.iter().cloned().collect::<Vec<_>>().join(", ");
            println!("  {} {}", "tags:".dimmed(), tags.cyan());
        }
    }

    let missing = ctx.registry.missing_variants();
    if !missing.is_empty() {
        let names = missing
            .iter()
            .map(|v| v.as_str())
            .collect::<Vec<_>>()
            .join(", ");
        println!("{} {names}", "Variants without an entry:".yellow());
    }
    Ok(())
}

/// Prints one entry in full: metadata, schema outline and default
/// properties.
pub fn show(ctx: &AppContext, id: &str) -> anyhow::Result<()> {
    let entry = ctx.entry(id)?;

    println!("{} {}", entry.id.bold().green(), format!("v{}", entry.version).dimmed());
    println!("{}", entry.name.bold());
    println!("{}", entry.description);
    println!("variant:    {}", entry.variant);
    println!("category:   {}", entry.category);
    println!("components: {} / {}", entry.editor_component, entry.preview_component);
    if !entry.is_active {
        println!("{}", "inactive".red());
    }

    println!("\n{}", "Editor schema".bold().purple());
    for section in &entry.editor_schema.sections {
        println!("  [{}] {}", section.id, section.title.bold());
        for field in &section.fields {
            let required = if field.required { " *".red().to_string() } else { String::new() };
            println!("    {:<32} {:?}{required}", field.id, field.field_type);
        }
    }

    println!("\n{}", "Default properties".bold().purple());
    println!("{}", serde_json::to_string_pretty(&entry.default_props)?);
    Ok(())
}
