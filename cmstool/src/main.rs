use std::{path::PathBuf, str::FromStr};

use clap::{Parser, Subcommand};
use cmstool::{ctx::AppContext, edit, nav, output, sections};
use colored::Colorize;
use herosection::{HeroVariant, PreviewMode};

#[derive(Parser)]
#[command(name = "cmstool", version, about = "Hero section workbench for the page builder")]
struct Cli {
    /// Configuration file (defaults to .cmstool.toml in the working
    /// directory).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List registered sections
    List {
        /// Search name, description and tags
        #[arg(short, long)]
        search: Option<String>,
        /// Only sections of one layout variant
        #[arg(long, value_parser = HeroVariant::from_str)]
        variant: Option<HeroVariant>,
        /// Include inactive entries
        #[arg(long)]
        all: bool,
    },
    /// Show one section in full
    Show { id: String },
    /// Edit a section property file in the TUI
    Edit {
        /// Section id (`hero-centered`)
        id: String,
        /// Property file (JSON or TOML); created on first save
        file: PathBuf,
    },
    /// Render a section to an HTML fragment
    Render {
        /// Section id, rendered from its registry defaults
        #[arg(long, conflicts_with = "file")]
        id: Option<String>,
        /// Stored property file to render
        #[arg(long)]
        file: Option<PathBuf>,
        /// Print to stdout instead of the output directory
        #[arg(long)]
        stdout: bool,
    },
    /// Write device-framed preview pages
    Preview {
        #[arg(long, conflicts_with = "file")]
        id: Option<String>,
        #[arg(long)]
        file: Option<PathBuf>,
        /// mobile, tablet or desktop; all three when omitted
        #[arg(long, value_parser = PreviewMode::from_str)]
        mode: Option<PreviewMode>,
    },
    /// Rewrite a legacy section file to its current shape
    Migrate {
        file: PathBuf,
        /// Legacy section id; read from the file's `type` field when
        /// omitted
        #[arg(long)]
        from: Option<String>,
        /// Write here instead of rewriting the file in place
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Fetch the site navigation and render it
    Nav {
        /// Override the configured API base URL
        #[arg(long)]
        base_url: Option<String>,
        /// Menu location to fetch
        #[arg(long, default_value = "HEADER_PRIMARY")]
        location: String,
        #[arg(long)]
        stdout: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let ctx = AppContext::new(cli.config).await?;

    match cli.command {
        Commands::List { search, variant, all } => {
            sections::list(&ctx, search.as_deref(), variant, all)?;
        }
        Commands::Show { id } => sections::show(&ctx, &id)?,
        Commands::Edit { id, file } => edit::edit(&ctx, &id, &file).await?,
        Commands::Render { id, file, stdout } => {
            output::render(&ctx, id.as_deref(), file.as_deref(), stdout).await?;
        }
        Commands::Preview { id, file, mode } => {
            output::preview(&ctx, id.as_deref(), file.as_deref(), mode).await?;
        }
        Commands::Migrate { file, from, output } => {
            output::migrate(&ctx, &file, from.as_deref(), output.as_deref()).await?;
        }
        Commands::Nav {
            base_url,
            location,
            stdout,
        } => {
            let base_url = base_url
                .or_else(|| ctx.config.api.base_url.clone())
                .ok_or_else(|| {
                    anyhow::anyhow!("no API base URL; pass --base-url or set [api] base_url")
                })?;
            let timeout = ctx.config.api.timeout_secs;
            let menu = tokio::task::spawn_blocking(move || {
                nav::fetch_menu(&base_url, &location, timeout)
            })
            .await?;
            // An unreachable CMS degrades to an empty menu, not a failure.
            let html = match &menu {
                Some(menu) => nav::render_menu(menu),
                None => "<nav class=\"site-nav\"><!-- no navigation --></nav>".to_string(),
            };
            if stdout {
                println!("{html}");
            } else {
                let path = ctx.write_output("nav.html", &html).await?;
                println!("{}", format!("Wrote {}", path.display()).bold().green());
            }
        }
    }
    Ok(())
}
