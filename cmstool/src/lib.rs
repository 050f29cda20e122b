//! # cmstool
//!
//! Command-line workbench for the page builder's hero sections.
//!
//! `cmstool` wraps the [`herosection`] catalogue and renderer in a CLI:
//! browse and inspect registered sections, edit stored property files in a
//! schema-driven TUI, render HTML fragments and device previews, migrate
//! legacy section files, and pull the site navigation from the CMS API.
//!
//! ## Modules
//!
//! - [`config`] - `.cmstool.toml` loading
//! - [`ctx`] - Application context and state management
//! - [`sections`] - Catalogue listing and inspection
//! - [`edit`] - Interactive TUI editing of property files
//! - [`output`] - Render, preview and migrate commands
//! - [`nav`] - Navigation fetching and rendering

/// `.cmstool.toml` loading.
pub mod config;

/// Application context and state management.
pub mod ctx;

/// Interactive TUI editing of property files.
pub mod edit;

/// Navigation fetching and rendering.
pub mod nav;

/// Render, preview and migrate commands.
pub mod output;

/// Catalogue listing and inspection.
pub mod sections;

#[macro_use]
extern crate log;
#[macro_use]
extern crate anyhow;

pub use formedit::cursive;
