//! # herosection
//!
//! Hero section catalogue, property model and HTML renderer for the page
//! builder.
//!
//! ## Features
//!
//! - Static registry of ten hero layout variants with lookup, filtering
//!   and tag search
//! - Typed property model deserialized from stored section JSON, tagged
//!   by variant
//! - Declarative editor schemas per variant, interpreted by `formedit`
//! - Renderer factory with per-variant caching and a centered fallback
//!   for unknown variants
//! - Migration table rewriting sections saved by earlier releases
//! - Device-framed preview documents
//!
//! ## Quick Start
//!
//! ```rust
//! use herosection::{SectionRegistry, render};
//!
//! let registry = SectionRegistry::builtin();
//! let entry = registry.get("hero-centered").unwrap();
//! let html = render::render_section(&entry.default_props).unwrap();
//! assert!(html.starts_with("<section"));
//! ```
//!
//! ## Modules
//!
//! - [`registry`]: the section catalogue
//! - [`props`] / [`model`] / [`config`]: the typed property model
//! - [`factory`]: cached renderer resolution
//! - [`render`]: HTML output per variant
//! - [`preview`]: standalone preview pages
//! - [`migrate`]: legacy section rewriting

pub mod config;
mod error;
pub mod factory;
pub mod migrate;
pub mod model;
pub mod preview;
pub mod props;
pub mod registry;
pub mod render;
pub mod variant;

pub use error::{Result, SectionError};
pub use factory::SectionFactory;
pub use preview::PreviewMode;
pub use props::HeroProps;
pub use registry::SectionRegistry;
pub use variant::HeroVariant;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
