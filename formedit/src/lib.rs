//! # formedit
//!
//! A Cursive-based TUI component library for schema-driven form editing.
//!
//! formedit interprets a declarative [`EditorSchema`] — sections, typed
//! fields, validation rules, and show/hide dependencies — against a
//! `serde_json::Value` property object, so every editor shares one generic
//! form implementation instead of per-field code.
//!
//! ## Features
//!
//! - Declarative editor schemas: grouped fields, select options, sliders,
//!   repeaters
//! - Dotted-path property addressing (`background.overlay.opacity`)
//! - Deterministic field visibility from equals/not-equals dependencies
//! - Save-time validation (required, max length, regex pattern) with
//!   per-field messages; invalid saves are blocked
//! - Immutable edits: every change produces a new property object
//! - TUI interface built with [Cursive](https://github.com/gyscos/cursive),
//!   multi-format (JSON/TOML) file workflow with automatic backups
//!
//! ## Quick Start
//!
//! ```rust
//! use formedit::schema::{EditorSchema, EditorSection, FieldDefinition};
//! use formedit::session::EditorSession;
//! use serde_json::json;
//!
//! let schema = EditorSchema::new().section(
//!     EditorSection::new("content", "Content")
//!         .field(FieldDefinition::text("title.text", "Title").required("Title is required")),
//! );
//!
//! let mut session = EditorSession::new(schema, json!({}));
//! session.set_value("title.text", json!("Welcome"));
//! let props = session.try_save().expect("valid");
//! assert_eq!(props["title"]["text"], "Welcome");
//! ```
//!
//! ## Modules
//!
//! - [`schema`] - Editor schema types and dependency evaluation
//! - [`path`] - Dotted-path get/set/merge over JSON values
//! - [`session`] - Editing session with validation and save gating
//! - [`ui`] - Cursive form interpreter
//! - [`run`] - File-backed editor workflow

mod error;

/// Dotted-path get/set/merge over JSON values.
pub mod path;

/// File-backed editor workflow (load, edit, backup, save).
pub mod run;

/// Editor schema types and dependency evaluation.
pub mod schema;

/// Editing session with validation and save gating.
pub mod session;

/// Cursive form interpreter.
pub mod ui;

pub use crate::error::SchemaError;
pub use crate::run::run_file;
pub use crate::schema::EditorSchema;
pub use crate::session::EditorSession;
pub use cursive;
pub use serde_json::Value;
