//! Core model and semantic validation engine for CLI specification
//! documents.
//!
//! A specification document describes a command-line interface as a tree
//! of commands with parameters, exit conditions, and recursive value
//! schemas, plus shared pools of definitions reusable by `refers-to`
//! identifier. This crate defines:
//!
//! - the document model ([`Specification`], [`Command`], [`Parameter`],
//!   [`Exit`], [`Schema`]);
//! - [`SymbolTables`] over the shared pools;
//! - the validators ([`validate_schema`], [`validate_parameter`],
//!   [`validate_exit`], [`validate_commands`]);
//! - the two-phase [`lint`] pipeline producing an ordered [`Violation`]
//!   list.
//!
//! Validation is synchronous, deterministic, and purely functional over
//! an immutable document: the same input always yields the same,
//! identically-ordered violations. The downstream scaffold generator must
//! only run when [`lint`] returns an empty list.
//!
//! # Example
//!
//! ```
//! use clispec_core::{Specification, lint_semantic};
//!
//! let document: Specification = serde_json::from_str(r#"{
//!     "name": "demo",
//!     "commands": [
//!         { "name": "run", "description": "Run the thing", "parameters": [
//!             { "name": "file", "description": "Input file", "in": "arguments",
//!               "index": 0, "schema": { "type": "string" } }
//!         ]}
//!     ]
//! }"#).unwrap();
//!
//! assert!(lint_semantic(&document).is_empty());
//! ```

mod command;
mod exit;
mod lint;
mod parameter;
mod schema;
mod symbols;
mod types;
mod violation;

pub use command::validate_commands;
pub use exit::validate_exit;
pub use lint::{StructuralCheck, lint, lint_semantic};
pub use parameter::validate_parameter;
pub use schema::validate_schema;
pub use symbols::SymbolTables;
pub use types::{
    Command, Exit, Parameter, ParameterLocation, Schema, SchemaFormat, SchemaType, Specification,
};
pub use violation::{LintError, Moment, Violation, ViolationKind};
