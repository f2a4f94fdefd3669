//! Symbol tables over the shared definition pools.
//!
//! Built once per validation run, before any tree traversal, and read-only
//! afterwards. `refers-to` resolution everywhere else in the engine goes
//! through these maps.

use std::collections::HashMap;

use crate::types::{Exit, Parameter, Schema, Specification, is_blank};
use crate::violation::{Violation, ViolationKind};

/// Id → entity lookup for the three shared pools.
///
/// Keys must be unique within their pool; a duplicate id is reported as a
/// [`ViolationKind::ValueMustBeUnique`] violation and the first definition
/// wins. Blank and missing ids are left out of the tables entirely — the
/// pool validators report those.
///
/// # Examples
///
/// ```
/// use clispec_core::{Schema, SchemaType, Specification, SymbolTables};
///
/// let mut document = Specification::default();
/// let mut shared = Schema::of(SchemaType::String);
/// shared.id = Some("token".into());
/// document.schemas = Some(vec![shared]);
///
/// let (tables, violations) = SymbolTables::build(&document);
/// assert!(violations.is_empty());
/// assert!(tables.schema("token").is_some());
/// assert!(tables.schema("missing").is_none());
/// ```
#[derive(Debug)]
pub struct SymbolTables<'a> {
    schemas: HashMap<&'a str, &'a Schema>,
    parameters: HashMap<&'a str, &'a Parameter>,
    exits: HashMap<&'a str, &'a Exit>,
}

impl<'a> SymbolTables<'a> {
    /// Builds the three tables in one pass over the pools.
    pub fn build(document: &'a Specification) -> (Self, Vec<Violation>) {
        let mut violations = Vec::new();
        let mut tables = Self {
            schemas: HashMap::new(),
            parameters: HashMap::new(),
            exits: HashMap::new(),
        };

        if let Some(pool) = &document.schemas {
            for (index, schema) in pool.iter().enumerate() {
                register(
                    &mut tables.schemas,
                    schema.id.as_deref(),
                    schema,
                    &format!("/schemas/{index}/id"),
                    &mut violations,
                );
            }
        }

        if let Some(pool) = &document.parameters {
            for (index, parameter) in pool.iter().enumerate() {
                register(
                    &mut tables.parameters,
                    parameter.id.as_deref(),
                    parameter,
                    &format!("/parameters/{index}/id"),
                    &mut violations,
                );
            }
        }

        if let Some(pool) = &document.exit {
            for (index, exit) in pool.iter().enumerate() {
                register(
                    &mut tables.exits,
                    exit.id.as_deref(),
                    exit,
                    &format!("/exit/{index}/id"),
                    &mut violations,
                );
            }
        }

        (tables, violations)
    }

    /// Resolves a shared schema by id.
    pub fn schema(&self, id: &str) -> Option<&'a Schema> {
        self.schemas.get(id).copied()
    }

    /// Resolves a shared parameter by id.
    pub fn parameter(&self, id: &str) -> Option<&'a Parameter> {
        self.parameters.get(id).copied()
    }

    /// Resolves a shared exit by id.
    pub fn exit(&self, id: &str) -> Option<&'a Exit> {
        self.exits.get(id).copied()
    }
}

fn register<'a, T>(
    table: &mut HashMap<&'a str, &'a T>,
    id: Option<&'a str>,
    entity: &'a T,
    path: &str,
    violations: &mut Vec<Violation>,
) {
    let Some(id) = id else {
        return;
    };
    if is_blank(id) {
        return;
    }
    if table.contains_key(id) {
        violations.push(Violation::semantic(path, ViolationKind::ValueMustBeUnique));
    } else {
        table.insert(id, entity);
    }
}
