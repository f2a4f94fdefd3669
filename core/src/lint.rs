//! The two-phase linter pipeline.
//!
//! Structural first: the raw document bytes go through an external
//! [`StructuralCheck`]; any finding short-circuits the run, since a
//! document without the baseline shape cannot be meaningfully validated.
//! Semantic second: symbol tables, the three shared pools, then the
//! command tree, with every violation list concatenated in a fixed order.
//! Re-running on the same input yields an identical, identically-ordered
//! result.

use crate::command::validate_commands;
use crate::exit::validate_exit;
use crate::parameter::validate_parameter;
use crate::schema::validate_schema;
use crate::symbols::SymbolTables;
use crate::types::{Specification, is_blank};
use crate::violation::{LintError, Violation, ViolationKind};

/// Baseline structural pre-check collaborator.
///
/// Implementations validate the raw document bytes against a fixed
/// baseline shape (typically a JSON Schema) and report findings as
/// structural violations. The core never parses raw bytes itself.
pub trait StructuralCheck {
    /// Checks the raw bytes, returning structural violations.
    ///
    /// # Errors
    ///
    /// Returns a fatal [`LintError`] when the check itself cannot run
    /// (e.g. the bytes are not parsable at all) — never for a defect in
    /// the document's shape.
    fn validate(&self, raw: &[u8]) -> Result<Vec<Violation>, LintError>;
}

/// Lints a specification document.
///
/// Runs the structural phase over `raw` and, only when it is clean, the
/// semantic phase over `document`. The returned list is empty exactly
/// when the document is valid.
///
/// # Errors
///
/// Propagates fatal errors from the structural collaborator; violations
/// are data, never errors.
pub fn lint(
    document: &Specification,
    raw: &[u8],
    structural: &impl StructuralCheck,
) -> Result<Vec<Violation>, LintError> {
    let findings = structural.validate(raw)?;
    if !findings.is_empty() {
        return Ok(findings);
    }
    Ok(lint_semantic(document))
}

/// Runs only the semantic phase. Pure: no I/O, no shared state.
pub fn lint_semantic(document: &Specification) -> Vec<Violation> {
    let (tables, mut violations) = SymbolTables::build(document);

    if let Some(pool) = &document.schemas {
        for (index, schema) in pool.iter().enumerate() {
            let path = format!("/schemas/{index}");
            match schema.id.as_deref() {
                None => violations.push(Violation::semantic(
                    format!("{path}/id"),
                    ViolationKind::RequiredField,
                )),
                Some(id) if is_blank(id) => violations.push(Violation::semantic(
                    format!("{path}/id"),
                    ViolationKind::BlankField,
                )),
                Some(_) => {}
            }
            // a pool root that is itself a reference defines nothing
            if schema.refers_to.is_some() {
                violations.push(Violation::semantic(
                    format!("{path}/refers-to"),
                    ViolationKind::FieldNotAllowed,
                ));
            } else {
                violations.extend(validate_schema(&path, schema, &tables));
            }
        }
    }

    if let Some(pool) = &document.parameters {
        for (index, parameter) in pool.iter().enumerate() {
            violations.extend(validate_parameter(
                &format!("/parameters/{index}"),
                parameter,
                false,
                &tables,
            ));
        }
    }

    if let Some(pool) = &document.exit {
        for (index, exit) in pool.iter().enumerate() {
            violations.extend(validate_exit(&format!("/exit/{index}"), exit, false, &tables));
        }
    }

    if let Some(commands) = &document.commands {
        violations.extend(validate_commands(commands, &tables));
    }

    violations
}
