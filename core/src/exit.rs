//! Validation of documented exit conditions.

use crate::symbols::SymbolTables;
use crate::types::{Exit, is_blank};
use crate::violation::{Violation, ViolationKind};

/// Validates one exit occurrence.
///
/// Shared-pool entries (`is_local` = false) must carry a non-blank `id`
/// and may not be references; command-local entries are anonymous and may
/// reference a shared exit instead of restating it.
///
/// # Examples
///
/// ```
/// use clispec_core::{Exit, Specification, SymbolTables, ViolationKind, validate_exit};
///
/// let document = Specification::default();
/// let (tables, _) = SymbolTables::build(&document);
///
/// let mut exit = Exit::default();
/// exit.refers_to = Some("not-found".into());
///
/// let violations = validate_exit("/commands/0/exit/0", &exit, true, &tables);
/// assert_eq!(violations[0].kind, ViolationKind::UnresolvableField);
/// ```
pub fn validate_exit(
    path: &str,
    exit: &Exit,
    is_local: bool,
    tables: &SymbolTables,
) -> Vec<Violation> {
    let mut violations = Vec::new();

    if let Some(id) = &exit.refers_to {
        // refers-to next to value fields is self-contradictory
        if !exit.is_reference() || !is_local {
            violations.push(Violation::semantic(
                format!("{path}/refers-to"),
                ViolationKind::FieldNotAllowed,
            ));
        } else if tables.exit(id).is_none() {
            violations.push(Violation::semantic(
                format!("{path}/refers-to"),
                ViolationKind::UnresolvableField,
            ));
        }
        return violations;
    }

    if exit.code.is_none() {
        violations.push(Violation::semantic(
            format!("{path}/code"),
            ViolationKind::RequiredField,
        ));
    }

    match exit.message.as_deref() {
        None => violations.push(Violation::semantic(
            format!("{path}/message"),
            ViolationKind::RequiredField,
        )),
        Some(message) if is_blank(message) => violations.push(Violation::semantic(
            format!("{path}/message"),
            ViolationKind::BlankField,
        )),
        Some(_) => {}
    }

    if is_local {
        // local inline exits are anonymous
        if exit.id.is_some() {
            violations.push(Violation::semantic(
                format!("{path}/id"),
                ViolationKind::FieldNotAllowed,
            ));
        }
    } else {
        match exit.id.as_deref() {
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
    }

    violations
}
