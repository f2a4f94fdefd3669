//! Pre-order traversal of the command tree.
//!
//! Each node is checked for its own invariants, then its local exits and
//! parameters are validated with command-scoped collision detection, and
//! finally its subcommands are visited. The only cross-cutting state is
//! the global command-id cache, passed explicitly down the recursion.

use std::collections::HashSet;

use crate::exit::validate_exit;
use crate::parameter;
use crate::symbols::SymbolTables;
use crate::types::{Command, Parameter, is_blank};
use crate::violation::{Violation, ViolationKind, require_text};

/// Walks the root command list, validating the whole tree.
///
/// # Examples
///
/// ```
/// use clispec_core::{Command, Specification, SymbolTables, ViolationKind, validate_commands};
///
/// let document = Specification::default();
/// let (tables, _) = SymbolTables::build(&document);
///
/// let mut first = Command::named("run", "Run it");
/// first.id = Some("x".into());
/// let mut second = Command::named("stop", "Stop it");
/// second.id = Some("x".into());
///
/// let violations = validate_commands(&[first, second], &tables);
/// assert_eq!(violations.len(), 1);
/// assert_eq!(violations[0].path, "/commands/1/id");
/// assert_eq!(violations[0].kind, ViolationKind::ValueMustBeUnique);
/// ```
pub fn validate_commands(commands: &[Command], tables: &SymbolTables) -> Vec<Violation> {
    let mut violations = Vec::new();
    let mut ids = HashSet::new();
    for (index, command) in commands.iter().enumerate() {
        walk(
            &format!("/commands/{index}"),
            command,
            &mut ids,
            tables,
            &mut violations,
        );
    }
    violations
}

fn walk(
    path: &str,
    command: &Command,
    ids: &mut HashSet<String>,
    tables: &SymbolTables,
    out: &mut Vec<Violation>,
) {
    if let Some(id) = &command.id {
        if is_blank(id) {
            out.push(Violation::semantic(
                format!("{path}/id"),
                ViolationKind::BlankField,
            ));
        }
        if ids.contains(id) {
            out.push(Violation::semantic(
                format!("{path}/id"),
                ViolationKind::ValueMustBeUnique,
            ));
        }
    }

    require_text(path, "name", command.name.as_deref(), out);
    require_text(path, "description", command.description.as_deref(), out);

    // a command is either a branch or a leaf, never both
    if command.subcommands.is_some() {
        if command.exit.is_some() {
            out.push(Violation::semantic(
                format!("{path}/exit"),
                ViolationKind::FieldNotAllowed,
            ));
        }
        if command.parameters.is_some() {
            out.push(Violation::semantic(
                format!("{path}/parameters"),
                ViolationKind::FieldNotAllowed,
            ));
        }
    }

    if let Some(exits) = &command.exit {
        for (index, exit) in exits.iter().enumerate() {
            out.extend(validate_exit(
                &format!("{path}/exit/{index}"),
                exit,
                true,
                tables,
            ));
        }
    }

    if let Some(parameters) = &command.parameters {
        validate_local_parameters(path, parameters, tables, out);
    }

    // recorded after the node's own checks so a command can never collide
    // with itself
    if let Some(id) = &command.id {
        ids.insert(id.clone());
    }

    if let Some(subcommands) = &command.subcommands {
        for (index, subcommand) in subcommands.iter().enumerate() {
            walk(
                &format!("{path}/commands/{index}"),
                subcommand,
                ids,
                tables,
                out,
            );
        }
    }
}

fn validate_local_parameters(
    path: &str,
    parameters: &[Parameter],
    tables: &SymbolTables,
    out: &mut Vec<Violation>,
) {
    let mut flag_names: HashSet<String> = HashSet::new();
    let mut short_forms: HashSet<String> = HashSet::new();
    let mut positional: Vec<i64> = Vec::new();

    for (index, occurrence) in parameters.iter().enumerate() {
        let parameter_path = format!("{path}/parameters/{index}");
        let resolution = parameter::resolve(&parameter_path, occurrence, true, tables);
        out.extend(resolution.violations);

        let Some(effective) = &resolution.effective else {
            continue;
        };

        if effective.is_positional() {
            // negative slots already carry index-must-be-positive
            if let Some(slot) = effective.index.filter(|slot| *slot >= 0) {
                positional.push(slot);
            }
        } else {
            if let Some(name) = &effective.name {
                if !flag_names.insert(name.clone()) {
                    out.push(Violation::semantic(
                        format!("{parameter_path}/name"),
                        ViolationKind::ValueInUse,
                    ));
                }
            }
            if let Some(short_form) = &effective.short_form {
                if !short_forms.insert(short_form.clone()) {
                    out.push(Violation::semantic(
                        format!("{parameter_path}/short-form"),
                        ViolationKind::ValueMustBeUnique,
                    ));
                }
            }
        }

        if resolution.check_fields {
            out.extend(parameter::validate_fields(
                &parameter_path,
                effective,
                true,
                tables,
            ));
        }
    }

    positional.sort_unstable();
    let mut previous: Option<i64> = None;
    for slot in positional {
        match previous {
            Some(prev) if slot == prev => out.push(Violation::semantic(
                format!("{path}/parameters"),
                ViolationKind::ArgsIndexNotUnique,
            )),
            Some(prev) if slot > prev + 1 => out.push(Violation::semantic(
                format!("{path}/parameters"),
                ViolationKind::ArgsIndexNotOrdered,
            )),
            None if slot != 0 => out.push(Violation::semantic(
                format!("{path}/parameters"),
                ViolationKind::ArgsIndexNotOrdered,
            )),
            _ => {}
        }
        previous = Some(slot);
    }
}
