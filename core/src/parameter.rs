//! Validation of flag and positional-argument parameters.
//!
//! A parameter occurrence is either a *value* instance (carries its own
//! fields) or a *reference* instance (only `refers-to`, optionally with an
//! `index` override for positional slots). Resolution turns an occurrence
//! into the *effective* parameter the command walker tracks for collision
//! and ordering checks.

use std::borrow::Cow;

use crate::schema::validate_schema;
use crate::symbols::SymbolTables;
use crate::types::{Parameter, ParameterLocation};
use crate::violation::{Violation, ViolationKind, require_text};

/// Outcome of classifying and resolving one parameter occurrence.
pub(crate) struct Resolution<'a> {
    /// Violations produced by classification/resolution itself.
    pub violations: Vec<Violation>,
    /// The parameter this occurrence stands for, if any survived.
    pub effective: Option<Cow<'a, Parameter>>,
    /// Whether own-field and schema checks still apply to `effective`.
    ///
    /// False for resolved references: the shared definition was already
    /// validated in its pool slot and is trusted here.
    pub check_fields: bool,
}

impl<'a> Resolution<'a> {
    fn halted(violations: Vec<Violation>) -> Self {
        Self {
            violations,
            effective: None,
            check_fields: false,
        }
    }
}

/// Classifies one occurrence and resolves `refers-to` when applicable.
///
/// Shared-pool occurrences (`is_local` = false) must never be references.
pub(crate) fn resolve<'a>(
    path: &str,
    parameter: &'a Parameter,
    is_local: bool,
    tables: &SymbolTables<'a>,
) -> Resolution<'a> {
    let Some(id) = &parameter.refers_to else {
        return Resolution {
            violations: Vec::new(),
            effective: Some(Cow::Borrowed(parameter)),
            check_fields: true,
        };
    };

    // refers-to next to value fields is self-contradictory
    if !parameter.is_reference() || !is_local {
        return Resolution::halted(vec![Violation::semantic(
            format!("{path}/refers-to"),
            ViolationKind::FieldNotAllowed,
        )]);
    }

    let Some(target) = tables.parameter(id) else {
        return Resolution::halted(vec![Violation::semantic(
            format!("{path}/refers-to"),
            ViolationKind::UnresolvableField,
        )]);
    };

    match (target.is_positional(), parameter.index) {
        // an index override only makes sense against a positional target
        (false, Some(_)) => Resolution::halted(vec![Violation::semantic(
            format!("{path}/index"),
            ViolationKind::FieldNotAllowed,
        )]),
        (true, Some(index)) => {
            let mut effective = target.clone();
            effective.index = Some(index);
            effective.refers_to = None;
            Resolution {
                violations: Vec::new(),
                effective: Some(Cow::Owned(effective)),
                check_fields: false,
            }
        }
        // fully inherited positional slot, tracked for index ordering
        (true, None) => Resolution {
            violations: Vec::new(),
            effective: Some(Cow::Borrowed(target)),
            check_fields: false,
        },
        // inherited flag, nothing left to check or track
        (false, None) => Resolution {
            violations: Vec::new(),
            effective: None,
            check_fields: false,
        },
    }
}

/// Validates a value instance's own fields and its schema.
pub(crate) fn validate_fields(
    path: &str,
    parameter: &Parameter,
    is_local: bool,
    tables: &SymbolTables,
) -> Vec<Violation> {
    let mut violations = Vec::new();

    if !is_local {
        require_text(path, "id", parameter.id.as_deref(), &mut violations);
    }
    require_text(path, "name", parameter.name.as_deref(), &mut violations);
    require_text(
        path,
        "description",
        parameter.description.as_deref(),
        &mut violations,
    );

    if parameter.index.is_some_and(|index| index < 0) {
        violations.push(Violation::semantic(
            format!("{path}/index"),
            ViolationKind::IndexMustBePositive,
        ));
    }

    match parameter.location_or_default() {
        ParameterLocation::Flags => {
            if parameter.index.is_some() {
                violations.push(Violation::semantic(
                    format!("{path}/index"),
                    ViolationKind::FieldNotAllowed,
                ));
            }
        }
        ParameterLocation::Arguments => {
            if parameter.index.is_none() {
                violations.push(Violation::semantic(
                    format!("{path}/index"),
                    ViolationKind::RequiredWhenArguments,
                ));
            }
            if parameter.short_form.is_some() {
                violations.push(Violation::semantic(
                    format!("{path}/short-form"),
                    ViolationKind::FieldNotAllowed,
                ));
            }
        }
    }

    match &parameter.schema {
        None => violations.push(Violation::semantic(
            format!("{path}/schema"),
            ViolationKind::RequiredField,
        )),
        Some(schema) => {
            violations.extend(validate_schema(&format!("{path}/schema"), schema, tables));
        }
    }

    violations
}

/// Validates one parameter occurrence.
///
/// `is_local` marks command-local occurrences; only those may be
/// references into the shared pool.
///
/// # Examples
///
/// ```
/// use clispec_core::{Parameter, ParameterLocation, Specification, SymbolTables,
///     ViolationKind, validate_parameter};
///
/// let document = Specification::default();
/// let (tables, _) = SymbolTables::build(&document);
///
/// let mut parameter = Parameter::default();
/// parameter.name = Some("file".into());
/// parameter.description = Some("Input file".into());
/// parameter.location = Some(ParameterLocation::Arguments);
///
/// let violations = validate_parameter("/parameters/0", &parameter, true, &tables);
/// assert!(violations
///     .iter()
///     .any(|v| v.kind == ViolationKind::RequiredWhenArguments));
/// ```
pub fn validate_parameter(
    path: &str,
    parameter: &Parameter,
    is_local: bool,
    tables: &SymbolTables,
) -> Vec<Violation> {
    let resolution = resolve(path, parameter, is_local, tables);
    let mut violations = resolution.violations;
    if resolution.check_fields {
        if let Some(effective) = &resolution.effective {
            violations.extend(validate_fields(path, effective, is_local, tables));
        }
    }
    violations
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Schema, SchemaType, Specification};

    fn value_parameter(name: &str) -> Parameter {
        Parameter {
            name: Some(name.to_string()),
            description: Some(format!("The {name} parameter")),
            schema: Some(Schema::of(SchemaType::String)),
            ..Parameter::default()
        }
    }

    fn shared_positional(id: &str, index: i64) -> Parameter {
        let mut parameter = value_parameter(id);
        parameter.id = Some(id.to_string());
        parameter.location = Some(ParameterLocation::Arguments);
        parameter.index = Some(index);
        parameter
    }

    fn tables_for(document: Specification) -> SymbolTables<'static> {
        let document: &'static Specification = Box::leak(Box::new(document));
        SymbolTables::build(document).0
    }

    fn empty_tables() -> SymbolTables<'static> {
        tables_for(Specification::default())
    }

    #[test]
    fn test_arguments_without_index() {
        let tables = empty_tables();
        let mut parameter = value_parameter("file");
        parameter.location = Some(ParameterLocation::Arguments);

        let violations = validate_parameter("/parameters/0", &parameter, true, &tables);
        assert_eq!(
            violations,
            vec![Violation::semantic(
                "/parameters/0/index",
                ViolationKind::RequiredWhenArguments,
            )],
        );
    }

    #[test]
    fn test_arguments_with_short_form() {
        let tables = empty_tables();
        let mut parameter = value_parameter("file");
        parameter.location = Some(ParameterLocation::Arguments);
        parameter.index = Some(0);
        parameter.short_form = Some("f".into());

        let violations = validate_parameter("/parameters/0", &parameter, true, &tables);
        assert_eq!(
            violations,
            vec![Violation::semantic(
                "/parameters/0/short-form",
                ViolationKind::FieldNotAllowed,
            )],
        );
    }

    #[test]
    fn test_flags_with_index() {
        let tables = empty_tables();
        let mut parameter = value_parameter("verbose");
        parameter.index = Some(1);

        let violations = validate_parameter("/p", &parameter, true, &tables);
        assert_eq!(
            violations,
            vec![Violation::semantic("/p/index", ViolationKind::FieldNotAllowed)],
        );
    }

    #[test]
    fn test_negative_index() {
        let tables = empty_tables();
        let mut parameter = value_parameter("file");
        parameter.location = Some(ParameterLocation::Arguments);
        parameter.index = Some(-1);

        let violations = validate_parameter("/p", &parameter, true, &tables);
        assert_eq!(
            violations,
            vec![Violation::semantic("/p/index", ViolationKind::IndexMustBePositive)],
        );
    }

    #[test]
    fn test_shared_pool_requires_id() {
        let tables = empty_tables();
        let parameter = value_parameter("verbose");

        let violations = validate_parameter("/parameters/0", &parameter, false, &tables);
        assert_eq!(
            violations,
            vec![Violation::semantic("/parameters/0/id", ViolationKind::RequiredField)],
        );
    }

    #[test]
    fn test_blank_name_and_missing_schema() {
        let tables = empty_tables();
        let parameter = Parameter {
            name: Some("   ".into()),
            description: Some("d".into()),
            ..Parameter::default()
        };

        let violations = validate_parameter("/p", &parameter, true, &tables);
        assert_eq!(
            violations,
            vec![
                Violation::semantic("/p/name", ViolationKind::BlankField),
                Violation::semantic("/p/schema", ViolationKind::RequiredField),
            ],
        );
    }

    #[test]
    fn test_reference_with_value_fields_is_contradictory() {
        let tables = empty_tables();
        let mut parameter = value_parameter("verbose");
        parameter.refers_to = Some("verbose".into());

        let violations = validate_parameter("/p", &parameter, true, &tables);
        assert_eq!(
            violations,
            vec![Violation::semantic("/p/refers-to", ViolationKind::FieldNotAllowed)],
        );
    }

    #[test]
    fn test_shared_pool_reference_is_not_allowed() {
        let mut document = Specification::default();
        document.parameters = Some(vec![shared_positional("file", 0)]);
        let tables = tables_for(document);

        let reference = Parameter {
            refers_to: Some("file".into()),
            ..Parameter::default()
        };
        let violations = validate_parameter("/parameters/1", &reference, false, &tables);
        assert_eq!(
            violations,
            vec![Violation::semantic(
                "/parameters/1/refers-to",
                ViolationKind::FieldNotAllowed,
            )],
        );
    }

    #[test]
    fn test_unresolved_local_reference() {
        let tables = empty_tables();
        let reference = Parameter {
            refers_to: Some("missing".into()),
            ..Parameter::default()
        };

        let violations = validate_parameter("/p", &reference, true, &tables);
        assert_eq!(
            violations,
            vec![Violation::semantic("/p/refers-to", ViolationKind::UnresolvableField)],
        );
    }

    #[test]
    fn test_index_override_against_flag_target() {
        let mut shared = value_parameter("verbose");
        shared.id = Some("verbose".into());
        let mut document = Specification::default();
        document.parameters = Some(vec![shared]);
        let tables = tables_for(document);

        let reference = Parameter {
            refers_to: Some("verbose".into()),
            index: Some(0),
            ..Parameter::default()
        };
        let violations = validate_parameter("/p", &reference, true, &tables);
        assert_eq!(
            violations,
            vec![Violation::semantic("/p/index", ViolationKind::FieldNotAllowed)],
        );
    }

    #[test]
    fn test_index_override_clones_target_with_new_slot() {
        let mut document = Specification::default();
        document.parameters = Some(vec![shared_positional("file", 0)]);
        let tables = tables_for(document);

        let reference = Parameter {
            refers_to: Some("file".into()),
            index: Some(3),
            ..Parameter::default()
        };
        let resolution = resolve("/p", &reference, true, &tables);
        assert!(resolution.violations.is_empty());
        assert!(!resolution.check_fields);

        let effective = resolution.effective.unwrap();
        assert_eq!(effective.index, Some(3));
        assert_eq!(effective.refers_to, None);
        assert_eq!(effective.name.as_deref(), Some("file"));

        // the shared definition is trusted: no further violations either way
        let violations = validate_parameter("/p", &reference, true, &tables);
        assert!(violations.is_empty());
        let again = validate_parameter("/p", &reference, true, &tables);
        assert_eq!(violations, again);
    }

    #[test]
    fn test_fully_inherited_positional_reference() {
        let mut document = Specification::default();
        document.parameters = Some(vec![shared_positional("file", 1)]);
        let tables = tables_for(document);

        let reference = Parameter {
            refers_to: Some("file".into()),
            ..Parameter::default()
        };
        let resolution = resolve("/p", &reference, true, &tables);
        assert!(resolution.violations.is_empty());
        assert_eq!(resolution.effective.unwrap().index, Some(1));
        assert!(!resolution.check_fields);
    }

    #[test]
    fn test_inherited_flag_reference_is_untracked() {
        let mut shared = value_parameter("verbose");
        shared.id = Some("verbose".into());
        let mut document = Specification::default();
        document.parameters = Some(vec![shared]);
        let tables = tables_for(document);

        let reference = Parameter {
            refers_to: Some("verbose".into()),
            ..Parameter::default()
        };
        let resolution = resolve("/p", &reference, true, &tables);
        assert!(resolution.violations.is_empty());
        assert!(resolution.effective.is_none());
    }

    #[test]
    fn test_schema_violations_are_nested_under_schema() {
        let tables = empty_tables();
        let mut parameter = value_parameter("level");
        let mut schema = Schema::of(SchemaType::String);
        schema.min_length = Some(5);
        schema.max_length = Some(2);
        parameter.schema = Some(schema);

        let violations = validate_parameter("/parameters/0", &parameter, true, &tables);
        assert_eq!(
            violations,
            vec![Violation::semantic(
                "/parameters/0/schema/min-length",
                ViolationKind::MinLengthExceedsMaxLength,
            )],
        );
    }
}
