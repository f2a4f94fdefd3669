//! Recursive type-checking of value schemas.
//!
//! [`validate_schema`] checks one [`Schema`] node and its nested item
//! schema against the schema symbol table. All applicable checks are
//! collected; the only early exits are a node with neither `type` nor
//! `refers-to` (nothing further is meaningful) and an unresolvable or
//! pure reference (the shared definition is validated in its own pool
//! slot, not at every use site).

use crate::symbols::SymbolTables;
use crate::types::{Schema, SchemaType};
use crate::violation::{Violation, ViolationKind};

/// Type-checks a schema node, returning every violation found.
///
/// `path` locates the node inside the document and prefixes every
/// reported violation path.
///
/// # Examples
///
/// ```
/// use clispec_core::{Schema, SchemaType, Specification, SymbolTables, validate_schema};
///
/// let document = Specification::default();
/// let (tables, _) = SymbolTables::build(&document);
///
/// let mut schema = Schema::of(SchemaType::String);
/// schema.min_length = Some(5);
/// schema.max_length = Some(2);
///
/// let violations = validate_schema("/parameters/0/schema", &schema, &tables);
/// assert_eq!(violations.len(), 1);
/// assert_eq!(violations[0].path, "/parameters/0/schema/min-length");
/// ```
pub fn validate_schema(path: &str, schema: &Schema, tables: &SymbolTables) -> Vec<Violation> {
    let mut violations = Vec::new();

    let type_of = match schema.type_of {
        Some(type_of) => type_of,
        None => {
            match &schema.refers_to {
                None => violations.push(Violation::semantic(
                    format!("{path}/type"),
                    ViolationKind::RequiredField,
                )),
                Some(id) => {
                    if tables.schema(id).is_none() {
                        violations.push(Violation::semantic(
                            format!("{path}/refers-to"),
                            ViolationKind::UnresolvableField,
                        ));
                    }
                }
            }
            return violations;
        }
    };

    if schema.refers_to.is_some() {
        violations.push(Violation::semantic(
            format!("{path}/refers-to"),
            ViolationKind::FieldNotAllowed,
        ));
    }

    if let Some(format) = schema.format {
        if type_of != SchemaType::String && format.is_textual() {
            violations.push(Violation::semantic(
                format!("{path}/format"),
                ViolationKind::FormatOnlyAllowedInString,
            ));
        }
        if type_of == SchemaType::String && !format.is_textual() {
            violations.push(Violation::semantic(
                format!("{path}/format"),
                ViolationKind::FormatNotAllowedInString,
            ));
        }
    }

    string_rules(path, schema, type_of, &mut violations);
    number_rules(path, schema, type_of, &mut violations);
    let descend = array_rules(path, schema, type_of, &mut violations);
    example_rules(path, schema, &mut violations);

    if descend {
        if let Some(items) = &schema.items {
            violations.extend(validate_schema(&format!("{path}/items"), items, tables));
        }
    }

    violations
}

fn string_rules(path: &str, schema: &Schema, type_of: SchemaType, out: &mut Vec<Violation>) {
    if type_of != SchemaType::String {
        if schema.min_length.is_some() {
            out.push(Violation::semantic(
                format!("{path}/min-length"),
                ViolationKind::OnlyAllowedInString,
            ));
        }
        if schema.max_length.is_some() {
            out.push(Violation::semantic(
                format!("{path}/max-length"),
                ViolationKind::OnlyAllowedInString,
            ));
        }
        if schema.pattern.is_some() {
            out.push(Violation::semantic(
                format!("{path}/pattern"),
                ViolationKind::FieldNotAllowed,
            ));
        }
        return;
    }

    if schema.min_length.is_some_and(|min| min < 0) {
        out.push(Violation::semantic(
            format!("{path}/min-length"),
            ViolationKind::MinLengthMustBeNonNegative,
        ));
    }
    if schema.max_length.is_some_and(|max| max < 0) {
        out.push(Violation::semantic(
            format!("{path}/max-length"),
            ViolationKind::MaxLengthMustBeNonNegative,
        ));
    }
    if let (Some(min), Some(max)) = (schema.min_length, schema.max_length) {
        if min > max {
            out.push(Violation::semantic(
                format!("{path}/min-length"),
                ViolationKind::MinLengthExceedsMaxLength,
            ));
        }
    }
}

fn number_rules(path: &str, schema: &Schema, type_of: SchemaType, out: &mut Vec<Violation>) {
    if type_of != SchemaType::Number {
        for (field, present) in [
            ("multiple-of", schema.multiple_of.is_some()),
            ("minimum", schema.minimum.is_some()),
            ("maximum", schema.maximum.is_some()),
            ("exclusive-minimum", schema.exclusive_minimum.is_some()),
            ("exclusive-maximum", schema.exclusive_maximum.is_some()),
        ] {
            if present {
                out.push(Violation::semantic(
                    format!("{path}/{field}"),
                    ViolationKind::OnlyAllowedInNumber,
                ));
            }
        }
        return;
    }

    if let (Some(min), Some(max)) = (schema.minimum, schema.maximum) {
        if min > max {
            out.push(Violation::semantic(
                format!("{path}/minimum"),
                ViolationKind::MinExceedsMax,
            ));
        }
    }
    // an exclusive bound without its base bound has nothing to exclude
    if schema.exclusive_minimum == Some(true) && schema.minimum.is_none() {
        out.push(Violation::semantic(
            format!("{path}/minimum"),
            ViolationKind::RequiredField,
        ));
    }
    if schema.exclusive_maximum == Some(true) && schema.maximum.is_none() {
        out.push(Violation::semantic(
            format!("{path}/maximum"),
            ViolationKind::RequiredField,
        ));
    }
}

/// Applies array rules; returns whether recursion into `items` is sound.
fn array_rules(path: &str, schema: &Schema, type_of: SchemaType, out: &mut Vec<Violation>) -> bool {
    if type_of != SchemaType::Array {
        for (field, present) in [
            ("min-items", schema.min_items.is_some()),
            ("max-items", schema.max_items.is_some()),
            ("unique-items", schema.unique_items.is_some()),
        ] {
            if present {
                out.push(Violation::semantic(
                    format!("{path}/{field}"),
                    ViolationKind::FieldNotAllowed,
                ));
            }
        }
        return schema.items.is_some();
    }

    if schema.items.is_none() && schema.refers_to.is_none() {
        out.push(Violation::semantic(
            format!("{path}/items"),
            ViolationKind::RequiredField,
        ));
    }

    if let Some(items) = &schema.items {
        if items.type_of == Some(SchemaType::Array) {
            out.push(Violation::semantic(
                format!("{path}/items/type"),
                ViolationKind::ArrayItemTypeNotAllowed,
            ));
            return false;
        }
    }

    if schema.min_items.is_some_and(|min| min < 0) {
        out.push(Violation::semantic(
            format!("{path}/min-items"),
            ViolationKind::MinItemsMustBeNonNegative,
        ));
    }
    if schema.max_items.is_some_and(|max| max < 0) {
        out.push(Violation::semantic(
            format!("{path}/max-items"),
            ViolationKind::MaxItemsMustBeNonNegative,
        ));
    }
    if let (Some(min), Some(max)) = (schema.min_items, schema.max_items) {
        if min > max {
            out.push(Violation::semantic(
                format!("{path}/min-items"),
                ViolationKind::MinItemsExceedsMaxItems,
            ));
        }
    }

    if schema.format.is_some() {
        out.push(Violation::semantic(
            format!("{path}/format"),
            ViolationKind::FieldNotAllowed,
        ));
    }

    schema.items.is_some()
}

fn example_rules(path: &str, schema: &Schema, out: &mut Vec<Violation>) {
    let (Some(allowed), Some(examples)) = (&schema.enum_values, &schema.examples) else {
        return;
    };
    for (index, example) in examples.iter().enumerate() {
        if !allowed.contains(example) {
            out.push(Violation::semantic(
                format!("{path}/examples/{index}"),
                ViolationKind::ExampleMustBeInEnum,
            ));
        }
    }
}
