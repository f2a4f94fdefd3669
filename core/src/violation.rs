//! Violation reporting primitives.
//!
//! A [`Violation`] describes one defect found in a specification document:
//! a JSON-pointer-style path to the offending field, a stable diagnostic
//! code, and the [`Moment`] (validation phase) that produced it. Violations
//! are plain data; producing one never aborts validation of the rest of the
//! document.

use std::fmt;

use thiserror::Error;

/// Validation phase during which a violation was produced.
///
/// The structural phase checks the raw document bytes against a fixed
/// baseline shape; the semantic phase runs the full validation engine over
/// the parsed document. A document that fails the structural phase is never
/// semantically validated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Moment {
    /// Produced by the baseline structural pre-check.
    Structural,
    /// Produced by the semantic validation engine.
    Semantic,
}

impl fmt::Display for Moment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Moment::Structural => write!(f, "structural"),
            Moment::Semantic => write!(f, "semantic"),
        }
    }
}

/// Stable diagnostic codes for semantic violations.
///
/// The `Display` impl renders the wire code reported to users, e.g.
/// `required-field`. Structural pre-check findings carry their original
/// message through the [`Structure`](ViolationKind::Structure) variant.
///
/// # Examples
///
/// ```
/// use clispec_core::ViolationKind;
///
/// assert_eq!(ViolationKind::RequiredField.to_string(), "required-field");
/// assert_eq!(
///     ViolationKind::ArgsIndexNotOrdered.to_string(),
///     "args-index-not-ordered",
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ViolationKind {
    /// A mandatory field is absent.
    #[error("required-field")]
    RequiredField,
    /// A field is present but holds only whitespace.
    #[error("blank-field")]
    BlankField,
    /// A field is not permitted in this position.
    #[error("field-not-allowed")]
    FieldNotAllowed,
    /// A `refers-to` value matches no shared definition.
    #[error("unresolvable-field")]
    UnresolvableField,
    /// An identifier collides with one declared earlier.
    #[error("value-must-be-unique")]
    ValueMustBeUnique,
    /// A flag name is already taken within the same command.
    #[error("value-in-use")]
    ValueInUse,
    /// A textual `format` applied to a non-string schema.
    #[error("format-only-allowed-in-string")]
    FormatOnlyAllowedInString,
    /// A non-textual `format` applied to a string schema.
    #[error("format-not-allowed-in-string")]
    FormatNotAllowedInString,
    /// A string-only constraint on a non-string schema.
    #[error("only-allowed-in-string")]
    OnlyAllowedInString,
    #[error("min-length-must-be-non-negative")]
    MinLengthMustBeNonNegative,
    #[error("max-length-must-be-non-negative")]
    MaxLengthMustBeNonNegative,
    #[error("min-length-exceeds-max-length")]
    MinLengthExceedsMaxLength,
    /// A number-only constraint on a non-number schema.
    #[error("only-allowed-in-number")]
    OnlyAllowedInNumber,
    #[error("min-exceeds-max")]
    MinExceedsMax,
    /// An array whose `items` schema is itself an array.
    #[error("array-item-type-not-allowed")]
    ArrayItemTypeNotAllowed,
    #[error("min-items-must-be-non-negative")]
    MinItemsMustBeNonNegative,
    #[error("max-items-must-be-non-negative")]
    MaxItemsMustBeNonNegative,
    #[error("min-items-exceeds-max-items")]
    MinItemsExceedsMaxItems,
    /// An `examples` literal missing from the declared `enum`.
    #[error("example-must-be-in-enum")]
    ExampleMustBeInEnum,
    /// A negative positional index.
    #[error("index-must-be-positive")]
    IndexMustBePositive,
    /// `index` missing on an `in=arguments` parameter.
    #[error("required-when-arguments")]
    RequiredWhenArguments,
    /// Two positional parameters sharing one index.
    #[error("args-index-not-unique")]
    ArgsIndexNotUnique,
    /// Positional indices not contiguous from zero.
    #[error("args-index-not-ordered")]
    ArgsIndexNotOrdered,
    /// Verbatim message from the baseline structural check.
    #[error("{0}")]
    Structure(String),
}

/// One defect found in a specification document.
///
/// Immutable once constructed. The path is a JSON-pointer-style locator
/// such as `/parameters/0/schema/min-length` or
/// `/commands/0/commands/1/exit/0/code`.
///
/// # Examples
///
/// ```
/// use clispec_core::{Moment, Violation, ViolationKind};
///
/// let violation = Violation::semantic("/commands/0/name", ViolationKind::RequiredField);
/// assert_eq!(violation.moment, Moment::Semantic);
/// assert_eq!(violation.to_string(), "/commands/0/name / required-field");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    /// JSON-pointer-style location of the offending field.
    pub path: String,
    /// Stable diagnostic code.
    pub kind: ViolationKind,
    /// Phase that produced this violation.
    pub moment: Moment,
}

impl Violation {
    /// Creates a semantic-phase violation.
    pub fn semantic(path: impl Into<String>, kind: ViolationKind) -> Self {
        Self {
            path: path.into(),
            kind,
            moment: Moment::Semantic,
        }
    }

    /// Creates a structural-phase violation carrying a pre-check message.
    pub fn structural(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            kind: ViolationKind::Structure(message.into()),
            moment: Moment::Structural,
        }
    }

    /// Returns the diagnostic message for this violation.
    pub fn message(&self) -> String {
        self.kind.to_string()
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} / {}", self.path, self.kind)
    }
}

/// Fatal, non-recoverable linting failure.
///
/// Disjoint from [`Violation`]: a fatal error describes a defect in the
/// run itself (unreadable input, a broken collaborator), never in the
/// document, and aborts the whole validation call.
#[derive(Debug, Error)]
pub enum LintError {
    /// The structural pre-check collaborator failed to run at all.
    #[error("structural pre-check failed")]
    Structural(#[source] Box<dyn std::error::Error + Send + Sync + 'static>),
}

impl LintError {
    /// Wraps a collaborator failure into a fatal structural error.
    pub fn structural(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Structural(Box::new(err))
    }
}

/// Reports a required, non-blank text field at `{path}/{field}`.
pub(crate) fn require_text(
    path: &str,
    field: &str,
    value: Option<&str>,
    out: &mut Vec<Violation>,
) {
    match value {
        None => out.push(Violation::semantic(
            format!("{path}/{field}"),
            ViolationKind::RequiredField,
        )),
        Some(value) if crate::types::is_blank(value) => out.push(Violation::semantic(
            format!("{path}/{field}"),
            ViolationKind::BlankField,
        )),
        Some(_) => {}
    }
}
