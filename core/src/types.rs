//! Specification model for CLI specification documents.
//!
//! These types mirror the on-disk document format (JSON or YAML with
//! kebab-case keys) and carry no behavior beyond classification helpers.
//! Every optional document field is an explicit [`Option`], so "field
//! absent" and "field present but empty" stay distinguishable — the
//! validators depend on that distinction.

use serde::{Deserialize, Serialize};

/// Concrete value type of a [`Schema`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SchemaType {
    String,
    Number,
    Boolean,
    Array,
}

/// Value format hint attached to a [`Schema`].
///
/// Only [`Date`](SchemaFormat::Date), [`DateTime`](SchemaFormat::DateTime)
/// and [`Binary`](SchemaFormat::Binary) are legal on string schemas; the
/// numeric hints exist on the wire but are rejected by the validator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SchemaFormat {
    Date,
    DateTime,
    Binary,
    Byte,
    Int32,
    Int64,
    Float,
    Double,
}

impl SchemaFormat {
    /// Returns `true` for the formats permitted on `type=string`.
    pub fn is_textual(self) -> bool {
        matches!(self, Self::Date | Self::DateTime | Self::Binary)
    }
}

/// Recursive value-type descriptor for parameter values.
///
/// Exactly one of `type_of` and `refers_to` must be set; the validator
/// reports every other combination. Type-conditional constraint fields are
/// only meaningful for their own type and are rejected elsewhere.
///
/// # Examples
///
/// ```
/// use clispec_core::{Schema, SchemaType};
///
/// let schema = Schema::of(SchemaType::Array).with_items(Schema::of(SchemaType::String));
/// assert_eq!(schema.type_of, Some(SchemaType::Array));
/// assert!(schema.items.is_some());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Schema {
    /// Identifier, required for shared-pool definitions.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Concrete value type.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub type_of: Option<SchemaType>,
    /// Identifier of a shared schema definition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refers_to: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<SchemaFormat>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_length: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_length: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minimum: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maximum: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclusive_minimum: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclusive_maximum: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub multiple_of: Option<i64>,
    /// Item schema, required when `type=array`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<Box<Schema>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_items: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_items: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unique_items: Option<bool>,
    /// Allowed literal values.
    #[serde(rename = "enum", skip_serializing_if = "Option::is_none")]
    pub enum_values: Option<Vec<String>>,
    /// Example literals; each must belong to `enum` when both are present.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub examples: Option<Vec<String>>,
}

impl Schema {
    /// Creates a schema with a concrete type and nothing else set.
    pub fn of(type_of: SchemaType) -> Self {
        Self {
            type_of: Some(type_of),
            ..Self::default()
        }
    }

    /// Creates a schema that only points at a shared definition.
    pub fn reference(id: &str) -> Self {
        Self {
            refers_to: Some(id.to_string()),
            ..Self::default()
        }
    }

    /// Sets the item schema.
    pub fn with_items(mut self, items: Schema) -> Self {
        self.items = Some(Box::new(items));
        self
    }
}

/// Where a parameter is supplied on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParameterLocation {
    /// Named flag, e.g. `--verbose` (the default).
    #[default]
    Flags,
    /// Positional argument, consumed by `index`.
    Arguments,
}

/// A CLI flag or positional argument.
///
/// A *reference* occurrence sets only `refers_to` (plus, for positional
/// parameters, an optional `index` override); everything else makes it a
/// *value* occurrence. [`is_reference`](Parameter::is_reference) encodes
/// that classification totally.
///
/// # Examples
///
/// ```
/// use clispec_core::Parameter;
///
/// let mut parameter = Parameter::default();
/// parameter.refers_to = Some("verbosity".into());
/// assert!(parameter.is_reference());
///
/// parameter.name = Some("verbose".into());
/// assert!(!parameter.is_reference());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Parameter {
    /// Identifier, required for shared-pool definitions.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Wire field `in`; flags when unset.
    #[serde(rename = "in", skip_serializing_if = "Option::is_none")]
    pub location: Option<ParameterLocation>,
    /// Positional slot, required iff `in=arguments`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub index: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Single-dash alias, flags only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub short_form: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "default", skip_serializing_if = "Option::is_none")]
    pub default_value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schema: Option<Schema>,
    /// Identifier of a shared parameter definition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refers_to: Option<String>,
}

impl Parameter {
    /// Returns the effective location, defaulting to flags.
    pub fn location_or_default(&self) -> ParameterLocation {
        self.location.unwrap_or_default()
    }

    /// Returns `true` when the parameter is consumed by position.
    pub fn is_positional(&self) -> bool {
        self.location_or_default() == ParameterLocation::Arguments
    }

    /// Classifies this occurrence as a reference instance.
    ///
    /// A reference sets no value-carrying field: only `refers_to`, plus an
    /// optional `index` used to override a positional slot.
    pub fn is_reference(&self) -> bool {
        self.id.is_none()
            && self.location.is_none()
            && self.required.is_none()
            && self.name.is_none()
            && self.short_form.is_none()
            && self.description.is_none()
            && self.default_value.is_none()
            && self.schema.is_none()
            && (self.index.is_none() || self.refers_to.is_some())
    }
}

/// A documented process exit condition.
///
/// # Examples
///
/// ```
/// use clispec_core::Exit;
///
/// let mut exit = Exit::default();
/// exit.refers_to = Some("not-found".into());
/// assert!(exit.is_reference());
///
/// exit.code = Some(2);
/// assert!(!exit.is_reference());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Exit {
    /// Identifier, required for shared-pool definitions and forbidden on
    /// command-local exits.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Identifier of a shared exit definition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refers_to: Option<String>,
}

impl Exit {
    /// Classifies this occurrence as a reference instance.
    pub fn is_reference(&self) -> bool {
        self.id.is_none()
            && self.code.is_none()
            && self.message.is_none()
            && self.description.is_none()
    }
}

/// One node of the command tree.
///
/// A command is either a branch (non-empty `subcommands`) or a leaf with
/// local `parameters`/`exit` lists — never both. Children are owned
/// directly; traversal is strictly top-down.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Command {
    /// Identifier, unique across the whole tree when present.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Child commands, wire field `commands`.
    #[serde(rename = "commands", skip_serializing_if = "Option::is_none")]
    pub subcommands: Option<Vec<Command>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameters: Option<Vec<Parameter>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exit: Option<Vec<Exit>>,
}

impl Command {
    /// Creates a leaf command with a name and description.
    pub fn named(name: &str, description: &str) -> Self {
        Self {
            name: Some(name.to_string()),
            description: Some(description.to_string()),
            ..Self::default()
        }
    }
}

/// A complete CLI specification document.
///
/// Owns the shared definition pools and the root command list. Lives only
/// for the duration of one validation call; validation never mutates it.
///
/// # Examples
///
/// ```
/// use clispec_core::Specification;
///
/// let document: Specification = serde_json::from_str(
///     r#"{ "name": "demo", "commands": [{ "name": "run", "description": "Run it" }] }"#,
/// ).unwrap();
/// assert_eq!(document.name.as_deref(), Some("demo"));
/// assert_eq!(document.commands.as_ref().map(Vec::len), Some(1));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Specification {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Shared schema pool.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schemas: Option<Vec<Schema>>,
    /// Shared parameter pool.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameters: Option<Vec<Parameter>>,
    /// Shared exit pool.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exit: Option<Vec<Exit>>,
    /// Root command list.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub commands: Option<Vec<Command>>,
}

/// Returns `true` when an optional string is present but whitespace-only.
pub(crate) fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}
