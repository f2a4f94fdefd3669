//! Baseline structural pre-check.
//!
//! The baseline is a fixed JSON Schema, embedded at build time, that
//! pins the document's *shape*: which fields are containers, which are
//! scalars, and which enum literals exist on the wire. Every semantic
//! rule (required fields, cross-field invariants, reference resolution)
//! stays in `clispec-core`; the two layers never overlap.

use clispec_core::{LintError, StructuralCheck, Violation};
use tracing::debug;

use crate::document::{DocumentFormat, parse_value};
use crate::error::{LoaderError, Result};

const BASELINE_SCHEMA: &str = include_str!("baseline.json");

/// Compiled baseline validator.
///
/// Compile once, check many documents.
///
/// # Examples
///
/// ```
/// use clispec_loader::BaselineCheck;
///
/// let baseline = BaselineCheck::new().unwrap();
/// let document = serde_json::json!({ "commands": 42 });
/// let findings = baseline.check_value(&document);
/// assert_eq!(findings.len(), 1);
/// assert_eq!(findings[0].path, "/commands");
/// ```
pub struct BaselineCheck {
    validator: jsonschema::Validator,
}

impl BaselineCheck {
    /// Compiles the embedded baseline schema.
    ///
    /// # Errors
    ///
    /// Returns [`LoaderError::InvalidBaseline`] when the embedded schema
    /// does not compile — an internal defect, never the document's fault.
    pub fn new() -> Result<Self> {
        let schema: serde_json::Value = serde_json::from_str(BASELINE_SCHEMA)?;
        let validator = jsonschema::validator_for(&schema)
            .map_err(|err| LoaderError::InvalidBaseline(err.to_string()))?;
        Ok(Self { validator })
    }

    /// Checks an already-parsed document value against the baseline.
    pub fn check_value(&self, value: &serde_json::Value) -> Vec<Violation> {
        let findings: Vec<Violation> = self
            .validator
            .iter_errors(value)
            .map(|error| Violation::structural(error.instance_path.to_string(), error.to_string()))
            .collect();
        if !findings.is_empty() {
            debug!(count = findings.len(), "baseline shape check failed");
        }
        findings
    }
}

impl StructuralCheck for BaselineCheck {
    fn validate(&self, raw: &[u8]) -> std::result::Result<Vec<Violation>, LintError> {
        let value = parse_raw(raw).map_err(LintError::structural)?;
        Ok(self.check_value(&value))
    }
}

/// Parses raw bytes without knowing their origin: JSON first, YAML as the
/// fallback.
fn parse_raw(raw: &[u8]) -> Result<serde_json::Value> {
    match parse_value(raw, DocumentFormat::Json) {
        Ok(value) => Ok(value),
        Err(_) => parse_value(raw, DocumentFormat::Yaml),
    }
}
