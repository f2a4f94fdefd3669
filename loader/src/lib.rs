//! Document loading and baseline structural checking for CLI
//! specification documents.
//!
//! This crate sits between the filesystem and the `clispec-core`
//! validation engine:
//!
//! - [`LoadedDocument`] — reads a `.json`/`.yaml`/`.yml` document into
//!   raw bytes plus a format-agnostic value.
//! - [`BaselineCheck`] — the structural pre-check collaborator, backed by
//!   an embedded JSON Schema.
//! - [`lint_document`] — the full two-phase run over a loaded document.
//!
//! # Quick start
//!
//! ```no_run
//! use clispec_loader::{BaselineCheck, LoadedDocument, lint_document};
//!
//! let document = LoadedDocument::from_path("cli.yaml").unwrap();
//! let baseline = BaselineCheck::new().unwrap();
//! let violations = lint_document(&document, &baseline).unwrap();
//! for violation in &violations {
//!     println!("{violation}");
//! }
//! ```

mod baseline;
mod document;
mod error;

use clispec_core::{Violation, lint_semantic};
use tracing::debug;

pub use baseline::BaselineCheck;
pub use document::{DocumentFormat, LoadedDocument};
pub use error::{LoaderError, Result};

/// Lints a loaded document: baseline shape first, semantics second.
///
/// Any structural finding short-circuits the run — a document without
/// the baseline shape cannot be meaningfully semantically validated, and
/// extracting the typed model from it would fail anyway.
///
/// # Errors
///
/// Returns a fatal [`LoaderError`] when the typed model cannot be
/// extracted from a document that passed the baseline check.
pub fn lint_document(
    document: &LoadedDocument,
    baseline: &BaselineCheck,
) -> Result<Vec<Violation>> {
    let findings = baseline.check_value(document.value());
    if !findings.is_empty() {
        debug!(
            count = findings.len(),
            "structural phase failed; skipping semantic phase"
        );
        return Ok(findings);
    }
    let specification = document.specification()?;
    Ok(lint_semantic(&specification))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clispec_core::{Moment, ViolationKind};
    use std::io::Write;
    use std::path::PathBuf;

    fn write_temp(name: &str, content: &str) -> (tempfile::TempDir, PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(name);
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(content.as_bytes()).unwrap();
        (dir, path)
    }

    #[test]
    fn test_lint_document_clean() {
        let (_dir, path) = write_temp(
            "cli.json",
            r#"{
                "name": "demo",
                "commands": [
                    { "name": "run", "description": "Run it" }
                ]
            }"#,
        );
        let document = LoadedDocument::from_path(&path).unwrap();
        let baseline = BaselineCheck::new().unwrap();
        assert!(lint_document(&document, &baseline).unwrap().is_empty());
    }

    #[test]
    fn test_structural_findings_suppress_semantic_ones() {
        // "commands" is mistyped AND the document would also have
        // semantic defects; only the structural finding may surface
        let (_dir, path) = write_temp("cli.json", r#"{ "commands": 42, "exit": [{}] }"#);
        let document = LoadedDocument::from_path(&path).unwrap();
        let baseline = BaselineCheck::new().unwrap();

        let violations = lint_document(&document, &baseline).unwrap();
        assert!(!violations.is_empty());
        assert!(violations.iter().all(|v| v.moment == Moment::Structural));
    }

    #[test]
    fn test_semantic_findings_from_yaml() {
        let (_dir, path) = write_temp(
            "cli.yaml",
            concat!(
                "commands:\n",
                "  - name: run\n",
                "    description: Run it\n",
                "    parameters:\n",
                "      - name: file\n",
                "        description: Input file\n",
                "        in: arguments\n",
                "        schema:\n",
                "          type: string\n",
            ),
        );
        let document = LoadedDocument::from_path(&path).unwrap();
        let baseline = BaselineCheck::new().unwrap();

        let violations = lint_document(&document, &baseline).unwrap();
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].path, "/commands/0/parameters/0/index");
        assert_eq!(violations[0].kind, ViolationKind::RequiredWhenArguments);
    }

    #[test]
    fn test_json_and_yaml_agree() {
        let (_json_dir, json_path) = write_temp(
            "cli.json",
            r#"{ "commands": [ { "name": "run", "description": "Run it", "parameters": [
                { "name": "file", "description": "Input", "in": "arguments",
                  "index": 0, "short-form": "f", "schema": { "type": "string" } }
            ]}]}"#,
        );
        let (_yaml_dir, yaml_path) = write_temp(
            "cli.yaml",
            concat!(
                "commands:\n",
                "  - name: run\n",
                "    description: Run it\n",
                "    parameters:\n",
                "      - name: file\n",
                "        description: Input\n",
                "        in: arguments\n",
                "        index: 0\n",
                "        short-form: f\n",
                "        schema:\n",
                "          type: string\n",
            ),
        );
        let baseline = BaselineCheck::new().unwrap();
        let from_json = lint_document(&LoadedDocument::from_path(&json_path).unwrap(), &baseline)
            .unwrap();
        let from_yaml = lint_document(&LoadedDocument::from_path(&yaml_path).unwrap(), &baseline)
            .unwrap();
        assert_eq!(from_json, from_yaml);
        assert_eq!(from_json.len(), 1);
        assert_eq!(from_json[0].kind, ViolationKind::FieldNotAllowed);
    }

    #[test]
    fn test_lint_document_is_idempotent() {
        let (_dir, path) = write_temp(
            "cli.json",
            r#"{ "exit": [ {}, { "id": "ok", "code": 0, "message": "done" } ] }"#,
        );
        let document = LoadedDocument::from_path(&path).unwrap();
        let baseline = BaselineCheck::new().unwrap();

        let first = lint_document(&document, &baseline).unwrap();
        let second = lint_document(&document, &baseline).unwrap();
        assert_eq!(first, second);
        assert!(!first.is_empty());
    }
}
