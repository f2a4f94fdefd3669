//! Loading specification documents from disk.
//!
//! A document is read once into raw bytes plus a format-agnostic JSON
//! value; the typed [`Specification`] is extracted only after the
//! baseline structural check has passed, so shape defects surface as
//! structural violations instead of parse failures.

use std::fs;
use std::path::{Path, PathBuf};

use clispec_core::Specification;
use tracing::debug;

use crate::error::{LoaderError, Result};

/// Supported on-disk document formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Json,
    Yaml,
}

impl DocumentFormat {
    /// Picks the format from a path's extension.
    ///
    /// # Errors
    ///
    /// Returns [`LoaderError::UnsupportedExtension`] for anything other
    /// than `.json`, `.yaml`, or `.yml`.
    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|extension| extension.to_str())
            .unwrap_or_default();
        match extension.to_ascii_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "yaml" | "yml" => Ok(Self::Yaml),
            other => Err(LoaderError::UnsupportedExtension(other.to_string())),
        }
    }
}

/// A specification document read from disk.
///
/// Carries the original raw bytes (for the structural phase) and the
/// parsed document value side by side.
///
/// # Examples
///
/// ```no_run
/// use clispec_loader::LoadedDocument;
///
/// let document = LoadedDocument::from_path("cli.yaml").unwrap();
/// let specification = document.specification().unwrap();
/// println!("linting {:?}", specification.name);
/// ```
#[derive(Debug)]
pub struct LoadedDocument {
    path: PathBuf,
    format: DocumentFormat,
    raw: Vec<u8>,
    value: serde_json::Value,
}

impl LoadedDocument {
    /// Reads and parses the document at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`LoaderError::FileNotFound`] for a missing file,
    /// [`LoaderError::UnsupportedExtension`] for an unknown extension,
    /// and a JSON/YAML error when the bytes are not parsable at all.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(LoaderError::FileNotFound(path.to_path_buf()));
        }
        let format = DocumentFormat::from_path(path)?;
        let raw = fs::read(path)?;
        let value = parse_value(&raw, format)?;
        debug!(path = %path.display(), ?format, bytes = raw.len(), "loaded document");
        Ok(Self {
            path: path.to_path_buf(),
            format,
            raw,
            value,
        })
    }

    /// Path the document was read from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Detected on-disk format.
    pub fn format(&self) -> DocumentFormat {
        self.format
    }

    /// Original raw bytes, as required by the structural phase.
    pub fn raw(&self) -> &[u8] {
        &self.raw
    }

    /// Parsed document value, format-agnostic.
    pub fn value(&self) -> &serde_json::Value {
        &self.value
    }

    /// Extracts the typed specification model.
    ///
    /// Intended to run after the baseline check has passed; a document
    /// that fails to convert at this point is a fatal error, not a
    /// violation.
    pub fn specification(&self) -> Result<Specification> {
        Ok(serde_json::from_value(self.value.clone())?)
    }
}

/// Parses raw document bytes into a JSON value for the given format.
pub(crate) fn parse_value(raw: &[u8], format: DocumentFormat) -> Result<serde_json::Value> {
    match format {
        DocumentFormat::Json => Ok(serde_json::from_slice(raw)?),
        DocumentFormat::Yaml => Ok(serde_yaml::from_slice(raw)?),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_temp(name: &str, content: &str) -> (tempfile::TempDir, PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(name);
        let mut file = fs::File::create(&path).unwrap();
        file.write_all(content.as_bytes()).unwrap();
        (dir, path)
    }

    #[test]
    fn test_loads_json_document() {
        let (_dir, path) = write_temp("cli.json", r#"{ "name": "demo" }"#);
        let document = LoadedDocument::from_path(&path).unwrap();
        assert_eq!(document.format(), DocumentFormat::Json);
        assert_eq!(
            document.specification().unwrap().name.as_deref(),
            Some("demo"),
        );
    }

    #[test]
    fn test_loads_yaml_document() {
        let (_dir, path) = write_temp(
            "cli.yaml",
            "name: demo\ncommands:\n  - name: run\n    description: Run it\n",
        );
        let document = LoadedDocument::from_path(&path).unwrap();
        assert_eq!(document.format(), DocumentFormat::Yaml);
        let specification = document.specification().unwrap();
        assert_eq!(specification.commands.as_ref().map(Vec::len), Some(1));
    }

    #[test]
    fn test_missing_file() {
        let result = LoadedDocument::from_path("/nonexistent/cli.json");
        assert!(matches!(result, Err(LoaderError::FileNotFound(_))));
    }

    #[test]
    fn test_unsupported_extension() {
        let (_dir, path) = write_temp("cli.toml", "name = 'demo'");
        let result = LoadedDocument::from_path(&path);
        assert!(matches!(result, Err(LoaderError::UnsupportedExtension(_))));
    }

    #[test]
    fn test_unparsable_json_is_fatal() {
        let (_dir, path) = write_temp("cli.json", "{ not json");
        let result = LoadedDocument::from_path(&path);
        assert!(matches!(result, Err(LoaderError::Json(_))));
    }

    #[test]
    fn test_shape_mismatch_survives_loading() {
        // wrong types parse fine as a value; the baseline check owns them
        let (_dir, path) = write_temp("cli.json", r#"{ "commands": 42 }"#);
        let document = LoadedDocument::from_path(&path).unwrap();
        assert!(document.value().get("commands").unwrap().is_number());
        assert!(document.specification().is_err());
    }
}
