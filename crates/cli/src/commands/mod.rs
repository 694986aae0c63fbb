//! Subcommand implementations.

pub mod images;
pub mod product;

use std::path::{Path, PathBuf};

use catalog_console_admin::dashboard::{MutationError, format_mutation_errors};
use catalog_console_admin::error::HandlerError;
use serde::de::DeserializeOwned;
use thiserror::Error;

/// Errors that end a CLI run.
#[derive(Debug, Error)]
pub enum CliError {
    /// Input file could not be read.
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Input file is not valid JSON for the expected shape.
    #[error("Invalid JSON in {}: {source}", path.display())]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },

    /// Handler rejected the input or the API call failed.
    #[error(transparent)]
    Handler(#[from] HandlerError),

    /// The API accepted the request but reported mutation errors.
    #[error("{operation} reported errors: {errors}")]
    Mutation {
        operation: &'static str,
        errors: String,
    },
}

/// Read a whole file.
pub fn read_file(path: &Path) -> Result<Vec<u8>, CliError> {
    std::fs::read(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Read and deserialize a JSON file.
pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, CliError> {
    let bytes = read_file(path)?;
    serde_json::from_slice(&bytes).map_err(|source| CliError::Json {
        path: path.to_path_buf(),
        source,
    })
}

/// Turn reported mutation errors into a failure.
pub fn ensure_clean(operation: &'static str, errors: &[MutationError]) -> Result<(), CliError> {
    if errors.is_empty() {
        return Ok(());
    }

    for error in errors {
        tracing::warn!(operation, field = ?error.field, code = ?error.code, "{error}");
    }
    Err(CliError::Mutation {
        operation,
        errors: format_mutation_errors(errors),
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::io::Write;

    use catalog_console_admin::products::ProductDetails;

    use super::*;

    #[test]
    fn test_read_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"id": "UHJvZHVjdDox", "hasVariants": true}}"#).unwrap();

        let product: ProductDetails = read_json(file.path()).unwrap();
        assert_eq!(product.id.as_str(), "UHJvZHVjdDox");
        assert!(product.has_variants);
    }

    #[test]
    fn test_read_json_reports_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();

        let err = read_json::<ProductDetails>(file.path()).unwrap_err();
        assert!(matches!(err, CliError::Json { .. }));
        assert!(err.to_string().contains(&file.path().display().to_string()));
    }

    #[test]
    fn test_read_missing_file() {
        let err = read_file(Path::new("/nonexistent/catalog-cli/product.json")).unwrap_err();
        assert!(matches!(err, CliError::Io { .. }));
    }

    #[test]
    fn test_ensure_clean() {
        assert!(ensure_clean("ProductUpdate", &[]).is_ok());

        let errors = [MutationError::new(Some("slug"), Some("UNIQUE"), None)];
        let err = ensure_clean("ProductUpdate", &errors).unwrap_err();
        assert_eq!(err.to_string(), "ProductUpdate reported errors: slug: UNIQUE");
    }
}
