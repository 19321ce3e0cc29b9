//! Error types and handling for Confplan
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.

use miette::Diagnostic;
use thiserror::Error;

use crate::catalog::Category;

/// Main error type for Confplan operations
#[derive(Error, Diagnostic, Debug)]
pub enum ConfplanError {
    // Session errors
    #[error("No {category} item at index {index} (collection has {len} items)")]
    #[diagnostic(code(confplan::session::index_out_of_range))]
    IndexOutOfRange {
        category: Category,
        index: usize,
        len: usize,
    },

    // Catalog errors
    #[error("No {category} item named '{name}' in the catalog")]
    #[diagnostic(
        code(confplan::catalog::item_not_found),
        help("Run 'confplan catalog' to see available items and their exact names")
    )]
    ItemNotFound { category: Category, name: String },

    #[error("Catalog file not found: {path}")]
    #[diagnostic(code(confplan::catalog::not_found))]
    CatalogNotFound { path: String },

    #[error("Failed to read catalog file: {path} ({reason})")]
    #[diagnostic(code(confplan::catalog::read_failed))]
    CatalogReadFailed { path: String, reason: String },

    #[error("Failed to parse catalog file: {path} ({reason})")]
    #[diagnostic(code(confplan::catalog::parse_failed))]
    CatalogParseFailed { path: String, reason: String },

    #[error("Invalid catalog: {message}")]
    #[diagnostic(code(confplan::catalog::invalid))]
    CatalogInvalid { message: String },

    #[error("Unsupported catalog format: {path}")]
    #[diagnostic(
        code(confplan::catalog::unsupported_format),
        help("Supported catalog formats: .yaml, .yml, .json")
    )]
    UnsupportedCatalogFormat { path: String },

    // CLI errors
    #[error("Invalid selection '{spec}'")]
    #[diagnostic(
        code(confplan::cli::invalid_selection_spec),
        help("Use NAME or NAME=QUANTITY, e.g. --venue 'Auditorium Hall (Capacity:200)=2'")
    )]
    InvalidSelectionSpec { spec: String },

    // I/O errors
    #[error("IO error: {message}")]
    #[diagnostic(code(confplan::io_error))]
    IoError { message: String },
}

impl From<std::io::Error> for ConfplanError {
    fn from(err: std::io::Error) -> Self {
        ConfplanError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<serde_yaml::Error> for ConfplanError {
    fn from(err: serde_yaml::Error) -> Self {
        ConfplanError::CatalogParseFailed {
            path: "unknown".to_string(),
            reason: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for ConfplanError {
    fn from(err: serde_json::Error) -> Self {
        ConfplanError::CatalogParseFailed {
            path: "unknown".to_string(),
            reason: err.to_string(),
        }
    }
}

impl From<inquire::InquireError> for ConfplanError {
    fn from(err: inquire::InquireError) -> Self {
        ConfplanError::IoError {
            message: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, ConfplanError>;
