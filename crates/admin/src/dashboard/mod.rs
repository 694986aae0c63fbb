//! Catalog mutation API client (HIGH PRIVILEGE).
//!
//! # Security
//!
//! **CRITICAL: This module holds the staff access token.**
//!
//! The token grants write access to products, variants, stock levels and
//! product media. Never log it; `ApiConfig` redacts it from `Debug` output.
//!
//! # Architecture
//!
//! - Mutation documents implement `graphql_client::GraphQLQuery` so every
//!   operation has typed variables and response data
//! - Requests are plain JSON POSTs made with `reqwest`; image uploads use the
//!   GraphQL multipart request format
//! - Per-mutation user errors are returned as data, never as `Err`
//!
//! # Example
//!
//! ```rust,ignore
//! use catalog_console_admin::dashboard::DashboardClient;
//! use catalog_console_admin::products::ProductUpdateApi;
//!
//! let client = DashboardClient::new(&config.api);
//! let result = client.update_product(variables).await?;
//! if !result.errors.is_empty() {
//!     // show the errors next to the form fields
//! }
//! ```

mod api;
pub mod types;

pub use api::DashboardClient;
pub use api::mutations;
pub use types::*;

use thiserror::Error;

/// Errors that can occur when talking to the catalog mutation API.
///
/// These are transport and protocol failures. Validation failures reported
/// by an individual mutation are [`MutationError`]s and travel as data.
#[derive(Debug, Error)]
pub enum ApiError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// GraphQL request returned top-level errors.
    #[error("GraphQL errors: {}", format_graphql_errors(.0))]
    GraphQL(Vec<GraphQLError>),

    /// JSON encoding or parsing failed.
    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// Rate limited by the API.
    #[error("Rate limited, retry after {0} seconds")]
    RateLimited(u64),

    /// Authentication/authorization failed.
    #[error("Unauthorized: {0}")]
    Unauthorized(String),
}

impl ApiError {
    /// Build a single-message GraphQL error.
    #[must_use]
    pub fn graphql(message: impl Into<String>) -> Self {
        Self::GraphQL(vec![GraphQLError {
            message: message.into(),
            locations: vec![],
            path: vec![],
        }])
    }
}

/// A top-level GraphQL error returned by the API.
#[derive(Debug, Clone)]
pub struct GraphQLError {
    /// Error message.
    pub message: String,
    /// Source locations in the query.
    pub locations: Vec<GraphQLErrorLocation>,
    /// Path to the error in the response.
    pub path: Vec<serde_json::Value>,
}

/// Location in a GraphQL document where an error occurred.
#[derive(Debug, Clone)]
pub struct GraphQLErrorLocation {
    /// Line number (1-indexed).
    pub line: i64,
    /// Column number (1-indexed).
    pub column: i64,
}

fn format_graphql_errors(errors: &[GraphQLError]) -> String {
    errors
        .iter()
        .map(|e| e.message.clone())
        .collect::<Vec<_>>()
        .join("; ")
}

/// Join mutation errors into one line for logs.
#[must_use]
pub fn format_mutation_errors(errors: &[MutationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_graphql_error_formatting() {
        let errors = vec![
            GraphQLError {
                message: "Field not found".to_string(),
                locations: vec![],
                path: vec![],
            },
            GraphQLError {
                message: "Invalid ID".to_string(),
                locations: vec![],
                path: vec![],
            },
        ];
        let err = ApiError::GraphQL(errors);
        assert_eq!(
            err.to_string(),
            "GraphQL errors: Field not found; Invalid ID"
        );
    }

    #[test]
    fn test_single_message_graphql_error() {
        let err = ApiError::graphql("No data in response");
        assert_eq!(err.to_string(), "GraphQL errors: No data in response");
    }

    #[test]
    fn test_rate_limited_error() {
        let err = ApiError::RateLimited(60);
        assert_eq!(err.to_string(), "Rate limited, retry after 60 seconds");
    }

    #[test]
    fn test_unauthorized_error() {
        let err = ApiError::Unauthorized("Invalid token".to_string());
        assert_eq!(err.to_string(), "Unauthorized: Invalid token");
    }

    #[test]
    fn test_format_mutation_errors() {
        let errors = vec![
            MutationError::new(Some("sku"), Some("UNIQUE"), Some("SKU already exists")),
            MutationError::new(None, Some("REQUIRED"), None),
        ];
        assert_eq!(
            format_mutation_errors(&errors),
            "sku: SKU already exists; REQUIRED"
        );
    }
}
