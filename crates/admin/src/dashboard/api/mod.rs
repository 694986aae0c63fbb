//! Catalog mutation API GraphQL client.
//!
//! This module provides a type-safe client for the catalog API. Requests
//! authenticate with a staff token sent as a bearer token.

use std::sync::Arc;

use graphql_client::{GraphQLQuery, QueryBody};
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderValue};
use reqwest::multipart::{Form, Part};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use tracing::{debug, instrument};
use url::Url;

use crate::config::ApiConfig;

use super::{ApiError, GraphQLError, GraphQLErrorLocation, types::ImageFile};

mod media;
mod metadata;
pub mod mutations;
mod products;

/// Catalog mutation API GraphQL client.
///
/// Cheap to clone; clones share one connection pool.
///
/// # Security
///
/// This client carries a staff token with catalog write access.
#[derive(Clone)]
pub struct DashboardClient {
    inner: Arc<DashboardClientInner>,
}

struct DashboardClientInner {
    client: reqwest::Client,
    endpoint: Url,
    token: SecretString,
}

impl std::fmt::Debug for DashboardClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DashboardClient")
            .field("endpoint", &self.inner.endpoint.as_str())
            .finish_non_exhaustive()
    }
}

/// GraphQL response wrapper.
#[derive(Debug, Deserialize)]
struct GraphQLResponse<T> {
    data: Option<T>,
    errors: Option<Vec<GraphQLErrorResponse>>,
}

#[derive(Debug, Deserialize)]
struct GraphQLErrorResponse {
    message: String,
    #[serde(default)]
    locations: Vec<GraphQLErrorLocationResponse>,
    #[serde(default)]
    path: Vec<serde_json::Value>,
}

#[derive(Debug, Deserialize)]
struct GraphQLErrorLocationResponse {
    line: i64,
    column: i64,
}

impl DashboardClient {
    /// Create a new API client.
    ///
    /// # Arguments
    ///
    /// * `config` - Catalog API configuration
    #[must_use]
    pub fn new(config: &ApiConfig) -> Self {
        Self::with_client(reqwest::Client::new(), config)
    }

    /// Create a client on top of an existing `reqwest::Client`.
    #[must_use]
    pub fn with_client(client: reqwest::Client, config: &ApiConfig) -> Self {
        Self {
            inner: Arc::new(DashboardClientInner {
                client,
                endpoint: config.url.clone(),
                token: config.token.clone(),
            }),
        }
    }

    /// Get the GraphQL endpoint.
    #[must_use]
    pub fn endpoint(&self) -> &Url {
        &self.inner.endpoint
    }

    fn authorization(&self) -> Result<HeaderValue, ApiError> {
        let mut value =
            HeaderValue::from_str(&format!("Bearer {}", self.inner.token.expose_secret()))
                .map_err(|_| {
                    ApiError::Unauthorized("Access token contains invalid characters".to_string())
                })?;
        value.set_sensitive(true);
        Ok(value)
    }

    /// Execute a GraphQL operation.
    #[instrument(skip(self, variables), fields(operation))]
    async fn execute<Q: GraphQLQuery>(
        &self,
        variables: Q::Variables,
    ) -> Result<Q::ResponseData, ApiError>
    where
        Q::ResponseData: DeserializeOwned,
    {
        let body = Q::build_query(variables);
        tracing::Span::current().record("operation", body.operation_name);

        let response = self
            .inner
            .client
            .post(self.inner.endpoint.clone())
            .header(AUTHORIZATION, self.authorization()?)
            .header(CONTENT_TYPE, "application/json")
            .json(&body)
            .send()
            .await?;

        Self::read_response(response).await
    }

    /// Execute a GraphQL operation with one file attached, following the
    /// GraphQL multipart request format: `operations` holds the query body
    /// with a `null` placeholder, `map` points file part `0` at it.
    #[instrument(skip(self, variables, file), fields(operation, file_name = %file.file_name))]
    async fn execute_upload<Q: GraphQLQuery>(
        &self,
        variables: Q::Variables,
        file: ImageFile,
        variable_path: &str,
    ) -> Result<Q::ResponseData, ApiError>
    where
        Q::ResponseData: DeserializeOwned,
    {
        let body = Q::build_query(variables);
        tracing::Span::current().record("operation", body.operation_name);

        let form = upload_form(&body, file, variable_path)?;

        let response = self
            .inner
            .client
            .post(self.inner.endpoint.clone())
            .header(AUTHORIZATION, self.authorization()?)
            .multipart(form)
            .send()
            .await?;

        Self::read_response(response).await
    }

    async fn read_response<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ApiError> {
        if response.status() == reqwest::StatusCode::TOO_MANY_REQUESTS {
            let retry_after = response
                .headers()
                .get("Retry-After")
                .and_then(|v| v.to_str().ok())
                .and_then(|s| s.parse().ok())
                .unwrap_or(60);
            return Err(ApiError::RateLimited(retry_after));
        }

        if response.status() == reqwest::StatusCode::UNAUTHORIZED {
            return Err(ApiError::Unauthorized(
                "Invalid or expired access token".to_string(),
            ));
        }

        let text = response.error_for_status()?.text().await?;
        let graphql_response: GraphQLResponse<T> = serde_json::from_str(&text)?;
        into_data(graphql_response)
    }
}

/// Build the multipart form for a single-file upload.
fn upload_form<V: Serialize>(
    body: &QueryBody<V>,
    file: ImageFile,
    variable_path: &str,
) -> Result<Form, ApiError> {
    let operations = serde_json::to_string(body)?;
    let map = serde_json::json!({ "0": [variable_path] }).to_string();

    let ImageFile {
        file_name,
        content_type,
        bytes,
    } = file;
    debug!(file_name = %file_name, len = bytes.len(), "Attaching upload");

    let mut part = Part::bytes(bytes).file_name(file_name);
    if let Some(content_type) = content_type {
        part = part.mime_str(&content_type)?;
    }

    Ok(Form::new()
        .text("operations", operations)
        .text("map", map)
        .part("0", part))
}

/// Turn a GraphQL response into its data, surfacing top-level errors.
fn into_data<T>(response: GraphQLResponse<T>) -> Result<T, ApiError> {
    if let Some(errors) = response.errors
        && !errors.is_empty()
    {
        let converted_errors: Vec<GraphQLError> = errors
            .into_iter()
            .map(|e| GraphQLError {
                message: e.message,
                locations: e
                    .locations
                    .into_iter()
                    .map(|l| GraphQLErrorLocation {
                        line: l.line,
                        column: l.column,
                    })
                    .collect(),
                path: e.path,
            })
            .collect();
        return Err(ApiError::GraphQL(converted_errors));
    }

    response
        .data
        .ok_or_else(|| ApiError::graphql("No data in response"))
}

/// Require a mutation payload; a `null` payload means the mutation did not run.
fn payload_errors(
    payload: Option<super::ErrorsPayload>,
    mutation: &str,
) -> Result<Vec<super::MutationError>, ApiError> {
    payload
        .map(|p| p.errors)
        .ok_or_else(|| ApiError::graphql(format!("{mutation} returned no payload")))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize)]
    struct Data {
        ok: bool,
    }

    #[test]
    fn test_into_data_success() {
        let response: GraphQLResponse<Data> =
            serde_json::from_str(r#"{"data": {"ok": true}}"#).unwrap();
        assert!(into_data(response).unwrap().ok);
    }

    #[test]
    fn test_into_data_graphql_errors() {
        let response: GraphQLResponse<Data> = serde_json::from_str(
            r#"{"data": null, "errors": [{"message": "Unknown argument", "locations": [{"line": 2, "column": 5}]}]}"#,
        )
        .unwrap();

        let err = into_data(response).unwrap_err();
        assert_eq!(err.to_string(), "GraphQL errors: Unknown argument");
    }

    #[test]
    fn test_into_data_missing_data() {
        let response: GraphQLResponse<Data> = serde_json::from_str(r"{}").unwrap();
        let err = into_data(response).unwrap_err();
        assert_eq!(err.to_string(), "GraphQL errors: No data in response");
    }

    #[test]
    fn test_payload_errors_requires_payload() {
        let err = payload_errors(None, "productUpdate").unwrap_err();
        assert_eq!(
            err.to_string(),
            "GraphQL errors: productUpdate returned no payload"
        );

        let errors = payload_errors(Some(super::super::ErrorsPayload::default()), "x").unwrap();
        assert!(errors.is_empty());
    }

    #[test]
    fn test_client_debug_hides_token() {
        let config = ApiConfig {
            url: Url::parse("https://shop.test/graphql/").unwrap(),
            token: SecretString::from("staff-token-value"),
        };
        let client = DashboardClient::new(&config);

        let debug_output = format!("{client:?}");
        assert!(debug_output.contains("https://shop.test/graphql/"));
        assert!(!debug_output.contains("staff-token-value"));
    }
}
