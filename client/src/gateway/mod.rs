//! Fetch gateway
//!
//! Thin async functions over the REST API. Each operation issues exactly one
//! request. On a success status it decodes the body, applies the matching
//! store transition and returns the entity. On any other status it decodes
//! the `{errors}` body and returns `ApiOutcome::Rejected` without touching
//! the store. Transport failures come back as `Err(ClientError)`. There are
//! no retries, timeouts or backoff.
//!
//! Transitions apply in response arrival order. A slow detail response for a
//! page the user already left can overwrite a newer one; only the debounced
//! browse fetch guards against that.

mod businesses;
mod reviews;
mod session;

use reqwest::{Client, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use shared::ApiErrors;

use crate::error::{ApiOutcome, ClientResult};
use crate::store::Store;

/// REST gateway bound to one store instance
#[derive(Clone, Debug)]
pub struct Gateway {
    client: Client,
    base_url: String,
    store: Store,
}

impl Gateway {
    /// Create a gateway for `base_url`, e.g. `http://localhost:8000`
    pub fn new(base_url: impl Into<String>, store: Store) -> ClientResult<Self> {
        // Session auth rides on cookies, as it does in the browser
        let client = Client::builder().cookie_store(true).build()?;
        Ok(Self::with_client(client, base_url, store))
    }

    /// Create a gateway around an existing HTTP client (for testing)
    pub fn with_client(client: Client, base_url: impl Into<String>, store: Store) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            store,
        }
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Send and decode a JSON entity on success
    async fn execute<T: DeserializeOwned>(
        &self,
        operation: &'static str,
        request: RequestBuilder,
    ) -> ClientResult<ApiOutcome<T>> {
        let (status, body) = self.send(operation, request).await?;
        if !status.is_success() {
            return Ok(ApiOutcome::Rejected(rejected(operation, status, &body)));
        }

        let value = serde_json::from_slice::<T>(&body).map_err(|e| {
            tracing::error!(operation, error = %e, "response body did not match schema");
            e
        })?;
        tracing::info!(operation, status = status.as_u16(), "request succeeded");
        Ok(ApiOutcome::Success(value))
    }

    /// Send and ignore the success body (deletes)
    async fn execute_empty(
        &self,
        operation: &'static str,
        request: RequestBuilder,
    ) -> ClientResult<ApiOutcome<()>> {
        let (status, body) = self.send(operation, request).await?;
        if !status.is_success() {
            return Ok(ApiOutcome::Rejected(rejected(operation, status, &body)));
        }

        tracing::info!(operation, status = status.as_u16(), "request succeeded");
        Ok(ApiOutcome::Success(()))
    }

    async fn send(
        &self,
        operation: &'static str,
        request: RequestBuilder,
    ) -> ClientResult<(StatusCode, Vec<u8>)> {
        let response = request.send().await.map_err(|e| {
            tracing::error!(operation, error = %e, "request failed without a response");
            e
        })?;
        let status = response.status();
        let body = response.bytes().await?.to_vec();
        Ok((status, body))
    }
}

fn rejected(operation: &'static str, status: StatusCode, body: &[u8]) -> ApiErrors {
    let errors = ApiErrors::from_response_body(body);
    tracing::warn!(operation, status = status.as_u16(), errors = %errors, "request rejected");
    errors
}
