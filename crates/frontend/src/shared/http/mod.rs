//! HTTP plumbing between the console views and the backend monitoring service.
//!
//! Views talk to a [`HttpTransport`] so the request logic runs the same against
//! the browser `fetch` API and against the in-memory transport used in tests.

pub mod errors;
mod gloo;

#[cfg(test)]
pub mod mock;

pub use errors::{ActionError, HttpError, TransportError};
pub use gloo::GlooTransport;

use async_trait::async_trait;
use contracts::jvm::heap_dump::ActionFailure;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// Raw response as handed back by a transport
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub status_text: String,
    pub body: String,
}

impl HttpResponse {
    pub fn ok(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[async_trait(?Send)]
pub trait HttpTransport {
    async fn get(&self, url: &str) -> Result<HttpResponse, TransportError>;

    async fn post_json(
        &self,
        url: &str,
        body: &serde_json::Value,
    ) -> Result<HttpResponse, TransportError>;
}

/// GET `url` and decode a JSON body
pub async fn get_json<T, H>(transport: &H, url: &str) -> Result<T, HttpError>
where
    T: DeserializeOwned,
    H: HttpTransport + ?Sized,
{
    let response = transport.get(url).await.map_err(|e| {
        log::warn!("GET {} failed: {}", url, e);
        HttpError::from(e)
    })?;
    let response = expect_success("GET", url, response)?;
    serde_json::from_str(&response.body).map_err(|e| {
        log::error!("GET {}: failed to parse response: {}", url, e);
        HttpError::Decode(e.to_string())
    })
}

/// POST a JSON body to an action endpoint
///
/// A 2xx response whose body carries a non-empty `error` field is a domain
/// failure and comes back as [`ActionError::Domain`].
pub async fn post_action<B, T, H>(transport: &H, url: &str, body: &B) -> Result<T, ActionError>
where
    B: Serialize,
    T: DeserializeOwned,
    H: HttpTransport + ?Sized,
{
    let body = serde_json::to_value(body).map_err(|e| HttpError::Decode(e.to_string()))?;
    let response = transport.post_json(url, &body).await.map_err(|e| {
        log::warn!("POST {} failed: {}", url, e);
        HttpError::from(e)
    })?;
    let response = expect_success("POST", url, response)?;

    let value: serde_json::Value = serde_json::from_str(&response.body).map_err(|e| {
        log::error!("POST {}: failed to parse response: {}", url, e);
        HttpError::Decode(e.to_string())
    })?;
    let failure = ActionFailure::deserialize(&value).unwrap_or_default();
    if let Some(message) = failure.message() {
        log::info!("POST {} rejected by server: {}", url, message);
        return Err(ActionError::Domain(message));
    }
    serde_json::from_value(value).map_err(|e| ActionError::from(HttpError::Decode(e.to_string())))
}

fn expect_success(method: &str, url: &str, response: HttpResponse) -> Result<HttpResponse, HttpError> {
    if response.ok() {
        return Ok(response);
    }
    log::warn!(
        "{} {}: unexpected HTTP status code returned: {} ({})",
        method,
        url,
        response.status,
        response.status_text
    );
    Err(HttpError::Status {
        status: response.status,
        message: errors::server_message(&response.body),
    })
}
