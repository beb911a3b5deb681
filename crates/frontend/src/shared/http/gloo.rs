use super::errors::TransportError;
use super::{HttpResponse, HttpTransport};
use async_trait::async_trait;
use gloo_net::http::{Request, Response};

/// Browser `fetch` transport
#[derive(Debug, Clone, Copy, Default)]
pub struct GlooTransport;

#[async_trait(?Send)]
impl HttpTransport for GlooTransport {
    async fn get(&self, url: &str) -> Result<HttpResponse, TransportError> {
        let response = Request::get(url)
            .send()
            .await
            .map_err(|e| TransportError::NoResponse(e.to_string()))?;
        read_response(response).await
    }

    async fn post_json(
        &self,
        url: &str,
        body: &serde_json::Value,
    ) -> Result<HttpResponse, TransportError> {
        let response = Request::post(url)
            .json(body)
            .map_err(|e| TransportError::NoResponse(e.to_string()))?
            .send()
            .await
            .map_err(|e| TransportError::NoResponse(e.to_string()))?;
        read_response(response).await
    }
}

async fn read_response(response: Response) -> Result<HttpResponse, TransportError> {
    let status = response.status();
    let status_text = response.status_text();
    // a body that cannot be read means the connection dropped mid-response
    let body = response
        .text()
        .await
        .map_err(|e| TransportError::NoResponse(e.to_string()))?;
    Ok(HttpResponse {
        status,
        status_text,
        body,
    })
}
