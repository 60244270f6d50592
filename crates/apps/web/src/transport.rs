use foundation::http::{HttpFetch, HttpResponse, TransportError};
use gloo_net::http::Request;

/// Browser fetch backed by gloo-net. One attempt per call; no timeout.
pub struct GlooHttp;

impl HttpFetch for GlooHttp {
    async fn get(&self, url: &str) -> Result<HttpResponse, TransportError> {
        let resp = Request::get(url)
            .send()
            .await
            .map_err(|e| TransportError(e.to_string()))?;
        let status = resp.status();
        // Body text is best-effort; an unreadable body still yields a response.
        let body = resp.text().await.unwrap_or_default();
        Ok(HttpResponse::new(status, body))
    }
}
