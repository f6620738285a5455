//! Blocking HTTP transport for `todo-core` built on ureq.

use std::time::Duration;

use todo_core::{ApiError, HttpMethod, HttpRequest, HttpResponse, Transport};
use ureq::{Agent, RequestBuilder};

/// Executes core requests over real HTTP.
///
/// ureq's status-code-as-error behavior is disabled so 4xx/5xx responses come
/// back as data and the core client interprets them.
#[derive(Clone)]
pub struct UreqTransport {
    agent: Agent,
}

impl UreqTransport {
    pub fn new(timeout: Duration) -> Self {
        let agent = Agent::config_builder()
            .http_status_as_error(false)
            .timeout_global(Some(timeout))
            .build()
            .new_agent();
        Self { agent }
    }
}

impl Default for UreqTransport {
    fn default() -> Self {
        Self::new(Duration::from_secs(10))
    }
}

fn with_headers<B>(mut builder: RequestBuilder<B>, headers: &[(String, String)]) -> RequestBuilder<B> {
    for (key, value) in headers {
        builder = builder.header(key, value);
    }
    builder
}

impl Transport for UreqTransport {
    fn execute(&self, req: HttpRequest) -> Result<HttpResponse, ApiError> {
        tracing::debug!(method = req.method.as_str(), url = %req.path, "sending request");

        let result = match (req.method, req.body) {
            (HttpMethod::Get, _) => with_headers(self.agent.get(&req.path), &req.headers).call(),
            (HttpMethod::Delete, _) => {
                with_headers(self.agent.delete(&req.path), &req.headers).call()
            }
            (HttpMethod::Post, Some(body)) => {
                with_headers(self.agent.post(&req.path), &req.headers).send(body.as_bytes())
            }
            (HttpMethod::Post, None) => {
                with_headers(self.agent.post(&req.path), &req.headers).send_empty()
            }
            (HttpMethod::Put, Some(body)) => {
                with_headers(self.agent.put(&req.path), &req.headers).send(body.as_bytes())
            }
            (HttpMethod::Put, None) => {
                with_headers(self.agent.put(&req.path), &req.headers).send_empty()
            }
        };

        let mut response = result.map_err(|e| {
            tracing::warn!(url = %req.path, error = %e, "request failed");
            ApiError::Transport(e.to_string())
        })?;

        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .filter_map(|(k, v)| Some((k.as_str().to_string(), v.to_str().ok()?.to_string())))
            .collect();
        let body = response
            .body_mut()
            .read_to_string()
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        tracing::debug!(status, "received response");
        Ok(HttpResponse {
            status,
            headers,
            body,
        })
    }
}
