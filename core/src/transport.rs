//! The transport seam and its default reqwest implementation.
//!
//! # Design
//! A [`Transport`] performs the actual network I/O for one assembled request
//! and reports back exactly once with a [`TransportReply`]. The reply keeps
//! body, response metadata, and error as independent fields because they are
//! not mutually exclusive: a body read can fail after status and headers have
//! already arrived, and callers want both the error and the partial response.
//!
//! The core imposes no retry, timeout, or redirect policy of its own —
//! whatever the underlying client does is what happens. Each `send` call is
//! one logical session; connection pooling inside the client is its own
//! business.

use async_trait::async_trait;
use tracing::debug;

use crate::error::BoxError;
use crate::http::RequestDescriptor;

/// Uncooked response metadata as seen by the transport.
#[derive(Debug, Clone)]
pub struct RawResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
}

/// The exactly-once value a transport produces for one request.
///
/// Fields are populated independently; check each rather than assuming a
/// success/failure dichotomy.
#[derive(Debug, Default)]
pub struct TransportReply {
    pub body: Option<Vec<u8>>,
    pub response: Option<RawResponse>,
    pub error: Option<BoxError>,
}

/// Asynchronous HTTP transport collaborator.
///
/// Implementations execute the descriptor against the network (or a script,
/// in tests) and resolve exactly once. Errors are reported inside the reply,
/// never panicked or retried.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, request: RequestDescriptor) -> TransportReply;
}

/// Default transport backed by [`reqwest::Client`].
#[derive(Debug, Clone, Default)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap an existing reqwest client, keeping its configuration.
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(&self, request: RequestDescriptor) -> TransportReply {
        debug!(method = %request.method, url = %request.url, "dispatching request");

        let mut builder = self
            .client
            .request(request.method.into(), request.url.clone());
        for (name, value) in &request.headers {
            builder = builder.header(name, value);
        }
        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = match builder.send().await {
            Ok(response) => response,
            Err(err) => {
                debug!(url = %request.url, error = %err, "transport send failed");
                return TransportReply {
                    body: None,
                    response: None,
                    error: Some(Box::new(err)),
                };
            }
        };

        let raw = RawResponse {
            status: response.status().as_u16(),
            headers: response
                .headers()
                .iter()
                .filter_map(|(name, value)| {
                    value
                        .to_str()
                        .ok()
                        .map(|v| (name.to_string(), v.to_string()))
                })
                .collect(),
        };

        match response.bytes().await {
            Ok(bytes) => {
                debug!(url = %request.url, status = raw.status, "request completed");
                TransportReply {
                    body: Some(bytes.to_vec()),
                    response: Some(raw),
                    error: None,
                }
            }
            Err(err) => TransportReply {
                body: None,
                response: Some(raw),
                error: Some(Box::new(err)),
            },
        }
    }
}
