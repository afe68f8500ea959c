//! The caller-facing request template and executor.
//!
//! # Design
//! A `RestClient` is a configured-but-reusable request template: three
//! parameter stores plus an optional raw body. `execute` reads that state,
//! runs the augmentation → encoding → assembly pipeline, and dispatches the
//! descriptor through the transport. It takes `&self`, so the stores cannot
//! be mutated while a call is in flight through the same reference — the
//! single-writer/many-reader discipline is compiler-enforced.
//!
//! All failures travel inside the returned [`Outcome`]; nothing is thrown
//! across the async boundary and nothing is retried.

use std::sync::Arc;

use tracing::debug;

use crate::encode::{augment_url, encode_body};
use crate::error::Error;
use crate::http::{HttpMethod, RequestDescriptor};
use crate::store::ParamStore;
use crate::transport::{HttpTransport, RawResponse, Transport, TransportReply};

/// Normalized read-only view of the transport's response.
#[derive(Debug, Clone)]
pub struct ResponseInfo {
    /// HTTP status code, 0 when the underlying response did not carry one.
    pub http_status_code: u16,
    pub headers: ParamStore,
}

impl From<RawResponse> for ResponseInfo {
    fn from(raw: RawResponse) -> Self {
        let mut headers = ParamStore::new();
        for (name, value) in raw.headers {
            headers.add(name, value);
        }
        Self {
            http_status_code: raw.status,
            headers,
        }
    }
}

/// The uniform result of one `execute` call.
///
/// Fields are populated independently: a transport error can arrive together
/// with a partial response. Check each field rather than assuming mutual
/// exclusivity.
#[derive(Debug, Default)]
pub struct Outcome {
    pub data: Option<Vec<u8>>,
    pub response: Option<ResponseInfo>,
    pub error: Option<Error>,
}

impl Outcome {
    fn from_error(error: Error) -> Self {
        Self {
            data: None,
            response: None,
            error: Some(error),
        }
    }

    fn from_reply(reply: TransportReply) -> Self {
        Self {
            data: reply.body,
            response: reply.response.map(ResponseInfo::from),
            error: reply.error.map(Error::from),
        }
    }
}

/// Reusable HTTP request template: headers, query parameters, body
/// parameters, and an optional raw body.
#[derive(Clone)]
pub struct RestClient {
    pub request_headers: ParamStore,
    pub query_parameters: ParamStore,
    pub body_parameters: ParamStore,
    pub raw_body: Option<Vec<u8>>,
    transport: Arc<dyn Transport>,
}

impl Default for RestClient {
    fn default() -> Self {
        Self::new()
    }
}

impl RestClient {
    /// A client dispatching through the default reqwest transport.
    pub fn new() -> Self {
        Self::with_transport(Arc::new(HttpTransport::new()))
    }

    /// A client dispatching through a caller-supplied transport.
    pub fn with_transport(transport: Arc<dyn Transport>) -> Self {
        Self {
            request_headers: ParamStore::new(),
            query_parameters: ParamStore::new(),
            body_parameters: ParamStore::new(),
            raw_body: None,
            transport,
        }
    }

    /// Execute one request against `url` with `method`.
    ///
    /// Reads, never mutates, the client's stores. Resolves exactly once with
    /// an [`Outcome`]; an unusable URL resolves immediately with
    /// [`Error::RequestCreationFailed`] and no network I/O.
    pub async fn execute(&self, url: &str, method: HttpMethod) -> Outcome {
        let target = augment_url(url, &self.query_parameters);
        let body = encode_body(
            &self.request_headers,
            &self.body_parameters,
            self.raw_body.as_deref(),
        );

        let request =
            match RequestDescriptor::assemble(&target, method, &self.request_headers, body) {
                Ok(request) => request,
                Err(err) => {
                    debug!(url = %target, "request assembly failed");
                    return Outcome::from_error(err);
                }
            };

        Outcome::from_reply(self.transport.send(request).await)
    }

    /// Execute off the caller's task and deliver the outcome to `on_complete`.
    ///
    /// Snapshots the client's current state, spawns the pipeline onto the
    /// ambient Tokio runtime, and invokes the callback exactly once from that
    /// worker context. Callers needing a specific execution context must
    /// redispatch themselves. Panics if called outside a Tokio runtime.
    pub fn execute_with<F>(
        &self,
        url: &str,
        method: HttpMethod,
        on_complete: F,
    ) -> tokio::task::JoinHandle<()>
    where
        F: FnOnce(Outcome) + Send + 'static,
    {
        let snapshot = self.clone();
        let url = url.to_string();
        tokio::spawn(async move {
            on_complete(snapshot.execute(&url, method).await);
        })
    }
}
