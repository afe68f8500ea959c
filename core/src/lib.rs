//! Lightweight HTTP request builder and executor.
//!
//! # Overview
//! A [`RestClient`] accumulates request headers, URL query parameters, and
//! body parameters in three independent [`ParamStore`]s, then issues a single
//! HTTP request and resolves with a normalized [`Outcome`] (body bytes,
//! response info, error). Query items are percent-encoded and appended at
//! execute time; the body is derived from the `Content-Type` header.
//!
//! # Design
//! - `RestClient` is a reusable template — `execute` reads its state and
//!   never mutates it.
//! - Network I/O lives behind the [`Transport`] trait; the default
//!   implementation wraps `reqwest`, and tests substitute scripted
//!   transports.
//! - All failures are carried inside the `Outcome` handed back to the
//!   caller; the core never retries, never logs errors on the caller's
//!   behalf, and never panics across the async boundary.

pub mod client;
pub mod encode;
pub mod error;
pub mod http;
pub mod store;
pub mod transport;

pub use client::{Outcome, ResponseInfo, RestClient};
pub use error::{BoxError, Error};
pub use http::{HttpMethod, RequestDescriptor};
pub use store::ParamStore;
pub use transport::{HttpTransport, RawResponse, Transport, TransportReply};
