//! Request descriptor and method types.
//!
//! # Design
//! `RequestDescriptor` is the immutable product of the assembly stage: target
//! URL, method, a snapshot of every header entry, and the encoded body. It is
//! built once per execute call, handed to the transport by value, and
//! discarded. Fields use owned types so descriptors can move into spawned
//! tasks without lifetime concerns.

use std::collections::HashMap;
use std::fmt;

use url::Url;

use crate::error::Error;
use crate::store::ParamStore;

/// HTTP method for a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let verb = match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Patch => "PATCH",
            HttpMethod::Delete => "DELETE",
        };
        f.write_str(verb)
    }
}

impl From<HttpMethod> for reqwest::Method {
    fn from(method: HttpMethod) -> Self {
        match method {
            HttpMethod::Get => reqwest::Method::GET,
            HttpMethod::Post => reqwest::Method::POST,
            HttpMethod::Put => reqwest::Method::PUT,
            HttpMethod::Patch => reqwest::Method::PATCH,
            HttpMethod::Delete => reqwest::Method::DELETE,
        }
    }
}

/// An assembled, immutable request ready for the transport.
#[derive(Debug, Clone)]
pub struct RequestDescriptor {
    pub url: Url,
    pub method: HttpMethod,
    pub headers: HashMap<String, String>,
    pub body: Option<Vec<u8>>,
}

impl RequestDescriptor {
    /// Bind a target URL, method, header snapshot, and encoded body into a
    /// descriptor.
    ///
    /// The URL arrives as a string because the augmentation stage degrades
    /// silently to the original text on parse failure; assembly is where an
    /// unusable URL finally becomes [`Error::RequestCreationFailed`].
    pub fn assemble(
        url: &str,
        method: HttpMethod,
        headers: &ParamStore,
        body: Option<Vec<u8>>,
    ) -> Result<Self, Error> {
        let url = Url::parse(url).map_err(|_| Error::RequestCreationFailed)?;
        Ok(Self {
            url,
            method,
            headers: headers.all_entries(),
            body,
        })
    }
}
