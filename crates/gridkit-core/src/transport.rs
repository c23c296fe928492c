use crate::{async_trait, Json, Result};

use std::fmt::Debug;

/// HTTP method of a request issued through a [`Transport`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
    Patch,
    Put,
    Delete,
}

impl Method {
    pub fn as_str(self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Patch => "PATCH",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        }
    }
}

impl core::fmt::Display for Method {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sends requests to the remote API.
///
/// Implementations own everything about the connection: base URL,
/// authentication headers, TLS, retries. Paths handed to the transport are
/// relative and already carry their query string.
#[async_trait]
pub trait Transport: Debug + Send + Sync + 'static {
    /// Issues one request and returns the decoded JSON response body.
    ///
    /// An `{error: ...}` body may be returned as `Ok`; callers turn it into
    /// an API error.
    async fn request(&self, method: Method, path: &str, body: Option<Json>) -> Result<Json>;
}
