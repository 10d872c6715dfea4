use std::sync::Arc;
use url::Url;

/// Where and how to forward one request.
#[derive(Clone, Debug, PartialEq)]
pub struct RequestConfig {
    /// SDL of the backend schema, when the backend publishes one.
    pub schema: Option<Arc<[u8]>>,
    pub backend_url: Url,

    /// Names of incoming request headers to copy into the
    /// [`InvocationContext`](crate::InvocationContext). Matched
    /// case-insensitively.
    pub add_headers_to_context: Vec<Vec<u8>>,
}

impl RequestConfig {
    pub fn new(backend_url: Url) -> Self {
        Self {
            schema: None,
            backend_url,
            add_headers_to_context: vec![],
        }
    }

    /// Returns `true` if a header named `name` should be copied into the
    /// invocation context.
    pub fn forwards_header(&self, name: &[u8]) -> bool {
        self.add_headers_to_context
            .iter()
            .any(|forwarded| forwarded.eq_ignore_ascii_case(name))
    }
}

/// Resolves the [`RequestConfig`] for an incoming request.
pub trait RequestConfigProvider: Send + Sync {
    fn request_config(&self, request_uri: &[u8]) -> RequestConfig;
}

/// Returns the same config for every request URI.
#[derive(Clone, Debug)]
pub struct StaticRequestConfigProvider {
    config: RequestConfig,
}

impl StaticRequestConfigProvider {
    pub fn new(config: RequestConfig) -> Self {
        Self { config }
    }
}

impl RequestConfigProvider for StaticRequestConfigProvider {
    fn request_config(&self, _request_uri: &[u8]) -> RequestConfig {
        self.config.clone()
    }
}

impl<F> RequestConfigProvider for F
where
    F: Fn(&[u8]) -> RequestConfig + Send + Sync,
{
    fn request_config(&self, request_uri: &[u8]) -> RequestConfig {
        self(request_uri)
    }
}
